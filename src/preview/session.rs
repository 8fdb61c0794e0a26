use std::fmt;
use std::sync::Arc;
use font_kit::font::Font;
use font_kit::handle::Handle;
use log::{debug, info, warn};
use crate::error::{Error, Result};
use crate::font::extract_metadata;
use crate::models::{FontMetadata, FontSource};
use super::registry::{FontRegistry, RegistrationHandle, RegistryError};

/// A font that can be referenced by PostScript name for rendering
#[derive(Debug, Clone)]
pub struct RenderableFontHandle {
    postscript_name: String,
    data: Arc<Vec<u8>>,
}

impl RenderableFontHandle {
    pub fn postscript_name(&self) -> &str {
        &self.postscript_name
    }

    /// font-kit handle over the in-memory font data
    pub fn font_handle(&self) -> Handle {
        Handle::from_memory(Arc::clone(&self.data), 0)
    }

    /// Load the font for rendering
    pub fn load_font(&self) -> Result<Font> {
        self.font_handle().load().map_err(|e| Error::RegistrationFailed {
            font_name: self.postscript_name.clone(),
            reason: e.to_string(),
        })
    }
}

/// Loads fonts for preview against an injected registry
#[derive(Debug, Clone)]
pub struct PreviewLoader<R: FontRegistry> {
    registry: R,
}

impl<R: FontRegistry> PreviewLoader<R> {
    pub fn new(registry: R) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &R {
        &self.registry
    }

    /// Read, parse and register a font for the lifetime of the returned session
    pub fn load(&self, source: &FontSource) -> Result<PreviewSession<'_, R>> {
        let file_name = source.file_name();
        let data = source.read().map_err(|e| Error::ReadFailed {
            source_name: file_name.clone(),
            source: e,
        })?;

        let metadata = extract_metadata(&data, &file_name)?;
        if !metadata.is_addressable() {
            return Err(Error::RegistrationFailed {
                font_name: file_name,
                reason: "font has no PostScript name".to_string(),
            });
        }

        let registration = match self.registry.register(&metadata.postscript_name, Arc::clone(&data)) {
            Ok(handle) => Some(handle),
            Err(RegistryError::AlreadyRegistered(name)) => {
                debug!("{} already registered, reusing it", name);
                None
            }
            Err(e) => {
                warn!("{}; referencing the font by name anyway", e);
                None
            }
        };

        info!("Previewing {} from {}", metadata.postscript_name, source);

        let font = RenderableFontHandle {
            postscript_name: metadata.postscript_name.clone(),
            data,
        };

        Ok(PreviewSession {
            registry: &self.registry,
            metadata,
            font,
            registration,
        })
    }
}

/// A font registered for preview; released on drop
#[must_use = "dropping the session releases the font immediately"]
pub struct PreviewSession<'a, R: FontRegistry> {
    registry: &'a R,
    metadata: FontMetadata,
    font: RenderableFontHandle,
    registration: Option<RegistrationHandle>,
}

impl<'a, R: FontRegistry> PreviewSession<'a, R> {
    pub fn metadata(&self) -> &FontMetadata {
        &self.metadata
    }

    pub fn font(&self) -> &RenderableFontHandle {
        &self.font
    }

    /// Whether this session owns a registration it will release
    pub fn owns_registration(&self) -> bool {
        self.registration.is_some()
    }

    /// End the session, unregistering the font if this session registered it
    pub fn release(mut self) {
        self.release_registration();
    }

    fn release_registration(&mut self) {
        if let Some(handle) = self.registration.take() {
            debug!("Releasing preview registration for {}", handle.postscript_name());
            self.registry.unregister(&handle);
        }
    }
}

impl<'a, R: FontRegistry> fmt::Debug for PreviewSession<'a, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PreviewSession")
            .field("metadata", &self.metadata)
            .field("registration", &self.registration)
            .finish()
    }
}

impl<'a, R: FontRegistry> Drop for PreviewSession<'a, R> {
    fn drop(&mut self) {
        self.release_registration();
    }
}
