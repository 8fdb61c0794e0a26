use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use font_kit::handle::Handle;
use lazy_static::lazy_static;
use log::debug;
use thiserror::Error;
use uuid::Uuid;

/// Reasons a registry refuses a font
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// A font with this PostScript name is already registered
    #[error("Font '{0}' is already registered")]
    AlreadyRegistered(String),
    /// The rendering engine could not load the font
    #[error("Font '{name}' was rejected: {reason}")]
    Rejected { name: String, reason: String },
}

/// Proof of one successful registration
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RegistrationHandle {
    postscript_name: String,
    token: Uuid,
}

impl RegistrationHandle {
    pub fn new(postscript_name: impl Into<String>) -> Self {
        Self {
            postscript_name: postscript_name.into(),
            token: Uuid::new_v4(),
        }
    }

    pub fn postscript_name(&self) -> &str {
        &self.postscript_name
    }
}

/// Process-scoped font registration table
pub trait FontRegistry: Send + Sync {
    /// Make a font addressable by PostScript name for this process
    fn register(&self, postscript_name: &str, data: Arc<Vec<u8>>) -> Result<RegistrationHandle, RegistryError>;

    /// Remove a registration made by `register`
    fn unregister(&self, handle: &RegistrationHandle);
}

impl<R: FontRegistry + ?Sized> FontRegistry for Arc<R> {
    fn register(&self, postscript_name: &str, data: Arc<Vec<u8>>) -> Result<RegistrationHandle, RegistryError> {
        (**self).register(postscript_name, data)
    }

    fn unregister(&self, handle: &RegistrationHandle) {
        (**self).unregister(handle)
    }
}

impl<R: FontRegistry + ?Sized> FontRegistry for &R {
    fn register(&self, postscript_name: &str, data: Arc<Vec<u8>>) -> Result<RegistrationHandle, RegistryError> {
        (**self).register(postscript_name, data)
    }

    fn unregister(&self, handle: &RegistrationHandle) {
        (**self).unregister(handle)
    }
}

struct Entry {
    token: Uuid,
    handle: Handle,
}

lazy_static! {
    static ref GLOBAL_REGISTRY: ProcessFontRegistry = ProcessFontRegistry::new();
}

/// In-process registry backed by font-kit
///
/// Fonts are validated by loading them with font-kit before they are
/// accepted. Nothing is persisted outside the process.
#[derive(Default)]
pub struct ProcessFontRegistry {
    fonts: Mutex<HashMap<String, Entry>>,
}

impl ProcessFontRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry shared by the whole process
    pub fn global() -> &'static ProcessFontRegistry {
        &GLOBAL_REGISTRY
    }

    /// font-kit handle for a registered font
    pub fn resolve(&self, postscript_name: &str) -> Option<Handle> {
        self.lock().get(postscript_name).map(|entry| entry.handle.clone())
    }

    pub fn is_registered(&self, postscript_name: &str) -> bool {
        self.lock().contains_key(postscript_name)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, Entry>> {
        self.fonts.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl FontRegistry for ProcessFontRegistry {
    fn register(&self, postscript_name: &str, data: Arc<Vec<u8>>) -> Result<RegistrationHandle, RegistryError> {
        let mut fonts = self.lock();
        if fonts.contains_key(postscript_name) {
            return Err(RegistryError::AlreadyRegistered(postscript_name.to_string()));
        }

        let handle = Handle::from_memory(data, 0);
        if let Err(e) = handle.load() {
            return Err(RegistryError::Rejected {
                name: postscript_name.to_string(),
                reason: e.to_string(),
            });
        }

        let registration = RegistrationHandle::new(postscript_name);
        fonts.insert(
            postscript_name.to_string(),
            Entry {
                token: registration.token,
                handle,
            },
        );
        debug!("Registered {} for this process", postscript_name);
        Ok(registration)
    }

    fn unregister(&self, handle: &RegistrationHandle) {
        let mut fonts = self.lock();
        let owned = fonts
            .get(&handle.postscript_name)
            .is_some_and(|entry| entry.token == handle.token);
        if owned {
            fonts.remove(&handle.postscript_name);
            debug!("Unregistered {}", handle.postscript_name);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/DejaVuSansMono-Oblique.ttf");
    const FIXTURE_NAME: &str = "DejaVuSansMono-Oblique";

    fn fixture_bytes() -> Arc<Vec<u8>> {
        Arc::new(std::fs::read(FIXTURE).unwrap())
    }

    #[test]
    fn registers_a_loadable_font() {
        let registry = ProcessFontRegistry::new();
        let handle = registry.register(FIXTURE_NAME, fixture_bytes()).unwrap();

        assert_eq!(handle.postscript_name(), FIXTURE_NAME);
        assert!(registry.is_registered(FIXTURE_NAME));
        assert_eq!(registry.len(), 1);
        let font = registry.resolve(FIXTURE_NAME).unwrap().load().unwrap();
        assert_eq!(font.postscript_name().as_deref(), Some(FIXTURE_NAME));

        registry.unregister(&handle);
        assert!(registry.is_empty());
        assert!(registry.resolve(FIXTURE_NAME).is_none());
    }

    #[test]
    fn stale_handle_does_not_evict_newer_registration() {
        let registry = ProcessFontRegistry::new();
        let first = registry.register(FIXTURE_NAME, fixture_bytes()).unwrap();

        let err = registry.register(FIXTURE_NAME, fixture_bytes()).unwrap_err();
        assert_eq!(err, RegistryError::AlreadyRegistered(FIXTURE_NAME.to_string()));

        registry.unregister(&first);
        assert!(!registry.is_registered(FIXTURE_NAME));

        let second = registry.register(FIXTURE_NAME, fixture_bytes()).unwrap();
        assert_ne!(first, second);

        // Releasing the old handle twice must leave the new one alone
        registry.unregister(&first);
        assert!(registry.is_registered(FIXTURE_NAME));

        registry.unregister(&second);
        assert!(registry.is_empty());
    }

    #[test]
    fn rejects_bytes_that_are_not_a_font() {
        let registry = ProcessFontRegistry::new();
        let err = registry
            .register("Nope-Regular", Arc::new(b"not a font".to_vec()))
            .unwrap_err();
        assert!(matches!(err, RegistryError::Rejected { ref name, .. } if name == "Nope-Regular"));
        assert!(registry.is_empty());
    }

    #[test]
    fn unknown_handle_is_ignored() {
        let registry = ProcessFontRegistry::new();
        registry.unregister(&RegistrationHandle::new("Ghost-Regular"));
        assert!(!registry.is_registered("Ghost-Regular"));
    }

    #[test]
    fn handles_for_same_name_are_distinct() {
        let a = RegistrationHandle::new("Foo-Regular");
        let b = RegistrationHandle::new("Foo-Regular");
        assert_eq!(a.postscript_name(), b.postscript_name());
        assert_ne!(a, b);
    }
}
