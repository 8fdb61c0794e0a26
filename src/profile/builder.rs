use log::{debug, info, warn};
use crate::error::{Error, Result};
use crate::font::extract_metadata;
use crate::models::profile::{FONT_PAYLOAD_TYPE, PAYLOAD_VERSION, PROFILE_PAYLOAD_TYPE};
use crate::models::{ConfigurationProfile, FontMetadata, FontPayload, FontSource, ProfileConfig};
use super::identifier::{font_payload_ids, profile_ids};

/// Assembles font configuration profiles
#[derive(Debug, Clone, Default)]
pub struct ProfileBuilder {
    config: ProfileConfig,
}

impl ProfileBuilder {
    /// Create a builder with a validated configuration
    pub fn new(config: ProfileConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ProfileConfig {
        &self.config
    }

    /// Build a profile with one font payload per source, in input order
    pub fn build(&self, sources: &[FontSource]) -> Result<ConfigurationProfile> {
        if sources.is_empty() {
            return Err(Error::EmptySourceList);
        }

        let mut payloads = Vec::with_capacity(sources.len());
        for source in sources {
            payloads.push(self.build_payload(source)?);
        }

        let ids = profile_ids(&self.config.identifier_prefix);
        let description = payloads
            .iter()
            .map(|payload| payload.display_name.as_str())
            .collect::<Vec<_>>()
            .join("\n");

        info!("Built profile {} with {} font(s)", ids.identifier, payloads.len());

        Ok(ConfigurationProfile {
            payload_type: PROFILE_PAYLOAD_TYPE.to_string(),
            payload_version: PAYLOAD_VERSION,
            payload_identifier: ids.identifier,
            payload_uuid: ids.uuid,
            display_name: install_summary(payloads.len()),
            description,
            organization: self.config.organization.clone(),
            payload_content: payloads,
        })
    }

    /// Build a profile and serialize it to XML property-list bytes
    pub fn export(&self, sources: &[FontSource]) -> Result<Vec<u8>> {
        self.build(sources)?.to_xml()
    }

    fn build_payload(&self, source: &FontSource) -> Result<FontPayload> {
        let file_name = source.file_name();
        let data = source.read().map_err(|e| Error::ReadFailed {
            source_name: file_name.clone(),
            source: e,
        })?;

        let metadata = match extract_metadata(&data, &file_name) {
            Ok(metadata) => metadata,
            Err(e) => {
                warn!("{}; using file name as display name", e);
                FontMetadata::fallback(&file_name)
            }
        };

        let display_name = if metadata.is_addressable() {
            metadata.postscript_name
        } else {
            metadata.display_name
        };

        let ids = font_payload_ids(&self.config.identifier_prefix);
        debug!("Payload {} for {} ({} bytes)", ids.identifier, source, data.len());

        Ok(FontPayload {
            payload_type: FONT_PAYLOAD_TYPE.to_string(),
            payload_version: PAYLOAD_VERSION,
            payload_identifier: ids.identifier,
            payload_uuid: ids.uuid,
            display_name,
            font: data.to_vec(),
        })
    }
}

/// Human-readable count, e.g. "Install 2 fonts"
pub fn install_summary(count: usize) -> String {
    if count == 1 {
        "Install 1 font".to_string()
    } else {
        format!("Install {} fonts", count)
    }
}

impl ConfigurationProfile {
    /// Serialize to XML property-list bytes
    pub fn to_xml(&self) -> Result<Vec<u8>> {
        if let Some(empty) = self.payload_content.iter().find(|p| p.font.is_empty()) {
            return Err(Error::SerializationFailed(format!(
                "payload '{}' has no font data",
                empty.display_name
            )));
        }

        let mut buffer = Vec::new();
        plist::to_writer_xml(&mut buffer, self)?;
        Ok(buffer)
    }

    /// Parse XML or binary property-list bytes
    pub fn from_plist_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(plist::from_bytes(bytes)?)
    }
}
