use serde::{Deserialize, Serialize};

/// `PayloadType` of the top-level profile
pub const PROFILE_PAYLOAD_TYPE: &str = "Configuration";
/// `PayloadType` of each font entry
pub const FONT_PAYLOAD_TYPE: &str = "com.apple.font";
/// `PayloadVersion` used for the profile and its payloads
pub const PAYLOAD_VERSION: u32 = 1;

/// One font entry of a configuration profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontPayload {
    #[serde(rename = "PayloadType")]
    pub payload_type: String,
    #[serde(rename = "PayloadVersion")]
    pub payload_version: u32,
    #[serde(rename = "PayloadIdentifier")]
    pub payload_identifier: String,
    #[serde(rename = "PayloadUUID")]
    pub payload_uuid: String,
    #[serde(rename = "PayloadDisplayName")]
    pub display_name: String,
    /// Raw font file content
    #[serde(rename = "Font", with = "font_data")]
    pub font: Vec<u8>,
}

/// Configuration profile installing one or more fonts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigurationProfile {
    #[serde(rename = "PayloadType")]
    pub payload_type: String,
    #[serde(rename = "PayloadVersion")]
    pub payload_version: u32,
    #[serde(rename = "PayloadIdentifier")]
    pub payload_identifier: String,
    #[serde(rename = "PayloadUUID")]
    pub payload_uuid: String,
    #[serde(rename = "PayloadDisplayName")]
    pub display_name: String,
    #[serde(rename = "PayloadDescription")]
    pub description: String,
    #[serde(rename = "PayloadOrganization")]
    pub organization: String,
    /// Font payloads, in input order
    #[serde(rename = "PayloadContent")]
    pub payload_content: Vec<FontPayload>,
}

impl ConfigurationProfile {
    /// Number of font payloads
    pub fn font_count(&self) -> usize {
        self.payload_content.len()
    }

    /// Every identifier and UUID in the profile, profile first
    pub fn identifiers(&self) -> Vec<&str> {
        let mut ids = vec![self.payload_identifier.as_str(), self.payload_uuid.as_str()];
        for payload in &self.payload_content {
            ids.push(&payload.payload_identifier);
            ids.push(&payload.payload_uuid);
        }
        ids
    }
}

/// Font bytes travel as `<data>` rather than an integer array
mod font_data {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_bytes(bytes)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        plist::Data::deserialize(deserializer).map(Vec::from)
    }
}
