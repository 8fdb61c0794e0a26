use uuid::Uuid;

/// Identifier pair for one payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayloadIds {
    /// `PayloadIdentifier`, reverse-DNS
    pub identifier: String,
    /// `PayloadUUID`, upper-case hyphenated
    pub uuid: String,
}

/// Fresh identifiers for the top-level profile
pub fn profile_ids(prefix: &str) -> PayloadIds {
    ids_with_suffix(prefix, None)
}

/// Fresh identifiers for a font payload
pub fn font_payload_ids(prefix: &str) -> PayloadIds {
    ids_with_suffix(prefix, Some("font"))
}

fn ids_with_suffix(prefix: &str, kind: Option<&str>) -> PayloadIds {
    let uuid = Uuid::new_v4().hyphenated().to_string().to_uppercase();
    let identifier = match kind {
        Some(kind) => format!("{}.{}.{}", prefix, kind, uuid),
        None => format!("{}.{}", prefix, uuid),
    };
    PayloadIds { identifier, uuid }
}
