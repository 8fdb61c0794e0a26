use lazy_static::lazy_static;
use regex::Regex;
use crate::error::{Error, Result};

/// Organization written into profiles when none is configured
pub const DEFAULT_ORGANIZATION: &str = "FontProf";
/// Reverse-DNS prefix used for payload identifiers when none is configured
pub const DEFAULT_IDENTIFIER_PREFIX: &str = "com.fontprof.profile";

lazy_static! {
    static ref REVERSE_DNS: Regex = Regex::new(r"^[A-Za-z0-9-]+(\.[A-Za-z0-9-]+)+$").unwrap();
}

/// Settings applied to every generated configuration profile
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileConfig {
    /// Value of `PayloadOrganization`
    pub organization: String,
    /// Prefix of every `PayloadIdentifier`
    pub identifier_prefix: String,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            organization: DEFAULT_ORGANIZATION.to_string(),
            identifier_prefix: DEFAULT_IDENTIFIER_PREFIX.to_string(),
        }
    }
}

impl ProfileConfig {
    /// Create a validated configuration
    pub fn new(organization: impl Into<String>, identifier_prefix: impl Into<String>) -> Result<Self> {
        let config = Self {
            organization: organization.into(),
            identifier_prefix: identifier_prefix.into(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Check that the organization is set and the prefix is reverse-DNS
    pub fn validate(&self) -> Result<()> {
        if self.organization.trim().is_empty() {
            return Err(Error::Config("organization must not be empty".to_string()));
        }
        if !REVERSE_DNS.is_match(&self.identifier_prefix) {
            return Err(Error::Config(format!(
                "identifier prefix '{}' is not a reverse-DNS name",
                self.identifier_prefix
            )));
        }
        Ok(())
    }
}
