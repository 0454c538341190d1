//! Error Types

use thiserror::Error;

/// Result type alias for site operations
pub type Result<T> = std::result::Result<T, SiteError>;

/// Site error types
///
/// Every variant collapses into the same user-facing failure message once it
/// reaches the contact form; the variants exist for logs and tests.
#[derive(Error, Debug)]
pub enum SiteError {
    /// Missing or unusable configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Email provider answered with a non-success status
    #[error("Delivery rejected ({status}): {body}")]
    Delivery { status: u16, body: String },

    /// Transport failure before a response arrived
    #[error("Network error: {0}")]
    Network(String),
}

impl SiteError {
    /// Short machine-readable code, used by the host API
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Config(_) => "CONFIG",
            Self::Delivery { .. } => "DELIVERY",
            Self::Network(_) => "NETWORK",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delivery_display() {
        let err = SiteError::Delivery {
            status: 400,
            body: "The Public Key is invalid".into(),
        };
        assert_eq!(err.to_string(), "Delivery rejected (400): The Public Key is invalid");
        assert_eq!(err.code(), "DELIVERY");
    }

    #[test]
    fn test_codes_are_distinct() {
        let codes = [
            SiteError::Config("x".into()).code(),
            SiteError::Delivery { status: 500, body: String::new() }.code(),
            SiteError::Network("x".into()).code(),
        ];
        assert_eq!(codes, ["CONFIG", "DELIVERY", "NETWORK"]);
    }
}
