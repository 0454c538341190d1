//! Email delivery configuration
//!
//! The EmailJS identifiers are public (the browser sends them), but they
//! still differ per deployment and are read from the environment by the
//! host, then handed to the frontend as JSON.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SiteError};

pub const SERVICE_ID_VAR: &str = "EMAILJS_SERVICE_ID";
pub const TEMPLATE_ID_VAR: &str = "EMAILJS_TEMPLATE_ID";
pub const PUBLIC_KEY_VAR: &str = "EMAILJS_PUBLIC_KEY";

/// Identifiers the email provider needs alongside each payload
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

impl EmailConfig {
    pub fn new(
        service_id: impl Into<String>,
        template_id: impl Into<String>,
        public_key: impl Into<String>,
    ) -> Self {
        Self {
            service_id: service_id.into(),
            template_id: template_id.into(),
            public_key: public_key.into(),
        }
    }

    /// Create from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; empty values count as missing
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .ok_or_else(|| SiteError::Config(format!("{key} not set")))
        };

        Ok(Self {
            service_id: get(SERVICE_ID_VAR)?,
            template_id: get(TEMPLATE_ID_VAR)?,
            public_key: get(PUBLIC_KEY_VAR)?,
        })
    }
}
