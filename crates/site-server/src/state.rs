//! Application State

use std::sync::Arc;

use site_core::EmailConfig;

/// Shared application state
#[derive(Clone, Default)]
pub struct AppState {
    /// EmailJS identifiers (None if not configured)
    pub email: Option<Arc<EmailConfig>>,
}

impl AppState {
    pub fn new(email: Option<EmailConfig>) -> Self {
        Self {
            email: email.map(Arc::new),
        }
    }
}
