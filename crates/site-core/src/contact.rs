//! Contact Form
//!
//! Field state, the submission status machine, and the single async
//! operation that hands the form to an `EmailSender`.
//!
//! ```text
//!            submit ok            submit ok/err
//!   Unset ─────────────▶ Sent ◀──────────────────▶ Failed
//!     │                                              ▲
//!     └──────────────────── submit err ──────────────┘
//! ```
//!
//! Fields are left untouched after a submission and nothing stops a second
//! submission while the first is in flight; whichever resolves last sets the
//! status.

use serde::{Deserialize, Serialize};

use crate::config::EmailConfig;
use crate::email::{EmailRequest, EmailSender};
use crate::error::Result;

/// Names one input of the form
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldKey {
    Name,
    Email,
    Message,
}

impl FieldKey {
    pub const ALL: [Self; 3] = [Self::Name, Self::Email, Self::Message];

    /// The `name` attribute of the matching input element
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.as_str() == name)
    }

    pub const fn placeholder(self) -> &'static str {
        match self {
            Self::Name => "Your Name",
            Self::Email => "Your Email",
            Self::Message => "Your Message",
        }
    }
}

/// Current values of the three inputs
///
/// Serializes as the email template parameters.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace one field; the others are untouched
    pub fn update_field(&mut self, key: FieldKey, value: impl Into<String>) {
        let value = value.into();
        match key {
            FieldKey::Name => self.name = value,
            FieldKey::Email => self.email = value,
            FieldKey::Message => self.message = value,
        }
    }

    pub fn field(&self, key: FieldKey) -> &str {
        match key {
            FieldKey::Name => &self.name,
            FieldKey::Email => &self.email,
            FieldKey::Message => &self.message,
        }
    }
}

/// Outcome shown under the form
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Unset,
    Sent,
    Failed,
}

impl SubmissionStatus {
    pub const SENT_MESSAGE: &'static str = "✅ Message sent successfully!";
    pub const FAILED_MESSAGE: &'static str = "❌ Failed to send. Please try again.";

    /// Collapse a delivery result; the error itself is dropped
    pub fn from_result(result: &Result<()>) -> Self {
        match result {
            Ok(()) => Self::Sent,
            Err(_) => Self::Failed,
        }
    }

    /// Text to display, `None` before the first submission resolves
    pub const fn message(self) -> Option<&'static str> {
        match self {
            Self::Unset => None,
            Self::Sent => Some(Self::SENT_MESSAGE),
            Self::Failed => Some(Self::FAILED_MESSAGE),
        }
    }

    pub const fn is_set(self) -> bool {
        !matches!(self, Self::Unset)
    }
}

/// Send the whole form once and report the resulting status
///
/// No retry, no timeout, no cancellation.
pub async fn submit<S>(sender: &S, config: &EmailConfig, form: &ContactForm) -> SubmissionStatus
where
    S: EmailSender + ?Sized,
{
    let result = sender.send(&EmailRequest::new(config, form)).await;
    let status = SubmissionStatus::from_result(&result);
    match status {
        SubmissionStatus::Failed => tracing::warn!(provider = sender.name(), "contact submission failed"),
        _ => tracing::info!(provider = sender.name(), "contact submission delivered"),
    }
    status
}
