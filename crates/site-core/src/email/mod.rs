//! Email Delivery
//!
//! The contact form hands its payload to an `EmailSender`. The production
//! implementation talks to EmailJS (`site-mailer`); tests use
//! `MockEmailSender`.

mod mock;

pub use mock::MockEmailSender;

use async_trait::async_trait;
use serde::Serialize;

use crate::config::EmailConfig;
use crate::contact::ContactForm;
use crate::error::Result;

/// One send operation, in the provider's wire shape
#[derive(Clone, Debug, Serialize)]
pub struct EmailRequest<'a> {
    pub service_id: &'a str,
    pub template_id: &'a str,
    /// EmailJS calls the public key `user_id`
    #[serde(rename = "user_id")]
    pub public_key: &'a str,
    pub template_params: &'a ContactForm,
}

impl<'a> EmailRequest<'a> {
    pub fn new(config: &'a EmailConfig, form: &'a ContactForm) -> Self {
        Self {
            service_id: &config.service_id,
            template_id: &config.template_id,
            public_key: &config.public_key,
            template_params: form,
        }
    }
}

/// External email-delivery collaborator
///
/// Implementations report any kind of rejection as `Err`; callers do not
/// distinguish between them.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait EmailSender {
    /// Deliver one message
    async fn send(&self, request: &EmailRequest<'_>) -> Result<()>;

    /// Provider name, for logs
    fn name(&self) -> &str;
}
