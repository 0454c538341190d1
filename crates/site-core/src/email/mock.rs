//! Mock Email Sender
//!
//! Records every payload it receives and answers with a fixed outcome.

use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;

use super::{EmailRequest, EmailSender};
use crate::contact::ContactForm;
use crate::error::{Result, SiteError};

#[derive(Clone, Debug)]
enum Outcome {
    Accept,
    Reject { status: u16, body: String },
    Offline,
}

/// In-memory sender for tests and local demos
#[derive(Debug)]
pub struct MockEmailSender {
    outcome: Outcome,
    sent: Mutex<Vec<ContactForm>>,
}

impl Default for MockEmailSender {
    fn default() -> Self {
        Self::accepting()
    }
}

impl MockEmailSender {
    fn with_outcome(outcome: Outcome) -> Self {
        Self {
            outcome,
            sent: Mutex::new(Vec::new()),
        }
    }

    /// Every send succeeds
    pub fn accepting() -> Self {
        Self::with_outcome(Outcome::Accept)
    }

    /// Every send is answered with the given HTTP status and body
    pub fn rejecting(status: u16, body: impl Into<String>) -> Self {
        Self::with_outcome(Outcome::Reject {
            status,
            body: body.into(),
        })
    }

    /// Every send fails before reaching the provider
    pub fn offline() -> Self {
        Self::with_outcome(Outcome::Offline)
    }

    /// Payloads received so far, oldest first
    pub fn sent(&self) -> Vec<ContactForm> {
        self.sent
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl EmailSender for MockEmailSender {
    async fn send(&self, request: &EmailRequest<'_>) -> Result<()> {
        self.sent
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(request.template_params.clone());

        match &self.outcome {
            Outcome::Accept => Ok(()),
            Outcome::Reject { status, body } => Err(SiteError::Delivery {
                status: *status,
                body: body.clone(),
            }),
            Outcome::Offline => Err(SiteError::Network("connection refused".into())),
        }
    }

    fn name(&self) -> &str {
        "MockEmail"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EmailConfig;

    #[tokio::test]
    async fn test_records_payloads() {
        let sender = MockEmailSender::accepting();
        let config = EmailConfig::new("s", "t", "k");
        let form = ContactForm::default();

        sender.send(&EmailRequest::new(&config, &form)).await.unwrap();
        sender.send(&EmailRequest::new(&config, &form)).await.unwrap();

        assert_eq!(sender.sent().len(), 2);
    }

    #[tokio::test]
    async fn test_rejecting() {
        let sender = MockEmailSender::rejecting(422, "template not found");
        let config = EmailConfig::new("s", "t", "k");
        let form = ContactForm::default();

        let err = sender.send(&EmailRequest::new(&config, &form)).await.unwrap_err();
        assert!(matches!(err, SiteError::Delivery { status: 422, .. }));
    }
}
