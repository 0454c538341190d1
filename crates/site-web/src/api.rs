//! Host API Client

use serde::Deserialize;
use site_core::{ContactForm, EmailConfig, SiteError, SubmissionStatus, contact};
use site_mailer::EmailJsClient;

/// Error body returned by the host
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
    code: String,
}

fn origin() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_else(|| "http://localhost:3000".into())
}

/// Fetch the EmailJS identifiers the host was configured with
pub async fn fetch_email_config() -> site_core::Result<EmailConfig> {
    let url = format!("{}/api/config", origin());

    let response = reqwest::Client::new()
        .get(&url)
        .send()
        .await
        .map_err(|e| SiteError::Network(e.to_string()))?;

    let status = response.status();
    if status.is_success() {
        return response
            .json::<EmailConfig>()
            .await
            .map_err(|e| SiteError::Network(e.to_string()));
    }

    let reason = response
        .json::<ErrorBody>()
        .await
        .map_or_else(|_| "no details".to_string(), |b| format!("{}: {}", b.code, b.error));
    Err(SiteError::Config(format!("host answered {status}: {reason}")))
}

/// Deliver the form; a missing configuration counts as a failed send
pub async fn send_contact(form: &ContactForm) -> SubmissionStatus {
    match fetch_email_config().await {
        Ok(config) => contact::submit(&EmailJsClient::new(), &config, form).await,
        Err(e) => {
            tracing::warn!(code = e.code(), "email configuration unavailable");
            SubmissionStatus::Failed
        }
    }
}
