//! EmailJS Sender
//!
//! Implementation of `EmailSender` over the EmailJS REST API.

use async_trait::async_trait;
use site_core::{
    email::{EmailRequest, EmailSender},
    error::{Result, SiteError},
};

/// Public EmailJS send endpoint
pub const DEFAULT_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// EmailJS client
#[derive(Clone, Debug)]
pub struct EmailJsClient {
    client: reqwest::Client,
    endpoint: String,
}

impl Default for EmailJsClient {
    fn default() -> Self {
        Self::new()
    }
}

impl EmailJsClient {
    /// Client for the public EmailJS endpoint
    pub fn new() -> Self {
        Self::with_endpoint(DEFAULT_ENDPOINT)
    }

    /// Client for a custom endpoint (self-hosted relay, test server)
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl EmailSender for EmailJsClient {
    async fn send(&self, request: &EmailRequest<'_>) -> Result<()> {
        tracing::debug!(
            endpoint = %self.endpoint,
            service_id = request.service_id,
            template_id = request.template_id,
            "sending contact email"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| SiteError::Network(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        // EmailJS explains rejections in a plain-text body
        let body = response.text().await.unwrap_or_default();
        Err(SiteError::Delivery {
            status: status.as_u16(),
            body,
        })
    }

    fn name(&self) -> &str {
        "EmailJS"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use site_core::{ContactForm, EmailConfig, SubmissionStatus, contact};
    use tokio::{
        io::{AsyncReadExt, AsyncWriteExt},
        net::{TcpListener, TcpStream},
    };

    /// Local stand-in for EmailJS that answers every request the same way
    async fn canned_server(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            while let Ok((mut socket, _)) = listener.accept().await {
                tokio::spawn(async move {
                    read_request(&mut socket).await;
                    let response = format!(
                        "HTTP/1.1 {status_line}\r\nContent-Type: text/plain\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                        body.len()
                    );
                    socket.write_all(response.as_bytes()).await.unwrap();
                    socket.shutdown().await.ok();
                });
            }
        });

        format!("http://{addr}/api/v1.0/email/send")
    }

    /// Drain headers and a Content-Length body so the reply is not reset
    async fn read_request(socket: &mut TcpStream) {
        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];
        loop {
            let n = socket.read(&mut chunk).await.unwrap();
            if n == 0 {
                return;
            }
            buf.extend_from_slice(&chunk[..n]);

            if let Some(end) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
                let head = String::from_utf8_lossy(&buf[..end]).to_ascii_lowercase();
                let length = head
                    .lines()
                    .find_map(|line| line.strip_prefix("content-length:"))
                    .and_then(|v| v.trim().parse::<usize>().ok())
                    .unwrap_or(0);
                if buf.len() >= end + 4 + length {
                    return;
                }
            }
        }
    }

    #[test]
    fn test_default_endpoint() {
        let client = EmailJsClient::default();
        assert_eq!(client.endpoint, "https://api.emailjs.com/api/v1.0/email/send");
        assert_eq!(client.name(), "EmailJS");
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_failure() {
        // Port 9 (discard) on loopback is not expected to accept HTTP
        let client = EmailJsClient::with_endpoint("http://127.0.0.1:9/api/v1.0/email/send");
        let config = EmailConfig::new("service", "template", "key");

        let status = contact::submit(&client, &config, &ContactForm::new()).await;
        assert_eq!(status, SubmissionStatus::Failed);
    }

    #[tokio::test]
    async fn test_rejection_is_delivery_error() {
        let endpoint = canned_server("400 Bad Request", "The Public Key is invalid").await;
        let client = EmailJsClient::with_endpoint(endpoint);
        let config = EmailConfig::new("service", "template", "bad_key");
        let form = ContactForm::new();

        let err = client.send(&EmailRequest::new(&config, &form)).await.unwrap_err();
        assert!(matches!(
            err,
            SiteError::Delivery { status: 400, ref body } if body == "The Public Key is invalid"
        ));

        let status = contact::submit(&client, &config, &form).await;
        assert_eq!(status, SubmissionStatus::Failed);
    }

    #[tokio::test]
    async fn test_accepted_send_is_sent() {
        let endpoint = canned_server("200 OK", "OK").await;
        let client = EmailJsClient::with_endpoint(endpoint);
        let config = EmailConfig::new("service", "template", "key");

        let status = contact::submit(&client, &config, &ContactForm::new()).await;
        assert_eq!(status, SubmissionStatus::Sent);
    }
}
