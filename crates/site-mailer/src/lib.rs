//! # site-mailer
//!
//! Email delivery for the contact form.
//!
//! ## Providers
//!
//! - **EmailJS** (default): the public REST endpoint, called straight from
//!   the browser with the site's public key
//!
//! ## Usage
//!
//! ```rust,ignore
//! use site_core::{contact, EmailConfig};
//! use site_mailer::EmailJsClient;
//!
//! let client = EmailJsClient::new();
//! let status = contact::submit(&client, &config, &form).await;
//! ```

pub mod emailjs;

pub use emailjs::EmailJsClient;

// Re-export core types for convenience
pub use site_core::{EmailConfig, EmailRequest, EmailSender, Result, SiteError};
