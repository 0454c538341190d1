//! # site-core
//!
//! Platform-neutral logic behind the Acts9 IT Services marketing site.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                          Shell                               │
//! │  ┌─────────┐   ┌──────────┐   ┌────────────────────────────┐ │
//! │  │  Theme  │──▶│  Route   │──▶│  Page (static content)     │ │
//! │  └─────────┘   └──────────┘   │  or ContactForm ──▶ Sender │ │
//! │                               └────────────────────────────┘ │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing here touches the DOM. The `EmailSender` trait is the seam where
//! the real EmailJS client (`site-mailer`) or a mock plugs in, so the whole
//! contact flow runs in native unit tests.

pub mod config;
pub mod contact;
pub mod content;
pub mod email;
pub mod error;
pub mod route;
pub mod theme;

pub use config::EmailConfig;
pub use contact::{ContactForm, FieldKey, SubmissionStatus};
pub use email::{EmailRequest, EmailSender, MockEmailSender};
pub use error::{Result, SiteError};
pub use route::Route;
pub use theme::Theme;
