//! Welcome email module
//!
//! This module provides:
//! - The welcome email message template
//! - The email provider seam and its SendGrid implementation
//! - The REST endpoint automation triggers call

pub mod api;
pub mod message;
pub mod sender;

pub use api::{WelcomeEmailState, welcome_email_router};
pub use message::EmailMessage;
pub use sender::{EmailSender, SendError, SendGridSender};
