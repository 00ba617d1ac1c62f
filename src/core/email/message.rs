use serde::Serialize;

/// Subject line of the welcome email
pub const WELCOME_SUBJECT: &str = "Welcome to our waitlist!";

/// A single outbound email. Built per request, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmailMessage {
    pub to: String,
    pub from: String,
    pub subject: String,
    pub text: String,
}

impl EmailMessage {
    /// Welcome email for someone who just joined the waitlist
    pub fn welcome(name: &str, to: &str, from: &str) -> Self {
        Self {
            to: to.trim().to_string(),
            from: from.to_string(),
            subject: WELCOME_SUBJECT.to_string(),
            text: format!("Hi {}, thanks for joining our waitlist!", name.trim()),
        }
    }
}
