//! Transactional email provider client
//!
//! [`EmailSender`] is the seam handlers depend on; [`SendGridSender`] is the
//! production implementation over the SendGrid v3 mail-send API.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::message::EmailMessage;
use crate::core::config::Config;

/// Email sending error types
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum SendError {
    /// The provider answered and refused the message
    #[error("{0}")]
    Provider(String),

    /// The provider could not be reached
    #[error("{0}")]
    Transport(String),

    #[error("Email provider timed out")]
    Timeout,
}

/// Something that can deliver an [`EmailMessage`]
#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send(&self, message: &EmailMessage) -> Result<(), SendError>;
}

#[derive(Serialize)]
struct Address<'a> {
    email: &'a str,
}

#[derive(Serialize)]
struct Personalization<'a> {
    to: [Address<'a>; 1],
}

#[derive(Serialize)]
struct Content<'a> {
    #[serde(rename = "type")]
    content_type: &'static str,
    value: &'a str,
}

/// SendGrid v3 mail-send body
#[derive(Serialize)]
struct MailSend<'a> {
    personalizations: [Personalization<'a>; 1],
    from: Address<'a>,
    subject: &'a str,
    content: [Content<'a>; 1],
}

impl<'a> From<&'a EmailMessage> for MailSend<'a> {
    fn from(message: &'a EmailMessage) -> Self {
        Self {
            personalizations: [Personalization {
                to: [Address {
                    email: &message.to,
                }],
            }],
            from: Address {
                email: &message.from,
            },
            subject: &message.subject,
            content: [Content {
                content_type: "text/plain",
                value: &message.text,
            }],
        }
    }
}

#[derive(Deserialize)]
struct ProviderErrors {
    #[serde(default)]
    errors: Vec<ProviderErrorDetail>,
}

#[derive(Deserialize)]
struct ProviderErrorDetail {
    message: String,
}

/// SendGrid-backed [`EmailSender`]
#[derive(Clone)]
pub struct SendGridSender {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
}

impl SendGridSender {
    pub fn new(
        api_url: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            api_url: api_url.into(),
            api_key: api_key.into(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, reqwest::Error> {
        Self::new(
            config.sendgrid_api_url.clone(),
            config.sendgrid_api_key.clone(),
            config.request_timeout,
        )
    }
}

#[async_trait]
impl EmailSender for SendGridSender {
    async fn send(&self, message: &EmailMessage) -> Result<(), SendError> {
        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&MailSend::from(message))
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        let message = provider_message(&body).unwrap_or_else(|| {
            status
                .canonical_reason()
                .map(str::to_string)
                .unwrap_or_else(|| format!("Email provider returned {}", status.as_u16()))
        });

        Err(SendError::Provider(message))
    }
}

fn transport_error(err: reqwest::Error) -> SendError {
    if err.is_timeout() {
        SendError::Timeout
    } else {
        SendError::Transport(err.to_string())
    }
}

/// Joined `errors[].message` of a SendGrid error body
fn provider_message(body: &str) -> Option<String> {
    let parsed: ProviderErrors = serde_json::from_str(body).ok()?;
    let messages: Vec<String> = parsed.errors.into_iter().map(|e| e.message).collect();

    if messages.is_empty() {
        None
    } else {
        Some(messages.join("; "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::test_support::spawn_upstream;
    use axum::{Json, Router, http::HeaderMap, http::StatusCode, routing::post};
    use serde_json::{Value, json};

    fn welcome() -> EmailMessage {
        EmailMessage::welcome("Ana", "ana@example.com", "noreply@yourapp.com")
    }

    #[test]
    fn test_mail_send_body_shape() {
        let message = welcome();
        let body = serde_json::to_value(MailSend::from(&message)).unwrap();

        assert_eq!(
            body,
            json!({
                "personalizations": [{ "to": [{ "email": "ana@example.com" }] }],
                "from": { "email": "noreply@yourapp.com" },
                "subject": "Welcome to our waitlist!",
                "content": [{
                    "type": "text/plain",
                    "value": "Hi Ana, thanks for joining our waitlist!"
                }]
            })
        );
    }

    #[test]
    fn test_provider_message_joins_errors() {
        let body = r#"{"errors":[{"message":"rate limited","field":null},{"message":"try later"}]}"#;

        assert_eq!(
            provider_message(body),
            Some("rate limited; try later".to_string())
        );
        assert_eq!(provider_message(r#"{"errors":[]}"#), None);
        assert_eq!(provider_message("<html>"), None);
    }

    #[tokio::test]
    async fn test_send_posts_to_provider() {
        let router = Router::new().route(
            "/v3/mail/send",
            post(|headers: HeaderMap, Json(body): Json<Value>| async move {
                let authorized = headers
                    .get("authorization")
                    .is_some_and(|v| v == "Bearer SG.key");
                if authorized && body["subject"] == "Welcome to our waitlist!" {
                    StatusCode::ACCEPTED
                } else {
                    StatusCode::UNAUTHORIZED
                }
            }),
        );
        let base = spawn_upstream(router).await;
        let sender =
            SendGridSender::new(format!("{}/v3/mail/send", base), "SG.key", Duration::from_secs(5))
                .unwrap();

        assert_eq!(sender.send(&welcome()).await, Ok(()));
    }

    #[tokio::test]
    async fn test_provider_rejection_carries_message() {
        let router = Router::new().route(
            "/v3/mail/send",
            post(|| async {
                (
                    StatusCode::TOO_MANY_REQUESTS,
                    Json(json!({ "errors": [{ "message": "rate limited" }] })),
                )
            }),
        );
        let base = spawn_upstream(router).await;
        let sender =
            SendGridSender::new(format!("{}/v3/mail/send", base), "SG.key", Duration::from_secs(5))
                .unwrap();

        let err = sender.send(&welcome()).await.unwrap_err();

        assert_eq!(err, SendError::Provider("rate limited".to_string()));
        assert_eq!(err.to_string(), "rate limited");
    }

    #[tokio::test]
    async fn test_rejection_without_body_uses_status_reason() {
        let router = Router::new().route(
            "/v3/mail/send",
            post(|| async { StatusCode::FORBIDDEN }),
        );
        let base = spawn_upstream(router).await;
        let sender =
            SendGridSender::new(format!("{}/v3/mail/send", base), "SG.key", Duration::from_secs(5))
                .unwrap();

        let err = sender.send(&welcome()).await.unwrap_err();

        assert_eq!(err, SendError::Provider("Forbidden".to_string()));
    }

    #[tokio::test]
    async fn test_slow_provider_times_out() {
        let router = Router::new().route(
            "/v3/mail/send",
            post(|| async {
                tokio::time::sleep(Duration::from_secs(2)).await;
                StatusCode::ACCEPTED
            }),
        );
        let base = spawn_upstream(router).await;
        let sender = SendGridSender::new(
            format!("{}/v3/mail/send", base),
            "SG.key",
            Duration::from_millis(100),
        )
        .unwrap();

        assert_eq!(sender.send(&welcome()).await, Err(SendError::Timeout));
    }
}
