//! Welcome email endpoint
//!
//! - POST /api/send-email - Send the waitlist welcome email
//! - POST /api/sendEmail  - Same handler under the path automation triggers call
//!
//! Any other method gets 405 with an empty body.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{MethodRouter, post},
};
use serde::{Deserialize, Serialize};

use super::message::EmailMessage;
use super::sender::{EmailSender, SendError};
use crate::core::leads::ErrorBody;

pub const WELCOME_EMAIL_PATH: &str = "/api/send-email";
pub const LEGACY_WELCOME_EMAIL_PATH: &str = "/api/sendEmail";

/// Welcome email state: the provider client and the fixed sender address
#[derive(Clone)]
pub struct WelcomeEmailState {
    pub sender: Arc<dyn EmailSender>,
    pub from: String,
}

/// Inbound payload
#[derive(Debug, Deserialize)]
pub struct WelcomeEmailRequest {
    pub name: String,
    pub email: String,
}

/// Body of a successful send
#[derive(Debug, Serialize)]
pub struct SentResponse {
    pub ok: bool,
}

impl IntoResponse for SendError {
    fn into_response(self) -> Response {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorBody::new(self.to_string())),
        )
            .into_response()
    }
}

/// Create the welcome email router
pub fn welcome_email_router(state: WelcomeEmailState) -> Router {
    let state = Arc::new(state);

    let endpoint = || -> MethodRouter<Arc<WelcomeEmailState>> {
        post(send_welcome_handler).fallback(method_not_allowed)
    };

    Router::new()
        .route(WELCOME_EMAIL_PATH, endpoint())
        .route(LEGACY_WELCOME_EMAIL_PATH, endpoint())
        .with_state(state)
}

/// POST /api/send-email
async fn send_welcome_handler(
    State(state): State<Arc<WelcomeEmailState>>,
    payload: Result<Json<WelcomeEmailRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorBody::new(rejection.body_text())),
            )
                .into_response();
        }
    };

    let message = EmailMessage::welcome(&request.name, &request.email, &state.from);

    match state.sender.send(&message).await {
        Ok(()) => {
            tracing::info!("Welcome email sent to {}", message.to);
            Json(SentResponse { ok: true }).into_response()
        }
        Err(e) => {
            tracing::error!("Welcome email to {} failed: {}", message.to, e);
            e.into_response()
        }
    }
}

async fn method_not_allowed() -> StatusCode {
    StatusCode::METHOD_NOT_ALLOWED
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use axum::{body::Body, http::Request};
    use serde_json::{Value, json};
    use std::sync::Mutex;
    use tower::ServiceExt;

    /// Test double that records messages and answers with a canned result
    struct MockSender {
        sent: Mutex<Vec<EmailMessage>>,
        result: Result<(), SendError>,
    }

    impl MockSender {
        fn new(result: Result<(), SendError>) -> Arc<Self> {
            Arc::new(Self {
                sent: Mutex::new(Vec::new()),
                result,
            })
        }

        fn sent(&self) -> Vec<EmailMessage> {
            self.sent.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl EmailSender for MockSender {
        async fn send(&self, message: &EmailMessage) -> Result<(), SendError> {
            self.sent.lock().unwrap().push(message.clone());
            self.result.clone()
        }
    }

    fn app(sender: Arc<MockSender>) -> Router {
        welcome_email_router(WelcomeEmailState {
            sender,
            from: "noreply@yourapp.com".to_string(),
        })
    }

    async fn call(app: Router, method: &str, uri: &str, body: &str) -> (StatusCode, Vec<u8>) {
        let response = app
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, bytes.to_vec())
    }

    const ANA: &str = r#"{"name": "Ana", "email": "ana@example.com"}"#;

    #[tokio::test]
    async fn test_successful_send_returns_ok() {
        let sender = MockSender::new(Ok(()));

        let (status, body) = call(app(sender.clone()), "POST", WELCOME_EMAIL_PATH, ANA).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            serde_json::from_slice::<Value>(&body).unwrap(),
            json!({ "ok": true })
        );

        let sent = sender.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].to, "ana@example.com");
        assert_eq!(sent[0].from, "noreply@yourapp.com");
        assert_eq!(sent[0].text, "Hi Ana, thanks for joining our waitlist!");
    }

    #[tokio::test]
    async fn test_provider_failure_returns_500_with_message() {
        let sender = MockSender::new(Err(SendError::Provider("rate limited".to_string())));

        let (status, body) = call(app(sender), "POST", WELCOME_EMAIL_PATH, ANA).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            serde_json::from_slice::<Value>(&body).unwrap(),
            json!({ "error": "rate limited" })
        );
    }

    #[tokio::test]
    async fn test_get_is_method_not_allowed_regardless_of_body() {
        for body in [ANA, "", "{garbage"] {
            let sender = MockSender::new(Ok(()));

            let (status, response_body) =
                call(app(sender.clone()), "GET", WELCOME_EMAIL_PATH, body).await;

            assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
            assert!(response_body.is_empty());
            assert!(sender.sent().is_empty());
        }
    }

    #[tokio::test]
    async fn test_other_methods_are_not_allowed() {
        for method in ["PUT", "DELETE", "PATCH"] {
            let (status, body) =
                call(app(MockSender::new(Ok(()))), method, WELCOME_EMAIL_PATH, ANA).await;

            assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
            assert!(body.is_empty());
        }
    }

    #[tokio::test]
    async fn test_legacy_path_is_served() {
        let (status, _) = call(
            app(MockSender::new(Ok(()))),
            "POST",
            LEGACY_WELCOME_EMAIL_PATH,
            ANA,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_malformed_payload_is_bad_request() {
        let sender = MockSender::new(Ok(()));

        let (status, body) =
            call(app(sender.clone()), "POST", WELCOME_EMAIL_PATH, r#"{"name": "Ana"}"#).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(serde_json::from_slice::<Value>(&body).unwrap()["error"].is_string());
        assert!(sender.sent().is_empty());
    }
}
