//! Hosted table client over PostgREST
//!
//! Server side only: the service key stays here and never reaches the browser.

use std::time::Duration;

use serde::Deserialize;

use super::model::{LeadRecord, NewLead};
use super::store::StoreError;
use crate::core::config::Config;

/// Error body returned by PostgREST
#[derive(Debug, Deserialize)]
struct PostgrestError {
    message: Option<String>,
    #[allow(dead_code)]
    code: Option<String>,
}

/// Insert-only handle to the leads table
#[derive(Clone)]
pub struct PostgrestStore {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl PostgrestStore {
    /// Build a client for `{base_url}/rest/v1/{table}`
    pub fn new(
        base_url: &str,
        table: &str,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            endpoint: format!("{}/rest/v1/{}", base_url.trim_end_matches('/'), table),
            api_key: api_key.into(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, reqwest::Error> {
        Self::new(
            &config.supabase_url,
            &config.leads_table,
            config.supabase_key.clone(),
            config.request_timeout,
        )
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Insert one row and return the representation the table stored
    pub async fn insert(&self, lead: &NewLead) -> Result<LeadRecord, StoreError> {
        let response = self
            .client
            .post(&self.endpoint)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .header("Prefer", "return=representation")
            .json(&[lead])
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        let body = response.text().await.map_err(transport_error)?;

        if status.is_success() {
            parse_inserted(&body)
        } else {
            let message = error_message(&body)
                .or_else(|| status.canonical_reason().map(str::to_string))
                .unwrap_or_else(|| format!("Lead store returned {}", status.as_u16()));
            Err(StoreError::rejected(status.as_u16(), message))
        }
    }
}

fn transport_error(err: reqwest::Error) -> StoreError {
    if err.is_timeout() {
        StoreError::Timeout
    } else {
        StoreError::Network(err.to_string())
    }
}

/// `message` of a PostgREST error body, else the raw body if it has any text
fn error_message(body: &str) -> Option<String> {
    match serde_json::from_str::<PostgrestError>(body) {
        Ok(PostgrestError {
            message: Some(message),
            ..
        }) => Some(message),
        _ => Some(body.trim().to_string()).filter(|text| !text.is_empty()),
    }
}

fn parse_inserted(body: &str) -> Result<LeadRecord, StoreError> {
    let rows: Vec<LeadRecord> =
        serde_json::from_str(body).map_err(|e| StoreError::InvalidResponse(e.to_string()))?;

    rows.into_iter()
        .next()
        .ok_or_else(|| StoreError::InvalidResponse("no row returned".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::leads::LeadId;
    use crate::core::test_support::spawn_upstream;
    use axum::{Json, Router, http::HeaderMap, http::StatusCode, routing::post};
    use serde_json::{Value, json};

    async fn fake_table(headers: HeaderMap, Json(rows): Json<Value>) -> (StatusCode, Json<Value>) {
        let authorized = headers.get("apikey").is_some_and(|v| v == "service-key")
            && headers
                .get("authorization")
                .is_some_and(|v| v == "Bearer service-key");
        if !authorized {
            return (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "message": "Invalid API key" })),
            );
        }

        let wants_representation = headers
            .get("prefer")
            .is_some_and(|v| v == "return=representation");
        if !wants_representation {
            return (StatusCode::CREATED, Json(json!([])));
        }

        let mut row = rows[0].clone();
        if row["email"] == "taken@example.com" {
            return (
                StatusCode::CONFLICT,
                Json(json!({
                    "code": "23505",
                    "message": "duplicate key value violates unique constraint \"whitelist_email_key\"",
                    "details": null,
                    "hint": null
                })),
            );
        }

        row["id"] = json!(7);
        (StatusCode::CREATED, Json(json!([row])))
    }

    async fn store_for(router: Router, key: &str) -> PostgrestStore {
        let base = spawn_upstream(router).await;
        PostgrestStore::new(&base, "whitelist", key, Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn test_endpoint_joins_base_and_table() {
        let store = PostgrestStore::new(
            "https://abcd.supabase.co/",
            "whitelist",
            "key",
            Duration::from_secs(1),
        )
        .unwrap();

        assert_eq!(store.endpoint(), "https://abcd.supabase.co/rest/v1/whitelist");
    }

    #[test]
    fn test_error_message_prefers_message_field() {
        assert_eq!(
            error_message(r#"{"code":"23502","message":"null value in column"}"#),
            Some("null value in column".to_string())
        );
        assert_eq!(error_message("upstream down"), Some("upstream down".to_string()));
        assert_eq!(error_message("  "), None);
    }

    #[test]
    fn test_parse_inserted_empty_representation() {
        assert!(matches!(
            parse_inserted("[]"),
            Err(StoreError::InvalidResponse(_))
        ));
    }

    #[tokio::test]
    async fn test_insert_returns_stored_representation() {
        let store = store_for(
            Router::new().route("/rest/v1/whitelist", post(fake_table)),
            "service-key",
        )
        .await;
        let lead = NewLead::new("Ana", "ana@example.com").unwrap();

        let record = store.insert(&lead).await.unwrap();

        assert_eq!(record.id, Some(LeadId::Number(7)));
        assert_eq!(record.name, "Ana");
        assert_eq!(record.email, "ana@example.com");
        assert!(record.phone.is_none());
    }

    #[tokio::test]
    async fn test_constraint_violation_keeps_table_message() {
        let store = store_for(
            Router::new().route("/rest/v1/whitelist", post(fake_table)),
            "service-key",
        )
        .await;
        let lead = NewLead::new("Ana", "taken@example.com").unwrap();

        let err = store.insert(&lead).await.unwrap_err();

        assert_eq!(
            err,
            StoreError::rejected(
                409,
                "duplicate key value violates unique constraint \"whitelist_email_key\""
            )
        );
    }

    #[tokio::test]
    async fn test_wrong_key_is_rejected() {
        let store = store_for(
            Router::new().route("/rest/v1/whitelist", post(fake_table)),
            "wrong-key",
        )
        .await;
        let lead = NewLead::new("Ana", "ana@example.com").unwrap();

        let err = store.insert(&lead).await.unwrap_err();

        assert_eq!(err, StoreError::rejected(401, "Invalid API key"));
    }

    #[tokio::test]
    async fn test_slow_table_times_out() {
        let router = Router::new().route(
            "/rest/v1/whitelist",
            post(|| async {
                tokio::time::sleep(Duration::from_secs(2)).await;
                StatusCode::CREATED
            }),
        );
        let base = spawn_upstream(router).await;
        let store =
            PostgrestStore::new(&base, "whitelist", "key", Duration::from_millis(100)).unwrap();
        let lead = NewLead::new("Ana", "ana@example.com").unwrap();

        let err = store.insert(&lead).await.unwrap_err();

        assert_eq!(err, StoreError::Timeout);
    }

    #[tokio::test]
    async fn test_unreachable_table_is_a_network_error() {
        let store = PostgrestStore::new(
            "http://127.0.0.1:1",
            "whitelist",
            "key",
            Duration::from_secs(1),
        )
        .unwrap();
        let lead = NewLead::new("Ana", "ana@example.com").unwrap();

        let err = store.insert(&lead).await.unwrap_err();

        assert!(matches!(err, StoreError::Network(_)));
    }
}
