//! Browser-side lead store
//!
//! Posts leads to the server's `/api/leads` route, which holds the table key and
//! forwards to the hosted table. Error text from the table comes back verbatim in
//! `{error}`.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::model::{LeadRecord, NewLead};
use super::store::{LeadStore, StoreError};

/// Path of the server route that inserts leads
pub const LEADS_API_PATH: &str = "/api/leads";

/// How long the browser waits for `/api/leads`
pub const CLIENT_TIMEOUT: Duration = Duration::from_secs(10);

/// Error body returned by the JSON endpoints
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// [`LeadStore`] backed by the server's leads endpoint
#[derive(Debug, Clone)]
pub struct ApiLeadStore {
    endpoint: String,
    timeout: Duration,
}

impl ApiLeadStore {
    pub fn new() -> Self {
        Self {
            endpoint: LEADS_API_PATH.to_string(),
            timeout: CLIENT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Default for ApiLeadStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(not(feature = "ssr"))]
#[async_trait(?Send)]
impl LeadStore for ApiLeadStore {
    async fn insert_lead(&self, lead: &NewLead) -> Result<LeadRecord, StoreError> {
        use futures::future::{Either, select};
        use gloo_net::http::Request;
        use gloo_timers::future::TimeoutFuture;

        let request = Request::post(&self.endpoint)
            .json(lead)
            .map_err(|e| StoreError::Network(e.to_string()))?;

        let timeout_ms = u32::try_from(self.timeout.as_millis()).unwrap_or(u32::MAX);
        let response = match select(
            Box::pin(request.send()),
            Box::pin(TimeoutFuture::new(timeout_ms)),
        )
        .await
        {
            Either::Left((result, _)) => result.map_err(|e| StoreError::Network(e.to_string()))?,
            Either::Right(_) => return Err(StoreError::Timeout),
        };

        if response.ok() {
            return response
                .json::<LeadRecord>()
                .await
                .map_err(|e| StoreError::InvalidResponse(e.to_string()));
        }

        let status = response.status();
        let status_text = response.status_text();
        let message = match response.json::<ErrorBody>().await {
            Ok(body) => body.error,
            Err(_) => status_text,
        };

        Err(StoreError::rejected(status, message))
    }
}

#[cfg(feature = "ssr")]
#[async_trait(?Send)]
impl LeadStore for ApiLeadStore {
    async fn insert_lead(&self, _lead: &NewLead) -> Result<LeadRecord, StoreError> {
        Err(StoreError::Network(
            "Lead submission is only available in the browser".to_string(),
        ))
    }
}
