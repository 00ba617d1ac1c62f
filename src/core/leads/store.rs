//! Remote lead store seam

use async_trait::async_trait;

use super::model::{LeadRecord, NewLead};

/// Failure of a remote insert.
///
/// Display is the message the user sees, so store-reported text is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The store answered and refused the row (constraint violation, bad column, ...)
    Rejected { status: u16, message: String },
    /// The store could not be reached
    Network(String),
    /// No answer within the request timeout
    Timeout,
    /// The store answered with something that is not a lead
    InvalidResponse(String),
}

impl StoreError {
    pub fn rejected(status: u16, message: impl Into<String>) -> Self {
        StoreError::Rejected {
            status,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Rejected { message, .. } => write!(f, "{}", message),
            StoreError::Network(message) => write!(f, "{}", message),
            StoreError::Timeout => write!(f, "Request timed out"),
            StoreError::InvalidResponse(detail) => {
                write!(f, "Unexpected response from lead store: {}", detail)
            }
        }
    }
}

impl std::error::Error for StoreError {}

/// Hosted table holding leads.
///
/// Runs on the UI's event loop, so implementations need not be `Send`.
#[async_trait(?Send)]
pub trait LeadStore {
    /// Insert one lead and return the stored representation
    async fn insert_lead(&self, lead: &NewLead) -> Result<LeadRecord, StoreError>;
}
