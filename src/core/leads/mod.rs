//! Lead capture
//!
//! This module provides:
//! - The lead model and its shape validation
//! - The per-form submission state machine
//! - The submission workflow and the store seam it drives
//! - The browser store client and, on the server, the hosted table client
//!   and the `/api/leads` endpoint

mod client;
mod form_state;
mod model;
mod store;
mod submission;

#[cfg(feature = "ssr")]
pub mod api;
#[cfg(feature = "ssr")]
pub mod postgrest;

pub use client::{ApiLeadStore, CLIENT_TIMEOUT, ErrorBody, LEADS_API_PATH};
pub use form_state::{FormState, FormStatus, SubmitRejection};
pub use model::{
    LeadField, LeadFields, LeadId, LeadRecord, NewLead, ValidationError, is_valid_email_shape,
};
pub use store::{LeadStore, StoreError};
pub use submission::{
    FormStateHandle, LeadFormOptions, LeadSubmissionHandler, Liveness, REDIRECT_DELAY, Redirect,
    SubmitOutcome, THANK_YOU_ROUTE,
};

#[cfg(feature = "ssr")]
pub use api::{LeadsApiState, leads_api_router};
#[cfg(feature = "ssr")]
pub use postgrest::PostgrestStore;
