//! Per-form submission state machine
//!
//! `Idle -> Submitting -> {Success, Error}`. A new submission from `Error` or
//! `Success` goes through `Submitting` again; `Success` only returns to `Idle`
//! through [`FormState::reset`].

use super::model::{LeadField, LeadFields, NewLead, ValidationError};
use super::store::StoreError;
use super::LeadRecord;

/// Submission status of one form
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error(String),
}

impl FormStatus {
    pub fn is_submitting(&self) -> bool {
        matches!(self, FormStatus::Submitting)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, FormStatus::Success)
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            FormStatus::Error(message) => Some(message),
            _ => None,
        }
    }
}

/// Why a submission did not start
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitRejection {
    /// A field failed the local shape check
    Invalid(ValidationError),
    /// A submission from this form is still in flight
    InFlight,
}

/// Local state of one lead form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    fields: LeadFields,
    status: FormStatus,
    validation: Option<ValidationError>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &LeadFields {
        &self.fields
    }

    pub fn field(&self, field: LeadField) -> &str {
        self.fields.get(field)
    }

    pub fn status(&self) -> &FormStatus {
        &self.status
    }

    /// Most recent local validation error
    pub fn validation(&self) -> Option<&ValidationError> {
        self.validation.as_ref()
    }

    /// Keystroke update. Clears a validation error on the edited field; never
    /// touches `status`.
    pub fn set_field(&mut self, field: LeadField, value: impl Into<String>) {
        self.fields.set(field, value);
        if self.validation.as_ref().is_some_and(|e| e.field() == field) {
            self.validation = None;
        }
    }

    /// Validate the fields and move to `Submitting`.
    ///
    /// A validation failure leaves `status` untouched.
    pub fn begin_submit(&mut self, require_phone: bool) -> Result<NewLead, SubmitRejection> {
        if self.status.is_submitting() {
            return Err(SubmitRejection::InFlight);
        }

        match self.fields.to_new_lead(require_phone) {
            Ok(lead) => {
                self.validation = None;
                self.status = FormStatus::Submitting;
                Ok(lead)
            }
            Err(err) => {
                self.validation = Some(err.clone());
                Err(SubmitRejection::Invalid(err))
            }
        }
    }

    /// Apply the store's answer to an in-flight submission.
    ///
    /// Success clears the fields; failure keeps them so the user can resubmit.
    /// Ignored unless a submission is in flight.
    pub fn finish_submit(&mut self, result: &Result<LeadRecord, StoreError>) {
        if !self.status.is_submitting() {
            return;
        }

        match result {
            Ok(_) => {
                self.fields.clear();
                self.status = FormStatus::Success;
            }
            Err(err) => {
                self.status = FormStatus::Error(err.to_string());
            }
        }
    }

    /// Full reset after a success: empty fields and back to `Idle`.
    ///
    /// Returns false (and changes nothing) from any other status.
    pub fn reset(&mut self) -> bool {
        if !self.status.is_success() {
            return false;
        }
        self.fields.clear();
        self.validation = None;
        self.status = FormStatus::Idle;
        true
    }
}
