//! Lead submission workflow
//!
//! validate → remote insert → state transition. Navigation after a success is left
//! to the caller, which gets the configured [`Redirect`] back through
//! [`LeadFormOptions`].

use std::cell::RefCell;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use super::form_state::{FormState, SubmitRejection};
use super::model::{LeadRecord, ValidationError};
use super::store::LeadStore;

/// Route the confirmation page is served on
pub const THANK_YOU_ROUTE: &str = "/thank-you";

/// Delay before leaving the page after a successful early-access signup
pub const REDIRECT_DELAY: Duration = Duration::from_millis(2000);

/// Navigation scheduled after a successful submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect {
    pub route: String,
    pub delay: Duration,
}

/// Per-form behavior differences
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeadFormOptions {
    /// Whether the form collects (and requires) a WhatsApp number
    pub require_phone: bool,
    /// Text shown once the lead is stored
    pub success_message: String,
    /// Optional navigation after success
    pub redirect: Option<Redirect>,
}

impl LeadFormOptions {
    /// Waitlist form: name, email and WhatsApp number; stays on the page
    pub fn waitlist() -> Self {
        Self {
            require_phone: true,
            success_message: "Thanks! We got your request.".to_string(),
            redirect: None,
        }
    }

    /// Early-access form: name and email; goes to the thank-you page
    pub fn early_access() -> Self {
        Self {
            require_phone: false,
            success_message: "You're on the list!".to_string(),
            redirect: Some(Redirect {
                route: THANK_YOU_ROUTE.to_string(),
                delay: REDIRECT_DELAY,
            }),
        }
    }
}

/// Owned token telling an async completion whether its form still exists
#[derive(Debug, Clone)]
pub struct Liveness(Arc<AtomicBool>);

impl Liveness {
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    pub fn is_alive(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    /// Mark the owning form as torn down. Every clone observes it.
    pub fn discard(&self) {
        self.0.store(false, Ordering::Release);
    }
}

impl Default for Liveness {
    fn default() -> Self {
        Self::new()
    }
}

/// Somewhere a [`FormState`] lives
pub trait FormStateHandle {
    /// Run `f` against the state. `None` when the state has been disposed.
    fn update_state<R>(&self, f: impl FnOnce(&mut FormState) -> R) -> Option<R>;
}

impl FormStateHandle for RefCell<FormState> {
    fn update_state<R>(&self, f: impl FnOnce(&mut FormState) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

/// Result of one call to [`LeadSubmissionHandler::submit`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Local validation failed; nothing was sent
    Invalid(ValidationError),
    /// A submission was already in flight; nothing was sent
    InFlight,
    /// The store accepted the lead
    Accepted(LeadRecord),
    /// The store refused or could not be reached
    Failed(String),
    /// The form went away; the state was left alone
    Discarded,
}

/// Drives one form's submissions against a [`LeadStore`]
pub struct LeadSubmissionHandler<S> {
    store: S,
    options: LeadFormOptions,
}

impl<S: LeadStore> LeadSubmissionHandler<S> {
    pub fn new(store: S, options: LeadFormOptions) -> Self {
        Self { store, options }
    }

    pub fn options(&self) -> &LeadFormOptions {
        &self.options
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Submit the form's current fields.
    ///
    /// Nothing prevents two sequential submissions with the same input from
    /// producing two inserts.
    pub async fn submit<H>(&self, form: &H, liveness: &Liveness) -> SubmitOutcome
    where
        H: FormStateHandle + ?Sized,
    {
        if !liveness.is_alive() {
            return SubmitOutcome::Discarded;
        }

        let require_phone = self.options.require_phone;
        let lead = match form.update_state(|state| state.begin_submit(require_phone)) {
            None => return SubmitOutcome::Discarded,
            Some(Err(SubmitRejection::InFlight)) => return SubmitOutcome::InFlight,
            Some(Err(SubmitRejection::Invalid(err))) => return SubmitOutcome::Invalid(err),
            Some(Ok(lead)) => lead,
        };

        let result = self.store.insert_lead(&lead).await;

        if let Err(err) = &result {
            leptos::logging::warn!("Lead insert failed: {}", err);
        }

        if !liveness.is_alive() {
            return SubmitOutcome::Discarded;
        }

        if form
            .update_state(|state| state.finish_submit(&result))
            .is_none()
        {
            return SubmitOutcome::Discarded;
        }

        match result {
            Ok(record) => SubmitOutcome::Accepted(record),
            Err(err) => SubmitOutcome::Failed(err.to_string()),
        }
    }
}
