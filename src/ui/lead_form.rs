//! Lead capture form
//!
//! One component serves both forms on the site; [`LeadFormOptions`] decides
//! whether the WhatsApp number is collected, what the success text says and
//! whether the visitor is sent to the thank-you page afterwards.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::core::leads::{
    ApiLeadStore, FormState, FormStateHandle, LeadField, LeadFormOptions, LeadSubmissionHandler,
    Liveness, SubmitOutcome,
};
use crate::ui::common::{ErrorMessage, FormField, LoadingButton, SuccessMessage};
use crate::ui::icon::{Icon, icons};

impl FormStateHandle for RwSignal<FormState> {
    fn update_state<R>(&self, f: impl FnOnce(&mut FormState) -> R) -> Option<R> {
        self.try_update(f)
    }
}

/// How the fields are arranged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LeadFormLayout {
    /// One field per row, labels visible
    #[default]
    Stacked,
    /// Single row, labels for screen readers only
    Inline,
}

#[component]
pub fn LeadForm(
    /// Prefix for element ids, unique per page
    form_id: &'static str,
    options: LeadFormOptions,
    #[prop(into)] submit_label: String,
    #[prop(into, default = "Processing...".to_string())] pending_label: String,
    #[prop(optional)] layout: LeadFormLayout,
) -> impl IntoView {
    let state = RwSignal::new(FormState::new());

    let liveness = Liveness::new();
    on_cleanup({
        let liveness = liveness.clone();
        move || liveness.discard()
    });

    let require_phone = options.require_phone;
    let stays_on_page = options.redirect.is_none();
    let success_message = options.success_message.clone();
    let options = StoredValue::new(options);
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let handler = LeadSubmissionHandler::new(ApiLeadStore::new(), options.get_value());
        let liveness = liveness.clone();
        let navigate = navigate.clone();

        spawn_local(async move {
            match handler.submit(&state, &liveness).await {
                SubmitOutcome::Accepted(record) => {
                    leptos::logging::log!(
                        "Lead form {} stored lead {}",
                        form_id,
                        record.id.map(|id| id.to_string()).unwrap_or_default()
                    );
                    if let Some(redirect) = handler.options().redirect.clone() {
                        set_timeout(
                            move || {
                                if liveness.is_alive() {
                                    navigate(&redirect.route, Default::default());
                                }
                            },
                            redirect.delay,
                        );
                    }
                }
                SubmitOutcome::Invalid(err) => {
                    leptos::logging::log!("Lead form {} not sent: {}", form_id, err);
                }
                SubmitOutcome::Failed(_) | SubmitOutcome::InFlight | SubmitOutcome::Discarded => {}
            }
        });
    };

    let submitting = Signal::derive(move || state.with(|s| s.status().is_submitting()));
    let succeeded = move || state.with(|s| s.status().is_success());
    let error = Signal::derive(move || {
        state.with(|s| s.status().error_message().map(|m| format!("Error: {}", m)))
    });
    let success = Signal::derive(move || {
        state.with(|s| s.status().is_success().then(|| success_message.clone()))
    });

    let hide_labels = layout == LeadFormLayout::Inline;
    let form_class = match layout {
        LeadFormLayout::Stacked => "lead-form space-y-4",
        LeadFormLayout::Inline => "lead-form flex flex-col sm:flex-row gap-2 items-start",
    };

    view! {
        <form class=form_class on:submit=on_submit novalidate=true>
            <LeadInput
                state=state
                form_id=form_id
                field=LeadField::Name
                label="Name"
                placeholder="Your Name"
                autocomplete="name"
                hide_label=hide_labels
                disabled=submitting
            />
            <LeadInput
                state=state
                form_id=form_id
                field=LeadField::Email
                label="Email"
                placeholder="you@business.com"
                input_type="email"
                autocomplete="email"
                hide_label=hide_labels
                disabled=submitting
            />
            {require_phone.then(|| view! {
                <LeadInput
                    state=state
                    form_id=form_id
                    field=LeadField::Phone
                    label="WhatsApp number"
                    placeholder="+63 917 123 4567"
                    input_type="tel"
                    autocomplete="tel"
                    hide_label=hide_labels
                    disabled=submitting
                />
            })}

            <LoadingButton
                loading=submitting
                text=submit_label
                loading_text=pending_label
                class="w-full sm:w-auto".to_string()
            />

            <ErrorMessage error=error />
            <SuccessMessage message=success />

            {(stays_on_page && !hide_labels).then(|| view! {
                <Show when=succeeded>
                    <button
                        type="button"
                        class="text-sm underline text-gray-600"
                        on:click=move |_| {
                            state.update(|s| {
                                s.reset();
                            });
                        }
                    >
                        "Add another number"
                    </button>
                </Show>
            })}
        </form>

        {(!stays_on_page).then(|| view! {
            <Show when=succeeded>
                <div class="lead-form-overlay" role="status">
                    <Icon name=icons::CHECK_CIRCLE class="w-10 h-10" />
                    <p class="font-semibold">"Redirecting..."</p>
                </div>
            </Show>
        })}
    }
}

/// One bound input of a [`LeadForm`]
#[component]
fn LeadInput(
    state: RwSignal<FormState>,
    form_id: &'static str,
    field: LeadField,
    label: &'static str,
    placeholder: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    autocomplete: &'static str,
    hide_label: bool,
    disabled: Signal<bool>,
) -> impl IntoView {
    let value = Signal::derive(move || state.with(|s| s.field(field).to_string()));
    let error = Signal::derive(move || {
        state.with(|s| {
            s.validation()
                .filter(|e| e.field() == field)
                .map(ToString::to_string)
        })
    });
    let on_input = Callback::new(move |value: String| state.update(|s| s.set_field(field, value)));

    view! {
        <FormField
            label=label.to_string()
            name=field.as_str()
            id=format!("{}-{}", form_id, field.as_str())
            input_type=input_type
            placeholder=placeholder.to_string()
            autocomplete=autocomplete
            hide_label=hide_label
            value=value
            on_input=on_input
            disabled=disabled
            error=error
        />
    }
}
