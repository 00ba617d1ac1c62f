use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

/// Single-line input with an optional label and inline error
#[component]
pub fn FormField(
    /// Field label text
    label: String,
    /// `name` attribute
    name: &'static str,
    /// Element id, unique per page
    id: String,
    /// Input type (text, email, tel)
    #[prop(default = "text")]
    input_type: &'static str,
    /// Placeholder text
    #[prop(default = String::new())]
    placeholder: String,
    /// Browser autofill hint
    #[prop(default = "off")]
    autocomplete: &'static str,
    /// Keep the label for screen readers only
    #[prop(default = false)]
    hide_label: bool,
    /// Current value signal
    value: Signal<String>,
    /// Input event callback
    on_input: Callback<String>,
    /// Whether field is disabled
    #[prop(into, default = Signal::stored(false))]
    disabled: Signal<bool>,
    /// Optional error message to display
    #[prop(optional)]
    error: Option<Signal<Option<String>>>,
) -> impl IntoView {
    let has_error = move || error.as_ref().and_then(|e| e.get()).is_some();

    view! {
        <div class="space-y-1.5">
            <label for=id.clone() class="label" class:sr-only=hide_label>
                {label}
            </label>
            <input
                id=id
                name=name
                type=input_type
                class="input-base"
                class:border-red-500=has_error
                aria-invalid=move || has_error().to_string()
                placeholder=placeholder
                autocomplete=autocomplete
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
                disabled=move || disabled.get()
            />
            {move || {
                error.as_ref().and_then(|e| e.get()).map(|err| view! {
                    <div class="flex items-center gap-1 text-sm text-red-500" role="alert">
                        <Icon name=icons::ALERT_CIRCLE class="icon-text"/>
                        <span>{err}</span>
                    </div>
                })
            }}
        </div>
    }
}
