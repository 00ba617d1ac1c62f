use leptos::prelude::*;

/// Small spinner for use inside buttons
#[component]
pub fn InlineSpinner(
    /// Additional CSS classes
    #[prop(default = String::new())]
    class: String,
) -> impl IntoView {
    view! {
        <span
            class=format!("spinner spinner-circle spinner-sm spinner-inline {}", class)
            aria-hidden="true"
        ></span>
    }
}

/// Submit button that swaps its label while a request is pending
#[component]
pub fn LoadingButton(
    /// Whether button is in loading state
    #[prop(into)]
    loading: Signal<bool>,
    /// Button text when not loading
    text: String,
    /// Button text when loading
    #[prop(default = "Processing...".to_string())]
    loading_text: String,
    /// Additional CSS classes
    #[prop(default = String::new())]
    class: String,
) -> impl IntoView {
    let full_classes = if class.is_empty() {
        "btn-base btn-primary".to_string()
    } else {
        format!("btn-base btn-primary {}", class)
    };

    view! {
        <button
            type="submit"
            class=full_classes
            disabled=move || loading.get()
            aria-busy=move || loading.get().to_string()
        >
            <Show
                when=move || loading.get()
                fallback=move || view! { <span>{text.clone()}</span> }
            >
                <span class="flex items-center justify-center gap-2">
                    <InlineSpinner />
                    <span>{loading_text.clone()}</span>
                </span>
            </Show>
        </button>
    }
}
