use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::ui::icon::{Icon, icons};

/// Confirmation page reached after an early-access signup
#[component]
pub fn ThankYouPage() -> impl IntoView {
    view! {
        <Title text="You're on the list" />
        <div class="min-h-screen bg-green-50 flex flex-col items-center justify-center p-4">
            <div class="text-center max-w-lg">
                <div class="w-24 h-24 mx-auto mb-6 bg-green-600 rounded-full flex items-center justify-center">
                    <Icon name=icons::CHECK_CIRCLE class="w-12 h-12" />
                </div>

                <h1 class="text-4xl font-bold text-gray-900 mb-4">"You're on the list!"</h1>

                <p class="text-lg text-gray-600 mb-8">
                    "We'll reach out on email within 24 hours to connect your WhatsApp. "
                    "Your 7-day free run starts the day your bot goes live."
                </p>

                <A
                    href="/"
                    attr:class="inline-flex items-center gap-2 px-6 py-3 bg-green-600 hover:bg-green-700 text-white font-medium rounded-lg transition-colors"
                >
                    "Back to home"
                    <Icon name=icons::ARROW_RIGHT class="w-4 h-4" />
                </A>
            </div>
        </div>
    }
}
