//! Waitlist page
//!
//! Collects name, email and WhatsApp number and stays on the page after a
//! successful signup.

use leptos::prelude::*;
use leptos_meta::Title;

use super::{BETA_SEATS, SEATS_LEFT};
use crate::core::leads::LeadFormOptions;
use crate::ui::lead_form::LeadForm;

#[component]
pub fn WaitlistPage() -> impl IntoView {
    view! {
        <Title text="Join the waitlist" />
        <div class="min-h-screen bg-gradient-to-br from-red-600 via-red-700 to-red-800 flex items-center justify-center p-4">
            <div class="w-full">
                <h1 class="text-3xl md:text-4xl font-bold text-white text-center mb-8">
                    "Get your store on WhatsApp autopilot"
                </h1>
                <WaitlistCard spots_left=SEATS_LEFT />
            </div>
        </div>
    }
}

/// Waitlist form card with the remaining-seats note
#[component]
pub fn WaitlistCard(
    spots_left: u32,
    #[prop(default = true)] show_spots_left: bool,
) -> impl IntoView {
    view! {
        <div class="max-w-md mx-auto bg-white p-6 rounded-lg shadow-lg">
            <LeadForm
                form_id="waitlist"
                options=LeadFormOptions::waitlist()
                submit_label="🚀 Join Now - It's Free"
                pending_label="Sending..."
            />
            {show_spots_left.then(|| view! {
                <p class="text-center mt-4 text-sm text-gray-600">
                    "Only " <span class="font-bold">{spots_left}</span>
                    {format!(" spots left out of {}", BETA_SEATS)}
                </p>
            })}
        </div>
    }
}
