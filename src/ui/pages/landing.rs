//! Landing page component
//!
//! The promotional page with the early-access form in the hero and a second
//! signup form in a dismissible sticky bar.

use leptos::prelude::*;
use leptos_router::components::A;

use super::{BETA_SEATS, SEATS_LEFT};
use crate::core::leads::LeadFormOptions;
use crate::ui::icon::{Icon, icons};
use crate::ui::lead_form::{LeadForm, LeadFormLayout};

#[cfg(not(feature = "ssr"))]
use animation::{CHAT_PERIOD, COUNTER_DELAY, COUNTER_TARGET, COUNTER_TICK, next_chat_step, next_count};

#[cfg_attr(feature = "ssr", allow(dead_code))]
mod animation {
    use std::time::Duration;

    /// Frames of the chat widget: customer question, bot typing, bot reply
    pub const CHAT_STEPS: usize = 3;
    pub const CHAT_PERIOD: Duration = Duration::from_secs(3);

    /// Testimonial counter: start delay, tick and final value
    pub const COUNTER_DELAY: Duration = Duration::from_secs(2);
    pub const COUNTER_TICK: Duration = Duration::from_millis(50);
    pub const COUNTER_TARGET: u32 = 37;

    pub fn next_chat_step(step: usize) -> usize {
        (step + 1) % CHAT_STEPS
    }

    pub fn next_count(current: u32) -> u32 {
        (current + 1).min(COUNTER_TARGET)
    }
}

/// Landing page component
#[component]
pub fn LandingPage() -> impl IntoView {
    let sticky_visible = RwSignal::new(true);

    view! {
        <div class="min-h-screen bg-white relative overflow-hidden">
            <Hero />
            <PainSection />
            <HowItWorks />
            <ChatWidget />
            <Testimonial />
            <Offer />

            <Show when=move || sticky_visible.get()>
                <StickyCta visible=sticky_visible />
            </Show>
        </div>
    }
}

#[component]
fn Hero() -> impl IntoView {
    let value_props = ["24/7 auto-reply", "Buy/FAQ intent tags", "Push to Shopify"];

    view! {
        <section class="relative pt-16 pb-24 bg-gradient-to-br from-red-600 via-red-700 to-red-800 overflow-hidden">
            <div class="absolute inset-0 bg-black/10"></div>

            <div class="relative max-w-6xl mx-auto px-4 sm:px-6 lg:px-8 text-center">
                <div class="inline-block bg-yellow-400 text-black px-4 py-2 rounded-full font-bold text-sm mb-6 animate-pulse-soft">
                    {format!("🔥 Only {} beta seats • {} left", BETA_SEATS, SEATS_LEFT)}
                </div>

                <h1 class="text-4xl md:text-6xl lg:text-7xl font-bold text-white mb-6 leading-tight animate-fade-up">
                    "Stop Answering 200" <br /> "WhatsApp Messages" <br /> "a Day."
                </h1>

                <p class="text-xl md:text-2xl text-red-100 mb-8 max-w-4xl mx-auto leading-relaxed animate-fade-up">
                    "Our AI turns every chat into a paid order, before you can finish your coffee."
                </p>

                <ul class="flex flex-wrap justify-center gap-6 mb-12 text-white">
                    {value_props
                        .into_iter()
                        .map(|text| view! {
                            <li class="flex items-center gap-2">
                                <Icon name=icons::CHECK_CIRCLE class="w-5 h-5" />
                                <span class="font-medium">{text}</span>
                            </li>
                        })
                        .collect_view()}
                </ul>

                <div class="relative max-w-md mx-auto mb-8 text-left hero-form">
                    <LeadForm
                        form_id="hero"
                        options=LeadFormOptions::early_access()
                        submit_label="Get Early Access →"
                    />
                </div>

                <p class="text-red-200 text-sm">
                    "Loved by PH brands like "
                    <span class="font-semibold text-white">"Tote&Go"</span>
                    " and "
                    <span class="font-semibold text-white">"GadgetLab"</span>
                </p>
            </div>
        </section>
    }
}

#[component]
fn PainSection() -> impl IntoView {
    let stats = [
        ("42%", "of PH shoppers drop off after 10 min wait"),
        ("3h", "Store owners spend daily copy-pasting order details"),
        ("₱780", "Average lost basket per missed chat"),
    ];

    view! {
        <section class="py-16 bg-gray-900 text-white">
            <div class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8">
                <h2 class="text-3xl md:text-4xl font-bold text-red-400 mb-12 text-center">
                    "The Hidden Cost of Slow WhatsApp Response"
                </h2>

                <div class="grid md:grid-cols-3 gap-8 mb-12">
                    {stats
                        .into_iter()
                        .map(|(stat, desc)| view! {
                            <div class="text-center p-6 bg-red-900/30 rounded-xl border border-red-700">
                                <div class="text-4xl font-bold text-red-400 mb-2">{stat}</div>
                                <p class="text-red-100">{desc}</p>
                            </div>
                        })
                        .collect_view()}
                </div>

                // Missed-chat mock
                <div class="max-w-sm mx-auto bg-gray-800 rounded-2xl p-4 border border-red-700">
                    <div class="bg-green-600 text-white p-3 rounded-lg mb-2">
                        <div class="flex items-center gap-2 mb-2">
                            <div class="w-8 h-8 bg-white/20 rounded-full"></div>
                            <span class="font-medium">"Customer"</span>
                        </div>
                        <p class="text-sm">
                            "Hi, is this dress available in size M? How much shipping to Cebu?"
                        </p>
                        <div class="text-xs text-green-200 mt-1">"12:45 PM"</div>
                    </div>
                    <div class="text-center py-4 animate-shake">
                        <div class="flex items-center justify-center gap-2 text-red-400">
                            <Icon name=icons::MESSAGE_CIRCLE class="w-4 h-4" />
                            <span class="text-sm font-medium">"Customer left chat"</span>
                        </div>
                        <div class="text-xs text-gray-400 mt-1">"15 minutes ago"</div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn HowItWorks() -> impl IntoView {
    let steps = [
        (icons::MESSAGE_CIRCLE, "Connect WhatsApp in 2 min", "No coding required"),
        (icons::CLOCK, "AI auto-replies & tags intent", "In less than 5 seconds"),
        (icons::SHOPPING_CART, "Orders push to Shopify/HubSpot", "See only hot carts"),
    ];

    view! {
        <section class="py-16 bg-white">
            <div class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="text-center mb-12">
                    <h2 class="text-3xl md:text-4xl font-bold text-gray-900 mb-4">"How It Works"</h2>
                    <p class="text-xl text-gray-600">"Three steps to never miss a sale again"</p>
                </div>

                <div class="grid md:grid-cols-3 gap-8">
                    {steps
                        .into_iter()
                        .enumerate()
                        .map(|(index, (icon, title, desc))| view! {
                            <div class="text-center transition-transform hover:scale-105">
                                <div class="w-16 h-16 bg-green-100 rounded-2xl flex items-center justify-center mx-auto mb-6">
                                    <Icon name=icon class="w-8 h-8" />
                                </div>
                                <div class="bg-green-600 text-white w-8 h-8 rounded-full flex items-center justify-center text-lg font-bold mx-auto mb-4">
                                    {index + 1}
                                </div>
                                <h3 class="text-xl font-semibold text-gray-900 mb-3">{title}</h3>
                                <p class="text-gray-600">{desc}</p>
                            </div>
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

/// Bot conversation that cycles question, typing and reply
#[component]
fn ChatWidget() -> impl IntoView {
    let chat_step = RwSignal::new(0usize);

    #[cfg(not(feature = "ssr"))]
    Effect::new(move |_| {
        match set_interval_with_handle(
            move || chat_step.update(|step| *step = next_chat_step(*step)),
            CHAT_PERIOD,
        ) {
            Ok(handle) => on_cleanup(move || handle.clear()),
            Err(e) => leptos::logging::warn!("Chat animation not started: {:?}", e),
        }
    });

    view! {
        <section class="py-16 bg-gray-50">
            <div class="max-w-4xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="bg-white rounded-2xl shadow-xl p-6 max-w-sm mx-auto">
                    <div class="flex items-center gap-3 mb-4 pb-3 border-b">
                        <div class="w-8 h-8 bg-green-500 rounded-full flex items-center justify-center">
                            <Icon name=icons::USERS class="w-4 h-4" />
                        </div>
                        <span class="font-semibold">"WhatsApp Bot"</span>
                        <div class="ml-auto w-2 h-2 bg-green-500 rounded-full"></div>
                    </div>

                    <div class="space-y-3 min-h-16" aria-live="polite">
                        {move || match chat_step.get() {
                            0 => view! {
                                <div class="bg-gray-100 p-3 rounded-lg ml-8 animate-slide-left">
                                    <p class="text-sm">"Hi, do you have this in blue?"</p>
                                </div>
                            }.into_any(),
                            1 => view! {
                                <div class="bg-green-100 p-3 rounded-lg mr-8 animate-slide-right">
                                    <div class="flex gap-1" aria-label="Bot is typing">
                                        <div class="w-2 h-2 bg-green-600 rounded-full animate-bounce"></div>
                                        <div class="w-2 h-2 bg-green-600 rounded-full animate-bounce [animation-delay:0.1s]"></div>
                                        <div class="w-2 h-2 bg-green-600 rounded-full animate-bounce [animation-delay:0.2s]"></div>
                                    </div>
                                </div>
                            }.into_any(),
                            _ => view! {
                                <div class="bg-green-100 p-3 rounded-lg mr-8 animate-slide-right">
                                    <p class="text-sm">
                                        "Yes! We have it in blue, size M. ₱1,299 + free shipping. Want me to reserve it?"
                                    </p>
                                </div>
                            }.into_any(),
                        }}
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn Testimonial() -> impl IntoView {
    let counter = RwSignal::new(0u32);

    #[cfg(not(feature = "ssr"))]
    Effect::new(move |_| {
        let ticker = StoredValue::new(None::<IntervalHandle>);

        let start = move || {
            let tick = move || {
                counter.update(|c| *c = next_count(*c));
                if counter.get_untracked() >= COUNTER_TARGET {
                    if let Some(handle) = ticker.get_value() {
                        handle.clear();
                    }
                }
            };
            match set_interval_with_handle(tick, COUNTER_TICK) {
                Ok(handle) => ticker.set_value(Some(handle)),
                Err(e) => leptos::logging::warn!("Counter animation not started: {:?}", e),
            }
        };

        let delay = set_timeout_with_handle(start, COUNTER_DELAY).ok();
        on_cleanup(move || {
            if let Some(handle) = delay {
                handle.clear();
            }
            if let Some(handle) = ticker.get_value() {
                handle.clear();
            }
        });
    });

    view! {
        <section class="py-16 bg-green-50">
            <div class="max-w-4xl mx-auto px-4 sm:px-6 lg:px-8 text-center">
                <blockquote class="text-2xl md:text-3xl font-medium text-gray-900 mb-8 leading-relaxed">
                    "\"We cut response time from 12 min to 12 sec and recovered ₱112k in abandoned carts within the first week.\""
                </blockquote>

                <div class="flex items-center justify-center gap-4 mb-6">
                    <div class="w-12 h-12 bg-green-600 rounded-full flex items-center justify-center">
                        <span class="text-white font-bold">"MT"</span>
                    </div>
                    <div class="text-left">
                        <div class="font-semibold text-gray-900">"Mark Tan"</div>
                        <div class="text-gray-600">"Founder @ BlueTote.ph"</div>
                    </div>
                </div>

                <div class="inline-block bg-green-600 text-white px-6 py-3 rounded-full font-bold text-lg">
                    {move || format!("+{}% qualified orders", counter.get())}
                </div>
            </div>
        </section>
    }
}

#[component]
fn Offer() -> impl IntoView {
    view! {
        <section class="py-16 pb-40 bg-gray-900 text-white">
            <div class="max-w-4xl mx-auto px-4 sm:px-6 lg:px-8 text-center">
                <h2 class="text-3xl md:text-4xl font-bold mb-8">"7-day free run • No card required"</h2>
                <p class="text-xl text-gray-300 mb-8">"Keep every peso you earn."</p>
                <div class="bg-yellow-400 text-black p-6 rounded-xl font-bold text-lg animate-shake">
                    "No qualified order in 24h? We extend beta 7 days free."
                </div>
                <p class="mt-8 text-gray-400">
                    "Prefer to talk first? "
                    <A href="/waitlist" attr:class="underline text-white">
                        "Join the waitlist with your WhatsApp number"
                    </A>
                </p>
            </div>
        </section>
    }
}

/// Bottom bar with the second signup form
#[component]
fn StickyCta(visible: RwSignal<bool>) -> impl IntoView {
    view! {
        <div class="fixed bottom-0 left-0 right-0 bg-red-600 text-white p-4 shadow-2xl z-50 animate-slide-up">
            <div class="max-w-4xl mx-auto relative">
                <div class="flex items-start gap-2">
                    <div class="flex-1 sticky-form">
                        <LeadForm
                            form_id="sticky"
                            options=LeadFormOptions::early_access()
                            submit_label=format!("Claim My Spot ({} left)", SEATS_LEFT)
                            layout=LeadFormLayout::Inline
                        />
                    </div>
                    <button
                        type="button"
                        class="text-red-200 hover:text-white ml-2 mt-3"
                        aria-label="Dismiss"
                        on:click=move |_| visible.set(false)
                    >
                        <Icon name=icons::X class="w-5 h-5" />
                    </button>
                </div>

                <div class="flex justify-center gap-4 mt-2 text-xs text-red-200">
                    <span>"GDPR"</span>
                    <span>"•"</span>
                    <span>"Made for PH stores"</span>
                    <span>"•"</span>
                    <span>"Cancel anytime"</span>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::animation::*;

    #[test]
    fn test_chat_cycles_through_three_frames() {
        let frames: Vec<usize> = std::iter::successors(Some(0), |s| Some(next_chat_step(*s)))
            .take(7)
            .collect();

        assert_eq!(frames, vec![0, 1, 2, 0, 1, 2, 0]);
    }

    #[test]
    fn test_counter_stops_at_target() {
        let mut count = 0;
        for _ in 0..100 {
            count = next_count(count);
        }

        assert_eq!(count, COUNTER_TARGET);
        assert_eq!(next_count(COUNTER_TARGET - 1), COUNTER_TARGET);
    }
}
