//! Service cards with hover detail popups.

use leptos::*;

use crate::content::SERVICES;
use crate::services::go_to;
use crate::state::PageState;
use crate::types::{FormStatus, Section};

#[component]
pub fn ServiceCards(state: PageState) -> impl IntoView {
    let cards = SERVICES
        .iter()
        .map(|service| {
            let on_book = move |_| {
                go_to(Section::Book);
                state.set_status(FormStatus::info(format!("Booking for {}", service.title)));
            };

            view! {
                <div class="bg-white p-5 rounded-xl shadow-sm service-card group">
                    <div class="text-emerald-600 font-bold">{service.title}</div>
                    <div class="mt-2 text-gray-600">{service.summary}</div>
                    <div class="mt-4">
                        <button
                            class="text-sm text-emerald-700 cursor-pointer bg-transparent btn-dynamic"
                            on:click=on_book
                        >
                            "Book a consult →"
                        </button>
                    </div>

                    <div class="service-popup" aria-hidden="true">
                        <div class="service-popup-inner">
                            <div class="font-semibold text-sm">{service.title}</div>
                            <div class="mt-2 text-xs text-gray-600">{service.detail}</div>
                        </div>
                    </div>
                </div>
            }
        })
        .collect_view();

    view! {
        <section id=Section::Services.id() class="max-w-6xl mx-auto px-6 py-12">
            <h2 class="text-2xl font-bold">"Services"</h2>
            <p class="mt-2 text-gray-600">"Comprehensive services tailored to your health goals."</p>
            <div class="mt-6 grid sm:grid-cols-2 lg:grid-cols-3 gap-6">{cards}</div>
        </section>
    }
}
