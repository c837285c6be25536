//! About / credentials section

use leptos::*;

use crate::config::{PORTRAIT_IMAGE_URL, PRACTITIONER_NAME};
use crate::content::{ABOUT_BIO, CREDENTIALS};
use crate::services::go_to;
use crate::types::Section;

#[component]
pub fn About() -> impl IntoView {
    let first_name = PRACTITIONER_NAME.split_whitespace().next().unwrap_or(PRACTITIONER_NAME);

    view! {
        <section id=Section::About.id() class="bg-emerald-50 py-12">
            <div class="max-w-6xl mx-auto px-6 grid md:grid-cols-3 gap-8 items-center">
                <div class="md:col-span-2">
                    <h3 class="text-2xl font-bold">"About " {first_name}</h3>
                    <p class="mt-3 text-gray-700">{ABOUT_BIO}</p>

                    <ul class="mt-4 grid sm:grid-cols-2 gap-2 text-sm text-gray-700">
                        {CREDENTIALS.iter().map(|item| view! { <li>"✔ " {*item}</li> }).collect_view()}
                    </ul>

                    <div class="mt-6 flex gap-3">
                        <button
                            class="px-4 py-2 rounded bg-white border btn-dynamic"
                            on:click=move |_| go_to(Section::Contact)
                        >
                            "Clinic Address"
                        </button>
                        <button
                            class="px-4 py-2 rounded bg-emerald-600 text-white btn-dynamic"
                            on:click=move |_| go_to(Section::Book)
                        >
                            "Book Now"
                        </button>
                    </div>
                </div>

                <div class="flex items-center justify-center">
                    <img src=PORTRAIT_IMAGE_URL alt="doctor" class="w-56 h-56 object-cover rounded-xl shadow"/>
                </div>
            </div>
        </section>
    }
}
