//! Footer component, also the `#contact` anchor

use leptos::*;

use crate::config::{CONTACT_EMAIL, INSTAGRAM_HANDLE, INSTAGRAM_URL, PRACTITIONER_NAME, QUALIFICATIONS};
use crate::content::{FOOTER_SECTIONS, OPENING_HOURS};
use crate::services::go_to;
use crate::types::Section;

#[component]
pub fn Footer() -> impl IntoView {
    let year = js_sys::Date::new_0().get_full_year();

    view! {
        <footer id=Section::Contact.id() class="bg-emerald-700 text-white py-10">
            <div class="max-w-6xl mx-auto px-6 grid md:grid-cols-3 gap-6">
                <div>
                    <div class="font-bold text-lg">{PRACTITIONER_NAME}</div>
                    <div class="text-sm mt-2">{QUALIFICATIONS}</div>
                    <div class="mt-1 text-sm">"Email: " {CONTACT_EMAIL}</div>
                    <div class="mt-1 text-sm">
                        "Instagram: "
                        <a href=INSTAGRAM_URL class="underline" target="_blank">{INSTAGRAM_HANDLE}</a>
                    </div>
                </div>

                <div>
                    <div class="font-semibold">"Quick links"</div>
                    <ul class="mt-3 text-sm">
                        {FOOTER_SECTIONS
                            .iter()
                            .map(|&(section, label)| view! {
                                <li>
                                    <button class="hover:underline btn-dynamic" on:click=move |_| go_to(section)>
                                        {label}
                                    </button>
                                </li>
                            })
                            .collect_view()}
                    </ul>
                </div>

                <div>
                    <div class="font-semibold">"Opening hours"</div>
                    {OPENING_HOURS
                        .iter()
                        .map(|&(days, hours)| view! {
                            <div class="mt-1 text-sm">{days} ": " {hours}</div>
                        })
                        .collect_view()}
                </div>
            </div>

            <div class="max-w-6xl mx-auto px-6 mt-8 text-sm text-white/80">
                "© " {year} " " {PRACTITIONER_NAME} ". All rights reserved."
            </div>
        </footer>
    }
}
