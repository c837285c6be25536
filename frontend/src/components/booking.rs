//! Appointment request form.
//!
//! Submitting never talks to a server: the values are packed into a
//! `mailto:` draft and handed to the visitor's mail client.

use leptos::*;

use crate::services::{send_booking_request, HANDOFF_MESSAGE};
use crate::state::PageState;
use crate::types::{AppError, FormField, FormStatus, Section};

#[component]
pub fn BookingSection(state: PageState) -> impl IntoView {
    let value_of = move |field: FormField| move || state.form.with(|form| form.get(field).to_string());
    let on_edit = move |field: FormField| move |ev: ev::Event| state.set_field(field, event_target_value(&ev));

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let form = state.form.get_untracked();
        let status = match send_booking_request(&form) {
            Ok(_) => FormStatus::success(HANDOFF_MESSAGE),
            Err(AppError::Booking(e)) => FormStatus::error(e.to_string()),
            Err(e) => {
                log::error!("❌ Mail handoff failed: {}", e);
                FormStatus::error(format!("Could not open your email client: {}", e))
            }
        };
        state.set_status(status);
    };

    view! {
        <section id=Section::Book.id() class="max-w-4xl mx-auto px-6 py-12">
            <h3 class="text-2xl font-bold">"Book an Appointment"</h3>
            <p class="text-gray-600 mt-2">"Fill this quick form — we will confirm by email/phone."</p>

            <form class="mt-6 bg-white p-6 rounded-xl shadow-sm grid gap-4" on:submit=on_submit>
                <div class="grid sm:grid-cols-2 gap-4">
                    <input
                        name="name"
                        placeholder="Full name"
                        class="p-3 border rounded"
                        prop:value=value_of(FormField::Name)
                        on:input=on_edit(FormField::Name)
                    />
                    <input
                        name="email"
                        placeholder="Email"
                        class="p-3 border rounded"
                        prop:value=value_of(FormField::Email)
                        on:input=on_edit(FormField::Email)
                    />
                </div>
                <div class="grid sm:grid-cols-2 gap-4">
                    <input
                        name="phone"
                        placeholder="Phone"
                        class="p-3 border rounded"
                        prop:value=value_of(FormField::Phone)
                        on:input=on_edit(FormField::Phone)
                    />
                    <input
                        name="date"
                        type="date"
                        class="p-3 border rounded"
                        prop:value=value_of(FormField::Date)
                        on:input=on_edit(FormField::Date)
                    />
                </div>
                <textarea
                    name="message"
                    rows="4"
                    placeholder="Tell us briefly about your concern"
                    class="p-3 border rounded"
                    prop:value=value_of(FormField::Message)
                    on:input=on_edit(FormField::Message)
                ></textarea>

                <div class="flex items-center gap-4">
                    <button type="submit" class="bg-emerald-600 text-white px-5 py-2 rounded btn-dynamic">
                        "Send Request"
                    </button>
                </div>

                {move || state.status.get().map(|status| view! {
                    <div class=format!("text-sm mt-2 {}", status.kind.css_class())>{status.text}</div>
                })}
            </form>
        </section>
    }
}
