//! FAQ accordion: at most one answer is visible at a time.

use leptos::*;

use crate::content::FAQS;
use crate::state::PageState;
use crate::types::Section;

#[component]
pub fn FaqSection(state: PageState) -> impl IntoView {
    let entries = FAQS
        .iter()
        .enumerate()
        .map(|(idx, entry)| {
            view! {
                <div class="bg-white p-4 rounded shadow-sm">
                    <button
                        class="w-full text-left font-semibold"
                        on:click=move |_| state.toggle_faq(idx)
                    >
                        {entry.question}
                    </button>
                    <Show when=move || state.open_faq.get() == Some(idx)>
                        <div class="mt-2 text-sm text-gray-600">{entry.answer}</div>
                    </Show>
                </div>
            }
        })
        .collect_view();

    view! {
        <section id=Section::Faq.id() class="bg-white/80 py-10">
            <div class="max-w-6xl mx-auto px-6">
                <h3 class="text-2xl font-bold">"FAQ"</h3>
                <div class="mt-4 grid md:grid-cols-2 gap-4 text-gray-700">{entries}</div>
            </div>
        </section>
    }
}
