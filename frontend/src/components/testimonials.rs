use leptos::*;

use crate::content::TESTIMONIALS;

#[component]
pub fn Testimonials() -> impl IntoView {
    view! {
        <section class="max-w-6xl mx-auto px-6 py-12">
            <h3 class="text-2xl font-bold">"What patients say"</h3>
            <div class="mt-6 grid sm:grid-cols-2 gap-6">
                {TESTIMONIALS
                    .iter()
                    .map(|t| view! {
                        <div class="bg-white p-6 rounded-xl shadow-sm">
                            <div class="font-semibold">{t.name}</div>
                            <div class="mt-2 text-gray-600">"\"" {t.quote} "\""</div>
                        </div>
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
