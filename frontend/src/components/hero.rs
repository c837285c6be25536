//! Hero section component

use leptos::*;

use crate::config::{HERO_IMAGE_URL, MARQUEE_SPEED};
use crate::content::{HERO_BLURB, HERO_HEADLINE, SLOGAN};
use crate::services::go_to;
use crate::types::Section;

#[component]
pub fn Hero() -> impl IntoView {
    let marquee_text = format!("{} —", HERO_HEADLINE);

    view! {
        <section class="max-w-6xl mx-auto px-6 py-16 grid md:grid-cols-2 gap-8 items-center">
            <div>
                <h1 class="text-4xl md:text-5xl font-extrabold leading-tight">
                    // Two copies so the track can loop seamlessly at -50%
                    <div class="marquee" aria-hidden="true">
                        <div class="moving-track" style=format!("--speed: {}", MARQUEE_SPEED)>
                            <span>{marquee_text.clone()}</span>
                            <span>{marquee_text}</span>
                        </div>
                    </div>
                    <span class="sr-only">{HERO_HEADLINE}</span>
                </h1>

                <p class="mt-3 text-sm text-gray-600 italic">"\"" {SLOGAN} "\""</p>
                <p class="mt-4 text-lg text-gray-700">{HERO_BLURB}</p>

                <div class="mt-6 flex flex-wrap gap-3">
                    <button
                        class="inline-block bg-emerald-600 text-white px-6 py-3 rounded-lg shadow btn-dynamic"
                        on:click=move |_| go_to(Section::Book)
                    >
                        "Book Consultation"
                    </button>
                    <button
                        class="inline-block border border-emerald-600 text-emerald-700 px-6 py-3 rounded-lg btn-dynamic"
                        on:click=move |_| go_to(Section::Services)
                    >
                        "View Services"
                    </button>
                </div>

                <div class="mt-8 grid grid-cols-2 gap-4 text-sm">
                    <div class="bg-white/80 p-4 rounded-lg shadow-sm">
                        <div class="text-xs text-gray-500">"Consultation"</div>
                        <div class="font-semibold">"In-person & Online"</div>
                    </div>
                    <div class="bg-white/80 p-4 rounded-lg shadow-sm">
                        <div class="text-xs text-gray-500">"Slogan"</div>
                        <div class="font-semibold">"Food is our first medicine"</div>
                    </div>
                </div>
            </div>

            <div class="flex justify-center md:justify-end">
                <div class="w-full max-w-md rounded-2xl overflow-hidden shadow-2xl bg-white">
                    <img src=HERO_IMAGE_URL alt="nutrition" class="w-full h-64 object-cover"/>
                    <div class="p-6">
                        <div class="text-sm text-gray-500">"Featured plan"</div>
                        <div class="text-xl font-bold">"Starter Nutrition Tune-up"</div>
                        <p class="mt-2 text-gray-600">
                            "One 45 min assessment, personalised plan, sample meal day and follow-up tips."
                        </p>
                        <div class="mt-4 flex gap-2">
                            <button
                                class="text-sm bg-emerald-600 text-white px-4 py-2 rounded btn-dynamic"
                                on:click=move |_| go_to(Section::Book)
                            >
                                "Book"
                            </button>
                            <button
                                class="text-sm border px-4 py-2 rounded btn-dynamic"
                                on:click=move |_| go_to(Section::Contact)
                            >
                                "Enquire"
                            </button>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
