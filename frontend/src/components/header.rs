use leptos::*;

use crate::config::{PRACTITIONER_INITIALS, PRACTITIONER_NAME, QUALIFICATIONS};
use crate::content::NAV_SECTIONS;
use crate::services::go_to;
use crate::state::{menu_toggle_label, PageState};
use crate::types::Section;

#[component]
pub fn Header(state: PageState) -> impl IntoView {
    let desktop_links = NAV_SECTIONS
        .iter()
        .map(|&section| {
            let class = if section == Section::Book {
                "bg-emerald-600 text-white px-4 py-2 rounded-lg shadow btn-dynamic"
            } else {
                "hover:text-emerald-700 btn-dynamic"
            };
            view! {
                <button class=class on:click=move |_| go_to(section)>
                    {section.nav_label()}
                </button>
            }
        })
        .collect_view();

    view! {
        <header class="bg-white/60 backdrop-blur sticky top-0 z-40 shadow-sm">
            <div class="max-w-6xl mx-auto px-6 py-4 flex items-center justify-between">
                <div class="flex items-center gap-3">
                    <div class="w-12 h-12 rounded-full bg-emerald-600 text-white flex items-center justify-center font-bold">
                        {PRACTITIONER_INITIALS}
                    </div>
                    <div>
                        <div class="text-lg font-semibold">{PRACTITIONER_NAME}</div>
                        <div class="text-sm text-gray-600">{QUALIFICATIONS}</div>
                    </div>
                </div>

                <nav class="hidden md:flex gap-6 items-center text-sm">
                    {desktop_links}
                </nav>

                <div class="md:hidden flex items-center gap-3">
                    <button class="p-2 rounded-md bg-white/60" on:click=move |_| state.toggle_menu()>
                        {move || menu_toggle_label(state.menu_open.get())}
                    </button>
                    <button
                        class="bg-emerald-600 text-white px-3 py-2 rounded-md text-sm btn-dynamic"
                        on:click=move |_| go_to(Section::Book)
                    >
                        "Book"
                    </button>
                </div>
            </div>

            <Show when=move || state.menu_open.get()>
                <MobileMenu state=state/>
            </Show>
        </header>
    }
}

/// Drop-down link list for narrow screens; closes after a link is chosen.
#[component]
fn MobileMenu(state: PageState) -> impl IntoView {
    let links = NAV_SECTIONS
        .iter()
        .map(|&section| {
            let class = if section == Section::Book {
                "block font-semibold text-emerald-700 text-left btn-dynamic"
            } else {
                "block text-left btn-dynamic"
            };
            view! {
                <button
                    class=class
                    on:click=move |_| {
                        go_to(section);
                        state.menu_open.set(false);
                    }
                >
                    {section.nav_label()}
                </button>
            }
        })
        .collect_view();

    view! {
        <div class="md:hidden bg-white/70 backdrop-blur px-6 py-4 border-t">
            <div class="flex flex-col gap-3">{links}</div>
        </div>
    }
}
