use leptos::prelude::*;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions};

use super::{
    theme::{ThemeState, ThemeToggle},
    typewriter::TypewriterText,
};
use crate::{theme::palette, typewriter::Cadence};

const NAV_ITEMS: [(&str, &str); 4] = [
    ("Home", "home"),
    ("About Me", "about"),
    ("Blog", "blog"),
    ("Contact", "contact"),
];

fn scroll_to_section(id: &str) {
    if id == "home" {
        let opts = ScrollToOptions::new();
        opts.set_top(0.0);
        opts.set_behavior(ScrollBehavior::Smooth);
        window().scroll_to_with_scroll_to_options(&opts);
        return;
    }
    if let Some(el) = document().get_element_by_id(id) {
        let opts = ScrollIntoViewOptions::new();
        opts.set_behavior(ScrollBehavior::Smooth);
        el.scroll_into_view_with_scroll_into_view_options(&opts);
    }
}

#[component]
pub fn Hero(
    theme: ThemeState,
    phrases: &'static [&'static str],
    cadence: Cadence,
) -> impl IntoView {
    view! {
        <section id="home" class=theme.class(palette::HERO_SECTION)>
            <ThemeToggle theme />
            <nav class="fixed top-6 right-6 z-50 rise-in" style="animation-delay: 500ms">
                <div class=theme.class(palette::NAV_PILL)>
                    {NAV_ITEMS
                        .iter()
                        .enumerate()
                        .map(|(i, (label, id))| {
                            let id = *id;
                            view! {
                                <button
                                    class=theme.class(palette::NAV_LINK)
                                    style=format!("animation-delay: {}ms", 700 + i * 100)
                                    on:click=move |_| scroll_to_section(id)
                                >
                                    {*label}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </nav>

            <div class="absolute inset-0 opacity-30">
                <div class=theme.class(palette::HERO_BLOB_A)></div>
                <div class=theme.class(palette::HERO_BLOB_B)></div>
                <div class=theme.class(palette::HERO_BLOB_C)></div>
            </div>

            <div class="text-center z-10 px-6 max-w-4xl mx-auto rise-in">
                <div class=theme.class(palette::LOGO) style="animation-delay: 300ms">
                    <div class="text-[14rem] font-black tracking-wider font-serif">"AV"</div>
                </div>
                <h1 class=theme.class(palette::NAME) style="animation-delay: 600ms">
                    "Akhil Vishnubhotla"
                </h1>
                <div class=theme.class(palette::TAGLINE) style="animation-delay: 800ms">
                    <TypewriterText theme phrases cadence />
                </div>
                <div class="mb-16 rise-in" style="animation-delay: 1000ms">
                    <button
                        class=theme.class(palette::CTA_BUTTON)
                        on:click=move |_| scroll_to_section("projects")
                    >
                        <div class=theme.class(palette::CTA_SHEEN)></div>
                        <span class="relative z-10 flex items-center gap-2">
                            "View My Work" <span class="nudge-x">"→"</span>
                        </span>
                    </button>
                </div>
            </div>

            <div
                class="absolute bottom-8 left-1/2 -translate-x-1/2 cursor-pointer rise-in transition-transform hover:scale-125"
                style="animation-delay: 1800ms"
                on:click=move |_| scroll_to_section("projects")
            >
                <span class=theme.class(palette::CHEVRON) aria-hidden="true">
                    "⌄"
                </span>
            </div>
        </section>
    }
}
