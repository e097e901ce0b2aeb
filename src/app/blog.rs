use leptos::{html, prelude::*};

use super::{
    reveal::{motion_style, use_reveal},
    theme::ThemeState,
};
use crate::{
    reveal::{presets, RevealMargin},
    theme::palette,
};

#[component]
pub fn Blog(theme: ThemeState, margin: RevealMargin, url: &'static str) -> impl IntoView {
    let node = NodeRef::<html::Div>::new();
    let revealed = use_reveal(node, margin);

    view! {
        <section id="blog" class=theme.class(palette::BLOG_SECTION)>
            <div class="max-w-4xl mx-auto text-center">
                <div node_ref=node data-reveal="" style=motion_style(presets::SECTION, revealed)>
                    <div class=theme.class(palette::BLOG_BADGE) data-reveal="" style=motion_style(presets::BLOG_ICON, revealed)>
                        "📖"
                    </div>
                    <h2 class=theme.class(palette::BLOG_HEADING) data-reveal="" style=motion_style(presets::HEADING.delayed(400), revealed)>
                        "Read My Blog"
                    </h2>
                    <p class=theme.class(palette::BLOG_TEXT) data-reveal="" style=motion_style(presets::SUBTITLE.delayed(600), revealed)>
                        "My thoughts on sports, tech and world affairs."
                    </p>
                    <div data-reveal="" style=motion_style(presets::CALL_TO_ACTION, revealed)>
                        <a
                            href=url
                            target="_blank"
                            rel="noopener noreferrer"
                            class=theme.class(palette::BLOG_BUTTON)
                        >
                            "Visit My Blog"
                            <span class="transition-transform duration-300 group-hover:translate-x-1">
                                "↗"
                            </span>
                        </a>
                    </div>
                </div>
            </div>
        </section>
    }
}
