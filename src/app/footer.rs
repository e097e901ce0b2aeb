use chrono::{Datelike, Utc};
use leptos::{html, prelude::*};

use super::{
    reveal::{motion_style, use_reveal},
    theme::ThemeState,
};
use crate::{
    reveal::{presets, RevealMargin},
    theme::palette,
};

const SOCIALS: [(&str, &str, &str); 3] = [
    ("GitHub", "https://github.com/AkhilV30", "⌥"),
    (
        "LinkedIn",
        "https://www.linkedin.com/in/akhil-vishnubhotla-a51379369/",
        "in",
    ),
    ("Email", "mailto:hello@example.com", "✉"),
];

#[component]
pub fn Footer(theme: ThemeState, margin: RevealMargin) -> impl IntoView {
    let node = NodeRef::<html::Div>::new();
    let revealed = use_reveal(node, margin);
    let year = Utc::now().year();

    view! {
        <footer class=theme.class(palette::FOOTER)>
            <div node_ref=node class="max-w-4xl mx-auto text-center" data-reveal="" style=motion_style(presets::CONTACT, revealed)>
                <div class="flex justify-center gap-6 mb-8">
                    {SOCIALS
                        .iter()
                        .enumerate()
                        .map(|(i, (name, href, glyph))| {
                            let motion = presets::SOCIAL.delayed(400 + i as u32 * 100);
                            view! {
                                <a
                                    href=*href
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class=theme.class(palette::SOCIAL_LINK)
                                    data-reveal=""
                                    style=motion_style(motion, revealed)
                                >
                                    <span aria-hidden="true" class="font-bold">{*glyph}</span>
                                    <span class="sr-only">{*name}</span>
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
                <p class=theme.class(palette::FOOTNOTE) data-reveal="" style=motion_style(presets::FOOTNOTE, revealed)>
                    {format!(
                        "© {year} Akhil Vishnubhotla. Built with purpose. Contact me on my contact number.",
                    )}
                </p>
            </div>
        </footer>
    }
}
