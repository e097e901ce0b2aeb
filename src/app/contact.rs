use leptos::{html, prelude::*};

use super::{
    reveal::{motion_style, use_reveal},
    theme::ThemeState,
};
use crate::{
    reveal::{presets, RevealMargin},
    theme::palette,
};

struct ContactCard {
    icon: &'static str,
    label: &'static str,
    lines: &'static [&'static str],
    delay_ms: u32,
}

const CARDS: [ContactCard; 3] = [
    ContactCard {
        icon: "✉",
        label: "Email",
        lines: &["akhil.vishnubhotla2005@gmail.com"],
        delay_ms: 200,
    },
    ContactCard {
        icon: "☏",
        label: "Phone",
        lines: &["Canada: +1 (825) 523-3824", "India (WhatsApp): +91 8530593824"],
        delay_ms: 400,
    },
    ContactCard {
        icon: "⌖",
        label: "Location",
        lines: &["Edmonton, AB, Canada"],
        delay_ms: 600,
    },
];

#[component]
pub fn Contact(theme: ThemeState, margin: RevealMargin) -> impl IntoView {
    let node = NodeRef::<html::Div>::new();
    let revealed = use_reveal(node, margin);

    view! {
        <section id="contact" class=theme.class(palette::CONTACT_SECTION)>
            <div class="absolute inset-0 opacity-5">
                <div class=theme.class(palette::CONTACT_BLOB_A)></div>
                <div class=theme.class(palette::CONTACT_BLOB_B)></div>
            </div>

            <div class="max-w-6xl mx-auto relative">
                <div node_ref=node data-reveal="" style=motion_style(presets::CONTACT, revealed)>
                    <h2 class=theme.class(palette::CONTACT_HEADING)>"Get In Touch"</h2>
                    <p class=theme.class(palette::CONTACT_TEXT)>
                        "Open to feedback and collaborating ideas"
                    </p>

                    <div class="grid md:grid-cols-3 gap-8">
                        {CARDS
                            .iter()
                            .map(|card| {
                                view! {
                                    <div
                                        class=theme.class(palette::CONTACT_CARD)
                                        data-reveal=""
                                        style=motion_style(presets::CONTACT.delayed(card.delay_ms), revealed)
                                    >
                                        <div class=theme.class(palette::CONTACT_ICON) aria-hidden="true">
                                            {card.icon}
                                        </div>
                                        <h3 class=theme.class(palette::CONTACT_LABEL)>{card.label}</h3>
                                        {card
                                            .lines
                                            .iter()
                                            .map(|line| {
                                                view! {
                                                    <p class=theme.class(palette::CONTACT_DETAIL)>{*line}</p>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}
