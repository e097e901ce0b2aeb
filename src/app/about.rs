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
pub fn About(
    theme: ThemeState,
    margin: RevealMargin,
    resume_url: &'static str,
    resume_file_name: &'static str,
) -> impl IntoView {
    let node = NodeRef::<html::Div>::new();
    let revealed = use_reveal(node, margin);

    view! {
        <section id="about" class=theme.class(palette::ABOUT_SECTION)>
            <div class="absolute inset-0 opacity-10">
                <div class=theme.class(palette::ABOUT_BLOB_A)></div>
                <div class=theme.class(palette::ABOUT_BLOB_B)></div>
            </div>

            <div class="max-w-4xl mx-auto relative">
                <div node_ref=node data-reveal="" style=motion_style(presets::SECTION, revealed)>
                    <h2
                        class=theme.class(palette::HEADING)
                        data-reveal=""
                        style=motion_style(presets::HEADING, revealed)
                    >
                        "About Me"
                    </h2>

                    <div class=theme.class(palette::BODY_TEXT)>
                        <p
                            class="text-center transition-transform duration-300 hover:scale-[1.02] hover:-translate-y-0.5"
                            data-reveal=""
                            style=motion_style(presets::FROM_LEFT, revealed)
                        >
                            "I'm "
                            <span class=theme.class(palette::EMPHASIS)>"Akhil Vishnubhotla"</span>
                            ", a CS student specializing in AI and Math at the University of Alberta with a strong interest in AI, data, and software. I’m focused on building products and solutions that are genuinely meaningful and technically sound."
                        </p>
                        <p
                            class="text-center transition-transform duration-300 hover:scale-[1.02] hover:-translate-y-0.5"
                            data-reveal=""
                            style=motion_style(presets::FROM_RIGHT, revealed)
                        >
                            "I enjoy learning new things, improving quickly, and working toward making an impact through what I work on. Outside of academics and coursework, I watch and play sports and follow geopolitics."
                        </p>
                    </div>

                    <div class="flex justify-center mt-12" data-reveal="" style=motion_style(presets::RISE, revealed)>
                        <a
                            href=resume_url
                            download=resume_file_name
                            class=theme.class(palette::CTA_BUTTON)
                        >
                            <div class=theme.class(palette::CTA_SHEEN)></div>
                            <span class="relative z-10 flex items-center gap-2">
                                "Download Resume" <span class="bob-y" aria-hidden="true">"⤓"</span>
                            </span>
                        </a>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::{app::theme::fixed_theme, theme::ThemePreference};

    fn render() -> String {
        Owner::new().with(|| {
            let theme = fixed_theme(ThemePreference::Dark);
            view! {
                <About
                    theme
                    margin=RevealMargin::inset(150)
                    resume_url="/resume.pdf"
                    resume_file_name="resume.pdf"
                />
            }
            .to_html()
        })
    }

    #[test]
    fn test_every_hidden_block_is_marked() {
        let html = render();
        let hidden = html.matches("opacity: 0;").count();
        assert!(hidden > 0);
        assert_eq!(html.matches("data-reveal").count(), hidden);
    }

    #[test]
    fn test_resume_link_downloads() {
        let html = render();
        assert!(html.contains(r#"href="/resume.pdf""#));
        assert!(html.contains(r#"download="resume.pdf""#));
    }
}
