use leptos::prelude::*;

use super::{
    about::About,
    blog::Blog,
    contact::Contact,
    footer::Footer,
    hero::Hero,
    projects::{NotableProjects, OtherProjects},
    theme::ThemeState,
};
use crate::config::SiteConfig;

#[component]
pub fn HomePage(theme: ThemeState, config: SiteConfig) -> impl IntoView {
    let margins = config.margins;

    view! {
        <main>
            <Hero theme phrases=config.phrases cadence=config.cadence />
            <About
                theme
                margin=margins.section
                resume_url=config.resume_url
                resume_file_name=config.resume_file_name
            />
            <NotableProjects theme margin=margins.section card_margin=margins.card />
            <OtherProjects theme margin=margins.section card_margin=margins.card />
            <Blog theme margin=margins.section url=config.blog_url />
            <Contact theme margin=margins.contact />
        </main>
        <Footer theme margin=margins.contact />
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::{
        app::theme::fixed_theme,
        theme::{palette, ThemePreference},
    };

    #[test]
    fn test_page_fades_in_once() {
        let html = Owner::new().with(|| {
            let theme = fixed_theme(ThemePreference::Light);
            let config = SiteConfig::default();
            view! { <HomePage theme config /> }.to_html()
        });
        // the fade belongs to the page root, which wraps this view
        assert!(!html.contains("page-enter"));
        assert!(palette::PAGE.light.contains("page-enter"));
        assert!(palette::PAGE.dark.contains("page-enter"));
        assert!(html.contains(r#"id="projects""#));
        assert!(html.contains(r#"id="contact""#));
    }
}
