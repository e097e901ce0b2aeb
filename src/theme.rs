use serde::{Deserialize, Serialize};

/// Display mode for the whole page.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Dark,
    #[default]
    Light,
}

impl ThemePreference {
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }
}

/// A class string precomputed for each theme.
///
/// Views never build styles at runtime: they pick one of the two variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Themed {
    pub light: &'static str,
    pub dark: &'static str,
}

impl Themed {
    pub const fn new(light: &'static str, dark: &'static str) -> Self {
        Self { light, dark }
    }

    pub fn pick(self, theme: ThemePreference) -> &'static str {
        match theme {
            ThemePreference::Light => self.light,
            ThemePreference::Dark => self.dark,
        }
    }
}

pub mod palette {
    use super::Themed;

    pub const PAGE: Themed = Themed::new(
        "min-h-screen font-inter transition-colors duration-300 page-enter bg-white text-gray-800",
        "min-h-screen font-inter transition-colors duration-300 page-enter bg-black text-white",
    );

    // hero
    pub const HERO_SECTION: Themed = Themed::new(
        "min-h-screen flex items-center justify-center relative overflow-hidden bg-gradient-to-br from-white via-gray-50 to-white",
        "min-h-screen flex items-center justify-center relative overflow-hidden bg-gradient-to-br from-black via-gray-900 to-black",
    );
    pub const NAV_PILL: Themed = Themed::new(
        "flex items-center gap-8 px-6 py-3 rounded-full backdrop-blur-md border bg-white/20 border-gray-300/50",
        "flex items-center gap-8 px-6 py-3 rounded-full backdrop-blur-md border bg-black/20 border-gray-700/50",
    );
    pub const NAV_LINK: Themed = Themed::new(
        "text-sm font-medium transition-all duration-300 hover:scale-105 active:scale-95 rise-in text-gray-700 hover:text-black",
        "text-sm font-medium transition-all duration-300 hover:scale-105 active:scale-95 rise-in text-gray-300 hover:text-white",
    );
    pub const HERO_BLOB_A: Themed = Themed::new(
        "absolute top-1/4 left-1/4 w-96 h-96 rounded-full blur-3xl drift-a bg-gradient-to-r from-purple-300 via-blue-300 to-cyan-300",
        "absolute top-1/4 left-1/4 w-96 h-96 rounded-full blur-3xl drift-a bg-gradient-to-r from-purple-500 via-blue-500 to-cyan-500",
    );
    pub const HERO_BLOB_B: Themed = Themed::new(
        "absolute bottom-1/4 right-1/4 w-80 h-80 rounded-full blur-3xl drift-b bg-gradient-to-r from-pink-300 via-red-300 to-orange-300",
        "absolute bottom-1/4 right-1/4 w-80 h-80 rounded-full blur-3xl drift-b bg-gradient-to-r from-pink-500 via-red-500 to-orange-500",
    );
    pub const HERO_BLOB_C: Themed = Themed::new(
        "absolute top-1/2 right-1/3 w-64 h-64 rounded-full blur-2xl drift-c bg-gradient-to-r from-green-300 via-teal-300 to-blue-300",
        "absolute top-1/2 right-1/3 w-64 h-64 rounded-full blur-2xl drift-c bg-gradient-to-r from-green-500 via-teal-500 to-blue-500",
    );
    pub const LOGO: Themed = Themed::new(
        "w-[28rem] h-[28rem] mx-auto mb-12 flex items-center justify-center relative select-none rise-in text-black",
        "w-[28rem] h-[28rem] mx-auto mb-12 flex items-center justify-center relative select-none rise-in text-white",
    );
    pub const NAME: Themed = Themed::new(
        "text-4xl md:text-6xl font-bold mb-8 tracking-wide rise-in text-black",
        "text-4xl md:text-6xl font-bold mb-8 tracking-wide rise-in text-white",
    );
    pub const TAGLINE: Themed = Themed::new(
        "text-2xl md:text-3xl font-light mb-16 rise-in text-gray-700",
        "text-2xl md:text-3xl font-light mb-16 rise-in text-gray-300",
    );
    pub const CARET: Themed = Themed::new("ml-1 caret-blink text-black", "ml-1 caret-blink text-white");
    pub const CTA_BUTTON: Themed = Themed::new(
        "group px-8 py-4 rounded-full font-medium text-lg transition-all duration-500 relative overflow-hidden hover:scale-105 hover:-translate-y-1 active:scale-95 bg-black text-white hover:bg-gray-800 border-2 border-transparent hover:border-gray-700",
        "group px-8 py-4 rounded-full font-medium text-lg transition-all duration-500 relative overflow-hidden hover:scale-105 hover:-translate-y-1 active:scale-95 bg-white text-black hover:bg-gray-200 border-2 border-transparent hover:border-gray-300",
    );
    pub const CTA_SHEEN: Themed = Themed::new(
        "absolute inset-0 -translate-x-full group-hover:translate-x-full transition-transform duration-700 bg-gradient-to-r from-gray-700 to-black",
        "absolute inset-0 -translate-x-full group-hover:translate-x-full transition-transform duration-700 bg-gradient-to-r from-gray-200 to-white",
    );
    pub const CHEVRON: Themed = Themed::new("w-6 h-6 text-2xl bob-y text-gray-600", "w-6 h-6 text-2xl bob-y text-gray-400");
    pub const THEME_TOGGLE: Themed = Themed::new(
        "fixed top-6 left-6 z-50 p-3 rounded-full backdrop-blur-md border transition-all duration-300 hover:scale-110 active:scale-90 rise-in bg-white/80 border-gray-200 text-gray-800 hover:bg-gray-50/80",
        "fixed top-6 left-6 z-50 p-3 rounded-full backdrop-blur-md border transition-all duration-300 hover:scale-110 active:scale-90 rise-in bg-dark-800/80 border-dark-600 text-white hover:bg-dark-700/80",
    );

    // about
    pub const ABOUT_SECTION: Themed = Themed::new(
        "py-24 px-6 bg-gradient-to-b from-white via-gray-50 to-white relative overflow-hidden",
        "py-24 px-6 bg-gradient-to-b from-black via-gray-900 to-black relative overflow-hidden",
    );
    pub const ABOUT_BLOB_A: Themed = Themed::new(
        "absolute top-1/4 right-1/4 w-64 h-64 rounded-full blur-3xl drift-b bg-black",
        "absolute top-1/4 right-1/4 w-64 h-64 rounded-full blur-3xl drift-b bg-white",
    );
    pub const ABOUT_BLOB_B: Themed = Themed::new(
        "absolute bottom-1/3 left-1/4 w-48 h-48 rounded-full blur-2xl drift-a bg-gray-700",
        "absolute bottom-1/3 left-1/4 w-48 h-48 rounded-full blur-2xl drift-a bg-gray-400",
    );
    pub const HEADING: Themed = Themed::new(
        "text-4xl md:text-5xl font-bold mb-12 text-center text-black",
        "text-4xl md:text-5xl font-bold mb-12 text-center text-white",
    );
    pub const BODY_TEXT: Themed = Themed::new(
        "space-y-8 text-lg md:text-xl leading-relaxed text-gray-700",
        "space-y-8 text-lg md:text-xl leading-relaxed text-gray-300",
    );
    pub const EMPHASIS: Themed = Themed::new("font-semibold text-black", "font-semibold text-white");

    // projects
    pub const NOTABLE_SECTION: Themed = Themed::new(
        "py-24 px-6 bg-gradient-to-b from-gray-50 to-white",
        "py-24 px-6 bg-gradient-to-b from-dark-800 to-black",
    );
    pub const NOTABLE_HEADING: Themed = Themed::new(
        "text-4xl md:text-5xl font-bold mb-4 text-center bg-gradient-to-r bg-clip-text text-transparent from-black to-gray-600",
        "text-4xl md:text-5xl font-bold mb-4 text-center bg-gradient-to-r bg-clip-text text-transparent from-white to-gray-400",
    );
    pub const OTHER_SECTION: Themed = Themed::new(
        "py-24 px-6 bg-gradient-to-b from-white to-gray-50",
        "py-24 px-6 bg-gradient-to-b from-black to-dark-800",
    );
    pub const OTHER_HEADING: Themed = Themed::new(
        "text-4xl md:text-5xl font-bold mb-4 text-center bg-gradient-to-r bg-clip-text text-transparent from-gray-600 to-black",
        "text-4xl md:text-5xl font-bold mb-4 text-center bg-gradient-to-r bg-clip-text text-transparent from-gray-300 to-white",
    );
    pub const SUBTITLE: Themed = Themed::new(
        "text-center mb-16 max-w-2xl mx-auto text-gray-600",
        "text-center mb-16 max-w-2xl mx-auto text-gray-400",
    );
    pub const CARD: Themed = Themed::new(
        "rounded-2xl p-6 border transition-all duration-300 hover:scale-105 hover:-translate-y-3 hover:shadow-2xl bg-gradient-to-br from-white to-gray-50 border-gray-200 hover:border-gray-400",
        "rounded-2xl p-6 border transition-all duration-300 hover:scale-105 hover:-translate-y-3 hover:shadow-2xl bg-gradient-to-br from-gray-900 to-black border-gray-700 hover:border-gray-600",
    );
    pub const CARD_TITLE: Themed = Themed::new(
        "text-xl font-bold transition-transform duration-300 hover:translate-x-1.5 text-black",
        "text-xl font-bold transition-transform duration-300 hover:translate-x-1.5 text-white",
    );
    pub const CARD_BODY: Themed = Themed::new(
        "mb-6 leading-relaxed whitespace-pre-line text-gray-700",
        "mb-6 leading-relaxed whitespace-pre-line text-gray-300",
    );
    pub const DEMO_BUTTON: Themed = Themed::new(
        "flex items-center gap-2 px-4 py-2 rounded-lg font-medium transition-all hover:scale-105 hover:-translate-y-1 active:scale-95 bg-black text-white hover:bg-gray-800",
        "flex items-center gap-2 px-4 py-2 rounded-lg font-medium transition-all hover:scale-105 hover:-translate-y-1 active:scale-95 bg-white text-black hover:bg-gray-200",
    );
    pub const CODE_BUTTON: Themed = Themed::new(
        "flex items-center gap-2 border px-4 py-2 rounded-lg font-medium transition-all hover:scale-105 hover:-translate-y-1 active:scale-95 border-gray-400 text-black hover:bg-gray-100 hover:border-gray-500",
        "flex items-center gap-2 border px-4 py-2 rounded-lg font-medium transition-all hover:scale-105 hover:-translate-y-1 active:scale-95 border-gray-600 text-white hover:bg-gray-800 hover:border-gray-500",
    );
    pub const STACK_BUTTON: Themed = Themed::new(
        "flex items-center gap-2 border px-4 py-2 rounded-lg font-medium transition-all hover:scale-105 hover:-translate-y-1 active:scale-95 border-gray-500 text-gray-700 hover:bg-gray-200 hover:text-black hover:border-gray-600",
        "flex items-center gap-2 border px-4 py-2 rounded-lg font-medium transition-all hover:scale-105 hover:-translate-y-1 active:scale-95 border-gray-500 text-gray-300 hover:bg-gray-700 hover:text-white hover:border-gray-400",
    );
    pub const STACK_DIVIDER: Themed = Themed::new(
        "flex flex-wrap gap-2 pt-4 border-t border-gray-300",
        "flex flex-wrap gap-2 pt-4 border-t border-gray-700",
    );
    pub const STACK_CHIP: Themed = Themed::new(
        "rise-in px-3 py-1 rounded-full text-sm hover:scale-110 hover:-translate-y-1 bg-gray-200 text-gray-700",
        "rise-in px-3 py-1 rounded-full text-sm hover:scale-110 hover:-translate-y-1 bg-gray-800 text-gray-300",
    );

    // blog
    pub const BLOG_SECTION: Themed = Themed::new(
        "py-24 px-6 bg-gradient-to-b from-gray-50 to-white",
        "py-24 px-6 bg-gradient-to-b from-dark-800 to-black",
    );
    pub const BLOG_BADGE: Themed = Themed::new(
        "inline-flex items-center justify-center w-16 h-16 rounded-full mb-8 text-3xl hover:rotate-[360deg] hover:scale-110 transition-transform duration-700 bg-gradient-to-r from-black to-gray-700 text-white",
        "inline-flex items-center justify-center w-16 h-16 rounded-full mb-8 text-3xl hover:rotate-[360deg] hover:scale-110 transition-transform duration-700 bg-gradient-to-r from-white to-gray-300 text-black",
    );
    pub const BLOG_HEADING: Themed = Themed::new(
        "text-4xl md:text-5xl font-bold mb-6 bg-gradient-to-r bg-clip-text text-transparent from-gray-800 to-gray-600",
        "text-4xl md:text-5xl font-bold mb-6 bg-gradient-to-r bg-clip-text text-transparent from-white to-gray-300",
    );
    pub const BLOG_TEXT: Themed = Themed::new(
        "text-lg mb-12 max-w-2xl mx-auto text-gray-600",
        "text-lg mb-12 max-w-2xl mx-auto text-gray-400",
    );
    pub const BLOG_BUTTON: Themed = Themed::new(
        "group inline-flex items-center gap-3 px-10 py-5 rounded-full font-semibold text-xl shadow-lg hover:shadow-2xl hover:scale-105 hover:-translate-y-1 active:scale-95 transition-all duration-300 bg-black text-white hover:bg-gray-900 border-2 border-gray-800",
        "group inline-flex items-center gap-3 px-10 py-5 rounded-full font-semibold text-xl shadow-lg hover:shadow-2xl hover:scale-105 hover:-translate-y-1 active:scale-95 transition-all duration-300 bg-white text-black hover:bg-gray-100 border-2 border-gray-200",
    );

    // contact
    pub const CONTACT_SECTION: Themed = Themed::new(
        "py-24 px-6 bg-gradient-to-br from-white via-gray-50 to-white relative overflow-hidden",
        "py-24 px-6 bg-gradient-to-br from-black via-gray-900 to-black relative overflow-hidden",
    );
    pub const CONTACT_BLOB_A: Themed = Themed::new(
        "absolute top-1/4 left-1/4 w-96 h-96 rounded-full blur-3xl drift-a bg-black",
        "absolute top-1/4 left-1/4 w-96 h-96 rounded-full blur-3xl drift-a bg-white",
    );
    pub const CONTACT_BLOB_B: Themed = Themed::new(
        "absolute bottom-1/4 right-1/4 w-64 h-64 rounded-full blur-3xl drift-b bg-gray-600",
        "absolute bottom-1/4 right-1/4 w-64 h-64 rounded-full blur-3xl drift-b bg-gray-400",
    );
    pub const CONTACT_HEADING: Themed = Themed::new(
        "text-4xl md:text-5xl font-bold mb-4 text-center bg-gradient-to-r bg-clip-text text-transparent from-black via-gray-700 to-black",
        "text-4xl md:text-5xl font-bold mb-4 text-center bg-gradient-to-r bg-clip-text text-transparent from-white via-gray-300 to-white",
    );
    pub const CONTACT_TEXT: Themed = Themed::new(
        "text-center mb-16 max-w-2xl mx-auto text-gray-700",
        "text-center mb-16 max-w-2xl mx-auto text-gray-300",
    );
    pub const CONTACT_CARD: Themed = Themed::new(
        "p-8 rounded-2xl border backdrop-blur-sm transition-all duration-300 hover:scale-[1.02] hover:-translate-y-1 bg-white/50 border-gray-200 hover:bg-gray-50/50",
        "p-8 rounded-2xl border backdrop-blur-sm transition-all duration-300 hover:scale-[1.02] hover:-translate-y-1 bg-gray-900/50 border-gray-700 hover:bg-gray-800/50",
    );
    pub const CONTACT_ICON: Themed = Themed::new(
        "p-4 rounded-full w-fit mx-auto mb-4 text-3xl leading-none bg-black/10 text-black",
        "p-4 rounded-full w-fit mx-auto mb-4 text-3xl leading-none bg-white/10 text-white",
    );
    pub const CONTACT_LABEL: Themed = Themed::new(
        "text-xl font-bold mb-2 text-center text-black",
        "text-xl font-bold mb-2 text-center text-white",
    );
    pub const CONTACT_DETAIL: Themed = Themed::new(
        "text-center text-sm break-all text-gray-700",
        "text-center text-sm break-all text-gray-300",
    );

    // footer
    pub const FOOTER: Themed = Themed::new(
        "py-16 px-6 border-t bg-gradient-to-t from-gray-100 to-white border-gray-200",
        "py-16 px-6 border-t bg-gradient-to-t from-dark-900 to-black border-dark-700",
    );
    pub const SOCIAL_LINK: Themed = Themed::new(
        "flex items-center justify-center w-12 h-12 rounded-full transition-all duration-300 hover:scale-125 hover:-translate-y-1.5 hover:rotate-6 active:scale-90 bg-gray-200 hover:bg-gray-300 text-gray-600 hover:text-gray-800",
        "flex items-center justify-center w-12 h-12 rounded-full transition-all duration-300 hover:scale-125 hover:-translate-y-1.5 hover:rotate-6 active:scale-90 bg-gray-800 hover:bg-gray-700 text-gray-400 hover:text-white",
    );
    pub const FOOTNOTE: Themed = Themed::new("text-sm text-gray-600", "text-sm text-gray-400");

    /// Every themed class on the page.
    pub const ALL: &[Themed] = &[
        PAGE,
        HERO_SECTION,
        NAV_PILL,
        NAV_LINK,
        HERO_BLOB_A,
        HERO_BLOB_B,
        HERO_BLOB_C,
        LOGO,
        NAME,
        TAGLINE,
        CARET,
        CTA_BUTTON,
        CTA_SHEEN,
        CHEVRON,
        THEME_TOGGLE,
        ABOUT_SECTION,
        ABOUT_BLOB_A,
        ABOUT_BLOB_B,
        HEADING,
        BODY_TEXT,
        EMPHASIS,
        NOTABLE_SECTION,
        NOTABLE_HEADING,
        OTHER_SECTION,
        OTHER_HEADING,
        SUBTITLE,
        CARD,
        CARD_TITLE,
        CARD_BODY,
        DEMO_BUTTON,
        CODE_BUTTON,
        STACK_BUTTON,
        STACK_DIVIDER,
        STACK_CHIP,
        BLOG_SECTION,
        BLOG_BADGE,
        BLOG_HEADING,
        BLOG_TEXT,
        BLOG_BUTTON,
        CONTACT_SECTION,
        CONTACT_BLOB_A,
        CONTACT_BLOB_B,
        CONTACT_HEADING,
        CONTACT_TEXT,
        CONTACT_CARD,
        CONTACT_ICON,
        CONTACT_LABEL,
        CONTACT_DETAIL,
        FOOTER,
        SOCIAL_LINK,
        FOOTNOTE,
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve_all(theme: ThemePreference) -> Vec<&'static str> {
        palette::ALL.iter().map(|t| t.pick(theme)).collect()
    }

    #[test]
    fn test_toggle_round_trips() {
        assert_eq!(ThemePreference::Light.toggled(), ThemePreference::Dark);
        assert_eq!(ThemePreference::Dark.toggled(), ThemePreference::Light);
        assert_eq!(ThemePreference::Dark.toggled().toggled(), ThemePreference::Dark);
        assert!(ThemePreference::Dark.is_dark());
        assert!(!ThemePreference::default().is_dark());
    }

    #[test]
    fn test_every_themed_class_has_distinct_variants() {
        for themed in palette::ALL {
            assert_ne!(
                themed.light, themed.dark,
                "themed class must change with the theme: {}",
                themed.light
            );
        }
    }

    #[test]
    fn test_toggle_swaps_every_themed_class() {
        let light = resolve_all(ThemePreference::Light);
        let dark = resolve_all(ThemePreference::Light.toggled());

        for ((themed, l), d) in palette::ALL.iter().zip(&light).zip(&dark) {
            assert_eq!(*l, themed.light);
            assert_eq!(*d, themed.dark);
        }
    }

    #[test]
    fn test_no_mixed_theme_after_toggle() {
        let dark = ThemePreference::Dark;
        let resolved = resolve_all(dark);
        // no class resolved under Dark may be a light-only variant
        for class in &resolved {
            assert!(palette::ALL.iter().any(|t| t.dark == *class));
            assert!(!palette::ALL
                .iter()
                .any(|t| t.light == *class && t.dark != *class));
        }

        let back = resolve_all(dark.toggled());
        assert!(back
            .iter()
            .all(|class| palette::ALL.iter().any(|t| t.light == *class)));
    }

    #[test]
    fn test_names_are_lowercase() {
        // stored preference values stay readable in local storage
        assert_eq!(ThemePreference::Dark.as_str(), "dark");
        assert_eq!(ThemePreference::Light.as_str(), "light");
    }
}
