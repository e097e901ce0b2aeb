//! Presentation settings. These are handed down to the views explicitly; no
//! view reads them from a global.

use crate::{reveal::RevealMargin, theme::ThemePreference, typewriter::Cadence};

pub const HERO_PHRASES: &[&str] = &["Builder.", "Developer.", "Sports Enthusiast."];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealMargins {
    /// About, projects and blog sections.
    pub section: RevealMargin,
    /// Contact and footer.
    pub contact: RevealMargin,
    pub card: RevealMargin,
}

impl Default for RevealMargins {
    fn default() -> Self {
        Self {
            section: RevealMargin::inset(150),
            contact: RevealMargin::inset(100),
            card: RevealMargin::inset(50),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SiteConfig {
    pub phrases: &'static [&'static str],
    pub cadence: Cadence,
    pub margins: RevealMargins,
    pub default_theme: ThemePreference,
    pub theme_storage_key: &'static str,
    pub blog_url: &'static str,
    pub resume_url: &'static str,
    pub resume_file_name: &'static str,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            phrases: HERO_PHRASES,
            cadence: Cadence::default(),
            margins: RevealMargins::default(),
            default_theme: ThemePreference::Light,
            theme_storage_key: "theme",
            blog_url: "#",
            resume_url: "/resume.pdf",
            resume_file_name: "Akhil_Vishnubhotla_Resume.pdf",
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn test_defaults_match_site_values() {
        let config = SiteConfig::default();
        assert_eq!(config.phrases, ["Builder.", "Developer.", "Sports Enthusiast."]);
        assert_eq!(config.cadence.type_interval, Duration::from_millis(100));
        assert_eq!(config.cadence.delete_interval, Duration::from_millis(50));
        assert_eq!(config.cadence.dwell, Duration::from_millis(2000));
        assert_eq!(config.margins.section.root_margin(), "-150px");
        assert_eq!(config.margins.contact.root_margin(), "-100px");
        assert_eq!(config.margins.card.root_margin(), "-50px");
    }
}
