#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectStatus {
    InProgress,
    CompletedAndLive,
    Modified,
}

impl ProjectStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::InProgress => "In Progress",
            Self::CompletedAndLive => "Completed & Live",
            Self::Modified => "Modified",
        }
    }

    /// Badge colors read the same in both themes.
    pub fn badge_class(self) -> &'static str {
        match self {
            Self::InProgress => "px-3 py-1 rounded-full text-xs font-medium bg-yellow-500 text-black",
            Self::CompletedAndLive => "px-3 py-1 rounded-full text-xs font-medium bg-green-500 text-black",
            Self::Modified => "px-3 py-1 rounded-full text-xs font-medium bg-purple-500 text-white",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectRecord {
    pub title: &'static str,
    pub description: &'static str,
    pub status: ProjectStatus,
    pub tech_stack: &'static [&'static str],
    pub demo_link: Option<&'static str>,
    pub code_link: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectAction {
    Demo(&'static str),
    Code(&'static str),
}

impl ProjectAction {
    pub fn href(self) -> &'static str {
        match self {
            Self::Demo(url) | Self::Code(url) => url,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Demo(_) => "Demo",
            Self::Code(_) => "Code",
        }
    }

    /// Stable name for the rendered element's `data-action`.
    pub fn kind(self) -> &'static str {
        match self {
            Self::Demo(_) => "demo",
            Self::Code(_) => "code",
        }
    }
}

impl ProjectRecord {
    /// Link buttons to render, in display order. Missing links produce no
    /// button at all.
    pub fn actions(&self) -> Vec<ProjectAction> {
        self.demo_link
            .map(ProjectAction::Demo)
            .into_iter()
            .chain(self.code_link.map(ProjectAction::Code))
            .collect()
    }
}

pub const NOTABLE_PROJECTS: &[ProjectRecord] = &[
    ProjectRecord {
        title: "Spectrum Sports Platform",
        description: "A community-first sports platform designed to give fans an unfiltered space to connect, debate, and engage \u{2014} all in real time. It combines social interaction with live commentary, fan-driven content, and reputation-based rewards to create the ultimate digital arena for sports enthusiasts",
        status: ProjectStatus::InProgress,
        tech_stack: &["React", "TypeScript", "Python", "TensorFlow", "Tailwind CSS"],
        demo_link: Some("#"),
        code_link: Some("#"),
    },
    ProjectRecord {
        title: "FishyLottery",
        description: "ScoutIQ uses computer vision + basic biomechanics analysis to analyze short video clips of athletes and generate insights about their performance, technique, and potential \u{2014} just from smartphone-recorded footage.",
        status: ProjectStatus::InProgress,
        tech_stack: &["Next.js", "PostgreSQL", "Prisma", "Chart.js", "Stripe API"],
        demo_link: Some("#"),
        code_link: Some("#"),
    },
];

pub const OTHER_PROJECTS: &[ProjectRecord] = &[
    ProjectRecord {
        title: "VishBlogs",
        description: "My personal blog where I share sharp takes on tech, sports, AI, and health.\nEach post includes a like/dislike feature, view counter, and a comment section for discussion.\nClean design, quick reads, and real opinions \u{2014} all in one place.",
        status: ProjectStatus::CompletedAndLive,
        tech_stack: &["React", "Weather API", "Chart.js", "Tailwind CSS"],
        demo_link: Some("#"),
        code_link: Some("#"),
    },
    ProjectRecord {
        title: "Improved E-commerce Frontend",
        description: "Modified and optimized an existing e-commerce template with better performance, accessibility features, and modern payment integration.",
        status: ProjectStatus::Modified,
        tech_stack: &["Vue.js", "Vuex", "SCSS", "Stripe", "PWA"],
        demo_link: Some("#"),
        code_link: Some("#"),
    },
    ProjectRecord {
        title: "Enhanced Portfolio Template",
        description: "Customized and improved a portfolio template with advanced animations, better mobile responsiveness, and modern design patterns.",
        status: ProjectStatus::CompletedAndLive,
        tech_stack: &["Gatsby", "GraphQL", "Framer Motion", "Netlify CMS"],
        demo_link: Some("#"),
        code_link: Some("#"),
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    const BARE: ProjectRecord = ProjectRecord {
        title: "Bare",
        description: "No links yet",
        status: ProjectStatus::InProgress,
        tech_stack: &["Rust"],
        demo_link: None,
        code_link: None,
    };

    #[test]
    fn test_missing_demo_link_renders_no_demo_action() {
        let record = ProjectRecord {
            code_link: Some("https://example.com/code"),
            ..BARE
        };
        let actions = record.actions();
        assert_eq!(actions, vec![ProjectAction::Code("https://example.com/code")]);
        assert!(!actions.iter().any(|a| matches!(a, ProjectAction::Demo(_))));
    }

    #[test]
    fn test_both_links_render_two_actions_in_order() {
        let record = ProjectRecord {
            demo_link: Some("https://example.com/demo"),
            code_link: Some("https://example.com/code"),
            ..BARE
        };
        let actions = record.actions();
        assert_eq!(actions.len(), 2);
        assert_eq!(actions[0].kind(), "demo");
        assert_eq!(actions[0].label(), "Demo");
        assert_eq!(actions[1].href(), "https://example.com/code");
    }

    #[test]
    fn test_no_links_no_actions() {
        assert!(BARE.actions().is_empty());
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(ProjectStatus::CompletedAndLive.label(), "Completed & Live");
        assert!(ProjectStatus::Modified.badge_class().contains("bg-purple-500"));
    }

    #[test]
    fn test_site_projects_are_complete() {
        for project in NOTABLE_PROJECTS.iter().chain(OTHER_PROJECTS) {
            assert!(!project.title.is_empty());
            assert!(!project.tech_stack.is_empty());
        }
        assert_eq!(NOTABLE_PROJECTS.len(), 2);
        assert_eq!(OTHER_PROJECTS.len(), 3);
    }
}
