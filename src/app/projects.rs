use leptos::{html, prelude::*};

use super::{
    reveal::{motion_style, use_reveal},
    theme::ThemeState,
};
use crate::{
    projects::{ProjectAction, ProjectRecord, NOTABLE_PROJECTS, OTHER_PROJECTS},
    reveal::{presets, RevealMargin},
    theme::{palette, Themed},
};

const CHIP_STAGGER_MS: usize = 80;

#[component]
pub fn NotableProjects(
    theme: ThemeState,
    margin: RevealMargin,
    card_margin: RevealMargin,
) -> impl IntoView {
    view! {
        <ProjectSection
            theme
            margin
            card_margin
            id="projects"
            title="Notable Projects"
            subtitle="Original work showcasing innovation, technical depth, and real-world impact"
            section_class=palette::NOTABLE_SECTION
            heading_class=palette::NOTABLE_HEADING
            projects=NOTABLE_PROJECTS
        />
    }
}

#[component]
pub fn OtherProjects(
    theme: ThemeState,
    margin: RevealMargin,
    card_margin: RevealMargin,
) -> impl IntoView {
    view! {
        <ProjectSection
            theme
            margin
            card_margin
            id="other-projects"
            title="Other Projects"
            subtitle="Modified and enhanced existing projects with significant improvements and customizations"
            section_class=palette::OTHER_SECTION
            heading_class=palette::OTHER_HEADING
            projects=OTHER_PROJECTS
        />
    }
}

#[component]
fn ProjectSection(
    theme: ThemeState,
    margin: RevealMargin,
    card_margin: RevealMargin,
    id: &'static str,
    title: &'static str,
    subtitle: &'static str,
    section_class: Themed,
    heading_class: Themed,
    projects: &'static [ProjectRecord],
) -> impl IntoView {
    let node = NodeRef::<html::Div>::new();
    let revealed = use_reveal(node, margin);

    view! {
        <section id=id class=theme.class(section_class)>
            <div class="max-w-7xl mx-auto">
                <div node_ref=node data-reveal="" style=motion_style(presets::SECTION, revealed)>
                    <h2 class=theme.class(heading_class) data-reveal="" style=motion_style(presets::HEADING, revealed)>
                        {title}
                    </h2>
                    <p class=theme.class(palette::SUBTITLE) data-reveal="" style=motion_style(presets::SUBTITLE, revealed)>
                        {subtitle}
                    </p>
                    <div
                        class="grid md:grid-cols-2 lg:grid-cols-3 gap-8"
                        data-reveal=""
                        style=motion_style(presets::GRID, revealed)
                    >
                        {projects
                            .iter()
                            .enumerate()
                            .map(|(index, project)| {
                                view! {
                                    <ProjectCard theme project=*project index margin=card_margin />
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}

/// One project tile. Each card watches its own visibility and enters
/// `index * 150ms` after it is revealed.
#[component]
pub fn ProjectCard(
    theme: ThemeState,
    project: ProjectRecord,
    index: usize,
    margin: RevealMargin,
) -> impl IntoView {
    let node = NodeRef::<html::Div>::new();
    let revealed = use_reveal(node, margin);
    let (show_stack, set_show_stack) = signal(false);

    let motions = presets::card(index);

    let actions = project
        .actions()
        .into_iter()
        .map(|action| {
            let class = match action {
                ProjectAction::Demo(_) => palette::DEMO_BUTTON,
                ProjectAction::Code(_) => palette::CODE_BUTTON,
            };
            view! {
                <a
                    href=action.href()
                    data-action=action.kind()
                    class=theme.class(class)
                >
                    {action.label()}
                </a>
            }
        })
        .collect_view();

    view! {
        <div node_ref=node class=theme.class(palette::CARD) data-reveal="" style=motion_style(motions.card, revealed)>
            <div class="flex items-start justify-between gap-4 mb-4">
                <h3 class=theme.class(palette::CARD_TITLE)>{project.title}</h3>
                <span class=project.status.badge_class() data-reveal="" style=motion_style(motions.badge, revealed)>
                    {project.status.label()}
                </span>
            </div>

            <p class=theme.class(palette::CARD_BODY) data-reveal="" style=motion_style(motions.text, revealed)>
                {project.description}
            </p>

            <div class="flex flex-wrap gap-3" data-reveal="" style=motion_style(motions.actions, revealed)>
                {actions}
                <button
                    data-action="stack"
                    class=theme.class(palette::STACK_BUTTON)
                    aria-expanded=move || show_stack.get().to_string()
                    on:click=move |_| set_show_stack.update(|open| *open = !*open)
                >
                    {move || if show_stack.get() { "Hide Stack" } else { "View Stack" }}
                </button>
            </div>

            <Show when=move || show_stack.get()>
                <div class=theme.class(palette::STACK_DIVIDER)>
                    <div class="flex flex-wrap gap-2">
                        {project
                            .tech_stack
                            .iter()
                            .enumerate()
                            .map(|(i, tech)| {
                                view! {
                                    <span
                                        class=theme.class(palette::STACK_CHIP)
                                        style=format!("animation-delay: {}ms", i * CHIP_STAGGER_MS)
                                    >
                                        {*tech}
                                    </span>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </Show>
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::app::theme::fixed_theme;
    use crate::projects::ProjectStatus;
    use crate::theme::ThemePreference;

    fn render_at(project: ProjectRecord, index: usize) -> String {
        Owner::new().with(|| {
            let theme = fixed_theme(ThemePreference::Light);
            view! { <ProjectCard theme project index margin=RevealMargin::inset(50) /> }
                .to_html()
        })
    }

    fn render(project: ProjectRecord) -> String {
        render_at(project, 0)
    }

    fn record(demo_link: Option<&'static str>, code_link: Option<&'static str>) -> ProjectRecord {
        ProjectRecord {
            title: "Render Check",
            description: "Card used for markup assertions",
            status: ProjectStatus::InProgress,
            tech_stack: &["Rust", "Leptos"],
            demo_link,
            code_link,
        }
    }

    #[test]
    fn test_card_without_demo_link_has_no_demo_button() {
        let html = render(record(None, Some("https://example.com/code")));
        assert!(!html.contains(r#"data-action="demo""#));
        assert!(html.contains(r#"data-action="code""#));
        assert!(html.contains(r#"data-action="stack""#));
    }

    #[test]
    fn test_card_with_both_links_has_three_controls() {
        let html = render(record(Some("https://example.com/demo"), Some("https://example.com/code")));
        assert_eq!(html.matches("data-action=").count(), 3);
        assert!(html.contains("https://example.com/demo"));
    }

    #[test]
    fn test_card_without_links_only_has_stack_toggle() {
        let html = render(record(None, None));
        assert_eq!(html.matches("data-action=").count(), 1);
        assert!(html.contains("View Stack"));
    }

    #[test]
    fn test_card_hidden_pose_is_marked_for_no_script() {
        let html = render(record(None, None));
        assert!(html.contains("In Progress"));
        assert!(html.contains("Render Check"));
        let hidden = html.matches("opacity: 0;").count();
        assert_eq!(hidden, 4);
        assert_eq!(html.matches("data-reveal").count(), hidden);
    }

    #[test]
    fn test_card_links_open_in_same_tab() {
        let html = render(record(Some("https://example.com/demo"), Some("https://example.com/code")));
        assert!(!html.contains("target="));
    }

    #[test]
    fn test_later_card_children_wait_for_their_card() {
        let html = render_at(record(None, None), 2);
        // card at 300ms, badge 600ms, text 500ms, actions 700ms
        assert!(html.contains("800ms cubic-bezier(0.25, 0.46, 0.45, 0.94) 300ms"));
        assert!(html.contains("500ms cubic-bezier(0.25, 0.46, 0.45, 0.94) 600ms"));
        assert!(html.contains("600ms cubic-bezier(0.25, 0.46, 0.45, 0.94) 500ms"));
        assert!(html.contains("600ms cubic-bezier(0.25, 0.46, 0.45, 0.94) 700ms"));
    }
}
