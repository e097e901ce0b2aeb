//! One-shot entrance animations triggered by viewport visibility.
//!
//! [`RevealTrigger`] is the state machine behind every section's entrance: it
//! starts [`RevealState::NotRevealed`], flips to [`RevealState::Revealed`] on
//! the first visible observation and never goes back. [`Motion`] describes the
//! "from" pose an element animates out of once revealed.

use std::fmt::Write;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
    #[default]
    NotRevealed,
    Revealed,
}

/// What a single visibility notification reported for the watched element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Visible,
    Hidden,
}

impl Visibility {
    /// Interprets an intersection observer entry.
    pub fn from_entry(is_intersecting: bool, intersection_ratio: f64) -> Self {
        if is_intersecting || intersection_ratio > 0.0 {
            Self::Visible
        } else {
            Self::Hidden
        }
    }

    /// Folds one observer batch of `(is_intersecting, intersection_ratio)`
    /// pairs. Any visible entry makes the batch visible.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (bool, f64)>,
    {
        entries
            .into_iter()
            .map(|(is_intersecting, ratio)| Self::from_entry(is_intersecting, ratio))
            .find(|v| *v == Self::Visible)
            .unwrap_or(Self::Hidden)
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RevealTrigger {
    state: RevealState,
}

impl RevealTrigger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> RevealState {
        self.state
    }

    pub fn is_revealed(&self) -> bool {
        self.state == RevealState::Revealed
    }

    /// Feeds one notification. Returns `true` only on the transition to
    /// `Revealed`, which is the caller's cue to stop observing.
    pub fn observe(&mut self, visibility: Visibility) -> bool {
        match (self.state, visibility) {
            (RevealState::NotRevealed, Visibility::Visible) => {
                self.state = RevealState::Revealed;
                true
            }
            _ => false,
        }
    }

    /// Reveals unconditionally; used when visibility cannot be observed.
    pub fn fail_open(&mut self) -> bool {
        self.observe(Visibility::Visible)
    }

    /// Called once the element is mounted. Without an observer there is
    /// nothing to wait for, so the trigger fails open.
    pub fn mount(&mut self, observer_supported: bool) -> bool {
        !observer_supported && self.fail_open()
    }
}

/// Attribute carried by every element whose style comes from a [`Motion`].
pub const REVEAL_ATTR: &str = "data-reveal";

/// Stylesheet shipped inside `<noscript>`: without scripting nothing can
/// reveal, so every marked element is forced to its resting pose.
pub const NO_SCRIPT_CSS: &str =
    "[data-reveal]{opacity:1!important;transform:none!important;letter-spacing:normal!important}";

/// How far inside the viewport an element must be before it counts as seen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealMargin {
    pub inset_px: u32,
}

impl RevealMargin {
    pub const fn inset(inset_px: u32) -> Self {
        Self { inset_px }
    }

    /// The `rootMargin` handed to the intersection observer.
    pub fn root_margin(self) -> String {
        if self.inset_px == 0 {
            "0px".to_string()
        } else {
            format!("-{}px", self.inset_px)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    /// `cubic-bezier(0.25, 0.46, 0.45, 0.94)`
    EaseOutQuad,
    /// `cubic-bezier(0.4, 0, 0.6, 1)`
    EaseInOut,
}

impl Easing {
    pub fn css(self) -> &'static str {
        match self {
            Self::EaseOutQuad => "cubic-bezier(0.25, 0.46, 0.45, 0.94)",
            Self::EaseInOut => "cubic-bezier(0.4, 0, 0.6, 1)",
        }
    }
}

/// A visual state an element can be in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub opacity: f32,
    pub x: f32,
    pub y: f32,
    pub scale: f32,
    pub rotate: f32,
    pub rotate_x: f32,
    pub letter_spacing_em: Option<f32>,
}

impl Pose {
    /// Identity transform at full opacity.
    pub const REST: Self = Self {
        opacity: 1.0,
        x: 0.0,
        y: 0.0,
        scale: 1.0,
        rotate: 0.0,
        rotate_x: 0.0,
        letter_spacing_em: None,
    };

    /// Fully transparent, otherwise at rest.
    pub const HIDDEN: Self = Self {
        opacity: 0.0,
        ..Self::REST
    };

    pub const fn shift(self, x: f32, y: f32) -> Self {
        Self { x, y, ..self }
    }

    pub const fn scaled(self, scale: f32) -> Self {
        Self { scale, ..self }
    }

    pub const fn rotated(self, rotate: f32) -> Self {
        Self { rotate, ..self }
    }

    pub const fn tilted(self, rotate_x: f32) -> Self {
        Self { rotate_x, ..self }
    }

    pub const fn spaced(self, em: f32) -> Self {
        Self {
            letter_spacing_em: Some(em),
            ..self
        }
    }

    pub fn transform(&self) -> String {
        format!(
            "translate3d({}px, {}px, 0) scale({}) rotate({}deg) rotateX({}deg)",
            self.x, self.y, self.scale, self.rotate, self.rotate_x
        )
    }
}

/// An entrance animation: where the element starts and how it gets to rest.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    pub from: Pose,
    pub duration_ms: u32,
    pub delay_ms: u32,
    pub easing: Easing,
}

impl Motion {
    pub const fn new(from: Pose, duration_ms: u32) -> Self {
        Self {
            from,
            duration_ms,
            delay_ms: 0,
            easing: Easing::EaseOutQuad,
        }
    }

    pub const fn delayed(self, delay_ms: u32) -> Self {
        Self { delay_ms, ..self }
    }

    /// Pushes the start back by `extra_ms` on top of the existing delay.
    pub const fn after(self, extra_ms: u32) -> Self {
        Self {
            delay_ms: self.delay_ms + extra_ms,
            ..self
        }
    }

    /// Inline style for the element: the "from" pose until revealed, then the
    /// resting pose, with a transition between them.
    pub fn style(&self, revealed: bool) -> String {
        let pose = if revealed { Pose::REST } else { self.from };
        let timing = format!(
            "{}ms {} {}ms",
            self.duration_ms,
            self.easing.css(),
            self.delay_ms
        );
        let mut style = format!(
            "opacity: {}; transform: {}; transition: opacity {timing}, transform {timing}",
            pose.opacity,
            pose.transform()
        );
        if let Some(em) = self.from.letter_spacing_em {
            let _ = write!(style, ", letter-spacing {timing}");
            if revealed {
                style.push_str("; letter-spacing: normal");
            } else {
                let _ = write!(style, "; letter-spacing: {em}em");
            }
        }
        style.push(';');
        style
    }
}

/// Entrance animations shared by the page sections.
pub mod presets {
    use super::{Motion, Pose};

    pub const SECTION: Motion = Motion::new(Pose::HIDDEN.shift(0.0, 80.0).scaled(0.95), 1000);
    pub const HEADING: Motion = Motion::new(Pose::HIDDEN.shift(0.0, 30.0).spaced(0.1), 800).delayed(200);
    pub const SUBTITLE: Motion = Motion::new(Pose::HIDDEN.shift(0.0, 20.0), 600).delayed(400);
    pub const FROM_LEFT: Motion = Motion::new(Pose::HIDDEN.shift(-20.0, 40.0), 800).delayed(400);
    pub const FROM_RIGHT: Motion = Motion::new(Pose::HIDDEN.shift(20.0, 40.0), 800).delayed(600);
    pub const RISE: Motion = Motion::new(Pose::HIDDEN.shift(0.0, 40.0), 800).delayed(800);
    pub const GRID: Motion = Motion::new(Pose::HIDDEN, 600).delayed(600);
    pub const CARD: Motion = Motion::new(Pose::HIDDEN.shift(0.0, 60.0).scaled(0.95).tilted(15.0), 800);
    pub const BADGE: Motion = Motion::new(Pose::HIDDEN.scaled(0.8), 500).delayed(300);
    pub const CARD_TEXT: Motion = Motion::new(Pose::HIDDEN.shift(0.0, 20.0), 600).delayed(200);
    pub const CARD_ACTIONS: Motion = Motion::new(Pose::HIDDEN.shift(0.0, 20.0), 600).delayed(400);
    pub const BLOG_ICON: Motion = Motion::new(Pose::HIDDEN.scaled(0.5).rotated(-180.0), 1000).delayed(200);
    pub const CALL_TO_ACTION: Motion = Motion::new(Pose::HIDDEN.shift(0.0, 30.0).scaled(0.9), 800).delayed(800);
    pub const CONTACT: Motion = Motion::new(Pose::HIDDEN.shift(0.0, 50.0), 800);
    pub const SOCIAL: Motion = Motion::new(Pose::HIDDEN.shift(0.0, 30.0).scaled(0.8), 600).delayed(400);
    pub const FOOTNOTE: Motion = Motion::new(Pose::HIDDEN.shift(0.0, 20.0), 800).delayed(800);

    pub const CARD_STAGGER_MS: u32 = 150;

    /// The entrance of one project card and its children. Cards enter
    /// `index * 150ms` apart and their children keep their offsets relative
    /// to the card.
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct CardMotions {
        pub card: Motion,
        pub badge: Motion,
        pub text: Motion,
        pub actions: Motion,
    }

    pub fn card(index: usize) -> CardMotions {
        let offset = u32::try_from(index)
            .unwrap_or(u32::MAX)
            .saturating_mul(CARD_STAGGER_MS);
        CardMotions {
            card: CARD.after(offset),
            badge: BADGE.after(offset),
            text: CARD_TEXT.after(offset),
            actions: CARD_ACTIONS.after(offset),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_not_revealed() {
        let trigger = RevealTrigger::new();
        assert_eq!(trigger.state(), RevealState::NotRevealed);
        assert!(!trigger.is_revealed());
    }

    #[test]
    fn test_hidden_notifications_do_not_reveal() {
        let mut trigger = RevealTrigger::new();
        assert!(!trigger.observe(Visibility::Hidden));
        assert!(!trigger.observe(Visibility::Hidden));
        assert_eq!(trigger.state(), RevealState::NotRevealed);
    }

    #[test]
    fn test_reveals_once_and_never_reverts() {
        let mut trigger = RevealTrigger::new();
        assert!(!trigger.observe(Visibility::Hidden));
        assert!(trigger.observe(Visibility::Visible));
        assert!(trigger.is_revealed());

        // leaving and re-entering the viewport changes nothing
        assert!(!trigger.observe(Visibility::Hidden));
        assert!(!trigger.observe(Visibility::Visible));
        assert_eq!(trigger.state(), RevealState::Revealed);
    }

    #[test]
    fn test_initial_notification_reveals_element_already_in_view() {
        // observers report the current state as their first notification
        let mut trigger = RevealTrigger::new();
        let initial = Visibility::from_entry(true, 1.0);
        assert!(trigger.observe(initial));
        assert!(trigger.is_revealed());
    }

    #[test]
    fn test_fail_open() {
        let mut trigger = RevealTrigger::new();
        assert!(trigger.fail_open());
        assert!(trigger.is_revealed());
        assert!(!trigger.fail_open());
    }

    #[test]
    fn test_visibility_from_entry() {
        assert_eq!(Visibility::from_entry(false, 0.0), Visibility::Hidden);
        assert_eq!(Visibility::from_entry(true, 0.0), Visibility::Visible);
        assert_eq!(Visibility::from_entry(false, 0.25), Visibility::Visible);
    }

    #[test]
    fn test_root_margin() {
        assert_eq!(RevealMargin::inset(150).root_margin(), "-150px");
        assert_eq!(RevealMargin::inset(50).root_margin(), "-50px");
        assert_eq!(RevealMargin::inset(0).root_margin(), "0px");
    }

    #[test]
    fn test_motion_style_switches_pose() {
        let motion = presets::SECTION;
        let hidden = motion.style(false);
        assert!(hidden.starts_with("opacity: 0;"));
        assert!(hidden.contains("translate3d(0px, 80px, 0) scale(0.95)"));

        let shown = motion.style(true);
        assert!(shown.starts_with("opacity: 1;"));
        assert!(shown.contains("translate3d(0px, 0px, 0) scale(1) rotate(0deg) rotateX(0deg)"));
        assert!(shown.contains("1000ms cubic-bezier(0.25, 0.46, 0.45, 0.94) 0ms"));
    }

    #[test]
    fn test_motion_style_letter_spacing() {
        let hidden = presets::HEADING.style(false);
        assert!(hidden.contains("letter-spacing: 0.1em;"));
        assert!(hidden.contains("800ms cubic-bezier(0.25, 0.46, 0.45, 0.94) 200ms"));
        assert!(presets::HEADING.style(true).contains("letter-spacing: normal;"));
        assert!(!presets::SUBTITLE.style(false).contains("letter-spacing"));
    }

    #[test]
    fn test_visibility_from_entries() {
        assert_eq!(Visibility::from_entries([]), Visibility::Hidden);
        assert_eq!(
            Visibility::from_entries([(false, 0.0), (false, 0.0)]),
            Visibility::Hidden
        );
        assert_eq!(
            Visibility::from_entries([(false, 0.0), (true, 0.4)]),
            Visibility::Visible
        );
    }

    #[test]
    fn test_batches_drive_a_single_stop() {
        // every batch goes through the trigger; only the first visible one
        // asks the caller to stop observing
        let batches = [
            vec![(false, 0.0)],
            vec![(false, 0.0), (true, 0.5)],
            vec![(false, 0.0)],
            vec![(true, 1.0)],
        ];
        let mut trigger = RevealTrigger::new();
        let stops: Vec<bool> = batches
            .into_iter()
            .map(|batch| trigger.observe(Visibility::from_entries(batch)))
            .collect();
        assert_eq!(stops, vec![false, true, false, false]);
        assert!(trigger.is_revealed());
    }

    #[test]
    fn test_mount_without_observer_reveals() {
        let mut trigger = RevealTrigger::new();
        assert!(trigger.mount(false));
        assert!(trigger.is_revealed());
    }

    #[test]
    fn test_mount_with_observer_waits() {
        let mut trigger = RevealTrigger::new();
        assert!(!trigger.mount(true));
        assert_eq!(trigger.state(), RevealState::NotRevealed);

        let mut revealed = RevealTrigger::new();
        revealed.observe(Visibility::Visible);
        assert!(!revealed.mount(false));
    }

    #[test]
    fn test_no_script_css_forces_resting_pose() {
        assert!(NO_SCRIPT_CSS.starts_with(&format!("[{REVEAL_ATTR}]")));
        assert!(NO_SCRIPT_CSS.contains("opacity:1!important"));
        assert!(NO_SCRIPT_CSS.contains("transform:none!important"));
    }

    #[test]
    fn test_card_children_follow_card_offset() {
        let first = presets::card(0);
        assert_eq!(first.card.delay_ms, 0);
        assert_eq!(first.badge.delay_ms, 300);
        assert_eq!(first.text.delay_ms, 200);
        assert_eq!(first.actions.delay_ms, 400);

        let third = presets::card(2);
        assert_eq!(third.card.delay_ms, 300);
        assert_eq!(third.badge.delay_ms, 600);
        assert_eq!(third.text.delay_ms, 500);
        assert_eq!(third.actions.delay_ms, 700);
        for child in [third.badge, third.text, third.actions] {
            assert!(child.delay_ms > third.card.delay_ms);
        }
    }

    #[test]
    fn test_after_adds_to_existing_delay() {
        assert_eq!(presets::HEADING.after(400).delay_ms, 600);
        assert_eq!(presets::HEADING.after(400).from, presets::HEADING.from);
    }

    #[test]
    fn test_delayed_keeps_pose() {
        let staggered = presets::CARD.delayed(300);
        assert_eq!(staggered.from, presets::CARD.from);
        assert!(staggered.style(false).contains("rotateX(15deg)"));
        assert!(staggered.style(true).contains(" 300ms"));
    }
}
