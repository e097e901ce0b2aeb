use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use codee::string::JsonSerdeWasmCodec;
#[cfg(feature = "hydrate")]
use leptos_use::storage::use_local_storage;

use crate::{
    config::SiteConfig,
    theme::{palette, ThemePreference, Themed},
};

/// The theme flag and its toggle, handed to every section as a prop.
#[derive(Clone, Copy)]
pub struct ThemeState {
    pub preference: Signal<ThemePreference>,
    pub toggle: Callback<()>,
}

impl ThemeState {
    pub fn get(&self) -> ThemePreference {
        self.preference.get()
    }

    /// Reactive class attribute choosing `themed`'s variant for the current
    /// theme.
    pub fn class(self, themed: Themed) -> impl Fn() -> &'static str + Copy + Send + Sync + 'static {
        let preference = self.preference;
        move || themed.pick(preference.get())
    }
}

/// A fixed theme for server-render tests.
#[cfg(all(test, feature = "ssr"))]
pub(crate) fn fixed_theme(theme: ThemePreference) -> ThemeState {
    let (preference, _) = signal(theme);
    ThemeState {
        preference: preference.into(),
        toggle: Callback::new(|_| {}),
    }
}

pub fn use_theme(config: &SiteConfig) -> ThemeState {
    let (preference, set_preference) = signal(config.default_theme);

    #[cfg(feature = "hydrate")]
    let (stored, set_stored, _) =
        use_local_storage::<Option<ThemePreference>, JsonSerdeWasmCodec>(config.theme_storage_key);

    #[cfg(feature = "hydrate")]
    Effect::watch(
        || (),
        move |_, _, _| {
            if let Some(theme) = stored.get_untracked() {
                set_preference.set(theme);
            }
        },
        true,
    );

    let toggle = Callback::new(move |_: ()| {
        let next = preference.get_untracked().toggled();
        log::debug!("switching to {} theme", next.as_str());
        set_preference.set(next);
        #[cfg(feature = "hydrate")]
        set_stored.set(Some(next));
    });

    ThemeState {
        preference: preference.into(),
        toggle,
    }
}

#[component]
pub fn ThemeToggle(theme: ThemeState) -> impl IntoView {
    view! {
        <button
            class=theme.class(palette::THEME_TOGGLE)
            style="animation-delay: 200ms"
            aria-label=move || format!("Switch to {} theme", theme.get().toggled().as_str())
            on:click=move |_| theme.toggle.run(())
        >
            <span
                class="inline-block w-5 h-5 leading-5 transition-transform duration-300"
                style=move || {
                    if theme.get().is_dark() { "transform: rotate(0deg)" } else { "transform: rotate(180deg)" }
                }
            >
                {move || if theme.get().is_dark() { "☾" } else { "☀" }}
            </span>
        </button>
    }
}
