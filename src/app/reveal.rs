use leptos::{html, prelude::*};
use leptos_use::{
    use_intersection_observer_with_options, UseIntersectionObserverOptions,
    UseIntersectionObserverReturn,
};
use wasm_bindgen::JsValue;

use crate::reveal::{Motion, RevealMargin, RevealTrigger, Visibility, NO_SCRIPT_CSS};

/// Watches `target` and flips to `true` the first time it becomes visible.
///
/// The observer is torn down as soon as the element is revealed. Browsers
/// without `IntersectionObserver` get the revealed state straight away.
pub fn use_reveal(target: NodeRef<html::Div>, margin: RevealMargin) -> Signal<bool> {
    let (revealed, set_revealed) = signal(false);
    let trigger = StoredValue::new(RevealTrigger::new());

    let UseIntersectionObserverReturn { stop, .. } = use_intersection_observer_with_options(
        target,
        move |entries, _| {
            // the first callback reports the state at observe time, so
            // elements already on screen reveal without a scroll
            let visibility = Visibility::from_entries(
                entries
                    .iter()
                    .map(|e| (e.is_intersecting(), e.intersection_ratio())),
            );
            if trigger
                .try_update_value(|t| t.observe(visibility))
                .unwrap_or(false)
            {
                log::debug!("revealed at root margin {}", margin.root_margin());
                set_revealed.set(true);
            }
        },
        UseIntersectionObserverOptions::default().root_margin(margin.root_margin()),
    );

    Effect::watch(
        move || revealed.get(),
        move |revealed, _, _| {
            if *revealed {
                stop();
            }
        },
        false,
    );

    Effect::new(move |_| {
        let supported = observer_supported();
        if trigger.try_update_value(|t| t.mount(supported)).unwrap_or(false) {
            log::debug!("IntersectionObserver unavailable, revealing immediately");
            set_revealed.set(true);
        }
    });

    revealed.into()
}

fn observer_supported() -> bool {
    js_sys::Reflect::has(&window(), &JsValue::from_str("IntersectionObserver")).unwrap_or(false)
}

/// `<noscript>` stylesheet holding every `data-reveal` element at rest.
#[component]
pub fn NoScriptReveal() -> impl IntoView {
    view! {
        <noscript>
            <style>{NO_SCRIPT_CSS}</style>
        </noscript>
    }
}

/// Inline style for an element animating with `motion` once `revealed`.
pub fn motion_style(motion: Motion, revealed: Signal<bool>) -> impl Fn() -> String + Send + Sync + 'static {
    move || motion.style(revealed.get())
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    #[test]
    fn test_no_script_fallback_renders_stylesheet() {
        let html = Owner::new().with(|| view! { <NoScriptReveal /> }.to_html());
        let noscript = html.find("<noscript>").expect("noscript element");
        let css = html.find(NO_SCRIPT_CSS).expect("fallback stylesheet");
        assert!(noscript < css);
        assert!(html.contains("<style>"));
    }
}
