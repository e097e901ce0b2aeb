use std::time::Duration;

use leptos::prelude::*;

use super::theme::ThemeState;
use crate::{
    theme::palette,
    typewriter::{Cadence, Cycler, Scheduler, Typewriter},
};

/// Schedules ticks with the browser's `setTimeout`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    type Handle = TimeoutHandle;

    fn schedule(
        &self,
        delay: Duration,
        task: Box<dyn FnOnce() + Send + 'static>,
    ) -> Option<TimeoutHandle> {
        set_timeout_with_handle(task, delay)
            .map_err(|e| log::warn!("setTimeout failed: {e:?}"))
            .ok()
    }

    fn cancel(&self, handle: TimeoutHandle) {
        handle.clear();
    }
}

#[component]
pub fn TypewriterText(
    theme: ThemeState,
    phrases: &'static [&'static str],
    cadence: Cadence,
) -> impl IntoView {
    let (text, set_text) = signal(String::new());

    let cycler = match Typewriter::new(phrases.iter().copied(), cadence) {
        Ok(machine) => Some(Cycler::new(machine, BrowserScheduler, move |frame| {
            set_text.set(frame)
        })),
        Err(e) => {
            log::warn!("typewriter disabled: {e}");
            None
        }
    };

    // effects only run in the browser, so the server never starts a timer
    let starter = cycler.clone();
    Effect::new(move |_| {
        if let Some(cycler) = &starter {
            cycler.start();
        }
    });
    on_cleanup(move || {
        if let Some(cycler) = &cycler {
            cycler.stop();
        }
    });

    view! {
        <p class="font-medium tracking-wide h-12 flex items-center justify-center float-y">
            {move || text.get()}
            <span class=theme.class(palette::CARET)>"|"</span>
        </p>
    }
}
