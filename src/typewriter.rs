//! Typing/deleting text effect cycling through a fixed list of phrases.
//!
//! [`Typewriter`] is the pure state machine: every [`Typewriter::tick`] moves
//! it one step and [`Typewriter::delay`] says how long to wait before the next
//! one. [`Cycler`] drives a machine from a [`Scheduler`], keeping exactly one
//! pending tick at a time and cancelling it on [`Cycler::stop`].

use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TypewriterError {
    #[error("typewriter needs at least one phrase")]
    EmptyPlaylist,
}

/// Tick pacing. Typing is deliberately slower than deleting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cadence {
    pub type_interval: Duration,
    pub delete_interval: Duration,
    pub dwell: Duration,
}

impl Default for Cadence {
    fn default() -> Self {
        Self {
            type_interval: Duration::from_millis(100),
            delete_interval: Duration::from_millis(50),
            dwell: Duration::from_millis(2000),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Growing,
    Paused,
    Shrinking,
}

#[derive(Debug, Clone)]
pub struct Typewriter {
    phrases: Vec<String>,
    cadence: Cadence,
    index: usize,
    // in chars, not bytes
    len: usize,
    phase: Phase,
}

impl Typewriter {
    pub fn new<I, S>(phrases: I, cadence: Cadence) -> Result<Self, TypewriterError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let phrases = phrases.into_iter().map(Into::into).collect::<Vec<_>>();
        if phrases.is_empty() {
            return Err(TypewriterError::EmptyPlaylist);
        }
        Ok(Self {
            phrases,
            cadence,
            index: 0,
            len: 0,
            phase: Phase::Growing,
        })
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn phrase_index(&self) -> usize {
        self.index
    }

    pub fn displayed_len(&self) -> usize {
        self.len
    }

    /// The currently displayed prefix of the current phrase.
    pub fn text(&self) -> &str {
        let phrase = &self.phrases[self.index];
        match phrase.char_indices().nth(self.len) {
            Some((end, _)) => &phrase[..end],
            None => phrase,
        }
    }

    /// How long to wait before the next [`tick`](Self::tick).
    pub fn delay(&self) -> Duration {
        match self.phase {
            Phase::Growing => self.cadence.type_interval,
            Phase::Paused => self.cadence.dwell,
            Phase::Shrinking => self.cadence.delete_interval,
        }
    }

    pub fn tick(&mut self) {
        match self.phase {
            Phase::Growing => {
                let target = self.phrase_len();
                if self.len < target {
                    self.len += 1;
                }
                if self.len >= target {
                    self.phase = Phase::Paused;
                }
            }
            Phase::Paused => self.phase = Phase::Shrinking,
            Phase::Shrinking => {
                self.len = self.len.saturating_sub(1);
                if self.len == 0 {
                    self.advance();
                }
            }
        }
    }

    /// Back to the first phrase with nothing typed.
    pub fn reset(&mut self) {
        self.index = 0;
        self.len = 0;
        self.phase = Phase::Growing;
    }

    fn advance(&mut self) {
        self.index = (self.index + 1) % self.phrases.len();
        self.len = 0;
        self.phase = Phase::Growing;
    }

    fn phrase_len(&self) -> usize {
        self.phrases[self.index].chars().count()
    }
}

/// One step of the effect: the text shown and how long it waited to appear.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub text: String,
    pub waited: Duration,
}

/// Never ends; use `take` or `take_while`.
impl Iterator for Typewriter {
    type Item = Frame;

    fn next(&mut self) -> Option<Self::Item> {
        let waited = self.delay();
        self.tick();
        Some(Frame {
            text: self.text().to_owned(),
            waited,
        })
    }
}

/// Something that can run a task once after a delay, and forget it again.
pub trait Scheduler: Clone + Send + Sync + 'static {
    type Handle: Send + 'static;

    /// Returns `None` if the task could not be scheduled.
    fn schedule(
        &self,
        delay: Duration,
        task: Box<dyn FnOnce() + Send + 'static>,
    ) -> Option<Self::Handle>;

    fn cancel(&self, handle: Self::Handle);
}

struct Shared<H> {
    machine: Typewriter,
    pending: Option<H>,
    running: bool,
}

/// Runs a [`Typewriter`] on a [`Scheduler`], reporting each frame's text.
pub struct Cycler<S: Scheduler> {
    shared: Arc<Mutex<Shared<S::Handle>>>,
    scheduler: S,
    on_frame: Arc<dyn Fn(String) + Send + Sync>,
}

impl<S: Scheduler> Clone for Cycler<S> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
            scheduler: self.scheduler.clone(),
            on_frame: Arc::clone(&self.on_frame),
        }
    }
}

impl<S: Scheduler> Cycler<S> {
    pub fn new(
        machine: Typewriter,
        scheduler: S,
        on_frame: impl Fn(String) + Send + Sync + 'static,
    ) -> Self {
        Self {
            shared: Arc::new(Mutex::new(Shared {
                machine,
                pending: None,
                running: false,
            })),
            scheduler,
            on_frame: Arc::new(on_frame),
        }
    }

    /// Starts ticking. Does nothing if already running.
    pub fn start(&self) {
        {
            let mut shared = self.lock();
            if shared.running {
                return;
            }
            shared.running = true;
        }
        self.arm();
    }

    /// Cancels the pending tick. No frame is reported after this returns.
    pub fn stop(&self) {
        let pending = {
            let mut shared = self.lock();
            shared.running = false;
            shared.pending.take()
        };
        if let Some(handle) = pending {
            self.scheduler.cancel(handle);
        }
    }

    pub fn is_running(&self) -> bool {
        self.lock().running
    }

    pub fn text(&self) -> String {
        self.lock().machine.text().to_owned()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Shared<S::Handle>> {
        self.shared
            .lock()
            .expect("should be able to lock typewriter state")
    }

    fn arm(&self) {
        let delay = {
            let shared = self.lock();
            if !shared.running {
                return;
            }
            shared.machine.delay()
        };

        let this = self.clone();
        let handle = self.scheduler.schedule(delay, Box::new(move || this.fire()));

        let mut shared = self.lock();
        match handle {
            Some(handle) if shared.running => shared.pending = Some(handle),
            Some(handle) => {
                drop(shared);
                self.scheduler.cancel(handle);
            }
            None => {
                log::warn!("couldn't schedule typewriter tick, stopping");
                shared.running = false;
            }
        }
    }

    fn fire(&self) {
        let text = {
            let mut shared = self.lock();
            if !shared.running {
                return;
            }
            shared.pending = None;
            shared.machine.tick();
            shared.machine.text().to_owned()
        };
        (self.on_frame)(text);
        self.arm();
    }
}
