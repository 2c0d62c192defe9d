//! "Book added" confirmation flag
//!
//! One-shot timer: arming shows the flag and schedules a task that hides it
//! once the window has elapsed. Arming again aborts the pending task and
//! starts a fresh window, so confirmations never stack.

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use super::notifier::ChangeNotifier;

/// How long the confirmation stays on screen.
pub const DEFAULT_CONFIRMATION_WINDOW: Duration = Duration::from_millis(3000);

#[derive(Default)]
struct TimerState {
    visible: bool,
    /// Bumped on every arm/cancel; an expiring task only clears the flag
    /// if nothing re-armed it in the meantime.
    generation: u64,
    pending: Option<JoinHandle<()>>,
}

pub struct AddConfirmation {
    window: Duration,
    state: Arc<Mutex<TimerState>>,
    notifier: ChangeNotifier,
    runtime: Handle,
}

fn lock(state: &Mutex<TimerState>) -> MutexGuard<'_, TimerState> {
    state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl AddConfirmation {
    pub fn new(window: Duration, notifier: ChangeNotifier, runtime: Handle) -> Self {
        Self {
            window,
            state: Arc::new(Mutex::new(TimerState::default())),
            notifier,
            runtime,
        }
    }

    pub fn is_visible(&self) -> bool {
        lock(&self.state).visible
    }

    /// Show the flag and (re)start the countdown.
    pub fn arm(&self) {
        let mut state = lock(&self.state);
        if let Some(previous) = state.pending.take() {
            previous.abort();
        }
        state.generation = state.generation.wrapping_add(1);
        state.visible = true;

        let generation = state.generation;
        let window = self.window;
        let shared = Arc::clone(&self.state);
        let notifier = self.notifier.clone();

        state.pending = Some(self.runtime.spawn(async move {
            tokio::time::sleep(window).await;
            {
                let mut state = lock(&shared);
                if state.generation != generation {
                    return;
                }
                state.visible = false;
                state.pending = None;
            }
            tracing::debug!("add confirmation expired");
            notifier.notify();
        }));
    }

    /// Hide the flag immediately and drop any pending expiry.
    pub fn cancel(&self) {
        let mut state = lock(&self.state);
        if let Some(pending) = state.pending.take() {
            pending.abort();
        }
        state.generation = state.generation.wrapping_add(1);
        state.visible = false;
    }
}

impl Drop for AddConfirmation {
    fn drop(&mut self) {
        self.cancel();
    }
}
