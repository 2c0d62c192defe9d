//! State-change notifications
//!
//! A revision counter behind a `watch` channel. Every mutation of the screen
//! state bumps the revision; subscribers wake up, call `render` again and
//! draw the new view. Intermediate revisions may be skipped, which is fine
//! because the view is always recomputed from scratch.

use tokio::sync::watch;

#[derive(Clone, Debug)]
pub struct ChangeNotifier {
    revision: watch::Sender<u64>,
}

impl ChangeNotifier {
    pub fn new() -> Self {
        let (revision, _) = watch::channel(0);
        Self { revision }
    }

    /// Bump the revision and wake every subscriber.
    pub fn notify(&self) {
        self.revision.send_modify(|rev| *rev = rev.wrapping_add(1));
    }

    pub fn revision(&self) -> u64 {
        *self.revision.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.revision.subscribe()
    }
}

impl Default for ChangeNotifier {
    fn default() -> Self {
        Self::new()
    }
}
