use std::sync::Arc;

use tokio::sync::watch;

/// Shared search box state
///
/// One component publishes the term the user typed, any number of sibling
/// components read it or wait for changes. Clones share the same term.
#[derive(Debug, Clone)]
pub struct SearchTermStore {
    sender: Arc<watch::Sender<String>>,
}

impl Default for SearchTermStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchTermStore {
    pub fn new() -> Self {
        let (sender, _) = watch::channel(String::new());

        Self {
            sender: Arc::new(sender),
        }
    }

    /// Replaces the current term. Subscribers are only woken when it changed.
    pub fn publish(&self, term: impl Into<String>) -> bool {
        let term = term.into();

        self.sender.send_if_modified(|current| {
            if *current == term {
                return false;
            }

            *current = term;
            true
        })
    }

    pub fn current(&self) -> String {
        self.sender.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<String> {
        self.sender.subscribe()
    }
}
