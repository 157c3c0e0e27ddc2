use std::sync::Arc;

use parking_lot::RwLock;

/// Most-recently-used record of the wrap actions a user has invoked.
///
/// The store holds ranking titles, most recent first, each at most once.
/// Writers publish a whole new sequence under the lock; readers clone the
/// current `Arc`, so many concurrent ranking calls share one immutable
/// snapshot and never observe a half-applied update.
#[derive(Debug, Default)]
pub struct UsageHistory {
    titles: RwLock<Arc<[String]>>,
}

impl UsageHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// An atomic snapshot of the current history, most recent first.
    pub fn snapshot(&self) -> Arc<[String]> {
        Arc::clone(&self.titles.read())
    }

    /// Record that the action identified by `title` was invoked.
    ///
    /// The title moves to the front; any earlier occurrence is dropped, so a
    /// title never appears twice.
    pub fn record(&self, title: &str) {
        let mut titles = self.titles.write();
        let mut updated = Vec::with_capacity(titles.len() + 1);
        updated.push(title.to_owned());
        updated.extend(titles.iter().filter(|t| *t != title).cloned());
        *titles = updated.into();
    }

    pub fn is_empty(&self) -> bool {
        self.titles.read().is_empty()
    }
}
