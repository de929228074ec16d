//! Serializable read-only view of the navigation stack

use serde::{Deserialize, Serialize};

/// One entry of a [`NavigationSnapshot`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotEntry<S> {
    /// The screen
    pub screen: S,
    /// Whether its successor was requested visible
    pub show_next: bool,
}

/// Point-in-time copy of the stack, root first
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationSnapshot<S> {
    /// Entries (root to top)
    pub entries: Vec<SnapshotEntry<S>>,
}

impl<S> NavigationSnapshot<S> {
    /// Stack depth
    pub fn depth(&self) -> usize {
        self.entries.len()
    }

    /// Screens, root first
    pub fn screens(&self) -> impl Iterator<Item = &S> {
        self.entries.iter().map(|entry| &entry.screen)
    }

    /// Topmost screen
    pub fn top(&self) -> Option<&S> {
        self.entries.last().map(|entry| &entry.screen)
    }
}
