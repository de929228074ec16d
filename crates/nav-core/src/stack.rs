//! Screen identifiers and the ordered screen stack
//!
//! The stack maps each screen identifier to its [`VisibilitySignal`], in
//! root-to-leaf order. Index 0 is the root and is present for the whole life
//! of the stack; the last entry is the topmost screen.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use crate::signal::VisibilitySignal;

/// Integrator-supplied screen identifier
///
/// Implemented for every cloneable, hashable, debuggable type. Two pushes of
/// the same kind of screen need distinct identifiers, e.g. by carrying a
/// unique instance id.
pub trait ScreenId: Clone + Eq + Hash + Debug + Send + Sync + 'static {}

impl<T> ScreenId for T where T: Clone + Eq + Hash + Debug + Send + Sync + 'static {}

/// A stack entry
#[derive(Debug)]
pub(crate) struct StackEntry<S> {
    /// The screen
    pub screen: S,
    /// Whether this screen's successor is requested to be visible
    pub signal: VisibilitySignal,
}

/// Ordered, uniquely-keyed screen stack
#[derive(Debug)]
pub(crate) struct ScreenStack<S> {
    /// Entries (root to top)
    entries: Vec<StackEntry<S>>,
    /// Position of each screen in `entries`
    index: HashMap<S, usize>,
}

impl<S: ScreenId> ScreenStack<S> {
    /// Create a stack holding only the root
    pub fn new(root: S) -> Self {
        let mut index = HashMap::new();
        index.insert(root.clone(), 0);
        Self {
            entries: vec![StackEntry {
                screen: root,
                signal: VisibilitySignal::new(),
            }],
            index,
        }
    }

    /// Append a new top entry
    ///
    /// Returns false, leaving the stack untouched, if the screen is present.
    pub fn append(&mut self, screen: S, signal: VisibilitySignal) -> bool {
        if self.index.contains_key(&screen) {
            return false;
        }
        self.index.insert(screen.clone(), self.entries.len());
        self.entries.push(StackEntry { screen, signal });
        true
    }

    /// Remove every entry after `screen`, releasing their signals
    ///
    /// Returns the removed screens in stack order, or `None` if `screen` is
    /// not on the stack.
    pub fn truncate_after(&mut self, screen: &S) -> Option<Vec<S>> {
        let position = self.index_of(screen)?;
        let removed: Vec<S> = self
            .entries
            .drain(position + 1..)
            .map(|entry| entry.screen)
            .collect();
        for screen in &removed {
            self.index.remove(screen);
        }
        Some(removed)
    }

    /// Position of a screen
    pub fn index_of(&self, screen: &S) -> Option<usize> {
        self.index.get(screen).copied()
    }

    /// Whether a screen is on the stack
    pub fn contains(&self, screen: &S) -> bool {
        self.index.contains_key(screen)
    }

    /// Entry for a screen
    pub fn get(&self, screen: &S) -> Option<&StackEntry<S>> {
        self.index_of(screen).map(|position| &self.entries[position])
    }

    /// Screen immediately after `screen`
    pub fn successor(&self, screen: &S) -> Option<&S> {
        let position = self.index_of(screen)?;
        self.entries.get(position + 1).map(|entry| &entry.screen)
    }

    /// Entry immediately before the top, absent at depth 1
    pub fn before_last(&self) -> Option<&StackEntry<S>> {
        self.entries
            .len()
            .checked_sub(2)
            .and_then(|position| self.entries.get(position))
    }

    /// Root entry
    pub fn first(&self) -> &StackEntry<S> {
        self.entries.first().expect("Stack should never be empty")
    }

    /// Top entry
    pub fn last(&self) -> &StackEntry<S> {
        self.entries.last().expect("Stack should never be empty")
    }

    /// Stack depth
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Entries, root first
    pub fn iter(&self) -> impl Iterator<Item = &StackEntry<S>> {
        self.entries.iter()
    }
}
