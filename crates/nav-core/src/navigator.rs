//! The navigation controller
//!
//! [`Navigator`] owns the screen stack and every visibility signal in it.
//! Public operations only flip signals and append entries; entries are
//! removed when the host reports a dismissal through [`Navigator::on_dismiss`].
//!
//! All operations except [`Navigator::navigate_with_stack`] are synchronous
//! and complete before returning. The navigator is meant to be driven from a
//! single UI context; the internal lock only exists so the controller can be
//! shared by reference with every screen's binding, and it is never held
//! across an await point.
//!
//! # Example
//!
//! ```rust
//! use nav_core::Navigator;
//!
//! let navigator = Navigator::new("root", |screen: &&str| screen.len());
//! navigator.navigate("inbox").unwrap();
//! navigator.navigate("thread").unwrap();
//!
//! // The host dismissed "thread" with a back gesture
//! navigator.on_dismiss(&"inbox");
//! assert_eq!(navigator.screens(), vec!["root", "inbox"]);
//! ```

use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::config::NavigatorConfig;
use crate::error::{NavigationError, Result};
use crate::resolver::{Rendered, ViewFactory, ViewResolver};
use crate::signal::{SignalReceiver, VisibilitySignal};
use crate::snapshot::{NavigationSnapshot, SnapshotEntry};
use crate::stack::{ScreenId, ScreenStack};

/// Navigation controller for one root screen
pub struct Navigator<S, F> {
    /// Navigation state
    stack: Mutex<ScreenStack<S>>,
    /// Maps successors to views
    resolver: ViewResolver<F>,
    /// Configuration
    config: NavigatorConfig,
    /// Whether a batch navigation is running
    batch_active: AtomicBool,
}

impl<S, F> Navigator<S, F>
where
    S: ScreenId,
    F: ViewFactory<S>,
{
    /// Create a navigator with the default configuration
    pub fn new(root: S, factory: F) -> Self {
        Self::with_config(root, factory, NavigatorConfig::default())
    }

    /// Create a navigator with a custom configuration
    pub fn with_config(root: S, factory: F, config: NavigatorConfig) -> Self {
        tracing::debug!(root = ?root, "Navigator created");
        Self {
            stack: Mutex::new(ScreenStack::new(root)),
            resolver: ViewResolver::new(factory),
            config,
            batch_active: AtomicBool::new(false),
        }
    }

    /// Push a screen on top of the stack
    ///
    /// Fails with [`NavigationError::DuplicateScreen`], leaving the stack
    /// unchanged, if the screen is already on it.
    pub fn navigate(&self, screen: S) -> Result<()> {
        let mut stack = self.stack.lock();

        if stack.contains(&screen) {
            tracing::warn!(screen = ?screen, "Rejected push of a screen already on the stack");
            return Err(NavigationError::duplicate(&screen));
        }

        // The new entry must exist before the parent is signalled; the
        // parent's observer resolves its successor as soon as it sees `true`.
        stack.append(screen.clone(), VisibilitySignal::new());
        if let Some(parent) = stack.before_last() {
            parent.signal.set(true);
        }

        tracing::debug!(screen = ?screen, depth = stack.len(), "Pushed screen");
        Ok(())
    }

    /// Request dismissal of the topmost screen
    ///
    /// No-op at the root.
    pub fn pop(&self) {
        let stack = self.stack.lock();

        match stack.before_last() {
            Some(parent) => {
                parent.signal.set(false);
                tracing::debug!(parent = ?parent.screen, "Pop requested");
            }
            None => tracing::debug!("Pop ignored at root"),
        }
    }

    /// Request dismissal of every screen above the root
    pub fn pop_to_root(&self) {
        let stack = self.stack.lock();
        stack.first().signal.set(false);
        tracing::debug!(depth = stack.len(), "Pop to root requested");
    }

    /// Request dismissal of everything above the first screen matching
    /// `predicate`, falling back to [`pop_to_root`](Self::pop_to_root)
    ///
    /// The predicate runs without the stack locked, so it may read the
    /// navigator.
    pub fn pop_to_first_matching<P>(&self, mut predicate: P)
    where
        P: FnMut(&S) -> bool,
    {
        let matched = self.screens().into_iter().find(|screen| predicate(screen));

        let stack = self.stack.lock();
        let entry = match matched.as_ref().and_then(|screen| stack.get(screen)) {
            Some(entry) => entry,
            None => {
                tracing::debug!("No screen matched; popping to root");
                stack.first()
            }
        };
        entry.signal.set(false);
        tracing::debug!(screen = ?entry.screen, "Pop to screen requested");
    }

    /// Reconcile the stack after the host dismissed the successor of `screen`
    ///
    /// Drops every entry after `screen`. Nothing happens if `screen` is
    /// already the top, or if it is no longer on the stack; the latter is
    /// expected when a dismissal races an earlier truncation. After a
    /// truncation the signal of `screen`, now the top, is reset to `false`.
    pub fn on_dismiss(&self, screen: &S) {
        let mut stack = self.stack.lock();

        let removed = match stack.truncate_after(screen) {
            Some(removed) => removed,
            None => {
                tracing::debug!(screen = ?screen, "Ignored dismissal of a screen not on the stack");
                return;
            }
        };
        if removed.is_empty() {
            return;
        }

        // The new top has no successor to show
        let top = stack.last();
        if top.signal.get() {
            top.signal.set(false);
        }

        tracing::debug!(
            screen = ?screen,
            removed = removed.len(),
            depth = stack.len(),
            "Reconciled dismissal"
        );
    }

    /// Push each screen in order, waiting the configured step delay between
    /// pushes so each host transition can complete
    ///
    /// The first failing push aborts the batch; screens already pushed stay.
    /// Dropping the returned future cancels the remaining pushes and leaves
    /// the stack consistent. Fails with [`NavigationError::BatchInProgress`]
    /// if another batch is running on this navigator.
    pub async fn navigate_with_stack<I>(&self, screens: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
    {
        let _guard = BatchGuard::acquire(&self.batch_active)?;
        let delay = self.config.step_delay();
        let mut screens = screens.into_iter().peekable();

        while let Some(screen) = screens.next() {
            if let Err(e) = self.navigate(screen) {
                tracing::warn!("Batch navigation aborted: {}", e);
                return Err(e);
            }
            if screens.peek().is_some() {
                tokio::time::sleep(delay).await;
            }
        }
        Ok(())
    }

    /// Resolve the view for the successor of `screen`
    ///
    /// [`Rendered::Empty`] if `screen` is the top or not on the stack.
    pub fn resolve_next(&self, screen: &S) -> Rendered<F::Output> {
        let next = self.stack.lock().successor(screen).cloned();
        self.resolver.resolve(next.as_ref())
    }

    /// Observe a screen's visibility signal
    pub fn subscribe(&self, screen: &S) -> Result<SignalReceiver> {
        self.stack
            .lock()
            .get(screen)
            .map(|entry| entry.signal.subscribe())
            .ok_or_else(|| NavigationError::unknown(screen))
    }

    /// Whether a screen's successor is requested visible, or `None` if the
    /// screen is not on the stack
    pub fn is_showing_next(&self, screen: &S) -> Option<bool> {
        self.stack.lock().get(screen).map(|entry| entry.signal.get())
    }

    /// Whether a screen is on the stack
    pub fn contains(&self, screen: &S) -> bool {
        self.stack.lock().contains(screen)
    }

    /// Stack depth
    pub fn depth(&self) -> usize {
        self.stack.lock().len()
    }

    /// Root screen
    pub fn root(&self) -> S {
        self.stack.lock().first().screen.clone()
    }

    /// Topmost screen
    pub fn top(&self) -> S {
        self.stack.lock().last().screen.clone()
    }

    /// Screens, root first
    pub fn screens(&self) -> Vec<S> {
        self.stack.lock().iter().map(|entry| entry.screen.clone()).collect()
    }

    /// Copy of the current stack
    pub fn snapshot(&self) -> NavigationSnapshot<S> {
        let entries = self
            .stack
            .lock()
            .iter()
            .map(|entry| SnapshotEntry {
                screen: entry.screen.clone(),
                show_next: entry.signal.get(),
            })
            .collect();
        NavigationSnapshot { entries }
    }

    /// Navigator configuration
    pub fn config(&self) -> &NavigatorConfig {
        &self.config
    }

    /// Check if a batch navigation is running
    pub fn is_batch_active(&self) -> bool {
        self.batch_active.load(Ordering::SeqCst)
    }
}

/// Marks a batch navigation as running until dropped
struct BatchGuard<'a> {
    active: &'a AtomicBool,
}

impl<'a> BatchGuard<'a> {
    fn acquire(active: &'a AtomicBool) -> Result<Self> {
        active
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .map_err(|_| NavigationError::BatchInProgress)?;
        Ok(Self { active })
    }
}

impl Drop for BatchGuard<'_> {
    fn drop(&mut self) {
        self.active.store(false, Ordering::SeqCst);
    }
}
