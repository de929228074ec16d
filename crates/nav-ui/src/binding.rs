//! Per-screen navigation binding
//!
//! A host renders every screen together with a hidden "show next" slot backed
//! by its native push primitive. [`NavigationBinding`] drives that slot:
//!
//! - the navigator sets the screen's signal `true`: the binding yields
//!   [`BindingEvent::Push`] with the successor's view, resolved lazily
//! - the signal goes `false`: the binding yields [`BindingEvent::Pop`] and
//!   reports the dismissal so the navigator drops the popped entries
//! - the host pops the successor itself (back gesture, back button): the host
//!   calls [`NavigationBinding::host_dismissed`]
//!
//! A binding never pushes or pops on its own; explicit user actions go to
//! the [`Navigator`] it was bound with.
//!
//! # Example
//!
//! ```rust
//! use nav_core::{Navigator, Rendered};
//! use nav_ui::{BindingEvent, NavigationBinding};
//! use std::sync::Arc;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let navigator = Arc::new(Navigator::new("root", |screen: &&str| screen.to_string()));
//! let mut root = NavigationBinding::bind(Arc::clone(&navigator), "root").unwrap();
//!
//! navigator.navigate("detail").unwrap();
//! assert_eq!(
//!     root.changed().await,
//!     Some(BindingEvent::Push(Rendered::View("detail".to_string())))
//! );
//!
//! navigator.pop();
//! assert_eq!(root.changed().await, Some(BindingEvent::Pop));
//! assert_eq!(navigator.screens(), vec!["root"]);
//! # }
//! ```

use std::sync::Arc;

use nav_core::{Navigator, Rendered, Result, ScreenId, SignalReceiver, ViewFactory};

/// What the host should do with a screen's "show next" slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindingEvent<V> {
    /// Present the successor
    Push(Rendered<V>),
    /// Hide the successor
    Pop,
}

/// Connects one rendered screen to its navigator
pub struct NavigationBinding<S, F> {
    /// Navigator shared by every screen of the stack
    navigator: Arc<Navigator<S, F>>,
    /// The bound screen
    screen: S,
    /// The bound screen's signal
    signal: SignalReceiver,
    /// Whether the host is showing the successor
    showing_next: bool,
}

impl<S, F> NavigationBinding<S, F>
where
    S: ScreenId,
    F: ViewFactory<S>,
{
    /// Bind a screen to its signal
    ///
    /// The signal's current value is replayed immediately and becomes the
    /// initial state of the host's slot. Fails if the screen is not on the
    /// stack.
    pub fn bind(navigator: Arc<Navigator<S, F>>, screen: S) -> Result<Self> {
        let mut signal = navigator.subscribe(&screen)?;
        let showing_next = signal.current();
        tracing::debug!(screen = ?screen, showing_next, "Screen bound");

        Ok(Self {
            navigator,
            screen,
            signal,
            showing_next,
        })
    }

    /// The bound screen
    pub fn screen(&self) -> &S {
        &self.screen
    }

    /// The navigator this screen is bound to
    pub fn navigator(&self) -> &Arc<Navigator<S, F>> {
        &self.navigator
    }

    /// Whether the host is showing the successor
    pub fn is_showing_next(&self) -> bool {
        self.showing_next
    }

    /// Whether the screen has left the stack
    pub fn is_released(&self) -> bool {
        self.signal.is_released()
    }

    /// View for the successor, or [`Rendered::Empty`]
    pub fn next_view(&self) -> Rendered<F::Output> {
        self.navigator.resolve_next(&self.screen)
    }

    /// Wait for the next change the host has to act on
    ///
    /// Returns `None` once the screen has been removed from the stack.
    pub async fn changed(&mut self) -> Option<BindingEvent<F::Output>> {
        loop {
            let value = self.signal.changed().await?;
            if let Some(event) = self.apply(value) {
                return Some(event);
            }
        }
    }

    /// Take a pending change without waiting
    pub fn try_changed(&mut self) -> Option<BindingEvent<F::Output>> {
        while let Some(value) = self.signal.try_changed() {
            if let Some(event) = self.apply(value) {
                return Some(event);
            }
        }
        None
    }

    /// Report that the host popped this screen's successor on its own
    pub fn host_dismissed(&mut self) {
        self.showing_next = false;
        tracing::debug!(screen = ?self.screen, "Host dismissed successor");
        self.navigator.on_dismiss(&self.screen);
    }

    fn apply(&mut self, value: bool) -> Option<BindingEvent<F::Output>> {
        if value == self.showing_next {
            return None;
        }
        self.showing_next = value;

        if value {
            Some(BindingEvent::Push(self.next_view()))
        } else {
            // The slot closing is a dismissal like any other
            self.navigator.on_dismiss(&self.screen);
            Some(BindingEvent::Pop)
        }
    }
}
