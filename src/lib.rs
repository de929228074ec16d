//! Navigator
//!
//! Programmatic navigation for hierarchical view stacks. The navigator keeps
//! an ordered stack of screen identifiers in sync with a host UI's native
//! back stack, and reconciles the stack when the host dismisses screens on
//! its own.
//!
//! - [`nav_core`] - The stack, visibility signals and the [`Navigator`]
//! - [`nav_ui`] - Per-screen [`NavigationBinding`] for host UIs

#![warn(missing_docs)]
#![warn(clippy::all)]

pub use nav_core;
pub use nav_ui;

pub use nav_core::{
    NavigationError, NavigationSnapshot, Navigator, NavigatorConfig, Rendered, Result, ScreenId,
    SignalReceiver, SnapshotEntry, ViewFactory, ViewResolver, VisibilitySignal,
    DEFAULT_STEP_DELAY,
};
pub use nav_ui::{BindingEvent, NavigationBinding};
