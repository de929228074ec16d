//! Navigation stack state machine for Navigator
//!
//! This crate provides the model half of the navigator: an ordered,
//! uniquely-keyed stack of screen identifiers, each paired with a replayable
//! visibility signal that a host UI binds to its native push/pop primitive.
//!
//! # Modules
//!
//! - [`navigator`] - The [`Navigator`] controller and its public operations
//! - [`stack`] - Screen identifiers and the ordered screen stack
//! - [`signal`] - Per-entry visibility signals
//! - [`resolver`] - View factory contract and lazy view resolution
//! - [`snapshot`] - Serializable read-only view of the stack
//! - [`config`] - Navigator configuration
//! - [`error`] - Error types
//!
//! # Example
//!
//! ```rust
//! use nav_core::{Navigator, Rendered};
//!
//! let navigator = Navigator::new("root", |screen: &&str| screen.to_uppercase());
//!
//! navigator.navigate("detail").unwrap();
//! assert_eq!(navigator.screens(), vec!["root", "detail"]);
//! assert_eq!(navigator.is_showing_next(&"root"), Some(true));
//! assert_eq!(navigator.resolve_next(&"root"), Rendered::View("DETAIL".to_string()));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod navigator;
pub mod resolver;
pub mod signal;
pub mod snapshot;
pub mod stack;

pub use config::{NavigatorConfig, DEFAULT_STEP_DELAY};
pub use error::{NavigationError, Result};
pub use navigator::Navigator;
pub use resolver::{Rendered, ViewFactory, ViewResolver};
pub use signal::{SignalReceiver, VisibilitySignal};
pub use snapshot::{NavigationSnapshot, SnapshotEntry};
pub use stack::ScreenId;
