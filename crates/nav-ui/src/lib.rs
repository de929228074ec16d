//! Host UI bindings for Navigator
//!
//! This crate connects each screen a host UI renders to the navigator that
//! owns the stack. A screen binds to its own visibility signal, pushes or
//! hides its successor when the signal flips, and reports host-originated
//! dismissals back to the navigator.
//!
//! # Modules
//!
//! - [`binding`] - Per-screen navigation binding

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod binding;

pub use binding::{BindingEvent, NavigationBinding};
