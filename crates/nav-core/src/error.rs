//! Error types for navigation operations

/// Navigation errors
///
/// Screens are rendered with their `Debug` representation so the error type
/// stays independent of the integrator's identifier type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NavigationError {
    /// The target screen is already on the stack
    #[error("Screen already on the navigation stack: {0}")]
    DuplicateScreen(String),

    /// The screen is not on the stack
    #[error("Screen not on the navigation stack: {0}")]
    UnknownScreen(String),

    /// Another batch navigation is running on the same navigator
    #[error("A batch navigation is already in progress")]
    BatchInProgress,
}

impl NavigationError {
    pub(crate) fn duplicate(screen: &impl std::fmt::Debug) -> Self {
        NavigationError::DuplicateScreen(format!("{:?}", screen))
    }

    pub(crate) fn unknown(screen: &impl std::fmt::Debug) -> Self {
        NavigationError::UnknownScreen(format!("{:?}", screen))
    }
}

/// Result type for navigation operations
pub type Result<T> = std::result::Result<T, NavigationError>;
