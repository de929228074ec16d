//! View factory contract and lazy view resolution
//!
//! The integrator supplies a [`ViewFactory`] once, when the navigator is
//! created. The navigator never inspects what the factory returns; it only
//! decides which screen to hand it, or yields [`Rendered::Empty`] when no
//! screen is requested.

/// Maps a screen identifier to renderable output
///
/// Implemented for any `Fn(&S) -> V`, so a closure is usually enough.
pub trait ViewFactory<S> {
    /// What the host renders
    type Output;

    /// Build the view for `screen`
    fn make_view(&self, screen: &S) -> Self::Output;
}

impl<S, V, F> ViewFactory<S> for F
where
    F: Fn(&S) -> V,
{
    type Output = V;

    fn make_view(&self, screen: &S) -> V {
        self(screen)
    }
}

/// Result of resolving an optional screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rendered<V> {
    /// No screen requested; render nothing
    Empty,
    /// View produced by the factory
    View(V),
}

impl<V> Default for Rendered<V> {
    fn default() -> Self {
        Rendered::Empty
    }
}

impl<V> Rendered<V> {
    /// Check if nothing was resolved
    pub fn is_empty(&self) -> bool {
        matches!(self, Rendered::Empty)
    }

    /// Get the view, if any
    pub fn view(self) -> Option<V> {
        match self {
            Rendered::Empty => None,
            Rendered::View(view) => Some(view),
        }
    }

    /// Borrow the view, if any
    pub fn as_view(&self) -> Option<&V> {
        match self {
            Rendered::Empty => None,
            Rendered::View(view) => Some(view),
        }
    }
}

/// Resolves optional screens through the integrator's factory
#[derive(Debug, Clone)]
pub struct ViewResolver<F> {
    factory: F,
}

impl<F> ViewResolver<F> {
    /// Create a resolver over a factory
    pub fn new(factory: F) -> Self {
        Self { factory }
    }

    /// Resolve a screen, or [`Rendered::Empty`] for none
    pub fn resolve<S>(&self, screen: Option<&S>) -> Rendered<<F as ViewFactory<S>>::Output>
    where
        F: ViewFactory<S>,
    {
        match screen {
            Some(screen) => Rendered::View(self.factory.make_view(screen)),
            None => Rendered::Empty,
        }
    }
}
