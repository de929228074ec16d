//! Shared fixtures for integration tests
//!
//! Provides an app-like screen identifier type and a minimal host that
//! mirrors what a native navigation stack does with each screen's binding.

#![allow(dead_code)] // Not every test file uses every helper

use navigator::{BindingEvent, NavigationBinding, Navigator, Rendered};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

/// Screens of the test app; instance ids keep repeated pushes distinct
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ScreenID {
    Root,
    Blue { id: Uuid },
    Green { id: Uuid },
}

impl ScreenID {
    pub fn blue() -> Self {
        ScreenID::Blue { id: Uuid::new_v4() }
    }

    pub fn green() -> Self {
        ScreenID::Green { id: Uuid::new_v4() }
    }

    pub fn is_green(&self) -> bool {
        matches!(self, ScreenID::Green { .. })
    }
}

/// What the factory renders
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenView {
    pub screen: ScreenID,
    pub title: &'static str,
}

pub type AppFactory = fn(&ScreenID) -> ScreenView;
pub type AppNavigator = Navigator<ScreenID, AppFactory>;
pub type AppBinding = NavigationBinding<ScreenID, AppFactory>;

pub fn make_view(screen: &ScreenID) -> ScreenView {
    let title = match screen {
        ScreenID::Root => "Root Screen",
        ScreenID::Blue { .. } => "Blue Screen",
        ScreenID::Green { .. } => "Green Screen",
    };
    ScreenView {
        screen: screen.clone(),
        title,
    }
}

pub fn app_navigator() -> Arc<AppNavigator> {
    Arc::new(Navigator::new(ScreenID::Root, make_view as AppFactory))
}

/// Install a test-friendly subscriber; `RUST_LOG=nav_core=debug` shows the
/// navigator's trace
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Native stack of a host UI: one binding per presented screen
pub struct Host {
    navigator: Arc<AppNavigator>,
    presented: Vec<AppBinding>,
    titles: Vec<&'static str>,
}

impl Host {
    pub fn new(navigator: Arc<AppNavigator>) -> Self {
        let mut host = Host {
            navigator,
            presented: Vec::new(),
            titles: Vec::new(),
        };
        let root = host.navigator.root();
        host.present(make_view(&root));
        host
    }

    /// Apply every pending signal change, the way a UI run loop would
    pub fn pump(&mut self) {
        let mut position = 0;
        while position < self.presented.len() {
            match self.presented[position].try_changed() {
                Some(BindingEvent::Push(Rendered::View(view))) => {
                    self.dismiss_above(position);
                    self.present(view);
                    position = 0;
                }
                Some(BindingEvent::Pop) => {
                    self.dismiss_above(position);
                    position = 0;
                }
                Some(BindingEvent::Push(Rendered::Empty)) | None => position += 1,
            }
        }
    }

    /// Swipe back from the top screen
    pub fn back_gesture(&mut self) {
        if self.presented.len() > 1 {
            self.presented.pop();
            self.titles.pop();
            if let Some(parent) = self.presented.last_mut() {
                parent.host_dismissed();
            }
        }
    }

    pub fn visible(&self) -> Vec<ScreenID> {
        self.presented
            .iter()
            .map(|binding| binding.screen().clone())
            .collect()
    }

    pub fn titles(&self) -> Vec<&'static str> {
        self.titles.clone()
    }

    fn present(&mut self, view: ScreenView) {
        let mut next = Some(view);
        while let Some(view) = next.take() {
            let binding = NavigationBinding::bind(Arc::clone(&self.navigator), view.screen)
                .expect("presented screen is on the stack");
            // A signal that was already set when bound is replayed, not
            // delivered as a change
            if binding.is_showing_next() {
                next = binding.next_view().view();
            }
            self.presented.push(binding);
            self.titles.push(view.title);
        }
    }

    fn dismiss_above(&mut self, position: usize) {
        self.presented.truncate(position + 1);
        self.titles.truncate(position + 1);
    }
}

/// Assert the structural invariants that must hold after every operation
pub fn assert_invariants(navigator: &AppNavigator) {
    let screens = navigator.screens();
    assert!(!screens.is_empty());
    assert_eq!(screens[0], ScreenID::Root);

    let unique: std::collections::HashSet<_> = screens.iter().collect();
    assert_eq!(unique.len(), screens.len());

    // Nothing is requested beyond the top
    assert_eq!(navigator.is_showing_next(&navigator.top()), Some(false));
}
