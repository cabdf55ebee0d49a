//! View registry: the single source of truth for which screen is presented.
//!
//! Screens register once at startup; afterwards every navigation goes
//! through [`ViewRegistry::transition_to`], which resets *every* registered
//! view (not just the outgoing one) and then makes exactly one visible.
//! There are no guard conditions between states: any registered view can be
//! reached from any other.

use std::fmt;

use thiserror::Error;

/// Identifier of one mutually-exclusive screen section.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ViewId {
    Home,
    SignUp,
    SignIn,
    Options,
    CreateCard,
    UpdateCard,
    DeleteCard,
    Review,
    ChangePassword,
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ViewId::Home => "home",
            ViewId::SignUp => "sign-up",
            ViewId::SignIn => "sign-in",
            ViewId::Options => "options",
            ViewId::CreateCard => "create-card",
            ViewId::UpdateCard => "update-card",
            ViewId::DeleteCard => "delete-card",
            ViewId::Review => "review",
            ViewId::ChangePassword => "change-password",
        };
        f.write_str(name)
    }
}

/// Contract violations. Both can only arise from a coding mistake, never
/// from user input, so callers are expected to fail fast on them.
#[derive(Debug, Error, Eq, PartialEq)]
pub enum RegistryError {
    #[error("view '{0}' is already registered")]
    Duplicate(ViewId),

    #[error("no view registered for '{0}'")]
    Unknown(ViewId),
}

/// Hook invoked on every registered view during a transition, before the
/// registry decides visibility.
pub trait ResetView {
    fn reset(&mut self);
}

struct ViewEntry<V> {
    id: ViewId,
    view: V,
    visible: bool,
}

/// Ordered collection of view registrations. Iteration order is
/// registration order; entries are never removed.
pub struct ViewRegistry<V> {
    entries: Vec<ViewEntry<V>>,
}

impl<V> Default for ViewRegistry<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> ViewRegistry<V> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Adds a registration. Views start hidden; nothing is visible until
    /// the first transition.
    pub fn register(&mut self, id: ViewId, view: V) -> Result<(), RegistryError> {
        if self.entries.iter().any(|entry| entry.id == id) {
            return Err(RegistryError::Duplicate(id));
        }
        self.entries.push(ViewEntry {
            id,
            view,
            visible: false,
        });
        Ok(())
    }

    /// The currently visible view, if a transition has happened yet.
    pub fn active(&self) -> Option<ViewId> {
        self.entries
            .iter()
            .find(|entry| entry.visible)
            .map(|entry| entry.id)
    }

    pub fn is_visible(&self, id: ViewId) -> bool {
        self.entries
            .iter()
            .any(|entry| entry.id == id && entry.visible)
    }

    /// Ids of all visible views, in registration order. After any completed
    /// transition this has exactly one element.
    pub fn visible_ids(&self) -> Vec<ViewId> {
        self.entries
            .iter()
            .filter(|entry| entry.visible)
            .map(|entry| entry.id)
            .collect()
    }

    pub fn get(&self, id: ViewId) -> Option<&V> {
        self.entries
            .iter()
            .find(|entry| entry.id == id)
            .map(|entry| &entry.view)
    }

    pub fn get_mut(&mut self, id: ViewId) -> Option<&mut V> {
        self.entries
            .iter_mut()
            .find(|entry| entry.id == id)
            .map(|entry| &mut entry.view)
    }

    pub fn active_view(&self) -> Option<&V> {
        self.entries
            .iter()
            .find(|entry| entry.visible)
            .map(|entry| &entry.view)
    }

    pub fn active_view_mut(&mut self) -> Option<&mut V> {
        self.entries
            .iter_mut()
            .find(|entry| entry.visible)
            .map(|entry| &mut entry.view)
    }

    /// Visits every registered view in registration order.
    pub fn for_each_view_mut(&mut self, mut f: impl FnMut(ViewId, &mut V)) {
        for entry in &mut self.entries {
            f(entry.id, &mut entry.view);
        }
    }
}

impl<V: ResetView> ViewRegistry<V> {
    /// Makes `next` the only visible view.
    ///
    /// Every registered view is reset first, in registration order,
    /// including the one becoming visible. An unknown target is rejected
    /// before any reset runs, leaving visibility untouched.
    pub fn transition_to(&mut self, next: ViewId) -> Result<(), RegistryError> {
        if !self.entries.iter().any(|entry| entry.id == next) {
            return Err(RegistryError::Unknown(next));
        }

        for entry in &mut self.entries {
            entry.view.reset();
        }
        for entry in &mut self.entries {
            entry.visible = entry.id == next;
        }

        tracing::debug!(target: "registry", view = %next, "transitioned");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Probe {
        resets: usize,
    }

    impl ResetView for Probe {
        fn reset(&mut self) {
            self.resets += 1;
        }
    }

    fn probe() -> Probe {
        Probe { resets: 0 }
    }

    #[test]
    fn nothing_visible_before_first_transition() {
        let mut registry = ViewRegistry::new();
        registry.register(ViewId::Home, probe()).unwrap();
        assert_eq!(registry.active(), None);
        assert!(registry.visible_ids().is_empty());
    }

    #[test]
    fn duplicate_registration_is_rejected() {
        let mut registry = ViewRegistry::new();
        registry.register(ViewId::Home, probe()).unwrap();
        assert_eq!(
            registry.register(ViewId::Home, probe()),
            Err(RegistryError::Duplicate(ViewId::Home))
        );
    }

    #[test]
    fn unknown_target_leaves_visibility_untouched() {
        let mut registry = ViewRegistry::new();
        registry.register(ViewId::Home, probe()).unwrap();
        registry.transition_to(ViewId::Home).unwrap();

        assert_eq!(
            registry.transition_to(ViewId::Review),
            Err(RegistryError::Unknown(ViewId::Review))
        );
        assert_eq!(registry.visible_ids(), vec![ViewId::Home]);
        // No reset ran for the failed transition.
        assert_eq!(registry.get(ViewId::Home).unwrap().resets, 1);
    }

    #[test]
    fn every_view_resets_on_every_transition() {
        let mut registry = ViewRegistry::new();
        registry.register(ViewId::Home, probe()).unwrap();
        registry.register(ViewId::SignIn, probe()).unwrap();

        registry.transition_to(ViewId::SignIn).unwrap();
        registry.transition_to(ViewId::SignIn).unwrap();

        assert_eq!(registry.get(ViewId::Home).unwrap().resets, 2);
        assert_eq!(registry.get(ViewId::SignIn).unwrap().resets, 2);
        assert_eq!(registry.visible_ids(), vec![ViewId::SignIn]);
    }
}
