use std::cell::RefCell;
use std::rc::Rc;

use kartochki::registry::{RegistryError, ResetView, ViewId, ViewRegistry};

/// Records every reset into a shared journal so ordering is observable.
struct Recorder {
    id: ViewId,
    journal: Rc<RefCell<Vec<ViewId>>>,
}

impl ResetView for Recorder {
    fn reset(&mut self) {
        self.journal.borrow_mut().push(self.id);
    }
}

fn registry_of(
    ids: &[ViewId],
) -> (ViewRegistry<Recorder>, Rc<RefCell<Vec<ViewId>>>) {
    let journal = Rc::new(RefCell::new(Vec::new()));
    let mut registry = ViewRegistry::new();
    for &id in ids {
        registry
            .register(
                id,
                Recorder {
                    id,
                    journal: Rc::clone(&journal),
                },
            )
            .unwrap();
    }
    (registry, journal)
}

/// Exactly one view is visible after any successful transition, no matter
/// how many transitions preceded it.
#[test]
fn exactly_one_view_visible_after_each_transition() {
    let ids = [ViewId::Home, ViewId::SignIn, ViewId::Options, ViewId::Review];
    let (mut registry, _) = registry_of(&ids);

    for &target in &[
        ViewId::SignIn,
        ViewId::Options,
        ViewId::Review,
        ViewId::Options,
        ViewId::Home,
    ] {
        registry.transition_to(target).unwrap();
        assert_eq!(registry.visible_ids(), vec![target]);
        assert_eq!(registry.active(), Some(target));
        for &other in &ids {
            assert_eq!(registry.is_visible(other), other == target);
        }
    }
}

/// Every registered view resets on every transition, in registration order,
/// including the view that is about to become visible.
#[test]
fn resets_run_in_registration_order() {
    let ids = [ViewId::Home, ViewId::SignUp, ViewId::SignIn];
    let (mut registry, journal) = registry_of(&ids);

    registry.transition_to(ViewId::SignIn).unwrap();
    assert_eq!(*journal.borrow(), ids.to_vec());

    registry.transition_to(ViewId::Home).unwrap();
    assert_eq!(journal.borrow().len(), 6);
    assert_eq!(journal.borrow()[3..], ids);
}

/// A transition to the already-visible view still resets everything.
#[test]
fn self_transition_resets_all_views() {
    let (mut registry, journal) = registry_of(&[ViewId::Home, ViewId::Options]);

    registry.transition_to(ViewId::Options).unwrap();
    registry.transition_to(ViewId::Options).unwrap();

    assert_eq!(journal.borrow().len(), 4);
    assert_eq!(registry.visible_ids(), vec![ViewId::Options]);
}

/// Registering the same id twice is a hard error and leaves the first
/// registration in place.
#[test]
fn duplicate_registration_fails_and_preserves_the_original() {
    let (mut registry, journal) = registry_of(&[ViewId::Home]);

    let dup = Recorder {
        id: ViewId::Home,
        journal: Rc::clone(&journal),
    };
    assert_eq!(
        registry.register(ViewId::Home, dup),
        Err(RegistryError::Duplicate(ViewId::Home))
    );

    registry.transition_to(ViewId::Home).unwrap();
    // Only the original registration resets.
    assert_eq!(journal.borrow().len(), 1);
}

/// An unknown target fails before any reset runs; the previous view stays
/// visible.
#[test]
fn unknown_target_is_rejected_without_side_effects() {
    let (mut registry, journal) = registry_of(&[ViewId::Home, ViewId::SignIn]);
    registry.transition_to(ViewId::SignIn).unwrap();
    let resets_before = journal.borrow().len();

    assert_eq!(
        registry.transition_to(ViewId::Review),
        Err(RegistryError::Unknown(ViewId::Review))
    );
    assert_eq!(journal.borrow().len(), resets_before);
    assert_eq!(registry.visible_ids(), vec![ViewId::SignIn]);
}

/// Visibility outcomes depend only on the transition sequence, never on
/// the order the views were registered in. Reset order does follow each
/// registry's own registration order.
#[test]
fn registration_order_does_not_affect_transition_outcomes() {
    let forward = [ViewId::Home, ViewId::SignIn, ViewId::Options];
    let reversed = [ViewId::Options, ViewId::SignIn, ViewId::Home];
    let (mut first, first_journal) = registry_of(&forward);
    let (mut second, second_journal) = registry_of(&reversed);

    for &target in &[ViewId::SignIn, ViewId::Home, ViewId::Options, ViewId::Home] {
        first.transition_to(target).unwrap();
        second.transition_to(target).unwrap();
        assert_eq!(first.active(), second.active());
        assert_eq!(first.visible_ids(), second.visible_ids());
    }

    assert_eq!(first_journal.borrow().len(), second_journal.borrow().len());
    assert_eq!(first_journal.borrow()[..3], forward);
    assert_eq!(second_journal.borrow()[..3], reversed);
}

/// Before the first transition no view is visible at all.
#[test]
fn registry_starts_with_nothing_visible() {
    let (registry, journal) = registry_of(&[ViewId::Home, ViewId::SignIn]);
    assert_eq!(registry.active(), None);
    assert!(registry.visible_ids().is_empty());
    assert!(journal.borrow().is_empty());
}
