//! One-shot reveal latches.
//!
//! Sections and sub-elements register by id. The first time an element is
//! reported on screen its flag latches to `true` and stays there for the rest
//! of the page session, so entrance animations play once instead of on every
//! scroll pass. Leaving the viewport is never observed as a change.

use std::collections::HashSet;
use std::rc::Rc;

use log::{debug, warn};
use thiserror::Error;
use yew::Reducible;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrackerError {
    #[error("reveal target '{0}' is already registered")]
    Duplicate(String),
    #[error("tracker has been torn down")]
    Detached,
}

/// One entry of an intersection batch.
#[derive(Debug, Clone, PartialEq)]
pub struct IntersectionSample {
    pub id: String,
    pub intersecting: bool,
}

impl IntersectionSample {
    pub fn new(id: impl Into<String>, intersecting: bool) -> Self {
        Self {
            id: id.into(),
            intersecting,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct VisibilityTracker {
    registered: HashSet<String>,
    revealed: HashSet<String>,
    detached: bool,
}

impl VisibilityTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, id: &str) -> Result<(), TrackerError> {
        if self.detached {
            return Err(TrackerError::Detached);
        }
        if !self.registered.insert(id.to_string()) {
            return Err(TrackerError::Duplicate(id.to_string()));
        }
        Ok(())
    }

    /// Stops tracking `id`. Unknown ids are ignored.
    pub fn unregister(&mut self, id: &str) -> bool {
        self.registered.remove(id)
    }

    pub fn is_registered(&self, id: &str) -> bool {
        self.registered.contains(id)
    }

    pub fn is_revealed(&self, id: &str) -> bool {
        self.revealed.contains(id)
    }

    /// Latches `id` if it is tracked, on screen and not latched yet.
    /// Returns whether anything changed.
    pub fn on_intersect(&mut self, id: &str, intersecting: bool) -> bool {
        if self.detached || !intersecting || !self.registered.contains(id) {
            return false;
        }
        self.revealed.insert(id.to_string())
    }

    /// Applies a whole batch and returns the ids that latched in it.
    pub fn observe(&mut self, batch: &[IntersectionSample]) -> Vec<String> {
        batch
            .iter()
            .filter(|sample| self.on_intersect(&sample.id, sample.intersecting))
            .map(|sample| sample.id.clone())
            .collect()
    }

    /// Latches every tracked target. Used when the browser has no
    /// intersection support so content never stays hidden.
    pub fn reveal_all(&mut self) -> usize {
        if self.detached {
            return 0;
        }
        let before = self.revealed.len();
        self.revealed.extend(self.registered.iter().cloned());
        self.revealed.len() - before
    }

    /// Latches a single tracked target without waiting for the observer.
    pub fn force_reveal(&mut self, id: &str) -> bool {
        if self.detached || !self.registered.contains(id) {
            return false;
        }
        self.revealed.insert(id.to_string())
    }

    pub fn teardown(&mut self) {
        self.registered.clear();
        self.detached = true;
    }

    pub fn is_detached(&self) -> bool {
        self.detached
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed.len()
    }
}

pub enum TrackerAction {
    Register(String),
    Unregister(String),
    Observe(Vec<IntersectionSample>),
    /// Registers and immediately latches, for targets nothing can observe.
    RegisterRevealed(String),
    RevealAll,
    Teardown,
}

impl Reducible for VisibilityTracker {
    type Action = TrackerAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        let changed = match action {
            TrackerAction::Register(id) => match next.register(&id) {
                Ok(()) => true,
                Err(e) => {
                    warn!("{}", e);
                    false
                }
            },
            TrackerAction::Unregister(id) => next.unregister(&id),
            TrackerAction::Observe(batch) => {
                let latched = next.observe(&batch);
                if !latched.is_empty() {
                    debug!("revealed: {}", latched.join(", "));
                }
                !latched.is_empty()
            }
            TrackerAction::RegisterRevealed(id) => {
                if let Err(e) = next.register(&id) {
                    warn!("{}", e);
                }
                next.force_reveal(&id)
            }
            TrackerAction::RevealAll => next.reveal_all() > 0,
            TrackerAction::Teardown => {
                let was_attached = !next.detached;
                next.teardown();
                was_attached
            }
        };

        // Returning the same Rc tells yew nothing changed, so repeated
        // intersection events for latched ids never re-render.
        if changed {
            Rc::new(next)
        } else {
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn tracker_with(ids: &[&str]) -> VisibilityTracker {
        let mut tracker = VisibilityTracker::new();
        for id in ids {
            tracker.register(id).unwrap();
        }
        tracker
    }

    #[test]
    fn latch_never_flips_back() {
        let mut tracker = tracker_with(&["about"]);

        assert!(tracker.on_intersect("about", true));
        assert!(tracker.is_revealed("about"));

        assert!(!tracker.on_intersect("about", false));
        assert!(tracker.is_revealed("about"));

        assert!(!tracker.on_intersect("about", true));
        assert!(tracker.is_revealed("about"));
    }

    #[test]
    fn unknown_ids_read_as_hidden() {
        let tracker = VisibilityTracker::new();
        assert!(!tracker.is_revealed("nonexistent"));
    }

    #[test]
    fn unregistered_ids_do_not_latch() {
        let mut tracker = VisibilityTracker::new();
        assert!(!tracker.on_intersect("ghost", true));
        assert!(!tracker.is_revealed("ghost"));
    }

    #[test]
    fn whole_batch_latches_together() {
        let mut tracker = tracker_with(&["services", "team", "contact"]);
        let latched = tracker.observe(&[
            IntersectionSample::new("services", true),
            IntersectionSample::new("team", true),
            IntersectionSample::new("contact", false),
        ]);
        assert_eq!(latched, vec!["services".to_string(), "team".to_string()]);
        assert_eq!(tracker.revealed_count(), 2);
    }

    #[test]
    fn duplicate_registration_is_rejected_without_side_effects() {
        let mut tracker = tracker_with(&["about", "team"]);
        tracker.on_intersect("about", true);

        assert_eq!(
            tracker.register("about"),
            Err(TrackerError::Duplicate("about".to_string()))
        );
        assert!(tracker.is_revealed("about"));
        assert!(tracker.is_registered("team"));
        assert!(!tracker.is_revealed("team"));
    }

    #[test]
    fn unregister_unknown_is_noop() {
        let mut tracker = VisibilityTracker::new();
        assert!(!tracker.unregister("never"));
    }

    #[test]
    fn unregistered_target_keeps_latch_but_stops_changing() {
        let mut tracker = tracker_with(&["about", "team"]);
        tracker.on_intersect("about", true);
        tracker.unregister("about");
        tracker.unregister("team");

        assert!(tracker.is_revealed("about"));
        assert!(!tracker.on_intersect("team", true));
        assert!(!tracker.is_revealed("team"));
    }

    #[test]
    fn late_events_after_teardown_change_nothing() {
        let mut tracker = tracker_with(&["about"]);
        tracker.teardown();

        assert!(!tracker.on_intersect("about", true));
        assert!(tracker.observe(&[IntersectionSample::new("about", true)]).is_empty());
        assert_eq!(tracker.reveal_all(), 0);
        assert_eq!(tracker.register("team"), Err(TrackerError::Detached));
        assert!(!tracker.is_revealed("about"));
    }

    #[test]
    fn reveal_all_fails_open() {
        let mut tracker = tracker_with(&["a", "b", "c"]);
        tracker.on_intersect("a", true);
        assert_eq!(tracker.reveal_all(), 2);
        assert!(["a", "b", "c"].iter().all(|id| tracker.is_revealed(id)));
    }

    #[test]
    fn empty_tracker_is_valid() {
        let mut tracker = VisibilityTracker::new();
        assert!(tracker.observe(&[]).is_empty());
        assert_eq!(tracker.reveal_all(), 0);
    }

    #[test]
    fn reducer_keeps_rc_when_nothing_changes() {
        let state = Rc::new(tracker_with(&["about"]));
        let state = state.reduce(TrackerAction::Observe(vec![IntersectionSample::new(
            "about", true,
        )]));
        assert!(state.is_revealed("about"));

        let again = state
            .clone()
            .reduce(TrackerAction::Observe(vec![IntersectionSample::new("about", true)]));
        assert!(Rc::ptr_eq(&state, &again));

        let leaving = again
            .clone()
            .reduce(TrackerAction::Observe(vec![IntersectionSample::new("about", false)]));
        assert!(Rc::ptr_eq(&again, &leaving));
        assert!(leaving.is_revealed("about"));
    }

    #[test]
    fn reducer_register_revealed_latches_only_that_target() {
        let state = Rc::new(VisibilityTracker::new());
        let state = state.reduce(TrackerAction::Register("hero".into()));
        let state = state.reduce(TrackerAction::RegisterRevealed("contact".into()));
        assert!(state.is_revealed("contact"));
        assert!(!state.is_revealed("hero"));

        let state = state.reduce(TrackerAction::RevealAll);
        assert!(state.is_revealed("hero"));
    }

    #[test]
    fn reducer_teardown_is_idempotent() {
        let state = Rc::new(tracker_with(&["about"]));
        let state = state.reduce(TrackerAction::Teardown);
        assert!(state.is_detached());
        let again = state.clone().reduce(TrackerAction::Teardown);
        assert!(Rc::ptr_eq(&state, &again));
    }
}
