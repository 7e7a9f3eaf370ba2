use foundation::ids::FeatureId;

use crate::pointer::{Cursor, PointerEvent};

/// Where hover side effects land: the engine's feature-state store and the
/// canvas cursor. Kept minimal so the tracker runs against a fake in tests.
pub trait HighlightSink {
    fn set_hover(&mut self, id: FeatureId, hover: bool);
    fn set_cursor(&mut self, cursor: Cursor);
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum HoverState {
    #[default]
    Idle,
    Hovering(FeatureId),
}

/// Tracks which single feature currently has pointer focus and keeps the
/// sink's highlight flags in step.
///
/// Invariants:
/// - At most one feature is marked hovered at any time.
/// - Moving from A to B clears A's highlight before setting B's.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HoverTracker {
    state: HoverState,
}

impl HoverTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> HoverState {
        self.state
    }

    /// Pointer moved within the overlay's hit region.
    ///
    /// An event with no features is a no-op, not a leave. Re-entering the
    /// feature already hovered writes nothing.
    pub fn pointer_move(&mut self, event: &PointerEvent, sink: &mut impl HighlightSink) {
        let Some(next) = event.topmost() else {
            return;
        };

        match self.state {
            HoverState::Hovering(prev) if prev == next => {}
            HoverState::Hovering(prev) => {
                sink.set_hover(prev, false);
                sink.set_hover(next, true);
                self.state = HoverState::Hovering(next);
            }
            HoverState::Idle => {
                sink.set_hover(next, true);
                sink.set_cursor(Cursor::Pointer);
                self.state = HoverState::Hovering(next);
            }
        }
    }

    /// Pointer left the overlay's hit region entirely.
    pub fn pointer_leave(&mut self, sink: &mut impl HighlightSink) {
        if let HoverState::Hovering(id) = self.state {
            sink.set_hover(id, false);
            sink.set_cursor(Cursor::Default);
            self.state = HoverState::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{HighlightSink, HoverState, HoverTracker};
    use crate::pointer::{Cursor, PointerEvent};
    use foundation::geo::LngLat;
    use foundation::ids::FeatureId;
    use overlay::FeatureStateStore;
    use pretty_assertions::assert_eq;

    #[derive(Debug, PartialEq)]
    enum Op {
        Hover(FeatureId, bool),
        Cursor(Cursor),
    }

    /// Test double: records every write and mirrors it into a state store.
    #[derive(Default)]
    struct RecordingSink {
        ops: Vec<Op>,
        store: FeatureStateStore,
        cursor: Cursor,
    }

    impl HighlightSink for RecordingSink {
        fn set_hover(&mut self, id: FeatureId, hover: bool) {
            self.ops.push(Op::Hover(id, hover));
            self.store.set_hover(id, hover);
        }

        fn set_cursor(&mut self, cursor: Cursor) {
            self.ops.push(Op::Cursor(cursor));
            self.cursor = cursor;
        }
    }

    fn over(id: u64) -> PointerEvent {
        PointerEvent::over(LngLat::new(-123.14, 49.28), FeatureId(id))
    }

    #[test]
    fn entering_a_feature_highlights_it_and_sets_the_cursor() {
        let mut tracker = HoverTracker::new();
        let mut sink = RecordingSink::default();

        tracker.pointer_move(&over(1), &mut sink);

        assert_eq!(tracker.state(), HoverState::Hovering(FeatureId(1)));
        assert_eq!(
            sink.ops,
            vec![Op::Hover(FeatureId(1), true), Op::Cursor(Cursor::Pointer)]
        );
        assert_eq!(sink.store.hovered(), vec![FeatureId(1)]);
    }

    #[test]
    fn empty_payload_is_a_no_op_not_a_leave() {
        let mut tracker = HoverTracker::new();
        let mut sink = RecordingSink::default();

        tracker.pointer_move(&over(1), &mut sink);
        sink.ops.clear();

        tracker.pointer_move(&PointerEvent::at(LngLat::new(0.0, 0.0)), &mut sink);

        assert_eq!(tracker.state(), HoverState::Hovering(FeatureId(1)));
        assert!(sink.ops.is_empty());
        assert_eq!(sink.store.hovered(), vec![FeatureId(1)]);
    }

    #[test]
    fn re_entering_the_same_feature_writes_nothing() {
        let mut tracker = HoverTracker::new();
        let mut sink = RecordingSink::default();

        tracker.pointer_move(&over(1), &mut sink);
        sink.ops.clear();

        tracker.pointer_move(&over(1), &mut sink);
        tracker.pointer_move(&over(1), &mut sink);

        assert!(sink.ops.is_empty());
        assert_eq!(tracker.state(), HoverState::Hovering(FeatureId(1)));
    }

    #[test]
    fn moving_between_features_clears_the_previous_first() {
        let mut tracker = HoverTracker::new();
        let mut sink = RecordingSink::default();

        tracker.pointer_move(&over(1), &mut sink);
        sink.ops.clear();

        tracker.pointer_move(&over(2), &mut sink);

        assert_eq!(
            sink.ops,
            vec![Op::Hover(FeatureId(1), false), Op::Hover(FeatureId(2), true)]
        );
        assert_eq!(sink.store.hovered(), vec![FeatureId(2)]);
        assert_eq!(tracker.state(), HoverState::Hovering(FeatureId(2)));
    }

    #[test]
    fn leave_clears_the_highlight_and_restores_the_cursor() {
        let mut tracker = HoverTracker::new();
        let mut sink = RecordingSink::default();

        tracker.pointer_move(&over(1), &mut sink);
        sink.ops.clear();

        tracker.pointer_leave(&mut sink);

        assert_eq!(
            sink.ops,
            vec![Op::Hover(FeatureId(1), false), Op::Cursor(Cursor::Default)]
        );
        assert_eq!(tracker.state(), HoverState::Idle);
        assert!(sink.store.hovered().is_empty());
        assert_eq!(sink.cursor, Cursor::Default);
    }

    #[test]
    fn leave_while_idle_is_a_no_op() {
        let mut tracker = HoverTracker::new();
        let mut sink = RecordingSink::default();

        tracker.pointer_leave(&mut sink);

        assert!(sink.ops.is_empty());
        assert_eq!(tracker.state(), HoverState::Idle);
    }

    #[test]
    fn at_most_one_feature_is_hovered_across_any_move_sequence() {
        let mut tracker = HoverTracker::new();
        let mut sink = RecordingSink::default();

        let sequence = [1u64, 1, 2, 3, 3, 1, 2];
        for id in sequence {
            tracker.pointer_move(&over(id), &mut sink);
            assert!(sink.store.hovered().len() <= 1, "hovered more than one");
        }
        assert_eq!(sink.store.hovered(), vec![FeatureId(2)]);

        tracker.pointer_leave(&mut sink);
        assert!(sink.store.hovered().is_empty());
    }
}
