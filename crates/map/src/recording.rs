use std::collections::BTreeSet;

use foundation::ids::FeatureId;
use interaction::pointer::Cursor;
use interaction::popup::Popup;
use overlay::FeatureStateStore;

use crate::engine::{ControlAnchor, ControlKind, MapEngine, Marker, MarkerId, OverlayDescriptor};

/// One observed engine call.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineOp {
    AddControl(ControlKind, ControlAnchor),
    AddMarker(MarkerId),
    RemoveMarker(MarkerId),
    AddOverlay { source: String, feature_count: usize },
    SetFeatureState { source: String, id: FeatureId, hover: bool },
    SetCursor(Cursor),
    OpenPopup(Popup),
    Remove,
}

/// Engine double that records every call in order and mirrors the
/// observable state a real engine would hold (feature-state store, cursor,
/// open popups, live markers). Lets the host and tracker be exercised
/// without a rendering engine.
#[derive(Debug, Default)]
pub struct RecordingEngine {
    ops: Vec<EngineOp>,
    store: FeatureStateStore,
    cursor: Cursor,
    popups: Vec<Popup>,
    markers: BTreeSet<MarkerId>,
    next_marker: u64,
    removed: bool,
}

impl RecordingEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Calls observed so far, in order.
    pub fn ops(&self) -> Vec<EngineOp> {
        self.ops.clone()
    }

    /// Takes the recorded calls, leaving the log empty.
    pub fn drain(&mut self) -> Vec<EngineOp> {
        std::mem::take(&mut self.ops)
    }

    pub fn store(&self) -> &FeatureStateStore {
        &self.store
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn popups(&self) -> &[Popup] {
        &self.popups
    }

    pub fn live_markers(&self) -> Vec<MarkerId> {
        self.markers.iter().copied().collect()
    }

    pub fn removed(&self) -> bool {
        self.removed
    }
}

impl MapEngine for RecordingEngine {
    fn add_control(&mut self, kind: ControlKind, anchor: ControlAnchor) {
        self.ops.push(EngineOp::AddControl(kind, anchor));
    }

    fn add_marker(&mut self, _marker: &Marker) -> MarkerId {
        self.next_marker += 1;
        let id = MarkerId(self.next_marker);
        self.markers.insert(id);
        self.ops.push(EngineOp::AddMarker(id));
        id
    }

    fn remove_marker(&mut self, id: MarkerId) {
        self.markers.remove(&id);
        self.ops.push(EngineOp::RemoveMarker(id));
    }

    fn add_overlay(&mut self, descriptor: &OverlayDescriptor) {
        self.ops.push(EngineOp::AddOverlay {
            source: descriptor.collection.source().to_string(),
            feature_count: descriptor.collection.features().len(),
        });
    }

    fn set_feature_state(&mut self, source: &str, id: FeatureId, hover: bool) {
        self.store.set_hover(id, hover);
        self.ops.push(EngineOp::SetFeatureState {
            source: source.to_string(),
            id,
            hover,
        });
    }

    fn set_cursor(&mut self, cursor: Cursor) {
        self.cursor = cursor;
        self.ops.push(EngineOp::SetCursor(cursor));
    }

    fn open_popup(&mut self, popup: &Popup) {
        self.popups.push(popup.clone());
        self.ops.push(EngineOp::OpenPopup(popup.clone()));
    }

    fn remove(&mut self) {
        self.removed = true;
        self.ops.push(EngineOp::Remove);
    }
}

#[cfg(test)]
mod tests {
    use super::{EngineOp, RecordingEngine};
    use crate::engine::MapEngine;
    use foundation::ids::FeatureId;

    #[test]
    fn records_feature_state_writes_in_order() {
        let mut engine = RecordingEngine::new();
        engine.set_feature_state("test-areas", FeatureId(1), true);
        engine.set_feature_state("test-areas", FeatureId(1), false);
        engine.set_feature_state("test-areas", FeatureId(2), true);

        assert_eq!(engine.store().hovered(), vec![FeatureId(2)]);
        assert_eq!(engine.ops().len(), 3);
    }

    #[test]
    fn drain_clears_the_log_but_not_the_state() {
        let mut engine = RecordingEngine::new();
        engine.set_feature_state("test-areas", FeatureId(1), true);

        let drained = engine.drain();
        assert_eq!(drained.len(), 1);
        assert!(matches!(
            drained[0],
            EngineOp::SetFeatureState { hover: true, .. }
        ));
        assert!(engine.ops().is_empty());
        assert_eq!(engine.store().hovered(), vec![FeatureId(1)]);
    }
}
