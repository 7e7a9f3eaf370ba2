use std::collections::BTreeMap;

use foundation::ids::FeatureId;

/// Transient per-feature render state, separate from the feature's own
/// attributes. Currently a single `hover` flag per feature.
///
/// The store itself accepts any combination of flags; the hover tracker is
/// what guarantees at most one feature is hovered at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeatureStateStore {
    hover: BTreeMap<FeatureId, bool>,
}

impl FeatureStateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the hover flag.
    ///
    /// Returns `true` if the stored value changed.
    pub fn set_hover(&mut self, id: FeatureId, hover: bool) -> bool {
        let prev = self.hover.insert(id, hover);
        prev.unwrap_or(false) != hover
    }

    pub fn hover(&self, id: FeatureId) -> bool {
        self.hover.get(&id).copied().unwrap_or(false)
    }

    /// Ids with `hover = true`, in ascending id order.
    pub fn hovered(&self) -> Vec<FeatureId> {
        self.hover
            .iter()
            .filter_map(|(id, h)| h.then_some(*id))
            .collect()
    }

    pub fn clear(&mut self) {
        self.hover.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::FeatureStateStore;
    use foundation::ids::FeatureId;

    #[test]
    fn set_hover_reports_changes() {
        let mut store = FeatureStateStore::new();
        assert!(store.set_hover(FeatureId(1), true));
        assert!(!store.set_hover(FeatureId(1), true));
        assert!(store.set_hover(FeatureId(1), false));
        assert!(!store.set_hover(FeatureId(2), false));
    }

    #[test]
    fn hovered_lists_only_true_flags_in_order() {
        let mut store = FeatureStateStore::new();
        store.set_hover(FeatureId(5), true);
        store.set_hover(FeatureId(2), true);
        store.set_hover(FeatureId(3), false);
        assert_eq!(store.hovered(), vec![FeatureId(2), FeatureId(5)]);
        assert!(store.hover(FeatureId(5)));
        assert!(!store.hover(FeatureId(3)));
        assert!(!store.hover(FeatureId(99)));
    }
}
