use foundation::geo::LngLat;
use foundation::ids::FeatureId;

/// Pointer affordance over the map canvas.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum Cursor {
    #[default]
    Default,
    Pointer,
}

/// A pointer-move or click observation over the overlay.
///
/// `features` lists the overlay features under the pointer, topmost first,
/// matching the engine's queried-features array. An empty list means the
/// pointer is inside the overlay's hit region but over no feature.
#[derive(Debug, Clone, PartialEq)]
pub struct PointerEvent {
    pub position: LngLat,
    pub features: Vec<FeatureId>,
}

impl PointerEvent {
    pub fn at(position: LngLat) -> Self {
        Self {
            position,
            features: Vec::new(),
        }
    }

    pub fn over(position: LngLat, feature: FeatureId) -> Self {
        Self {
            position,
            features: vec![feature],
        }
    }

    pub fn topmost(&self) -> Option<FeatureId> {
        self.features.first().copied()
    }
}
