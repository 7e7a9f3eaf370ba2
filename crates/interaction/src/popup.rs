use foundation::geo::LngLat;
use overlay::Feature;

/// A transient popup anchored on the map. Every click spawns a fresh one;
/// nothing caps how many are open at once.
#[derive(Debug, Clone, PartialEq)]
pub struct Popup {
    pub anchor: LngLat,
    pub html: String,
}

impl Popup {
    pub fn new(anchor: LngLat, html: impl Into<String>) -> Self {
        Self {
            anchor,
            html: html.into(),
        }
    }
}

/// Popup for a click that resolved to a feature: name and score verbatim.
pub fn popup_for_feature(anchor: LngLat, feature: &Feature) -> Popup {
    Popup::new(
        anchor,
        format!(
            "<h3>{}</h3><p>Score: <strong>{}</strong></p>",
            feature.name, feature.score
        ),
    )
}

/// Popup for a click outside every feature: the raw coordinate, 5 decimals.
pub fn popup_for_coordinate(anchor: LngLat) -> Popup {
    Popup::new(anchor, format!("<p>{}</p>", anchor.display_rounded()))
}

/// Click dispatch: feature popup when the click hit one, coordinate popup
/// otherwise.
pub fn popup_for_click(anchor: LngLat, feature: Option<&Feature>) -> Popup {
    match feature {
        Some(feature) => popup_for_feature(anchor, feature),
        None => popup_for_coordinate(anchor),
    }
}
