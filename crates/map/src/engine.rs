use foundation::geo::LngLat;
use foundation::ids::FeatureId;
use interaction::pointer::Cursor;
use interaction::popup::Popup;
use overlay::{FeatureCollection, FillStyle, LineStyle, Rgba};

pub const VANCOUVER_CENTER: LngLat = LngLat {
    lng: -123.1207,
    lat: 49.2827,
};

const POSITRON_STYLE_URL: &str =
    "https://basemaps.cartocdn.com/gl/positron-gl-style/style.json";

/// Engine construction parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct MapOptions {
    pub container: String,
    pub style_url: String,
    pub center: LngLat,
    pub zoom: f64,
}

impl Default for MapOptions {
    fn default() -> Self {
        Self {
            container: "map-container".to_string(),
            style_url: POSITRON_STYLE_URL.to_string(),
            center: VANCOUVER_CENTER,
            zoom: 11.0,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ScaleUnit {
    Metric,
    Imperial,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ControlKind {
    Navigation,
    Scale { max_width: u32, unit: ScaleUnit },
}

/// Screen anchor for a static UI control.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ControlAnchor {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MarkerId(pub u64);

/// A static pin with an optional always-available popup.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub color: Rgba,
    pub position: LngLat,
    pub popup: Option<Popup>,
}

/// Everything the engine needs to register the data overlay: the source
/// collection plus the fill and outline paint styles over it.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayDescriptor {
    pub collection: FeatureCollection,
    pub fill: FillStyle,
    pub line: LineStyle,
}

/// Capability surface of the rendering engine.
///
/// The host owns exactly one implementation for its mounted lifetime;
/// tracker and presenter only reach the engine through the host. `remove`
/// destroys the underlying instance, which implicitly severs event
/// dispatch.
pub trait MapEngine {
    fn add_control(&mut self, kind: ControlKind, anchor: ControlAnchor);
    fn add_marker(&mut self, marker: &Marker) -> MarkerId;
    fn remove_marker(&mut self, id: MarkerId);
    fn add_overlay(&mut self, descriptor: &OverlayDescriptor);
    fn set_feature_state(&mut self, source: &str, id: FeatureId, hover: bool);
    fn set_cursor(&mut self, cursor: Cursor);
    fn open_popup(&mut self, popup: &Popup);
    fn remove(&mut self);
}
