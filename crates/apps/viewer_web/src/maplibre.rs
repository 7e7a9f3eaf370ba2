use serde_json::json;
use wasm_bindgen::prelude::*;

use foundation::ids::FeatureId;
use interaction::pointer::Cursor;
use interaction::popup::Popup;
use map::{
    ControlAnchor, ControlKind, MapEngine, MapOptions, Marker, MarkerId, OverlayDescriptor,
    ScaleUnit,
};

use crate::paint::{fill_paint, line_paint};

#[wasm_bindgen(module = "/static/map.js")]
extern "C" {
    #[wasm_bindgen(js_name = mapCreate)]
    fn map_create(options_json: &str);
    #[wasm_bindgen(js_name = mapAddControl)]
    fn map_add_control(kind_json: &str, anchor: &str);
    #[wasm_bindgen(js_name = mapAddMarker)]
    fn map_add_marker(id: f64, marker_json: &str);
    #[wasm_bindgen(js_name = mapRemoveMarker)]
    fn map_remove_marker(id: f64);
    #[wasm_bindgen(js_name = mapAddOverlay)]
    fn map_add_overlay(overlay_json: &str);
    #[wasm_bindgen(js_name = mapSetFeatureState)]
    fn map_set_feature_state(source: &str, id: f64, hover: bool);
    #[wasm_bindgen(js_name = mapSetCursor)]
    fn map_set_cursor(cursor: &str);
    #[wasm_bindgen(js_name = mapOpenPopup)]
    fn map_open_popup(popup_json: &str);
    #[wasm_bindgen(js_name = mapRemove)]
    fn map_remove();
}

/// `MapEngine` over a MapLibre GL JS instance living on the JS side of the
/// shim. Payloads cross the boundary as JSON text.
pub struct MapLibreEngine {
    next_marker: u64,
}

impl MapLibreEngine {
    /// Creates the underlying MapLibre map. Fire-and-forget: a failing
    /// style load degrades silently on the JS side.
    pub fn new(options: &MapOptions) -> Self {
        map_create(
            &json!({
                "container": options.container,
                "style": options.style_url,
                "center": [options.center.lng, options.center.lat],
                "zoom": options.zoom,
            })
            .to_string(),
        );
        Self { next_marker: 0 }
    }
}

fn anchor_name(anchor: ControlAnchor) -> &'static str {
    match anchor {
        ControlAnchor::TopLeft => "top-left",
        ControlAnchor::TopRight => "top-right",
        ControlAnchor::BottomLeft => "bottom-left",
        ControlAnchor::BottomRight => "bottom-right",
    }
}

impl MapEngine for MapLibreEngine {
    fn add_control(&mut self, kind: ControlKind, anchor: ControlAnchor) {
        let kind_json = match kind {
            ControlKind::Navigation => json!({"kind": "navigation"}),
            ControlKind::Scale { max_width, unit } => json!({
                "kind": "scale",
                "maxWidth": max_width,
                "unit": match unit {
                    ScaleUnit::Metric => "metric",
                    ScaleUnit::Imperial => "imperial",
                },
            }),
        };
        map_add_control(&kind_json.to_string(), anchor_name(anchor));
    }

    fn add_marker(&mut self, marker: &Marker) -> MarkerId {
        self.next_marker += 1;
        let id = MarkerId(self.next_marker);
        map_add_marker(
            id.0 as f64,
            &json!({
                "color": marker.color.hex(),
                "lngLat": [marker.position.lng, marker.position.lat],
                "popupHtml": marker.popup.as_ref().map(|p| p.html.as_str()),
            })
            .to_string(),
        );
        id
    }

    fn remove_marker(&mut self, id: MarkerId) {
        map_remove_marker(id.0 as f64);
    }

    fn add_overlay(&mut self, descriptor: &OverlayDescriptor) {
        map_add_overlay(
            &json!({
                "source": descriptor.collection.source(),
                "data": descriptor.collection.to_geojson_value(),
                "fillPaint": fill_paint(&descriptor.fill),
                "linePaint": line_paint(&descriptor.line),
            })
            .to_string(),
        );
    }

    fn set_feature_state(&mut self, source: &str, id: FeatureId, hover: bool) {
        map_set_feature_state(source, id.0 as f64, hover);
    }

    fn set_cursor(&mut self, cursor: Cursor) {
        map_set_cursor(match cursor {
            Cursor::Default => "",
            Cursor::Pointer => "pointer",
        });
    }

    fn open_popup(&mut self, popup: &Popup) {
        map_open_popup(
            &json!({
                "lngLat": [popup.anchor.lng, popup.anchor.lat],
                "html": popup.html,
            })
            .to_string(),
        );
    }

    fn remove(&mut self) {
        map_remove();
    }
}
