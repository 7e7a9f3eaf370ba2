use serde_json::{Value, json};

use overlay::{FillStyle, LineStyle};

/// MapLibre paint spec for the fill layer: ramp-colored by `score`, with
/// the feature-state `hover` flag boosting opacity.
pub fn fill_paint(fill: &FillStyle) -> Value {
    let mut color: Vec<Value> = vec![
        json!("interpolate"),
        json!(["linear"]),
        json!(["get", "score"]),
    ];
    for (pos, stop) in fill.ramp.stops {
        color.push(json!(pos));
        color.push(json!(stop.hex()));
    }

    json!({
        "fill-color": color,
        "fill-opacity": [
            "case",
            ["boolean", ["feature-state", "hover"], false],
            fill.hover_opacity,
            fill.base_opacity,
        ],
    })
}

/// MapLibre paint spec for the outline layer.
pub fn line_paint(line: &LineStyle) -> Value {
    json!({
        "line-color": line.color.hex(),
        "line-width": line.width,
    })
}

#[cfg(test)]
mod tests {
    use super::{fill_paint, line_paint};
    use overlay::{FillStyle, LineStyle};
    use serde_json::json;

    #[test]
    fn fill_paint_encodes_ramp_and_hover_case() {
        let paint = fill_paint(&FillStyle::default());

        assert_eq!(
            paint["fill-color"],
            json!([
                "interpolate",
                ["linear"],
                ["get", "score"],
                0.0,
                "#fee5d9",
                0.5,
                "#fcae91",
                1.0,
                "#fb6a4a",
            ])
        );
        assert_eq!(
            paint["fill-opacity"],
            json!([
                "case",
                ["boolean", ["feature-state", "hover"], false],
                0.9,
                0.5,
            ])
        );
    }

    #[test]
    fn line_paint_encodes_color_and_width() {
        let paint = line_paint(&LineStyle::default());
        assert_eq!(paint, json!({"line-color": "#b22222", "line-width": 2.0}));
    }
}
