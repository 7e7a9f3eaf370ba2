use serde_json::{Map, Value};

use foundation::bounds::Bounds2;
use foundation::geo::LngLat;
use foundation::ids::FeatureId;

/// One polygon of the overlay.
///
/// Features are defined at startup and immutable for the component's
/// lifetime; transient render state lives in `FeatureStateStore` instead.
#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    pub id: FeatureId,
    pub name: String,
    /// Normalized attribute in [0, 1]; drives the fill color ramp.
    pub score: f64,
    /// Polygon rings: outer ring first, then holes.
    pub rings: Vec<Vec<LngLat>>,
    bounds: Bounds2,
}

impl Feature {
    pub fn new(id: FeatureId, name: impl Into<String>, score: f64, rings: Vec<Vec<LngLat>>) -> Self {
        let bounds = match rings.first() {
            Some(outer) => Bounds2::from_points(outer),
            None => Bounds2::empty(),
        };
        Self {
            id,
            name: name.into(),
            score,
            rings,
            bounds,
        }
    }

    /// Bounds of the outer ring, cached at construction.
    pub fn bounds(&self) -> Bounds2 {
        self.bounds
    }
}

/// Ordered overlay source: the named feature collection the paint layers
/// draw from.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureCollection {
    source: String,
    features: Vec<Feature>,
}

#[derive(Debug)]
pub enum OverlayError {
    NotAFeatureCollection,
    InvalidFeature { index: usize, reason: String },
}

impl std::fmt::Display for OverlayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OverlayError::NotAFeatureCollection => {
                write!(f, "expected GeoJSON FeatureCollection")
            }
            OverlayError::InvalidFeature { index, reason } => {
                write!(f, "invalid feature at index {index}: {reason}")
            }
        }
    }
}

impl std::error::Error for OverlayError {}

impl FeatureCollection {
    pub fn new(source: impl Into<String>, features: Vec<Feature>) -> Self {
        Self {
            source: source.into(),
            features,
        }
    }

    /// The two Vancouver test rectangles the component ships with.
    pub fn test_areas() -> Self {
        let area_a = Feature::new(
            FeatureId(1),
            "Test Area A",
            0.2,
            vec![vec![
                LngLat::new(-123.15, 49.285),
                LngLat::new(-123.13, 49.285),
                LngLat::new(-123.13, 49.275),
                LngLat::new(-123.15, 49.275),
                LngLat::new(-123.15, 49.285),
            ]],
        );
        let area_b = Feature::new(
            FeatureId(2),
            "Test Area B",
            0.7,
            vec![vec![
                LngLat::new(-123.13, 49.285),
                LngLat::new(-123.11, 49.285),
                LngLat::new(-123.11, 49.275),
                LngLat::new(-123.13, 49.275),
                LngLat::new(-123.13, 49.285),
            ]],
        );
        Self::new("test-areas", vec![area_a, area_b])
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    pub fn feature(&self, id: FeatureId) -> Option<&Feature> {
        self.features.iter().find(|f| f.id == id)
    }

    pub fn from_geojson_str(source: impl Into<String>, payload: &str) -> Result<Self, OverlayError> {
        let value: Value =
            serde_json::from_str(payload).map_err(|e| OverlayError::InvalidFeature {
                index: 0,
                reason: format!("JSON parse error: {e}"),
            })?;
        Self::from_geojson_value(source, &value)
    }

    pub fn from_geojson_value(
        source: impl Into<String>,
        value: &Value,
    ) -> Result<Self, OverlayError> {
        let obj = value.as_object().ok_or(OverlayError::NotAFeatureCollection)?;
        let ty = obj
            .get("type")
            .and_then(|v| v.as_str())
            .ok_or(OverlayError::NotAFeatureCollection)?;
        if ty != "FeatureCollection" {
            return Err(OverlayError::NotAFeatureCollection);
        }

        let features_val = obj
            .get("features")
            .and_then(|v| v.as_array())
            .ok_or(OverlayError::NotAFeatureCollection)?;

        let mut features = Vec::with_capacity(features_val.len());
        for (index, feat_val) in features_val.iter().enumerate() {
            features.push(parse_feature(index, feat_val)?);
        }

        Ok(Self {
            source: source.into(),
            features,
        })
    }

    /// Emits the collection as a GeoJSON FeatureCollection, the shape the
    /// engine's source registration expects.
    pub fn to_geojson_value(&self) -> Value {
        let mut root = Map::new();
        root.insert(
            "type".to_string(),
            Value::String("FeatureCollection".to_string()),
        );

        let mut features: Vec<Value> = Vec::with_capacity(self.features.len());
        for feat in &self.features {
            let mut fobj = Map::new();
            fobj.insert("type".to_string(), Value::String("Feature".to_string()));
            fobj.insert("id".to_string(), Value::from(feat.id.0));

            let mut props = Map::new();
            props.insert("name".to_string(), Value::String(feat.name.clone()));
            props.insert("score".to_string(), Value::from(feat.score));
            fobj.insert("properties".to_string(), Value::Object(props));

            let mut geom = Map::new();
            geom.insert("type".to_string(), Value::String("Polygon".to_string()));
            let rings = feat
                .rings
                .iter()
                .map(|ring| Value::Array(ring.iter().map(point_coords).collect()))
                .collect();
            geom.insert("coordinates".to_string(), Value::Array(rings));
            fobj.insert("geometry".to_string(), Value::Object(geom));

            features.push(Value::Object(fobj));
        }

        root.insert("features".to_string(), Value::Array(features));
        Value::Object(root)
    }
}

fn parse_feature(index: usize, value: &Value) -> Result<Feature, OverlayError> {
    let invalid = |reason: String| OverlayError::InvalidFeature { index, reason };

    let obj = value
        .as_object()
        .ok_or_else(|| invalid("feature must be an object".to_string()))?;

    let feat_type = obj
        .get("type")
        .and_then(|v| v.as_str())
        .ok_or_else(|| invalid("feature missing type".to_string()))?;
    if feat_type != "Feature" {
        return Err(invalid(format!("unexpected feature type: {feat_type}")));
    }

    let id = obj
        .get("id")
        .and_then(|v| v.as_u64())
        .ok_or_else(|| invalid("feature missing numeric id".to_string()))?;

    let props = obj
        .get("properties")
        .and_then(|v| v.as_object())
        .ok_or_else(|| invalid("feature missing properties".to_string()))?;
    let name = props
        .get("name")
        .and_then(|v| v.as_str())
        .ok_or_else(|| invalid("properties missing name".to_string()))?;
    let score = props
        .get("score")
        .and_then(|v| v.as_f64())
        .ok_or_else(|| invalid("properties missing score".to_string()))?;

    let geom = obj
        .get("geometry")
        .and_then(|v| v.as_object())
        .ok_or_else(|| invalid("feature missing geometry".to_string()))?;
    let geom_type = geom
        .get("type")
        .and_then(|v| v.as_str())
        .ok_or_else(|| invalid("geometry missing type".to_string()))?;
    if geom_type != "Polygon" {
        return Err(invalid(format!(
            "unsupported geometry type for this overlay: {geom_type}"
        )));
    }

    let rings_val = geom
        .get("coordinates")
        .and_then(|v| v.as_array())
        .ok_or_else(|| invalid("Polygon coordinates must be an array of rings".to_string()))?;

    let mut rings = Vec::with_capacity(rings_val.len());
    for ring_val in rings_val {
        let ring_arr = ring_val
            .as_array()
            .ok_or_else(|| invalid("ring must be an array of positions".to_string()))?;
        let mut ring = Vec::with_capacity(ring_arr.len());
        for pos in ring_arr {
            ring.push(parse_position(pos).map_err(|reason| invalid(reason))?);
        }
        rings.push(ring);
    }
    if rings.first().map(|r| r.len()).unwrap_or(0) < 3 {
        return Err(invalid("outer ring needs at least 3 positions".to_string()));
    }

    Ok(Feature::new(FeatureId(id), name, score, rings))
}

fn parse_position(value: &Value) -> Result<LngLat, String> {
    let arr = value
        .as_array()
        .ok_or("position must be an array".to_string())?;
    if arr.len() < 2 {
        return Err("position must have [lng, lat]".to_string());
    }
    let lng = arr[0].as_f64().ok_or("lng must be a number".to_string())?;
    let lat = arr[1].as_f64().ok_or("lat must be a number".to_string())?;
    Ok(LngLat::new(lng, lat))
}

fn point_coords(p: &LngLat) -> Value {
    Value::Array(vec![Value::from(p.lng), Value::from(p.lat)])
}

#[cfg(test)]
mod tests {
    use super::{FeatureCollection, OverlayError};
    use foundation::ids::FeatureId;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_areas_carry_expected_attributes() {
        let areas = FeatureCollection::test_areas();
        assert_eq!(areas.source(), "test-areas");
        assert_eq!(areas.features().len(), 2);

        let a = areas.feature(FeatureId(1)).expect("area A");
        assert_eq!(a.name, "Test Area A");
        assert_eq!(a.score, 0.2);

        let b = areas.feature(FeatureId(2)).expect("area B");
        assert_eq!(b.name, "Test Area B");
        assert_eq!(b.score, 0.7);
    }

    #[test]
    fn geojson_round_trip_preserves_features() {
        let areas = FeatureCollection::test_areas();
        let value = areas.to_geojson_value();
        let parsed = FeatureCollection::from_geojson_value("test-areas", &value)
            .expect("parse exported collection");
        assert_eq!(parsed, areas);
    }

    #[test]
    fn rejects_non_collections() {
        let err = FeatureCollection::from_geojson_str("s", r#"{"type": "Feature"}"#)
            .expect_err("must reject");
        assert!(matches!(err, OverlayError::NotAFeatureCollection));
    }

    #[test]
    fn rejects_non_polygon_geometry() {
        let payload = r#"{
            "type": "FeatureCollection",
            "features": [{
                "type": "Feature",
                "id": 7,
                "properties": {"name": "pt", "score": 0.5},
                "geometry": {"type": "Point", "coordinates": [0.0, 0.0]}
            }]
        }"#;
        let err = FeatureCollection::from_geojson_str("s", payload).expect_err("must reject");
        match err {
            OverlayError::InvalidFeature { index, reason } => {
                assert_eq!(index, 0);
                assert!(reason.contains("Point"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejects_missing_score() {
        let payload = r#"{
            "type": "FeatureCollection",
            "features": [{
                "type": "Feature",
                "id": 1,
                "properties": {"name": "a"},
                "geometry": {"type": "Polygon", "coordinates": [[[0,0],[1,0],[1,1],[0,0]]]}
            }]
        }"#;
        let err = FeatureCollection::from_geojson_str("s", payload).expect_err("must reject");
        assert!(err.to_string().contains("score"));
    }
}
