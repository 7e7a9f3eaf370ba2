use foundation::geo::LngLat;
use foundation::ids::FeatureId;
use interaction::hover::{HighlightSink, HoverState, HoverTracker};
use interaction::pointer::{Cursor, PointerEvent};
use interaction::popup::{Popup, popup_for_click};
use overlay::{FeatureCollection, FillStyle, LineStyle, Rgba};

use crate::engine::{
    ControlAnchor, ControlKind, MapEngine, MapOptions, Marker, MarkerId, OverlayDescriptor,
    ScaleUnit,
};
use crate::presets::Preset;

const MARKER_COLOR: Rgba = Rgba::from_hex_rgb(0xe63946);
const MARKER_POPUP_HTML: &str = "<h3>Downtown Vancouver</h3><p>Marker for testing</p>";

/// Owns one map engine instance for the component's mounted lifetime.
///
/// Lifecycle contract:
/// - `mount` constructs the engine exactly once; mounting while an engine
///   exists is a no-op and does not construct.
/// - `overlay_ready` registers the data overlay on the engine's one-time
///   ready event; pointer dispatch starts after that.
/// - `unmount` releases the marker, the engine, and the stored handle
///   unconditionally. Events after unmount are no-ops.
#[derive(Debug)]
pub struct MapHost<E: MapEngine> {
    options: MapOptions,
    preset: Preset,
    overlay: FeatureCollection,
    fill: FillStyle,
    line: LineStyle,
    tracker: HoverTracker,
    engine: Option<E>,
    marker: Option<MarkerId>,
    overlay_registered: bool,
}

/// Routes the tracker's highlight writes into the engine's feature-state
/// store for one overlay source.
struct EngineHighlight<'a, E: MapEngine> {
    engine: &'a mut E,
    source: &'a str,
}

impl<E: MapEngine> HighlightSink for EngineHighlight<'_, E> {
    fn set_hover(&mut self, id: FeatureId, hover: bool) {
        self.engine.set_feature_state(self.source, id, hover);
    }

    fn set_cursor(&mut self, cursor: Cursor) {
        self.engine.set_cursor(cursor);
    }
}

impl<E: MapEngine> MapHost<E> {
    pub fn new(options: MapOptions, preset: Preset, overlay: FeatureCollection) -> Self {
        Self {
            options,
            preset,
            overlay,
            fill: FillStyle::default(),
            line: LineStyle::default(),
            tracker: HoverTracker::new(),
            engine: None,
            marker: None,
            overlay_registered: false,
        }
    }

    /// Full-preset host over the built-in test areas.
    pub fn with_defaults() -> Self {
        Self::new(
            MapOptions::default(),
            Preset::Full,
            FeatureCollection::test_areas(),
        )
    }

    pub fn options(&self) -> &MapOptions {
        &self.options
    }

    pub fn engine(&self) -> Option<&E> {
        self.engine.as_ref()
    }

    pub fn is_mounted(&self) -> bool {
        self.engine.is_some()
    }

    pub fn hover_state(&self) -> HoverState {
        self.tracker.state()
    }

    /// Mounts the component: constructs the engine from the host's options
    /// and registers the static chrome. Construct-once: a second call while
    /// mounted does nothing, `make_engine` included.
    pub fn mount(&mut self, make_engine: impl FnOnce(&MapOptions) -> E) {
        if self.engine.is_some() {
            return;
        }

        let mut engine = make_engine(&self.options);

        if self.preset.with_controls() {
            engine.add_control(ControlKind::Navigation, ControlAnchor::TopRight);
            engine.add_control(
                ControlKind::Scale {
                    max_width: 200,
                    unit: ScaleUnit::Metric,
                },
                ControlAnchor::BottomLeft,
            );
        }

        if self.preset.with_marker() {
            let marker = Marker {
                color: MARKER_COLOR,
                position: self.options.center,
                popup: Some(Popup::new(self.options.center, MARKER_POPUP_HTML)),
            };
            self.marker = Some(engine.add_marker(&marker));
        }

        self.engine = Some(engine);
    }

    /// Engine fired its one-time ready event: register the data overlay.
    pub fn overlay_ready(&mut self) {
        let Some(engine) = self.engine.as_mut() else {
            return;
        };
        if self.overlay_registered {
            return;
        }

        engine.add_overlay(&OverlayDescriptor {
            collection: self.overlay.clone(),
            fill: self.fill,
            line: self.line,
        });
        self.overlay_registered = true;
    }

    /// Pointer moved over the overlay's hit region.
    ///
    /// A position over no feature carries an empty payload; the tracker
    /// treats that as a no-op, not a leave.
    pub fn pointer_moved(&mut self, position: LngLat) {
        let Some(engine) = self.engine.as_mut() else {
            return;
        };
        if !self.overlay_registered {
            return;
        }

        let features = self
            .overlay
            .feature_at(position)
            .map(|f| f.id)
            .into_iter()
            .collect();
        let event = PointerEvent { position, features };

        let mut sink = EngineHighlight {
            engine,
            source: self.overlay.source(),
        };
        self.tracker.pointer_move(&event, &mut sink);
    }

    /// Pointer left the overlay's hit region entirely.
    pub fn pointer_left(&mut self) {
        let Some(engine) = self.engine.as_mut() else {
            return;
        };
        if !self.overlay_registered {
            return;
        }

        let mut sink = EngineHighlight {
            engine,
            source: self.overlay.source(),
        };
        self.tracker.pointer_leave(&mut sink);
    }

    /// Click within the map view: feature popup or coordinate fallback.
    pub fn clicked(&mut self, position: LngLat) {
        let Some(engine) = self.engine.as_mut() else {
            return;
        };
        if !self.overlay_registered {
            return;
        }

        let popup = popup_for_click(position, self.overlay.feature_at(position));
        engine.open_popup(&popup);
    }

    /// Tears the component down: marker, engine instance, and stored
    /// handle are all released unconditionally. Returns the spent engine
    /// so the driver can drop it.
    pub fn unmount(&mut self) -> Option<E> {
        let mut engine = self.engine.take();

        if let Some(engine) = engine.as_mut() {
            if let Some(marker) = self.marker.take() {
                engine.remove_marker(marker);
            }
            engine.remove();
        }
        self.marker = None;
        self.overlay_registered = false;
        self.tracker = HoverTracker::new();

        engine
    }
}
