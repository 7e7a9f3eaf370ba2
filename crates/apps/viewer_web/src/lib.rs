use console_error_panic_hook::set_once;
use std::cell::RefCell;
use wasm_bindgen::prelude::*;

use foundation::geo::LngLat;
use map::{MapHost, MapOptions, Preset};
use overlay::FeatureCollection;

mod maplibre;
mod paint;

use maplibre::MapLibreEngine;

thread_local! {
    static STATE: RefCell<Option<MapHost<MapLibreEngine>>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    set_once();
    Ok(())
}

fn mount_with_preset(container: &str, preset: Preset) {
    STATE.with(|state| {
        let mut slot = state.borrow_mut();
        if slot.is_some() {
            web_sys::console::log_1(&JsValue::from_str("mount ignored: map already exists"));
            return;
        }

        let options = MapOptions {
            container: container.to_string(),
            ..MapOptions::default()
        };
        let mut host = MapHost::new(options, preset, FeatureCollection::test_areas());
        host.mount(MapLibreEngine::new);
        *slot = Some(host);
    });
}

/// Mounts the full demo: controls, downtown marker, and the test overlay.
#[wasm_bindgen]
pub fn mount_map(container: &str) {
    mount_with_preset(container, Preset::Full);
}

/// Mounts the bare variant: overlay only, no chrome.
#[wasm_bindgen]
pub fn mount_map_minimal(container: &str) {
    mount_with_preset(container, Preset::Minimal);
}

/// The engine's one-time load event.
#[wasm_bindgen]
pub fn overlay_ready() {
    STATE.with(|state| {
        if let Some(host) = state.borrow_mut().as_mut() {
            host.overlay_ready();
        }
    });
}

#[wasm_bindgen]
pub fn pointer_move(lng: f64, lat: f64) {
    STATE.with(|state| {
        if let Some(host) = state.borrow_mut().as_mut() {
            host.pointer_moved(LngLat::new(lng, lat));
        }
    });
}

#[wasm_bindgen]
pub fn pointer_leave() {
    STATE.with(|state| {
        if let Some(host) = state.borrow_mut().as_mut() {
            host.pointer_left();
        }
    });
}

#[wasm_bindgen]
pub fn map_click(lng: f64, lat: f64) {
    STATE.with(|state| {
        if let Some(host) = state.borrow_mut().as_mut() {
            host.clicked(LngLat::new(lng, lat));
        }
    });
}

/// Tears the component down; later events are no-ops until a new mount.
#[wasm_bindgen]
pub fn unmount_map() {
    STATE.with(|state| {
        let mut slot = state.borrow_mut();
        if let Some(host) = slot.as_mut() {
            host.unmount();
        }
        *slot = None;
    });
}
