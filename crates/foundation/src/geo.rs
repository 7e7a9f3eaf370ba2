/// Geographic position in degrees, `[lng, lat]` order like the wire format.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LngLat {
    pub lng: f64,
    pub lat: f64,
}

impl LngLat {
    pub fn new(lng: f64, lat: f64) -> Self {
        Self { lng, lat }
    }

    /// Popup-facing text form, rounded to 5 decimal places.
    pub fn display_rounded(&self) -> String {
        format!("{:.5}, {:.5}", self.lng, self.lat)
    }
}
