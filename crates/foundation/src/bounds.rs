use crate::geo::LngLat;

/// Axis-aligned lng/lat bounds.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Bounds2 {
    pub min: LngLat,
    pub max: LngLat,
}

impl Bounds2 {
    pub fn new(min: LngLat, max: LngLat) -> Self {
        Bounds2 { min, max }
    }

    /// Empty bounds; extending with any point yields that point.
    pub fn empty() -> Self {
        Bounds2 {
            min: LngLat::new(f64::INFINITY, f64::INFINITY),
            max: LngLat::new(f64::NEG_INFINITY, f64::NEG_INFINITY),
        }
    }

    pub fn extend(&mut self, p: LngLat) {
        self.min.lng = self.min.lng.min(p.lng);
        self.min.lat = self.min.lat.min(p.lat);
        self.max.lng = self.max.lng.max(p.lng);
        self.max.lat = self.max.lat.max(p.lat);
    }

    pub fn contains(&self, p: LngLat) -> bool {
        p.lng >= self.min.lng
            && p.lng <= self.max.lng
            && p.lat >= self.min.lat
            && p.lat <= self.max.lat
    }

    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a LngLat>) -> Self {
        let mut b = Self::empty();
        for p in points {
            b.extend(*p);
        }
        b
    }
}
