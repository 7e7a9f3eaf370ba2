/// Host configuration presets.
///
/// The component historically shipped in two flavors: the full demo with
/// navigation/scale controls and a downtown marker, and a bare variant
/// carrying only the overlay. Unified here as presets of one host.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum Preset {
    #[default]
    Full,
    Minimal,
}

impl Preset {
    pub fn with_controls(&self) -> bool {
        matches!(self, Preset::Full)
    }

    pub fn with_marker(&self) -> bool {
        matches!(self, Preset::Full)
    }
}
