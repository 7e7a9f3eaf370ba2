/// Identifier of a feature within one overlay source.
///
/// Matches the numeric `id` member of the source GeoJSON feature.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FeatureId(pub u64);

impl FeatureId {
    pub fn new(n: u64) -> Self {
        FeatureId(n)
    }
}

impl std::fmt::Display for FeatureId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
