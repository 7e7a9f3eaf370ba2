pub mod feature;
pub mod feature_state;
pub mod symbology;

pub use feature::*;
pub use feature_state::*;
pub use symbology::*;
