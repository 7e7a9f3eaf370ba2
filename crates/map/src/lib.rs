pub mod engine;
pub mod host;
pub mod presets;
pub mod recording;

pub use engine::*;
pub use host::*;
pub use presets::*;
pub use recording::*;
