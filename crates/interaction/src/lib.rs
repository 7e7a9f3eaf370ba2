pub mod hover;
pub mod pointer;
pub mod popup;

pub use hover::*;
pub use pointer::*;
pub use popup::*;
