pub mod catalog;
pub mod display;
pub mod trail;

pub use catalog::Catalog;
pub use display::{Theme, ViewMode};
pub use trail::{TrailRecord, TrailType, MAX_DIFFICULTY_LEVEL};
