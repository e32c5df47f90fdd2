pub mod vec2;

pub use vec2::{PVec2, Vec2};
