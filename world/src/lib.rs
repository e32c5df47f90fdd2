pub mod creature;
pub mod error;
pub mod rules;
pub mod world;

pub use creature::{Creature, Kind, Neighbour, Status};
pub use error::{WorldError, WorldResult};
pub use rules::AttractionRules;
pub use world::World;
