mod drifter;
mod ship;
mod shot;
mod world;

pub use drifter::Drifter;
pub use ship::Ship;
pub use shot::Shot;
pub use world::World;
