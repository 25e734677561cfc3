pub mod animator;
pub mod constants;
pub mod geometry;
pub mod interaction;
pub mod physics;
pub mod simulation;
pub mod snapshot;
pub mod store;

pub use animator::*;
pub use constants::*;
pub use geometry::*;
pub use interaction::*;
pub use physics::*;
pub use simulation::*;
pub use snapshot::*;
pub use store::*;
