// Shared host-side access to the pure core.
// The main crate is wasm-only, so the core modules are included directly.

#![allow(dead_code)]
pub mod core {
    pub mod constants {
        include!("../../src/core/constants.rs");
    }
    pub mod geometry {
        include!("../../src/core/geometry.rs");
    }
    pub mod store {
        include!("../../src/core/store.rs");
    }
    pub mod snapshot {
        include!("../../src/core/snapshot.rs");
    }
    pub mod physics {
        include!("../../src/core/physics.rs");
    }
    pub mod animator {
        include!("../../src/core/animator.rs");
    }
    pub mod interaction {
        include!("../../src/core/interaction.rs");
    }
    pub mod simulation {
        include!("../../src/core/simulation.rs");
    }
}

pub fn obj(id: u32, position: f64, weight: f64) -> core::store::PlacedObject {
    core::store::PlacedObject {
        id,
        position,
        weight,
    }
}

pub fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
