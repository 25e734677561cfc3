use super::animator::{Animator, AnimatorParams};
use super::interaction::GestureConfig;
use super::physics::{self, PhysicsParams, Readout};
use super::snapshot::Snapshot;
use super::store::{ObjectStore, PlacedObject, WeightPolicy};
use rand::prelude::*;

/// All tuning for one seesaw, with defaults from `constants`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SeesawConfig {
    pub physics: PhysicsParams,
    pub animator: AnimatorParams,
    pub weights: WeightPolicy,
    pub gestures: GestureConfig,
}

/// The single simulation state of a page session.
///
/// Owns the object store and keeps the physics readout in step with it:
/// every mutation recomputes before returning, so readers never see stale
/// torques. The displayed angle is advanced separately by `tick`, once per
/// frame.
pub struct Seesaw {
    store: ObjectStore,
    params: PhysicsParams,
    readout: Readout,
    animator: Animator,
}

impl Seesaw {
    pub fn new(config: SeesawConfig, seed: u64) -> Self {
        Self::from_store(config, ObjectStore::new(config.weights, seed))
    }

    /// Seed default weights from OS / browser entropy.
    pub fn from_entropy(config: SeesawConfig) -> Self {
        Self::from_store(
            config,
            ObjectStore::with_rng(config.weights, StdRng::from_entropy()),
        )
    }

    fn from_store(config: SeesawConfig, store: ObjectStore) -> Self {
        let mut s = Self {
            store,
            params: config.physics,
            readout: Readout::default(),
            animator: Animator::new(config.animator),
        };
        s.recompute();
        s
    }

    pub fn objects(&self) -> &[PlacedObject] {
        self.store.objects()
    }

    pub fn store(&self) -> &ObjectStore {
        &self.store
    }

    pub fn readout(&self) -> &Readout {
        &self.readout
    }

    pub fn target_angle(&self) -> f64 {
        self.readout.target_angle
    }

    pub fn current_angle(&self) -> f64 {
        self.animator.current()
    }

    pub fn is_balanced(&self) -> bool {
        self.readout.balanced
    }

    pub fn add(&mut self, position: f64, weight: Option<f64>) -> u32 {
        let id = self.store.add(position, weight);
        self.recompute();
        id
    }

    pub fn remove(&mut self, id: u32) -> Option<PlacedObject> {
        let removed = self.store.remove(id);
        if removed.is_some() {
            self.recompute();
        }
        removed
    }

    pub fn move_object(&mut self, id: u32, position: f64) -> bool {
        let moved = self.store.move_to(id, position);
        if moved {
            self.recompute();
        }
        moved
    }

    pub fn clear(&mut self) {
        self.store.clear();
        self.recompute();
    }

    /// Returns true if any object had to be pulled back onto the plank.
    pub fn set_half_width(&mut self, half_width: f64) -> bool {
        let changed = self.store.set_half_width(half_width);
        if changed {
            self.recompute();
        }
        changed
    }

    pub fn snapshot(&self) -> Snapshot {
        self.store.snapshot()
    }

    pub fn restore(&mut self, snapshot: Snapshot) {
        self.store.restore(snapshot);
        self.recompute();
    }

    /// Advance the displayed angle by one frame.
    pub fn tick(&mut self) -> f64 {
        self.animator.tick(self.readout.target_angle)
    }

    fn recompute(&mut self) {
        self.readout = physics::compute(self.store.objects(), &self.params);
    }
}
