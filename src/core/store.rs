use super::constants::{PLANK_LENGTH_PX, WEIGHT_MAX_KG, WEIGHT_MIN_KG};
use rand::prelude::*;
use serde::{Deserialize, Serialize};

/// A weight sitting on the plank.
///
/// `position` is the signed offset from the plank center in pixels
/// (negative = left). `weight` is in kilograms and always positive.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlacedObject {
    pub id: u32,
    pub position: f64,
    pub weight: f64,
}

/// Policy for weights chosen when an add does not name one: a uniform
/// integer draw from `min_kg..=max_kg`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WeightPolicy {
    pub min_kg: u32,
    pub max_kg: u32,
}

impl Default for WeightPolicy {
    fn default() -> Self {
        Self {
            min_kg: WEIGHT_MIN_KG,
            max_kg: WEIGHT_MAX_KG,
        }
    }
}

impl WeightPolicy {
    // Weights are positive, so the effective range starts at 1 kg.
    fn bounds(&self) -> (u32, u32) {
        let lo = self.min_kg.max(1);
        (lo, self.max_kg.max(lo))
    }

    pub fn draw(&self, rng: &mut impl Rng) -> f64 {
        let (lo, hi) = self.bounds();
        rng.gen_range(lo..=hi) as f64
    }

    /// True for a weight `draw` could have produced.
    pub fn contains(&self, weight: f64) -> bool {
        let (lo, hi) = self.bounds();
        weight.is_finite() && weight.fract() == 0.0 && weight >= lo as f64 && weight <= hi as f64
    }

    /// True for a weight that may be placed: positive and no heavier than
    /// the policy maximum, so torque sums stay finite.
    pub fn accepts(&self, weight: f64) -> bool {
        let (_, hi) = self.bounds();
        is_valid_weight(weight) && weight <= hi as f64
    }
}

#[inline]
pub fn is_valid_weight(weight: f64) -> bool {
    weight.is_finite() && weight > 0.0
}

/// Ordered collection of placed objects (insertion order is z-order).
///
/// Ids are handed out from a monotonic counter and never reused until
/// `clear`. Positions are kept inside `[-half_width, half_width]`.
/// Removing or moving an unknown id is a silent no-op: gestures can race
/// with removals and both sides are allowed to lose.
pub struct ObjectStore {
    objects: Vec<PlacedObject>,
    next_id: u32,
    next_weight: f64,
    half_width: f64,
    policy: WeightPolicy,
    rng: StdRng,
}

impl ObjectStore {
    pub fn new(policy: WeightPolicy, seed: u64) -> Self {
        Self::with_rng(policy, StdRng::seed_from_u64(seed))
    }

    pub fn with_rng(policy: WeightPolicy, mut rng: StdRng) -> Self {
        let next_weight = policy.draw(&mut rng);
        Self {
            objects: Vec::new(),
            next_id: 0,
            next_weight,
            half_width: PLANK_LENGTH_PX / 2.0,
            policy,
            rng,
        }
    }

    pub fn objects(&self) -> &[PlacedObject] {
        &self.objects
    }

    pub fn get(&self, id: u32) -> Option<&PlacedObject> {
        self.objects.iter().find(|o| o.id == id)
    }

    pub fn contains(&self, id: u32) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn next_id(&self) -> u32 {
        self.next_id
    }

    /// Weight the next add without an explicit weight will receive.
    pub fn next_weight(&self) -> f64 {
        self.next_weight
    }

    pub fn half_width(&self) -> f64 {
        self.half_width
    }

    pub fn policy(&self) -> WeightPolicy {
        self.policy
    }

    /// Place an object and return its id.
    ///
    /// A missing weight, or one the policy does not accept, takes the
    /// pending next weight, which is then redrawn from the policy.
    pub fn add(&mut self, position: f64, weight: Option<f64>) -> u32 {
        let weight = match weight {
            Some(w) if self.policy.accepts(w) => w,
            _ => self.take_next_weight(),
        };
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        let position = self.clamp_position(position);
        self.objects.push(PlacedObject {
            id,
            position,
            weight,
        });
        log::info!("[store] add id={} at {:.1}px ({} kg)", id, position, weight);
        id
    }

    pub fn remove(&mut self, id: u32) -> Option<PlacedObject> {
        let index = self.objects.iter().position(|o| o.id == id)?;
        let removed = self.objects.remove(index);
        log::info!("[store] remove id={}", id);
        Some(removed)
    }

    /// Move an object; returns false when the id is unknown.
    pub fn move_to(&mut self, id: u32, position: f64) -> bool {
        let position = self.clamp_position(position);
        match self.objects.iter_mut().find(|o| o.id == id) {
            Some(o) => {
                o.position = position;
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.objects.clear();
        self.next_id = 0;
        log::info!("[store] cleared");
    }

    /// Track a new plank width, pulling every object back onto the plank.
    /// Returns true if any position changed.
    pub fn set_half_width(&mut self, half_width: f64) -> bool {
        if !half_width.is_finite() || half_width <= 0.0 {
            return false;
        }
        self.half_width = half_width;
        let mut changed = false;
        for o in &mut self.objects {
            let clamped = o.position.clamp(-half_width, half_width);
            if clamped != o.position {
                o.position = clamped;
                changed = true;
            }
        }
        changed
    }

    pub(crate) fn clamp_position(&self, position: f64) -> f64 {
        if position.is_finite() {
            position.clamp(-self.half_width, self.half_width)
        } else {
            0.0
        }
    }

    fn take_next_weight(&mut self) -> f64 {
        let w = self.next_weight;
        self.next_weight = self.policy.draw(&mut self.rng);
        w
    }

    /// Replace the contents wholesale. Callers are expected to have
    /// validated `objects` already (unique ids, valid weights).
    pub(crate) fn replace(&mut self, objects: Vec<PlacedObject>, next_id: u32, next_weight: Option<f64>) {
        self.objects = objects;
        for o in &mut self.objects {
            o.position = o.position.clamp(-self.half_width, self.half_width);
        }
        self.next_id = next_id;
        self.next_weight = match next_weight {
            Some(w) if self.policy.contains(w) => w,
            _ => self.policy.draw(&mut self.rng),
        };
    }
}
