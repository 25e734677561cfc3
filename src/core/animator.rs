use super::constants::{ANIMATOR_SNAP_EPSILON_DEG, ANIMATOR_STIFFNESS};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimatorParams {
    pub stiffness: f64,
    pub snap_epsilon_deg: f64,
}

impl Default for AnimatorParams {
    fn default() -> Self {
        Self {
            stiffness: ANIMATOR_STIFFNESS,
            snap_epsilon_deg: ANIMATOR_SNAP_EPSILON_DEG,
        }
    }
}

/// Eases the displayed plank angle toward the physics target, one step per
/// display frame.
///
/// Each tick closes a fixed fraction of the remaining gap, so the angle
/// approaches the target from one side and never overshoots. Once the gap
/// is within `snap_epsilon_deg` it snaps to the target exactly.
#[derive(Clone, Debug)]
pub struct Animator {
    current: f64,
    params: AnimatorParams,
}

impl Animator {
    pub fn new(params: AnimatorParams) -> Self {
        let stiffness = if params.stiffness.is_finite() {
            params.stiffness.clamp(f64::EPSILON, 1.0)
        } else {
            ANIMATOR_STIFFNESS
        };
        Self {
            current: 0.0,
            params: AnimatorParams {
                stiffness,
                snap_epsilon_deg: params.snap_epsilon_deg.abs().max(1e-9),
            },
        }
    }

    #[inline]
    pub fn current(&self) -> f64 {
        self.current
    }

    pub fn is_settled(&self, target: f64) -> bool {
        self.current == target
    }

    /// Advance one frame toward `target` and return the new angle.
    pub fn tick(&mut self, target: f64) -> f64 {
        let delta = target - self.current;
        if delta.abs() > self.params.snap_epsilon_deg {
            self.current += delta * self.params.stiffness;
        } else {
            self.current = target;
        }
        self.current
    }
}

impl Default for Animator {
    fn default() -> Self {
        Self::new(AnimatorParams::default())
    }
}
