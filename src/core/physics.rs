use super::constants::{
    ANGLE_SCALE, BALANCE_THRESHOLD, MAX_ANGLE_DEG, MIN_VISIBLE_ANGLE_DEG, PIVOT_RADIUS_PX,
    TORQUE_DISPLAY_DIVISOR,
};
use super::store::PlacedObject;

/// Tuning for the torque-to-angle mapping.
///
/// - `pivot_radius`: marker radius used to split objects over the pivot
/// - `angle_scale`: divisor applied (with a factor of 100) to the torque
///   difference to get degrees
/// - `max_angle_deg`: symmetric clamp on the target angle
/// - `min_visible_angle_deg`: smallest tilt shown while unbalanced
/// - `balance_threshold`: |torque diff| below which the plank is balanced
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhysicsParams {
    pub pivot_radius: f64,
    pub angle_scale: f64,
    pub max_angle_deg: f64,
    pub min_visible_angle_deg: f64,
    pub balance_threshold: f64,
}

impl Default for PhysicsParams {
    fn default() -> Self {
        Self {
            pivot_radius: PIVOT_RADIUS_PX,
            angle_scale: ANGLE_SCALE,
            max_angle_deg: MAX_ANGLE_DEG,
            min_visible_angle_deg: MIN_VISIBLE_ANGLE_DEG,
            balance_threshold: BALANCE_THRESHOLD,
        }
    }
}

/// Weight and torque one object puts on each side of the pivot.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SideLoad {
    pub left_weight: f64,
    pub right_weight: f64,
    pub left_torque: f64,
    pub right_torque: f64,
}

/// Which way the plank leans.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tilt {
    Left,
    Level,
    Right,
}

/// Result of a physics pass over the whole plank.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Readout {
    pub left_weight: f64,
    pub right_weight: f64,
    pub left_torque: f64,
    pub right_torque: f64,
    pub target_angle: f64,
    pub balanced: bool,
}

impl Readout {
    /// Positive when the right side is heavier.
    #[inline]
    pub fn torque_diff(&self) -> f64 {
        self.right_torque - self.left_torque
    }

    pub fn left_torque_display(&self) -> i64 {
        (self.left_torque / TORQUE_DISPLAY_DIVISOR).round() as i64
    }

    pub fn right_torque_display(&self) -> i64 {
        (self.right_torque / TORQUE_DISPLAY_DIVISOR).round() as i64
    }

    pub fn tilt(&self) -> Tilt {
        let diff = self.torque_diff();
        if self.balanced {
            Tilt::Level
        } else if diff > 0.0 {
            Tilt::Right
        } else {
            Tilt::Left
        }
    }
}

/// Split one object between the two sides.
///
/// Objects whose center is at least `r` from the pivot load one side
/// fully with lever arm `|x|`. Closer objects straddle the pivot: the part
/// on each side is proportional to how much of the marker lies there,
/// `p_right = (x + r) / 2r`, and that part acts at lever arm `p * r`.
/// At `|x| = r` this is the full-side formula, so the split is continuous.
pub fn side_load(x: f64, weight: f64, r: f64) -> SideLoad {
    let abs_x = x.abs();
    if abs_x >= r {
        let torque = weight * abs_x;
        if x < 0.0 {
            SideLoad {
                left_weight: weight,
                left_torque: torque,
                ..SideLoad::default()
            }
        } else {
            SideLoad {
                right_weight: weight,
                right_torque: torque,
                ..SideLoad::default()
            }
        }
    } else {
        let p_right = (x + r) / (2.0 * r);
        let p_left = 1.0 - p_right;
        let left_weight = weight * p_left;
        let right_weight = weight * p_right;
        SideLoad {
            left_weight,
            right_weight,
            left_torque: left_weight * (p_left * r),
            right_torque: right_weight * (p_right * r),
        }
    }
}

/// Map a torque difference to a target tilt and balance flag.
///
/// Balanced planks target exactly 0. Otherwise the raw angle is clamped to
/// `±max_angle_deg` and pushed out to at least `min_visible_angle_deg`.
/// A zero difference is balanced whatever the threshold.
pub fn target_angle(torque_diff: f64, params: &PhysicsParams) -> (f64, bool) {
    if torque_diff.is_nan() {
        return (0.0, false);
    }
    if torque_diff == 0.0 || torque_diff.abs() < params.balance_threshold {
        return (0.0, true);
    }
    let raw = torque_diff / (100.0 * params.angle_scale);
    let mut angle = raw.clamp(-params.max_angle_deg, params.max_angle_deg);
    if angle.abs() < params.min_visible_angle_deg {
        angle = params.min_visible_angle_deg.copysign(torque_diff);
    }
    (angle, false)
}

/// Full physics pass. Pure and O(n) in the number of objects.
pub fn compute(objects: &[PlacedObject], params: &PhysicsParams) -> Readout {
    let mut out = Readout::default();
    for o in objects {
        let load = side_load(o.position, o.weight, params.pivot_radius);
        out.left_weight += load.left_weight;
        out.right_weight += load.right_weight;
        out.left_torque += load.left_torque;
        out.right_torque += load.right_torque;
    }
    let (angle, balanced) = target_angle(out.torque_diff(), params);
    out.target_angle = angle;
    out.balanced = balanced;
    out
}

/// Turns the level-triggered `balanced` flag into a one-shot edge.
#[derive(Clone, Copy, Debug, Default)]
pub struct BalanceLatch {
    was_balanced: bool,
}

impl BalanceLatch {
    /// Prime with the state already on screen so it does not fire on load.
    pub fn primed(balanced: bool) -> Self {
        Self {
            was_balanced: balanced,
        }
    }

    /// Returns true only on a false -> true transition.
    pub fn update(&mut self, balanced: bool) -> bool {
        let rising = balanced && !self.was_balanced;
        self.was_balanced = balanced;
        rising
    }
}
