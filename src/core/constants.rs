// Physics and interaction tuning shared by the core and the web frontend.

// Plank geometry
pub const PLANK_LENGTH_PX: f64 = 400.0; // fallback when the plank has no layout width yet
pub const PIVOT_RADIUS_PX: f64 = 12.0; // marker radius; closer than this to the pivot straddles it

// Tilt mapping
pub const MAX_ANGLE_DEG: f64 = 30.0;
pub const ANGLE_SCALE: f64 = 6.5; // lower divisor => more visible tilt
pub const MIN_VISIBLE_ANGLE_DEG: f64 = 1.4; // unbalanced planks never look level
pub const BALANCE_THRESHOLD: f64 = 10.0; // |torque diff| below this counts as balanced

// HUD torque readouts are shown in hundreds
pub const TORQUE_DISPLAY_DIVISOR: f64 = 100.0;

// Angle easing
pub const ANIMATOR_STIFFNESS: f64 = 0.08; // fraction of the remaining gap closed per frame
pub const ANIMATOR_SNAP_EPSILON_DEG: f64 = 0.01;

// Default weights are drawn uniformly from this inclusive range (kg)
pub const WEIGHT_MIN_KG: u32 = 1;
pub const WEIGHT_MAX_KG: u32 = 10;

// Touch gestures
pub const LONG_PRESS_MS: u32 = 500;
pub const TOUCH_SLOP_PX: f64 = 3.0;
