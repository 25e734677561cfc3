// DOM contract, timings and cue tuning for the web frontend. Physics
// tuning lives in `core::constants`.

// Element ids the page must provide
pub const SEESAW_ID: &str = "seesaw";
pub const PLANK_ID: &str = "plank";
pub const OBJECTS_LAYER_ID: &str = "objectsLayer";
pub const RESET_BUTTON_ID: &str = "resetBtn";

// HUD element ids (each optional)
pub const LEFT_WEIGHT_ID: &str = "leftWeight";
pub const RIGHT_WEIGHT_ID: &str = "rightWeight";
pub const LEFT_TORQUE_ID: &str = "leftTorque";
pub const RIGHT_TORQUE_ID: &str = "rightTorque";
pub const DIRECTION_INDICATOR_ID: &str = "directionIndicator";
pub const NEXT_WEIGHT_ID: &str = "nextWeight";

// CSS classes
pub const OBJECT_CLASS: &str = "object";
pub const DRAGGING_CLASS: &str = "dragging";
pub const BALANCED_CLASS: &str = "balanced";
pub const SHAKE_CLASS: &str = "shake";
pub const TILT_CLASSES: [&str; 3] = ["to-left", "neutral", "to-right"];

// Feedback timings
pub const SHAKE_MS: i32 = 500;
pub const HAPTIC_PULSE_MS: u32 = 40;

// localStorage key for the session snapshot
pub const STORAGE_KEY: &str = "seesaw-state-v1";

// Cue synthesis
pub const CUE_MASTER_GAIN: f32 = 0.18;
pub const CUE_ATTACK_SEC: f64 = 0.01;
