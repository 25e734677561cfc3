use super::constants::{LONG_PRESS_MS, TOUCH_SLOP_PX};
use smallvec::{smallvec, SmallVec};

/// What a pointer landed on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Target {
    Plank,
    Object(u32),
}

impl Target {
    /// Resolve from a marker's `data-id` attribute; anything unparsable is
    /// treated as bare plank.
    pub fn from_data_id(data_id: Option<&str>) -> Self {
        data_id
            .and_then(|s| s.trim().parse::<u32>().ok())
            .map_or(Target::Plank, Target::Object)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerKind {
    Mouse,
    Touch,
}

/// Raw input after the Geometry Mapper; `x` is plank-local.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Input {
    Click { target: Target, x: f64 },
    PrimaryDown { target: Target },
    ContextMenu { target: Target },
    PointerMove { x: f64 },
    PointerUp,
    TouchStart { target: Target, x: f64 },
    TouchMove { x: f64 },
    TouchEnd,
    LongPressElapsed { id: u32 },
}

/// Side effects requested by the controller, applied in order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Action {
    Add { position: f64 },
    Move { id: u32, position: f64 },
    Remove { id: u32 },
    DragStarted { id: u32 },
    Dropped { id: u32 },
    StartLongPress { id: u32 },
    CancelLongPress,
    Haptic,
}

pub type Actions = SmallVec<[Action; 3]>;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Gesture {
    Idle,
    Dragging { id: u32, source: PointerKind },
    LongPressPending { id: u32, origin_x: f64 },
    /// Long-press already removed the object; the rest of this touch
    /// stream is ignored until the finger lifts.
    Consumed,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureConfig {
    pub long_press_ms: u32,
    pub touch_slop_px: f64,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            long_press_ms: LONG_PRESS_MS,
            touch_slop_px: TOUCH_SLOP_PX,
        }
    }
}

/// Turns mouse and touch input into store mutations.
///
/// Only one gesture runs at a time: while the state is not `Idle`, input
/// that would begin a new gesture is dropped.
#[derive(Clone, Debug)]
pub struct GestureController {
    state: Gesture,
    config: GestureConfig,
    // A drag that ended off the marker is followed by a browser click on
    // the plank; that click must not add an object.
    swallow_click: bool,
    drag_moved: bool,
}

impl GestureController {
    pub fn new(config: GestureConfig) -> Self {
        Self {
            state: Gesture::Idle,
            config,
            swallow_click: false,
            drag_moved: false,
        }
    }

    pub fn state(&self) -> Gesture {
        self.state
    }

    pub fn config(&self) -> GestureConfig {
        self.config
    }

    pub fn is_idle(&self) -> bool {
        self.state == Gesture::Idle
    }

    /// Id of the object the active gesture is moving, if any.
    pub fn dragging(&self) -> Option<u32> {
        match self.state {
            Gesture::Dragging { id, .. } => Some(id),
            _ => None,
        }
    }

    /// Abandon whatever gesture is in flight (e.g. the plank was reset).
    pub fn reset(&mut self) -> Actions {
        let out = match self.state {
            Gesture::LongPressPending { .. } => smallvec![Action::CancelLongPress],
            _ => Actions::new(),
        };
        self.state = Gesture::Idle;
        self.swallow_click = false;
        self.drag_moved = false;
        out
    }

    pub fn handle(&mut self, input: Input) -> Actions {
        match input {
            Input::Click { target, x } => self.on_click(target, x),
            Input::PrimaryDown { target } => self.on_primary_down(target),
            Input::ContextMenu { target } => self.on_context_menu(target),
            Input::PointerMove { x } => self.on_move(PointerKind::Mouse, x),
            Input::PointerUp => self.on_release(PointerKind::Mouse),
            Input::TouchStart { target, x } => self.on_touch_start(target, x),
            Input::TouchMove { x } => self.on_touch_move(x),
            Input::TouchEnd => self.on_touch_end(),
            Input::LongPressElapsed { id } => self.on_long_press(id),
        }
    }

    fn on_click(&mut self, target: Target, x: f64) -> Actions {
        if std::mem::take(&mut self.swallow_click) {
            return Actions::new();
        }
        match (self.state, target) {
            (Gesture::Idle, Target::Plank) => smallvec![Action::Add { position: x }],
            _ => Actions::new(),
        }
    }

    fn on_primary_down(&mut self, target: Target) -> Actions {
        self.swallow_click = false;
        match (self.state, target) {
            (Gesture::Idle, Target::Object(id)) => {
                self.begin_drag(id, PointerKind::Mouse);
                log::debug!("[mouse] begin drag on object {}", id);
                smallvec![Action::DragStarted { id }]
            }
            _ => Actions::new(),
        }
    }

    fn on_context_menu(&mut self, target: Target) -> Actions {
        match (self.state, target) {
            (Gesture::Idle, Target::Object(id)) => {
                log::debug!("[mouse] context-menu remove {}", id);
                smallvec![Action::Remove { id }]
            }
            _ => Actions::new(),
        }
    }

    fn on_move(&mut self, kind: PointerKind, x: f64) -> Actions {
        match self.state {
            Gesture::Dragging { id, source } if source == kind => {
                self.drag_moved = true;
                smallvec![Action::Move { id, position: x }]
            }
            _ => Actions::new(),
        }
    }

    fn on_release(&mut self, kind: PointerKind) -> Actions {
        match self.state {
            Gesture::Dragging { id, source } if source == kind => {
                self.state = Gesture::Idle;
                if kind == PointerKind::Mouse {
                    self.swallow_click = self.drag_moved;
                }
                self.drag_moved = false;
                log::debug!("[{:?}] drop object {}", kind, id);
                smallvec![Action::Dropped { id }]
            }
            _ => Actions::new(),
        }
    }

    fn on_touch_start(&mut self, target: Target, x: f64) -> Actions {
        if self.state != Gesture::Idle {
            return Actions::new();
        }
        match target {
            Target::Plank => smallvec![Action::Add { position: x }],
            Target::Object(id) => {
                self.state = Gesture::LongPressPending { id, origin_x: x };
                log::debug!("[touch] long-press armed on object {}", id);
                smallvec![Action::StartLongPress { id }]
            }
        }
    }

    fn on_touch_move(&mut self, x: f64) -> Actions {
        match self.state {
            Gesture::LongPressPending { id, origin_x } => {
                if (x - origin_x).abs() <= self.config.touch_slop_px {
                    return Actions::new();
                }
                self.begin_drag(id, PointerKind::Touch);
                self.drag_moved = true;
                log::debug!("[touch] long-press cancelled, dragging {}", id);
                smallvec![
                    Action::CancelLongPress,
                    Action::DragStarted { id },
                    Action::Move { id, position: x },
                ]
            }
            _ => self.on_move(PointerKind::Touch, x),
        }
    }

    fn on_touch_end(&mut self) -> Actions {
        match self.state {
            Gesture::LongPressPending { .. } => {
                self.state = Gesture::Idle;
                smallvec![Action::CancelLongPress]
            }
            Gesture::Consumed => {
                self.state = Gesture::Idle;
                Actions::new()
            }
            _ => self.on_release(PointerKind::Touch),
        }
    }

    fn on_long_press(&mut self, fired: u32) -> Actions {
        match self.state {
            Gesture::LongPressPending { id, .. } if id == fired => {
                self.state = Gesture::Consumed;
                log::info!("[touch] long-press remove {}", id);
                smallvec![Action::Remove { id }, Action::Haptic]
            }
            _ => Actions::new(),
        }
    }

    fn begin_drag(&mut self, id: u32, source: PointerKind) {
        self.state = Gesture::Dragging { id, source };
        self.drag_moved = false;
    }
}

impl Default for GestureController {
    fn default() -> Self {
        Self::new(GestureConfig::default())
    }
}
