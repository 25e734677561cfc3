use glam::DVec2;

/// Screen-space placement of the plank, read from layout each time a
/// pointer event is mapped.
///
/// - `center`: client coordinates of the plank's rotation center
/// - `width`: untransformed plank length in CSS pixels
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlankFrame {
    pub center: DVec2,
    pub width: f64,
}

impl PlankFrame {
    pub fn new(center: DVec2, width: f64) -> Self {
        Self { center, width }
    }

    #[inline]
    pub fn half_width(&self) -> f64 {
        (self.width / 2.0).max(0.0)
    }
}

/// Map a client-space pointer position to a signed offset along the plank.
///
/// The offset from the plank center is rotated by `-angle_deg` to undo the
/// visual tilt, so the result is measured in the plank's own frame. The
/// result is always finite and lies in `[-width/2, width/2]`.
pub fn plank_local_x(frame: &PlankFrame, client: DVec2, angle_deg: f64) -> f64 {
    let offset = client - frame.center;
    let unrotated = DVec2::from_angle(-angle_deg.to_radians()).rotate(offset);
    let half = frame.half_width();
    if unrotated.x.is_finite() {
        unrotated.x.clamp(-half, half)
    } else {
        0.0
    }
}
