// Host-side tests for mapping pointer positions onto the plank.
// The main crate is wasm-only, so the core modules come in via `common`.

mod common;

use common::core::geometry::*;
use glam::DVec2;

fn frame() -> PlankFrame {
    PlankFrame::new(DVec2::new(500.0, 300.0), 400.0)
}

#[test]
fn level_plank_maps_horizontal_offset() {
    let f = frame();
    assert!((plank_local_x(&f, DVec2::new(560.0, 300.0), 0.0) - 60.0).abs() < 1e-9);
    assert!((plank_local_x(&f, DVec2::new(420.0, 250.0), 0.0) + 80.0).abs() < 1e-9);
}

#[test]
fn vertical_offset_is_ignored_on_a_level_plank() {
    let f = frame();
    let a = plank_local_x(&f, DVec2::new(530.0, 100.0), 0.0);
    let b = plank_local_x(&f, DVec2::new(530.0, 500.0), 0.0);
    assert!((a - b).abs() < 1e-9);
}

#[test]
fn tilt_is_undone_before_measuring() {
    let f = frame();
    for &angle in &[-30.0_f64, -7.5, 12.0, 30.0] {
        let theta = angle.to_radians();
        let along = 150.0;
        // a point lying on the visibly rotated plank axis
        let client = f.center + DVec2::new(theta.cos(), theta.sin()) * along;
        let x = plank_local_x(&f, client, angle);
        assert!((x - along).abs() < 1e-9, "angle {angle}: got {x}");
    }
}

#[test]
fn output_is_clamped_to_half_width() {
    let f = frame();
    assert_eq!(plank_local_x(&f, DVec2::new(5_000.0, 300.0), 0.0), 200.0);
    assert_eq!(plank_local_x(&f, DVec2::new(-5_000.0, 300.0), 0.0), -200.0);
    assert_eq!(plank_local_x(&f, DVec2::new(5_000.0, 300.0), 25.0), 200.0);
}

#[test]
fn degenerate_input_still_yields_a_finite_value() {
    let f = frame();
    assert_eq!(plank_local_x(&f, DVec2::new(f64::NAN, 0.0), 0.0), 0.0);

    let zero = PlankFrame::new(DVec2::ZERO, 0.0);
    assert_eq!(plank_local_x(&zero, DVec2::new(40.0, 0.0), 0.0), 0.0);

    let broken = PlankFrame::new(DVec2::ZERO, f64::NAN);
    assert_eq!(broken.half_width(), 0.0);
    assert_eq!(plank_local_x(&broken, DVec2::new(40.0, 0.0), 0.0), 0.0);
}
