// Host-side tests for the plank angle easing.
// The main crate is wasm-only, so the core modules come in via `common`.

mod common;

use common::core::animator::*;
use common::core::constants::*;

#[test]
fn converges_monotonically_without_overshoot() {
    for &(start_target, target) in &[(30.0, -30.0), (0.0, 17.5), (-12.0, 3.0), (0.0, -1.4)] {
        let mut a = Animator::default();
        // park the animator at the first target
        while !a.is_settled(start_target) {
            a.tick(start_target);
        }
        let mut gap = (target - a.current()).abs();
        let mut ticks = 0;
        while !a.is_settled(target) {
            let before = a.current();
            let now = a.tick(target);
            let new_gap = (target - now).abs();
            assert!(new_gap <= gap, "gap grew from {gap} to {new_gap}");
            // same side of the target as before, or exactly on it
            assert!((target - before) * (target - now) >= 0.0, "overshot {target}");
            gap = new_gap;
            ticks += 1;
            assert!(ticks < 1_000, "did not settle on {target}");
        }
        assert_eq!(a.current(), target);
    }
}

#[test]
fn full_swing_settles_within_bounded_ticks() {
    let mut a = Animator::default();
    let target = MAX_ANGLE_DEG;
    let mut ticks = 0;
    while a.tick(target) != target {
        ticks += 1;
    }
    // ln(30 / 0.01) / -ln(1 - 0.08) is about 96
    assert!(ticks <= 100, "took {ticks} ticks");
}

#[test]
fn first_tick_closes_stiffness_fraction_of_gap() {
    let mut a = Animator::default();
    let angle = a.tick(10.0);
    assert!((angle - 10.0 * ANIMATOR_STIFFNESS).abs() < 1e-12);
}

#[test]
fn snaps_exactly_once_within_epsilon() {
    let mut a = Animator::default();
    let angle = a.tick(ANIMATOR_SNAP_EPSILON_DEG / 2.0);
    assert_eq!(angle, ANIMATOR_SNAP_EPSILON_DEG / 2.0);
    assert!(a.is_settled(ANIMATOR_SNAP_EPSILON_DEG / 2.0));
}

#[test]
fn settled_animator_stays_put() {
    let mut a = Animator::default();
    for _ in 0..10 {
        assert_eq!(a.tick(0.0), 0.0);
    }
}

#[test]
fn zero_epsilon_is_floored_so_it_still_settles() {
    let mut a = Animator::new(AnimatorParams {
        stiffness: 0.5,
        snap_epsilon_deg: 0.0,
    });
    let mut ticks = 0;
    while a.tick(5.0) != 5.0 {
        ticks += 1;
        assert!(ticks < 200);
    }
}

#[test]
fn out_of_range_stiffness_is_clamped() {
    let mut a = Animator::new(AnimatorParams {
        stiffness: 3.0,
        snap_epsilon_deg: 0.01,
    });
    // a stiffness above 1 would overshoot; clamped to 1 it lands exactly
    assert_eq!(a.tick(20.0), 20.0);
}
