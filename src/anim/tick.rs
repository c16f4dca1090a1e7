//! Per-frame animation tick
//!
//! Runs synchronously and completely within a frame: pointer-driven
//! transforms, the edge-triggered direction latch, tween stepping, then dot
//! displacement. Every quantity is evaluated from the absolute timestamp, so
//! a frame is fully determined by `(pointer, t_ms)`.

use crate::anim::state::AnimState;
use crate::anim::tween::TweenChannel;
use crate::consts::*;

/// Advance the animation to time `t_ms` (ms since animation start)
pub fn tick(state: &mut AnimState, t_ms: f64) {
    sway_transforms(state);
    run_latch(state, t_ms);
    state.tweener.step(t_ms, &mut state.transforms);
    state.field.update_dots(t_ms);
}

/// Couple object rotations and slab scales to the horizontal pointer signal
fn sway_transforms(state: &mut AnimState) {
    let mx = state.pointer.x;
    let t = &mut state.transforms;

    t.torus_rot_y = SWAY_FACTOR * mx;
    t.torus2_rot_y = -SWAY_FACTOR * mx + TORUS2_ROT_OFFSET;
    t.torus2_rot_z = SWAY_FACTOR * mx + TORUS2_ROT_OFFSET;
    t.disc2_rot_y = -SWAY_FACTOR * mx;
    t.disc2_rot_z = SWAY_FACTOR * mx;

    for (i, scale) in t.box_scale_x.iter_mut().enumerate() {
        *scale = 1.0 + BOX_SWAY_STEP * i as f32 * SWAY_FACTOR * mx;
    }
}

/// Edge-triggered direction latch with a [-0.5, 0.5] dead zone.
/// Fires exactly once per crossing, launching the ball-swap tweens.
fn run_latch(state: &mut AnimState, t_ms: f64) {
    let mx = state.pointer.x;
    if mx > LATCH_THRESHOLD && !state.entered_right {
        state.entered_right = true;
        start_shift(state, t_ms, BALL_SHIFT_X);
    } else if mx < -LATCH_THRESHOLD && state.entered_right {
        state.entered_right = false;
        start_shift(state, t_ms, -BALL_SHIFT_X);
    }
}

/// Launch both ball tweens toward mirrored x targets (concurrent, same clock)
fn start_shift(state: &mut AnimState, t_ms: f64, ball_target_x: f32) {
    let t = &state.transforms;
    state
        .tweener
        .start(TweenChannel::BallX, t.ball_x, ball_target_x, t_ms);
    state
        .tweener
        .start(TweenChannel::Ball2X, t.ball2_x, -ball_target_x, t_ms);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anim::state::PointerSignal;
    use crate::config::SceneParams;
    use std::f32::consts::FRAC_PI_2;

    fn state() -> AnimState {
        AnimState::new(&SceneParams::default(), 12345)
    }

    fn point(state: &mut AnimState, x: f32) {
        state.set_pointer(PointerSignal { x, y: 0.0 });
    }

    #[test]
    fn test_torus_rotation_linear_in_pointer() {
        let mut s = state();
        for (mx, expected) in [(-1.0, -FRAC_PI_2), (0.0, 0.0), (1.0, FRAC_PI_2)] {
            point(&mut s, mx);
            tick(&mut s, 0.0);
            assert!((s.transforms.torus_rot_y - expected).abs() < 1e-6);
        }
    }

    #[test]
    fn test_companion_rotations() {
        let mut s = state();
        point(&mut s, 0.4);
        tick(&mut s, 0.0);
        let t = &s.transforms;
        assert!((t.torus2_rot_y - (-FRAC_PI_2 * 0.4 + 1.57)).abs() < 1e-6);
        assert!((t.torus2_rot_z - (FRAC_PI_2 * 0.4 + 1.57)).abs() < 1e-6);
        assert!((t.disc2_rot_y + t.disc2_rot_z).abs() < 1e-6);
    }

    #[test]
    fn test_box_scale_scenario() {
        let mut s = state();
        point(&mut s, 1.0);
        tick(&mut s, 0.0);
        // box[3] at full right deflection: 1 + 0.06 * 3 * π/2
        let expected = 1.0 + 0.06 * 3.0 * FRAC_PI_2;
        assert!((s.transforms.box_scale_x[3] - expected).abs() < 1e-5);
        assert!((expected - 1.2827).abs() < 1e-3);
        // box[0] never scales
        assert_eq!(s.transforms.box_scale_x[0], 1.0);
    }

    #[test]
    fn test_latch_fires_once_per_crossing() {
        let mut s = state();
        let mut launches = Vec::new();
        for (i, mx) in [0.0, 0.6, 0.6, 0.6, -0.6].iter().enumerate() {
            let t_ms = i as f64 * 16.0;
            point(&mut s, *mx);
            tick(&mut s, t_ms);
            if let Some(tw) = s.tweener.active_on(TweenChannel::BallX) {
                if tw.start_ms == t_ms {
                    launches.push((t_ms, tw.to));
                }
            }
        }
        // Exactly one right launch (first 0.6) and one left launch (the -0.6)
        assert_eq!(launches, vec![(16.0, 45.0), (64.0, -45.0)]);
        assert!(!s.entered_right);
    }

    #[test]
    fn test_dead_zone_never_fires() {
        let mut s = state();
        for mx in [-0.5, -0.3, 0.0, 0.3, 0.5] {
            point(&mut s, mx);
            tick(&mut s, 0.0);
            assert!(s.tweener.is_empty());
            assert!(!s.entered_right);
        }
        // Same from the Right state
        point(&mut s, 0.7);
        tick(&mut s, 0.0);
        assert!(s.entered_right);
        for mx in [-0.5, 0.0, 0.5] {
            point(&mut s, mx);
            tick(&mut s, 5000.0);
            assert!(s.entered_right);
        }
    }

    #[test]
    fn test_enter_right_tween_targets() {
        let mut s = state();
        point(&mut s, 0.7);
        tick(&mut s, 100.0);

        let ball = s.tweener.active_on(TweenChannel::BallX).unwrap();
        assert_eq!(ball.from, -45.0);
        assert_eq!(ball.to, 45.0);
        assert_eq!(ball.duration_ms, 1900.0);

        let ball2 = s.tweener.active_on(TweenChannel::Ball2X).unwrap();
        assert_eq!(ball2.to, -45.0);
        assert_eq!(ball2.start_ms, ball.start_ms);
    }

    #[test]
    fn test_balls_swap_after_tween_settles() {
        let mut s = state();
        point(&mut s, 0.7);
        tick(&mut s, 0.0);
        tick(&mut s, 2000.0);
        assert_eq!(s.transforms.ball_x, 45.0);
        assert_eq!(s.transforms.ball2_x, -45.0);

        // Cross back mid-flight of nothing: fresh swap to the left
        point(&mut s, -0.7);
        tick(&mut s, 2100.0);
        tick(&mut s, 4100.0);
        assert_eq!(s.transforms.ball_x, -45.0);
        assert_eq!(s.transforms.ball2_x, 45.0);
    }

    #[test]
    fn test_recross_mid_flight_retargets() {
        let mut s = state();
        point(&mut s, 0.7);
        tick(&mut s, 0.0);
        // Still mid-flight at 500 ms; cross back
        point(&mut s, -0.7);
        tick(&mut s, 500.0);
        let ball = s.tweener.active_on(TweenChannel::BallX).unwrap();
        assert_eq!(ball.to, -45.0);
        assert_eq!(ball.start_ms, 500.0);
        // Later assignment wins
        tick(&mut s, 500.0 + 1900.0);
        assert_eq!(s.transforms.ball_x, -45.0);
    }

    #[test]
    fn test_tick_updates_dots() {
        let mut s = state();
        tick(&mut s, 700.0);
        let moved = s
            .field
            .lines
            .iter()
            .flat_map(|l| &l.dots)
            .any(|d| d.y != 0.0);
        assert!(moved);
    }
}
