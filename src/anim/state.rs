//! Animation state
//!
//! Pointer position, the direction latch and the animated transform channels
//! are owned by one state value threaded through the frame tick. The renderer
//! reads this state, it never writes it.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::anim::lines::LineField;
use crate::anim::tween::Tweener;
use crate::config::SceneParams;
use crate::consts::*;

/// Latest normalized pointer sample, both axes in [-1, 1].
///
/// Written by the input adapter (last writer wins, no queue), read by the
/// animation tick. `y` is tracked for completeness but drives nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct PointerSignal {
    pub x: f32,
    pub y: f32,
}

/// The scene-object transform channels the animation mutates every frame
#[derive(Debug, Clone, Copy)]
pub struct TransformSet {
    /// Big palette-faced torus, y rotation
    pub torus_rot_y: f32,
    /// Thin white torus, y/z rotation
    pub torus2_rot_y: f32,
    pub torus2_rot_z: f32,
    /// Small white disc, y/z rotation
    pub disc2_rot_y: f32,
    pub disc2_rot_z: f32,
    /// Tweened x positions of the black and white balls
    pub ball_x: f32,
    pub ball2_x: f32,
    /// Per-slab x scale
    pub box_scale_x: [f32; BOX_COUNT],
}

impl Default for TransformSet {
    fn default() -> Self {
        Self {
            torus_rot_y: 0.0,
            torus2_rot_y: TORUS2_ROT_OFFSET,
            torus2_rot_z: TORUS2_ROT_OFFSET,
            disc2_rot_y: 0.0,
            disc2_rot_z: 0.0,
            ball_x: -BALL_SHIFT_X,
            ball2_x: BALL_SHIFT_X,
            box_scale_x: [1.0; BOX_COUNT],
        }
    }
}

/// Everything the per-frame animation reads and mutates
#[derive(Debug, Clone)]
pub struct AnimState {
    pub pointer: PointerSignal,
    /// Direction latch: true after the pointer last crossed into the right
    /// half, flipped only on threshold crossings
    pub entered_right: bool,
    pub transforms: TransformSet,
    pub tweener: Tweener,
    pub field: LineField,
}

impl AnimState {
    /// Build the animation state; `seed` fixes the line field layout
    pub fn new(params: &SceneParams, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        Self {
            pointer: PointerSignal::default(),
            entered_right: false,
            transforms: TransformSet::default(),
            tweener: Tweener::default(),
            field: LineField::new(params, &mut rng),
        }
    }

    /// Publish a pointer sample (called by the input adapter)
    pub fn set_pointer(&mut self, pointer: PointerSignal) {
        self.pointer = pointer;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = AnimState::new(&SceneParams::default(), 1);
        assert!(!state.entered_right);
        assert_eq!(state.transforms.ball_x, -45.0);
        assert_eq!(state.transforms.ball2_x, 45.0);
        assert_eq!(state.transforms.box_scale_x, [1.0; BOX_COUNT]);
        assert_eq!(state.field.lines.len(), 56);
    }

    #[test]
    fn test_same_seed_same_field() {
        let a = AnimState::new(&SceneParams::default(), 99);
        let b = AnimState::new(&SceneParams::default(), 99);
        for (la, lb) in a.field.lines.iter().zip(&b.field.lines) {
            assert_eq!(la.radius, lb.radius);
            assert_eq!(la.speed, lb.speed);
            assert_eq!(la.rotation, lb.rotation);
        }
    }
}
