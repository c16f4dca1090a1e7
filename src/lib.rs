//! Memphis Beauty - a decorative WebGPU art scene
//!
//! Core modules:
//! - `anim`: Deterministic per-frame animation (line field, tweens, pointer-driven transforms)
//! - `scene`: Static scene assets (geometry, materials, lights, camera)
//! - `renderer`: WebGPU rendering pipelines
//! - `input`: Pointer/touch normalization
//! - `config`: Startup scene parameters

pub mod anim;
pub mod config;
pub mod input;
pub mod renderer;
pub mod scene;

pub use anim::{AnimState, tick};
pub use config::SceneParams;

/// Animation and scene constants
pub mod consts {
    /// Peak vertical displacement of a line dot
    pub const WAVE_AMPLITUDE: f32 = 8.0;
    /// Phase stagger between neighboring dots on a line (traveling-wave look)
    pub const DOT_PHASE_STEP: f32 = 0.15;
    /// Per-line phase speed range: [LINE_SPEED_MIN, LINE_SPEED_MIN + LINE_SPEED_SPAN)
    pub const LINE_SPEED_MIN: f32 = 520.0;
    pub const LINE_SPEED_SPAN: f32 = 200.0;
    /// Per-line radius jitter as a fraction of the base radius (±10%)
    pub const RADIUS_JITTER: f32 = 0.2;
    /// Vertical offset of the line-field group
    pub const LINE_GROUP_Y: f32 = 10.5;

    /// Pointer-to-rotation coupling (radians at full deflection)
    pub const SWAY_FACTOR: f32 = std::f32::consts::FRAC_PI_2;
    /// Fixed rotation offset of the thin torus
    pub const TORUS2_ROT_OFFSET: f32 = 1.57;
    /// Per-slab scale coupling to the pointer
    pub const BOX_SWAY_STEP: f32 = 0.06;

    /// Pointer threshold for the direction latch (dead zone is [-0.5, 0.5])
    pub const LATCH_THRESHOLD: f32 = 0.5;
    /// Target |x| the two balls swap to on a latch transition
    pub const BALL_SHIFT_X: f32 = 45.0;
    /// Ball shift tween duration
    pub const SHIFT_DURATION_MS: f64 = 1900.0;
    /// Elastic ease-out parameters (overshoot amplitude, period)
    pub const ELASTIC_AMPLITUDE: f32 = 1.0;
    pub const ELASTIC_PERIOD: f32 = 0.5;

    /// Number of stacked slabs on the right pedestal
    pub const BOX_COUNT: usize = 6;
    /// Vertical step between stacked slabs
    pub const BOX_STEP_Y: f32 = -1.5;

    /// Camera framing
    pub const CAMERA_FOV_DEG: f32 = 40.0;
    pub const CAMERA_Y: f32 = 35.0;
    pub const CAMERA_LOOK_Y: f32 = 29.0;
    pub const CAMERA_Z: f32 = 125.0;
    /// Distance multipliers for narrow viewports
    pub const CAMERA_Z_MEDIUM_SCALE: f32 = 1.5;
    pub const CAMERA_Z_FAR_SCALE: f32 = 2.5;
}

/// sRGB component to linear
#[inline]
pub fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// 0xRRGGBB hex color to linear RGB
#[inline]
pub fn hex_color(hex: u32) -> [f32; 3] {
    let r = ((hex >> 16) & 0xff) as f32 / 255.0;
    let g = ((hex >> 8) & 0xff) as f32 / 255.0;
    let b = (hex & 0xff) as f32 / 255.0;
    [srgb_to_linear(r), srgb_to_linear(g), srgb_to_linear(b)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_color_extremes() {
        assert_eq!(hex_color(0x000000), [0.0, 0.0, 0.0]);
        let white = hex_color(0xffffff);
        for c in white {
            assert!((c - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_hex_color_channels() {
        let red = hex_color(0xff0000);
        assert!((red[0] - 1.0).abs() < 1e-6);
        assert_eq!(red[1], 0.0);
        assert_eq!(red[2], 0.0);
    }

    #[test]
    fn test_srgb_to_linear_midpoint() {
        // 0.5 sRGB is darker than 0.5 linear
        let mid = srgb_to_linear(0.5);
        assert!(mid > 0.2 && mid < 0.25);
    }
}
