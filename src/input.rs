//! Pointer/touch input adapter
//!
//! Translates client coordinates into the normalized pointer signal the
//! animation core consumes. Mouse and touch share one formula; samples are
//! clamped to [-1, 1] and a zero-sized viewport yields a centered signal
//! instead of dividing by zero.

use crate::anim::PointerSignal;

/// Normalize a client-space position against the viewport.
/// x: -1 at the left edge, +1 at the right. y: +1 at the top, -1 at the bottom.
pub fn normalize_pointer(client_x: f32, client_y: f32, view_w: f32, view_h: f32) -> PointerSignal {
    let x = if view_w > 0.0 {
        ((client_x / view_w) * 2.0 - 1.0).clamp(-1.0, 1.0)
    } else {
        0.0
    };
    let y = if view_h > 0.0 {
        (-(client_y / view_h) * 2.0 + 1.0).clamp(-1.0, 1.0)
    } else {
        0.0
    };
    PointerSignal { x, y }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges_and_center() {
        let p = normalize_pointer(0.0, 0.0, 800.0, 600.0);
        assert_eq!(p.x, -1.0);
        assert_eq!(p.y, 1.0);

        let p = normalize_pointer(800.0, 600.0, 800.0, 600.0);
        assert_eq!(p.x, 1.0);
        assert_eq!(p.y, -1.0);

        let p = normalize_pointer(400.0, 300.0, 800.0, 600.0);
        assert_eq!(p.x, 0.0);
        assert_eq!(p.y, 0.0);
    }

    #[test]
    fn test_out_of_viewport_clamped() {
        let p = normalize_pointer(1600.0, -50.0, 800.0, 600.0);
        assert_eq!(p.x, 1.0);
        assert_eq!(p.y, 1.0);
    }

    #[test]
    fn test_zero_viewport_guard() {
        let p = normalize_pointer(100.0, 100.0, 0.0, 0.0);
        assert_eq!(p.x, 0.0);
        assert_eq!(p.y, 0.0);
    }
}
