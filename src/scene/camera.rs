//! Perspective camera with aspect-tiered distance
//!
//! Narrow (portrait) viewports push the camera back so the full arrangement
//! stays in frame. The tier is picked from the aspect ratio at startup; a
//! resize only updates the aspect ratio, never the distance.

use glam::{Mat4, Vec3};

use crate::consts::*;

#[derive(Debug, Clone)]
pub struct Camera {
    pub aspect: f32,
    pub position: Vec3,
    pub target: Vec3,
    pub fov_y_deg: f32,
    pub z_near: f32,
    pub z_far: f32,
}

/// Camera distance for a viewport aspect ratio:
/// <0.75 far, [0.75, 1) medium, >=1 near
pub fn distance_for_aspect(aspect: f32) -> f32 {
    if aspect < 1.0 && aspect > 0.75 {
        CAMERA_Z * CAMERA_Z_MEDIUM_SCALE
    } else if aspect < 0.75 {
        CAMERA_Z * CAMERA_Z_FAR_SCALE
    } else {
        CAMERA_Z
    }
}

impl Camera {
    pub fn new(aspect: f32) -> Self {
        Self {
            aspect,
            position: Vec3::new(0.0, CAMERA_Y, distance_for_aspect(aspect)),
            target: Vec3::new(0.0, CAMERA_LOOK_Y, 0.0),
            fov_y_deg: CAMERA_FOV_DEG,
            z_near: 0.1,
            z_far: 1000.0,
        }
    }

    /// Track viewport changes without re-tiering the distance
    pub fn set_aspect(&mut self, aspect: f32) {
        if aspect > 0.0 {
            self.aspect = aspect;
        }
    }

    pub fn view_proj(&self) -> Mat4 {
        let proj = Mat4::perspective_rh(
            self.fov_y_deg.to_radians(),
            self.aspect,
            self.z_near,
            self.z_far,
        );
        let view = Mat4::look_at_rh(self.position, self.target, Vec3::Y);
        proj * view
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_tiers() {
        assert_eq!(distance_for_aspect(0.5), 312.5);
        assert_eq!(distance_for_aspect(0.8), 187.5);
        assert_eq!(distance_for_aspect(1.5), 125.0);
        assert_eq!(distance_for_aspect(1.0), 125.0);
    }

    #[test]
    fn test_tier_boundary() {
        // Exactly 0.75 satisfies neither narrow branch, matching the source's
        // strict comparisons
        assert_eq!(distance_for_aspect(0.75), 125.0);
    }

    #[test]
    fn test_view_proj_centers_target() {
        let cam = Camera::new(16.0 / 9.0);
        let clip = cam.view_proj() * cam.target.extend(1.0);
        let ndc = clip.truncate() / clip.w;
        assert!(ndc.x.abs() < 1e-5);
        assert!(ndc.y.abs() < 1e-5);
    }

    #[test]
    fn test_set_aspect_ignores_degenerate() {
        let mut cam = Camera::new(1.5);
        cam.set_aspect(0.0);
        assert_eq!(cam.aspect, 1.5);
    }
}
