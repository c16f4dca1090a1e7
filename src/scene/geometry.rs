//! Procedural mesh generation
//!
//! Torus, cylinder/disc, sphere, cone and box builders with analytic normals.
//! All meshes are indexed except
//! after `paint_faces`, which unwelds so each face can carry a flat color.

use glam::Vec3;
use rand::Rng;
use rand_pcg::Pcg32;

use crate::hex_color;

/// CPU-side mesh: parallel vertex arrays plus triangle indices
#[derive(Debug, Clone, Default)]
pub struct MeshData {
    pub positions: Vec<Vec3>,
    pub normals: Vec<Vec3>,
    /// Per-vertex linear RGB, white unless a painter touched it
    pub colors: Vec<[f32; 3]>,
    pub indices: Vec<u32>,
}

impl MeshData {
    fn push_vertex(&mut self, position: Vec3, normal: Vec3) {
        self.positions.push(position);
        self.normals.push(normal);
        self.colors.push([1.0, 1.0, 1.0]);
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Bake a vertical offset into the vertices (pivot adjustment)
    pub fn translate_y(mut self, dy: f32) -> Self {
        for p in &mut self.positions {
            p.y += dy;
        }
        self
    }
}

/// Torus in the XY plane, matching `TorusGeometry(radius, tube, radial, tubular)`
pub fn torus(radius: f32, tube: f32, radial_segments: u32, tubular_segments: u32) -> MeshData {
    let mut mesh = MeshData::default();
    for j in 0..=radial_segments {
        let v = j as f32 / radial_segments as f32 * std::f32::consts::TAU;
        for i in 0..=tubular_segments {
            let u = i as f32 / tubular_segments as f32 * std::f32::consts::TAU;
            let center = Vec3::new(radius * u.cos(), radius * u.sin(), 0.0);
            let pos = Vec3::new(
                (radius + tube * v.cos()) * u.cos(),
                (radius + tube * v.cos()) * u.sin(),
                tube * v.sin(),
            );
            mesh.push_vertex(pos, (pos - center).normalize());
        }
    }
    let stride = tubular_segments + 1;
    for j in 1..=radial_segments {
        for i in 1..=tubular_segments {
            let a = stride * j + i - 1;
            let b = stride * (j - 1) + i - 1;
            let c = stride * (j - 1) + i;
            let d = stride * j + i;
            mesh.indices.extend_from_slice(&[a, b, d, b, c, d]);
        }
    }
    mesh
}

/// Cylinder with end caps, matching `CylinderGeometry(r_top, r_bottom, height, radial, heights)`.
/// A zero top radius gives a cone (`ConeGeometry`).
pub fn cylinder(
    radius_top: f32,
    radius_bottom: f32,
    height: f32,
    radial_segments: u32,
    height_segments: u32,
) -> MeshData {
    let mut mesh = MeshData::default();
    let half = height / 2.0;
    let slope = (radius_bottom - radius_top) / height;

    // Side wall
    for iy in 0..=height_segments {
        let v = iy as f32 / height_segments as f32;
        let r = radius_top + (radius_bottom - radius_top) * v;
        let y = half - v * height;
        for ix in 0..=radial_segments {
            let theta = ix as f32 / radial_segments as f32 * std::f32::consts::TAU;
            let (sin, cos) = theta.sin_cos();
            let pos = Vec3::new(r * sin, y, r * cos);
            let normal = Vec3::new(sin, slope, cos).normalize();
            mesh.push_vertex(pos, normal);
        }
    }
    let stride = radial_segments + 1;
    for iy in 0..height_segments {
        for ix in 0..radial_segments {
            let a = iy * stride + ix;
            let b = (iy + 1) * stride + ix;
            let c = (iy + 1) * stride + ix + 1;
            let d = iy * stride + ix + 1;
            mesh.indices.extend_from_slice(&[a, b, d, b, c, d]);
        }
    }

    // End caps
    for (radius, y, up) in [(radius_top, half, true), (radius_bottom, -half, false)] {
        if radius <= 0.0 {
            continue;
        }
        let normal = Vec3::new(0.0, if up { 1.0 } else { -1.0 }, 0.0);
        let center = mesh.vertex_count() as u32;
        mesh.push_vertex(Vec3::new(0.0, y, 0.0), normal);
        for ix in 0..=radial_segments {
            let theta = ix as f32 / radial_segments as f32 * std::f32::consts::TAU;
            let (sin, cos) = theta.sin_cos();
            mesh.push_vertex(Vec3::new(radius * sin, y, radius * cos), normal);
        }
        for ix in 0..radial_segments {
            let (a, b) = (center + 1 + ix, center + 2 + ix);
            if up {
                mesh.indices.extend_from_slice(&[center, b, a]);
            } else {
                mesh.indices.extend_from_slice(&[center, a, b]);
            }
        }
    }
    mesh
}

/// UV sphere, matching `SphereGeometry(radius, widths, heights)`
pub fn sphere(radius: f32, width_segments: u32, height_segments: u32) -> MeshData {
    let mut mesh = MeshData::default();
    for iy in 0..=height_segments {
        let phi = iy as f32 / height_segments as f32 * std::f32::consts::PI;
        for ix in 0..=width_segments {
            let theta = ix as f32 / width_segments as f32 * std::f32::consts::TAU;
            let normal = Vec3::new(
                phi.sin() * theta.cos(),
                phi.cos(),
                phi.sin() * theta.sin(),
            );
            mesh.push_vertex(normal * radius, normal.normalize_or(Vec3::Y));
        }
    }
    let stride = width_segments + 1;
    for iy in 0..height_segments {
        for ix in 0..width_segments {
            let a = iy * stride + ix;
            let b = (iy + 1) * stride + ix;
            let c = (iy + 1) * stride + ix + 1;
            let d = iy * stride + ix + 1;
            if iy != 0 {
                mesh.indices.extend_from_slice(&[a, b, d]);
            }
            if iy != height_segments - 1 {
                mesh.indices.extend_from_slice(&[b, c, d]);
            }
        }
    }
    mesh
}

/// Cone is a cylinder with a zero top radius, matching `ConeGeometry`
pub fn cone(radius: f32, height: f32, radial_segments: u32) -> MeshData {
    cylinder(0.0, radius, height, radial_segments, 1)
}

/// Axis-aligned box centered at the origin, matching `BoxGeometry(w, h, d)`
pub fn cuboid(width: f32, height: f32, depth: f32) -> MeshData {
    let mut mesh = MeshData::default();
    let (hw, hh, hd) = (width / 2.0, height / 2.0, depth / 2.0);
    // (normal, tangent u, tangent v) per face
    let faces = [
        (Vec3::X, Vec3::Z, Vec3::Y, hw, hd, hh),
        (Vec3::NEG_X, Vec3::NEG_Z, Vec3::Y, hw, hd, hh),
        (Vec3::Y, Vec3::X, Vec3::Z, hh, hw, hd),
        (Vec3::NEG_Y, Vec3::NEG_X, Vec3::Z, hh, hw, hd),
        (Vec3::Z, Vec3::NEG_X, Vec3::Y, hd, hw, hh),
        (Vec3::NEG_Z, Vec3::X, Vec3::Y, hd, hw, hh),
    ];
    for (normal, tu, tv, hn, hu, hv) in faces {
        let base = mesh.vertex_count() as u32;
        for (su, sv) in [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)] {
            let pos = normal * hn + tu * (su * hu) + tv * (sv * hv);
            mesh.push_vertex(pos, normal);
        }
        mesh.indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }
    mesh
}

/// Unweld a mesh and give each face a flat palette color. Consecutive face
/// pairs share one randomly drawn color, so each quad reads as one patch.
pub fn paint_faces(mesh: &MeshData, palette: &[u32], rng: &mut Pcg32) -> MeshData {
    let mut painted = MeshData::default();
    let mut current = [1.0, 1.0, 1.0];
    for (face, tri) in mesh.indices.chunks_exact(3).enumerate() {
        if face % 2 == 0 {
            current = hex_color(palette[rng.random_range(0..palette.len())]);
        }
        for &idx in tri {
            let i = idx as usize;
            painted.positions.push(mesh.positions[i]);
            painted.normals.push(mesh.normals[i]);
            painted.colors.push(current);
            painted.indices.push(painted.indices.len() as u32);
        }
    }
    painted
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn assert_well_formed(mesh: &MeshData) {
        assert_eq!(mesh.positions.len(), mesh.normals.len());
        assert_eq!(mesh.positions.len(), mesh.colors.len());
        assert_eq!(mesh.indices.len() % 3, 0);
        let n = mesh.vertex_count() as u32;
        assert!(mesh.indices.iter().all(|&i| i < n));
        for normal in &mesh.normals {
            assert!((normal.length() - 1.0).abs() < 1e-4);
        }
    }

    #[test]
    fn test_torus_well_formed() {
        let mesh = torus(18.0, 6.5, 24, 80);
        assert_well_formed(&mesh);
        assert_eq!(mesh.vertex_count(), 25 * 81);
        assert_eq!(mesh.triangle_count(), 24 * 80 * 2);
        // All vertices within [radius - tube, radius + tube] of the axis ring
        for p in &mesh.positions {
            let ring_dist = (p.truncate().length() - 18.0).hypot(p.z);
            assert!((ring_dist - 6.5).abs() < 1e-3);
        }
    }

    #[test]
    fn test_cylinder_well_formed() {
        let mesh = cylinder(2.0, 2.0, 25.0, 32, 1);
        assert_well_formed(&mesh);
        for p in &mesh.positions {
            assert!(p.y.abs() <= 12.5 + 1e-4);
            assert!(Vec3::new(p.x, 0.0, p.z).length() <= 2.0 + 1e-4);
        }
    }

    #[test]
    fn test_sphere_on_surface() {
        let mesh = sphere(5.5, 32, 32);
        assert_well_formed(&mesh);
        for p in &mesh.positions {
            assert!((p.length() - 5.5).abs() < 1e-3);
        }
    }

    #[test]
    fn test_cone_has_apex_and_base_cap() {
        let mesh = cone(8.0, 26.0, 32);
        assert_well_formed(&mesh);
        let top = mesh.positions.iter().map(|p| p.y).fold(f32::MIN, f32::max);
        let bottom = mesh.positions.iter().map(|p| p.y).fold(f32::MAX, f32::min);
        assert!((top - 13.0).abs() < 1e-4);
        assert!((bottom + 13.0).abs() < 1e-4);
    }

    #[test]
    fn test_cuboid_dimensions() {
        let mesh = cuboid(17.0, 1.5, 17.0);
        assert_well_formed(&mesh);
        assert_eq!(mesh.vertex_count(), 24);
        assert_eq!(mesh.triangle_count(), 12);
        for p in &mesh.positions {
            assert!(p.x.abs() <= 8.5 && p.y.abs() <= 0.75 && p.z.abs() <= 8.5);
        }
    }

    #[test]
    fn test_translate_y() {
        let mesh = cuboid(2.0, 2.0, 2.0).translate_y(2.0);
        let min_y = mesh.positions.iter().map(|p| p.y).fold(f32::MAX, f32::min);
        assert_eq!(min_y, 1.0);
    }

    #[test]
    fn test_paint_faces_pairs_share_color() {
        let mut rng = Pcg32::seed_from_u64(5);
        let palette = [0xff0000, 0x00ff00, 0x0000ff];
        let painted = paint_faces(&cuboid(1.0, 1.0, 1.0), &palette, &mut rng);
        assert_well_formed(&painted);
        // Unwelded: 3 vertices per triangle
        assert_eq!(painted.vertex_count(), 12 * 3);
        for pair in painted.colors.chunks_exact(6) {
            assert!(pair.iter().all(|c| *c == pair[0]));
        }
    }
}
