//! Static scene assets
//!
//! Geometry, materials, lights and object placement are built once at startup
//! and never change, except for the handful of transform channels the
//! animation core drives (`Binding`).

pub mod camera;
pub mod geometry;

pub use camera::Camera;

use glam::{EulerRot, Mat4, Quat, Vec3};
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::anim::TransformSet;
use crate::config::FACE_PALETTE;
use crate::consts::*;
use crate::hex_color;
use geometry::MeshData;

/// Surface shading model per node
#[derive(Debug, Clone, Copy)]
pub enum Material {
    /// Lit surface with a flat base color and rough/metal response
    Standard {
        color: [f32; 3],
        roughness: f32,
        metalness: f32,
    },
    /// Plain diffuse, no specular
    Lambert { color: [f32; 3] },
    /// Normal-sampled matcap (the gold pieces)
    Matcap,
    /// Lit surface tinted by per-vertex face colors
    VertexColors { roughness: f32, metalness: f32 },
}

/// Position/rotation/scale with Three.js-style XYZ Euler composition
#[derive(Debug, Clone, Copy)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    pub fn at(x: f32, y: f32, z: f32) -> Self {
        Self {
            position: Vec3::new(x, y, z),
            ..Default::default()
        }
    }

    pub fn matrix(&self) -> Mat4 {
        let rot = Quat::from_euler(
            EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        );
        Mat4::from_scale_rotation_translation(self.scale, rot, self.position)
    }
}

/// Which animated channel drives a node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Binding {
    Fixed,
    /// Big torus y rotation
    TorusSpin,
    /// Thin torus y/z rotation
    Torus2Spin,
    /// Small disc y/z rotation
    Disc2Spin,
    /// Black ball x position
    BallSlide,
    /// White ball x position
    Ball2Slide,
    /// Slab i x scale
    BoxStretch(usize),
}

#[derive(Debug, Clone)]
pub struct Node {
    pub name: &'static str,
    /// Index into `Scene::meshes`
    pub mesh: usize,
    pub material: Material,
    pub transform: Transform,
    pub binding: Binding,
}

#[derive(Debug, Clone, Copy)]
pub struct HemisphereLight {
    pub sky: [f32; 3],
    pub ground: [f32; 3],
    pub intensity: f32,
}

#[derive(Debug, Clone, Copy)]
pub struct DirectionalLight {
    pub color: [f32; 3],
    pub intensity: f32,
    /// Light position; shines toward the origin
    pub position: Vec3,
}

#[derive(Debug, Clone, Copy)]
pub struct Lights {
    pub hemisphere: HemisphereLight,
    pub directionals: [DirectionalLight; 2],
}

/// The full static scene
#[derive(Debug, Clone)]
pub struct Scene {
    pub meshes: Vec<MeshData>,
    pub nodes: Vec<Node>,
    pub lights: Lights,
    pub camera: Camera,
}

const WHITE: Material = Material::Standard {
    color: [1.0, 1.0, 1.0],
    roughness: 0.9,
    metalness: 0.2,
};
const BLUE_HEX: u32 = 0xa8daff;
const BLACK_HEX: u32 = 0x141414;

/// Build every mesh and node of the arrangement. `seed` fixes the torus face
/// colors; the line field is owned by the animation state, not the scene.
pub fn build_scene(aspect: f32, seed: u64) -> Scene {
    let mut rng = Pcg32::seed_from_u64(seed);

    let black = Material::Standard {
        color: hex_color(BLACK_HEX),
        roughness: 0.2,
        metalness: 0.5,
    };
    let black_basic = Material::Lambert {
        color: [0.0, 0.0, 0.0],
    };
    let blue = Material::Standard {
        color: hex_color(BLUE_HEX),
        roughness: 0.9,
        metalness: 0.1,
    };

    let torus_big = geometry::paint_faces(&geometry::torus(18.0, 6.5, 24, 80), &FACE_PALETTE, &mut rng);
    let meshes = vec![
        torus_big,                                             // 0
        geometry::torus(8.0, 1.25, 20, 90),                    // 1
        geometry::cylinder(2.0, 2.0, 25.0, 32, 1).translate_y(12.5), // 2
        geometry::cylinder(10.0, 10.0, 6.0, 40, 6).translate_y(3.0), // 3
        geometry::cylinder(10.0, 10.0, 1.5, 32, 1).translate_y(0.75), // 4
        geometry::sphere(5.5, 32, 32),                         // 5
        geometry::cone(8.0, 26.0, 32).translate_y(15.0),       // 6
        geometry::cone(8.0, 17.0, 32).translate_y(8.5),        // 7
        geometry::cuboid(17.0, 1.5, 17.0).translate_y(2.0),    // 8
    ];
    let (torus_mesh, torus_thin, cylinder, cylinder_big, disc, ball, cone_tall, cone_short, slab) =
        (0, 1, 2, 3, 4, 5, 6, 7, 8);

    let mut nodes = vec![
        Node {
            name: "cylinder",
            mesh: cylinder,
            material: black_basic,
            transform: Transform::default(),
            binding: Binding::Fixed,
        },
        Node {
            name: "cylinder_big",
            mesh: cylinder_big,
            material: black_basic,
            transform: Transform::at(0.0, -6.0, 0.0),
            binding: Binding::Fixed,
        },
        Node {
            name: "disc",
            mesh: disc,
            material: Material::Matcap,
            transform: Transform::default(),
            binding: Binding::Fixed,
        },
        Node {
            name: "ball_small",
            mesh: ball,
            material: Material::Matcap,
            transform: Transform {
                position: Vec3::new(45.0, 32.0, 0.0),
                scale: Vec3::splat(0.3),
                ..Default::default()
            },
            binding: Binding::Fixed,
        },
        Node {
            name: "disc2",
            mesh: disc,
            material: WHITE,
            transform: Transform {
                position: Vec3::new(-45.0, -1.0, 0.0),
                scale: Vec3::splat(0.675),
                ..Default::default()
            },
            binding: Binding::Disc2Spin,
        },
        Node {
            name: "ball",
            mesh: ball,
            material: black,
            transform: Transform::at(-45.0, 39.0, 0.0),
            binding: Binding::BallSlide,
        },
        Node {
            name: "ball2",
            mesh: ball,
            material: WHITE,
            transform: Transform::at(45.0, 39.0, 0.0),
            binding: Binding::Ball2Slide,
        },
        Node {
            name: "torus",
            mesh: torus_mesh,
            material: Material::VertexColors {
                roughness: 0.1,
                metalness: 0.25,
            },
            transform: Transform::at(0.0, 40.0, 0.0),
            binding: Binding::TorusSpin,
        },
        Node {
            name: "torus2",
            mesh: torus_thin,
            material: WHITE,
            transform: Transform {
                position: Vec3::new(-45.0, -1.0, 0.0),
                rotation: Vec3::new(0.0, std::f32::consts::FRAC_PI_2, 0.0),
                ..Default::default()
            },
            binding: Binding::Torus2Spin,
        },
        Node {
            name: "torus3",
            mesh: torus_thin,
            material: black,
            transform: Transform::at(45.0, 12.5, 0.0),
            binding: Binding::Fixed,
        },
        Node {
            name: "cone",
            mesh: cone_tall,
            material: black,
            transform: Transform::at(45.0, 1.0, 0.0),
            binding: Binding::Fixed,
        },
        Node {
            name: "cone2",
            mesh: cone_short,
            material: WHITE,
            transform: Transform::at(-45.0, 16.75, 0.0),
            binding: Binding::Fixed,
        },
        Node {
            name: "cone3",
            mesh: cone_short,
            material: Material::Matcap,
            transform: Transform {
                position: Vec3::new(-45.0, 16.75, 0.0),
                rotation: Vec3::new(std::f32::consts::PI, 0.0, 0.0),
                scale: Vec3::new(1.0, 0.5, 1.0),
            },
            binding: Binding::Fixed,
        },
    ];

    for i in 0..BOX_COUNT {
        nodes.push(Node {
            name: "box",
            mesh: slab,
            material: if i % 2 == 1 { black } else { blue },
            transform: Transform::at(45.0, BOX_STEP_Y * i as f32, 0.0),
            binding: Binding::BoxStretch(i),
        });
    }

    let lights = Lights {
        hemisphere: HemisphereLight {
            sky: hex_color(0xddeeff),
            ground: hex_color(0x202020),
            intensity: 3.25,
        },
        directionals: [
            DirectionalLight {
                color: [1.0, 1.0, 1.0],
                intensity: 2.0,
                position: Vec3::new(-50.0, 100.0, 10.0),
            },
            DirectionalLight {
                color: hex_color(0xff002d),
                intensity: 17.0,
                position: Vec3::new(-50.0, 10.0, -10.0),
            },
        ],
    };

    Scene {
        meshes,
        nodes,
        lights,
        camera: Camera::new(aspect),
    }
}

impl Scene {
    /// Copy the animated channels onto their bound nodes
    pub fn sync(&mut self, t: &TransformSet) {
        for node in &mut self.nodes {
            match node.binding {
                Binding::Fixed => {}
                Binding::TorusSpin => node.transform.rotation.y = t.torus_rot_y,
                Binding::Torus2Spin => {
                    node.transform.rotation.y = t.torus2_rot_y;
                    node.transform.rotation.z = t.torus2_rot_z;
                }
                Binding::Disc2Spin => {
                    node.transform.rotation.y = t.disc2_rot_y;
                    node.transform.rotation.z = t.disc2_rot_z;
                }
                Binding::BallSlide => node.transform.position.x = t.ball_x,
                Binding::Ball2Slide => node.transform.position.x = t.ball2_x,
                Binding::BoxStretch(i) => node.transform.scale.x = t.box_scale_x[i],
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scene() -> Scene {
        build_scene(16.0 / 9.0, 8)
    }

    #[test]
    fn test_node_roster() {
        let s = scene();
        assert_eq!(s.nodes.len(), 13 + BOX_COUNT);
        assert_eq!(s.meshes.len(), 9);
        assert_eq!(
            s.nodes.iter().filter(|n| n.binding != Binding::Fixed).count(),
            5 + BOX_COUNT
        );
    }

    #[test]
    fn test_torus_faces_painted() {
        let s = scene();
        let torus = &s.meshes[0];
        // Unwelded with at least two distinct palette colors
        assert_eq!(torus.vertex_count(), torus.indices.len());
        let first = torus.colors[0];
        assert!(torus.colors.iter().any(|c| *c != first));
    }

    #[test]
    fn test_sync_moves_bound_nodes() {
        let mut s = scene();
        let mut t = TransformSet::default();
        t.ball_x = 12.0;
        t.torus_rot_y = 0.5;
        t.box_scale_x[2] = 1.3;
        s.sync(&t);

        let ball = s.nodes.iter().find(|n| n.name == "ball").unwrap();
        assert_eq!(ball.transform.position.x, 12.0);
        let torus = s.nodes.iter().find(|n| n.name == "torus").unwrap();
        assert_eq!(torus.transform.rotation.y, 0.5);
        let boxes: Vec<_> = s.nodes.iter().filter(|n| n.name == "box").collect();
        assert_eq!(boxes[2].transform.scale.x, 1.3);
        assert_eq!(boxes[0].transform.scale.x, 1.0);
    }

    #[test]
    fn test_sync_leaves_fixed_nodes() {
        let mut s = scene();
        let before = s.nodes.iter().find(|n| n.name == "cone3").unwrap().transform;
        s.sync(&TransformSet::default());
        let after = s.nodes.iter().find(|n| n.name == "cone3").unwrap().transform;
        assert_eq!(before.position, after.position);
        assert_eq!(before.rotation, after.rotation);
    }

    #[test]
    fn test_ball_positions_mirror() {
        let s = scene();
        let ball = s.nodes.iter().find(|n| n.name == "ball").unwrap();
        let ball2 = s.nodes.iter().find(|n| n.name == "ball2").unwrap();
        assert_eq!(ball.transform.position.x, -ball2.transform.position.x);
        assert_eq!(ball.transform.position.y, 39.0);
    }
}
