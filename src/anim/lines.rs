//! The hairy-sphere line field
//!
//! A group of polylines arranged radially around a sphere. Per-line radius,
//! phase speed, color and orientation are drawn once from a seeded RNG; after
//! that only the dot `y` offsets change, recomputed every frame from the
//! absolute timestamp.

use std::f32::consts::PI;

use glam::Vec3;
use rand::Rng;
use rand_pcg::Pcg32;

use crate::config::SceneParams;
use crate::consts::*;

/// Which of the two configured line colors a line uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineColor {
    Primary,
    Secondary,
}

/// A single point on a line. `x` is fixed at construction, `y` is recomputed
/// every frame.
#[derive(Debug, Clone, Copy)]
pub struct Dot {
    pub x: f32,
    pub y: f32,
}

/// One undulating polyline
#[derive(Debug, Clone)]
pub struct Line {
    /// Jittered half-extent; dots span [-radius, radius)
    pub radius: f32,
    /// Phase speed divisor (ms per radian, roughly)
    pub speed: f32,
    pub color: LineColor,
    /// Fixed orientation (Euler XYZ), drawn at construction
    pub rotation: Vec3,
    pub dots: Vec<Dot>,
}

impl Line {
    fn new(params: &SceneParams, rng: &mut Pcg32) -> Self {
        let base = params.radius;
        let color = if rng.random::<f32>() > 0.3 {
            LineColor::Primary
        } else {
            LineColor::Secondary
        };
        let speed = rng.random::<f32>() * LINE_SPEED_SPAN + LINE_SPEED_MIN;
        let radius = (base + (rng.random::<f32>() - 0.5) * (base * RADIUS_JITTER)).floor();

        let dots = (0..params.line_dots)
            .map(|j| {
                let x = (j as f32 / params.line_dots as f32) * radius * 2.0 - radius;
                Dot { x, y: 0.0 }
            })
            .collect();

        let rotation = Vec3::new(PI, rng.random::<f32>() * PI, PI);

        Self {
            radius,
            speed,
            color,
            rotation,
            dots,
        }
    }
}

/// All lines of the hairy sphere
#[derive(Debug, Clone)]
pub struct LineField {
    pub lines: Vec<Line>,
}

impl LineField {
    /// Build the field once at startup
    pub fn new(params: &SceneParams, rng: &mut Pcg32) -> Self {
        let lines = (0..params.lines).map(|_| Line::new(params, rng)).collect();
        Self { lines }
    }

    /// Recompute every dot's `y` from the absolute timestamp (ms).
    ///
    /// `ratio` is |x| / radius: the line midpoint stays pinned while the free
    /// ends swing with full amplitude. Pure in `t_ms`, so the result is
    /// frame-rate independent.
    pub fn update_dots(&mut self, t_ms: f64) {
        for line in &mut self.lines {
            let radius = line.radius;
            let speed = line.speed as f64;
            for (j, dot) in line.dots.iter_mut().enumerate() {
                let ratio = 1.0 - (radius - dot.x.abs()) / radius;
                let phase = t_ms / speed + j as f64 * DOT_PHASE_STEP as f64;
                dot.y = phase.sin() as f32 * WAVE_AMPLITUDE * ratio;
            }
        }
    }

    /// Total dot count across all lines
    pub fn dot_count(&self) -> usize {
        self.lines.iter().map(|l| l.dots.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;

    fn field(seed: u64) -> LineField {
        let params = SceneParams::default();
        let mut rng = Pcg32::seed_from_u64(seed);
        LineField::new(&params, &mut rng)
    }

    #[test]
    fn test_field_shape() {
        let f = field(7);
        assert_eq!(f.lines.len(), 56);
        for line in &f.lines {
            assert_eq!(line.dots.len(), 35);
        }
    }

    #[test]
    fn test_first_dot_at_negative_radius() {
        let f = field(7);
        for line in &f.lines {
            assert_eq!(line.dots[0].x, -line.radius);
            // Last dot stops one step short of +radius
            let last = line.dots.last().unwrap();
            assert!(last.x < line.radius);
        }
    }

    #[test]
    fn test_dot_x_monotonic() {
        let f = field(3);
        for line in &f.lines {
            for pair in line.dots.windows(2) {
                assert!(pair[0].x < pair[1].x);
            }
        }
    }

    #[test]
    fn test_radius_jitter_bounds() {
        let f = field(11);
        for line in &f.lines {
            assert_eq!(line.radius, line.radius.floor());
            assert!(line.radius >= 25.0 * 0.9 - 1.0);
            assert!(line.radius <= 25.0 * 1.1);
        }
    }

    #[test]
    fn test_speed_range() {
        let f = field(13);
        for line in &f.lines {
            assert!(line.speed >= LINE_SPEED_MIN);
            assert!(line.speed < LINE_SPEED_MIN + LINE_SPEED_SPAN);
        }
    }

    #[test]
    fn test_update_dots_deterministic() {
        let mut a = field(42);
        let mut b = field(42);
        a.update_dots(1234.5);
        a.update_dots(9876.5);
        b.update_dots(9876.5);
        for (la, lb) in a.lines.iter().zip(&b.lines) {
            for (da, db) in la.dots.iter().zip(&lb.dots) {
                assert_eq!(da.y, db.y);
            }
        }
    }

    #[test]
    fn test_midpoint_nearly_pinned() {
        let mut f = field(42);
        f.update_dots(777.0);
        for line in &f.lines {
            // Dot closest to x = 0 has ratio <= one dot step
            let mid = line
                .dots
                .iter()
                .min_by(|a, b| a.x.abs().total_cmp(&b.x.abs()))
                .unwrap();
            let step = 2.0 * line.radius / line.dots.len() as f32;
            let max_amp = WAVE_AMPLITUDE * (step / line.radius);
            assert!(mid.y.abs() <= max_amp + 1e-4);
        }
    }

    proptest! {
        #[test]
        fn prop_amplitude_bounded(t in 0.0f64..1e8, seed in 0u64..1000) {
            let mut f = field(seed);
            f.update_dots(t);
            for line in &f.lines {
                for dot in &line.dots {
                    prop_assert!(dot.y.abs() <= WAVE_AMPLITUDE + 1e-4);
                }
            }
        }
    }
}
