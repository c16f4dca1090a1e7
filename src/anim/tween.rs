//! Fire-and-forget property tweens
//!
//! Replaces a timeline library with a small per-channel animation table:
//! starting a tween on a channel that is already animating replaces the
//! in-flight tween, so the latest target always wins.

use std::f32::consts::TAU;

use crate::consts::*;
use crate::anim::state::TransformSet;

/// Penner elastic ease-out: overshoots the target, then oscillates back with
/// decaying amplitude. `t` is normalized progress in [0, 1].
pub fn elastic_out(t: f32, amplitude: f32, period: f32) -> f32 {
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }
    let a = amplitude.max(1.0);
    let s = period / TAU * (1.0 / a).asin();
    a * 2f32.powf(-10.0 * t) * ((t - s) * TAU / period).sin() + 1.0
}

/// Animatable scalar channels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TweenChannel {
    BallX,
    Ball2X,
}

/// One in-flight tween
#[derive(Debug, Clone, Copy)]
pub struct Tween {
    pub channel: TweenChannel,
    pub from: f32,
    pub to: f32,
    pub start_ms: f64,
    pub duration_ms: f64,
}

impl Tween {
    fn value_at(&self, t_ms: f64) -> f32 {
        let p = ((t_ms - self.start_ms) / self.duration_ms).clamp(0.0, 1.0) as f32;
        self.from + (self.to - self.from) * elastic_out(p, ELASTIC_AMPLITUDE, ELASTIC_PERIOD)
    }

    fn finished(&self, t_ms: f64) -> bool {
        t_ms - self.start_ms >= self.duration_ms
    }
}

/// Active tween table
#[derive(Debug, Clone, Default)]
pub struct Tweener {
    active: Vec<Tween>,
}

impl Tweener {
    /// Start a tween, replacing any in-flight tween on the same channel
    pub fn start(&mut self, channel: TweenChannel, from: f32, to: f32, now_ms: f64) {
        self.active.retain(|t| t.channel != channel);
        self.active.push(Tween {
            channel,
            from,
            to,
            start_ms: now_ms,
            duration_ms: SHIFT_DURATION_MS,
        });
    }

    /// Evaluate all tweens at `t_ms`, writing results into the transform set.
    /// Finished tweens land exactly on their target and are retired.
    pub fn step(&mut self, t_ms: f64, transforms: &mut TransformSet) {
        for tween in &self.active {
            let value = tween.value_at(t_ms);
            match tween.channel {
                TweenChannel::BallX => transforms.ball_x = value,
                TweenChannel::Ball2X => transforms.ball2_x = value,
            }
        }
        self.active.retain(|t| !t.finished(t_ms));
    }

    /// The tween currently driving a channel, if any
    pub fn active_on(&self, channel: TweenChannel) -> Option<&Tween> {
        self.active.iter().find(|t| t.channel == channel)
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elastic_out_endpoints() {
        assert_eq!(elastic_out(0.0, 1.0, 0.5), 0.0);
        assert_eq!(elastic_out(1.0, 1.0, 0.5), 1.0);
        assert_eq!(elastic_out(-0.5, 1.0, 0.5), 0.0);
        assert_eq!(elastic_out(1.5, 1.0, 0.5), 1.0);
    }

    #[test]
    fn test_elastic_out_overshoots() {
        let overshoot = (1..100)
            .map(|i| elastic_out(i as f32 / 100.0, 1.0, 0.5))
            .fold(f32::MIN, f32::max);
        assert!(overshoot > 1.0);
        // Decaying, not diverging
        assert!(overshoot < 2.0);
    }

    #[test]
    fn test_tween_reaches_target() {
        let mut tweener = Tweener::default();
        let mut set = TransformSet::default();
        tweener.start(TweenChannel::BallX, -45.0, 45.0, 0.0);

        tweener.step(950.0, &mut set);
        assert_eq!(tweener.len(), 1);

        tweener.step(1900.0, &mut set);
        assert_eq!(set.ball_x, 45.0);
        assert!(tweener.is_empty());
    }

    #[test]
    fn test_restart_overrides_in_flight() {
        let mut tweener = Tweener::default();
        let mut set = TransformSet::default();
        tweener.start(TweenChannel::BallX, -45.0, 45.0, 0.0);
        tweener.step(400.0, &mut set);
        let mid = set.ball_x;

        // Re-target mid-flight: one tween per channel, new target wins
        tweener.start(TweenChannel::BallX, mid, -45.0, 400.0);
        assert_eq!(tweener.len(), 1);
        let t = tweener.active_on(TweenChannel::BallX).unwrap();
        assert_eq!(t.to, -45.0);
        assert_eq!(t.start_ms, 400.0);

        tweener.step(400.0 + 1900.0, &mut set);
        assert_eq!(set.ball_x, -45.0);
    }

    #[test]
    fn test_channels_independent() {
        let mut tweener = Tweener::default();
        let mut set = TransformSet::default();
        tweener.start(TweenChannel::BallX, -45.0, 45.0, 0.0);
        tweener.start(TweenChannel::Ball2X, 45.0, -45.0, 0.0);
        assert_eq!(tweener.len(), 2);

        tweener.step(1900.0, &mut set);
        assert_eq!(set.ball_x, 45.0);
        assert_eq!(set.ball2_x, -45.0);
    }
}
