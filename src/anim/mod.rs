//! Deterministic animation core
//!
//! Everything the frame loop mutates lives here. This module must be pure and
//! deterministic:
//! - Absolute-time evaluation only (no frame-to-frame integration)
//! - Seeded RNG only (line field construction)
//! - No rendering or platform dependencies

pub mod lines;
pub mod state;
pub mod tick;
pub mod tween;

pub use lines::{Line, LineColor, LineField};
pub use state::{AnimState, PointerSignal, TransformSet};
pub use tick::tick;
pub use tween::{TweenChannel, Tweener, elastic_out};
