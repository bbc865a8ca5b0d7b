/// Tween-based animation driver
///
/// This module handles:
/// - Easing curves (`easing.rs`)
/// - Timed property tweens, staggers and animated handles (`tween.rs`)
///
/// Nothing here owns a clock. Every call takes the current `Instant`,
/// so the UI drives it from window frames and tests drive it by hand.

pub mod easing;
pub mod tween;

pub use easing::Ease;
pub use tween::{Animated, Props, TweenSpec};
