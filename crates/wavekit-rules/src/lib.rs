pub mod light;
pub mod pwave;
pub mod registry;
pub mod rope;
pub mod simple;
pub mod slinky;
pub mod sound;
pub mod water;

pub use registry::{build_registry, rule_for, RuleEntry};

use glam::Vec2;
use wavekit_core::{DisplayList, SceneContext};

/// Sampling stride for curve-based rules, in logical pixels.
pub const LINE_STRIDE: f32 = 4.0;

/// A rendering rule for one wave example.
///
/// Rules are stateless: the entire frame is a function of the scene context,
/// so repeated renders of the same context produce identical display lists.
pub trait WaveRule: Send + Sync {
    /// Append this rule's primitives for the current frame.
    fn render(&self, scene: &SceneContext, out: &mut DisplayList);

    /// Rule name for diagnostics.
    fn name(&self) -> &str;
}

/// Sample `y_at` along a left-to-right sweep of the viewport, inclusive of
/// the right edge (the final sample may overshoot by less than one stride).
pub(crate) fn sweep(width: f32, stride: f32, mut y_at: impl FnMut(f32) -> f32) -> Vec<Vec2> {
    let mut points = Vec::with_capacity((width / stride) as usize + 2);
    let mut x = 0.0;
    while x <= width {
        points.push(Vec2::new(x, y_at(x)));
        x += stride;
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sweep_includes_both_edges() {
        let points = sweep(8.0, 4.0, |x| x * 2.0);
        assert_eq!(points.len(), 3);
        assert_eq!(points[0], Vec2::new(0.0, 0.0));
        assert_eq!(points[2], Vec2::new(8.0, 16.0));
    }

    #[test]
    fn test_sweep_zero_width() {
        // A zero-width viewport still yields the single x = 0 sample; the
        // driver filters degenerate viewports out before rules run.
        let points = sweep(0.0, 4.0, |_| 1.0);
        assert_eq!(points.len(), 1);
    }
}
