use crate::{sweep, WaveRule, LINE_STRIDE};
use wavekit_core::{DisplayList, SceneContext, Variant};

/// Rope pulse.
///
/// A single Gaussian pulse travels rightward and wraps around past the right
/// edge, with a slow exponential damping applied over elapsed time. The
/// damping deliberately does not reset on wrap: re-selecting the example is
/// what "plucks" the rope again.
#[derive(Debug, Clone)]
pub struct RopeRule;

/// Damping rate per second of elapsed time.
const DAMPING_RATE: f32 = 0.2;

impl RopeRule {
    pub fn new() -> Self {
        Self
    }

    /// Width of the Gaussian pulse for a given effective wavelength.
    pub fn pulse_width(lambda: f32) -> f32 {
        0.6 * lambda
    }

    /// Pulse center position, wrapping over `width + pulse_width` so the
    /// pulse fully exits the right edge before re-entering from the left.
    pub fn pulse_position(scene: &SceneContext) -> f32 {
        let lambda = scene.params.effective_wavelength();
        let pulse_width = Self::pulse_width(lambda);
        let travel = scene.elapsed * scene.params.frequency * lambda * 0.8;
        travel % (scene.width + pulse_width) - pulse_width
    }

    /// Vertical displacement from the midline at `x` (negative is up).
    pub fn displacement(scene: &SceneContext, x: f32) -> f32 {
        let lambda = scene.params.effective_wavelength();
        let pulse_width = Self::pulse_width(lambda);
        let dist = x - Self::pulse_position(scene);
        let envelope = (-(dist * dist) / (0.5 * pulse_width * pulse_width)).exp();
        let damping = (-DAMPING_RATE * scene.elapsed).exp();
        -0.9 * scene.params.amplitude * envelope * damping
    }
}

impl WaveRule for RopeRule {
    fn render(&self, scene: &SceneContext, out: &mut DisplayList) {
        let mid = scene.mid_y();
        let curve = sweep(scene.width, LINE_STRIDE, |x| {
            mid + Self::displacement(scene, x)
        });
        out.polyline(curve, Variant::Rope.accent(), 3.0);
    }

    fn name(&self) -> &str {
        "Rope Wave"
    }
}
