use crate::WaveRule;
use glam::Vec2;
use wavekit_core::{palette, DisplayList, SceneContext};

/// Seismic P-wave.
///
/// Pure density shading: dense vertical bars whose opacity follows the local
/// compression, with no particle overlay. Reads as a wavefront moving
/// through rock.
#[derive(Debug, Clone)]
pub struct PwaveRule;

/// Width of one density bar.
const BAR_STRIDE: f32 = 8.0;

impl PwaveRule {
    pub fn new() -> Self {
        Self
    }

    /// Bar alpha at `x`: 0.15 at full rarefaction up to 0.70 at full
    /// compression.
    pub fn bar_alpha(scene: &SceneContext, x: f32) -> f32 {
        let density = (scene.phase(x).cos() + 1.0) / 2.0;
        0.15 + 0.55 * density
    }
}

impl WaveRule for PwaveRule {
    fn render(&self, scene: &SceneContext, out: &mut DisplayList) {
        let mut x = 0.0;
        while x <= scene.width {
            out.rect(
                Vec2::new(x, 0.0),
                Vec2::new(BAR_STRIDE, scene.height),
                palette::PWAVE_VIOLET.with_alpha(Self::bar_alpha(scene, x)),
            );
            x += BAR_STRIDE;
        }
    }

    fn name(&self) -> &str {
        "Seismic P-Wave"
    }
}
