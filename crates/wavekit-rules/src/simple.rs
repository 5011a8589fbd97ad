use crate::{sweep, WaveRule, LINE_STRIDE};
use wavekit_core::{palette, DisplayList, SceneContext};

/// Category fallback when no example is selected: a plain sine trace.
#[derive(Debug, Clone)]
pub struct SimpleTransverse;

impl SimpleTransverse {
    pub fn new() -> Self {
        Self
    }

    /// Vertical displacement from the midline at `x`.
    pub fn displacement(scene: &SceneContext, x: f32) -> f32 {
        scene.params.amplitude * scene.phase(x).sin()
    }
}

impl WaveRule for SimpleTransverse {
    fn render(&self, scene: &SceneContext, out: &mut DisplayList) {
        let mid = scene.mid_y();
        let curve = sweep(scene.width, LINE_STRIDE, |x| {
            mid + Self::displacement(scene, x)
        });
        out.polyline(curve, palette::INK, 2.2);
    }

    fn name(&self) -> &str {
        "Transverse Wave"
    }
}

/// Category fallback for longitudinal mode: a reduced-amplitude cosine trace
/// standing in for the compression profile.
#[derive(Debug, Clone)]
pub struct SimpleLongitudinal;

impl SimpleLongitudinal {
    pub fn new() -> Self {
        Self
    }

    pub fn displacement(scene: &SceneContext, x: f32) -> f32 {
        0.6 * scene.params.amplitude * scene.phase(x).cos()
    }
}

impl WaveRule for SimpleLongitudinal {
    fn render(&self, scene: &SceneContext, out: &mut DisplayList) {
        let mid = scene.mid_y();
        let curve = sweep(scene.width, LINE_STRIDE, |x| {
            mid + Self::displacement(scene, x)
        });
        out.polyline(curve, palette::INK, 2.0);
    }

    fn name(&self) -> &str {
        "Longitudinal Wave"
    }
}
