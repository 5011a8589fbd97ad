use crate::{sweep, WaveRule, LINE_STRIDE};
use glam::Vec2;
use wavekit_core::{palette, DisplayList, SceneContext};

/// Light (electromagnetic) wave.
///
/// Two in-phase sinusoids stand in for the electric and magnetic fields: the
/// E trace on the midline, the B trace smaller and 40 px below it. A static
/// arrow along the bottom marks the propagation direction.
#[derive(Debug, Clone)]
pub struct LightRule;

/// Vertical offset of the B-field trace below the midline.
const FIELD_OFFSET: f32 = 40.0;

impl LightRule {
    pub fn new() -> Self {
        Self
    }

    /// Shared phase base for both field traces. Light runs at 1.8x the
    /// control frequency with a 0.7x wavelength so it reads as "faster"
    /// than the mechanical examples.
    pub fn field_phase(scene: &SceneContext, x: f32) -> f32 {
        let lambda_e = 0.7 * scene.params.effective_wavelength();
        std::f32::consts::TAU * (1.8 * scene.params.frequency * scene.elapsed - x / lambda_e)
    }
}

impl WaveRule for LightRule {
    fn render(&self, scene: &SceneContext, out: &mut DisplayList) {
        let a = scene.params.amplitude;
        let mid = scene.mid_y();

        let e_field = sweep(scene.width, LINE_STRIDE, |x| {
            mid + 0.45 * a * Self::field_phase(scene, x).sin()
        });
        out.polyline(e_field, palette::LIGHT_AMBER, 2.0);

        let b_field = sweep(scene.width, LINE_STRIDE, |x| {
            mid + FIELD_OFFSET + 0.25 * a * Self::field_phase(scene, x).sin()
        });
        out.polyline(b_field, palette::LIGHT_INDIGO, 2.0);

        // Propagation arrow along the bottom edge.
        let y = scene.height - 24.0;
        let tip = Vec2::new(scene.width - 16.0, y);
        out.polyline(vec![Vec2::new(16.0, y), tip], palette::ARROW_GRAY, 1.0);
        out.triangle(
            tip,
            Vec2::new(scene.width - 26.0, y - 6.0),
            Vec2::new(scene.width - 26.0, y + 6.0),
            palette::ARROW_GRAY,
        );
    }

    fn name(&self) -> &str {
        "Light Wave"
    }
}
