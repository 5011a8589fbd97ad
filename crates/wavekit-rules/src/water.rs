use crate::{sweep, WaveRule, LINE_STRIDE};
use glam::Vec2;
use wavekit_core::{palette, DisplayList, SceneContext, Variant};

/// Water surface wave.
///
/// Two superposed sinusoids form the surface, a translucent gradient fills
/// the water body below it, and three rows of small particles trace circular
/// orbits with radius shrinking by depth.
#[derive(Debug, Clone)]
pub struct WaterRule;

/// Number of particle rows below the surface.
const DEPTH_ROWS: usize = 3;
/// Horizontal distance between orbiting particles.
const PARTICLE_STRIDE: f32 = 60.0;

impl WaterRule {
    pub fn new() -> Self {
        Self
    }

    /// Surface height at `x`: primary swell plus a faster secondary chop.
    pub fn surface_y(scene: &SceneContext, x: f32) -> f32 {
        let a = scene.params.amplitude;
        let phase = scene.phase(x);
        scene.mid_y()
            + 0.9 * a * phase.sin()
            + 0.3 * a * (2.0 * phase + 2.0 * scene.elapsed).sin()
    }
}

impl WaveRule for WaterRule {
    fn render(&self, scene: &SceneContext, out: &mut DisplayList) {
        let surface = sweep(scene.width, LINE_STRIDE, |x| Self::surface_y(scene, x));

        out.fill_below(
            surface.clone(),
            scene.height,
            palette::WATER_FILL_TOP,
            palette::WATER_FILL_BOTTOM,
        );
        out.polyline(surface, Variant::Water.accent(), 2.0);

        let a = scene.params.amplitude;
        let mid = scene.mid_y();
        for row in 0..DEPTH_ROWS {
            let depth_factor = (row + 1) as f32 / (DEPTH_ROWS + 1) as f32;
            let orbit_r = 0.25 * a * depth_factor;
            let mut x = 0.0;
            while x < scene.width {
                let phase = scene.phase(x);
                let center = Vec2::new(
                    x + orbit_r * phase.cos(),
                    mid + orbit_r * phase.sin() + 18.0 + 12.0 * row as f32,
                );
                out.disc(center, 3.0, palette::WATER_PARTICLE);
                x += PARTICLE_STRIDE;
            }
        }
    }

    fn name(&self) -> &str {
        "Water Surface Wave"
    }
}
