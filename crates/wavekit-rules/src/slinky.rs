use crate::WaveRule;
use glam::Vec2;
use wavekit_core::{palette, DisplayList, SceneContext, Variant};

/// Slinky compression wave.
///
/// A polyline of coil nodes is displaced horizontally by the longitudinal
/// wave; adjacent nodes pushed closer than [`COMPRESSION_RATIO`] of their
/// rest spacing are highlighted as compression zones. The small vertical
/// wobble is cosmetic and independent of the wave phase.
#[derive(Debug, Clone)]
pub struct SlinkyRule;

/// Number of coil nodes across the viewport.
pub const COILS: usize = 70;
/// A pair of adjacent coils closer than this fraction of the rest spacing
/// counts as compressed.
pub const COMPRESSION_RATIO: f32 = 0.65;
/// Amplitude of the cosmetic vertical wobble.
const WOBBLE: f32 = 4.0;
/// Half-height of a compression highlight.
const HIGHLIGHT_HALF_HEIGHT: f32 = 22.0;

impl SlinkyRule {
    pub fn new() -> Self {
        Self
    }

    /// Rest spacing between adjacent coils.
    pub fn base_spacing(width: f32) -> f32 {
        width / (COILS - 1) as f32
    }

    /// Displaced horizontal position of coil `i`.
    pub fn coil_x(scene: &SceneContext, i: usize) -> f32 {
        let x0 = i as f32 * Self::base_spacing(scene.width);
        x0 + 0.45 * scene.params.amplitude * scene.phase(x0).cos()
    }
}

impl WaveRule for SlinkyRule {
    fn render(&self, scene: &SceneContext, out: &mut DisplayList) {
        let mid = scene.mid_y();

        let coil_points: Vec<Vec2> = (0..COILS)
            .map(|i| {
                let y = mid + WOBBLE * (i as f32 / COILS as f32 * std::f32::consts::TAU).sin();
                Vec2::new(Self::coil_x(scene, i), y)
            })
            .collect();
        out.polyline(coil_points, Variant::Slinky.accent(), 2.0);

        let base_spacing = Self::base_spacing(scene.width);
        for i in 1..COILS {
            let x_prev = Self::coil_x(scene, i - 1);
            let x_curr = Self::coil_x(scene, i);
            let spacing = x_curr - x_prev;
            if spacing < COMPRESSION_RATIO * base_spacing {
                out.rect(
                    Vec2::new(x_prev.min(x_curr), mid - HIGHLIGHT_HALF_HEIGHT),
                    Vec2::new(spacing.abs(), 2.0 * HIGHLIGHT_HALF_HEIGHT),
                    palette::SLINKY_GREEN.with_alpha(0.35),
                );
            }
        }
    }

    fn name(&self) -> &str {
        "Slinky Compression"
    }
}
