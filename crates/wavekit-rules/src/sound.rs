use crate::WaveRule;
use glam::Vec2;
use wavekit_core::{palette, DisplayList, SceneContext, Variant};

/// Sound wave in air.
///
/// Faint vertical bands shade local compression, and a lattice of particles
/// is displaced horizontally along the propagation direction so compression
/// shows up as particle clustering.
#[derive(Debug, Clone)]
pub struct SoundRule;

/// Width of one compression band.
const BAND_STRIDE: f32 = 10.0;
/// Particle lattice dimensions.
pub const PARTICLE_ROWS: usize = 5;
pub const PARTICLE_COLS: usize = 55;
/// Fraction of the viewport height covered by the lattice.
const LATTICE_HEIGHT: f32 = 0.55;

impl SoundRule {
    pub fn new() -> Self {
        Self
    }

    /// Band alpha at `x`: 0.05 at full rarefaction up to 0.23 at full
    /// compression.
    pub fn band_alpha(scene: &SceneContext, x: f32) -> f32 {
        let density = (scene.phase(x).cos() + 1.0) / 2.0;
        0.05 + 0.18 * density
    }
}

impl WaveRule for SoundRule {
    fn render(&self, scene: &SceneContext, out: &mut DisplayList) {
        let mut x = 0.0;
        while x <= scene.width {
            out.rect(
                Vec2::new(x, 0.0),
                Vec2::new(BAND_STRIDE, scene.height),
                palette::SOUND_RED.with_alpha(Self::band_alpha(scene, x)),
            );
            x += BAND_STRIDE;
        }

        let a = scene.params.amplitude;
        let spacing_x = scene.width / (PARTICLE_COLS - 1) as f32;
        let spacing_y = scene.height * LATTICE_HEIGHT / (PARTICLE_ROWS - 1) as f32;
        let lattice_top = scene.height * (1.0 - LATTICE_HEIGHT) / 2.0;
        for row in 0..PARTICLE_ROWS {
            for col in 0..PARTICLE_COLS {
                let x0 = col as f32 * spacing_x;
                let y0 = lattice_top + row as f32 * spacing_y;
                let x = x0 + 0.35 * a * scene.phase(x0).cos();
                out.disc(Vec2::new(x, y0), 3.0, Variant::Sound.accent());
            }
        }
    }

    fn name(&self) -> &str {
        "Sound Wave"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wavekit_core::{Primitive, WaveParameters};

    fn scene() -> SceneContext {
        let params = WaveParameters {
            category: wavekit_core::Category::Longitudinal,
            ..WaveParameters::default()
        };
        SceneContext::new(0.0, 640.0, 360.0, params)
    }

    #[test]
    fn test_particle_count() {
        let s = scene();
        let mut out = DisplayList::new();
        SoundRule::new().render(&s, &mut out);
        let discs = out
            .iter()
            .filter(|p| matches!(p, Primitive::Disc { .. }))
            .count();
        assert_eq!(discs, PARTICLE_ROWS * PARTICLE_COLS);
    }

    #[test]
    fn test_band_alpha_range() {
        let s = scene();
        // cos(0) = 1 at x = 0, t = 0: maximum compression.
        assert!((SoundRule::band_alpha(&s, 0.0) - 0.23).abs() < 1e-4);
        // Half a wavelength later: full rarefaction.
        let half = s.params.effective_wavelength() / 2.0;
        assert!((SoundRule::band_alpha(&s, half) - 0.05).abs() < 1e-4);
    }

    #[test]
    fn test_lattice_displacement_at_t0() {
        let s = scene();
        let mut out = DisplayList::new();
        SoundRule::new().render(&s, &mut out);

        let spacing_x = s.width / (PARTICLE_COLS - 1) as f32;
        let a = s.params.amplitude;
        let discs: Vec<Vec2> = out
            .iter()
            .filter_map(|p| match p {
                Primitive::Disc { center, .. } => Some(*center),
                _ => None,
            })
            .collect();
        // First row of the lattice: each particle shifted by
        // 0.35 * A * cos(phase at its rest position).
        for (col, disc) in discs.iter().take(PARTICLE_COLS).enumerate() {
            let x0 = col as f32 * spacing_x;
            let expected = x0 + 0.35 * a * s.phase(x0).cos();
            assert!((disc.x - expected).abs() < 1e-3);
        }
    }

    #[test]
    fn test_lattice_rows_centered_vertically() {
        let s = scene();
        let mut out = DisplayList::new();
        SoundRule::new().render(&s, &mut out);
        let ys: Vec<f32> = out
            .iter()
            .filter_map(|p| match p {
                Primitive::Disc { center, .. } => Some(center.y),
                _ => None,
            })
            .collect();
        let top = ys.iter().cloned().fold(f32::MAX, f32::min);
        let bottom = ys.iter().cloned().fold(f32::MIN, f32::max);
        assert!((top - s.height * 0.225).abs() < 1e-3);
        assert!((bottom - s.height * 0.775).abs() < 1e-3);
    }
}
