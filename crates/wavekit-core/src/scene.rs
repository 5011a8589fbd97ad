use crate::params::WaveParameters;

/// Everything a rendering rule is allowed to read for one frame: the elapsed
/// animation time, the logical viewport size, and the wave controls.
///
/// Rules are pure functions of this context, so a frame rendered twice from
/// the same context is identical primitive-for-primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneContext {
    /// Seconds since the current example started animating.
    pub elapsed: f32,
    /// Logical viewport width in pixels.
    pub width: f32,
    /// Logical viewport height in pixels.
    pub height: f32,
    pub params: WaveParameters,
}

impl SceneContext {
    pub fn new(elapsed: f32, width: f32, height: f32, params: WaveParameters) -> Self {
        Self { elapsed, width, height, params }
    }

    /// Vertical center of the viewport, the rest position of the medium.
    pub fn mid_y(&self) -> f32 {
        self.height / 2.0
    }

    /// Phase at horizontal position `x` for this frame's elapsed time.
    pub fn phase(&self, x: f32) -> f32 {
        self.params.phase_at(x, self.elapsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::Category;

    #[test]
    fn test_mid_y() {
        let scene = SceneContext::new(0.0, 640.0, 360.0, WaveParameters::default());
        assert_eq!(scene.mid_y(), 180.0);
    }

    #[test]
    fn test_phase_matches_params() {
        let params = WaveParameters {
            amplitude: 40.0,
            frequency: 2.0,
            wavelength: 120.0,
            category: Category::Longitudinal,
        };
        let scene = SceneContext::new(0.75, 640.0, 360.0, params);
        assert_eq!(scene.phase(33.0), params.phase_at(33.0, 0.75));
    }
}
