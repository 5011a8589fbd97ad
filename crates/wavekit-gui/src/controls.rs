use crate::catalog;
use std::ops::RangeInclusive;
use wavekit_core::{Category, Variant, WaveParameters};
use wavekit_render::SceneInput;

/// Slider bounds enforced by the panel; the core assumes them.
pub const AMPLITUDE_RANGE: RangeInclusive<f32> = 5.0..=120.0;
pub const FREQUENCY_RANGE: RangeInclusive<f32> = 0.1..=5.0;
pub const WAVELENGTH_RANGE: RangeInclusive<f32> = 80.0..=480.0;

/// All user-adjustable state, owned by the panel and read by the driver
/// every frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Controls {
    pub amplitude: f32,
    pub frequency: f32,
    pub wavelength: f32,
    pub show_grid: bool,
    pub paused: bool,
    pub category: Category,
    pub selected: Option<Variant>,
}

impl Default for Controls {
    fn default() -> Self {
        Self {
            amplitude: 40.0,
            frequency: 1.0,
            wavelength: 240.0,
            show_grid: true,
            paused: false,
            category: Category::Transverse,
            selected: Some(catalog::first_example(Category::Transverse)),
        }
    }
}

impl Controls {
    /// Switch category, auto-selecting that category's first example the
    /// way the selector always shows something animating.
    pub fn set_category(&mut self, category: Category) {
        if self.category != category {
            self.category = category;
            self.selected = Some(catalog::first_example(category));
        }
    }

    pub fn params(&self) -> WaveParameters {
        WaveParameters {
            amplitude: self.amplitude,
            frequency: self.frequency,
            wavelength: self.wavelength,
            category: self.category,
        }
    }

    /// The read-only per-frame view the driver consumes.
    pub fn scene_input(&self) -> SceneInput {
        SceneInput {
            params: self.params(),
            variant: self.selected,
            grid_visible: self.show_grid,
            paused: self.paused,
        }
    }
}
