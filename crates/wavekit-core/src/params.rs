use crate::palette;
use crate::Rgba;
use serde::{Deserialize, Serialize};

/// Floor applied to the wavelength before it enters any phase formula.
///
/// The phase divides by the wavelength, so values near zero would blow the
/// spatial frequency up; the control layer never sends anything below 80 but
/// the core clamps defensively regardless.
pub const MIN_WAVELENGTH: f32 = 20.0;

/// Wave category: which way the medium moves relative to propagation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Transverse,
    Longitudinal,
}

impl Category {
    pub fn name(&self) -> &'static str {
        match self {
            Category::Transverse => "Transverse Wave",
            Category::Longitudinal => "Longitudinal Wave",
        }
    }
}

/// A concrete physical example within a category, each with its own
/// rendering rule and accent color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Variant {
    Water,
    Light,
    Rope,
    Sound,
    Pwave,
    Slinky,
}

impl Variant {
    /// Stable identifier used by the selector interface.
    pub fn id(&self) -> &'static str {
        match self {
            Variant::Water => "water",
            Variant::Light => "light",
            Variant::Rope => "rope",
            Variant::Sound => "sound",
            Variant::Pwave => "pwave",
            Variant::Slinky => "slinky",
        }
    }

    /// Parse a selector id. Unknown ids mean "no variant" (category default).
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "water" => Some(Variant::Water),
            "light" => Some(Variant::Light),
            "rope" => Some(Variant::Rope),
            "sound" => Some(Variant::Sound),
            "pwave" => Some(Variant::Pwave),
            "slinky" => Some(Variant::Slinky),
            _ => None,
        }
    }

    pub fn category(&self) -> Category {
        match self {
            Variant::Water | Variant::Light | Variant::Rope => Category::Transverse,
            Variant::Sound | Variant::Pwave | Variant::Slinky => Category::Longitudinal,
        }
    }

    pub fn accent(&self) -> Rgba {
        match self {
            Variant::Water => palette::WATER_BLUE,
            Variant::Light => palette::LIGHT_AMBER,
            Variant::Rope => palette::INK,
            Variant::Sound => palette::SOUND_RED,
            Variant::Pwave => palette::PWAVE_VIOLET,
            Variant::Slinky => palette::SLINKY_GREEN,
        }
    }
}

/// The numeric wave controls, fed in read-only every frame by the panel.
///
/// Bounds are enforced by the control layer (amplitude 5..=120 px, frequency
/// 0.1..=5.0 Hz, wavelength 80..=480 px) and assumed here, except for the
/// wavelength floor which the core re-applies itself.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WaveParameters {
    /// Maximum displacement, in logical pixels.
    pub amplitude: f32,
    /// Oscillations per second.
    pub frequency: f32,
    /// Distance between consecutive crests, in logical pixels.
    pub wavelength: f32,
    pub category: Category,
}

impl Default for WaveParameters {
    fn default() -> Self {
        Self {
            amplitude: 40.0,
            frequency: 1.0,
            wavelength: 240.0,
            category: Category::Transverse,
        }
    }
}

impl WaveParameters {
    /// The wavelength actually used in phase formulas, never below
    /// [`MIN_WAVELENGTH`].
    pub fn effective_wavelength(&self) -> f32 {
        self.wavelength.max(MIN_WAVELENGTH)
    }

    /// Phase at horizontal position `x` and elapsed time `t`:
    /// `TAU * (f*t - x/lambda)`. Every rule derives its visuals from this.
    pub fn phase_at(&self, x: f32, t: f32) -> f32 {
        std::f32::consts::TAU * (self.frequency * t - x / self.effective_wavelength())
    }
}
