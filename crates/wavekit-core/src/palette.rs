//! Fixed colors used across the rules and chrome. Values mirror the
//! classroom UI theme; rules never expose color configurability.

use crate::Rgba;

/// Accent for the water example and its wave crest stroke.
pub const WATER_BLUE: Rgba = Rgba::from_rgb8(37, 99, 235);
/// Accent for the light example (electric field trace).
pub const LIGHT_AMBER: Rgba = Rgba::from_rgb8(245, 158, 11);
/// Magnetic field trace in the light example.
pub const LIGHT_INDIGO: Rgba = Rgba::from_rgb8(99, 102, 241);
/// Accent for the sound example.
pub const SOUND_RED: Rgba = Rgba::from_rgb8(220, 38, 38);
/// Accent for the seismic P-wave example.
pub const PWAVE_VIOLET: Rgba = Rgba::from_rgb8(124, 58, 237);
/// Accent for the slinky example.
pub const SLINKY_GREEN: Rgba = Rgba::from_rgb8(5, 150, 105);
/// Near-black fallback accent, also the rope color.
pub const INK: Rgba = Rgba::from_rgb8(17, 24, 39);

/// Water surface fill, top of the gradient.
pub const WATER_FILL_TOP: Rgba = Rgba::new(59.0 / 255.0, 130.0 / 255.0, 246.0 / 255.0, 0.40);
/// Water surface fill, bottom of the gradient.
pub const WATER_FILL_BOTTOM: Rgba = Rgba::new(59.0 / 255.0, 130.0 / 255.0, 246.0 / 255.0, 0.05);
/// Orbiting water particles.
pub const WATER_PARTICLE: Rgba = Rgba::new(59.0 / 255.0, 130.0 / 255.0, 246.0 / 255.0, 0.55);

/// Direction arrow in the light example.
pub const ARROW_GRAY: Rgba = Rgba::from_rgb8(55, 65, 81);

/// Background grid lines.
pub const GRID_GRAY: Rgba = Rgba::from_rgb8(240, 240, 240);
/// Horizontal midline axis.
pub const AXIS_GRAY: Rgba = Rgba::from_rgb8(229, 231, 235);
