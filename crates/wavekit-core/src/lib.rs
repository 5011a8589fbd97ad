pub mod display;
pub mod palette;
pub mod params;
pub mod scene;

pub use display::{DisplayList, Primitive, Rgba};
pub use params::{Category, Variant, WaveParameters, MIN_WAVELENGTH};
pub use scene::SceneContext;
