pub mod chrome;
pub mod clock;
pub mod driver;
pub mod viewport;

pub use clock::{Clock, ManualClock, SystemClock};
pub use driver::{render_frame, FrameDriver, SceneInput};
pub use viewport::{ResizeHandle, Viewport};
