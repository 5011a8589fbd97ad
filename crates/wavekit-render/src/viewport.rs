use crossbeam::channel::Sender;

/// Logical drawing area plus the device pixel scale.
///
/// All rule math runs in logical pixels; the backing store is sized by the
/// physical dimensions so output stays crisp on high-density displays.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    pub scale_factor: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32, scale_factor: f32) -> Self {
        Self { width, height, scale_factor }
    }

    /// A hidden or collapsed surface. Frames for an empty viewport are
    /// empty lists, never an error.
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    pub fn physical_width(&self) -> u32 {
        (self.width * self.scale_factor).floor().max(0.0) as u32
    }

    pub fn physical_height(&self) -> u32 {
        (self.height * self.scale_factor).floor().max(0.0) as u32
    }
}

/// Cloneable sender the host's resize observer holds on to.
///
/// Resize events are queued and applied by the driver at the start of its
/// next tick, never mid-frame. Sending after the driver is gone is a
/// reported-but-non-fatal condition.
#[derive(Clone)]
pub struct ResizeHandle {
    pub(crate) tx: Sender<Viewport>,
}

impl ResizeHandle {
    pub fn resize(&self, viewport: Viewport) {
        if self.tx.send(viewport).is_err() {
            log::warn!("viewport resize after driver teardown; ignoring");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_physical_size_scaling() {
        let v = Viewport::new(640.0, 360.0, 2.0);
        assert_eq!(v.physical_width(), 1280);
        assert_eq!(v.physical_height(), 720);
    }

    #[test]
    fn test_physical_size_floors() {
        let v = Viewport::new(641.5, 360.0, 1.5);
        assert_eq!(v.physical_width(), 962);
    }

    #[test]
    fn test_empty_viewport() {
        assert!(Viewport::new(0.0, 360.0, 1.0).is_empty());
        assert!(Viewport::new(640.0, 0.0, 1.0).is_empty());
        assert!(!Viewport::new(640.0, 360.0, 1.0).is_empty());
    }
}
