use crate::chrome;
use crate::clock::{Clock, SystemClock};
use crate::viewport::{ResizeHandle, Viewport};
use crossbeam::channel::{unbounded, Receiver, Sender};
use wavekit_core::{Category, DisplayList, SceneContext, Variant, WaveParameters};
use wavekit_rules::rule_for;

/// Per-frame input from the control layer, read-only to the driver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneInput {
    pub params: WaveParameters,
    /// Selected example, `None` meaning the category's default rule.
    pub variant: Option<Variant>,
    pub grid_visible: bool,
    pub paused: bool,
}

/// Build one frame's display list for a fully specified scene.
///
/// Pure: the same scene, variant and grid flag always produce an identical
/// list. A degenerate (zero-area) scene yields an empty list.
pub fn render_frame(
    scene: &SceneContext,
    variant: Option<Variant>,
    grid_visible: bool,
) -> DisplayList {
    let mut out = DisplayList::new();
    if scene.width <= 0.0 || scene.height <= 0.0 {
        return out;
    }
    if grid_visible {
        chrome::draw_grid(scene.width, scene.height, &mut out);
    }
    chrome::draw_axis(scene.width, scene.height, &mut out);
    rule_for(scene.params.category, variant).render(scene, &mut out);
    out
}

/// Owns the animation clock and produces frames on demand.
///
/// The host calls [`tick`](FrameDriver::tick) once per scheduled frame at
/// display-refresh cadence. The driver applies queued viewport changes,
/// re-zeros elapsed time when the selection changes, freezes time while
/// paused, and otherwise emits the frame's display list.
pub struct FrameDriver<C: Clock = SystemClock> {
    clock: C,
    /// Clock reading that corresponds to elapsed = 0.
    origin: f64,
    elapsed: f32,
    viewport: Viewport,
    resize_tx: Sender<Viewport>,
    resize_rx: Receiver<Viewport>,
    /// Last-seen (category, variant) pair; a change resets elapsed time.
    selection: Option<(Category, Option<Variant>)>,
}

impl FrameDriver<SystemClock> {
    pub fn new(viewport: Viewport) -> Self {
        Self::with_clock(SystemClock::new(), viewport)
    }
}

impl<C: Clock> FrameDriver<C> {
    pub fn with_clock(clock: C, viewport: Viewport) -> Self {
        let (resize_tx, resize_rx) = unbounded();
        let origin = clock.seconds();
        Self {
            clock,
            origin,
            elapsed: 0.0,
            viewport,
            resize_tx,
            resize_rx,
            selection: None,
        }
    }

    /// Handle for the host's resize observer. Events queue up and take
    /// effect at the start of the next tick.
    pub fn resize_handle(&self) -> ResizeHandle {
        ResizeHandle { tx: self.resize_tx.clone() }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Seconds of animation time for the current example.
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Advance the driver by one scheduled frame.
    ///
    /// Returns `None` while paused: the host keeps scheduling ticks so that
    /// unpausing resumes immediately, but no frame is produced and elapsed
    /// time does not advance.
    pub fn tick(&mut self, input: &SceneInput) -> Option<DisplayList> {
        // Queued resizes land here, never mid-frame.
        while let Ok(viewport) = self.resize_rx.try_recv() {
            self.viewport = viewport;
        }

        let now = self.clock.seconds();
        let key = (input.params.category, input.variant);
        if self.selection != Some(key) {
            // Fresh-start boundary: each newly selected example animates
            // from t = 0 rather than inheriting the previous phase.
            self.selection = Some(key);
            self.origin = now;
            self.elapsed = 0.0;
            log::debug!("animation reset for selection {key:?}");
        }

        if input.paused {
            // Hold elapsed and slide the origin underneath it so resuming
            // continues from the same instant with no jump.
            self.origin = now - f64::from(self.elapsed);
            return None;
        }
        self.elapsed = (now - self.origin) as f32;

        let scene = SceneContext::new(
            self.elapsed,
            self.viewport.width,
            self.viewport.height,
            input.params,
        );
        Some(render_frame(&scene, input.variant, input.grid_visible))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use wavekit_core::Primitive;

    fn input(category: Category, variant: Option<Variant>) -> SceneInput {
        SceneInput {
            params: WaveParameters {
                amplitude: 40.0,
                frequency: 1.0,
                wavelength: 240.0,
                category,
            },
            variant,
            grid_visible: true,
            paused: false,
        }
    }

    fn driver() -> FrameDriver<ManualClock> {
        FrameDriver::with_clock(ManualClock::new(), Viewport::new(640.0, 360.0, 1.0))
    }

    #[test]
    fn test_selection_change_resets_elapsed() {
        let mut d = driver();
        let transverse = input(Category::Transverse, None);
        d.tick(&transverse);
        d.clock.advance(2.0);
        d.tick(&transverse);
        assert!((d.elapsed() - 2.0).abs() < 1e-6);

        d.clock.advance(0.5);
        d.tick(&input(Category::Transverse, Some(Variant::Water)));
        assert_eq!(d.elapsed(), 0.0);

        d.clock.advance(0.5);
        d.tick(&input(Category::Longitudinal, Some(Variant::Pwave)));
        assert_eq!(d.elapsed(), 0.0);
    }

    #[test]
    fn test_pause_freezes_and_resumes_without_jump() {
        let mut d = driver();
        let running = input(Category::Transverse, None);
        let paused = SceneInput { paused: true, ..running };

        d.tick(&running);
        d.clock.advance(1.0);
        assert!(d.tick(&running).is_some());
        assert!((d.elapsed() - 1.0).abs() < 1e-6);

        // Paused ticks emit no frame and hold elapsed.
        for _ in 0..5 {
            d.clock.advance(0.3);
            assert!(d.tick(&paused).is_none());
            assert!((d.elapsed() - 1.0).abs() < 1e-6);
        }

        // Resume: time continues from where it froze.
        d.clock.advance(0.25);
        assert!(d.tick(&running).is_some());
        assert!((d.elapsed() - 1.25).abs() < 1e-6);
    }

    #[test]
    fn test_frame_determinism() {
        let mut d = driver();
        let inp = input(Category::Longitudinal, Some(Variant::Slinky));
        d.clock.advance(1.7);
        let a = d.tick(&inp).unwrap();
        // Same clock reading, same input: bit-for-bit identical frame.
        let b = d.tick(&inp).unwrap();
        assert_eq!(a, b);
        assert!(!a.is_empty());
    }

    #[test]
    fn test_zero_viewport_yields_empty_frame() {
        let mut d = FrameDriver::with_clock(ManualClock::new(), Viewport::new(0.0, 0.0, 1.0));
        let frame = d.tick(&input(Category::Transverse, Some(Variant::Water))).unwrap();
        assert!(frame.is_empty());
    }

    #[test]
    fn test_resize_applies_at_next_tick() {
        let mut d = driver();
        let inp = input(Category::Transverse, None);
        d.tick(&inp);

        let handle = d.resize_handle();
        handle.resize(Viewport::new(800.0, 450.0, 2.0));
        handle.resize(Viewport::new(320.0, 180.0, 2.0));
        // Nothing applied until the next tick; the last event wins.
        assert_eq!(d.viewport(), Viewport::new(640.0, 360.0, 1.0));
        d.tick(&inp);
        assert_eq!(d.viewport(), Viewport::new(320.0, 180.0, 2.0));
    }

    #[test]
    fn test_resize_after_teardown_is_non_fatal() {
        let d = driver();
        let handle = d.resize_handle();
        drop(d);
        // Logs a warning and carries on.
        handle.resize(Viewport::new(100.0, 100.0, 1.0));
    }

    #[test]
    fn test_grid_toggle_controls_chrome() {
        let mut d = driver();
        let with_grid = input(Category::Transverse, None);
        let without_grid = SceneInput { grid_visible: false, ..with_grid };

        let a = d.tick(&with_grid).unwrap();
        let b = d.tick(&without_grid).unwrap();
        // Without the grid only the axis and the wave trace remain.
        assert_eq!(b.len(), 2);
        assert!(a.len() > b.len());
    }

    #[test]
    fn test_scenario_default_transverse_crest() {
        let mut d = driver();
        let inp = input(Category::Transverse, None);
        let frame = d.tick(&inp).unwrap();

        // t = 0: displacement 0 at x = 0 and a screen-up crest of height A
        // at x = lambda / 4 (which is 60 px, a multiple of the 4 px stride).
        let trace = frame
            .iter()
            .filter_map(|p| match p {
                Primitive::Polyline { points, width, .. } if *width == 2.2 => Some(points),
                _ => None,
            })
            .next()
            .expect("wave trace present");
        let mid = 180.0;
        assert!((trace[0].y - mid).abs() < 1e-3);
        let crest = trace.iter().find(|p| p.x == 60.0).unwrap();
        assert!((crest.y - (mid - 40.0)).abs() < 1e-3);
    }
}
