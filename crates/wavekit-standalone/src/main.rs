use eframe::egui;
use wavekit_core::DisplayList;
use wavekit_gui::Controls;
use wavekit_render::{FrameDriver, SystemClock, Viewport};

struct WavekitApp {
    controls: Controls,
    driver: FrameDriver<SystemClock>,
    /// Most recent frame, repainted while paused.
    last_frame: Option<DisplayList>,
}

impl WavekitApp {
    fn new() -> Self {
        Self {
            controls: Controls::default(),
            // The canvas sends the real size on the first frame.
            driver: FrameDriver::new(Viewport::new(0.0, 0.0, 1.0)),
            last_frame: None,
        }
    }
}

impl eframe::App for WavekitApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            wavekit_gui::draw_app(ui, &mut self.controls, &mut self.driver, &mut self.last_frame);
        });
        // Keep the tick chain scheduled at display cadence even while
        // paused, so unpausing resumes on the very next frame.
        ctx.request_repaint();
    }
}

fn main() -> eframe::Result<()> {
    env_logger::init();
    log::info!("starting wavekit");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1000.0, 780.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Wavekit - Waves Module",
        options,
        Box::new(|_cc| Ok(Box::new(WavekitApp::new()))),
    )
}
