pub mod canvas;
pub mod catalog;
pub mod controls;
pub mod panel;

pub use controls::Controls;

use wavekit_core::DisplayList;
use wavekit_render::{Clock, FrameDriver};

/// Draw the complete teaching-aid UI: header, canvas, sliders, example
/// selector and the curriculum cards.
///
/// Call once per egui frame; the driver is ticked from inside the canvas.
pub fn draw_app<C: Clock>(
    ui: &mut egui::Ui,
    controls: &mut Controls,
    driver: &mut FrameDriver<C>,
    last_frame: &mut Option<DisplayList>,
) {
    egui::ScrollArea::vertical().show(ui, |ui| {
        ui.heading("Waves Module");
        ui.separator();

        panel::draw_header(ui, controls);
        ui.add_space(8.0);

        panel::draw_canvas(ui, controls, driver, last_frame);
        ui.add_space(8.0);

        panel::draw_sliders(ui, controls);
        ui.add_space(8.0);

        panel::draw_examples(ui, controls);
        ui.add_space(12.0);

        panel::draw_content_cards(ui);
    });
}
