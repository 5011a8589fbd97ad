use crate::canvas;
use crate::catalog;
use crate::controls::{Controls, AMPLITUDE_RANGE, FREQUENCY_RANGE, WAVELENGTH_RANGE};
use egui::{Color32, CornerRadius, FontId};
use wavekit_core::DisplayList;
use wavekit_render::{Clock, FrameDriver, Viewport};

/// Category switch buttons plus grid and pause toggles.
pub fn draw_header(ui: &mut egui::Ui, controls: &mut Controls) {
    ui.horizontal(|ui| {
        for info in &catalog::CATEGORIES {
            let active = controls.category == info.category;
            if ui.selectable_label(active, info.title).clicked() {
                controls.set_category(info.category);
            }
        }

        ui.separator();
        ui.checkbox(&mut controls.show_grid, "Grid");
        let label = if controls.paused { "Play" } else { "Pause" };
        if ui.button(label).clicked() {
            controls.paused = !controls.paused;
        }
    });

    ui.label(catalog::category_info(controls.category).description);
}

/// The three wave parameter sliders.
pub fn draw_sliders(ui: &mut egui::Ui, controls: &mut Controls) {
    ui.add(
        egui::Slider::new(&mut controls.amplitude, AMPLITUDE_RANGE)
            .text("Amplitude (px)"),
    );
    ui.add(
        egui::Slider::new(&mut controls.frequency, FREQUENCY_RANGE)
            .text("Frequency (Hz)"),
    );
    ui.add(
        egui::Slider::new(&mut controls.wavelength, WAVELENGTH_RANGE)
            .text("Wavelength (px)"),
    );
}

/// Example chips for the active category, with the selected example's note.
pub fn draw_examples(ui: &mut egui::Ui, controls: &mut Controls) {
    ui.horizontal_wrapped(|ui| {
        for entry in catalog::examples_for(controls.category) {
            let active = controls.selected == Some(entry.variant);
            if ui.selectable_label(active, entry.name).clicked() {
                controls.selected = Some(entry.variant);
            }
        }
    });
    if let Some(variant) = controls.selected {
        if let Some(entry) = catalog::examples_for(controls.category)
            .into_iter()
            .find(|e| e.variant == variant)
        {
            ui.small(entry.blurb);
        }
    }
}

/// The animated canvas: allocates a 16:9 region, forwards any size change
/// to the driver's resize queue, ticks the driver, and replays the frame.
///
/// While paused the driver emits nothing and the previous frame is
/// repainted, so the canvas holds its image instead of going blank.
pub fn draw_canvas<C: Clock>(
    ui: &mut egui::Ui,
    controls: &Controls,
    driver: &mut FrameDriver<C>,
    last_frame: &mut Option<DisplayList>,
) -> egui::Response {
    let width = ui.available_width();
    let size = egui::vec2(width, width * 9.0 / 16.0);
    let (response, painter) = ui.allocate_painter(size, egui::Sense::hover());
    let rect = response.rect;

    let current = Viewport::new(rect.width(), rect.height(), ui.ctx().pixels_per_point());
    if driver.viewport() != current {
        driver.resize_handle().resize(current);
    }

    painter.rect_filled(rect, CornerRadius::same(6), Color32::WHITE);

    if let Some(frame) = driver.tick(&controls.scene_input()) {
        *last_frame = Some(frame);
    }
    if let Some(list) = last_frame {
        canvas::paint_display_list(&painter.with_clip_rect(rect), rect.min, list);
    }

    // Selected-example overlay label.
    if let Some(variant) = controls.selected {
        let pos = rect.min + egui::vec2(8.0, 8.0);
        let galley = painter.layout_no_wrap(
            catalog::example_name(variant).to_owned(),
            FontId::proportional(11.0),
            Color32::WHITE,
        );
        let bg = egui::Rect::from_min_size(pos, galley.size() + egui::vec2(8.0, 4.0));
        painter.rect_filled(bg, CornerRadius::same(3), Color32::from_black_alpha(178));
        painter.galley(pos + egui::vec2(4.0, 2.0), galley, Color32::WHITE);
    }

    response
}

/// Static curriculum cards shown beside the canvas.
pub fn draw_content_cards(ui: &mut egui::Ui) {
    ui.group(|ui| {
        ui.strong("Introduction to Waves");
        ui.label(
            "Waves transfer energy from one place to another without \
             transferring matter. For example, ripples in water after \
             dropping a pebble.",
        );
    });
    ui.group(|ui| {
        ui.strong("Properties of Waves");
        ui.label("• Crest & trough: peaks and valleys (transverse waves)");
        ui.label("• Compression & rarefaction: dense & less dense regions (longitudinal waves)");
        ui.label("• Amplitude: maximum displacement");
        ui.label("• Wavelength: distance between two consecutive crests");
        ui.label("• Frequency: how fast the wave vibrates");
    });
    ui.group(|ui| {
        ui.strong("Real-life Examples");
        ui.label("• Water ripples in a pond");
        ui.label("• Sound propagation in air");
        ui.label("• Light traveling in space");
    });
}

