use eframe::egui;

use crate::tool::Tool;

/// Square toolbox button showing a tool's icon glyph
pub struct ToolButton {
    pub tool: Tool,
    pub selected: bool,
}

impl ToolButton {
    pub fn new(tool: Tool, selected: bool) -> Self {
        Self { tool, selected }
    }

    pub fn show(&self, ui: &mut egui::Ui) -> egui::Response {
        let button_size = egui::vec2(32.0, 32.0);
        let (rect, response) = ui.allocate_exact_size(button_size, egui::Sense::click());

        if ui.is_rect_visible(rect) {
            let bg_color = if self.selected {
                egui::Color32::from_rgb(100, 181, 246)
            } else if response.hovered() {
                ui.visuals().widgets.hovered.bg_fill
            } else {
                ui.visuals().widgets.inactive.bg_fill
            };
            ui.painter().rect_filled(rect, 4.0, bg_color);

            let text_color = if self.selected {
                egui::Color32::BLACK
            } else {
                ui.visuals().text_color()
            };
            ui.painter().text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                self.tool.icon(),
                egui::FontId::proportional(20.0),
                text_color,
            );

            if self.selected {
                ui.painter().rect_stroke(
                    rect,
                    4.0,
                    egui::Stroke::new(2.0, egui::Color32::from_rgb(33, 150, 243)),
                );
            }
        }

        response.on_hover_text(self.tool.name())
    }
}

/// Clickable colour square; outlined when it is the active slot
pub fn color_swatch(
    ui: &mut egui::Ui,
    color: egui::Color32,
    size: f32,
    highlighted: bool,
) -> egui::Response {
    let (rect, response) = ui.allocate_exact_size(egui::vec2(size, size), egui::Sense::click());
    if ui.is_rect_visible(rect) {
        ui.painter().rect_filled(rect, 2.0, color);
        let stroke = if highlighted {
            egui::Stroke::new(2.0, egui::Color32::from_rgb(33, 150, 243))
        } else {
            egui::Stroke::new(1.0, egui::Color32::from_gray(120))
        };
        ui.painter().rect_stroke(rect, 2.0, stroke);
    }
    response
}
