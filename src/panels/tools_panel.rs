use eframe::egui;

use crate::PaintApp;
use crate::components::tool_button::{ToolButton, color_swatch};
use crate::tool::{ColorSlot, PALETTE, StrokeWidth, Tool};

const PALETTE_COLUMNS: usize = 7;

pub fn tools_panel(app: &mut PaintApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(false)
        .default_width(200.0)
        .show(ctx, |ui| {
            ui.add_enabled_ui(app.session.is_canvas_enabled(), |ui| {
                ui.heading("Tools");

                let active_tool = app.session.settings().tool;
                egui::Grid::new("tool_grid")
                    .num_columns(4)
                    .spacing([4.0, 4.0])
                    .show(ui, |ui| {
                        for (i, tool) in Tool::ALL.into_iter().enumerate() {
                            if ToolButton::new(tool, tool == active_tool).show(ui).clicked() {
                                log::info!("Tool selected from UI: {}", tool.name());
                                app.session.set_tool(tool);
                            }
                            if i % 4 == 3 {
                                ui.end_row();
                            }
                        }
                    });

                ui.separator();
                color_section(app, ui);

                ui.separator();
                let settings = app.session.settings_mut();
                egui::ComboBox::from_label("Width")
                    .selected_text(settings.width.label())
                    .show_ui(ui, |ui| {
                        for width in StrokeWidth::ALL {
                            ui.selectable_value(&mut settings.width, width, width.label());
                        }
                    });
                ui.add_enabled_ui(settings.tool.is_shape(), |ui| {
                    ui.checkbox(&mut settings.fill_enabled, "Fill shapes with the other colour");
                });

                ui.separator();
                ui.horizontal(|ui| {
                    ui.label(app.session.settings().tool.name());
                    ui.label(format!("(State: {})", app.session.interaction().state_name()));
                });
            });
        });
}

fn color_section(app: &mut PaintApp, ui: &mut egui::Ui) {
    let settings = app.session.settings_mut();

    ui.horizontal(|ui| {
        for (slot, label) in [
            (ColorSlot::Primary, "Primary"),
            (ColorSlot::Secondary, "Secondary"),
        ] {
            let color = match slot {
                ColorSlot::Primary => settings.primary,
                ColorSlot::Secondary => settings.secondary,
            };
            ui.vertical(|ui| {
                let response = color_swatch(ui, color, 28.0, settings.active_slot == slot);
                if response.on_hover_text(label).clicked() {
                    log::debug!("Active colour slot: {:?}", slot);
                    settings.active_slot = slot;
                }
                ui.small(label);
            });
        }
    });

    egui::Grid::new("palette_grid")
        .num_columns(PALETTE_COLUMNS)
        .spacing([3.0, 3.0])
        .show(ui, |ui| {
            for (i, (name, color)) in PALETTE.iter().enumerate() {
                if color_swatch(ui, *color, 20.0, false).on_hover_text(*name).clicked() {
                    settings.set_active_color(*color);
                }
                if i % PALETTE_COLUMNS == PALETTE_COLUMNS - 1 {
                    ui.end_row();
                }
            }
        });

    ui.horizontal(|ui| {
        egui::color_picker::color_edit_button_srgba(
            ui,
            settings.active_color_mut(),
            egui::color_picker::Alpha::Opaque,
        );
        ui.label("Custom colour");
    });
}
