use eframe::egui;

use crate::PaintApp;
use crate::app::InfoWindow;

pub fn menu_bar(app: &mut PaintApp, ctx: &egui::Context) {
    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::menu::bar(ui, |ui| {
            let enabled = app.session.is_canvas_enabled();

            ui.menu_button("File", |ui| {
                if ui.button("New canvas").clicked() {
                    ui.close_menu();
                    app.new_canvas();
                }
                if ui.add_enabled(enabled, egui::Button::new("Clear")).clicked() {
                    ui.close_menu();
                    app.session.clear_canvas();
                    app.prune_images();
                }
                if ui.button("Open…").clicked() {
                    ui.close_menu();
                    app.open();
                }
                if ui.add_enabled(enabled, egui::Button::new("Save…")).clicked() {
                    ui.close_menu();
                    app.save_as();
                }
                ui.separator();
                if ui.button("Quit").clicked() {
                    ui.close_menu();
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.menu_button("Help", |ui| {
                if ui.button("Help").clicked() {
                    ui.close_menu();
                    app.info_window = InfoWindow::Help;
                }
                if ui.button("About").clicked() {
                    ui.close_menu();
                    app.info_window = InfoWindow::About;
                }
            });
        });
    });
}
