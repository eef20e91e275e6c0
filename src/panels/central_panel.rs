use eframe::egui;

use crate::PaintApp;
use crate::app::InfoWindow;
use crate::surface::PainterSurface;

pub fn central_panel(app: &mut PaintApp, ctx: &egui::Context) {
    egui::CentralPanel::default()
        .frame(egui::Frame::none())
        .show(ctx, |ui| {
            let (response, painter) = ui.allocate_painter(ui.available_size(), egui::Sense::drag());
            let panel_rect = response.rect;
            app.session.set_canvas_size(panel_rect.size());
            app.input.set_canvas_rect(panel_rect);

            let blocked = app.session.notice().is_some()
                || app.session.pending_confirmation().is_some()
                || app.info_window != InfoWindow::None;
            if app.session.is_canvas_enabled() && !blocked {
                let hovered = response.hovered() || app.input.is_dragging();
                for event in app.input.process_input(ctx, hovered) {
                    event.apply(&mut app.session);
                }
            }

            if !app.session.is_canvas_enabled() {
                painter.rect_filled(panel_rect, 0.0, egui::Color32::from_gray(160));
                return;
            }

            let canvas_rect = egui::Rect::from_min_size(panel_rect.min, app.session.canvas_size());
            let painter = painter.with_clip_rect(canvas_rect);
            let mut surface = PainterSurface::new(&painter, canvas_rect, &mut app.images);
            if let Err(err) = app.session.paint(&mut surface) {
                log::trace!("Canvas repaint incomplete: {}", err);
            }
        });
}
