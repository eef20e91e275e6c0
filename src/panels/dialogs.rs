use eframe::egui;

use crate::PaintApp;
use crate::app::InfoWindow;
use crate::session::{ConfirmChoice, PendingAction};

fn modal(title: &str) -> egui::Window<'_> {
    egui::Window::new(title)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
}

/// Notices, the unsaved-changes prompt and the Help menu windows
pub fn dialogs(app: &mut PaintApp, ctx: &egui::Context) {
    if let Some(notice) = app.session.notice().cloned() {
        modal(&notice.title).show(ctx, |ui| {
            ui.label(&notice.body);
            if ui.button("OK").clicked() {
                app.session.dismiss_notice();
            }
        });
    }

    if let Some(action) = app.session.pending_confirmation() {
        let message = match action {
            PendingAction::NewCanvas => "Creating a new canvas discards the current one.\nSave it first?",
            PendingAction::Close => "You are about to quit with unsaved changes.\nSave them first?",
        };
        let mut choice = None;
        modal("Unsaved changes").show(ctx, |ui| {
            ui.label(message);
            ui.horizontal(|ui| {
                if ui.button("Save").clicked() {
                    choice = Some(ConfirmChoice::Save(app.pick_save_path()));
                }
                if ui.button("Don't save").clicked() {
                    choice = Some(ConfirmChoice::Discard);
                }
                if ui.button("Cancel").clicked() {
                    choice = Some(ConfirmChoice::Cancel);
                }
            });
        });
        if let Some(choice) = choice {
            app.confirm(ctx, choice);
        }
    }

    let (title, text) = match app.info_window {
        InfoWindow::None => return,
        InfoWindow::Help => ("Help", app.session.config().help_text.clone()),
        InfoWindow::About => ("About", app.session.config().about_text.clone()),
    };
    modal(title).show(ctx, |ui| {
        ui.label(text);
        if ui.button("OK").clicked() {
            app.info_window = InfoWindow::None;
        }
    });
}
