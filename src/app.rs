use eframe::egui;
use std::path::{Path, PathBuf};

use crate::config::AppConfig;
use crate::file_io::{DIALOG_FILTERS, DropHandler};
use crate::input::InputHandler;
use crate::panels::{central_panel, dialogs, menu_bar, tools_panel};
use crate::session::{ConfirmChoice, Notice, PendingAction, Session};
use crate::surface::ImageCache;
use crate::tool::ToolSettings;

/// Storage key for the persisted tool settings
const SETTINGS_KEY: &str = "raster_paint_tool_settings";

/// Info windows opened from the Help menu
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum InfoWindow {
    #[default]
    None,
    Help,
    About,
}

pub struct PaintApp {
    pub(crate) session: Session,
    pub(crate) images: ImageCache,
    pub(crate) input: InputHandler,
    pub(crate) info_window: InfoWindow,
    drop_handler: DropHandler,
    allow_close: bool,
    last_title: String,
}

impl PaintApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        let settings: ToolSettings = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, SETTINGS_KEY))
            .unwrap_or_default();
        log::debug!("Restored tool settings: {:?}", settings);
        Self::with_session(Session::new(config, settings))
    }

    pub fn with_session(session: Session) -> Self {
        Self {
            session,
            images: ImageCache::new(),
            input: InputHandler::default(),
            info_window: InfoWindow::None,
            drop_handler: DropHandler::new(),
            allow_close: false,
            last_title: String::new(),
        }
    }

    fn file_dialog(&self) -> rfd::FileDialog {
        let mut dialog = rfd::FileDialog::new();
        for (name, extensions) in DIALOG_FILTERS {
            dialog = dialog.add_filter(name, extensions);
        }
        if let Some(dir) = &self.session.config().dialog_dir {
            dialog = dialog.set_directory(dir);
        }
        dialog
    }

    /// Asks for a save destination; `None` when the dialog is cancelled
    pub(crate) fn pick_save_path(&self) -> Option<PathBuf> {
        let mut dialog = self.file_dialog().set_file_name("untitled.png");
        if let Some(current) = self.session.current_path() {
            if let Some(name) = current.file_name() {
                dialog = dialog.set_file_name(name.to_string_lossy());
            }
        }
        dialog.save_file()
    }

    pub(crate) fn new_canvas(&mut self) {
        if self.session.request_new_canvas() {
            self.prune_images();
        }
    }

    /// Drops textures of images no longer on the canvas
    pub(crate) fn prune_images(&mut self) {
        self.images.retain_paths(self.session.document().image_paths());
    }

    pub(crate) fn open(&mut self) {
        if let Some(path) = self.file_dialog().pick_file() {
            self.open_path(&path);
        }
    }

    pub(crate) fn open_path(&mut self, path: &Path) {
        match self.session.open_path(path) {
            // The file may have changed on disk since it was last cached.
            Ok(()) => self.images.clear(),
            Err(err) => {
                log::error!("Open failed: {}", err);
                self.session.show_notice(Notice::new("Could not open image", err.to_string()));
            }
        }
    }

    pub(crate) fn save_as(&mut self) {
        let Some(path) = self.pick_save_path() else {
            log::debug!("Save cancelled");
            return;
        };
        if let Err(err) = self.session.save_to(&path) {
            log::error!("Save failed: {}", err);
            self.session.show_notice(Notice::new("Could not save image", err.to_string()));
        }
    }

    /// Applies the user's answer to the unsaved-changes prompt
    pub(crate) fn confirm(&mut self, ctx: &egui::Context, choice: ConfirmChoice) {
        match self.session.resolve_confirmation(choice) {
            Ok(Some(PendingAction::Close)) => {
                self.allow_close = true;
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            }
            Ok(Some(PendingAction::NewCanvas)) => self.prune_images(),
            Ok(None) => {}
            Err(err) => {
                log::error!("Save before continuing failed: {}", err);
                self.session.show_notice(Notice::new("Could not save image", err.to_string()));
            }
        }
    }

    fn handle_close_request(&mut self, ctx: &egui::Context) {
        if !ctx.input(|i| i.viewport().close_requested()) || self.allow_close {
            return;
        }
        if self.session.request_close() {
            log::info!("Closing");
            self.allow_close = true;
        } else {
            ctx.send_viewport_cmd(egui::ViewportCommand::CancelClose);
        }
    }

    fn update_title(&mut self, ctx: &egui::Context) {
        let title = self.session.title();
        if title != self.last_title {
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(title.clone()));
            self.last_title = title;
        }
    }
}

impl eframe::App for PaintApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, SETTINGS_KEY, self.session.settings());
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_close_request(ctx);

        self.drop_handler.preview_files_being_dropped(ctx);
        if let Some(path) = self.drop_handler.take_dropped_image(ctx) {
            self.open_path(&path);
        }

        menu_bar(self, ctx);
        tools_panel(self, ctx);
        central_panel(self, ctx);
        dialogs(self, ctx);

        self.update_title(ctx);
    }
}
