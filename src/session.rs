use egui::{Pos2, Vec2};
use std::path::{Path, PathBuf};

use crate::config::AppConfig;
use crate::document::Document;
use crate::error::PaintResult;
use crate::file_io;
use crate::interaction::Interaction;
use crate::primitive::DrawPrimitive;
use crate::surface::Surface;
use crate::tool::{Tool, ToolSettings};

/// Action waiting on the unsaved-changes prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingAction {
    NewCanvas,
    Close,
}

/// Answer to the unsaved-changes prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmChoice {
    /// Save first; `None` when the save dialog was cancelled
    Save(Option<PathBuf>),
    Discard,
    Cancel,
}

/// Message shown in a modal window until dismissed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub body: String,
}

impl Notice {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }

    pub fn start() -> Self {
        Self::new(
            "Welcome",
            "Create a new canvas (File > New canvas) or open an image (File > Open) to start drawing.",
        )
    }
}

/// Everything one window owns: the drawing, the tool settings and the
/// dialog flow around them.
pub struct Session {
    document: Document,
    settings: ToolSettings,
    interaction: Interaction,
    canvas_size: Vec2,
    config: AppConfig,
    canvas_enabled: bool,
    pending_confirmation: Option<PendingAction>,
    notice: Option<Notice>,
    current_path: Option<PathBuf>,
}

impl Session {
    pub fn new(config: AppConfig, settings: ToolSettings) -> Self {
        Self {
            document: Document::new(),
            settings,
            interaction: Interaction::default(),
            canvas_size: Vec2::ZERO,
            config,
            canvas_enabled: false,
            pending_confirmation: None,
            notice: Some(Notice::start()),
            current_path: None,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn settings(&self) -> &ToolSettings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut ToolSettings {
        &mut self.settings
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn interaction(&self) -> &Interaction {
        &self.interaction
    }

    pub fn canvas_size(&self) -> Vec2 {
        self.canvas_size
    }

    /// Tracks the on-screen canvas extent, in whole pixels
    pub fn set_canvas_size(&mut self, size: Vec2) {
        self.canvas_size = size.floor().max(Vec2::ZERO);
    }

    pub fn is_canvas_enabled(&self) -> bool {
        self.canvas_enabled
    }

    pub fn is_saved(&self) -> bool {
        self.document.is_saved()
    }

    pub fn current_path(&self) -> Option<&Path> {
        self.current_path.as_deref()
    }

    pub fn pending_confirmation(&self) -> Option<PendingAction> {
        self.pending_confirmation
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn show_notice(&mut self, notice: Notice) {
        self.notice = Some(notice);
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// Title for the window: file name plus a marker while unsaved
    pub fn title(&self) -> String {
        let name = self
            .current_path
            .as_deref()
            .and_then(Path::file_name)
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "untitled".to_owned());
        let marker = if self.canvas_enabled && !self.is_saved() { "*" } else { "" };
        format!("Raster Paint - {name}{marker}")
    }

    fn needs_confirmation(&self) -> bool {
        self.canvas_enabled && !self.document.is_saved()
    }

    /// Starts a blank canvas, or asks first when there are unsaved changes.
    /// Returns whether the canvas was replaced right away.
    pub fn request_new_canvas(&mut self) -> bool {
        if self.needs_confirmation() {
            log::debug!("Unsaved changes, asking before new canvas");
            self.pending_confirmation = Some(PendingAction::NewCanvas);
            return false;
        }
        self.new_canvas();
        true
    }

    fn new_canvas(&mut self) {
        self.interaction.abandon();
        self.document.reset(self.canvas_size);
        self.current_path = None;
        if !self.canvas_enabled {
            self.canvas_enabled = true;
            self.dismiss_notice();
        }
        log::info!("New {}x{} canvas", self.canvas_size.x, self.canvas_size.y);
    }

    /// Wipes the canvas back to white without asking
    pub fn clear_canvas(&mut self) {
        if !self.canvas_enabled {
            log::debug!("Clear ignored, no canvas yet");
            return;
        }
        self.interaction.abandon();
        self.document.reset(self.canvas_size);
        log::info!("Canvas cleared");
    }

    /// Replaces the drawing with the image at `path`.
    /// Leaves the canvas untouched when the file does not decode.
    pub fn open_path(&mut self, path: &Path) -> PaintResult<()> {
        file_io::validate_image(path)?;
        self.interaction.abandon();
        self.document.replace_with_image(path.to_path_buf());
        self.current_path = Some(path.to_path_buf());
        if !self.canvas_enabled {
            self.canvas_enabled = true;
            self.dismiss_notice();
        }
        log::info!("Opened {}", path.display());
        Ok(())
    }

    /// Flattens the canvas to `path` and records the save
    pub fn save_to(&mut self, path: &Path) -> PaintResult<()> {
        self.interaction.finish(&mut self.document);
        let width = (self.canvas_size.x as u32).max(1);
        let height = (self.canvas_size.y as u32).max(1);
        file_io::save_image(path, self.document.primitives(), width, height)?;
        self.document.mark_saved();
        self.current_path = Some(path.to_path_buf());
        Ok(())
    }

    /// Returns whether the window may close now. Otherwise the prompt is
    /// raised and [`Self::resolve_confirmation`] decides.
    pub fn request_close(&mut self) -> bool {
        if self.needs_confirmation() {
            log::debug!("Unsaved changes, asking before close");
            self.pending_confirmation = Some(PendingAction::Close);
            return false;
        }
        true
    }

    /// Applies the answer to the open prompt. Returns the action that went
    /// ahead, if any; a returned [`PendingAction::Close`] means the window
    /// should close.
    pub fn resolve_confirmation(
        &mut self,
        choice: ConfirmChoice,
    ) -> PaintResult<Option<PendingAction>> {
        let Some(action) = self.pending_confirmation.take() else {
            return Ok(None);
        };

        match choice {
            ConfirmChoice::Cancel | ConfirmChoice::Save(None) => {
                log::debug!("{action:?} cancelled");
                return Ok(None);
            }
            ConfirmChoice::Save(Some(path)) => self.save_to(&path)?,
            ConfirmChoice::Discard => log::info!("Discarding unsaved changes"),
        }

        if action == PendingAction::NewCanvas {
            self.new_canvas();
        }
        Ok(Some(action))
    }

    /// Switches tool, committing any drawing in progress first
    pub fn set_tool(&mut self, tool: Tool) {
        if self.settings.tool == tool {
            return;
        }
        self.interaction.finish(&mut self.document);
        log::debug!("Tool {} -> {}", self.settings.tool.name(), tool.name());
        self.settings.tool = tool;
    }

    pub fn pointer_down(&mut self, pos: Pos2) {
        if !self.canvas_enabled {
            return;
        }
        let pos = pos.floor();
        self.interaction
            .pointer_down(pos, &self.settings, self.canvas_size, &mut self.document);
    }

    pub fn pointer_move(&mut self, pos: Pos2) {
        if !self.canvas_enabled {
            return;
        }
        self.interaction
            .pointer_move(pos.floor(), &self.settings, &mut self.document);
    }

    pub fn pointer_up(&mut self, pos: Pos2) {
        if !self.canvas_enabled {
            return;
        }
        self.interaction
            .pointer_up(pos.floor(), &self.settings, &mut self.document);
    }

    /// Committed primitives followed by the one being drawn
    pub fn visible_primitives(&self) -> impl Iterator<Item = &DrawPrimitive> {
        self.document.primitives().iter().chain(self.interaction.pending())
    }

    /// Replays everything visible onto `surface`. Primitives that fail are
    /// skipped so the rest still shows; the first error is returned.
    pub fn paint(&self, surface: &mut dyn Surface) -> PaintResult<()> {
        let mut first_error = None;
        for primitive in self.visible_primitives() {
            if let Err(err) = primitive.render(surface) {
                first_error.get_or_insert(err);
            }
        }
        first_error.map_or(Ok(()), Err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    fn session() -> Session {
        let mut session = Session::new(AppConfig::default(), ToolSettings::default());
        session.set_canvas_size(Vec2::new(20.5, 10.0));
        session
    }

    #[test]
    fn test_starts_disabled_with_notice() {
        let mut session = session();
        assert!(!session.is_canvas_enabled());
        assert_eq!(session.notice(), Some(&Notice::start()));
        assert_eq!(session.canvas_size(), Vec2::new(20.0, 10.0));

        session.pointer_down(pos2(1.0, 1.0));
        session.pointer_up(pos2(2.0, 2.0));
        assert!(session.document().is_empty());
        assert!(session.request_close());
    }

    #[test]
    fn test_new_canvas_enables() {
        let mut session = session();
        assert!(session.request_new_canvas());
        assert!(session.is_canvas_enabled());
        assert!(session.notice().is_none());
        assert_eq!(
            session.document().primitives(),
            &[DrawPrimitive::background(Vec2::new(20.0, 10.0))]
        );
    }

    #[test]
    fn test_pointer_positions_snap_to_pixels() {
        let mut session = session();
        session.request_new_canvas();
        session.set_tool(Tool::Line);
        session.pointer_down(pos2(1.7, 2.2));
        session.pointer_up(pos2(5.5, 6.9));
        let line = &session.document().primitives()[1];
        assert_eq!(line.start(), Some(pos2(1.0, 2.0)));
        assert_eq!(line.end(), Some(pos2(5.0, 6.0)));
    }

    #[test]
    fn test_tool_change_commits_pending() {
        let mut session = session();
        session.request_new_canvas();
        session.set_tool(Tool::Rectangle);
        session.pointer_down(pos2(1.0, 1.0));
        session.pointer_move(pos2(4.0, 4.0));
        assert_eq!(session.visible_primitives().count(), 2);
        assert_eq!(session.document().len(), 1);

        session.set_tool(Tool::Brush);
        assert_eq!(session.document().len(), 2);
        assert!(!session.interaction().is_dragging());
    }

    #[test]
    fn test_cancelled_confirmation_keeps_canvas() {
        let mut session = session();
        session.request_new_canvas();
        session.pointer_down(pos2(1.0, 1.0));
        session.pointer_up(pos2(3.0, 1.0));
        assert!(!session.is_saved());

        assert!(!session.request_new_canvas());
        assert_eq!(session.pending_confirmation(), Some(PendingAction::NewCanvas));
        assert_eq!(session.resolve_confirmation(ConfirmChoice::Cancel).unwrap(), None);
        assert_eq!(session.document().len(), 2);
        assert!(session.pending_confirmation().is_none());

        assert!(!session.request_close());
        assert_eq!(session.resolve_confirmation(ConfirmChoice::Save(None)).unwrap(), None);
        assert_eq!(session.document().len(), 2);
    }

    #[test]
    fn test_clear_is_ignored_before_start() {
        let mut session = session();
        session.clear_canvas();
        assert!(session.document().is_empty());
    }

    #[test]
    fn test_title_marks_unsaved() {
        let mut session = session();
        assert_eq!(session.title(), "Raster Paint - untitled");
        session.request_new_canvas();
        session.pointer_down(pos2(1.0, 1.0));
        session.pointer_up(pos2(1.0, 1.0));
        assert_eq!(session.title(), "Raster Paint - untitled*");
    }
}
