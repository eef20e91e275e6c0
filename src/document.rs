use egui::Vec2;
use std::path::PathBuf;

use crate::primitive::DrawPrimitive;

/// Watermark of a fresh session: the background fill counts as one primitive.
pub const INITIAL_WATERMARK: usize = 1;

/// Ordered, append-only sequence of drawn primitives plus save tracking.
#[derive(Debug, Clone)]
pub struct Document {
    primitives: Vec<DrawPrimitive>,
    saved_watermark: usize,
    saved: bool,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new() -> Self {
        Self {
            primitives: Vec::new(),
            saved_watermark: INITIAL_WATERMARK,
            saved: true,
        }
    }

    pub fn primitives(&self) -> &[DrawPrimitive] {
        &self.primitives
    }

    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    pub fn saved_watermark(&self) -> usize {
        self.saved_watermark
    }

    pub fn is_saved(&self) -> bool {
        self.saved
    }

    /// Appends a finished primitive
    pub fn push(&mut self, primitive: DrawPrimitive) {
        log::trace!("Appending {} primitive #{}", primitive.kind_name(), self.primitives.len());
        self.primitives.push(primitive);
        self.refresh_saved();
    }

    /// Drops everything and seeds the canvas with a white background fill
    pub fn reset(&mut self, size: Vec2) {
        self.primitives.clear();
        self.primitives.push(DrawPrimitive::background(size));
        self.refresh_saved();
    }

    /// Replaces everything with a single image primitive
    pub fn replace_with_image(&mut self, path: PathBuf) {
        self.primitives.clear();
        self.primitives.push(DrawPrimitive::Image { path });
        self.refresh_saved();
    }

    /// Records a successful save of the current sequence
    pub fn mark_saved(&mut self) {
        self.saved_watermark = self.primitives.len();
        self.saved = true;
    }

    /// Clears the saved flag when the sequence drifted from the watermark.
    ///
    /// The flag is sticky: it only turns back on in [`Self::mark_saved`]. The
    /// shrink branch ignores a lone background fill.
    fn refresh_saved(&mut self) {
        let count = self.primitives.len();
        let watermark = self.saved_watermark;
        if count > watermark || (watermark > count && count > 1) {
            self.saved = false;
        }
    }

    /// Paths of every image primitive, used to prune cached textures
    pub fn image_paths(&self) -> impl Iterator<Item = &std::path::Path> {
        self.primitives.iter().filter_map(|primitive| match primitive {
            DrawPrimitive::Image { path } => Some(path.as_path()),
            _ => None,
        })
    }
}
