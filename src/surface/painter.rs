use egui::{
    Color32, ColorImage, Context, Painter, Pos2, Rect, Shape, TextureHandle, TextureOptions, Vec2,
};
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::path::{Path, PathBuf};

use super::{Cap, Pen, Surface};
use crate::error::{PaintError, PaintResult};
use crate::primitive::geometry::segment_quad;

/// Textures for image primitives, keyed by source path.
///
/// Image primitives are decoded at render time; caching the texture keeps the
/// per-frame replay from hitting the disk. Failed decodes are remembered so the
/// error is reported once per path.
pub struct ImageCache {
    textures: HashMap<PathBuf, TextureHandle>,
    failed: HashMap<PathBuf, String>,
}

impl ImageCache {
    pub fn new() -> Self {
        Self {
            textures: HashMap::new(),
            failed: HashMap::new(),
        }
    }

    /// Gets or decodes the texture for `path`
    pub fn texture(&mut self, ctx: &Context, path: &Path) -> PaintResult<&TextureHandle> {
        if let Some(reason) = self.failed.get(path) {
            return Err(PaintError::Unavailable {
                path: path.to_path_buf(),
                reason: reason.clone(),
            });
        }
        match self.textures.entry(path.to_path_buf()) {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(entry) => match decode_color_image(path) {
                Ok(image) => {
                    log::debug!(
                        "Uploading texture for {} ({}x{})",
                        path.display(),
                        image.size[0],
                        image.size[1]
                    );
                    let name = format!("image:{}", path.display());
                    Ok(entry.insert(ctx.load_texture(name, image, TextureOptions::LINEAR)))
                }
                Err(err) => {
                    log::error!("Failed to decode image {}: {}", path.display(), err);
                    self.failed.insert(path.to_path_buf(), err.to_string());
                    Err(err)
                }
            },
        }
    }

    /// Drops textures no longer referenced by the document
    pub fn retain_paths<'a>(&mut self, live: impl IntoIterator<Item = &'a Path>) {
        let live: Vec<&Path> = live.into_iter().collect();
        self.textures.retain(|path, _| live.contains(&path.as_path()));
        self.failed.retain(|path, _| live.contains(&path.as_path()));
    }

    pub fn clear(&mut self) {
        self.textures.clear();
        self.failed.clear();
    }
}

impl Default for ImageCache {
    fn default() -> Self {
        Self::new()
    }
}

fn decode_color_image(path: &Path) -> PaintResult<ColorImage> {
    let decoded = image::open(path).map_err(|source| PaintError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    let rgba = decoded.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    Ok(ColorImage::from_rgba_unmultiplied(size, rgba.as_flat_samples().as_slice()))
}

/// Replays primitives into an egui painter, offset to the canvas rect on screen
pub struct PainterSurface<'a> {
    painter: &'a Painter,
    origin: Pos2,
    extent: Vec2,
    images: &'a mut ImageCache,
}

impl<'a> PainterSurface<'a> {
    pub fn new(painter: &'a Painter, canvas_rect: Rect, images: &'a mut ImageCache) -> Self {
        Self {
            painter,
            origin: canvas_rect.min,
            extent: canvas_rect.size(),
            images,
        }
    }

    fn to_screen(&self, pos: Pos2) -> Pos2 {
        self.origin + pos.to_vec2()
    }
}

impl Surface for PainterSurface<'_> {
    fn extent(&self) -> Vec2 {
        self.extent
    }

    fn stroke_segment(&mut self, start: Pos2, end: Pos2, pen: Pen) {
        let a = self.to_screen(start);
        let b = self.to_screen(end);
        match pen.cap {
            Cap::Round => {
                let radius = pen.width / 2.0;
                self.painter.line_segment([a, b], egui::Stroke::new(pen.width, pen.color));
                self.painter.circle_filled(a, radius, pen.color);
                self.painter.circle_filled(b, radius, pen.color);
            }
            Cap::Square => {
                let quad = segment_quad(a, b, pen.width.max(1.0));
                self.painter
                    .add(Shape::convex_polygon(quad.to_vec(), pen.color, egui::Stroke::NONE));
            }
        }
    }

    fn draw_polygon(&mut self, points: &[Pos2], pen: Pen, fill: Option<Color32>) {
        let screen: Vec<Pos2> = points.iter().map(|p| self.to_screen(*p)).collect();
        if let Some(fill) = fill {
            self.painter
                .add(Shape::convex_polygon(screen.clone(), fill, egui::Stroke::NONE));
        }
        self.painter
            .add(Shape::closed_line(screen, egui::Stroke::new(pen.width, pen.color)));
    }

    fn fill_rect(&mut self, rect: Rect, color: Color32) {
        let rect = rect.translate(self.origin.to_vec2());
        self.painter.rect_filled(rect, 0.0, color);
    }

    fn draw_image(&mut self, path: &Path, rect: Rect) -> PaintResult<()> {
        let rect = rect.translate(self.origin.to_vec2());
        match self.images.texture(self.painter.ctx(), path) {
            Ok(texture) => {
                let uv = Rect::from_min_max(Pos2::ZERO, Pos2::new(1.0, 1.0));
                self.painter.image(texture.id(), rect, uv, Color32::WHITE);
                Ok(())
            }
            Err(err) => {
                self.painter.rect_filled(rect, 0.0, Color32::from_gray(200));
                Err(err)
            }
        }
    }
}
