use eframe::egui;
use image::{DynamicImage, ImageFormat, RgbaImage};
use std::path::{Path, PathBuf};

use crate::error::{PaintError, PaintResult};
use crate::primitive::{DrawPrimitive, render_all};
use crate::surface::RasterSurface;

/// Filters offered by the open and save dialogs
pub const DIALOG_FILTERS: [(&str, &[&str]); 3] = [
    ("PNG image", &["png"]),
    ("JPEG image", &["jpg", "jpeg"]),
    ("BMP image", &["bmp"]),
];

/// Bitmap formats the canvas can be written to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormatKind {
    Png,
    Jpeg,
    Bmp,
}

impl ImageFormatKind {
    /// Picks the format from the file extension. A missing extension means PNG.
    pub fn from_path(path: &Path) -> PaintResult<Self> {
        let Some(ext) = path.extension() else {
            return Ok(ImageFormatKind::Png);
        };
        match ext.to_string_lossy().to_lowercase().as_str() {
            "png" => Ok(ImageFormatKind::Png),
            "jpg" | "jpeg" => Ok(ImageFormatKind::Jpeg),
            "bmp" => Ok(ImageFormatKind::Bmp),
            other => Err(PaintError::UnsupportedFormat(format!(".{other}"))),
        }
    }

    pub fn image_format(self) -> ImageFormat {
        match self {
            ImageFormatKind::Png => ImageFormat::Png,
            ImageFormatKind::Jpeg => ImageFormat::Jpeg,
            ImageFormatKind::Bmp => ImageFormat::Bmp,
        }
    }
}

/// Whether `path` has one of the extensions the canvas can open
pub fn is_supported_image(path: &Path) -> bool {
    path.extension().is_some_and(|ext| {
        let ext = ext.to_string_lossy().to_lowercase();
        DIALOG_FILTERS
            .iter()
            .any(|(_, extensions)| extensions.contains(&ext.as_str()))
    })
}

/// Renders `primitives` in order onto a white bitmap of `width` x `height`
pub fn flatten<'a>(
    primitives: impl IntoIterator<Item = &'a DrawPrimitive>,
    width: u32,
    height: u32,
) -> PaintResult<RgbaImage> {
    let mut surface = RasterSurface::new(width, height);
    render_all(primitives, &mut surface)?;
    Ok(surface.into_image())
}

/// Flattens the canvas and writes it to `path` as RGB
pub fn save_image<'a>(
    path: &Path,
    primitives: impl IntoIterator<Item = &'a DrawPrimitive>,
    width: u32,
    height: u32,
) -> PaintResult<()> {
    let format = ImageFormatKind::from_path(path)?;
    let bitmap = flatten(primitives, width, height)?;
    let rgb = DynamicImage::ImageRgba8(bitmap).to_rgb8();
    rgb.save_with_format(path, format.image_format())
        .map_err(|source| PaintError::Encode {
            path: path.to_path_buf(),
            source,
        })?;
    log::info!("Saved {}x{} canvas to {} as {:?}", width, height, path.display(), format);
    Ok(())
}

/// Checks that `path` decodes as an image, returning its dimensions
pub fn validate_image(path: &Path) -> PaintResult<(u32, u32)> {
    let decoded = image::open(path).map_err(|source| PaintError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("Validated {} ({}x{})", path.display(), decoded.width(), decoded.height());
    Ok((decoded.width(), decoded.height()))
}

/// Picks up image files dropped onto the window
#[derive(Debug, Default)]
pub struct DropHandler {
    hovering: bool,
}

impl DropHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the first supported image dropped this frame, if any
    pub fn take_dropped_image(&self, ctx: &egui::Context) -> Option<PathBuf> {
        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        if dropped.is_empty() {
            return None;
        }

        let mut chosen = None;
        for file in &dropped {
            match &file.path {
                Some(path) if is_supported_image(path) => {
                    if chosen.is_none() {
                        chosen = Some(path.clone());
                    }
                }
                Some(path) => {
                    log::warn!("Dropped file is not a supported type: {}", path.display())
                }
                None => log::warn!("Dropped file has no accessible path: {}", file.name),
            }
        }

        if let Some(path) = &chosen {
            log::info!("Opening dropped image {}", path.display());
        }
        chosen
    }

    /// Dims the window and lists the files while they hover over it
    pub fn preview_files_being_dropped(&mut self, ctx: &egui::Context) {
        use egui::{Align2, Color32, Id, LayerId, Order, TextStyle};

        let hovering = !ctx.input(|i| i.raw.hovered_files.is_empty());
        if hovering != self.hovering {
            log::debug!("Files hovering over window: {}", hovering);
            self.hovering = hovering;
        }
        if !hovering {
            return;
        }

        let text = ctx.input(|i| {
            let mut text = "Drop an image to open it:\n".to_owned();
            for file in &i.raw.hovered_files {
                if let Some(path) = &file.path {
                    text += &format!("\n{}", path.display());
                } else {
                    text += "\n(Path not available)";
                }
            }
            text
        });

        let painter =
            ctx.layer_painter(LayerId::new(Order::Foreground, Id::new("file_drop_target")));
        let screen_rect = ctx.screen_rect();
        painter.rect_filled(screen_rect, 0.0, Color32::from_black_alpha(192));
        painter.text(
            screen_rect.center(),
            Align2::CENTER_CENTER,
            text,
            TextStyle::Heading.resolve(&ctx.style()),
            Color32::WHITE,
        );
    }
}
