use egui::{Color32, Pos2, Rect, Vec2};
use std::path::Path;

use crate::error::PaintResult;

mod painter;
mod raster;

pub use painter::{ImageCache, PainterSurface};
pub use raster::RasterSurface;

/// How the ends of a stroked segment are finished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cap {
    /// Half a disc past each end point
    Round,
    /// Half a square past each end point
    Square,
}

/// Outline settings for a stroked segment or polygon edge
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pen {
    pub color: Color32,
    pub width: f32,
    pub cap: Cap,
}

impl Pen {
    pub fn new(color: Color32, width: f32) -> Self {
        Self {
            color,
            width,
            cap: Cap::Square,
        }
    }

    pub fn round(color: Color32, width: f32) -> Self {
        Self {
            color,
            width,
            cap: Cap::Round,
        }
    }
}

/// Target of [`crate::DrawPrimitive::render`]. Coordinates are canvas pixels
/// with the origin in the top-left corner.
///
/// The same primitive sequence is replayed onto the on-screen painter every
/// frame and onto an off-screen bitmap when the canvas is saved.
pub trait Surface {
    /// Size of the drawable area in pixels
    fn extent(&self) -> Vec2;

    /// Draw a straight segment; a zero-length segment draws a dot
    fn stroke_segment(&mut self, start: Pos2, end: Pos2, pen: Pen);

    /// Fill the closed polygon (if `fill` is set), then outline it with `pen`
    fn draw_polygon(&mut self, points: &[Pos2], pen: Pen, fill: Option<Color32>);

    /// Fill an axis-aligned rectangle without an outline
    fn fill_rect(&mut self, rect: Rect, color: Color32);

    /// Draw the image stored at `path` stretched over `rect`
    fn draw_image(&mut self, path: &Path, rect: Rect) -> PaintResult<()>;
}
