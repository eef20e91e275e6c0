use egui::{Color32, Pos2, Rect, Vec2};
use image::{Rgba, RgbaImage, imageops::FilterType};
use std::path::Path;

use super::{Cap, Pen, Surface};
use crate::error::{PaintError, PaintResult};
use crate::primitive::geometry::segment_quad;

/// Software rasterizer over an RGBA bitmap, used to flatten the canvas on save.
///
/// Pixel `(x, y)` is sampled at the integer coordinate `(x, y)`, so a point
/// primitive at `(5, 5)` lands exactly on pixel `(5, 5)`.
pub struct RasterSurface {
    image: RgbaImage,
}

impl RasterSurface {
    /// Creates a white bitmap of the given size
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_background(width, height, Color32::WHITE)
    }

    pub fn with_background(width: u32, height: u32, color: Color32) -> Self {
        Self {
            image: RgbaImage::from_pixel(width, height, to_rgba(color)),
        }
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    fn put(&mut self, x: i32, y: i32, color: Color32) {
        if x < 0 || y < 0 || x >= self.image.width() as i32 || y >= self.image.height() as i32 {
            return;
        }
        blend_pixel(&mut self.image, x as u32, y as u32, color);
    }

    /// Even-odd scanline fill
    fn fill_polygon(&mut self, points: &[Pos2], color: Color32) {
        if points.len() < 3 {
            return;
        }
        let height = self.image.height() as i32;
        let min_y = points.iter().map(|p| p.y).fold(f32::INFINITY, f32::min);
        let max_y = points.iter().map(|p| p.y).fold(f32::NEG_INFINITY, f32::max);
        let first_row = (min_y.ceil() as i32).max(0);
        let last_row = (max_y.floor() as i32).min(height - 1);

        let mut crossings = Vec::with_capacity(points.len());
        for row in first_row..=last_row {
            let fy = row as f32;
            crossings.clear();
            for (i, a) in points.iter().enumerate() {
                let b = points[(i + 1) % points.len()];
                let spans_row = (a.y <= fy && b.y > fy) || (b.y <= fy && a.y > fy);
                if spans_row {
                    crossings.push(a.x + (fy - a.y) * (b.x - a.x) / (b.y - a.y));
                }
            }
            crossings.sort_by(f32::total_cmp);
            for pair in crossings.chunks_exact(2) {
                let from = pair[0].ceil() as i32;
                let to = pair[1].floor() as i32;
                for x in from..=to {
                    self.put(x, row, color);
                }
            }
        }
    }

    fn stamp_disc(&mut self, center: Pos2, radius: f32, color: Color32) {
        let radius_sq = radius * radius;
        let min_x = (center.x - radius).floor() as i32;
        let max_x = (center.x + radius).ceil() as i32;
        let min_y = (center.y - radius).floor() as i32;
        let max_y = (center.y + radius).ceil() as i32;
        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let dx = x as f32 - center.x;
                let dy = y as f32 - center.y;
                if dx * dx + dy * dy <= radius_sq {
                    self.put(x, y, color);
                }
            }
        }
    }
}

impl Surface for RasterSurface {
    fn extent(&self) -> Vec2 {
        Vec2::new(self.image.width() as f32, self.image.height() as f32)
    }

    fn stroke_segment(&mut self, start: Pos2, end: Pos2, pen: Pen) {
        match pen.cap {
            Cap::Square => {
                let quad = segment_quad(start, end, pen.width.max(1.0));
                self.fill_polygon(&quad, pen.color);
            }
            Cap::Round => {
                let delta = end - start;
                let steps = delta.x.abs().max(delta.y.abs()).ceil().max(1.0) as i32;
                let radius = (pen.width / 2.0).max(0.5);
                for i in 0..=steps {
                    let t = i as f32 / steps as f32;
                    self.stamp_disc(start + delta * t, radius, pen.color);
                }
            }
        }
    }

    fn draw_polygon(&mut self, points: &[Pos2], pen: Pen, fill: Option<Color32>) {
        if let Some(fill) = fill {
            self.fill_polygon(points, fill);
        }
        for (i, a) in points.iter().enumerate() {
            let b = points[(i + 1) % points.len()];
            self.stroke_segment(*a, b, pen);
        }
    }

    fn fill_rect(&mut self, rect: Rect, color: Color32) {
        let width = self.image.width() as i32;
        let height = self.image.height() as i32;
        let min_x = (rect.min.x.ceil() as i32).max(0);
        let max_x = (rect.max.x.ceil() as i32).min(width);
        let min_y = (rect.min.y.ceil() as i32).max(0);
        let max_y = (rect.max.y.ceil() as i32).min(height);
        for y in min_y..max_y {
            for x in min_x..max_x {
                self.put(x, y, color);
            }
        }
    }

    fn draw_image(&mut self, path: &Path, rect: Rect) -> PaintResult<()> {
        let decoded = image::open(path).map_err(|source| PaintError::Decode {
            path: path.to_path_buf(),
            source,
        })?;
        let target_w = rect.width().round().max(0.0) as u32;
        let target_h = rect.height().round().max(0.0) as u32;
        if target_w == 0 || target_h == 0 {
            return Ok(());
        }

        let mut pixels = decoded.to_rgba8();
        if pixels.dimensions() != (target_w, target_h) {
            pixels = image::imageops::resize(&pixels, target_w, target_h, FilterType::Triangle);
        }

        let origin_x = rect.min.x.round() as i32;
        let origin_y = rect.min.y.round() as i32;
        for (x, y, pixel) in pixels.enumerate_pixels() {
            let [r, g, b, a] = pixel.0;
            self.put(
                origin_x + x as i32,
                origin_y + y as i32,
                Color32::from_rgba_unmultiplied(r, g, b, a),
            );
        }
        Ok(())
    }
}

fn to_rgba(color: Color32) -> Rgba<u8> {
    let [r, g, b, a] = color.to_srgba_unmultiplied();
    Rgba([r, g, b, a])
}

/// Source-over blend of `color` onto the pixel at `(x, y)`
fn blend_pixel(img: &mut RgbaImage, x: u32, y: u32, color: Color32) {
    let [r, g, b, a] = color.to_srgba_unmultiplied();
    if a == 0 {
        return;
    }
    if a == u8::MAX {
        img.put_pixel(x, y, Rgba([r, g, b, a]));
        return;
    }
    let dst = img.get_pixel(x, y).0;
    let src_a = a as f32 / 255.0;
    let dst_a = dst[3] as f32 / 255.0;
    let out_a = src_a + dst_a * (1.0 - src_a);
    if out_a <= 0.0 {
        return;
    }
    let blend = |src: u8, dst: u8| {
        let src_f = src as f32 / 255.0;
        let dst_f = dst as f32 / 255.0;
        ((src_f * src_a + dst_f * dst_a * (1.0 - src_a)) / out_a * 255.0)
            .round()
            .clamp(0.0, 255.0) as u8
    };
    img.put_pixel(
        x,
        y,
        Rgba([
            blend(r, dst[0]),
            blend(g, dst[1]),
            blend(b, dst[2]),
            (out_a * 255.0).round() as u8,
        ]),
    );
}
