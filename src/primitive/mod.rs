use egui::{Color32, Pos2, Rect, Vec2};
use std::path::PathBuf;

pub mod geometry;

pub use geometry::PolygonSides;

use crate::error::PaintResult;
use crate::surface::{Pen, Surface};
use crate::tool::{Tool, ToolSettings};

/// Width of the pencil, independent of the selected preset
pub const PENCIL_WIDTH: f32 = 1.0;

/// Extra width the eraser adds on top of the selected preset
pub const ERASER_EXTRA_WIDTH: f32 = 2.0;

/// Freehand instrument a stroke segment was drawn with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrokeKind {
    Brush,
    Pencil,
    Eraser,
}

impl StrokeKind {
    /// The stroke a freehand tool lays down; `None` for fills and shapes
    pub fn for_tool(tool: Tool) -> Option<Self> {
        match tool {
            Tool::Brush => Some(StrokeKind::Brush),
            Tool::Pencil => Some(StrokeKind::Pencil),
            Tool::Eraser => Some(StrokeKind::Eraser),
            _ => None,
        }
    }
}

/// Outline and fill shared by the box-shaped primitives
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeStyle {
    pub start: Pos2,
    pub end: Pos2,
    pub color: Color32,
    pub width: f32,
    /// Interior colour; `None` when fill was disabled at creation
    pub fill: Option<Color32>,
}

impl ShapeStyle {
    pub fn bounding_box(&self) -> Rect {
        Rect::from_two_pos(self.start, self.end)
    }

    fn pen(&self) -> Pen {
        Pen::new(self.color, self.width)
    }
}

/// One recorded drawing operation.
///
/// The document replays these in order on every repaint and on save. Width and
/// colour policies (pencil width, eraser colour) are resolved when the record
/// is built, so rendering never looks at the current tool settings.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawPrimitive {
    Stroke {
        kind: StrokeKind,
        start: Pos2,
        end: Pos2,
        color: Color32,
        width: f32,
    },
    Line {
        start: Pos2,
        end: Pos2,
        color: Color32,
        width: f32,
    },
    Ellipse(ShapeStyle),
    Rectangle(ShapeStyle),
    Polygon {
        sides: PolygonSides,
        style: ShapeStyle,
    },
    /// Solid rectangle covering the canvas as it was when the fill was made
    Fill {
        size: Vec2,
        color: Color32,
    },
    /// Image file stretched over the whole target surface
    Image {
        path: PathBuf,
    },
}

impl DrawPrimitive {
    /// Creates the stroke segment a freehand tool draws between two points
    pub fn stroke(kind: StrokeKind, start: Pos2, end: Pos2, settings: &ToolSettings) -> Self {
        let (color, width) = match kind {
            StrokeKind::Brush => (settings.active_color(), settings.width.pixels()),
            StrokeKind::Pencil => (settings.active_color(), PENCIL_WIDTH),
            StrokeKind::Eraser => (Color32::WHITE, settings.width.pixels() + ERASER_EXTRA_WIDTH),
        };
        DrawPrimitive::Stroke {
            kind,
            start,
            end,
            color,
            width,
        }
    }

    /// Creates the primitive a tool starts on pointer-down at `pos`.
    ///
    /// `canvas_size` is only used by the fill tool.
    pub fn begin(tool: Tool, pos: Pos2, settings: &ToolSettings, canvas_size: Vec2) -> Self {
        let style = ShapeStyle {
            start: pos,
            end: pos,
            color: settings.active_color(),
            width: settings.width.pixels(),
            fill: settings.fill_enabled.then(|| settings.other_color()),
        };
        match tool {
            Tool::Brush => Self::stroke(StrokeKind::Brush, pos, pos, settings),
            Tool::Pencil => Self::stroke(StrokeKind::Pencil, pos, pos, settings),
            Tool::Eraser => Self::stroke(StrokeKind::Eraser, pos, pos, settings),
            Tool::Fill => DrawPrimitive::Fill {
                size: canvas_size,
                color: settings.active_color(),
            },
            Tool::Line => DrawPrimitive::Line {
                start: pos,
                end: pos,
                color: settings.active_color(),
                width: settings.width.pixels(),
            },
            Tool::Ellipse => DrawPrimitive::Ellipse(style),
            Tool::Rectangle => DrawPrimitive::Rectangle(style),
            Tool::Triangle => DrawPrimitive::Polygon {
                sides: PolygonSides::Triangle,
                style,
            },
            Tool::Pentagon => DrawPrimitive::Polygon {
                sides: PolygonSides::Pentagon,
                style,
            },
            Tool::Hexagon => DrawPrimitive::Polygon {
                sides: PolygonSides::Hexagon,
                style,
            },
            Tool::Octagon => DrawPrimitive::Polygon {
                sides: PolygonSides::Octagon,
                style,
            },
        }
    }

    /// The white full-canvas fill a fresh canvas is seeded with
    pub fn background(size: Vec2) -> Self {
        DrawPrimitive::Fill {
            size,
            color: Color32::WHITE,
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            DrawPrimitive::Stroke { kind: StrokeKind::Brush, .. } => "brush",
            DrawPrimitive::Stroke { kind: StrokeKind::Pencil, .. } => "pencil",
            DrawPrimitive::Stroke { kind: StrokeKind::Eraser, .. } => "eraser",
            DrawPrimitive::Line { .. } => "line",
            DrawPrimitive::Ellipse(_) => "ellipse",
            DrawPrimitive::Rectangle(_) => "rectangle",
            DrawPrimitive::Polygon { .. } => "polygon",
            DrawPrimitive::Fill { .. } => "fill",
            DrawPrimitive::Image { .. } => "image",
        }
    }

    pub fn start(&self) -> Option<Pos2> {
        match self {
            DrawPrimitive::Stroke { start, .. } | DrawPrimitive::Line { start, .. } => Some(*start),
            DrawPrimitive::Ellipse(style)
            | DrawPrimitive::Rectangle(style)
            | DrawPrimitive::Polygon { style, .. } => Some(style.start),
            DrawPrimitive::Fill { .. } | DrawPrimitive::Image { .. } => None,
        }
    }

    pub fn end(&self) -> Option<Pos2> {
        match self {
            DrawPrimitive::Stroke { end, .. } | DrawPrimitive::Line { end, .. } => Some(*end),
            DrawPrimitive::Ellipse(style)
            | DrawPrimitive::Rectangle(style)
            | DrawPrimitive::Polygon { style, .. } => Some(style.end),
            DrawPrimitive::Fill { .. } | DrawPrimitive::Image { .. } => None,
        }
    }

    /// Moves the live end point of a primitive still being dragged.
    /// Has no effect on fills and images.
    pub(crate) fn set_end(&mut self, pos: Pos2) {
        match self {
            DrawPrimitive::Stroke { end, .. } | DrawPrimitive::Line { end, .. } => *end = pos,
            DrawPrimitive::Ellipse(style)
            | DrawPrimitive::Rectangle(style)
            | DrawPrimitive::Polygon { style, .. } => style.end = pos,
            DrawPrimitive::Fill { .. } | DrawPrimitive::Image { .. } => {}
        }
    }

    /// Draws this primitive onto `surface`
    pub fn render(&self, surface: &mut dyn Surface) -> PaintResult<()> {
        match self {
            DrawPrimitive::Stroke {
                kind,
                start,
                end,
                color,
                width,
            } => {
                let pen = match kind {
                    StrokeKind::Brush => Pen::round(*color, *width),
                    StrokeKind::Pencil | StrokeKind::Eraser => Pen::new(*color, *width),
                };
                surface.stroke_segment(*start, *end, pen);
            }
            DrawPrimitive::Line {
                start,
                end,
                color,
                width,
            } => surface.stroke_segment(*start, *end, Pen::new(*color, *width)),
            DrawPrimitive::Ellipse(style) => {
                let points = geometry::ellipse_vertices(style.bounding_box());
                surface.draw_polygon(&points, style.pen(), style.fill);
            }
            DrawPrimitive::Rectangle(style) => {
                let points = geometry::rectangle_vertices(style.start, style.end);
                surface.draw_polygon(&points, style.pen(), style.fill);
            }
            DrawPrimitive::Polygon { sides, style } => {
                let points = geometry::polygon_vertices(*sides, style.start, style.end);
                surface.draw_polygon(&points, style.pen(), style.fill);
            }
            DrawPrimitive::Fill { size, color } => {
                surface.fill_rect(Rect::from_min_size(Pos2::ZERO, *size), *color);
            }
            DrawPrimitive::Image { path } => {
                let rect = Rect::from_min_size(Pos2::ZERO, surface.extent());
                surface.draw_image(path, rect)?;
            }
        }
        Ok(())
    }
}

/// Renders `primitives` in order. Stops at the first failing primitive.
pub fn render_all<'a>(
    primitives: impl IntoIterator<Item = &'a DrawPrimitive>,
    surface: &mut dyn Surface,
) -> PaintResult<()> {
    for primitive in primitives {
        primitive.render(surface)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::RasterSurface;
    use crate::tool::{ColorSlot, StrokeWidth};
    use egui::pos2;

    #[test]
    fn test_eraser_policy() {
        let settings = ToolSettings {
            width: StrokeWidth::Medium,
            primary: Color32::RED,
            ..Default::default()
        };
        let eraser =
            DrawPrimitive::stroke(StrokeKind::Eraser, Pos2::ZERO, pos2(5.0, 5.0), &settings);
        match eraser {
            DrawPrimitive::Stroke { color, width, .. } => {
                assert_eq!(color, Color32::WHITE);
                assert_eq!(width, 5.0);
            }
            other => panic!("unexpected primitive {other:?}"),
        }
    }

    #[test]
    fn test_only_freehand_tools_stroke() {
        let freehand: Vec<Tool> = Tool::ALL
            .into_iter()
            .filter(|tool| StrokeKind::for_tool(*tool).is_some())
            .collect();
        assert_eq!(freehand, vec![Tool::Brush, Tool::Pencil, Tool::Eraser]);
        assert_eq!(StrokeKind::for_tool(Tool::Eraser), Some(StrokeKind::Eraser));
        assert_eq!(StrokeKind::for_tool(Tool::Fill), None);
        assert_eq!(StrokeKind::for_tool(Tool::Line), None);
    }

    #[test]
    fn test_pencil_is_one_pixel() {
        let settings = ToolSettings {
            width: StrokeWidth::ExtraLarge,
            ..Default::default()
        };
        let pencil = DrawPrimitive::begin(Tool::Pencil, pos2(3.0, 3.0), &settings, Vec2::ZERO);
        match pencil {
            DrawPrimitive::Stroke { kind, width, .. } => {
                assert_eq!(kind, StrokeKind::Pencil);
                assert_eq!(width, PENCIL_WIDTH);
            }
            other => panic!("unexpected primitive {other:?}"),
        }
    }

    #[test]
    fn test_shape_fill_uses_other_slot() {
        let settings = ToolSettings {
            primary: Color32::RED,
            secondary: Color32::BLUE,
            active_slot: ColorSlot::Secondary,
            fill_enabled: true,
            ..Default::default()
        };
        match DrawPrimitive::begin(Tool::Ellipse, pos2(1.0, 1.0), &settings, Vec2::ZERO) {
            DrawPrimitive::Ellipse(style) => {
                assert_eq!(style.color, Color32::BLUE);
                assert_eq!(style.fill, Some(Color32::RED));
            }
            other => panic!("unexpected primitive {other:?}"),
        }
    }

    #[test]
    fn test_fill_covers_canvas_size() {
        let settings = ToolSettings::default();
        let fill = DrawPrimitive::begin(Tool::Fill, pos2(7.0, 7.0), &settings, Vec2::new(4.0, 4.0));
        assert_eq!(fill, DrawPrimitive::Fill { size: Vec2::new(4.0, 4.0), color: Color32::BLACK });

        let mut surface = RasterSurface::new(4, 4);
        fill.render(&mut surface).unwrap();
        assert!(surface.image().pixels().all(|p| p.0 == [0, 0, 0, 255]));
    }

    #[test]
    fn test_set_end_ignores_fill() {
        let mut fill = DrawPrimitive::background(Vec2::new(2.0, 2.0));
        fill.set_end(pos2(9.0, 9.0));
        assert_eq!(fill, DrawPrimitive::background(Vec2::new(2.0, 2.0)));
        assert_eq!(fill.end(), None);
    }

    #[test]
    fn test_later_primitives_paint_over_earlier() {
        let settings = ToolSettings::default();
        let mut red = DrawPrimitive::begin(Tool::Fill, Pos2::ZERO, &settings, Vec2::new(6.0, 6.0));
        if let DrawPrimitive::Fill { color, .. } = &mut red {
            *color = Color32::RED;
        }
        let blue = DrawPrimitive::Fill { size: Vec2::new(3.0, 6.0), color: Color32::BLUE };

        let mut surface = RasterSurface::new(6, 6);
        render_all([&red, &blue], &mut surface).unwrap();
        assert_eq!(surface.image().get_pixel(1, 1).0, [0, 0, 255, 255]);
        assert_eq!(surface.image().get_pixel(4, 1).0, [255, 0, 0, 255]);
    }
}
