use egui::Color32;
use serde::{Deserialize, Serialize};

/// Drawing instruments available in the toolbox
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tool {
    #[default]
    Brush,
    Pencil,
    Eraser,
    Fill,
    Line,
    Ellipse,
    Triangle,
    Rectangle,
    Pentagon,
    Hexagon,
    Octagon,
}

impl Tool {
    /// Every tool, in toolbox order
    pub const ALL: [Tool; 11] = [
        Tool::Brush,
        Tool::Pencil,
        Tool::Eraser,
        Tool::Fill,
        Tool::Line,
        Tool::Ellipse,
        Tool::Triangle,
        Tool::Rectangle,
        Tool::Pentagon,
        Tool::Hexagon,
        Tool::Octagon,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Tool::Brush => "Brush",
            Tool::Pencil => "Pencil",
            Tool::Eraser => "Eraser",
            Tool::Fill => "Fill",
            Tool::Line => "Line",
            Tool::Ellipse => "Ellipse",
            Tool::Triangle => "Triangle",
            Tool::Rectangle => "Rectangle",
            Tool::Pentagon => "Pentagon",
            Tool::Hexagon => "Hexagon",
            Tool::Octagon => "Octagon",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Tool::Brush => "🖌",
            Tool::Pencil => "✏",
            Tool::Eraser => "⌫",
            Tool::Fill => "▨",
            Tool::Line => "╱",
            Tool::Ellipse => "⬭",
            Tool::Triangle => "△",
            Tool::Rectangle => "▭",
            Tool::Pentagon => "⬠",
            Tool::Hexagon => "⬡",
            Tool::Octagon => "⯃",
        }
    }

    /// Tools whose pending primitive follows the pointer until release
    pub fn is_shape(self) -> bool {
        matches!(
            self,
            Tool::Line
                | Tool::Ellipse
                | Tool::Triangle
                | Tool::Rectangle
                | Tool::Pentagon
                | Tool::Hexagon
                | Tool::Octagon
        )
    }
}

/// Named stroke-width presets
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StrokeWidth {
    Thin,
    #[default]
    Medium,
    Large,
    ExtraLarge,
}

impl StrokeWidth {
    pub const ALL: [StrokeWidth; 4] = [
        StrokeWidth::Thin,
        StrokeWidth::Medium,
        StrokeWidth::Large,
        StrokeWidth::ExtraLarge,
    ];

    pub fn pixels(self) -> f32 {
        match self {
            StrokeWidth::Thin => 2.0,
            StrokeWidth::Medium => 3.0,
            StrokeWidth::Large => 5.0,
            StrokeWidth::ExtraLarge => 8.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StrokeWidth::Thin => "Thin",
            StrokeWidth::Medium => "Medium",
            StrokeWidth::Large => "Large",
            StrokeWidth::ExtraLarge => "Extra large",
        }
    }
}

/// Which of the two colour slots new primitives draw with
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColorSlot {
    #[default]
    Primary,
    Secondary,
}

/// The fixed palette shown in the toolbox.
pub const PALETTE: [(&str, Color32); 14] = [
    ("Red", Color32::from_rgb(255, 0, 0)),
    ("Orange", Color32::from_rgb(255, 165, 0)),
    ("Yellow", Color32::from_rgb(255, 255, 0)),
    ("Green", Color32::from_rgb(0, 128, 0)),
    ("Light blue", Color32::from_rgb(66, 170, 255)),
    ("Blue", Color32::from_rgb(0, 0, 255)),
    ("Purple", Color32::from_rgb(139, 0, 255)),
    ("Black", Color32::from_rgb(0, 0, 0)),
    ("White", Color32::from_rgb(255, 255, 255)),
    ("Light grey", Color32::from_rgb(187, 187, 187)),
    ("Dark grey", Color32::from_rgb(73, 66, 61)),
    ("Brown", Color32::from_rgb(150, 75, 0)),
    ("Dark red", Color32::from_rgb(139, 0, 0)),
    ("Pink", Color32::from_rgb(255, 192, 203)),
];

/// Tool, colour and width state shared by every new primitive.
///
/// Persisted between runs through eframe storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolSettings {
    pub tool: Tool,
    pub primary: Color32,
    pub secondary: Color32,
    pub active_slot: ColorSlot,
    pub width: StrokeWidth,
    pub fill_enabled: bool,
}

impl Default for ToolSettings {
    fn default() -> Self {
        Self {
            tool: Tool::Brush,
            primary: Color32::BLACK,
            secondary: Color32::WHITE,
            active_slot: ColorSlot::Primary,
            width: StrokeWidth::Medium,
            fill_enabled: false,
        }
    }
}

impl ToolSettings {
    /// Colour of the active slot, used for outlines, strokes and fills
    pub fn active_color(&self) -> Color32 {
        match self.active_slot {
            ColorSlot::Primary => self.primary,
            ColorSlot::Secondary => self.secondary,
        }
    }

    /// Colour of the inactive slot, used to fill shapes
    pub fn other_color(&self) -> Color32 {
        match self.active_slot {
            ColorSlot::Primary => self.secondary,
            ColorSlot::Secondary => self.primary,
        }
    }

    /// Replaces the colour held by the active slot
    pub fn set_active_color(&mut self, color: Color32) {
        match self.active_slot {
            ColorSlot::Primary => self.primary = color,
            ColorSlot::Secondary => self.secondary = color,
        }
    }

    pub fn active_color_mut(&mut self) -> &mut Color32 {
        match self.active_slot {
            ColorSlot::Primary => &mut self.primary,
            ColorSlot::Secondary => &mut self.secondary,
        }
    }
}
