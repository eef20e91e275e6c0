#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod components;
pub mod config;
pub mod document;
pub mod error;
pub mod file_io;
pub mod input;
pub mod interaction;
pub mod panels;
pub mod primitive;
pub mod session;
pub mod surface;
pub mod tool;

pub use app::PaintApp;
pub use config::AppConfig;
pub use document::Document;
pub use error::{PaintError, PaintResult};
pub use input::{InputEvent, InputHandler, InputLocation};
pub use interaction::Interaction;
pub use primitive::{DrawPrimitive, PolygonSides, ShapeStyle, StrokeKind};
pub use session::{ConfirmChoice, Notice, PendingAction, Session};
pub use surface::{ImageCache, PainterSurface, RasterSurface, Surface};
pub use tool::{ColorSlot, StrokeWidth, Tool, ToolSettings};
