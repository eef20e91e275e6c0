use egui::{Pos2, Vec2};

use crate::document::Document;
use crate::primitive::{DrawPrimitive, StrokeKind};
use crate::tool::{Tool, ToolSettings};

/// Pointer-driven state machine turning drags into primitives.
///
/// ```text
///            pointer down               pointer up
///   Idle ─────────────────► Dragging ─────────────► Idle
///     ▲ │                     │  ▲                  (pending committed)
///     │ │ fill tool           └──┘ pointer move
///     └─┘ (appended at once)       (extend / commit + restart / move end)
/// ```
///
/// The primitive being drawn lives here until it is committed, so the
/// document itself only ever grows by whole, finished records.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Interaction {
    #[default]
    Idle,
    Dragging {
        tool: Tool,
        /// Primitive under construction, rendered on top of the document
        pending: DrawPrimitive,
        /// Last pointer position seen during this drag
        last: Pos2,
        /// Whether a freehand dot has been stretched into its first segment
        extended: bool,
    },
}

impl Interaction {
    pub fn is_dragging(&self) -> bool {
        matches!(self, Interaction::Dragging { .. })
    }

    pub fn state_name(&self) -> &'static str {
        match self {
            Interaction::Idle => "Idle",
            Interaction::Dragging { .. } => "Dragging",
        }
    }

    /// The in-progress primitive, if a drag is underway
    pub fn pending(&self) -> Option<&DrawPrimitive> {
        match self {
            Interaction::Dragging { pending, .. } => Some(pending),
            Interaction::Idle => None,
        }
    }

    pub fn pointer_down(
        &mut self,
        pos: Pos2,
        settings: &ToolSettings,
        canvas_size: Vec2,
        doc: &mut Document,
    ) {
        // A missed release must not lose what was drawn.
        self.finish(doc);

        let primitive = DrawPrimitive::begin(settings.tool, pos, settings, canvas_size);
        if settings.tool == Tool::Fill {
            log::debug!("Fill with {:?}", settings.active_color());
            doc.push(primitive);
            return;
        }

        *self = Interaction::Dragging {
            tool: settings.tool,
            pending: primitive,
            last: pos,
            extended: false,
        };
    }

    pub fn pointer_move(&mut self, pos: Pos2, settings: &ToolSettings, doc: &mut Document) {
        let Interaction::Dragging {
            tool,
            pending,
            last,
            extended,
        } = self
        else {
            return;
        };
        if pos == *last {
            return;
        }

        match StrokeKind::for_tool(*tool) {
            Some(kind) => {
                if *extended {
                    let next = DrawPrimitive::stroke(kind, *last, pos, settings);
                    doc.push(std::mem::replace(pending, next));
                } else {
                    pending.set_end(pos);
                    *extended = true;
                }
            }
            None => pending.set_end(pos),
        }
        *last = pos;
    }

    pub fn pointer_up(&mut self, pos: Pos2, settings: &ToolSettings, doc: &mut Document) {
        self.pointer_move(pos, settings, doc);
        self.finish(doc);
    }

    /// Commits the pending primitive, if any, and returns to idle
    pub fn finish(&mut self, doc: &mut Document) {
        if let Interaction::Dragging { pending, .. } = std::mem::take(self) {
            doc.push(pending);
        }
    }

    /// Drops the pending primitive without committing it
    pub fn abandon(&mut self) {
        *self = Interaction::Idle;
    }
}
