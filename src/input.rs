use egui::{Context, PointerButton, Pos2, Rect};

use crate::session::Session;

/// Where a pointer event happened, in canvas pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputLocation {
    /// Position relative to the canvas origin
    pub position: Pos2,
    /// Whether this position is within the canvas bounds
    pub is_in_canvas: bool,
}

/// Primary-button pointer events the canvas reacts to
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    PointerDown { location: InputLocation },
    PointerMove { location: InputLocation },
    PointerUp { location: InputLocation },
}

impl InputEvent {
    pub fn location(&self) -> InputLocation {
        match self {
            InputEvent::PointerDown { location }
            | InputEvent::PointerMove { location }
            | InputEvent::PointerUp { location } => *location,
        }
    }

    /// Forwards the event to the session's drawing state machine
    pub fn apply(&self, session: &mut Session) {
        let position = self.location().position;
        match self {
            InputEvent::PointerDown { .. } => session.pointer_down(position),
            InputEvent::PointerMove { .. } => session.pointer_move(position),
            InputEvent::PointerUp { .. } => session.pointer_up(position),
        }
    }
}

/// Turns raw egui pointer input into canvas events.
///
/// A drag only starts on the canvas, but once started it keeps reporting
/// moves and the release even when the pointer leaves the canvas.
#[derive(Debug)]
pub struct InputHandler {
    last_pointer_pos: Option<Pos2>,
    canvas_rect: Rect,
    dragging: bool,
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new(Rect::NOTHING)
    }
}

impl InputHandler {
    pub fn new(canvas_rect: Rect) -> Self {
        Self {
            last_pointer_pos: None,
            canvas_rect,
            dragging: false,
        }
    }

    /// Update the canvas rectangle (e.g. if window is resized)
    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = rect;
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    fn make_location(&self, pos: Pos2) -> InputLocation {
        InputLocation {
            position: pos - self.canvas_rect.min.to_vec2(),
            is_in_canvas: self.canvas_rect.contains(pos),
        }
    }

    /// Collects this frame's events. `canvas_hovered` is false while another
    /// layer (a dialog, a menu) covers the canvas.
    pub fn process_input(&mut self, ctx: &Context, canvas_hovered: bool) -> Vec<InputEvent> {
        let mut events = Vec::new();

        ctx.input(|input| {
            let pos = input.pointer.latest_pos().or(self.last_pointer_pos);

            if input.pointer.button_pressed(PointerButton::Primary) && !self.dragging {
                if let Some(pos) = pos.filter(|_| canvas_hovered) {
                    let location = self.make_location(pos);
                    if location.is_in_canvas {
                        events.push(InputEvent::PointerDown { location });
                        self.dragging = true;
                        self.last_pointer_pos = Some(pos);
                    }
                }
            }

            if self.dragging {
                if let Some(pos) = pos {
                    if Some(pos) != self.last_pointer_pos {
                        events.push(InputEvent::PointerMove {
                            location: self.make_location(pos),
                        });
                    }
                    if input.pointer.button_released(PointerButton::Primary)
                        || !input.pointer.primary_down()
                    {
                        events.push(InputEvent::PointerUp {
                            location: self.make_location(pos),
                        });
                        self.dragging = false;
                    }
                }
            }

            if pos.is_some() {
                self.last_pointer_pos = pos;
            }
        });

        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{Event, Modifiers, RawInput, pos2, vec2};

    fn frame(ctx: &Context, handler: &mut InputHandler, events: Vec<Event>) -> Vec<InputEvent> {
        let raw = RawInput {
            screen_rect: Some(Rect::from_min_size(Pos2::ZERO, vec2(400.0, 300.0))),
            events,
            ..Default::default()
        };
        let mut out = Vec::new();
        let _ = ctx.run(raw, |ctx| out = handler.process_input(ctx, true));
        out
    }

    fn canvas_handler() -> InputHandler {
        InputHandler::new(Rect::from_min_size(pos2(100.0, 50.0), vec2(200.0, 200.0)))
    }

    fn button(pos: Pos2, pressed: bool) -> Event {
        Event::PointerButton {
            pos,
            button: PointerButton::Primary,
            pressed,
            modifiers: Modifiers::NONE,
        }
    }

    #[test]
    fn test_drag_is_reported_in_canvas_coordinates() {
        let ctx = Context::default();
        let mut handler = canvas_handler();

        let down = frame(
            &ctx,
            &mut handler,
            vec![Event::PointerMoved(pos2(110.0, 60.0)), button(pos2(110.0, 60.0), true)],
        );
        assert_eq!(down.len(), 1);
        assert_eq!(down[0].location().position, pos2(10.0, 10.0));
        assert!(matches!(down[0], InputEvent::PointerDown { .. }));
        assert!(handler.is_dragging());

        let moved = frame(&ctx, &mut handler, vec![Event::PointerMoved(pos2(150.0, 90.0))]);
        assert_eq!(
            moved,
            vec![InputEvent::PointerMove {
                location: InputLocation {
                    position: pos2(50.0, 40.0),
                    is_in_canvas: true,
                },
            }]
        );

        let up = frame(&ctx, &mut handler, vec![button(pos2(150.0, 90.0), false)]);
        assert!(matches!(up.last(), Some(InputEvent::PointerUp { .. })));
        assert!(!handler.is_dragging());
    }

    #[test]
    fn test_press_outside_canvas_is_ignored() {
        let ctx = Context::default();
        let mut handler = canvas_handler();

        let events = frame(
            &ctx,
            &mut handler,
            vec![Event::PointerMoved(pos2(20.0, 20.0)), button(pos2(20.0, 20.0), true)],
        );
        assert!(events.is_empty());
        assert!(!handler.is_dragging());
    }
}
