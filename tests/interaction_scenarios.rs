use egui::{Color32, Rect, Vec2, pos2};
use raster_paint::{
    AppConfig, DrawPrimitive, Session, StrokeKind, StrokeWidth, Tool, ToolSettings,
};

fn started_session(tool: Tool) -> Session {
    let mut session = Session::new(AppConfig::default(), ToolSettings::default());
    session.set_canvas_size(Vec2::new(100.0, 80.0));
    assert!(session.request_new_canvas());
    session.set_tool(tool);
    session
}

#[test]
fn test_rectangle_drag() {
    let mut session = started_session(Tool::Rectangle);
    session.settings_mut().fill_enabled = false;

    session.pointer_down(pos2(10.0, 10.0));
    session.pointer_move(pos2(30.0, 25.0));
    session.pointer_move(pos2(50.0, 40.0));
    session.pointer_up(pos2(50.0, 40.0));

    let drawn = &session.document().primitives()[1..];
    assert_eq!(drawn.len(), 1);
    match &drawn[0] {
        DrawPrimitive::Rectangle(style) => {
            assert_eq!(
                style.bounding_box(),
                Rect::from_min_max(pos2(10.0, 10.0), pos2(50.0, 40.0))
            );
            assert_eq!(style.fill, None);
            assert_eq!(style.color, Color32::BLACK);
        }
        other => panic!("expected a rectangle, got {other:?}"),
    }
}

#[test]
fn test_eraser_drag() {
    let mut session = started_session(Tool::Eraser);
    session.settings_mut().width = StrokeWidth::Medium;

    session.pointer_down(pos2(0.0, 0.0));
    session.pointer_move(pos2(5.0, 5.0));
    session.pointer_move(pos2(10.0, 10.0));
    session.pointer_up(pos2(10.0, 10.0));

    let drawn = &session.document().primitives()[1..];
    assert_eq!(drawn.len(), 2);
    let expected = [
        (pos2(0.0, 0.0), pos2(5.0, 5.0)),
        (pos2(5.0, 5.0), pos2(10.0, 10.0)),
    ];
    for (primitive, (from, to)) in drawn.iter().zip(expected) {
        match primitive {
            DrawPrimitive::Stroke {
                kind,
                start,
                end,
                color,
                width,
            } => {
                assert_eq!(*kind, StrokeKind::Eraser);
                assert_eq!((*start, *end), (from, to));
                assert_eq!(*color, Color32::WHITE);
                assert_eq!(*width, 5.0);
            }
            other => panic!("expected an eraser stroke, got {other:?}"),
        }
    }
}

#[test]
fn test_filled_shape_uses_secondary_colour() {
    let mut session = started_session(Tool::Triangle);
    {
        let settings = session.settings_mut();
        settings.primary = Color32::RED;
        settings.secondary = Color32::GREEN;
        settings.fill_enabled = true;
        settings.width = StrokeWidth::Large;
    }

    session.pointer_down(pos2(20.0, 20.0));
    session.pointer_up(pos2(60.0, 60.0));

    match &session.document().primitives()[1] {
        DrawPrimitive::Polygon { style, .. } => {
            assert_eq!(style.color, Color32::RED);
            assert_eq!(style.fill, Some(Color32::GREEN));
            assert_eq!(style.width, 5.0);
        }
        other => panic!("expected a polygon, got {other:?}"),
    }
}

#[test]
fn test_fill_covers_current_canvas() {
    let mut session = started_session(Tool::Fill);
    session.settings_mut().primary = Color32::BLUE;

    session.pointer_down(pos2(3.0, 3.0));
    session.pointer_up(pos2(3.0, 3.0));

    assert_eq!(
        session.document().primitives().last(),
        Some(&DrawPrimitive::Fill {
            size: Vec2::new(100.0, 80.0),
            color: Color32::BLUE,
        })
    );
    assert_eq!(session.document().len(), 2);
}

#[test]
fn test_pending_primitive_is_visible_before_release() {
    let mut session = started_session(Tool::Ellipse);
    session.pointer_down(pos2(10.0, 10.0));
    session.pointer_move(pos2(40.0, 30.0));

    assert_eq!(session.document().len(), 1);
    let visible: Vec<_> = session.visible_primitives().collect();
    assert_eq!(visible.len(), 2);
    assert_eq!(visible[1].kind_name(), "ellipse");
    assert_eq!(visible[1].end(), Some(pos2(40.0, 30.0)));
}
