use super::*;
use crate::draw::{MaskFilter, PathCommand, color};
use crate::input::brush::Brush;
use crate::util::{Point, RectF, ViewTransform};

fn create_test_state() -> PaintState {
    let mut state = PaintState::default();
    state.set_image_geometry(100.0, 100.0, ViewTransform::identity());
    state
}

#[test]
fn touch_down_outside_image_bounds_is_ignored() {
    let mut state = create_test_state();

    state.on_touch_down(150.0, 50.0);

    assert!(state.frame.is_empty());
    assert_eq!(state.frame.finalized(), 0);
    assert_eq!(state.state, GestureState::Idle);
}

#[test]
fn gesture_without_image_geometry_is_ignored() {
    let mut state = PaintState::default();

    state.on_touch_down(10.0, 10.0);
    state.on_touch_move(20.0, 20.0);
    state.on_touch_up();

    assert!(state.frame.is_empty());
}

#[test]
fn freehand_gesture_produces_smoothed_stroke() {
    let mut state = create_test_state();

    state.on_touch_down(10.0, 10.0);
    state.on_touch_move(20.0, 20.0);
    state.on_touch_up();

    assert_eq!(state.frame.len(), 1);
    assert_eq!(state.frame.finalized(), 1);

    let commands = state.frame.strokes()[0].path.commands();
    assert_eq!(commands[0], PathCommand::MoveTo(Point::new(11.0, 11.0)));
    assert_eq!(
        commands[1],
        PathCommand::QuadTo {
            ctrl: Point::new(10.0, 10.0),
            to: Point::new(15.0, 15.0),
        }
    );
    assert_eq!(
        *commands.last().unwrap(),
        PathCommand::LineTo(Point::new(20.0, 20.0))
    );
}

#[test]
fn micro_jitter_moves_are_coalesced() {
    let mut state = create_test_state();
    assert_eq!(state.touch_tolerance, 4.0);

    state.on_touch_down(10.0, 10.0);
    state.on_touch_move(12.0, 12.0);

    // Below tolerance on both axes: no segment appended, cursor unchanged.
    assert_eq!(state.frame.strokes()[0].path.len(), 1);

    state.on_touch_up();
    assert_eq!(
        *state.frame.strokes()[0].path.commands().last().unwrap(),
        PathCommand::LineTo(Point::new(10.0, 10.0))
    );
}

#[test]
fn square_gesture_commits_one_rect_and_drops_preview() {
    let mut state = create_test_state();
    state.select_brush(Brush::Square);

    state.on_touch_down(0.0, 0.0);
    assert!(state.frame.is_empty(), "shape brushes commit nothing on down");

    state.on_touch_move(10.0, 10.0);
    assert!(state.preview.is_some());

    state.on_touch_up();
    assert!(state.preview.is_none());
    assert_eq!(state.frame.len(), 1);
    assert_eq!(state.frame.finalized(), 1);

    let commands = state.frame.strokes()[0].path.commands();
    assert_eq!(commands[1], PathCommand::MoveTo(Point::new(0.0, 0.0)));
    assert_eq!(commands[2], PathCommand::LineTo(Point::new(10.0, 0.0)));
    assert_eq!(commands[3], PathCommand::LineTo(Point::new(10.0, 10.0)));
    assert_eq!(commands[4], PathCommand::LineTo(Point::new(0.0, 10.0)));
    assert_eq!(commands[5], PathCommand::Close);
}

#[test]
fn circle_radius_uses_horizontal_delta_only() {
    let mut state = create_test_state();
    state.select_brush(Brush::Circle);

    state.on_touch_down(50.0, 50.0);
    state.on_touch_move(80.0, 50.0);
    state.on_touch_up();

    assert_eq!(state.frame.len(), 1);
    let commands = state.frame.strokes()[0].path.commands();
    match commands[1] {
        PathCommand::Arc { bounds, .. } => {
            // |80 - 50| / 2 = 15 pixel radius around the anchor.
            assert_eq!(bounds, RectF::new(35.0, 35.0, 65.0, 65.0));
        }
        ref other => panic!("expected arc, got {other:?}"),
    }
}

#[test]
fn undo_on_empty_session_is_a_no_op() {
    let mut state = create_test_state();
    state.undo();
    assert!(state.frame.is_empty());
    assert_eq!(state.frame.finalized(), 0);
}

#[test]
fn clear_then_is_modified_returns_false() {
    let mut state = create_test_state();

    state.on_touch_down(10.0, 10.0);
    state.on_touch_up();
    assert!(state.is_modified());

    state.clear();
    assert!(!state.is_modified());
    assert_eq!(state.frame.finalized(), 0);
}

#[test]
fn select_brush_manages_the_eraser_flag() {
    let mut state = create_test_state();

    state.select_brush(Brush::Eraser);
    assert!(state.eraser_active);

    state.select_brush(Brush::Blur);
    assert!(!state.eraser_active);

    state.select_brush(Brush::Eraser);
    state.select_brush(Brush::Circle);
    assert!(!state.eraser_active);
}

#[test]
fn committed_strokes_keep_their_style_snapshot() {
    let mut state = create_test_state();
    state.set_stroke_color(color::RED);
    state.set_stroke_width(6.0);

    state.on_touch_down(10.0, 10.0);
    state.on_touch_move(30.0, 30.0);
    state.on_touch_up();

    state.set_stroke_color(color::BLUE);
    state.set_stroke_width(20.0);

    let style = state.frame.strokes()[0].style;
    assert_eq!(style.color, color::RED);
    assert_eq!(style.width, 6.0);
}

#[test]
fn eraser_strokes_capture_the_erase_flag() {
    let mut state = create_test_state();
    state.select_brush(Brush::Eraser);

    state.on_touch_down(10.0, 10.0);
    state.on_touch_up();

    let style = state.frame.strokes()[0].style;
    assert!(style.erase);
    assert_eq!(style.filter, MaskFilter::None);
}

#[test]
fn effect_brushes_stamp_their_filter_into_the_snapshot() {
    let mut state = create_test_state();
    state.select_brush(Brush::Blur);

    state.on_touch_down(10.0, 10.0);
    state.on_touch_up();

    assert_eq!(state.frame.strokes()[0].style.filter, MaskFilter::Blur);

    // Changing the brush afterwards leaves the committed snapshot alone.
    state.select_brush(Brush::Emboss);
    assert_eq!(state.frame.strokes()[0].style.filter, MaskFilter::Blur);
}

#[test]
fn moves_are_clamped_into_image_bounds() {
    let mut state = create_test_state();

    state.on_touch_down(90.0, 90.0);
    state.on_touch_move(200.0, 200.0);
    state.on_touch_up();

    let commands = state.frame.strokes()[0].path.commands();
    assert_eq!(
        commands[1],
        PathCommand::QuadTo {
            ctrl: Point::new(90.0, 90.0),
            to: Point::new(95.0, 95.0),
        }
    );
    assert_eq!(
        *commands.last().unwrap(),
        PathCommand::LineTo(Point::new(100.0, 100.0))
    );
}

#[test]
fn touch_up_without_gesture_is_a_no_op() {
    let mut state = create_test_state();
    state.on_touch_up();
    assert!(state.frame.is_empty());
    assert_eq!(state.frame.finalized(), 0);
}

#[test]
fn handle_touch_dispatches_by_event() {
    let mut state = create_test_state();

    state.handle_touch(crate::input::TouchEvent::Down { x: 10.0, y: 10.0 });
    state.handle_touch(crate::input::TouchEvent::Move { x: 40.0, y: 40.0 });
    state.handle_touch(crate::input::TouchEvent::Up);

    assert_eq!(state.frame.len(), 1);
    assert!(matches!(state.state, GestureState::Idle));
}
