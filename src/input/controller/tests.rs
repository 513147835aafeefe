use super::*;
use crate::draw::{BLUE, DrawCall, DrawRecorder, PURPLE, RED, shape};
use crate::util::{Point, Rect};

fn render_calls(controller: &mut SelectionController) -> Vec<DrawCall> {
    let mut recorder = DrawRecorder::new();
    controller.render(&mut recorder);
    recorder.take()
}

#[test]
fn startup_selects_first_color_and_kind() {
    let controller = SelectionController::new();
    let selection = controller.selection();

    assert_eq!(selection.color, PaletteColor::Red);
    assert_eq!(selection.kind, Some(ShapeKind::Circle));
    assert_eq!(
        controller.factory(),
        Some(ShapeFactory::for_color(PaletteColor::Red))
    );
    assert!(controller.needs_redraw);
}

#[test]
fn startup_render_draws_red_circle() {
    let mut controller = SelectionController::new();

    assert_eq!(
        render_calls(&mut controller),
        vec![DrawCall::Ellipse {
            bounds: Rect::from_min_max(150, 150, 250, 250).unwrap(),
            color: RED,
        }]
    );
    assert!(!controller.needs_redraw);
}

#[test]
fn blue_then_square_draws_blue_rect() {
    let mut controller = SelectionController::new();
    controller.on_color_changed(PaletteColor::Blue);
    controller.on_shape_kind_changed(ShapeKind::Square);

    assert_eq!(
        render_calls(&mut controller),
        vec![DrawCall::Rect {
            bounds: Rect::from_min_max(150, 150, 250, 250).unwrap(),
            color: BLUE,
        }]
    );
}

#[test]
fn triangle_uses_active_color() {
    let mut controller = SelectionController::new();
    controller.on_color_changed(PaletteColor::Purple);
    controller.on_shape_kind_changed(ShapeKind::Triangle);

    assert_eq!(
        render_calls(&mut controller),
        vec![DrawCall::Polygon {
            points: vec![
                Point::new(200, 150),
                Point::new(150, 250),
                Point::new(250, 250)
            ],
            color: PURPLE,
        }]
    );
}

#[test]
fn every_color_and_kind_resolves_to_matching_shape() {
    for color in PaletteColor::ALL {
        for kind in ShapeKind::ALL {
            let mut controller = SelectionController::new();
            controller.on_color_changed(color);
            controller.on_shape_kind_changed(kind);

            let shape = controller.shape().expect("selection should resolve");
            assert_eq!(shape.color(), color);
            assert_eq!(shape.kind(), kind);
        }
    }
}

#[test]
fn kind_change_keeps_color() {
    let mut controller = SelectionController::new();
    controller.on_color_changed(PaletteColor::Green);

    for kind in ShapeKind::ALL {
        controller.on_shape_kind_changed(kind);
        assert_eq!(controller.shape().map(|s| s.color()), Some(PaletteColor::Green));
    }
}

#[test]
fn color_change_keeps_kind() {
    let mut controller = SelectionController::new();
    controller.on_shape_kind_changed(ShapeKind::Triangle);

    for color in PaletteColor::ALL {
        controller.on_color_changed(color);
        assert_eq!(
            controller.shape().map(|s| s.kind()),
            Some(ShapeKind::Triangle)
        );
    }
}

#[test]
fn repeated_color_change_is_idempotent() {
    let mut controller = SelectionController::new();
    controller.on_color_changed(PaletteColor::Orange);
    let first = controller.shape().copied();
    controller.on_color_changed(PaletteColor::Orange);
    let second = controller.shape().copied();

    assert!(first.is_some());
    assert_eq!(first, second);
}

#[test]
fn unresolved_controller_draws_nothing() {
    let mut controller = SelectionController::unresolved();

    assert!(controller.shape().is_none());
    assert!(controller.factory().is_none());
    assert!(render_calls(&mut controller).is_empty());
}

#[test]
fn kind_without_factory_stays_unresolved() {
    let mut controller = SelectionController::unresolved();
    controller.on_shape_kind_changed(ShapeKind::Square);

    assert!(controller.shape().is_none());
    assert!(controller.needs_redraw);

    controller.on_color_changed(PaletteColor::Brown);
    assert_eq!(
        controller.shape().map(|s| (s.color(), s.kind())),
        Some((PaletteColor::Brown, ShapeKind::Square))
    );
}

#[test]
fn unknown_shape_name_clears_shape() {
    let mut controller = SelectionController::new();
    controller.needs_redraw = false;
    controller.on_shape_selected("hexagon");

    assert!(controller.shape().is_none());
    assert_eq!(controller.selection().kind, None);
    assert!(controller.needs_redraw);
    assert!(render_calls(&mut controller).is_empty());
}

#[test]
fn unknown_color_name_keeps_previous_factory() {
    let mut controller = SelectionController::new();
    controller.on_color_changed(PaletteColor::Blue);
    controller.needs_redraw = false;
    controller.on_color_selected("ultraviolet");

    assert_eq!(controller.selection().color, PaletteColor::Blue);
    assert_eq!(
        controller.factory(),
        Some(ShapeFactory::for_color(PaletteColor::Blue))
    );
    assert_eq!(controller.shape().map(|s| s.color()), Some(PaletteColor::Blue));
    assert!(controller.needs_redraw);
}

#[test]
fn named_selections_match_typed_ones() {
    let mut named = SelectionController::new();
    named.on_color_selected("gray");
    named.on_shape_selected("SQUARE");

    let mut typed = SelectionController::new();
    typed.on_color_changed(PaletteColor::Gray);
    typed.on_shape_kind_changed(ShapeKind::Square);

    assert_eq!(named.shape(), typed.shape());
}

#[test]
fn cleared_shape_recovers_on_next_kind() {
    let mut controller = SelectionController::new();
    controller.clear_shape_selection();
    assert!(controller.shape().is_none());

    controller.on_shape_kind_changed(ShapeKind::Circle);
    assert_eq!(
        controller.shape().map(|s| s.geometry()),
        Some(shape::Geometry::Ellipse(shape::CIRCLE_BOUNDS))
    );
}

#[test]
fn events_apply_in_order() {
    let mut controller = SelectionController::new();
    controller.handle_events(&[
        SelectionEvent::ColorChanged(PaletteColor::Yellow),
        SelectionEvent::ShapeNamed("nonsense".to_string()),
        SelectionEvent::ShapeKindChanged(ShapeKind::Square),
        SelectionEvent::ColorNamed("pink".to_string()),
    ]);

    let shape = controller.shape().expect("last events resolve a shape");
    assert_eq!(shape.color(), PaletteColor::Pink);
    assert_eq!(shape.kind(), ShapeKind::Square);
}

#[test]
fn redraw_event_only_flags_repaint() {
    let mut controller = SelectionController::new();
    let before = controller.shape().copied();
    controller.needs_redraw = false;

    controller.handle_event(&SelectionEvent::RedrawRequested);

    assert!(controller.needs_redraw);
    assert_eq!(controller.shape().copied(), before);
}

#[test]
fn selection_transitions_are_pure() {
    let start = Selection::initial();
    let next = start.with_color(PaletteColor::Gray).with_kind(ShapeKind::Triangle);

    assert_eq!(start, Selection::initial());
    assert_eq!(next.color, PaletteColor::Gray);
    assert_eq!(next.kind, Some(ShapeKind::Triangle));
    assert_eq!(next.without_kind().kind, None);

    let controller = SelectionController::from_selection(next);
    assert_eq!(
        controller.shape().map(|s| (s.color(), s.kind())),
        Some((PaletteColor::Gray, ShapeKind::Triangle))
    );
}

#[test]
fn damage_region_follows_active_shape() {
    let mut controller = SelectionController::new();
    assert_eq!(
        controller.damage_region(),
        Rect::from_min_max(150, 150, 250, 250)
    );

    controller.on_shape_kind_changed(ShapeKind::Triangle);
    assert_eq!(
        controller.damage_region(),
        Rect::from_min_max(150, 150, 250, 250)
    );

    controller.clear_shape_selection();
    assert_eq!(controller.damage_region(), None);
}
