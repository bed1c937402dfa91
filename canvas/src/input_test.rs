#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// Tool
// =============================================================

#[test]
fn tool_default_is_freehand() {
    assert_eq!(Tool::default(), Tool::Freehand);
}

#[test]
fn pan_tool_draws_nothing() {
    assert_eq!(Tool::Pan.element_kind(), None);
}

#[test]
fn drawing_tools_map_to_element_kinds() {
    let pairs = [
        (Tool::Freehand, ElementKind::Freehand),
        (Tool::Line, ElementKind::Line),
        (Tool::Rectangle, ElementKind::Rectangle),
        (Tool::Circle, ElementKind::Circle),
        (Tool::Triangle, ElementKind::Triangle),
        (Tool::Trapezium, ElementKind::Trapezium),
    ];
    for (tool, kind) in pairs {
        assert_eq!(tool.element_kind(), Some(kind), "{tool:?}");
    }
}

#[test]
fn tool_cursor() {
    assert_eq!(Tool::Pan.cursor(), "grab");
    assert_eq!(Tool::Freehand.cursor(), "crosshair");
    assert_eq!(Tool::Trapezium.cursor(), "crosshair");
}

#[test]
fn tool_deserializes_from_lowercase_name() {
    let tool: Tool = serde_json::from_str("\"rectangle\"").unwrap();
    assert_eq!(tool, Tool::Rectangle);
    let tool: Tool = serde_json::from_str("\"pan\"").unwrap();
    assert_eq!(tool, Tool::Pan);
}

// =============================================================
// Theme
// =============================================================

#[test]
fn theme_default_is_dark() {
    assert_eq!(Theme::default(), Theme::Dark);
}

#[test]
fn theme_css_classes() {
    assert_eq!(Theme::Dark.css_class(), "dark-theme");
    assert_eq!(Theme::Light.css_class(), "light-theme");
    assert_eq!(Theme::Cosmic.css_class(), "cosmic-theme");
    assert_eq!(Theme::Retro.css_class(), "retro-theme");
    assert_eq!(Theme::Maximalist.css_class(), "maximalist-theme");
}

// =============================================================
// Pointer
// =============================================================

#[test]
fn mouse_primary_is_its_position() {
    let p = Pointer::Mouse(Point::new(3.0, 4.0));
    assert_eq!(p.primary(), Some(Point::new(3.0, 4.0)));
    assert_eq!(p.contact_count(), 1);
    assert_eq!(p.pinch_pair(), None);
}

#[test]
fn touch_primary_is_first_contact() {
    let p = Pointer::Touch(vec![Point::new(1.0, 1.0), Point::new(9.0, 9.0)]);
    assert_eq!(p.primary(), Some(Point::new(1.0, 1.0)));
    assert_eq!(p.contact_count(), 2);
    assert_eq!(p.pinch_pair(), Some((Point::new(1.0, 1.0), Point::new(9.0, 9.0))));
}

#[test]
fn empty_touch_has_no_primary() {
    let p = Pointer::Touch(Vec::new());
    assert_eq!(p.primary(), None);
    assert_eq!(p.contact_count(), 0);
}

#[test]
fn three_touches_pinch_on_first_two() {
    let p = Pointer::Touch(vec![Point::new(0.0, 0.0), Point::new(2.0, 0.0), Point::new(50.0, 50.0)]);
    assert_eq!(p.pinch_pair(), Some((Point::new(0.0, 0.0), Point::new(2.0, 0.0))));
}

// =============================================================
// UiState
// =============================================================

#[test]
fn ui_defaults() {
    let ui = UiState::default();
    assert_eq!(ui.tool, Tool::Freehand);
    assert_eq!(ui.color, "#ffffff");
    assert_eq!(ui.brush_size, 5.0);
    assert_eq!(ui.theme, Theme::Dark);
    assert!(!ui.fullscreen);
}

// =============================================================
// InputState
// =============================================================

#[test]
fn input_state_default_is_idle() {
    assert_eq!(InputState::default(), InputState::Idle);
}

#[test]
fn current_element_only_while_drawing() {
    let el = Element::begin(ElementKind::Line, "#fff", 1.0, Point::new(0.0, 0.0));
    let drawing = InputState::Drawing { element: el.clone() };
    assert_eq!(drawing.current_element(), Some(&el));
    assert_eq!(InputState::Idle.current_element(), None);
    assert_eq!(InputState::Panning { last_screen: Point::default() }.current_element(), None);
    assert_eq!(InputState::Pinching { last_distance: 10.0 }.current_element(), None);
}

#[test]
fn input_state_names() {
    assert_eq!(InputState::Idle.name(), "idle");
    assert_eq!(InputState::Pinching { last_distance: 1.0 }.name(), "pinching");
}
