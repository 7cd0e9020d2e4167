use chart_focus::api::{FocusChart, FocusChartConfig};
use chart_focus::core::{BoundingBox, Scene, SceneElement};
use chart_focus::focus::{FOCUS_BORDER_CLASS, FOCUS_BORDER_Z_INDEX, FocusBorderStyle};
use chart_focus::host::RecordingHost;
use chart_focus::render::{Color, StylingMode};

fn chart_with(config: FocusChartConfig) -> FocusChart<RecordingHost> {
    FocusChart::new(RecordingHost::default(), config).expect("chart")
}

#[test]
fn add_is_idempotent_and_replaces_rather_than_accumulates() {
    let mut chart = chart_with(FocusChartConfig::new());
    let shape = chart
        .scene_mut()
        .insert(SceneElement::shape(BoundingBox::new(10.0, 20.0, 30.0, 5.0)));
    let style = FocusBorderStyle::default();

    chart.add_focus_border(shape, Some(3.0), &style);
    let first = chart.scene().overlay(shape).expect("overlay").clone();

    chart.add_focus_border(shape, Some(3.0), &style);
    let second = chart.scene().overlay(shape).expect("overlay").clone();

    assert_eq!(first, second);
    assert_eq!(chart.scene().overlay_count(), 1);
}

#[test]
fn re_add_with_new_margin_updates_geometry() {
    let mut chart = chart_with(FocusChartConfig::new());
    let shape = chart
        .scene_mut()
        .insert(SceneElement::shape(BoundingBox::new(0.0, 0.0, 10.0, 10.0)));
    let style = FocusBorderStyle::default();

    chart.add_focus_border(shape, Some(1.0), &style);
    chart.add_focus_border(shape, Some(5.0), &style);

    let overlay = chart.scene().overlay(shape).expect("overlay");
    assert_eq!(overlay.bounds, BoundingBox::new(-5.0, -5.0, 20.0, 20.0));
    assert_eq!(chart.scene().overlay_count(), 1);
}

#[test]
fn overlay_encloses_the_translated_element_bounds() {
    let mut chart = chart_with(FocusChartConfig::new());
    let shape = chart.scene_mut().insert(
        SceneElement::shape(BoundingBox::new(10.0, 20.0, 30.0, 5.0)).with_translation(5.0, -2.0),
    );

    chart.add_focus_border(shape, Some(3.0), &FocusBorderStyle::default());

    let overlay = chart.scene().overlay(shape).expect("overlay");
    let translated = BoundingBox::new(15.0, 18.0, 30.0, 5.0);
    assert!(overlay.bounds.contains(translated));
}

#[test]
fn remove_clears_ownership_and_is_a_no_op_when_repeated() {
    let mut chart = chart_with(FocusChartConfig::new());
    let shape = chart
        .scene_mut()
        .insert(SceneElement::shape(BoundingBox::new(0.0, 0.0, 10.0, 10.0)));

    chart.add_focus_border(shape, None, &FocusBorderStyle::default());
    assert!(chart.scene().element(shape).expect("element").has_overlay());

    chart.remove_focus_border(shape);
    assert!(!chart.scene().element(shape).expect("element").has_overlay());

    // Second remove must not error or change anything.
    chart.remove_focus_border(shape);
    assert_eq!(chart.scene().overlay_count(), 0);
}

#[test]
fn operations_on_a_stale_element_id_are_silent_no_ops() {
    let mut other_scene = Scene::default();
    other_scene.insert(SceneElement::group());
    let stale = other_scene.insert(SceneElement::shape(BoundingBox::new(0.0, 0.0, 1.0, 1.0)));

    let mut chart = chart_with(FocusChartConfig::new());
    chart
        .scene_mut()
        .insert(SceneElement::shape(BoundingBox::new(0.0, 0.0, 1.0, 1.0)));

    chart.add_focus_border(stale, None, &FocusBorderStyle::default());
    chart.remove_focus_border(stale);

    assert_eq!(chart.scene().overlay_count(), 0);
}

#[test]
fn overlay_carries_class_tag_and_elevated_stacking_order() {
    let mut chart = chart_with(FocusChartConfig::new());
    let shape = chart
        .scene_mut()
        .insert(SceneElement::shape(BoundingBox::new(0.0, 0.0, 10.0, 10.0)));

    chart.add_focus_border(shape, None, &FocusBorderStyle::default());

    let overlay = chart.scene().overlay(shape).expect("overlay");
    assert_eq!(overlay.class, FOCUS_BORDER_CLASS);
    assert_eq!(overlay.z_index, FOCUS_BORDER_Z_INDEX);
    assert_eq!(FOCUS_BORDER_Z_INDEX, 99);
}

#[test]
fn overlay_attaches_to_the_elements_parent_group() {
    let mut chart = chart_with(FocusChartConfig::new());
    let group = chart.scene_mut().insert(SceneElement::group());
    let shape = chart.scene_mut().attach(
        group,
        SceneElement::shape(BoundingBox::new(0.0, 0.0, 10.0, 10.0)),
    );

    chart.add_focus_border(shape, None, &FocusBorderStyle::default());

    let overlay = chart.scene().overlay(shape).expect("overlay");
    assert_eq!(overlay.parent, Some(group));
}

#[test]
fn inline_styling_materializes_stroke_attributes() {
    let mut chart = chart_with(FocusChartConfig::new().with_styling_mode(StylingMode::Inline));
    let shape = chart
        .scene_mut()
        .insert(SceneElement::shape(BoundingBox::new(0.0, 0.0, 10.0, 10.0)));
    let style = FocusBorderStyle {
        color: Some(Color::from_rgb8(0x33, 0x4e, 0xff)),
        line_width: Some(2.0),
        border_radius: Some(3.0),
    };

    chart.add_focus_border(shape, None, &style);

    let overlay = chart.scene().overlay(shape).expect("overlay");
    assert_eq!(overlay.stroke, Some(Color::from_rgb8(0x33, 0x4e, 0xff)));
    assert_eq!(overlay.stroke_width, Some(2.0));
}

#[test]
fn external_styling_suppresses_stroke_attributes() {
    let mut chart = chart_with(FocusChartConfig::new().with_styling_mode(StylingMode::External));
    let shape = chart
        .scene_mut()
        .insert(SceneElement::shape(BoundingBox::new(0.0, 0.0, 10.0, 10.0)));
    let style = FocusBorderStyle {
        color: Some(Color::from_rgb8(0x33, 0x4e, 0xff)),
        line_width: Some(4.0),
        border_radius: Some(3.0),
    };

    chart.add_focus_border(shape, None, &style);

    let overlay = chart.scene().overlay(shape).expect("overlay");
    assert_eq!(overlay.stroke, None);
    assert_eq!(overlay.stroke_width, None);
    // Class tag and geometry survive regardless of styling mode.
    assert_eq!(overlay.class, FOCUS_BORDER_CLASS);
    assert_eq!(overlay.corner_radius, 3);
}

#[test]
fn corner_radius_truncates_toward_zero_and_defaults_to_square() {
    let mut chart = chart_with(FocusChartConfig::new());
    let shape = chart
        .scene_mut()
        .insert(SceneElement::shape(BoundingBox::new(0.0, 0.0, 10.0, 10.0)));

    let fractional = FocusBorderStyle {
        border_radius: Some(4.9),
        ..FocusBorderStyle::default()
    };
    chart.add_focus_border(shape, None, &fractional);
    assert_eq!(chart.scene().overlay(shape).expect("overlay").corner_radius, 4);

    let absent = FocusBorderStyle {
        border_radius: None,
        ..FocusBorderStyle::default()
    };
    chart.add_focus_border(shape, None, &absent);
    assert_eq!(chart.scene().overlay(shape).expect("overlay").corner_radius, 0);

    let negative = FocusBorderStyle {
        border_radius: Some(-2.0),
        ..FocusBorderStyle::default()
    };
    chart.add_focus_border(shape, None, &negative);
    assert_eq!(chart.scene().overlay(shape).expect("overlay").corner_radius, 0);
}

#[test]
fn missing_stroke_options_render_as_engine_defaults() {
    let mut chart = chart_with(FocusChartConfig::new());
    let shape = chart
        .scene_mut()
        .insert(SceneElement::shape(BoundingBox::new(0.0, 0.0, 10.0, 10.0)));
    let bare = FocusBorderStyle {
        color: None,
        line_width: None,
        border_radius: None,
    };

    chart.add_focus_border(shape, None, &bare);

    let overlay = chart.scene().overlay(shape).expect("overlay");
    assert_eq!(overlay.stroke, None);
    assert_eq!(overlay.stroke_width, None);
}
