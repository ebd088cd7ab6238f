use std::io::Cursor;

use super::*;

#[test]
fn default_config_is_valid() {
    let cfg = SceneConfig::default();
    cfg.validate().unwrap();
    assert_eq!(cfg.background, Rgba8::rgb(2, 6, 23));
    assert_eq!(cfg.fps.as_f64(), 60.0);
    assert_eq!(cfg.seed, None);
}

#[test]
fn partial_json_keeps_defaults_for_missing_fields() {
    let json = r##"{
        "viewport": { "width": 800, "height": 600, "device_pixel_ratio": 2 },
        "seed": 7,
        "stars": { "area_per_star": 5000 },
        "background": "#000000"
    }"##;
    let cfg = SceneConfig::from_reader(Cursor::new(json)).unwrap();
    assert_eq!(cfg.viewport, Viewport::new(800.0, 600.0, 2.0));
    assert_eq!(cfg.seed, Some(7));
    assert_eq!(cfg.stars.area_per_star, 5000.0);
    assert_eq!(cfg.stars.radius_span, StarFieldParams::default().radius_span);
    assert_eq!(cfg.background, Rgba8::rgb(0, 0, 0));
    assert_eq!(cfg.meteors, MeteorParams::default());
    assert_eq!(cfg.shapes, ShapeLayout::default());
}

#[test]
fn empty_object_is_the_default() {
    let cfg = SceneConfig::from_reader(Cursor::new("{}")).unwrap();
    assert_eq!(cfg, SceneConfig::default());
}

#[test]
fn invalid_values_are_rejected() {
    let err = SceneConfig::from_reader(Cursor::new(r#"{ "fps": { "num": 30, "den": 0 } }"#))
        .unwrap_err();
    assert!(matches!(err, LoepError::Validation(_)));

    let err = SceneConfig::from_reader(Cursor::new(
        r#"{ "viewport": { "width": 800, "height": 600, "device_pixel_ratio": 0 } }"#,
    ))
    .unwrap_err();
    assert!(matches!(err, LoepError::Validation(_)));
}

#[test]
fn huge_viewport_fails_validation_instead_of_allocating() {
    let err = SceneConfig::from_reader(Cursor::new(
        r#"{ "viewport": { "width": 1e7, "height": 1e7, "device_pixel_ratio": 1 } }"#,
    ))
    .unwrap_err();
    assert!(matches!(err, LoepError::Validation(_)));

    let cfg = SceneConfig {
        viewport: Viewport::new(1.0e7, 1.0e7, 1.0),
        seed: Some(1),
        ..SceneConfig::default()
    };
    assert!(crate::scene::Scene::from_config(&cfg).is_err());
}

#[test]
fn malformed_json_and_bad_colors_are_reported() {
    assert!(SceneConfig::from_reader(Cursor::new("{ nope")).is_err());
    assert!(SceneConfig::from_reader(Cursor::new(r#"{ "background": "red" }"#)).is_err());
}

#[test]
fn missing_file_is_a_validation_error() {
    let err = SceneConfig::from_path("/definitely/not/here.json").unwrap_err();
    assert!(err.to_string().contains("open scene config"));
}
