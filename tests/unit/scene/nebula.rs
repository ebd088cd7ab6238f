use super::*;

#[test]
fn gradient_is_anchored_top_right_and_covers_the_canvas() {
    let layer = draw(
        Canvas {
            width: 1000,
            height: 500,
        },
        &NebulaParams::default(),
    );
    assert_eq!(layer.kind, LayerKind::Nebula);
    assert_eq!(layer.ops.len(), 1);

    let op = &layer.ops[0];
    assert_eq!(op.geometry, Geometry::Rect(Rect::new(0.0, 0.0, 1000.0, 500.0)));
    match &op.paint {
        Paint::Radial {
            center,
            radius,
            stops,
        } => {
            assert!((center.x - 700.0).abs() < 1e-9);
            assert!((center.y - 150.0).abs() < 1e-9);
            assert!((radius - 800.0).abs() < 1e-9);
            assert_eq!(stops[0].color, Rgba8::rgba(96, 132, 252, 38));
            assert_eq!(stops[1].color.a, 0);
        }
        other => panic!("unexpected paint {other:?}"),
    }
}

#[test]
fn empty_canvas_draws_nothing() {
    let layer = draw(Canvas::default(), &NebulaParams::default());
    assert!(layer.ops.is_empty());
}

#[test]
fn validate_rejects_negative_radius() {
    let params = NebulaParams {
        radius_factor: -1.0,
        ..NebulaParams::default()
    };
    assert!(params.validate().is_err());
    assert!(NebulaParams::default().validate().is_ok());
}
