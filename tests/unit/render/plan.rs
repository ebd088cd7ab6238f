use super::*;

fn dot(tag: DrawTag) -> DrawOp {
    DrawOp::fill(
        tag,
        Geometry::Circle {
            center: Point::new(1.0, 1.0),
            radius: 1.0,
        },
        Paint::Solid(Rgba8::WHITE),
    )
}

#[test]
fn ops_iterate_layers_in_push_order() {
    let mut plan = FramePlan::new(
        Canvas {
            width: 4,
            height: 4,
        },
        Rgba8::rgb(2, 6, 23),
    );
    let mut stars = Layer::new(LayerKind::Stars);
    stars.push(dot(DrawTag::Star));
    let mut meteors = Layer::new(LayerKind::Meteors);
    meteors.push(dot(DrawTag::MeteorTrail));
    meteors.push(dot(DrawTag::MeteorHead));
    plan.push_layer(stars);
    plan.push_layer(meteors);

    let tags: Vec<DrawTag> = plan.ops().map(|op| op.tag).collect();
    assert_eq!(
        tags,
        vec![DrawTag::Star, DrawTag::MeteorTrail, DrawTag::MeteorHead]
    );
    assert_eq!(plan.op_count(), 3);
    assert_eq!(plan.layer(LayerKind::Meteors).unwrap().ops.len(), 2);
    assert!(plan.layer(LayerKind::Shapes).is_none());
}

#[test]
fn opacity_is_clamped() {
    assert_eq!(dot(DrawTag::Star).with_opacity(3.0).opacity, 1.0);
    assert_eq!(dot(DrawTag::Star).with_opacity(-1.0).opacity, 0.0);
}

#[test]
fn geometry_paths_are_closed_shapes_or_open_strokes() {
    let circle = Geometry::Circle {
        center: Point::new(10.0, 10.0),
        radius: 5.0,
    }
    .to_path();
    let bbox = kurbo::Shape::bounding_box(&circle);
    assert!((bbox.width() - 10.0).abs() < 0.5);

    let half_ring = Geometry::Arc {
        center: Point::ZERO,
        radii: Vec2::new(50.0, 14.0),
        start: std::f64::consts::PI,
        sweep: std::f64::consts::PI,
        rotation: 0.0,
    }
    .to_path();
    let bbox = kurbo::Shape::bounding_box(&half_ring);
    assert!(bbox.max_y() <= 0.5, "back half must stay above the center line");
    assert!(bbox.min_y() < -13.0);
}
