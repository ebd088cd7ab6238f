use super::*;
use crate::{
    foundation::core::Canvas,
    render::plan::{DrawTag, Geometry, Layer, LayerKind},
};

fn plan_16(clear: Rgba8) -> FramePlan {
    FramePlan::new(
        Canvas {
            width: 16,
            height: 16,
        },
        clear,
    )
}

fn dot(color: Rgba8, blend: Blend) -> DrawOp {
    DrawOp::fill(
        DrawTag::MeteorHead,
        Geometry::Circle {
            center: Point::new(8.0, 8.0),
            radius: 4.0,
        },
        Paint::Solid(color),
    )
    .with_blend(blend)
}

#[test]
fn clear_color_fills_the_frame() {
    let mut backend = CpuBackend::new(RenderSettings::default());
    let frame = backend.render(&plan_16(Rgba8::rgb(2, 6, 23))).unwrap();
    assert_eq!((frame.width, frame.height), (16, 16));
    assert_eq!(frame.data.len(), 16 * 16 * 4);
    assert_eq!(frame.pixel(0, 0), Some([2, 6, 23, 255]));
    assert_eq!(frame.pixel(15, 15), Some([2, 6, 23, 255]));
}

#[test]
fn solid_circle_covers_its_center_only() {
    let mut plan = plan_16(Rgba8::rgb(0, 0, 0));
    let mut layer = Layer::new(LayerKind::Stars);
    layer.push(dot(Rgba8::WHITE, Blend::Normal));
    plan.push_layer(layer);

    let frame = CpuBackend::new(RenderSettings::default())
        .render(&plan)
        .unwrap();
    let center = frame.pixel(8, 8).unwrap();
    assert!(center[0] > 240, "center {center:?}");
    assert_eq!(frame.pixel(0, 0), Some([0, 0, 0, 255]));
}

#[test]
fn additive_dots_brighten_where_they_overlap() {
    let red = Rgba8::rgb(100, 0, 0);
    let mut plan = plan_16(Rgba8::rgb(0, 0, 0));
    let mut layer = Layer::new(LayerKind::Meteors);
    layer.push(dot(red, Blend::Additive));
    layer.push(dot(red, Blend::Additive));
    plan.push_layer(layer);

    let frame = CpuBackend::new(RenderSettings::default())
        .render(&plan)
        .unwrap();
    let center = frame.pixel(8, 8).unwrap();
    assert!(center[0] >= 180, "center {center:?}");
}

#[test]
fn zero_opacity_ops_are_skipped() {
    let mut plan = plan_16(Rgba8::rgb(0, 0, 0));
    let mut layer = Layer::new(LayerKind::Stars);
    layer.push(dot(Rgba8::WHITE, Blend::Normal).with_opacity(0.0));
    plan.push_layer(layer);

    let frame = CpuBackend::new(RenderSettings::default())
        .render(&plan)
        .unwrap();
    assert_eq!(frame.pixel(8, 8), Some([0, 0, 0, 255]));
}

#[test]
fn clear_override_wins_over_plan_color() {
    let settings = RenderSettings {
        clear_override: Some(Rgba8::rgb(255, 0, 0)),
    };
    let frame = CpuBackend::new(settings)
        .render(&plan_16(Rgba8::rgb(0, 0, 255)))
        .unwrap();
    assert_eq!(frame.pixel(3, 3), Some([255, 0, 0, 255]));
}

#[test]
fn surface_follows_canvas_resizes() {
    let mut backend = CpuBackend::new(RenderSettings::default());
    backend.render(&plan_16(Rgba8::WHITE)).unwrap();
    let frame = backend
        .render(&FramePlan::new(
            Canvas {
                width: 8,
                height: 4,
            },
            Rgba8::WHITE,
        ))
        .unwrap();
    assert_eq!(frame.data.len(), 8 * 4 * 4);
}

#[test]
fn empty_canvas_renders_nothing() {
    let frame = CpuBackend::new(RenderSettings::default())
        .render(&FramePlan::new(Canvas::default(), Rgba8::WHITE))
        .unwrap();
    assert!(frame.is_empty());
}
