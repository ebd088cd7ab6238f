use crate::render::plan::{DrawTag, LayerKind};

use super::*;

fn config(width: f64, height: f64) -> SceneConfig {
    SceneConfig {
        viewport: Viewport::new(width, height, 1.0),
        seed: Some(11),
        ..SceneConfig::default()
    }
}

#[test]
fn frame_layers_follow_the_stacking_order() {
    let mut scene = Scene::from_config(&config(800.0, 600.0)).unwrap();
    let plan = scene.frame(Duration::ZERO).unwrap();
    let kinds: Vec<_> = plan.layers.iter().map(|l| l.kind).collect();
    assert_eq!(
        kinds,
        vec![
            LayerKind::Nebula,
            LayerKind::Stars,
            LayerKind::Meteors,
            LayerKind::Shapes,
            LayerKind::PointerGlow,
        ]
    );
    assert_eq!(plan.layer(LayerKind::Stars).unwrap().ops.len(), 43);
    assert_eq!(plan.clear, Rgba8::rgb(2, 6, 23));
}

#[test]
fn no_meteor_before_the_first_threshold() {
    let mut scene = Scene::from_config(&config(800.0, 600.0)).unwrap();
    for i in 0..60 {
        scene.frame(Duration::from_millis(i * 16)).unwrap();
    }
    assert!(scene.meteors().is_empty());
}

#[test]
fn one_meteor_after_a_long_stall() {
    let mut scene = Scene::from_config(&config(800.0, 600.0)).unwrap();
    let plan = scene.frame(Duration::from_secs(600)).unwrap();
    assert_eq!(scene.meteors().len(), 1);
    let meteor_ops = plan.layer(LayerKind::Meteors).unwrap();
    assert_eq!(meteor_ops.ops[0].tag, DrawTag::MeteorTrail);
    assert_eq!(meteor_ops.ops.len(), 3);
}

#[test]
fn meteors_expire_by_life() {
    let mut scene = Scene::from_config(&config(800.0, 600.0)).unwrap();
    scene.spawn_meteor();
    let max_life = scene.meteors()[0].max_life;
    let mut frames = 0u32;
    while !scene.meteors().is_empty() {
        scene.frame(Duration::ZERO).unwrap();
        frames += 1;
        assert!(frames <= 211);
    }
    assert_eq!(f64::from(frames), max_life.ceil());
}

#[test]
fn resize_replaces_the_star_pool() {
    let mut scene = Scene::from_config(&config(800.0, 600.0)).unwrap();
    assert_eq!(scene.stars().len(), 43);

    scene.resize(Viewport::new(1600.0, 1200.0, 2.0)).unwrap();
    assert_eq!(
        scene.canvas(),
        Canvas {
            width: 3200,
            height: 2400
        }
    );
    assert_eq!(scene.stars().len(), 349);
    assert!(
        scene
            .stars()
            .iter()
            .all(|s| s.x < 3200.0 && s.y < 2400.0)
    );
}

#[test]
fn oversized_resize_is_rejected_and_keeps_the_old_pool() {
    let mut scene = Scene::from_config(&config(800.0, 600.0)).unwrap();
    assert!(scene.resize(Viewport::new(1.0e7, 1.0e7, 1.0)).is_err());
    assert_eq!(scene.viewport(), Viewport::new(800.0, 600.0, 1.0));
    assert_eq!(scene.stars().len(), 43);
}

#[test]
fn zero_area_viewport_yields_an_empty_plan() {
    let mut scene = Scene::from_config(&config(0.0, 600.0)).unwrap();
    assert!(scene.stars().is_empty());
    let plan = scene.frame(Duration::from_secs(60)).unwrap();
    assert!(plan.layers.is_empty());
    assert!(scene.meteors().is_empty());
}

#[test]
fn pointer_moves_reach_the_glow_layer() {
    let mut scene = Scene::from_config(&config(800.0, 600.0)).unwrap();
    scene.pointer_moved(Point::new(410.0, 320.0), Point::new(10.0, 20.0));
    let plan = scene.frame(Duration::ZERO).unwrap();
    let glow = plan.layer(LayerKind::PointerGlow).unwrap();
    match glow.ops[0].geometry {
        crate::render::plan::Geometry::Circle { center, .. } => {
            assert_eq!(center, Point::new(400.0, 300.0));
        }
        other => panic!("unexpected geometry {other:?}"),
    }
}

#[test]
fn same_seed_same_stars() {
    let a = Scene::from_config(&config(800.0, 600.0)).unwrap();
    let b = Scene::from_config(&config(800.0, 600.0)).unwrap();
    assert_eq!(a.stars(), b.stars());
}
