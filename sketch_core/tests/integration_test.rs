use glam::Vec2;
use hecs::World;
use sketch_core::*;

const WINDOW: Vec2 = Vec2::new(1000.0, 600.0);

#[test]
fn test_step_moves_bird_along_heading() {
    let mut world = World::new();
    let mut time = Time::new(0.05, 0.0);
    let bird = create_bird(&mut world, Vec2::new(300.0, 400.0), 0.0, 100.0);

    step(&mut world, &mut time, None);

    let pos = world.get::<&Bird>(bird).unwrap().pos;
    assert!((pos - Vec2::new(305.0, 400.0)).length() < 1e-3);
    assert!((time.now - 0.05).abs() < 1e-6);
}

#[test]
fn test_step_clamps_large_dt() {
    let mut world = World::new();
    let mut time = Time::new(5.0, 0.0);
    let bird = create_bird(&mut world, Vec2::ZERO, 0.0, 100.0);

    step(&mut world, &mut time, None);

    // Only MAX_DT worth of motion
    let pos = world.get::<&Bird>(bird).unwrap().pos;
    assert!((pos.x - 100.0 * Params::MAX_DT).abs() < 1e-3);
    assert!((time.now - Params::MAX_DT).abs() < 1e-6);
}

#[test]
fn test_step_ignores_negative_and_nan_dt() {
    let mut world = World::new();
    let bird = create_bird(&mut world, Vec2::new(1.0, 1.0), 0.0, 100.0);

    for dt in [-0.5, f32::NAN] {
        let mut time = Time::new(dt, 2.0);
        step(&mut world, &mut time, None);
        assert_eq!(time.now, 2.0);
    }

    assert_eq!(world.get::<&Bird>(bird).unwrap().pos, Vec2::new(1.0, 1.0));
}

#[test]
fn test_step_wraps_toroidally() {
    let mut world = World::new();
    let bounds = Rect::from_origin_size(Vec2::ZERO, Vec2::new(100.0, 100.0));
    let east = create_bird(&mut world, Vec2::new(99.0, 50.0), 0.0, 100.0);
    let north = create_bird(&mut world, Vec2::new(50.0, 1.0), -std::f32::consts::FRAC_PI_2, 100.0);

    let mut time = Time::new(0.05, 0.0);
    step(&mut world, &mut time, Some(&bounds));

    let east_pos = world.get::<&Bird>(east).unwrap().pos;
    assert!((east_pos.x - 4.0).abs() < 1e-3, "east bird at {east_pos:?}");
    let north_pos = world.get::<&Bird>(north).unwrap().pos;
    assert!((north_pos.y - 96.0).abs() < 1e-3, "north bird at {north_pos:?}");
}

#[test]
fn test_flock_stays_inside_world_over_time() {
    let config = Config {
        bird_count: 50,
        bird_speed: 900.0,
        ..Config::new()
    };
    let mut sketch = Sketch::new(SketchKind::Flock, config, WINDOW).unwrap();

    for _ in 0..600 {
        sketch.update(1.0 / 60.0);
    }

    let bounds = sketch.view().world();
    for bird in sketch.birds() {
        assert!(
            bird.pos.x >= bounds.min.x && bird.pos.x < bounds.max.x,
            "bird escaped: {:?}",
            bird.pos
        );
        assert!(bird.pos.y >= bounds.min.y && bird.pos.y < bounds.max.y);
    }
}

#[test]
fn test_pair_birds_fly_off_screen() {
    let mut sketch = Sketch::new(SketchKind::Pair, Config::new(), WINDOW).unwrap();
    for _ in 0..(60 * 20) {
        sketch.update(1.0 / 60.0);
    }

    let world = sketch.view().world();
    assert!(sketch.birds().iter().all(|bird| !world.contains(bird.pos)));
}

#[test]
fn test_world_sketch_pan_and_cull() {
    let config = Config {
        bird_count: 200,
        ..Config::new()
    };
    let mut sketch = Sketch::new(SketchKind::World, config, WINDOW).unwrap();

    let frame = sketch.frame();
    assert_eq!(frame.stats.total(), 200);
    assert!(frame.stats.culled_birds > 0, "a 1000x600 camera over 4000x3000 should cull");

    // Drag the world far to the right and down: camera hits the top-left corner
    sketch.pan(Vec2::new(5000.0, 5000.0));
    assert_eq!(sketch.view().camera().min, Vec2::ZERO);

    let visible = sketch.frame().stats.visible_birds;
    let expected = sketch
        .birds()
        .iter()
        .filter(|bird| sketch.view().is_in_view(bird.pos, sketch.config().cull_margin()))
        .count();
    assert_eq!(visible, expected);
}

#[test]
fn test_world_to_phy_after_pan_keeps_birds_consistent() {
    let mut sketch = Sketch::new(SketchKind::World, Config::new(), WINDOW).unwrap();
    sketch.pan(Vec2::new(-200.0, 100.0));

    let view = sketch.view();
    let camera = view.camera();
    assert_eq!(view.world_to_phy(camera.min), Vec2::ZERO);
    assert_eq!(view.world_to_phy(camera.max), WINDOW);
    assert!(view.world().contains(camera.min) && view.world().contains(camera.max));
}

#[test]
fn test_same_seed_same_flock() {
    let a = Sketch::new(SketchKind::World, Config::new(), WINDOW).unwrap();
    let b = Sketch::new(SketchKind::World, Config::new(), WINDOW).unwrap();
    assert_eq!(a.birds(), b.birds());

    let c = Sketch::new(
        SketchKind::World,
        Config {
            seed: 1,
            ..Config::new()
        },
        WINDOW,
    )
    .unwrap();
    assert_ne!(a.birds(), c.birds());
}

#[test]
fn test_void_frame_follows_time() {
    let mut sketch = Sketch::new(SketchKind::Void, Config::new(), WINDOW).unwrap();
    let first = sketch.frame();
    sketch.update(0.05);
    let second = sketch.frame();

    assert_eq!(first.paths.len(), 4);
    assert_ne!(first.paths[0], second.paths[0]);
    assert!(sketch.birds().is_empty());
}

#[test]
fn test_clock_keeps_running_after_long_uptime() {
    let mut world = World::new();
    let mut time = Time::new(Params::FIXED_DT, 600_000.0);

    step(&mut world, &mut time, None);
    let start = time.now;
    assert!(start < Params::CLOCK_PERIOD);

    for _ in 0..60 {
        step(&mut world, &mut time, None);
    }

    let advanced = (time.now - start).rem_euclid(Params::CLOCK_PERIOD);
    assert!((advanced - 1.0).abs() < 1e-3, "clock advanced {advanced}");
    assert!(time.now >= 0.0 && time.now < Params::CLOCK_PERIOD);
}
