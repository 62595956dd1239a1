use crate::{wrap_point, Bird, Rect, Time};
use hecs::World;

/// Advance every bird along its heading
pub fn move_birds(world: &mut World, time: &Time) {
    for (_entity, bird) in world.query_mut::<&mut Bird>() {
        bird.pos += bird.velocity() * time.dt;
    }
}

/// Wrap birds that left `bounds` back in from the opposite edge
pub fn wrap_birds(world: &mut World, bounds: &Rect) {
    for (_entity, bird) in world.query_mut::<&mut Bird>() {
        bird.pos = wrap_point(bird.pos, bounds);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_move_birds_integrates_velocity() {
        let mut world = World::new();
        let entity = world.spawn((Bird::new(Vec2::new(300.0, 400.0), 0.0, 100.0),));

        move_birds(&mut world, &Time::new(0.5, 0.0));

        let bird = world.get::<&Bird>(entity).unwrap();
        assert!((bird.pos - Vec2::new(350.0, 400.0)).length() < 1e-4);
    }

    #[test]
    fn test_move_birds_zero_dt_is_noop() {
        let mut world = World::new();
        let entity = world.spawn((Bird::new(Vec2::new(1.0, 2.0), 1.0, 100.0),));

        move_birds(&mut world, &Time::new(0.0, 3.0));

        assert_eq!(world.get::<&Bird>(entity).unwrap().pos, Vec2::new(1.0, 2.0));
    }

    #[test]
    fn test_wrap_birds_only_touches_escapees() {
        let mut world = World::new();
        let bounds = Rect::from_origin_size(Vec2::ZERO, Vec2::new(100.0, 100.0));
        let inside = world.spawn((Bird::new(Vec2::new(10.0, 10.0), 0.0, 1.0),));
        let outside = world.spawn((Bird::new(Vec2::new(101.0, -2.0), 0.0, 1.0),));

        wrap_birds(&mut world, &bounds);

        assert_eq!(world.get::<&Bird>(inside).unwrap().pos, Vec2::new(10.0, 10.0));
        assert_eq!(world.get::<&Bird>(outside).unwrap().pos, Vec2::new(1.0, 98.0));
    }
}
