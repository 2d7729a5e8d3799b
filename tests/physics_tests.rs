use gravity_sandbox::{
    BodyDesc, GravityType, Material, SandboxWorld, Shape, SimulationConfig, Vector2,
    constraints::Constraint,
    core::FeatureFlags,
};
use approx::assert_relative_eq;

const FRAME: f32 = 1.0 / 60.0;

/// A world with only the listed features switched on
fn world_with(features: FeatureFlags) -> SandboxWorld {
    let mut config = SimulationConfig::default();
    config.features = features;
    SandboxWorld::with_config(config)
}

fn ball(x: f32, y: f32, vx: f32, vy: f32, restitution: f32) -> BodyDesc {
    BodyDesc::dynamic(Shape::ball(10.0))
        .with_position(Vector2::new(x, y))
        .with_velocity(Vector2::new(vx, vy))
        .with_material(Material::new(1.0, 0.0, restitution))
}

#[test]
fn test_free_fall_follows_gravity() {
    let mut world = world_with(FeatureFlags::GRAVITY);
    let handle = world.create_body(ball(400.0, 100.0, 0.0, 0.0, 0.5)).unwrap();

    for _ in 0..30 {
        world.step(FRAME);
    }

    // Half a second under 980 px/s^2
    let body = world.get_body(handle).unwrap();
    assert_relative_eq!(body.get_linear_velocity().y, 490.0, epsilon = 0.1);
    assert!((body.get_position().y - (100.0 + 0.5 * 980.0 * 0.25)).abs() < 2.0);
}

#[test]
fn test_static_bodies_never_move() {
    let mut world = SandboxWorld::new();
    let anchor = world
        .create_body(BodyDesc::fixed(Shape::rect(60.0, 20.0)).with_position(Vector2::new(400.0, 300.0)))
        .unwrap();
    let faller = world.create_body(ball(400.0, 200.0, 0.0, 0.0, 0.9)).unwrap();
    world.add_constraint(anchor, faller, 100.0, 1.0).unwrap();
    world.create_body(ball(350.0, 300.0, 400.0, 0.0, 0.9)).unwrap();

    for _ in 0..240 {
        world.step(FRAME);
        let body = world.get_body(anchor).unwrap();
        assert_eq!(body.get_position(), Vector2::new(400.0, 300.0));
        assert!(body.get_linear_velocity().is_zero());
    }
}

#[test]
fn test_elastic_head_on_collision_exchanges_velocities() {
    let mut world = world_with(FeatureFlags::COLLISIONS);
    let a = world.create_body(ball(100.0, 300.0, 100.0, 0.0, 1.0)).unwrap();
    let b = world.create_body(ball(119.9, 300.0, -100.0, 0.0, 1.0)).unwrap();

    world.step(FRAME);

    assert_relative_eq!(world.get_body(a).unwrap().get_linear_velocity(), Vector2::new(-100.0, 0.0), epsilon = 1e-3);
    assert_relative_eq!(world.get_body(b).unwrap().get_linear_velocity(), Vector2::new(100.0, 0.0), epsilon = 1e-3);

    let contacts = world.events().get_collision_events_for_body(a);
    assert_eq!(contacts.len(), 1);
    assert!(contacts[0].impulse > 0.0);
}

#[test]
fn test_boundary_bounce_scales_by_restitution() {
    let mut world = world_with(FeatureFlags::BOUNDS);
    let handle = world.create_body(ball(400.0, 589.0, 0.0, 300.0, 0.5)).unwrap();

    world.step(FRAME);

    let body = world.get_body(handle).unwrap();
    assert_relative_eq!(body.get_linear_velocity().y, -150.0, epsilon = 1e-3);
    assert!(body.get_position().y <= 590.0);
}

#[test]
fn test_falling_body_rebounds_at_half_impact_speed() {
    let mut world = world_with(FeatureFlags::GRAVITY | FeatureFlags::BOUNDS);
    world.config_mut().sub_steps = 1;
    let handle = world.create_body(ball(400.0, 100.0, 0.0, 0.0, 0.5)).unwrap();

    let mut falling = 0.0;
    for _ in 0..120 {
        world.step(FRAME);
        let velocity = world.get_body(handle).unwrap().get_linear_velocity().y;
        if velocity < 0.0 {
            // The impact frame integrates gravity first, then reflects
            let impact = falling + 980.0 * FRAME;
            assert_relative_eq!(velocity, -0.5 * impact, epsilon = 1e-2);
            assert_relative_eq!(world.get_body(handle).unwrap().get_position().y, 590.0);
            return;
        }
        falling = velocity;
    }
    panic!("body never reached the floor");
}

#[test]
fn test_bounce_friction_scales_tangential_velocity() {
    let mut world = world_with(FeatureFlags::BOUNDS | FeatureFlags::FRICTION);
    world.config_mut().set_air_friction(0.0);
    let handle = world
        .create_body(
            BodyDesc::dynamic(Shape::ball(10.0))
                .with_position(Vector2::new(400.0, 589.9))
                .with_velocity(Vector2::new(100.0, 100.0))
                .with_material(Material::new(1.0, 0.25, 1.0)),
        )
        .unwrap();

    world.step(FRAME);

    let velocity = world.get_body(handle).unwrap().get_linear_velocity();
    assert_relative_eq!(velocity, Vector2::new(75.0, -100.0), epsilon = 1e-3);
}

#[test]
fn test_constraint_converges_to_rest_length() {
    let mut world = world_with(FeatureFlags::empty());
    let a = world.create_body(ball(300.0, 300.0, 0.0, 0.0, 0.5)).unwrap();
    let b = world.create_body(ball(450.0, 300.0, 0.0, 0.0, 0.5)).unwrap();
    let link = world.add_constraint(a, b, 100.0, 1.0).unwrap();

    world.step(FRAME);

    let pa = world.get_body(a).unwrap().get_position();
    let pb = world.get_body(b).unwrap().get_position();
    assert!((pa.distance(&pb) - 100.0).abs() <= 1.0);
    assert_eq!(world.get_constraint(link).unwrap().get_rest_length(), 100.0);
}

#[test]
fn test_soft_constraint_approaches_rest_length() {
    let mut world = world_with(FeatureFlags::FRICTION);
    let a = world.create_body(ball(300.0, 300.0, 0.0, 0.0, 0.5)).unwrap();
    let b = world.create_body(ball(450.0, 300.0, 0.0, 0.0, 0.5)).unwrap();
    world.config_mut().constraint_velocity_kick = 0.0;
    world.add_constraint(a, b, 100.0, 0.2).unwrap();

    let mut previous_error = 50.0;
    for _ in 0..10 {
        world.step(FRAME);
        let pa = world.get_body(a).unwrap().get_position();
        let pb = world.get_body(b).unwrap().get_position();
        let error = pa.distance(&pb) - 100.0;
        assert!(error >= 0.0 && error < previous_error);
        previous_error = error;
    }
}

#[test]
fn test_removal_cascades_to_constraints() {
    let mut world = SandboxWorld::new();
    let hub = world.create_body(ball(400.0, 300.0, 0.0, 0.0, 0.5)).unwrap();
    let mut spokes = Vec::new();
    for i in 0..4 {
        let angle = i as f32 * std::f32::consts::FRAC_PI_2;
        let spoke = world
            .create_body(ball(400.0 + 60.0 * angle.cos(), 300.0 + 60.0 * angle.sin(), 0.0, 0.0, 0.5))
            .unwrap();
        world.add_constraint(hub, spoke, 60.0, 0.5).unwrap();
        spokes.push(spoke);
    }
    world.add_constraint(spokes[0], spokes[1], 85.0, 0.5).unwrap();

    world.remove_body(hub);

    assert_eq!(world.constraint_count(), 1);
    let bodies = &world.context().bodies;
    assert!(world.constraints().all(|(_, c)| c.is_valid(bodies) && !c.involves_body(hub)));

    // Stepping afterwards must not touch the removed body
    world.step(FRAME);
    assert!(world.get_body(hub).is_err());
}

#[test]
fn test_zero_distance_is_skipped() {
    let mut world = world_with(FeatureFlags::COLLISIONS);
    let a = world.create_body(ball(200.0, 200.0, 0.0, 0.0, 0.5)).unwrap();
    let b = world.create_body(ball(200.0, 200.0, 0.0, 0.0, 0.5)).unwrap();
    world.add_constraint(a, b, 30.0, 1.0).unwrap();

    world.step(FRAME);

    for handle in [a, b] {
        let body = world.get_body(handle).unwrap();
        assert!(body.get_position().is_finite());
        assert!(body.get_linear_velocity().is_finite());
    }
}

#[test]
fn test_speed_ceiling() {
    let mut world = world_with(FeatureFlags::empty());
    world.config_mut().max_speed = Some(500.0);
    let handle = world.create_body(ball(400.0, 300.0, 3000.0, 4000.0, 0.5)).unwrap();

    world.step(FRAME);

    assert_relative_eq!(world.get_body(handle).unwrap().get_linear_velocity().length(), 500.0, epsilon = 1e-2);

    world.config_mut().max_speed = None;
    world.get_body_mut(handle).unwrap().set_linear_velocity(Vector2::new(3000.0, 4000.0));
    world.step(FRAME);
    assert_relative_eq!(world.get_body(handle).unwrap().get_linear_velocity().length(), 5000.0, epsilon = 1e-1);
}

#[test]
fn test_point_gravity_pulls_toward_source() {
    let mut world = world_with(FeatureFlags::GRAVITY);
    world.config_mut().gravity = GravityType::Point {
        position: Vector2::new(400.0, 300.0),
        strength: 1.0e6,
    };
    let handle = world.create_body(ball(600.0, 300.0, 0.0, 0.0, 0.5)).unwrap();

    world.step(FRAME);

    let velocity = world.get_body(handle).unwrap().get_linear_velocity();
    assert!(velocity.x < 0.0);
    assert_relative_eq!(velocity.y, 0.0, epsilon = 1e-4);
}
