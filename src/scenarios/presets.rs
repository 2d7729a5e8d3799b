use std::f32::consts::PI;

use rand::Rng;

use crate::bodies::{BodyDesc, Color, Material};
use crate::core::GravityType;
use crate::math::Vector2;
use crate::scenarios::ScenarioBuilder;
use crate::shapes::{Shape, ShapeKind};
use crate::Result;

const SUN_RADIUS: f32 = 30.0;
const SUN_GRAVITY: f32 = 2.0e6;
const PLANET_COUNT: usize = 5;

const PENDULUM_LENGTH: f32 = 200.0;

const CHAIN_LINKS: usize = 10;
const CHAIN_LINK_RADIUS: f32 = 8.0;
const CHAIN_SPACING: f32 = 28.0;

const TOWER_COLUMNS: usize = 3;
const TOWER_ROWS: usize = 6;
const TOWER_BLOCK: f32 = 36.0;

const GROUP_SIDE: usize = 3;
const GROUP_BALL_RADIUS: f32 = 12.0;
const GROUP_SPEED: f32 = 300.0;

const CHAOS_BODIES: usize = 30;

/// A static sun with planets on circular orbits around it
pub fn solar<R: Rng + ?Sized>(builder: &mut ScenarioBuilder, rng: &mut R) -> Result<()> {
    let center = builder.bounds().center();
    builder.gravity(GravityType::Point {
        position: center,
        strength: SUN_GRAVITY,
    });
    builder.disable_friction();

    builder.body(
        BodyDesc::fixed(Shape::ball(SUN_RADIUS))
            .with_position(center)
            .with_color(Color::SUN),
    )?;

    let innermost = SUN_RADIUS * 2.5;
    let outermost = 0.45 * builder.bounds().width().min(builder.bounds().height());
    let spacing = (outermost - innermost) / (PLANET_COUNT - 1) as f32;

    for i in 0..PLANET_COUNT {
        let orbit = innermost + spacing * i as f32;
        let angle = rng.gen_range(0.0..2.0 * PI);
        let offset = Vector2::from_polar(orbit, angle);

        // Circular orbit speed for an inverse-square field
        let speed = (SUN_GRAVITY / orbit).sqrt();

        builder.body(
            BodyDesc::dynamic(Shape::ball(rng.gen_range(5.0..10.0)))
                .with_position(center + offset)
                .with_velocity(offset.perpendicular().normalize() * speed)
                .with_color(Color::PALETTE[i % Color::PALETTE.len()]),
        )?;
    }

    Ok(())
}

/// A weight hanging from a fixed anchor, released from the side
pub fn pendulum<R: Rng + ?Sized>(builder: &mut ScenarioBuilder, rng: &mut R) -> Result<()> {
    let anchor_pos = Vector2::new(builder.bounds().center().x, builder.bounds().min.y + 80.0);
    let anchor = builder.body(BodyDesc::fixed(Shape::ball(8.0)).with_position(anchor_pos))?;

    let angle = PI / 4.0 + rng.gen_range(-0.1..0.1);
    let weight_pos = anchor_pos + Vector2::new(angle.sin(), angle.cos()) * PENDULUM_LENGTH;
    let weight = builder.body(
        BodyDesc::dynamic(Shape::ball(20.0))
            .with_position(weight_pos)
            .with_material(Material::metal())
            .with_color(Color::PALETTE[0]),
    )?;

    builder.link(anchor, weight, 1.0)?;
    Ok(())
}

/// A horizontal chain of links hanging from a fixed anchor
pub fn chain<R: Rng + ?Sized>(builder: &mut ScenarioBuilder, rng: &mut R) -> Result<()> {
    let bounds = builder.bounds();
    let start = Vector2::new(
        bounds.center().x - 0.5 * CHAIN_SPACING * CHAIN_LINKS as f32,
        bounds.min.y + 60.0,
    );

    let mut previous = builder.body(BodyDesc::fixed(Shape::ball(CHAIN_LINK_RADIUS)).with_position(start))?;
    for i in 1..=CHAIN_LINKS {
        let jitter = Vector2::new(0.0, rng.gen_range(-1.0..1.0));
        let link = builder.body(
            BodyDesc::dynamic(Shape::ball(CHAIN_LINK_RADIUS))
                .with_position(start + Vector2::new(CHAIN_SPACING * i as f32, 0.0) + jitter)
                .with_color(Color::PALETTE[1]),
        )?;
        builder.link(previous, link, 0.9)?;
        previous = link;
    }

    Ok(())
}

/// Columns of boxes stacked on the floor
pub fn tower<R: Rng + ?Sized>(builder: &mut ScenarioBuilder, rng: &mut R) -> Result<()> {
    let bounds = builder.bounds();
    let shape = Shape::rect(TOWER_BLOCK, TOWER_BLOCK);

    // Stacking is by bounding circle, so blocks sit one diameter apart
    let pitch = 2.0 * shape.bounding_radius();
    let first_x = bounds.center().x - pitch * (TOWER_COLUMNS - 1) as f32 * 0.5;

    for column in 0..TOWER_COLUMNS {
        for row in 0..TOWER_ROWS {
            let x = first_x + pitch * column as f32 + rng.gen_range(-0.5..0.5);
            let y = bounds.max.y - 0.5 * pitch - pitch * row as f32;
            builder.body(
                BodyDesc::dynamic(shape)
                    .with_position(Vector2::new(x, y))
                    .with_material(Material::wood())
                    .with_color(Color::PALETTE[(column + row) % Color::PALETTE.len()]),
            )?;
        }
    }

    Ok(())
}

/// Two square groups of balls launched at each other
pub fn collision<R: Rng + ?Sized>(builder: &mut ScenarioBuilder, rng: &mut R) -> Result<()> {
    let bounds = builder.bounds();
    let center = bounds.center();
    let pitch = GROUP_BALL_RADIUS * 2.0 + 2.0;
    let half_group = pitch * (GROUP_SIDE - 1) as f32 * 0.5;

    let groups = [
        (bounds.min.x + 0.2 * bounds.width(), 1.0, Color::PALETTE[0]),
        (bounds.max.x - 0.2 * bounds.width(), -1.0, Color::PALETTE[2]),
    ];

    for (group_x, direction, color) in groups {
        for row in 0..GROUP_SIDE {
            for column in 0..GROUP_SIDE {
                let position = Vector2::new(
                    group_x - half_group + pitch * column as f32,
                    center.y - half_group + pitch * row as f32,
                );
                let velocity = Vector2::new(
                    direction * GROUP_SPEED + rng.gen_range(-10.0..10.0),
                    rng.gen_range(-10.0..10.0),
                );
                builder.body(
                    BodyDesc::dynamic(Shape::ball(GROUP_BALL_RADIUS))
                        .with_position(position)
                        .with_velocity(velocity)
                        .with_material(Material::rubber())
                        .with_color(color),
                )?;
            }
        }
    }

    Ok(())
}

/// Random bodies of random shape, size and color flying around
pub fn chaos<R: Rng + ?Sized>(builder: &mut ScenarioBuilder, rng: &mut R) -> Result<()> {
    let bounds = builder.bounds();
    let margin = 40.0;
    let span = Vector2::new(
        (bounds.width() - 2.0 * margin).max(0.0),
        (bounds.height() - 2.0 * margin).max(0.0),
    );

    for _ in 0..CHAOS_BODIES {
        let kind = ShapeKind::ALL[rng.gen_range(0..ShapeKind::ALL.len())];
        let shape = Shape::from_kind(kind, rng.gen_range(10.0..25.0));
        let position = Vector2::new(
            bounds.min.x + margin + rng.gen::<f32>() * span.x,
            bounds.min.y + margin + rng.gen::<f32>() * span.y,
        );
        let velocity = Vector2::new(rng.gen_range(-200.0..200.0), rng.gen_range(-200.0..200.0));
        let material = Material::new(1.0, rng.gen_range(0.0..0.5), rng.gen_range(0.3..0.9));

        builder.body(
            BodyDesc::dynamic(shape)
                .with_position(position)
                .with_velocity(velocity)
                .with_angular_velocity(rng.gen_range(-3.0..3.0))
                .with_material(material)
                .with_color(Color::random(rng)),
        )?;
    }

    Ok(())
}
