use anyhow::Result;
use physics2d::{Body, Material, Vector2, World};

fn v(x: f64, y: f64) -> Vector2 {
    Vector2::new(x, y)
}

#[test]
fn circles_overlap_only_when_closer_than_their_radii() -> Result<()> {
    let mut world = World::new();
    world.add_circle(v(0.0, 0.0), 0.5)?;
    world.add_circle(v(0.9, 0.0), 0.5)?;
    let collisions = world.detect();
    assert_eq!(collisions.len(), 1);
    assert!((collisions[0].depth - 0.1).abs() < 1e-12);
    assert!((collisions[0].normal - v(1.0, 0.0)).length() < 1e-12);
    assert!((collisions[0].contact_point - v(0.5, 0.0)).length() < 1e-12);

    let mut apart = World::new();
    apart.add_circle(v(0.0, 0.0), 0.5)?;
    apart.add_circle(v(1.1, 0.0), 0.5)?;
    assert!(apart.detect().is_empty());
    Ok(())
}

#[test]
fn elastic_head_on_collision_swaps_velocities() -> Result<()> {
    let mut world = World::new();
    let a = world.add_body(Body::circle(v(0.0, 0.0), 0.5)?.with_velocity(v(2.0, 0.0)));
    let b = world.add_body(Body::circle(v(0.9, 0.0), 0.5)?);

    let events = world.step(0.01)?;
    assert_eq!(events.len(), 1);

    let va = world.body(a).expect("a").velocity;
    let vb = world.body(b).expect("b").velocity;
    assert!(va.length() < 1e-9, "va = {va:?}");
    assert!((vb - v(2.0, 0.0)).length() < 1e-9, "vb = {vb:?}");
    Ok(())
}

#[test]
fn normal_points_from_first_to_second_body() -> Result<()> {
    let mut world = World::new();
    world.add_rectangle(v(0.0, 1.0), 2.0, 2.0)?;
    world.add_rectangle(v(0.0, -0.8), 2.0, 2.0)?;
    let collisions = world.detect();
    assert_eq!(collisions.len(), 1);
    assert!((collisions[0].normal - v(0.0, -1.0)).length() < 1e-12);
    assert!((collisions[0].depth - 0.2).abs() < 1e-12);
    Ok(())
}

#[test]
fn kinematic_body_is_never_pushed() -> Result<()> {
    for restitution in [0.0, 0.5, 1.0] {
        let mut world = World::new();
        let wall = world.add_body(
            Body::rectangle(v(2.0, 0.0), 1.0, 4.0)?
                .with_restitution(restitution)?
                .kinematic(),
        );
        world.add_body(
            Body::circle(v(1.2, 0.0), 0.5)?
                .with_velocity(v(5.0, 0.0))
                .with_restitution(restitution)?,
        );
        world.add_body(Body::rectangle(v(2.0, 0.3), 1.0, 1.0)?.with_velocity(v(-1.0, 0.0)));

        for _ in 0..60 {
            world.step(1.0 / 60.0)?;
        }
        let wall = world.body(wall).expect("wall");
        assert_eq!(wall.velocity, Vector2::ZERO);
        assert_eq!(wall.position(), v(2.0, 0.0));
    }
    Ok(())
}

#[test]
fn broad_phase_reports_only_the_overlapping_pair() -> Result<()> {
    let mut world = World::new();
    let ids = (0..5)
        .map(|i| world.add_rectangle(v(f64::from(i) * 3.0, 0.0), 1.0, 1.0))
        .collect::<Result<Vec<_>, _>>()?;
    assert!(world.candidate_pairs().is_empty());

    world.body_mut(ids[3]).expect("body").translate(v(-5.5, 0.0));
    assert_eq!(world.candidate_pairs(), vec![(1, 3)]);
    Ok(())
}

#[test]
fn circle_resting_on_polygon_is_pushed_out_of_it() -> Result<()> {
    let mut world = World::new();
    world.add_body(
        Body::rectangle(v(0.0, 0.0), 4.0, 1.0)?
            .with_material(Material::inelastic())
            .kinematic(),
    );
    let ball = world.add_body(Body::circle(v(0.3, 0.9), 0.5)?.with_material(Material::inelastic()));

    let events = world.step(0.0)?;
    assert_eq!(events.len(), 1);
    // The circle is always the first body of a circle-polygon event.
    assert_eq!(events[0].body_a, ball);
    assert!((events[0].normal - v(0.0, -1.0)).length() < 1e-12);
    assert!((events[0].depth - 0.1).abs() < 1e-12);

    let center = world.body(ball).expect("ball").position();
    assert!((center - v(0.3, 1.0)).length() < 1e-12);
    Ok(())
}
