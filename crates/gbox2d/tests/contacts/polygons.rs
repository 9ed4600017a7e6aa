use crate::World;
use gbox2d::contacts::ContactEventKind;
use gbox2d::math::{Isometry, Real, Vector};
use gbox2d::query::ContactId;
use gbox2d::shape::{Ball, Polygon};

#[test]
fn stacked_box_keeps_two_points() {
    let mut world = World::new();
    let (_, ground) = world.add(Polygon::cuboid(5.0, 0.5), Isometry::identity());
    let (_, cube) = world.add(Polygon::cuboid(0.5, 0.5), Isometry::translation(0.0, 0.95));
    let handle = world.contacts.insert(ground, cube, &world.colliders).unwrap();

    let first = world.step();
    assert_eq!(first.count(ContactEventKind::Add), 2);
    let ids: Vec<ContactId> = first.events().iter().map(|e| e.point.id).collect();

    for (i, point) in world
        .contacts
        .get_mut(handle)
        .unwrap()
        .manifold_mut()
        .points
        .iter_mut()
        .enumerate()
    {
        point.normal_impulse = 1.0 + i as Real;
    }

    for _ in 0..3 {
        let events = world.step();
        assert_eq!(events.count(ContactEventKind::Persist), 2);
        assert_eq!(events.events().len(), 2);

        let persisted: Vec<ContactId> = events.events().iter().map(|e| e.point.id).collect();
        assert_eq!(persisted, ids);
    }

    let manifold = world.contacts.get(handle).unwrap().manifold();
    assert_eq!(manifold.points[0].normal_impulse, 1.0);
    assert_eq!(manifold.points[1].normal_impulse, 2.0);
}

#[test]
fn sliding_box_persists() {
    let mut world = World::new();
    let (_, ground) = world.add(Polygon::cuboid(5.0, 0.5), Isometry::identity());
    let (cube_body, cube) = world.add(Polygon::cuboid(0.5, 0.5), Isometry::translation(-1.0, 0.95));
    let _ = world.contacts.insert(ground, cube, &world.colliders).unwrap();

    let _ = world.step();

    for i in 1..10 {
        world.set_position(cube_body, Isometry::translation(-1.0 + i as Real * 0.2, 0.95));
        let events = world.step();
        assert_eq!(events.count(ContactEventKind::Persist), 2);
        assert_eq!(events.events().len(), 2);
    }
}

#[test]
fn tumbling_box_replaces_its_points() {
    let mut world = World::new();
    let (_, ground) = world.add(Polygon::cuboid(5.0, 0.5), Isometry::identity());
    let (cube_body, cube) = world.add(Polygon::cuboid(0.5, 0.5), Isometry::translation(0.0, 0.95));
    let _ = world.contacts.insert(ground, cube, &world.colliders).unwrap();

    let first = world.step();
    assert_eq!(first.count(ContactEventKind::Add), 2);

    // Another face of the box is now resting on the ground.
    world.set_position(
        cube_body,
        Isometry::new(Vector::new(0.0, 0.95), core::f64::consts::FRAC_PI_2 as Real),
    );
    let second = world.step();
    let kinds: Vec<_> = second.events().iter().map(|e| e.kind).collect();

    assert_eq!(
        kinds,
        [
            ContactEventKind::Add,
            ContactEventKind::Add,
            ContactEventKind::Remove,
            ContactEventKind::Remove
        ]
    );

    // The removed points are the ones of the first step, in the same order.
    assert_eq!(second.events()[2].point.id, first.events()[0].point.id);
    assert_eq!(second.events()[3].point.id, first.events()[1].point.id);
}

#[test]
fn ball_rolling_over_a_corner_changes_feature() {
    let mut world = World::new();
    let (_, ground) = world.add(Polygon::cuboid(1.0, 0.5), Isometry::identity());
    let (ball_body, ball) = world.add(Ball::new(0.5), Isometry::translation(0.0, 0.95));
    let handle = world.contacts.insert(ball, ground, &world.colliders).unwrap();

    // The polygon always comes first.
    assert_eq!(world.contacts.get(handle).unwrap().collider1(), ground);

    let first = world.step();
    assert_eq!(first.count(ContactEventKind::Add), 1);
    assert_relative_eq!(first.events()[0].point.normal, Vector::y(), epsilon = 1.0e-5);

    world.set_position(ball_body, Isometry::translation(1.2, 0.85));
    let second = world.step();

    assert_eq!(second.count(ContactEventKind::Add), 1);
    assert_eq!(second.count(ContactEventKind::Remove), 1);
    assert_eq!(
        second.events()[0].point.id.features().incident_vertex,
        2
    );
    assert_ne!(second.events()[0].point.id, first.events()[0].point.id);
}
