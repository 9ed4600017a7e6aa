use crate::World;
use gbox2d::contacts::ContactEventKind;
use gbox2d::math::{Isometry, Vector};
use gbox2d::shape::Ball;

#[test]
fn separated_circles_start_touching() {
    let mut world = World::new();
    let (_, c1) = world.add(Ball::new(0.5), Isometry::identity());
    let (b2, c2) = world.add(Ball::new(0.5), Isometry::translation(2.0, 0.0));
    let handle = world.contacts.insert(c1, c2, &world.colliders).unwrap();

    let events = world.step();
    assert!(events.events().is_empty());
    assert_eq!(world.contacts.get(handle).unwrap().manifold_count(), 0);

    world.set_position(b2, Isometry::translation(0.8, 0.0));
    let events = world.step();
    let contact = world.contacts.get(handle).unwrap();

    assert_eq!(events.events().len(), 1);
    assert_eq!(events.events()[0].kind, ContactEventKind::Add);
    assert_eq!(contact.manifold().len(), 1);
    assert_eq!(contact.manifold_count(), 1);
    assert!(contact.is_touching());

    let point = &contact.manifold().points[0];
    assert_eq!(point.normal_impulse, 0.0);
    assert_eq!(point.tangent_impulse, 0.0);
    assert_relative_eq!(point.separation, -0.2, epsilon = 1.0e-5);
    assert_relative_eq!(events.events()[0].point.normal, Vector::x(), epsilon = 1.0e-5);
}

#[test]
fn static_circles_persist_their_impulses() {
    let mut world = World::new();
    let (_, c1) = world.add(Ball::new(0.5), Isometry::identity());
    let (_, c2) = world.add(Ball::new(0.5), Isometry::translation(0.8, 0.0));
    let handle = world.contacts.insert(c1, c2, &world.colliders).unwrap();

    let first = world.step();
    assert_eq!(first.count(ContactEventKind::Add), 1);
    let id = first.events()[0].point.id;

    // Emulate the constraints solver.
    let point = &mut world.contacts.get_mut(handle).unwrap().manifold_mut().points[0];
    point.normal_impulse = 1.5;
    point.tangent_impulse = -0.25;

    let second = world.step();
    assert_eq!(second.events().len(), 1);
    assert_eq!(second.events()[0].kind, ContactEventKind::Persist);
    assert_eq!(second.events()[0].point.id, id);

    let point = &world.contacts.get(handle).unwrap().manifold().points[0];
    assert_eq!(point.normal_impulse, 1.5);
    assert_eq!(point.tangent_impulse, -0.25);
}

#[test]
fn separating_circles_remove_their_point() {
    let mut world = World::new();
    let (b1, c1) = world.add(Ball::new(0.5), Isometry::identity());
    let (b2, c2) = world.add(Ball::new(0.5), Isometry::translation(0.8, 0.0));
    let handle = world.contacts.insert(c1, c2, &world.colliders).unwrap();

    let first = world.step();
    let id = first.events()[0].point.id;
    let local_p1 = world.contacts.get(handle).unwrap().manifold().points[0].local_p1;

    // Both bodies move: the removed point follows the current pose of the first one.
    let pos1 = Isometry::new(Vector::new(0.0, 1.0), 0.3);
    world.set_position(b1, pos1);
    world.set_position(b2, Isometry::translation(3.0, 0.0));
    let second = world.step();
    let contact = world.contacts.get(handle).unwrap();

    assert_eq!(contact.manifold().len(), 0);
    assert_eq!(contact.manifold_count(), 0);
    assert!(contact.manifolds().is_empty());
    assert!(!contact.is_touching());

    assert_eq!(second.events().len(), 1);
    let event = &second.events()[0];
    assert_eq!(event.kind, ContactEventKind::Remove);
    assert_eq!(event.point.id, id);
    // Removed points keep the geometry of the previous step.
    assert_relative_eq!(event.point.separation, -0.2, epsilon = 1.0e-5);
    assert_relative_eq!(event.point.normal, pos1 * Vector::x(), epsilon = 1.0e-5);
    assert_relative_eq!(event.point.position, pos1 * local_p1, epsilon = 1.0e-5);
    assert_relative_eq!(
        world.contacts.get(handle).unwrap().prev_manifold().points[0].local_p1,
        local_p1
    );
}

#[test]
fn coincident_circles_use_an_arbitrary_normal() {
    let mut world = World::new();
    let (_, c1) = world.add(Ball::new(0.5), Isometry::identity());
    let (_, c2) = world.add(Ball::new(0.25), Isometry::identity());
    let handle = world.contacts.insert(c1, c2, &world.colliders).unwrap();

    let events = world.step();
    let contact = world.contacts.get(handle).unwrap();

    assert_eq!(events.count(ContactEventKind::Add), 1);
    let normal = events.events()[0].point.normal;
    assert!(normal.x.is_finite() && normal.y.is_finite());
    assert_relative_eq!(contact.manifold().points[0].separation, -0.75, epsilon = 1.0e-5);
}
