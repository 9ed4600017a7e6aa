use crate::World;
use gbox2d::contacts::{
    ContactEventKind, ContactEventRecorder, ContactFlags, ContactKind, ContactSetError,
};
use gbox2d::dynamics::Collider;
use gbox2d::math::{Isometry, Point};
use gbox2d::query::Unsupported;
use gbox2d::shape::{Ball, PointShape, Polygon, ShapeType};

#[test]
fn insert_links_both_bodies() {
    let mut world = World::new();
    let (b1, c1) = world.add(Ball::new(0.5), Isometry::identity());
    let (b2, c2) = world.add(Polygon::cuboid(1.0, 1.0), Isometry::translation(1.0, 0.0));
    let (b3, c3) = world.add(Ball::new(0.5), Isometry::translation(-1.0, 0.0));

    let h12 = world.contacts.insert(c1, c2, &world.colliders).unwrap();
    let h13 = world.contacts.insert(c3, c1, &world.colliders).unwrap();

    assert_eq!(world.contacts.len(), 2);
    assert_eq!(world.contacts.get(h12).unwrap().kind(), ContactKind::PolygonBall);
    assert_eq!(world.contacts.get(h13).unwrap().kind(), ContactKind::BallBall);

    let edges1: Vec<_> = world
        .contacts
        .contact_edges(b1)
        .iter()
        .map(|e| (e.other, e.contact))
        .collect();
    assert_eq!(edges1, vec![(b2, h12), (b3, h13)]);
    assert_eq!(world.contacts.contact_edges(b2).len(), 1);
    assert_eq!(world.contacts.contact_edges(b3)[0].other, b1);

    assert_eq!(world.contacts.contact_between(c2, c1).unwrap().0, h12);
    assert_eq!(world.contacts.contact_between(c1, c3).unwrap().0, h13);
    assert!(world.contacts.contact_between(c2, c3).is_none());
}

#[test]
fn insert_rejects_invalid_pairs() {
    let mut world = World::new();
    let (b1, c1) = world.add(Ball::new(0.5), Isometry::identity());
    let (_, c2) = world.add(Ball::new(0.5), Isometry::identity());
    let (_, p1) = world.add(PointShape::new(Point::origin()), Isometry::identity());
    let (_, p2) = world.add(PointShape::new(Point::origin()), Isometry::identity());
    let c3 = world.colliders.insert(Collider::new(Ball::new(0.1), b1));

    let handle = world.contacts.insert(c1, c2, &world.colliders).unwrap();
    assert_eq!(
        world.contacts.insert(c2, c1, &world.colliders),
        Err(ContactSetError::DuplicatePair(handle))
    );
    assert_eq!(
        world.contacts.insert(p1, p2, &world.colliders),
        Err(ContactSetError::Unsupported(Unsupported {
            shape_type1: ShapeType::Point,
            shape_type2: ShapeType::Point,
        }))
    );
    assert_eq!(
        world.contacts.insert(c1, c3, &world.colliders),
        Err(ContactSetError::SameBody(b1))
    );

    let _ = world.colliders.remove(c3);
    assert_eq!(
        world.contacts.insert(c2, c3, &world.colliders),
        Err(ContactSetError::InvalidCollider(c3))
    );
    assert_eq!(world.contacts.len(), 1);
}

#[test]
fn materials_are_mixed() {
    let mut world = World::new();
    let b1 = world.bodies.insert(Default::default());
    let b2 = world.bodies.insert(Default::default());
    let c1 = world.colliders.insert(
        Collider::new(Ball::new(0.5), b1)
            .with_friction(0.4)
            .with_restitution(0.1),
    );
    let c2 = world.colliders.insert(
        Collider::new(Ball::new(0.5), b2)
            .with_friction(0.9)
            .with_restitution(0.3)
            .sensor(true),
    );

    let handle = world.contacts.insert(c1, c2, &world.colliders).unwrap();
    let contact = world.contacts.get(handle).unwrap();

    assert_relative_eq!(contact.friction, 0.6, epsilon = 1.0e-6);
    assert_eq!(contact.restitution, 0.3);
    assert!(contact.flags().contains(ContactFlags::SENSOR));
    let friction = contact.friction;

    let events = world.step();
    assert_eq!(events.events()[0].point.friction, friction);
    assert_eq!(events.events()[0].point.restitution, 0.3);
}

#[test]
fn stale_contacts_are_skipped() {
    let mut world = World::new();
    let (_, c1) = world.add(Ball::new(0.5), Isometry::identity());
    let (_, c2) = world.add(Ball::new(0.5), Isometry::translation(0.5, 0.0));
    let (_, c3) = world.add(Ball::new(0.5), Isometry::translation(-0.5, 0.0));
    let h12 = world.contacts.insert(c1, c2, &world.colliders).unwrap();
    let h13 = world.contacts.insert(c1, c3, &world.colliders).unwrap();

    let _ = world.colliders.remove(c2);
    let events = world.step();

    assert_eq!(events.events().len(), 1);
    assert_eq!(events.events()[0].point.collider2, c3);
    assert!(!world.contacts.get(h12).unwrap().is_touching());
    assert!(world.contacts.get(h13).unwrap().is_touching());
}

#[test]
fn removing_a_collider_reports_its_points() {
    let mut world = World::new();
    let (b1, c1) = world.add(Polygon::cuboid(5.0, 0.5), Isometry::identity());
    let (_, c2) = world.add(Polygon::cuboid(0.5, 0.5), Isometry::translation(-2.0, 0.95));
    let (b3, c3) = world.add(Ball::new(0.5), Isometry::translation(2.0, 0.95));
    let h12 = world.contacts.insert(c1, c2, &world.colliders).unwrap();
    let h13 = world.contacts.insert(c1, c3, &world.colliders).unwrap();

    let first = world.step();
    assert_eq!(first.count(ContactEventKind::Add), 3);

    let mut recorder = ContactEventRecorder::new();
    let removed = world.contacts.remove_collider(
        c2,
        &world.colliders,
        &world.bodies,
        &mut world.scratch,
        Some(&mut recorder),
    );

    assert_eq!(removed, 1);
    assert_eq!(recorder.count(ContactEventKind::Remove), 2);
    assert!(world.contacts.get(h12).is_none());
    assert!(world.contacts.contact_between(c1, c2).is_none());
    assert_eq!(world.contacts.contact_edges(b1).len(), 1);
    assert_eq!(world.contacts.contact_edges(b1)[0].other, b3);

    let removed = world
        .contacts
        .remove(h13, &world.colliders, &world.bodies, &mut world.scratch, None)
        .unwrap();
    assert_eq!(removed.collider2(), c3);
    assert!(world.contacts.is_empty());
    assert!(world.contacts.contact_edges(b1).is_empty());
    assert!(world.contacts.contact_edges(b3).is_empty());
}

#[test]
fn reused_slots_do_not_revive_stale_contacts() {
    let mut world = World::new();
    let (_, c1) = world.add(Ball::new(0.5), Isometry::identity());
    let (b2, c2) = world.add(Ball::new(0.5), Isometry::translation(0.5, 0.0));
    let (_, c3) = world.add(Ball::new(0.5), Isometry::translation(-0.5, 0.0));
    let h12 = world.contacts.insert(c1, c2, &world.colliders).unwrap();
    let h13 = world.contacts.insert(c1, c3, &world.colliders).unwrap();
    let _ = world.step();

    // The new collider takes the slot of the removed one.
    let _ = world.colliders.remove(c2);
    let (b4, c4) = world.add(Ball::new(0.5), Isometry::translation(0.5, 0.0));
    assert_eq!(c4.into_raw_parts().0, c2.into_raw_parts().0);
    assert_ne!(c4, c2);

    let events = world.step();
    assert_eq!(events.events().len(), 1);
    assert_eq!(events.count(ContactEventKind::Persist), 1);
    assert_eq!(events.events()[0].point.collider2, c3);

    let h14 = world.contacts.insert(c1, c4, &world.colliders).unwrap();
    assert_ne!(h14, h12);
    let events = world.step();
    let added: Vec<_> = events
        .events()
        .iter()
        .filter(|e| e.kind == ContactEventKind::Add)
        .collect();
    assert_eq!(added.len(), 1);
    assert_eq!(added[0].point.collider2, c4);

    // Same for bodies and contacts.
    let _ = world
        .contacts
        .remove(h12, &world.colliders, &world.bodies, &mut world.scratch, None)
        .unwrap();
    assert!(world.contacts.get(h12).is_none());
    assert!(world.contacts.contact_edges(b2).is_empty());

    let _ = world.bodies.remove(b2);
    let b5 = world.bodies.insert(Default::default());
    assert_ne!(b5, b2);
    assert!(world.bodies.get(b2).is_none());
    assert!(world.contacts.contact_edges(b5).is_empty());
    assert_eq!(world.contacts.contact_edges(b4).len(), 1);
    assert!(world.contacts.get(h13).is_some());
}

#[test]
fn moving_a_collider_to_another_body_skips_its_contact() {
    let mut world = World::new();
    let (_, c1) = world.add(Ball::new(0.5), Isometry::identity());
    let (_, c2) = world.add(Ball::new(0.5), Isometry::translation(0.5, 0.0));
    let other = world.bodies.insert(Default::default());
    let _ = world.contacts.insert(c1, c2, &world.colliders).unwrap();
    assert_eq!(world.step().count(ContactEventKind::Add), 1);

    world.colliders.get_mut(c2).unwrap().parent = other;
    assert!(world.step().events().is_empty());
}
