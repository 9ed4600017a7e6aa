#[macro_use]
extern crate approx;

use gbox2d::contacts::{ContactEventRecorder, ContactSet, ScratchPool};
use gbox2d::dynamics::{Collider, ColliderHandle, ColliderSet, RigidBody, RigidBodyHandle, RigidBodySet};
use gbox2d::math::{Isometry, Real};
use gbox2d::shape::Shape;

mod circles;
mod contact_set;
mod polygons;

/// A minimal world: one collider per body, contacts created explicitly.
#[derive(Default)]
pub struct World {
    pub bodies: RigidBodySet,
    pub colliders: ColliderSet,
    pub contacts: ContactSet,
    pub scratch: ScratchPool,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, shape: impl Into<Shape>, position: Isometry<Real>) -> (RigidBodyHandle, ColliderHandle) {
        let body = self.bodies.insert(RigidBody::new(position));
        let collider = self.colliders.insert(Collider::new(shape, body));
        (body, collider)
    }

    pub fn set_position(&mut self, body: RigidBodyHandle, position: Isometry<Real>) {
        self.bodies[body].position = position;
    }

    /// Evaluates all the contacts and returns the events they reported.
    pub fn step(&mut self) -> ContactEventRecorder {
        let mut recorder = ContactEventRecorder::new();
        self.contacts.evaluate_all(
            &self.colliders,
            &self.bodies,
            &mut self.scratch,
            Some(&mut recorder),
        );
        recorder
    }
}

/// A world with random balls, boxes and points packed close to each other, and a contact
/// for every supported pair.
pub fn random_world(rng: &mut oorandom::Rand32, count: usize) -> World {
    use gbox2d::shape::{Ball, PointShape, Polygon};

    let mut world = World::new();
    let mut handles = vec![];

    for _ in 0..count {
        let position = random_position(rng, 2.0);
        let shape: Shape = match rng.rand_range(0..3) {
            0 => Ball::new(0.3 + rng.rand_float() as Real * 0.5).into(),
            1 => Polygon::cuboid(
                0.3 + rng.rand_float() as Real * 0.5,
                0.3 + rng.rand_float() as Real * 0.5,
            )
            .into(),
            _ => PointShape::new(gbox2d::math::Point::origin()).into(),
        };
        handles.push(world.add(shape, position).1);
    }

    for (i, c1) in handles.iter().enumerate() {
        for c2 in &handles[i + 1..] {
            // Point/point pairs are not supported.
            let _ = world.contacts.insert(*c1, *c2, &world.colliders);
        }
    }

    world
}

pub fn random_position(rng: &mut oorandom::Rand32, extent: Real) -> Isometry<Real> {
    Isometry::new(
        gbox2d::math::Vector::new(
            (rng.rand_float() as Real - 0.5) * extent,
            (rng.rand_float() as Real - 0.5) * extent,
        ),
        rng.rand_float() as Real * 6.0,
    )
}

/// Moves every body by a small random displacement.
pub fn jitter(world: &mut World, rng: &mut oorandom::Rand32) {
    let handles: Vec<_> = world.bodies.iter().map(|(h, _)| h).collect();

    for handle in handles {
        let body = &mut world.bodies[handle];
        let delta = Isometry::new(
            gbox2d::math::Vector::new(
                (rng.rand_float() as Real - 0.5) * 0.1,
                (rng.rand_float() as Real - 0.5) * 0.1,
            ),
            (rng.rand_float() as Real - 0.5) * 0.1,
        );
        body.position = delta * body.position;
        body.linvel = gbox2d::math::Vector::new(rng.rand_float() as Real, rng.rand_float() as Real);
        body.angvel = rng.rand_float() as Real - 0.5;
    }
}

/// Writes random impulses into every contact point, as a constraints solver would.
pub fn solve(world: &mut World, rng: &mut oorandom::Rand32) {
    let handles: Vec<_> = world.contacts.iter().map(|(h, _)| h).collect();

    for handle in handles {
        if let Some(contact) = world.contacts.get_mut(handle) {
            for point in &mut contact.manifold_mut().points {
                point.normal_impulse = rng.rand_float() as Real;
                point.tangent_impulse = rng.rand_float() as Real - 0.5;
            }
        }
    }
}
