use crate::contacts::{ContactKind, ContactListener, ContactPoint, ScratchPool};
use crate::dynamics::{BodyKinematics, Collider, ColliderHandle, RigidBody};
use crate::math::{Real, Vector};
use crate::query::{Manifold, ManifoldPoint, Unsupported};
use crate::shape::Shape;

/// The two shapes of a contact, with the bodies they are attached to.
#[derive(Copy, Clone)]
pub struct ContactPair<'a> {
    /// The first shape.
    pub shape1: &'a Shape,
    /// The body the first shape is attached to.
    pub body1: &'a dyn BodyKinematics,
    /// The second shape.
    pub shape2: &'a Shape,
    /// The body the second shape is attached to.
    pub body2: &'a dyn BodyKinematics,
}

impl<'a> ContactPair<'a> {
    /// The pair made of two colliders and their parent bodies.
    pub fn new(
        collider1: &'a Collider,
        body1: &'a RigidBody,
        collider2: &'a Collider,
        body2: &'a RigidBody,
    ) -> Self {
        Self {
            shape1: &collider1.shape,
            body1,
            shape2: &collider2.shape,
            body2,
        }
    }

    /// This pair with its first and second elements exchanged.
    pub fn swapped(&self) -> Self {
        Self {
            shape1: self.shape2,
            body1: self.body2,
            shape2: self.shape1,
            body2: self.body1,
        }
    }
}

#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
/// Flags describing the state of a [`Contact`].
pub struct ContactFlags(u8);

bitflags::bitflags! {
    impl ContactFlags: u8 {
        /// The last evaluation produced at least one contact point.
        const TOUCHING = 1;
        /// One of the colliders is a sensor.
        const SENSOR = 1 << 1;
    }
}

/// The tracked contact between two colliders.
///
/// The manifold computed at the previous evaluation is kept alongside the current one,
/// so the points of both can be matched by id.
#[derive(Debug)]
pub struct Contact {
    kind: ContactKind,
    collider1: ColliderHandle,
    collider2: ColliderHandle,
    manifold: Manifold,
    prev_manifold: Manifold,
    manifold_count: usize,
    flags: ContactFlags,
    /// The friction coefficient reported with the contact points.
    pub friction: Real,
    /// The restitution coefficient reported with the contact points.
    pub restitution: Real,
}

impl Clone for Contact {
    // Every field is duplicated: the clone tracks the same points, with the same impulses,
    // independently of the original.
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            collider1: self.collider1,
            collider2: self.collider2,
            manifold: self.manifold.clone(),
            prev_manifold: self.prev_manifold.clone(),
            manifold_count: self.manifold_count,
            flags: self.flags,
            friction: self.friction,
            restitution: self.restitution,
        }
    }
}

impl Contact {
    /// Creates a contact of the given kind between two colliders.
    ///
    /// # Panics
    /// If the shapes don't have the types required by `kind`, in that order.
    pub fn new(
        kind: ContactKind,
        collider1: ColliderHandle,
        shape1: &Shape,
        collider2: ColliderHandle,
        shape2: &Shape,
    ) -> Self {
        assert!(
            kind.accepts(shape1, shape2),
            "a {:?} contact cannot be created between a {:?} and a {:?}",
            kind,
            shape1.shape_type(),
            shape2.shape_type()
        );

        Self {
            kind,
            collider1,
            collider2,
            manifold: Manifold::new(),
            prev_manifold: Manifold::new(),
            manifold_count: 0,
            flags: ContactFlags::empty(),
            friction: 0.0,
            restitution: 0.0,
        }
    }

    /// Creates a contact between two colliders, selecting its kind from their shapes.
    ///
    /// The colliders are swapped if needed, so [`Self::collider1`] is not necessarily
    /// `collider1`.
    pub fn try_new(
        collider1: ColliderHandle,
        shape1: &Shape,
        collider2: ColliderHandle,
        shape2: &Shape,
    ) -> Result<Self, Unsupported> {
        let (kind, swapped) =
            ContactKind::from_shape_types(shape1.shape_type(), shape2.shape_type())?;

        if swapped {
            Ok(Self::new(kind, collider2, shape2, collider1, shape1))
        } else {
            Ok(Self::new(kind, collider1, shape1, collider2, shape2))
        }
    }

    /// The kind of this contact.
    #[inline]
    pub fn kind(&self) -> ContactKind {
        self.kind
    }

    /// The first collider of this contact.
    #[inline]
    pub fn collider1(&self) -> ColliderHandle {
        self.collider1
    }

    /// The second collider of this contact.
    #[inline]
    pub fn collider2(&self) -> ColliderHandle {
        self.collider2
    }

    /// The flags of this contact.
    #[inline]
    pub fn flags(&self) -> ContactFlags {
        self.flags
    }

    /// Marks this contact as involving a sensor.
    pub fn set_sensor(&mut self, is_sensor: bool) {
        self.flags.set(ContactFlags::SENSOR, is_sensor);
    }

    /// Did the last evaluation produce at least one contact point?
    #[inline]
    pub fn is_touching(&self) -> bool {
        self.flags.contains(ContactFlags::TOUCHING)
    }

    /// The manifold computed by the last evaluation, possibly empty.
    #[inline]
    pub fn manifold(&self) -> &Manifold {
        &self.manifold
    }

    /// The manifold computed by the last evaluation, mutably.
    ///
    /// This is where a constraints solver writes the impulses carried to the next
    /// evaluation.
    #[inline]
    pub fn manifold_mut(&mut self) -> &mut Manifold {
        &mut self.manifold
    }

    /// The manifold computed by the evaluation before the last one.
    #[inline]
    pub fn prev_manifold(&self) -> &Manifold {
        &self.prev_manifold
    }

    /// The non-empty manifolds of this contact: zero or one of them.
    #[inline]
    pub fn manifolds(&self) -> &[Manifold] {
        &core::slice::from_ref(&self.manifold)[..self.manifold_count]
    }

    /// The number of non-empty manifolds of this contact.
    #[inline]
    pub fn manifold_count(&self) -> usize {
        self.manifold_count
    }

    /// Recomputes the manifold of this contact and reports its points to `listener`.
    ///
    /// The points of the new manifold inherit the impulses of the points of the previous
    /// one with the same id; the others start with zero impulses. The listener then
    /// receives, in order:
    /// - one `add` or `persist` call per new point, in manifold order;
    /// - one `remove` call per previous point that was not matched, in manifold order.
    ///
    /// Without a listener, nothing is reported but impulses are carried over all the same.
    /// `pair` must hold the shapes and bodies of [`Self::collider1`] and
    /// [`Self::collider2`], in that order.
    pub fn evaluate(
        &mut self,
        pair: &ContactPair,
        scratch: &mut ScratchPool,
        mut listener: Option<&mut dyn ContactListener>,
    ) {
        core::mem::swap(&mut self.manifold, &mut self.prev_manifold);

        let pos1 = pair.body1.position();
        let pos2 = pair.body2.position();

        if let Err(err) =
            self.kind
                .compute_manifold(pos1, pair.shape1, pos2, pair.shape2, &mut self.manifold)
        {
            log::warn!(
                "No contact points computed between {:?} and {:?}: {}.",
                self.collider1,
                self.collider2,
                err
            );
        }

        let lease = scratch.lease(self.prev_manifold.len());
        let contact_point = lease.contact_point;
        let velocity = lease.velocity;
        let matched = lease.matched;

        contact_point.collider1 = self.collider1;
        contact_point.collider2 = self.collider2;
        contact_point.friction = self.friction;
        contact_point.restitution = self.restitution;

        let normal = self.manifold.world_normal(pos1);

        self.manifold
            .match_points(&self.prev_manifold, matched, |point, old_index| {
                if let Some(listener) = listener.as_mut() {
                    fill_contact_point(contact_point, velocity, pair, point, &normal);

                    if old_index.is_some() {
                        listener.persist(contact_point);
                    } else {
                        listener.add(contact_point);
                    }
                }
            });

        if let Some(listener) = listener.as_mut() {
            // Removed points are reported with their last known normal.
            let prev_normal = self.prev_manifold.world_normal(pos1);

            for (point, matched) in self.prev_manifold.points().iter().zip(matched.iter()) {
                if !*matched {
                    fill_contact_point(contact_point, velocity, pair, point, &prev_normal);
                    listener.remove(contact_point);
                }
            }
        }

        self.manifold_count = if self.manifold.is_empty() { 0 } else { 1 };
        self.flags.set(ContactFlags::TOUCHING, self.manifold_count > 0);
    }

    /// Reports every point of the current manifold as removed.
    ///
    /// This is how the points of a contact about to be destroyed are reported. The
    /// manifolds are left untouched.
    pub fn report_removal(
        &self,
        pair: &ContactPair,
        scratch: &mut ScratchPool,
        listener: &mut dyn ContactListener,
    ) {
        let lease = scratch.lease(0);
        let contact_point = lease.contact_point;

        contact_point.collider1 = self.collider1;
        contact_point.collider2 = self.collider2;
        contact_point.friction = self.friction;
        contact_point.restitution = self.restitution;

        let normal = self.manifold.world_normal(pair.body1.position());

        for point in self.manifolds().iter().flat_map(|m| m.points()) {
            fill_contact_point(contact_point, lease.velocity, pair, point, &normal);
            listener.remove(contact_point);
        }
    }
}

fn fill_contact_point(
    contact_point: &mut ContactPoint,
    velocity1: &mut Vector<Real>,
    pair: &ContactPair,
    point: &ManifoldPoint,
    normal: &Vector<Real>,
) {
    contact_point.position = pair.body1.world_point(&point.local_p1);
    *velocity1 = pair.body1.linear_velocity_at_local_point(&point.local_p1);
    contact_point.velocity = pair.body2.linear_velocity_at_local_point(&point.local_p2);
    contact_point.velocity -= *velocity1;
    contact_point.normal = *normal;
    contact_point.separation = point.separation;
    contact_point.id = point.id;
}
