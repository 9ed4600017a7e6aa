use crate::dynamics::ColliderHandle;
use crate::math::{Point, Real, Vector};
use crate::query::ContactId;

/// A contact point, as reported to a [`ContactListener`](super::ContactListener).
///
/// Everything is expressed in world-space, at the time of the report.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ContactPoint {
    /// The first collider of the contact.
    pub collider1: ColliderHandle,
    /// The second collider of the contact.
    pub collider2: ColliderHandle,
    /// The location of the contact point.
    pub position: Point<Real>,
    /// The velocity of the second body relative to the first one, at the contact point.
    pub velocity: Vector<Real>,
    /// The contact normal, pointing from the first collider toward the second one.
    pub normal: Vector<Real>,
    /// The signed distance between the colliders. Negative if they penetrate.
    pub separation: Real,
    /// The id of the features that generated this point.
    pub id: ContactId,
    /// The mixed friction coefficient of the contact.
    pub friction: Real,
    /// The mixed restitution coefficient of the contact.
    pub restitution: Real,
}

impl Default for ContactPoint {
    fn default() -> Self {
        Self {
            collider1: ColliderHandle::invalid(),
            collider2: ColliderHandle::invalid(),
            position: Point::origin(),
            velocity: Vector::zeros(),
            normal: Vector::zeros(),
            separation: 0.0,
            id: ContactId::ZERO,
            friction: 0.0,
            restitution: 0.0,
        }
    }
}
