use crate::dynamics::RigidBodyHandle;
use crate::math::Real;
use crate::shape::Shape;
use crate::utils::ArenaIndex;

/// The handle of a collider inserted into a [`ColliderSet`](super::ColliderSet).
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ColliderHandle(pub(crate) ArenaIndex);

impl ColliderHandle {
    /// A handle that never refers to any collider.
    pub const fn invalid() -> Self {
        ColliderHandle(ArenaIndex::INVALID)
    }

    /// Builds a handle from its slot index and generation.
    pub const fn from_raw_parts(index: u32, generation: u32) -> Self {
        ColliderHandle(ArenaIndex::from_raw_parts(index, generation))
    }

    /// The slot index and generation of this handle.
    pub const fn into_raw_parts(self) -> (u32, u32) {
        self.0.into_raw_parts()
    }
}

/// A shape attached to a rigid-body, with its material properties.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct Collider {
    /// The shape, in the local-space of the parent body.
    pub shape: Shape,
    /// The rigid-body this collider is attached to.
    pub parent: RigidBodyHandle,
    /// The friction coefficient.
    pub friction: Real,
    /// The restitution coefficient.
    pub restitution: Real,
    /// A sensor reports contacts but is not meant to generate contact forces.
    pub is_sensor: bool,
}

impl Collider {
    /// The default friction coefficient of a collider.
    pub const DEFAULT_FRICTION: Real = 0.2;

    /// Creates a collider with default material properties.
    pub fn new(shape: impl Into<Shape>, parent: RigidBodyHandle) -> Self {
        Self {
            shape: shape.into(),
            parent,
            friction: Self::DEFAULT_FRICTION,
            restitution: 0.0,
            is_sensor: false,
        }
    }

    /// Sets the friction coefficient of this collider.
    pub fn with_friction(mut self, friction: Real) -> Self {
        self.friction = friction;
        self
    }

    /// Sets the restitution coefficient of this collider.
    pub fn with_restitution(mut self, restitution: Real) -> Self {
        self.restitution = restitution;
        self
    }

    /// Sets whether this collider is a sensor.
    pub fn sensor(mut self, is_sensor: bool) -> Self {
        self.is_sensor = is_sensor;
        self
    }
}
