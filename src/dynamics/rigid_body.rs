use crate::math::{Isometry, Point, Real, Vector};
use crate::utils::{self, ArenaIndex};

/// The handle of a rigid-body inserted into a [`RigidBodySet`](super::RigidBodySet).
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RigidBodyHandle(pub(crate) ArenaIndex);

impl RigidBodyHandle {
    /// A handle that never refers to any rigid-body.
    pub const fn invalid() -> Self {
        RigidBodyHandle(ArenaIndex::INVALID)
    }

    /// Builds a handle from its slot index and generation.
    pub const fn from_raw_parts(index: u32, generation: u32) -> Self {
        RigidBodyHandle(ArenaIndex::from_raw_parts(index, generation))
    }

    /// The slot index and generation of this handle.
    pub const fn into_raw_parts(self) -> (u32, u32) {
        self.0.into_raw_parts()
    }
}

/// The kinematic queries contacts need from the bodies they involve.
pub trait BodyKinematics {
    /// The world-space position of this body.
    fn position(&self) -> &Isometry<Real>;

    /// The world-space location of a point given in this body's local-space.
    #[inline]
    fn world_point(&self, local_point: &Point<Real>) -> Point<Real> {
        self.position() * local_point
    }

    /// The world-space velocity of the material point located at `local_point`.
    ///
    /// This accounts for both the linear and angular velocities of the body.
    fn linear_velocity_at_local_point(&self, local_point: &Point<Real>) -> Vector<Real>;
}

/// A rigid-body with its position and velocities.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RigidBody {
    /// The world-space position of the body.
    pub position: Isometry<Real>,
    /// The linear velocity of the center of mass.
    pub linvel: Vector<Real>,
    /// The angular velocity, in radians per second.
    pub angvel: Real,
    /// The center of mass, in local-space.
    pub local_center_of_mass: Point<Real>,
}

impl Default for RigidBody {
    fn default() -> Self {
        Self::new(Isometry::identity())
    }
}

impl RigidBody {
    /// A motionless rigid-body at the given position, with its center of mass at its origin.
    pub fn new(position: Isometry<Real>) -> Self {
        Self {
            position,
            linvel: Vector::zeros(),
            angvel: 0.0,
            local_center_of_mass: Point::origin(),
        }
    }

    /// Sets the linear velocity of this body.
    pub fn with_linvel(mut self, linvel: Vector<Real>) -> Self {
        self.linvel = linvel;
        self
    }

    /// Sets the angular velocity of this body.
    pub fn with_angvel(mut self, angvel: Real) -> Self {
        self.angvel = angvel;
        self
    }

    /// The world-space center of mass of this body.
    #[inline]
    pub fn world_center_of_mass(&self) -> Point<Real> {
        self.position * self.local_center_of_mass
    }
}

impl BodyKinematics for RigidBody {
    #[inline]
    fn position(&self) -> &Isometry<Real> {
        &self.position
    }

    #[inline]
    fn linear_velocity_at_local_point(&self, local_point: &Point<Real>) -> Vector<Real> {
        let dpt = self.world_point(local_point) - self.world_center_of_mass();
        self.linvel + utils::scalar_cross(self.angvel, &dpt)
    }
}
