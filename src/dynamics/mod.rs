//! The rigid-bodies and colliders contacts are computed between.
//!
//! Only the kinematic state needed by contact tracking is modeled here: positions and
//! velocities are read by the contacts, never integrated.

pub use self::collider::{Collider, ColliderHandle};
pub use self::collider_set::ColliderSet;
pub use self::rigid_body::{BodyKinematics, RigidBody, RigidBodyHandle};
pub use self::rigid_body_set::RigidBodySet;

mod collider;
mod collider_set;
mod rigid_body;
mod rigid_body_set;
