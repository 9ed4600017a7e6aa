//! Contact manifold computation between pairs of shapes.
//!
//! The functions exported by the `details` submodule compute the manifold of one specific
//! pair of shape types. They have the form `contact_manifold_[shape1]_[shape2]()` and write
//! their result into a caller-supplied [`Manifold`] so that no allocation happens per step.
//!
//! Manifold points are expressed in the local-space of the rigid-bodies the shapes are
//! attached to. They must be converted to world-space with the current position of the
//! bodies whenever needed: since bodies move, world-space coordinates are never cached.

pub use self::contact_manifolds::{
    ContactFeatures, ContactId, Manifold, ManifoldPoint, MAX_MANIFOLD_POINTS,
};
pub use self::error::Unsupported;

mod clip;
mod contact_manifolds;
mod error;

/// Queries dedicated to specific pairs of shapes.
pub mod details {
    pub use super::clip::{clip_segment_to_line, ClipVertex};
    pub use super::contact_manifolds::{
        contact_manifold_ball_ball, contact_manifold_point_ball, contact_manifold_polygon_ball,
        contact_manifold_polygon_point, contact_manifold_polygon_polygon,
    };
}
