//! Contact manifolds for persistent contact tracking.
//!
//! A **contact manifold** is the set of contact points between two shapes that share
//! the same contact normal. Each point carries a [`ContactId`] built from the geometric
//! features (edges and vertices) that generated it: when the same features generate a
//! point at the next step, both points are considered to be the same physical contact
//! and the accumulated impulses of the old one are carried over (warm-starting).
//!
//! In 2D a manifold never holds more than [`MAX_MANIFOLD_POINTS`] points: one for
//! pairs involving a ball or a point, up to two for a pair of polygons.

pub use self::contact_id::{ContactFeatures, ContactId};
pub use self::contact_manifold::{Manifold, ManifoldPoint, MAX_MANIFOLD_POINTS};
pub use self::contact_manifolds_ball_ball::{contact_manifold_ball_ball, contact_manifold_point_ball};
pub use self::contact_manifolds_polygon_ball::{
    contact_manifold_polygon_ball, contact_manifold_polygon_point,
};
pub use self::contact_manifolds_polygon_polygon::contact_manifold_polygon_polygon;

mod contact_id;
mod contact_manifold;
mod contact_manifolds_ball_ball;
mod contact_manifolds_polygon_ball;
mod contact_manifolds_polygon_polygon;
