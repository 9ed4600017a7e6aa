//! Shapes supported by gbox2d.
//!
//! Shapes are expressed in the local-space of the rigid-body they are attached to:
//! a [`Ball`] stores the offset of its center, a [`Polygon`] stores its vertices
//! directly in body coordinates.

pub use self::ball::Ball;
pub use self::point::PointShape;
pub use self::polygon::{Polygon, PolygonError, MAX_POLYGON_VERTICES};
pub use self::shape::{Shape, ShapeType};

mod ball;
mod point;
mod polygon;
mod shape;
