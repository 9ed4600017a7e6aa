use crate::math::{Point, Real};

/// A single point attached to a rigid-body.
///
/// Point shapes have no extent: they only generate contacts while lying inside of
/// a polygon, or while overlapping a ball.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct PointShape {
    /// The location of the point, in the local-space of its rigid-body.
    pub center: Point<Real>,
}

impl PointShape {
    /// Creates a new point shape located at `center` in its body's local-space.
    #[inline]
    pub fn new(center: Point<Real>) -> Self {
        Self { center }
    }
}
