use crate::math::{Point, Real};

/// A circle, in the local-space of its rigid-body.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Ball {
    /// The center of the ball, in the local-space of its rigid-body.
    pub center: Point<Real>,
    /// The radius of the ball.
    pub radius: Real,
}

impl Ball {
    /// Creates a new ball with the given radius, centered at its body's origin.
    #[inline]
    pub fn new(radius: Real) -> Ball {
        Ball {
            center: Point::origin(),
            radius,
        }
    }

    /// Creates a new ball with the given radius, centered at `center` in its body's local-space.
    #[inline]
    pub fn with_center(center: Point<Real>, radius: Real) -> Ball {
        Ball { center, radius }
    }
}
