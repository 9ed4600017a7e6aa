use crate::math::{Real, Vector, DEFAULT_EPSILON};

/// Two-dimensional operations missing from nalgebra's vectors.
pub trait Vec2Ops: Sized {
    /// The cross product `self × s` between this vector and the out-of-plane scalar `s`.
    fn cross_scalar(&self, s: Real) -> Self;

    /// The z-component of the 3D cross product between `self` and `other`.
    fn perp_dot(&self, other: &Self) -> Real;

    /// Normalizes `self` in-place and returns its length before normalization.
    ///
    /// If the length is smaller than `DEFAULT_EPSILON`, `self` is left unchanged and zero
    /// is returned.
    fn normalize_and_get_length(&mut self) -> Real;

    /// Are both components of this vector finite (neither NaN nor infinite)?
    fn is_valid(&self) -> bool;
}

impl Vec2Ops for Vector<Real> {
    #[inline]
    fn cross_scalar(&self, s: Real) -> Self {
        Vector::new(s * self.y, -s * self.x)
    }

    #[inline]
    fn perp_dot(&self, other: &Self) -> Real {
        self.x * other.y - self.y * other.x
    }

    #[inline]
    fn normalize_and_get_length(&mut self) -> Real {
        let length = self.norm();
        if length < DEFAULT_EPSILON {
            return 0.0;
        }

        *self /= length;
        length
    }

    #[inline]
    fn is_valid(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// The cross product `s × v` between the out-of-plane scalar `s` and the vector `v`.
///
/// This is the velocity of a point at `v` relative to the center of a body spinning
/// with the angular velocity `s`.
#[inline]
pub fn scalar_cross(s: Real, v: &Vector<Real>) -> Vector<Real> {
    Vector::new(-s * v.y, s * v.x)
}
