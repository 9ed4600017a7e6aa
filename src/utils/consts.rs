use crate::math::Real;

/// Relative tolerance used to prefer the first polygon as the reference polygon.
pub(crate) const REFERENCE_FACE_RELATIVE_TOL: Real = 0.98;
/// Absolute tolerance used to prefer the first polygon as the reference polygon.
pub(crate) const REFERENCE_FACE_ABSOLUTE_TOL: Real = 0.001;
