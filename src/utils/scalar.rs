use crate::math::{Real, Vector};

/// The inverse of `val`, or zero if `val` is zero.
#[inline]
pub fn inv(val: Real) -> Real {
    if val == 0.0 {
        0.0
    } else {
        1.0 / val
    }
}

/// The closest value to `a` lying in `[low, high]`.
#[inline]
pub fn clamp(a: Real, low: Real, high: Real) -> Real {
    low.max(a.min(high))
}

/// Component-wise [`clamp`] of `a` between `low` and `high`.
#[inline]
pub fn clamp_vector(a: &Vector<Real>, low: &Vector<Real>, high: &Vector<Real>) -> Vector<Real> {
    low.sup(&a.inf(high))
}

/// Linearly maps `val` from the range `[from_min, from_max]` to `[to_min, to_max]`.
///
/// Values outside of the source range are extrapolated.
#[inline]
pub fn map_range(val: Real, from_min: Real, from_max: Real, to_min: Real, to_max: Real) -> Real {
    let mult = (val - from_min) / (from_max - from_min);
    to_min + mult * (to_max - to_min)
}

/// The smallest power of two strictly greater than `x`.
///
/// Folds the upper bits of `x` into all the lower bits, then adds one.
#[inline]
pub fn next_power_of_two(mut x: u32) -> u32 {
    x |= x >> 1;
    x |= x >> 2;
    x |= x >> 4;
    x |= x >> 8;
    x |= x >> 16;
    x.wrapping_add(1)
}

/// Is `x` a (strictly positive) power of two?
#[inline]
pub fn is_power_of_two(x: u32) -> bool {
    x > 0 && (x & (x - 1)) == 0
}

/// `1 / sqrt(x)`.
///
/// Returns `Real::INFINITY` for `x == 0` and NaN for negative inputs.
#[inline]
pub fn inv_sqrt(x: Real) -> Real {
    1.0 / x.sqrt()
}
