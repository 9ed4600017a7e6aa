use crate::math::{Point, Real, Vector};
use crate::query::ContactId;
use arrayvec::ArrayVec;

/// A vertex produced by clipping an incident edge, tagged with the features it comes from.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ClipVertex {
    /// The world-space location of this vertex.
    pub v: Point<Real>,
    /// The features this vertex was generated by.
    pub id: ContactId,
}

/// Clips the segment `v_in` against the half-plane `dot(normal, x) <= offset`.
///
/// Returns zero, one or two vertices. A vertex created at the intersection with the
/// clipping line keeps the id of the endpoint lying outside of the half-plane.
pub fn clip_segment_to_line(
    v_in: &[ClipVertex; 2],
    normal: &Vector<Real>,
    offset: Real,
) -> ArrayVec<ClipVertex, 2> {
    let mut v_out = ArrayVec::new();

    // Signed distances of the endpoints to the line.
    let distance0 = normal.dot(&v_in[0].v.coords) - offset;
    let distance1 = normal.dot(&v_in[1].v.coords) - offset;

    if distance0 <= 0.0 {
        v_out.push(v_in[0]);
    }

    if distance1 <= 0.0 {
        v_out.push(v_in[1]);
    }

    // The endpoints are on different sides of the line.
    if distance0 * distance1 < 0.0 {
        let interp = distance0 / (distance0 - distance1);
        let v = v_in[0].v + (v_in[1].v - v_in[0].v) * interp;
        let id = if distance0 > 0.0 {
            v_in[0].id
        } else {
            v_in[1].id
        };

        v_out.push(ClipVertex { v, id });
    }

    v_out
}
