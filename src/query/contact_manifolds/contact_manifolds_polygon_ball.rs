use crate::math::{Isometry, Point, Real, DEFAULT_EPSILON};
use crate::query::{ContactId, Manifold, ManifoldPoint};
use crate::shape::{Ball, PointShape, Polygon};
use crate::utils::Vec2Ops;

/// Computes the contact manifold between a convex polygon and a ball.
///
/// The point id depends on the region of the polygon the ball center lies in:
/// inside the polygon it identifies the face of minimum penetration, outside it
/// identifies the closest edge or vertex.
pub fn contact_manifold_polygon_ball(
    pos1: &Isometry<Real>,
    polygon1: &Polygon,
    pos2: &Isometry<Real>,
    ball2: &Ball,
    manifold: &mut Manifold,
) {
    contact_manifold_polygon_disk(pos1, polygon1, pos2, &ball2.center, ball2.radius, manifold)
}

/// Computes the contact manifold between a convex polygon and a point.
///
/// A contact exists only while the point lies inside of the polygon.
pub fn contact_manifold_polygon_point(
    pos1: &Isometry<Real>,
    polygon1: &Polygon,
    pos2: &Isometry<Real>,
    point2: &PointShape,
    manifold: &mut Manifold,
) {
    contact_manifold_polygon_disk(pos1, polygon1, pos2, &point2.center, 0.0, manifold)
}

fn contact_manifold_polygon_disk(
    pos1: &Isometry<Real>,
    polygon1: &Polygon,
    pos2: &Isometry<Real>,
    center2: &Point<Real>,
    radius2: Real,
    manifold: &mut Manifold,
) {
    manifold.clear();

    let center = pos2 * center2;
    let local_center = pos1.inverse_transform_point(&center);

    // Find the edge with the maximum separation.
    let mut normal_index = 0;
    let mut separation = -Real::MAX;

    for (i, (vertex, normal)) in polygon1
        .vertices()
        .iter()
        .zip(polygon1.normals().iter())
        .enumerate()
    {
        let s = normal.dot(&(local_center - vertex));

        if s > radius2 {
            // Early out.
            return;
        }

        if s > separation {
            separation = s;
            normal_index = i;
        }
    }

    if separation < DEFAULT_EPSILON {
        // The center is inside of the polygon.
        let local_n1 = *polygon1.normals()[normal_index];
        let normal = pos1 * local_n1;
        let position = center - normal * radius2;
        let id = ContactId::from_features(
            normal_index as u8,
            ContactId::NULL_FEATURE,
            ContactId::NULL_FEATURE,
            0,
        );

        manifold.local_n1 = local_n1;
        manifold.points.push(ManifoldPoint::new(
            pos1.inverse_transform_point(&position),
            pos2.inverse_transform_point(&position),
            separation - radius2,
            id,
        ));
        return;
    }

    // The center is outside of the polygon: find the closest feature of the face.
    let vid1 = normal_index;
    let vid2 = polygon1.next_index(vid1);
    let v1 = polygon1.vertices()[vid1];
    let v2 = polygon1.vertices()[vid2];
    let mut edge = v2 - v1;
    let length = edge.normalize_and_get_length();

    if length == 0.0 {
        log::trace!("Degenerate polygon edge {} in polygon/ball contact.", vid1);
        return;
    }

    let u = (local_center - v1).dot(&edge);
    let (closest, incident_edge, incident_vertex) = if u <= 0.0 {
        (v1, ContactId::NULL_FEATURE, vid1 as u8)
    } else if u >= length {
        (v2, ContactId::NULL_FEATURE, vid2 as u8)
    } else {
        (v1 + edge * u, vid1 as u8, ContactId::NULL_FEATURE)
    };

    let mut local_n1 = local_center - closest;
    let dist = local_n1.normalize_and_get_length();

    if dist > radius2 {
        return;
    }

    if dist == 0.0 {
        // The center lies on the boundary.
        local_n1 = *polygon1.normals()[normal_index];
    }

    let normal = pos1 * local_n1;
    let position = center - normal * radius2;
    let id = ContactId::from_features(0, incident_edge, incident_vertex, 0);

    manifold.local_n1 = local_n1;
    manifold.points.push(ManifoldPoint::new(
        pos1.inverse_transform_point(&position),
        pos2.inverse_transform_point(&position),
        dist - radius2,
        id,
    ));
}
