use crate::math::{Isometry, Real};
use crate::query::details::{clip_segment_to_line, ClipVertex};
use crate::query::{ContactId, Manifold, ManifoldPoint};
use crate::shape::Polygon;
use crate::utils::{self, Vec2Ops};

/// Computes the contact manifold between two convex polygons.
///
/// The face of maximum separation (on either polygon) is chosen as the reference face,
/// and the most anti-parallel face of the other polygon is clipped against its side
/// planes. The first polygon is preferred as the reference one unless the second one
/// is significantly better; the point ids record which one was used with their `flip`
/// feature.
pub fn contact_manifold_polygon_polygon(
    pos1: &Isometry<Real>,
    polygon1: &Polygon,
    pos2: &Isometry<Real>,
    polygon2: &Polygon,
    manifold: &mut Manifold,
) {
    manifold.clear();

    let (edge_a, separation_a) = find_max_separation(polygon1, pos1, polygon2, pos2);
    if separation_a > 0.0 {
        return;
    }

    let (edge_b, separation_b) = find_max_separation(polygon2, pos2, polygon1, pos1);
    if separation_b > 0.0 {
        return;
    }

    let flip = separation_b
        > utils::REFERENCE_FACE_RELATIVE_TOL * separation_a + utils::REFERENCE_FACE_ABSOLUTE_TOL;
    let (ref_poly, ref_pos, inc_poly, inc_pos, ref_edge) = if flip {
        (polygon2, pos2, polygon1, pos1, edge_b)
    } else {
        (polygon1, pos1, polygon2, pos2, edge_a)
    };

    let incident_edge = find_incident_edge(ref_poly, ref_pos, ref_edge, inc_poly, inc_pos);

    let v11 = ref_poly.vertices()[ref_edge];
    let v12 = ref_poly.vertices()[ref_poly.next_index(ref_edge)];

    let mut local_tangent = v12 - v11;
    if local_tangent.normalize_and_get_length() == 0.0 {
        log::trace!("Degenerate reference edge {} in polygon/polygon contact.", ref_edge);
        return;
    }

    let side_normal = ref_pos * local_tangent;
    let front_normal = side_normal.cross_scalar(1.0);

    let v11 = ref_pos * v11;
    let v12 = ref_pos * v12;

    let front_offset = front_normal.dot(&v11.coords);
    let side_offset1 = -side_normal.dot(&v11.coords);
    let side_offset2 = side_normal.dot(&v12.coords);

    // Clip the incident edge against the side planes of the reference edge.
    let clip_points1 = clip_segment_to_line(&incident_edge, &-side_normal, side_offset1);
    if clip_points1.len() < 2 {
        return;
    }

    let clip_points1 = [clip_points1[0], clip_points1[1]];
    let clip_points2 = clip_segment_to_line(&clip_points1, &side_normal, side_offset2);
    if clip_points2.len() < 2 {
        return;
    }

    // The manifold normal always points from the first polygon toward the second one.
    let normal = if flip { -front_normal } else { front_normal };
    manifold.local_n1 = pos1.inverse_transform_vector(&normal);

    for clip_point in &clip_points2 {
        let separation = front_normal.dot(&clip_point.v.coords) - front_offset;

        if separation <= 0.0 {
            manifold.points.push(ManifoldPoint::new(
                pos1.inverse_transform_point(&clip_point.v),
                pos2.inverse_transform_point(&clip_point.v),
                separation,
                clip_point.id.with_flip(flip),
            ));
        }
    }
}

/// The separation of `poly2` along the normal of the edge `edge1` of `poly1`.
fn edge_separation(
    poly1: &Polygon,
    pos1: &Isometry<Real>,
    edge1: usize,
    poly2: &Polygon,
    pos2: &Isometry<Real>,
) -> Real {
    let normal1_world = pos1 * *poly1.normals()[edge1];
    let normal1 = pos2.inverse_transform_vector(&normal1_world);

    // The vertex of poly2 furthest behind the edge.
    let index = poly2.support_point_id(&-normal1);
    let v1 = pos1 * poly1.vertices()[edge1];
    let v2 = pos2 * poly2.vertices()[index];

    (v2 - v1).dot(&normal1_world)
}

/// Finds the edge of `poly1` along which `poly2` is the most separated.
///
/// Starts from the edge facing the centroid of `poly2` and hill-climbs the neighboring
/// edges. Returns early as soon as a positive separation is found.
fn find_max_separation(
    poly1: &Polygon,
    pos1: &Isometry<Real>,
    poly2: &Polygon,
    pos2: &Isometry<Real>,
) -> (usize, Real) {
    let dcentroid = pos2 * poly2.centroid() - pos1 * poly1.centroid();
    let local_dcentroid = pos1.inverse_transform_vector(&dcentroid);

    let mut edge = 0;
    let mut max_dot = -Real::MAX;
    for (i, normal) in poly1.normals().iter().enumerate() {
        let dot = normal.dot(&local_dcentroid);
        if dot > max_dot {
            max_dot = dot;
            edge = i;
        }
    }

    let separation = edge_separation(poly1, pos1, edge, poly2, pos2);
    if separation > 0.0 {
        return (edge, separation);
    }

    let prev_edge = poly1.prev_index(edge);
    let prev_separation = edge_separation(poly1, pos1, prev_edge, poly2, pos2);
    if prev_separation > 0.0 {
        return (prev_edge, prev_separation);
    }

    let next_edge = poly1.next_index(edge);
    let next_separation = edge_separation(poly1, pos1, next_edge, poly2, pos2);
    if next_separation > 0.0 {
        return (next_edge, next_separation);
    }

    let backward;
    let mut best_edge;
    let mut best_separation;

    if prev_separation > separation && prev_separation > next_separation {
        backward = true;
        best_edge = prev_edge;
        best_separation = prev_separation;
    } else if next_separation > separation {
        backward = false;
        best_edge = next_edge;
        best_separation = next_separation;
    } else {
        return (edge, separation);
    }

    // Bounded by the number of edges, to stay safe against NaN separations.
    for _ in 0..poly1.len() {
        let edge = if backward {
            poly1.prev_index(best_edge)
        } else {
            poly1.next_index(best_edge)
        };

        let separation = edge_separation(poly1, pos1, edge, poly2, pos2);
        if separation > 0.0 {
            return (edge, separation);
        }

        if separation > best_separation {
            best_edge = edge;
            best_separation = separation;
        } else {
            break;
        }
    }

    (best_edge, best_separation)
}

/// The world-space edge of `poly2` most anti-parallel to the edge `edge1` of `poly1`.
fn find_incident_edge(
    poly1: &Polygon,
    pos1: &Isometry<Real>,
    edge1: usize,
    poly2: &Polygon,
    pos2: &Isometry<Real>,
) -> [ClipVertex; 2] {
    let normal1 = pos2.inverse_transform_vector(&(pos1 * *poly1.normals()[edge1]));

    let mut index = 0;
    let mut min_dot = Real::MAX;
    for (i, normal) in poly2.normals().iter().enumerate() {
        let dot = normal1.dot(normal);
        if dot < min_dot {
            min_dot = dot;
            index = i;
        }
    }

    let i1 = index;
    let i2 = poly2.next_index(i1);

    [
        ClipVertex {
            v: pos2 * poly2.vertices()[i1],
            id: ContactId::from_features(edge1 as u8, i1 as u8, 0, 0),
        },
        ClipVertex {
            v: pos2 * poly2.vertices()[i2],
            id: ContactId::from_features(edge1 as u8, i2 as u8, 1, 0),
        },
    ]
}
