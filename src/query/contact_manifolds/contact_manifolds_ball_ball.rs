use crate::math::{Isometry, Point, Real, Vector, DEFAULT_EPSILON};
use crate::query::{ContactId, Manifold, ManifoldPoint};
use crate::shape::{Ball, PointShape};

/// Computes the contact manifold between two balls.
///
/// The manifold has at most one point, always identified by [`ContactId::ZERO`].
pub fn contact_manifold_ball_ball(
    pos1: &Isometry<Real>,
    ball1: &Ball,
    pos2: &Isometry<Real>,
    ball2: &Ball,
    manifold: &mut Manifold,
) {
    contact_manifold_disk_disk(
        pos1,
        &ball1.center,
        ball1.radius,
        pos2,
        &ball2.center,
        ball2.radius,
        manifold,
    )
}

/// Computes the contact manifold between a point and a ball.
///
/// The point behaves as a ball with a zero radius.
pub fn contact_manifold_point_ball(
    pos1: &Isometry<Real>,
    point1: &PointShape,
    pos2: &Isometry<Real>,
    ball2: &Ball,
    manifold: &mut Manifold,
) {
    contact_manifold_disk_disk(
        pos1,
        &point1.center,
        0.0,
        pos2,
        &ball2.center,
        ball2.radius,
        manifold,
    )
}

fn contact_manifold_disk_disk(
    pos1: &Isometry<Real>,
    center1: &Point<Real>,
    radius1: Real,
    pos2: &Isometry<Real>,
    center2: &Point<Real>,
    radius2: Real,
    manifold: &mut Manifold,
) {
    manifold.clear();

    let p1 = pos1 * center1;
    let p2 = pos2 * center2;
    let dcenter = p2 - p1;
    let dist_sq = dcenter.norm_squared();
    let radius_sum = radius1 + radius2;

    if dist_sq > radius_sum * radius_sum {
        return;
    }

    let (separation, normal) = if dist_sq < DEFAULT_EPSILON {
        // The centers coincide: any direction works.
        (-radius_sum, Vector::y())
    } else {
        let dist = dist_sq.sqrt();
        (dist - radius_sum, dcenter / dist)
    };

    // The contact point is halfway between the two surfaces.
    let surface1 = p1 + normal * radius1;
    let surface2 = p2 - normal * radius2;
    let p = na::center(&surface1, &surface2);

    manifold.local_n1 = pos1.inverse_transform_vector(&normal);
    manifold.points.push(ManifoldPoint::new(
        pos1.inverse_transform_point(&p),
        pos2.inverse_transform_point(&p),
        separation,
        ContactId::ZERO,
    ));
}
