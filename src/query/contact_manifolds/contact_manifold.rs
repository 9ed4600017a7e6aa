use crate::math::{Isometry, Point, Real, Vector};
use crate::query::ContactId;
use arrayvec::ArrayVec;

/// The maximum number of points of a 2D contact manifold.
pub const MAX_MANIFOLD_POINTS: usize = 2;

/// A single contact point of a [`Manifold`], tracked across simulation steps.
///
/// The geometric part (`local_p1`, `local_p2`, `separation`, `id`) is recomputed at each
/// step. The impulses are accumulated by the constraints solver and carried over to the
/// next step whenever a point with the same `id` is found again.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct ManifoldPoint {
    /// The contact point in the local-space of the first body.
    pub local_p1: Point<Real>,
    /// The contact point in the local-space of the second body.
    pub local_p2: Point<Real>,
    /// The signed distance between the shapes at this point. Negative if they penetrate.
    pub separation: Real,
    /// The accumulated impulse along the contact normal.
    pub normal_impulse: Real,
    /// The accumulated impulse along the contact tangent.
    pub tangent_impulse: Real,
    /// The identifier of the features that generated this point.
    pub id: ContactId,
}

impl Default for ManifoldPoint {
    fn default() -> Self {
        Self::new(Point::origin(), Point::origin(), 0.0, ContactId::ZERO)
    }
}

impl ManifoldPoint {
    /// Creates a new manifold point with zero impulses.
    #[inline]
    pub fn new(local_p1: Point<Real>, local_p2: Point<Real>, separation: Real, id: ContactId) -> Self {
        Self {
            local_p1,
            local_p2,
            separation,
            normal_impulse: 0.0,
            tangent_impulse: 0.0,
            id,
        }
    }

    /// Copies the geometric part of `other` into `self`, keeping the impulses of `self`.
    #[inline]
    pub fn copy_geometry_from(&mut self, other: &Self) {
        self.local_p1 = other.local_p1;
        self.local_p2 = other.local_p2;
        self.separation = other.separation;
        self.id = other.id;
    }

    /// Sets both accumulated impulses to zero.
    #[inline]
    pub fn reset_impulses(&mut self) {
        self.normal_impulse = 0.0;
        self.tangent_impulse = 0.0;
    }

    /// Copies the accumulated impulses of `old` into `self`.
    #[inline]
    pub fn warm_start_from(&mut self, old: &Self) {
        self.normal_impulse = old.normal_impulse;
        self.tangent_impulse = old.tangent_impulse;
    }
}

/// The contact points between two shapes, sharing the same contact normal.
///
/// The manifold has a fixed capacity so it can be recomputed in place at every step
/// without allocating.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Manifold {
    /// The contact points.
    pub points: ArrayVec<ManifoldPoint, MAX_MANIFOLD_POINTS>,
    /// The contact normal, pointing from the first shape toward the second one, expressed
    /// in the local-space of the first body.
    pub local_n1: Vector<Real>,
}

impl Manifold {
    /// Creates an empty manifold.
    pub fn new() -> Self {
        Self::default()
    }

    /// The number of contact points.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Does this manifold have no contact point?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The contact points of this manifold.
    #[inline]
    pub fn points(&self) -> &[ManifoldPoint] {
        &self.points
    }

    /// Removes all the contact points.
    #[inline]
    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Overwrites `self` with the content of `other`, without allocating.
    #[inline]
    pub fn set(&mut self, other: &Self) {
        self.points.clone_from(&other.points);
        self.local_n1 = other.local_n1;
    }

    /// The contact normal in world-space, given the current position of the first body.
    #[inline]
    pub fn world_normal(&self, pos1: &Isometry<Real>) -> Vector<Real> {
        pos1 * self.local_n1
    }

    /// The point with the given id, if any.
    pub fn find_point(&self, id: ContactId) -> Option<&ManifoldPoint> {
        self.points.iter().find(|pt| pt.id == id)
    }

    /// The point with the smallest separation, if any.
    pub fn find_deepest_point(&self) -> Option<&ManifoldPoint> {
        let mut deepest = self.points.first()?;

        for pt in &self.points {
            if pt.separation < deepest.separation {
                deepest = pt;
            }
        }

        Some(deepest)
    }

    /// Transfers the impulses of the points of `old` to the points of `self` with the same id.
    ///
    /// Each point of `self` gets its impulses reset first, then the old points are scanned in
    /// order for the first one with an equal id that was not matched yet. `matched` must
    /// have one entry per old point, all `false`; the entries of the matched old points are
    /// set to `true`. For every point of `self`, in order, `report` is called with the new
    /// point and the index of the old point it matched, if any.
    pub fn match_points(
        &mut self,
        old: &Manifold,
        matched: &mut [bool],
        mut report: impl FnMut(&ManifoldPoint, Option<usize>),
    ) {
        debug_assert!(matched.len() >= old.len());

        for point in &mut self.points {
            point.reset_impulses();

            let found = old
                .points
                .iter()
                .enumerate()
                .position(|(j, old_point)| !matched[j] && old_point.id == point.id);

            if let Some(j) = found {
                matched[j] = true;
                point.warm_start_from(&old.points[j]);
            }

            report(point, found);
        }
    }
}
