use crate::contacts::{ContactPair, ScratchPool};
use crate::math::{Isometry, Real};
use crate::query::{details, Manifold, Unsupported};
use crate::shape::{Shape, ShapeType};

/// The pairs of shape types a contact can be created for.
///
/// Each kind fixes the type of both shapes and the function computing their manifold.
/// Shapes are always given in the order of the variant name, e.g., the polygon first
/// for [`ContactKind::PolygonBall`].
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ContactKind {
    /// Two balls.
    BallBall,
    /// A polygon and a ball.
    PolygonBall,
    /// A polygon and a point.
    PolygonPoint,
    /// A point and a ball.
    PointBall,
    /// Two polygons.
    PolygonPolygon,
}

impl ContactKind {
    /// The kind of contact between two shape types.
    ///
    /// The returned flag is `true` if both shapes must be swapped to match the order of
    /// the kind.
    pub fn from_shape_types(
        shape_type1: ShapeType,
        shape_type2: ShapeType,
    ) -> Result<(Self, bool), Unsupported> {
        let result = match (shape_type1, shape_type2) {
            (ShapeType::Ball, ShapeType::Ball) => (ContactKind::BallBall, false),
            (ShapeType::Polygon, ShapeType::Ball) => (ContactKind::PolygonBall, false),
            (ShapeType::Ball, ShapeType::Polygon) => (ContactKind::PolygonBall, true),
            (ShapeType::Polygon, ShapeType::Point) => (ContactKind::PolygonPoint, false),
            (ShapeType::Point, ShapeType::Polygon) => (ContactKind::PolygonPoint, true),
            (ShapeType::Point, ShapeType::Ball) => (ContactKind::PointBall, false),
            (ShapeType::Ball, ShapeType::Point) => (ContactKind::PointBall, true),
            (ShapeType::Polygon, ShapeType::Polygon) => (ContactKind::PolygonPolygon, false),
            (ShapeType::Point, ShapeType::Point) => {
                return Err(Unsupported {
                    shape_type1,
                    shape_type2,
                })
            }
        };

        Ok(result)
    }

    /// The types of the first and second shapes of this kind of contact.
    pub fn shape_types(self) -> (ShapeType, ShapeType) {
        match self {
            ContactKind::BallBall => (ShapeType::Ball, ShapeType::Ball),
            ContactKind::PolygonBall => (ShapeType::Polygon, ShapeType::Ball),
            ContactKind::PolygonPoint => (ShapeType::Polygon, ShapeType::Point),
            ContactKind::PointBall => (ShapeType::Point, ShapeType::Ball),
            ContactKind::PolygonPolygon => (ShapeType::Polygon, ShapeType::Polygon),
        }
    }

    /// Can this kind of contact be computed between these two shapes, in this order?
    pub fn accepts(self, shape1: &Shape, shape2: &Shape) -> bool {
        self.shape_types() == (shape1.shape_type(), shape2.shape_type())
    }

    /// Computes the manifold between two shapes into `out`.
    ///
    /// Fails, leaving `out` empty, if the shapes don't have the types of this kind.
    pub fn compute_manifold(
        self,
        pos1: &Isometry<Real>,
        shape1: &Shape,
        pos2: &Isometry<Real>,
        shape2: &Shape,
        out: &mut Manifold,
    ) -> Result<(), Unsupported> {
        match (self, shape1, shape2) {
            (ContactKind::BallBall, Shape::Ball(b1), Shape::Ball(b2)) => {
                details::contact_manifold_ball_ball(pos1, b1, pos2, b2, out)
            }
            (ContactKind::PolygonBall, Shape::Polygon(p1), Shape::Ball(b2)) => {
                details::contact_manifold_polygon_ball(pos1, p1, pos2, b2, out)
            }
            (ContactKind::PolygonPoint, Shape::Polygon(p1), Shape::Point(p2)) => {
                details::contact_manifold_polygon_point(pos1, p1, pos2, p2, out)
            }
            (ContactKind::PointBall, Shape::Point(p1), Shape::Ball(b2)) => {
                details::contact_manifold_point_ball(pos1, p1, pos2, b2, out)
            }
            (ContactKind::PolygonPolygon, Shape::Polygon(p1), Shape::Polygon(p2)) => {
                details::contact_manifold_polygon_polygon(pos1, p1, pos2, p2, out)
            }
            _ => {
                out.clear();
                return Err(Unsupported {
                    shape_type1: shape1.shape_type(),
                    shape_type2: shape2.shape_type(),
                });
            }
        }

        Ok(())
    }
}

/// Are the two shapes of `pair` touching?
///
/// The manifold is computed into the scratch buffer of `scratch`, without creating a
/// [`Contact`](super::Contact). The shapes may be given in any order.
pub fn shapes_touching(pair: &ContactPair, scratch: &mut ScratchPool) -> Result<bool, Unsupported> {
    let (kind, swapped) =
        ContactKind::from_shape_types(pair.shape1.shape_type(), pair.shape2.shape_type())?;
    let pair = if swapped { pair.swapped() } else { *pair };
    let out = scratch.lease(0).manifold;

    kind.compute_manifold(
        pair.body1.position(),
        pair.shape1,
        pair.body2.position(),
        pair.shape2,
        out,
    )?;

    Ok(!out.is_empty())
}
