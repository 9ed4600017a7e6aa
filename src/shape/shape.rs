use crate::shape::{Ball, PointShape, Polygon};

/// Enum representing the type of a shape.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ShapeType {
    /// A ball shape.
    Ball = 0,
    /// A convex polygon shape.
    Polygon,
    /// A single point.
    Point,
}

/// A shape attached to a rigid-body.
///
/// This is a closed set: contacts between two shapes are dispatched on the pair
/// of [`ShapeType`]s by [`ContactKind`](crate::contacts::ContactKind).
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    /// A ball shape.
    Ball(Ball),
    /// A convex polygon shape.
    Polygon(Polygon),
    /// A single point.
    Point(PointShape),
}

impl Shape {
    /// The type of this shape.
    #[inline]
    pub fn shape_type(&self) -> ShapeType {
        match self {
            Shape::Ball(_) => ShapeType::Ball,
            Shape::Polygon(_) => ShapeType::Polygon,
            Shape::Point(_) => ShapeType::Point,
        }
    }

    /// Converts this shape into a ball, if it is one.
    #[inline]
    pub fn as_ball(&self) -> Option<&Ball> {
        match self {
            Shape::Ball(ball) => Some(ball),
            _ => None,
        }
    }

    /// Converts this shape into a polygon, if it is one.
    #[inline]
    pub fn as_polygon(&self) -> Option<&Polygon> {
        match self {
            Shape::Polygon(polygon) => Some(polygon),
            _ => None,
        }
    }

    /// Converts this shape into a point, if it is one.
    #[inline]
    pub fn as_point(&self) -> Option<&PointShape> {
        match self {
            Shape::Point(point) => Some(point),
            _ => None,
        }
    }
}

impl From<Ball> for Shape {
    fn from(ball: Ball) -> Self {
        Shape::Ball(ball)
    }
}

impl From<Polygon> for Shape {
    fn from(polygon: Polygon) -> Self {
        Shape::Polygon(polygon)
    }
}

impl From<PointShape> for Shape {
    fn from(point: PointShape) -> Self {
        Shape::Point(point)
    }
}
