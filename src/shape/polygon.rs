//! Convex polygons with precomputed edge normals.

use crate::math::{Isometry, Point, Real, UnitVector, Vector, DEFAULT_EPSILON};
use crate::utils::Vec2Ops;
use na::Unit;

/// The maximum number of vertices a [`Polygon`] may have.
pub const MAX_POLYGON_VERTICES: usize = 8;

/// Error indicating that a polygon could not be built from the given vertices.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum PolygonError {
    /// Less than three vertices were given.
    #[error("a polygon needs at least 3 vertices, got {0}.")]
    TooFewVertices(usize),
    /// More than [`MAX_POLYGON_VERTICES`] vertices were given.
    #[error("a polygon has at most `MAX_POLYGON_VERTICES` vertices, got {0}.")]
    TooManyVertices(usize),
    /// The edge starting at the given vertex has a near-zero length.
    #[error("the edge starting at vertex {0} is degenerate.")]
    DegenerateEdge(usize),
    /// The vertices are not convex, or not in counter-clockwise order.
    #[error("the polygon is not convex or not counter-clockwise (detected at edge {0}).")]
    NotConvex(usize),
}

/// A convex polygon, in the local-space of its rigid-body.
///
/// Vertices are stored in counter-clockwise order. The normal at index `i` is the
/// outward normal of the edge going from vertex `i` to vertex `i + 1`; polygon
/// manifolds use these edge indices as contact features.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    vertices: Vec<Point<Real>>,
    normals: Vec<UnitVector<Real>>,
    centroid: Point<Real>,
}

impl Polygon {
    /// Creates a convex polygon from its counter-clockwise vertices.
    pub fn new(vertices: Vec<Point<Real>>) -> Result<Self, PolygonError> {
        let count = vertices.len();

        if count < 3 {
            return Err(PolygonError::TooFewVertices(count));
        }

        if count > MAX_POLYGON_VERTICES {
            return Err(PolygonError::TooManyVertices(count));
        }

        let mut normals = Vec::with_capacity(count);

        for i1 in 0..count {
            let i2 = (i1 + 1) % count;
            let edge = vertices[i2] - vertices[i1];
            let normal = Unit::try_new(edge.cross_scalar(1.0), DEFAULT_EPSILON)
                .ok_or(PolygonError::DegenerateEdge(i1))?;

            // Every other vertex must lie strictly on the inner side of this edge.
            for (j, vertex) in vertices.iter().enumerate() {
                if j != i1 && j != i2 && edge.perp_dot(&(vertex - vertices[i1])) <= 0.0 {
                    return Err(PolygonError::NotConvex(i1));
                }
            }

            normals.push(normal);
        }

        let centroid = compute_centroid(&vertices);

        Ok(Self {
            vertices,
            normals,
            centroid,
        })
    }

    /// Creates an axis-aligned box centered at the body's origin.
    pub fn cuboid(half_width: Real, half_height: Real) -> Self {
        let vertices = vec![
            Point::new(-half_width, -half_height),
            Point::new(half_width, -half_height),
            Point::new(half_width, half_height),
            Point::new(-half_width, half_height),
        ];
        let normals = vec![
            -Vector::y_axis(),
            Vector::x_axis(),
            Vector::y_axis(),
            -Vector::x_axis(),
        ];

        Self {
            vertices,
            normals,
            centroid: Point::origin(),
        }
    }

    /// Creates a box centered at `center` and rotated by `angle` radians, in the body's local-space.
    pub fn oriented_cuboid(
        half_width: Real,
        half_height: Real,
        center: Point<Real>,
        angle: Real,
    ) -> Self {
        let pos = Isometry::new(center.coords, angle);
        let mut result = Self::cuboid(half_width, half_height);

        for vertex in &mut result.vertices {
            *vertex = pos * *vertex;
        }

        for normal in &mut result.normals {
            *normal = pos.rotation * *normal;
        }

        result.centroid = center;
        result
    }

    /// The vertices of this polygon, in counter-clockwise order.
    #[inline]
    pub fn vertices(&self) -> &[Point<Real>] {
        &self.vertices
    }

    /// The outward normals of the edges of this polygon.
    #[inline]
    pub fn normals(&self) -> &[UnitVector<Real>] {
        &self.normals
    }

    /// The area-weighted center of this polygon.
    #[inline]
    pub fn centroid(&self) -> Point<Real> {
        self.centroid
    }

    /// The number of vertices (and edges) of this polygon.
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Always `false`: a valid polygon has at least three vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// The index of the vertex following `i` in counter-clockwise order.
    #[inline]
    pub fn next_index(&self, i: usize) -> usize {
        if i + 1 < self.vertices.len() {
            i + 1
        } else {
            0
        }
    }

    /// The index of the vertex preceding `i` in counter-clockwise order.
    #[inline]
    pub fn prev_index(&self, i: usize) -> usize {
        if i > 0 {
            i - 1
        } else {
            self.vertices.len() - 1
        }
    }

    /// The index of the vertex furthest along `local_dir`.
    ///
    /// Ties are resolved in favor of the lowest index.
    pub fn support_point_id(&self, local_dir: &Vector<Real>) -> usize {
        let mut best = 0;
        let mut best_dot = self.vertices[0].coords.dot(local_dir);

        for (i, vertex) in self.vertices.iter().enumerate().skip(1) {
            let dot = vertex.coords.dot(local_dir);

            if dot > best_dot {
                best_dot = dot;
                best = i;
            }
        }

        best
    }
}

fn compute_centroid(vertices: &[Point<Real>]) -> Point<Real> {
    // Triangle fan around the first vertex.
    let reference = vertices[0];
    let mut centroid = Vector::zeros();
    let mut area = 0.0;

    for i in 1..vertices.len() - 1 {
        let e1 = vertices[i] - reference;
        let e2 = vertices[i + 1] - reference;
        let triangle_area = 0.5 * e1.perp_dot(&e2);

        area += triangle_area;
        centroid += (e1 + e2) * (triangle_area / 3.0);
    }

    reference + centroid / area
}
