use core::fmt;

use crate::shape::ShapeType;

/// Error indicating that no contact manifold can be computed between two types of shapes.
///
/// The contact dispatch table only covers the pairs listed by
/// [`ContactKind`](crate::contacts::ContactKind). Trying to create a contact between
/// any other pair, e.g., two points, returns this error.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Unsupported {
    /// The type of the first shape of the rejected pair.
    pub shape_type1: ShapeType,
    /// The type of the second shape of the rejected pair.
    pub shape_type2: ShapeType,
}

impl fmt::Display for Unsupported {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "contacts are not supported between a {:?} and a {:?}",
            self.shape_type1, self.shape_type2
        )
    }
}

impl core::error::Error for Unsupported {}
