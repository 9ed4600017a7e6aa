use crate::contacts::ContactPoint;
use crate::math::{Real, Vector};
use crate::query::Manifold;

/// Reusable buffers for evaluating contacts without allocating.
///
/// Each evaluation context (e.g. each worker thread) owns its own pool. The buffers are
/// created the first time they are leased and then reused until [`ScratchPool::reset`].
#[derive(Clone, Debug, Default)]
pub struct ScratchPool {
    manifold: Option<Manifold>,
    velocity: Option<Vector<Real>>,
    contact_point: Option<ContactPoint>,
    matched: Vec<bool>,
}

/// Borrows of the buffers of a [`ScratchPool`], valid until the next lease.
pub struct ScratchLease<'a> {
    /// A manifold to compute into.
    pub manifold: &'a mut Manifold,
    /// A vector for intermediate velocities.
    pub velocity: &'a mut Vector<Real>,
    /// The point handed to listeners.
    pub contact_point: &'a mut ContactPoint,
    /// One `false` flag per point of the manifold being matched against.
    pub matched: &'a mut [bool],
}

impl ScratchPool {
    /// A pool whose buffers are not created yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Leases all the buffers, with `num_matched` cleared matching flags.
    ///
    /// The same buffers are returned by every call. Their content is left as is, except
    /// for the matching flags.
    pub fn lease(&mut self, num_matched: usize) -> ScratchLease<'_> {
        self.matched.clear();
        self.matched.resize(num_matched, false);

        ScratchLease {
            manifold: self.manifold.get_or_insert_with(Manifold::new),
            velocity: self.velocity.get_or_insert_with(Vector::zeros),
            contact_point: self.contact_point.get_or_insert_with(ContactPoint::default),
            matched: &mut self.matched,
        }
    }

    /// Drops all the buffers. They will be created again by the next lease.
    pub fn reset(&mut self) {
        self.manifold = None;
        self.velocity = None;
        self.contact_point = None;
        self.matched = Vec::new();
    }

    /// Were the buffers created by a lease since the creation or reset of this pool?
    pub fn is_initialized(&self) -> bool {
        self.manifold.is_some()
    }
}
