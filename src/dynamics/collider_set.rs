use crate::dynamics::{Collider, ColliderHandle};
use core::ops::Index;
use crate::utils::Arena;

/// A set of colliders, addressed by [`ColliderHandle`].
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, Default)]
pub struct ColliderSet {
    colliders: Arena<Collider>,
}

impl ColliderSet {
    /// An empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a collider and returns its handle.
    pub fn insert(&mut self, collider: Collider) -> ColliderHandle {
        ColliderHandle(self.colliders.insert(collider))
    }

    /// Removes the collider with the given handle.
    ///
    /// Use [`ContactSet::remove_collider`](crate::contacts::ContactSet::remove_collider)
    /// first to destroy its contacts.
    pub fn remove(&mut self, handle: ColliderHandle) -> Option<Collider> {
        self.colliders.remove(handle.0)
    }

    /// The number of colliders in this set.
    pub fn len(&self) -> usize {
        self.colliders.len()
    }

    /// Is this set empty?
    pub fn is_empty(&self) -> bool {
        self.colliders.is_empty()
    }

    /// The collider with the given handle.
    pub fn get(&self, handle: ColliderHandle) -> Option<&Collider> {
        self.colliders.get(handle.0)
    }

    /// The collider with the given handle, mutably.
    ///
    /// Replacing the shape by one of another type makes the contacts of this collider
    /// report no contact point until they are recreated.
    pub fn get_mut(&mut self, handle: ColliderHandle) -> Option<&mut Collider> {
        self.colliders.get_mut(handle.0)
    }

    /// Iterates through all the colliders, by increasing handle.
    pub fn iter(&self) -> impl Iterator<Item = (ColliderHandle, &Collider)> {
        self.colliders.iter().map(|(i, c)| (ColliderHandle(i), c))
    }
}

impl Index<ColliderHandle> for ColliderSet {
    type Output = Collider;

    fn index(&self, handle: ColliderHandle) -> &Collider {
        &self.colliders[handle.0]
    }
}
