//! A slab whose handles carry a generation.

use core::ops::{Index, IndexMut};
use slab::Slab;

/// The location of an element in an [`Arena`].
///
/// The generation is bumped each time the slot is freed, so the index of a removed element
/// never refers to the element that reuses its slot later.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ArenaIndex {
    index: u32,
    generation: u32,
}

impl ArenaIndex {
    /// An index that never refers to any element.
    pub const INVALID: Self = Self::from_raw_parts(u32::MAX, u32::MAX);

    /// Builds an index from its slot and generation.
    #[inline]
    pub const fn from_raw_parts(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }

    /// The slot and generation of this index.
    #[inline]
    pub const fn into_raw_parts(self) -> (u32, u32) {
        (self.index, self.generation)
    }

    /// The slot of this index.
    #[inline]
    pub const fn slot(self) -> usize {
        self.index as usize
    }
}

/// Slab storage addressed by generational [`ArenaIndex`]es.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug)]
pub(crate) struct Arena<T> {
    items: Slab<T>,
    generations: Vec<u32>,
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self {
            items: Slab::new(),
            generations: Vec::new(),
        }
    }
}

impl<T> Arena<T> {
    pub fn insert(&mut self, item: T) -> ArenaIndex {
        let slot = self.items.insert(item);
        if self.generations.len() <= slot {
            self.generations.resize(slot + 1, 0);
        }

        ArenaIndex::from_raw_parts(slot as u32, self.generations[slot])
    }

    pub fn remove(&mut self, index: ArenaIndex) -> Option<T> {
        if !self.contains(index) {
            return None;
        }

        let slot = index.slot();
        self.generations[slot] = self.generations[slot].wrapping_add(1);
        self.items.try_remove(slot)
    }

    pub fn contains(&self, index: ArenaIndex) -> bool {
        self.generations.get(index.slot()) == Some(&index.generation)
            && self.items.contains(index.slot())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: ArenaIndex) -> Option<&T> {
        if self.contains(index) {
            self.items.get(index.slot())
        } else {
            None
        }
    }

    pub fn get_mut(&mut self, index: ArenaIndex) -> Option<&mut T> {
        if self.contains(index) {
            self.items.get_mut(index.slot())
        } else {
            None
        }
    }

    /// Iterates by increasing slot.
    pub fn iter(&self) -> impl Iterator<Item = (ArenaIndex, &T)> {
        let generations = &self.generations;
        self.items
            .iter()
            .map(move |(i, item)| (ArenaIndex::from_raw_parts(i as u32, generations[i]), item))
    }

    /// Iterates by increasing slot.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (ArenaIndex, &mut T)> {
        let generations = &self.generations;
        self.items
            .iter_mut()
            .map(move |(i, item)| (ArenaIndex::from_raw_parts(i as u32, generations[i]), item))
    }
}

impl<T> Index<ArenaIndex> for Arena<T> {
    type Output = T;

    #[track_caller]
    fn index(&self, index: ArenaIndex) -> &T {
        match self.get(index) {
            Some(item) => item,
            None => panic!("no element at {:?}", index),
        }
    }
}

impl<T> IndexMut<ArenaIndex> for Arena<T> {
    #[track_caller]
    fn index_mut(&mut self, index: ArenaIndex) -> &mut T {
        match self.get_mut(index) {
            Some(item) => item,
            None => panic!("no element at {:?}", index),
        }
    }
}
