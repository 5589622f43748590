//! Append-only, ID-indexed storage for nets and instances.
//!
//! Entries are never removed or reordered, so an ID handed out by
//! [`Arena::alloc`] stays valid for the lifetime of the chip and iteration
//! order is creation order.

use std::marker::PhantomData;
use std::ops::{Index, IndexMut};

/// Trait for opaque ID types used as arena keys.
pub trait ArenaId: Copy {
    /// Creates an ID from a raw `u32` index.
    fn from_raw(index: u32) -> Self;

    /// Returns the raw `u32` index.
    fn as_raw(self) -> u32;
}

/// A dense container indexed by opaque IDs.
#[derive(Debug, Clone)]
pub struct Arena<I: ArenaId, T> {
    items: Vec<T>,
    _marker: PhantomData<I>,
}

impl<I: ArenaId, T> Default for Arena<I, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: ArenaId, T> Arena<I, T> {
    /// Creates a new, empty arena.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            _marker: PhantomData,
        }
    }

    /// The ID the next call to [`alloc`](Self::alloc) will return.
    pub fn next_id(&self) -> I {
        I::from_raw(self.items.len() as u32)
    }

    /// Appends an item and returns its ID.
    pub fn alloc(&mut self, item: T) -> I {
        let id = self.next_id();
        self.items.push(item);
        id
    }

    /// Returns a reference to the item with the given ID, if it exists.
    pub fn try_get(&self, id: I) -> Option<&T> {
        self.items.get(id.as_raw() as usize)
    }

    /// Returns `true` if `id` was allocated by this arena.
    pub fn contains(&self, id: I) -> bool {
        (id.as_raw() as usize) < self.items.len()
    }

    /// Returns a reference to the item with the given ID.
    ///
    /// # Panics
    ///
    /// Panics if the ID is out of bounds.
    pub fn get(&self, id: I) -> &T {
        &self.items[id.as_raw() as usize]
    }

    /// Returns a mutable reference to the item with the given ID.
    ///
    /// # Panics
    ///
    /// Panics if the ID is out of bounds.
    pub fn get_mut(&mut self, id: I) -> &mut T {
        &mut self.items[id.as_raw() as usize]
    }

    /// Returns the number of items in the arena.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the arena contains no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates over `(ID, &T)` pairs in allocation order.
    pub fn iter(&self) -> impl Iterator<Item = (I, &T)> {
        self.items
            .iter()
            .enumerate()
            .map(|(i, item)| (I::from_raw(i as u32), item))
    }

    /// Iterates over references to items in allocation order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }
}

impl<I: ArenaId, T> Index<I> for Arena<I, T> {
    type Output = T;

    fn index(&self, id: I) -> &T {
        self.get(id)
    }
}

impl<I: ArenaId, T> IndexMut<I> for Arena<I, T> {
    fn index_mut(&mut self, id: I) -> &mut T {
        self.get_mut(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::NetId;

    #[test]
    fn next_id_predicts_alloc() {
        let mut arena: Arena<NetId, &str> = Arena::new();
        let predicted = arena.next_id();
        let id = arena.alloc("a");
        assert_eq!(predicted, id);
        assert_eq!(arena.next_id().as_raw(), 1);
    }

    #[test]
    fn ids_follow_allocation_order() {
        let mut arena: Arena<NetId, u32> = Arena::new();
        arena.alloc(10);
        arena.alloc(20);
        let ids: Vec<u32> = arena.iter().map(|(id, _)| id.as_raw()).collect();
        assert_eq!(ids, vec![0, 1]);
        assert_eq!(arena.values().copied().collect::<Vec<_>>(), vec![10, 20]);
    }

    #[test]
    fn try_get_out_of_range() {
        let mut arena: Arena<NetId, u32> = Arena::new();
        let id = arena.alloc(1);
        assert_eq!(arena.try_get(id), Some(&1));
        assert!(arena.try_get(NetId::from_raw(5)).is_none());
        assert!(!arena.contains(NetId::from_raw(1)));
    }

    #[test]
    fn index_mut_modifies() {
        let mut arena: Arena<NetId, String> = Arena::new();
        let id = arena.alloc("before".to_string());
        arena[id] = "after".to_string();
        assert_eq!(arena[id], "after");
    }

    #[test]
    fn default_is_empty() {
        let arena: Arena<NetId, u32> = Arena::default();
        assert!(arena.is_empty());
        assert_eq!(arena.len(), 0);
    }
}
