//! Interned signal names and the per-chip name table.

use lasso::Rodeo;
use serde::{Deserialize, Serialize};

/// An interned name of a chip, net, or instance.
///
/// Identifiers are `u32` indices into a [`NameTable`]. Equality and cloning
/// are O(1); the string is recovered with [`NameTable::resolve`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Ident(u32);

impl Ident {
    /// Creates an `Ident` from a raw `u32` index.
    ///
    /// Intended for deserialization and tests. Normal code obtains identifiers
    /// from [`NameTable::claim`].
    pub fn from_raw(index: u32) -> Self {
        Self(index)
    }

    /// Returns the raw `u32` index of this identifier.
    pub fn as_raw(self) -> u32 {
        self.0
    }
}

// SAFETY: `Ident` wraps a `u32` which is always a valid `usize` on 32-bit and
// 64-bit platforms. `try_from_usize` rejects values that don't fit in `u32`.
unsafe impl lasso::Key for Ident {
    fn into_usize(self) -> usize {
        self.0 as usize
    }

    fn try_from_usize(int: usize) -> Option<Self> {
        u32::try_from(int).ok().map(Ident)
    }
}

/// The namespace of one emitted module.
///
/// Every string interned here is considered taken: a chip claims the data,
/// strobe, and acknowledge names of each net and the name of each instance,
/// so a later collision can be detected before anything is created.
///
/// Backed by a single-threaded [`lasso::Rodeo`]; a chip has exactly one writer.
#[derive(Debug)]
pub struct NameTable {
    rodeo: Rodeo<Ident>,
}

impl NameTable {
    /// Creates an empty name table.
    pub fn new() -> Self {
        Self {
            rodeo: Rodeo::new(),
        }
    }

    /// Returns `true` if `name` has already been claimed.
    pub fn is_taken(&self, name: &str) -> bool {
        self.rodeo.contains(name)
    }

    /// Claims `name`, returning its identifier.
    ///
    /// Claiming an already-taken name returns the existing identifier; callers
    /// that need uniqueness check [`is_taken`](Self::is_taken) first.
    pub fn claim(&mut self, name: &str) -> Ident {
        self.rodeo.get_or_intern(name)
    }

    /// Looks up the identifier of a claimed name.
    pub fn get(&self, name: &str) -> Option<Ident> {
        self.rodeo.get(name)
    }

    /// Resolves an [`Ident`] back to its string value.
    ///
    /// # Panics
    ///
    /// Panics if the `Ident` was not created by this table.
    pub fn resolve(&self, ident: Ident) -> &str {
        self.rodeo.resolve(&ident)
    }

    /// Returns the number of claimed names.
    pub fn len(&self) -> usize {
        self.rodeo.len()
    }

    /// Returns `true` if no names have been claimed.
    pub fn is_empty(&self) -> bool {
        self.rodeo.is_empty()
    }
}

impl Default for NameTable {
    fn default() -> Self {
        Self::new()
    }
}
