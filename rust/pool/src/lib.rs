#![warn(
    nonstandard_style,
    rust_2018_idioms,
    future_incompatible,
    clippy::pedantic,
    clippy::todo
)]
#![allow(
    clippy::type_complexity,
    clippy::cast_sign_loss,
    clippy::cast_possible_wrap,
    clippy::default_trait_access
)]
//! A typed object pool with a capacity fixed at compile time.
//!
//! Slots are handed out from the top of the pool until it is full (bump
//! allocation); removed slots go on a singly-linked free list and are reused
//! before any fresh slot. Nothing is ever returned to the system.

use arrayvec::ArrayVec;


/// Why an object couldn't be placed in a [`Pool`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PoolError {
    /// Every slot holds a live object.
    #[error("pool exhausted, all {capacity} slots are in use")]
    Exhausted {
        /// The pool's fixed capacity.
        capacity: usize,
    },
}

/// Refers to a live object in a [`Pool`].
///
/// Handles are not reference counted: after [`Pool::remove`] the handle is
/// stale, and its slot may be reused for a later insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Handle {
    index: usize,
}

#[derive(Debug)]
enum Slot<T> {
    Occupied(T),
    Free { next: Option<usize> },
}

/// Up to `CAPACITY` objects of type `T`, addressed by [`Handle`].
#[derive(Debug)]
pub struct Pool<T, const CAPACITY: usize> {
    slots: ArrayVec<Slot<T>, CAPACITY>,
    free_list: Option<usize>,
    len: usize,
}

impl<T, const CAPACITY: usize> Default for Pool<T, CAPACITY> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const CAPACITY: usize> Pool<T, CAPACITY> {
    /// An empty pool. Nothing is allocated until the first insertion.
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: ArrayVec::new(),
            free_list: None,
            len: 0,
        }
    }

    /// Maximum number of live objects.
    #[must_use]
    pub fn capacity(&self) -> usize {
        CAPACITY
    }

    /// Number of live objects.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the pool holds no live objects.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Move `value` into the pool.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::Exhausted`] if every slot is in use. `value` is dropped.
    pub fn insert(&mut self, value: T) -> Result<Handle, PoolError> {
        if let Some(index) = self.free_list {
            let Slot::Free { next } = self.slots[index] else {
                unreachable!("free list points at an occupied slot");
            };
            self.free_list = next;
            self.slots[index] = Slot::Occupied(value);
            self.len += 1;
            return Ok(Handle { index });
        }
        let index = self.slots.len();
        self.slots
            .try_push(Slot::Occupied(value))
            .map_err(|_| PoolError::Exhausted { capacity: CAPACITY })?;
        self.len += 1;
        Ok(Handle { index })
    }

    /// Like [`Pool::insert`], but halts on exhaustion.
    ///
    /// There is nobody to report exhaustion to at construction time, and running on
    /// with a missing instance would corrupt the host's view of it.
    ///
    /// # Panics
    ///
    /// Panics if every slot is in use.
    pub fn insert_or_halt(&mut self, value: T) -> Handle {
        match self.insert(value) {
            Ok(handle) => handle,
            Err(err) => {
                log::error!("{err}");
                panic!("{err}");
            }
        }
    }

    /// Take an object out of the pool, putting its slot on the free list.
    ///
    /// Returns `None` if the handle is stale.
    pub fn remove(&mut self, handle: Handle) -> Option<T> {
        let slot = self.slots.get_mut(handle.index)?;
        if let Slot::Free { .. } = slot {
            return None;
        }
        let Slot::Occupied(value) = std::mem::replace(
            slot,
            Slot::Free {
                next: self.free_list,
            },
        ) else {
            unreachable!();
        };
        self.free_list = Some(handle.index);
        self.len -= 1;
        Some(value)
    }

    /// The object behind `handle`, or `None` if the handle is stale.
    #[must_use]
    pub fn get(&self, handle: Handle) -> Option<&T> {
        match self.slots.get(handle.index)? {
            Slot::Occupied(value) => Some(value),
            Slot::Free { .. } => None,
        }
    }

    /// Mutable access to the object behind `handle`, or `None` if the handle is stale.
    pub fn get_mut(&mut self, handle: Handle) -> Option<&mut T> {
        match self.slots.get_mut(handle.index)? {
            Slot::Occupied(value) => Some(value),
            Slot::Free { .. } => None,
        }
    }
}
