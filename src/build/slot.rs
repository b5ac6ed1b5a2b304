//! View handles into container storage.
//!
//! The `*_ref` source factories yield [`Slot`]s instead of values. A slot
//! aliases one element of the source container, so writing through it during
//! traversal updates the container in place:
//!
//! ```rust
//! use lazyseq::prelude::*;
//!
//! let mut readings = vec![10.0, 9.0, 8.0];
//! for mut slot in from_bidirectional_ref(&mut readings) {
//!     slot.set(*slot / 2.0);
//! }
//! assert_eq!(readings, vec![5.0, 4.5, 4.0]);
//! ```
//!
//! A slot borrows the container mutably for `'a`, so the borrow checker
//! rejects any attempt to keep a slot past the container's lifetime or to
//! resize the container while slots are outstanding.

use core::fmt;
use core::ops::{Deref, DerefMut};

/// A non-owning, assignable handle to one element of a container.
pub struct Slot<'a, T: ?Sized>(&'a mut T);

impl<'a, T: ?Sized> Slot<'a, T> {
    pub fn new(target: &'a mut T) -> Self {
        Slot(target)
    }

    pub fn get(&self) -> &T {
        self.0
    }

    pub fn get_mut(&mut self) -> &mut T {
        self.0
    }

    /// Give up the handle and keep the underlying borrow.
    pub fn into_mut(self) -> &'a mut T {
        self.0
    }
}

impl<T> Slot<'_, T> {
    /// Assign into the aliased element.
    pub fn set(&mut self, value: T) {
        *self.0 = value;
    }

    /// Assign into the aliased element, returning the previous value.
    pub fn replace(&mut self, value: T) -> T {
        core::mem::replace(self.0, value)
    }
}

impl<'a, T: ?Sized> From<&'a mut T> for Slot<'a, T> {
    fn from(target: &'a mut T) -> Self {
        Slot(target)
    }
}

impl<T: ?Sized> Deref for Slot<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        self.0
    }
}

impl<T: ?Sized> DerefMut for Slot<'_, T> {
    fn deref_mut(&mut self) -> &mut T {
        self.0
    }
}

impl<T: ?Sized + fmt::Debug> fmt::Debug for Slot<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Slot").field(&self.0).finish()
    }
}

impl<T: ?Sized + PartialEq> PartialEq<T> for Slot<'_, T> {
    fn eq(&self, other: &T) -> bool {
        *self.0 == *other
    }
}
