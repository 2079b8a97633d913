use alloc::boxed::Box;
use core::fmt;

use crate::list::{Cleanup, Ownership, PooledList};
use crate::space::BASELINE_POOL;

/// Construction-time configuration of a [`PooledList`].
///
/// # Example
///
/// ```
/// use std::cell::Cell;
/// use pooled_list::{Ownership, PooledList};
///
/// let released = Cell::new(0);
/// let list = PooledList::<&str>::builder()
///     .capacity(32)
///     .cleanup(|_| released.set(released.get() + 1))
///     .boxed();
///
/// assert_eq!(list.capacity_hint(), 32);
/// assert_eq!(list.ownership(), Ownership::SelfOwned);
/// ```
pub struct Builder<'a, T, const N: usize = BASELINE_POOL> {
    capacity: usize,
    cleanup: Option<Cleanup<'a, T>>,
}

impl<'a, T, const N: usize> Builder<'a, T, N> {
    /// Starts from `N` pool slots and no cleanup callback.
    pub fn new() -> Builder<'a, T, N> {
        Builder {
            capacity: 0,
            cleanup: None,
        }
    }

    /// Requests a pool of `hint` slots. Hints below `N` have no effect.
    pub fn capacity(mut self, hint: usize) -> Self {
        self.capacity = hint;
        self
    }

    /// Sets the callback run on every value at teardown.
    pub fn cleanup<F>(mut self, cleanup: F) -> Self
    where
        F: FnMut(T) + 'a,
    {
        self.cleanup = Some(Box::new(cleanup));
        self
    }

    /// Builds a list to be held by value.
    ///
    /// With a hint above `N` the pool is reserved as a separate block, so the
    /// list no longer fits entirely inside its parent.
    pub fn build(self) -> PooledList<'a, T, N> {
        PooledList::from_parts(self.capacity, self.cleanup, Ownership::Embedded)
    }

    /// Builds a self-owned list.
    pub fn boxed(self) -> Box<PooledList<'a, T, N>> {
        Box::new(PooledList::from_parts(
            self.capacity,
            self.cleanup,
            Ownership::SelfOwned,
        ))
    }
}

impl<'a, T, const N: usize> Default for Builder<'a, T, N> {
    fn default() -> Self {
        Builder::new()
    }
}

impl<T, const N: usize> fmt::Debug for Builder<'_, T, N> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Builder")
            .field("capacity", &self.capacity)
            .field("cleanup", &self.cleanup.is_some())
            .finish()
    }
}
