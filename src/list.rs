use alloc::boxed::Box;
use core::fmt;
use core::iter::FusedIterator;

use crate::builder::Builder;
use crate::cursor::Cursor;
use crate::error::{fatal, Fault};
use crate::pool::{Item, Pool, Slot};
use crate::space::BASELINE_POOL;
use crate::tag::Tag;

/// Callback run once on every stored value when a list is torn down.
pub type Cleanup<'a, T> = Box<dyn FnMut(T) + 'a>;

/// Build a list from its values, like `vec!`
///
/// The list gets the default pool of [`BASELINE_POOL`] inline slots and no
/// cleanup callback.
///
/// # Example
///
/// ```
/// #[macro_use]
/// extern crate pooled_list;
///
/// # fn main() {
/// let list = pooled_list!["x", "y", "x"];
///
/// assert_eq!(list.len(), 3);
/// assert_eq!(list.index_of_str("x"), Some(0));
/// # }
/// ```
#[macro_export]
macro_rules! pooled_list {
    () => {
        $crate::PooledList::<_>::new()
    };
    ( $( $value: expr ),+ $(,)? ) => {{
        let mut list = $crate::PooledList::<_>::new();
        $( list.push($value); )+
        list
    }};
}

/// How a list was constructed.
///
/// This records the constructor, not where the value currently lives: moving
/// a self-owned list out of its `Box` keeps it `SelfOwned`. Only embedded
/// lists may be re-initialized after destruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ownership {
    /// Created by [`PooledList::boxed`]; the list lives in its own allocation.
    SelfOwned,
    /// Created by value and held inside whatever structure embeds it.
    Embedded,
}

/// An append-only ordered list with an inline slot pool
///
/// The first [`capacity_hint`](PooledList::capacity_hint) items are stored in
/// a pool reserved when the list is created; every item after that gets its
/// own heap node. The pool holds at least `N` slots inline, so a list
/// embedded by value in a parent structure does not allocate until it
/// outgrows `N`.
///
/// Values are opaque to the list. Nothing reads them except
/// [`index_of_str`](PooledList::index_of_str), and they are released only at
/// teardown, through the cleanup callback when one is configured.
///
/// Misuse is fatal: operating on a destroyed list or resolving a cursor that
/// does not belong to the list panics. Each such method has a `try_` twin
/// that returns the [`Fault`] instead.
///
/// # Example
///
/// ```
/// use pooled_list::PooledList;
///
/// let mut list: PooledList<&str> = PooledList::new();
/// for word in ["alpha", "beta", "gamma"] {
///     list.push(word);
/// }
///
/// assert_eq!(list.get(1), Some(&"beta"));
/// assert_eq!(list.get(3), None);
/// assert_eq!(list.heap_len(), 0);
/// ```
pub struct PooledList<'a, T, const N: usize = BASELINE_POOL> {
    tag: Option<Tag>,
    len: usize,
    head: Option<Slot>,
    tail: Option<Slot>,
    pool: Pool<T, N>,
    cleanup: Option<Cleanup<'a, T>>,
    ownership: Ownership,
}

impl<'a, T, const N: usize> PooledList<'a, T, N> {
    const POOL_FLOOR: () = assert!(
        N >= BASELINE_POOL,
        "inline pool must hold at least BASELINE_POOL slots"
    );

    /// Creates an empty list with `N` pool slots and no cleanup callback.
    pub fn new() -> PooledList<'a, T, N> {
        PooledList::from_parts(0, None, Ownership::Embedded)
    }

    /// Creates an empty list that hands every value to `cleanup` at teardown.
    ///
    /// # Example
    ///
    /// ```
    /// use std::cell::RefCell;
    /// use pooled_list::PooledList;
    ///
    /// let released = RefCell::new(Vec::new());
    /// let mut list =
    ///     PooledList::<String>::with_cleanup(|value| released.borrow_mut().push(value));
    /// list.push("a".to_owned());
    /// list.push("b".to_owned());
    /// list.destroy();
    ///
    /// assert_eq!(*released.borrow(), ["a", "b"]);
    /// ```
    pub fn with_cleanup<F>(cleanup: F) -> PooledList<'a, T, N>
    where
        F: FnMut(T) + 'a,
    {
        PooledList::from_parts(0, Some(Box::new(cleanup)), Ownership::Embedded)
    }

    /// Creates a self-owned list whose pool holds `max(N, capacity)` slots.
    ///
    /// When `capacity` exceeds `N` the whole pool is reserved as one block up
    /// front.
    ///
    /// # Example
    ///
    /// ```
    /// use pooled_list::{Ownership, PooledList};
    ///
    /// let list = PooledList::<u32>::boxed(20);
    /// assert_eq!(list.capacity_hint(), 20);
    /// assert_eq!(list.ownership(), Ownership::SelfOwned);
    ///
    /// let list = PooledList::<u32>::boxed(3);
    /// assert_eq!(list.capacity_hint(), pooled_list::space::BASELINE_POOL);
    /// ```
    pub fn boxed(capacity: usize) -> Box<PooledList<'a, T, N>> {
        Box::new(PooledList::from_parts(capacity, None, Ownership::SelfOwned))
    }

    /// Same as [`boxed`](PooledList::boxed), with a cleanup callback.
    pub fn boxed_with_cleanup<F>(capacity: usize, cleanup: F) -> Box<PooledList<'a, T, N>>
    where
        F: FnMut(T) + 'a,
    {
        Box::new(PooledList::from_parts(
            capacity,
            Some(Box::new(cleanup)),
            Ownership::SelfOwned,
        ))
    }

    /// Starts a [`Builder`].
    pub fn builder() -> Builder<'a, T, N> {
        Builder::new()
    }

    pub(crate) fn from_parts(
        capacity: usize,
        cleanup: Option<Cleanup<'a, T>>,
        ownership: Ownership,
    ) -> PooledList<'a, T, N> {
        let () = Self::POOL_FLOOR;

        let pool = Pool::with_limit(capacity);
        tracing::trace!(capacity = pool.limit(), ?ownership, "pooled list created");

        PooledList {
            tag: Some(Tag::fresh()),
            len: 0,
            head: None,
            tail: None,
            pool,
            cleanup,
            ownership,
        }
    }

    /// Returns the number of items.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the list holds no items.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of items that fit in the pool before the list
    /// starts allocating heap nodes.
    pub fn capacity_hint(&self) -> usize {
        self.pool.limit()
    }

    /// Returns the number of heap nodes currently allocated.
    pub fn heap_len(&self) -> usize {
        self.pool.heap_len()
    }

    /// Returns how the list's own storage is owned.
    pub fn ownership(&self) -> Ownership {
        self.ownership
    }

    /// Returns true once the list has been destroyed, until it is
    /// re-initialized.
    pub fn is_destroyed(&self) -> bool {
        self.tag.is_none()
    }

    /// Appends `value` at the tail and returns its cursor.
    ///
    /// # Panics
    ///
    /// Panics if the list has been destroyed.
    #[track_caller]
    pub fn push(&mut self, value: T) -> Cursor {
        match self.try_push(value) {
            Ok(cursor) => cursor,
            Err(fault) => fatal(fault),
        }
    }

    /// Checked [`push`](PooledList::push).
    pub fn try_push(&mut self, value: T) -> Result<Cursor, Fault> {
        let tag = self.live_tag()?;

        let slot = self.pool.alloc(value, self.tail);
        if slot.is_heap() {
            tracing::trace!(
                len = self.len,
                heap = self.pool.heap_len(),
                "inline pool exhausted, allocated heap node"
            );
        }

        match self.tail {
            Some(tail) => match self.pool.get_mut(tail) {
                Some(item) => item.next = Some(slot),
                None => panic!("pooled list tail {:?} is missing from its pool", tail),
            },
            None => self.head = Some(slot),
        }
        self.tail = Some(slot);
        self.len += 1;

        Ok(Cursor::new(tag, slot))
    }

    /// Returns the value at `index`, scanning from the head.
    ///
    /// # Panics
    ///
    /// Panics if the list has been destroyed.
    #[track_caller]
    pub fn get(&self, index: usize) -> Option<&T> {
        match self.try_get(index) {
            Ok(value) => value,
            Err(fault) => fatal(fault),
        }
    }

    /// Checked [`get`](PooledList::get).
    pub fn try_get(&self, index: usize) -> Result<Option<&T>, Fault> {
        self.live_tag()?;
        Ok(Iter::new(self).nth(index))
    }

    /// Returns the value `index` items after `cursor`; `get_from(cursor, 0)`
    /// is the cursor's own value.
    ///
    /// # Panics
    ///
    /// Panics if the list has been destroyed or `cursor` does not belong to
    /// it.
    #[track_caller]
    pub fn get_from(&self, cursor: Cursor, index: usize) -> Option<&T> {
        match self.try_get_from(cursor, index) {
            Ok(value) => value,
            Err(fault) => fatal(fault),
        }
    }

    /// Checked [`get_from`](PooledList::get_from).
    pub fn try_get_from(&self, cursor: Cursor, index: usize) -> Result<Option<&T>, Fault> {
        let mut item = self.item(cursor)?;
        for _ in 0..index {
            match item.next.and_then(|next| self.pool.get(next)) {
                Some(next) => item = next,
                None => return Ok(None),
            }
        }
        Ok(Some(&item.value))
    }

    /// Returns the position of the first value whose bytes equal `query`.
    ///
    /// # Panics
    ///
    /// Panics if the list has been destroyed.
    #[track_caller]
    pub fn index_of_str<Q>(&self, query: &Q) -> Option<usize>
    where
        T: AsRef<[u8]>,
        Q: AsRef<[u8]> + ?Sized,
    {
        match self.try_index_of_str(query) {
            Ok(index) => index,
            Err(fault) => fatal(fault),
        }
    }

    /// Checked [`index_of_str`](PooledList::index_of_str).
    pub fn try_index_of_str<Q>(&self, query: &Q) -> Result<Option<usize>, Fault>
    where
        T: AsRef<[u8]>,
        Q: AsRef<[u8]> + ?Sized,
    {
        self.live_tag()?;
        let query: &[u8] = query.as_ref();
        Ok(Iter::new(self).position(|value| AsRef::<[u8]>::as_ref(value) == query))
    }

    /// Returns false for `None`, true for a cursor into this list.
    ///
    /// # Panics
    ///
    /// Panics if `cursor` is `Some` but does not reference a live item of
    /// this list.
    #[track_caller]
    pub fn is_live(&self, cursor: Option<Cursor>) -> bool {
        match cursor {
            None => false,
            Some(cursor) => {
                if let Err(fault) = self.check(cursor) {
                    fatal(fault)
                }
                true
            }
        }
    }

    /// Checks that `cursor` references a live item of this list.
    pub fn check(&self, cursor: Cursor) -> Result<(), Fault> {
        self.item(cursor).map(|_| ())
    }

    /// Returns a cursor to the head.
    #[track_caller]
    pub fn front(&self) -> Option<Cursor> {
        let tag = self.expect_live();
        self.head.map(|slot| Cursor::new(tag, slot))
    }

    /// Returns a cursor to the tail.
    #[track_caller]
    pub fn back(&self) -> Option<Cursor> {
        let tag = self.expect_live();
        self.tail.map(|slot| Cursor::new(tag, slot))
    }

    /// Returns a cursor to the item at `index`.
    #[track_caller]
    pub fn cursor_at(&self, index: usize) -> Option<Cursor> {
        let tag = self.expect_live();
        core::iter::successors(self.head, |&slot| self.pool.get(slot)?.next)
            .nth(index)
            .map(|slot| Cursor::new(tag, slot))
    }

    /// Returns the cursor following `cursor`, or `None` at the tail.
    #[track_caller]
    pub fn next_cursor(&self, cursor: Cursor) -> Option<Cursor> {
        match self.item(cursor) {
            Ok(item) => item.next.map(|slot| Cursor::new(cursor.tag, slot)),
            Err(fault) => fatal(fault),
        }
    }

    /// Returns the cursor preceding `cursor`, or `None` at the head.
    #[track_caller]
    pub fn prev_cursor(&self, cursor: Cursor) -> Option<Cursor> {
        match self.item(cursor) {
            Ok(item) => item.prev.map(|slot| Cursor::new(cursor.tag, slot)),
            Err(fault) => fatal(fault),
        }
    }

    /// Iterates over the values from head to tail.
    #[track_caller]
    pub fn iter(&self) -> Iter<'_, T, N> {
        self.expect_live();
        Iter::new(self)
    }

    /// Tears the list down.
    ///
    /// Every value is handed to the cleanup callback, head to tail, or simply
    /// dropped when there is none. Heap nodes are freed; the pool reservation
    /// is kept for a later [`reinit`](PooledList::reinit). Outstanding
    /// cursors become dead.
    ///
    /// # Panics
    ///
    /// Panics if the list has already been destroyed.
    #[track_caller]
    pub fn destroy(&mut self) {
        if let Err(fault) = self.try_destroy() {
            fatal(fault)
        }
    }

    /// Checked [`destroy`](PooledList::destroy). Returns the number of values
    /// released.
    pub fn try_destroy(&mut self) -> Result<usize, Fault> {
        self.live_tag()?;
        Ok(self.teardown())
    }

    /// Destroys a self-owned list and frees it. `None` is a no-op.
    ///
    /// # Example
    ///
    /// ```
    /// use std::cell::Cell;
    /// use pooled_list::PooledList;
    ///
    /// let released = Cell::new(0);
    /// let mut list =
    ///     PooledList::<u32>::boxed_with_cleanup(0, |_| released.set(released.get() + 1));
    /// list.extend([1, 2, 3]);
    ///
    /// PooledList::destroy_boxed(Some(list));
    /// PooledList::<u32>::destroy_boxed(None);
    /// assert_eq!(released.get(), 3);
    /// ```
    #[track_caller]
    pub fn destroy_boxed(list: Option<Box<PooledList<'a, T, N>>>) {
        if let Some(mut list) = list {
            list.destroy();
        }
    }

    /// Re-arms a destroyed list, typically one embedded in a structure that
    /// is being reused.
    ///
    /// # Panics
    ///
    /// Panics if the list is still live, or if it is
    /// [`SelfOwned`](Ownership::SelfOwned).
    #[track_caller]
    pub fn reinit(&mut self, cleanup: Option<Cleanup<'a, T>>) {
        if let Err(fault) = self.try_reinit(cleanup) {
            fatal(fault)
        }
    }

    /// Checked [`reinit`](PooledList::reinit).
    pub fn try_reinit(&mut self, cleanup: Option<Cleanup<'a, T>>) -> Result<(), Fault> {
        if self.ownership == Ownership::SelfOwned {
            return Err(Fault::SelfOwned);
        }
        if self.tag.is_some() {
            return Err(Fault::AlreadyLive);
        }
        self.cleanup = cleanup;
        self.tag = Some(Tag::fresh());
        Ok(())
    }

    fn live_tag(&self) -> Result<Tag, Fault> {
        self.tag.ok_or(Fault::Destroyed)
    }

    #[track_caller]
    fn expect_live(&self) -> Tag {
        match self.live_tag() {
            Ok(tag) => tag,
            Err(fault) => fatal(fault),
        }
    }

    fn item(&self, cursor: Cursor) -> Result<&Item<T>, Fault> {
        if self.live_tag()? != cursor.tag {
            return Err(Fault::DeadCursor);
        }
        self.pool.get(cursor.slot).ok_or(Fault::DeadCursor)
    }

    // Marked destroyed before any value is released. If a callback panics,
    // the drain drops the remaining items and `Drop` has nothing left to do.
    fn teardown(&mut self) -> usize {
        let heap = self.pool.heap_len();
        let len = core::mem::take(&mut self.len);
        self.tag = None;
        // append-only, so the chain runs in allocation order
        let mut expected = self.head.take();
        self.tail = None;

        let mut released = 0;
        for (slot, item) in self.pool.drain() {
            debug_assert_eq!(expected, Some(slot), "item chain out of allocation order");
            expected = item.next;
            released += 1;
            if let Some(cleanup) = self.cleanup.as_deref_mut() {
                cleanup(item.value);
            }
        }
        assert_eq!(released, len, "pooled list length out of sync with its items");

        tracing::debug!(items = released, heap, "pooled list destroyed");
        released
    }
}

impl<T, const N: usize> Drop for PooledList<'_, T, N> {
    fn drop(&mut self) {
        if self.tag.is_some() {
            self.teardown();
        }
    }
}

impl<'a, T, const N: usize> Default for PooledList<'a, T, N> {
    fn default() -> Self {
        PooledList::new()
    }
}

impl<T, const N: usize> Extend<T> for PooledList<'_, T, N> {
    #[track_caller]
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<'a, T, const N: usize> FromIterator<T> for PooledList<'a, T, N> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = PooledList::new();
        list.extend(iter);
        list
    }
}

impl<'l, T, const N: usize> IntoIterator for &'l PooledList<'_, T, N> {
    type Item = &'l T;
    type IntoIter = Iter<'l, T, N>;

    fn into_iter(self) -> Iter<'l, T, N> {
        self.iter()
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for PooledList<'_, T, N> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_destroyed() {
            return f.write_str("PooledList(<destroyed>)");
        }
        f.debug_list().entries(Iter::new(self)).finish()
    }
}

/// Iterator over the values of a [`PooledList`], head to tail.
pub struct Iter<'l, T, const N: usize> {
    pool: &'l Pool<T, N>,
    front: Option<Slot>,
    back: Option<Slot>,
    remaining: usize,
}

impl<'l, T, const N: usize> Iter<'l, T, N> {
    fn new(list: &'l PooledList<'_, T, N>) -> Iter<'l, T, N> {
        Iter {
            pool: &list.pool,
            front: list.head,
            back: list.tail,
            remaining: list.len,
        }
    }
}

impl<'l, T, const N: usize> Iterator for Iter<'l, T, N> {
    type Item = &'l T;

    fn next(&mut self) -> Option<&'l T> {
        if self.remaining == 0 {
            return None;
        }
        let item = self.pool.get(self.front?)?;
        self.front = item.next;
        self.remaining -= 1;
        Some(&item.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'l, T, const N: usize> DoubleEndedIterator for Iter<'l, T, N> {
    fn next_back(&mut self) -> Option<&'l T> {
        if self.remaining == 0 {
            return None;
        }
        let item = self.pool.get(self.back?)?;
        self.back = item.prev;
        self.remaining -= 1;
        Some(&item.value)
    }
}

impl<T, const N: usize> ExactSizeIterator for Iter<'_, T, N> {}

impl<T, const N: usize> FusedIterator for Iter<'_, T, N> {}
