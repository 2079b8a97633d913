use crate::pool::Slot;
use crate::tag::Tag;

/// Position of one item in a [`PooledList`](crate::PooledList).
///
/// Cursors are plain copyable handles. They do not borrow the list; instead
/// every use is checked against the list's current tag, so a cursor from a
/// different list, or from before a `destroy`, is reported as a fault
/// rather than silently reading the wrong item.
///
/// # Example
///
/// ```
/// use pooled_list::PooledList;
///
/// let mut list: PooledList<&str> = PooledList::new();
/// list.extend(["a", "b", "c", "d"]);
///
/// let second = list.cursor_at(1).unwrap();
/// assert_eq!(list.get_from(second, 0), Some(&"b"));
/// assert_eq!(list.get_from(second, 2), Some(&"d"));
/// assert_eq!(list.get_from(second, 3), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cursor {
    pub(crate) tag: Tag,
    pub(crate) slot: Slot,
}

impl Cursor {
    pub(crate) fn new(tag: Tag, slot: Slot) -> Cursor {
        Cursor { tag, slot }
    }

    /// Returns true if the item lives in an individually allocated heap node
    /// rather than the list's inline pool.
    pub fn is_heap(&self) -> bool {
        self.slot.is_heap()
    }
}
