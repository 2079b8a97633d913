use alloc::boxed::Box;
use alloc::vec::Vec;

use smallvec::SmallVec;

/// Where an item is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Slot {
    /// Index into the inline pool.
    Pool(usize),
    /// Index into the table of boxed overflow nodes.
    Heap(usize),
}

impl Slot {
    pub(crate) fn is_heap(self) -> bool {
        matches!(self, Slot::Heap(_))
    }
}

pub(crate) struct Item<T> {
    pub(crate) value: T,
    pub(crate) prev: Option<Slot>,
    pub(crate) next: Option<Slot>,
}

/// Item storage of one list.
///
/// The first `limit` items go to `inline`, whose capacity is reserved at
/// construction: it stays inside the owning struct when `limit <= N` and is
/// a single block otherwise, so pushing into the pool never reallocates.
/// Every item after that gets its own `Box`.
pub(crate) struct Pool<T, const N: usize> {
    inline: SmallVec<[Item<T>; N]>,
    limit: usize,
    heap: Vec<Box<Item<T>>>,
}

impl<T, const N: usize> Pool<T, N> {
    pub(crate) fn with_limit(limit: usize) -> Pool<T, N> {
        let limit = limit.max(N);
        Pool {
            inline: SmallVec::with_capacity(limit),
            limit,
            heap: Vec::new(),
        }
    }

    pub(crate) fn limit(&self) -> usize {
        self.limit
    }

    pub(crate) fn heap_len(&self) -> usize {
        self.heap.len()
    }

    /// Stores an unlinked item and returns its slot.
    pub(crate) fn alloc(&mut self, value: T, prev: Option<Slot>) -> Slot {
        let item = Item {
            value,
            prev,
            next: None,
        };
        if self.inline.len() < self.limit {
            self.inline.push(item);
            Slot::Pool(self.inline.len() - 1)
        } else {
            self.heap.push(Box::new(item));
            Slot::Heap(self.heap.len() - 1)
        }
    }

    pub(crate) fn get(&self, slot: Slot) -> Option<&Item<T>> {
        match slot {
            Slot::Pool(index) => self.inline.get(index),
            Slot::Heap(index) => self.heap.get(index).map(|node| &**node),
        }
    }

    pub(crate) fn get_mut(&mut self, slot: Slot) -> Option<&mut Item<T>> {
        match slot {
            Slot::Pool(index) => self.inline.get_mut(index),
            Slot::Heap(index) => self.heap.get_mut(index).map(|node| &mut **node),
        }
    }

    /// Removes every item in allocation order.
    ///
    /// Heap nodes are freed as they are yielded. The inline pool keeps its
    /// reservation so a re-initialized list starts from the same footprint.
    pub(crate) fn drain(&mut self) -> impl Iterator<Item = (Slot, Item<T>)> + '_ {
        let inline = self
            .inline
            .drain(..)
            .enumerate()
            .map(|(index, item)| (Slot::Pool(index), item));
        let heap = self
            .heap
            .drain(..)
            .enumerate()
            .map(|(index, node)| (Slot::Heap(index), *node));
        inline.chain(heap)
    }
}
