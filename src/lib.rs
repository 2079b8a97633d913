//! # PooledList: Lists That Rarely Allocate
//!
//! [`PooledList`] is an append-only ordered list whose items live in a slot
//! pool reserved when the list is created. Only once the pool is exhausted
//! does it fall back to one heap node per item. Most lists stay small, so
//! most lists never allocate per item at all.
//!
//! ## Core Concept
//!
//! A list is created with a pool of at least [`space::BASELINE_POOL`] slots.
//! Items are chained head to tail through index handles, so traversal does
//! not care whether an item sits in the pool or in a heap node.
//!
//! ```text
//! pool:  [a][b][c][d][e][f][g][h]     heap:  (i) -> (j) -> ...
//!         '--'--'--'--'--'--'--'-------^
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use pooled_list::PooledList;
//!
//! let mut list: PooledList<&str> = PooledList::new();
//! list.extend(["a", "b", "c"]);
//!
//! assert_eq!(list.get(2), Some(&"c"));
//! assert_eq!(list.index_of_str("b"), Some(1));
//! assert_eq!(list.heap_len(), 0);
//! ```
//!
//! ## Embedded and Self-Owned Lists
//!
//! A list held by value is *embedded*: its header and `N` inline slots are
//! part of whatever structure holds it. [`PooledList::boxed`] creates a
//! *self-owned* list instead, in its own allocation, with a pool sized from a
//! runtime hint.
//!
//! ```rust
//! use pooled_list::{PooledList, space};
//!
//! struct Record<'a> {
//!     id: u32,
//!     tags: PooledList<'a, &'a str, { space::pool_size(4) }>,
//! }
//!
//! let mut record = Record { id: 7, tags: PooledList::new() };
//! record.tags.extend(["x", "y"]);
//! assert_eq!(record.tags.capacity_hint(), 12);
//!
//! let hinted = PooledList::<u64>::boxed(100);
//! assert_eq!(hinted.capacity_hint(), 100);
//! # let _ = record.id;
//! ```
//!
//! ## Teardown
//!
//! Values are opaque. The list releases them only at teardown, handing each
//! one, head to tail, to the cleanup callback when one was configured:
//!
//! ```rust
//! use std::cell::RefCell;
//! use pooled_list::PooledList;
//!
//! let collected = RefCell::new(Vec::new());
//! let mut list = PooledList::<&str>::with_cleanup(|value| collected.borrow_mut().push(value));
//! list.extend(["a", "b", "c"]);
//! list.destroy();
//!
//! assert_eq!(*collected.borrow(), ["a", "b", "c"]);
//! ```
//!
//! ## Contract Violations
//!
//! Using a destroyed list, destroying it twice, or resolving a [`Cursor`]
//! minted by another list are bugs in the caller. The plain methods panic on
//! them; the `try_` methods return a [`Fault`].
//!
//! ```rust
//! use pooled_list::{Fault, PooledList};
//!
//! let mut list: PooledList<u8> = PooledList::new();
//! list.destroy();
//! assert_eq!(list.try_push(1).unwrap_err(), Fault::Destroyed);
//! assert_eq!(list.try_destroy(), Err(Fault::Destroyed));
//! ```
//!
//! ## Feature Flags
//!
//! - **`std`** (enabled by default)
//!   - Links to the standard library
//!   - Disable for `#![no_std]` environments: `default-features = false`

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]
#![deny(clippy::as_conversions)]

extern crate alloc;

mod builder;
mod cursor;
mod error;
mod list;
mod pool;
pub mod space;
mod tag;

pub use crate::builder::Builder;
pub use crate::cursor::Cursor;
pub use crate::error::Fault;
pub use crate::list::{Cleanup, Iter, Ownership, PooledList};
