//! Inline pool sizes.
//!
//! The `N` parameter of [`PooledList`](crate::PooledList) is the number of
//! item slots stored inline. Every list carries at least [`BASELINE_POOL`]
//! of them; a smaller `N` is rejected at compile time.
//!
//! ```
//! use pooled_list::PooledList;
//! use pooled_list::space::{self, S16};
//!
//! struct Parsed<'a> {
//!     tokens: PooledList<'a, &'a str, S16>,
//!     // baseline plus three extra slots, all inside `Parsed`
//!     flags: PooledList<'a, &'a str, { space::pool_size(3) }>,
//! }
//!
//! let parsed = Parsed { tokens: PooledList::new(), flags: PooledList::new() };
//! assert_eq!(parsed.tokens.capacity_hint(), 16);
//! assert_eq!(parsed.flags.capacity_hint(), space::BASELINE_POOL + 3);
//! ```

/// Slots every list embeds regardless of the requested capacity.
pub const BASELINE_POOL: usize = 8;

/// 8 inline slots.
pub const S8: usize = 8;
/// 16 inline slots.
pub const S16: usize = 16;
/// 32 inline slots.
pub const S32: usize = 32;
/// 64 inline slots.
pub const S64: usize = 64;

/// Pool size of an embedded list that wants `extra` slots on top of the
/// baseline.
pub const fn pool_size(extra: usize) -> usize {
    BASELINE_POOL + extra
}
