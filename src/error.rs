/// Contract violations detected by a [`PooledList`](crate::PooledList).
///
/// None of these are runtime conditions: each one means the caller broke the
/// list's usage contract. The panicking methods stop on them; the `try_`
/// methods hand them back instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Fault {
    /// The list was destroyed and has not been re-initialized.
    #[error("list has been destroyed")]
    Destroyed,
    /// `reinit` was called on a list that is still live.
    #[error("list is still live and cannot be re-initialized")]
    AlreadyLive,
    /// `reinit` was called on a list created by [`PooledList::boxed`].
    ///
    /// [`PooledList::boxed`]: crate::PooledList::boxed
    #[error("self-owned lists cannot be re-initialized")]
    SelfOwned,
    /// The cursor was minted by another list, or by an earlier incarnation
    /// of this one.
    #[error("cursor does not reference a live item of this list")]
    DeadCursor,
}

#[cold]
#[inline(never)]
#[track_caller]
pub(crate) fn fatal(fault: Fault) -> ! {
    tracing::error!(%fault, "pooled list contract violated");
    panic!("pooled list: {}", fault)
}
