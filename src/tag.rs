use core::num::NonZeroUsize;
use core::sync::atomic::{AtomicUsize, Ordering};

static NEXT: AtomicUsize = AtomicUsize::new(1);

/// Identity of one incarnation of a list.
///
/// A list gets a fresh tag at construction and at every `reinit`, and drops
/// it at teardown. Cursors copy the tag of the list that minted them, so a
/// cursor outliving its list's incarnation no longer matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct Tag(NonZeroUsize);

impl Tag {
    pub(crate) fn fresh() -> Tag {
        Tag::next_from(&NEXT)
    }

    // A wrapped counter yields zero once; that value is consumed and skipped.
    fn next_from(counter: &AtomicUsize) -> Tag {
        loop {
            if let Some(raw) = NonZeroUsize::new(counter.fetch_add(1, Ordering::Relaxed)) {
                return Tag(raw);
            }
        }
    }
}
