//! Free functions over possibly-absent handles.
//!
//! Runtimes that store queues and cursors in optional slots can call these
//! without unwrapping first. An absent queue reads as empty, an absent
//! cursor yields nothing, and direction codes arrive as raw integers.
//!
//! ```
//! use nexus_deque::{ByteQueue, handle};
//!
//! let mut slot: Option<ByteQueue> = None;
//! assert_eq!(handle::length(slot.as_ref()), 0);
//! assert!(handle::pop_front(slot.as_mut()).is_none());
//!
//! let queue = slot.insert(ByteQueue::new());
//! queue.push_back(b"job");
//! assert_eq!(handle::length(slot.as_ref()), 1);
//! ```

use crate::iter::{Direction, IterHandle};
use crate::queue::ByteQueue;

/// Returns the number of buffers, or 0 for an absent queue.
#[inline]
pub fn length(queue: Option<&ByteQueue>) -> usize {
    queue.map_or(0, ByteQueue::len)
}

/// Returns the front buffer, if any.
#[inline]
pub fn peek_front(queue: Option<&ByteQueue>) -> Option<&[u8]> {
    queue?.peek_front()
}

/// Returns the back buffer, if any.
#[inline]
pub fn peek_back(queue: Option<&ByteQueue>) -> Option<&[u8]> {
    queue?.peek_back()
}

/// Removes the front buffer and hands it to the caller, if any.
#[inline]
pub fn pop_front(queue: Option<&mut ByteQueue>) -> Option<Box<[u8]>> {
    queue?.pop_front()
}

/// Removes the back buffer and hands it to the caller, if any.
#[inline]
pub fn pop_back(queue: Option<&mut ByteQueue>) -> Option<Box<[u8]>> {
    queue?.pop_back()
}

/// Creates a cursor from a raw direction code.
///
/// Returns `None` if the queue is absent or empty, the code names no
/// [`Direction`], or an iterator is already outstanding.
pub fn iter_init(queue: Option<&ByteQueue>, direction: u8) -> Option<IterHandle> {
    let queue = queue?;
    let Some(direction) = Direction::try_from_repr(direction) else {
        tracing::debug!(code = direction, "iterator refused: unknown direction");
        return None;
    };
    queue.iter_init(direction)
}

/// Yields the cursor's current buffer and advances it.
///
/// Returns `None` if either handle is absent or the cursor is exhausted.
#[inline]
pub fn iter_step<'q>(
    queue: Option<&'q ByteQueue>,
    iter: Option<&mut IterHandle>,
) -> Option<&'q [u8]> {
    queue?.iter_step(iter?)
}

/// Releases a cursor. Absent handles are ignored.
pub fn iter_free(queue: Option<&ByteQueue>, iter: Option<IterHandle>) {
    if let (Some(queue), Some(iter)) = (queue, iter) {
        queue.iter_free(iter);
    }
}
