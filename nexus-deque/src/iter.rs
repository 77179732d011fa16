//! Single-cursor iteration.
//!
//! A queue admits at most one outstanding iterator. Two forms share that
//! slot:
//!
//! - [`IterHandle`]: a detached cursor. It does not borrow the queue, so it
//!   is stepped and released through the queue ([`ByteQueue::iter_step`],
//!   [`ByteQueue::iter_free`]).
//! - [`Walk`]: a borrowing cursor that implements [`Iterator`] and releases
//!   the slot when dropped.
//!
//! # Mutation while a handle is outstanding
//!
//! A detached handle cannot stop the queue from being mutated. Every push,
//! pop, or clear bumps the queue's generation; a handle created under an
//! older generation is exhausted on its next step and yields nothing more.
//! It must still be released with [`ByteQueue::iter_free`].
//!
//! ```
//! use nexus_deque::{ByteQueue, Direction};
//!
//! let mut queue: ByteQueue = ["a", "b", "c"].into_iter().collect();
//!
//! let mut it = queue.iter_init(Direction::BackToFront).unwrap();
//! assert_eq!(queue.iter_step(&mut it), Some(&b"c"[..]));
//!
//! // Only one iterator at a time.
//! assert!(queue.iter_init(Direction::FrontToBack).is_none());
//!
//! queue.push_back(b"d");
//! assert_eq!(queue.iter_step(&mut it), None);
//!
//! queue.iter_free(it);
//! let names: Vec<_> = queue.walk(Direction::FrontToBack).unwrap().collect();
//! assert_eq!(names.concat(), b"abcd");
//! ```

use core::fmt;
use core::iter::FusedIterator;

use crate::error::{IterError, UnknownDirection};
use crate::key::Key;
use crate::queue::ByteQueue;

/// Traversal order of an iterator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Direction {
    /// Head to tail, following `next` links.
    FrontToBack = 0,
    /// Tail to head, following `prev` links.
    BackToFront = 1,
}

impl Direction {
    /// Returns the stable integer code.
    #[inline]
    pub const fn into_repr(self) -> u8 {
        self as u8
    }

    /// Maps an integer code to a direction.
    ///
    /// Returns `None` for codes that name no direction.
    #[inline]
    pub const fn try_from_repr(repr: u8) -> Option<Self> {
        match repr {
            0 => Some(Self::FrontToBack),
            1 => Some(Self::BackToFront),
            _ => None,
        }
    }

    /// Returns the opposite direction.
    #[inline]
    pub const fn reverse(self) -> Self {
        match self {
            Self::FrontToBack => Self::BackToFront,
            Self::BackToFront => Self::FrontToBack,
        }
    }
}

impl TryFrom<u8> for Direction {
    type Error = UnknownDirection;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::try_from_repr(value).ok_or(UnknownDirection { value })
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FrontToBack => write!(f, "front-to-back"),
            Self::BackToFront => write!(f, "back-to-front"),
        }
    }
}

/// A detached cursor over one queue.
///
/// Created by [`ByteQueue::iter_init`]. While it exists the queue refuses
/// other iterators, so it must be handed back with
/// [`ByteQueue::iter_free`]. Dropping it instead leaves the queue marked
/// as iterating.
#[must_use = "the queue stays marked as iterating until the handle is passed to `iter_free`"]
#[derive(Debug)]
pub struct IterHandle {
    queue: u64,
    generation: u64,
    direction: Direction,
    next: usize,
}

impl IterHandle {
    /// Returns the traversal direction.
    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns `true` once the cursor has nothing more to yield.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.next.is_none()
    }
}

impl ByteQueue {
    /// Returns `true` while an iterator is outstanding.
    #[inline]
    pub fn is_iterating(&self) -> bool {
        self.iter_live.get()
    }

    /// Creates a cursor at the head ([`Direction::FrontToBack`]) or tail
    /// ([`Direction::BackToFront`]).
    ///
    /// # Errors
    ///
    /// - [`IterError::Empty`] if the queue holds no buffers
    /// - [`IterError::Busy`] if another iterator is outstanding
    pub fn try_iter_init(&self, direction: Direction) -> Result<IterHandle, IterError> {
        if self.iter_live.get() {
            tracing::debug!(queue = self.id, %direction, "iterator refused: already outstanding");
            return Err(IterError::Busy);
        }
        let start = match direction {
            Direction::FrontToBack => self.chain.head(),
            Direction::BackToFront => self.chain.tail(),
        };
        if start.is_none() {
            tracing::debug!(queue = self.id, %direction, "iterator refused: queue is empty");
            return Err(IterError::Empty);
        }

        self.iter_live.set(true);
        tracing::trace!(queue = self.id, %direction, len = self.len(), "iterator created");
        Ok(IterHandle {
            queue: self.id,
            generation: self.generation,
            direction,
            next: start,
        })
    }

    /// Creates a cursor at the head or tail.
    ///
    /// Returns `None` if the queue is empty or another iterator is
    /// outstanding. See [`try_iter_init`](Self::try_iter_init).
    #[inline]
    pub fn iter_init(&self, direction: Direction) -> Option<IterHandle> {
        self.try_iter_init(direction).ok()
    }

    /// Yields the cursor's current buffer and advances it.
    ///
    /// Returns `None` once the cursor is exhausted. A cursor issued by
    /// another queue, or created before this queue was last mutated, is
    /// exhausted on the spot.
    pub fn iter_step(&self, iter: &mut IterHandle) -> Option<&[u8]> {
        if iter.next.is_none() {
            return None;
        }
        if iter.queue != self.id {
            tracing::debug!(
                queue = self.id,
                owner = iter.queue,
                "cursor stepped on a foreign queue"
            );
            iter.next = usize::NONE;
            return None;
        }
        if iter.generation != self.generation {
            tracing::debug!(queue = self.id, "queue mutated under an outstanding cursor");
            iter.next = usize::NONE;
            return None;
        }

        let node = self.chain.node(iter.next)?;
        iter.next = match iter.direction {
            Direction::FrontToBack => node.next,
            Direction::BackToFront => node.prev,
        };
        Some(&node.data)
    }

    /// Releases a cursor, active or exhausted, so a new iterator can be
    /// created.
    ///
    /// A cursor issued by another queue is discarded without touching this
    /// queue's state.
    pub fn iter_free(&self, iter: IterHandle) {
        if iter.queue != self.id {
            tracing::warn!(
                queue = self.id,
                owner = iter.queue,
                "cursor released on a foreign queue"
            );
            return;
        }
        self.iter_live.set(false);
        tracing::trace!(queue = self.id, exhausted = iter.is_exhausted(), "iterator released");
    }

    /// Returns a borrowing iterator in the given direction.
    ///
    /// It occupies the queue's iterator slot until dropped. Returns `None`
    /// if the queue is empty or another iterator is outstanding.
    ///
    /// ```
    /// use nexus_deque::{ByteQueue, Direction};
    ///
    /// let queue: ByteQueue = ["x", "y"].into_iter().collect();
    /// let rev: Vec<_> = queue.walk(Direction::BackToFront).unwrap().collect();
    /// assert_eq!(rev.concat(), b"yx");
    /// assert!(!queue.is_iterating());
    /// ```
    pub fn walk(&self, direction: Direction) -> Option<Walk<'_>> {
        let cursor = self.iter_init(direction)?;
        Some(Walk {
            queue: self,
            cursor: Some(cursor),
        })
    }
}

/// Borrowing iterator over a queue's buffers.
///
/// Created by [`ByteQueue::walk`].
pub struct Walk<'a> {
    queue: &'a ByteQueue,
    cursor: Option<IterHandle>,
}

impl Walk<'_> {
    /// Returns the traversal direction.
    pub fn direction(&self) -> Option<Direction> {
        self.cursor.as_ref().map(IterHandle::direction)
    }
}

impl<'a> Iterator for Walk<'a> {
    type Item = &'a [u8];

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let queue = self.queue;
        queue.iter_step(self.cursor.as_mut()?)
    }
}

impl FusedIterator for Walk<'_> {}

impl Drop for Walk<'_> {
    fn drop(&mut self) {
        if let Some(cursor) = self.cursor.take() {
            self.queue.iter_free(cursor);
        }
    }
}

impl fmt::Debug for Walk<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Walk").field("cursor", &self.cursor).finish()
    }
}
