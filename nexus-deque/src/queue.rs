//! The byte queue.
//!
//! [`ByteQueue`] owns a chain of byte buffers. Pushing copies the caller's
//! bytes into a fresh buffer; popping moves that buffer out to the caller.
//! Peeks borrow, so the compiler ends their validity before the next
//! mutation.
//!
//! # Example
//!
//! ```
//! use nexus_deque::ByteQueue;
//!
//! let mut queue = ByteQueue::new();
//! queue.push_back(b"first");
//! queue.push_back(b"second");
//! queue.push_front(b"zeroth");
//!
//! assert_eq!(queue.len(), 3);
//! assert_eq!(queue.peek_back(), Some(&b"second"[..]));
//!
//! // Popped buffers belong to the caller.
//! let owned: Box<[u8]> = queue.pop_front().unwrap();
//! assert_eq!(&*owned, b"zeroth");
//! ```

use core::cell::Cell;
use core::fmt;
use core::iter::FusedIterator;
use core::sync::atomic::{AtomicU64, Ordering};

use crate::key::Key;
use crate::node::Chain;

/// Source of queue identities. Never reused within a process.
static NEXT_QUEUE_ID: AtomicU64 = AtomicU64::new(1);

/// A double-ended queue of owned, arbitrarily-sized byte buffers.
///
/// # Allocation
///
/// Pushes allocate a node and a buffer. Allocation failure is not
/// recoverable: the global allocator's error handler aborts the process.
/// Use [`with_capacity`](Self::with_capacity) or [`reserve`](Self::reserve)
/// to pre-size the node table.
///
/// # Iteration
///
/// At most one iterator is outstanding per queue. See
/// [`iter_init`](Self::iter_init) and [`walk`](Self::walk).
pub struct ByteQueue {
    pub(crate) chain: Chain,
    /// Identity checked by iterator handles.
    pub(crate) id: u64,
    /// Bumped on every structural mutation.
    pub(crate) generation: u64,
    /// Set while an iterator handle is outstanding.
    pub(crate) iter_live: Cell<bool>,
}

impl ByteQueue {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty queue with room for `capacity` nodes before the
    /// node table grows.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            chain: Chain::with_capacity(capacity),
            id: NEXT_QUEUE_ID.fetch_add(1, Ordering::Relaxed),
            generation: 0,
            iter_live: Cell::new(false),
        }
    }

    /// Returns the number of buffers in the queue.
    #[inline]
    pub fn len(&self) -> usize {
        self.chain.len()
    }

    /// Returns `true` if the queue holds no buffers.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.chain.len() == 0
    }

    /// Returns the number of nodes the queue can hold without growing its
    /// node table. Buffers are allocated separately.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.chain.capacity()
    }

    /// Reserves room for at least `additional` more nodes.
    pub fn reserve(&mut self, additional: usize) {
        self.chain.reserve(additional);
    }

    /// Shrinks the node table as much as possible.
    pub fn shrink_to_fit(&mut self) {
        self.chain.shrink_to_fit();
    }

    #[inline]
    fn mutated(&mut self) {
        self.generation = self.generation.wrapping_add(1);
    }

    // ========================================================================
    // Push
    // ========================================================================

    /// Copies `data` into a new buffer at the back of the queue.
    ///
    /// Returns the stored copy, which may be edited in place. Empty
    /// slices are stored as zero-length buffers.
    #[inline]
    pub fn push_back(&mut self, data: &[u8]) -> &mut [u8] {
        self.mutated();
        let key = self.chain.link_back(Box::from(data));
        // Safety: key was just inserted
        unsafe { self.chain.data_unchecked_mut(key) }
    }

    /// Copies `data` into a new buffer at the front of the queue.
    ///
    /// Returns the stored copy, which may be edited in place. Empty
    /// slices are stored as zero-length buffers.
    #[inline]
    pub fn push_front(&mut self, data: &[u8]) -> &mut [u8] {
        self.mutated();
        let key = self.chain.link_front(Box::from(data));
        // Safety: key was just inserted
        unsafe { self.chain.data_unchecked_mut(key) }
    }

    // ========================================================================
    // Peek
    // ========================================================================

    /// Returns the front buffer without removing it.
    #[inline]
    pub fn peek_front(&self) -> Option<&[u8]> {
        let head = self.chain.head().into_option()?;
        // Safety: head is occupied when is_some()
        Some(unsafe { self.chain.data_unchecked(head) })
    }

    /// Returns the back buffer without removing it.
    #[inline]
    pub fn peek_back(&self) -> Option<&[u8]> {
        let tail = self.chain.tail().into_option()?;
        // Safety: tail is occupied when is_some()
        Some(unsafe { self.chain.data_unchecked(tail) })
    }

    /// Returns the front buffer mutably without removing it.
    #[inline]
    pub fn peek_front_mut(&mut self) -> Option<&mut [u8]> {
        let head = self.chain.head().into_option()?;
        // Safety: head is occupied when is_some()
        Some(unsafe { self.chain.data_unchecked_mut(head) })
    }

    /// Returns the back buffer mutably without removing it.
    #[inline]
    pub fn peek_back_mut(&mut self) -> Option<&mut [u8]> {
        let tail = self.chain.tail().into_option()?;
        // Safety: tail is occupied when is_some()
        Some(unsafe { self.chain.data_unchecked_mut(tail) })
    }

    // ========================================================================
    // Pop
    // ========================================================================

    /// Removes the front buffer and hands it to the caller.
    ///
    /// Returns `None` if the queue is empty.
    #[inline]
    pub fn pop_front(&mut self) -> Option<Box<[u8]>> {
        let data = self.chain.unlink_front()?;
        self.mutated();
        Some(data)
    }

    /// Removes the back buffer and hands it to the caller.
    ///
    /// Returns `None` if the queue is empty.
    #[inline]
    pub fn pop_back(&mut self) -> Option<Box<[u8]>> {
        let data = self.chain.unlink_back()?;
        self.mutated();
        Some(data)
    }

    // ========================================================================
    // Bulk operations
    // ========================================================================

    /// Drops every buffer in the queue.
    pub fn clear(&mut self) {
        if self.is_empty() {
            return;
        }
        self.mutated();
        self.chain.clear();
    }

    /// Removes every buffer, yielding them front to back.
    ///
    /// Buffers not consumed by the time the iterator is dropped are freed.
    pub fn drain(&mut self) -> Drain<'_> {
        Drain { queue: self }
    }
}

impl Default for ByteQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ByteQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ByteQueue")
            .field("len", &self.len())
            .field("iterating", &self.iter_live.get())
            .finish_non_exhaustive()
    }
}

impl<B: AsRef<[u8]>> Extend<B> for ByteQueue {
    fn extend<I: IntoIterator<Item = B>>(&mut self, iter: I) {
        for buf in iter {
            self.push_back(buf.as_ref());
        }
    }
}

impl<B: AsRef<[u8]>> FromIterator<B> for ByteQueue {
    fn from_iter<I: IntoIterator<Item = B>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut queue = Self::with_capacity(iter.size_hint().0);
        queue.extend(iter);
        queue
    }
}

/// Iterator that moves buffers out of a queue.
///
/// Created by [`ByteQueue::drain`].
pub struct Drain<'a> {
    queue: &'a mut ByteQueue,
}

impl Iterator for Drain<'_> {
    type Item = Box<[u8]>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.queue.pop_front()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.queue.len();
        (len, Some(len))
    }
}

impl DoubleEndedIterator for Drain<'_> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.queue.pop_back()
    }
}

impl ExactSizeIterator for Drain<'_> {}

impl FusedIterator for Drain<'_> {}

impl Drop for Drain<'_> {
    fn drop(&mut self) {
        self.queue.clear();
    }
}
