//! Type-erased double-ended queue of owned byte buffers.
//!
//! [`ByteQueue`] holds a linked sequence of arbitrarily-sized byte buffers.
//! It is meant to sit inside a larger runtime as a work queue or message
//! buffer, where payloads are opaque bytes rather than a fixed type.
//!
//! # Ownership
//!
//! ```text
//! push_back(&[u8])  -> copies in, returns &mut [u8] to the stored copy
//! peek_front()      -> borrows,   returns Option<&[u8]>
//! pop_front()       -> moves out, returns Option<Box<[u8]>>
//! ```
//!
//! The queue owns every buffer it holds. Popping transfers the buffer to
//! the caller; dropping the queue frees whatever is left.
//!
//! # Quick Start
//!
//! ```
//! use nexus_deque::ByteQueue;
//!
//! let mut queue = ByteQueue::new();
//! for name in ["antonio", "bingbing", "catherine"] {
//!     queue.push_back(name.as_bytes());
//! }
//!
//! assert_eq!(queue.len(), 3);
//! assert_eq!(queue.peek_back(), Some(&b"catherine"[..]));
//! assert_eq!(queue.pop_front().as_deref(), Some(&b"antonio"[..]));
//! ```
//!
//! # Iteration
//!
//! A queue has one iterator slot. [`ByteQueue::iter_init`] hands out a
//! detached [`IterHandle`] that is stepped with [`ByteQueue::iter_step`]
//! and returned with [`ByteQueue::iter_free`]; [`ByteQueue::walk`] gives
//! a borrowing [`Walk`] that frees the slot on drop. A second iterator is
//! refused while the slot is taken.
//!
//! ```
//! use nexus_deque::{ByteQueue, Direction};
//!
//! let queue: ByteQueue = (0u8..4).map(|i| [i]).collect();
//!
//! let mut it = queue.iter_init(Direction::BackToFront).unwrap();
//! assert!(queue.iter_init(Direction::FrontToBack).is_none());
//!
//! let mut seen = Vec::new();
//! while let Some(bytes) = queue.iter_step(&mut it) {
//!     seen.push(bytes[0]);
//! }
//! queue.iter_free(it);
//!
//! assert_eq!(seen, [3, 2, 1, 0]);
//! ```
//!
//! # Absent Handles
//!
//! The [`handle`] module mirrors the operations as free functions over
//! `Option` handles, so an absent queue reads as empty and an absent
//! cursor yields nothing.
//!
//! # Threading
//!
//! `ByteQueue` is `Send` but not `Sync`. There is no internal locking.

#![warn(missing_docs)]

mod error;
pub mod handle;
mod iter;
mod key;
mod node;
mod queue;

pub use error::{IterError, UnknownDirection};
pub use iter::{Direction, IterHandle, Walk};
pub use queue::{ByteQueue, Drain};
