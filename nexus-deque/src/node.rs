//! Node store: a doubly-linked chain of owned byte buffers.
//!
//! Nodes live in a [`slab::Slab`] and point at each other by slab key.
//! The chain tracks head and tail; the slab's occupancy is the length,
//! since a chain never shares its slab.
//!
//! # Invariants
//!
//! - `len == 0` ⇔ `head` and `tail` are both `NONE`
//! - `len == 1` ⇔ `head == tail`
//! - `head.prev` and `tail.next` are `NONE`; every other link is mirrored
//!   by its neighbour

use slab::Slab;

use crate::key::Key;

/// A chain node: one owned buffer plus its links.
#[derive(Debug)]
pub(crate) struct Node {
    pub(crate) data: Box<[u8]>,
    pub(crate) prev: usize,
    pub(crate) next: usize,
}

impl Node {
    #[inline]
    fn new(data: Box<[u8]>) -> Self {
        Self {
            data,
            prev: usize::NONE,
            next: usize::NONE,
        }
    }
}

/// Doubly-linked chain over slab storage.
#[derive(Debug)]
pub(crate) struct Chain {
    nodes: Slab<Node>,
    head: usize,
    tail: usize,
}

impl Chain {
    /// Creates an empty chain with room for `capacity` nodes.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Slab::with_capacity(capacity),
            head: usize::NONE,
            tail: usize::NONE,
        }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    pub(crate) fn reserve(&mut self, additional: usize) {
        self.nodes.reserve(additional);
    }

    pub(crate) fn shrink_to_fit(&mut self) {
        self.nodes.shrink_to_fit();
    }

    #[inline]
    pub(crate) fn head(&self) -> usize {
        self.head
    }

    #[inline]
    pub(crate) fn tail(&self) -> usize {
        self.tail
    }

    /// Returns the node at `key`, if occupied.
    #[inline]
    pub(crate) fn node(&self, key: usize) -> Option<&Node> {
        self.nodes.get(key)
    }

    /// Returns the buffer at `key`.
    ///
    /// # Safety
    ///
    /// `key` must be occupied.
    #[inline]
    pub(crate) unsafe fn data_unchecked(&self, key: usize) -> &[u8] {
        // Safety: caller guarantees key is occupied
        unsafe { &self.nodes.get_unchecked(key).data }
    }

    /// Returns the buffer at `key` mutably.
    ///
    /// # Safety
    ///
    /// `key` must be occupied.
    #[inline]
    pub(crate) unsafe fn data_unchecked_mut(&mut self, key: usize) -> &mut [u8] {
        // Safety: caller guarantees key is occupied
        unsafe { &mut self.nodes.get_unchecked_mut(key).data }
    }

    // ========================================================================
    // Link / unlink
    // ========================================================================

    /// Links a new node holding `data` after the tail. Returns its key.
    #[inline]
    pub(crate) fn link_back(&mut self, data: Box<[u8]>) -> usize {
        let mut node = Node::new(data);
        node.prev = self.tail;
        let key = self.nodes.insert(node);

        if self.tail.is_some() {
            // Safety: tail is occupied when is_some()
            unsafe { self.nodes.get_unchecked_mut(self.tail) }.next = key;
        } else {
            self.head = key;
        }

        self.tail = key;
        key
    }

    /// Links a new node holding `data` before the head. Returns its key.
    #[inline]
    pub(crate) fn link_front(&mut self, data: Box<[u8]>) -> usize {
        let mut node = Node::new(data);
        node.next = self.head;
        let key = self.nodes.insert(node);

        if self.head.is_some() {
            // Safety: head is occupied when is_some()
            unsafe { self.nodes.get_unchecked_mut(self.head) }.prev = key;
        } else {
            self.tail = key;
        }

        self.head = key;
        key
    }

    /// Removes the head node, returning its buffer.
    #[inline]
    pub(crate) fn unlink_front(&mut self) -> Option<Box<[u8]>> {
        let key = self.head.into_option()?;
        let node = self.nodes.remove(key);
        debug_assert!(node.prev.is_none(), "head has a predecessor");

        self.head = node.next;
        if self.head.is_some() {
            // Safety: next is occupied when is_some() (chain invariant)
            unsafe { self.nodes.get_unchecked_mut(self.head) }.prev = usize::NONE;
        } else {
            self.tail = usize::NONE;
        }

        Some(node.data)
    }

    /// Removes the tail node, returning its buffer.
    #[inline]
    pub(crate) fn unlink_back(&mut self) -> Option<Box<[u8]>> {
        let key = self.tail.into_option()?;
        let node = self.nodes.remove(key);
        debug_assert!(node.next.is_none(), "tail has a successor");

        self.tail = node.prev;
        if self.tail.is_some() {
            // Safety: prev is occupied when is_some() (chain invariant)
            unsafe { self.nodes.get_unchecked_mut(self.tail) }.next = usize::NONE;
        } else {
            self.head = usize::NONE;
        }

        Some(node.data)
    }

    /// Drops every node and its buffer.
    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
        self.head = usize::NONE;
        self.tail = usize::NONE;
    }

    /// Walks the chain in both directions and checks every invariant.
    #[cfg(test)]
    pub(crate) fn assert_linked(&self) {
        let len = self.len();
        if len == 0 {
            assert!(self.head.is_none() && self.tail.is_none());
            return;
        }
        assert!(self.head.is_some() && self.tail.is_some());
        if len == 1 {
            assert_eq!(self.head, self.tail);
        }
        assert!(self.nodes[self.head].prev.is_none());
        assert!(self.nodes[self.tail].next.is_none());

        let mut forward = Vec::with_capacity(len);
        let mut key = self.head;
        while key.is_some() {
            let node = &self.nodes[key];
            if node.next.is_some() {
                assert_eq!(self.nodes[node.next].prev, key, "broken back link");
            }
            forward.push(key);
            key = node.next;
        }
        assert_eq!(forward.len(), len);

        let mut backward = Vec::with_capacity(len);
        let mut key = self.tail;
        while key.is_some() {
            backward.push(key);
            key = self.nodes[key].prev;
        }
        backward.reverse();
        assert_eq!(forward, backward);
    }
}
