use std::ptr::NonNull;

pub(crate) type Link<T> = Option<NodePtr<T>>;

pub(crate) struct Node<T> {
    pub value: T,
    pub prev: Link<T>,
    pub next: Link<T>,
}

/// A copyable handle to a heap allocated [`Node`], owned by exactly one
/// [`LinkedList`](super::LinkedList).
///
/// Nodes are allocated through [`Box`], so that [`take_node`](NodePtr::take_node) can move the
/// whole node back off of the heap. The accessors hand out references with an unbounded lifetime;
/// callers tie them to a borrow of the owning list before they escape the crate.
pub(crate) struct NodePtr<T>(NonNull<Node<T>>);

impl<T> NodePtr<T> {
    /// Moves `node` onto the heap, leaking it until [`take_node`](NodePtr::take_node) reclaims it.
    pub fn from_node(node: Node<T>) -> NodePtr<T> {
        NodePtr(NonNull::from(Box::leak(Box::new(node))))
    }

    /// Moves the node back off of the heap and frees its allocation.
    ///
    /// # Safety
    /// The node must still be allocated, and no other NodePtr to it may be used afterwards.
    pub unsafe fn take_node(self) -> Node<T> {
        // SAFETY: The pointer was created by Box::leak in from_node and, as guaranteed by the
        // caller, hasn't been reclaimed yet.
        unsafe { *Box::from_raw(self.0.as_ptr()) }
    }

    pub fn value<'a>(self) -> &'a T {
        // SAFETY: Every NodePtr held by a list points at a live node. The list only hands out the
        // reference for as long as it is borrowed itself.
        unsafe { &(*self.0.as_ptr()).value }
    }

    pub fn value_mut<'a>(self) -> &'a mut T {
        // SAFETY: As with value, with the list borrowed mutably for the reference's lifetime.
        unsafe { &mut (*self.0.as_ptr()).value }
    }

    pub fn prev(self) -> Link<T> {
        // SAFETY: The node is live, and links are plain Copy values.
        unsafe { (*self.0.as_ptr()).prev }
    }

    pub fn next(self) -> Link<T> {
        // SAFETY: The node is live, and links are plain Copy values.
        unsafe { (*self.0.as_ptr()).next }
    }

    pub fn set_prev(self, link: Link<T>) {
        // SAFETY: The node is live and only modified while its list is borrowed mutably.
        unsafe { (*self.0.as_ptr()).prev = link }
    }

    pub fn set_next(self, link: Link<T>) {
        // SAFETY: The node is live and only modified while its list is borrowed mutably.
        unsafe { (*self.0.as_ptr()).next = link }
    }
}

impl<T> Clone for NodePtr<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodePtr<T> {}

impl<T> PartialEq for NodePtr<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T> Eq for NodePtr<T> {}
