use std::fmt::{self, Debug, Formatter};
use std::marker::PhantomData;

use crate::collections::linked::LinkedList;
use crate::collections::traits::{BackInsert, FrontRemove, Sequence};

/// A first-in-first-out collection: items are pushed onto the back and popped off of the front.
///
/// Every operation is delegated to the backing container `C`, so the complexity of each method
/// is that of the matching method on `C`. The default [`LinkedList`] backing makes every
/// operation `O(1)`, whereas a [`Vector`](crate::collections::contiguous::Vector) pops in `O(n)`.
///
/// # Examples
/// ```
/// # use standard_containers::collections::adapters::Queue;
/// let mut queue: Queue<i32> = Queue::new();
/// queue.push(1);
/// queue.push(2);
/// assert_eq!(queue.pop(), Some(1));
/// assert_eq!(queue.front(), Some(&2));
/// ```
pub struct Queue<T, C = LinkedList<T>> {
    pub(crate) inner: C,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T, C: Sequence<Item = T>> Queue<T, C> {
    /// Creates an empty Queue.
    pub fn new() -> Queue<T, C>
    where
        C: Default,
    {
        Queue::from(C::default())
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn clear(&mut self) {
        self.inner.clear()
    }

    /// Returns a reference to the oldest item, which will be popped next.
    pub fn front(&self) -> Option<&T> {
        self.inner.peek_front()
    }

    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.inner.peek_front_mut()
    }

    /// Returns a reference to the newest item.
    pub fn back(&self) -> Option<&T> {
        self.inner.peek_back()
    }

    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.inner.peek_back_mut()
    }

    /// Returns a reference to the backing container.
    pub const fn as_inner(&self) -> &C {
        &self.inner
    }

    /// Consumes the Queue, returning the backing container.
    pub fn into_inner(self) -> C {
        self.inner
    }
}

impl<T, C> Queue<T, C>
where
    for<'a> &'a C: IntoIterator<Item = &'a T>,
{
    /// Returns an iterator over the items in the Queue, from front to back.
    pub fn iter<'a>(&'a self) -> <&'a C as IntoIterator>::IntoIter {
        (&self.inner).into_iter()
    }
}

impl<T, C: BackInsert<Item = T>> Queue<T, C> {
    /// Adds `value` to the back of the Queue.
    pub fn push(&mut self, value: T) {
        self.inner.push_back(value)
    }

    /// Constructs a new item at the back of the Queue, converting it from `args`.
    pub fn emplace<A>(&mut self, args: A) -> &mut T
    where
        T: From<A>,
    {
        self.inner.emplace_back(args)
    }
}

impl<T, C: FrontRemove<Item = T>> Queue<T, C> {
    /// Removes the item at the front of the Queue and returns it, if there is one.
    pub fn pop(&mut self) -> Option<T> {
        self.inner.pop_front()
    }
}

impl<T, C: Sequence<Item = T>> From<C> for Queue<T, C> {
    fn from(value: C) -> Self {
        Queue {
            inner: value,
            _phantom: PhantomData,
        }
    }
}

impl<T, C: Sequence<Item = T> + Default> Default for Queue<T, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C: Clone> Clone for Queue<T, C> {
    fn clone(&self) -> Self {
        Queue {
            inner: self.inner.clone(),
            _phantom: PhantomData,
        }
    }
}

impl<T, C: Debug> Debug for Queue<T, C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Queue").field("inner", &self.inner).finish()
    }
}
