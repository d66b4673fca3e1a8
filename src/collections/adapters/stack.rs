use std::fmt::{self, Debug, Formatter};
use std::marker::PhantomData;

use crate::collections::linked::LinkedList;
use crate::collections::traits::{BackInsert, BackRemove, Sequence};

/// A last-in-first-out collection: items are pushed onto and popped off of the top, which is the
/// back of the backing container `C`.
///
/// # Examples
/// ```
/// # use standard_containers::collections::adapters::Stack;
/// # use standard_containers::collections::contiguous::Vector;
/// let mut stack: Stack<_, Vector<_>> = Stack::new();
/// stack.push('a');
/// stack.push('b');
/// assert_eq!(stack.top(), Some(&'b'));
/// assert_eq!(stack.pop(), Some('b'));
/// assert_eq!(stack.len(), 1);
/// ```
pub struct Stack<T, C = LinkedList<T>> {
    pub(crate) inner: C,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T, C: Sequence<Item = T>> Stack<T, C> {
    /// Creates an empty Stack.
    pub fn new() -> Stack<T, C>
    where
        C: Default,
    {
        Stack::from(C::default())
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

    /// Returns a reference to the item on top of the Stack, which will be popped next.
    pub fn top(&self) -> Option<&T> {
        self.inner.peek_back()
    }

    pub fn top_mut(&mut self) -> Option<&mut T> {
        self.inner.peek_back_mut()
    }

    pub const fn as_inner(&self) -> &C {
        &self.inner
    }

    pub fn into_inner(self) -> C {
        self.inner
    }
}

impl<T, C> Stack<T, C>
where
    for<'a> &'a C: IntoIterator<Item = &'a T>,
{
    /// Returns an iterator over the items in the Stack, from bottom to top.
    pub fn iter<'a>(&'a self) -> <&'a C as IntoIterator>::IntoIter {
        (&self.inner).into_iter()
    }
}

impl<T, C: BackInsert<Item = T>> Stack<T, C> {
    /// Pushes `value` onto the top of the Stack.
    pub fn push(&mut self, value: T) {
        self.inner.push_back(value)
    }

    /// Constructs a new item on top of the Stack, converting it from `args`.
    pub fn emplace<A>(&mut self, args: A) -> &mut T
    where
        T: From<A>,
    {
        self.inner.emplace_back(args)
    }
}

impl<T, C: BackRemove<Item = T>> Stack<T, C> {
    /// Removes the item on top of the Stack and returns it, if there is one.
    pub fn pop(&mut self) -> Option<T> {
        self.inner.pop_back()
    }
}

impl<T, C: Sequence<Item = T>> From<C> for Stack<T, C> {
    fn from(value: C) -> Self {
        Stack {
            inner: value,
            _phantom: PhantomData,
        }
    }
}

impl<T, C: Sequence<Item = T> + Default> Default for Stack<T, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C: Clone> Clone for Stack<T, C> {
    fn clone(&self) -> Self {
        Stack {
            inner: self.inner.clone(),
            _phantom: PhantomData,
        }
    }
}

impl<T, C: Debug> Debug for Stack<T, C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stack").field("inner", &self.inner).finish()
    }
}
