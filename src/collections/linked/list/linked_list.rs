use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::mem;
use std::ops::{Bound, Index, IndexMut, RangeBounds};

use derive_more::IsVariant;

use super::{Iter, IterMut, Length, Link, ListCursor, ListCursorMut, Node, NodePtr, ONE};
use crate::util::error::{CapacityOverflow, IndexOutOfBounds};
use crate::util::result::ResultExtension;

/// A list with links in both directions. See also: [`ListCursor`] and [`ListCursorMut`] for
/// bi-directional traversal.
///
/// Positions in a LinkedList are nodes, plus an `end` position one past the last node. The end
/// position links back to the tail, so stepping backwards from it always lands on the last
/// element.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the LinkedList.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `front/back` | `O(1)` |
/// | `push_front/back` | `O(1)` |
/// | `pop_front/back` | `O(1)` |
/// | `get` | `O(min(i, n-i))` |
/// | `insert` | `O(min(i, n-i))` |
/// | `remove` | `O(min(i, n-i))` |
/// | `append` | `O(1)` |
/// | `clear` | `O(n)` |
///
/// Every method on [`ListCursorMut`] is `O(1)`, so a cursor should be preferred over repeated
/// indexing when editing a list in the middle.
pub struct LinkedList<T> {
    pub(crate) state: ListState<T>,
    pub(crate) _phantom: PhantomData<T>,
}

#[derive(IsVariant)]
pub(crate) enum ListState<T> {
    Empty,
    Full(ListContents<T>),
}

use ListState::*;

pub(crate) struct ListContents<T> {
    pub len: Length,
    pub head: NodePtr<T>,
    pub tail: NodePtr<T>,
}

impl<T> LinkedList<T> {
    /// Creates a new LinkedList with no elements.
    pub const fn new() -> LinkedList<T> {
        LinkedList {
            state: Empty,
            _phantom: PhantomData,
        }
    }

    /// Creates a new LinkedList holding `count` clones of `value`.
    pub fn repeat(value: T, count: usize) -> LinkedList<T>
    where
        T: Clone,
    {
        let mut list = LinkedList::new();
        for _ in 0..count {
            list.push_back(value.clone());
        }
        list
    }

    /// Returns the length of the LinkedList.
    pub const fn len(&self) -> usize {
        match &self.state {
            Empty => 0,
            Full(ListContents { len, .. }) => len.get(),
        }
    }

    /// Returns true if the LinkedList contains no elements.
    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    /// Returns a reference to the first element in the list, if it exists.
    pub fn front(&self) -> Option<&T> {
        self.head().map(NodePtr::value)
    }

    /// Returns a mutable reference to the first element in the list, if it exists.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.head().map(NodePtr::value_mut)
    }

    /// Returns a reference to the last element in the list, if it exists.
    pub fn back(&self) -> Option<&T> {
        self.tail().map(NodePtr::value)
    }

    /// Returns a mutable reference to the last element in the list, if it exists.
    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.tail().map(NodePtr::value_mut)
    }

    /// Add the provided element to the front of the LinkedList.
    pub fn push_front(&mut self, value: T) {
        self.link_before(self.head(), value);
    }

    /// Add the provided element to the back of the LinkedList.
    ///
    /// # Examples
    /// ```
    /// # use standard_containers::collections::linked::LinkedList;
    /// let mut list = LinkedList::new();
    /// list.push_back(2);
    /// list.push_front(1);
    /// list.push_back(3);
    /// assert_eq!(list, LinkedList::from([1, 2, 3]));
    /// ```
    pub fn push_back(&mut self, value: T) {
        self.link_before(None, value);
    }

    /// Constructs a new element at the front of the LinkedList, converting it from `args`. Returns
    /// a reference to the new element.
    pub fn emplace_front<A>(&mut self, args: A) -> &mut T
    where
        T: From<A>,
    {
        self.link_before(self.head(), T::from(args)).value_mut()
    }

    /// Constructs a new element at the back of the LinkedList, converting it from `args`. Returns
    /// a reference to the new element.
    pub fn emplace_back<A>(&mut self, args: A) -> &mut T
    where
        T: From<A>,
    {
        self.link_before(None, T::from(args)).value_mut()
    }

    /// Removes the first element from the list and returns it, if the list isn't empty.
    pub fn pop_front(&mut self) -> Option<T> {
        let head = self.head()?;
        // SAFETY: head is a node of this list.
        Some(unsafe { self.unlink(head) })
    }

    /// Removes the last element from the list and returns it, if the list isn't empty.
    pub fn pop_back(&mut self) -> Option<T> {
        let tail = self.tail()?;
        // SAFETY: tail is a node of this list.
        Some(unsafe { self.unlink(tail) })
    }

    /// Returns a reference to the element at the provided `index`, panicking on a failure.
    ///
    /// The same functionality can be achieved using the [`Index`] operator.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the LinkedList.
    pub fn get(&self, index: usize) -> &T {
        self.try_get(index).throw()
    }

    /// Returns a reference to the element at the provided `index`, returning an [`Err`] on a
    /// failure rather than panicking.
    pub fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        Ok(self.checked_seek(index)?.value())
    }

    /// Returns a mutable reference to the element at the provided `index`, panicking on a failure.
    ///
    /// The same functionality can be achieved using the [`IndexMut`] operator.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the LinkedList.
    pub fn get_mut(&mut self, index: usize) -> &mut T {
        self.try_get_mut(index).throw()
    }

    /// Returns a mutable reference to the element at the provided `index`, returning an [`Err`] on
    /// a failure rather than panicking.
    pub fn try_get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        Ok(self.checked_seek(index)?.value_mut())
    }

    /// Inserts `value` so that it ends up at `index`, shifting every following element back by
    /// one. Inserting at `len` appends.
    ///
    /// # Panics
    /// Panics if `index` is greater than the length of the LinkedList.
    pub fn insert(&mut self, index: usize, value: T) {
        self.try_insert(index, value).throw()
    }

    /// Inserts `value` at `index`, returning an [`Err`] rather than panicking if `index` is greater
    /// than the length of the LinkedList.
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<(), IndexOutOfBounds> {
        let len = self.len();
        let next = match index {
            i if i == len => None,
            i if i < len => Some(self.checked_seek(i)?),
            _ => return Err(IndexOutOfBounds { index, len }),
        };
        self.link_before(next, value);
        Ok(())
    }

    /// Removes the element at `index` and returns it.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the LinkedList.
    pub fn remove(&mut self, index: usize) -> T {
        self.try_remove(index).throw()
    }

    /// Removes the element at `index` and returns it, returning an [`Err`] rather than panicking if
    /// `index` is out of bounds.
    pub fn try_remove(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        let node = self.checked_seek(index)?;
        // SAFETY: node was just found in this list.
        Ok(unsafe { self.unlink(node) })
    }

    /// Removes every element within `range`. The range is clamped to the length of the list, so
    /// out of bounds ranges remove nothing.
    ///
    /// # Examples
    /// ```
    /// # use standard_containers::collections::linked::LinkedList;
    /// let mut list = LinkedList::from([0, 1, 2, 3, 4, 5]);
    /// list.erase_range(1..3);
    /// assert_eq!(list, LinkedList::from([0, 3, 4, 5]));
    /// list.erase_range(2..);
    /// assert_eq!(list, LinkedList::from([0, 3]));
    /// list.erase_range(10..20);
    /// assert_eq!(list.len(), 2);
    /// ```
    pub fn erase_range<R: RangeBounds<usize>>(&mut self, range: R) {
        let len = self.len();
        let start = match range.start_bound() {
            Bound::Included(&start) => start,
            Bound::Excluded(&start) => start.saturating_add(1),
            Bound::Unbounded => 0,
        };
        let end = match range.end_bound() {
            Bound::Included(&end) => end.saturating_add(1),
            Bound::Excluded(&end) => end,
            Bound::Unbounded => len,
        }
        .min(len);

        if start >= end {
            return;
        }

        let mut curr = self.checked_seek(start).ok();
        for _ in start..end {
            let Some(node) = curr else { break };
            curr = node.next();
            // SAFETY: node belongs to this list and is unlinked exactly once.
            unsafe { self.unlink(node) };
        }
    }

    /// Removes and drops every element of the LinkedList.
    pub fn clear(&mut self) {
        drop(mem::take(self));
    }

    /// Moves every element of `other` onto the back of this LinkedList in `O(1)`.
    ///
    /// # Panics
    /// Panics if the combined length would overflow a [`usize`].
    pub fn append(&mut self, mut other: LinkedList<T>) {
        // Take other's nodes, so that dropping other doesn't free them.
        let other_contents = match mem::replace(&mut other.state, Empty) {
            Empty => return,
            Full(contents) => contents,
        };

        match &mut self.state {
            Empty => self.state = Full(other_contents),
            Full(contents) => {
                contents.len = contents
                    .len
                    .checked_add(other_contents.len.get())
                    .ok_or(CapacityOverflow)
                    .throw();

                contents.tail.set_next(Some(other_contents.head));
                other_contents.head.set_prev(Some(contents.tail));
                contents.tail = other_contents.tail;
            },
        }
    }

    /// Returns a [`ListCursor`] pointing at the first element, or at the end if the list is empty.
    pub fn begin(&self) -> ListCursor<'_, T> {
        ListCursor {
            list: self,
            pos: self.head(),
        }
    }

    /// Returns a [`ListCursor`] pointing at the end position, one past the last element.
    pub fn end(&self) -> ListCursor<'_, T> {
        ListCursor {
            list: self,
            pos: None,
        }
    }

    /// Returns a [`ListCursorMut`] pointing at the first element, or at the end if the list is
    /// empty.
    pub fn begin_mut(&mut self) -> ListCursorMut<'_, T> {
        let pos = self.head();
        ListCursorMut { list: self, pos }
    }

    /// Returns a [`ListCursorMut`] pointing at the end position, one past the last element.
    pub fn end_mut(&mut self) -> ListCursorMut<'_, T> {
        ListCursorMut {
            list: self,
            pos: None,
        }
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.into_iter()
    }
}

impl<T> LinkedList<T> {
    pub(crate) const fn head(&self) -> Link<T> {
        match &self.state {
            Empty => None,
            Full(contents) => Some(contents.head),
        }
    }

    pub(crate) const fn tail(&self) -> Link<T> {
        match &self.state {
            Empty => None,
            Full(contents) => Some(contents.tail),
        }
    }

    pub(crate) fn checked_seek(&self, index: usize) -> Result<NodePtr<T>, IndexOutOfBounds> {
        match &self.state {
            Full(contents) if index < contents.len.get() => Ok(contents.seek(index)),
            _ => Err(IndexOutOfBounds {
                index,
                len: self.len(),
            }),
        }
    }

    /// Links a new node holding `value` in front of `next`, or at the back of the list if `next`
    /// is the end position. Returns the new node.
    ///
    /// `next` must be a node of this list.
    ///
    /// # Panics
    /// Panics if the length of the list would overflow a [`usize`].
    pub(crate) fn link_before(&mut self, next: Link<T>, value: T) -> NodePtr<T> {
        match &mut self.state {
            Empty => {
                let node = NodePtr::from_node(Node {
                    value,
                    prev: None,
                    next: None,
                });
                self.state = Full(ListContents {
                    len: ONE,
                    head: node,
                    tail: node,
                });
                node
            },
            Full(contents) => {
                let len = contents.len.checked_add(1).ok_or(CapacityOverflow).throw();
                let prev = match next {
                    Some(next) => next.prev(),
                    None => Some(contents.tail),
                };

                let node = NodePtr::from_node(Node { value, prev, next });

                match prev {
                    Some(prev) => prev.set_next(Some(node)),
                    None => contents.head = node,
                }
                match next {
                    Some(next) => next.set_prev(Some(node)),
                    None => contents.tail = node,
                }

                contents.len = len;
                node
            },
        }
    }

    /// Unlinks `node` from the list, frees it and returns its value.
    ///
    /// # Safety
    /// `node` must be a node of this list. It is freed, so it can't be used again afterwards.
    pub(crate) unsafe fn unlink(&mut self, node: NodePtr<T>) -> T {
        // SAFETY: The caller guarantees that node is live and owned by this list.
        let Node { value, prev, next } = unsafe { node.take_node() };

        if let Full(contents) = &mut self.state {
            match contents.len.checked_sub(1) {
                None => self.state = Empty,
                Some(len) => {
                    match prev {
                        Some(prev) => prev.set_next(next),
                        None => {
                            if let Some(next) = next {
                                contents.head = next;
                            }
                        },
                    }
                    match next {
                        Some(next) => next.set_prev(prev),
                        None => {
                            if let Some(prev) = prev {
                                contents.tail = prev;
                            }
                        },
                    }
                    contents.len = len;
                },
            }
        }

        value
    }

    /// Checks that every link in the list is mirrored by a link in the other direction, that the
    /// ends are terminated and that the length matches the number of nodes.
    ///
    /// # Panics
    /// Panics if any of the links are inconsistent.
    #[cfg(test)]
    pub(crate) fn verify_double_links(&self) {
        match &self.state {
            Empty => {},
            Full(ListContents { len, head, tail }) => {
                assert!(head.prev().is_none(), "The head shouldn't have a previous node.");

                let mut count = 1;
                let mut curr = *head;
                while let Some(next) = curr.next() {
                    assert!(next.prev() == Some(curr), "Every next link should be mirrored.");
                    curr = next;
                    count += 1;
                }

                assert!(curr == *tail, "The last node should be the tail.");
                assert_eq!(count, len.get(), "The length should match the number of nodes.");
            },
        }
    }
}

impl<T> ListContents<T> {
    /// Finds the node at `index`, starting from whichever end is closer.
    ///
    /// `index` must be less than `len`.
    pub fn seek(&self, index: usize) -> NodePtr<T> {
        let len = self.len.get();
        if index < len / 2 {
            let mut node = self.head;
            for _ in 0..index {
                if let Some(next) = node.next() {
                    node = next;
                }
            }
            node
        } else {
            let mut node = self.tail;
            for _ in index..(len - 1) {
                if let Some(prev) = node.prev() {
                    node = prev;
                }
            }
            node
        }
    }
}

impl<T> Clone for ListContents<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ListContents<T> {}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Empty
    }
}

impl<T> Index<usize> for LinkedList<T> {
    type Output = T;

    /// # Panics
    /// Panics if `index` is out of bounds of the LinkedList.
    fn index(&self, index: usize) -> &Self::Output {
        self.get(index)
    }
}

impl<T> IndexMut<usize> for LinkedList<T> {
    /// # Panics
    /// Panics if `index` is out of bounds of the LinkedList.
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.get_mut(index)
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = LinkedList::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<T, const N: usize> From<[T; N]> for LinkedList<T> {
    fn from(value: [T; N]) -> Self {
        value.into_iter().collect()
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        let mut curr = self.head();
        self.state = Empty;

        while let Some(node) = curr {
            // SAFETY: Every node is visited exactly once, and the list no longer refers to any of
            // them.
            let node = unsafe { node.take_node() };
            curr = node.next;
        }
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T: Hash> Hash for LinkedList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for value in self.iter() {
            value.hash(state);
        }
    }
}

// SAFETY: LinkedList exclusively owns its nodes, so it can be sent to another thread when T can.
unsafe impl<T: Send> Send for LinkedList<T> {}
// SAFETY: Shared references only allow reading the nodes, so LinkedList is Sync when T is.
unsafe impl<T: Sync> Sync for LinkedList<T> {}

impl<T: Debug> Debug for LinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkedList")
            .field("contents", &self.iter())
            .field("len", &self.len())
            .finish()
    }
}

impl<T: Debug> Display for LinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (index, value) in self.iter().enumerate() {
            if index != 0 {
                write!(f, ") -> (")?;
            }
            write!(f, "{value:?}")?;
        }
        write!(f, ")")
    }
}
