use std::fmt::{self, Debug, Formatter};
use std::ptr;

use super::{LinkedList, Link, NodePtr};

/// A read-only, bi-directional position within a [`LinkedList`].
///
/// A ListCursor points either at an element or at the end position, one past the last element.
/// Stepping past either end of the list lands on the end position, and stepping from the end
/// position wraps around: [`dec`](ListCursor::dec) moves to the last element and
/// [`inc`](ListCursor::inc) moves to the first.
///
/// # Examples
/// ```
/// # use standard_containers::collections::linked::LinkedList;
/// let list = LinkedList::from([1, 2, 3]);
/// let mut cursor = list.end();
/// assert_eq!(cursor.dec().get(), Some(&3));
/// assert_eq!(cursor.dec().get(), Some(&2));
/// assert!(cursor.inc().inc().is_end());
/// assert_eq!(cursor.inc().get(), Some(&1));
/// ```
pub struct ListCursor<'a, T> {
    pub(crate) list: &'a LinkedList<T>,
    pub(crate) pos: Link<T>,
}

impl<'a, T> ListCursor<'a, T> {
    /// Returns a reference to the element under the cursor, or [`None`] at the end position.
    pub fn get(&self) -> Option<&'a T> {
        self.pos.map(NodePtr::value)
    }

    /// Returns true if the cursor is at the end position.
    pub const fn is_end(&self) -> bool {
        self.pos.is_none()
    }

    /// Moves the cursor to the next position.
    pub fn inc(&mut self) -> &mut Self {
        self.pos = match self.pos {
            Some(node) => node.next(),
            None => self.list.head(),
        };
        self
    }

    /// Moves the cursor to the previous position.
    pub fn dec(&mut self) -> &mut Self {
        self.pos = match self.pos {
            Some(node) => node.prev(),
            None => self.list.tail(),
        };
        self
    }

    /// Moves the cursor to the next position, returning a copy of the cursor from before it moved.
    pub fn post_inc(&mut self) -> Self {
        let old = *self;
        self.inc();
        old
    }

    /// Moves the cursor to the previous position, returning a copy of the cursor from before it
    /// moved.
    pub fn post_dec(&mut self) -> Self {
        let old = *self;
        self.dec();
        old
    }
}

impl<T> Clone for ListCursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ListCursor<'_, T> {}

impl<T> PartialEq for ListCursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        debug_assert!(
            ptr::eq(self.list, other.list),
            "Compared cursors from different lists!"
        );
        self.pos == other.pos
    }
}

impl<T> Eq for ListCursor<'_, T> {}

impl<T: Debug> Debug for ListCursor<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListCursor")
            .field("value", &self.get())
            .finish()
    }
}

/// A mutable, bi-directional position within a [`LinkedList`], which can also insert and remove
/// elements around itself in `O(1)`. Movement follows the same rules as [`ListCursor`].
///
/// # Examples
/// ```
/// # use standard_containers::collections::linked::LinkedList;
/// let mut list = LinkedList::from([1, 2, 4]);
/// let mut cursor = list.begin_mut();
/// cursor.inc().inc();
/// cursor.insert(3);
/// assert_eq!(cursor.erase(), Some(4));
/// assert!(cursor.is_end());
/// cursor.insert(5);
/// assert_eq!(list, LinkedList::from([1, 2, 3, 5]));
/// ```
pub struct ListCursorMut<'a, T> {
    pub(crate) list: &'a mut LinkedList<T>,
    pub(crate) pos: Link<T>,
}

impl<'a, T> ListCursorMut<'a, T> {
    pub fn get(&self) -> Option<&T> {
        self.pos.map(NodePtr::value)
    }

    pub fn get_mut(&mut self) -> Option<&mut T> {
        self.pos.map(NodePtr::value_mut)
    }

    /// Converts the cursor into a mutable reference to the element under it, which lives as long
    /// as the borrow of the list.
    pub fn into_mut(self) -> Option<&'a mut T> {
        self.pos.map(NodePtr::value_mut)
    }

    pub const fn is_end(&self) -> bool {
        self.pos.is_none()
    }

    pub fn inc(&mut self) -> &mut Self {
        self.pos = match self.pos {
            Some(node) => node.next(),
            None => self.list.head(),
        };
        self
    }

    pub fn dec(&mut self) -> &mut Self {
        self.pos = match self.pos {
            Some(node) => node.prev(),
            None => self.list.tail(),
        };
        self
    }

    /// Inserts `value` in front of the cursor. At the end position, this appends to the list. The
    /// cursor keeps pointing at the same position.
    pub fn insert(&mut self, value: T) {
        self.list.link_before(self.pos, value);
    }

    /// Constructs a new element in front of the cursor, converting it from `args`. Returns a
    /// reference to the new element.
    pub fn emplace<A>(&mut self, args: A) -> &mut T
    where
        T: From<A>,
    {
        self.list.link_before(self.pos, T::from(args)).value_mut()
    }

    /// Removes the element under the cursor and returns it, moving the cursor on to the next
    /// position. Does nothing at the end position.
    pub fn erase(&mut self) -> Option<T> {
        let node = self.pos?;
        self.pos = node.next();
        // SAFETY: The cursor only ever points at nodes of its own list, and has just moved off of
        // node.
        Some(unsafe { self.list.unlink(node) })
    }

    /// Returns a read-only cursor at the same position.
    pub fn as_cursor(&self) -> ListCursor<'_, T> {
        ListCursor {
            list: self.list,
            pos: self.pos,
        }
    }
}

impl<'a, T> From<ListCursorMut<'a, T>> for ListCursor<'a, T> {
    fn from(value: ListCursorMut<'a, T>) -> Self {
        ListCursor {
            list: value.list,
            pos: value.pos,
        }
    }
}

impl<T> PartialEq for ListCursorMut<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos
    }
}

impl<T: Debug> Debug for ListCursorMut<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListCursorMut")
            .field("value", &self.get())
            .finish()
    }
}
