use std::fmt::{self, Debug, Formatter};
use std::iter::FusedIterator;
use std::marker::PhantomData;

use super::{LinkedList, Link};

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

/// A type for owned iteration over a [`LinkedList`], popping elements off of either end.
pub struct IntoIter<T> {
    pub(crate) list: LinkedList<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.list.pop_back()
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.list.len()
    }
}

impl<T: Debug> Debug for IntoIter<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.list.iter()).finish()
    }
}

/// The unvisited nodes of a list, shared by [`Iter`] and [`IterMut`]. `len` tracks how many nodes
/// are left, so that the two ends can't cross over.
pub(crate) struct Remaining<T> {
    front: Link<T>,
    back: Link<T>,
    len: usize,
}

impl<T> Remaining<T> {
    fn of(list: &LinkedList<T>) -> Remaining<T> {
        Remaining {
            front: list.head(),
            back: list.tail(),
            len: list.len(),
        }
    }

    fn next(&mut self) -> Link<T> {
        if self.len == 0 {
            return None;
        }
        let node = self.front?;
        self.front = node.next();
        self.len -= 1;
        Some(node)
    }

    fn next_back(&mut self) -> Link<T> {
        if self.len == 0 {
            return None;
        }
        let node = self.back?;
        self.back = node.prev();
        self.len -= 1;
        Some(node)
    }
}

impl<T> Clone for Remaining<T> {
    fn clone(&self) -> Self {
        Remaining {
            front: self.front,
            back: self.back,
            len: self.len,
        }
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            remaining: Remaining::of(self),
            _phantom: PhantomData,
        }
    }
}

/// A type for borrowed iteration over a [`LinkedList`]. See [`LinkedList::iter`].
pub struct Iter<'a, T> {
    pub(crate) remaining: Remaining<T>,
    pub(crate) _phantom: PhantomData<&'a T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.remaining.next().map(|node| node.value())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining.len, Some(self.remaining.len))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.remaining.next_back().map(|node| node.value())
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> ExactSizeIterator for Iter<'_, T> {
    fn len(&self) -> usize {
        self.remaining.len
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            remaining: self.remaining.clone(),
            _phantom: PhantomData,
        }
    }
}

impl<T: Debug> Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, T> IntoIterator for &'a mut LinkedList<T> {
    type Item = &'a mut T;

    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        IterMut {
            remaining: Remaining::of(self),
            _phantom: PhantomData,
        }
    }
}

/// A type for mutable iteration over a [`LinkedList`]. See [`LinkedList::iter_mut`].
pub struct IterMut<'a, T> {
    pub(crate) remaining: Remaining<T>,
    pub(crate) _phantom: PhantomData<&'a mut T>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        // Each node is yielded at most once, so the mutable references never alias.
        self.remaining.next().map(|node| node.value_mut())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining.len, Some(self.remaining.len))
    }
}

impl<T> DoubleEndedIterator for IterMut<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.remaining.next_back().map(|node| node.value_mut())
    }
}

impl<T> FusedIterator for IterMut<'_, T> {}

impl<T> ExactSizeIterator for IterMut<'_, T> {
    fn len(&self) -> usize {
        self.remaining.len
    }
}
