use std::fmt::{self, Debug, Formatter};
use std::iter::FusedIterator;
use std::mem;
use std::slice;

use super::Vector;
use crate::collections::contiguous::buffer::Buffer;

impl<T> IntoIterator for Vector<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> Self::IntoIter {
        let end = mem::replace(&mut self.len, 0);
        IntoIter {
            // self now owns an empty buffer and no elements, so dropping it does nothing.
            buf: mem::take(&mut self.buf),
            start: 0,
            end,
        }
    }
}

impl<'a, T> IntoIterator for &'a Vector<T> {
    type Item = &'a T;

    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Vector<T> {
    type Item = &'a mut T;

    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// A type for owned iteration over a [`Vector`]. The buffer is released once the iterator is
/// dropped, along with any elements that weren't yielded. See [`Vector::into_iter`].
pub struct IntoIter<T> {
    pub(crate) buf: Buffer<T>,
    pub(crate) start: usize,
    pub(crate) end: usize,
}

// SAFETY: IntoIter exclusively owns its buffer and the elements left in it, so it can be sent to
// another thread when T can.
unsafe impl<T: Send> Send for IntoIter<T> {}
// SAFETY: Shared references only allow reading the remaining elements, through as_slice.
unsafe impl<T: Sync> Sync for IntoIter<T> {}

impl<T> IntoIter<T> {
    /// Returns the elements that are yet to be yielded as a slice.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: The slots in [start, end) are initialized and owned by self. start <= end <= cap.
        unsafe { slice::from_raw_parts(self.buf.slot(self.start), self.end - self.start) }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.start < self.end {
            // SAFETY: start < end, so the slot is initialized. Incrementing start afterwards
            // effectively moves the value out of the buffer.
            let value = unsafe { self.buf.read(self.start) };
            self.start += 1;
            Some(value)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.end - self.start;
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.start < self.end {
            self.end -= 1;
            // SAFETY: The newly decremented end is still >= start, so the slot is initialized
            // and is no longer considered part of the iterator.
            Some(unsafe { self.buf.read(self.end) })
        } else {
            None
        }
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.end - self.start
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        let (start, count) = (self.start, self.end - self.start);
        self.start = self.end;
        // SAFETY: Only the values that haven't been yielded are dropped, and the iterator is
        // marked as exhausted first. The buffer itself is deallocated when it drops.
        unsafe { self.buf.drop_range(start, count) }
    }
}

impl<T: Debug> Debug for IntoIter<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}
