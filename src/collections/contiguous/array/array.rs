use std::array;
use std::borrow::{Borrow, BorrowMut};
use std::fmt::{self, Debug, Formatter};
use std::ops::{Deref, DerefMut, Index, IndexMut};
use std::slice;

use crate::collections::contiguous::cursor::{Cursor, CursorMut};
use crate::util::error::{IndexOutOfBounds, LengthMismatch};
use crate::util::result::ResultExtension;

/// A fixed-size contiguous collection, holding exactly `N` elements inline. An Array never
/// allocates, grows or shrinks; it exposes the same accessors and cursors as a
/// [`Vector`](super::super::Vector).
///
/// Accessing the [`front`](Array::front) or [`back`](Array::back) of an Array with `N == 0` is
/// rejected at compile time.
///
/// # Time Complexity
/// | Method | Complexity |
/// |-|-|
/// | `get` | `O(1)` |
/// | `len` | `O(1)` |
/// | `fill` | `O(N)` |
///
/// # Examples
/// ```
/// # use standard_containers::collections::contiguous::Array;
/// let arr = Array::from([1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
/// assert_eq!(*arr.front(), 1);
/// assert_eq!(*arr.back(), 10);
/// assert_eq!(arr.iter().count(), 10);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Array<T, const N: usize> {
    pub(crate) data: [T; N],
}

impl<T, const N: usize> Array<T, N> {
    /// Creates an Array with every element set to its default value.
    pub fn new() -> Array<T, N>
    where
        T: Default,
    {
        Array {
            data: array::from_fn(|_| T::default()),
        }
    }

    /// Returns the length of the Array, which is always `N`.
    pub const fn len(&self) -> usize {
        N
    }

    /// Returns true if `N` is 0.
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Returns a reference to the element at the provided `index`, panicking on a failure.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the Array.
    pub fn get(&self, index: usize) -> &T {
        self.try_get(index).throw()
    }

    /// Returns a reference to the element at the provided `index`, returning an [`Err`] on a
    /// failure rather than panicking.
    pub fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        self.data.get(index).ok_or(IndexOutOfBounds { index, len: N })
    }

    /// Returns a mutable reference to the element at the provided `index`, panicking on a failure.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the Array.
    pub fn get_mut(&mut self, index: usize) -> &mut T {
        self.try_get_mut(index).throw()
    }

    pub fn try_get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        self.data.get_mut(index).ok_or(IndexOutOfBounds { index, len: N })
    }

    /// Returns a reference to the first element.
    ///
    /// An empty Array has no first element, so calling this when `N == 0` is rejected at compile
    /// time.
    ///
    /// ```compile_fail
    /// # use standard_containers::collections::contiguous::Array;
    /// let empty: Array<u8, 0> = Array::new();
    /// empty.front();
    /// ```
    pub const fn front(&self) -> &T {
        const { assert!(N != 0, "An empty Array has no front element!") }
        &self.data[0]
    }

    pub const fn front_mut(&mut self) -> &mut T {
        const { assert!(N != 0, "An empty Array has no front element!") }
        &mut self.data[0]
    }

    /// Returns a reference to the last element. Like [`front`](Array::front), this doesn't compile
    /// for an empty Array.
    ///
    /// ```compile_fail
    /// # use standard_containers::collections::contiguous::Array;
    /// let mut empty: Array<u8, 0> = Array::new();
    /// *empty.back_mut() += 1;
    /// empty.back();
    /// ```
    pub const fn back(&self) -> &T {
        const { assert!(N != 0, "An empty Array has no back element!") }
        &self.data[N - 1]
    }

    pub const fn back_mut(&mut self) -> &mut T {
        const { assert!(N != 0, "An empty Array has no back element!") }
        &mut self.data[N - 1]
    }

    pub const fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub const fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Returns a reference to the underlying array.
    pub const fn data(&self) -> &[T; N] {
        &self.data
    }

    pub const fn data_mut(&mut self) -> &mut [T; N] {
        &mut self.data
    }

    /// Consumes the Array, returning the underlying array.
    pub fn into_inner(self) -> [T; N] {
        self.data
    }

    /// Overwrites every element with a clone of `value`.
    ///
    /// # Examples
    /// ```
    /// # use standard_containers::collections::contiguous::Array;
    /// let mut arr: Array<u8, 3> = Array::new();
    /// arr.fill(7);
    /// assert_eq!(arr.data(), &[7, 7, 7]);
    /// ```
    pub fn fill(&mut self, value: T)
    where
        T: Clone,
    {
        for slot in self.data.iter_mut() {
            *slot = value.clone();
        }
    }

    /// Returns a [`Cursor`] pointing at the first element.
    pub const fn begin(&self) -> Cursor<'_, T> {
        Cursor::begin(&self.data)
    }

    /// Returns a [`Cursor`] pointing one past the last element.
    pub const fn end(&self) -> Cursor<'_, T> {
        Cursor::end(&self.data)
    }

    /// Returns a [`CursorMut`] pointing at the first element.
    pub const fn begin_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut::begin(&mut self.data)
    }

    /// Returns a [`CursorMut`] pointing one past the last element.
    pub const fn end_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut::end(&mut self.data)
    }
}

impl<T: Default, const N: usize> Default for Array<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> From<[T; N]> for Array<T, N> {
    fn from(value: [T; N]) -> Self {
        Array { data: value }
    }
}

impl<T: Clone, const N: usize> TryFrom<&[T]> for Array<T, N> {
    type Error = LengthMismatch;

    /// Clones the elements of a slice holding exactly `N` elements into a new Array.
    fn try_from(value: &[T]) -> Result<Self, Self::Error> {
        if value.len() != N {
            return Err(LengthMismatch {
                expected: N,
                found: value.len(),
            });
        }

        Ok(Array {
            data: array::from_fn(|i| value[i].clone()),
        })
    }
}

impl<T, const N: usize> IntoIterator for Array<T, N> {
    type Item = T;

    type IntoIter = array::IntoIter<T, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a Array<T, N> {
    type Item = &'a T;

    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a mut Array<T, N> {
    type Item = &'a mut T;

    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter_mut()
    }
}

impl<T, const N: usize> Deref for Array<T, N> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl<T, const N: usize> DerefMut for Array<T, N> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.data
    }
}

impl<T, const N: usize> Index<usize> for Array<T, N> {
    type Output = T;

    /// # Panics
    /// Panics if `index` is out of bounds of the Array.
    fn index(&self, index: usize) -> &Self::Output {
        self.get(index)
    }
}

impl<T, const N: usize> IndexMut<usize> for Array<T, N> {
    /// # Panics
    /// Panics if `index` is out of bounds of the Array.
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.get_mut(index)
    }
}

impl<T, const N: usize> AsRef<[T]> for Array<T, N> {
    fn as_ref(&self) -> &[T] {
        &self.data
    }
}

impl<T, const N: usize> AsMut<[T]> for Array<T, N> {
    fn as_mut(&mut self) -> &mut [T] {
        &mut self.data
    }
}

impl<T, const N: usize> Borrow<[T]> for Array<T, N> {
    fn borrow(&self) -> &[T] {
        &self.data
    }
}

impl<T, const N: usize> BorrowMut<[T]> for Array<T, N> {
    fn borrow_mut(&mut self) -> &mut [T] {
        &mut self.data
    }
}

impl<T: Debug, const N: usize> Debug for Array<T, N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Array")
            .field("contents", &self.data.as_slice())
            .field("len", &N)
            .finish()
    }
}
