use std::borrow::{Borrow, BorrowMut};
use std::cmp;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::iter;
use std::ops::{Deref, DerefMut, Index, IndexMut};
use std::ptr;
use std::slice;

use super::policy::{grow_cap, is_over_allocated};
use crate::collections::contiguous::buffer::Buffer;
use crate::collections::contiguous::cursor::{Cursor, CursorMut};
use crate::util::error::{AllocError, CapacityOverflow, IndexOutOfBounds};
use crate::util::result::{AllocResultExtension, ResultExtension};

/// A variable size contiguous collection, which manages the capacity of its own heap buffer.
///
/// Capacity follows the growth policy described in [`policy`](super::policy): whenever the buffer
/// has to grow to fit `n` elements, it is reallocated with room for `n * 1.5` elements, but never
/// more than [`MAX_SLACK`](super::policy::MAX_SLACK) spare slots. Removals shrink the buffer again
/// once it is over-allocated by the same measure.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the Vector.
/// - `i`: The index of the item in question.
/// - `c`: The number of items inserted or removed.
///
/// | Method | Complexity |
/// |-|-|
/// | `get` | `O(1)` |
/// | `len` | `O(1)` |
/// | `push` | `O(1)`*, `O(n)` |
/// | `pop` | `O(1)`*, `O(n)` |
/// | `insert_n` | `O(n-i+c)` |
/// | `erase` | `O(n-i)` |
/// | `remove` | `O(n-i)` |
/// | `reserve` | `O(n)` |
/// | `resize` | `O(n)` |
/// | `clear` | `O(n)` |
///
/// \* Amortized. A push that exceeds the capacity, or a pop that leaves the Vector over-allocated,
/// reallocates the buffer in `O(n)`.
pub struct Vector<T> {
    pub(crate) buf: Buffer<T>,
    pub(crate) len: usize,
}

impl<T> Vector<T> {
    /// Creates a new Vector with length and capacity 0. Memory will be allocated when the capacity
    /// changes.
    ///
    /// # Examples
    /// ```
    /// # use standard_containers::collections::contiguous::Vector;
    /// let vec: Vector<u8> = Vector::new();
    /// assert_eq!(vec.len(), 0);
    /// assert_eq!(vec.cap(), 0);
    /// assert!(vec.as_ptr().is_null());
    /// ```
    pub const fn new() -> Vector<T> {
        Vector {
            buf: Buffer::new(),
            len: 0,
        }
    }

    /// Creates a new Vector with capacity exactly equal to the provided value, allowing values to
    /// be added without reallocation.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use standard_containers::collections::contiguous::Vector;
    /// let mut vec: Vector<u8> = Vector::with_cap(5);
    /// assert_eq!(vec.cap(), 5);
    /// vec.extend([1_u8, 2, 3, 4, 5]);
    /// assert_eq!(vec.cap(), 5);
    /// ```
    pub fn with_cap(cap: usize) -> Vector<T> {
        Vector {
            buf: Buffer::try_with_cap(cap).or_handle(),
            len: 0,
        }
    }

    /// Creates a new Vector holding `count` clones of `value`.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use standard_containers::collections::contiguous::Vector;
    /// let vec = Vector::repeat('a', 3);
    /// assert_eq!(&*vec, &['a', 'a', 'a']);
    /// ```
    pub fn repeat(value: T, count: usize) -> Vector<T>
    where
        T: Clone,
    {
        Vector::repeat_with(|| value.clone(), count)
    }

    /// Creates a new Vector holding `count` default values.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    pub fn repeat_default(count: usize) -> Vector<T>
    where
        T: Default,
    {
        Vector::repeat_with(T::default, count)
    }

    /// Creates a new Vector of length `count`, filled with elements produced by `f`.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    pub fn repeat_with<F: FnMut() -> T>(f: F, count: usize) -> Vector<T> {
        let mut vec = Vector::new();
        vec.resize_with(count, f);
        vec
    }

    /// Returns the length of the Vector.
    ///
    /// # Examples
    /// ```
    /// # use standard_containers::collections::contiguous::Vector;
    /// let vec = Vector::from([1, 2, 3]);
    /// assert_eq!(vec.len(), 3);
    /// ```
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the Vector contains no elements.
    ///
    /// # Examples
    /// ```
    /// # use standard_containers::collections::contiguous::Vector;
    /// let mut vec: Vector<u8> = Vector::new();
    /// assert!(vec.is_empty());
    /// vec.push(1);
    /// assert!(!vec.is_empty())
    /// ```
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the current capacity of the Vector: the number of elements it can hold before
    /// reallocating.
    pub const fn cap(&self) -> usize {
        self.buf.cap()
    }

    /// Returns a pointer to the start of the Vector's buffer, or a null pointer if the Vector has
    /// no capacity.
    pub const fn as_ptr(&self) -> *const T {
        if self.cap() == 0 {
            ptr::null()
        } else {
            self.buf.as_ptr().cast_const()
        }
    }

    /// Returns a mutable pointer to the start of the Vector's buffer, or a null pointer if the
    /// Vector has no capacity.
    pub const fn as_mut_ptr(&mut self) -> *mut T {
        if self.cap() == 0 {
            ptr::null_mut()
        } else {
            self.buf.as_ptr()
        }
    }

    /// Returns the initialized elements of the Vector as a slice.
    pub fn as_slice(&self) -> &[T] {
        self
    }

    /// Returns the initialized elements of the Vector as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self
    }

    /// Returns a reference to the element at the provided `index`, panicking on a failure.
    ///
    /// The same functionality can be achieved using the [`Index`] operator.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the Vector.
    pub fn get(&self, index: usize) -> &T {
        self.try_get(index).throw()
    }

    /// Returns a reference to the element at the provided `index`, returning an [`Err`] on a
    /// failure rather than panicking.
    ///
    /// # Examples
    /// ```
    /// # use standard_containers::collections::contiguous::Vector;
    /// let vec = Vector::from([1, 2, 3]);
    /// assert_eq!(vec.try_get(2), Ok(&3));
    /// assert!(vec.try_get(3).is_err());
    /// ```
    pub fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        let len = self.len;
        self.as_slice().get(index).ok_or(IndexOutOfBounds { index, len })
    }

    /// Returns a mutable reference to the element at the provided `index`, panicking on a failure.
    ///
    /// The same functionality can be achieved using the [`IndexMut`] operator.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the Vector.
    pub fn get_mut(&mut self, index: usize) -> &mut T {
        self.try_get_mut(index).throw()
    }

    /// Returns a mutable reference to the element at the provided `index`, returning an [`Err`] on
    /// a failure rather than panicking.
    pub fn try_get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        let len = self.len;
        self.as_mut_slice().get_mut(index).ok_or(IndexOutOfBounds { index, len })
    }

    /// Returns a reference to the first element.
    ///
    /// # Panics
    /// Panics if the Vector is empty.
    pub fn front(&self) -> &T {
        self.try_front().throw()
    }

    /// Returns a reference to the first element, or an [`Err`] if the Vector is empty.
    pub fn try_front(&self) -> Result<&T, IndexOutOfBounds> {
        self.try_get(0)
    }

    /// Returns a mutable reference to the first element.
    ///
    /// # Panics
    /// Panics if the Vector is empty.
    pub fn front_mut(&mut self) -> &mut T {
        self.try_front_mut().throw()
    }

    /// Returns a mutable reference to the first element, or an [`Err`] if the Vector is empty.
    pub fn try_front_mut(&mut self) -> Result<&mut T, IndexOutOfBounds> {
        self.try_get_mut(0)
    }

    /// Returns a reference to the last element.
    ///
    /// # Panics
    /// Panics if the Vector is empty.
    pub fn back(&self) -> &T {
        self.try_back().throw()
    }

    /// Returns a reference to the last element, or an [`Err`] if the Vector is empty.
    pub fn try_back(&self) -> Result<&T, IndexOutOfBounds> {
        self.try_get(self.last_index()?)
    }

    /// Returns a mutable reference to the last element.
    ///
    /// # Panics
    /// Panics if the Vector is empty.
    pub fn back_mut(&mut self) -> &mut T {
        self.try_back_mut().throw()
    }

    /// Returns a mutable reference to the last element, or an [`Err`] if the Vector is empty.
    pub fn try_back_mut(&mut self) -> Result<&mut T, IndexOutOfBounds> {
        let index = self.last_index()?;
        self.try_get_mut(index)
    }

    /// Push the provided value onto the end of the Vector, increasing the capacity if required.
    ///
    /// # Panics
    /// Panics if the memory layout of the Vector would have a size that exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use standard_containers::collections::contiguous::Vector;
    /// let mut vec = Vector::<u8>::new();
    /// for i in 0..=5 {
    ///     vec.push(i);
    /// }
    /// assert_eq!(&*vec, &[0, 1, 2, 3, 4, 5]);
    /// ```
    pub fn push(&mut self, value: T) {
        if let Err((_, err)) = self.try_push(value) {
            err.handle()
        }
    }

    /// Push the provided value onto the end of the Vector, returning it alongside the error if the
    /// required allocation fails. The Vector is left unchanged in that case.
    pub fn try_push(&mut self, value: T) -> Result<(), (T, AllocError)> {
        if let Err(err) = self.try_reserve_one() {
            return Err((value, err));
        }
        // SAFETY: The capacity has just been adjusted to support the addition of the new item.
        unsafe { self.push_unchecked(value) }
        Ok(())
    }

    /// Push the provided value onto the end of the Vector, assuming that there is enough capacity
    /// to do so.
    ///
    /// # Safety
    /// It is up to the caller to ensure that the Vector has enough capacity to add the provided
    /// value, using methods like [`reserve`](Vector::reserve) or [`with_cap`](Vector::with_cap)
    /// to do so. Using this method on a Vector without enough capacity is undefined behavior.
    pub unsafe fn push_unchecked(&mut self, value: T) {
        // SAFETY: It is up to the caller to ensure that the Vector has enough capacity for this
        // push, leading to the slot being in bounds of the buffer.
        unsafe { self.buf.write(self.len, value) }
        self.len += 1;
    }

    /// Constructs a new element at the end of the Vector directly in its slot, converting it from
    /// `args`. Returns a reference to the new element.
    ///
    /// # Panics
    /// Panics if the memory layout of the Vector would have a size that exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use standard_containers::collections::contiguous::Vector;
    /// let mut vec: Vector<String> = Vector::new();
    /// vec.emplace("hello").push_str(" world");
    /// assert_eq!(vec[0], "hello world");
    /// ```
    pub fn emplace<A>(&mut self, args: A) -> &mut T
    where
        T: From<A>,
    {
        self.emplace_with(|| T::from(args))
    }

    /// Constructs a new element at the end of the Vector directly in its slot, using the value
    /// returned by `f`. Returns a reference to the new element.
    ///
    /// # Panics
    /// Panics if the memory layout of the Vector would have a size that exceeds [`isize::MAX`].
    pub fn emplace_with<F: FnOnce() -> T>(&mut self, f: F) -> &mut T {
        self.try_reserve_one().or_handle();

        let index = self.len;
        // SAFETY: The capacity has just been adjusted to support the addition of the new item. If
        // f panics, nothing has been written and len is unchanged.
        unsafe { self.buf.write(index, f()) }
        self.len += 1;

        // SAFETY: The slot at index has just been initialized and is < len.
        unsafe { &mut *self.buf.slot(index) }
    }

    /// Pops the last value off the end of the Vector, returning an owned value if the Vector has
    /// length greater than 0. Popping an empty Vector does nothing.
    ///
    /// The buffer shrinks afterwards if it has become over-allocated.
    ///
    /// # Examples
    /// ```
    /// # use standard_containers::collections::contiguous::Vector;
    /// let mut vec = Vector::from([0, 1, 2, 3, 4]);
    /// for i in (0..vec.len()).rev() {
    ///     assert_eq!(vec.pop(), Some(i));
    /// }
    /// assert_eq!(vec.pop(), None);
    /// assert_eq!(vec.cap(), 0);
    /// ```
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }

        // Decrement len before reading.
        self.len -= 1;

        // SAFETY: The slot at the old last index is initialized, and is now outside of len, so it
        // will be treated as uninitialized from here on. This is as close as we can get to moving
        // the value off of the heap.
        let value = unsafe { self.buf.read(self.len) };
        self.shrink_if_slack();
        Some(value)
    }

    /// Inserts the provided value at the given index, shifting all following elements back. If
    /// `index` is beyond the end of the Vector, the gap is filled with default values first.
    ///
    /// # Panics
    /// Panics if the memory layout of the Vector would have a size that exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use standard_containers::collections::contiguous::Vector;
    /// let mut vec = Vector::from([0, 1, 2]);
    /// vec.insert(1, 100);
    /// vec.insert(5, 500);
    /// assert_eq!(&*vec, &[0, 100, 1, 2, 0, 500]);
    /// ```
    pub fn insert(&mut self, index: usize, value: T)
    where
        T: Default,
    {
        self.insert_iter(index, iter::once(value), T::default);
    }

    /// Inserts `count` copies of `value` starting at the given index, shifting all following
    /// elements back. If `index` is beyond the end of the Vector, the gap is filled with default
    /// values first, so that the Vector ends up with `max(len, index) + count` elements.
    ///
    /// # Panics
    /// Panics if the memory layout of the Vector would have a size that exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use standard_containers::collections::contiguous::Vector;
    /// let mut vec = Vector::from([1, 2, 5, 6, 7]);
    /// vec.insert_n(2, 9, 1);
    /// assert_eq!(&*vec, &[1, 2, 9, 5, 6, 7]);
    /// vec.insert_n(0, 0, 2);
    /// assert_eq!(&*vec, &[0, 0, 1, 2, 9, 5, 6, 7]);
    /// ```
    pub fn insert_n(&mut self, index: usize, value: T, count: usize)
    where
        T: Clone + Default,
    {
        self.insert_iter(index, iter::repeat_n(value, count), T::default);
    }

    /// Inserts the provided value at the given index, shifting all following elements back.
    /// Unlike [`insert`](Vector::insert), an index beyond the end of the Vector is rejected.
    ///
    /// # Examples
    /// ```
    /// # use standard_containers::collections::contiguous::Vector;
    /// let mut vec = Vector::from([1, 3]);
    /// assert!(vec.try_insert(1, 2).is_ok());
    /// assert!(vec.try_insert(3, 4).is_ok());
    /// assert!(vec.try_insert(5, 6).is_err());
    /// assert_eq!(&*vec, &[1, 2, 3, 4]);
    /// ```
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<(), IndexOutOfBounds> {
        if index > self.len {
            return Err(IndexOutOfBounds {
                index,
                len: self.len,
            });
        }

        // The gap is empty, so the fill function is never called.
        self.insert_iter(index, iter::once(value), || unreachable!());
        Ok(())
    }

    /// Removes up to `count` elements starting at `index`, shifting all following elements
    /// forward. The range is clamped to the end of the Vector, and nothing happens if `index` is
    /// out of bounds.
    ///
    /// The buffer shrinks afterwards if it has become over-allocated.
    ///
    /// # Examples
    /// ```
    /// # use standard_containers::collections::contiguous::Vector;
    /// let mut vec = Vector::from([1, 2, 3, 4, 5, 6, 7]);
    /// vec.erase(2, 2);
    /// assert_eq!(&*vec, &[1, 2, 5, 6, 7]);
    /// vec.erase(3, 100);
    /// assert_eq!(&*vec, &[1, 2, 5]);
    /// vec.erase(3, 1);
    /// assert_eq!(&*vec, &[1, 2, 5]);
    /// ```
    pub fn erase(&mut self, index: usize, count: usize) {
        if index >= self.len {
            return;
        }

        let count = cmp::min(self.len - index, count);
        let tail = self.len - index - count;

        // Leak the tail rather than double dropping if a destructor panics.
        self.len = index;

        // SAFETY: index + count <= len, so the dropped range is initialized. After dropping it,
        // the tail is moved forward into the newly uninitialized slots.
        unsafe {
            self.buf.drop_range(index, count);
            self.buf.shift(index + count, index, tail);
        }

        self.len = index + tail;
        self.shrink_if_slack();
    }

    /// Removes the element at the provided index, moving all following values to fill in the gap.
    ///
    /// # Panics
    /// Panics if the provided index is out of bounds.
    ///
    /// # Examples
    /// ```
    /// # use standard_containers::collections::contiguous::Vector;
    /// let mut vec: Vector<_> = "Hello world!".chars().collect();
    /// assert_eq!(vec.remove(1), 'e');
    /// assert_eq!(vec.remove(4), ' ');
    /// assert_eq!(vec, "Hlloworld!".chars().collect::<Vector<_>>());
    /// ```
    pub fn remove(&mut self, index: usize) -> T {
        self.try_remove(index).throw()
    }

    /// Removes the element at the provided index, returning an [`Err`] rather than panicking if the
    /// index is out of bounds.
    pub fn try_remove(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        self.check_index(index)?;

        // SAFETY: index < len, so the slot is initialized. It is immediately overwritten by the
        // tail, which is moved forward by one.
        let value = unsafe {
            let value = self.buf.read(index);
            self.buf.shift(index + 1, index, self.len - index - 1);
            value
        };

        self.len -= 1;
        self.shrink_if_slack();
        Ok(value)
    }

    /// Reallocates the Vector so that it can hold at least `cap` elements, without changing its
    /// length. The capacity never decreases.
    ///
    /// The buffer is always reallocated, even if the current capacity is already large enough. See
    /// [`ensure_cap`](Vector::ensure_cap) for a version which only reallocates when required.
    ///
    /// # Panics
    /// Panics if the memory layout of the Vector would have a size that exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use standard_containers::collections::contiguous::Vector;
    /// let mut vec = Vector::from([1, 2, 3]);
    /// vec.reserve(10);
    /// assert_eq!(vec.cap(), 10);
    /// vec.reserve(5);
    /// assert_eq!(vec.cap(), 10);
    /// assert_eq!(&*vec, &[1, 2, 3]);
    /// ```
    pub fn reserve(&mut self, cap: usize) {
        self.try_reserve(cap).or_handle()
    }

    /// Reallocates the Vector so that it can hold at least `cap` elements, returning an [`Err`]
    /// rather than panicking or aborting if allocation fails. The Vector is unchanged on failure.
    pub fn try_reserve(&mut self, cap: usize) -> Result<(), AllocError> {
        self.try_realloc_with_cap(cmp::max(cap, self.cap()))
    }

    /// Ensures that the Vector can hold at least `cap` elements, reallocating only if the current
    /// capacity is smaller.
    ///
    /// # Panics
    /// Panics if the memory layout of the Vector would have a size that exceeds [`isize::MAX`].
    pub fn ensure_cap(&mut self, cap: usize) {
        if cap > self.cap() {
            self.reserve(cap);
        }
    }

    /// Shrinks the Vector so that its capacity is equal to its length.
    ///
    /// # Panics
    /// Panics if the memory layout of the Vector would have a size that exceeds [`isize::MAX`].
    pub fn shrink_to_fit(&mut self) {
        if self.cap() != self.len {
            self.try_realloc_with_cap(self.len).or_handle();
        }
    }

    /// Resizes the Vector to `new_len`, filling any new slots with clones of `value` or dropping
    /// surplus elements. Resizing to the current length does nothing, while any other length
    /// reallocates the buffer according to the growth policy.
    ///
    /// # Panics
    /// Panics if the memory layout of the Vector would have a size that exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use standard_containers::collections::contiguous::Vector;
    /// let mut vec = Vector::from([1, 2]);
    /// vec.resize(4, 7);
    /// assert_eq!(&*vec, &[1, 2, 7, 7]);
    /// vec.resize(1, 7);
    /// assert_eq!(&*vec, &[1]);
    /// ```
    pub fn resize(&mut self, new_len: usize, value: T)
    where
        T: Clone,
    {
        self.resize_with(new_len, || value.clone());
    }

    /// Resizes the Vector to `new_len`, filling any new slots with the default value of `T`. See
    /// [`resize`](Vector::resize).
    ///
    /// # Panics
    /// Panics if the memory layout of the Vector would have a size that exceeds [`isize::MAX`].
    pub fn resize_default(&mut self, new_len: usize)
    where
        T: Default,
    {
        self.resize_with(new_len, T::default);
    }

    /// Resizes the Vector to `new_len`, filling any new slots with values produced by `f`. See
    /// [`resize`](Vector::resize).
    ///
    /// # Panics
    /// Panics if the memory layout of the Vector would have a size that exceeds [`isize::MAX`].
    pub fn resize_with<F: FnMut() -> T>(&mut self, new_len: usize, mut f: F) {
        if new_len == self.len {
            return;
        }

        if new_len < self.len {
            let surplus = self.len - new_len;
            self.len = new_len;
            // SAFETY: The surplus elements are initialized and now outside of len.
            unsafe { self.buf.drop_range(new_len, surplus) }
        }

        self.try_realloc_with_cap(grow_cap(new_len)).or_handle();

        while self.len < new_len {
            // SAFETY: The capacity is at least new_len, so there is room for each new element.
            unsafe { self.push_unchecked(f()) }
        }
    }

    /// Drops every element and releases the buffer, leaving the Vector with length and capacity 0.
    ///
    /// # Examples
    /// ```
    /// # use standard_containers::collections::contiguous::Vector;
    /// let mut vec = Vector::from([1, 2, 3]);
    /// vec.clear();
    /// assert_eq!((vec.len(), vec.cap()), (0, 0));
    /// vec.clear();
    /// assert_eq!((vec.len(), vec.cap()), (0, 0));
    /// ```
    pub fn clear(&mut self) {
        let len = self.len;
        self.len = 0;
        // SAFETY: All values < len are initialized, and len has already been reset.
        unsafe { self.buf.drop_range(0, len) }
        self.buf = Buffer::new();
    }

    /// Returns a [`Cursor`] pointing at the first element.
    pub fn begin(&self) -> Cursor<'_, T> {
        Cursor::begin(self)
    }

    /// Returns a [`Cursor`] pointing one past the last element.
    pub fn end(&self) -> Cursor<'_, T> {
        Cursor::end(self)
    }

    /// Returns a [`CursorMut`] pointing at the first element.
    pub fn begin_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut::begin(self)
    }

    /// Returns a [`CursorMut`] pointing one past the last element.
    pub fn end_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut::end(self)
    }

    /// Inserts every item produced by `values` at `index`. If `index` is past the end of the
    /// Vector, the gap is filled using `gap` first.
    ///
    /// If a value or gap element panics while being produced, the elements that were already after
    /// `index` are leaked rather than dropped.
    ///
    /// # Panics
    /// Panics if the memory layout of the Vector would have a size that exceeds [`isize::MAX`].
    pub(crate) fn insert_iter<I, G>(&mut self, index: usize, values: I, mut gap: G)
    where
        I: ExactSizeIterator<Item = T>,
        G: FnMut() -> T,
    {
        let count = values.len();
        let old_len = self.len;
        let new_len = cmp::max(old_len, index)
            .checked_add(count)
            .ok_or(AllocError::from(CapacityOverflow))
            .or_handle();

        if new_len > self.cap() {
            self.try_realloc_with_cap(grow_cap(new_len)).or_handle();
        }

        let tail = old_len.saturating_sub(index);
        if tail > 0 {
            self.len = index;
            // SAFETY: The capacity is at least new_len, so the tail fits once moved back by count.
            // The slots it leaves behind are treated as uninitialized until written below.
            unsafe { self.buf.shift(index, index + count, tail) }
        }

        while self.len < index {
            // SAFETY: index < new_len <= cap.
            unsafe { self.push_unchecked(gap()) }
        }

        let mut written = 0;
        for value in values.take(count) {
            // SAFETY: index + written < index + count <= new_len <= cap.
            unsafe { self.push_unchecked(value) }
            written += 1;
        }

        if written < count {
            // SAFETY: The iterator came up short, so close the hole by moving the tail forward.
            unsafe { self.buf.shift(index + count, index + written, tail) }
        }

        self.len = index + written + tail;
    }

    /// Reallocates the buffer with exactly `new_cap` slots, moving every element into the new
    /// buffer before the old one is released. Nothing changes if allocation fails.
    ///
    /// This is the only place that changes the buffer of a non-empty Vector.
    pub(crate) fn try_realloc_with_cap(&mut self, new_cap: usize) -> Result<(), AllocError> {
        debug_assert!(new_cap >= self.len, "Reallocation would lose elements!");

        let mut new_buf = Buffer::try_with_cap(new_cap)?;
        // SAFETY: All values < len are initialized, and new_buf has room for at least len values.
        // The old slots are forgotten when the old buffer is dropped, which only deallocates.
        unsafe { self.buf.move_into(0, &mut new_buf, 0, self.len) }
        self.buf = new_buf;
        Ok(())
    }

    /// Grows the buffer according to the growth policy if it is full.
    pub(crate) fn try_reserve_one(&mut self) -> Result<(), AllocError> {
        if self.len == self.cap() {
            let target = self.len.checked_add(1).ok_or(CapacityOverflow)?;
            self.try_realloc_with_cap(grow_cap(target))?;
        }
        Ok(())
    }

    /// Shrinks the buffer to `grow_cap(len)` if it holds more spare slots than the growth policy
    /// would ever hand out.
    pub(crate) fn shrink_if_slack(&mut self) {
        if is_over_allocated(self.len, self.cap()) {
            // A failed shrink leaves the larger buffer in place, which is still valid.
            let _ = self.try_realloc_with_cap(grow_cap(self.len));
        }
    }

    /// Checks that the provided index is within the bounds of self.
    pub(crate) const fn check_index(&self, index: usize) -> Result<(), IndexOutOfBounds> {
        if index >= self.len {
            Err(IndexOutOfBounds {
                index,
                len: self.len,
            })
        } else {
            Ok(())
        }
    }

    const fn last_index(&self) -> Result<usize, IndexOutOfBounds> {
        match self.len.checked_sub(1) {
            Some(index) => Ok(index),
            None => Err(IndexOutOfBounds { index: 0, len: 0 }),
        }
    }
}

impl<T> Extend<T> for Vector<T> {
    fn extend<A: IntoIterator<Item = T>>(&mut self, iter: A) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for Vector<T> {
    fn extend<A: IntoIterator<Item = &'a T>>(&mut self, iter: A) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(value: I) -> Self {
        let mut vec = Vector::new();
        vec.extend(value);
        vec
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T> {
    /// Creates a Vector holding the elements of an array literal, with capacity for growth.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    fn from(value: [T; N]) -> Self {
        let mut vec = Vector::new();
        vec.try_realloc_with_cap(grow_cap(N)).or_handle();

        for item in value {
            // SAFETY: vec has been created with at least N capacity.
            unsafe { vec.push_unchecked(item) }
        }

        vec
    }
}

impl<T: Clone> From<&[T]> for Vector<T> {
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    fn from(value: &[T]) -> Self {
        let mut vec = Vector::new();
        vec.try_realloc_with_cap(grow_cap(value.len())).or_handle();

        for item in value {
            // SAFETY: vec has been created with at least value.len() capacity.
            unsafe { vec.push_unchecked(item.clone()) }
        }

        vec
    }
}

impl<T> Default for Vector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Vector<T> {
    fn drop(&mut self) {
        // SAFETY: All values less than len are initialized and safe to drop.
        unsafe { self.buf.drop_range(0, self.len) }

        // Implicitly drop self.buf, which deallocates the memory without touching its contents.
    }
}

impl<T> Deref for Vector<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        // SAFETY: Vector is valid as a slice for len values, which are all initialized. The pointer
        // is nonnull (dangling without capacity), properly aligned and the range entirely contained
        // within this Vector's buffer. The total size is < isize::MAX as the result of being a
        // valid Layout.
        unsafe { slice::from_raw_parts(self.buf.as_ptr(), self.len) }
    }
}

impl<T> DerefMut for Vector<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: As with deref, the borrow checker enforces that self isn't accessed elsewhere due
        // to this function taking a &mut self.
        unsafe { slice::from_raw_parts_mut(self.buf.as_ptr(), self.len) }
    }
}

impl<T> Index<usize> for Vector<T> {
    type Output = T;

    /// # Panics
    /// Panics if `index` is out of bounds of the Vector.
    fn index(&self, index: usize) -> &Self::Output {
        self.get(index)
    }
}

impl<T> IndexMut<usize> for Vector<T> {
    /// # Panics
    /// Panics if `index` is out of bounds of the Vector.
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.get_mut(index)
    }
}

impl<T> AsRef<[T]> for Vector<T> {
    fn as_ref(&self) -> &[T] {
        self
    }
}

impl<T> AsMut<[T]> for Vector<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self
    }
}

impl<T> Borrow<[T]> for Vector<T> {
    fn borrow(&self) -> &[T] {
        self
    }
}

impl<T> BorrowMut<[T]> for Vector<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self
    }
}

// SAFETY: Vectors, when used safely rely on unique pointers and are therefore safe for Send when T:
// Send.
unsafe impl<T: Send> Send for Vector<T> {}
// SAFETY: Vector's safe API obeys all rules of the borrow checker, so no interior mutability
// occurs. This means that Vector<T> can safely implement Sync when T: Sync.
unsafe impl<T: Sync> Sync for Vector<T> {}

impl<T: Clone> Clone for Vector<T> {
    fn clone(&self) -> Self {
        Vector::from(self.as_slice())
    }
}

impl<T: PartialEq> PartialEq for Vector<T> {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl<T: Eq> Eq for Vector<T> {}

impl<T: Hash> Hash for Vector<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (**self).hash(state);
    }
}

impl<T: Debug> Debug for Vector<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector")
            .field("contents", &&**self)
            .field("len", &self.len)
            .field("cap", &self.cap())
            .finish()
    }
}

impl<T: Debug> Display for Vector<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "vector!")?;
        f.debug_list().entries(self.iter()).finish()
    }
}
