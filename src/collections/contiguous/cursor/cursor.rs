use std::cmp::Ordering;
use std::fmt::{self, Debug, Formatter};
use std::ops::{Add, AddAssign, Deref, DerefMut, Index, IndexMut, Sub, SubAssign};
use std::ptr;
use std::slice;

use crate::util::error::OffsetOutOfBounds;
use crate::util::result::ResultExtension;

/// A read-only, random-access position within contiguous storage, such as a
/// [`Vector`](super::super::Vector) or an [`Array`](super::super::Array).
///
/// A Cursor behaves like a pointer into the storage: it can be moved by any signed offset,
/// compared with and subtracted from other Cursors into the same storage, and read through. Unlike
/// a pointer, it borrows its collection, so the collection can't reallocate or shift its elements
/// while the Cursor exists. A Cursor can be moved outside of the elements (e.g. to the `end`
/// position), but reading it there fails rather than producing garbage.
///
/// Comparing or subtracting Cursors from different collections is meaningless, and is caught by a
/// debug assertion.
///
/// # Examples
/// ```
/// # use standard_containers::collections::contiguous::Vector;
/// let vec = Vector::from([1, 2, 3, 4]);
/// let mut cursor = vec.begin();
/// cursor += 2;
/// assert_eq!(*cursor, 3);
/// assert_eq!(vec.end() - cursor, 2);
/// assert_eq!(cursor[-1], 2);
/// ```
pub struct Cursor<'a, T> {
    pub(crate) slice: &'a [T],
    pub(crate) offset: isize,
}

impl<'a, T> Cursor<'a, T> {
    /// Creates a Cursor at `offset` within `slice`.
    pub const fn new(slice: &'a [T], offset: isize) -> Cursor<'a, T> {
        Cursor { slice, offset }
    }

    /// Creates a Cursor pointing at the first element of `slice`.
    pub const fn begin(slice: &'a [T]) -> Cursor<'a, T> {
        Cursor::new(slice, 0)
    }

    /// Creates a Cursor pointing one past the last element of `slice`.
    pub const fn end(slice: &'a [T]) -> Cursor<'a, T> {
        Cursor::new(slice, slice.len() as isize)
    }

    /// Returns the position of the Cursor, relative to the start of its storage.
    pub const fn offset(&self) -> isize {
        self.offset
    }

    /// Returns true if the Cursor points at an element.
    pub const fn in_bounds(&self) -> bool {
        self.offset >= 0 && (self.offset as usize) < self.slice.len()
    }

    /// Returns a reference to the element under the Cursor, if there is one.
    pub const fn get(&self) -> Option<&'a T> {
        let slice = self.slice;
        if self.in_bounds() {
            Some(&slice[self.offset as usize])
        } else {
            None
        }
    }

    /// Returns a reference to the element under the Cursor, or an [`Err`] if the Cursor is outside
    /// of the storage's elements.
    pub const fn try_get(&self) -> Result<&'a T, OffsetOutOfBounds> {
        match self.get() {
            Some(value) => Ok(value),
            None => Err(OffsetOutOfBounds {
                offset: self.offset,
                len: self.slice.len(),
            }),
        }
    }

    /// Moves the Cursor forward by one, returning it for chaining. (`++it`)
    pub const fn inc(&mut self) -> &mut Self {
        self.offset += 1;
        self
    }

    /// Moves the Cursor back by one, returning it for chaining. (`--it`)
    pub const fn dec(&mut self) -> &mut Self {
        self.offset -= 1;
        self
    }

    /// Moves the Cursor forward by one, returning its previous position. (`it++`)
    pub const fn post_inc(&mut self) -> Self {
        let prev = *self;
        self.offset += 1;
        prev
    }

    /// Moves the Cursor back by one, returning its previous position. (`it--`)
    pub const fn post_dec(&mut self) -> Self {
        let prev = *self;
        self.offset -= 1;
        prev
    }

    /// Returns an iterator over the elements in `[self, end)`. Any part of the range that falls
    /// outside of the storage is skipped.
    ///
    /// # Examples
    /// ```
    /// # use standard_containers::collections::contiguous::Vector;
    /// let vec = Vector::from([1, 2, 3, 4, 5]);
    /// let seen: Vec<_> = (vec.begin() + 1).to(vec.end() - 1).copied().collect();
    /// assert_eq!(seen, [2, 3, 4]);
    /// ```
    pub fn to(self, end: Cursor<'a, T>) -> slice::Iter<'a, T> {
        self.assert_same_storage(&end);

        let len = self.slice.len() as isize;
        let start = self.offset.clamp(0, len);
        let end = end.offset.clamp(start, len);
        self.slice[start as usize..end as usize].iter()
    }

    pub(crate) fn assert_same_storage(&self, other: &Cursor<'_, T>) {
        debug_assert!(
            ptr::eq(self.slice.as_ptr(), other.slice.as_ptr()),
            "Cursors into different collections can't be compared!"
        );
    }
}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Cursor<'_, T> {}

impl<T> Deref for Cursor<'_, T> {
    type Target = T;

    /// Reads the element under the Cursor. (`*it`)
    ///
    /// # Panics
    /// Panics if the Cursor is outside of the storage's elements.
    fn deref(&self) -> &Self::Target {
        self.try_get().throw()
    }
}

impl<T> Index<isize> for Cursor<'_, T> {
    type Output = T;

    /// Reads the element `index` positions away from the Cursor, without moving it. (`it[n]`)
    ///
    /// # Panics
    /// Panics if the resulting position is outside of the storage's elements.
    fn index(&self, index: isize) -> &Self::Output {
        (*self + index).try_get().throw()
    }
}

impl<T> AddAssign<isize> for Cursor<'_, T> {
    fn add_assign(&mut self, rhs: isize) {
        self.offset += rhs;
    }
}

impl<T> SubAssign<isize> for Cursor<'_, T> {
    fn sub_assign(&mut self, rhs: isize) {
        self.offset -= rhs;
    }
}

impl<T> Add<isize> for Cursor<'_, T> {
    type Output = Self;

    fn add(mut self, rhs: isize) -> Self::Output {
        self += rhs;
        self
    }
}

impl<'a, T> Add<Cursor<'a, T>> for isize {
    type Output = Cursor<'a, T>;

    fn add(self, rhs: Cursor<'a, T>) -> Self::Output {
        rhs + self
    }
}

impl<T> Sub<isize> for Cursor<'_, T> {
    type Output = Self;

    fn sub(mut self, rhs: isize) -> Self::Output {
        self -= rhs;
        self
    }
}

impl<T> Sub for Cursor<'_, T> {
    type Output = isize;

    /// Returns the signed distance from `rhs` to `self`.
    fn sub(self, rhs: Self) -> Self::Output {
        self.assert_same_storage(&rhs);
        self.offset - rhs.offset
    }
}

impl<T> PartialEq for Cursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.assert_same_storage(other);
        self.offset == other.offset
    }
}

impl<T> Eq for Cursor<'_, T> {}

impl<T> PartialOrd for Cursor<'_, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Cursor<'_, T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.assert_same_storage(other);
        self.offset.cmp(&other.offset)
    }
}

impl<T: Debug> Debug for Cursor<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("offset", &self.offset)
            .field("value", &self.get())
            .finish()
    }
}

/// A mutable, random-access position within contiguous storage. See [`Cursor`] for the read-only
/// variant, which any CursorMut can be converted into (but not the other way around).
///
/// Because a CursorMut holds a unique borrow of its storage, only one can exist at a time, so it
/// supports moving and reading through the Cursor but not copying it.
///
/// # Examples
/// ```
/// # use standard_containers::collections::contiguous::Vector;
/// let mut vec = Vector::from([1, 2, 3]);
/// let mut cursor = vec.begin_mut();
/// while let Some(value) = cursor.get_mut() {
///     *value *= 10;
///     cursor.inc();
/// }
/// assert_eq!(&*vec, &[10, 20, 30]);
/// ```
pub struct CursorMut<'a, T> {
    pub(crate) slice: &'a mut [T],
    pub(crate) offset: isize,
}

impl<'a, T> CursorMut<'a, T> {
    /// Creates a CursorMut at `offset` within `slice`.
    pub const fn new(slice: &'a mut [T], offset: isize) -> CursorMut<'a, T> {
        CursorMut { slice, offset }
    }

    /// Creates a CursorMut pointing at the first element of `slice`.
    pub const fn begin(slice: &'a mut [T]) -> CursorMut<'a, T> {
        CursorMut::new(slice, 0)
    }

    /// Creates a CursorMut pointing one past the last element of `slice`.
    pub const fn end(slice: &'a mut [T]) -> CursorMut<'a, T> {
        let len = slice.len() as isize;
        CursorMut::new(slice, len)
    }

    /// Returns the position of the Cursor, relative to the start of its storage.
    pub const fn offset(&self) -> isize {
        self.offset
    }

    /// Returns true if the Cursor points at an element.
    pub const fn in_bounds(&self) -> bool {
        self.offset >= 0 && (self.offset as usize) < self.slice.len()
    }

    /// Returns a reference to the element under the Cursor, if there is one.
    pub fn get(&self) -> Option<&T> {
        self.as_cursor().get()
    }

    /// Returns a mutable reference to the element under the Cursor, if there is one.
    pub fn get_mut(&mut self) -> Option<&mut T> {
        let index = usize::try_from(self.offset).ok()?;
        self.slice.get_mut(index)
    }

    /// Returns a mutable reference to the element under the Cursor, or an [`Err`] if the Cursor is
    /// outside of the storage's elements.
    pub fn try_get_mut(&mut self) -> Result<&mut T, OffsetOutOfBounds> {
        let err = OffsetOutOfBounds {
            offset: self.offset,
            len: self.slice.len(),
        };
        self.get_mut().ok_or(err)
    }

    /// Consumes the Cursor, returning a reference to the element under it with the lifetime of
    /// the storage itself.
    pub fn into_mut(self) -> Option<&'a mut T> {
        let index = usize::try_from(self.offset).ok()?;
        self.slice.get_mut(index)
    }

    /// Moves the Cursor forward by one, returning it for chaining. (`++it`)
    pub const fn inc(&mut self) -> &mut Self {
        self.offset += 1;
        self
    }

    /// Moves the Cursor back by one, returning it for chaining. (`--it`)
    pub const fn dec(&mut self) -> &mut Self {
        self.offset -= 1;
        self
    }

    /// Reborrows the CursorMut as a read-only [`Cursor`] at the same position.
    pub fn as_cursor(&self) -> Cursor<'_, T> {
        Cursor::new(self.slice, self.offset)
    }

    /// Returns a mutable iterator over the elements from the Cursor up to (but excluding) the
    /// position `end`. Any part of the range that falls outside of the storage is skipped.
    pub fn until(self, end: isize) -> slice::IterMut<'a, T> {
        let len = self.slice.len() as isize;
        let start = self.offset.clamp(0, len);
        let end = end.clamp(start, len);
        self.slice[start as usize..end as usize].iter_mut()
    }
}

impl<'a, T> From<CursorMut<'a, T>> for Cursor<'a, T> {
    fn from(value: CursorMut<'a, T>) -> Self {
        Cursor::new(value.slice, value.offset)
    }
}

impl<T> Deref for CursorMut<'_, T> {
    type Target = T;

    /// # Panics
    /// Panics if the Cursor is outside of the storage's elements.
    fn deref(&self) -> &Self::Target {
        self.as_cursor().try_get().throw()
    }
}

impl<T> DerefMut for CursorMut<'_, T> {
    /// # Panics
    /// Panics if the Cursor is outside of the storage's elements.
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.try_get_mut().throw()
    }
}

impl<T> Index<isize> for CursorMut<'_, T> {
    type Output = T;

    /// # Panics
    /// Panics if the resulting position is outside of the storage's elements.
    fn index(&self, index: isize) -> &Self::Output {
        (self.as_cursor() + index).try_get().throw()
    }
}

impl<T> IndexMut<isize> for CursorMut<'_, T> {
    /// # Panics
    /// Panics if the resulting position is outside of the storage's elements.
    fn index_mut(&mut self, index: isize) -> &mut Self::Output {
        let offset = self.offset + index;
        let len = self.slice.len();
        usize::try_from(offset)
            .ok()
            .and_then(|i| self.slice.get_mut(i))
            .ok_or(OffsetOutOfBounds { offset, len })
            .throw()
    }
}

impl<T> AddAssign<isize> for CursorMut<'_, T> {
    fn add_assign(&mut self, rhs: isize) {
        self.offset += rhs;
    }
}

impl<T> SubAssign<isize> for CursorMut<'_, T> {
    fn sub_assign(&mut self, rhs: isize) {
        self.offset -= rhs;
    }
}

impl<T> Add<isize> for CursorMut<'_, T> {
    type Output = Self;

    fn add(mut self, rhs: isize) -> Self::Output {
        self += rhs;
        self
    }
}

impl<T> Sub<isize> for CursorMut<'_, T> {
    type Output = Self;

    fn sub(mut self, rhs: isize) -> Self::Output {
        self -= rhs;
        self
    }
}

impl<T: Debug> Debug for CursorMut<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("CursorMut")
            .field("offset", &self.offset)
            .field("value", &self.get())
            .finish()
    }
}
