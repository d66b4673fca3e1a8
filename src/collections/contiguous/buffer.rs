use std::alloc::{self, Layout};
use std::marker::PhantomData;
use std::ptr::{self, NonNull};

use crate::util::error::{AllocError, CapacityOverflow, OutOfMemory};

/// An owned, fixed-capacity allocation of uninitialized slots for `T`.
///
/// Buffer only manages the allocation itself. It never tracks which slots are initialized, so it
/// never drops its contents. That is the responsibility of the owning collection, which uses the
/// unsafe slot methods below to construct, relocate and destroy elements.
pub(crate) struct Buffer<T> {
    ptr: NonNull<T>,
    cap: usize,
    _phantom: PhantomData<T>,
}

impl<T> Buffer<T> {
    /// Creates a Buffer with no capacity. Nothing is allocated.
    pub(crate) const fn new() -> Buffer<T> {
        Buffer {
            ptr: NonNull::dangling(),
            cap: 0,
            _phantom: PhantomData,
        }
    }

    /// Allocates a fresh Buffer with exactly `cap` slots.
    ///
    /// # Errors
    /// Returns [`CapacityOverflow`] if the layout would exceed [`isize::MAX`] bytes and
    /// [`OutOfMemory`] if the allocator fails.
    pub(crate) fn try_with_cap(cap: usize) -> Result<Buffer<T>, AllocError> {
        let layout = Self::make_layout(cap)?;
        let ptr = Self::make_ptr(layout)?;

        Ok(Buffer {
            ptr,
            cap,
            _phantom: PhantomData,
        })
    }

    pub(crate) const fn cap(&self) -> usize {
        self.cap
    }

    pub(crate) const fn as_ptr(&self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// Returns a pointer to the slot at `index`.
    ///
    /// # Safety
    /// `index` must be less than or equal to the capacity of the Buffer.
    pub(crate) const unsafe fn slot(&self, index: usize) -> *mut T {
        // SAFETY: The caller guarantees that index is within (or one past) the allocation, and
        // the allocation's size can't exceed isize::MAX.
        unsafe { self.ptr.as_ptr().add(index) }
    }

    /// Moves the value out of the slot at `index`, leaving it logically uninitialized.
    ///
    /// # Safety
    /// The slot at `index` must be initialized, and must be treated as uninitialized afterwards.
    pub(crate) unsafe fn read(&self, index: usize) -> T {
        // SAFETY: The caller guarantees that the slot is in bounds and initialized.
        unsafe { self.slot(index).read() }
    }

    /// Constructs `value` in the slot at `index` without dropping whatever was there.
    ///
    /// # Safety
    /// `index` must be less than the capacity of the Buffer. Any value previously held in the slot
    /// is leaked.
    pub(crate) unsafe fn write(&mut self, index: usize, value: T) {
        // SAFETY: The caller guarantees that the slot is in bounds. Slots are properly aligned
        // because the allocation uses Layout::array.
        unsafe { self.slot(index).write(value) }
    }

    /// Moves `count` values starting at `from` into `dst`, starting at `to`.
    ///
    /// # Safety
    /// `self[from..from + count]` must be initialized and in bounds, `dst[to..to + count]` must be
    /// in bounds. Afterwards, the source slots must be treated as uninitialized.
    pub(crate) unsafe fn move_into(
        &self,
        from: usize,
        dst: &mut Buffer<T>,
        to: usize,
        count: usize,
    ) {
        // SAFETY: Two Buffers never share an allocation, so the ranges can't overlap. The caller
        // guarantees that both ranges are in bounds.
        unsafe { ptr::copy_nonoverlapping(self.slot(from), dst.slot(to), count) }
    }

    /// Moves `count` values within the Buffer from `from` to `to`. The ranges may overlap.
    ///
    /// # Safety
    /// Both ranges must be in bounds and the source range must be initialized. Afterwards, any
    /// source slots not covered by the destination must be treated as uninitialized.
    pub(crate) unsafe fn shift(&mut self, from: usize, to: usize, count: usize) {
        // SAFETY: The caller guarantees that both ranges are in bounds, ptr::copy handles overlap.
        unsafe { ptr::copy(self.slot(from), self.slot(to), count) }
    }

    /// Drops the `count` values starting at `start` in place.
    ///
    /// # Safety
    /// `self[start..start + count]` must be initialized and in bounds, and must be treated as
    /// uninitialized afterwards.
    pub(crate) unsafe fn drop_range(&mut self, start: usize, count: usize) {
        // SAFETY: The caller guarantees that the range holds initialized values. The slice pointer
        // is properly aligned and non-null.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.slot(start), count));
        }
    }

    /// A helper function to create a [`Layout`] for `cap` elements of type `T`.
    pub(crate) fn make_layout(cap: usize) -> Result<Layout, CapacityOverflow> {
        Layout::array::<T>(cap).map_err(|_| CapacityOverflow)
    }

    /// A helper function to allocate a [`NonNull`] for the provided [`Layout`]. Returns a dangling
    /// pointer for a zero-sized layout.
    pub(crate) fn make_ptr(layout: Layout) -> Result<NonNull<T>, OutOfMemory> {
        if layout.size() == 0 {
            Ok(NonNull::dangling())
        } else {
            // SAFETY: Zero-sized layouts have been guarded against.
            let raw_ptr = unsafe { alloc::alloc(layout) };
            NonNull::new(raw_ptr.cast()).ok_or(OutOfMemory { layout })
        }
    }
}

impl<T> Default for Buffer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Buffer<T> {
    fn drop(&mut self) {
        // The layout was valid when the Buffer was allocated, so this can't fail.
        if let Ok(layout) = Self::make_layout(self.cap) {
            if layout.size() != 0 {
                // SAFETY: ptr was allocated in the global allocator with this exact layout.
                // Zero-sized layouts are never allocated and are guarded against deallocation.
                unsafe { alloc::dealloc(self.ptr.as_ptr().cast(), layout) }
            }
        }
    }
}
