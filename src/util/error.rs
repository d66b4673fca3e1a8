use std::alloc::Layout;
use std::error::Error;
use std::fmt::{self, Display, Formatter};

use derive_more::{Display, Error, From, IsVariant, TryInto};

/// An attempt to read or write a position that doesn't hold a live element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexOutOfBounds {
    pub index: usize,
    pub len: usize,
}

impl Display for IndexOutOfBounds {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.len == 0 {
            write!(f, "Index {} out of bounds for empty collection!", self.index)
        } else {
            write!(f, "Index {} out of bounds for collection with {} elements!", self.index, self.len)
        }
    }
}

impl Error for IndexOutOfBounds {}

/// A cursor was read while positioned outside of the elements of its collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OffsetOutOfBounds {
    pub offset: isize,
    pub len: usize,
}

impl Display for OffsetOutOfBounds {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Cursor offset {} is outside of the {} elements of its collection!", self.offset, self.len)
    }
}

impl Error for OffsetOutOfBounds {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityOverflow;

impl Display for CapacityOverflow {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Capacity overflow!")
    }
}

impl Error for CapacityOverflow {}

/// The global allocator returned null for the contained layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutOfMemory {
    pub layout: Layout,
}

impl Display for OutOfMemory {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Failed to allocate {} bytes (align {})!",
            self.layout.size(),
            self.layout.align()
        )
    }
}

impl Error for OutOfMemory {}

/// Any failure that can occur while (re)allocating a buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From, TryInto, IsVariant)]
pub enum AllocError {
    CapacityOverflow(CapacityOverflow),
    OutOfMemory(OutOfMemory),
}

impl AllocError {
    /// Reports the error in the manner of the infallible collection methods: capacity overflows
    /// panic, while allocation failures are passed to [`handle_alloc_error`] as recommended.
    ///
    /// # Panics
    /// Panics if `self` is a [`CapacityOverflow`].
    ///
    /// [`handle_alloc_error`]: std::alloc::handle_alloc_error
    pub fn handle(self) -> ! {
        match self {
            AllocError::CapacityOverflow(err) => panic!("{}", err),
            AllocError::OutOfMemory(OutOfMemory { layout }) => {
                std::alloc::handle_alloc_error(layout)
            },
        }
    }
}

/// A collection of fixed length was built from a source holding a different number of elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthMismatch {
    pub expected: usize,
    pub found: usize,
}

impl Display for LengthMismatch {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Expected {} elements, found {}!", self.expected, self.found)
    }
}

impl Error for LengthMismatch {}
