//! Contiguous collection types, which store their elements next to each other in memory. This
//! module revolves around the fixed-size [`Array`] and the growable [`Vector`], which share the
//! random-access [`Cursor`] and [`CursorMut`] types.

pub(crate) mod buffer;

pub mod array;
pub mod cursor;
pub mod vector;

#[doc(inline)]
pub use array::Array;
#[doc(inline)]
pub use cursor::{Cursor, CursorMut};
#[doc(inline)]
pub use vector::Vector;
