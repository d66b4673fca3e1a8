//! Linked collection types. Primarily revolves around [`LinkedList`] and its accompanying
//! [`ListCursor`] and [`ListCursorMut`] types.

pub mod list;

#[doc(inline)]
pub use list::{LinkedList, ListCursor, ListCursorMut};
