//! A module containing [`LinkedList`] and its cursors and iterators.
//!
//! [`LinkedList`], [`ListCursor`] and [`ListCursorMut`] are also re-exported under the parent
//! module.

mod cursor;
mod iter;
mod length;
mod linked_list;
mod node;

pub use cursor::*;
pub use iter::*;
pub(crate) use length::*;
pub use linked_list::*;
pub(crate) use node::*;
