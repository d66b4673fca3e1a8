//! Random-access cursors over contiguous storage: [`Cursor`] for reading and [`CursorMut`] for
//! mutation. Both [`Vector`](super::Vector) and [`Array`](super::Array) hand these out through
//! their `begin` and `end` methods.

mod cursor;
mod tests;

pub use cursor::*;
