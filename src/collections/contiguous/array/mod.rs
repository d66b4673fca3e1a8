//! A module containing the fixed-size [`Array`].
//!
//! Owned iteration uses [`std::array::IntoIter`], while borrowed iteration uses
//! [`Iter`](std::slice::Iter) and [`IterMut`](std::slice::IterMut) from [`std::slice`].
//!
//! [`Array`] is also re-exported under the parent module.

mod array;
mod tests;

pub use array::*;
