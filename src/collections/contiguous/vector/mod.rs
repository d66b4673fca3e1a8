//! A module containing [`Vector`] and associated types.
//!
//! [`IntoIter`] provides owned iteration over a Vector, while [`Iter`](std::slice::Iter) and
//! [`IterMut`](std::slice::IterMut) from [`std::slice`] are used for borrowed iteration. The
//! capacity policy used whenever a Vector reallocates lives in [`grow_cap`] and its constants.
//!
//! [`Vector`] is also re-exported under the parent module.

mod iter;
mod policy;
mod tests;
mod vector;

pub use iter::*;
pub use policy::*;
pub use vector::*;

/// Creates a [`Vector`] from a list of elements, in the same manner as [`vec!`].
///
/// # Examples
/// ```
/// # use standard_containers::vector;
/// # use standard_containers::collections::contiguous::Vector;
/// let empty: Vector<u8> = vector![];
/// assert!(empty.is_empty());
///
/// let nums = vector![1, 2, 3, 4, 5, 6];
/// assert_eq!(nums.len(), 6);
///
/// let zeros = vector![0; 4];
/// assert_eq!(&*zeros, &[0, 0, 0, 0]);
/// ```
#[macro_export]
macro_rules! vector {
    () => {
        $crate::collections::contiguous::Vector::new()
    };
    ($value:expr; $count:expr) => {
        $crate::collections::contiguous::Vector::repeat($value, $count)
    };
    ($($value:expr),+ $(,)?) => {
        $crate::collections::contiguous::Vector::from([$($value),+])
    };
}
