//! Various general-purpose collection types.
//!
//! # Purpose
//! These types cover the classic sequence containers: a fixed-size [`Array`](contiguous::Array), a
//! growable [`Vector`](contiguous::Vector), a doubly linked [`LinkedList`](linked::LinkedList)
//! and the [`Queue`](adapters::Queue) and [`Stack`](adapters::Stack) adapters built on top of
//! them.
//!
//! # Method
//! Contiguous types implement [`Deref<Target = [T]>`](std::ops::Deref) (and DerefMut), which
//! saves writing some of the more repetitive functionality. Every container also hands out cursors
//! through `begin` and `end`, which borrow the container so that it can't be reallocated or
//! restructured underneath them.

#[cfg(feature = "adapters")]
pub mod adapters;
#[cfg(feature = "contiguous")]
pub mod contiguous;
#[cfg(feature = "linked")]
pub mod linked;
#[cfg(feature = "traits")]
pub mod traits;
