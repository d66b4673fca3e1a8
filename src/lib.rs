//! This crate is my attempt at writing the classic sequence containers from scratch: a growable
//! [`Vector`](collections::contiguous::Vector), a fixed-size
//! [`Array`](collections::contiguous::Array), a doubly linked
//! [`LinkedList`](collections::linked::LinkedList) and the [`Queue`](collections::adapters::Queue)
//! and [`Stack`](collections::adapters::Stack) adapters, along with cursors for moving around in
//! them.
//!
//! # Purpose
//! This crate is a learning project, with no expectation for it to be used in production. Writing
//! these data structures helps me to understand what a container actually has to manage: raw
//! allocations, uninitialized slots, growth policies and the positions that point into all of it.
//!
//! # Method
//! The core of the crate is [`Vector`](collections::contiguous::Vector) and its capacity
//! management. Every reallocation goes through a single path which allocates the new buffer,
//! moves the elements across and only then frees the old one, and the growth policy is exposed
//! through [`grow_cap`](collections::contiguous::vector::grow_cap).
//!
//! Cursors borrow the container they point into. Anything that could invalidate a cursor, such as
//! a reallocation or shifting elements, needs a mutable borrow of the container, so using a stale
//! cursor is a compile error rather than undefined behavior.
//!
//! # Error Handling
//! Fallible operations come in pairs: a `try_` method returns a strongly typed [`Result`], while
//! the plain method panics with the error's message. For example, imagine having to handle the
//! possibility of a capacity overflow every time you push into a Vector; `push` panics instead,
//! while `try_push` hands the value back alongside an [`AllocError`](error::AllocError).
//!
//! Errors are structs (or enums of structs, for static dispatch) that implement
//! [`Error`](std::error::Error). Running out of memory in an infallible method is reported through
//! [`handle_alloc_error`](std::alloc::handle_alloc_error).
//!
//! # Dependencies
//! This crate uses `std` for the global allocator, but doesn't use [`Vec`] or any of the standard
//! collections to implement its own. It also depends on some derive macros because they're helpful
//! and remove the need for some very repetitive programming.
//!
//! # Features
//! - `contiguous`: [`Array`](collections::contiguous::Array) and
//!   [`Vector`](collections::contiguous::Vector).
//! - `linked`: [`LinkedList`](collections::linked::LinkedList).
//! - `traits`: the [`Sequence`](collections::traits::Sequence) traits.
//! - `adapters`: [`Queue`](collections::adapters::Queue) and
//!   [`Stack`](collections::adapters::Stack).
//! - `collections-all` (default): all of the above.

#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod collections;
pub mod error {
    //! Error types returned by the fallible methods of this crate's collections.

    pub use crate::util::error::*;
}

pub(crate) mod util;

#[cfg(all(test, feature = "contiguous", feature = "linked"))]
mod property_tests;
