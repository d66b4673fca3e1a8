//! Adapter collections, which restrict a backing [`Sequence`](super::traits::Sequence) to one
//! access pattern: [`Queue`] for first-in-first-out and [`Stack`] for last-in-first-out. Both are
//! backed by a [`LinkedList`](super::linked::LinkedList) unless another container is provided.

mod queue;
mod stack;
mod tests;

pub use queue::*;
pub use stack::*;
