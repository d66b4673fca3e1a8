//! Traits describing the ends of a sequence container, which let the
//! [`adapters`](super::adapters) work over any backing collection.

mod sequence;

pub use sequence::*;
