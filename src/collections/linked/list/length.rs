use std::num::NonZero;

/// The length of a list that holds at least one element.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub(crate) struct Length(NonZero<usize>);

pub(crate) const ONE: Length = Length(NonZero::<usize>::MIN);

impl Length {
    pub const fn get(self) -> usize {
        self.0.get()
    }

    pub const fn checked_add(self, other: usize) -> Option<Length> {
        match self.0.checked_add(other) {
            Some(len) => Some(Length(len)),
            None => None,
        }
    }

    /// Returns [`None`] if the result would be zero (or less).
    pub const fn checked_sub(self, other: usize) -> Option<Length> {
        match self.0.get().checked_sub(other) {
            Some(len) => match NonZero::new(len) {
                Some(len) => Some(Length(len)),
                None => None,
            },
            None => None,
        }
    }
}
