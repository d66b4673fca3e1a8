#![cfg(test)]

use std::cell::Cell;
use std::rc::Rc;

/// A zero-sized element type, for checking that no storage is ever allocated for it.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ZeroSizedType;

/// A shared tally of how many [`Tracked`] values have been dropped.
#[derive(Debug, Default, Clone)]
pub struct DropCounter(Rc<Cell<usize>>);

impl DropCounter {
    pub fn new() -> DropCounter {
        DropCounter::default()
    }

    /// Wraps `value` so that dropping it (or any of its clones) increments this counter.
    pub fn track<T>(&self, value: T) -> Tracked<T> {
        Tracked {
            value,
            drops: Rc::clone(&self.0),
        }
    }

    pub fn drops(&self) -> usize {
        self.0.get()
    }
}

#[derive(Debug, Clone)]
pub struct Tracked<T> {
    pub value: T,
    drops: Rc<Cell<usize>>,
}

impl<T: PartialEq> PartialEq for Tracked<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Drop for Tracked<T> {
    fn drop(&mut self) {
        self.drops.set(self.drops.get() + 1);
    }
}

/// A value whose clones panic once the shared fuse has burnt down to zero.
#[derive(Debug, Default, PartialEq)]
pub struct CloneBomb {
    pub fuse: Rc<Cell<usize>>,
}

impl CloneBomb {
    pub fn with_fuse(clones: usize) -> CloneBomb {
        CloneBomb {
            fuse: Rc::new(Cell::new(clones)),
        }
    }
}

impl Clone for CloneBomb {
    fn clone(&self) -> Self {
        let remaining = self.fuse.get();
        if remaining == 0 {
            panic!("CloneBomb went off");
        }
        self.fuse.set(remaining - 1);
        CloneBomb {
            fuse: Rc::clone(&self.fuse),
        }
    }
}
