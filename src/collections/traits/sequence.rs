/// A container holding an ordered sequence of items, with access to both of its ends.
pub trait Sequence {
    type Item;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes every item from the sequence.
    fn clear(&mut self);

    /// Returns a reference to the first item, if there is one.
    fn peek_front(&self) -> Option<&Self::Item>;

    fn peek_front_mut(&mut self) -> Option<&mut Self::Item>;

    /// Returns a reference to the last item, if there is one.
    fn peek_back(&self) -> Option<&Self::Item>;

    fn peek_back_mut(&mut self) -> Option<&mut Self::Item>;
}

/// A [`Sequence`] which can grow at its back.
pub trait BackInsert: Sequence {
    fn push_back(&mut self, value: Self::Item);

    /// Constructs a new item at the back of the sequence, converting it from `args`, and returns a
    /// reference to it.
    fn emplace_back<A>(&mut self, args: A) -> &mut Self::Item
    where
        Self::Item: From<A>;
}

/// A [`Sequence`] which can remove items from its back.
pub trait BackRemove: Sequence {
    /// Removes the last item and returns it, if there is one.
    fn pop_back(&mut self) -> Option<Self::Item>;
}

/// A [`Sequence`] which can remove items from its front.
pub trait FrontRemove: Sequence {
    /// Removes the first item and returns it, if there is one.
    fn pop_front(&mut self) -> Option<Self::Item>;
}

#[cfg(feature = "contiguous")]
mod contiguous {
    use super::{BackInsert, BackRemove, FrontRemove, Sequence};
    use crate::collections::contiguous::Vector;

    impl<T> Sequence for Vector<T> {
        type Item = T;

        fn len(&self) -> usize {
            Vector::len(self)
        }

        fn clear(&mut self) {
            Vector::clear(self)
        }

        fn peek_front(&self) -> Option<&T> {
            self.try_front().ok()
        }

        fn peek_front_mut(&mut self) -> Option<&mut T> {
            self.try_front_mut().ok()
        }

        fn peek_back(&self) -> Option<&T> {
            self.try_back().ok()
        }

        fn peek_back_mut(&mut self) -> Option<&mut T> {
            self.try_back_mut().ok()
        }
    }

    impl<T> BackInsert for Vector<T> {
        fn push_back(&mut self, value: T) {
            self.push(value)
        }

        fn emplace_back<A>(&mut self, args: A) -> &mut T
        where
            T: From<A>,
        {
            self.emplace(args)
        }
    }

    impl<T> BackRemove for Vector<T> {
        fn pop_back(&mut self) -> Option<T> {
            self.pop()
        }
    }

    impl<T> FrontRemove for Vector<T> {
        /// Removes the first item, shifting every other item forward in `O(n)`.
        fn pop_front(&mut self) -> Option<T> {
            self.try_remove(0).ok()
        }
    }
}

#[cfg(feature = "linked")]
mod linked {
    use super::{BackInsert, BackRemove, FrontRemove, Sequence};
    use crate::collections::linked::LinkedList;

    impl<T> Sequence for LinkedList<T> {
        type Item = T;

        fn len(&self) -> usize {
            LinkedList::len(self)
        }

        fn clear(&mut self) {
            LinkedList::clear(self)
        }

        fn peek_front(&self) -> Option<&T> {
            self.front()
        }

        fn peek_front_mut(&mut self) -> Option<&mut T> {
            self.front_mut()
        }

        fn peek_back(&self) -> Option<&T> {
            self.back()
        }

        fn peek_back_mut(&mut self) -> Option<&mut T> {
            self.back_mut()
        }
    }

    impl<T> BackInsert for LinkedList<T> {
        fn push_back(&mut self, value: T) {
            LinkedList::push_back(self, value)
        }

        fn emplace_back<A>(&mut self, args: A) -> &mut T
        where
            T: From<A>,
        {
            LinkedList::emplace_back(self, args)
        }
    }

    impl<T> BackRemove for LinkedList<T> {
        fn pop_back(&mut self) -> Option<T> {
            LinkedList::pop_back(self)
        }
    }

    impl<T> FrontRemove for LinkedList<T> {
        fn pop_front(&mut self) -> Option<T> {
            LinkedList::pop_front(self)
        }
    }
}
