#![cfg(test)]

use std::hash::{BuildHasher, RandomState};
use std::mem;

use super::*;
use crate::util::alloc::{CloneBomb, DropCounter, ZeroSizedType};
use crate::util::error::{AllocError, CapacityOverflow, IndexOutOfBounds};
use crate::util::panic::assert_panics;
use crate::vector;

#[test]
fn test_literal_scenario() {
    let mut vec = vector![1, 2, 3, 4, 5, 6];
    assert_eq!(vec.len(), 6);

    vec.push(7);
    assert_eq!(vec.len(), 7);
    assert_eq!(vec[6], 7, "The pushed value should be at the back.");

    vec.erase(2, 2);
    assert_eq!(&*vec, &[1, 2, 5, 6, 7], "Erase should remove the middle range.");

    vec.insert_n(2, 9, 1);
    assert_eq!(&*vec, &[1, 2, 9, 5, 6, 7], "Insert should place the value before index 2.");
}

#[test]
fn test_growth_policy() {
    assert_eq!(grow_cap(0), 0);
    assert_eq!(grow_cap(1), 1);
    assert_eq!(grow_cap(2), 3);
    assert_eq!(grow_cap(10), 15);
    assert_eq!(grow_cap(100), 150);
    assert_eq!(grow_cap(101), 151);
    assert_eq!(grow_cap(usize::MAX), usize::MAX, "Growth should saturate.");

    let mut vec = Vector::new();
    let mut caps = Vector::new();
    for i in 0..500 {
        let old_cap = vec.cap();
        vec.push(i);
        assert!(vec.cap() >= vec.len());
        assert!(!is_over_allocated(vec.len(), vec.cap()));
        if vec.cap() != old_cap {
            assert_eq!(vec.cap(), grow_cap(vec.len()), "Growth should follow grow_cap.");
            caps.push(vec.cap());
        }
    }

    assert_eq!(&caps.as_slice()[..6], &[1, 3, 6, 10, 16, 25]);
    for (i, value) in vec.iter().enumerate() {
        assert_eq!(*value, i, "Every pushed value should be kept in order.");
    }
}

#[test]
fn test_shrink_policy() {
    let mut vec: Vector<usize> = (0..300).collect();

    while let Some(value) = vec.pop() {
        assert_eq!(value, vec.len(), "Pop should return the last value.");
        assert!(
            !is_over_allocated(vec.len(), vec.cap()),
            "A pop shouldn't leave the Vector over-allocated."
        );
    }
    assert_eq!(vec.cap(), 0);
    assert!(vec.as_ptr().is_null(), "Popping everything should release the buffer.");

    let mut vec: Vector<usize> = (0..300).collect();
    vec.erase(10, 250);
    assert_eq!(vec.len(), 50);
    assert_eq!(vec.cap(), grow_cap(50), "Erase should shrink to grow_cap(len).");
    assert_eq!(&vec.as_slice()[..10], &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
    assert_eq!(vec[10], 260, "The tail should be shifted forward.");

    assert_eq!(vec.remove(0), 0);
    assert!(!is_over_allocated(vec.len(), vec.cap()));
}

#[test]
fn test_noop_removal_keeps_capacity() {
    let mut vec: Vector<i32> = Vector::new();
    vec.reserve(1);
    assert_eq!(vec.pop(), None);
    assert_eq!(vec.cap(), 1, "Popping an empty Vector shouldn't touch the buffer.");

    let mut vec: Vector<i32> = Vector::new();
    vec.reserve(80);
    vec.erase(0, 1);
    assert_eq!(vec.cap(), 80, "Erasing past the end shouldn't touch the buffer.");

    vec.push(1);
    vec.erase(5, 1);
    assert_eq!((vec.len(), vec.cap()), (1, 80));
    vec.erase(0, 1);
    assert!(vec.is_empty());
    assert!(!is_over_allocated(vec.len(), vec.cap()), "A real removal should still shrink.");
}

#[test]
fn test_erase_clamping() {
    let mut vec = vector![1, 2, 3];
    vec.erase(3, 1);
    vec.erase(100, 100);
    assert_eq!(&*vec, &[1, 2, 3], "Erasing past the end should do nothing.");

    vec.erase(1, usize::MAX);
    assert_eq!(&*vec, &[1], "The erased range should be clamped to the end.");

    vec.erase(0, 0);
    assert_eq!(&*vec, &[1]);
}

#[test]
fn test_insert_gap_fill() {
    let mut vec = vector![1, 2];
    vec.insert(4, 9);
    assert_eq!(
        &*vec,
        &[1, 2, 0, 0, 9],
        "Inserting past the end should fill the gap with default values."
    );

    vec.insert_n(7, 3, 2);
    assert_eq!(vec.len(), 9, "The new length should be max(len, index) + count.");
    assert_eq!(&vec.as_slice()[5..], &[0, 0, 3, 3]);

    vec.insert_n(0, 8, 0);
    assert_eq!(vec.len(), 9, "Inserting no values should leave the length unchanged.");
}

#[test]
fn test_try_insert() {
    let mut vec = vector![1, 3];
    assert_eq!(vec.try_insert(1, 2), Ok(()));
    assert_eq!(vec.try_insert(3, 4), Ok(()), "Inserting at len should append.");
    assert_eq!(
        vec.try_insert(6, 5),
        Err(IndexOutOfBounds { index: 6, len: 4 }),
        "Inserting past the end should be rejected."
    );
    assert_eq!(&*vec, &[1, 2, 3, 4]);
}

#[test]
fn test_insert_growth() {
    let mut vec = vector!['a', 'e'];
    vec.insert_n(1, 'x', 100);
    assert_eq!(vec.len(), 102);
    assert_eq!(vec.cap(), grow_cap(102));
    assert_eq!(vec[0], 'a');
    assert_eq!(vec[101], 'e', "The tail should be moved behind the inserted values.");
    assert!(vec.as_slice()[1..101].iter().all(|c| *c == 'x'));
}

#[test]
fn test_reserve() {
    let mut vec = vector![1, 2, 3];
    let old_ptr = vec.as_ptr();

    vec.reserve(2);
    assert_eq!(vec.cap(), grow_cap(3), "Reserve should never shrink.");
    assert_ne!(
        vec.as_ptr(),
        old_ptr,
        "Reserve should reallocate even when the capacity is sufficient."
    );

    let old_ptr = vec.as_ptr();
    vec.ensure_cap(2);
    assert_eq!(vec.as_ptr(), old_ptr, "Ensure cap shouldn't reallocate needlessly.");

    vec.ensure_cap(20);
    assert_eq!(vec.cap(), 20);
    assert_eq!(&*vec, &[1, 2, 3], "Reallocation should preserve every element.");

    vec.shrink_to_fit();
    assert_eq!(vec.cap(), 3);
}

#[test]
fn test_capacity_overflow() {
    let mut vec: Vector<u64> = Vector::new();
    let err = vec.try_reserve(usize::MAX).expect_err("Reserving usize::MAX should fail.");
    assert_eq!(err, AllocError::CapacityOverflow(CapacityOverflow));
    assert!(err.is_capacity_overflow());
    assert_eq!(vec.cap(), 0, "A failed reservation should leave the Vector unchanged.");

    assert_panics!({
        let mut vec: Vector<u8> = Vector::new();
        vec.reserve(isize::MAX as usize + 1)
    });
}

#[test]
fn test_resize() {
    let mut vec = vector![1, 2];
    vec.resize(4, 7);
    assert_eq!(&*vec, &[1, 2, 7, 7]);
    assert_eq!(vec.cap(), grow_cap(4));

    let old_ptr = vec.as_ptr();
    vec.resize(4, 0);
    assert_eq!(vec.as_ptr(), old_ptr, "Resizing to the same length should do nothing.");

    vec.resize_default(1);
    assert_eq!(&*vec, &[1]);
    assert_eq!(vec.cap(), grow_cap(1));

    let mut next = 10;
    vec.resize_with(3, || {
        next += 1;
        next
    });
    assert_eq!(&*vec, &[1, 11, 12]);
}

#[test]
fn test_clear() {
    let mut vec = vector![1, 2, 3];
    vec.clear();
    assert_eq!((vec.len(), vec.cap()), (0, 0));
    assert!(vec.as_ptr().is_null());

    vec.clear();
    assert_eq!((vec.len(), vec.cap()), (0, 0), "Clearing twice should equal clearing once.");

    vec.push(4);
    assert_eq!(&*vec, &[4], "A cleared Vector should be reusable.");
}

#[test]
fn test_move_semantics() {
    let mut source = vector![1, 2, 3];
    let target = mem::take(&mut source);

    assert_eq!(&*target, &[1, 2, 3]);
    assert_eq!(source.len(), 0, "The moved-from Vector should be empty.");
    assert_eq!(source.cap(), 0);
    assert!(source.as_ptr().is_null());

    let copy = target.clone();
    assert_eq!(copy, target);
    assert_ne!(copy.as_ptr(), target.as_ptr(), "A clone should own its own buffer.");
}

#[test]
fn test_clone_capacity() {
    let mut vec = vector![1, 2, 3];
    vec.reserve(100);
    let copy = vec.clone();
    assert_eq!(copy.cap(), grow_cap(3), "A clone should use the growth policy.");
}

#[test]
fn test_accessors() {
    let mut vec = vector![1, 2, 3];
    assert_eq!(*vec.front(), 1);
    assert_eq!(*vec.back(), 3);
    *vec.front_mut() = 10;
    *vec.back_mut() += 20;
    vec[1] = 5;
    assert_eq!(&*vec, &[10, 5, 23]);

    let empty: Vector<i32> = Vector::new();
    assert_eq!(empty.try_front(), Err(IndexOutOfBounds { index: 0, len: 0 }));
    assert_eq!(empty.try_back(), Err(IndexOutOfBounds { index: 0, len: 0 }));
    assert_panics!({
        empty.back();
    });
}

#[test]
fn test_out_of_bounds() {
    let vec = vector![1, 2, 3];
    assert_eq!(vec.try_get(2), Ok(&3));

    let err = vec.try_get(3).expect_err("Index 3 is out of bounds.");
    assert_eq!(err, IndexOutOfBounds { index: 3, len: 3 });
    assert_eq!(
        err.to_string(),
        "Index 3 out of bounds for collection with 3 elements!"
    );

    assert_panics!({
        vec.get(3);
    });
    assert_panics!({
        let _value = &vec[100];
    });
    assert_panics!({
        let mut vec = Vector::<i32>::new();
        vec.remove(0);
    });
}

#[test]
fn test_pop_empty() {
    let mut vec: Vector<u8> = Vector::new();
    assert_eq!(vec.pop(), None);
    assert_eq!((vec.len(), vec.cap()), (0, 0), "Popping an empty Vector should do nothing.");
}

#[test]
fn test_emplace() {
    let mut vec: Vector<String> = Vector::new();
    vec.emplace("hello").push_str(" world");
    vec.emplace_with(|| String::from("!"));
    assert_eq!(vec.len(), 2);
    assert_eq!(vec[0], "hello world");
    assert_eq!(vec[1], "!");
}

#[test]
fn test_iteration() {
    let vec: Vector<_> = (1..=5).collect();
    let mut total = 0;
    for value in &vec {
        total += value;
    }
    assert_eq!(total, 15);

    let mut vec = vec;
    for value in &mut vec {
        *value *= 2;
    }

    let reversed: Vector<_> = vec.into_iter().rev().collect();
    assert_eq!(&*reversed, &[10, 8, 6, 4, 2]);

    let mut iter = reversed.into_iter();
    assert_eq!(iter.len(), 5);
    assert_eq!(iter.next(), Some(10));
    assert_eq!(iter.next_back(), Some(2));
    assert_eq!(iter.as_slice(), &[8, 6, 4]);
}

#[test]
fn test_owned_iteration_across_threads() {
    fn assert_send_sync<S: Send + Sync>(_: &S) {}

    let iter = Vector::from([String::from("a"), String::from("b")]).into_iter();
    assert_send_sync(&iter);

    let joined = std::thread::spawn(move || iter.collect::<Vector<_>>())
        .join()
        .expect("The thread shouldn't panic.");
    assert_eq!(joined, Vector::from([String::from("a"), String::from("b")]));
}

#[test]
fn test_drop_counting() {
    let counter = DropCounter::new();
    let mut vec: Vector<_> = (0..10).map(|i| counter.track(i)).collect();

    vec.pop();
    vec.pop();
    assert_eq!(counter.drops(), 2, "Popped values should be dropped by the caller.");

    vec.erase(0, 3);
    assert_eq!(counter.drops(), 5, "Erased values should be dropped once.");

    vec.remove(0);
    assert_eq!(counter.drops(), 6);

    vec.reserve(100);
    vec.shrink_to_fit();
    assert_eq!(counter.drops(), 6, "Reallocation should move values, not drop them.");

    drop(vec);
    assert_eq!(counter.drops(), 10, "Every element should be dropped exactly once.");

    let vec: Vector<_> = (0..10).map(|i| counter.track(i)).collect();
    let mut iter = vec.into_iter();
    iter.next();
    iter.next_back();
    drop(iter);
    assert_eq!(counter.drops(), 20, "Owned iteration should drop the remaining values.");

    let mut vec: Vector<_> = (0..4).map(|i| counter.track(i)).collect();
    vec.resize_with(1, || unreachable!());
    assert_eq!(counter.drops(), 23, "Shrinking should drop the surplus.");
    vec.clear();
    assert_eq!(counter.drops(), 24);
}

#[test]
fn test_panic_during_insert() {
    let mut vec = Vector::from([CloneBomb::default(), CloneBomb::default()]);
    let bomb = CloneBomb::with_fuse(1);

    assert_panics!({ vec.insert_n(1, bomb, 3) });

    assert_eq!(
        vec.len(),
        2,
        "Only the values written before the panic should be kept, leaking the tail."
    );
    vec.push(CloneBomb::default());
    assert_eq!(vec.len(), 3, "The Vector should remain usable after a panic.");
}

#[test]
fn test_zst_support() {
    let mut vec = Vector::new();
    for _ in 0..5 {
        vec.push(ZeroSizedType);
    }
    assert_eq!(vec.len(), 5);
    assert_eq!(vec[4], ZeroSizedType);
    assert!(!vec.as_ptr().is_null());
    assert_eq!(vec.iter().count(), 5);

    vec.erase(0, 5);
    assert!(vec.is_empty());
}

#[test]
fn test_equality_and_hash() {
    let vec = vector![1, 2, 3];
    let other: Vector<_> = [1, 2, 3].into_iter().collect();

    assert_eq!(vec, other, "Different construction methods should produce equal results.");
    assert_ne!(vec, vector![1, 2]);

    let state = RandomState::new();
    assert_eq!(state.hash_one(&vec), state.hash_one(&other));
    assert_eq!(vec, Vector::from(&[1, 2, 3][..]));
}

#[test]
fn test_formatting() {
    let vec = vector![1, 2];
    assert_eq!(format!("{vec}"), "vector![1, 2]");
    assert_eq!(
        format!("{vec:?}"),
        "Vector { contents: [1, 2], len: 2, cap: 3 }"
    );
}

#[test]
fn test_extend() {
    let mut vec = vector![1];
    vec.extend([2, 3]);
    vec.extend(&[4, 5]);
    assert_eq!(&*vec, &[1, 2, 3, 4, 5]);

    let repeated = Vector::repeat(7, 3);
    assert_eq!(repeated.cap(), grow_cap(3));
    assert_eq!(&*repeated, &[7, 7, 7]);
    assert_eq!(&*Vector::<u8>::repeat_default(2), &[0, 0]);
}
