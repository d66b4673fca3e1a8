#![cfg(test)]

use std::hash::{BuildHasher, RandomState};

use super::*;
use crate::util::alloc::{DropCounter, ZeroSizedType};
use crate::util::error::{IndexOutOfBounds, LengthMismatch};
use crate::util::panic::assert_panics;

#[test]
fn test_literal_scenario() {
    let arr = Array::<i32, 10>::from([1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
    assert_eq!(*arr.front(), 1);
    assert_eq!(*arr.back(), 10);
    assert_eq!(arr.len(), 10);

    let mut expected = 1;
    let mut cursor = arr.begin();
    while cursor != arr.end() {
        assert_eq!(*cursor, expected, "Iteration should visit the values in order.");
        expected += 1;
        cursor.inc();
    }
    assert_eq!(expected, 11, "Iteration should visit all 10 elements.");
}

#[test]
fn test_default_construction() {
    let arr: Array<u32, 4> = Array::new();
    assert_eq!(arr.data(), &[0, 0, 0, 0]);
    assert_eq!(arr, Array::default());

    let empty: Array<u32, 0> = Array::new();
    assert!(empty.is_empty());
    assert_eq!(empty.iter().count(), 0);
}

#[test]
fn test_access() {
    let mut arr = Array::from(['a', 'b', 'c']);
    assert_eq!(arr.try_get(2), Ok(&'c'));
    assert_eq!(arr.try_get(3), Err(IndexOutOfBounds { index: 3, len: 3 }));

    arr[0] = 'x';
    *arr.back_mut() = 'z';
    *arr.get_mut(1) = 'y';
    *arr.front_mut() = 'w';
    assert_eq!(arr.as_slice(), &['w', 'y', 'z']);

    assert_panics!({
        arr.get(3);
    });
    assert_panics!({
        let _value = &arr[10];
    });
}

#[test]
fn test_fill_and_cursors() {
    let mut arr: Array<u8, 5> = Array::new();
    arr.fill(3);
    assert_eq!(arr.into_inner(), [3; 5]);

    let mut cursor = arr.begin_mut();
    *cursor = 1;
    cursor += 4;
    *cursor = 9;
    assert_eq!(arr.data(), &[1, 3, 3, 3, 9]);

    let end = arr.end_mut();
    assert_eq!(end.offset(), 5);
    assert!(end.get().is_none(), "The end cursor shouldn't point at an element.");
}

#[test]
fn test_try_from_slice() {
    let source = [1, 2, 3];
    let arr = Array::<i32, 3>::try_from(&source[..]);
    assert_eq!(arr, Ok(Array::from([1, 2, 3])));

    let err = Array::<i32, 4>::try_from(&source[..]);
    assert_eq!(err, Err(LengthMismatch { expected: 4, found: 3 }));
}

#[test]
fn test_iteration() {
    let mut arr = Array::from([1, 2, 3]);
    for value in &mut arr {
        *value *= 10;
    }

    let mut total = 0;
    for value in &arr {
        total += value;
    }
    assert_eq!(total, 60);

    let owned = arr.into_inner();
    assert_eq!(owned, [10, 20, 30]);
    assert_eq!(arr.into_iter().rev().next(), Some(30));
}

#[test]
fn test_drop() {
    let counter = DropCounter::new();
    let arr = Array::from([counter.track(1), counter.track(2), counter.track(3)]);
    let copy = arr.clone();

    drop(arr);
    assert_eq!(counter.drops(), 3);
    drop(copy);
    assert_eq!(counter.drops(), 6, "Every element should be dropped exactly once.");
}

#[test]
fn test_zst_support() {
    let arr: Array<ZeroSizedType, 8> = Array::new();
    assert_eq!(arr.len(), 8);
    assert_eq!(arr[7], ZeroSizedType);
    assert_eq!(arr.iter().count(), 8);
}

#[test]
fn test_equality_and_hash() {
    let arr = Array::from([0_usize, 1, 2]);
    let other = Array::<usize, 3>::try_from(&[0_usize, 1, 2][..]).expect("The lengths match.");

    assert_eq!(arr, other);
    assert_ne!(arr, Array::from([0, 1, 3]));
    assert_eq!(&*arr, &[0, 1, 2], "Deref equality should be upheld.");

    let state = RandomState::new();
    assert_eq!(state.hash_one(arr), state.hash_one(other));
    assert_eq!(
        format!("{arr:?}"),
        "Array { contents: [0, 1, 2], len: 3 }"
    );
}
