#![cfg(test)]

use super::*;
use crate::collections::contiguous::Vector;
use crate::util::panic::assert_panics;

#[test]
fn test_arithmetic() {
    let vec = Vector::from([10, 20, 30, 40, 50]);
    let begin = vec.begin();
    let end = vec.end();

    assert_eq!(end - begin, 5, "Distance from begin to end should equal the length.");
    assert_eq!(begin - end, -5, "Distance should be signed.");

    let mut cursor = begin + 3;
    assert_eq!(*cursor, 40);
    cursor -= 2;
    assert_eq!(*cursor, 20);
    assert_eq!(*(2 + cursor), 40, "Addition should be commutative.");
    assert_eq!(cursor[2], 40, "Indexing a cursor shouldn't move it.");
    assert_eq!(*cursor, 20);
    assert_eq!(cursor.offset(), 1);
}

#[test]
fn test_increment_and_decrement() {
    let vec = Vector::from([1, 2, 3]);
    let mut cursor = vec.begin();

    assert_eq!(**cursor.inc(), 2, "Pre-increment should yield the moved cursor.");
    assert_eq!(*cursor.post_inc(), 2, "Post-increment should yield the previous position.");
    assert_eq!(*cursor, 3);
    assert_eq!(*cursor.post_dec(), 3);
    assert_eq!(**cursor.dec(), 1);
    assert_eq!(cursor, vec.begin());
}

#[test]
fn test_ordering() {
    let vec = Vector::from([1, 2, 3]);
    let begin = vec.begin();
    let mid = begin + 1;

    assert!(begin < mid);
    assert!(mid > begin);
    assert!(mid <= mid);
    assert!(vec.end() >= mid);
    assert_ne!(begin, mid);
}

#[test]
fn test_walk_begin_to_end() {
    let vec = Vector::from(['a', 'b', 'c']);
    let mut seen = Vector::new();

    let mut cursor = vec.begin();
    while cursor != vec.end() {
        seen.push(*cursor);
        cursor.inc();
    }

    assert_eq!(&*seen, &['a', 'b', 'c']);
    assert_eq!(
        vec.begin().to(vec.end()).count(),
        3,
        "A begin to end range should visit every element."
    );
    assert_eq!(
        (vec.begin() - 4).to(vec.end() + 4).count(),
        3,
        "Ranges should be clamped to the storage."
    );
    assert_eq!(vec.end().to(vec.begin()).count(), 0, "Reversed ranges should be empty.");
}

#[test]
fn test_out_of_bounds_reads() {
    let vec = Vector::from([1, 2, 3]);

    assert_eq!(vec.end().get(), None, "The end cursor shouldn't point at an element.");
    assert_eq!((vec.begin() - 1).get(), None);
    assert_eq!(
        vec.end().try_get(),
        Err(crate::util::error::OffsetOutOfBounds { offset: 3, len: 3 })
    );

    assert_panics!({
        let vec = Vector::from([1, 2, 3]);
        let _value = &*vec.end();
    });
    assert_panics!({
        let vec = Vector::from([1, 2, 3]);
        let _value = &vec.begin()[-1];
    });
}

#[test]
fn test_cursor_mut() {
    let mut vec = Vector::from([1, 2, 3, 4]);

    let mut cursor = vec.begin_mut();
    *cursor = 100;
    cursor += 2;
    cursor[1] = 400;
    cursor.dec();
    *cursor.get_mut().expect("cursor should be in bounds") += 1;
    assert_eq!(cursor.offset(), 1);

    let read_only: Cursor<'_, _> = cursor.into();
    assert_eq!(*read_only, 3, "Conversion should keep the position.");
    assert_eq!(&*vec, &[100, 3, 3, 400]);

    for value in vec.begin_mut().until(2) {
        *value = 0;
    }
    assert_eq!(&*vec, &[0, 0, 3, 400]);

    let mut end = vec.end_mut();
    assert!(end.get_mut().is_none());
    assert!(end.try_get_mut().is_err());
    end.dec();
    assert_eq!(end.into_mut(), Some(&mut 400));
}
