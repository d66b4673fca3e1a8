#![cfg(test)]

use proptest::prelude::*;

use crate::collections::contiguous::Vector;
use crate::collections::contiguous::vector::{grow_cap, is_over_allocated};
use crate::collections::linked::LinkedList;

#[derive(Debug, Clone)]
enum VectorOp {
    Push(i32),
    Pop,
    Insert(usize, i32),
    InsertN(usize, i32, usize),
    Erase(usize, usize),
    Remove(usize),
    Reserve(usize),
    Resize(usize, i32),
    Clear,
}

fn vector_op() -> impl Strategy<Value = VectorOp> {
    prop_oneof![
        4 => any::<i32>().prop_map(VectorOp::Push),
        3 => Just(VectorOp::Pop),
        1 => (any::<usize>(), any::<i32>()).prop_map(|(i, v)| VectorOp::Insert(i, v)),
        1 => (any::<usize>(), any::<i32>(), 0_usize..80)
            .prop_map(|(i, v, n)| VectorOp::InsertN(i, v, n)),
        1 => (any::<usize>(), 0_usize..80).prop_map(|(i, n)| VectorOp::Erase(i, n)),
        1 => any::<usize>().prop_map(VectorOp::Remove),
        1 => (0_usize..300).prop_map(VectorOp::Reserve),
        1 => (0_usize..300, any::<i32>()).prop_map(|(n, v)| VectorOp::Resize(n, v)),
        1 => Just(VectorOp::Clear),
    ]
}

#[derive(Debug, Clone)]
enum ListOp {
    PushFront(i32),
    PushBack(i32),
    PopFront,
    PopBack,
    Insert(usize, i32),
    Remove(usize),
    EraseRange(usize, usize),
    Append(Vec<i32>),
}

fn list_op() -> impl Strategy<Value = ListOp> {
    prop_oneof![
        3 => any::<i32>().prop_map(ListOp::PushFront),
        3 => any::<i32>().prop_map(ListOp::PushBack),
        2 => Just(ListOp::PopFront),
        2 => Just(ListOp::PopBack),
        1 => (any::<usize>(), any::<i32>()).prop_map(|(i, v)| ListOp::Insert(i, v)),
        1 => any::<usize>().prop_map(ListOp::Remove),
        1 => (0_usize..40, 0_usize..40).prop_map(|(a, b)| ListOp::EraseRange(a, b)),
        1 => proptest::collection::vec(any::<i32>(), 0..10).prop_map(ListOp::Append),
    ]
}

proptest! {
    // After N pushes, the Vector holds exactly the pushed values and grew by the policy.
    #[test]
    fn test_push_keeps_values(ref values in proptest::collection::vec(any::<i32>(), 0..500)) {
        let mut vec = Vector::new();
        for &value in values.iter() {
            let old_cap = vec.cap();
            vec.push(value);
            if vec.cap() != old_cap {
                prop_assert_eq!(vec.cap(), grow_cap(vec.len()));
            }
            prop_assert!(vec.cap() >= vec.len());
            prop_assert!(vec.cap() <= usize::max(vec.len() * 3 / 2, vec.len() + 50));
        }
        prop_assert_eq!(vec.len(), values.len());
        prop_assert_eq!(&*vec, values.as_slice());
    }

    // Any sequence of operations matches a model, and the capacity policies always hold.
    #[test]
    fn test_vector_matches_model(ref ops in proptest::collection::vec(vector_op(), 0..200)) {
        let mut vec = Vector::new();
        let mut model: Vec<i32> = Vec::new();

        for op in ops.iter().cloned() {
            match op {
                VectorOp::Push(value) => {
                    let old_cap = vec.cap();
                    vec.push(value);
                    model.push(value);
                    if vec.cap() != old_cap {
                        prop_assert_eq!(vec.cap(), grow_cap(vec.len()));
                    }
                },
                VectorOp::Pop => {
                    let popped = vec.pop();
                    prop_assert_eq!(popped, model.pop());
                    // Popping an empty Vector is a no-op, so only a real removal shrinks.
                    if popped.is_some() {
                        prop_assert!(!is_over_allocated(vec.len(), vec.cap()));
                    }
                },
                VectorOp::Insert(index, value) => {
                    let index = index % (model.len() + 1);
                    prop_assert!(vec.try_insert(index, value).is_ok());
                    model.insert(index, value);
                },
                VectorOp::InsertN(index, value, count) => {
                    // Also reaches past the end, which fills the gap with zeroes.
                    let index = index % (model.len() + 20);
                    vec.insert_n(index, value, count);
                    if index > model.len() {
                        model.resize(index, 0);
                    }
                    model.splice(index..index, std::iter::repeat_n(value, count));
                },
                VectorOp::Erase(index, count) => {
                    let index = index % (model.len() + 5);
                    let old_cap = vec.cap();
                    vec.erase(index, count);
                    if index < model.len() {
                        let end = usize::min(model.len(), index.saturating_add(count));
                        model.drain(index..end);
                        prop_assert!(!is_over_allocated(vec.len(), vec.cap()));
                    } else {
                        prop_assert_eq!(vec.cap(), old_cap);
                    }
                },
                VectorOp::Remove(index) => {
                    let index = index % (model.len() + 1);
                    if index < model.len() {
                        prop_assert_eq!(vec.remove(index), model.remove(index));
                        prop_assert!(!is_over_allocated(vec.len(), vec.cap()));
                    } else {
                        prop_assert!(vec.try_remove(index).is_err());
                    }
                },
                VectorOp::Reserve(cap) => {
                    let old_cap = vec.cap();
                    vec.reserve(cap);
                    prop_assert_eq!(vec.cap(), usize::max(cap, old_cap));
                },
                VectorOp::Resize(len, value) => {
                    let old_cap = vec.cap();
                    let changed = len != vec.len();
                    vec.resize(len, value);
                    model.resize(len, value);
                    if changed {
                        prop_assert_eq!(vec.cap(), grow_cap(len));
                    } else {
                        prop_assert_eq!(vec.cap(), old_cap);
                    }
                },
                VectorOp::Clear => {
                    vec.clear();
                    model.clear();
                    prop_assert_eq!(vec.cap(), 0);
                },
            }

            prop_assert!(vec.cap() >= vec.len());
            prop_assert_eq!(vec.as_ptr().is_null(), vec.cap() == 0);
            prop_assert_eq!(&*vec, model.as_slice());
        }
    }

    // Any sequence of operations keeps the links of a LinkedList consistent.
    #[test]
    fn test_list_matches_model(ref ops in proptest::collection::vec(list_op(), 0..200)) {
        let mut list = LinkedList::new();
        let mut model: Vec<i32> = Vec::new();

        for op in ops.iter().cloned() {
            match op {
                ListOp::PushFront(value) => {
                    list.push_front(value);
                    model.insert(0, value);
                },
                ListOp::PushBack(value) => {
                    list.push_back(value);
                    model.push(value);
                },
                ListOp::PopFront => {
                    let expected = if model.is_empty() { None } else { Some(model.remove(0)) };
                    prop_assert_eq!(list.pop_front(), expected);
                },
                ListOp::PopBack => {
                    prop_assert_eq!(list.pop_back(), model.pop());
                },
                ListOp::Insert(index, value) => {
                    let index = index % (model.len() + 2);
                    if index <= model.len() {
                        list.insert(index, value);
                        model.insert(index, value);
                    } else {
                        prop_assert!(list.try_insert(index, value).is_err());
                    }
                },
                ListOp::Remove(index) => {
                    let index = index % (model.len() + 1);
                    if index < model.len() {
                        prop_assert_eq!(list.remove(index), model.remove(index));
                    } else {
                        prop_assert!(list.try_remove(index).is_err());
                    }
                },
                ListOp::EraseRange(start, end) => {
                    list.erase_range(start..end);
                    let end = usize::min(end, model.len());
                    if start < end {
                        model.drain(start..end);
                    }
                },
                ListOp::Append(values) => {
                    list.append(values.iter().copied().collect());
                    model.extend(values);
                },
            }

            list.verify_double_links();
            prop_assert_eq!(list.len(), model.len());
            prop_assert!(list.iter().eq(model.iter()));
            prop_assert!(list.iter().rev().eq(model.iter().rev()));
            prop_assert_eq!(list.back(), model.last());
        }
    }
}
