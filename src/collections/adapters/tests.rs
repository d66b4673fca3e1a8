#![cfg(test)]

use super::*;
#[cfg(feature = "contiguous")]
use crate::collections::contiguous::Vector;
use crate::collections::linked::LinkedList;
use crate::util::alloc::DropCounter;

#[test]
fn test_queue_order() {
    let mut queue: Queue<i32> = Queue::new();
    assert_eq!(queue.pop(), None, "Popping an empty Queue should do nothing.");

    for i in 0..5 {
        queue.push(i);
    }
    assert_eq!(queue.len(), 5);
    assert_eq!(queue.front(), Some(&0));
    assert_eq!(queue.back(), Some(&4));

    for i in 0..5 {
        assert_eq!(queue.pop(), Some(i), "A Queue should pop in insertion order.");
    }
    assert!(queue.is_empty());
}

#[test]
#[cfg(feature = "contiguous")]
fn test_queue_over_vector() {
    let mut queue = Queue::from(Vector::from([1, 2]));
    queue.push(3);
    *queue.front_mut().expect("The Queue isn't empty.") += 10;
    *queue.back_mut().expect("The Queue isn't empty.") += 20;

    assert_eq!(queue.pop(), Some(11));
    assert_eq!(queue.pop(), Some(2));
    assert_eq!(&**queue.as_inner(), &[23]);

    let copy = queue.clone();
    queue.clear();
    assert!(queue.is_empty());
    assert_eq!(copy.into_inner(), Vector::from([23]));
}

#[test]
fn test_iteration_order() {
    let mut queue: Queue<i32> = Queue::new();
    let mut stack: Stack<i32> = Stack::new();
    for i in 1..=3 {
        queue.push(i);
        stack.push(i);
    }

    assert!(queue.iter().eq([1, 2, 3].iter()), "A Queue should iterate from front to back.");
    assert!(stack.iter().eq([1, 2, 3].iter()), "A Stack should iterate from bottom to top.");
    assert_eq!(queue.iter().len(), 3);

    queue.pop();
    stack.pop();
    assert!(queue.iter().eq([2, 3].iter()));
    assert!(stack.iter().eq([1, 2].iter()));
}

#[test]
#[cfg(feature = "contiguous")]
fn test_iteration_over_vector() {
    let queue = Queue::from(Vector::from(['a', 'b']));
    assert_eq!(queue.iter().copied().collect::<Vector<_>>(), Vector::from(['a', 'b']));
}

#[test]
fn test_stack_order() {
    let mut stack: Stack<i32> = Stack::default();
    for i in 0..5 {
        stack.push(i);
    }
    assert_eq!(stack.top(), Some(&4));

    for i in (0..5).rev() {
        assert_eq!(stack.pop(), Some(i), "A Stack should pop in reverse insertion order.");
    }
    assert_eq!(stack.pop(), None);
    assert_eq!(stack.top(), None);
}

#[test]
#[cfg(feature = "contiguous")]
fn test_stack_over_vector() {
    let mut stack: Stack<String, Vector<String>> = Stack::new();
    stack.emplace("a").push('!');
    stack.push(String::from("b"));
    stack.top_mut().expect("The Stack isn't empty.").push('?');

    assert_eq!(stack.len(), 2);
    assert_eq!(stack.pop().as_deref(), Some("b?"));
    assert_eq!(stack.top().map(String::as_str), Some("a!"));
    assert_eq!(
        format!("{stack:?}"),
        "Stack { inner: Vector { contents: [\"a!\"], len: 1, cap: 1 } }"
    );
}

#[test]
fn test_adapter_drops() {
    let counter = DropCounter::new();
    let mut queue = Queue::from(LinkedList::new());
    queue.emplace(counter.track(1));
    queue.push(counter.track(2));
    queue.pop();
    assert_eq!(counter.drops(), 1);

    drop(queue);
    assert_eq!(counter.drops(), 2, "The backing container should drop its items.");
}
