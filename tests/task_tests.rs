#![cfg(feature = "async")]
//! Unit tests for the Task type.

use combinars::effect::Task;
use std::cell::Cell;
use std::rc::Rc;

#[tokio::test]
async fn test_pure_produces_value() {
    let task = Task::pure(42);
    assert_eq!(task.run().await, 42);
}

#[tokio::test]
async fn test_each_run_starts_a_fresh_unit_of_work() {
    let counter = Rc::new(Cell::new(0));
    let observed = counter.clone();
    let task = Task::new(move || {
        observed.set(observed.get() + 1);
        let count = observed.get();
        async move { count }
    });
    assert_eq!(counter.get(), 0);
    assert_eq!(task.run().await, 1);
    assert_eq!(task.run().await, 2);
}

#[tokio::test]
async fn test_fmap_transforms_result() {
    let task = Task::pure(21).fmap(|x| x * 2);
    assert_eq!(task.run().await, 42);
}

#[tokio::test]
async fn test_flat_map_sequences_strictly() {
    let order = Rc::new(std::cell::RefCell::new(Vec::new()));
    let first_order = order.clone();
    let second_order = order.clone();
    let task = Task::new(move || {
        first_order.borrow_mut().push("first");
        async { 1 }
    })
    .flat_map(move |x| {
        let second_order = second_order.clone();
        Task::new(move || {
            second_order.borrow_mut().push("second");
            async move { x + 1 }
        })
    });
    assert_eq!(task.run().await, 2);
    assert_eq!(*order.borrow(), vec!["first", "second"]);
}

#[tokio::test]
async fn test_then_discards_first_result() {
    let task = Task::pure("ignored").then(Task::pure(42));
    assert_eq!(task.run().await, 42);
}

#[tokio::test]
async fn test_map2_and_product() {
    let task = Task::pure(2).map2(Task::pure(21), |a, b| a * b);
    assert_eq!(task.run().await, 42);
    let paired = Task::pure(1).product(Task::pure("x"));
    assert_eq!(paired.run().await, (1, "x"));
}

#[tokio::test(start_paused = true)]
async fn test_delay_completes_after_duration() {
    let task = Task::delay(std::time::Duration::from_millis(10)).then(Task::pure(42));
    assert_eq!(task.run().await, 42);
}
