#![cfg(feature = "async")]
//! Unit tests for the TaskEither type.

use combinars::effect::{IO, Task, TaskEither};
use std::cell::Cell;
use std::rc::Rc;

#[tokio::test]
async fn test_right_and_left() {
    let success: TaskEither<String, i32> = TaskEither::right(42);
    assert_eq!(success.run().await, Ok(42));

    let failure: TaskEither<String, i32> = TaskEither::left("boom".to_string());
    assert_eq!(failure.run().await, Err("boom".to_string()));
}

#[tokio::test]
async fn test_from_result_round_trips() {
    let ok: TaskEither<String, i32> = TaskEither::from_result(Ok(1));
    assert_eq!(ok.run().await, Ok(1));
    let err: TaskEither<String, i32> = TaskEither::from_result(Err("bad".to_string()));
    assert_eq!(err.run().await, Err("bad".to_string()));
}

#[tokio::test]
async fn test_right_task_and_left_task() {
    let success: TaskEither<String, i32> = TaskEither::right_task(Task::pure(1));
    assert_eq!(success.run().await, Ok(1));
    let failure: TaskEither<String, i32> = TaskEither::left_task(Task::pure("e".to_string()));
    assert_eq!(failure.run().await, Err("e".to_string()));
}

#[tokio::test]
async fn test_from_io_reruns_action_per_invocation() {
    let counter = Rc::new(Cell::new(0));
    let observed = counter.clone();
    let io = IO::new(move || {
        observed.set(observed.get() + 1);
        observed.get()
    });
    let computation: TaskEither<String, i32> = TaskEither::from_io(io);
    assert_eq!(computation.run().await, Ok(1));
    assert_eq!(computation.run().await, Ok(2));
}

#[tokio::test]
async fn test_from_io_either_lifts_failures() {
    let io: IO<Result<i32, String>> = IO::new(|| Err("io failure".to_string()));
    let computation = TaskEither::from_io_either(io);
    assert_eq!(computation.run().await, Err("io failure".to_string()));
}

#[tokio::test]
async fn test_fmap_only_touches_success_channel() {
    let success: TaskEither<String, i32> = TaskEither::right(21).fmap(|x| x * 2);
    assert_eq!(success.run().await, Ok(42));

    let failure: TaskEither<String, i32> =
        TaskEither::left("boom".to_string()).fmap(|x: i32| x * 2);
    assert_eq!(failure.run().await, Err("boom".to_string()));
}

#[tokio::test]
async fn test_bimap_and_map_left() {
    let failure: TaskEither<String, i32> = TaskEither::left("boom".to_string());
    let mapped = failure.bimap(|e| e.len(), |a: i32| a + 1);
    assert_eq!(mapped.run().await, Err(4));

    let relabeled: TaskEither<usize, i32> =
        TaskEither::<String, i32>::left("boom".to_string()).map_left(|e| e.len());
    assert_eq!(relabeled.run().await, Err(4));
}

#[tokio::test]
async fn test_flat_map_short_circuits_on_failure() {
    let invoked = Rc::new(Cell::new(false));
    let observed = invoked.clone();
    let computation: TaskEither<String, i32> =
        TaskEither::left("boom".to_string()).flat_map(move |value| {
            observed.set(true);
            TaskEither::right(value)
        });
    assert_eq!(computation.run().await, Err("boom".to_string()));
    assert!(!invoked.get());
}

#[tokio::test]
async fn test_or_else_recovers_from_failure() {
    let recovered: TaskEither<String, i32> =
        TaskEither::left("boom".to_string()).or_else(|| TaskEither::right(42));
    assert_eq!(recovered.run().await, Ok(42));

    let untouched: TaskEither<String, i32> =
        TaskEither::right(1).or_else(|| TaskEither::right(42));
    assert_eq!(untouched.run().await, Ok(1));
}

#[tokio::test]
async fn test_fold_collapses_both_channels() {
    let success: TaskEither<String, i32> = TaskEither::right(42);
    assert_eq!(success.fold(|e| e.len() as i32, |a| a).run().await, 42);

    let failure: TaskEither<String, i32> = TaskEither::left("boom".to_string());
    assert_eq!(failure.fold(|e| e.len() as i32, |a| a).run().await, 4);
}

#[tokio::test]
async fn test_swap_exchanges_channels() {
    let success: TaskEither<String, i32> = TaskEither::right(42);
    assert_eq!(success.swap().run().await, Err(42));
}
