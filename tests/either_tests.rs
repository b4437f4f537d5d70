//! Unit tests for the Either type.

use combinars::control::Either;
use rstest::rstest;

#[rstest]
fn test_is_left_and_is_right() {
    let left: Either<i32, String> = Either::Left(42);
    let right: Either<i32, String> = Either::Right("hello".to_string());
    assert!(left.is_left());
    assert!(!left.is_right());
    assert!(right.is_right());
}

#[rstest]
fn test_left_and_right_extraction() {
    let left: Either<i32, String> = Either::Left(42);
    assert_eq!(left.clone().left(), Some(42));
    assert_eq!(left.right(), None);
}

#[rstest]
fn test_map_left_leaves_right_untouched() {
    let right: Either<i32, String> = Either::Right("hello".to_string());
    assert_eq!(right.clone().map_left(|n| n + 1), right);
}

#[rstest]
fn test_bimap_applies_matching_function() {
    let left: Either<i32, String> = Either::Left(20);
    let right: Either<i32, String> = Either::Right("abc".to_string());
    assert_eq!(left.bimap(|n| n * 2, |s| s.len()), Either::Left(40));
    assert_eq!(right.bimap(|n| n * 2, |s| s.len()), Either::Right(3));
}

#[rstest]
fn test_fold_collapses_both_variants() {
    let left: Either<i32, String> = Either::Left(42);
    let right: Either<i32, String> = Either::Right("hello".to_string());
    assert_eq!(left.fold(|n| n.to_string(), |s| s), "42");
    assert_eq!(right.fold(|n| n.to_string(), |s| s), "hello");
}

#[rstest]
fn test_swap_exchanges_variants() {
    let left: Either<i32, String> = Either::Left(42);
    assert_eq!(left.swap(), Either::Right(42));
}

#[rstest]
fn test_result_conversions() {
    let ok: Result<i32, String> = Ok(42);
    let either: Either<String, i32> = ok.into();
    assert_eq!(either, Either::Right(42));
    let back: Result<i32, String> = either.into();
    assert_eq!(back, Ok(42));
}
