#![cfg(feature = "async")]
//! Law tests for the StateReaderTaskEither computation.
//!
//! Verifies the Monad laws:
//! - Left Identity: `pure(a).flat_map(f) == f(a)`
//! - Right Identity: `m.flat_map(pure) == m`
//! - Associativity: `m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`
//!
//! the Bifunctor laws:
//! - Identity: `m.bimap(id, id) == m`
//! - Composition: `m.bimap(f1, g1).bimap(f2, g2) == m.bimap(f2 . f1, g2 . g1)`
//!
//! and the MonadState laws:
//! - Get Put: `get().flat_map(put) == pure(())`
//! - Put Put: `put(s1).then(put(s2)) == put(s2)`

use combinars::effect::StateReaderTaskEither;
use rstest::rstest;

type Computation<A> = StateReaderTaskEither<i32, i32, String, A>;

async fn observe<A>(computation: &Computation<A>, state: i32, environment: i32) -> Result<(A, i32), String> {
    computation.run(state, environment).run().await
}

// =============================================================================
// Monad Laws
// =============================================================================

#[rstest]
#[case(0, 0)]
#[case(5, -3)]
#[case(-17, 99)]
#[tokio::test]
async fn law_monad_left_identity(#[case] state: i32, #[case] environment: i32) {
    let function = |a: i32| -> Computation<i32> {
        StateReaderTaskEither::modify(move |s: i32| s + a)
            .then(StateReaderTaskEither::right(a * 2))
    };

    let left: Computation<i32> = StateReaderTaskEither::pure(7).flat_map(function);
    let right = function(7);

    assert_eq!(
        observe(&left, state, environment).await,
        observe(&right, state, environment).await
    );
}

#[rstest]
#[case(0, 0)]
#[case(5, -3)]
#[tokio::test]
async fn law_monad_right_identity(#[case] state: i32, #[case] environment: i32) {
    let make = || -> Computation<i32> {
        StateReaderTaskEither::gets(|s: &i32| s * 2)
            .flat_map(|v| StateReaderTaskEither::put(v).then(StateReaderTaskEither::right(v)))
    };

    let left = make().flat_map(StateReaderTaskEither::pure);
    let right = make();

    assert_eq!(
        observe(&left, state, environment).await,
        observe(&right, state, environment).await
    );
}

#[rstest]
#[case(0, 0)]
#[case(5, -3)]
#[tokio::test]
async fn law_monad_associativity(#[case] state: i32, #[case] environment: i32) {
    let function = |a: i32| -> Computation<i32> {
        StateReaderTaskEither::modify(move |s: i32| s + a).then(StateReaderTaskEither::right(a + 1))
    };
    let another = |b: i32| -> Computation<i32> {
        StateReaderTaskEither::gets(move |s: &i32| s * b)
    };

    let left = StateReaderTaskEither::pure(3)
        .flat_map(function)
        .flat_map(another);
    let right: Computation<i32> = StateReaderTaskEither::pure(3)
        .flat_map(move |x| function(x).flat_map(another));

    assert_eq!(
        observe(&left, state, environment).await,
        observe(&right, state, environment).await
    );
}

// =============================================================================
// Bifunctor Laws
// =============================================================================

#[tokio::test]
async fn law_bifunctor_identity() {
    let success: Computation<i32> = StateReaderTaskEither::right(42);
    let mapped = success.clone().bimap(|e: String| e, |a| a);
    assert_eq!(observe(&success, 0, 0).await, observe(&mapped, 0, 0).await);

    let failure: Computation<i32> = StateReaderTaskEither::left("boom".to_string());
    let mapped = failure.clone().bimap(|e: String| e, |a| a);
    assert_eq!(observe(&failure, 0, 0).await, observe(&mapped, 0, 0).await);
}

#[tokio::test]
async fn law_bifunctor_composition() {
    let first_left = |e: String| e.len();
    let second_left = |n: usize| n * 2;
    let first_right = |a: i32| a + 1;
    let second_right = |a: i32| a * 10;

    let failure: Computation<i32> = StateReaderTaskEither::left("boom".to_string());
    let stepwise = failure
        .clone()
        .bimap(first_left, first_right)
        .bimap(second_left, second_right);
    let composed = failure.bimap(
        move |e| second_left(first_left(e)),
        move |a| second_right(first_right(a)),
    );
    assert_eq!(
        stepwise.run(0, 0).run().await,
        composed.run(0, 0).run().await
    );
}

// =============================================================================
// MonadState Laws
// =============================================================================

#[rstest]
#[case(0)]
#[case(41)]
#[tokio::test]
async fn law_get_put_round_trip(#[case] state: i32) {
    let round_trip: Computation<()> =
        StateReaderTaskEither::get().flat_map(StateReaderTaskEither::put);
    let identity: Computation<()> = StateReaderTaskEither::pure(());
    assert_eq!(
        observe(&round_trip, state, 0).await,
        observe(&identity, state, 0).await
    );
}

#[rstest]
#[case(0)]
#[case(41)]
#[tokio::test]
async fn law_put_put_keeps_last(#[case] state: i32) {
    let both: Computation<()> =
        StateReaderTaskEither::put(1).then(StateReaderTaskEither::put(2));
    let last: Computation<()> = StateReaderTaskEither::put(2);
    assert_eq!(observe(&both, state, 0).await, observe(&last, state, 0).await);
}
