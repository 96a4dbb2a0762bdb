use crate::FetchGeneration;

use googletest::prelude::*;
use tender_core::UserId;

#[test]
fn given_new_generation_when_token_issued_then_it_is_current() {
    let generation = FetchGeneration::new();

    let token = generation.issue(UserId::from(1));

    assert!(generation.is_current(&token));
    assert_that!(token.generation, eq(1u64));
}

#[test]
fn given_issued_token_when_another_issued_then_first_is_stale() {
    let generation = FetchGeneration::new();

    let first = generation.issue(UserId::from(1));
    let second = generation.issue(UserId::from(1));

    assert!(!generation.is_current(&first));
    assert!(generation.is_current(&second));
}

#[test]
fn given_issued_token_when_bumped_then_stale() {
    let generation = FetchGeneration::new();
    let token = generation.issue(UserId::from(1));

    generation.bump();

    assert!(!generation.is_current(&token));
    assert_that!(generation.current(), eq(2u64));
}
