//! Compose goals using combinators to build more complex goals
//!

use crate::core::goal::{BoxedGoal, Goal};
use crate::core::state::State;
use crate::core::stream::{Continuation, Stream};
use crate::goals::primitive::{fail, succeed};
use std::sync::Arc;

/// Creates a goal that succeeds if either of its subgoals succeeds.
///
/// Both subgoals start from the same state; their streams are interleaved.
pub fn disj2(g1: impl Goal, g2: impl Goal) -> impl Goal {
    move |s: State| Stream::mplus(g1.apply(s.clone()), g2.apply(s))
}

/// Creates a goal that succeeds if both of its subgoals succeed.
///
/// Every state `g1` produces is passed on to `g2`.
pub fn conj2(g1: impl Goal, g2: impl Goal) -> impl Goal {
    let g2: Continuation<State> = Arc::new(move |s: State| g2.apply(s));
    move |s: State| g1.apply(s).bind(g2.clone())
}

/// Creates a goal that succeeds if any of `goals` succeeds.
pub fn disj_all(goals: impl IntoIterator<Item = BoxedGoal>) -> BoxedGoal {
    let goals: Vec<_> = goals.into_iter().collect();
    let mut iter = goals.into_iter().rev();
    match iter.next() {
        None => fail().boxed(),
        Some(last) => iter.fold(last, |rest, g| disj2(g, rest).boxed()),
    }
}

/// Creates a goal that succeeds if all of `goals` succeed.
pub fn conj_all(goals: impl IntoIterator<Item = BoxedGoal>) -> BoxedGoal {
    let goals: Vec<_> = goals.into_iter().collect();
    let mut iter = goals.into_iter().rev();
    match iter.next() {
        None => succeed().boxed(),
        Some(last) => iter.fold(last, |rest, g| conj2(g, rest).boxed()),
    }
}
