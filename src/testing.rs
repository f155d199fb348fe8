//! Assertions for testing relations.

use crate::core::goal::Goal;
use crate::core::term::Term;

/// Assert that a goal fails
pub fn fails(goal: impl Goal) {
    let result = goal.run(1);
    assert!(result.is_empty(), "expected no solution, got {:?}", result);
}

/// Assert that a goal succeeds at least once
pub fn succeeds(goal: impl Goal) {
    let result = goal.run(1);
    assert!(!result.is_empty(), "expected a solution");
}

pub fn has_unique_solution(solutions: impl IntoIterator<Item = Term>, expected: Term) {
    let mut solutions = solutions.into_iter();
    assert_eq!(solutions.next(), Some(expected));
    assert_eq!(solutions.next(), None);
}
