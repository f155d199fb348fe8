use crate::core::logic_variable::Var;
use crate::core::term::Term;
use thiserror::Error;

/// Why a unification did not succeed.
///
/// Failing is ordinary: a goal turns any `Failure` into the empty stream.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Failure {
    #[error("cannot unify {left:?} with {right:?}")]
    Mismatch { left: Term, right: Term },

    #[error("{var:?} occurs in {term:?}")]
    Occurs { var: Var, term: Term },
}

impl Failure {
    pub fn is_occurs_check(&self) -> bool {
        matches!(self, Failure::Occurs { .. })
    }
}
