use crate::core::logic_variable::Var;
use crate::core::substitution::Substitution;
use crate::core::term::Term;

/// A substitution together with the number of the next fresh variable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct State {
    substitution: Substitution,
    counter: usize,
}

impl State {
    pub fn new(substitution: Substitution, counter: usize) -> Self {
        State {
            substitution,
            counter,
        }
    }

    /// The state goals start from: nothing bound, no variables handed out.
    pub fn empty() -> Self {
        State::default()
    }

    pub fn substitution(&self) -> &Substitution {
        &self.substitution
    }

    pub fn counter(&self) -> usize {
        self.counter
    }

    /// Same counter, different substitution.
    pub fn with_substitution(&self, substitution: Substitution) -> Self {
        State {
            substitution,
            counter: self.counter,
        }
    }

    /// Mint a variable numbered after the counter and the state that follows it.
    pub fn fresh_var(&self) -> (Var, State) {
        let var = Var::from_id(self.counter);
        let next = State {
            substitution: self.substitution.clone(),
            counter: self.counter + 1,
        };
        (var, next)
    }

    pub fn resolve(&self, term: &Term) -> Term {
        self.substitution.resolve(term)
    }

    pub fn reify(&self, term: &Term) -> Term {
        self.substitution.reify(term)
    }
}
