use crate::core::atom::Atomic;

/// Logic variable.
///
/// A variable is nothing but a number. Numbers are handed out by
/// [`State::fresh_var`](crate::core::state::State::fresh_var), which threads
/// the counter explicitly, so two variables are the same iff their numbers are.
/// Variables can be copied, which preserves identity.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Var(usize);

impl Var {
    /// Create the variable with number `id`.
    ///
    /// Goals never need this; fresh variables come from the state.
    pub(crate) fn from_id(id: usize) -> Self {
        Var(id)
    }

    /// Return the variable's number.
    pub fn id(&self) -> usize {
        self.0
    }
}

impl std::fmt::Debug for Var {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Reified logic variable.
///
/// Reified variables represent logic variables that remain fresh
/// after goals have run.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct ReifiedVar(pub usize);

impl Atomic for ReifiedVar {}

impl std::fmt::Debug for ReifiedVar {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", reify_name(self.0))
    }
}

impl std::fmt::Display for ReifiedVar {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", reify_name(self.0))
    }
}

/// Label of the `n`-th fresh variable met while reifying.
pub fn reify_name(n: usize) -> String {
    format!("_.{}", n)
}
