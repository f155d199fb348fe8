use crate::core::goal::{BoxedGoal, Goal};
use crate::core::logic_variable::Var;
use crate::core::state::State;
use crate::core::stream::Stream;
use crate::core::term::Term;
use crate::goals::combinators::disj2;
use std::sync::Arc;
use tracing::trace;

/// Creates a goal that succeeds if `u` and `v` unify.
pub fn eq(u: impl Into<Term>, v: impl Into<Term>) -> impl Goal {
    let u = u.into();
    let v = v.into();
    move |s: State| match s.substitution().unify(&u, &v) {
        Ok(sub) => Stream::singleton(s.with_substitution(sub)),
        Err(failure) => {
            trace!(%failure, "unification failed");
            Stream::empty()
        }
    }
}

pub fn succeed() -> impl Goal {
    |s: State| Stream::singleton(s)
}

pub fn fail() -> impl Goal {
    |_: State| -> Stream<State> { Stream::empty() }
}

/// Creates a goal that introduces a fresh variable.
///
/// The variable is numbered by the state's counter and handed to `f`;
/// the goal `f` builds runs on the state that follows.
pub fn call_fresh<G: Goal>(f: impl Fn(Var) -> G + Send + Sync + 'static) -> impl Goal {
    move |s: State| {
        let (var, s) = s.fresh_var();
        trace!(var = var.id(), "introduced fresh variable");
        f(var).apply(s)
    }
}

/// Creates a goal that builds `f()` and applies it only once the stream is forced.
///
/// This is how a goal refers to itself:
///
/// ```
/// use micro_kanren::prelude::*;
///
/// fn fives(x: Var) -> impl Goal {
///     disj2(eq(x, 5), suspend(move || fives(x)))
/// }
///
/// let results = call_fresh(fives).run(3);
/// assert_eq!(results.len(), 3);
/// ```
pub fn suspend<G: Goal>(f: impl Fn() -> G + Send + Sync + 'static) -> BoxedGoal {
    let f = Arc::new(f);
    let goal = move |s: State| {
        let f = f.clone();
        Stream::suspension(move || f().apply(s))
    };
    goal.boxed()
}

/// Creates a goal that never produces a state.
pub fn nevero() -> impl Goal {
    |s: State| Stream::suspension(move || nevero().apply(s))
}

/// Creates a goal that succeeds an unbounded number of times.
pub fn alwayso() -> impl Goal {
    |s: State| Stream::suspension(move || disj2(succeed(), alwayso()).apply(s))
}
