//! A microKANREN core: terms, unification with occurs-check, and goals
//! that search lazily and fairly through a stream of states.
//!
//! ```
//! use micro_kanren::prelude::*;
//! use micro_kanren::{disj, run};
//!
//! let answers = run!(*, q, disj!(eq(q, "olive"); eq(q, "oil")));
//! assert_eq!(answers, vec![Term::new("olive"), Term::new("oil")]);
//! ```

#[macro_use]
pub mod macros;
pub mod core;
pub mod goals;
pub mod prelude;
pub mod testing;


use crate::core::goal::Goal;
use crate::core::logic_variable::Var;
use crate::core::state::State;
use crate::core::term::Term;
use crate::goals::primitive::call_fresh;

/// Run the goal `f` builds for a fresh query variable and reify the
/// query variable in at most `n` solutions.
pub fn run<G: Goal>(n: usize, f: impl Fn(Var) -> G + Send + Sync + 'static) -> Vec<Term> {
    let (q, _) = State::empty().fresh_var();
    let q = Term::var(q);
    call_fresh(f)
        .run(n)
        .iter()
        .map(|s| s.reify(&q))
        .collect()
}

/// Like [`run`], but for all solutions.
pub fn run_all<G: Goal>(f: impl Fn(Var) -> G + Send + Sync + 'static) -> Vec<Term> {
    let (q, _) = State::empty().fresh_var();
    let q = Term::var(q);
    call_fresh(f)
        .run_all()
        .iter()
        .map(|s| s.reify(&q))
        .collect()
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn run_reifies_the_query_variable() {
        assert_eq!(run!(*, q, eq(q, 1)), vec![Term::new(1)]);
        assert_eq!(run!(*, q, eq(1, 2)), Vec::<Term>::new());
        assert_eq!(run!(*, q, succeed()), vec![Term::new(ReifiedVar(0))]);
    }

    #[test]
    #[deny(unused_variables)]
    fn queries_may_ignore_the_query_variable() {
        assert!(run!(*, q, fail()).is_empty());
        assert_eq!(run!(1, q, succeed()).len(), 1);
    }

    #[test]
    fn run_with_bound_takes_only_that_many() {
        assert_eq!(run!(3, q, alwayso()).len(), 3);
        assert_eq!(run!(0, q, nevero()), Vec::<Term>::new());
        assert_eq!(run!(5, q, disj!(eq(q, 1); eq(q, 2))).len(), 2);
    }

    #[test]
    fn run_several_variables() {
        let answers = run!(*, (x, y), eq(x, "split"), eq(y, "pea"));
        assert_eq!(
            answers,
            vec![Term::from(vec![Term::new("split"), Term::new("pea")])]
        );
    }

    #[test]
    fn fresh_variables_are_reified_in_order() {
        let answers = run!(*, q, fresh!((x, y), eq(vec![Term::var(x), Term::var(y)], q)));
        assert_eq!(
            answers,
            vec![Term::from(vec![
                Term::new(ReifiedVar(0)),
                Term::new(ReifiedVar(1))
            ])]
        );
        assert_eq!(format!("{:?}", answers[0]), "(_.0 _.1)");
    }

    #[test]
    fn shared_fresh_variables_get_the_same_name() {
        let answers = run!(*, q, fresh!((x), eq(Term::cons(x, x), q)));
        assert_eq!(format!("{:?}", answers[0]), "(_.0 . _.0)");
    }

    #[test]
    fn conj_macro_chains_goals() {
        let answers = run!(*, q, fresh!((x, y), conj!(eq(x, 1), eq(y, 2), eq(Term::cons(x, y), q))));
        assert_eq!(answers, vec![Term::cons(1, 2)]);
    }

    #[test]
    fn empty_macros_fail_and_succeed() {
        assert!(run!(*, q, disj!()).is_empty());
        assert_eq!(run!(*, q, conj!()).len(), 1);
    }
}
