//! Split a list into all pairs of prefix and suffix

use micro_kanren::prelude::*;
use micro_kanren::{conj, disj, fresh, run};

/// Create a goal that succeeds if `out` is `l` followed by `s`
fn appendo(l: Var, s: Var, out: Var) -> BoxedGoal {
    suspend(move || {
        disj!(
            conj!(eq(l, ()), eq(s, out));
            fresh!(
                (a, d, res),
                eq(Term::cons(a, d), l),
                eq(Term::cons(a, res), out),
                appendo(d, s, res)
            )
        )
    })
}

fn main() {
    let list = || Term::from(vec![Term::new(1), Term::new(2), Term::new(3)]);

    println!(
        "Ways to split (1 2 3): {:?}",
        run!(*, (x, y), fresh!((l), eq(l, list()), appendo(x, y, l)))
    );

    println!(
        "What goes in front of (3) to make (1 2 3)? {:?}",
        run!(*, q, fresh!((s, out), eq(s, vec![Term::new(3)]), eq(out, list()), appendo(q, s, out)))
    );
}
