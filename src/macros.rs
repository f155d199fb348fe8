//! Macros for composing goals

/// Creates a goal that succeeds if any of its subgoals succeeds
#[macro_export]
macro_rules! disj {
    () => { $crate::prelude::fail() };
    ($g:expr) => { $g };
    ($g0:expr; $($g:expr);*) => { $crate::prelude::disj2($g0, $crate::disj!($($g);*))}
}

/// Creates a goal that succeeds if all of its subgoals succeed
#[macro_export]
macro_rules! conj {
    () => { $crate::prelude::succeed() };
    ($g:expr) => { $g };
    ($g0:expr, $($g:expr),*) => { $crate::prelude::conj2($g0, $crate::conj!($($g),*))}
}

/// Bind fresh variables with scope inside the body of `fresh!`.
///
/// `fresh!((x, y), g1, g2)` introduces `x` and `y` one after the other
/// and conjoins the goals.
#[macro_export]
macro_rules! fresh {
    (($x:ident), $($g:expr),* $(,)?) => {
        $crate::prelude::call_fresh(move |$x: $crate::prelude::Var| $crate::conj!($($g),*))
    };

    (($x:ident, $($xs:ident),+), $($g:expr),* $(,)?) => {
        $crate::prelude::call_fresh(move |$x: $crate::prelude::Var| $crate::fresh!(($($xs),+), $($g),*))
    };
}

/// Run one or more goals.
///
/// The syntax `run!(n, q, goal1, goal2, ...)` produces at most n
/// solutions for `q`; in Scheme you would write `(run n (q) goal1 goal2 ...)`.
/// The syntax `run!(*, q, goal1, goal2, ...)` produces all solutions
/// and does not return if there are infinitely many.
/// Several variables can be queried at once with `run!(n, (x, y), ...)`;
/// each solution is then the list `(x y)`.
#[macro_export]
macro_rules! run {
    (*, ($($x:ident),+), $($g:expr),* $(,)?) => {
        $crate::run!(*, q, $crate::fresh!(
            ($($x),+),
            $crate::prelude::eq(vec![$($crate::prelude::Term::var($x)),+], q),
            $($g),*
        ))
    };

    (*, $q:ident, $($g:expr),* $(,)?) => {
        $crate::run_all(move |$q: $crate::prelude::Var| {
            let _ = $q;
            $crate::conj!($($g),*)
        })
    };

    ($n:expr, ($($x:ident),+), $($g:expr),* $(,)?) => {
        $crate::run!($n, q, $crate::fresh!(
            ($($x),+),
            $crate::prelude::eq(vec![$($crate::prelude::Term::var($x)),+], q),
            $($g),*
        ))
    };

    ($n:expr, $q:ident, $($g:expr),* $(,)?) => {
        $crate::run($n, move |$q: $crate::prelude::Var| {
            let _ = $q;
            $crate::conj!($($g),*)
        })
    };
}
