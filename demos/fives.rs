//! Goals with infinitely many solutions, and how disjunction interleaves them

use micro_kanren::prelude::*;
use micro_kanren::{disj, run};

/// Create a goal that succeeds with x = 5 over and over again
fn fives(x: Var) -> impl Goal {
    disj2(eq(x, 5), suspend(move || fives(x)))
}

/// Create a goal that succeeds with x = 6 over and over again
fn sixes(x: Var) -> impl Goal {
    disj2(eq(x, 6), suspend(move || sixes(x)))
}

fn main() {
    println!("Five fives: {:?}", run(5, fives));

    println!(
        "Fives and sixes take turns: {:?}",
        run!(6, q, disj!(fives(q); sixes(q)))
    );

    println!(
        "A diverging branch does not hide the other: {:?}",
        run!(1, q, disj!(nevero(); eq(q, "found")))
    );
}
