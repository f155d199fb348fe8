pub use crate::{
    core::{
        atom::{Atom, Atomic},
        failure::Failure,
        goal::{BoxedGoal, Goal},
        logic_variable::{reify_name, ReifiedVar, Var},
        pair::Pair,
        state::State,
        stream::Stream,
        substitution::{Mapping, Substitution},
        term::Term,
    },
    goals::{combinators::*, primitive::*},
};
