use super::state::State;
use super::stream::{Stream, StreamIter};
use std::sync::Arc;

/// A relation over states: maps one state to a stream of successor states.
///
/// Goals hold no mutable state, so the same goal may be applied to any
/// number of states.
pub trait Goal: Send + Sync + 'static {
    fn apply(&self, s: State) -> Stream<State>;

    /// At most `n` states reachable from the empty state.
    fn run(&self, n: usize) -> Vec<State> {
        self.apply(State::empty()).take(n)
    }

    /// All states reachable from the empty state.
    fn run_all(&self) -> Vec<State> {
        self.apply(State::empty()).take_all()
    }

    fn iter(&self) -> StreamIter<State> {
        self.apply(State::empty()).into_iter()
    }

    /// Erase the goal's type.
    fn boxed(self) -> BoxedGoal
    where
        Self: Sized,
    {
        BoxedGoal(Arc::new(self))
    }
}

impl<G> Goal for G
where
    G: Fn(State) -> Stream<State> + Send + Sync + 'static,
{
    fn apply(&self, s: State) -> Stream<State> {
        self(s)
    }
}

/// A goal of unknown type, cheap to clone.
///
/// Recursive relations need this: a goal cannot contain its own type.
#[derive(Clone)]
pub struct BoxedGoal(Arc<dyn Goal>);

impl Goal for BoxedGoal {
    fn apply(&self, s: State) -> Stream<State> {
        self.0.apply(s)
    }

    fn boxed(self) -> BoxedGoal {
        self
    }
}
