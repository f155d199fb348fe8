use crate::core::term::Term;
use std::fmt::{Debug, Formatter, Result};
use std::sync::Arc;

#[derive(Clone, PartialEq)]
pub struct Pair {
    pub first: Term,
    pub second: Term,
}

impl Pair {
    pub fn new(first: impl Into<Term>, second: impl Into<Term>) -> Self {
        Pair {
            first: first.into(),
            second: second.into(),
        }
    }
}

// Unlink the list spine in a loop; long lists would otherwise be dropped recursively.
impl Drop for Pair {
    fn drop(&mut self) {
        let mut rest = std::mem::replace(&mut self.second, Term::nil());
        while let Term::Pair(next) = rest {
            match Arc::try_unwrap(next) {
                Ok(mut pair) => rest = std::mem::replace(&mut pair.second, Term::nil()),
                Err(_) => break,
            }
        }
    }
}

impl Debug for Pair {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "({:?}", self.first)?;

        let mut rest = &self.second;
        loop {
            match rest {
                Term::Pair(next) => {
                    write!(f, " {:?}", next.first)?;
                    rest = &next.second;
                }
                _ if rest.is_nil() => break,
                _ => {
                    write!(f, " . {:?}", rest)?;
                    break;
                }
            }
        }

        write!(f, ")")
    }
}

impl From<(Term, Term)> for Pair {
    fn from(pair: (Term, Term)) -> Self {
        Pair {
            first: pair.0,
            second: pair.1,
        }
    }
}
