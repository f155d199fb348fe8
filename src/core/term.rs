//! Terms are what unification works on.

use crate::core::atom::{Atom, Atomic};
use crate::core::logic_variable::Var;
use crate::core::pair::Pair;
use std::fmt::Formatter;
use std::sync::Arc;

/// A logic variable, a pair of terms, or an atomic value.
#[derive(Clone)]
pub enum Term {
    Var(Var),
    Pair(Arc<Pair>),
    Atom(Atom),
}

impl Term {
    pub fn new(val: impl Into<Term>) -> Self {
        val.into()
    }

    pub fn var(v: Var) -> Self {
        Term::Var(v)
    }

    pub fn cons(first: impl Into<Term>, second: impl Into<Term>) -> Self {
        Term::Pair(Arc::new(Pair::new(first, second)))
    }

    pub fn atom<T: 'static + Atomic + PartialEq + Send + Sync>(val: T) -> Self {
        Term::Atom(Atom::new(val))
    }

    /// The empty list, `()`.
    pub fn nil() -> Self {
        Term::atom(())
    }

    pub fn is_nil(&self) -> bool {
        self.downcast_ref::<()>().is_some()
    }

    pub fn try_as_var(&self) -> Option<Var> {
        match self {
            Term::Var(v) => Some(*v),
            _ => None,
        }
    }

    pub fn try_as_pair(&self) -> Option<&Pair> {
        match self {
            Term::Pair(p) => Some(p),
            _ => None,
        }
    }

    /// Borrow the atomic value if this is an atom of type `T`.
    pub fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        match self {
            Term::Atom(a) => a.downcast_ref(),
            _ => None,
        }
    }
}

impl PartialEq for Term {
    fn eq(&self, other: &Self) -> bool {
        let mut pending = vec![(self, other)];
        while let Some(terms) = pending.pop() {
            match terms {
                (Term::Var(a), Term::Var(b)) if a == b => {}
                (Term::Atom(a), Term::Atom(b)) if a == b => {}
                (Term::Pair(a), Term::Pair(b)) => {
                    if !Arc::ptr_eq(a, b) {
                        pending.push((&a.second, &b.second));
                        pending.push((&a.first, &b.first));
                    }
                }
                _ => return false,
            }
        }
        true
    }
}

impl PartialEq<Var> for Term {
    fn eq(&self, v: &Var) -> bool {
        self.try_as_var().map(|sv| &sv == v).unwrap_or(false)
    }
}

impl<T: 'static + Atomic + PartialEq> PartialEq<T> for Term {
    fn eq(&self, other: &T) -> bool {
        self.downcast_ref::<T>()
            .map(|x| x == other)
            .unwrap_or(false)
    }
}

impl From<Var> for Term {
    fn from(v: Var) -> Self {
        Term::Var(v)
    }
}

impl From<Pair> for Term {
    fn from(p: Pair) -> Self {
        Term::Pair(Arc::new(p))
    }
}

impl From<Atom> for Term {
    fn from(a: Atom) -> Self {
        Term::Atom(a)
    }
}

impl<T: 'static + Atomic + PartialEq + Send + Sync> From<T> for Term {
    fn from(v: T) -> Self {
        Term::atom(v)
    }
}

/// Build a proper list terminated by `()`.
impl From<Vec<Term>> for Term {
    fn from(items: Vec<Term>) -> Self {
        let mut list = Term::nil();
        for v in items.into_iter().rev() {
            list = Term::cons(v, list);
        }
        list
    }
}

impl std::fmt::Debug for Term {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            Term::Var(v) => write!(f, "{:?}", v),
            Term::Pair(p) => write!(f, "{:?}", p),
            Term::Atom(a) => write!(f, "{:?}", a),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn atoms_compare_with_plain_values() {
        assert_eq!(Term::new(5), 5);
        assert_ne!(Term::new(5), 6);
        assert_ne!(Term::new("5"), 5);
    }

    #[test]
    fn variables_compare_with_terms() {
        let x = Var::from_id(0);
        assert_eq!(Term::var(x), x);
        assert_ne!(Term::var(x), Var::from_id(1));
        assert_ne!(Term::new(0usize), x);
    }

    #[test]
    fn pairs_compare_structurally() {
        let a = Term::cons(1, Term::cons("b", ()));
        let b = Term::cons(1, Term::cons("b", ()));
        assert_eq!(a, b);
        assert_ne!(a, Term::cons(1, "b"));
    }

    #[test]
    fn vectors_become_nil_terminated_lists() {
        let list = Term::from(vec![Term::new(1), Term::new(2), Term::new(3)]);
        assert_eq!(format!("{:?}", list), "(1 2 3)");

        let first = list.try_as_pair().unwrap();
        assert_eq!(first.first, 1);
        assert!(Term::from(Vec::<Term>::new()).is_nil());
    }

    #[test]
    fn improper_lists_print_with_a_dot() {
        let x = Var::from_id(4);
        assert_eq!(format!("{:?}", Term::cons(x, 5)), "(#4 . 5)");
    }
}
