//! Substitutions map variables to terms.
//!
//! A substitution is a persistent list of mappings, newest first. Extending
//! it creates a new head that shares the old list, so a substitution stays
//! valid after others have been derived from it.

use crate::core::failure::Failure;
use crate::core::logic_variable::{ReifiedVar, Var};
use crate::core::term::Term;
use std::fmt::Formatter;
use std::sync::Arc;

/// A single binding of a variable to a term.
#[derive(Debug, Clone, PartialEq)]
pub struct Mapping {
    pub var: Var,
    pub term: Term,
}

impl Mapping {
    pub fn new(var: Var, term: impl Into<Term>) -> Self {
        Mapping {
            var,
            term: term.into(),
        }
    }
}

struct Node {
    mapping: Mapping,
    next: Option<Arc<Node>>,
}

/// Mapping of variables to terms.
#[derive(Clone, Default)]
pub struct Substitution {
    head: Option<Arc<Node>>,
    len: usize,
}

impl Substitution {
    /// Initialize an empty substitution
    pub fn empty() -> Self {
        Substitution { head: None, len: 0 }
    }

    /// Get number of substituted variables
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Iterate over all mappings, most recent first.
    pub fn mappings(&self) -> Mappings<'_> {
        Mappings {
            node: self.head.as_deref(),
        }
    }

    /// The term `var` is directly bound to, if any.
    pub fn lookup(&self, var: Var) -> Option<&Term> {
        self.mappings().find(|m| m.var == var).map(|m| &m.term)
    }

    /// Follow variable bindings until reaching a term that is not a bound variable.
    ///
    /// If `term` is no variable or a variable that is not substituted,
    /// `term` is returned.
    pub fn walk<'a>(&'a self, term: &'a Term) -> &'a Term {
        let mut term = term;
        while let Term::Var(var) = term {
            match self.lookup(*var) {
                Some(next) => term = next,
                None => break,
            }
        }
        term
    }

    /// Extend substitution with a variable => term mapping.
    ///
    /// Fails if the insertion would result in a cyclic substitution.
    pub fn extend(&self, mapping: Mapping) -> Result<Self, Failure> {
        if self.occurs(mapping.var, &mapping.term) {
            return Err(Failure::Occurs {
                var: mapping.var,
                term: mapping.term,
            });
        }
        Ok(self.prepend(mapping))
    }

    fn prepend(&self, mapping: Mapping) -> Self {
        Substitution {
            head: Some(Arc::new(Node {
                mapping,
                next: self.head.clone(),
            })),
            len: self.len + 1,
        }
    }

    /// Returns `true` if `term` contains a variable that is equivalent
    /// to `var` under this substitution.
    pub fn occurs<'a>(&'a self, var: Var, term: &'a Term) -> bool {
        let mut pending = vec![term];
        while let Some(t) = pending.pop() {
            match self.walk(t) {
                Term::Var(v) if *v == var => return true,
                Term::Pair(p) => {
                    pending.push(&p.second);
                    pending.push(&p.first);
                }
                _ => {}
            }
        }
        false
    }

    /// Attempt to unify `u` and `v` under this substitution.
    ///
    /// First components of pairs are unified before second components.
    pub fn unify(&self, u: &Term, v: &Term) -> Result<Self, Failure> {
        let mut s = self.clone();
        let mut pending = vec![(u.clone(), v.clone())];

        while let Some((u, v)) = pending.pop() {
            let u = s.walk(&u).clone();
            let v = s.walk(&v).clone();

            s = match (u, v) {
                (Term::Var(a), Term::Var(b)) if a == b => s,
                (Term::Var(a), v) => s.extend(Mapping::new(a, v))?,
                (u, Term::Var(b)) => s.extend(Mapping::new(b, u))?,
                (Term::Pair(p), Term::Pair(q)) => {
                    pending.push((p.second.clone(), q.second.clone()));
                    pending.push((p.first.clone(), q.first.clone()));
                    s
                }
                (Term::Atom(a), Term::Atom(b)) if a == b => s,
                (left, right) => return Err(Failure::Mismatch { left, right }),
            };
        }

        Ok(s)
    }

    /// Replace all variables contained in `term` with their substituted terms.
    ///
    /// Unbound variables are left in place.
    pub fn resolve(&self, term: &Term) -> Term {
        let mut firsts = vec![];
        let mut rest = self.walk(term);
        while let Term::Pair(p) = rest {
            firsts.push(self.resolve(&p.first));
            rest = self.walk(&p.second);
        }

        let mut result = rest.clone();
        for first in firsts.into_iter().rev() {
            result = Term::cons(first, result);
        }
        result
    }

    /// Resolve `term` and replace the variables that remain fresh with
    /// [`ReifiedVar`]s, numbered in order of first occurrence.
    pub fn reify(&self, term: &Term) -> Term {
        let term = self.resolve(term);
        let names = Substitution::empty().reify_s(&term);
        names.resolve(&term)
    }

    fn reify_s(self, term: &Term) -> Self {
        let mut s = self;
        let mut pending = vec![term.clone()];
        while let Some(t) = pending.pop() {
            match s.walk(&t).clone() {
                Term::Var(var) => {
                    let name = ReifiedVar(s.len());
                    s = s.prepend(Mapping::new(var, name));
                }
                Term::Pair(p) => {
                    pending.push(p.second.clone());
                    pending.push(p.first.clone());
                }
                Term::Atom(_) => {}
            }
        }
        s
    }
}

/// Two substitutions are equal if they hold the same mappings in the same order.
impl PartialEq for Substitution {
    fn eq(&self, other: &Self) -> bool {
        let same_list = match (&self.head, &other.head) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        };
        same_list || (self.len == other.len && self.mappings().eq(other.mappings()))
    }
}

// Long lists would otherwise be dropped recursively.
impl Drop for Substitution {
    fn drop(&mut self) {
        let mut next = self.head.take();
        while let Some(node) = next {
            match Arc::try_unwrap(node) {
                Ok(mut node) => next = node.next.take(),
                Err(_) => break,
            }
        }
    }
}

impl std::fmt::Debug for Substitution {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{{")?;
        let mut iter = self.mappings();
        if let Some(m) = iter.next() {
            write!(f, "{:?}: {:?}", m.var, m.term)?;
        }
        for m in iter {
            write!(f, ", {:?}: {:?}", m.var, m.term)?;
        }
        write!(f, "}}")
    }
}

/// Iterator over the mappings of a [`Substitution`].
pub struct Mappings<'a> {
    node: Option<&'a Node>,
}

impl<'a> Iterator for Mappings<'a> {
    type Item = &'a Mapping;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.node?;
        self.node = node.next.as_deref();
        Some(&node.mapping)
    }
}
