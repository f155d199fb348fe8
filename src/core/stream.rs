//! Lazy streams of search results.
//!
//! A stream is empty, a first result followed by more, or a suspension
//! that produces the next shape when called. Suspensions are what let a goal
//! describe infinitely many results without recursing forever.

use std::rc::Rc;
use std::sync::Arc;
use tracing::debug;

pub enum Stream<T> {
    Empty,
    Cons(T, Tail<T>),
    Suspension(Box<dyn FnOnce() -> Stream<T>>),
}

/// The rest of a stream after its first element.
pub struct Tail<T>(Box<Stream<T>>);

impl<T> Tail<T> {
    fn new(s: Stream<T>) -> Self {
        Tail(Box::new(s))
    }

    pub fn into_stream(mut self) -> Stream<T> {
        std::mem::replace(&mut *self.0, Stream::Empty)
    }
}

impl<T> std::ops::Deref for Tail<T> {
    type Target = Stream<T>;
    fn deref(&self) -> &Stream<T> {
        &self.0
    }
}

// Unlink mature elements in a loop; a long tail left behind by `take` would
// otherwise be dropped recursively.
impl<T> Drop for Tail<T> {
    fn drop(&mut self) {
        let mut next = std::mem::replace(&mut *self.0, Stream::Empty);
        while let Stream::Cons(_, mut rest) = next {
            next = std::mem::replace(&mut *rest.0, Stream::Empty);
        }
    }
}

/// What [`Stream::bind`] applies to every element.
pub type Continuation<T> = Arc<dyn Fn(T) -> Stream<T> + Send + Sync>;

impl<T> Stream<T> {
    pub fn empty() -> Self {
        Stream::Empty
    }

    pub fn singleton(x: T) -> Self {
        Stream::cons(x, Stream::Empty)
    }

    pub fn cons(a: T, d: Self) -> Self {
        Stream::Cons(a, Tail::new(d))
    }

    pub fn suspension(sup: impl 'static + FnOnce() -> Stream<T>) -> Self {
        Stream::Suspension(Box::new(sup))
    }

    pub fn from_iter(iter: impl IntoIterator<Item = T>) -> Self {
        Stream::prepend_all(iter.into_iter().collect(), Stream::Empty)
    }

    fn prepend_all(heads: Vec<T>, tail: Self) -> Self {
        heads
            .into_iter()
            .rev()
            .fold(tail, |rest, a| Stream::cons(a, rest))
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Stream::Empty)
    }

    pub fn is_suspended(&self) -> bool {
        matches!(self, Stream::Suspension(_))
    }

    /// Number of elements, or `None` if a suspension is reached first.
    pub fn len(&self) -> Option<usize> {
        let mut n = 0;
        let mut s = self;
        loop {
            match s {
                Stream::Empty => return Some(n),
                Stream::Cons(_, d) => {
                    n += 1;
                    s = &**d;
                }
                Stream::Suspension(_) => return None,
            }
        }
    }

    /// Call suspensions until the stream is empty or has a first element.
    pub fn force(self) -> Self {
        let mut s = self;
        while let Stream::Suspension(sup) = s {
            s = sup();
        }
        s
    }

    /// Collect at most `n` elements, forcing only as much as needed.
    pub fn take(self, n: usize) -> Vec<T> {
        let mut results = vec![];
        let mut forced = 0;
        let mut s = self;
        while results.len() < n {
            match s {
                Stream::Empty => break,
                Stream::Cons(a, d) => {
                    results.push(a);
                    s = d.into_stream();
                }
                Stream::Suspension(sup) => {
                    forced += 1;
                    s = sup();
                }
            }
        }
        debug!(requested = n, taken = results.len(), forced, "took from stream");
        results
    }

    /// Collect every element. Does not return if the stream is infinite.
    pub fn take_all(self) -> Vec<T> {
        let mut results = vec![];
        let mut forced = 0;
        let mut s = self;
        loop {
            match s {
                Stream::Empty => break,
                Stream::Cons(a, d) => {
                    results.push(a);
                    s = d.into_stream();
                }
                Stream::Suspension(sup) => {
                    forced += 1;
                    s = sup();
                }
            }
        }
        debug!(taken = results.len(), forced, "took all from stream");
        results
    }
}

impl<T> std::iter::IntoIterator for Stream<T> {
    type Item = T;
    type IntoIter = StreamIter<T>;
    fn into_iter(self) -> Self::IntoIter {
        StreamIter(self)
    }
}

impl<T: 'static> Stream<T> {
    /// Interleave two streams.
    ///
    /// The operands swap whenever `s` yields an element or is suspended,
    /// so an infinite `s` cannot starve `t`.
    pub fn mplus(s: Stream<T>, t: Stream<T>) -> Self {
        let mut heads = vec![];
        let mut left = s;
        let mut right = t;
        let tail = loop {
            match left {
                Stream::Empty => break right,
                Stream::Cons(a, d) => {
                    heads.push(a);
                    left = right;
                    right = d.into_stream();
                }
                Stream::Suspension(sup) => {
                    break Stream::suspension(move || Stream::mplus(right, sup()))
                }
            }
        };
        Stream::prepend_all(heads, tail)
    }

    /// Apply `g` to every element and interleave the resulting streams.
    pub fn bind(self, g: Continuation<T>) -> Self {
        let mut heads = vec![];
        let mut s = self;
        let tail = loop {
            match s {
                Stream::Empty => break Stream::Empty,
                Stream::Cons(a, d) => {
                    heads.push(a);
                    s = d.into_stream();
                }
                Stream::Suspension(sup) => {
                    let g = g.clone();
                    break Stream::suspension(move || sup().bind(g));
                }
            }
        };

        let streams: Vec<_> = heads.into_iter().map(|a| g(a)).collect();
        streams
            .into_iter()
            .rev()
            .fold(tail, |rest, first| Stream::mplus(first, rest))
    }

    /// Apply `f` to every element, keeping suspensions where they are.
    pub fn map<U: 'static>(self, f: impl 'static + Fn(T) -> U) -> Stream<U> {
        map_shared(self, Rc::new(f))
    }
}

fn map_shared<T: 'static, U: 'static>(s: Stream<T>, f: Rc<dyn Fn(T) -> U>) -> Stream<U> {
    let mut heads = vec![];
    let mut s = s;
    let tail = loop {
        match s {
            Stream::Empty => break Stream::Empty,
            Stream::Cons(a, d) => {
                heads.push(f(a));
                s = d.into_stream();
            }
            Stream::Suspension(sup) => break Stream::suspension(move || map_shared(sup(), f)),
        }
    };
    Stream::prepend_all(heads, tail)
}

/// Streams are equal if they hold equal elements and end without suspension.
impl<T: PartialEq> PartialEq for Stream<T> {
    fn eq(&self, other: &Self) -> bool {
        use Stream::*;
        let mut a = self;
        let mut b = other;
        loop {
            match (a, b) {
                (Empty, Empty) => return true,
                (Cons(x, xs), Cons(y, ys)) if x == y => {
                    a = &**xs;
                    b = &**ys;
                }
                _ => return false,
            }
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Stream<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Stream::Empty => write!(f, "()"),
            Stream::Suspension(_) => write!(f, "(...)"),
            Stream::Cons(x, next) => {
                let mut next = next;
                write!(f, "({:?}", x)?;
                loop {
                    match &**next {
                        Stream::Empty => break,
                        Stream::Cons(x, n) => {
                            write!(f, " {:?}", x)?;
                            next = n;
                        }
                        Stream::Suspension(_) => {
                            write!(f, " ...")?;
                            break;
                        }
                    }
                }
                write!(f, ")")
            }
        }
    }
}

/// Iterator that forces the stream one element at a time.
pub struct StreamIter<T>(Stream<T>);

impl<T> Iterator for StreamIter<T> {
    type Item = T;
    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match std::mem::replace(&mut self.0, Stream::Empty) {
                Stream::Empty => return None,
                Stream::Cons(a, d) => {
                    self.0 = d.into_stream();
                    return Some(a);
                }
                Stream::Suspension(sup) => self.0 = sup(),
            }
        }
    }
}
