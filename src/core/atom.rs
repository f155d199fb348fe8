//! Opaque atomic values.
//!
//! Anything that is neither a variable nor a pair is an atom. Atoms are
//! compared by their own `PartialEq`; atoms of different types are never equal.

use std::any::Any;
use std::fmt::{Debug, Formatter};
use std::sync::Arc;

/// Marker for types that may appear as atoms in a term.
pub trait Atomic: Debug {}

impl Atomic for () {}

impl Atomic for bool {}

impl Atomic for u8 {}

impl Atomic for u16 {}

impl Atomic for u32 {}

impl Atomic for u64 {}

impl Atomic for u128 {}

impl Atomic for usize {}

impl Atomic for i8 {}

impl Atomic for i16 {}

impl Atomic for i32 {}

impl Atomic for i64 {}

impl Atomic for i128 {}

impl Atomic for isize {}

impl Atomic for char {}

impl Atomic for f64 {}

impl Atomic for f32 {}

impl Atomic for String {}

impl Atomic for &'static str {}

impl<T: Atomic> Atomic for Box<T> {}

trait Opaque: Any + Debug + Send + Sync {
    fn as_any(&self) -> &dyn Any;

    fn eqv(&self, other: &dyn Opaque) -> bool;
}

impl<T: 'static + Atomic + PartialEq + Send + Sync> Opaque for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn eqv(&self, other: &dyn Opaque) -> bool {
        other
            .as_any()
            .downcast_ref::<T>()
            .map(|o| o == self)
            .unwrap_or(false)
    }
}

/// Shared handle to an atomic value of any [`Atomic`] type.
#[derive(Clone)]
pub struct Atom(Arc<dyn Opaque>);

impl Atom {
    pub fn new<T: 'static + Atomic + PartialEq + Send + Sync>(val: T) -> Self {
        Atom(Arc::new(val))
    }

    /// Borrow the value if it has type `T`.
    pub fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        self.0.as_any().downcast_ref()
    }

    pub fn is<T: 'static>(&self) -> bool {
        self.downcast_ref::<T>().is_some()
    }
}

impl PartialEq for Atom {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0) || self.0.eqv(&*other.0)
    }
}

impl Debug for Atom {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{:?}", self.0)
    }
}
