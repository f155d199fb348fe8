//! Property tests for unification and search
//!
//! Tests key properties:
//! - unify(u, v) = s implies resolve(u, s) = resolve(v, s)
//! - a variable can never be bound to a term containing itself
//! - take(n) returns exactly n states of an infinite goal

use micro_kanren::prelude::*;
use proptest::prelude::*;

const N_VARS: usize = 4;

// ============================================================================
// Term Generators
// ============================================================================

#[derive(Debug, Clone)]
enum Shape {
    Var(usize),
    Int(i32),
    Pair(Box<Shape>, Box<Shape>),
}

/// Generate small terms over a few variables and atoms
fn arb_shape() -> impl Strategy<Value = Shape> {
    let leaf = prop_oneof![
        (0..N_VARS).prop_map(Shape::Var),
        (0i32..3).prop_map(Shape::Int),
    ];
    leaf.prop_recursive(4, 16, 2, |inner| {
        (inner.clone(), inner).prop_map(|(a, b)| Shape::Pair(Box::new(a), Box::new(b)))
    })
}

fn fresh_vars() -> Vec<Var> {
    let mut state = State::empty();
    (0..N_VARS)
        .map(|_| {
            let (v, next) = state.fresh_var();
            state = next;
            v
        })
        .collect()
}

fn build(shape: &Shape, vars: &[Var]) -> Term {
    match shape {
        Shape::Var(i) => Term::var(vars[*i]),
        Shape::Int(n) => Term::new(*n),
        Shape::Pair(a, b) => Term::cons(build(a, vars), build(b, vars)),
    }
}

fn contains_bound_var(term: &Term, s: &Substitution) -> bool {
    match term {
        Term::Var(v) => s.lookup(*v).is_some(),
        Term::Pair(p) => contains_bound_var(&p.first, s) || contains_bound_var(&p.second, s),
        Term::Atom(_) => false,
    }
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn unifier_makes_both_sides_equal(u in arb_shape(), v in arb_shape()) {
        let vars = fresh_vars();
        let (u, v) = (build(&u, &vars), build(&v, &vars));

        if let Ok(s) = Substitution::empty().unify(&u, &v) {
            prop_assert_eq!(s.resolve(&u), s.resolve(&v));
        }
    }

    #[test]
    fn unification_success_does_not_depend_on_argument_order(u in arb_shape(), v in arb_shape()) {
        let vars = fresh_vars();
        let (u, v) = (build(&u, &vars), build(&v, &vars));

        let forward = Substitution::empty().unify(&u, &v).is_ok();
        let backward = Substitution::empty().unify(&v, &u).is_ok();
        prop_assert_eq!(forward, backward);
    }

    #[test]
    fn unifying_again_adds_no_bindings(u in arb_shape(), v in arb_shape()) {
        let vars = fresh_vars();
        let (u, v) = (build(&u, &vars), build(&v, &vars));

        if let Ok(s) = Substitution::empty().unify(&u, &v) {
            let again = s.unify(&u, &v);
            prop_assert!(again.is_ok());
            prop_assert_eq!(again.unwrap().len(), s.len());
        }
    }

    #[test]
    fn resolved_terms_contain_no_bound_variables(u in arb_shape(), v in arb_shape()) {
        let vars = fresh_vars();
        let (u, v) = (build(&u, &vars), build(&v, &vars));

        if let Ok(s) = Substitution::empty().unify(&u, &v) {
            for var in &vars {
                let resolved = s.resolve(&Term::var(*var));
                prop_assert!(!contains_bound_var(&resolved, &s));
            }
        }
    }

    #[test]
    fn variables_never_bind_to_pairs_containing_themselves(shape in arb_shape(), i in 0..N_VARS) {
        let vars = fresh_vars();
        let x = vars[i];
        let t = build(&shape, &vars);

        let left = Term::cons(x, t.clone());
        let right = Term::cons(t, x);
        prop_assert!(Substitution::empty().extend(Mapping::new(x, left)).is_err());
        prop_assert!(Substitution::empty().extend(Mapping::new(x, right)).is_err());
    }

    #[test]
    fn successful_extension_keeps_the_variable_out_of_its_value(shape in arb_shape(), i in 0..N_VARS) {
        let vars = fresh_vars();
        let x = vars[i];
        let t = build(&shape, &vars);

        if let Ok(s) = Substitution::empty().extend(Mapping::new(x, t)) {
            let resolved = s.resolve(&Term::var(x));
            prop_assert!(!s.occurs(x, &resolved));
        }
    }

    #[test]
    fn take_returns_exactly_n_states_of_an_infinite_goal(n in 0usize..50) {
        prop_assert_eq!(alwayso().run(n).len(), n);
    }

    #[test]
    fn disjunction_of_mature_goals_keeps_their_order(values in proptest::collection::vec(0i32..100, 0..10)) {
        let expected: Vec<Term> = values.iter().map(|v| Term::new(*v)).collect();
        let answers = micro_kanren::run_all(move |q| {
            disj_all(values.iter().map(|v| eq(q, *v).boxed()).collect::<Vec<_>>())
        });
        prop_assert_eq!(answers, expected);
    }
}
