//! Integration tests for dictionary resolution and the operator semantics
//! table.

use std::cell::Cell;
use std::collections::HashMap;

use pbg::{parse, Dictionary, EvalError, Literal};

fn dict(pairs: &[(&[u8], Literal)]) -> HashMap<Vec<u8>, Literal> {
    pairs.iter().map(|(k, v)| (k.to_vec(), v.clone())).collect()
}

#[test]
fn scenario_eq_numbers_with_empty_dictionary() {
    let expr = parse(b"(=, 1, 1)").unwrap();
    let mut d = dict(&[]);
    assert_eq!(expr.evaluate(&mut d).unwrap(), true);
}

#[test]
fn scenario_not_and() {
    let expr = parse(b"(!,(&,TRUE,FALSE))").unwrap();
    let mut d = dict(&[]);
    assert_eq!(expr.evaluate(&mut d).unwrap(), true);
}

#[test]
fn scenario_lt() {
    let expr = parse(b"(<, 2.5, 3)").unwrap();
    let mut d = dict(&[]);
    assert_eq!(expr.evaluate(&mut d).unwrap(), true);
}

#[test]
fn scenario_eq_key_resolves_to_matching_string() {
    let expr = parse(b"(=, [name], 'alice')").unwrap();
    let mut present = dict(&[(b"name", Literal::Str(b"alice".to_vec()))]);
    assert_eq!(expr.evaluate(&mut present).unwrap(), true);

    // An unresolved key is just another kind under EQ's structural
    // comparison, so an absent key compares unequal rather than erroring.
    let mut absent = dict(&[]);
    assert_eq!(expr.evaluate(&mut absent).unwrap(), false);
}

#[test]
fn scenario_exst_over_unknown_and_known_keys() {
    let expr = parse(b"(?, [x])").unwrap();
    let mut absent = dict(&[]);
    assert_eq!(expr.evaluate(&mut absent).unwrap(), false);

    let mut present = dict(&[(b"x", Literal::True)]);
    assert_eq!(expr.evaluate(&mut present).unwrap(), true);
}

#[test]
fn scenario_or_of_equalities_visits_only_first_disjunct() {
    let expr = parse(b"(|, (=, [a], 1), (=, [b], 2))").unwrap();
    let mut d = dict(&[(b"a", Literal::Number(1.0)), (b"b", Literal::Number(9.0))]);
    assert_eq!(expr.evaluate(&mut d).unwrap(), true);
}

#[test]
fn dictionary_is_called_eagerly_even_when_walk_short_circuits() {
    struct Counting {
        calls: Cell<u32>,
    }
    impl Dictionary for Counting {
        fn resolve(&mut self, _key: &[u8]) -> Literal {
            self.calls.set(self.calls.get() + 1);
            Literal::Unknown
        }
    }

    let expr = parse(b"(|, TRUE, [k])").unwrap();
    let mut d = Counting { calls: Cell::new(0) };
    // The walker never touches [k] (OR short-circuits on TRUE), but the
    // dictionary is still invoked once during eager resolution.
    assert_eq!(expr.evaluate(&mut d).unwrap(), true);
    assert_eq!(d.calls.get(), 1);
}

#[test]
fn repeated_evaluation_is_deterministic() {
    let expr = parse(b"(&,(=,[a],1),(<,[b],10))").unwrap();
    for _ in 0..5 {
        let mut d = dict(&[(b"a", Literal::Number(1.0)), (b"b", Literal::Number(5.0))]);
        assert_eq!(expr.evaluate(&mut d).unwrap(), true);
    }
}

#[test]
fn neq_is_negation_of_two_child_eq() {
    let expr_eq = parse(b"(=,1,2)").unwrap();
    let expr_neq = parse(b"(!=,1,2)").unwrap();
    let mut d1 = dict(&[]);
    let mut d2 = dict(&[]);
    assert_eq!(expr_neq.evaluate(&mut d2).unwrap(), !expr_eq.evaluate(&mut d1).unwrap());
}

#[test]
fn comparisons_cover_all_four_relations() {
    let cases: &[(&[u8], bool)] = &[
        (b"(<,1,2)", true),
        (b"(<=,2,2)", true),
        (b"(>,3,2)", true),
        (b"(>=,2,2)", true),
        (b"(<,2,1)", false),
        (b"(>,1,2)", false),
    ];
    for (src, expected) in cases {
        let expr = parse(src).unwrap();
        let mut d = dict(&[]);
        assert_eq!(expr.evaluate(&mut d).unwrap(), *expected, "{:?}", src);
    }
}

#[test]
fn eq_with_more_than_two_children_requires_all_equal() {
    let expr = parse(b"(=,1,1,1)").unwrap();
    let mut d = dict(&[]);
    assert_eq!(expr.evaluate(&mut d).unwrap(), true);

    let expr = parse(b"(=,1,1,2)").unwrap();
    let mut d = dict(&[]);
    assert_eq!(expr.evaluate(&mut d).unwrap(), false);
}

#[test]
fn eq_treats_unknown_as_a_kind_that_compares_unequal() {
    // Both operands unresolved: Unknown compares equal to itself.
    let expr = parse(b"(=,[a],[b])").unwrap();
    let mut d = dict(&[]);
    assert_eq!(expr.evaluate(&mut d).unwrap(), true);

    // Resolved is never equal to Unknown, but this is a structural
    // mismatch, not an evaluation error.
    let expr = parse(b"(=,[a],1)").unwrap();
    let mut d = dict(&[]);
    assert_eq!(expr.evaluate(&mut d).unwrap(), false);
}

#[test]
fn unknown_key_errors_when_a_boolean_or_numeric_value_is_required() {
    // Unlike EQ/NEQ, AND needs [x]'s actual truth value, and comparisons
    // need an actual number — both surface UnknownKey rather than
    // comparing structurally.
    let expr = parse(b"(&,[x],TRUE)").unwrap();
    let mut d = dict(&[]);
    assert_eq!(expr.evaluate(&mut d).unwrap_err(), EvalError::UnknownKey);

    let expr = parse(b"(<,[x],1)").unwrap();
    let mut d = dict(&[]);
    assert_eq!(expr.evaluate(&mut d).unwrap_err(), EvalError::UnknownKey);
}
