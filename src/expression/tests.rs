use crate::expression::{Expression, ExpressionError, Operator};

fn num(n: f64) -> Expression {
    Expression::Number(n)
}

fn node(op: Operator, left: Expression, right: Expression) -> Expression {
    let value = op.apply(left.value(), right.value()).unwrap_or(f64::NAN);
    Expression::Binary {
        op,
        left: Box::new(left),
        right: Box::new(right),
        value,
    }
}

#[test]
fn test_operator_apply_basic() {
    assert_eq!(Operator::Add.apply(2.0, 3.0), Ok(5.0));
    assert_eq!(Operator::Sub.apply(2.0, 3.0), Ok(-1.0));
    assert_eq!(Operator::Mul.apply(2.0, 3.0), Ok(6.0));
    assert_eq!(Operator::Div.apply(3.0, 2.0), Ok(1.5));
}

#[test]
fn test_division_by_near_zero_is_undefined() {
    assert_eq!(
        Operator::Div.apply(1.0, 0.0),
        Err(ExpressionError::DivisionByZero(0.0))
    );
    assert!(Operator::Div.apply(1.0, 1e-10).is_err());
    assert!(Operator::Div.apply(1.0, -1e-10).is_err());
    assert!(Operator::Div.apply(1.0, 1e-8).is_ok());
}

#[test]
fn test_operator_symbols() {
    let symbols: Vec<_> = Operator::ALL.iter().map(|op| op.to_string()).collect();
    assert_eq!(symbols, vec!["+", "-", "*", "/"]);
    assert!(Operator::Add.is_commutative());
    assert!(Operator::Mul.is_commutative());
    assert!(!Operator::Sub.is_commutative());
    assert!(!Operator::Div.is_commutative());
}

#[test]
fn test_combine_memoizes_value() {
    let result = Expression::combine(Operator::Mul, num(6.0), num(4.0));
    assert!(result.is_ok());
    if let Ok(expr) = result {
        assert_eq!(expr.value(), 24.0);
        assert_eq!(expr.evaluate(), Ok(24.0));
    }
}

#[test]
fn test_combine_rejects_zero_divisor() {
    let zero = node(Operator::Sub, num(3.0), num(3.0));
    let result = Expression::combine(Operator::Div, num(8.0), zero);
    assert!(matches!(result, Err(ExpressionError::DivisionByZero(_))));
}

#[test]
fn test_evaluate_recomputes_nested_tree() {
    let expr = node(
        Operator::Div,
        num(8.0),
        node(Operator::Sub, num(3.0), node(Operator::Div, num(8.0), num(3.0))),
    );
    let result = expr.evaluate();
    assert!(result.is_ok());
    if let Ok(value) = result {
        assert!((value - 24.0).abs() < 1e-9);
        assert_eq!(value, expr.value());
    }
}

#[test]
fn test_display_parenthesizes_nested_operations() {
    let balanced = node(
        Operator::Mul,
        node(Operator::Add, num(1.0), num(3.0)),
        node(Operator::Add, num(2.0), num(4.0)),
    );
    assert_eq!(balanced.to_string(), "(1 + 3) * (2 + 4)");

    let right_chain = node(
        Operator::Div,
        num(8.0),
        node(Operator::Sub, num(3.0), node(Operator::Div, num(8.0), num(3.0))),
    );
    assert_eq!(right_chain.to_string(), "8 / (3 - (8 / 3))");

    assert_eq!(num(7.0).to_string(), "7");
}

#[test]
fn test_leaf_key_is_stable_for_equal_values() {
    assert_eq!(num(4.0).canonical_key().as_str(), "4");
    assert_eq!(num(8.0 / 2.0).canonical_key(), num(4.0).canonical_key());
    assert_eq!(num(0.5).canonical_key().as_str(), "0.5");
}

#[test]
fn test_addition_chains_share_a_key() {
    let left_grouped = node(
        Operator::Add,
        node(Operator::Add, num(1.0), num(2.0)),
        num(3.0),
    );
    let right_grouped = node(
        Operator::Add,
        num(1.0),
        node(Operator::Add, num(2.0), num(3.0)),
    );
    let reversed = node(
        Operator::Add,
        num(3.0),
        node(Operator::Add, num(2.0), num(1.0)),
    );

    assert_eq!(left_grouped.canonical_key().as_str(), "(1+2+3)");
    assert_eq!(left_grouped.canonical_key(), right_grouped.canonical_key());
    assert_eq!(left_grouped.canonical_key(), reversed.canonical_key());
}

#[test]
fn test_multiplication_chains_share_a_key() {
    let a = node(
        Operator::Mul,
        node(Operator::Mul, num(2.0), num(3.0)),
        num(4.0),
    );
    let b = node(
        Operator::Mul,
        num(4.0),
        node(Operator::Mul, num(3.0), num(2.0)),
    );
    assert_eq!(a.canonical_key().as_str(), "(2*3*4)");
    assert_eq!(a.canonical_key(), b.canonical_key());
}

#[test]
fn test_flattening_stops_at_operator_change() {
    let a = node(
        Operator::Mul,
        node(Operator::Add, num(1.0), num(3.0)),
        node(Operator::Add, num(2.0), num(4.0)),
    );
    let b = node(
        Operator::Mul,
        node(Operator::Add, num(4.0), num(2.0)),
        node(Operator::Add, num(3.0), num(1.0)),
    );
    assert_eq!(a.canonical_key().as_str(), "((1+3)*(2+4))");
    assert_eq!(a.canonical_key(), b.canonical_key());

    let sum_times = node(Operator::Mul, num(3.0), node(Operator::Add, num(2.0), num(1.0)));
    assert_eq!(sum_times.canonical_key().as_str(), "((1+2)*3)");
}

#[test]
fn test_identity_operand_is_transparent() {
    let x = || node(Operator::Add, num(2.0), num(3.0));

    let times_one = node(Operator::Mul, x(), num(1.0));
    let one_times = node(Operator::Mul, num(1.0), x());
    let over_one = node(Operator::Div, x(), num(1.0));

    assert_eq!(times_one.canonical_key(), x().canonical_key());
    assert_eq!(one_times.canonical_key(), x().canonical_key());
    assert_eq!(over_one.canonical_key(), x().canonical_key());
}

#[test]
fn test_one_over_is_not_identity() {
    let reciprocal = node(Operator::Div, num(1.0), node(Operator::Add, num(2.0), num(3.0)));
    assert_eq!(reciprocal.canonical_key().as_str(), "(1/(2+3))");
}

#[test]
fn test_subtraction_and_division_keep_order() {
    let forward = node(Operator::Sub, num(5.0), num(3.0));
    let backward = node(Operator::Sub, num(3.0), num(5.0));
    assert_eq!(forward.canonical_key().as_str(), "(5-3)");
    assert_ne!(forward.canonical_key(), backward.canonical_key());

    let forward = node(Operator::Div, num(8.0), num(2.0));
    let backward = node(Operator::Div, num(2.0), num(8.0));
    assert_ne!(forward.canonical_key(), backward.canonical_key());
}

#[test]
fn test_partial_normalization_is_preserved() {
    // (5 - 3) + 2 and (5 + 2) - 3 are equal but not recognized as such
    let a = node(Operator::Add, node(Operator::Sub, num(5.0), num(3.0)), num(2.0));
    let b = node(Operator::Sub, node(Operator::Add, num(5.0), num(2.0)), num(3.0));
    assert_ne!(a.canonical_key(), b.canonical_key());

    let times_zero = node(Operator::Mul, num(5.0), num(0.0));
    assert_eq!(times_zero.canonical_key().as_str(), "(0*5)");

    // An identity buried in a chain is flattened, not removed
    let buried = node(
        Operator::Mul,
        node(Operator::Mul, num(2.0), num(1.0)),
        num(12.0),
    );
    assert_eq!(buried.canonical_key().as_str(), "(1*12*2)");
}
