use std::fmt;

use crate::expression::ast::Expression;
use crate::expression::operator::Operator;

/// Key of a bare operand `1`, the identity for `*` and the right identity for `/`.
const IDENTITY_KEY: &str = "1";

/// Normalized fingerprint of an expression tree.
///
/// Two trees share a key when they differ only by reordering or regrouping
/// a chain of `+` or `*`, or by multiplying or dividing a subtree by a bare
/// operand `1`. Nothing else is normalized: `a - b + c` and `a + c - b` get
/// different keys, as do `a * 0` and `0`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CanonicalKey(String);

impl CanonicalKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CanonicalKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Expression {
    pub fn canonical_key(&self) -> CanonicalKey {
        CanonicalKey(canonical_form(self))
    }
}

fn canonical_form(expr: &Expression) -> String {
    let Expression::Binary { op, left, right, .. } = expr else {
        // Shortest round-trip rendering, so 4 from `8 / 2` and an input 4 agree.
        return expr.value().to_string();
    };

    let left_key = canonical_form(left);
    let right_key = canonical_form(right);

    match op {
        Operator::Mul if left_key == IDENTITY_KEY => return right_key,
        Operator::Mul | Operator::Div if right_key == IDENTITY_KEY => return left_key,
        _ => {}
    }

    if op.is_commutative() {
        let mut operands = Vec::new();
        collect_operands(expr, *op, &mut operands);
        operands.sort();
        format!("({})", operands.join(op.as_str()))
    } else {
        format!("({}{}{})", left_key, op, right_key)
    }
}

/// Walk a chain of `op` nodes, pushing the key of every maximal subtree
/// rooted at a different operator (or at a leaf).
fn collect_operands(expr: &Expression, op: Operator, operands: &mut Vec<String>) {
    match expr {
        Expression::Binary {
            op: inner,
            left,
            right,
            ..
        } if *inner == op => {
            collect_operands(left, op, operands);
            collect_operands(right, op, operands);
        }
        _ => operands.push(canonical_form(expr)),
    }
}
