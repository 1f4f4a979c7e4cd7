use num_bigint::BigInt;
use num_rational::BigRational;
use std::sync::Arc;

use crate::expression::{Assignment, ExpressionError, Operator, Token, evaluate, render};
use crate::shape::{TreeEnumerator, TreeShape};

fn r(n: i64) -> BigRational {
    BigRational::from_integer(BigInt::from(n))
}

fn frac(n: i64, d: i64) -> BigRational {
    BigRational::new(BigInt::from(n), BigInt::from(d))
}

fn leaf() -> Arc<TreeShape> {
    Arc::new(TreeShape::Leaf)
}

fn node(left: Arc<TreeShape>, right: Arc<TreeShape>) -> Arc<TreeShape> {
    Arc::new(TreeShape::internal(left, right))
}

/// Direct recursive evaluation, consuming labels in pre-order
fn eval_direct<'a>(
    shape: &TreeShape,
    ops: &mut impl Iterator<Item = &'a Operator>,
    vals: &mut impl Iterator<Item = &'a BigRational>,
) -> Option<Result<BigRational, ExpressionError>> {
    match shape {
        TreeShape::Leaf => vals.next().map(|v| Ok(v.clone())),
        TreeShape::Internal(l, rt) => {
            let op = *ops.next()?;
            let left = eval_direct(l, ops, vals)?;
            let right = eval_direct(rt, ops, vals)?;
            Some(match (left, right) {
                (Ok(a), Ok(b)) => op.apply(&a, &b),
                (Err(e), _) | (_, Err(e)) => Err(e),
            })
        }
    }
}

#[test]
fn test_operator_apply() {
    assert_eq!(Operator::Add.apply(&r(2), &r(3)), Ok(r(5)));
    assert_eq!(Operator::Sub.apply(&r(2), &r(3)), Ok(r(-1)));
    assert_eq!(Operator::Mul.apply(&r(2), &r(3)), Ok(r(6)));
    assert_eq!(Operator::Div.apply(&r(2), &r(3)), Ok(frac(2, 3)));
    assert_eq!(
        Operator::Div.apply(&r(2), &r(0)),
        Err(ExpressionError::DivisionByZero)
    );
}

#[test]
fn test_operator_symbols() {
    for op in Operator::ALL {
        assert_eq!(Operator::from_symbol(op.symbol()), Some(op));
    }
    assert_eq!(Operator::from_symbol('×'), Some(Operator::Mul));
    assert_eq!(Operator::from_symbol('÷'), Some(Operator::Div));
    assert_eq!(Operator::from_symbol('^'), None);
    assert!(Operator::Add.is_associative_commutative());
    assert!(Operator::Mul.is_associative_commutative());
    assert!(!Operator::Sub.is_associative_commutative());
    assert!(!Operator::Div.is_associative_commutative());
}

#[test]
fn test_evaluate_single_leaf() {
    let result = evaluate(&TreeShape::Leaf, &[], &[r(7)]);
    assert_eq!(result, Ok(r(7)));
}

#[test]
fn test_evaluate_respects_preorder_labelling() {
    let left_comb = node(node(leaf(), leaf()), leaf());
    let right_comb = node(leaf(), node(leaf(), leaf()));
    let ops = [Operator::Sub, Operator::Div];
    let vals = [r(6), r(3), r(1)];

    // (6 / 3) - 1
    assert_eq!(evaluate(&left_comb, &ops, &vals), Ok(r(1)));
    // 6 - (3 / 1)
    assert_eq!(evaluate(&right_comb, &ops, &vals), Ok(r(3)));
}

#[test]
fn test_evaluate_is_exact() {
    let shape = node(node(leaf(), leaf()), leaf());
    let ops = [Operator::Add, Operator::Add];
    let vals = [frac(1, 3), frac(1, 3), frac(1, 3)];
    assert_eq!(evaluate(&shape, &ops, &vals), Ok(r(1)));
}

#[test]
fn test_classic_twenty_four() {
    // 6 / (1 - (3 / 4))
    let shape = node(leaf(), node(leaf(), node(leaf(), leaf())));
    let ops = [Operator::Div, Operator::Sub, Operator::Div];
    let vals = [r(6), r(1), r(3), r(4)];

    assert_eq!(evaluate(&shape, &ops, &vals), Ok(r(24)));
    assert_eq!(
        render(&shape, &ops, &vals),
        Ok("(6 / (1 - (3 / 4)))".to_string())
    );
}

#[test]
fn test_rpn_order() {
    let shape = node(leaf(), node(leaf(), node(leaf(), leaf())));
    let ops = [Operator::Div, Operator::Sub, Operator::Div];
    let vals = [r(6), r(1), r(3), r(4)];
    let assignment = Assignment::new(&shape, &ops, &vals);
    assert!(assignment.is_ok());
    if let Ok(assignment) = assignment {
        let rpn = assignment.rpn();
        assert_eq!(
            rpn,
            Ok(vec![
                Token::Operand(&vals[0]),
                Token::Operand(&vals[1]),
                Token::Operand(&vals[2]),
                Token::Operand(&vals[3]),
                Token::Operator(Operator::Div),
                Token::Operator(Operator::Sub),
                Token::Operator(Operator::Div),
            ])
        );
        let prefix = assignment.prefix();
        assert_eq!(
            prefix.map(|tokens| tokens.first().copied()),
            Ok(Some(Token::Operator(Operator::Div)))
        );
    }
}

#[test]
fn test_render_fully_parenthesizes() {
    let shape = node(node(leaf(), leaf()), node(leaf(), leaf()));
    let ops = [Operator::Mul, Operator::Add, Operator::Sub];
    let vals = [r(1), r(2), r(3), frac(1, 2)];
    assert_eq!(
        render(&shape, &ops, &vals),
        Ok("((1 + 2) * (3 - (1/2)))".to_string())
    );
    assert_eq!(render(&TreeShape::Leaf, &[], &[r(-4)]), Ok("-4".to_string()));
}

#[test]
fn test_display_matches_infix() {
    let shape = node(leaf(), leaf());
    let ops = [Operator::Sub];
    let vals = [r(8), r(2)];
    if let Ok(assignment) = Assignment::new(&shape, &ops, &vals) {
        assert_eq!(format!("{}", assignment), "(8 - 2)");
    } else {
        panic!("valid assignment rejected");
    }
}

#[test]
fn test_division_by_zero_anywhere_in_tree() {
    // 1 / (2 - 2)
    let shape = node(leaf(), node(leaf(), leaf()));
    let ops = [Operator::Div, Operator::Sub];
    let vals = [r(1), r(2), r(2)];
    assert_eq!(
        evaluate(&shape, &ops, &vals),
        Err(ExpressionError::DivisionByZero)
    );
}

#[test]
fn test_count_mismatch_is_rejected() {
    let shape = node(leaf(), leaf());
    assert_eq!(
        evaluate(&shape, &[Operator::Add], &[r(1)]),
        Err(ExpressionError::OperandCountMismatch {
            operators: 1,
            operands: 1,
        })
    );
    assert_eq!(
        render(&shape, &[Operator::Add, Operator::Add], &[r(1), r(2), r(3)]),
        Err(ExpressionError::ShapeMismatch {
            internal_nodes: 1,
            operators: 2,
        })
    );
}

#[test]
fn test_rpn_evaluation_matches_direct_evaluation() {
    let mut enumerator = TreeEnumerator::new();
    let ops = [Operator::Sub, Operator::Div, Operator::Mul, Operator::Sub];
    let vals = [r(7), r(2), r(5), r(3), r(2)];
    for shape in enumerator.enumerate(4).iter() {
        let direct = eval_direct(shape, &mut ops.iter(), &mut vals.iter());
        assert_eq!(Some(evaluate(shape, &ops, &vals)), direct);
    }
}

#[test]
fn test_uniform_associative_operator_ignores_shape() {
    let mut enumerator = TreeEnumerator::new();
    let vals = [r(3), frac(1, 2), r(-4), r(5)];
    for op in [Operator::Add, Operator::Mul] {
        let ops = [op; 3];
        let values: Vec<_> = enumerator
            .enumerate(3)
            .iter()
            .map(|shape| evaluate(shape, &ops, &vals))
            .collect();
        assert!(values.iter().all(|v| v == &values[0]), "{:?}", values);
    }
}

#[test]
fn test_mixed_associative_operators_depend_on_shape() {
    let left_comb = node(node(leaf(), leaf()), leaf());
    let right_comb = node(leaf(), node(leaf(), leaf()));
    let ops = [Operator::Add, Operator::Mul];
    let vals = [r(1), r(2), r(3)];
    // (1 * 2) + 3 versus 1 + (2 * 3)
    assert_eq!(evaluate(&left_comb, &ops, &vals), Ok(r(5)));
    assert_eq!(evaluate(&right_comb, &ops, &vals), Ok(r(7)));
}
