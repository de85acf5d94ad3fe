//! Tree folds shared by the expression and selector builders
//!
//! Both grammars are written as stacks of left-associative binary levels
//! over a unary prefix level. The builders walk those stacks with the two
//! folds below, passing in how to descend to the next level, how to name
//! an operator, and how to build a node.

use crate::cst::{Leaf, Level};

/// Fold one binary precedence level left to right.
///
/// The leftmost operand is reduced first by `descend` (which handles all
/// tighter levels), then every `(op, operand)` pair is folded into the
/// accumulator, so `a - b - c` becomes `(a - b) - c`.
pub fn fold_binary<N, T, O, E>(
    level: &Level<N>,
    mut descend: impl FnMut(&N) -> Result<T, E>,
    op_of: impl Fn(&Leaf) -> O,
    mut combine: impl FnMut(O, T, T) -> T,
) -> Result<T, E> {
    let mut acc = descend(&level.first)?;

    for (op, operand) in &level.rest {
        let right = descend(operand)?;
        acc = combine(op_of(op), acc, right);
    }

    Ok(acc)
}

/// Fold prefix operators around an already built operand.
///
/// `ops` is in source order, outermost first. The operator nearest the
/// operand applies first, so the fold runs over `ops` in reverse:
/// `!-x` becomes `Not(Negative(x))`. Operators for which `op_of` returns
/// `None` are identities and produce no node.
pub fn fold_unary_prefix<O, T>(
    ops: &[Leaf],
    operand: T,
    op_of: impl Fn(&Leaf) -> Option<O>,
    mut wrap: impl FnMut(O, T) -> T,
) -> T {
    ops.iter()
        .rev()
        .filter_map(op_of)
        .fold(operand, |inner, op| wrap(op, inner))
}
