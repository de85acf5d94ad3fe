use crate::ast::{Args, BinaryOp, Expr, ExprOrValue, UnaryOp, UnaryOrAtomExpr};
use crate::build::resolve_value;
use crate::cst::{AtomNode, ExprNode, L1Expr, Leaf, Level};
use crate::error::ParseResult;
use crate::fold::{fold_binary, fold_unary_prefix};
use crate::operators::IDENTITY_PREFIX;

/// Build an expression, resolving all six precedence levels
pub fn build_expr(node: &ExprNode) -> ParseResult<Expr> {
    fold_level(node, |l5| {
        fold_level(l5, |l4| {
            fold_level(l4, |l3| fold_level(l3, |l2| fold_level(l2, build_l1_expr)))
        })
    })
}

pub fn build_args(exprs: &[ExprNode]) -> ParseResult<Args> {
    let exprs = exprs.iter().map(build_expr).collect::<ParseResult<Vec<_>>>()?;
    Ok(Args::new(exprs))
}

fn fold_level<N>(
    level: &Level<N>,
    descend: impl FnMut(&N) -> ParseResult<Expr>,
) -> ParseResult<Expr> {
    fold_binary(level, descend, |op| BinaryOp::lookup(&op.text), Expr::binary)
}

fn build_l1_expr(node: &L1Expr) -> ParseResult<Expr> {
    let atom = UnaryOrAtomExpr::atom(build_atom(&node.atom)?);
    let folded = fold_unary_prefix(&node.ops, atom, unary_op, UnaryOrAtomExpr::unary);

    Ok(Expr::UnaryOrAtom(folded))
}

fn unary_op(op: &Leaf) -> Option<UnaryOp> {
    if op.text == IDENTITY_PREFIX {
        None
    } else {
        Some(UnaryOp::lookup(&op.text))
    }
}

fn build_atom(node: &AtomNode) -> ParseResult<ExprOrValue> {
    match node {
        AtomNode::Paren(inner) => Ok(ExprOrValue::Expr(build_expr(inner)?)),
        AtomNode::Value(value) => Ok(ExprOrValue::Value(resolve_value(value)?)),
    }
}
