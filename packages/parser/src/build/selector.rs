use crate::ast::{
    AxesSelector, BinarySelectorOp, Range, Selector, SelectorChain, SelectorExpr,
    SelectorExprOrSelector, State, UnaryOrAtomSelectorExpr, UnarySelectorOp,
};
use crate::build::build_expr;
use crate::build::stylesheet::build_param;
use crate::cst::{
    Level, RangeNode, SelectorAtomNode, SelectorChainNode, SelectorL1, SelectorL3, SelectorNode,
    StateNode,
};
use crate::error::ParseResult;
use crate::fold::{fold_binary, fold_unary_prefix};

pub fn build_selector_chain(node: &SelectorChainNode) -> ParseResult<SelectorChain> {
    let steps = node
        .steps
        .iter()
        .map(build_selector_expr)
        .collect::<ParseResult<Vec<_>>>()?;

    Ok(SelectorChain { steps })
}

/// Build one chain step, resolving `||` over `&&` over `!`
pub fn build_selector_expr(node: &SelectorL3) -> ParseResult<SelectorExpr> {
    fold_level(node, |l2| fold_level(l2, build_selector_l1))
}

fn fold_level<N>(
    level: &Level<N>,
    descend: impl FnMut(&N) -> ParseResult<SelectorExpr>,
) -> ParseResult<SelectorExpr> {
    fold_binary(
        level,
        descend,
        |op| BinarySelectorOp::lookup(&op.text),
        SelectorExpr::binary,
    )
}

fn build_selector_l1(node: &SelectorL1) -> ParseResult<SelectorExpr> {
    let inner = match &node.atom {
        SelectorAtomNode::Paren(chain) => {
            SelectorExprOrSelector::SelectorExpr(SelectorExpr::Chain(build_selector_chain(chain)?))
        }
        SelectorAtomNode::Selector(selector) => SelectorExprOrSelector::Selector(build_selector(selector)?),
    };

    let folded = fold_unary_prefix(
        &node.ops,
        UnaryOrAtomSelectorExpr::atom(inner),
        |op| Some(UnarySelectorOp::lookup(&op.text)),
        UnaryOrAtomSelectorExpr::unary,
    );

    Ok(SelectorExpr::UnaryOrAtom(folded))
}

pub fn build_selector(node: &SelectorNode) -> ParseResult<Selector> {
    let selector = match node {
        SelectorNode::Ui(leaf) => Selector::Ui {
            ident: leaf.text.clone(),
        },
        SelectorNode::Custom { name, params } => Selector::Custom {
            ident: name.text.clone(),
            params: params.iter().map(build_param).collect::<ParseResult<_>>()?,
        },
        SelectorNode::Marker(leaf) => Selector::Marker {
            ident: leaf.text.clone(),
        },
        SelectorNode::StateMap(states) => Selector::StateMap {
            states: states.iter().map(build_state).collect::<ParseResult<_>>()?,
        },
        SelectorNode::Children(range) => Selector::Axes(AxesSelector::Children {
            range: build_optional_range(range.as_ref())?,
        }),
        // The sibling rules are crossed: `<~` yields RightSiblings and
        // `~>` yields LeftSiblings.
        SelectorNode::LeftSiblings(range) => Selector::Axes(AxesSelector::RightSiblings {
            range: build_optional_range(range.as_ref())?,
        }),
        SelectorNode::RightSiblings(range) => Selector::Axes(AxesSelector::LeftSiblings {
            range: build_optional_range(range.as_ref())?,
        }),
        SelectorNode::Parent => Selector::Axes(AxesSelector::Parent),
        SelectorNode::Slice(range) => Selector::Slice {
            range: build_range(range)?,
        },
        SelectorNode::Reverse => Selector::Reverse,
        SelectorNode::Unique => Selector::Unique,
    };

    Ok(selector)
}

fn build_state(node: &StateNode) -> ParseResult<State> {
    Ok(State {
        name: node.name.text.clone(),
        value: node.value.as_ref().map(build_expr).transpose()?,
    })
}

/// Bounds are kept as expressions; they depend on evaluation context
pub fn build_range(node: &RangeNode) -> ParseResult<Range> {
    let range = match node {
        RangeNode::Point(expr) => Range::Point {
            expr: build_expr(expr)?,
        },
        RangeNode::Bounded(low, high) => Range::Bounded {
            low: build_expr(low)?,
            high: build_expr(high)?,
        },
        RangeNode::UpTo(high) => Range::LeftUnbounded {
            expr: build_expr(high)?,
        },
        RangeNode::From(low) => Range::RightUnbounded {
            expr: build_expr(low)?,
        },
    };

    Ok(range)
}

fn build_optional_range(node: Option<&RangeNode>) -> ParseResult<Option<Range>> {
    node.map(build_range).transpose()
}
