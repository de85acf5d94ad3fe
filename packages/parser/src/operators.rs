//! Operator tables
//!
//! Each table maps the source spelling of an operator to its AST tag.
//! The grammar decides which operators may appear at which precedence
//! level; the tables only name them. A symbol the grammar accepts but a
//! table does not know means the two have drifted apart, which is a bug
//! in this crate rather than in the input, so lookups panic on a miss.

use crate::ast::{BinaryOp, BinarySelectorOp, UnaryOp, UnarySelectorOp};

pub const BINARY_OPS: &[(&str, BinaryOp)] = &[
    ("||", BinaryOp::Or),
    ("&&", BinaryOp::And),
    ("<", BinaryOp::Lt),
    ("<=", BinaryOp::Le),
    (">", BinaryOp::Gt),
    (">=", BinaryOp::Ge),
    ("==", BinaryOp::Eq),
    ("!=", BinaryOp::Ne),
    ("+", BinaryOp::Add),
    ("-", BinaryOp::Subtract),
    ("*", BinaryOp::Multiply),
    ("/", BinaryOp::Divide),
    ("%", BinaryOp::Remainder),
];

/// `+` is accepted as a prefix but is the identity, so it has no entry.
pub const UNARY_OPS: &[(&str, UnaryOp)] = &[("-", UnaryOp::Negative), ("!", UnaryOp::Not)];

pub const BINARY_SELECTOR_OPS: &[(&str, BinarySelectorOp)] = &[
    ("||", BinarySelectorOp::Or),
    ("&&", BinarySelectorOp::And),
];

pub const UNARY_SELECTOR_OPS: &[(&str, UnarySelectorOp)] = &[("!", UnarySelectorOp::Not)];

/// Prefix symbol that is parsed but never materialized
pub const IDENTITY_PREFIX: &str = "+";

fn find<T: Copy>(table: &[(&str, T)], symbol: &str) -> Option<T> {
    table
        .iter()
        .find(|(candidate, _)| *candidate == symbol)
        .map(|(_, op)| *op)
}

fn expect_in<T: Copy>(table: &[(&str, T)], family: &str, symbol: &str) -> T {
    match find(table, symbol) {
        Some(op) => op,
        None => panic!("{family} operator table has no entry for {symbol:?}; grammar and builder are out of sync"),
    }
}

impl BinaryOp {
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        find(BINARY_OPS, symbol)
    }

    pub fn lookup(symbol: &str) -> Self {
        expect_in(BINARY_OPS, "binary", symbol)
    }
}

impl UnaryOp {
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        find(UNARY_OPS, symbol)
    }

    pub fn lookup(symbol: &str) -> Self {
        expect_in(UNARY_OPS, "unary", symbol)
    }
}

impl BinarySelectorOp {
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        find(BINARY_SELECTOR_OPS, symbol)
    }

    pub fn lookup(symbol: &str) -> Self {
        expect_in(BINARY_SELECTOR_OPS, "binary selector", symbol)
    }
}

impl UnarySelectorOp {
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        find(UNARY_SELECTOR_OPS, symbol)
    }

    pub fn lookup(symbol: &str) -> Self {
        expect_in(UNARY_SELECTOR_OPS, "unary selector", symbol)
    }
}
