//! Sall stylesheet parser
//!
//! Turns Sall source text into a typed AST in three stages:
//! [`lexer`] produces tokens, [`parser`] produces the concrete syntax
//! tree in [`cst`], and [`build`] resolves precedence and literals into
//! the [`ast`] model.

pub mod ast;
pub mod build;
pub mod color;
pub mod cst;
pub mod error;
pub mod fold;
pub mod lexer;
pub mod operators;
pub mod parser;
pub mod snapshot;

#[cfg(test)]
mod tests_expressions;
#[cfg(test)]
mod tests_selectors;
#[cfg(test)]
mod tests_stylesheet;

pub use ast::Stylesheet;
pub use build::build_stylesheet;
#[cfg(feature = "pretty-errors")]
pub use error::format_error;
pub use error::{ParseError, ParseResult};
pub use lexer::{lex, Token};
pub use parser::{parse_cst, Parser};
pub use snapshot::{from_snapshot, to_snapshot};

/// Parse source text into a stylesheet
pub fn parse(source: &str) -> ParseResult<Stylesheet> {
    let file = parse_cst(source)?;
    build_stylesheet(&file)
}
