//! CST to AST builders
//!
//! A single recursive pass over the concrete syntax tree. Every node is
//! built bottom-up exactly once; the first malformed literal aborts the
//! whole build.

mod expr;
mod selector;
mod stylesheet;
mod value;

pub use expr::{build_args, build_expr};
pub use selector::{build_range, build_selector, build_selector_chain, build_selector_expr};
pub use stylesheet::{build_anonymous_class, build_named_class, build_stylesheet, build_variable};
pub use value::resolve_value;
