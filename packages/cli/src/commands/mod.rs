pub mod ast;
pub mod check;

pub use ast::{ast, AstArgs};
pub use check::{check, CheckArgs};
