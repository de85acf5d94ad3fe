use crate::ast::{SizeUnit, Value, SIZE_UNITS};
use crate::build::build_args;
use crate::color::Rgba;
use crate::cst::{Leaf, ValueNode};
use crate::error::{ParseError, ParseResult};

/// Resolve a literal leaf into a typed value
pub fn resolve_value(node: &ValueNode) -> ParseResult<Value> {
    match node {
        ValueNode::Float(leaf) => Ok(Value::Double {
            value: parse_double(leaf, &leaf.text)?,
        }),
        ValueNode::Ident(leaf) => Ok(Value::VariableRef {
            name: leaf.text.clone(),
        }),
        ValueNode::Color(leaf) => {
            let rgba = Rgba::parse_smart(&leaf.text).map_err(|err| {
                ParseError::malformed_literal(leaf.span, &leaf.text, format!("#{}", err.expected))
            })?;
            Ok(Value::Color { rgba })
        }
        ValueNode::Call(call) => Ok(Value::Call {
            name: call.name.text.clone(),
            args: build_args(&call.args)?,
        }),
        ValueNode::Size(leaf) => resolve_size(leaf),
        ValueNode::Uint(leaf) => {
            let value = leaf.text.parse::<u32>().map_err(|_| {
                ParseError::malformed_literal(leaf.span, &leaf.text, "unsigned 32-bit integer")
            })?;
            Ok(Value::Uint { value })
        }
        ValueNode::Bool(leaf) => match leaf.text.as_str() {
            "true" => Ok(Value::Bool { value: true }),
            "false" => Ok(Value::Bool { value: false }),
            other => panic!("boolean literal {other:?} not produced by the grammar"),
        },
    }
}

fn parse_double(leaf: &Leaf, text: &str) -> ParseResult<f64> {
    match text.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ParseError::malformed_literal(leaf.span, &leaf.text, "finite decimal number")),
    }
}

/// `<number><unit>`, e.g. `12px` or `1.5rem`
fn resolve_size(leaf: &Leaf) -> ParseResult<Value> {
    let split = leaf
        .text
        .find(|c: char| c.is_ascii_alphabetic() || c == '%')
        .unwrap_or(leaf.text.len());
    let (number, suffix) = leaf.text.split_at(split);

    let magnitude = parse_double(leaf, number)?;
    let unit = SizeUnit::from_suffix(suffix).ok_or_else(|| {
        let units: Vec<_> = SIZE_UNITS.iter().map(|(text, _)| *text).collect();
        ParseError::malformed_literal(leaf.span, &leaf.text, format!("a size unit ({})", units.join(", ")))
    })?;

    Ok(Value::Size { magnitude, unit })
}
