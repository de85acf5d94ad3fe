//! Deterministic textual form of a stylesheet
//!
//! The AST only contains vectors, structs and enums, so serializing it
//! visits nodes in source order and the output is stable across builds.
//! Golden files under `tests/fixtures/snapshots` are stored in this form.

use crate::ast::Stylesheet;

/// Serialize a stylesheet as pretty JSON
pub fn to_snapshot(sheet: &Stylesheet) -> serde_json::Result<String> {
    serde_json::to_string_pretty(sheet)
}

/// Serialize a stylesheet as single-line JSON
pub fn to_compact_snapshot(sheet: &Stylesheet) -> serde_json::Result<String> {
    serde_json::to_string(sheet)
}

/// Read a snapshot back into a stylesheet
pub fn from_snapshot(snapshot: &str) -> serde_json::Result<Stylesheet> {
    serde_json::from_str(snapshot)
}
