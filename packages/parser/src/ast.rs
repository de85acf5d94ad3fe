//! Typed AST for Sall stylesheets
//!
//! Every node is an owned value built once by the builder and never
//! mutated. Nodes carry no spans and no links back to the syntax tree.

use crate::color::Rgba;
use serde::{Deserialize, Serialize};

/// Root document node
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Stylesheet {
    pub variables: Vec<Variable>,
    pub anonymous_classes: Vec<AnonymousClass>,
    pub named_classes: Vec<NamedClass>,
}

impl Stylesheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn variable(&self, name: &str) -> Option<&Variable> {
        self.variables.iter().find(|v| v.name == name)
    }

    /// Named classes are matched by explicit reference, e.g. from a `Parent`
    pub fn named_class(&self, name: &str) -> Option<&NamedClass> {
        self.named_classes.iter().find(|c| c.name == name)
    }
}

/// Named, parametrized, reusable expression
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variable {
    pub name: String,
    pub params: Vec<Param>,
    pub expr: Expr,
}

/// Formal parameter with a mandatory default
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Param {
    pub name: String,
    pub default_value: Expr,
}

/// Ordered call or parent-constructor arguments
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Args {
    pub exprs: Vec<Expr>,
}

impl Args {
    pub fn new(exprs: Vec<Expr>) -> Self {
        Self { exprs }
    }
}

// ---------------------------------------------------------------------------
// Expressions
// ---------------------------------------------------------------------------

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BinaryOp {
    Or,
    And,
    Lt,
    Le,
    Gt,
    Ge,
    Eq,
    Ne,
    Add,
    Subtract,
    Multiply,
    Divide,
    Remainder,
}

/// Unary prefix operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnaryOp {
    Negative,
    Not,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expr {
    Binary(BinaryExpr),
    UnaryOrAtom(UnaryOrAtomExpr),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinaryExpr {
    pub op: BinaryOp,
    pub left: Box<Expr>,
    pub right: Box<Expr>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum UnaryOrAtomExpr {
    Unary(UnaryExpr),
    Atom(AtomExpr),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnaryExpr {
    pub op: UnaryOp,
    pub operand: Box<UnaryOrAtomExpr>,
}

/// A literal value or a parenthesized sub-expression
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtomExpr {
    pub value: Box<ExprOrValue>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ExprOrValue {
    Expr(Expr),
    Value(Value),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Bool { value: bool },
    Uint { value: u32 },
    Double { value: f64 },
    Size { magnitude: f64, unit: SizeUnit },
    Color { rgba: Rgba },
    Call { name: String, args: Args },
    VariableRef { name: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SizeUnit {
    Px,
    Percent,
    Em,
    Rem,
    Vh,
    Vw,
}

pub const SIZE_UNITS: &[(&str, SizeUnit)] = &[
    ("px", SizeUnit::Px),
    ("%", SizeUnit::Percent),
    ("em", SizeUnit::Em),
    ("rem", SizeUnit::Rem),
    ("vh", SizeUnit::Vh),
    ("vw", SizeUnit::Vw),
];

impl SizeUnit {
    pub fn from_suffix(suffix: &str) -> Option<Self> {
        SIZE_UNITS
            .iter()
            .find(|(text, _)| *text == suffix)
            .map(|(_, unit)| *unit)
    }
}

impl Expr {
    pub fn binary(op: BinaryOp, left: Expr, right: Expr) -> Self {
        Expr::Binary(BinaryExpr {
            op,
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    /// Wrap a literal value as an atom
    pub fn value(value: Value) -> Self {
        Expr::UnaryOrAtom(UnaryOrAtomExpr::atom(ExprOrValue::Value(value)))
    }

    /// Wrap a sub-expression as a parenthesized atom
    pub fn group(inner: Expr) -> Self {
        Expr::UnaryOrAtom(UnaryOrAtomExpr::atom(ExprOrValue::Expr(inner)))
    }
}

impl UnaryOrAtomExpr {
    pub fn atom(value: ExprOrValue) -> Self {
        UnaryOrAtomExpr::Atom(AtomExpr {
            value: Box::new(value),
        })
    }

    pub fn unary(op: UnaryOp, operand: UnaryOrAtomExpr) -> Self {
        UnaryOrAtomExpr::Unary(UnaryExpr {
            op,
            operand: Box::new(operand),
        })
    }
}

impl From<UnaryOrAtomExpr> for Expr {
    fn from(expr: UnaryOrAtomExpr) -> Self {
        Expr::UnaryOrAtom(expr)
    }
}

// ---------------------------------------------------------------------------
// Selectors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BinarySelectorOp {
    Or,
    And,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnarySelectorOp {
    Not,
}

/// State predicate. `None` means the flag must be present, `Some` means
/// the flag must equal the value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct State {
    pub name: String,
    pub value: Option<Expr>,
}

/// Atomic selectors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Selector {
    Ui { ident: String },
    /// Externally defined matcher, configured by its parameters
    Custom { ident: String, params: Vec<Param> },
    Marker { ident: String },
    StateMap { states: Vec<State> },
    Axes(AxesSelector),
    Slice { range: Range },
    Reverse,
    Unique,
}

/// Navigation relative to the currently matched element
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AxesSelector {
    Children { range: Option<Range> },
    LeftSiblings { range: Option<Range> },
    RightSiblings { range: Option<Range> },
    Parent,
}

/// Positional sub-selection. Bounds stay unevaluated expressions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Range {
    /// A single index
    Point { expr: Expr },
    /// Closed interval
    Bounded { low: Expr, high: Expr },
    /// Open below, bounded above
    LeftUnbounded { expr: Expr },
    /// Bounded below, open above
    RightUnbounded { expr: Expr },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SelectorExprOrSelector {
    SelectorExpr(SelectorExpr),
    Selector(Selector),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SelectorExpr {
    Binary(BinarySelectorExpr),
    UnaryOrAtom(UnaryOrAtomSelectorExpr),
    Chain(SelectorChain),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinarySelectorExpr {
    pub op: BinarySelectorOp,
    pub left: Box<SelectorExpr>,
    pub right: Box<SelectorExpr>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum UnaryOrAtomSelectorExpr {
    Unary(UnarySelectorExpr),
    Atom(AtomSelectorExpr),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnarySelectorExpr {
    pub op: UnarySelectorOp,
    pub operand: Box<UnaryOrAtomSelectorExpr>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtomSelectorExpr {
    pub inner: Box<SelectorExprOrSelector>,
}

/// Navigation pipeline: each step applies to the result of the previous one
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SelectorChain {
    pub steps: Vec<SelectorExpr>,
}

impl SelectorExpr {
    pub fn binary(op: BinarySelectorOp, left: SelectorExpr, right: SelectorExpr) -> Self {
        SelectorExpr::Binary(BinarySelectorExpr {
            op,
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    /// Wrap a concrete selector as an atom
    pub fn selector(selector: Selector) -> Self {
        SelectorExpr::UnaryOrAtom(UnaryOrAtomSelectorExpr::atom(
            SelectorExprOrSelector::Selector(selector),
        ))
    }
}

impl UnaryOrAtomSelectorExpr {
    pub fn atom(inner: SelectorExprOrSelector) -> Self {
        UnaryOrAtomSelectorExpr::Atom(AtomSelectorExpr {
            inner: Box::new(inner),
        })
    }

    pub fn unary(op: UnarySelectorOp, operand: UnaryOrAtomSelectorExpr) -> Self {
        UnaryOrAtomSelectorExpr::Unary(UnarySelectorExpr {
            op,
            operand: Box::new(operand),
        })
    }
}

impl From<UnaryOrAtomSelectorExpr> for SelectorExpr {
    fn from(expr: UnaryOrAtomSelectorExpr) -> Self {
        SelectorExpr::UnaryOrAtom(expr)
    }
}

// ---------------------------------------------------------------------------
// Classes
// ---------------------------------------------------------------------------

/// Reference to another class with constructor-style arguments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parent {
    pub ident: String,
    pub args: Args,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub ident: String,
    pub expr: Expr,
}

/// Body shared by both class kinds
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ClassContent {
    pub parents: Vec<Parent>,
    pub properties: Vec<Property>,
    pub sub_classes: Vec<AnonymousClass>,
}

/// Style rule applied wherever its selector chain matches
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnonymousClass {
    pub selector_chain: SelectorChain,
    #[serde(flatten)]
    pub content: ClassContent,
}

/// Style rule applied by explicit reference
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedClass {
    pub name: String,
    #[serde(flatten)]
    pub content: ClassContent,
}

/// Either kind of class, borrowed
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Class<'a> {
    Anonymous(&'a AnonymousClass),
    Named(&'a NamedClass),
}

impl<'a> Class<'a> {
    pub fn content(&self) -> &'a ClassContent {
        match self {
            Class::Anonymous(class) => &class.content,
            Class::Named(class) => &class.content,
        }
    }

    pub fn properties(&self) -> &'a [Property] {
        &self.content().properties
    }
}

impl Stylesheet {
    /// Every top-level class, named classes first
    pub fn classes(&self) -> impl Iterator<Item = Class<'_>> {
        self.named_classes
            .iter()
            .map(Class::Named)
            .chain(self.anonymous_classes.iter().map(Class::Anonymous))
    }
}
