//! Concrete syntax tree
//!
//! This is the parse tree the AST builder consumes. It mirrors the
//! grammar rule for rule. Where a rule has mutually exclusive
//! alternatives the node is an enum, so "exactly one alternative is
//! populated" holds by construction. Binary precedence levels share the
//! generic [`Level`] shape and unary levels share [`Prefixed`].

use crate::lexer::TokenSpan;

/// Raw token text with its location
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leaf {
    pub text: String,
    pub span: TokenSpan,
}

impl Leaf {
    pub fn new(text: impl Into<String>, span: TokenSpan) -> Self {
        Self {
            text: text.into(),
            span,
        }
    }
}

/// One binary precedence level: `first (op operand)*`
#[derive(Debug, Clone, PartialEq)]
pub struct Level<N> {
    pub first: N,
    pub rest: Vec<(Leaf, N)>,
}

impl<N> Level<N> {
    pub fn single(first: N) -> Self {
        Self {
            first,
            rest: Vec::new(),
        }
    }
}

/// One unary level: prefix operators in source order, then the operand
#[derive(Debug, Clone, PartialEq)]
pub struct Prefixed<A> {
    pub ops: Vec<Leaf>,
    pub atom: A,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct File {
    pub statements: Vec<Statement>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Variable(VariableDef),
    NamedClass(NamedClassDef),
    AnonymousClass(AnonymousClassDef),
}

#[derive(Debug, Clone, PartialEq)]
pub struct VariableDef {
    pub name: Leaf,
    pub params: Vec<ParamDef>,
    pub expr: ExprNode,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParamDef {
    pub name: Leaf,
    pub default_value: ExprNode,
}

// Expressions, loosest binding first

pub type ExprNode = L6Expr;
pub type L6Expr = Level<L5Expr>;
pub type L5Expr = Level<L4Expr>;
pub type L4Expr = Level<L3Expr>;
pub type L3Expr = Level<L2Expr>;
pub type L2Expr = Level<L1Expr>;
pub type L1Expr = Prefixed<AtomNode>;

#[derive(Debug, Clone, PartialEq)]
pub enum AtomNode {
    Paren(Box<ExprNode>),
    Value(ValueNode),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ValueNode {
    Float(Leaf),
    Ident(Leaf),
    Color(Leaf),
    Call(CallNode),
    Size(Leaf),
    Uint(Leaf),
    Bool(Leaf),
}

#[derive(Debug, Clone, PartialEq)]
pub struct CallNode {
    pub name: Leaf,
    pub args: Vec<ExprNode>,
}

// Selectors

#[derive(Debug, Clone, PartialEq)]
pub struct SelectorChainNode {
    pub steps: Vec<SelectorL3>,
}

pub type SelectorL3 = Level<SelectorL2>;
pub type SelectorL2 = Level<SelectorL1>;
pub type SelectorL1 = Prefixed<SelectorAtomNode>;

#[derive(Debug, Clone, PartialEq)]
pub enum SelectorAtomNode {
    Paren(Box<SelectorChainNode>),
    Selector(SelectorNode),
}

#[derive(Debug, Clone, PartialEq)]
pub enum SelectorNode {
    Ui(Leaf),
    /// `%name(param = default, ..)`
    Custom {
        name: Leaf,
        params: Vec<ParamDef>,
    },
    Marker(Leaf),
    StateMap(Vec<StateNode>),
    Children(Option<RangeNode>),
    /// `<~`
    LeftSiblings(Option<RangeNode>),
    /// `~>`
    RightSiblings(Option<RangeNode>),
    Parent,
    Slice(RangeNode),
    Reverse,
    Unique,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StateNode {
    pub name: Leaf,
    pub value: Option<ExprNode>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RangeNode {
    /// `expr`
    Point(ExprNode),
    /// `low..high`
    Bounded(ExprNode, ExprNode),
    /// `..high`
    UpTo(ExprNode),
    /// `low..`
    From(ExprNode),
}

// Classes

#[derive(Debug, Clone, PartialEq)]
pub struct NamedClassDef {
    pub name: Leaf,
    pub content: ClassContentNode,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnonymousClassDef {
    pub selector: SelectorChainNode,
    pub content: ClassContentNode,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ClassContentNode {
    pub parents: Vec<ParentNode>,
    /// `None` when the class ends with `;` instead of a body
    pub body: Option<Vec<ClassBodyItem>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParentNode {
    pub name: Leaf,
    pub args: Option<Vec<ExprNode>>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ClassBodyItem {
    Property(PropertyNode),
    SubClass(AnonymousClassDef),
}

#[derive(Debug, Clone, PartialEq)]
pub struct PropertyNode {
    pub name: Leaf,
    pub expr: ExprNode,
}
