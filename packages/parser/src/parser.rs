use crate::cst::*;
use crate::error::{ParseError, ParseResult};
use crate::lexer::{lex, SpannedToken, Token};

const L4_OPS: &[Token<'static>] = &[
    Token::Lt,
    Token::Lte,
    Token::Gt,
    Token::Gte,
    Token::EqEq,
    Token::NotEq,
];
const L3_OPS: &[Token<'static>] = &[Token::Plus, Token::Minus];
const L2_OPS: &[Token<'static>] = &[Token::Star, Token::Slash, Token::Percent];
const L1_OPS: &[Token<'static>] = &[Token::Minus, Token::Bang, Token::Plus];

/// Deepest allowed nesting of groups, calls and sub-classes
pub const MAX_NESTING_DEPTH: usize = 128;

/// Recursive descent parser producing the concrete syntax tree
///
/// Terminators (`;`) after variables and properties are optional. One is
/// needed when the next class body item starts with a symbol that would
/// otherwise continue the expression, e.g. `width: 1; > { .. }`.
pub struct Parser<'src> {
    tokens: Vec<SpannedToken<'src>>,
    pos: usize,
    depth: usize,
}

impl<'src> Parser<'src> {
    pub fn new(source: &'src str) -> ParseResult<Self> {
        let tokens = lex(source).collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            tokens,
            pos: 0,
            depth: 0,
        })
    }

    /// Parse a complete file
    pub fn parse_file(&mut self) -> ParseResult<File> {
        let mut file = File::default();

        while !self.is_at_end() {
            file.statements.push(self.parse_statement()?);
        }

        Ok(file)
    }

    fn parse_statement(&mut self) -> ParseResult<Statement> {
        if self.check(&Token::Dot) {
            return Ok(Statement::NamedClass(self.parse_named_class()?));
        }

        if self.starts_variable() {
            return Ok(Statement::Variable(self.parse_variable()?));
        }

        Ok(Statement::AnonymousClass(self.parse_anonymous_class()?))
    }

    /// `x =`, `x() =` or `x(p =` all start a variable; anything else
    /// beginning with an identifier is a selector chain.
    fn starts_variable(&self) -> bool {
        matches!(
            (
                self.peek_token(0),
                self.peek_token(1),
                self.peek_token(2),
                self.peek_token(3)
            ),
            (Some(Token::Ident(_)), Some(Token::Eq), _, _)
                | (
                    Some(Token::Ident(_)),
                    Some(Token::LParen),
                    Some(Token::RParen),
                    Some(Token::Eq)
                )
                | (
                    Some(Token::Ident(_)),
                    Some(Token::LParen),
                    Some(Token::Ident(_)),
                    Some(Token::Eq)
                )
        )
    }

    fn parse_variable(&mut self) -> ParseResult<VariableDef> {
        let name = self.expect_ident()?;

        let params = if self.check(&Token::LParen) {
            self.parse_params()?
        } else {
            Vec::new()
        };

        self.expect(Token::Eq)?;
        let expr = self.parse_expr()?;
        self.match_token(&Token::Semi);

        Ok(VariableDef { name, params, expr })
    }

    fn parse_params(&mut self) -> ParseResult<Vec<ParamDef>> {
        self.expect(Token::LParen)?;

        let mut params = Vec::new();
        while !self.check(&Token::RParen) && !self.is_at_end() {
            let name = self.expect_ident()?;
            self.expect(Token::Eq)?;
            let default_value = self.parse_expr()?;
            params.push(ParamDef {
                name,
                default_value,
            });

            if !self.match_token(&Token::Comma) {
                break;
            }
        }

        self.expect(Token::RParen)?;
        Ok(params)
    }

    fn parse_named_class(&mut self) -> ParseResult<NamedClassDef> {
        self.expect(Token::Dot)?;
        let name = self.expect_ident()?;
        let content = self.parse_class_content()?;

        Ok(NamedClassDef { name, content })
    }

    fn parse_anonymous_class(&mut self) -> ParseResult<AnonymousClassDef> {
        let selector = self.parse_selector_chain()?;
        let content = self.parse_class_content()?;

        Ok(AnonymousClassDef { selector, content })
    }

    fn parse_class_content(&mut self) -> ParseResult<ClassContentNode> {
        let mut parents = Vec::new();
        if self.match_token(&Token::Extends) {
            loop {
                parents.push(self.parse_parent()?);
                if !self.match_token(&Token::Comma) {
                    break;
                }
            }
        }

        if self.match_token(&Token::Semi) {
            return Ok(ClassContentNode {
                parents,
                body: None,
            });
        }

        self.expect(Token::LBrace)?;

        let mut items = Vec::new();
        while !self.check(&Token::RBrace) && !self.is_at_end() {
            items.push(self.parse_class_body_item()?);
        }

        self.expect(Token::RBrace)?;

        Ok(ClassContentNode {
            parents,
            body: Some(items),
        })
    }

    fn parse_parent(&mut self) -> ParseResult<ParentNode> {
        let name = self.expect_ident()?;

        let args = if self.check(&Token::LParen) {
            Some(self.parse_args()?)
        } else {
            None
        };

        Ok(ParentNode { name, args })
    }

    fn parse_class_body_item(&mut self) -> ParseResult<ClassBodyItem> {
        if let (Some(Token::Ident(_)), Some(Token::Colon)) = (self.peek_token(0), self.peek_token(1)) {
            let name = self.expect_ident()?;
            self.expect(Token::Colon)?;
            let expr = self.parse_expr()?;
            self.match_token(&Token::Semi);

            return Ok(ClassBodyItem::Property(PropertyNode { name, expr }));
        }

        let class = self.nested(Self::parse_anonymous_class)?;
        Ok(ClassBodyItem::SubClass(class))
    }

    // Expressions

    /// Parse an expression with full operator precedence
    pub fn parse_expr(&mut self) -> ParseResult<ExprNode> {
        self.parse_l6_expr()
    }

    fn parse_l6_expr(&mut self) -> ParseResult<L6Expr> {
        self.parse_level(&[Token::Or], Self::parse_l5_expr)
    }

    fn parse_l5_expr(&mut self) -> ParseResult<L5Expr> {
        self.parse_level(&[Token::And], Self::parse_l4_expr)
    }

    fn parse_l4_expr(&mut self) -> ParseResult<L4Expr> {
        self.parse_level(L4_OPS, Self::parse_l3_expr)
    }

    fn parse_l3_expr(&mut self) -> ParseResult<L3Expr> {
        self.parse_level(L3_OPS, Self::parse_l2_expr)
    }

    fn parse_l2_expr(&mut self) -> ParseResult<L2Expr> {
        self.parse_level(L2_OPS, Self::parse_l1_expr)
    }

    fn parse_l1_expr(&mut self) -> ParseResult<L1Expr> {
        let mut ops = Vec::new();
        while let Some(op) = self.match_operator(L1_OPS) {
            ops.push(op);
        }

        let atom = self.parse_atom()?;
        Ok(Prefixed { ops, atom })
    }

    fn parse_atom(&mut self) -> ParseResult<AtomNode> {
        if self.check(&Token::LParen) {
            return self.nested(|p| {
                p.advance();
                let inner = p.parse_expr()?;
                p.expect(Token::RParen)?;
                Ok(AtomNode::Paren(Box::new(inner)))
            });
        }

        Ok(AtomNode::Value(self.parse_value()?))
    }

    fn parse_value(&mut self) -> ParseResult<ValueNode> {
        let Some(spanned) = self.peek().cloned() else {
            return Err(ParseError::unexpected_eof("expression"));
        };
        let leaf = |text: &str| Leaf::new(text, spanned.span);

        let value = match spanned.token {
            Token::Float(n) => ValueNode::Float(leaf(n)),
            Token::Uint(n) => ValueNode::Uint(leaf(n)),
            Token::Dimension(d) => ValueNode::Size(leaf(d)),
            Token::Color(c) => ValueNode::Color(leaf(c)),
            Token::True => ValueNode::Bool(leaf("true")),
            Token::False => ValueNode::Bool(leaf("false")),
            Token::Ident(name) => {
                if self.peek_token(1) == Some(&Token::LParen) {
                    let name = leaf(name);
                    return self.nested(|p| {
                        p.advance();
                        let args = p.parse_args()?;
                        Ok(ValueNode::Call(CallNode { name, args }))
                    });
                }
                ValueNode::Ident(leaf(name))
            }
            _ => return Err(self.error_here("expression")),
        };

        self.advance();
        Ok(value)
    }

    /// Parse a parenthesized, comma separated argument list
    fn parse_args(&mut self) -> ParseResult<Vec<ExprNode>> {
        self.expect(Token::LParen)?;

        let mut args = Vec::new();
        while !self.check(&Token::RParen) && !self.is_at_end() {
            args.push(self.parse_expr()?);

            if !self.match_token(&Token::Comma) {
                break;
            }
        }

        self.expect(Token::RParen)?;
        Ok(args)
    }

    // Selectors

    /// Parse a chain of selector steps written side by side
    pub fn parse_selector_chain(&mut self) -> ParseResult<SelectorChainNode> {
        let mut steps = vec![self.parse_selector_l3()?];

        while self.starts_selector() {
            steps.push(self.parse_selector_l3()?);
        }

        Ok(SelectorChainNode { steps })
    }

    fn starts_selector(&self) -> bool {
        matches!(
            self.peek_token(0),
            Some(
                Token::Ident(_)
                    | Token::Percent
                    | Token::At
                    | Token::LBracket
                    | Token::Gt
                    | Token::Lt
                    | Token::LtTilde
                    | Token::TildeGt
                    | Token::SliceOpen
                    | Token::Tilde
                    | Token::Dollar
                    | Token::LParen
                    | Token::Bang
            )
        )
    }

    fn parse_selector_l3(&mut self) -> ParseResult<SelectorL3> {
        self.parse_level(&[Token::Or], Self::parse_selector_l2)
    }

    fn parse_selector_l2(&mut self) -> ParseResult<SelectorL2> {
        self.parse_level(&[Token::And], Self::parse_selector_l1)
    }

    fn parse_selector_l1(&mut self) -> ParseResult<SelectorL1> {
        let mut ops = Vec::new();
        while let Some(op) = self.match_operator(&[Token::Bang]) {
            ops.push(op);
        }

        let atom = if self.check(&Token::LParen) {
            self.nested(|p| {
                p.advance();
                let inner = p.parse_selector_chain()?;
                p.expect(Token::RParen)?;
                Ok(SelectorAtomNode::Paren(Box::new(inner)))
            })?
        } else {
            SelectorAtomNode::Selector(self.parse_selector()?)
        };

        Ok(Prefixed { ops, atom })
    }

    fn parse_selector(&mut self) -> ParseResult<SelectorNode> {
        let Some(spanned) = self.peek().cloned() else {
            return Err(ParseError::unexpected_eof("selector"));
        };

        match spanned.token {
            Token::Ident(name) => {
                self.advance();
                Ok(SelectorNode::Ui(Leaf::new(name, spanned.span)))
            }
            Token::Percent => {
                self.advance();
                let name = self.expect_ident()?;
                let params = if self.check(&Token::LParen) {
                    self.parse_params()?
                } else {
                    Vec::new()
                };
                Ok(SelectorNode::Custom { name, params })
            }
            Token::At => {
                self.advance();
                Ok(SelectorNode::Marker(self.expect_ident()?))
            }
            Token::LBracket => {
                self.advance();
                Ok(SelectorNode::StateMap(self.parse_state_map()?))
            }
            Token::Gt => {
                self.advance();
                Ok(SelectorNode::Children(self.parse_optional_slice()?))
            }
            Token::LtTilde => {
                self.advance();
                Ok(SelectorNode::LeftSiblings(self.parse_optional_slice()?))
            }
            Token::TildeGt => {
                self.advance();
                Ok(SelectorNode::RightSiblings(self.parse_optional_slice()?))
            }
            Token::Lt => {
                self.advance();
                Ok(SelectorNode::Parent)
            }
            Token::SliceOpen => {
                self.advance();
                Ok(SelectorNode::Slice(self.parse_slice_body()?))
            }
            Token::Tilde => {
                self.advance();
                Ok(SelectorNode::Reverse)
            }
            Token::Dollar => {
                self.advance();
                Ok(SelectorNode::Unique)
            }
            _ => Err(self.error_here("selector")),
        }
    }

    /// Parse `state (, state)* ]` after the opening bracket
    fn parse_state_map(&mut self) -> ParseResult<Vec<StateNode>> {
        let mut states = Vec::new();

        loop {
            let name = self.expect_ident()?;
            let value = if self.match_token(&Token::Eq) {
                Some(self.parse_expr()?)
            } else {
                None
            };
            states.push(StateNode { name, value });

            if !self.match_token(&Token::Comma) {
                break;
            }
        }

        self.expect(Token::RBracket)?;
        Ok(states)
    }

    fn parse_optional_slice(&mut self) -> ParseResult<Option<RangeNode>> {
        if self.match_token(&Token::SliceOpen) {
            Ok(Some(self.parse_slice_body()?))
        } else {
            Ok(None)
        }
    }

    /// Parse `range ]` after `:[`
    fn parse_slice_body(&mut self) -> ParseResult<RangeNode> {
        let range = if self.match_token(&Token::DotDot) {
            RangeNode::UpTo(self.parse_expr()?)
        } else {
            let low = self.parse_expr()?;
            if !self.match_token(&Token::DotDot) {
                RangeNode::Point(low)
            } else if self.check(&Token::RBracket) {
                RangeNode::From(low)
            } else {
                RangeNode::Bounded(low, self.parse_expr()?)
            }
        };

        self.expect(Token::RBracket)?;
        Ok(range)
    }

    // Helper methods

    /// Run `parse` one nesting level deeper, failing at the next token once
    /// the limit is reached
    fn nested<T>(&mut self, parse: impl FnOnce(&mut Self) -> ParseResult<T>) -> ParseResult<T> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(self.error_here(format!(
                "at most {} levels of nesting",
                MAX_NESTING_DEPTH
            )));
        }

        self.depth += 1;
        let result = parse(self);
        self.depth -= 1;
        result
    }

    /// Parse one binary level: an operand followed by `(op operand)*`
    fn parse_level<N>(
        &mut self,
        ops: &[Token<'_>],
        operand: fn(&mut Self) -> ParseResult<N>,
    ) -> ParseResult<Level<N>> {
        let first = operand(self)?;

        let mut rest = Vec::new();
        while let Some(op) = self.match_operator(ops) {
            rest.push((op, operand(self)?));
        }

        Ok(Level { first, rest })
    }

    /// Consume the next token if it is one of `ops`, returning its symbol
    fn match_operator(&mut self, ops: &[Token<'_>]) -> Option<Leaf> {
        let spanned = self.peek()?;
        if !ops.iter().any(|op| *op == spanned.token) {
            return None;
        }

        let leaf = Leaf::new(spanned.token.symbol().unwrap_or_default(), spanned.span);
        self.advance();
        Some(leaf)
    }

    fn peek(&self) -> Option<&SpannedToken<'src>> {
        self.tokens.get(self.pos)
    }

    fn peek_token(&self, offset: usize) -> Option<&Token<'src>> {
        self.tokens.get(self.pos + offset).map(|t| &t.token)
    }

    fn advance(&mut self) -> Option<&SpannedToken<'src>> {
        let token = self.tokens.get(self.pos);
        self.pos += 1;
        token
    }

    fn is_at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    fn check(&self, token: &Token<'_>) -> bool {
        match self.peek() {
            Some(t) => std::mem::discriminant(&t.token) == std::mem::discriminant(token),
            None => false,
        }
    }

    fn match_token(&mut self, token: &Token<'_>) -> bool {
        if self.check(token) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, token: Token<'_>) -> ParseResult<()> {
        if self.match_token(&token) {
            Ok(())
        } else {
            Err(self.error_here(token.to_string()))
        }
    }

    fn expect_ident(&mut self) -> ParseResult<Leaf> {
        match self.peek() {
            Some(SpannedToken {
                token: Token::Ident(s),
                span,
            }) => {
                let leaf = Leaf::new(*s, *span);
                self.advance();
                Ok(leaf)
            }
            _ => Err(self.error_here("identifier")),
        }
    }

    fn error_here(&self, expected: impl Into<String>) -> ParseError {
        match self.peek() {
            Some(t) => ParseError::unexpected_token(t.span, expected, t.token.to_string()),
            None => ParseError::unexpected_eof(expected),
        }
    }
}

/// Parse source text into a concrete syntax tree
pub fn parse_cst(source: &str) -> ParseResult<File> {
    let mut parser = Parser::new(source)?;
    parser.parse_file()
}
