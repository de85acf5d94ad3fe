//! Lexer for Sall stylesheets using logos
//!
//! Literal tokens keep their raw text. Turning that text into numbers,
//! sizes and colors is the job of the value resolver, which is where
//! malformed literals are reported.

use logos::{FilterResult, Logos};
use std::fmt;

/// Token types for Sall syntax
#[derive(Logos, Debug, Clone, PartialEq, Eq, Hash)]
#[logos(skip r"[ \t\r\n]+")]
#[logos(skip r"//[^\n]*")]
pub enum Token<'src> {
    /// Never emitted: the callback skips the comment or fails the lex
    #[token("/*", block_comment)]
    BlockComment,

    // Keywords
    #[token("true")]
    True,
    #[token("false")]
    False,
    #[token("extends")]
    Extends,

    // Identifiers
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice())]
    Ident(&'src str),

    // Literals
    #[regex(r"[0-9]+", |lex| lex.slice())]
    Uint(&'src str),

    #[regex(r"[0-9]+\.[0-9]+", |lex| lex.slice())]
    Float(&'src str),

    // Unit text is validated by the resolver, not here
    #[regex(r"[0-9]+(\.[0-9]+)?([a-zA-Z]+|%)", |lex| lex.slice())]
    Dimension(&'src str),

    #[regex(r"#[0-9a-zA-Z]+", |lex| lex.slice())]
    Color(&'src str),

    // Expression operators
    #[token("||")]
    Or,
    #[token("&&")]
    And,
    #[token("<")]
    Lt,
    #[token("<=")]
    Lte,
    #[token(">")]
    Gt,
    #[token(">=")]
    Gte,
    #[token("==")]
    EqEq,
    #[token("!=")]
    NotEq,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,
    #[token("!")]
    Bang,

    // Selector symbols
    #[token("@")]
    At,
    #[token("<~")]
    LtTilde,
    #[token("~>")]
    TildeGt,
    #[token("~")]
    Tilde,
    #[token("$")]
    Dollar,
    #[token(":[")]
    SliceOpen,
    #[token("..")]
    DotDot,

    // Punctuation
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token(",")]
    Comma,
    #[token(":")]
    Colon,
    #[token(";")]
    Semi,
    #[token("=")]
    Eq,
    #[token(".")]
    Dot,
}

impl<'src> Token<'src> {
    /// Source text of an operator token, as the operator tables spell it
    pub fn symbol(&self) -> Option<&'static str> {
        let symbol = match self {
            Token::Or => "||",
            Token::And => "&&",
            Token::Lt => "<",
            Token::Lte => "<=",
            Token::Gt => ">",
            Token::Gte => ">=",
            Token::EqEq => "==",
            Token::NotEq => "!=",
            Token::Plus => "+",
            Token::Minus => "-",
            Token::Star => "*",
            Token::Slash => "/",
            Token::Percent => "%",
            Token::Bang => "!",
            _ => return None,
        };
        Some(symbol)
    }
}

impl<'src> fmt::Display for Token<'src> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(symbol) = self.symbol() {
            return write!(f, "'{}'", symbol);
        }

        match self {
            Token::True => write!(f, "keyword 'true'"),
            Token::False => write!(f, "keyword 'false'"),
            Token::Extends => write!(f, "keyword 'extends'"),
            Token::Ident(s) => write!(f, "identifier '{}'", s),
            Token::Uint(n) | Token::Float(n) => write!(f, "number {}", n),
            Token::Dimension(d) => write!(f, "size {}", d),
            Token::Color(c) => write!(f, "color {}", c),
            Token::At => write!(f, "'@'"),
            Token::LtTilde => write!(f, "'<~'"),
            Token::TildeGt => write!(f, "'~>'"),
            Token::Tilde => write!(f, "'~'"),
            Token::Dollar => write!(f, "'$'"),
            Token::SliceOpen => write!(f, "':['"),
            Token::DotDot => write!(f, "'..'"),
            Token::LParen => write!(f, "'('"),
            Token::RParen => write!(f, "')'"),
            Token::LBracket => write!(f, "'['"),
            Token::RBracket => write!(f, "']'"),
            Token::LBrace => write!(f, "'{{'"),
            Token::RBrace => write!(f, "'}}'"),
            Token::Comma => write!(f, "','"),
            Token::Colon => write!(f, "':'"),
            Token::Semi => write!(f, "';'"),
            Token::Eq => write!(f, "'='"),
            Token::Dot => write!(f, "'.'"),
            _ => write!(f, "{:?}", self),
        }
    }
}

/// Span information for a token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TokenSpan {
    pub start: usize,
    pub end: usize,
}

impl TokenSpan {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

/// A token with its span
#[derive(Debug, Clone, PartialEq)]
pub struct SpannedToken<'src> {
    pub token: Token<'src>,
    pub span: TokenSpan,
}

#[derive(Debug, Clone)]
pub struct LexError {
    pub span: TokenSpan,
    pub message: String,
}

/// Lex source code into tokens with spans
pub fn lex(source: &str) -> impl Iterator<Item = Result<SpannedToken<'_>, LexError>> + '_ {
    Token::lexer(source).spanned().map(move |(result, span)| match result {
        Ok(token) => Ok(SpannedToken {
            token,
            span: TokenSpan::new(span.start, span.end),
        }),
        Err(_) => {
            let text = &source[span.clone()];
            let message = if text.starts_with("/*") {
                "Unterminated block comment".to_string()
            } else {
                format!("Unexpected character {:?}", text)
            };
            Err(LexError {
                span: TokenSpan::new(span.start, span.end),
                message,
            })
        }
    })
}

/// Skip to the closing `*/`. An unterminated comment runs to the end of
/// input and is reported as a lex error.
fn block_comment<'src>(lex: &mut logos::Lexer<'src, Token<'src>>) -> FilterResult<(), ()> {
    match lex.remainder().find("*/") {
        Some(end) => {
            lex.bump(end + 2);
            FilterResult::Skip
        }
        None => {
            lex.bump(lex.remainder().len());
            FilterResult::Error(())
        }
    }
}
