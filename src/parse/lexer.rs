use crate::common::BinaryOperator;
use logos::{Lexer as LogosLexer, Logos};
use logos_iter::{LogosIter, PeekableLexer};

pub type Lexer<'a> = PeekableLexer<'a, LogosLexer<'a, TokenKind>, TokenKind>;

pub fn lexer(s: &str) -> Lexer {
    TokenKind::lexer(s).peekable_lexer()
}

#[derive(Logos, Debug, Copy, Clone, Eq, PartialEq)]
pub enum TokenKind {
    #[regex(r"[0-9]+")]
    Integer,

    #[token("(")]
    LeftParen,
    #[token(")")]
    RightParen,

    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    #[token("x")]
    Star,
    #[token("/")]
    Slash,
    #[token("\\")]
    Backslash,
    #[token("%")]
    Percent,
    #[token("^")]
    Caret,
    #[token("d")]
    #[token("D")]
    Dice,

    #[token("<")]
    LessThan,
    #[token(">")]
    GreaterThan,
    #[token("=")]
    Equal,

    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    #[error]
    Error,
}

impl TokenKind {
    pub fn as_binary_op(&self) -> Option<BinaryOperator> {
        use BinaryOperator::*;
        Some(match self {
            Self::Plus => Add,
            Self::Minus => Sub,
            Self::Star => Mul,
            Self::Slash => Div,
            Self::Backslash | Self::Percent => Rem,
            _ => return None,
        })
    }
}
