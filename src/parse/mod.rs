pub mod ast;
mod error;
mod lexer;
mod parser;
pub mod visit;

pub use error::{ParseError, ParseErrorKind};

use crate::config::Limits;

/// Parses already-normalized text.
pub(crate) fn parse(s: &str, limits: &Limits) -> Result<ast::Expression, ParseError> {
    parser::Parser::new(s, limits.max_depth).parse()
}
