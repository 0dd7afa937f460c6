/*!
# Rust Language Module

This Rust module provides lexical analysis and parsing of funscript.

*/

#[macro_use]
mod error;
mod lex;
mod parse;

pub mod ast;
pub mod token;

pub use error::Error;
pub use error::ErrorCode;
pub use lex::lex;
pub use lex::RULES;
pub use parse::parse;

/// 1-based source line, when known.
pub type LineNumber = Option<usize>;
/// Character offsets within a source line.
pub type Column = std::ops::Range<usize>;

/// Lex and parse a complete source file.
pub fn load(source: &str) -> Result<ast::Program, Error> {
    let tokens = lex(source)?;
    parse(&tokens)
}
