use super::token::{Kind, Token};
use super::Error;

type Result<T> = std::result::Result<T, Error>;

pub fn lex(s: &str) -> Result<Vec<Token>> {
    let mut tokens = Lexer::new(s).collect::<Result<Vec<Token>>>()?;
    tokens.push(Token::eof());
    Ok(tokens)
}

/// What a rule recognizes at the current scan position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Pattern {
    /// The word, only when not followed by another word character.
    Keyword(&'static str),
    Exact(&'static str),
    /// `"""` through the nearest closing `"""`.
    TripleQuoted,
    /// `"` through the next unescaped `"`.
    Quoted,
    Identifier,
    Whitespace,
}

/// Lexer rules in priority order. The first rule that matches wins.
///
/// Keywords precede `Identifier` and `TripleQuoted` precedes `Quoted`.
/// A rule without a kind consumes its match and emits nothing.
pub static RULES: [(Pattern, Option<Kind>); 16] = [
    (Pattern::Keyword("def"), Some(Kind::Def)),
    (Pattern::Keyword("then"), Some(Kind::Then)),
    (Pattern::Keyword("end"), Some(Kind::End)),
    (Pattern::Keyword("return"), Some(Kind::Return)),
    (Pattern::Keyword("print"), Some(Kind::Print)),
    (Pattern::Keyword("unsafe"), Some(Kind::Unsafe)),
    (Pattern::Keyword("asm"), Some(Kind::Asm)),
    (Pattern::Keyword("iread"), Some(Kind::Iread)),
    (Pattern::Keyword("let"), Some(Kind::Let)),
    (Pattern::Exact(":="), Some(Kind::Assign)),
    (Pattern::Exact("("), Some(Kind::LParen)),
    (Pattern::Exact(")"), Some(Kind::RParen)),
    (Pattern::TripleQuoted, Some(Kind::MultilineString)),
    (Pattern::Quoted, Some(Kind::String)),
    (Pattern::Identifier, Some(Kind::Ident)),
    (Pattern::Whitespace, None),
];

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn is_whitespace(c: char) -> bool {
    c == ' ' || c == '\t' || c == '\r' || c == '\n'
}

impl Pattern {
    /// Byte length of the match at the start of `s`, if any.
    pub fn match_len(&self, s: &str) -> Option<usize> {
        use Pattern::*;
        match self {
            Keyword(word) => {
                if !s.starts_with(word) {
                    return None;
                }
                match s[word.len()..].chars().next() {
                    Some(c) if is_word_char(c) => None,
                    _ => Some(word.len()),
                }
            }
            Exact(text) => {
                if s.starts_with(text) {
                    Some(text.len())
                } else {
                    None
                }
            }
            TripleQuoted => {
                if !s.starts_with("\"\"\"") {
                    return None;
                }
                s[3..].find("\"\"\"").map(|close| close + 6)
            }
            Quoted => {
                let mut chars = s.char_indices();
                if chars.next()?.1 != '"' {
                    return None;
                }
                while let Some((index, ch)) = chars.next() {
                    match ch {
                        '"' => return Some(index + 1),
                        '\\' => match chars.next() {
                            Some((_, '\n')) | None => return None,
                            Some(_) => {}
                        },
                        _ => {}
                    }
                }
                None
            }
            Identifier => {
                let mut chars = s.chars();
                if !is_ident_start(chars.next()?) {
                    return None;
                }
                Some(1 + chars.take_while(|c| is_ident_char(*c)).count())
            }
            Whitespace => {
                let len: usize = s
                    .chars()
                    .take_while(|c| is_whitespace(*c))
                    .map(char::len_utf8)
                    .sum();
                if len > 0 {
                    Some(len)
                } else {
                    None
                }
            }
        }
    }
}

struct Lexer<'a> {
    rest: &'a str,
    line: usize,
    col: usize,
    failed: bool,
}

impl<'a> Lexer<'a> {
    fn new(s: &'a str) -> Lexer<'a> {
        Lexer {
            rest: s,
            line: 1,
            col: 0,
            failed: false,
        }
    }

    fn advance(&mut self, len: usize) -> &'a str {
        let (taken, rest) = self.rest.split_at(len);
        for ch in taken.chars() {
            if ch == '\n' {
                self.line += 1;
                self.col = 0;
            } else {
                self.col += 1;
            }
        }
        self.rest = rest;
        taken
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.failed || self.rest.is_empty() {
                return None;
            }
            let (line, col) = (self.line, self.col);
            let rule = RULES
                .iter()
                .find_map(|(pattern, kind)| pattern.match_len(self.rest).map(|len| (len, kind)));
            match rule {
                Some((len, Some(kind))) => {
                    let lexeme = self.advance(len);
                    let column = col..col + lexeme.chars().count();
                    return Some(Ok(Token::new(*kind, lexeme).at(line, column)));
                }
                Some((len, None)) => {
                    self.advance(len);
                }
                None => {
                    self.failed = true;
                    let ch = self.rest.chars().next().unwrap_or_default();
                    let msg = format!("unexpected character {:?}", ch);
                    return Some(Err(error!(UnexpectedCharacter, Some(line), ..&(col..col + 1); msg)));
                }
            }
        }
    }
}
