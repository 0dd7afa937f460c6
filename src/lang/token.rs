use super::{Column, LineNumber};

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Kind {
    Def,
    Then,
    End,
    Return,
    Print,
    Unsafe,
    Asm,
    Iread,
    Let,
    Assign,
    LParen,
    RParen,
    MultilineString,
    String,
    Ident,
    Eof,
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Kind::*;
        match self {
            Def => write!(f, "DEF"),
            Then => write!(f, "THEN"),
            End => write!(f, "END"),
            Return => write!(f, "RETURN"),
            Print => write!(f, "PRINT"),
            Unsafe => write!(f, "UNSAFE"),
            Asm => write!(f, "ASM"),
            Iread => write!(f, "IREAD"),
            Let => write!(f, "LET"),
            Assign => write!(f, "ASSIGN"),
            LParen => write!(f, "LPAREN"),
            RParen => write!(f, "RPAREN"),
            MultilineString => write!(f, "MULTILINE_STRING"),
            String => write!(f, "STRING"),
            Ident => write!(f, "IDENT"),
            Eof => write!(f, "EOF"),
        }
    }
}

/// A lexeme tagged with its kind and where it starts in the source.
#[derive(Debug, PartialEq, Clone)]
pub struct Token {
    pub kind: Kind,
    pub lexeme: String,
    pub line: LineNumber,
    pub column: Column,
}

impl Token {
    pub fn new(kind: Kind, lexeme: &str) -> Token {
        Token {
            kind,
            lexeme: lexeme.to_string(),
            line: None,
            column: 0..0,
        }
    }

    pub fn at(self, line: usize, column: Column) -> Token {
        Token {
            line: Some(line),
            column,
            ..self
        }
    }

    pub fn eof() -> Token {
        Token::new(Kind::Eof, "")
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        if self.lexeme.is_empty() {
            write!(f, "{}", self.kind)
        } else {
            write!(f, "{} `{}`", self.kind, self.lexeme)
        }
    }
}
