use std::rc::Rc;

/// Source line a node starts on.
pub type Line = usize;

#[derive(Debug, PartialEq, Clone, Default)]
pub struct Program {
    pub functions: Vec<Function>,
}

#[derive(Debug, PartialEq, Clone)]
pub struct Function {
    pub line: Line,
    pub name: Rc<str>,
    pub body: Rc<[Statement]>,
}

#[derive(Debug, PartialEq, Clone)]
pub enum Statement {
    Print(Line, Rc<str>),
    PrintVar(Line, Rc<str>),
    Iread(Line, Rc<str>),
    LetVar(Line, Rc<str>, Expression),
    Return(Line),
    AsmBlock(Line, Rc<str>),
}

#[derive(Debug, PartialEq, Clone)]
pub enum Expression {
    Literal(Rc<str>),
    VarRef(Rc<str>),
}

impl Statement {
    pub fn line(&self) -> Line {
        use Statement::*;
        match self {
            Print(line, _) | PrintVar(line, _) | Iread(line, _) | LetVar(line, ..)
            | Return(line) | AsmBlock(line, _) => *line,
        }
    }
}
