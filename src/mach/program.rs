use crate::error;
use crate::lang::ast::{self, Statement};
use crate::lang::Error;
use std::collections::HashMap;
use std::rc::Rc;

/// Name of the only function a run executes.
pub const ENTRY_POINT: &str = "main";

/// ## Function symbol table
///
/// Functions are keyed by name. When two definitions share a name the later
/// one replaces the earlier one without complaint.

#[derive(Debug, Default, Clone)]
pub struct Program {
    symbols: HashMap<Rc<str>, Rc<[Statement]>>,
}

impl Program {
    pub fn new() -> Program {
        Program::default()
    }

    /// Returns the body this definition replaced, if any.
    pub fn define(&mut self, function: &ast::Function) -> Option<Rc<[Statement]>> {
        self.symbols
            .insert(function.name.clone(), function.body.clone())
    }

    pub fn get(&self, name: &str) -> Option<Rc<[Statement]>> {
        self.symbols.get(name).cloned()
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn entry_point(&self) -> Result<Rc<[Statement]>, Error> {
        match self.get(ENTRY_POINT) {
            Some(body) => Ok(body),
            None => Err(error!(MissingEntryPoint; "No main function defined.")),
        }
    }
}

impl From<&ast::Program> for Program {
    fn from(ast: &ast::Program) -> Program {
        let mut program = Program::new();
        for function in &ast.functions {
            program.define(function);
        }
        program
    }
}
