use super::env::{Environment, INPUT_SLOT};
use super::program::Program;
use super::sandbox::{Sandbox, SandboxConfig};
use crate::error;
use crate::lang::ast::{self, Expression, Statement};
use crate::lang::Error;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// ## Runtime
///
/// Runs the entry function one statement at a time and reports everything
/// observable as an [`Event`]. The host loops on [`Runtime::execute`],
/// printing what it is told to print and answering `Input` with
/// [`Runtime::enter`].

pub struct Runtime {
    program: Program,
    body: Rc<[Statement]>,
    pc: usize,
    env: Environment,
    sandbox: Sandbox,
    interrupted: Arc<AtomicBool>,
    state: State,
}

/// Events are used by the host to drive the terminal.
#[derive(Debug, PartialEq, Clone)]
pub enum Event {
    Print(String),
    /// Show the prompt then reply with `enter` or `end_input`.
    Input(String),
    Errors(Vec<Error>),
    Running,
    Stopped,
}

#[derive(Debug)]
enum State {
    Start,
    Run,
    Input(Rc<str>, ast::Line),
    Fatal(Error),
    Stopped,
}

/// What a single statement asks of the runtime.
#[derive(Debug, PartialEq)]
enum Step {
    Next,
    Print(String),
    Input(Rc<str>),
    Return,
}

impl Runtime {
    /// A runtime backed by the Keystone and Unicorn x86 sandbox.
    pub fn new(ast: &ast::Program) -> Runtime {
        let interrupted = Arc::new(AtomicBool::new(false));
        let sandbox = Sandbox::x86(SandboxConfig::default(), interrupted.clone());
        Runtime::with_sandbox(ast, sandbox, interrupted)
    }

    /// `interrupted` should be the same flag the sandbox polls, if any.
    pub fn with_sandbox(
        ast: &ast::Program,
        sandbox: Sandbox,
        interrupted: Arc<AtomicBool>,
    ) -> Runtime {
        Runtime {
            program: Program::from(ast),
            body: Vec::new().into(),
            pc: 0,
            env: Environment::new(),
            sandbox,
            interrupted,
            state: State::Start,
        }
    }

    /// Flag that stops the program when set. Safe to set from a signal handler.
    pub fn interrupt_handle(&self) -> Arc<AtomicBool> {
        self.interrupted.clone()
    }

    pub fn interrupt(&self) {
        self.interrupted.store(true, Ordering::SeqCst);
    }

    pub fn env(&self) -> &Environment {
        &self.env
    }

    /// Answer a pending `Input` event. The line terminator is dropped.
    pub fn enter(&mut self, line: &str) {
        if let State::Input(..) = self.state {
            let line = line.strip_suffix('\n').unwrap_or(line);
            let line = line.strip_suffix('\r').unwrap_or(line);
            let slot: Rc<str> = INPUT_SLOT.into();
            self.env.store(&slot, line.into());
            self.state = State::Run;
        }
    }

    /// Answer a pending `Input` event when stdin has closed.
    pub fn end_input(&mut self) {
        if let State::Input(_, line) = self.state {
            self.state = State::Fatal(error!(InputPastEnd, Some(line); "stdin closed"));
        }
    }

    /// Run at most `cycles` statements.
    pub fn execute(&mut self, cycles: usize) -> Event {
        match std::mem::replace(&mut self.state, State::Stopped) {
            State::Start => match self.program.entry_point() {
                Ok(body) => {
                    self.body = body;
                    self.pc = 0;
                    self.env.clear();
                    self.state = State::Run;
                    Event::Running
                }
                Err(error) => Event::Errors(vec![error]),
            },
            State::Run => self.run(cycles),
            State::Input(prompt, line) => {
                if self.interrupted.swap(false, Ordering::SeqCst) {
                    return Event::Errors(vec![error!(Break, Some(line))]);
                }
                let event = Event::Input(prompt.to_string());
                self.state = State::Input(prompt, line);
                event
            }
            State::Fatal(error) => Event::Errors(vec![error]),
            State::Stopped => Event::Stopped,
        }
    }

    fn run(&mut self, cycles: usize) -> Event {
        for _ in 0..cycles {
            let statement = match self.body.get(self.pc) {
                Some(statement) => statement.clone(),
                None => {
                    if self.interrupted.swap(false, Ordering::SeqCst) {
                        let line = self.body.last().map(Statement::line);
                        return Event::Errors(vec![error!(Break, line)]);
                    }
                    return Event::Stopped;
                }
            };
            if self.interrupted.swap(false, Ordering::SeqCst) {
                return Event::Errors(vec![error!(Break, Some(statement.line()))]);
            }
            self.pc += 1;
            match execute_statement(&statement, &mut self.env, &self.sandbox) {
                Step::Next => {}
                Step::Print(s) => {
                    self.state = State::Run;
                    return Event::Print(s);
                }
                Step::Input(prompt) => {
                    self.state = State::Input(prompt.clone(), statement.line());
                    return Event::Input(prompt.to_string());
                }
                Step::Return => return Event::Stopped,
            }
        }
        self.state = State::Run;
        Event::Running
    }
}

fn execute_statement(statement: &Statement, env: &mut Environment, sandbox: &Sandbox) -> Step {
    match statement {
        Statement::Print(_, text) => Step::Print(format!("{}\n", text)),
        Statement::PrintVar(_, var_name) => Step::Print(format!("{}\n", env.fetch(var_name))),
        Statement::Iread(_, prompt) => Step::Input(prompt.clone()),
        Statement::LetVar(_, var_name, expr) => {
            let value = match expr {
                Expression::Literal(s) => s.clone(),
                Expression::VarRef(name) => env.fetch(name),
            };
            env.store(var_name, value);
            Step::Next
        }
        Statement::Return(_) => Step::Return,
        Statement::AsmBlock(_, source) => match sandbox.run(source) {
            Ok(value) => Step::Print(format!(
                "{} after execution = {}\n",
                sandbox.config().result.to_string().to_uppercase(),
                value
            )),
            Err(failure) => Step::Print(format!("ASM execution failed: {}\n", failure)),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::load;
    use crate::mach::sandbox::{AsmError, Assemble, Execute, Fault, Registers};

    fn runtime(source: &str) -> Runtime {
        Runtime::new(&load(source).unwrap())
    }

    #[test]
    fn test_let_resolves_before_store() {
        let mut env = Environment::new();
        let sandbox = Sandbox::default();
        let x: Rc<str> = "x".into();
        let stmt = Statement::LetVar(1, x.clone(), Expression::VarRef(x.clone()));
        assert_eq!(execute_statement(&stmt, &mut env, &sandbox), Step::Next);
        assert_eq!(&*env.fetch("x"), "");
        assert_eq!(env.len(), 1);
    }

    #[test]
    fn test_cycles_bound_a_slice() {
        let mut r = runtime("def main() then let a := \"1\" let b := a print b end");
        assert_eq!(r.execute(1), Event::Running);
        assert_eq!(r.execute(1), Event::Running);
        assert_eq!(r.execute(1), Event::Running);
        assert_eq!(r.execute(1), Event::Print("1\n".to_string()));
        assert_eq!(r.execute(1), Event::Stopped);
        assert_eq!(r.execute(1), Event::Stopped);
    }

    #[test]
    fn test_input_waits_for_enter() {
        let mut r = runtime("def main() then iread \"? \" print _ end");
        assert_eq!(r.execute(10), Event::Running);
        assert_eq!(r.execute(10), Event::Input("? ".to_string()));
        assert_eq!(r.execute(10), Event::Input("? ".to_string()));
        r.enter("abc\r\n");
        assert_eq!(r.execute(10), Event::Print("abc\n".to_string()));
    }

    #[test]
    fn test_input_past_end() {
        let mut r = runtime("def main() then\niread \"? \"\nend");
        r.execute(10);
        r.execute(10);
        r.end_input();
        assert_eq!(
            r.execute(10),
            Event::Errors(vec![error!(InputPastEnd, Some(2); "stdin closed")])
        );
        assert_eq!(r.execute(10), Event::Stopped);
    }

    #[test]
    fn test_interrupt_breaks_between_statements() {
        let mut r = runtime("def main() then\nprint \"a\"\nprint \"b\"\nend");
        r.execute(10);
        assert_eq!(r.execute(10), Event::Print("a\n".to_string()));
        r.interrupt();
        assert_eq!(r.execute(10), Event::Errors(vec![error!(Break, Some(3))]));
        assert_eq!(r.execute(10), Event::Stopped);
    }

    struct Nothing;

    impl Assemble for Nothing {
        fn assemble(&self, _line: &str) -> Result<Vec<u8>, AsmError> {
            Ok(vec![0x90])
        }
    }

    struct Spin(Arc<AtomicBool>);

    impl Execute for Spin {
        fn execute(&self, _code: &[u8], _regs: Registers) -> Result<Registers, Fault> {
            self.0.store(true, Ordering::SeqCst);
            Err(Fault::Interrupted)
        }
    }

    #[test]
    fn test_interrupt_in_last_block_breaks() {
        let interrupted = Arc::new(AtomicBool::new(false));
        let sandbox = Sandbox::new(
            SandboxConfig::default(),
            Box::new(Nothing),
            Box::new(Spin(interrupted.clone())),
        );
        let ast = load("def main() then\nunsafe asm \"\"\"jmp 0\"\"\"\nend").unwrap();
        let mut r = Runtime::with_sandbox(&ast, sandbox, interrupted);
        r.execute(10);
        assert_eq!(
            r.execute(10),
            Event::Print("ASM execution failed: interrupted\n".to_string())
        );
        assert_eq!(r.execute(10), Event::Errors(vec![error!(Break, Some(2))]));
        assert_eq!(r.execute(10), Event::Stopped);
    }
}
