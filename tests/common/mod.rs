#![allow(dead_code)]
use funscript::lang::load;
use funscript::mach::{Event, Runtime};

pub fn runtime(source: &str) -> Runtime {
    match load(source) {
        Ok(ast) => Runtime::new(&ast),
        Err(error) => panic!("{}", error),
    }
}

/// Run `source` to completion, answering each `iread` from `input`.
pub fn run(source: &str, input: &[&str]) -> String {
    let mut r = runtime(source);
    exec(&mut r, input)
}

pub fn exec(runtime: &mut Runtime, input: &[&str]) -> String {
    exec_n(runtime, input, 5000)
}

pub fn exec_n(runtime: &mut Runtime, input: &[&str], cycles: usize) -> String {
    let mut s = String::new();
    let mut input = input.iter();
    loop {
        match runtime.execute(cycles) {
            Event::Stopped => break,
            Event::Errors(errors) => {
                for error in errors.iter() {
                    s.push_str(&format!("{}\n", error));
                }
            }
            Event::Running => {}
            Event::Print(ps) => s.push_str(&ps),
            Event::Input(prompt) => {
                s.push_str(&prompt);
                match input.next() {
                    Some(line) => runtime.enter(line),
                    None => runtime.end_input(),
                }
            }
        }
    }
    s
}
