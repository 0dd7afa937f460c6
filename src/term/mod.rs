/*!
## Terminal driver

Loads the source file named on the command line, runs it, and connects the
runtime's events to the console.

*/

extern crate ansi_term;
extern crate ctrlc;
extern crate linefeed;
use crate::mach::{Event, Runtime};
use crate::{error, lang, lang::Error};
use ansi_term::Style;
use linefeed::{DefaultTerminal, Interface, ReadResult, Signal};
use std::io::{BufRead, ErrorKind, IsTerminal, Write};
use std::sync::atomic::Ordering;

/// Statements run between checks of the console.
const CYCLES: usize = 5000;

pub fn main() {
    let mut args = std::env::args().skip(1);
    let filename = match args.next() {
        Some(filename) => filename,
        None => {
            println!("Usage: funscript <file>");
            std::process::exit(1);
        }
    };
    let status = match main_loop(&filename) {
        Ok(true) => 0,
        Ok(false) => 1,
        Err(error) => {
            print_error(&error!(InternalError; error.to_string()));
            1
        }
    };
    std::process::exit(status);
}

/// Returns false when the run ended in a fatal error.
fn main_loop(filename: &str) -> std::io::Result<bool> {
    let ast = match load(filename).and_then(|source| lang::load(&source)) {
        Ok(ast) => ast,
        Err(error) => {
            print_error(&error);
            return Ok(false);
        }
    };
    let mut runtime = Runtime::new(&ast);
    let interrupted = runtime.interrupt_handle();
    if let Err(error) = ctrlc::set_handler(move || interrupted.store(true, Ordering::SeqCst)) {
        print_error(&error!(InternalError; error.to_string()));
    }
    let console = Console::new()?;
    let mut success = true;
    loop {
        match runtime.execute(CYCLES) {
            Event::Print(s) => console.print(&s)?,
            Event::Input(prompt) => match console.read_line(&prompt)? {
                Reply::Line(line) => runtime.enter(&line),
                Reply::Interrupt => runtime.interrupt(),
                Reply::Eof => runtime.end_input(),
            },
            Event::Errors(errors) => {
                for error in errors.iter() {
                    print_error(error);
                }
                success = false;
            }
            Event::Running => {}
            Event::Stopped => break,
        }
    }
    Ok(success)
}

fn print_error(error: &Error) {
    eprintln!("{}", Style::new().bold().paint(error.to_string()));
}

fn load(filename: &str) -> Result<String, Error> {
    match std::fs::read_to_string(filename) {
        Ok(source) => Ok(source),
        Err(error) => {
            let msg = error.to_string();
            match error.kind() {
                ErrorKind::NotFound => Err(error!(FileNotFound; msg)),
                _ => Err(error!(InternalError; msg)),
            }
        }
    }
}

enum Reply {
    Line(String),
    Interrupt,
    Eof,
}

/// Line editor when a person is typing, plain stdio when piped.
enum Console {
    Interactive(Interface<DefaultTerminal>),
    Piped,
}

impl Console {
    fn new() -> std::io::Result<Console> {
        if !std::io::stdin().is_terminal() {
            return Ok(Console::Piped);
        }
        let interface = Interface::new("funscript")?;
        interface.set_report_signal(Signal::Interrupt, true);
        Ok(Console::Interactive(interface))
    }

    fn print(&self, s: &str) -> std::io::Result<()> {
        match self {
            Console::Interactive(interface) => interface.write_fmt(format_args!("{}", s)),
            Console::Piped => {
                let stdout = std::io::stdout();
                let mut out = stdout.lock();
                out.write_all(s.as_bytes())?;
                out.flush()
            }
        }
    }

    fn read_line(&self, prompt: &str) -> std::io::Result<Reply> {
        match self {
            Console::Interactive(interface) => {
                interface.set_prompt(prompt)?;
                match interface.read_line()? {
                    ReadResult::Input(line) => Ok(Reply::Line(line)),
                    ReadResult::Signal(Signal::Interrupt) => {
                        interface.set_buffer("")?;
                        Ok(Reply::Interrupt)
                    }
                    ReadResult::Signal(_) | ReadResult::Eof => Ok(Reply::Eof),
                }
            }
            Console::Piped => {
                self.print(prompt)?;
                let mut line = String::new();
                if std::io::stdin().lock().read_line(&mut line)? == 0 {
                    return Ok(Reply::Eof);
                }
                Ok(Reply::Line(line))
            }
        }
    }
}
