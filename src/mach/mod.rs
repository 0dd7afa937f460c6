/*!
## Rust Machine Module

This Rust module runs a parsed funscript program and hosts the sandbox
that executes its inline assembly.

*/

mod env;
mod program;
mod runtime;
pub mod sandbox;
pub mod x86;

pub use env::{Environment, INPUT_SLOT};
pub use program::{Program, ENTRY_POINT};
pub use runtime::{Event, Runtime};
pub use sandbox::{Sandbox, SandboxConfig};
