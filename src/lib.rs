//! # funscript
//!
//! A tiny scripting language with one party trick: inline x86 assembly
//! that runs on a disposable virtual CPU.
//!
//! Install with `cargo install funscript` then run a program by naming
//! its source file.
//! ```text
//! $ funscript hello.fun
//! Hello World
//! ```
//!
//! The pipeline is strictly one way. [`lang`] turns text into tokens and
//! tokens into an AST, [`mach`] walks the AST of `main` and hands asm blocks
//! to the sandbox, and `term` connects it all to a console.

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

#[path = "doc/chapter_1.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_1;

#[path = "doc/chapter_2.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_2;

#[path = "doc/appendix_a.rs"]
#[allow(non_snake_case)]
pub mod ___Appendix_A;

pub mod lang;
pub mod mach;
#[doc(hidden)]
pub mod term;
