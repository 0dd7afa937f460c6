/*!
## x86 engine

Keystone assembles Intel-syntax lines and Unicorn runs the bytes in
32-bit protected mode. Together they implement the sandbox capabilities.

*/

mod asm;
mod cpu;

pub use asm::X86Assembler;
pub use cpu::X86Cpu;

/// Registers in hardware encoding order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Reg {
    Eax = 0,
    Ecx = 1,
    Edx = 2,
    Ebx = 3,
    Esp = 4,
    Ebp = 5,
    Esi = 6,
    Edi = 7,
}

impl std::fmt::Display for Reg {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Reg::*;
        match self {
            Eax => write!(f, "eax"),
            Ecx => write!(f, "ecx"),
            Edx => write!(f, "edx"),
            Ebx => write!(f, "ebx"),
            Esp => write!(f, "esp"),
            Ebp => write!(f, "ebp"),
            Esi => write!(f, "esi"),
            Edi => write!(f, "edi"),
        }
    }
}
