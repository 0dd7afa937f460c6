use super::x86::{Reg, X86Assembler, X86Cpu};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

/// ## Sandboxed machine code
///
/// An asm block crosses two capabilities: text becomes bytes through
/// [`Assemble`] and bytes run on a throwaway virtual CPU through [`Execute`].
/// The runtime only ever talks to a [`Sandbox`], never to a particular
/// assembler or emulator.

pub trait Assemble {
    /// Encode one line of assembly source.
    fn assemble(&self, line: &str) -> Result<Vec<u8>, AsmError>;
}

pub trait Execute {
    /// Run `code` on a brand-new CPU starting from `regs`.
    fn execute(&self, code: &[u8], regs: Registers) -> Result<Registers, Fault>;
}

/// General purpose register file of the virtual CPU.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Registers {
    pub gpr: [u32; 8],
}

impl Registers {
    pub fn get(&self, reg: Reg) -> u32 {
        self.gpr[reg as usize]
    }

    pub fn set(&mut self, reg: Reg, value: u32) {
        self.gpr[reg as usize] = value;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AsmError {
    /// The assembler refused the line.
    Rejected(String),
    /// No assembler could be opened.
    Unavailable(String),
}

impl std::fmt::Display for AsmError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use AsmError::*;
        match self {
            Rejected(s) => write!(f, "{}", s),
            Unavailable(s) => write!(f, "assembler unavailable: {}", s),
        }
    }
}

impl std::error::Error for AsmError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fault {
    /// Instruction fetch outside the mapped region.
    FetchUnmapped(u32),
    /// Data read or write outside the mapped region by the instruction at EIP.
    MemoryUnmapped(u32),
    InvalidInstruction(u32),
    /// Unhandled CPU exception such as a divide error or `int3`.
    Exception(u32),
    /// The emulator itself failed.
    Emulator(String),
    Interrupted,
}

impl std::fmt::Display for Fault {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Fault::*;
        match self {
            FetchUnmapped(a) => write!(f, "fetch from unmapped memory at {:#x}", a),
            MemoryUnmapped(a) => write!(f, "access to unmapped memory from {:#x}", a),
            InvalidInstruction(a) => write!(f, "invalid instruction at {:#x}", a),
            Exception(a) => write!(f, "CPU exception at {:#x}", a),
            Emulator(s) => write!(f, "emulator error: {}", s),
            Interrupted => write!(f, "interrupted"),
        }
    }
}

impl std::error::Error for Fault {}

/// Why an asm block produced no value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AsmFailure {
    Assembly { line: String, error: AsmError },
    Execution(Fault),
}

impl std::fmt::Display for AsmFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            AsmFailure::Assembly { line, error } => write!(f, "cannot assemble `{}`: {}", line, error),
            AsmFailure::Execution(fault) => write!(f, "{}", fault),
        }
    }
}

impl std::error::Error for AsmFailure {}

/// Outcome of one asm block.
pub type AsmResult = Result<u32, AsmFailure>;

#[derive(Debug, Clone)]
pub struct SandboxConfig {
    /// Where the code is written and execution begins.
    pub base: u32,
    pub memory_size: u32,
    /// Register whose value is the block's result.
    pub result: Reg,
    /// Registers explicitly zeroed before each run.
    pub zeroed: Vec<Reg>,
}

impl Default for SandboxConfig {
    fn default() -> SandboxConfig {
        SandboxConfig {
            base: 0x0100_0000,
            memory_size: 2 * 1024 * 1024,
            result: Reg::Eax,
            zeroed: vec![Reg::Eax, Reg::Ebx],
        }
    }
}

pub struct Sandbox {
    config: SandboxConfig,
    assembler: Box<dyn Assemble>,
    cpu: Box<dyn Execute>,
}

impl Default for Sandbox {
    fn default() -> Sandbox {
        Sandbox::x86(SandboxConfig::default(), Arc::new(AtomicBool::new(false)))
    }
}

impl Sandbox {
    pub fn new(config: SandboxConfig, assembler: Box<dyn Assemble>, cpu: Box<dyn Execute>) -> Sandbox {
        Sandbox {
            config,
            assembler,
            cpu,
        }
    }

    /// The Keystone and Unicorn engine. Setting `interrupted` aborts a running block.
    pub fn x86(config: SandboxConfig, interrupted: Arc<AtomicBool>) -> Sandbox {
        let cpu = X86Cpu::new(config.base, config.memory_size, interrupted);
        Sandbox::new(config, Box::new(X86Assembler), Box::new(cpu))
    }

    pub fn config(&self) -> &SandboxConfig {
        &self.config
    }

    /// Assemble each non-blank line in order and concatenate the encodings.
    pub fn assemble(&self, source: &str) -> Result<Vec<u8>, AsmFailure> {
        let mut code = vec![];
        for line in source.lines().map(str::trim).filter(|l| !l.is_empty()) {
            match self.assembler.assemble(line) {
                Ok(bytes) => code.extend(bytes),
                Err(error) => {
                    return Err(AsmFailure::Assembly {
                        line: line.to_string(),
                        error,
                    })
                }
            }
        }
        Ok(code)
    }

    pub fn run(&self, source: &str) -> AsmResult {
        let code = self.assemble(source)?;
        let mut regs = Registers::default();
        for reg in &self.config.zeroed {
            regs.set(*reg, 0);
        }
        let regs = self.cpu.execute(&code, regs).map_err(AsmFailure::Execution)?;
        Ok(regs.get(self.config.result))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(Vec<u8>);

    impl Assemble for Fixed {
        fn assemble(&self, line: &str) -> Result<Vec<u8>, AsmError> {
            match line {
                "ok" => Ok(self.0.clone()),
                _ => Err(AsmError::Rejected(format!("unknown mnemonic `{}`", line))),
            }
        }
    }

    struct Echo;

    impl Execute for Echo {
        fn execute(&self, code: &[u8], mut regs: Registers) -> Result<Registers, Fault> {
            regs.set(Reg::Eax, code.len() as u32);
            Ok(regs)
        }
    }

    #[test]
    fn test_lines_are_concatenated() {
        let sandbox = Sandbox::new(
            SandboxConfig::default(),
            Box::new(Fixed(vec![1, 2])),
            Box::new(Echo),
        );
        assert_eq!(sandbox.assemble("ok\n\n   \n  ok  ").unwrap(), vec![1, 2, 1, 2]);
        assert_eq!(sandbox.run("ok\nok\nok"), Ok(6));
    }

    #[test]
    fn test_bad_line_aborts_block() {
        let sandbox = Sandbox::new(
            SandboxConfig::default(),
            Box::new(Fixed(vec![])),
            Box::new(Echo),
        );
        assert_eq!(
            sandbox.run("ok\nbogus\nok").unwrap_err().to_string(),
            "cannot assemble `bogus`: unknown mnemonic `bogus`"
        );
    }
}
