use crate::mach::sandbox::{AsmError, Assemble};
use keystone_engine::{Arch, Keystone, Mode};

/// Intel-syntax assembler backed by Keystone.
///
/// Every line is encoded as if it were placed at address 0, so an immediate
/// branch target is an offset from the start of that line.
#[derive(Debug, Default, Clone, Copy)]
pub struct X86Assembler;

impl Assemble for X86Assembler {
    fn assemble(&self, line: &str) -> Result<Vec<u8>, AsmError> {
        let ks = Keystone::new(Arch::X86, Mode::MODE_32)
            .map_err(|e| AsmError::Unavailable(format!("{:?}", e)))?;
        match ks.asm(line.to_string(), 0) {
            Ok(out) => Ok(out.bytes),
            Err(e) => Err(AsmError::Rejected(format!("{:?}", e))),
        }
    }
}
