use super::Reg;
use crate::mach::sandbox::{Execute, Fault, Registers};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use unicorn_engine::unicorn_const::{uc_error, Arch, Mode, Permission};
use unicorn_engine::{RegisterX86, Unicorn};

const GPRS: [Reg; 8] = [
    Reg::Eax,
    Reg::Ecx,
    Reg::Edx,
    Reg::Ebx,
    Reg::Esp,
    Reg::Ebp,
    Reg::Esi,
    Reg::Edi,
];

/// 32-bit x86 emulation through Unicorn.
///
/// Every call gets a new engine with one zeroed region of `memory_size`
/// bytes at `base`. Nothing survives between calls.
pub struct X86Cpu {
    base: u32,
    memory_size: u32,
    interrupted: Arc<AtomicBool>,
}

impl X86Cpu {
    pub fn new(base: u32, memory_size: u32, interrupted: Arc<AtomicBool>) -> X86Cpu {
        X86Cpu {
            base,
            memory_size,
            interrupted,
        }
    }
}

impl Execute for X86Cpu {
    fn execute(&self, code: &[u8], mut regs: Registers) -> Result<Registers, Fault> {
        let engine = |e: uc_error| Fault::Emulator(format!("{:?}", e));
        let mut uc = Unicorn::new(Arch::X86, Mode::MODE_32).map_err(engine)?;
        let base = u64::from(self.base);
        uc.mem_map(base, self.memory_size as _, Permission::ALL)
            .map_err(engine)?;
        uc.mem_write(base, code).map_err(engine)?;
        for reg in GPRS.iter() {
            uc.reg_write(register(*reg), u64::from(regs.get(*reg)))
                .map_err(engine)?;
        }
        if code.is_empty() {
            return Ok(regs);
        }
        let interrupted = self.interrupted.clone();
        uc.add_code_hook(1, 0, move |uc, _addr, _size| {
            if interrupted.load(Ordering::SeqCst) {
                let _ = uc.emu_stop();
            }
        })
        .map_err(engine)?;
        let end = base + code.len() as u64;
        let outcome = uc.emu_start(base, end, 0, 0);
        let eip = uc.reg_read(RegisterX86::EIP).map_err(engine)? as u32;
        if let Err(e) = outcome {
            return Err(fault(e, eip));
        }
        if self.interrupted.load(Ordering::SeqCst) {
            return Err(Fault::Interrupted);
        }
        for reg in GPRS.iter() {
            let value = uc.reg_read(register(*reg)).map_err(engine)?;
            regs.set(*reg, value as u32);
        }
        Ok(regs)
    }
}

fn register(reg: Reg) -> RegisterX86 {
    match reg {
        Reg::Eax => RegisterX86::EAX,
        Reg::Ecx => RegisterX86::ECX,
        Reg::Edx => RegisterX86::EDX,
        Reg::Ebx => RegisterX86::EBX,
        Reg::Esp => RegisterX86::ESP,
        Reg::Ebp => RegisterX86::EBP,
        Reg::Esi => RegisterX86::ESI,
        Reg::Edi => RegisterX86::EDI,
    }
}

fn fault(e: uc_error, eip: u32) -> Fault {
    match e {
        uc_error::FETCH_UNMAPPED => Fault::FetchUnmapped(eip),
        uc_error::READ_UNMAPPED | uc_error::WRITE_UNMAPPED => Fault::MemoryUnmapped(eip),
        uc_error::INSN_INVALID => Fault::InvalidInstruction(eip),
        uc_error::EXCEPTION => Fault::Exception(eip),
        other => Fault::Emulator(format!("{:?}", other)),
    }
}
