// Jumps and subroutine linkage
//
// JSR pushes the address of the last byte of its own operand (PC - 1 at
// this point); RTS compensates by adding one after the pull. RTI restores
// P and PC exactly as the interrupt pushed them, with no increment.

use crate::bus::CpuBus;
use crate::cpu::addressing::AddressingResult;
use crate::cpu::Cpu;
use crate::error::EmulatorError;

impl Cpu {
    /// JMP - absolute or indirect jump
    pub(crate) fn jmp(&mut self, addr: &AddressingResult) {
        self.pc = addr.address;
    }

    /// JSR - push the return linkage, then jump
    pub(crate) fn jsr(
        &mut self,
        bus: &mut CpuBus,
        addr: &AddressingResult,
    ) -> Result<(), EmulatorError> {
        self.stack_push_word(bus, self.pc.wrapping_sub(1))?;
        self.pc = addr.address;
        Ok(())
    }

    /// RTS - pull the return address and step past the JSR operand
    pub(crate) fn rts(&mut self, bus: &mut CpuBus) -> Result<(), EmulatorError> {
        self.pc = self.stack_pull_word(bus)?.wrapping_add(1);
        Ok(())
    }
}
