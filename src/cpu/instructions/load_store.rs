// Load and store instructions

use crate::bus::CpuBus;
use crate::cpu::addressing::AddressingResult;
use crate::cpu::Cpu;
use crate::error::EmulatorError;

impl Cpu {
    // ========================================
    // Loads: set Z and N from the value
    // ========================================

    /// LDA - load accumulator
    pub(crate) fn lda(
        &mut self,
        bus: &mut CpuBus,
        addr: &AddressingResult,
    ) -> Result<(), EmulatorError> {
        let value = self.read_operand(bus, addr)?;
        self.a = value;
        self.update_zero_negative(value);
        Ok(())
    }

    /// LDX - load X register
    pub(crate) fn ldx(
        &mut self,
        bus: &mut CpuBus,
        addr: &AddressingResult,
    ) -> Result<(), EmulatorError> {
        let value = self.read_operand(bus, addr)?;
        self.x = value;
        self.update_zero_negative(value);
        Ok(())
    }

    /// LDY - load Y register
    pub(crate) fn ldy(
        &mut self,
        bus: &mut CpuBus,
        addr: &AddressingResult,
    ) -> Result<(), EmulatorError> {
        let value = self.read_operand(bus, addr)?;
        self.y = value;
        self.update_zero_negative(value);
        Ok(())
    }

    // ========================================
    // Stores: no flags
    // ========================================

    /// STA - store accumulator
    pub(crate) fn sta(
        &mut self,
        bus: &mut CpuBus,
        addr: &AddressingResult,
    ) -> Result<(), EmulatorError> {
        bus.write(addr.address, self.a)
    }

    /// STX - store X register
    pub(crate) fn stx(
        &mut self,
        bus: &mut CpuBus,
        addr: &AddressingResult,
    ) -> Result<(), EmulatorError> {
        bus.write(addr.address, self.x)
    }

    /// STY - store Y register
    pub(crate) fn sty(
        &mut self,
        bus: &mut CpuBus,
        addr: &AddressingResult,
    ) -> Result<(), EmulatorError> {
        bus.write(addr.address, self.y)
    }
}
