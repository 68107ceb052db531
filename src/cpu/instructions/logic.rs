// Bitwise logic: AND, ORA, EOR, BIT

use crate::bus::CpuBus;
use crate::cpu::addressing::AddressingResult;
use crate::cpu::{flags, Cpu};
use crate::error::EmulatorError;

impl Cpu {
    /// AND - accumulator & memory
    pub(crate) fn and(
        &mut self,
        bus: &mut CpuBus,
        addr: &AddressingResult,
    ) -> Result<(), EmulatorError> {
        let value = self.read_operand(bus, addr)?;
        self.a &= value;
        self.update_zero_negative(self.a);
        Ok(())
    }

    /// ORA - accumulator | memory
    pub(crate) fn ora(
        &mut self,
        bus: &mut CpuBus,
        addr: &AddressingResult,
    ) -> Result<(), EmulatorError> {
        let value = self.read_operand(bus, addr)?;
        self.a |= value;
        self.update_zero_negative(self.a);
        Ok(())
    }

    /// EOR - accumulator ^ memory
    pub(crate) fn eor(
        &mut self,
        bus: &mut CpuBus,
        addr: &AddressingResult,
    ) -> Result<(), EmulatorError> {
        let value = self.read_operand(bus, addr)?;
        self.a ^= value;
        self.update_zero_negative(self.a);
        Ok(())
    }

    /// BIT - test bits in memory against the accumulator
    ///
    /// Z reflects A & M; V and N copy bits 6 and 7 of the memory byte
    /// directly, which games use to poll hardware flags cheaply.
    pub(crate) fn bit(
        &mut self,
        bus: &mut CpuBus,
        addr: &AddressingResult,
    ) -> Result<(), EmulatorError> {
        let value = self.read_operand(bus, addr)?;
        self.set_flag(flags::ZERO, self.a & value == 0);
        self.set_flag(flags::OVERFLOW, value & 0x40 != 0);
        self.set_flag(flags::NEGATIVE, value & 0x80 != 0);
        Ok(())
    }
}
