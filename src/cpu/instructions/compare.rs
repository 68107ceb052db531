// Compare instructions
//
// A comparison is a subtraction that throws away the result: carry means
// register >= memory (unsigned), zero means equality, and N takes bit 7 of
// the difference.

use crate::bus::CpuBus;
use crate::cpu::addressing::AddressingResult;
use crate::cpu::{flags, Cpu};
use crate::error::EmulatorError;

impl Cpu {
    fn compare(&mut self, register: u8, value: u8) {
        let result = register.wrapping_sub(value);
        self.set_flag(flags::CARRY, register >= value);
        self.set_flag(flags::ZERO, register == value);
        self.set_flag(flags::NEGATIVE, result & 0x80 != 0);
    }

    /// CMP - compare accumulator with memory
    pub(crate) fn cmp(
        &mut self,
        bus: &mut CpuBus,
        addr: &AddressingResult,
    ) -> Result<(), EmulatorError> {
        let value = self.read_operand(bus, addr)?;
        self.compare(self.a, value);
        Ok(())
    }

    /// CPX - compare X with memory
    pub(crate) fn cpx(
        &mut self,
        bus: &mut CpuBus,
        addr: &AddressingResult,
    ) -> Result<(), EmulatorError> {
        let value = self.read_operand(bus, addr)?;
        self.compare(self.x, value);
        Ok(())
    }

    /// CPY - compare Y with memory
    pub(crate) fn cpy(
        &mut self,
        bus: &mut CpuBus,
        addr: &AddressingResult,
    ) -> Result<(), EmulatorError> {
        let value = self.read_operand(bus, addr)?;
        self.compare(self.y, value);
        Ok(())
    }
}
