// Stack push/pull instructions
//
// PHP pushes P with the Break bit set (only pushed copies carry it); PLP
// discards the pushed Break bit and keeps bit 5 high.

use crate::bus::CpuBus;
use crate::cpu::{flags, Cpu};
use crate::error::EmulatorError;

impl Cpu {
    /// PHA - push accumulator
    pub(crate) fn pha(&mut self, bus: &mut CpuBus) -> Result<(), EmulatorError> {
        self.stack_push(bus, self.a)
    }

    /// PLA - pull accumulator, setting Z and N
    pub(crate) fn pla(&mut self, bus: &mut CpuBus) -> Result<(), EmulatorError> {
        self.a = self.stack_pull(bus)?;
        self.update_zero_negative(self.a);
        Ok(())
    }

    /// PHP - push processor status with B and bit 5 set
    pub(crate) fn php(&mut self, bus: &mut CpuBus) -> Result<(), EmulatorError> {
        self.stack_push(bus, self.p | flags::BREAK | flags::UNUSED)
    }

    /// PLP - pull processor status; B is not a real flag and bit 5 stays 1
    pub(crate) fn plp(&mut self, bus: &mut CpuBus) -> Result<(), EmulatorError> {
        let value = self.stack_pull(bus)?;
        self.p = (value & !flags::BREAK) | flags::UNUSED;
        Ok(())
    }
}
