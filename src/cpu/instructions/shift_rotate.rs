// Shifts and rotates
//
// All four come in an accumulator form and four memory forms. The memory
// forms are read-modify-write: the unmodified byte is written back before
// the shifted one. Rotates feed the old carry into the vacated bit; plain
// shifts feed zero.

use crate::bus::CpuBus;
use crate::cpu::addressing::AddressingResult;
use crate::cpu::{flags, Cpu};
use crate::error::EmulatorError;

impl Cpu {
    /// Run one shift step against the accumulator or memory
    fn read_modify_write<F>(
        &mut self,
        bus: &mut CpuBus,
        addr: &AddressingResult,
        accumulator: bool,
        step: F,
    ) -> Result<(), EmulatorError>
    where
        F: Fn(u8, bool) -> (u8, bool),
    {
        let carry_in = self.flag(flags::CARRY);

        if accumulator {
            let (result, carry_out) = step(self.a, carry_in);
            self.a = result;
            self.set_flag(flags::CARRY, carry_out);
            self.update_zero_negative(result);
        } else {
            let value = bus.read(addr.address)?;
            bus.write(addr.address, value)?;
            let (result, carry_out) = step(value, carry_in);
            bus.write(addr.address, result)?;
            self.set_flag(flags::CARRY, carry_out);
            self.update_zero_negative(result);
        }
        Ok(())
    }

    /// ASL - arithmetic shift left; bit 7 exits into carry
    pub(crate) fn asl(
        &mut self,
        bus: &mut CpuBus,
        addr: &AddressingResult,
        accumulator: bool,
    ) -> Result<(), EmulatorError> {
        self.read_modify_write(bus, addr, accumulator, |value, _| {
            (value << 1, value & 0x80 != 0)
        })
    }

    /// LSR - logical shift right; N always clears since bit 7 becomes 0
    pub(crate) fn lsr(
        &mut self,
        bus: &mut CpuBus,
        addr: &AddressingResult,
        accumulator: bool,
    ) -> Result<(), EmulatorError> {
        self.read_modify_write(bus, addr, accumulator, |value, _| {
            (value >> 1, value & 0x01 != 0)
        })
    }

    /// ROL - rotate left through carry
    pub(crate) fn rol(
        &mut self,
        bus: &mut CpuBus,
        addr: &AddressingResult,
        accumulator: bool,
    ) -> Result<(), EmulatorError> {
        self.read_modify_write(bus, addr, accumulator, |value, carry| {
            ((value << 1) | carry as u8, value & 0x80 != 0)
        })
    }

    /// ROR - rotate right through carry; old carry enters bit 7
    pub(crate) fn ror(
        &mut self,
        bus: &mut CpuBus,
        addr: &AddressingResult,
        accumulator: bool,
    ) -> Result<(), EmulatorError> {
        self.read_modify_write(bus, addr, accumulator, |value, carry| {
            ((value >> 1) | ((carry as u8) << 7), value & 0x01 != 0)
        })
    }
}
