// Arithmetic: add/subtract with carry, increments, decrements
//
// Decimal mode is accepted into P but ignored; this silicon revision has
// BCD arithmetic disabled, so ADC/SBC are always binary.

use crate::bus::CpuBus;
use crate::cpu::addressing::AddressingResult;
use crate::cpu::{flags, Cpu};
use crate::error::EmulatorError;

impl Cpu {
    /// Shared core of ADC and SBC: A + value + carry
    ///
    /// Signed overflow occurs when both inputs agree in sign and the result
    /// does not: `(a ^ result) & (value ^ result) & $80`.
    fn add_with_carry(&mut self, value: u8) {
        let carry_in = self.flag(flags::CARRY) as u16;
        let sum = self.a as u16 + value as u16 + carry_in;
        let result = sum as u8;

        self.set_flag(flags::CARRY, sum > 0xFF);
        self.set_flag(
            flags::OVERFLOW,
            (self.a ^ result) & (value ^ result) & 0x80 != 0,
        );
        self.a = result;
        self.update_zero_negative(result);
    }

    /// ADC - add memory to accumulator with carry
    pub(crate) fn adc(
        &mut self,
        bus: &mut CpuBus,
        addr: &AddressingResult,
    ) -> Result<(), EmulatorError> {
        let value = self.read_operand(bus, addr)?;
        self.add_with_carry(value);
        Ok(())
    }

    /// SBC - subtract with borrow; A - M - (1 - C) == A + !M + C
    pub(crate) fn sbc(
        &mut self,
        bus: &mut CpuBus,
        addr: &AddressingResult,
    ) -> Result<(), EmulatorError> {
        let value = self.read_operand(bus, addr)?;
        self.add_with_carry(!value);
        Ok(())
    }

    /// INC - increment memory
    ///
    /// Read-modify-write: the unmodified value is written back before the
    /// result, which memory-mapped hardware can observe.
    pub(crate) fn inc(
        &mut self,
        bus: &mut CpuBus,
        addr: &AddressingResult,
    ) -> Result<(), EmulatorError> {
        let value = bus.read(addr.address)?;
        bus.write(addr.address, value)?;
        let result = value.wrapping_add(1);
        bus.write(addr.address, result)?;
        self.update_zero_negative(result);
        Ok(())
    }

    /// DEC - decrement memory
    pub(crate) fn dec(
        &mut self,
        bus: &mut CpuBus,
        addr: &AddressingResult,
    ) -> Result<(), EmulatorError> {
        let value = bus.read(addr.address)?;
        bus.write(addr.address, value)?;
        let result = value.wrapping_sub(1);
        bus.write(addr.address, result)?;
        self.update_zero_negative(result);
        Ok(())
    }

    /// INX - increment X
    pub(crate) fn inx(&mut self) {
        self.x = self.x.wrapping_add(1);
        self.update_zero_negative(self.x);
    }

    /// INY - increment Y
    pub(crate) fn iny(&mut self) {
        self.y = self.y.wrapping_add(1);
        self.update_zero_negative(self.y);
    }

    /// DEX - decrement X
    pub(crate) fn dex(&mut self) {
        self.x = self.x.wrapping_sub(1);
        self.update_zero_negative(self.x);
    }

    /// DEY - decrement Y
    pub(crate) fn dey(&mut self) {
        self.y = self.y.wrapping_sub(1);
        self.update_zero_negative(self.y);
    }
}
