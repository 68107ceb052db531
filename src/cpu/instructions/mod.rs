// Instruction implementations, grouped by family

pub mod arithmetic;
pub mod branch;
pub mod compare;
pub mod jump_subroutine;
pub mod load_store;
pub mod logic;
pub mod miscellaneous;
pub mod shift_rotate;
pub mod stack;
pub mod transfer;

use crate::bus::CpuBus;
use crate::cpu::addressing::AddressingResult;
use crate::error::EmulatorError;

impl crate::cpu::Cpu {
    /// Fetch the operand: the immediate value if the mode carried one,
    /// otherwise a read from the effective address
    #[inline]
    pub(crate) fn read_operand(
        &self,
        bus: &mut CpuBus,
        addr: &AddressingResult,
    ) -> Result<u8, EmulatorError> {
        match addr.value {
            Some(value) => Ok(value),
            None => bus.read(addr.address),
        }
    }
}
