// Conditional branches
//
// Eight branches, one per testable flag polarity. The extra cycles for a
// taken branch (and for a page-crossing target) are charged when the
// instruction is decoded; taking the branch here just moves the PC.

use crate::cpu::addressing::AddressingResult;
use crate::cpu::opcodes::Operation;
use crate::cpu::{flags, Cpu};

impl Cpu {
    /// Whether `operation`'s branch condition currently holds
    pub(crate) fn branch_condition(&self, operation: Operation) -> bool {
        match operation {
            Operation::Bcc => !self.flag(flags::CARRY),
            Operation::Bcs => self.flag(flags::CARRY),
            Operation::Bne => !self.flag(flags::ZERO),
            Operation::Beq => self.flag(flags::ZERO),
            Operation::Bpl => !self.flag(flags::NEGATIVE),
            Operation::Bmi => self.flag(flags::NEGATIVE),
            Operation::Bvc => !self.flag(flags::OVERFLOW),
            Operation::Bvs => self.flag(flags::OVERFLOW),
            _ => false,
        }
    }

    /// Take the branch if its condition holds
    pub(crate) fn branch(&mut self, operation: Operation, addr: &AddressingResult) {
        if self.branch_condition(operation) {
            self.pc = addr.address;
        }
    }
}
