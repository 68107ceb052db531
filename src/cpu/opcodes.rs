// Opcode table for the 6502
//
// One dense 256-entry table keyed on the opcode byte. Each entry names the
// operation, its addressing mode, the base cycle count, and whether a page
// crossing during address calculation costs an extra cycle. Undefined
// opcodes decode to `Illegal` and trap.

use crate::cpu::addressing::AddressingMode;

/// The 56 documented operations, plus the trap for everything else
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Adc, And, Asl, Bcc, Bcs, Beq, Bit, Bmi, Bne, Bpl, Brk, Bvc, Bvs,
    Clc, Cld, Cli, Clv, Cmp, Cpx, Cpy, Dec, Dex, Dey, Eor, Inc, Inx,
    Iny, Jmp, Jsr, Lda, Ldx, Ldy, Lsr, Nop, Ora, Pha, Php, Pla, Plp,
    Rol, Ror, Rti, Rts, Sbc, Sec, Sed, Sei, Sta, Stx, Sty, Tax, Tay,
    Tsx, Txa, Txs, Tya,
    Illegal,
}

impl Operation {
    /// Assembler mnemonic, for trace logging
    pub fn name(self) -> &'static str {
        match self {
            Operation::Adc => "ADC", Operation::And => "AND", Operation::Asl => "ASL",
            Operation::Bcc => "BCC", Operation::Bcs => "BCS", Operation::Beq => "BEQ",
            Operation::Bit => "BIT", Operation::Bmi => "BMI", Operation::Bne => "BNE",
            Operation::Bpl => "BPL", Operation::Brk => "BRK", Operation::Bvc => "BVC",
            Operation::Bvs => "BVS", Operation::Clc => "CLC", Operation::Cld => "CLD",
            Operation::Cli => "CLI", Operation::Clv => "CLV", Operation::Cmp => "CMP",
            Operation::Cpx => "CPX", Operation::Cpy => "CPY", Operation::Dec => "DEC",
            Operation::Dex => "DEX", Operation::Dey => "DEY", Operation::Eor => "EOR",
            Operation::Inc => "INC", Operation::Inx => "INX", Operation::Iny => "INY",
            Operation::Jmp => "JMP", Operation::Jsr => "JSR", Operation::Lda => "LDA",
            Operation::Ldx => "LDX", Operation::Ldy => "LDY", Operation::Lsr => "LSR",
            Operation::Nop => "NOP", Operation::Ora => "ORA", Operation::Pha => "PHA",
            Operation::Php => "PHP", Operation::Pla => "PLA", Operation::Plp => "PLP",
            Operation::Rol => "ROL", Operation::Ror => "ROR", Operation::Rti => "RTI",
            Operation::Rts => "RTS", Operation::Sbc => "SBC", Operation::Sec => "SEC",
            Operation::Sed => "SED", Operation::Sei => "SEI", Operation::Sta => "STA",
            Operation::Stx => "STX", Operation::Sty => "STY", Operation::Tax => "TAX",
            Operation::Tay => "TAY", Operation::Tsx => "TSX", Operation::Txa => "TXA",
            Operation::Txs => "TXS", Operation::Tya => "TYA",
            Operation::Illegal => "???",
        }
    }

    /// Whether this is one of the eight conditional branches
    pub fn is_branch(self) -> bool {
        matches!(
            self,
            Operation::Bcc
                | Operation::Bcs
                | Operation::Beq
                | Operation::Bmi
                | Operation::Bne
                | Operation::Bpl
                | Operation::Bvc
                | Operation::Bvs
        )
    }
}

/// One decoded opcode-table entry
#[derive(Debug, Clone, Copy)]
pub struct OpcodeInfo {
    pub operation: Operation,
    pub mode: AddressingMode,
    /// Base cycle count before page-cross or branch adjustments
    pub cycles: u8,
    /// Loads add one cycle when the indexed address crosses a page
    pub page_cycle: bool,
}

const fn entry(operation: Operation, mode: AddressingMode, cycles: u8, page_cycle: bool) -> OpcodeInfo {
    OpcodeInfo {
        operation,
        mode,
        cycles,
        page_cycle,
    }
}

const ILLEGAL: OpcodeInfo = entry(Operation::Illegal, AddressingMode::Implied, 2, false);

/// The full decode table, indexed by opcode byte
pub static OPCODE_TABLE: [OpcodeInfo; 256] = build_table();

#[rustfmt::skip]
const fn build_table() -> [OpcodeInfo; 256] {
    use AddressingMode::*;
    use Operation::*;

    let mut t = [ILLEGAL; 256];

    // Load
    t[0xA9] = entry(Lda, Immediate, 2, false);
    t[0xA5] = entry(Lda, ZeroPage, 3, false);
    t[0xB5] = entry(Lda, ZeroPageX, 4, false);
    t[0xAD] = entry(Lda, Absolute, 4, false);
    t[0xBD] = entry(Lda, AbsoluteX, 4, true);
    t[0xB9] = entry(Lda, AbsoluteY, 4, true);
    t[0xA1] = entry(Lda, IndexedIndirect, 6, false);
    t[0xB1] = entry(Lda, IndirectIndexed, 5, true);
    t[0xA2] = entry(Ldx, Immediate, 2, false);
    t[0xA6] = entry(Ldx, ZeroPage, 3, false);
    t[0xB6] = entry(Ldx, ZeroPageY, 4, false);
    t[0xAE] = entry(Ldx, Absolute, 4, false);
    t[0xBE] = entry(Ldx, AbsoluteY, 4, true);
    t[0xA0] = entry(Ldy, Immediate, 2, false);
    t[0xA4] = entry(Ldy, ZeroPage, 3, false);
    t[0xB4] = entry(Ldy, ZeroPageX, 4, false);
    t[0xAC] = entry(Ldy, Absolute, 4, false);
    t[0xBC] = entry(Ldy, AbsoluteX, 4, true);

    // Store
    t[0x85] = entry(Sta, ZeroPage, 3, false);
    t[0x95] = entry(Sta, ZeroPageX, 4, false);
    t[0x8D] = entry(Sta, Absolute, 4, false);
    t[0x9D] = entry(Sta, AbsoluteX, 5, false);
    t[0x99] = entry(Sta, AbsoluteY, 5, false);
    t[0x81] = entry(Sta, IndexedIndirect, 6, false);
    t[0x91] = entry(Sta, IndirectIndexed, 6, false);
    t[0x86] = entry(Stx, ZeroPage, 3, false);
    t[0x96] = entry(Stx, ZeroPageY, 4, false);
    t[0x8E] = entry(Stx, Absolute, 4, false);
    t[0x84] = entry(Sty, ZeroPage, 3, false);
    t[0x94] = entry(Sty, ZeroPageX, 4, false);
    t[0x8C] = entry(Sty, Absolute, 4, false);

    // Arithmetic
    t[0x69] = entry(Adc, Immediate, 2, false);
    t[0x65] = entry(Adc, ZeroPage, 3, false);
    t[0x75] = entry(Adc, ZeroPageX, 4, false);
    t[0x6D] = entry(Adc, Absolute, 4, false);
    t[0x7D] = entry(Adc, AbsoluteX, 4, true);
    t[0x79] = entry(Adc, AbsoluteY, 4, true);
    t[0x61] = entry(Adc, IndexedIndirect, 6, false);
    t[0x71] = entry(Adc, IndirectIndexed, 5, true);
    t[0xE9] = entry(Sbc, Immediate, 2, false);
    t[0xE5] = entry(Sbc, ZeroPage, 3, false);
    t[0xF5] = entry(Sbc, ZeroPageX, 4, false);
    t[0xED] = entry(Sbc, Absolute, 4, false);
    t[0xFD] = entry(Sbc, AbsoluteX, 4, true);
    t[0xF9] = entry(Sbc, AbsoluteY, 4, true);
    t[0xE1] = entry(Sbc, IndexedIndirect, 6, false);
    t[0xF1] = entry(Sbc, IndirectIndexed, 5, true);

    // Increment / decrement
    t[0xE6] = entry(Inc, ZeroPage, 5, false);
    t[0xF6] = entry(Inc, ZeroPageX, 6, false);
    t[0xEE] = entry(Inc, Absolute, 6, false);
    t[0xFE] = entry(Inc, AbsoluteX, 7, false);
    t[0xE8] = entry(Inx, Implied, 2, false);
    t[0xC8] = entry(Iny, Implied, 2, false);
    t[0xC6] = entry(Dec, ZeroPage, 5, false);
    t[0xD6] = entry(Dec, ZeroPageX, 6, false);
    t[0xCE] = entry(Dec, Absolute, 6, false);
    t[0xDE] = entry(Dec, AbsoluteX, 7, false);
    t[0xCA] = entry(Dex, Implied, 2, false);
    t[0x88] = entry(Dey, Implied, 2, false);

    // Logic
    t[0x29] = entry(And, Immediate, 2, false);
    t[0x25] = entry(And, ZeroPage, 3, false);
    t[0x35] = entry(And, ZeroPageX, 4, false);
    t[0x2D] = entry(And, Absolute, 4, false);
    t[0x3D] = entry(And, AbsoluteX, 4, true);
    t[0x39] = entry(And, AbsoluteY, 4, true);
    t[0x21] = entry(And, IndexedIndirect, 6, false);
    t[0x31] = entry(And, IndirectIndexed, 5, true);
    t[0x09] = entry(Ora, Immediate, 2, false);
    t[0x05] = entry(Ora, ZeroPage, 3, false);
    t[0x15] = entry(Ora, ZeroPageX, 4, false);
    t[0x0D] = entry(Ora, Absolute, 4, false);
    t[0x1D] = entry(Ora, AbsoluteX, 4, true);
    t[0x19] = entry(Ora, AbsoluteY, 4, true);
    t[0x01] = entry(Ora, IndexedIndirect, 6, false);
    t[0x11] = entry(Ora, IndirectIndexed, 5, true);
    t[0x49] = entry(Eor, Immediate, 2, false);
    t[0x45] = entry(Eor, ZeroPage, 3, false);
    t[0x55] = entry(Eor, ZeroPageX, 4, false);
    t[0x4D] = entry(Eor, Absolute, 4, false);
    t[0x5D] = entry(Eor, AbsoluteX, 4, true);
    t[0x59] = entry(Eor, AbsoluteY, 4, true);
    t[0x41] = entry(Eor, IndexedIndirect, 6, false);
    t[0x51] = entry(Eor, IndirectIndexed, 5, true);
    t[0x24] = entry(Bit, ZeroPage, 3, false);
    t[0x2C] = entry(Bit, Absolute, 4, false);

    // Shift / rotate
    t[0x0A] = entry(Asl, Accumulator, 2, false);
    t[0x06] = entry(Asl, ZeroPage, 5, false);
    t[0x16] = entry(Asl, ZeroPageX, 6, false);
    t[0x0E] = entry(Asl, Absolute, 6, false);
    t[0x1E] = entry(Asl, AbsoluteX, 7, false);
    t[0x4A] = entry(Lsr, Accumulator, 2, false);
    t[0x46] = entry(Lsr, ZeroPage, 5, false);
    t[0x56] = entry(Lsr, ZeroPageX, 6, false);
    t[0x4E] = entry(Lsr, Absolute, 6, false);
    t[0x5E] = entry(Lsr, AbsoluteX, 7, false);
    t[0x2A] = entry(Rol, Accumulator, 2, false);
    t[0x26] = entry(Rol, ZeroPage, 5, false);
    t[0x36] = entry(Rol, ZeroPageX, 6, false);
    t[0x2E] = entry(Rol, Absolute, 6, false);
    t[0x3E] = entry(Rol, AbsoluteX, 7, false);
    t[0x6A] = entry(Ror, Accumulator, 2, false);
    t[0x66] = entry(Ror, ZeroPage, 5, false);
    t[0x76] = entry(Ror, ZeroPageX, 6, false);
    t[0x6E] = entry(Ror, Absolute, 6, false);
    t[0x7E] = entry(Ror, AbsoluteX, 7, false);

    // Compare
    t[0xC9] = entry(Cmp, Immediate, 2, false);
    t[0xC5] = entry(Cmp, ZeroPage, 3, false);
    t[0xD5] = entry(Cmp, ZeroPageX, 4, false);
    t[0xCD] = entry(Cmp, Absolute, 4, false);
    t[0xDD] = entry(Cmp, AbsoluteX, 4, true);
    t[0xD9] = entry(Cmp, AbsoluteY, 4, true);
    t[0xC1] = entry(Cmp, IndexedIndirect, 6, false);
    t[0xD1] = entry(Cmp, IndirectIndexed, 5, true);
    t[0xE0] = entry(Cpx, Immediate, 2, false);
    t[0xE4] = entry(Cpx, ZeroPage, 3, false);
    t[0xEC] = entry(Cpx, Absolute, 4, false);
    t[0xC0] = entry(Cpy, Immediate, 2, false);
    t[0xC4] = entry(Cpy, ZeroPage, 3, false);
    t[0xCC] = entry(Cpy, Absolute, 4, false);

    // Branches (taken and page-cross cycles are added at decode)
    t[0x90] = entry(Bcc, Relative, 2, false);
    t[0xB0] = entry(Bcs, Relative, 2, false);
    t[0xF0] = entry(Beq, Relative, 2, false);
    t[0x30] = entry(Bmi, Relative, 2, false);
    t[0xD0] = entry(Bne, Relative, 2, false);
    t[0x10] = entry(Bpl, Relative, 2, false);
    t[0x50] = entry(Bvc, Relative, 2, false);
    t[0x70] = entry(Bvs, Relative, 2, false);

    // Jumps and subroutines
    t[0x4C] = entry(Jmp, Absolute, 3, false);
    t[0x6C] = entry(Jmp, Indirect, 5, false);
    t[0x20] = entry(Jsr, Absolute, 6, false);
    t[0x60] = entry(Rts, Implied, 6, false);

    // Stack
    t[0x48] = entry(Pha, Implied, 3, false);
    t[0x08] = entry(Php, Implied, 3, false);
    t[0x68] = entry(Pla, Implied, 4, false);
    t[0x28] = entry(Plp, Implied, 4, false);

    // Transfers
    t[0xAA] = entry(Tax, Implied, 2, false);
    t[0xA8] = entry(Tay, Implied, 2, false);
    t[0xBA] = entry(Tsx, Implied, 2, false);
    t[0x8A] = entry(Txa, Implied, 2, false);
    t[0x9A] = entry(Txs, Implied, 2, false);
    t[0x98] = entry(Tya, Implied, 2, false);

    // Flags
    t[0x18] = entry(Clc, Implied, 2, false);
    t[0xD8] = entry(Cld, Implied, 2, false);
    t[0x58] = entry(Cli, Implied, 2, false);
    t[0xB8] = entry(Clv, Implied, 2, false);
    t[0x38] = entry(Sec, Implied, 2, false);
    t[0xF8] = entry(Sed, Implied, 2, false);
    t[0x78] = entry(Sei, Implied, 2, false);

    // Interrupts and no-op
    t[0x00] = entry(Brk, Implied, 7, false);
    t[0x40] = entry(Rti, Implied, 6, false);
    t[0xEA] = entry(Nop, Implied, 2, false);

    t
}
