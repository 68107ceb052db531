// Instruction boundary handling: decode, interrupt entry, and dispatch
//
// `begin` runs on the first cycle of an instruction. Pending interrupts win
// over a fetch; otherwise the opcode is fetched and the addressing mode
// resolved, which fixes the instruction's total cycle count up front
// (base, plus page-cross for slow loads, plus branch-taken adjustments).
// `apply` runs on the last cycle and performs the visible effects.

use crate::bus::CpuBus;
use crate::cpu::addressing::AddressingMode;
use crate::cpu::opcodes::{Operation, OPCODE_TABLE};
use crate::cpu::{flags, Cpu, CurrentOp, PendingWork, INTERRUPT_CYCLES};
use crate::error::EmulatorError;

impl Cpu {
    /// Start the next unit of work at an instruction boundary
    pub(crate) fn begin(&mut self, bus: &mut CpuBus) -> Result<(), EmulatorError> {
        self.applied = false;

        if self.nmi_pending() {
            self.current = Some(PendingWork::Nmi);
            self.cycles_remaining = INTERRUPT_CYCLES;
            return Ok(());
        }
        if self.irq_line() && !self.flag(flags::IRQ_DISABLE) {
            self.current = Some(PendingWork::Irq);
            self.cycles_remaining = INTERRUPT_CYCLES;
            return Ok(());
        }

        self.decode(bus)
    }

    /// Fetch and decode one instruction, fixing its cycle count
    fn decode(&mut self, bus: &mut CpuBus) -> Result<(), EmulatorError> {
        let pc = self.pc;
        let opcode = bus.read(pc)?;
        let info = &OPCODE_TABLE[opcode as usize];

        if info.operation == Operation::Illegal {
            return Err(EmulatorError::IllegalInstruction { opcode, pc });
        }

        self.pc = self.pc.wrapping_add(1);
        let addr = self.resolve_address(info.mode, bus)?;

        let mut cycles = info.cycles;
        if info.page_cycle && addr.page_crossed {
            cycles += 1;
        }
        if info.operation.is_branch() && self.branch_condition(info.operation) {
            // Taken branches cost one cycle, two if the target is on
            // another page
            cycles += 1;
            if addr.page_crossed {
                cycles += 1;
            }
        }

        log::trace!(
            "{:04X}  {}  A:{:02X} X:{:02X} Y:{:02X} P:{:02X} S:{:02X}",
            pc,
            info.operation.name(),
            self.a,
            self.x,
            self.y,
            self.p,
            self.s
        );

        self.current = Some(PendingWork::Op(CurrentOp {
            operation: info.operation,
            mode: info.mode,
            addr,
            opcode,
            pc,
        }));
        self.cycles_remaining = cycles;
        Ok(())
    }

    /// Perform the visible effects of the in-flight work
    pub(crate) fn apply(&mut self, bus: &mut CpuBus) -> Result<(), EmulatorError> {
        match self.current {
            Some(PendingWork::Nmi) => self.enter_nmi(bus),
            Some(PendingWork::Irq) => self.enter_irq(bus),
            Some(PendingWork::Op(op)) => self.dispatch(&op, bus),
            None => Ok(()),
        }
    }

    /// One match on the operation kind reaches all 56 implementations
    fn dispatch(&mut self, op: &CurrentOp, bus: &mut CpuBus) -> Result<(), EmulatorError> {
        let addr = &op.addr;
        let accumulator = op.mode == AddressingMode::Accumulator;

        match op.operation {
            // Load / store
            Operation::Lda => self.lda(bus, addr)?,
            Operation::Ldx => self.ldx(bus, addr)?,
            Operation::Ldy => self.ldy(bus, addr)?,
            Operation::Sta => self.sta(bus, addr)?,
            Operation::Stx => self.stx(bus, addr)?,
            Operation::Sty => self.sty(bus, addr)?,

            // Arithmetic
            Operation::Adc => self.adc(bus, addr)?,
            Operation::Sbc => self.sbc(bus, addr)?,
            Operation::Inc => self.inc(bus, addr)?,
            Operation::Inx => self.inx(),
            Operation::Iny => self.iny(),
            Operation::Dec => self.dec(bus, addr)?,
            Operation::Dex => self.dex(),
            Operation::Dey => self.dey(),

            // Logic
            Operation::And => self.and(bus, addr)?,
            Operation::Ora => self.ora(bus, addr)?,
            Operation::Eor => self.eor(bus, addr)?,
            Operation::Bit => self.bit(bus, addr)?,

            // Shift / rotate
            Operation::Asl => self.asl(bus, addr, accumulator)?,
            Operation::Lsr => self.lsr(bus, addr, accumulator)?,
            Operation::Rol => self.rol(bus, addr, accumulator)?,
            Operation::Ror => self.ror(bus, addr, accumulator)?,

            // Compare
            Operation::Cmp => self.cmp(bus, addr)?,
            Operation::Cpx => self.cpx(bus, addr)?,
            Operation::Cpy => self.cpy(bus, addr)?,

            // Branches
            Operation::Bcc
            | Operation::Bcs
            | Operation::Beq
            | Operation::Bmi
            | Operation::Bne
            | Operation::Bpl
            | Operation::Bvc
            | Operation::Bvs => self.branch(op.operation, addr),

            // Jumps and subroutines
            Operation::Jmp => self.jmp(addr),
            Operation::Jsr => self.jsr(bus, addr)?,
            Operation::Rts => self.rts(bus)?,

            // Stack
            Operation::Pha => self.pha(bus)?,
            Operation::Php => self.php(bus)?,
            Operation::Pla => self.pla(bus)?,
            Operation::Plp => self.plp(bus)?,

            // Transfers
            Operation::Tax => self.tax(),
            Operation::Tay => self.tay(),
            Operation::Tsx => self.tsx(),
            Operation::Txa => self.txa(),
            Operation::Txs => self.txs(),
            Operation::Tya => self.tya(),

            // Flags
            Operation::Clc => self.set_flag(flags::CARRY, false),
            Operation::Cld => self.set_flag(flags::DECIMAL, false),
            Operation::Cli => self.set_flag(flags::IRQ_DISABLE, false),
            Operation::Clv => self.set_flag(flags::OVERFLOW, false),
            Operation::Sec => self.set_flag(flags::CARRY, true),
            Operation::Sed => self.set_flag(flags::DECIMAL, true),
            Operation::Sei => self.set_flag(flags::IRQ_DISABLE, true),

            // Interrupt-adjacent
            Operation::Brk => self.brk(bus)?,
            Operation::Rti => self.rti(bus)?,
            Operation::Nop => {}

            // decode() traps these before they ever reach dispatch
            Operation::Illegal => {
                return Err(EmulatorError::IllegalInstruction {
                    opcode: op.opcode,
                    pc: op.pc,
                })
            }
        }

        Ok(())
    }
}
