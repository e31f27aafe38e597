//! Control transfer: `JMP`, `JSR`/`RTS`, `BRK`/`RTI`.

use super::{Cpu, StatusFlag};
use crate::memory::InterruptVector;
use crate::opcodes::Mode;

pub(crate) fn jmp(cpu: &mut Cpu, mode: Mode) {
    cpu.pc = cpu.operand_address(mode, false);
}

/// Pushes the return address (the last byte of the `JSR` instruction,
/// i.e. `target_addr - 1`) and jumps; `RTS` pulls it back and adds one.
pub(crate) fn jsr(cpu: &mut Cpu, _mode: Mode) {
    let target = cpu.fetch_u16();
    let return_addr = cpu.pc.wrapping_sub(1);
    cpu.push_u16(return_addr);
    cpu.pc = target;
}

pub(crate) fn rts(cpu: &mut Cpu, _mode: Mode) {
    let return_addr = cpu.pull_u16();
    cpu.pc = return_addr.wrapping_add(1);
}

/// Software interrupt: `PC` was already advanced past the signature byte
/// by `fetch_u8` in `step_one`, so the pushed return address is that of
/// the padding byte after `BRK`, matching hardware. Pushes status with
/// `B` set, masks `I`, and vectors through the shared IRQ/BRK vector
/// (not the reset vector).
pub(crate) fn brk(cpu: &mut Cpu, _mode: Mode) {
    cpu.pc = cpu.pc.wrapping_add(1);
    cpu.push_u16(cpu.pc);
    cpu.push_status(true);
    cpu.set_flag(StatusFlag::InterruptDisable, true);
    cpu.pc = cpu.bus.borrow_mut().read_u16(InterruptVector::IrqBrk.address());
}

/// Pulls status then `PC`, in that order, the reverse of `BRK`'s pushes.
pub(crate) fn rti(cpu: &mut Cpu, _mode: Mode) {
    cpu.pull_status();
    cpu.pc = cpu.pull_u16();
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::bus::Bus;

    fn cpu_at(pc: u16) -> Cpu {
        let bus = Bus::new_shared();
        bus.borrow_mut().write_u16(InterruptVector::Reset.address(), pc);
        Cpu::new(bus)
    }

    #[test]
    fn jsr_then_rts_round_trips_to_the_instruction_after_jsr() {
        let mut cpu = cpu_at(0x8000);
        cpu.bus.borrow_mut().write_u16(0x8000, 0x9000);
        jsr(&mut cpu, Mode::Absolute);
        assert_eq!(cpu.pc, 0x9000);
        rts(&mut cpu, Mode::Implied);
        assert_eq!(cpu.pc, 0x8002);
    }

    #[test]
    fn brk_vectors_through_irq_brk_not_reset() {
        let mut cpu = cpu_at(0x8000);
        cpu.bus.borrow_mut().write_u16(InterruptVector::IrqBrk.address(), 0xFE00);
        cpu.pc = 0x8000;
        brk(&mut cpu, Mode::Implied);
        assert_eq!(cpu.pc, 0xFE00);
        assert!(cpu.flag(StatusFlag::InterruptDisable));
    }

    #[test]
    fn rti_restores_pc_and_flags_pushed_by_brk() {
        let mut cpu = cpu_at(0x8000);
        cpu.bus.borrow_mut().write_u16(InterruptVector::IrqBrk.address(), 0xFE00);
        cpu.set_flag(StatusFlag::Carry, true);
        cpu.pc = 0x8000;
        brk(&mut cpu, Mode::Implied);
        rti(&mut cpu, Mode::Implied);
        assert_eq!(cpu.pc, 0x8001);
        assert!(cpu.flag(StatusFlag::Carry));
    }
}
