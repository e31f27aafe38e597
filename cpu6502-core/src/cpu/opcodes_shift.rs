//! `ASL`/`LSR`/`ROL`/`ROR`. Each operates on the accumulator when `mode`
//! is `Accumulator`, otherwise on a memory operand fetched/written
//! through the bus.

use super::Cpu;
use crate::cpu::StatusFlag;
use crate::opcodes::Mode;

fn operate(cpu: &mut Cpu, mode: Mode, f: impl Fn(&mut Cpu, u8) -> u8) {
    if mode == Mode::Accumulator {
        let result = f(cpu, cpu.a);
        cpu.a = result;
        cpu.update_zero_and_negative(result);
        return;
    }
    let addr = cpu.operand_address(mode, false);
    let value = cpu.read_u8(addr);
    let result = f(cpu, value);
    cpu.write_u8(addr, result);
    cpu.update_zero_and_negative(result);
}

pub(crate) fn asl(cpu: &mut Cpu, mode: Mode) {
    operate(cpu, mode, |cpu, value| {
        cpu.set_flag(StatusFlag::Carry, value & 0x80 != 0);
        value << 1
    });
}

pub(crate) fn lsr(cpu: &mut Cpu, mode: Mode) {
    operate(cpu, mode, |cpu, value| {
        cpu.set_flag(StatusFlag::Carry, value & 0x01 != 0);
        value >> 1
    });
}

pub(crate) fn rol(cpu: &mut Cpu, mode: Mode) {
    operate(cpu, mode, |cpu, value| {
        let old_carry = cpu.flag(StatusFlag::Carry) as u8;
        cpu.set_flag(StatusFlag::Carry, value & 0x80 != 0);
        (value << 1) | old_carry
    });
}

pub(crate) fn ror(cpu: &mut Cpu, mode: Mode) {
    operate(cpu, mode, |cpu, value| {
        let old_carry = cpu.flag(StatusFlag::Carry) as u8;
        cpu.set_flag(StatusFlag::Carry, value & 0x01 != 0);
        (value >> 1) | (old_carry << 7)
    });
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::bus::Bus;

    #[test]
    fn asl_on_accumulator_sets_carry_from_bit_7() {
        let mut cpu = Cpu::new(Bus::new_shared());
        cpu.a = 0x81;
        asl(&mut cpu, Mode::Accumulator);
        assert_eq!(cpu.a, 0x02);
        assert!(cpu.flag(StatusFlag::Carry));
    }

    #[test]
    fn rol_brings_in_old_carry_at_bit_0() {
        let mut cpu = Cpu::new(Bus::new_shared());
        cpu.a = 0x01;
        cpu.set_flag(StatusFlag::Carry, true);
        rol(&mut cpu, Mode::Accumulator);
        assert_eq!(cpu.a, 0x03);
        assert!(!cpu.flag(StatusFlag::Carry));
    }

    #[test]
    fn ror_on_memory_operand() {
        let mut cpu = Cpu::new(Bus::new_shared());
        cpu.pc = 0x8000;
        cpu.bus.borrow_mut().write(0x8000, 0x40);
        cpu.bus.borrow_mut().write(0x0040, 0x01);
        cpu.set_flag(StatusFlag::Carry, true);
        ror(&mut cpu, Mode::ZeroPage);
        assert_eq!(cpu.bus.borrow_mut().read(0x0040), 0x80);
        assert!(cpu.flag(StatusFlag::Carry));
    }
}
