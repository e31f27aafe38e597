//! Single-bit flag sets/clears. Two cycles each, no operand.

use super::{Cpu, StatusFlag};
use crate::opcodes::Mode;

pub(crate) fn clc(cpu: &mut Cpu, _mode: Mode) {
    cpu.set_flag(StatusFlag::Carry, false);
}

pub(crate) fn sec(cpu: &mut Cpu, _mode: Mode) {
    cpu.set_flag(StatusFlag::Carry, true);
}

pub(crate) fn cld(cpu: &mut Cpu, _mode: Mode) {
    cpu.set_flag(StatusFlag::Decimal, false);
}

pub(crate) fn sed(cpu: &mut Cpu, _mode: Mode) {
    cpu.set_flag(StatusFlag::Decimal, true);
}

pub(crate) fn cli(cpu: &mut Cpu, _mode: Mode) {
    cpu.set_flag(StatusFlag::InterruptDisable, false);
}

pub(crate) fn sei(cpu: &mut Cpu, _mode: Mode) {
    cpu.set_flag(StatusFlag::InterruptDisable, true);
}

pub(crate) fn clv(cpu: &mut Cpu, _mode: Mode) {
    cpu.set_flag(StatusFlag::Overflow, false);
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::bus::Bus;

    #[test]
    fn sec_then_clc() {
        let mut cpu = Cpu::new(Bus::new_shared());
        sec(&mut cpu, Mode::Implied);
        assert!(cpu.flag(StatusFlag::Carry));
        clc(&mut cpu, Mode::Implied);
        assert!(!cpu.flag(StatusFlag::Carry));
    }

    #[test]
    fn sed_and_cld_toggle_decimal_only() {
        let mut cpu = Cpu::new(Bus::new_shared());
        sed(&mut cpu, Mode::Implied);
        assert!(cpu.flag(StatusFlag::Decimal));
        assert!(!cpu.flag(StatusFlag::Carry));
        cld(&mut cpu, Mode::Implied);
        assert!(!cpu.flag(StatusFlag::Decimal));
    }
}
