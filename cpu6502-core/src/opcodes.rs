//! Static 256-entry opcode metadata table: the single source of truth for
//! mnemonic, addressing mode, base cycle count, 65C02-only flag, and the
//! handler invoked at dispatch. Built as one unified `const` array (rather
//! than the teacher's four parallel `CYCLES_TABLE`/`ADDRESSING_MODE_TABLE`/
//! `OPCODE_STRING_TABLE`/`OPERATION_FN_TABLE` arrays) so a single index
//! always reaches consistent data.

use crate::cpu::Cpu;

use crate::cpu::{
    adc, and_, asl, bbr0, bbr1, bbr2, bbr3, bbr4,
    bbr5, bbr6, bbr7, bbs0, bbs1, bbs2, bbs3, bbs4,
    bbs5, bbs6, bbs7, bcc, bcs, beq, bit, bit_imm,
    bmi, bne, bpl, bra, brk, bvc, bvs, clc,
    cld, cli, clv, cmp, cpx, cpy, dec, dec_a,
    dex, dey, eor, inc, inc_a, inx, iny, jmp,
    jsr, lda, ldx, ldy, lsr, nop, ora, pha,
    php, phx, phy, pla, plp, plx, ply, rmb0,
    rmb1, rmb2, rmb3, rmb4, rmb5, rmb6, rmb7, rol,
    ror, rti, rts, sbc, sec, sed, sei, smb0,
    smb1, smb2, smb3, smb4, smb5, smb6, smb7, sta,
    stx, sty, stz, tax, tay, trb, tsb, tsx,
    txa, txs, tya, undocumented_nop,
};
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Implied,
    Accumulator,
    Immediate,
    ZeroPage,
    ZeroPageX,
    ZeroPageY,
    Absolute,
    AbsoluteX,
    AbsoluteY,
    Indirect,
    IndirectX,
    IndirectY,
    IndirectZp,
    Relative,
    ZeroPageRelative,
}

pub type OperationFn = fn(&mut Cpu, Mode);

#[derive(Clone, Copy)]
pub struct InstructionMetadata {
    pub opcode: u8,
    pub mnemonic: &'static str,
    pub mode: Mode,
    pub base_cycles: u8,
    pub is_65c02: bool,
    pub description: &'static str,
    pub handler: OperationFn,
}

const fn entry(
    opcode: u8,
    mnemonic: &'static str,
    mode: Mode,
    base_cycles: u8,
    is_65c02: bool,
    description: &'static str,
    handler: OperationFn,
) -> InstructionMetadata {
    InstructionMetadata {
        opcode,
        mnemonic,
        mode,
        base_cycles,
        is_65c02,
        description,
        handler,
    }
}

/// 256 entries, one per opcode. No null slots: every index 0..=255 is
/// populated, with the 47 undocumented NMOS slots sharing
/// `undocumented_nop` as a flag-compatible 2-cycle no-op.
pub const OPCODE_TABLE: [InstructionMetadata; 256] = [
    entry(0x00, "brk", Mode::Implied, 7, false, "Force interrupt.", brk),
    entry(0x01, "ora", Mode::IndirectX, 6, false, "Bitwise OR with accumulator.", ora),
    entry(0x02, "nop", Mode::Implied, 2, false, "Undocumented opcode; treated as a flag-compatible no-op.", undocumented_nop),
    entry(0x03, "nop", Mode::Implied, 2, false, "Undocumented opcode; treated as a flag-compatible no-op.", undocumented_nop),
    entry(0x04, "tsb", Mode::ZeroPage, 5, true, "Test and set bits (65C02).", tsb),
    entry(0x05, "ora", Mode::ZeroPage, 3, false, "Bitwise OR with accumulator.", ora),
    entry(0x06, "asl", Mode::ZeroPage, 5, false, "Arithmetic shift left.", asl),
    entry(0x07, "rmb0", Mode::ZeroPage, 5, true, "Reset memory bit 0 (65C02/Rockwell).", rmb0),
    entry(0x08, "php", Mode::Implied, 3, false, "Push processor status.", php),
    entry(0x09, "ora", Mode::Immediate, 2, false, "Bitwise OR with accumulator.", ora),
    entry(0x0A, "asl", Mode::Accumulator, 2, false, "Arithmetic shift left.", asl),
    entry(0x0B, "nop", Mode::Implied, 2, false, "Undocumented opcode; treated as a flag-compatible no-op.", undocumented_nop),
    entry(0x0C, "tsb", Mode::Absolute, 6, true, "Test and set bits (65C02).", tsb),
    entry(0x0D, "ora", Mode::Absolute, 4, false, "Bitwise OR with accumulator.", ora),
    entry(0x0E, "asl", Mode::Absolute, 6, false, "Arithmetic shift left.", asl),
    entry(0x0F, "bbr0", Mode::ZeroPageRelative, 5, true, "Branch if memory bit 0 clear (65C02/Rockwell).", bbr0),
    entry(0x10, "bpl", Mode::Relative, 2, false, "Branch if plus (N=0).", bpl),
    entry(0x11, "ora", Mode::IndirectY, 5, false, "Bitwise OR with accumulator.", ora),
    entry(0x12, "ora", Mode::IndirectZp, 5, true, "Bitwise OR with accumulator.", ora),
    entry(0x13, "nop", Mode::Implied, 2, false, "Undocumented opcode; treated as a flag-compatible no-op.", undocumented_nop),
    entry(0x14, "trb", Mode::ZeroPage, 5, true, "Test and reset bits (65C02).", trb),
    entry(0x15, "ora", Mode::ZeroPageX, 4, false, "Bitwise OR with accumulator.", ora),
    entry(0x16, "asl", Mode::ZeroPageX, 6, false, "Arithmetic shift left.", asl),
    entry(0x17, "rmb1", Mode::ZeroPage, 5, true, "Reset memory bit 1 (65C02/Rockwell).", rmb1),
    entry(0x18, "clc", Mode::Implied, 2, false, "Clear carry flag.", clc),
    entry(0x19, "ora", Mode::AbsoluteY, 4, false, "Bitwise OR with accumulator.", ora),
    entry(0x1A, "inc", Mode::Accumulator, 2, true, "Increment memory or accumulator.", inc_a),
    entry(0x1B, "nop", Mode::Implied, 2, false, "Undocumented opcode; treated as a flag-compatible no-op.", undocumented_nop),
    entry(0x1C, "trb", Mode::Absolute, 6, true, "Test and reset bits (65C02).", trb),
    entry(0x1D, "ora", Mode::AbsoluteX, 4, false, "Bitwise OR with accumulator.", ora),
    entry(0x1E, "asl", Mode::AbsoluteX, 7, false, "Arithmetic shift left.", asl),
    entry(0x1F, "bbr1", Mode::ZeroPageRelative, 5, true, "Branch if memory bit 1 clear (65C02/Rockwell).", bbr1),
    entry(0x20, "jsr", Mode::Absolute, 6, false, "Jump to subroutine.", jsr),
    entry(0x21, "and", Mode::IndirectX, 6, false, "Bitwise AND with accumulator.", and_),
    entry(0x22, "nop", Mode::Implied, 2, false, "Undocumented opcode; treated as a flag-compatible no-op.", undocumented_nop),
    entry(0x23, "nop", Mode::Implied, 2, false, "Undocumented opcode; treated as a flag-compatible no-op.", undocumented_nop),
    entry(0x24, "bit", Mode::ZeroPage, 3, false, "Test bits against accumulator.", bit),
    entry(0x25, "and", Mode::ZeroPage, 3, false, "Bitwise AND with accumulator.", and_),
    entry(0x26, "rol", Mode::ZeroPage, 5, false, "Rotate left through carry.", rol),
    entry(0x27, "rmb2", Mode::ZeroPage, 5, true, "Reset memory bit 2 (65C02/Rockwell).", rmb2),
    entry(0x28, "plp", Mode::Implied, 4, false, "Pull processor status.", plp),
    entry(0x29, "and", Mode::Immediate, 2, false, "Bitwise AND with accumulator.", and_),
    entry(0x2A, "rol", Mode::Accumulator, 2, false, "Rotate left through carry.", rol),
    entry(0x2B, "nop", Mode::Implied, 2, false, "Undocumented opcode; treated as a flag-compatible no-op.", undocumented_nop),
    entry(0x2C, "bit", Mode::Absolute, 4, false, "Test bits against accumulator.", bit),
    entry(0x2D, "and", Mode::Absolute, 4, false, "Bitwise AND with accumulator.", and_),
    entry(0x2E, "rol", Mode::Absolute, 6, false, "Rotate left through carry.", rol),
    entry(0x2F, "bbr2", Mode::ZeroPageRelative, 5, true, "Branch if memory bit 2 clear (65C02/Rockwell).", bbr2),
    entry(0x30, "bmi", Mode::Relative, 2, false, "Branch if minus (N=1).", bmi),
    entry(0x31, "and", Mode::IndirectY, 5, false, "Bitwise AND with accumulator.", and_),
    entry(0x32, "and", Mode::IndirectZp, 5, true, "Bitwise AND with accumulator.", and_),
    entry(0x33, "nop", Mode::Implied, 2, false, "Undocumented opcode; treated as a flag-compatible no-op.", undocumented_nop),
    entry(0x34, "bit", Mode::ZeroPageX, 4, true, "Test bits against accumulator.", bit),
    entry(0x35, "and", Mode::ZeroPageX, 4, false, "Bitwise AND with accumulator.", and_),
    entry(0x36, "rol", Mode::ZeroPageX, 6, false, "Rotate left through carry.", rol),
    entry(0x37, "rmb3", Mode::ZeroPage, 5, true, "Reset memory bit 3 (65C02/Rockwell).", rmb3),
    entry(0x38, "sec", Mode::Implied, 2, false, "Set carry flag.", sec),
    entry(0x39, "and", Mode::AbsoluteY, 4, false, "Bitwise AND with accumulator.", and_),
    entry(0x3A, "dec", Mode::Accumulator, 2, true, "Decrement memory or accumulator.", dec_a),
    entry(0x3B, "nop", Mode::Implied, 2, false, "Undocumented opcode; treated as a flag-compatible no-op.", undocumented_nop),
    entry(0x3C, "bit", Mode::AbsoluteX, 4, true, "Test bits against accumulator.", bit),
    entry(0x3D, "and", Mode::AbsoluteX, 4, false, "Bitwise AND with accumulator.", and_),
    entry(0x3E, "rol", Mode::AbsoluteX, 7, false, "Rotate left through carry.", rol),
    entry(0x3F, "bbr3", Mode::ZeroPageRelative, 5, true, "Branch if memory bit 3 clear (65C02/Rockwell).", bbr3),
    entry(0x40, "rti", Mode::Implied, 6, false, "Return from interrupt.", rti),
    entry(0x41, "eor", Mode::IndirectX, 6, false, "Bitwise exclusive-OR with accumulator.", eor),
    entry(0x42, "nop", Mode::Implied, 2, false, "Undocumented opcode; treated as a flag-compatible no-op.", undocumented_nop),
    entry(0x43, "nop", Mode::Implied, 2, false, "Undocumented opcode; treated as a flag-compatible no-op.", undocumented_nop),
    entry(0x44, "nop", Mode::Implied, 2, false, "Undocumented opcode; treated as a flag-compatible no-op.", undocumented_nop),
    entry(0x45, "eor", Mode::ZeroPage, 3, false, "Bitwise exclusive-OR with accumulator.", eor),
    entry(0x46, "lsr", Mode::ZeroPage, 5, false, "Logical shift right.", lsr),
    entry(0x47, "rmb4", Mode::ZeroPage, 5, true, "Reset memory bit 4 (65C02/Rockwell).", rmb4),
    entry(0x48, "pha", Mode::Implied, 3, false, "Push accumulator.", pha),
    entry(0x49, "eor", Mode::Immediate, 2, false, "Bitwise exclusive-OR with accumulator.", eor),
    entry(0x4A, "lsr", Mode::Accumulator, 2, false, "Logical shift right.", lsr),
    entry(0x4B, "nop", Mode::Implied, 2, false, "Undocumented opcode; treated as a flag-compatible no-op.", undocumented_nop),
    entry(0x4C, "jmp", Mode::Absolute, 3, false, "Unconditional jump.", jmp),
    entry(0x4D, "eor", Mode::Absolute, 4, false, "Bitwise exclusive-OR with accumulator.", eor),
    entry(0x4E, "lsr", Mode::Absolute, 6, false, "Logical shift right.", lsr),
    entry(0x4F, "bbr4", Mode::ZeroPageRelative, 5, true, "Branch if memory bit 4 clear (65C02/Rockwell).", bbr4),
    entry(0x50, "bvc", Mode::Relative, 2, false, "Branch if overflow clear.", bvc),
    entry(0x51, "eor", Mode::IndirectY, 5, false, "Bitwise exclusive-OR with accumulator.", eor),
    entry(0x52, "eor", Mode::IndirectZp, 5, true, "Bitwise exclusive-OR with accumulator.", eor),
    entry(0x53, "nop", Mode::Implied, 2, false, "Undocumented opcode; treated as a flag-compatible no-op.", undocumented_nop),
    entry(0x54, "nop", Mode::Implied, 2, false, "Undocumented opcode; treated as a flag-compatible no-op.", undocumented_nop),
    entry(0x55, "eor", Mode::ZeroPageX, 4, false, "Bitwise exclusive-OR with accumulator.", eor),
    entry(0x56, "lsr", Mode::ZeroPageX, 6, false, "Logical shift right.", lsr),
    entry(0x57, "rmb5", Mode::ZeroPage, 5, true, "Reset memory bit 5 (65C02/Rockwell).", rmb5),
    entry(0x58, "cli", Mode::Implied, 2, false, "Clear interrupt disable.", cli),
    entry(0x59, "eor", Mode::AbsoluteY, 4, false, "Bitwise exclusive-OR with accumulator.", eor),
    entry(0x5A, "phy", Mode::Implied, 3, true, "Push Y register.", phy),
    entry(0x5B, "nop", Mode::Implied, 2, false, "Undocumented opcode; treated as a flag-compatible no-op.", undocumented_nop),
    entry(0x5C, "nop", Mode::Implied, 2, false, "Undocumented opcode; treated as a flag-compatible no-op.", undocumented_nop),
    entry(0x5D, "eor", Mode::AbsoluteX, 4, false, "Bitwise exclusive-OR with accumulator.", eor),
    entry(0x5E, "lsr", Mode::AbsoluteX, 7, false, "Logical shift right.", lsr),
    entry(0x5F, "bbr5", Mode::ZeroPageRelative, 5, true, "Branch if memory bit 5 clear (65C02/Rockwell).", bbr5),
    entry(0x60, "rts", Mode::Implied, 6, false, "Return from subroutine.", rts),
    entry(0x61, "adc", Mode::IndirectX, 6, false, "Add with carry.", adc),
    entry(0x62, "nop", Mode::Implied, 2, false, "Undocumented opcode; treated as a flag-compatible no-op.", undocumented_nop),
    entry(0x63, "nop", Mode::Implied, 2, false, "Undocumented opcode; treated as a flag-compatible no-op.", undocumented_nop),
    entry(0x64, "stz", Mode::ZeroPage, 3, true, "Store zero to memory.", stz),
    entry(0x65, "adc", Mode::ZeroPage, 3, false, "Add with carry.", adc),
    entry(0x66, "ror", Mode::ZeroPage, 5, false, "Rotate right through carry.", ror),
    entry(0x67, "rmb6", Mode::ZeroPage, 5, true, "Reset memory bit 6 (65C02/Rockwell).", rmb6),
    entry(0x68, "pla", Mode::Implied, 4, false, "Pull accumulator.", pla),
    entry(0x69, "adc", Mode::Immediate, 2, false, "Add with carry.", adc),
    entry(0x6A, "ror", Mode::Accumulator, 2, false, "Rotate right through carry.", ror),
    entry(0x6B, "nop", Mode::Implied, 2, false, "Undocumented opcode; treated as a flag-compatible no-op.", undocumented_nop),
    entry(0x6C, "jmp", Mode::Indirect, 5, false, "Unconditional jump.", jmp),
    entry(0x6D, "adc", Mode::Absolute, 4, false, "Add with carry.", adc),
    entry(0x6E, "ror", Mode::Absolute, 6, false, "Rotate right through carry.", ror),
    entry(0x6F, "bbr6", Mode::ZeroPageRelative, 5, true, "Branch if memory bit 6 clear (65C02/Rockwell).", bbr6),
    entry(0x70, "bvs", Mode::Relative, 2, false, "Branch if overflow set.", bvs),
    entry(0x71, "adc", Mode::IndirectY, 5, false, "Add with carry.", adc),
    entry(0x72, "adc", Mode::IndirectZp, 5, true, "Add with carry.", adc),
    entry(0x73, "nop", Mode::Implied, 2, false, "Undocumented opcode; treated as a flag-compatible no-op.", undocumented_nop),
    entry(0x74, "stz", Mode::ZeroPageX, 4, true, "Store zero to memory.", stz),
    entry(0x75, "adc", Mode::ZeroPageX, 4, false, "Add with carry.", adc),
    entry(0x76, "ror", Mode::ZeroPageX, 6, false, "Rotate right through carry.", ror),
    entry(0x77, "rmb7", Mode::ZeroPage, 5, true, "Reset memory bit 7 (65C02/Rockwell).", rmb7),
    entry(0x78, "sei", Mode::Implied, 2, false, "Set interrupt disable.", sei),
    entry(0x79, "adc", Mode::AbsoluteY, 4, false, "Add with carry.", adc),
    entry(0x7A, "ply", Mode::Implied, 4, true, "Pull Y register.", ply),
    entry(0x7B, "nop", Mode::Implied, 2, false, "Undocumented opcode; treated as a flag-compatible no-op.", undocumented_nop),
    entry(0x7C, "nop", Mode::Implied, 2, false, "Undocumented opcode; treated as a flag-compatible no-op.", undocumented_nop),
    entry(0x7D, "adc", Mode::AbsoluteX, 4, false, "Add with carry.", adc),
    entry(0x7E, "ror", Mode::AbsoluteX, 7, false, "Rotate right through carry.", ror),
    entry(0x7F, "bbr7", Mode::ZeroPageRelative, 5, true, "Branch if memory bit 7 clear (65C02/Rockwell).", bbr7),
    entry(0x80, "bra", Mode::Relative, 3, true, "Branch always (65C02).", bra),
    entry(0x81, "sta", Mode::IndirectX, 6, false, "Store accumulator to memory.", sta),
    entry(0x82, "nop", Mode::Implied, 2, false, "Undocumented opcode; treated as a flag-compatible no-op.", undocumented_nop),
    entry(0x83, "nop", Mode::Implied, 2, false, "Undocumented opcode; treated as a flag-compatible no-op.", undocumented_nop),
    entry(0x84, "sty", Mode::ZeroPage, 3, false, "Store Y register to memory.", sty),
    entry(0x85, "sta", Mode::ZeroPage, 3, false, "Store accumulator to memory.", sta),
    entry(0x86, "stx", Mode::ZeroPage, 3, false, "Store X register to memory.", stx),
    entry(0x87, "smb0", Mode::ZeroPage, 5, true, "Set memory bit 0 (65C02/Rockwell).", smb0),
    entry(0x88, "dey", Mode::Implied, 2, false, "Decrement Y register.", dey),
    entry(0x89, "bit", Mode::Immediate, 2, true, "Test bits against accumulator.", bit_imm),
    entry(0x8A, "txa", Mode::Implied, 2, false, "Transfer X to accumulator.", txa),
    entry(0x8B, "nop", Mode::Implied, 2, false, "Undocumented opcode; treated as a flag-compatible no-op.", undocumented_nop),
    entry(0x8C, "sty", Mode::Absolute, 4, false, "Store Y register to memory.", sty),
    entry(0x8D, "sta", Mode::Absolute, 4, false, "Store accumulator to memory.", sta),
    entry(0x8E, "stx", Mode::Absolute, 4, false, "Store X register to memory.", stx),
    entry(0x8F, "bbs0", Mode::ZeroPageRelative, 5, true, "Branch if memory bit 0 set (65C02/Rockwell).", bbs0),
    entry(0x90, "bcc", Mode::Relative, 2, false, "Branch if carry clear.", bcc),
    entry(0x91, "sta", Mode::IndirectY, 6, false, "Store accumulator to memory.", sta),
    entry(0x92, "sta", Mode::IndirectZp, 5, true, "Store accumulator to memory.", sta),
    entry(0x93, "nop", Mode::Implied, 2, false, "Undocumented opcode; treated as a flag-compatible no-op.", undocumented_nop),
    entry(0x94, "sty", Mode::ZeroPageX, 4, false, "Store Y register to memory.", sty),
    entry(0x95, "sta", Mode::ZeroPageX, 4, false, "Store accumulator to memory.", sta),
    entry(0x96, "stx", Mode::ZeroPageY, 4, false, "Store X register to memory.", stx),
    entry(0x97, "smb1", Mode::ZeroPage, 5, true, "Set memory bit 1 (65C02/Rockwell).", smb1),
    entry(0x98, "tya", Mode::Implied, 2, false, "Transfer Y to accumulator.", tya),
    entry(0x99, "sta", Mode::AbsoluteY, 5, false, "Store accumulator to memory.", sta),
    entry(0x9A, "txs", Mode::Implied, 2, false, "Transfer X to stack pointer.", txs),
    entry(0x9B, "nop", Mode::Implied, 2, false, "Undocumented opcode; treated as a flag-compatible no-op.", undocumented_nop),
    entry(0x9C, "stz", Mode::Absolute, 4, true, "Store zero to memory.", stz),
    entry(0x9D, "sta", Mode::AbsoluteX, 5, false, "Store accumulator to memory.", sta),
    entry(0x9E, "stz", Mode::AbsoluteX, 5, true, "Store zero to memory.", stz),
    entry(0x9F, "bbs1", Mode::ZeroPageRelative, 5, true, "Branch if memory bit 1 set (65C02/Rockwell).", bbs1),
    entry(0xA0, "ldy", Mode::Immediate, 2, false, "Load Y register from memory.", ldy),
    entry(0xA1, "lda", Mode::IndirectX, 6, false, "Load accumulator from memory.", lda),
    entry(0xA2, "ldx", Mode::Immediate, 2, false, "Load X register from memory.", ldx),
    entry(0xA3, "nop", Mode::Implied, 2, false, "Undocumented opcode; treated as a flag-compatible no-op.", undocumented_nop),
    entry(0xA4, "ldy", Mode::ZeroPage, 3, false, "Load Y register from memory.", ldy),
    entry(0xA5, "lda", Mode::ZeroPage, 3, false, "Load accumulator from memory.", lda),
    entry(0xA6, "ldx", Mode::ZeroPage, 3, false, "Load X register from memory.", ldx),
    entry(0xA7, "smb2", Mode::ZeroPage, 5, true, "Set memory bit 2 (65C02/Rockwell).", smb2),
    entry(0xA8, "tay", Mode::Implied, 2, false, "Transfer accumulator to Y.", tay),
    entry(0xA9, "lda", Mode::Immediate, 2, false, "Load accumulator from memory.", lda),
    entry(0xAA, "tax", Mode::Implied, 2, false, "Transfer accumulator to X.", tax),
    entry(0xAB, "nop", Mode::Implied, 2, false, "Undocumented opcode; treated as a flag-compatible no-op.", undocumented_nop),
    entry(0xAC, "ldy", Mode::Absolute, 4, false, "Load Y register from memory.", ldy),
    entry(0xAD, "lda", Mode::Absolute, 4, false, "Load accumulator from memory.", lda),
    entry(0xAE, "ldx", Mode::Absolute, 4, false, "Load X register from memory.", ldx),
    entry(0xAF, "bbs2", Mode::ZeroPageRelative, 5, true, "Branch if memory bit 2 set (65C02/Rockwell).", bbs2),
    entry(0xB0, "bcs", Mode::Relative, 2, false, "Branch if carry set.", bcs),
    entry(0xB1, "lda", Mode::IndirectY, 5, false, "Load accumulator from memory.", lda),
    entry(0xB2, "lda", Mode::IndirectZp, 5, true, "Load accumulator from memory.", lda),
    entry(0xB3, "nop", Mode::Implied, 2, false, "Undocumented opcode; treated as a flag-compatible no-op.", undocumented_nop),
    entry(0xB4, "ldy", Mode::ZeroPageX, 4, false, "Load Y register from memory.", ldy),
    entry(0xB5, "lda", Mode::ZeroPageX, 4, false, "Load accumulator from memory.", lda),
    entry(0xB6, "ldx", Mode::ZeroPageY, 4, false, "Load X register from memory.", ldx),
    entry(0xB7, "smb3", Mode::ZeroPage, 5, true, "Set memory bit 3 (65C02/Rockwell).", smb3),
    entry(0xB8, "clv", Mode::Implied, 2, false, "Clear overflow flag.", clv),
    entry(0xB9, "lda", Mode::AbsoluteY, 4, false, "Load accumulator from memory.", lda),
    entry(0xBA, "tsx", Mode::Implied, 2, false, "Transfer stack pointer to X.", tsx),
    entry(0xBB, "nop", Mode::Implied, 2, false, "Undocumented opcode; treated as a flag-compatible no-op.", undocumented_nop),
    entry(0xBC, "ldy", Mode::AbsoluteX, 4, false, "Load Y register from memory.", ldy),
    entry(0xBD, "lda", Mode::AbsoluteX, 4, false, "Load accumulator from memory.", lda),
    entry(0xBE, "ldx", Mode::AbsoluteY, 4, false, "Load X register from memory.", ldx),
    entry(0xBF, "bbs3", Mode::ZeroPageRelative, 5, true, "Branch if memory bit 3 set (65C02/Rockwell).", bbs3),
    entry(0xC0, "cpy", Mode::Immediate, 2, false, "Compare Y register.", cpy),
    entry(0xC1, "cmp", Mode::IndirectX, 6, false, "Compare accumulator.", cmp),
    entry(0xC2, "nop", Mode::Implied, 2, false, "Undocumented opcode; treated as a flag-compatible no-op.", undocumented_nop),
    entry(0xC3, "nop", Mode::Implied, 2, false, "Undocumented opcode; treated as a flag-compatible no-op.", undocumented_nop),
    entry(0xC4, "cpy", Mode::ZeroPage, 3, false, "Compare Y register.", cpy),
    entry(0xC5, "cmp", Mode::ZeroPage, 3, false, "Compare accumulator.", cmp),
    entry(0xC6, "dec", Mode::ZeroPage, 5, false, "Decrement memory or accumulator.", dec),
    entry(0xC7, "smb4", Mode::ZeroPage, 5, true, "Set memory bit 4 (65C02/Rockwell).", smb4),
    entry(0xC8, "iny", Mode::Implied, 2, false, "Increment Y register.", iny),
    entry(0xC9, "cmp", Mode::Immediate, 2, false, "Compare accumulator.", cmp),
    entry(0xCA, "dex", Mode::Implied, 2, false, "Decrement X register.", dex),
    entry(0xCB, "nop", Mode::Implied, 2, false, "Undocumented opcode; treated as a flag-compatible no-op.", undocumented_nop),
    entry(0xCC, "cpy", Mode::Absolute, 4, false, "Compare Y register.", cpy),
    entry(0xCD, "cmp", Mode::Absolute, 4, false, "Compare accumulator.", cmp),
    entry(0xCE, "dec", Mode::Absolute, 6, false, "Decrement memory or accumulator.", dec),
    entry(0xCF, "bbs4", Mode::ZeroPageRelative, 5, true, "Branch if memory bit 4 set (65C02/Rockwell).", bbs4),
    entry(0xD0, "bne", Mode::Relative, 2, false, "Branch if not equal (Z=0).", bne),
    entry(0xD1, "cmp", Mode::IndirectY, 5, false, "Compare accumulator.", cmp),
    entry(0xD2, "cmp", Mode::IndirectZp, 5, true, "Compare accumulator.", cmp),
    entry(0xD3, "nop", Mode::Implied, 2, false, "Undocumented opcode; treated as a flag-compatible no-op.", undocumented_nop),
    entry(0xD4, "nop", Mode::Implied, 2, false, "Undocumented opcode; treated as a flag-compatible no-op.", undocumented_nop),
    entry(0xD5, "cmp", Mode::ZeroPageX, 4, false, "Compare accumulator.", cmp),
    entry(0xD6, "dec", Mode::ZeroPageX, 6, false, "Decrement memory or accumulator.", dec),
    entry(0xD7, "smb5", Mode::ZeroPage, 5, true, "Set memory bit 5 (65C02/Rockwell).", smb5),
    entry(0xD8, "cld", Mode::Implied, 2, false, "Clear decimal flag.", cld),
    entry(0xD9, "cmp", Mode::AbsoluteY, 4, false, "Compare accumulator.", cmp),
    entry(0xDA, "phx", Mode::Implied, 3, true, "Push X register.", phx),
    entry(0xDB, "nop", Mode::Implied, 2, false, "Undocumented opcode; treated as a flag-compatible no-op.", undocumented_nop),
    entry(0xDC, "nop", Mode::Implied, 2, false, "Undocumented opcode; treated as a flag-compatible no-op.", undocumented_nop),
    entry(0xDD, "cmp", Mode::AbsoluteX, 4, false, "Compare accumulator.", cmp),
    entry(0xDE, "dec", Mode::AbsoluteX, 7, false, "Decrement memory or accumulator.", dec),
    entry(0xDF, "bbs5", Mode::ZeroPageRelative, 5, true, "Branch if memory bit 5 set (65C02/Rockwell).", bbs5),
    entry(0xE0, "cpx", Mode::Immediate, 2, false, "Compare X register.", cpx),
    entry(0xE1, "sbc", Mode::IndirectX, 6, false, "Subtract with carry.", sbc),
    entry(0xE2, "nop", Mode::Implied, 2, false, "Undocumented opcode; treated as a flag-compatible no-op.", undocumented_nop),
    entry(0xE3, "nop", Mode::Implied, 2, false, "Undocumented opcode; treated as a flag-compatible no-op.", undocumented_nop),
    entry(0xE4, "cpx", Mode::ZeroPage, 3, false, "Compare X register.", cpx),
    entry(0xE5, "sbc", Mode::ZeroPage, 3, false, "Subtract with carry.", sbc),
    entry(0xE6, "inc", Mode::ZeroPage, 5, false, "Increment memory or accumulator.", inc),
    entry(0xE7, "smb6", Mode::ZeroPage, 5, true, "Set memory bit 6 (65C02/Rockwell).", smb6),
    entry(0xE8, "inx", Mode::Implied, 2, false, "Increment X register.", inx),
    entry(0xE9, "sbc", Mode::Immediate, 2, false, "Subtract with carry.", sbc),
    entry(0xEA, "nop", Mode::Implied, 2, false, "No operation.", nop),
    entry(0xEB, "nop", Mode::Implied, 2, false, "Undocumented opcode; treated as a flag-compatible no-op.", undocumented_nop),
    entry(0xEC, "cpx", Mode::Absolute, 4, false, "Compare X register.", cpx),
    entry(0xED, "sbc", Mode::Absolute, 4, false, "Subtract with carry.", sbc),
    entry(0xEE, "inc", Mode::Absolute, 6, false, "Increment memory or accumulator.", inc),
    entry(0xEF, "bbs6", Mode::ZeroPageRelative, 5, true, "Branch if memory bit 6 set (65C02/Rockwell).", bbs6),
    entry(0xF0, "beq", Mode::Relative, 2, false, "Branch if equal (Z=1).", beq),
    entry(0xF1, "sbc", Mode::IndirectY, 5, false, "Subtract with carry.", sbc),
    entry(0xF2, "sbc", Mode::IndirectZp, 5, true, "Subtract with carry.", sbc),
    entry(0xF3, "nop", Mode::Implied, 2, false, "Undocumented opcode; treated as a flag-compatible no-op.", undocumented_nop),
    entry(0xF4, "nop", Mode::Implied, 2, false, "Undocumented opcode; treated as a flag-compatible no-op.", undocumented_nop),
    entry(0xF5, "sbc", Mode::ZeroPageX, 4, false, "Subtract with carry.", sbc),
    entry(0xF6, "inc", Mode::ZeroPageX, 6, false, "Increment memory or accumulator.", inc),
    entry(0xF7, "smb7", Mode::ZeroPage, 5, true, "Set memory bit 7 (65C02/Rockwell).", smb7),
    entry(0xF8, "sed", Mode::Implied, 2, false, "Set decimal flag.", sed),
    entry(0xF9, "sbc", Mode::AbsoluteY, 4, false, "Subtract with carry.", sbc),
    entry(0xFA, "plx", Mode::Implied, 4, true, "Pull X register.", plx),
    entry(0xFB, "nop", Mode::Implied, 2, false, "Undocumented opcode; treated as a flag-compatible no-op.", undocumented_nop),
    entry(0xFC, "nop", Mode::Implied, 2, false, "Undocumented opcode; treated as a flag-compatible no-op.", undocumented_nop),
    entry(0xFD, "sbc", Mode::AbsoluteX, 4, false, "Subtract with carry.", sbc),
    entry(0xFE, "inc", Mode::AbsoluteX, 7, false, "Increment memory or accumulator.", inc),
    entry(0xFF, "bbs7", Mode::ZeroPageRelative, 5, true, "Branch if memory bit 7 set (65C02/Rockwell).", bbs7),
];

#[cfg(test)]
mod test {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_opcode_slot_is_present_and_indexed_correctly() {
        for (i, entry) in OPCODE_TABLE.iter().enumerate() {
            assert_eq!(entry.opcode as usize, i);
        }
    }

    #[test]
    fn implemented_slots_have_cycle_counts_in_range_and_real_mnemonics() {
        for entry in OPCODE_TABLE.iter() {
            if entry.handler as usize == undocumented_nop as usize {
                continue;
            }
            assert!(
                (2..=7).contains(&entry.base_cycles),
                "opcode {:#04x} ({}) has base_cycles {} out of [2,7]",
                entry.opcode,
                entry.mnemonic,
                entry.base_cycles
            );
            assert_ne!(entry.mnemonic, "");
        }
    }

    #[test]
    fn undocumented_slots_are_flagged_not_65c02_and_two_cycles() {
        for entry in OPCODE_TABLE.iter() {
            if entry.handler as usize == undocumented_nop as usize {
                assert_eq!(entry.base_cycles, 2);
                assert!(!entry.is_65c02);
            }
        }
    }

    #[test]
    fn mnemonics_are_unique_per_bbrn_smbn_family_member() {
        // Sanity check that the bit-numbered 65C02/Rockwell families
        // (RMBn/SMBn/BBRn/BBSn) were generated with distinct bit indices,
        // not merely repeated copies of the same slot.
        let mut seen = HashSet::new();
        for entry in OPCODE_TABLE.iter() {
            if entry.mnemonic.starts_with("rmb")
                || entry.mnemonic.starts_with("smb")
                || entry.mnemonic.starts_with("bbr")
                || entry.mnemonic.starts_with("bbs")
            {
                assert!(seen.insert(entry.mnemonic), "duplicate {}", entry.mnemonic);
            }
        }
        assert_eq!(seen.len(), 32);
    }
}
