//! Error types for the boundary APIs that can actually fail.
//!
//! `Cpu::execute` never returns a `Result` (see `StepOutcome` in `cpu.rs`);
//! this enum exists only for the loader, which has one real failure mode.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("program of {size} bytes at base {base:#06x} overflows the 64KiB address space")]
    LoadOverflow { base: u16, size: usize },
}
