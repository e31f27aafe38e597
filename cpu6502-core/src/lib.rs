//! A cycle-aware MOS 6502 / WDC 65C02 instruction interpreter, a
//! memory-mapped bus, and an interrupt controller. No concrete devices,
//! no GUI, no CLI: this crate is the core a frontend is built around.

pub mod bus;
pub mod config;
pub mod cpu;
pub mod debugger;
pub mod error;
pub mod interrupt;
pub mod loader;
pub mod memory;
pub mod opcodes;

pub use bus::{Bus, IODevice, SharedBus};
pub use config::CpuConfig;
pub use cpu::{Cpu, StatusFlag, StepOutcome};
pub use debugger::{CpuState, Debugger, MemoryEvent, TraceEvent};
pub use error::CoreError;
pub use interrupt::{InterruptController, InterruptSource};
pub use loader::{load_flat, DEFAULT_LOAD_BASE};
pub use memory::{firmware_map, region, InterruptVector, Memory};
pub use opcodes::{InstructionMetadata, Mode, OPCODE_TABLE};
