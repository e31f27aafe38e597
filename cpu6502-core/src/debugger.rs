//! Optional debugger attachment: breakpoints, watchpoints, and append-only
//! instruction/memory traces. The CPU calls into this when one is present;
//! nothing here drives execution on its own.

use std::collections::HashSet;

use crate::bus::SharedBus;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MemoryEvent {
    pub address: u16,
    pub value: u8,
    pub is_write: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TraceEvent {
    pub address: u16,
    pub opcode: u8,
}

/// Snapshot of registers and flags, taken without moving `PC`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct CpuState {
    pub pc: u16,
    pub sp: u8,
    pub a: u8,
    pub x: u8,
    pub y: u8,
    pub c: bool,
    pub z: bool,
    pub i: bool,
    pub d: bool,
    pub b: bool,
    pub v: bool,
    pub n: bool,
}

/// Owned by `Cpu` rather than holding raw back-pointers to it: the
/// original's `attach(CPU*, Mem*)` becomes a cloned `SharedBus` handle for
/// the memory-inspection methods, and `inspect_cpu` lives on `Cpu` itself
/// since it already has direct access to its own registers.
pub struct Debugger {
    bus: SharedBus,
    breakpoints: HashSet<u16>,
    watchpoints: HashSet<u16>,
    memory_events: Vec<MemoryEvent>,
    trace_events: Vec<TraceEvent>,
    last_break: u16,
    hit: bool,
}

impl Debugger {
    pub fn attach(bus: SharedBus) -> Self {
        Debugger {
            bus,
            breakpoints: HashSet::new(),
            watchpoints: HashSet::new(),
            memory_events: Vec::new(),
            trace_events: Vec::new(),
            last_break: 0,
            hit: false,
        }
    }

    pub fn add_breakpoint(&mut self, addr: u16) {
        self.breakpoints.insert(addr);
    }

    pub fn remove_breakpoint(&mut self, addr: u16) {
        self.breakpoints.remove(&addr);
    }

    pub fn has_breakpoint(&self, addr: u16) -> bool {
        self.breakpoints.contains(&addr)
    }

    pub fn clear_breakpoints(&mut self) {
        self.breakpoints.clear();
    }

    pub fn add_watchpoint(&mut self, addr: u16) {
        self.watchpoints.insert(addr);
    }

    pub fn remove_watchpoint(&mut self, addr: u16) {
        self.watchpoints.remove(&addr);
    }

    pub fn has_watchpoint(&self, addr: u16) -> bool {
        self.watchpoints.contains(&addr)
    }

    pub fn clear_watchpoints(&mut self) {
        self.watchpoints.clear();
    }

    /// Pure query consulted by the CPU loop before fetch.
    pub fn should_break(&self, pc: u16) -> bool {
        self.has_breakpoint(pc)
    }

    pub fn notify_breakpoint(&mut self, pc: u16) {
        self.last_break = pc;
        self.hit = true;
    }

    pub fn trace_instruction(&mut self, pc: u16, opcode: u8) {
        self.trace_events.push(TraceEvent { address: pc, opcode });
    }

    /// Called for every byte-level read/write that goes through the
    /// fetch/read/write/store helpers. A watchpoint hit also sets the
    /// sticky `hit` flag, same as the address being a breakpoint.
    pub fn notify_memory_access(&mut self, addr: u16, value: u8, is_write: bool) {
        self.memory_events.push(MemoryEvent { address: addr, value, is_write });
        if self.watchpoints.contains(&addr) {
            self.last_break = addr;
            self.hit = true;
        }
    }

    pub fn memory_events(&self) -> &[MemoryEvent] {
        &self.memory_events
    }

    pub fn trace_events(&self) -> &[TraceEvent] {
        &self.trace_events
    }

    pub fn last_break(&self) -> u16 {
        self.last_break
    }

    pub fn hit(&self) -> bool {
        self.hit
    }

    pub fn read_memory(&self, addr: u16) -> u8 {
        self.bus.borrow_mut().read(addr)
    }

    pub fn write_memory(&mut self, addr: u16, value: u8) {
        self.bus.borrow_mut().write(addr, value);
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::bus::Bus;

    #[test]
    fn clear_breakpoints_twice_is_the_same_as_once() {
        let mut debugger = Debugger::attach(Bus::new_shared());
        debugger.add_breakpoint(0x8000);
        debugger.clear_breakpoints();
        debugger.clear_breakpoints();
        assert!(!debugger.has_breakpoint(0x8000));
    }

    #[test]
    fn watchpoint_hit_sets_sticky_flag() {
        let mut debugger = Debugger::attach(Bus::new_shared());
        debugger.add_watchpoint(0x2000);
        assert!(!debugger.hit());
        debugger.notify_memory_access(0x2000, 0x42, true);
        assert!(debugger.hit());
        assert_eq!(debugger.last_break(), 0x2000);
    }

    #[test]
    fn memory_access_outside_watchpoints_does_not_set_hit() {
        let mut debugger = Debugger::attach(Bus::new_shared());
        debugger.notify_memory_access(0x2000, 0x42, true);
        assert!(!debugger.hit());
    }
}
