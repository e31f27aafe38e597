//! Host-facing knobs for a `Cpu`. Log verbosity is not here: the core only
//! depends on the `log` facade, and the host picks the subscriber.

#[derive(Clone, Copy, Debug)]
pub struct CpuConfig {
    /// Total cycle budget handed to a single `Cpu::execute` call.
    pub cycle_budget: u32,
    /// Whether the instruction-count guard (`instruction_guard_limit`) is
    /// enforced. Property/fuzz tests that want `execute` to run until the
    /// cycle budget is exhausted, full stop, turn this off.
    pub instruction_guard_enabled: bool,
    /// Instruction count after which `execute` returns `StepOutcome::GuardTripped`
    /// rather than loop forever on a runaway/self-branching program.
    pub instruction_guard_limit: u32,
}

impl Default for CpuConfig {
    fn default() -> Self {
        CpuConfig {
            cycle_budget: u32::MAX,
            instruction_guard_enabled: true,
            instruction_guard_limit: 100_000,
        }
    }
}
