//! Interrupt source aggregation: IRQ/NMI lines are polled by the CPU loop
//! at instruction boundaries, never pushed into it.

use std::cell::RefCell;
use std::rc::Rc;

/// Contract a peripheral implements to assert IRQ/NMI. Sources never push
/// state into the CPU; they are polled, and cleared only once the CPU has
/// serviced the line.
pub trait InterruptSource {
    fn has_irq(&self) -> bool;
    fn has_nmi(&self) -> bool;
    fn clear_irq(&mut self);
    fn clear_nmi(&mut self);
}

/// Aggregates every registered `InterruptSource`. Independent from the
/// bus's device registry: a device that is both an `IODevice` and an
/// `InterruptSource` registers once per role, and dropping it from one
/// list does not remove it from the other.
pub struct InterruptController {
    sources: Vec<Rc<RefCell<dyn InterruptSource>>>,
}

impl InterruptController {
    pub fn new() -> Self {
        InterruptController { sources: Vec::new() }
    }

    pub fn register_source(&mut self, source: Rc<RefCell<dyn InterruptSource>>) {
        self.sources.push(source);
    }

    pub fn unregister_source(&mut self, source: &Rc<RefCell<dyn InterruptSource>>) {
        let target = Rc::as_ptr(source) as *const ();
        self.sources
            .retain(|s| Rc::as_ptr(s) as *const () != target);
    }

    pub fn has_irq(&self) -> bool {
        self.sources.iter().any(|s| s.borrow().has_irq())
    }

    pub fn has_nmi(&self) -> bool {
        self.sources.iter().any(|s| s.borrow().has_nmi())
    }

    /// Clears `IRQ` on every source currently asserting it. A no-op when
    /// no IRQ is pending.
    pub fn acknowledge_irq(&mut self) {
        for source in &self.sources {
            if source.borrow().has_irq() {
                source.borrow_mut().clear_irq();
            }
        }
    }

    pub fn acknowledge_nmi(&mut self) {
        for source in &self.sources {
            if source.borrow().has_nmi() {
                source.borrow_mut().clear_nmi();
            }
        }
    }

    pub fn clear_all(&mut self) {
        self.acknowledge_irq();
        self.acknowledge_nmi();
    }

    pub fn source_count(&self) -> usize {
        self.sources.len()
    }
}

impl Default for InterruptController {
    fn default() -> Self {
        InterruptController::new()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    struct Latch {
        irq: bool,
        nmi: bool,
    }

    impl InterruptSource for Latch {
        fn has_irq(&self) -> bool {
            self.irq
        }
        fn has_nmi(&self) -> bool {
            self.nmi
        }
        fn clear_irq(&mut self) {
            self.irq = false;
        }
        fn clear_nmi(&mut self) {
            self.nmi = false;
        }
    }

    #[test]
    fn has_irq_is_an_or_across_sources() {
        let mut controller = InterruptController::new();
        controller.register_source(Rc::new(RefCell::new(Latch { irq: false, nmi: false })));
        controller.register_source(Rc::new(RefCell::new(Latch { irq: true, nmi: false })));
        assert!(controller.has_irq());
        assert!(!controller.has_nmi());
    }

    #[test]
    fn acknowledge_only_clears_asserting_sources() {
        let mut controller = InterruptController::new();
        let quiet = Rc::new(RefCell::new(Latch { irq: false, nmi: false }));
        let loud = Rc::new(RefCell::new(Latch { irq: true, nmi: false }));
        controller.register_source(quiet.clone());
        controller.register_source(loud.clone());

        controller.acknowledge_irq();

        assert!(!quiet.borrow().irq);
        assert!(!loud.borrow().irq);
    }

    #[test]
    fn acknowledge_irq_with_nothing_pending_is_a_no_op() {
        let mut controller = InterruptController::new();
        controller.register_source(Rc::new(RefCell::new(Latch { irq: false, nmi: false })));
        controller.acknowledge_irq();
        controller.acknowledge_irq();
        assert!(!controller.has_irq());
    }

    #[test]
    fn unregister_removes_by_identity_not_registration_count() {
        let mut controller = InterruptController::new();
        let source = Rc::new(RefCell::new(Latch { irq: true, nmi: false }));
        controller.register_source(source.clone());
        assert_eq!(controller.source_count(), 1);
        controller.unregister_source(&source);
        assert_eq!(controller.source_count(), 0);
    }
}
