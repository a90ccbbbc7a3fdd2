use std::cell::Cell;
use std::rc::Rc;

#[derive(Debug, Default)]
struct Suspensions {
    in_flight: Cell<usize>,
}

/// Decides whether a scroll event came from the user ("real" scroll) or from one of
/// our own animations. Every animation holds a [`SuspendGuard`]; real-scroll mode is on
/// exactly when no guard is alive, so overlapping animations compose and a dropped
/// or interrupted animation can never leave classification switched off.
#[derive(Clone, Debug, Default)]
pub struct ScrollCoordinator {
    suspensions: Rc<Suspensions>,
}

impl PartialEq for ScrollCoordinator {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.suspensions, &other.suspensions)
    }
}

impl ScrollCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_real_scroll(&self) -> bool {
        self.suspensions.in_flight.get() == 0
    }

    /// Suspends classification until the returned guard is dropped.
    #[must_use = "classification resumes as soon as the guard is dropped"]
    pub fn suspend(&self) -> SuspendGuard {
        let in_flight = &self.suspensions.in_flight;
        in_flight.set(in_flight.get() + 1);
        SuspendGuard {
            suspensions: self.suspensions.clone(),
        }
    }
}

#[derive(Debug)]
pub struct SuspendGuard {
    suspensions: Rc<Suspensions>,
}

impl Drop for SuspendGuard {
    fn drop(&mut self) {
        let in_flight = &self.suspensions.in_flight;
        in_flight.set(in_flight.get().saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn starts_in_real_scroll_mode() {
        assert!(ScrollCoordinator::new().is_real_scroll());
    }

    #[test]
    fn guard_suspends_until_dropped() {
        let coordinator = ScrollCoordinator::new();
        let guard = coordinator.suspend();
        assert!(!coordinator.is_real_scroll());
        drop(guard);
        assert!(coordinator.is_real_scroll());
    }

    #[test]
    fn overlapping_animations_resume_after_the_last_one() {
        let coordinator = ScrollCoordinator::new();
        let first = coordinator.suspend();
        let second = coordinator.clone().suspend();
        drop(first);
        assert!(!coordinator.is_real_scroll());
        drop(second);
        assert!(coordinator.is_real_scroll());
    }

    #[test]
    fn unwinding_releases_the_guard() {
        let coordinator = ScrollCoordinator::new();
        let inner = coordinator.clone();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(move || {
            let _guard = inner.suspend();
            panic!("animation aborted");
        }));
        assert!(result.is_err());
        assert!(coordinator.is_real_scroll());
    }

    proptest! {
        #[test]
        fn any_click_sequence_ends_in_real_scroll(ops in prop::collection::vec(any::<(bool, usize)>(), 0..40)) {
            let coordinator = ScrollCoordinator::new();
            let mut guards = Vec::new();
            for (start, pick) in ops {
                if start || guards.is_empty() {
                    guards.push(coordinator.suspend());
                } else {
                    guards.remove(pick % guards.len());
                }
                prop_assert_eq!(coordinator.is_real_scroll(), guards.is_empty());
            }
            guards.clear();
            prop_assert!(coordinator.is_real_scroll());
        }
    }
}
