use std::sync::atomic::{AtomicBool, Ordering};

/// Holds the in-flight flag of a toggle. Clears it when dropped, whatever way
/// the call ends.
pub(super) struct PendingGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> PendingGuard<'a> {
    /// Take the flag, or `None` if another call holds it.
    pub(super) fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self { flag })
    }

    pub(super) fn is_held(flag: &AtomicBool) -> bool {
        flag.load(Ordering::Acquire)
    }
}

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_acquire_is_exclusive() {
        let flag = AtomicBool::new(false);

        let guard = PendingGuard::acquire(&flag);
        assert!(guard.is_some());
        assert!(PendingGuard::is_held(&flag));
        assert!(PendingGuard::acquire(&flag).is_none());

        drop(guard);
        assert!(!PendingGuard::is_held(&flag));
        assert!(PendingGuard::acquire(&flag).is_some());
    }
}
