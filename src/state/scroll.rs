use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Page-level scroll lock
///
/// The page is locked while at least one `ScrollGuard` is alive. Guards
/// release themselves on drop, so every acquire is paired with a release
/// even when the owner is torn down mid-interaction.
#[derive(Debug, Clone, Default)]
pub struct PageScroll {
    holds: Arc<AtomicUsize>,
}

impl PageScroll {
    pub fn new() -> Self {
        Self::default()
    }

    /// Disable page scrolling until the returned guard is dropped
    pub fn acquire(&self) -> ScrollGuard {
        let previous = self.holds.fetch_add(1, Ordering::AcqRel);
        if previous == 0 {
            tracing::debug!("page scroll locked");
        }

        ScrollGuard {
            holds: Arc::clone(&self.holds),
        }
    }

    pub fn is_locked(&self) -> bool {
        self.holds.load(Ordering::Acquire) > 0
    }
}

/// Proof that page scrolling is disabled
#[derive(Debug)]
pub struct ScrollGuard {
    holds: Arc<AtomicUsize>,
}

impl Drop for ScrollGuard {
    fn drop(&mut self) {
        let previous = self.holds.fetch_sub(1, Ordering::AcqRel);
        if previous == 1 {
            tracing::debug!("page scroll restored");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_releases_on_drop() {
        let scroll = PageScroll::new();
        assert!(!scroll.is_locked());

        let guard = scroll.acquire();
        assert!(scroll.is_locked());

        drop(guard);
        assert!(!scroll.is_locked());
    }

    #[test]
    fn test_nested_guards() {
        let scroll = PageScroll::new();
        let first = scroll.acquire();
        let second = scroll.clone().acquire();

        drop(first);
        assert!(scroll.is_locked());

        drop(second);
        assert!(!scroll.is_locked());
    }
}
