//! Replay guard: remembers accepted claims.
//!
//! Bounded; when full, the oldest claim is forgotten first.

use std::collections::{HashSet, VecDeque};
use std::sync::Mutex;

use f2c_core::ClaimId;

/// Set of recently accepted claim ids.
pub struct ReplayGuard {
    inner: Mutex<ReplayInner>,
}

struct ReplayInner {
    seen: HashSet<ClaimId>,
    order: VecDeque<ClaimId>,
    capacity: usize,
}

impl ReplayGuard {
    /// Create a guard remembering up to `capacity` claims (at least one).
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            inner: Mutex::new(ReplayInner {
                seen: HashSet::with_capacity(capacity),
                order: VecDeque::with_capacity(capacity),
                capacity,
            }),
        }
    }

    /// Record `id`. Returns `false` if it was already recorded.
    pub fn record(&self, id: ClaimId) -> bool {
        let mut inner = match self.inner.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };

        if inner.seen.contains(&id) {
            return false;
        }

        if inner.order.len() >= inner.capacity {
            if let Some(oldest) = inner.order.pop_front() {
                inner.seen.remove(&oldest);
            }
        }
        inner.seen.insert(id);
        inner.order.push_back(id);
        true
    }

    /// Whether `id` is currently remembered.
    pub fn contains(&self, id: &ClaimId) -> bool {
        match self.inner.lock() {
            Ok(guard) => guard.seen.contains(id),
            Err(poisoned) => poisoned.into_inner().seen.contains(id),
        }
    }

    /// Number of claims currently remembered.
    pub fn len(&self) -> usize {
        match self.inner.lock() {
            Ok(guard) => guard.order.len(),
            Err(poisoned) => poisoned.into_inner().order.len(),
        }
    }

    /// Whether no claims are remembered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(n: u8) -> ClaimId {
        ClaimId::from_bytes([n; 32])
    }

    #[test]
    fn test_second_record_rejected() {
        let guard = ReplayGuard::new(8);
        assert!(guard.record(id(1)));
        assert!(!guard.record(id(1)));
        assert!(guard.record(id(2)));
        assert_eq!(guard.len(), 2);
    }

    #[test]
    fn test_oldest_evicted_at_capacity() {
        let guard = ReplayGuard::new(2);
        guard.record(id(1));
        guard.record(id(2));
        guard.record(id(3));

        assert!(!guard.contains(&id(1)));
        assert!(guard.contains(&id(2)));
        assert!(guard.contains(&id(3)));
        assert_eq!(guard.len(), 2);
    }

    #[test]
    fn test_new_guard_is_empty() {
        let guard = ReplayGuard::new(4);
        assert!(guard.is_empty());
        assert_eq!(guard.len(), 0);

        guard.record(id(9));
        assert!(!guard.is_empty());
    }

    #[test]
    fn test_zero_capacity_still_guards_latest() {
        let guard = ReplayGuard::new(0);
        assert!(guard.record(id(1)));
        assert!(!guard.record(id(1)));
    }
}
