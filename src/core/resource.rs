//! Resource vectors: demand descriptors, one-shot leases, and the pool that
//! serves them.
//!
//! A pool holds a fixed-length vector of available counts. Requests are
//! granted component-wise under a mutex; a grant hands back a
//! [`ResourceLease`] that restores the counts exactly once, on
//! [`release`](ResourceLease::release) or on drop. The pool is the only
//! thread-safe piece of the library and may be shared across independent
//! schedulers.

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::trace;

/// An immutable demand descriptor: how much of each pool component a task
/// needs to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRequest {
    amounts: Vec<u32>,
}

impl ResourceRequest {
    /// Build a request for the given component counts.
    #[must_use]
    pub fn new(amounts: Vec<u32>) -> Self {
        Self { amounts }
    }

    /// Requested count per component.
    #[must_use]
    pub fn amounts(&self) -> &[u32] {
        &self.amounts
    }
}

/// A granted portion of a pool's capacity.
///
/// The lease conceptually owns its share of the pool until released. Release
/// is one-shot: the first call restores the pool and returns `true`, every
/// later call returns `false`. Dropping an unreleased lease releases it.
#[derive(Debug)]
pub struct ResourceLease {
    amounts: Vec<u32>,
    pool: Option<Arc<ResourceVectorPool>>,
}

impl ResourceLease {
    /// Granted count per component.
    #[must_use]
    pub fn amounts(&self) -> &[u32] {
        &self.amounts
    }

    /// Return the leased capacity to the issuing pool.
    ///
    /// Returns `true` on the first call only; the lease is inert afterwards.
    pub fn release(&mut self) -> bool {
        match self.pool.take() {
            Some(pool) => {
                pool.restore(&self.amounts);
                true
            }
            None => false,
        }
    }
}

impl Drop for ResourceLease {
    fn drop(&mut self) {
        self.release();
    }
}

/// A mutable vector of available resource counts served under a mutex.
///
/// Requests are admitted in whatever order the mutex grants them; the pool
/// itself provides no fairness. Callers that need fair admission layer a
/// partitioned scheduler above it.
#[derive(Debug)]
pub struct ResourceVectorPool {
    available: Mutex<Vec<u32>>,
}

impl ResourceVectorPool {
    /// Create a pool with the given capacity vector.
    #[must_use]
    pub fn new(capacity: Vec<u32>) -> Arc<Self> {
        Arc::new(Self {
            available: Mutex::new(capacity),
        })
    }

    /// Try to satisfy `request` out of the available counts.
    ///
    /// A request whose length differs from the pool's, or with any component
    /// exceeding what is available, is denied with `None` and leaves the
    /// pool untouched. On a grant every component is decremented and the
    /// returned lease carries a copy of the request vector.
    pub fn request(self: &Arc<Self>, request: &ResourceRequest) -> Option<ResourceLease> {
        let mut available = self.available.lock();
        if request.amounts.len() != available.len() {
            trace!(
                requested = request.amounts.len(),
                pooled = available.len(),
                "resource request denied: vector length mismatch"
            );
            return None;
        }
        if request
            .amounts
            .iter()
            .zip(available.iter())
            .any(|(want, have)| want > have)
        {
            trace!("resource request denied: insufficient capacity");
            return None;
        }
        for (have, want) in available.iter_mut().zip(request.amounts.iter()) {
            *have -= want;
        }
        Some(ResourceLease {
            amounts: request.amounts.clone(),
            pool: Some(Arc::clone(self)),
        })
    }

    /// Snapshot of the currently available counts.
    #[must_use]
    pub fn available(&self) -> Vec<u32> {
        self.available.lock().clone()
    }

    fn restore(&self, amounts: &[u32]) {
        let mut available = self.available.lock();
        debug_assert_eq!(available.len(), amounts.len());
        for (have, returned) in available.iter_mut().zip(amounts.iter()) {
            *have += returned;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grant_decrements_and_release_restores() {
        let pool = ResourceVectorPool::new(vec![1, 2]);
        let mut lease = pool.request(&ResourceRequest::new(vec![1, 0])).unwrap();
        assert_eq!(lease.amounts(), &[1, 0]);
        assert_eq!(pool.available(), vec![0, 2]);

        assert!(lease.release());
        assert_eq!(pool.available(), vec![1, 2]);

        // second release is inert
        assert!(!lease.release());
        assert_eq!(pool.available(), vec![1, 2]);
    }

    #[test]
    fn zero_request_is_granted_without_effect() {
        let pool = ResourceVectorPool::new(vec![1, 2]);
        let lease = pool.request(&ResourceRequest::new(vec![0, 0]));
        assert!(lease.is_some());
        assert_eq!(pool.available(), vec![1, 2]);
    }

    #[test]
    fn oversized_and_mismatched_requests_are_denied() {
        let pool = ResourceVectorPool::new(vec![1, 2]);
        assert!(pool.request(&ResourceRequest::new(vec![2, 0])).is_none());
        assert!(pool.request(&ResourceRequest::new(vec![1])).is_none());
        assert_eq!(pool.available(), vec![1, 2]);
    }

    #[test]
    fn dropping_a_lease_releases_it() {
        let pool = ResourceVectorPool::new(vec![3]);
        {
            let _lease = pool.request(&ResourceRequest::new(vec![2])).unwrap();
            assert_eq!(pool.available(), vec![1]);
        }
        assert_eq!(pool.available(), vec![3]);
    }
}
