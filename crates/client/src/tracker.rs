use std::sync::atomic::{AtomicU64, Ordering};

/// Monotonic tag for an issued request.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(u64);

impl RequestId {
    pub fn get(self) -> u64 {
        self.0
    }
}

/// Hands out request ids and remembers the latest one.
///
/// A response is applied only if its id is still current; anything older
/// was overtaken by a newer request and must be discarded.
#[derive(Debug, Default)]
pub struct RequestTracker {
    latest: AtomicU64,
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&self) -> RequestId {
        RequestId(self.latest.fetch_add(1, Ordering::AcqRel) + 1)
    }

    pub fn is_current(&self, id: RequestId) -> bool {
        self.latest.load(Ordering::Acquire) == id.0
    }

    pub fn latest(&self) -> Option<RequestId> {
        match self.latest.load(Ordering::Acquire) {
            0 => None,
            n => Some(RequestId(n)),
        }
    }
}

/// A value tagged with the request that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct Tracked<T> {
    pub request: RequestId,
    pub value: T,
}

impl<T> Tracked<T> {
    /// `Some(value)` only if no newer request was issued since.
    pub fn accept(self, tracker: &RequestTracker) -> Option<T> {
        if tracker.is_current(self.request) {
            Some(self.value)
        } else {
            tracing::debug!(request = self.request.0, "discarding stale response");
            None
        }
    }
}
