use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::time::{Duration, Instant};

use super::{Middleware, Next};
use crate::handler::{HandlerRequest, HandlerResponse};

/// Counts requests flowing through a route chain.
///
/// Counters are atomics so one instance can sit in a shared middleware group
/// and be read from any thread.
#[derive(Default)]
pub struct MetricsMiddleware {
    request_count: AtomicUsize,
    error_count: AtomicUsize,
    total_latency_ns: AtomicU64,
}

impl MetricsMiddleware {
    /// Create a new metrics middleware with all counters initialized to zero
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of requests that reached this middleware
    #[must_use]
    pub fn request_count(&self) -> usize {
        self.request_count.load(Ordering::Relaxed)
    }

    /// Requests that finished with a 5xx status
    #[must_use]
    pub fn error_count(&self) -> usize {
        self.error_count.load(Ordering::Relaxed)
    }

    /// Mean time spent in the remainder of the chain
    #[must_use]
    pub fn average_latency(&self) -> Duration {
        let count = u64::try_from(self.request_count.load(Ordering::Relaxed)).unwrap_or(u64::MAX);
        if count == 0 {
            return Duration::ZERO;
        }
        Duration::from_nanos(self.total_latency_ns.load(Ordering::Relaxed) / count)
    }
}

impl Middleware for MetricsMiddleware {
    fn handle(&self, req: &HandlerRequest, res: &mut HandlerResponse, next: Next<'_>) {
        let start = Instant::now();
        next.run(req, res);
        let elapsed = u64::try_from(start.elapsed().as_nanos()).unwrap_or(u64::MAX);

        self.request_count.fetch_add(1, Ordering::Relaxed);
        self.total_latency_ns.fetch_add(elapsed, Ordering::Relaxed);
        if res.status >= 500 {
            self.error_count.fetch_add(1, Ordering::Relaxed);
        }
    }
}
