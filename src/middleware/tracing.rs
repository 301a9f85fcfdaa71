use std::time::Instant;

use tracing::{debug, field, info_span};

use super::{Middleware, Next};
use crate::handler::{HandlerRequest, HandlerResponse};

/// Runs the rest of the chain inside a `route` span.
///
/// The span carries the route name and path pattern alongside the request
/// method and path; status and latency are recorded once the handler returns.
pub struct TracingMiddleware;

impl Middleware for TracingMiddleware {
    fn handle(&self, req: &HandlerRequest, res: &mut HandlerResponse, next: Next<'_>) {
        let route = next.route();
        let span = info_span!(
            "route",
            route = %route.name(),
            pattern = %route.path(),
            method = %req.method,
            path = %req.path,
            status = field::Empty,
            latency_us = field::Empty,
        );
        let _entered = span.enter();

        let start = Instant::now();
        next.run(req, res);
        let latency_us = u64::try_from(start.elapsed().as_micros()).unwrap_or(u64::MAX);

        span.record("status", res.status);
        span.record("latency_us", latency_us);
        debug!(status = res.status, latency_us, "Route handled");
    }
}
