use std::sync::Arc;

use crate::handler::{HandlerRequest, HandlerResponse};
use crate::route::RouteDescriptor;

/// Middleware capability: a handler that is also given the rest of the chain.
///
/// Call [`Next::run`] to pass control onward. Returning without running `next`
/// short-circuits the chain, leaving whatever was written to `res` as the
/// final response.
pub trait Middleware: Send + Sync {
    /// Handle `req`, optionally running `next` to continue toward the handler
    fn handle(&self, req: &HandlerRequest, res: &mut HandlerResponse, next: Next<'_>);
}

impl<F> Middleware for F
where
    F: for<'a> Fn(&HandlerRequest, &mut HandlerResponse, Next<'a>) + Send + Sync,
{
    fn handle(&self, req: &HandlerRequest, res: &mut HandlerResponse, next: Next<'_>) {
        self(req, res, next)
    }
}

/// Shared reference to a middleware capability
pub type MiddlewareRef = Arc<dyn Middleware>;

/// Continuation handed to each middleware.
///
/// Holds the part of the chain that has not run yet and the route being
/// served. Running it consumes it, so a continuation fires at most once.
pub struct Next<'a> {
    chain: &'a [MiddlewareRef],
    route: &'a RouteDescriptor,
}

impl<'a> Next<'a> {
    pub(crate) fn new(chain: &'a [MiddlewareRef], route: &'a RouteDescriptor) -> Self {
        Self { chain, route }
    }

    /// Invoke the next middleware, or the route's handler once the chain is exhausted.
    pub fn run(self, req: &HandlerRequest, res: &mut HandlerResponse) {
        match self.chain.split_first() {
            Some((current, rest)) => current.handle(req, res, Next::new(rest, self.route)),
            None => self.route.get_handler().handle(req, res),
        }
    }

    /// The route this chain is serving
    #[must_use]
    pub fn route(&self) -> &'a RouteDescriptor {
        self.route
    }

    /// Number of middleware still ahead of the handler
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.chain.len()
    }
}
