//! # Middleware Module
//!
//! Middleware wraps a route's handler. Each one receives the request, the
//! response being built and a typed [`Next`] continuation; running `next`
//! passes control to the following middleware and, at the end of the chain,
//! to the handler.
//!
//! Middleware reach a route two ways: attached directly with
//! `RouteDescriptor::with_middleware`, or bundled in a named
//! [`MiddlewareGroup`] attached with `RouteDescriptor::with_middleware_group`.
//! When a route is frozen the chain is flattened as every group's handlers in
//! group order followed by the route's own middleware.

mod core;
mod group;
mod metrics;
mod tracing;

pub use self::core::{Middleware, MiddlewareRef, Next};
pub use group::MiddlewareGroup;
pub use metrics::MetricsMiddleware;
pub use self::tracing::TracingMiddleware;
