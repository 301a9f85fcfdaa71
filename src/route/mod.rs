//! # Route Module
//!
//! A route lives in two phases.
//!
//! 1. **Registration**: the registrar owns a [`RouteDescriptor`] exclusively
//!    and configures it through chained builder calls (`with_parameter`,
//!    `with_name`, `with_fallback`, `with_middleware`, `with_middleware_group`).
//! 2. **Dispatch**: [`RouteDescriptor::freeze`] turns it into a [`Route`], an
//!    `Arc`-backed read-only view that request threads share without locking.
//!
//! The only implicit mutation is at construction, where a method list that
//! contains `GET` but not `HEAD` gets `HEAD` appended once. The only failure
//! is binding the same parameter name twice.

mod core;
mod parameter;
#[cfg(test)]
mod tests;

pub use self::core::{Route, RouteDescriptor, ANONYMOUS_ROUTE_NAME};
pub use parameter::ParameterBinding;
