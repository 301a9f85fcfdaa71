//! # BRRTRouter Route
//!
//! Route descriptors for an HTTP routing layer. A descriptor is one registered
//! endpoint: its path pattern, the methods it accepts, the handler that serves
//! it, the path parameters bound on it and the middleware wrapped around it.
//!
//! ## Overview
//!
//! - **[`route`]** - [`RouteDescriptor`] builder and the frozen [`Route`] view
//! - **[`method`]** - [`RequestMethod`], the closed set of route verbs
//! - **[`handler`]** - the handler capability and its request/response types
//! - **[`middleware`]** - middleware capability, typed `Next` continuation, groups
//! - **[`logging`]** - `tracing-subscriber` set-up driven by environment variables
//!
//! Path matching, dispatch, the server loop and route-table rendering belong to
//! the router that consumes these descriptors.
//!
//! ## Lifecycle
//!
//! ```mermaid
//! sequenceDiagram
//!     participant Registrar
//!     participant Descriptor as RouteDescriptor
//!     participant Route as Route (frozen)
//!     participant Server
//!
//!     Registrar->>Descriptor: new("/users/:id", [GET], handler)
//!     Descriptor->>Descriptor: normalize methods<br/>(GET implies HEAD)
//!     Registrar->>Descriptor: with_parameter("id", None)?
//!     Registrar->>Descriptor: with_name("users.show")
//!     Registrar->>Descriptor: with_middleware_group(auth)
//!     Registrar->>Route: freeze()
//!     Route->>Route: flatten middleware chain
//!     Server->>Route: handle(req, res)
//!     Route->>Route: middleware... then handler
//! ```
//!
//! ## Example
//!
//! ```rust
//! use brrtrouter_route::handler::{HandlerRef, HandlerRequest, HandlerResponse};
//! use brrtrouter_route::middleware::{MiddlewareGroup, TracingMiddleware};
//! use brrtrouter_route::{RequestMethod, RouteDescriptor, RouteError};
//! use std::sync::Arc;
//!
//! # fn main() -> Result<(), RouteError> {
//! let show: HandlerRef = Arc::new(|req: &HandlerRequest, res: &mut HandlerResponse| {
//!     res.body = serde_json::json!({ "id": req.get_path_param("id") });
//! });
//!
//! let mut descriptor = RouteDescriptor::new("/users/:id", [RequestMethod::Get], show);
//! descriptor
//!     .with_parameter("id", None)?
//!     .with_name("users.show")
//!     .with_middleware_group(MiddlewareGroup::new("observe").with(Arc::new(TracingMiddleware)));
//!
//! let route = descriptor.freeze();
//! assert_eq!(route.methods(), &[RequestMethod::Get, RequestMethod::Head]);
//!
//! let mut req = HandlerRequest::new(http::Method::GET, "/users/42");
//! req.path_params.push((Arc::from("id"), "42".to_string()));
//! let mut res = HandlerResponse::default();
//! route.handle(&req, &mut res);
//! assert_eq!(res.body["id"], "42");
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod handler;
pub mod logging;
pub mod method;
pub mod middleware;
pub mod route;

pub use error::RouteError;
pub use method::{ParseMethodError, RequestMethod};
pub use route::{ParameterBinding, Route, RouteDescriptor, ANONYMOUS_ROUTE_NAME};
