use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

use tracing::{debug, info, warn};

use super::ParameterBinding;
use crate::error::RouteError;
use crate::handler::{HandlerRef, HandlerRequest, HandlerResponse};
use crate::method::RequestMethod;
use crate::middleware::{MiddlewareGroup, MiddlewareRef, Next};

/// Name carried by a route until [`RouteDescriptor::with_name`] is called
pub const ANONYMOUS_ROUTE_NAME: &str = "<anonymous>";

/// One registered endpoint during the registration phase
///
/// Holds the path pattern, accepted methods, handler, bound parameters and
/// attached middleware. Builder methods mutate in place and hand back
/// `&mut Self` so calls chain:
///
/// ```rust
/// use brrtrouter_route::handler::{HandlerRef, HandlerRequest, HandlerResponse};
/// use brrtrouter_route::{RequestMethod, RouteDescriptor, RouteError};
/// use std::sync::Arc;
///
/// # fn main() -> Result<(), RouteError> {
/// let show: HandlerRef = Arc::new(|_req: &HandlerRequest, _res: &mut HandlerResponse| {});
/// let mut route = RouteDescriptor::new("/users/:id", [RequestMethod::Get], show);
/// route.with_parameter("id", None)?.with_name("users.show");
///
/// assert_eq!(route.methods(), &[RequestMethod::Get, RequestMethod::Head]);
/// assert_eq!(route.name(), "users.show");
/// # Ok(())
/// # }
/// ```
///
/// Clone before mutating if an independent copy is needed; handler and
/// middleware references are shared between clones. Call
/// [`freeze`](Self::freeze) once registration is done to get a read-only
/// [`Route`] for dispatch.
#[derive(Clone)]
pub struct RouteDescriptor {
    path: String,
    methods: Vec<RequestMethod>,
    action: HandlerRef,
    is_fallback: bool,
    name: String,
    middleware: Vec<MiddlewareRef>,
    middleware_groups: Vec<MiddlewareGroup>,
    parameters: Vec<ParameterBinding>,
}

impl RouteDescriptor {
    /// Create a descriptor for `path` answering `methods` with `action`.
    ///
    /// The method list is normalized once here: repeats are dropped and
    /// `HEAD` is appended when `GET` is present without it.
    pub fn new<I>(path: impl Into<String>, methods: I, action: HandlerRef) -> Self
    where
        I: IntoIterator<Item = RequestMethod>,
    {
        let path = path.into();
        let (methods, head_inferred) = RequestMethod::normalize(methods);
        debug!(
            path = %path,
            methods = %RequestMethod::join_tokens(&methods),
            head_inferred,
            "Route descriptor created"
        );
        Self {
            path,
            methods,
            action,
            is_fallback: false,
            name: ANONYMOUS_ROUTE_NAME.to_string(),
            middleware: Vec::new(),
            middleware_groups: Vec::new(),
            parameters: Vec::new(),
        }
    }

    /// Path pattern, opaque to this crate
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Accepted methods in registration order
    #[must_use]
    pub fn methods(&self) -> &[RequestMethod] {
        &self.methods
    }

    /// Route name, `<anonymous>` until [`with_name`](Self::with_name) is called
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether this route serves requests no other route matched
    #[must_use]
    pub fn is_fallback(&self) -> bool {
        self.is_fallback
    }

    /// Bound parameters in the order they were added
    #[must_use]
    pub fn parameters(&self) -> &[ParameterBinding] {
        &self.parameters
    }

    /// Look up a binding by exact name
    #[must_use]
    pub fn parameter(&self, name: &str) -> Option<&ParameterBinding> {
        self.parameters.iter().find(|p| p.name == name)
    }

    /// Middleware attached directly to this route
    #[must_use]
    pub fn middleware(&self) -> &[MiddlewareRef] {
        &self.middleware
    }

    /// Attached middleware groups in attachment order
    #[must_use]
    pub fn middleware_groups(&self) -> &[MiddlewareGroup] {
        &self.middleware_groups
    }

    /// First group attached under `name`
    #[must_use]
    pub fn middleware_group(&self, name: &str) -> Option<&MiddlewareGroup> {
        self.middleware_groups.iter().find(|g| g.name() == name)
    }

    /// True when at least one parameter is bound.
    #[must_use]
    pub fn has_parameters(&self) -> bool {
        !self.parameters.is_empty()
    }

    /// True when a binding named exactly `name` exists
    #[must_use]
    pub fn has_parameter(&self, name: &str) -> bool {
        self.parameters.iter().any(|p| p.name == name)
    }

    /// Bind a parameter.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::DuplicateParameter`] if `name` is already bound.
    /// The descriptor is left untouched in that case.
    pub fn with_parameter(
        &mut self,
        name: impl Into<String>,
        value: Option<&str>,
    ) -> Result<&mut Self, RouteError> {
        let name = name.into();
        if self.has_parameter(&name) {
            warn!(
                path = %self.path,
                route = %self.name,
                parameter = %name,
                "Rejected duplicate route parameter"
            );
            return Err(RouteError::DuplicateParameter { name });
        }

        debug!(path = %self.path, parameter = %name, "Route parameter bound");
        self.parameters
            .push(ParameterBinding::new(name, value.map(str::to_string)));
        Ok(self)
    }

    /// Set the route name, replacing any previous one
    pub fn with_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = name.into();
        debug!(path = %self.path, route = %self.name, "Route named");
        self
    }

    /// Mark this route as the fallback, selected when nothing else matches
    pub fn with_fallback(&mut self) -> &mut Self {
        self.is_fallback = true;
        debug!(path = %self.path, "Route marked as fallback");
        self
    }

    /// Attach a middleware directly to this route
    pub fn with_middleware(&mut self, middleware: MiddlewareRef) -> &mut Self {
        self.middleware.push(middleware);
        debug!(
            path = %self.path,
            middleware_count = self.middleware.len(),
            "Route middleware attached"
        );
        self
    }

    /// Attach a named middleware group
    ///
    /// Group names are not required to be unique.
    pub fn with_middleware_group(&mut self, group: MiddlewareGroup) -> &mut Self {
        debug!(
            path = %self.path,
            group = %group.name(),
            group_size = group.len(),
            "Route middleware group attached"
        );
        self.middleware_groups.push(group);
        self
    }

    /// The route's handler
    #[must_use]
    pub fn get_handler(&self) -> &HandlerRef {
        &self.action
    }

    /// True when a middleware group named `name` is attached
    #[must_use]
    pub fn has_middleware_group(&self, name: &str) -> bool {
        self.middleware_groups.iter().any(|g| g.name() == name)
    }

    /// Finish registration and publish a read-only, shareable route.
    #[must_use]
    pub fn freeze(self) -> Route {
        let chain: Arc<[MiddlewareRef]> = self
            .middleware_groups
            .iter()
            .flat_map(|g| g.handlers().iter().map(Arc::clone))
            .chain(self.middleware.iter().map(Arc::clone))
            .collect();

        info!(
            route = %self.name,
            path = %self.path,
            methods = %RequestMethod::join_tokens(&self.methods),
            fallback = self.is_fallback,
            chain_len = chain.len(),
            "Route registered"
        );

        Route {
            descriptor: Arc::new(self),
            chain,
        }
    }
}

impl fmt::Debug for RouteDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let groups: Vec<&str> = self.middleware_groups.iter().map(|g| g.name()).collect();
        f.debug_struct("RouteDescriptor")
            .field("path", &self.path)
            .field("methods", &self.methods)
            .field("name", &self.name)
            .field("is_fallback", &self.is_fallback)
            .field("parameters", &self.parameters)
            .field("middleware", &self.middleware.len())
            .field("middleware_groups", &groups)
            .finish()
    }
}

/// A frozen route, shared read-only with the dispatcher
///
/// Cheap to clone and safe to hand to request threads. Dereferences to
/// [`RouteDescriptor`] for reads; the builder methods need `&mut` and are not
/// reachable through it.
#[derive(Clone)]
pub struct Route {
    descriptor: Arc<RouteDescriptor>,
    chain: Arc<[MiddlewareRef]>,
}

impl Route {
    /// Run the middleware chain and then the handler for one request
    pub fn handle(&self, req: &HandlerRequest, res: &mut HandlerResponse) {
        Next::new(&self.chain, &self.descriptor).run(req, res);
    }

    /// Flattened chain: group handlers in group order, then route middleware
    #[must_use]
    pub fn chain(&self) -> &[MiddlewareRef] {
        &self.chain
    }

    /// Number of middleware ahead of the handler
    #[must_use]
    pub fn chain_len(&self) -> usize {
        self.chain.len()
    }

    /// Copy the descriptor back out for further registration work
    #[must_use]
    pub fn to_descriptor(&self) -> RouteDescriptor {
        RouteDescriptor::clone(&self.descriptor)
    }
}

impl Deref for Route {
    type Target = RouteDescriptor;

    fn deref(&self) -> &Self::Target {
        &self.descriptor
    }
}

impl fmt::Debug for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route")
            .field("descriptor", &*self.descriptor)
            .field("chain_len", &self.chain.len())
            .finish()
    }
}
