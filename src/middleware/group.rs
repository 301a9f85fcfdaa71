use std::fmt;

use super::MiddlewareRef;

/// A named, ordered bundle of middleware attached to a route as a unit
/// (e.g. `"auth"`, `"web"`).
#[derive(Clone)]
pub struct MiddlewareGroup {
    name: String,
    handlers: Vec<MiddlewareRef>,
}

impl MiddlewareGroup {
    /// Create an empty group
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            handlers: Vec::new(),
        }
    }

    /// Append a middleware, consuming and returning the group
    #[must_use]
    pub fn with(mut self, middleware: MiddlewareRef) -> Self {
        self.handlers.push(middleware);
        self
    }

    /// Append a middleware in place
    pub fn push(&mut self, middleware: MiddlewareRef) {
        self.handlers.push(middleware);
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Middleware in the order they run
    #[must_use]
    pub fn handlers(&self) -> &[MiddlewareRef] {
        &self.handlers
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl fmt::Debug for MiddlewareGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MiddlewareGroup")
            .field("name", &self.name)
            .field("handlers", &self.handlers.len())
            .finish()
    }
}
