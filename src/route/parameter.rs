use serde::{Deserialize, Serialize};

/// A named path parameter bound on a route, optionally carrying a value.
///
/// Names are unique within one descriptor; `RouteDescriptor::with_parameter`
/// enforces it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParameterBinding {
    /// Parameter name (e.g. `id` for `/users/:id`)
    pub name: String,
    /// Bound value, `None` when the binding is only a placeholder
    pub value: Option<String>,
}

impl ParameterBinding {
    /// Bind `name`, optionally to a fixed `value`
    #[must_use]
    pub fn new(name: impl Into<String>, value: Option<String>) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    /// The bound value, if any
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}
