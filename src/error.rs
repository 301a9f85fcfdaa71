/// Route registration error
///
/// Returned by [`RouteDescriptor::with_parameter`](crate::route::RouteDescriptor::with_parameter)
/// and propagated unchanged to whoever is driving the builder chain. Registration
/// of the affected route should stop; the descriptor itself is left exactly as it
/// was before the failing call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    /// A binding with this name is already present on the descriptor
    #[error("Parameter {name} already exists")]
    DuplicateParameter {
        /// The offending parameter name
        name: String,
    },
}
