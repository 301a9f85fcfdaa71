use std::sync::Arc;

use super::{RouteDescriptor, ANONYMOUS_ROUTE_NAME};
use crate::error::RouteError;
use crate::handler::{HandlerRef, HandlerRequest, HandlerResponse};
use crate::method::RequestMethod;
use crate::middleware::MiddlewareGroup;

fn noop_handler() -> HandlerRef {
    Arc::new(|_req: &HandlerRequest, _res: &mut HandlerResponse| {})
}

fn descriptor(methods: &[RequestMethod]) -> RouteDescriptor {
    RouteDescriptor::new("/users/:id", methods.iter().copied(), noop_handler())
}

#[test]
fn test_get_implies_head() {
    let route = descriptor(&[RequestMethod::Get]);
    assert_eq!(route.methods(), &[RequestMethod::Get, RequestMethod::Head]);
}

#[test]
fn test_existing_head_not_duplicated() {
    let route = descriptor(&[RequestMethod::Get, RequestMethod::Head]);
    let heads = route
        .methods()
        .iter()
        .filter(|m| **m == RequestMethod::Head)
        .count();
    assert_eq!(heads, 1);
}

#[test]
fn test_head_not_added_without_get() {
    let route = descriptor(&[RequestMethod::Post, RequestMethod::Put]);
    assert_eq!(route.methods(), &[RequestMethod::Post, RequestMethod::Put]);
}

#[test]
fn test_defaults() {
    let route = descriptor(&[RequestMethod::Post]);
    assert_eq!(route.path(), "/users/:id");
    assert_eq!(route.name(), ANONYMOUS_ROUTE_NAME);
    assert!(!route.is_fallback());
    assert!(route.parameters().is_empty());
    assert!(route.middleware().is_empty());
    assert!(route.middleware_groups().is_empty());
}

#[test]
fn test_has_parameters_reports_non_empty() {
    let mut route = descriptor(&[RequestMethod::Get]);
    assert!(!route.has_parameters());
    route.with_parameter("id", None).unwrap();
    assert!(route.has_parameters());
}

#[test]
fn test_with_parameter_keeps_call_order() {
    let mut route = descriptor(&[RequestMethod::Get]);
    route
        .with_parameter("org", Some("acme"))
        .unwrap()
        .with_parameter("team", None)
        .unwrap()
        .with_parameter("id", Some("7"))
        .unwrap();

    let names: Vec<&str> = route.parameters().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["org", "team", "id"]);
    assert!(route.has_parameter("org"));
    assert!(route.has_parameter("team"));
    assert!(route.has_parameter("id"));
    assert!(!route.has_parameter("Id"));
    assert_eq!(route.parameter("org").and_then(|p| p.value()), Some("acme"));
    assert_eq!(route.parameter("team").and_then(|p| p.value()), None);
}

#[test]
fn test_duplicate_parameter_rejected_and_state_unchanged() {
    let mut route = descriptor(&[RequestMethod::Get]);
    route.with_parameter("id", Some("1")).unwrap();

    let err = route.with_parameter("id", Some("1")).unwrap_err();
    assert_eq!(
        err,
        RouteError::DuplicateParameter {
            name: "id".to_string()
        }
    );
    assert_eq!(err.to_string(), "Parameter id already exists");
    assert_eq!(route.parameters().len(), 1);
    assert_eq!(route.parameters()[0].value(), Some("1"));
}

#[test]
fn test_with_name_overwrites() {
    let mut route = descriptor(&[RequestMethod::Get]);
    route.with_name("users.index").with_name("users.show");
    assert_eq!(route.name(), "users.show");
    assert_eq!(route.name(), "users.show");
}

#[test]
fn test_with_fallback_is_idempotent() {
    let mut route = descriptor(&[RequestMethod::All]);
    route.with_fallback();
    assert!(route.is_fallback());
    route.with_fallback();
    assert!(route.is_fallback());
}

#[test]
fn test_get_handler_returns_action() {
    let action = noop_handler();
    let route = RouteDescriptor::new("/", [RequestMethod::Get], Arc::clone(&action));
    assert!(Arc::ptr_eq(route.get_handler(), &action));
}

#[test]
fn test_has_middleware_group() {
    let mut route = descriptor(&[RequestMethod::Get]);
    assert!(!route.has_middleware_group("auth"));

    route.with_middleware_group(MiddlewareGroup::new("auth"));
    assert!(route.has_middleware_group("auth"));
    assert!(!route.has_middleware_group("web"));
    assert_eq!(route.middleware_group("auth").map(|g| g.name()), Some("auth"));
}

#[test]
fn test_clone_is_independent() {
    let mut original = descriptor(&[RequestMethod::Get]);
    original.with_parameter("id", None).unwrap();

    let mut copy = original.clone();
    copy.with_name("copy").with_parameter("slug", None).unwrap();

    assert_eq!(original.name(), ANONYMOUS_ROUTE_NAME);
    assert!(!original.has_parameter("slug"));
    assert!(copy.has_parameter("id"));
    assert!(Arc::ptr_eq(original.get_handler(), copy.get_handler()));
}

#[test]
fn test_debug_output() {
    let mut route = descriptor(&[RequestMethod::Get]);
    route
        .with_name("users.show")
        .with_middleware_group(MiddlewareGroup::new("auth"));
    let rendered = format!("{:?}", route);
    assert!(rendered.contains("users.show"));
    assert!(rendered.contains("\"auth\""));
    assert!(rendered.contains("Head"));
}

#[test]
fn test_freeze_exposes_read_only_view() {
    let mut route = descriptor(&[RequestMethod::Get]);
    route.with_name("users.show").with_parameter("id", None).unwrap();

    let frozen = route.freeze();
    let shared = frozen.clone();
    assert_eq!(shared.name(), "users.show");
    assert!(shared.has_parameter("id"));
    assert_eq!(shared.chain_len(), 0);

    let mut reopened = shared.to_descriptor();
    reopened.with_name("users.edit");
    assert_eq!(frozen.name(), "users.show");
}
