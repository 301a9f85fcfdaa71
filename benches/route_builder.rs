use brrtrouter_route::handler::{HandlerRef, HandlerRequest, HandlerResponse};
use brrtrouter_route::middleware::{MetricsMiddleware, MiddlewareGroup, MiddlewareRef};
use brrtrouter_route::{RequestMethod, RouteDescriptor};
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use std::sync::Arc;

fn noop() -> HandlerRef {
    Arc::new(|_req: &HandlerRequest, _res: &mut HandlerResponse| {})
}

fn build_descriptor(handler: &HandlerRef) -> RouteDescriptor {
    let mut route = RouteDescriptor::new(
        "/zoo/:category/animals/:id/habitats/:habitat_id",
        [RequestMethod::Get, RequestMethod::Put],
        Arc::clone(handler),
    );
    for name in ["category", "id", "habitat_id"] {
        if route.with_parameter(name, None).is_err() {
            break;
        }
    }
    route
        .with_name("zoo.habitat")
        .with_middleware_group(MiddlewareGroup::new("auth"))
        .with_middleware_group(MiddlewareGroup::new("web"));
    route
}

fn bench_build(c: &mut Criterion) {
    let handler = noop();
    c.bench_function("descriptor_build", |b| {
        b.iter(|| black_box(build_descriptor(&handler)))
    });
}

fn bench_membership(c: &mut Criterion) {
    let route = build_descriptor(&noop());
    c.bench_function("descriptor_membership", |b| {
        b.iter(|| {
            black_box(route.has_parameter(black_box("habitat_id")));
            black_box(route.has_parameter(black_box("missing")));
            black_box(route.has_middleware_group(black_box("web")));
        })
    });
}

fn bench_chain(c: &mut Criterion) {
    let mut descriptor = build_descriptor(&noop());
    let metrics: MiddlewareRef = Arc::new(MetricsMiddleware::new());
    descriptor
        .with_middleware(Arc::clone(&metrics))
        .with_middleware(metrics);
    let route = descriptor.freeze();
    let req = HandlerRequest::new(http::Method::GET, "/zoo/cats/animals/1/habitats/2");

    c.bench_function("route_chain", |b| {
        b.iter(|| {
            let mut res = HandlerResponse::default();
            route.handle(&req, &mut res);
            black_box(res.status);
        })
    });
}

criterion_group!(benches, bench_build, bench_membership, bench_chain);
criterion_main!(benches);
