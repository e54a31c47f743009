//! Route labels for spans and metrics.

/// Label shared by every path outside the known route table.
pub(super) const UNMATCHED_ROUTE: &str = "unmatched";

/// Maps a request path onto its route template.
///
/// Labels come from a fixed set so client-chosen paths cannot grow the
/// metrics registry.
pub(super) fn route_label(path: &str) -> &'static str {
    let segments: Vec<&str> = path
        .split('/')
        .filter(|segment| !segment.is_empty())
        .collect();

    match segments.as_slice() {
        [] => "/",
        ["products"] => "/products",
        ["products", id] if is_numeric(id) => "/products/{id}",
        ["tasks"] => "/tasks",
        ["tasks", id] if is_numeric(id) => "/tasks/{id}",
        ["metrics"] => "/metrics",
        ["api-doc", "openapi.json"] => "/api-doc/openapi.json",
        ["docs", ..] => "/docs",
        _ => UNMATCHED_ROUTE,
    }
}

fn is_numeric(segment: &str) -> bool {
    segment.bytes().all(|byte| byte.is_ascii_digit())
}
