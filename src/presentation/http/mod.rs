use std::sync::Arc;

use poem::{Endpoint, EndpointExt, Route, middleware::{Cors, Tracing}};
use poem_openapi::OpenApiService;

use crate::presentation::http::endpoints::{ApiState, HealthEndpoints, UsersEndpoints};

pub mod endpoints;
pub mod mappers;
pub mod requests;
pub mod responses;

/// Routes the user API at the root, with Swagger UI under `/docs` and the raw
/// document at `/openapi.json`. Any origin may call the API.
pub fn build_app(state: ApiState, server_url: String) -> impl Endpoint {
    let api_service = OpenApiService::new(
        (HealthEndpoints, UsersEndpoints::new(Arc::new(state))),
        "User Manager API",
        env!("CARGO_PKG_VERSION"),
    )
    .server(server_url);
    let ui = api_service.swagger_ui();
    let spec = api_service.spec_endpoint();

    Route::new()
        .nest("/docs", ui)
        .at("/openapi.json", spec)
        .nest("/", api_service)
        .with(Cors::new())
        .with(Tracing)
}
