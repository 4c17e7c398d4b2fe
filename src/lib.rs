pub mod config;
pub mod dtos;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;
pub mod startup;

use utoipa::{openapi::security::SecurityScheme, Modify, OpenApi};

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::people::list_people,
        handlers::people::create_person,
        handlers::people::update_person,
        handlers::people::delete_person,
        handlers::health::health_check,
    ),
    components(schemas(
        dtos::PersonInput,
        dtos::PersonResponse,
        error::ErrorResponse,
    )),
    modifiers(&SecurityAddon),
    tags(
        (name = "People", description = "CRUD operations over the people collection"),
        (name = "Observability", description = "Service health and monitoring"),
    )
)]
pub struct ApiDoc;

/// Declares a bearer token scheme in the generated documentation. Nothing in
/// the service enforces it.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    utoipa::openapi::security::HttpBuilder::new()
                        .scheme(utoipa::openapi::security::HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}
