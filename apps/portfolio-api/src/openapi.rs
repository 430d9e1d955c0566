//! OpenAPI documentation configuration

use utoipa::OpenApi;

use crate::api;

/// Combined OpenAPI documentation for all APIs
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio API",
        version = "0.1.0",
        description = "Backend for the portfolio site: consultation requests, blog posts, contact messages and analytics"
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    paths(api::root, api::health::readiness_check),
    components(schemas(api::RootResponse, api::health::ReadinessResponse)),
    nest(
        (path = "/api/status", api = domain_status_checks::ApiDoc),
        (path = "/api/consultations", api = domain_consultations::ApiDoc),
        (path = "/api/analytics", api = domain_consultations::AnalyticsApiDoc),
        (path = "/api/blog-posts", api = domain_blog_posts::ApiDoc),
        (path = "/api", api = domain_blog_posts::SeedApiDoc),
        (path = "/api/contact", api = domain_contact_messages::ApiDoc)
    ),
    tags(
        (name = "System", description = "Service status"),
        (name = "Status", description = "Client status checks"),
        (name = "Consultations", description = "AI consultation requests"),
        (name = "Analytics", description = "Aggregates over consultation requests"),
        (name = "Blog", description = "Blog posts"),
        (name = "Contact", description = "Contact form submissions")
    )
)]
pub struct ApiDoc;
