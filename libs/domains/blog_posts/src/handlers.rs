use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, post},
};
use axum_helpers::{
    ValidatedJson,
    errors::responses::{NotFoundResponse, StorageErrorResponse, ValidationErrorResponse},
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::BlogPostResult;
use crate::models::{BlogPost, BlogPostCreate, SeedOutcome};
use crate::repository::BlogPostRepository;
use crate::service::BlogPostService;

#[derive(OpenApi)]
#[openapi(
    paths(list_blog_posts, create_blog_post, get_blog_post),
    components(
        schemas(BlogPost, BlogPostCreate),
        responses(NotFoundResponse, StorageErrorResponse, ValidationErrorResponse)
    ),
    tags(
        (name = "Blog", description = "Blog posts")
    )
)]
pub struct ApiDoc;

#[derive(OpenApi)]
#[openapi(
    paths(initialize_blog),
    components(schemas(SeedOutcome), responses(StorageErrorResponse)),
    tags(
        (name = "Blog", description = "Blog posts")
    )
)]
pub struct SeedApiDoc;

pub fn router<R: BlogPostRepository + 'static>(service: BlogPostService<R>) -> Router {
    Router::new()
        .route("/", get(list_blog_posts).post(create_blog_post))
        .route("/{id}", get(get_blog_post))
        .with_state(Arc::new(service))
}

/// `POST /initialize-blog`, meant to be merged at the API root
pub fn initialize_router<R: BlogPostRepository + 'static>(service: BlogPostService<R>) -> Router {
    Router::new()
        .route("/initialize-blog", post(initialize_blog))
        .with_state(Arc::new(service))
}

/// List published blog posts, newest first
#[utoipa::path(
    get,
    path = "",
    tag = "Blog",
    responses(
        (status = 200, description = "Published blog posts", body = Vec<BlogPost>),
        (status = 500, response = StorageErrorResponse)
    )
)]
async fn list_blog_posts<R: BlogPostRepository>(
    State(service): State<Arc<BlogPostService<R>>>,
) -> BlogPostResult<Json<Vec<BlogPost>>> {
    let posts = service.list_blog_posts().await?;
    Ok(Json(posts))
}

/// Create a blog post
#[utoipa::path(
    post,
    path = "",
    tag = "Blog",
    request_body = BlogPostCreate,
    responses(
        (status = 200, description = "Blog post stored", body = BlogPost),
        (status = 422, response = ValidationErrorResponse),
        (status = 500, response = StorageErrorResponse)
    )
)]
async fn create_blog_post<R: BlogPostRepository>(
    State(service): State<Arc<BlogPostService<R>>>,
    ValidatedJson(input): ValidatedJson<BlogPostCreate>,
) -> BlogPostResult<Json<BlogPost>> {
    let post = service.create_blog_post(input).await?;
    Ok(Json(post))
}

/// Get a published blog post by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Blog",
    params(
        ("id" = String, Path, description = "Blog post ID")
    ),
    responses(
        (status = 200, description = "Blog post found", body = BlogPost),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = StorageErrorResponse)
    )
)]
async fn get_blog_post<R: BlogPostRepository>(
    State(service): State<Arc<BlogPostService<R>>>,
    Path(id): Path<String>,
) -> BlogPostResult<Json<BlogPost>> {
    let post = service.get_blog_post(&id).await?;
    Ok(Json(post))
}

/// Insert the sample posts if the collection is empty
#[utoipa::path(
    post,
    path = "/initialize-blog",
    tag = "Blog",
    responses(
        (status = 200, description = "Seeding result", body = SeedOutcome),
        (status = 500, response = StorageErrorResponse)
    )
)]
async fn initialize_blog<R: BlogPostRepository>(
    State(service): State<Arc<BlogPostService<R>>>,
) -> BlogPostResult<Json<SeedOutcome>> {
    let outcome = service.initialize().await?;
    Ok(Json(outcome))
}
