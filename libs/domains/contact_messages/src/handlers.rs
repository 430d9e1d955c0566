use axum::{Json, Router, extract::State, routing::get};
use axum_helpers::{
    ValidatedJson,
    errors::responses::{StorageErrorResponse, ValidationErrorResponse},
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::ContactMessageResult;
use crate::models::{ContactMessage, ContactMessageCreate};
use crate::repository::ContactMessageRepository;
use crate::service::ContactMessageService;

#[derive(OpenApi)]
#[openapi(
    paths(list_contact_messages, create_contact_message),
    components(
        schemas(ContactMessage, ContactMessageCreate),
        responses(StorageErrorResponse, ValidationErrorResponse)
    ),
    tags(
        (name = "Contact", description = "Contact form submissions")
    )
)]
pub struct ApiDoc;

pub fn router<R: ContactMessageRepository + 'static>(
    service: ContactMessageService<R>,
) -> Router {
    Router::new()
        .route("/", get(list_contact_messages).post(create_contact_message))
        .with_state(Arc::new(service))
}

/// List contact messages, newest first
#[utoipa::path(
    get,
    path = "",
    tag = "Contact",
    responses(
        (status = 200, description = "Contact messages", body = Vec<ContactMessage>),
        (status = 500, response = StorageErrorResponse)
    )
)]
async fn list_contact_messages<R: ContactMessageRepository>(
    State(service): State<Arc<ContactMessageService<R>>>,
) -> ContactMessageResult<Json<Vec<ContactMessage>>> {
    let messages = service.list_contact_messages().await?;
    Ok(Json(messages))
}

/// Submit the contact form
#[utoipa::path(
    post,
    path = "",
    tag = "Contact",
    request_body = ContactMessageCreate,
    responses(
        (status = 200, description = "Message stored", body = ContactMessage),
        (status = 422, response = ValidationErrorResponse),
        (status = 500, response = StorageErrorResponse)
    )
)]
async fn create_contact_message<R: ContactMessageRepository>(
    State(service): State<Arc<ContactMessageService<R>>>,
    ValidatedJson(input): ValidatedJson<ContactMessageCreate>,
) -> ContactMessageResult<Json<ContactMessage>> {
    let message = service.create_contact_message(input).await?;
    Ok(Json(message))
}
