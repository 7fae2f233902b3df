use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set};
use serde::Deserialize;
use uuid::Uuid;

use crate::entities::contact::{self, ContactStatus};
use crate::error::{AppError, AppResult};
use crate::extract::Json;
use crate::response::ApiResponse;
use crate::utils::validate;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateContactRequest {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: Option<String>,
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: String,
}

/// Submit the contact form; notifies the admin inbox best-effort.
pub async fn create_contact(
    State(state): State<AppState>,
    Json(payload): Json<CreateContactRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<contact::Model>>)> {
    validate::require_non_empty(&payload.name, "Name is required")?;
    validate::require_non_empty(&payload.email, "Email is required")?;
    validate::require_non_empty(&payload.message, "Message is required")?;

    let contact = contact::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(payload.name),
        email: Set(payload.email),
        phone: Set(payload.phone.unwrap_or_default()),
        subject: Set(payload.subject.unwrap_or_default()),
        message: Set(payload.message),
        status: Set(ContactStatus::Pending),
        ..Default::default()
    }
    .insert(&state.db)
    .await?;

    let report = state.notifier.contact_submitted(&contact).await;
    report.log("contact submission");

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(
            contact,
            "Contact form submitted successfully",
        )),
    ))
}

/// List all contact submissions, newest first (admin).
pub async fn list_contacts(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<Vec<contact::Model>>>> {
    let contacts = contact::Entity::find()
        .order_by_desc(contact::Column::CreatedAt)
        .all(&state.db)
        .await?;

    Ok(Json(ApiResponse::data(contacts)))
}

/// Update a contact submission's status (admin).
pub async fn update_contact_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateStatusRequest>,
) -> AppResult<Json<ApiResponse<contact::Model>>> {
    let status = ContactStatus::parse(&payload.status).ok_or_else(|| {
        AppError::BadRequest("Invalid status value. Must be pending or resolved".to_string())
    })?;

    let contact = contact::Entity::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Contact submission not found".to_string()))?;

    let mut active: contact::ActiveModel = contact.into();
    active.status = Set(status);
    active.updated_at = Set(Utc::now().into());
    let updated = active.update(&state.db).await?;

    Ok(Json(ApiResponse::with_message(
        updated,
        "Contact submission status updated successfully",
    )))
}

/// Delete a contact submission (admin). Echoes the deleted record.
pub async fn delete_contact(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<contact::Model>>> {
    let contact = contact::Entity::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Contact submission not found".to_string()))?;

    contact::Entity::delete_by_id(id).exec(&state.db).await?;

    Ok(Json(ApiResponse::with_message(
        contact,
        "Contact submission deleted successfully",
    )))
}
