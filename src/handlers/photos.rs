use axum::{
    extract::{Multipart, Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, FromQueryResult, QueryFilter, QueryOrder,
    QuerySelect, Set,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::photo::{self, PhotoStatus};
use crate::error::{AppError, AppResult};
use crate::extract::Json;
use crate::response::ApiResponse;
use crate::AppState;

pub const MAX_PHOTOS_PER_UPLOAD: usize = 2;
pub const MAX_PHOTO_BYTES: usize = 5 * 1024 * 1024;

#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: String,
}

/// Photo metadata without the image payload; used by every list endpoint
/// and the moderation response.
#[derive(Debug, Serialize, FromQueryResult)]
#[serde(rename_all = "camelCase")]
pub struct PhotoMeta {
    pub id: Uuid,
    pub content_type: String,
    pub title: String,
    pub uploaded_by: String,
    pub status: PhotoStatus,
    pub created_at: sea_orm::prelude::DateTimeWithTimeZone,
    pub updated_at: sea_orm::prelude::DateTimeWithTimeZone,
}

const META_COLUMNS: [photo::Column; 7] = [
    photo::Column::Id,
    photo::Column::ContentType,
    photo::Column::Title,
    photo::Column::UploadedBy,
    photo::Column::Status,
    photo::Column::CreatedAt,
    photo::Column::UpdatedAt,
];

fn is_image(content_type: &str) -> bool {
    content_type.starts_with("image/")
}

struct UploadedFile {
    bytes: Vec<u8>,
    content_type: String,
    title: String,
}

/// Upload up to two photos via multipart. Uploads land directly in the
/// approved state; there is no moderation gate on creation.
pub async fn upload_photos(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<(StatusCode, Json<ApiResponse<Vec<PhotoMeta>>>)> {
    let mut files: Vec<UploadedFile> = Vec::new();
    let mut uploaded_by = "user".to_string();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Invalid multipart request: {e}")))?
    {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("photos") => {
                if files.len() >= MAX_PHOTOS_PER_UPLOAD {
                    return Err(AppError::BadRequest(
                        "Maximum 2 photos can be uploaded at a time".to_string(),
                    ));
                }

                let content_type = field.content_type().unwrap_or_default().to_string();
                if !is_image(&content_type) {
                    return Err(AppError::BadRequest(
                        "Only image files are allowed".to_string(),
                    ));
                }

                let title = field.file_name().unwrap_or("untitled").to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(format!("Failed to read photo: {e}")))?;
                if bytes.len() > MAX_PHOTO_BYTES {
                    return Err(AppError::BadRequest(
                        "Photos must be 5MB or smaller".to_string(),
                    ));
                }

                files.push(UploadedFile {
                    bytes: bytes.to_vec(),
                    content_type,
                    title,
                });
            }
            Some("uploadedBy") => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(format!("Invalid uploadedBy field: {e}")))?;
                if !value.trim().is_empty() {
                    uploaded_by = value;
                }
            }
            _ => {}
        }
    }

    if files.is_empty() {
        return Err(AppError::BadRequest("No photos uploaded".to_string()));
    }

    let mut saved = Vec::with_capacity(files.len());
    for file in files {
        let photo = photo::ActiveModel {
            id: Set(Uuid::new_v4()),
            image_data: Set(file.bytes),
            content_type: Set(file.content_type),
            title: Set(file.title),
            uploaded_by: Set(uploaded_by.clone()),
            status: Set(PhotoStatus::Approved),
            ..Default::default()
        }
        .insert(&state.db)
        .await?;

        saved.push(PhotoMeta {
            id: photo.id,
            content_type: photo.content_type,
            title: photo.title,
            uploaded_by: photo.uploaded_by,
            status: photo.status,
            created_at: photo.created_at,
            updated_at: photo.updated_at,
        });
    }

    let message = format!("{} photo(s) uploaded successfully", saved.len());
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(saved, message)),
    ))
}

/// List all photos without image payloads (admin).
pub async fn list_photos(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<Vec<PhotoMeta>>>> {
    let photos = photo::Entity::find()
        .select_only()
        .columns(META_COLUMNS)
        .order_by_desc(photo::Column::CreatedAt)
        .into_model::<PhotoMeta>()
        .all(&state.db)
        .await?;

    Ok(Json(ApiResponse::data(photos)))
}

/// List approved photos without image payloads (public).
pub async fn list_approved_photos(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<Vec<PhotoMeta>>>> {
    let photos = photo::Entity::find()
        .filter(photo::Column::Status.eq(PhotoStatus::Approved))
        .select_only()
        .columns(META_COLUMNS)
        .order_by_desc(photo::Column::CreatedAt)
        .into_model::<PhotoMeta>()
        .all(&state.db)
        .await?;

    Ok(Json(ApiResponse::data(photos)))
}

/// Fetch one photo as raw bytes with its stored content type.
pub async fn get_photo(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Response> {
    let photo = photo::Entity::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Photo not found".to_string()))?;

    Ok((
        [(header::CONTENT_TYPE, photo.content_type)],
        photo.image_data,
    )
        .into_response())
}

/// Update a photo's status (admin). Response carries metadata only.
pub async fn update_photo_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateStatusRequest>,
) -> AppResult<Json<ApiResponse<PhotoMeta>>> {
    let status = PhotoStatus::parse(&payload.status)
        .ok_or_else(|| AppError::BadRequest("Invalid status value".to_string()))?;

    let photo = photo::Entity::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Photo not found".to_string()))?;

    let mut active: photo::ActiveModel = photo.into();
    active.status = Set(status);
    active.updated_at = Set(Utc::now().into());
    let updated = active.update(&state.db).await?;

    let message = format!("Photo {} successfully", payload.status);
    Ok(Json(ApiResponse::with_message(
        PhotoMeta {
            id: updated.id,
            content_type: updated.content_type,
            title: updated.title,
            uploaded_by: updated.uploaded_by,
            status: updated.status,
            created_at: updated.created_at,
            updated_at: updated.updated_at,
        },
        message,
    )))
}

/// Delete a photo (admin).
pub async fn delete_photo(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<()>>> {
    let result = photo::Entity::delete_by_id(id).exec(&state.db).await?;

    if result.rows_affected == 0 {
        return Err(AppError::NotFound("Photo not found".to_string()));
    }

    Ok(Json(ApiResponse::message("Photo deleted successfully")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_image_mime_types_pass_the_upload_gate() {
        assert!(is_image("image/jpeg"));
        assert!(is_image("image/png"));
        assert!(is_image("image/webp"));
        assert!(!is_image("application/pdf"));
        assert!(!is_image("text/html"));
        assert!(!is_image(""));
    }
}
