use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, FromQueryResult, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::feedback::{self, FeedbackStatus};
use crate::error::{AppError, AppResult};
use crate::extract::Json;
use crate::response::ApiResponse;
use crate::utils::validate;
use crate::AppState;

/// Ceiling on simultaneously approved feedback, matching the fixed-size
/// testimonial display on the site.
pub const MAX_APPROVED_FEEDBACK: u64 = 3;

#[derive(Debug, Deserialize)]
pub struct CreateFeedbackRequest {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub rating: i32,
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: String,
}

/// Public projection of an approved feedback record: contact details are
/// not exposed.
#[derive(Debug, Serialize, FromQueryResult)]
#[serde(rename_all = "camelCase")]
pub struct ApprovedFeedback {
    pub id: Uuid,
    pub name: String,
    pub rating: i32,
    pub message: String,
    pub created_at: sea_orm::prelude::DateTimeWithTimeZone,
}

/// Decides whether a status transition may proceed given the total number
/// of approved records. A record already approved does not count against
/// its own re-approval, so repeating `approved` at the ceiling stays
/// idempotent. Rejections are always allowed.
fn can_transition(target: FeedbackStatus, current: FeedbackStatus, total_approved: u64) -> bool {
    if target != FeedbackStatus::Approved {
        return true;
    }
    let approved_elsewhere = if current == FeedbackStatus::Approved {
        total_approved.saturating_sub(1)
    } else {
        total_approved
    };
    approved_elsewhere < MAX_APPROVED_FEEDBACK
}

/// Submit feedback; notifies the admin inbox best-effort.
pub async fn create_feedback(
    State(state): State<AppState>,
    Json(payload): Json<CreateFeedbackRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<feedback::Model>>)> {
    validate::require_non_empty(&payload.name, "Name is required")?;
    validate::require_non_empty(&payload.email, "Email is required")?;
    validate::require_non_empty(&payload.message, "Message is required")?;
    validate::validate_rating(payload.rating)?;

    let feedback = feedback::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(payload.name),
        email: Set(payload.email),
        phone: Set(payload.phone.unwrap_or_default()),
        message: Set(payload.message),
        rating: Set(payload.rating),
        status: Set(FeedbackStatus::Pending),
        ..Default::default()
    }
    .insert(&state.db)
    .await?;

    let report = state.notifier.feedback_submitted(&feedback).await;
    report.log("feedback submission");

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(
            feedback,
            "Feedback submitted successfully",
        )),
    ))
}

/// List all feedback with status, newest first (admin).
pub async fn list_feedback(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<Vec<feedback::Model>>>> {
    let feedbacks = feedback::Entity::find()
        .order_by_desc(feedback::Column::CreatedAt)
        .all(&state.db)
        .await?;

    Ok(Json(ApiResponse::data(feedbacks)))
}

/// Fetch one feedback record (admin).
pub async fn get_feedback(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<feedback::Model>>> {
    let feedback = feedback::Entity::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Feedback not found".to_string()))?;

    Ok(Json(ApiResponse::data(feedback)))
}

/// Approved feedback for the public testimonial display: newest first,
/// capped at the approval ceiling, projected to public fields.
pub async fn list_approved_feedback(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<Vec<ApprovedFeedback>>>> {
    let feedbacks = feedback::Entity::find()
        .filter(feedback::Column::Status.eq(FeedbackStatus::Approved))
        .select_only()
        .columns([
            feedback::Column::Id,
            feedback::Column::Name,
            feedback::Column::Rating,
            feedback::Column::Message,
            feedback::Column::CreatedAt,
        ])
        .order_by_desc(feedback::Column::CreatedAt)
        .limit(MAX_APPROVED_FEEDBACK)
        .into_model::<ApprovedFeedback>()
        .all(&state.db)
        .await?;

    Ok(Json(ApiResponse::data(feedbacks)))
}

/// Moderate a feedback record (admin): approve or reject. Approvals are
/// guarded by the ceiling; the count check and the write run under the
/// moderation lock so concurrent approvals cannot both slip past the guard.
pub async fn update_feedback_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateStatusRequest>,
) -> AppResult<Json<ApiResponse<feedback::Model>>> {
    let status = match payload.status.as_str() {
        "approved" => FeedbackStatus::Approved,
        "not_approved" => FeedbackStatus::NotApproved,
        _ => {
            return Err(AppError::BadRequest(
                "Invalid status value. Must be approved or not_approved".to_string(),
            ))
        }
    };

    let _guard = state.moderation_lock.lock().await;

    let feedback = feedback::Entity::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Feedback not found".to_string()))?;

    if status == FeedbackStatus::Approved {
        let total_approved = feedback::Entity::find()
            .filter(feedback::Column::Status.eq(FeedbackStatus::Approved))
            .count(&state.db)
            .await?;

        if !can_transition(status.clone(), feedback.status.clone(), total_approved) {
            return Err(AppError::BadRequest(
                "Maximum of 3 approved feedbacks allowed".to_string(),
            ));
        }
    }

    let message = if status == FeedbackStatus::Approved {
        "Feedback approved successfully"
    } else {
        "Feedback not approved successfully"
    };

    let mut active: feedback::ActiveModel = feedback.into();
    active.status = Set(status);
    active.updated_at = Set(Utc::now().into());
    let updated = active.update(&state.db).await?;

    Ok(Json(ApiResponse::with_message(updated, message)))
}

/// Delete a feedback record (admin). Echoes the deleted record.
pub async fn delete_feedback(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<feedback::Model>>> {
    let feedback = feedback::Entity::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Feedback not found".to_string()))?;

    feedback::Entity::delete_by_id(id).exec(&state.db).await?;

    Ok(Json(ApiResponse::with_message(
        feedback,
        "Feedback deleted successfully",
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::entities::feedback::FeedbackStatus::{Approved, NotApproved, Pending};

    #[test]
    fn approval_guard_allows_up_to_the_ceiling() {
        assert!(can_transition(Approved, Pending, 0));
        assert!(can_transition(Approved, Pending, 2));
        assert!(!can_transition(Approved, Pending, 3));
        assert!(!can_transition(Approved, Pending, 10));
    }

    #[test]
    fn reapproving_an_approved_record_at_the_ceiling_is_idempotent() {
        // The record's own approved row does not count against it.
        assert!(can_transition(Approved, Approved, 3));
        assert!(!can_transition(Approved, Approved, 4));
    }

    #[test]
    fn rejection_is_never_blocked_by_the_ceiling() {
        assert!(can_transition(NotApproved, Approved, 3));
        assert!(can_transition(NotApproved, Pending, 10));
    }
}
