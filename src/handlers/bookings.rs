use axum::{extract::State, http::StatusCode};
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set};
use serde::Deserialize;
use uuid::Uuid;

use crate::entities::booking::{self, BookingStatus, CarType};
use crate::error::{AppError, AppResult};
use crate::extract::Json;
use crate::response::ApiResponse;
use crate::utils::validate;
use crate::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    pub from: String,
    pub to: String,
    pub date: DateTime<Utc>,
    pub passengers: i32,
    pub car_type: String,
    pub phone_number: String,
    pub email: Option<String>,
}

/// Create a booking and fan out notifications. Channel failures are logged
/// via the delivery report and never change the response.
pub async fn create_booking(
    State(state): State<AppState>,
    Json(payload): Json<CreateBookingRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<booking::Model>>)> {
    validate::require_non_empty(&payload.from, "Pickup location is required")?;
    validate::require_non_empty(&payload.to, "Drop-off location is required")?;
    validate::validate_passengers(payload.passengers)?;
    let car_type = CarType::parse(&payload.car_type)
        .ok_or_else(|| AppError::BadRequest("Please select a valid car type".to_string()))?;
    validate::validate_phone_number(&payload.phone_number)?;

    let email = payload
        .email
        .filter(|e| !e.trim().is_empty())
        .unwrap_or_else(|| state.config.booking_fallback_email.clone());

    let booking = booking::ActiveModel {
        id: Set(Uuid::new_v4()),
        from_location: Set(payload.from),
        to_location: Set(payload.to),
        travel_date: Set(payload.date.into()),
        passengers: Set(payload.passengers),
        car_type: Set(car_type),
        phone_number: Set(payload.phone_number),
        email: Set(email),
        status: Set(BookingStatus::Pending),
        ..Default::default()
    }
    .insert(&state.db)
    .await?;

    let report = state.notifier.booking_submitted(&booking).await;
    report.log("booking submission");

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(
            booking,
            "Booking submitted successfully",
        )),
    ))
}

/// List all bookings, newest first.
pub async fn list_bookings(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<Vec<booking::Model>>>> {
    let bookings = booking::Entity::find()
        .order_by_desc(booking::Column::CreatedAt)
        .all(&state.db)
        .await?;

    Ok(Json(ApiResponse::data(bookings)))
}
