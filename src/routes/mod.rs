use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get, patch, post},
    Router,
};

use crate::handlers::{bookings, contact, feedback, health, photos};
use crate::handlers::photos::{MAX_PHOTOS_PER_UPLOAD, MAX_PHOTO_BYTES};
use crate::AppState;

pub fn create_router(state: AppState) -> Router {
    let booking_routes = Router::new()
        .route("/", post(bookings::create_booking))
        .route("/", get(bookings::list_bookings));

    let contact_routes = Router::new()
        .route("/", post(contact::create_contact))
        .route("/", get(contact::list_contacts))
        .route("/{id}/status", patch(contact::update_contact_status))
        .route("/{id}", delete(contact::delete_contact));

    let feedback_routes = Router::new()
        .route("/", post(feedback::create_feedback))
        .route("/", get(feedback::list_feedback))
        .route("/approved", get(feedback::list_approved_feedback))
        .route("/{id}", get(feedback::get_feedback))
        .route("/{id}/status", patch(feedback::update_feedback_status))
        .route("/{id}", delete(feedback::delete_feedback));

    // Body limit covers a full upload batch plus multipart framing.
    let photo_routes = Router::new()
        .route("/upload", post(photos::upload_photos))
        .route("/all", get(photos::list_photos))
        .route("/approved", get(photos::list_approved_photos))
        .route("/{id}", get(photos::get_photo))
        .route("/{id}/status", patch(photos::update_photo_status))
        .route("/{id}", delete(photos::delete_photo))
        .layer(DefaultBodyLimit::max(
            MAX_PHOTOS_PER_UPLOAD * MAX_PHOTO_BYTES + 64 * 1024,
        ));

    Router::new()
        .nest("/api/bookings", booking_routes)
        .nest("/api/contact", contact_routes)
        .nest("/api/feedback", feedback_routes)
        .nest("/api/photos", photo_routes)
        .route("/api/health", get(health::health_check))
        .with_state(state)
}
