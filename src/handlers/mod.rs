pub mod bookings;
pub mod contact;
pub mod feedback;
pub mod health;
pub mod photos;
