pub mod booking;
pub mod contact;
pub mod feedback;
pub mod photo;
