pub mod config;
pub mod db;
pub mod entities;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod notify;
pub mod response;
pub mod routes;
pub mod utils;

use std::sync::Arc;
use std::time::Instant;

use sea_orm::DatabaseConnection;
use tokio::sync::Mutex;

pub use config::Config;
pub use error::{AppError, AppResult};

use crate::notify::Notifier;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub config: Config,
    pub notifier: Notifier,
    /// Serializes feedback approvals so the approved-count check and the
    /// status write happen as one logical operation.
    pub moderation_lock: Arc<Mutex<()>>,
    pub started_at: Instant,
}
