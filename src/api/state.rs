use std::sync::Arc;

use tokio_rusqlite::Connection;

use crate::core::AppConfig;
use crate::session::SessionStore;

pub struct AppState {
    pub db: Connection,
    pub config: AppConfig,
    pub session: Arc<SessionStore>,
}

impl AppState {
    pub fn new(db: Connection, config: AppConfig) -> Self {
        let session = Arc::new(SessionStore::open(&config.session_path));
        Self {
            db,
            config,
            session,
        }
    }
}
