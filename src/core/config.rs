use std::env;

use crate::session::SESSION_FILE_NAME;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub storage_path: String,
    pub db_path: String,
    pub session_path: String,
    pub chat_url: String,
    pub chat_api_key: String,
    pub chat_timeout_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        let storage_path = env::var("SNUGGLES_STORAGE_PATH").unwrap_or("./".to_string());
        let db_path = format!("{}/db", storage_path);
        let session_path = format!("{}/{}", storage_path, SESSION_FILE_NAME);
        // Defaults to the function served by a local backend
        let chat_url = env::var("SNUGGLES_CHAT_URL").unwrap_or_else(|_| {
            "http://127.0.0.1:54321/functions/v1/snugbot-chat".to_string()
        });
        let chat_api_key =
            env::var("SNUGGLES_CHAT_API_KEY").unwrap_or_else(|_| "thiswontwork".to_string());
        let chat_timeout_secs = env::var("SNUGGLES_CHAT_TIMEOUT_SECS")
            .ok()
            .and_then(|secs| secs.parse().ok())
            .unwrap_or(60 * 5);

        Self {
            storage_path,
            db_path,
            session_path,
            chat_url,
            chat_api_key,
            chat_timeout_secs,
        }
    }
}
