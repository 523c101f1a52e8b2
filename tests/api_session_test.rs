//! Integration tests for the session API endpoints

mod test_utils;

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;

    use snuggles::api::public::session::SessionState;

    use crate::test_utils::{body_to_json, get, post_json, test_app};

    #[tokio::test]
    async fn it_starts_signed_out() {
        let (app, _dir) = test_app().await;
        let response = get(&app, "/api/session").await;
        assert_eq!(response.status(), StatusCode::OK);
        let state: SessionState = body_to_json(response.into_body()).await;
        assert!(!state.is_authenticated);
        assert!(state.user.is_none());
    }

    #[tokio::test]
    async fn it_logs_in_and_out() {
        let (app, dir) = test_app().await;

        let response = post_json(
            &app,
            "/api/session/login",
            json!({"email": "jamie@example.com", "password": "anything"}),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let state: SessionState = body_to_json(response.into_body()).await;
        assert!(state.is_authenticated);
        assert_eq!(state.user.unwrap().name, "jamie");

        let saved = std::fs::read_to_string(dir.path().join("snuggles_auth.json")).unwrap();
        assert!(saved.contains("jamie@example.com"));

        let response = post_json(&app, "/api/session/logout", json!({})).await;
        let state: SessionState = body_to_json(response.into_body()).await;
        assert!(!state.is_authenticated);

        let response = get(&app, "/api/session").await;
        let state: SessionState = body_to_json(response.into_body()).await;
        assert!(state.user.is_none());
    }

    #[tokio::test]
    async fn it_registers() {
        let (app, _dir) = test_app().await;
        let response = post_json(
            &app,
            "/api/session/register",
            json!({"name": "Jamie Doe", "email": "jamie@example.com", "password": "pw"}),
        )
        .await;
        let state: SessionState = body_to_json(response.into_body()).await;
        assert_eq!(state.user.unwrap().name, "Jamie Doe");

        let response = post_json(
            &app,
            "/api/session/register",
            json!({"name": "", "email": "jamie@example.com", "password": "pw"}),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
