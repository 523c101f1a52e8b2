//! Integration tests for the babies API endpoints

mod test_utils;

#[cfg(test)]
mod tests {
    use axum::Router;
    use axum::http::StatusCode;
    use serde_json::{Value, json};

    use crate::test_utils::{body_to_json, get, post_json, test_app};

    async fn create_baby(app: &Router, name: &str, gender: &str) -> String {
        let response = post_json(
            app,
            "/api/babies",
            json!({
                "name": name,
                "birth_date": "2025-01-15",
                "gender": gender,
            }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
        let baby: Value = body_to_json(response.into_body()).await;
        baby["id"].as_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn it_creates_and_lists_babies() {
        let (app, _dir) = test_app().await;
        let first = create_baby(&app, "Ada", "female").await;
        let second = create_baby(&app, "Alan", "male").await;

        let response = get(&app, "/api/babies").await;
        assert_eq!(response.status(), StatusCode::OK);
        let babies: Vec<Value> = body_to_json(response.into_body()).await;
        let ids: Vec<&str> = babies.iter().map(|b| b["id"].as_str().unwrap()).collect();
        assert_eq!(ids, vec![second.as_str(), first.as_str()]);

        let response = get(&app, &format!("/api/babies/{}", first)).await;
        let baby: Value = body_to_json(response.into_body()).await;
        assert_eq!(baby["name"], "Ada");
        assert_eq!(baby["gender"], "female");
    }

    #[tokio::test]
    async fn it_rejects_a_blank_name() {
        let (app, _dir) = test_app().await;
        let response = post_json(
            &app,
            "/api/babies",
            json!({"name": "  ", "birth_date": "2025-01-15"}),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn it_404s_for_unknown_baby() {
        let (app, _dir) = test_app().await;
        let response = get(&app, "/api/babies/missing/growth").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = post_json(&app, "/api/babies/missing/cries", json!({"duration_minutes": 5})).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn it_tracks_growth() {
        let (app, _dir) = test_app().await;
        let id = create_baby(&app, "Alan", "male").await;

        let response = get(&app, &format!("/api/babies/{}/growth/summary", id)).await;
        let body: Value = body_to_json(response.into_body()).await;
        assert!(body["summary"].is_null());

        let response = post_json(
            &app,
            &format!("/api/babies/{}/growth", id),
            json!({"date": "2025-06-01", "weight_kg": 7.5, "height_cm": 66.0}),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);

        let response = get(&app, &format!("/api/babies/{}/growth", id)).await;
        let records: Vec<Value> = body_to_json(response.into_body()).await;
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["weight_kg"], 7.5);

        let response = get(&app, &format!("/api/babies/{}/growth/summary", id)).await;
        let body: Value = body_to_json(response.into_body()).await;
        assert!(body["summary"]["weight_percentile"].is_string());
        assert!(body["summary"]["height_percentile"].is_string());
    }

    #[tokio::test]
    async fn it_rejects_negative_measurements() {
        let (app, _dir) = test_app().await;
        let id = create_baby(&app, "Ada", "female").await;
        let response = post_json(
            &app,
            &format!("/api/babies/{}/growth", id),
            json!({"weight_kg": -1.0}),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn it_summarizes_sleep() {
        let (app, _dir) = test_app().await;
        let id = create_baby(&app, "Ada", "female").await;
        let uri = format!("/api/babies/{}/sleep", id);

        for (start, end, quality) in [
            ("2025-03-01T20:00:00", "2025-03-01T22:00:00", "good"),
            ("2025-03-02T13:00:00", "2025-03-02T14:00:00", "poor"),
        ] {
            let response = post_json(
                &app,
                &uri,
                json!({"sleep_start": start, "sleep_end": end, "sleep_quality": quality}),
            )
            .await;
            assert_eq!(response.status(), StatusCode::CREATED);
        }

        let response = post_json(
            &app,
            &uri,
            json!({"sleep_start": "2025-03-03T20:00:00", "sleep_end": "2025-03-03T19:00:00"}),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = get(&app, &format!("{}/summary", uri)).await;
        let body: Value = body_to_json(response.into_body()).await;
        assert_eq!(
            body["summary"],
            json!({
                "average_hours": 1,
                "average_minutes": 30,
                "quality_percent": 50,
                "total_records": 2,
            })
        );
    }

    #[tokio::test]
    async fn it_logs_cries_and_meals() {
        let (app, _dir) = test_app().await;
        let id = create_baby(&app, "Ada", "female").await;

        let response = post_json(
            &app,
            &format!("/api/babies/{}/cries", id),
            json!({"duration_minutes": 12, "cry_type": "hungry", "resolution": "fed"}),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
        let response = get(&app, &format!("/api/babies/{}/cries", id)).await;
        let cries: Vec<Value> = body_to_json(response.into_body()).await;
        assert_eq!(cries[0]["cry_type"], "hungry");

        let response = post_json(
            &app,
            &format!("/api/babies/{}/meals", id),
            json!({"meal_type": "solid_food", "food_items": ["peas", "carrots"]}),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);

        let response = get(&app, &format!("/api/babies/{}/meals/summary", id)).await;
        let body: Value = body_to_json(response.into_body()).await;
        assert_eq!(body["today"]["total_meals"], 1);
        assert_eq!(body["today"]["solids"], 1);
        assert!(body["suggestion"]["meals"].is_array());
    }

    #[tokio::test]
    async fn it_gives_baseline_insights() {
        let (app, _dir) = test_app().await;
        let id = create_baby(&app, "Ada", "female").await;

        let response = get(&app, &format!("/api/babies/{}/insights", id)).await;
        let body: Value = body_to_json(response.into_body()).await;
        let insights = body["insights"].as_array().unwrap();
        assert_eq!(insights.len(), 3);
        assert_eq!(insights[0]["kind"], "sleep");
        assert!(insights[1]["description"].as_str().unwrap().contains("Ada"));
    }
}
