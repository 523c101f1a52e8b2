//! Integration tests for the reference API endpoints

mod test_utils;

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::Value;

    use crate::test_utils::{body_to_json, get, test_app};

    #[tokio::test]
    async fn it_lists_emergency_cards_with_contacts() {
        let (app, _dir) = test_app().await;

        let response = get(&app, "/api/reference/emergency").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body: Value = body_to_json(response.into_body()).await;
        assert_eq!(body["cards"].as_array().unwrap().len(), 8);
        assert_eq!(body["contacts"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn it_filters_emergency_cards_by_category() {
        let (app, _dir) = test_app().await;

        let response = get(&app, "/api/reference/emergency?category=urgent").await;
        let body: Value = body_to_json(response.into_body()).await;
        let cards = body["cards"].as_array().unwrap();
        assert!(!cards.is_empty());
        assert!(cards.iter().all(|card| card["category"] == "urgent"));
    }

    #[tokio::test]
    async fn it_gets_a_single_card() {
        let (app, _dir) = test_app().await;

        let response = get(&app, "/api/reference/emergency/2").await;
        assert_eq!(response.status(), StatusCode::OK);
        let card: Value = body_to_json(response.into_body()).await;
        assert_eq!(card["title"], "Choking");

        let response = get(&app, "/api/reference/emergency/404").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn it_filters_articles() {
        let (app, _dir) = test_app().await;

        let response = get(&app, "/api/reference/articles?category=Nutrition").await;
        let body: Value = body_to_json(response.into_body()).await;
        assert_eq!(body["articles"].as_array().unwrap().len(), 2);
        assert_eq!(body["categories"][0], "All");

        let response = get(&app, "/api/reference/articles?category=All").await;
        let body: Value = body_to_json(response.into_body()).await;
        assert_eq!(body["articles"].as_array().unwrap().len(), 8);
    }

    #[tokio::test]
    async fn it_narrows_nutrition_to_age() {
        let (app, _dir) = test_app().await;

        let response = get(&app, "/api/reference/nutrition").await;
        let body: Value = body_to_json(response.into_body()).await;
        assert!(body["age_category"].is_null());
        assert_eq!(body["meal_suggestions"].as_array().unwrap().len(), 4);
        assert_eq!(body["feeding_schedule"].as_array().unwrap().len(), 5);

        let response = get(&app, "/api/reference/nutrition?birth_date=2000-01-01").await;
        let body: Value = body_to_json(response.into_body()).await;
        assert_eq!(body["age_category"], "12-24months");
        assert_eq!(body["meal_suggestions"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn it_gets_the_affirmation_for_a_date() {
        let (app, _dir) = test_app().await;

        let response = get(&app, "/api/reference/wellness?date=2025-01-15").await;
        let body: Value = body_to_json(response.into_body()).await;
        assert_eq!(body["affirmation"], "You are doing an amazing job as a parent.");
        assert_eq!(body["exercises"].as_array().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn it_places_a_measurement_on_the_chart() {
        let (app, _dir) = test_app().await;

        let response = get(
            &app,
            "/api/reference/growth/percentile?measure=weight&gender=male&month=0&value=3.3",
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = body_to_json(response.into_body()).await;
        assert_eq!(body["band"], "50th-85th");
    }

    #[tokio::test]
    async fn it_places_a_measurement_for_an_extreme_month() {
        let (app, _dir) = test_app().await;

        let response = get(
            &app,
            "/api/reference/growth/percentile?measure=weight&gender=male&month=-2147483648&value=3.0",
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = body_to_json(response.into_body()).await;
        assert_eq!(body["band"], "3rd-15th");
    }
}
