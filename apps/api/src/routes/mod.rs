pub mod health;

use axum::{
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::errors::AppError;
use crate::matching::handlers;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {uri}"))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Matching API
        .route("/api/v1/match/score", post(handlers::handle_score))
        .route("/api/v1/match/rank", post(handlers::handle_rank))
        .fallback(not_found)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::config::Config;

    fn app() -> Router {
        build_router(AppState::new(Config::default()))
    }

    async fn post_json(uri: &str, body: Value) -> (StatusCode, Value) {
        let response = app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn analyst_candidate() -> Value {
        json!({
            "aiProfile": {
                "skills": ["SQL", "Python"],
                "experience": [{}, {}, {}, {}, {}, {}],
                "workStyle": "remote",
                "careerGoals": "data analysis"
            }
        })
    }

    #[tokio::test]
    async fn test_health_ok() {
        let response = app()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "jobmatch-api");
    }

    #[tokio::test]
    async fn test_score_endpoint_end_to_end() {
        let (status, body) = post_json(
            "/api/v1/match/score",
            json!({
                "candidate": analyst_candidate(),
                "job": {
                    "id": "job-1",
                    "title": "Data Analyst",
                    "skills": ["SQL"],
                    "experienceLevel": "Senior",
                    "employmentType": "Remote",
                    "description": "Seeking a data analyst..."
                }
            }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["score"], 100);
        assert_eq!(body["strength"], "strong");
        assert_eq!(body["badge"], "Strong match");
        assert_eq!(body["breakdown"]["skills"], 40.0);
        assert_eq!(body["breakdown"]["matched_skills"], json!(["SQL"]));
        assert_eq!(body["scorer_backend"], "heuristic");
    }

    #[tokio::test]
    async fn test_score_endpoint_without_profile_is_neutral() {
        let (status, body) = post_json(
            "/api/v1/match/score",
            json!({ "candidate": { "aiProfile": null }, "job": { "title": "Welder" } }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["score"], 50);
        assert_eq!(body["strength"], "unbadged");
        assert_eq!(body["badge"], Value::Null);
        assert_eq!(body["breakdown"]["profile_present"], false);
    }

    #[tokio::test]
    async fn test_rank_endpoint_orders_and_filters() {
        let (status, body) = post_json(
            "/api/v1/match/rank",
            json!({
                "candidate": analyst_candidate(),
                "min_score": 60,
                "jobs": [
                    { "id": 1, "title": "Welder", "skills": ["Welding"], "experienceLevel": "Senior", "employmentType": "Remote" },
                    { "id": 2, "title": "Analyst", "skills": ["SQL"], "experienceLevel": "Senior", "employmentType": "Remote" },
                    { "id": 3, "title": "Engineer", "skills": ["Python", "Rust"], "experienceLevel": "Senior", "employmentType": "Remote" }
                ]
            }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total_considered"], 3);
        assert_eq!(body["total_matched"], 2);
        let results = body["results"].as_array().unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0]["job"]["id"], 2);
        assert_eq!(results[0]["score"], 90);
        assert_eq!(results[1]["job"]["id"], 3);
        assert_eq!(results[1]["badge"], "Good match");
    }

    #[tokio::test]
    async fn test_rank_endpoint_rejects_bad_min_score() {
        let (status, body) = post_json(
            "/api/v1/match/rank",
            json!({ "jobs": [], "min_score": 101 }),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_unknown_route_is_not_found() {
        let response = app()
            .oneshot(Request::builder().uri("/api/v1/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
