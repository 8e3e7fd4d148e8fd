pub mod health;

use anyhow::{Context, Result};
use axum::{
    http::{HeaderValue, Uri},
    routing::{get, post},
    Router,
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::dashboard;
use crate::errors::AppError;
use crate::jobs::handlers as jobs;
use crate::matching::handlers as matching;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Match API
        .route("/api/v1/match", post(matching::handle_match))
        .route("/api/v1/match/parse", post(matching::handle_parse_reply))
        // Jobs API
        .route("/api/v1/countries", get(jobs::handle_list_countries))
        .route("/api/v1/jobs/categories", get(jobs::handle_get_categories))
        .route("/api/v1/jobs/feed", post(jobs::handle_feed))
        // Dashboard
        .route("/api/v1/dashboard", get(dashboard::handle_dashboard))
        .fallback(not_found)
        .with_state(state)
}

/// Permissive when no origins are configured, otherwise restricted to the list.
pub fn cors_layer(origins: &[String]) -> Result<CorsLayer> {
    if origins.is_empty() {
        return Ok(CorsLayer::permissive());
    }

    let origins = origins
        .iter()
        .map(|o| {
            o.parse::<HeaderValue>()
                .with_context(|| format!("Invalid CORS origin '{o}'"))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::config::{Config, JobBoardConfig, LlmConfig};
    use crate::jobs::client::JobBoardClient;
    use crate::matching::matcher::JobMatcher;
    use crate::matching::models::{JobMatchResponse, UserProfile};
    use crate::matching::response_parser::parse_match_response;

    /// Parses a canned reply that echoes the profile's skill count as the score.
    struct CannedMatcher;

    #[async_trait]
    impl JobMatcher for CannedMatcher {
        async fn analyze(
            &self,
            _job_description: &str,
            profile: &UserProfile,
        ) -> Result<JobMatchResponse, AppError> {
            let reply = format!(
                "Match score: {}\nSkill gaps:\n- Docker",
                profile.skills.len() * 10
            );
            Ok(parse_match_response(&reply))
        }
    }

    fn test_app() -> Router {
        let config = Config {
            llm: LlmConfig {
                api_key: "k".to_string(),
                base_url: "http://127.0.0.1:9".to_string(),
                is_dev: true,
            },
            job_board: JobBoardConfig {
                app_id: "id".to_string(),
                app_key: "key".to_string(),
                base_url: "http://127.0.0.1:9".to_string(),
            },
            is_dev: true,
            port: 0,
            rust_log: "debug".to_string(),
            cors_origins: Vec::new(),
        };
        let job_board = JobBoardClient::new(&config.job_board).unwrap();
        build_router(AppState {
            config,
            job_board,
            matcher: Arc::new(CannedMatcher),
        })
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = send(test_app(), get("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["environment"], "development");
    }

    #[tokio::test]
    async fn test_match_returns_camel_case_analysis() {
        let request = post_json(
            "/api/v1/match",
            serde_json::json!({
                "jobDescription": "Platform engineer",
                "userProfile": {"skills": ["Go", "Kubernetes", "AWS"], "experience": "4 years"}
            }),
        );
        let (status, body) = send(test_app(), request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["matchScore"], 30);
        assert_eq!(body["skillGaps"][0], "Docker");
        assert_eq!(body["localMarketInsights"]["demandLevel"], "medium");
    }

    #[tokio::test]
    async fn test_match_rejects_blank_description() {
        let request = post_json(
            "/api/v1/match",
            serde_json::json!({"job_description": "   ", "user_profile": {}}),
        );
        let (status, body) = send(test_app(), request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_parse_endpoint() {
        let request = post_json(
            "/api/v1/match/parse",
            serde_json::json!({"text": "Match score: 150\nRecommendations:\n- Learn Go\nSkill Gaps:\n- Networking"}),
        );
        let (status, body) = send(test_app(), request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["matchScore"], 100);
        assert_eq!(body["recommendations"], serde_json::json!(["Learn Go"]));
        assert_eq!(body["skillGaps"], serde_json::json!(["Networking"]));
    }

    #[tokio::test]
    async fn test_countries() {
        let (status, body) = send(test_app(), get("/api/v1/countries")).await;
        assert_eq!(status, StatusCode::OK);
        let countries = body.as_array().unwrap();
        assert_eq!(countries.len(), 4);
        let supported: Vec<&str> = countries
            .iter()
            .filter(|c| c["supported"] == true)
            .filter_map(|c| c["code"].as_str())
            .collect();
        assert_eq!(supported, vec!["za"]);
    }

    #[tokio::test]
    async fn test_categories_for_unsupported_country_are_empty() {
        let (status, body) = send(test_app(), get("/api/v1/jobs/categories?country=ke")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["results"], serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_feed_for_unsupported_country() {
        let request = post_json(
            "/api/v1/jobs/feed",
            serde_json::json!({"country": "ng", "what": "developer"}),
        );
        let (status, body) = send(test_app(), request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["supported"], false);
        assert_eq!(body["total_jobs"], 0);
        assert!(body["notice"].as_str().unwrap().contains("Nigeria"));
    }

    #[tokio::test]
    async fn test_dashboard() {
        let (status, body) = send(test_app(), get("/api/v1/dashboard?applied=10&rejected=0")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total_applications"], 17);
        assert_eq!(body["response_rate"], 41);
    }

    #[tokio::test]
    async fn test_dashboard_accepts_max_counts() {
        let (status, body) = send(test_app(), get("/api/v1/dashboard?applied=4294967295")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total_applications"], 4_294_967_305u64);
        assert_eq!(body["response_rate"], 0);
    }

    fn preflight(origin: &str) -> Request<Body> {
        Request::builder()
            .method("OPTIONS")
            .uri("/api/v1/match")
            .header("origin", origin)
            .header("access-control-request-method", "POST")
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn test_cors_allows_only_configured_origins() {
        let layer = cors_layer(&["https://smartjob.africa".to_string()]).unwrap();
        let app = test_app().layer(layer);

        let allowed = app
            .clone()
            .oneshot(preflight("https://smartjob.africa"))
            .await
            .unwrap();
        assert_eq!(
            allowed.headers()["access-control-allow-origin"],
            "https://smartjob.africa"
        );

        let denied = app.oneshot(preflight("https://evil.example")).await.unwrap();
        assert!(denied
            .headers()
            .get("access-control-allow-origin")
            .is_none());
    }

    #[tokio::test]
    async fn test_cors_without_origins_is_permissive() {
        let app = test_app().layer(cors_layer(&[]).unwrap());
        let response = app.oneshot(preflight("https://anywhere.example")).await.unwrap();
        assert_eq!(response.headers()["access-control-allow-origin"], "*");
    }

    #[test]
    fn test_cors_rejects_invalid_origin() {
        assert!(cors_layer(&["bad\norigin".to_string()]).is_err());
    }

    #[tokio::test]
    async fn test_unknown_route_is_json_404() {
        let (status, body) = send(test_app(), get("/api/v1/nope")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }
}
