//! Route configuration for ranking and calculation history endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{
    delete_calculation, get_calculation, health, list_calculations, rank_with_body_method,
    rank_with_path_method, save_calculation, CalculationAppState,
};

/// Creates the calculation router with all routes.
pub fn calculation_routes(state: CalculationAppState) -> Router {
    Router::new()
        // POST /api/calculate
        .route("/api/calculate", post(rank_with_body_method))
        // POST /api/calculate/:method
        .route("/api/calculate/:method", post(rank_with_path_method))
        // POST/GET /api/calculations
        .route(
            "/api/calculations",
            post(save_calculation).get(list_calculations),
        )
        // GET/DELETE /api/calculations/:id
        .route(
            "/api/calculations/:id",
            get(get_calculation).delete(delete_calculation),
        )
        .with_state(state)
}

/// Liveness route, mounted outside the API prefix.
pub fn health_routes() -> Router {
    Router::new().route("/health", get(health))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryCalculationRepository;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app() -> Router {
        let repository = Arc::new(InMemoryCalculationRepository::new(10));
        calculation_routes(CalculationAppState::new(repository, 10)).merge(health_routes())
    }

    fn post_json(uri: &str, body: Value, user: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json");
        if let Some(user) = user {
            builder = builder.header("x-user-id", user);
        }
        builder.body(Body::from(body.to_string())).unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn laptop_body() -> Value {
        json!({
            "criteria": [
                {"name": "Price", "type": "Cost", "weight": 0.5},
                {"name": "Quality", "type": "Benefit", "weight": 0.5}
            ],
            "alternatives": [
                {"name": "A", "values": [100.0, 8.0]},
                {"name": "B", "values": [200.0, 10.0]}
            ]
        })
    }

    #[tokio::test]
    async fn health_returns_ok() {
        let response = app()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!({"status": "ok"}));
    }

    #[tokio::test]
    async fn path_method_ranks_without_identity() {
        let response = app()
            .oneshot(post_json("/api/calculate/saw", laptop_body(), None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!([
                {"name": "A", "score": 0.9, "rank": 1},
                {"name": "B", "score": 0.75, "rank": 2}
            ])
        );
    }

    #[tokio::test]
    async fn body_method_ranks() {
        let mut body = laptop_body();
        body["method"] = json!("WP");

        let response = app()
            .oneshot(post_json("/api/calculate", body, None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let results = body_json(response).await;
        assert_eq!(results.as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn unknown_method_is_400() {
        let response = app()
            .oneshot(post_json("/api/calculate/ahp", laptop_body(), None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["code"], "UNKNOWN_METHOD");
    }

    #[tokio::test]
    async fn dimension_mismatch_is_422() {
        let mut body = laptop_body();
        body["alternatives"][1]["values"] = json!([200.0]);

        let response = app()
            .oneshot(post_json("/api/calculate/topsis", body, None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body_json(response).await["code"], "DIMENSION_MISMATCH");
    }

    #[tokio::test]
    async fn saving_requires_identity() {
        let mut body = laptop_body();
        body["method"] = json!("SAW");

        let response = app()
            .oneshot(post_json("/api/calculations", body, None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn saved_calculation_can_be_fetched_by_owner_only() {
        let app = app();
        let mut body = laptop_body();
        body["method"] = json!("SAW");

        let response = app
            .clone()
            .oneshot(post_json("/api/calculations", body, Some("user-1")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let saved = body_json(response).await;
        assert_eq!(saved["best_alternative"], "A");
        let uri = format!("/api/calculations/{}", saved["id"].as_str().unwrap());

        let owner = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri(&uri)
                    .header("x-user-id", "user-1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(owner.status(), StatusCode::OK);

        let stranger = app
            .oneshot(
                Request::builder()
                    .uri(&uri)
                    .header("x-user-id", "user-2")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(stranger.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn malformed_id_is_400() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/api/calculations/abc")
                    .header("x-user-id", "user-1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
