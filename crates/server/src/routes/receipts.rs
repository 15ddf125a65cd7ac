//! Receipt route handlers.
//!
//! Receipts are scored as they arrive and only the points are kept. The
//! submitted receipt itself is dropped once the handler returns.

use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use receipt_points_core::{Points, Receipt, ReceiptId, scoring};

use crate::error::{AppError, Result};
use crate::state::AppState;

/// Response body for a processed receipt.
#[derive(Debug, Serialize, Deserialize)]
pub struct ProcessReceiptResponse {
    pub id: ReceiptId,
}

/// Response body for a points lookup.
#[derive(Debug, Serialize, Deserialize)]
pub struct PointsResponse {
    pub points: Points,
}

/// Score a receipt and store its points under a new ID.
///
/// The body is decoded as JSON whatever its `Content-Type`. A body that is
/// not a receipt is rejected with 400 and the decoder's message.
#[instrument(skip(state, body), fields(body_len = body.len()))]
pub async fn process(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ProcessReceiptResponse>> {
    let receipt: Receipt = serde_json::from_slice(&body).map_err(|e| {
        tracing::debug!(error = %e, "Rejected undecodable receipt");
        AppError::Decode(e.to_string())
    })?;

    let breakdown = scoring::breakdown(&receipt);
    tracing::debug!(?breakdown, retailer = %receipt.retailer, "Scored receipt");

    let points = breakdown.total();
    let id = state.store().create(points).await?;

    tracing::info!(%id, points, "Processed receipt");

    Ok(Json(ProcessReceiptResponse { id }))
}

/// Look up the points stored for a receipt.
///
/// An ID that is not even a well-formed receipt ID is reported the same way
/// as an unknown one.
#[instrument(skip(state))]
pub async fn points(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PointsResponse>> {
    let Ok(receipt_id) = id.parse::<ReceiptId>() else {
        tracing::debug!("Malformed receipt ID");
        return Err(AppError::ReceiptNotFound);
    };

    let points = state
        .store()
        .lookup(&receipt_id)
        .await?
        .ok_or(AppError::ReceiptNotFound)?;

    Ok(Json(PointsResponse { points }))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::{
        Router,
        body::Body,
        http::{Method, Request, StatusCode, header::CONTENT_TYPE},
        response::Response,
    };
    use receipt_points_core::{Item, score};
    use tower::ServiceExt;

    use super::*;
    use crate::config::ServerConfig;
    use crate::error::RECEIPT_NOT_FOUND;
    use crate::routes::routes;
    use crate::store::{ReceiptStore, StoreError};

    const TARGET_RECEIPT: &str = r#"{
        "retailer": "Target",
        "purchaseDate": "2022-01-01",
        "purchaseTime": "13:01",
        "items": [
            {"shortDescription": "Mountain Dew 12PK", "price": "6.49"},
            {"shortDescription": "Emils Cheese Pizza", "price": "12.25"},
            {"shortDescription": "Knorr Creamy Chicken", "price": "1.26"},
            {"shortDescription": "Doritos Nacho Cheese", "price": "3.35"},
            {"shortDescription": "   Klarbrunn 12-PK 12 FL OZ  ", "price": "12.00"}
        ],
        "total": "35.35"
    }"#;

    fn app() -> Router {
        routes().with_state(AppState::in_memory(ServerConfig::default()))
    }

    async fn post_receipt(app: &Router, body: &str) -> Response {
        app.clone()
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/receipts/process")
                    .header(CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    async fn get_points(app: &Router, id: &str) -> Response {
        app.clone()
            .oneshot(
                Request::builder()
                    .uri(format!("/receipts/{id}/points"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    async fn body_bytes(response: Response) -> Bytes {
        axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_process_returns_an_id() {
        let app = app();
        let response = post_receipt(&app, TARGET_RECEIPT).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body: ProcessReceiptResponse =
            serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert!(!body.id.to_string().is_empty());
    }

    #[tokio::test]
    async fn test_process_then_get_points() {
        let app = app();
        let response = post_receipt(&app, TARGET_RECEIPT).await;
        let created: ProcessReceiptResponse =
            serde_json::from_slice(&body_bytes(response).await).unwrap();

        let response = get_points(&app, &created.id.to_string()).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body: PointsResponse = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(body.points, 28);
    }

    #[tokio::test]
    async fn test_stored_points_match_scoring() {
        let receipt = Receipt {
            retailer: "M&M Corner Market".to_string(),
            purchase_date: "2022-03-20".to_string(),
            purchase_time: "14:33".to_string(),
            items: vec![Item::new("Gatorade", "2.25"); 4],
            total: "9.00".to_string(),
        };

        let app = app();
        let response = post_receipt(&app, &serde_json::to_string(&receipt).unwrap()).await;
        let created: ProcessReceiptResponse =
            serde_json::from_slice(&body_bytes(response).await).unwrap();

        let response = get_points(&app, &created.id.to_string()).await;
        let body: PointsResponse = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(body.points, score(&receipt));
    }

    #[tokio::test]
    async fn test_process_without_content_type() {
        let response = app()
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/receipts/process")
                    .body(Body::from(TARGET_RECEIPT))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_process_malformed_json_is_bad_request() {
        let response = post_receipt(&app(), "{\"retailer\": ").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = String::from_utf8(body_bytes(response).await.to_vec()).unwrap();
        assert!(body.contains("EOF while parsing"), "unexpected body: {body}");
    }

    #[tokio::test]
    async fn test_process_empty_body_is_bad_request() {
        let response = post_receipt(&app(), "").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_process_accepts_null_fields() {
        let app = app();
        let response = post_receipt(
            &app,
            r#"{"retailer": "Target", "items": null, "total": null}"#,
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);

        let created: ProcessReceiptResponse =
            serde_json::from_slice(&body_bytes(response).await).unwrap();
        let response = get_points(&app, &created.id.to_string()).await;
        let body: PointsResponse = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(body.points, 6);
    }

    #[tokio::test]
    async fn test_process_wrong_field_type_is_bad_request() {
        let response = post_receipt(&app(), r#"{"total": 35.35}"#).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = String::from_utf8(body_bytes(response).await.to_vec()).unwrap();
        assert!(body.contains("invalid type"), "unexpected body: {body}");
    }

    #[tokio::test]
    async fn test_unknown_id_is_not_found() {
        let app = app();

        let response = get_points(&app, "invalid-id").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = String::from_utf8(body_bytes(response).await.to_vec()).unwrap();
        assert_eq!(body, RECEIPT_NOT_FOUND);

        let response = get_points(&app, &ReceiptId::new().to_string()).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_wrong_method_is_rejected() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/receipts/process")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    struct UnavailableStore;

    #[async_trait]
    impl ReceiptStore for UnavailableStore {
        async fn create(&self, _points: Points) -> std::result::Result<ReceiptId, StoreError> {
            Err(StoreError::Unavailable("offline".to_string()))
        }

        async fn lookup(
            &self,
            _id: &ReceiptId,
        ) -> std::result::Result<Option<Points>, StoreError> {
            Err(StoreError::Unavailable("offline".to_string()))
        }
    }

    #[tokio::test]
    async fn test_store_failure_is_internal_error() {
        let app = routes().with_state(AppState::new(
            ServerConfig::default(),
            Arc::new(UnavailableStore),
        ));

        let response = post_receipt(&app, TARGET_RECEIPT).await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let response = get_points(&app, &ReceiptId::new().to_string()).await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
