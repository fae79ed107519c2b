use axum::{http::StatusCode, Json};
use contracts::domain::a001_storage::StorageSummary;

use crate::domain::a001_storage;

/// GET /api/storage
pub async fn list_all() -> Result<Json<Vec<StorageSummary>>, StatusCode> {
    match a001_storage::service::list_with_summary().await {
        Ok(v) => Ok(Json(v)),
        Err(e) => {
            tracing::error!("Failed to list storages: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// POST /api/storage/testdata
pub async fn insert_test_data() -> StatusCode {
    match a001_storage::service::insert_test_data().await {
        Ok(inserted) => {
            if !inserted {
                tracing::info!("Test data skipped: storages already exist");
            }
            StatusCode::OK
        }
        Err(e) => {
            tracing::error!("Failed to insert test data: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}
