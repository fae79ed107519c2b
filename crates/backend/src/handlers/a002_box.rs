use axum::{extract::Path, http::StatusCode, Json};
use contracts::domain::a001_storage::StorageId;
use contracts::domain::a002_box::GetBoxesResponse;
use contracts::domain::common::AggregateId;

use crate::domain::a002_box;

/// GET /get_boxes/:storage_id/
///
/// Свободные боксы склада. Неизвестный склад даёт пустой список.
pub async fn get_boxes(Path(storage_id): Path<String>) -> Result<Json<GetBoxesResponse>, StatusCode> {
    let storage_id = match StorageId::from_string(&storage_id) {
        Ok(id) => id,
        Err(e) => {
            tracing::warn!("{}", e);
            return Err(StatusCode::BAD_REQUEST);
        }
    };

    match a002_box::service::list_free(storage_id).await {
        Ok(boxes) => Ok(Json(GetBoxesResponse { boxes })),
        Err(e) => {
            tracing::error!("Failed to load boxes of storage {}: {}", storage_id, e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
