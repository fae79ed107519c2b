use super::aggregate::BoxRecord;
use serde::{Deserialize, Serialize};

/// Ответ `GET /get_boxes/{storage_id}/`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetBoxesResponse {
    pub boxes: Vec<BoxRecord>,
}
