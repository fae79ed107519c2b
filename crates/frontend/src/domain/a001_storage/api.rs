use crate::shared::api_utils::{get_json, FetchFailure};
use contracts::domain::a001_storage::StorageSummary;

/// Список складов со сводкой по боксам
pub async fn fetch_storages() -> Result<Vec<StorageSummary>, FetchFailure> {
    get_json("/api/storage").await
}
