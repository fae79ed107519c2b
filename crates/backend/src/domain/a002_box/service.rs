use super::repository::{self, Model};
use sea_orm::DatabaseTransaction;
use contracts::domain::a001_storage::StorageId;
use contracts::domain::a002_box::BoxRecord;

/// Данные для создания бокса; площадь считается по габаритам
#[derive(Debug, Clone)]
pub struct NewBox {
    pub storage_id: StorageId,
    pub number: String,
    pub level: i32,
    pub width: f64,
    pub length: f64,
    pub height: f64,
    pub price: f64,
    pub is_occupied: bool,
}

impl NewBox {
    pub fn validate(&self) -> Result<(), String> {
        if self.number.trim().is_empty() {
            return Err("Номер бокса не заполнен".into());
        }
        if [self.width, self.length, self.height]
            .iter()
            .any(|d| !d.is_finite() || *d <= 0.0)
        {
            return Err(format!("Некорректные габариты бокса {}", self.number));
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(format!("Некорректная цена бокса {}", self.number));
        }
        Ok(())
    }

    fn into_model(self) -> Model {
        Model {
            id: 0,
            area: BoxRecord::area_from_dimensions(self.width, self.length),
            number: self.number,
            storage_id: self.storage_id.value(),
            level: self.level,
            height: self.height,
            width: self.width,
            length: self.length,
            price: self.price,
            is_occupied: self.is_occupied,
        }
    }
}

/// Создание бокса в транзакции
pub async fn create(txn: &DatabaseTransaction, new_box: NewBox) -> anyhow::Result<i64> {
    // Валидация
    new_box
        .validate()
        .map_err(|e| anyhow::anyhow!("Validation failed: {}", e))?;

    repository::insert_txn(txn, new_box.into_model()).await
}

/// Свободные боксы склада
pub async fn list_free(storage_id: StorageId) -> anyhow::Result<Vec<BoxRecord>> {
    repository::list_free_by_storage(storage_id).await
}
