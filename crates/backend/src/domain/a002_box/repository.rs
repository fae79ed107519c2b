use contracts::domain::a001_storage::StorageId;
use contracts::domain::a002_box::BoxRecord;
use serde::{Deserialize, Serialize};

use sea_orm::entity::prelude::*;

use sea_orm::{ColumnTrait, DatabaseTransaction, EntityTrait, QueryFilter, QueryOrder, Set};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a002_box")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub number: String,
    pub storage_id: i64,
    pub level: i32,
    pub height: f64,
    pub width: f64,
    pub length: f64,
    pub area: f64,
    pub price: f64,
    pub is_occupied: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for BoxRecord {
    fn from(m: Model) -> Self {
        BoxRecord {
            id: Some(m.id),
            level: m.level,
            number: m.number,
            area: m.area.into(),
            width: m.width.into(),
            length: m.length.into(),
            height: m.height.into(),
            price: m.price.into(),
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

/// Свободные боксы склада в порядке id
pub async fn list_free_by_storage(storage_id: StorageId) -> anyhow::Result<Vec<BoxRecord>> {
    let items = Entity::find()
        .filter(Column::StorageId.eq(storage_id.value()))
        .filter(Column::IsOccupied.eq(false))
        .order_by_asc(Column::Id)
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

/// Все боксы (для сводки по складам)
pub async fn list_all() -> anyhow::Result<Vec<Model>> {
    Ok(Entity::find().order_by_asc(Column::Id).all(conn()).await?)
}

pub async fn insert_txn(txn: &DatabaseTransaction, model: Model) -> anyhow::Result<i64> {
    let active = ActiveModel {
        number: Set(model.number),
        storage_id: Set(model.storage_id),
        level: Set(model.level),
        height: Set(model.height),
        width: Set(model.width),
        length: Set(model.length),
        area: Set(model.area),
        price: Set(model.price),
        is_occupied: Set(model.is_occupied),
        ..Default::default()
    };
    let inserted = active.insert(txn).await?;
    Ok(inserted.id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_into_record() {
        let model = Model {
            id: 11,
            number: "2-05".into(),
            storage_id: 2,
            level: 3,
            height: 2.5,
            width: 2.0,
            length: 4.0,
            area: 8.0,
            price: 5600.0,
            is_occupied: false,
        };
        let record: BoxRecord = model.into();
        assert_eq!(record.id, Some(11));
        assert_eq!(record.number, "2-05");
        assert_eq!(record.level, 3);
        assert_eq!(record.area.value(), 8.0);
        assert_eq!(record.price.to_string(), "5600");
    }
}
