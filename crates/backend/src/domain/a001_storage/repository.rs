use contracts::domain::a001_storage::{Storage, StorageId};
use serde::{Deserialize, Serialize};

use sea_orm::entity::prelude::*;

use sea_orm::{DatabaseTransaction, EntityTrait, PaginatorTrait, QueryOrder, Set};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a001_storage")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub city: String,
    pub address: String,
    pub temperature: f64,
    pub contact: String,
    pub description: String,
    pub directions: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Storage {
    fn from(m: Model) -> Self {
        Storage {
            id: StorageId(m.id),
            city: m.city,
            address: m.address,
            temperature: m.temperature,
            contact: m.contact,
            description: m.description,
            directions: m.directions,
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

pub async fn list_all() -> anyhow::Result<Vec<Storage>> {
    let items = Entity::find()
        .order_by_asc(Column::Id)
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn count() -> anyhow::Result<u64> {
    Ok(Entity::find().count(conn()).await?)
}

/// Вставка склада в транзакции; id назначает БД
pub async fn insert_txn(txn: &DatabaseTransaction, storage: &Storage) -> anyhow::Result<StorageId> {
    let active = ActiveModel {
        city: Set(storage.city.clone()),
        address: Set(storage.address.clone()),
        temperature: Set(storage.temperature),
        contact: Set(storage.contact.clone()),
        description: Set(storage.description.clone()),
        directions: Set(storage.directions.clone()),
        ..Default::default()
    };
    let model = active.insert(txn).await?;
    Ok(StorageId(model.id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_into_storage() {
        let model = Model {
            id: 3,
            city: "Одинцово".into(),
            address: "ул. Серверная, д. 36".into(),
            temperature: 18.0,
            contact: "+7 999 000-00-00".into(),
            description: String::new(),
            directions: "5 минут от станции".into(),
        };
        let storage: Storage = model.into();
        assert_eq!(storage.id, StorageId(3));
        assert_eq!(storage.title(), "Одинцово, ул. Серверная, д. 36");
        assert_eq!(storage.directions, "5 минут от станции");
    }
}
