use super::repository;
use crate::domain::a002_box::repository::{self as box_repository, Model as BoxModel};
use crate::domain::a002_box::service::{self as box_service, NewBox};
use crate::shared::data::db::get_connection;
use contracts::domain::a001_storage::{Storage, StorageId, StorageSummary};
use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};
use std::collections::HashMap;

/// Сводка по боксам склада: всего, свободно, минимальная цена, максимальная высота
pub fn summarize(storage: Storage, boxes: &[&BoxModel]) -> StorageSummary {
    let free_boxes = boxes.iter().filter(|b| !b.is_occupied).count() as u64;
    let min_price = boxes.iter().map(|b| b.price).reduce(f64::min);
    let max_height = boxes.iter().map(|b| b.height).reduce(f64::max);

    StorageSummary {
        storage,
        total_boxes: boxes.len() as u64,
        free_boxes,
        min_price,
        max_height,
    }
}

/// Список складов со сводкой
pub async fn list_with_summary() -> anyhow::Result<Vec<StorageSummary>> {
    let storages = repository::list_all().await?;
    let boxes = box_repository::list_all().await?;

    let mut by_storage: HashMap<i64, Vec<&BoxModel>> = HashMap::new();
    for b in &boxes {
        by_storage.entry(b.storage_id).or_default().push(b);
    }

    Ok(storages
        .into_iter()
        .map(|storage| {
            let own = by_storage
                .get(&storage.id.value())
                .map(Vec::as_slice)
                .unwrap_or_default();
            summarize(storage, own)
        })
        .collect())
}

/// Шаблоны боксов для демо-данных: (ширина, длина, высота, этаж)
const BOX_TEMPLATES: &[(f64, f64, f64, i32)] = &[
    (1.0, 1.5, 2.0, 1),
    (1.5, 2.0, 2.2, 1),
    (1.0, 3.0, 2.2, 1),
    (2.0, 2.5, 2.5, 2),
    (2.0, 4.0, 2.5, 2),
    (2.5, 4.0, 3.0, 2),
    (3.0, 4.0, 3.0, 3),
    (3.5, 4.0, 3.5, 3),
    (4.0, 5.0, 3.5, 3),
];

/// Цена за м² в месяц для демо-данных
const PRICE_PER_SQ_M: f64 = 700.0;

fn demo_storages() -> Vec<Storage> {
    [
        ("Москва", "ул. Рокотова, д. 15", 17.5),
        ("Одинцово", "ул. Серверная, д. 36", 18.0),
        ("Пушкино", "ул. Строителей, д. 5", 20.0),
        ("Люберцы", "ул. Советская, д. 88", 18.0),
        ("Домодедово", "ул. Орджоникидзе, д. 29", 21.0),
    ]
    .into_iter()
    .map(|(city, address, temperature)| Storage {
        id: StorageId(0),
        city: city.to_string(),
        address: address.to_string(),
        temperature,
        contact: "8 (800) 000-00-00".to_string(),
        description: String::new(),
        directions: String::new(),
    })
    .collect()
}

/// Боксы демо-склада; каждый четвёртый занят. Склад назначается при вставке.
fn demo_boxes(storage_no: usize) -> Vec<NewBox> {
    BOX_TEMPLATES
        .iter()
        .enumerate()
        .map(|(i, &(width, length, height, level))| NewBox {
            storage_id: StorageId(0),
            number: format!("{}-{:02}", storage_no, i + 1),
            level,
            width,
            length,
            height,
            price: (width * length * PRICE_PER_SQ_M).round(),
            is_occupied: (i + storage_no) % 4 == 0,
        })
        .collect()
}

fn demo_plan() -> Vec<(Storage, Vec<NewBox>)> {
    demo_storages()
        .into_iter()
        .enumerate()
        .map(|(i, storage)| (storage, demo_boxes(i + 1)))
        .collect()
}

/// Вставить склады с боксами одной транзакцией
async fn seed(db: &DatabaseConnection, plan: Vec<(Storage, Vec<NewBox>)>) -> anyhow::Result<()> {
    let txn = db.begin().await?;
    match seed_txn(&txn, plan).await {
        Ok(()) => {
            txn.commit().await?;
            Ok(())
        }
        Err(e) => {
            txn.rollback().await?;
            Err(e)
        }
    }
}

async fn seed_txn(txn: &DatabaseTransaction, plan: Vec<(Storage, Vec<NewBox>)>) -> anyhow::Result<()> {
    for (storage, boxes) in plan {
        let storage_id = repository::insert_txn(txn, &storage).await?;
        for new_box in boxes {
            box_service::create(txn, NewBox { storage_id, ..new_box }).await?;
        }
        tracing::info!("Test storage created: {} (id {})", storage.title(), storage_id);
    }
    Ok(())
}

/// Вставка тестовых данных; `false`, если склады уже есть
pub async fn insert_test_data() -> anyhow::Result<bool> {
    if repository::count().await? > 0 {
        return Ok(false);
    }

    seed(get_connection(), demo_plan()).await?;
    Ok(true)
}
