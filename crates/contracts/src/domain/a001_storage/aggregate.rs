use crate::domain::common::AggregateId;
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// ID Type
// ============================================================================

/// Идентификатор склада (целочисленный ключ из БД)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StorageId(pub i64);

impl StorageId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for StorageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AggregateId for StorageId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        s.trim()
            .parse::<i64>()
            .map(StorageId::new)
            .map_err(|e| format!("Invalid storage id '{}': {}", s, e))
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// Склад с боксами
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Storage {
    pub id: StorageId,
    pub city: String,
    pub address: String,
    /// Температура внутри склада, °C
    pub temperature: f64,
    #[serde(default)]
    pub contact: String,
    #[serde(default)]
    pub description: String,
    /// Как добраться
    #[serde(default)]
    pub directions: String,
}

impl Storage {
    /// "Город, адрес" для заголовков карточек
    pub fn title(&self) -> String {
        format!("{}, {}", self.city, self.address)
    }
}

/// Склад со сводкой по боксам (для списка складов)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageSummary {
    #[serde(flatten)]
    pub storage: Storage,
    pub total_boxes: u64,
    pub free_boxes: u64,
    /// Минимальная цена среди всех боксов склада
    pub min_price: Option<f64>,
    /// Максимальная высота бокса
    pub max_height: Option<f64>,
}
