use serde::{de::DeserializeOwned, Serialize};
use std::hash::Hash;

/// Трейт для типов идентификаторов агрегатов
pub trait AggregateId:
    Clone + Copy + PartialEq + Eq + Hash + Serialize + DeserializeOwned + std::fmt::Debug
{
    /// Преобразовать ID в строку (для URL и логов)
    fn as_string(&self) -> String;

    /// Создать ID из строки (параметр пути, query-string)
    fn from_string(s: &str) -> Result<Self, String>;
}
