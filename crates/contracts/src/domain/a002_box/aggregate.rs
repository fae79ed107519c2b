use crate::domain::common::lenient::{string_or_number, Numeric};
use serde::{Deserialize, Serialize};

/// Бокс (складская ячейка), как его отдаёт `/get_boxes/{storage_id}/`
///
/// Для фронтенда запись только для чтения: порядок и значения полей
/// сохраняются как пришли с бэкенда, числа выводятся в исходной записи.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Этаж
    pub level: i32,
    /// Номер бокса
    #[serde(deserialize_with = "string_or_number")]
    pub number: String,
    /// Площадь, м²
    pub area: Numeric,
    pub width: Numeric,
    pub length: Numeric,
    pub height: Numeric,
    /// Цена за месяц
    pub price: Numeric,
}

impl BoxRecord {
    /// Площадь по габаритам: ширина × длина, с точностью до 0.1 м²
    pub fn area_from_dimensions(width: f64, length: f64) -> f64 {
        (width * length * 10.0).round() / 10.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_backend_payload() {
        let json = r#"{
            "id": 7, "number": "A-101", "area": 2.5, "price": 1900,
            "level": 1, "length": 2.5, "width": 1.0, "height": 2.2
        }"#;
        let record: BoxRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, Some(7));
        assert_eq!(record.number, "A-101");
        assert_eq!(record.area.value(), 2.5);
        assert_eq!(record.price.value(), 1900.0);
    }

    #[test]
    fn test_decode_decimal_strings() {
        // DecimalField-колонки часто сериализуются строками
        let json = r#"{
            "number": 12, "area": "10.0", "price": "4500.00",
            "level": 3, "length": 4, "width": 2.5, "height": 3
        }"#;
        let record: BoxRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, None);
        assert_eq!(record.number, "12");
        assert_eq!(record.area.value(), 10.0);
        assert_eq!(record.price.to_string(), "4500.00");
    }

    #[test]
    fn test_missing_field_fails() {
        let json = r#"{"number": "1", "area": 2, "level": 1, "length": 1, "width": 2, "height": 2}"#;
        assert!(serde_json::from_str::<BoxRecord>(json).is_err());
    }

    #[test]
    fn test_area_from_dimensions() {
        assert_eq!(BoxRecord::area_from_dimensions(1.5, 2.0), 3.0);
        assert_eq!(BoxRecord::area_from_dimensions(1.3, 1.7), 2.2);
        assert_eq!(BoxRecord::area_from_dimensions(3.33, 3.0), 10.0);
    }
}
