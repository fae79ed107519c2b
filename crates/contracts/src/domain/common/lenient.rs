//! Lenient decoding for fields that backends serialize inconsistently:
//! decimal columns arrive as strings, unit numbers as text or integers.
//!
//! Numbers go through [`Numeric`]; text fields use
//! `#[serde(deserialize_with = "string_or_number")]`.

use serde::de::{self, Deserializer, Unexpected, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Число, принятое из JSON-числа или строки с числом ("1500.00").
///
/// Строковая запись сохраняется для отображения: `"1500.00"` выводится как
/// `1500.00`, а не `1500`. Сравнение и сериализация идут по значению.
#[derive(Debug, Clone, Default)]
pub struct Numeric {
    value: f64,
    text: Option<String>,
}

impl Numeric {
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Разобрать строку; `None` для нечисловых и бесконечных значений
    pub fn parse(text: &str) -> Option<Self> {
        let trimmed = text.trim();
        match trimmed.parse::<f64>() {
            Ok(value) if value.is_finite() => Some(Self {
                value,
                text: Some(trimmed.to_string()),
            }),
            _ => None,
        }
    }
}

impl From<f64> for Numeric {
    fn from(value: f64) -> Self {
        Self { value, text: None }
    }
}

impl PartialEq for Numeric {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl fmt::Display for Numeric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.text {
            Some(text) => f.write_str(text),
            None => write!(f, "{}", self.value),
        }
    }
}

impl Serialize for Numeric {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.value)
    }
}

impl<'de> Deserialize<'de> for Numeric {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct NumericVisitor;

        impl<'de> Visitor<'de> for NumericVisitor {
            type Value = Numeric;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a number or a numeric string")
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<Numeric, E> {
                Ok(Numeric::from(v))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Numeric, E> {
                Ok(Numeric::from(v as f64))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Numeric, E> {
                Ok(Numeric::from(v as f64))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Numeric, E> {
                Numeric::parse(v).ok_or_else(|| E::invalid_value(Unexpected::Str(v), &self))
            }
        }

        deserializer.deserialize_any(NumericVisitor)
    }
}

/// Текст из JSON-строки или числа (номер бокса "A-12" или 12)
pub fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    struct TextVisitor;

    impl<'de> Visitor<'de> for TextVisitor {
        type Value = String;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a string or a number")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_string<E: de::Error>(self, v: String) -> Result<String, E> {
            Ok(v)
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<String, E> {
            Ok(v.to_string())
        }
    }

    deserializer.deserialize_any(TextVisitor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Sample {
        amount: Numeric,
        #[serde(deserialize_with = "string_or_number")]
        label: String,
    }

    #[test]
    fn test_numbers_and_strings_are_accepted() {
        let s: Sample = serde_json::from_str(r#"{"amount": "2.5", "label": 12}"#).unwrap();
        assert_eq!(s.amount.value(), 2.5);
        assert_eq!(s.label, "12");

        let s: Sample = serde_json::from_str(r#"{"amount": 7, "label": "B-7"}"#).unwrap();
        assert_eq!(s.amount.value(), 7.0);
        assert_eq!(s.label, "B-7");
    }

    #[test]
    fn test_decimal_string_keeps_its_text() {
        let s: Sample = serde_json::from_str(r#"{"amount": " 1500.00 ", "label": "x"}"#).unwrap();
        assert_eq!(s.amount.to_string(), "1500.00");
        assert_eq!(s.amount, Numeric::from(1500.0));

        let s: Sample = serde_json::from_str(r#"{"amount": 2.0, "label": "x"}"#).unwrap();
        assert_eq!(s.amount.to_string(), "2");
    }

    #[test]
    fn test_serializes_as_number() {
        let n = Numeric::parse("4500.00").unwrap();
        assert_eq!(serde_json::to_string(&n).unwrap(), "4500.0");
    }

    #[test]
    fn test_garbage_is_rejected() {
        assert!(serde_json::from_str::<Sample>(r#"{"amount": "abc", "label": "x"}"#).is_err());
        assert!(serde_json::from_str::<Sample>(r#"{"amount": "NaN", "label": "x"}"#).is_err());
        assert!(serde_json::from_str::<Sample>(r#"{"amount": null, "label": "x"}"#).is_err());
    }
}
