use crate::shared::api_utils::{decode_json, get_text, FetchFailure};
use contracts::domain::a001_storage::StorageId;
use contracts::domain::a002_box::{BoxRecord, GetBoxesResponse};

/// Путь списка свободных боксов склада
pub fn boxes_path(storage_id: StorageId) -> String {
    format!("/get_boxes/{}/", storage_id)
}

/// Получить свободные боксы склада
pub async fn fetch_boxes(storage_id: StorageId) -> Result<Vec<BoxRecord>, FetchFailure> {
    let body = get_text(&boxes_path(storage_id)).await?;
    decode_boxes(&body)
}

/// Разобрать тело ответа `/get_boxes/`
pub fn decode_boxes(body: &str) -> Result<Vec<BoxRecord>, FetchFailure> {
    decode_json::<GetBoxesResponse>(body).map(|r| r.boxes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boxes_path() {
        assert_eq!(boxes_path(StorageId(3)), "/get_boxes/3/");
    }

    #[test]
    fn test_decode_boxes() {
        let body = r#"{"boxes": [
            {"id": 1, "number": "A1", "area": "2.0", "price": "1500.00",
             "level": 1, "length": 2, "width": 1, "height": 2.5},
            {"id": 2, "number": 7, "area": 12.5, "price": 9000,
             "level": 2, "length": 5, "width": 2.5, "height": 3}
        ]}"#;
        let boxes = decode_boxes(body).unwrap();
        assert_eq!(boxes.len(), 2);
        assert_eq!(boxes[0].area.value(), 2.0);
        assert_eq!(boxes[0].price.to_string(), "1500.00");
        assert_eq!(boxes[1].number, "7");
    }

    #[test]
    fn test_decode_boxes_without_field() {
        assert!(matches!(
            decode_boxes(r#"{"items": []}"#),
            Err(FetchFailure::Decode(_))
        ));
        assert_eq!(decode_boxes(r#"{"boxes": []}"#), Ok(vec![]));
    }
}
