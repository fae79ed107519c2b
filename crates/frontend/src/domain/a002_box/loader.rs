use super::api;
use super::render::{render, ViewSink};
use crate::shared::api_utils::FetchFailure;
use contracts::domain::a001_storage::StorageId;
use contracts::domain::a002_box::BoxRecord;

/// Загрузить боксы склада и отрисовать вкладки.
///
/// Один запрос, без повторов и таймаутов. При ошибке вкладки не трогаются:
/// остаётся то, что было отрисовано раньше. Возвращает `true`, если
/// отрисовка состоялась.
pub async fn load_boxes<S: ViewSink>(storage_id: StorageId, mut sink: S) -> bool {
    log::debug!("load_boxes: storage {}", storage_id);
    let result = api::fetch_boxes(storage_id).await;
    apply_fetch_result(storage_id, result, &mut sink)
}

/// Отрисовать результат запроса или записать ошибку в лог
pub fn apply_fetch_result<S: ViewSink + ?Sized>(
    storage_id: StorageId,
    result: Result<Vec<BoxRecord>, FetchFailure>,
    sink: &mut S,
) -> bool {
    match result {
        Ok(boxes) => {
            log::info!("storage {}: {} free boxes", storage_id, boxes.len());
            render(&boxes, sink);
            true
        }
        Err(e) => {
            log::error!("Ошибка загрузки данных (склад {}): {}", storage_id, e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_box::testing::{boxes_with_areas, MemorySink};
    use contracts::domain::a002_box::BoxView;

    #[test]
    fn test_success_renders() {
        let mut sink = MemorySink::default();
        let rendered = apply_fetch_result(
            StorageId(1),
            Ok(boxes_with_areas(&[1.0, 4.0, 11.0])),
            &mut sink,
        );
        assert!(rendered);
        assert_eq!(sink.single(BoxView::All).len(), 3);
        assert_eq!(sink.single(BoxView::To10).len(), 1);
    }

    #[test]
    fn test_failure_leaves_empty_sink_untouched() {
        let mut sink = MemorySink::default();
        let rendered = apply_fetch_result(StorageId(1), Err(FetchFailure::Status(500)), &mut sink);
        assert!(!rendered);
        assert!(sink.is_untouched());
    }

    #[test]
    fn test_failure_keeps_previous_render() {
        let mut sink = MemorySink::default();
        apply_fetch_result(StorageId(1), Ok(boxes_with_areas(&[2.0, 5.0])), &mut sink);

        for failure in [
            FetchFailure::Status(404),
            FetchFailure::Network("offline".into()),
            FetchFailure::Decode("expected value".into()),
        ] {
            assert!(!apply_fetch_result(StorageId(2), Err(failure), &mut sink));
        }

        assert_eq!(sink.single(BoxView::All).len(), 2);
        assert_eq!(sink.single(BoxView::To3).visible[0].area, "2 м²");
        assert_eq!(sink.single(BoxView::To10).visible[0].area, "5 м²");
        assert!(sink.single(BoxView::From10).is_empty());
    }
}
