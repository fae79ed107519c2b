use contracts::domain::a001_storage::StorageId;
use contracts::domain::a002_box::BoxView;
use contracts::domain::common::AggregateId;
use leptos::prelude::Effect;
use leptos::prelude::*;
use std::collections::{BTreeMap, HashMap};
use web_sys::window;

/// Глобальное состояние страницы: выбранный склад и активная вкладка.
///
/// Синхронизируется с query-string (`?storage=3&tab=to10`), чтобы ссылку
/// на выбранный склад можно было открыть заново.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub storage: RwSignal<Option<StorageId>>,
    pub tab: RwSignal<BoxView>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            storage: RwSignal::new(None),
            tab: RwSignal::new(BoxView::All),
        }
    }

    pub fn select_storage(&self, id: StorageId) {
        log::debug!("select_storage: {}", id);
        self.storage.set(Some(id));
    }

    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let (storage, tab) = parse_query(&search);
        if let Some(tab) = tab {
            self.tab.set(tab);
        }
        if let Some(storage) = storage {
            self.select_storage(storage);
        }

        let this = *self;
        Effect::new(move |_| {
            let new_query = build_query(this.storage.get(), this.tab.get());

            let Some(w) = window() else {
                return;
            };
            let location = w.location();
            let current_search = location.search().unwrap_or_default();

            // Only update URL if it actually changed
            if current_search != new_query {
                let new_url = if new_query.is_empty() {
                    location.pathname().unwrap_or_else(|_| "/".to_string())
                } else {
                    new_query
                };
                if let Ok(history) = w.history() {
                    let _ = history.replace_state_with_url(
                        &wasm_bindgen::JsValue::NULL,
                        "",
                        Some(&new_url),
                    );
                }
            }
        });
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Разобрать `?storage=..&tab=..`; неизвестные и битые значения игнорируются
pub fn parse_query(search: &str) -> (Option<StorageId>, Option<BoxView>) {
    let params: HashMap<String, String> =
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    let storage = params
        .get("storage")
        .and_then(|s| StorageId::from_string(s).ok());
    let tab = params.get("tab").and_then(|s| BoxView::from_code(s));
    (storage, tab)
}

/// Собрать query-string; вкладка "все" не пишется
pub fn build_query(storage: Option<StorageId>, tab: BoxView) -> String {
    let mut params: BTreeMap<&str, String> = BTreeMap::new();
    if let Some(id) = storage {
        params.insert("storage", id.as_string());
    }
    if tab != BoxView::All {
        params.insert("tab", tab.code().to_string());
    }
    if params.is_empty() {
        return String::new();
    }
    format!("?{}", serde_qs::to_string(&params).unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_query() {
        assert_eq!(
            parse_query("?storage=3&tab=to10"),
            (Some(StorageId(3)), Some(BoxView::To10))
        );
        assert_eq!(parse_query("storage=12"), (Some(StorageId(12)), None));
        assert_eq!(parse_query("?storage=abc&tab=to5"), (None, None));
        assert_eq!(parse_query(""), (None, None));
    }

    #[test]
    fn test_build_query() {
        assert_eq!(build_query(None, BoxView::All), "");
        assert_eq!(build_query(Some(StorageId(3)), BoxView::All), "?storage=3");
        assert_eq!(
            build_query(Some(StorageId(3)), BoxView::From10),
            "?storage=3&tab=from10"
        );
    }
}
