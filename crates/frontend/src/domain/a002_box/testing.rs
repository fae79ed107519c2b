//! Тестовые помощники: приёмник в памяти и генератор боксов

use super::render::{TabContent, ViewSink};
use contracts::domain::a002_box::{BoxRecord, BoxView};
use std::collections::HashMap;

/// Ведёт себя как DOM-контейнер: `fill` дописывает, `clear` стирает
#[derive(Debug, Default)]
pub struct MemorySink {
    pub slots: HashMap<BoxView, Vec<TabContent>>,
}

impl MemorySink {
    /// Содержимое вкладки; в контейнере должен быть ровно один фрагмент
    pub fn single(&self, view: BoxView) -> &TabContent {
        let items = self.slots.get(&view).map(Vec::as_slice).unwrap_or_default();
        assert_eq!(items.len(), 1, "view '{}' holds {} fragments", view.code(), items.len());
        &items[0]
    }

    pub fn is_untouched(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn expand(&mut self, view: BoxView) -> bool {
        self.slots
            .get_mut(&view)
            .and_then(|items| items.last_mut())
            .map_or(false, |c| c.expand())
    }
}

impl ViewSink for MemorySink {
    fn clear(&mut self, view: BoxView) {
        self.slots.entry(view).or_default().clear();
    }

    fn fill(&mut self, view: BoxView, content: TabContent) {
        self.slots.entry(view).or_default().push(content);
    }
}

pub fn boxes_with_areas(areas: &[f64]) -> Vec<BoxRecord> {
    areas
        .iter()
        .enumerate()
        .map(|(i, &area)| BoxRecord {
            id: Some(i as i64),
            level: 1 + (i as i32 % 3),
            number: format!("{}", 100 + i),
            area: area.into(),
            width: 1.0.into(),
            length: area.into(),
            height: 2.5.into(),
            price: (1000.0 + 100.0 * i as f64).into(),
        })
        .collect()
}
