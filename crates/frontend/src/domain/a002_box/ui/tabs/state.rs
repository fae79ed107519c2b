use crate::domain::a002_box::render::{TabContent, ViewSink};
use contracts::domain::a002_box::BoxView;
use leptos::prelude::*;

/// Реактивные слоты четырёх вкладок
#[derive(Clone, Copy)]
pub struct BoxTabsState {
    pub all: RwSignal<TabContent>,
    pub to3: RwSignal<TabContent>,
    pub to10: RwSignal<TabContent>,
    pub from10: RwSignal<TabContent>,
}

impl BoxTabsState {
    pub fn new() -> Self {
        Self {
            all: RwSignal::new(TabContent::default()),
            to3: RwSignal::new(TabContent::default()),
            to10: RwSignal::new(TabContent::default()),
            from10: RwSignal::new(TabContent::default()),
        }
    }

    pub fn slot(&self, view: BoxView) -> RwSignal<TabContent> {
        match view {
            BoxView::All => self.all,
            BoxView::To3 => self.to3,
            BoxView::To10 => self.to10,
            BoxView::From10 => self.from10,
        }
    }

    /// Нажатие на "Другие боксы" во вкладке
    pub fn expand(&self, view: BoxView) {
        self.slot(view).update(|content| {
            if content.expand() {
                log::debug!("tab '{}': other boxes expanded", view.code());
            }
        });
    }
}

impl Default for BoxTabsState {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewSink for BoxTabsState {
    fn clear(&mut self, view: BoxView) {
        self.slot(view).set(TabContent::default());
    }

    fn fill(&mut self, view: BoxView, content: TabContent) {
        self.slot(view).set(content);
    }
}
