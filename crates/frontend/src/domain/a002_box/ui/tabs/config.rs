use contracts::domain::a002_box::BoxView;

/// Идентификаторы DOM-контейнеров вкладок
#[derive(Debug, Clone, PartialEq)]
pub struct BoxTabsConfig {
    pub all: String,
    pub to3: String,
    pub to10: String,
    pub from10: String,
}

impl BoxTabsConfig {
    /// `<prefix>-all`, `<prefix>-to3`, ...
    pub fn with_prefix(prefix: &str) -> Self {
        let id = |view: BoxView| format!("{}-{}", prefix, view.code());
        Self {
            all: id(BoxView::All),
            to3: id(BoxView::To3),
            to10: id(BoxView::To10),
            from10: id(BoxView::From10),
        }
    }

    pub fn container_id(&self, view: BoxView) -> &str {
        match view {
            BoxView::All => &self.all,
            BoxView::To3 => &self.to3,
            BoxView::To10 => &self.to10,
            BoxView::From10 => &self.from10,
        }
    }

    /// id блока со скрытыми боксами
    pub fn collapse_id(&self, view: BoxView) -> String {
        format!("collapse-{}", view.code())
    }

    /// id кнопки "Другие боксы"
    pub fn toggle_id(&self, view: BoxView) -> String {
        format!("btn-collapse-{}", view.code())
    }
}

impl Default for BoxTabsConfig {
    fn default() -> Self {
        Self::with_prefix("pills")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ids() {
        let config = BoxTabsConfig::default();
        assert_eq!(config.container_id(BoxView::All), "pills-all");
        assert_eq!(config.container_id(BoxView::To3), "pills-to3");
        assert_eq!(config.container_id(BoxView::To10), "pills-to10");
        assert_eq!(config.container_id(BoxView::From10), "pills-from10");
        assert_eq!(config.collapse_id(BoxView::To10), "collapse-to10");
        assert_eq!(config.toggle_id(BoxView::All), "btn-collapse-all");
    }
}
