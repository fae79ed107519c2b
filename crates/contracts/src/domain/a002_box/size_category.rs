//! Разбиение боксов на вкладки по площади
//!
//! Четыре представления: все боксы и три непересекающиеся корзины по площади.
//! Границы включаются в меньшую корзину: 3 м² → `To3`, 10 м² → `To10`.

use super::aggregate::BoxRecord;
use serde::{Deserialize, Serialize};

/// Верхняя граница (включительно) маленьких боксов, м²
pub const SMALL_AREA_MAX: f64 = 3.0;
/// Верхняя граница (включительно) средних боксов, м²
pub const MEDIUM_AREA_MAX: f64 = 10.0;

/// Вкладка со списком боксов
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoxView {
    All,
    To3,
    To10,
    From10,
}

impl BoxView {
    /// Все вкладки в порядке отображения
    pub const ALL_VIEWS: [BoxView; 4] = [BoxView::All, BoxView::To3, BoxView::To10, BoxView::From10];

    pub fn code(self) -> &'static str {
        match self {
            BoxView::All => "all",
            BoxView::To3 => "to3",
            BoxView::To10 => "to10",
            BoxView::From10 => "from10",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL_VIEWS.into_iter().find(|v| v.code() == code)
    }

    /// Подпись вкладки
    pub fn title(self) -> &'static str {
        match self {
            BoxView::All => "Все боксы",
            BoxView::To3 => "До 3 м²",
            BoxView::To10 => "До 10 м²",
            BoxView::From10 => "От 10 м²",
        }
    }

    /// Попадает ли бокс с такой площадью во вкладку
    pub fn contains(self, area: f64) -> bool {
        match self {
            BoxView::All => true,
            BoxView::To3 => area <= SMALL_AREA_MAX,
            BoxView::To10 => area > SMALL_AREA_MAX && area <= MEDIUM_AREA_MAX,
            BoxView::From10 => area > MEDIUM_AREA_MAX,
        }
    }

    /// Боксы вкладки в исходном порядке
    pub fn select<'a>(self, boxes: &'a [BoxRecord]) -> Vec<&'a BoxRecord> {
        boxes.iter().filter(|b| self.contains(b.area.value())).collect()
    }
}

/// Результат разбиения: по списку на каждую вкладку
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Partition<'a> {
    pub all: Vec<&'a BoxRecord>,
    pub to3: Vec<&'a BoxRecord>,
    pub to10: Vec<&'a BoxRecord>,
    pub from10: Vec<&'a BoxRecord>,
}

impl<'a> Partition<'a> {
    pub fn get(&self, view: BoxView) -> &[&'a BoxRecord] {
        match view {
            BoxView::All => &self.all,
            BoxView::To3 => &self.to3,
            BoxView::To10 => &self.to10,
            BoxView::From10 => &self.from10,
        }
    }
}

/// Разложить боксы по четырём вкладкам с сохранением порядка
pub fn partition(boxes: &[BoxRecord]) -> Partition<'_> {
    Partition {
        all: BoxView::All.select(boxes),
        to3: BoxView::To3.select(boxes),
        to10: BoxView::To10.select(boxes),
        from10: BoxView::From10.select(boxes),
    }
}
