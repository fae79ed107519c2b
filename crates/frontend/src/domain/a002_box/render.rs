//! Раскладка боксов по вкладкам
//!
//! `render` очищает все четыре вкладки, делит боксы по площади и для каждой
//! вкладки строит [`TabContent`]: первые [`VISIBLE_LIMIT`] строк видны сразу,
//! остальные спрятаны за кнопкой "Другие боксы".
//!
//! Куда именно попадает результат, решает [`ViewSink`]: в приложении это
//! реактивные слоты вкладок, в тестах память.

use contracts::domain::a002_box::{partition, BoxRecord, BoxView};

/// Сколько боксов показывается без раскрытия
pub const VISIBLE_LIMIT: usize = 2;

/// Подпись кнопки раскрытия
pub const OTHER_BOXES_LABEL: &str = "Другие боксы";

/// Приёмник отрисованных вкладок
pub trait ViewSink {
    /// Очистить контейнер вкладки
    fn clear(&mut self, view: BoxView);

    /// Добавить содержимое в контейнер вкладки
    fn fill(&mut self, view: BoxView, content: TabContent);
}

/// Строка бокса: готовые подписи в порядке отображения
#[derive(Debug, Clone, PartialEq)]
pub struct BoxRow {
    pub id: Option<i64>,
    pub floor: String,
    pub number: String,
    pub area: String,
    pub dimensions: String,
    pub price: String,
}

impl From<&BoxRecord> for BoxRow {
    fn from(b: &BoxRecord) -> Self {
        Self {
            id: b.id,
            floor: format!("{} эт.", b.level),
            number: b.number.clone(),
            area: format!("{} м²", b.area),
            dimensions: format!("{} x {} x {}", b.width, b.length, b.height),
            price: format!("От {} ₽", b.price),
        }
    }
}

/// Состояние раскрытия скрытых боксов.
///
/// Переход один: `Collapsed` → `Expanded`. Обратно свернуть нельзя,
/// кнопка после раскрытия скрывается до следующей отрисовки.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Disclosure {
    #[default]
    Collapsed,
    Expanded,
}

impl Disclosure {
    /// Раскрыть; `false`, если уже раскрыто
    pub fn expand(&mut self) -> bool {
        match self {
            Disclosure::Collapsed => {
                *self = Disclosure::Expanded;
                true
            }
            Disclosure::Expanded => false,
        }
    }

    pub fn is_expanded(self) -> bool {
        self == Disclosure::Expanded
    }
}

/// Боксы сверх лимита вместе с состоянием кнопки
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Overflow {
    pub rows: Vec<BoxRow>,
    pub disclosure: Disclosure,
}

/// Содержимое одной вкладки
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TabContent {
    pub visible: Vec<BoxRow>,
    /// `None`, если боксов не больше [`VISIBLE_LIMIT`]
    pub overflow: Option<Overflow>,
}

impl TabContent {
    pub fn layout(items: &[&BoxRecord]) -> Self {
        let split = items.len().min(VISIBLE_LIMIT);
        let (head, tail) = items.split_at(split);
        let visible = head.iter().map(|b| BoxRow::from(*b)).collect();
        let overflow = (!tail.is_empty()).then(|| Overflow {
            rows: tail.iter().map(|b| BoxRow::from(*b)).collect(),
            disclosure: Disclosure::Collapsed,
        });
        Self { visible, overflow }
    }

    /// Всего боксов во вкладке (видимых и скрытых)
    pub fn len(&self) -> usize {
        self.visible.len() + self.overflow.as_ref().map_or(0, |o| o.rows.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn hidden_len(&self) -> usize {
        self.overflow.as_ref().map_or(0, |o| o.rows.len())
    }

    /// Нажатие на "Другие боксы"
    pub fn expand(&mut self) -> bool {
        self.overflow
            .as_mut()
            .map_or(false, |o| o.disclosure.expand())
    }

    pub fn is_expanded(&self) -> bool {
        self.overflow
            .as_ref()
            .map_or(false, |o| o.disclosure.is_expanded())
    }
}

/// Перерисовать все четыре вкладки по полному списку боксов
pub fn render<S: ViewSink + ?Sized>(all_boxes: &[BoxRecord], sink: &mut S) {
    for view in BoxView::ALL_VIEWS {
        sink.clear(view);
    }

    let parts = partition(all_boxes);
    for view in BoxView::ALL_VIEWS {
        let items = parts.get(view);
        log::debug!("render tab '{}': {} boxes", view.code(), items.len());
        sink.fill(view, TabContent::layout(items));
    }
}
