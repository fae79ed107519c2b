//! Свободные боксы выбранного склада, разложенные по вкладкам
//!
//! - api.rs: запрос `/get_boxes/{storage_id}/`
//! - loader.rs: запрос + отрисовка, ошибки только в лог
//! - render.rs: разбиение по площади и раскрытие "Другие боксы"
//! - ui/: вкладки и страница

pub mod api;
pub mod loader;
pub mod render;
pub mod ui;

#[cfg(test)]
pub(crate) mod testing;

pub use loader::load_boxes;
pub use render::{render, ViewSink};
