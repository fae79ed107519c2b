//! Вкладки боксов
//!
//! - config.rs: id контейнеров вкладок
//! - state.rs: реактивные слоты (реализация `ViewSink`)
//! - view.rs: компоненты

mod config;
mod state;
mod view;

pub use config::BoxTabsConfig;
pub use state::BoxTabsState;
pub use view::{BoxRowView, BoxTabs};
