use crate::domain::a001_storage::api;
use contracts::domain::a001_storage::{StorageId, StorageSummary};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// "от 1500 ₽" / "нет цен"
fn price_hint(min_price: Option<f64>) -> String {
    match min_price {
        Some(price) => format!("от {} ₽", price),
        None => "нет цен".to_string(),
    }
}

/// "Свободно 4 из 10"
fn availability(summary: &StorageSummary) -> String {
    format!("Свободно {} из {}", summary.free_boxes, summary.total_boxes)
}

/// Карточки складов; клик выбирает склад
#[component]
pub fn StoragePicker(selected: RwSignal<Option<StorageId>>) -> impl IntoView {
    let storages = RwSignal::new(Vec::<StorageSummary>::new());
    let error = RwSignal::new(None::<String>);

    spawn_local(async move {
        match api::fetch_storages().await {
            Ok(items) => {
                log::debug!("loaded {} storages", items.len());
                storages.set(items);
            }
            Err(e) => {
                log::error!("Ошибка загрузки складов: {}", e);
                error.set(Some(e.to_string()));
            }
        }
    });

    view! {
        <div class="storage-picker mb-4">
            {move || error.get().map(|e| view! {
                <div class="text-danger mb-3">{format!("Не удалось загрузить склады: {}", e)}</div>
            })}
            <div class="d-flex flex-wrap gap-3">
                <For
                    each=move || storages.get()
                    key=|s| s.storage.id
                    children=move |summary| {
                        let id = summary.storage.id;
                        let title = summary.storage.title();
                        let climate = format!("{} °C", summary.storage.temperature);
                        let ceiling = summary.max_height.map(|h| format!(", потолок до {} м", h));
                        let avail = availability(&summary);
                        let hint = price_hint(summary.min_price);
                        let is_selected = move || selected.get() == Some(id);
                        view! {
                            <div class="storage-card p-3 border-8" class:selected=is_selected>
                                <div class="fs_24 fw-bold">{title}</div>
                                <div class="text-muted">
                                    {climate}
                                    {ceiling}
                                </div>
                                <div class="my-2">
                                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Success>
                                        {avail}
                                    </Badge>
                                    <span class="ms-2">{hint}</span>
                                </div>
                                <Button
                                    appearance=move || if is_selected() { ButtonAppearance::Primary } else { ButtonAppearance::Secondary }
                                    on_click=move |_| selected.set(Some(id))
                                >
                                    "Выбрать"
                                </Button>
                            </div>
                        }
                    }
                />
            </div>
        </div>
    }
}
