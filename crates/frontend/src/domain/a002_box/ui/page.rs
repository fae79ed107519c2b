use super::tabs::{BoxTabs, BoxTabsState};
use crate::domain::a001_storage::ui::StoragePicker;
use crate::domain::a002_box::loader::load_boxes;
use crate::layout::global_context::AppGlobalContext;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{Spinner, SpinnerSize};

/// Страница аренды: выбор склада и вкладки со свободными боксами
#[component]
pub fn BoxesPage() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let tabs = BoxTabsState::new();
    let loading = RwSignal::new(false);

    // Каждый выбор склада (клик по карточке или ?storage= в URL): одна загрузка
    Effect::new(move |_| {
        if let Some(storage_id) = ctx.storage.get() {
            loading.set(true);
            spawn_local(async move {
                load_boxes(storage_id, tabs).await;
                loading.set(false);
            });
        }
    });

    view! {
        <section class="boxes-page">
            <StoragePicker selected=ctx.storage />

            <Show
                when=move || ctx.storage.get().is_some()
                fallback=|| view! {
                    <p class="fs_24 text-muted mt-5">"Выберите склад, чтобы увидеть свободные боксы"</p>
                }
            >
                <Show when=move || loading.get()>
                    <div class="d-flex align-items-center gap-2 my-3">
                        <Spinner size=SpinnerSize::Small />
                        <span class="text-muted">"Загрузка боксов..."</span>
                    </div>
                </Show>
                <BoxTabs state=tabs active=ctx.tab />
            </Show>
        </section>
    }
}
