use super::config::BoxTabsConfig;
use super::state::BoxTabsState;
use crate::domain::a002_box::render::{BoxRow, OTHER_BOXES_LABEL};
use contracts::domain::a002_box::BoxView;
use leptos::prelude::*;

const TOGGLE_CLASS: &str = "btn w-auto py-3 px-5 SelfStorage__bg_orange SelfStorage__btn2_orange text-white text-center fs_24 border-8";

/// Полоса вкладок и их содержимое
#[component]
pub fn BoxTabs(
    state: BoxTabsState,
    /// Активная вкладка
    active: RwSignal<BoxView>,
    /// id контейнеров; по умолчанию `pills-*`
    #[prop(optional)]
    config: Option<BoxTabsConfig>,
) -> impl IntoView {
    let config = config.unwrap_or_default();

    let nav = BoxView::ALL_VIEWS
        .into_iter()
        .map(|box_view| {
            let container_id = config.container_id(box_view).to_string();
            let count = move || state.slot(box_view).with(|c| c.len());
            let is_active = move || active.get() == box_view;
            view! {
                <li class="nav-item" role="presentation">
                    <button
                        type="button"
                        role="tab"
                        class="nav-link fs_24"
                        class:active=is_active
                        aria-controls=container_id
                        aria-selected=move || is_active().to_string()
                        on:click=move |_| active.set(box_view)
                    >
                        {box_view.title()}
                        <span class="ms-2 badge rounded-pill">{count}</span>
                    </button>
                </li>
            }
        })
        .collect_view();

    let panes = BoxView::ALL_VIEWS
        .into_iter()
        .map(|box_view| {
            view! {
                <BoxTabPane
                    state=state
                    box_view=box_view
                    is_active=Signal::derive(move || active.get() == box_view)
                    container_id=config.container_id(box_view).to_string()
                    collapse_id=config.collapse_id(box_view)
                    toggle_id=config.toggle_id(box_view)
                />
            }
        })
        .collect_view();

    view! {
        <div class="box-tabs">
            <ul class="nav nav-pills mb-3" role="tablist">
                {nav}
            </ul>
            <div class="tab-content">
                {panes}
            </div>
        </div>
    }
}

/// Содержимое вкладки: два бокса, кнопка "Другие боксы" и скрытый блок
#[component]
fn BoxTabPane(
    state: BoxTabsState,
    box_view: BoxView,
    #[prop(into)] is_active: Signal<bool>,
    container_id: String,
    collapse_id: String,
    toggle_id: String,
) -> impl IntoView {
    let content = state.slot(box_view);

    let body = move || {
        let tab = content.get();
        let visible = tab
            .visible
            .into_iter()
            .map(|row| view! { <BoxRowView row=row /> })
            .collect_view();

        let overflow = tab.overflow.map(|overflow| {
            let expanded = overflow.disclosure.is_expanded();
            let hidden = overflow
                .rows
                .into_iter()
                .map(|row| view! { <BoxRowView row=row /> })
                .collect_view();
            view! {
                <button
                    type="button"
                    class=TOGGLE_CLASS
                    class:d-none=expanded
                    id=toggle_id.clone()
                    data-bs-toggle="collapse"
                    data-bs-target=format!("#{}", collapse_id)
                    aria-expanded=expanded.to_string()
                    aria-controls=collapse_id.clone()
                    on:click=move |_| state.expand(box_view)
                >
                    {OTHER_BOXES_LABEL}
                </button>
                <div class="collapse" class:show=expanded id=collapse_id.clone()>
                    {hidden}
                </div>
            }
        });

        view! {
            {visible}
            {overflow}
        }
    };

    view! {
        <div
            class="tab-pane fade"
            class:show=move || is_active.get()
            class:active=move || is_active.get()
            id=container_id
            role="tabpanel"
        >
            {body}
        </div>
    }
}

/// Строка бокса: ссылка-заглушка, клик не уводит со страницы
#[component]
pub fn BoxRowView(row: BoxRow) -> impl IntoView {
    view! {
        <a
            href="#"
            class="row text-decoration-none py-3 px-4 mt-5 SelfStorage__boxlink"
            on:click=|ev| ev.prevent_default()
        >
            <div class="col-12 col-md-4 col-lg-3 d-flex justify-content-center align-items-center">
                <span class="SelfStorage_green fs_24 me-2">{row.floor}</span>
                <span class="fs_24">{row.number}</span>
            </div>
            <div class="col-6 col-md-4 col-lg-3 d-flex justify-content-center align-items-center">
                <span class="fs_24">{row.area}</span>
            </div>
            <div class="col-6 col-md-4 col-lg-3 d-flex justify-content-center align-items-center">
                <span class="fs_24">{row.dimensions}</span>
            </div>
            <div class="col-12 col-lg-3">
                <span class="btn my-2 w-100 text-white fs_24 SelfStorage__bg_orange SelfStorage__btn2_orange border-8">
                    {row.price}
                </span>
            </div>
        </a>
    }
}
