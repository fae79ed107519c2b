pub mod global_context;

use leptos::prelude::*;

/// Каркас страницы: шапка и основная колонка
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <header class="app-header container py-4">
                <h1 class="fw-bold SelfStorage_green">"Аренда боксов"</h1>
            </header>
            <main class="app-main container">
                {children()}
            </main>
        </div>
    }
}
