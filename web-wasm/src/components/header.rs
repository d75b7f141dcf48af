//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"Apple Gallery - りんご図鑑"</h1>
        </header>
    }
}
