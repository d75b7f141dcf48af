//! 詳細モーダルコンポーネント
//!
//! 選択中のレコードを全画面オーバーレイで表示する。
//! 背景のどこをクリックしても選択解除。パネル内のクリックは
//! 背景に伝播させない。

use leptos::prelude::*;
use leptos::ev::MouseEvent;
use apple_gallery_common::AppleRecord;
use crate::components::apple_grid::{color_line, image_alt_text};

#[component]
pub fn DetailModal<F>(
    apple: AppleRecord,
    on_dismiss: F,
) -> impl IntoView
where
    F: Fn() + 'static + Clone + Send,
{
    let alt_text = image_alt_text(&apple.name);
    let color_text = color_line(&apple.color);

    let on_backdrop_click = {
        let on_dismiss = on_dismiss.clone();
        move |_| on_dismiss()
    };

    let on_close_click = {
        let on_dismiss = on_dismiss.clone();
        move |_| on_dismiss()
    };

    view! {
        <div class="modal-backdrop" on:click=on_backdrop_click>
            <div
                class="modal-panel"
                on:click=|ev: MouseEvent| ev.stop_propagation()
            >
                <img src=apple.photo_url.clone() alt=alt_text />
                <h2>{apple.name.clone()}</h2>
                <p class="modal-color">{color_text}</p>
                <button class="btn btn-small btn-secondary" on:click=on_close_click>
                    "閉じる"
                </button>
            </div>
        </div>
    }
}
