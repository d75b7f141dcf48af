//! りんごグリッドコンポーネント
//!
//! フェッチした一覧を受信順のまま1件1カードで描画する。
//! 一覧はロード後に変化しないので、描画キーはリスト位置で足りる。

use leptos::prelude::*;
use apple_gallery_common::AppleRecord;

/// カード入場アニメーションの遅延増分（ミリ秒）
/// 各カードの遅延 = リスト位置 × この値
const ENTRANCE_DELAY_STEP_MS: usize = 80;

#[component]
pub fn AppleGrid<F>(
    apples: ReadSignal<Vec<AppleRecord>>,
    on_select: F,
) -> impl IntoView
where
    F: Fn(AppleRecord) + 'static + Clone + Send,
{
    view! {
        <div class="apple-grid">
            <For
                each=move || apples.get().into_iter().enumerate()
                key=|(index, _)| *index
                children=move |(index, apple)| {
                    let on_select = on_select.clone();
                    view! {
                        <AppleCard index=index apple=apple on_select=on_select />
                    }
                }
            />
        </div>
    }
}

#[component]
fn AppleCard<F>(
    index: usize,
    apple: AppleRecord,
    on_select: F,
) -> impl IntoView
where
    F: Fn(AppleRecord) + 'static + Clone + Send,
{
    let entrance_delay = format!("{}ms", index * ENTRANCE_DELAY_STEP_MS);
    let alt_text = image_alt_text(&apple.name);
    let color_line = color_line(&apple.color);

    let on_click = {
        let apple = apple.clone();
        move |_| on_select(apple.clone())
    };

    view! {
        <div
            class="apple-card"
            style:animation-delay=entrance_delay
            on:click=on_click
        >
            <img src=apple.photo_url.clone() alt=alt_text />
            <div class="apple-info">
                <h3>{apple.name.clone()}</h3>
                <p>{color_line}</p>
            </div>
        </div>
    }
}

/// 画像のalt属性文字列を組み立てる
pub(crate) fn image_alt_text(name: &str) -> String {
    format!("{} apple", name)
}

/// 色の表示行を組み立てる
pub(crate) fn color_line(color: &str) -> String {
    format!("Color: {}", color)
}
