//! メインアプリケーションコンポーネント

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;
use gloo::console;
use crate::components::{
    header::Header,
    apple_grid::AppleGrid,
    detail_modal::DetailModal,
};
use apple_gallery_common::AppleRecord;

/// メインアプリケーションコンポーネント
///
/// 状態は2つだけ:
/// - `apples`: フェッチした一覧（ロード成功時に1回だけ丸ごと置き換え、以後不変）
/// - `selected`: 詳細モーダルに表示中のレコード（未選択はNone）
#[component]
pub fn App() -> impl IntoView {
    // アプリケーション状態
    let (apples, set_apples) = signal(Vec::<AppleRecord>::new());
    let (selected, set_selected) = signal(None::<AppleRecord>);

    // 初回ロード
    // コンポーネント本体はマウントごとに1回だけ実行されるため、
    // リクエストが同時に複数走ることはない
    spawn_local(async move {
        match crate::api::apples::fetch_apples().await {
            Ok(records) => {
                // マウント解除後に届いた応答は破棄する
                if set_apples.try_set(records).is_some() {
                    console::warn!("apples response arrived after unmount; dropped");
                }
            }
            Err(e) => {
                // 失敗時はグリッドを空のまま残す（UI上のエラー表示はしない）
                console::error!(format!("failed to load apples: {}", e));
            }
        }
    });

    // カード選択ハンドラ（値コピーで保持する）
    let on_select = move |apple: AppleRecord| {
        set_selected.set(Some(apple));
    };

    // モーダル解除ハンドラ
    let on_dismiss = move || {
        set_selected.set(None);
    };

    view! {
        <div class="container">
            <Header />

            <AppleGrid apples=apples on_select=on_select />

            {move || selected.get().map(|apple| view! {
                <DetailModal apple=apple on_dismiss=on_dismiss />
            })}
        </div>
    }
}
