//! りんご一覧API連携
//!
//! 外部APIへ1回のGETを発行し、JSON配列のボディを
//! `AppleRecord` 列へデコードする。デコード本体は共通ライブラリの
//! パーサーに委譲する（ネイティブ側でテストするため）。

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};
use apple_gallery_common::{parse_apples_response, AppleRecord, Error, Result};

/// りんご一覧エンドポイント（開発用ホスト）
const APPLES_API_URL: &str = "http://localhost:8000/apples/";

/// りんご一覧を取得
///
/// パラメータ・ヘッダ・認証なしの素のGET。リトライもタイムアウトもしない。
///
/// # Returns
/// * `Ok(Vec<AppleRecord>)` - 受信順のままのレコード列
/// * `Err` - ネットワーク障害、2xx以外のステータス、JSON不正のいずれか
pub async fn fetch_apples() -> Result<Vec<AppleRecord>> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request =
        Request::new_with_str_and_init(APPLES_API_URL, &opts).map_err(network_error)?;

    let window = web_sys::window().ok_or_else(|| Error::Network("no window".into()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(network_error)?;
    let resp: Response = resp_value.dyn_into().map_err(network_error)?;

    if !resp.ok() {
        return Err(Error::Http(resp.status()));
    }

    let body_value = JsFuture::from(resp.text().map_err(network_error)?)
        .await
        .map_err(network_error)?;
    // text()の解決値が文字列でないことは通常ないが、その場合は
    // 空ボディ扱いとなりJSON不正として落ちる
    let body = body_value.as_string().unwrap_or_default();

    parse_apples_response(&body)
}

/// JsValue例外をError::Networkへ変換
fn network_error(value: JsValue) -> Error {
    Error::Network(format!("{:?}", value))
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn wasm_network_error_preserves_js_message() {
        let error = network_error(JsValue::from_str("TypeError: Failed to fetch"));
        assert!(matches!(error, Error::Network(_)));
        assert!(error.to_string().contains("Failed to fetch"));
    }
}
