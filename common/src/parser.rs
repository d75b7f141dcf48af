//! APIレスポンスパーサー
//!
//! 外部APIのレスポンスボディ（JSON配列）をAppleRecord列にパースする。
//! WASM側とネイティブテストでデコード経路を共有するため、
//! フェッチ本体から切り離してここに置く。

use crate::error::Result;
use crate::types::AppleRecord;

/// りんご一覧レスポンスをパース
///
/// 受信順を保ったまま厳密にデコードする。空配列は正常。
/// 配列以外のJSONや、必須フィールドの欠けたレコードを含むボディは
/// フェッチ失敗（JSON不正）として扱う。
///
/// # Arguments
/// * `body` - レスポンスボディ文字列
///
/// # Returns
/// * `Ok(Vec<AppleRecord>)` - パース成功
/// * `Err` - JSONが不正な場合
///
/// # Examples
/// ```
/// use apple_gallery_common::parse_apples_response;
///
/// let body = r#"[{"name": "Fuji", "color": "red", "photo_url": "http://x/fuji.jpg"}]"#;
/// let apples = parse_apples_response(body).unwrap();
/// assert_eq!(apples.len(), 1);
/// assert_eq!(apples[0].name, "Fuji");
/// ```
pub fn parse_apples_response(body: &str) -> Result<Vec<AppleRecord>> {
    let apples: Vec<AppleRecord> = serde_json::from_str(body)?;
    Ok(apples)
}
