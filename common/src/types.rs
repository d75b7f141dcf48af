//! りんごレコードの型定義
//!
//! Web(WASM)フロントエンドと共有される型:
//! - AppleRecord: 外部APIが返すりんご1件分のレコード

use serde::{Deserialize, Serialize};

/// 外部APIが返すりんごレコード
///
/// フィールド名はワイヤフォーマットそのまま（`name` / `color` / `photo_url`）。
/// 3フィールドとも必須で、欠けたレコードを含むレスポンスは
/// 不正なレスポンスとしてデシリアライズに失敗する。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppleRecord {
    pub name: String,
    pub color: String,
    pub photo_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apple_record_deserialize() {
        let json = r#"{
            "name": "Fuji",
            "color": "red",
            "photo_url": "http://x/fuji.jpg"
        }"#;

        let apple: AppleRecord = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(apple.name, "Fuji");
        assert_eq!(apple.color, "red");
        assert_eq!(apple.photo_url, "http://x/fuji.jpg");
    }

    #[test]
    fn test_apple_record_deserialize_missing_field() {
        // photo_url が欠けたレコードは不正
        let json = r#"{"name": "Fuji", "color": "red"}"#;

        let result = serde_json::from_str::<AppleRecord>(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_apple_record_deserialize_ignores_unknown_fields() {
        // APIが将来フィールドを足しても既存3フィールドはそのまま
        let json = r#"{"name": "Fuji", "color": "red", "photo_url": "http://x/fuji.jpg", "weight": 300}"#;

        let apple: AppleRecord = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(apple.name, "Fuji");
    }

    #[test]
    fn test_apple_record_serialize() {
        let apple = AppleRecord {
            name: "Granny Smith".to_string(),
            color: "green".to_string(),
            photo_url: "http://x/gs.jpg".to_string(),
        };

        let json = serde_json::to_string(&apple).expect("シリアライズ失敗");
        assert!(json.contains("\"name\":\"Granny Smith\""));
        assert!(json.contains("\"photo_url\":\"http://x/gs.jpg\""));
    }

    #[test]
    fn test_apple_record_clone_is_value_copy() {
        // 選択状態はクローンで保持するため、元の値と独立していること
        let original = AppleRecord {
            name: "Fuji".to_string(),
            color: "red".to_string(),
            photo_url: "http://x/fuji.jpg".to_string(),
        };

        let mut cloned = original.clone();
        cloned.color = "yellow".to_string();
        assert_eq!(original.color, "red");
    }
}
