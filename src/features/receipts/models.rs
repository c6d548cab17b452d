// 領収書機能のデータモデル

use serde::Serialize;

/// アップロード候補（送信フローの間だけ存在する）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadCandidate {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl UploadCandidate {
    pub fn new<S: Into<String>>(file_name: S, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }
}

/// 保存済み領収書への参照
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoredReceipt {
    pub key: String,          // 保存先ディレクトリからの相対キー
    pub url: String,          // 請求書に記録するURL
    pub file_name: String,
    pub content_type: String,
    pub size: u64,            // バイト
}
