// 請求書（ノート・ド・フレ）のデータモデル

use crate::shared::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// 請求書のステータス
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillStatus {
    Pending,
    Accepted,
    Refused,
}

impl BillStatus {
    /// 保存用の文字列表現
    pub fn as_str(&self) -> &'static str {
        match self {
            BillStatus::Pending => "pending",
            BillStatus::Accepted => "accepted",
            BillStatus::Refused => "refused",
        }
    }

    /// 保存用の文字列表現から変換
    pub fn parse(value: &str) -> AppResult<Self> {
        match value {
            "pending" => Ok(BillStatus::Pending),
            "accepted" => Ok(BillStatus::Accepted),
            "refused" => Ok(BillStatus::Refused),
            other => Err(AppError::validation(format!("不明なステータスです: {other}"))),
        }
    }
}

/// 請求書データモデル
///
/// 作成後に変更されるのは `status` のみ。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bill {
    pub id: String,
    pub email: String,
    #[serde(rename = "type")]
    pub bill_type: String,
    pub name: String,
    pub date: String, // YYYY-MM-DD
    pub amount: f64,
    pub vat: Option<String>,
    pub pct: u8,
    pub commentary: Option<String>,
    pub file_url: Option<String>,
    pub file_name: Option<String>,
    pub status: BillStatus,
}

/// 永続化コラボレーターへ渡す請求書ペイロード
///
/// フォームの値をそのまま持ち、形式の検証は保存側で行う。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillPayload {
    pub email: String,
    #[serde(rename = "type")]
    pub bill_type: String,
    pub name: String,
    pub date: String,
    pub amount: String,
    pub vat: Option<String>,
    pub pct: String,
    pub commentary: Option<String>,
    pub file_url: Option<String>,
    pub file_name: Option<String>,
    pub status: BillStatus,
}

/// 領収書プレビュー（モーダル表示用）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReceiptPreview {
    pub file_url: String,
    pub file_name: Option<String>,
}
