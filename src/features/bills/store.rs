// 永続化コラボレーターのインターフェース

use super::models::{Bill, BillPayload, BillStatus};
use crate::features::receipts::models::{StoredReceipt, UploadCandidate};
use crate::shared::errors::AppResult;

/// 請求書と領収書を保存する外部コラボレーター
pub trait BillStore {
    /// 請求書を取得する（`email` 指定時は提出者で絞り込む）
    fn list(&self, email: Option<&str>) -> AppResult<Vec<Bill>>;

    /// 請求書を作成する
    fn create(&self, payload: BillPayload) -> AppResult<Bill>;

    /// ステータスを変更する（承認ワークフロー用）
    fn update_status(&self, id: &str, status: BillStatus) -> AppResult<Bill>;

    /// 領収書ファイルを保存する
    fn store_receipt(&self, file: &UploadCandidate) -> AppResult<StoredReceipt>;

    /// 請求書に紐付かなかった領収書を削除する
    fn discard_receipt(&self, receipt: &StoredReceipt) -> AppResult<()>;
}
