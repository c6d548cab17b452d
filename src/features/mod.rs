/// 機能別モジュール
///
/// 各機能モジュールは、その機能に関連するコード（モデル、コンテナ、データベース操作）
/// を含む自己完結型のユニットです。
pub mod bills;
pub mod new_bill;
pub mod receipts;
