/// 請求書一覧機能モジュール
///
/// このモジュールは請求書の一覧表示に関連する機能を提供します：
/// - 日付の新しい順への並び替え
/// - 一覧画面の表示モデル（エラー・一覧）
/// - 永続化コラボレーターのインターフェースとSQLite実装
/// - 領収書プレビュー
pub mod container;
pub mod models;
pub mod ordering;
pub mod page;
pub mod repository;
pub mod store;

pub use container::Bills;
pub use models::{Bill, BillPayload, BillStatus, ReceiptPreview};
pub use ordering::{is_ordered_desc, order_by_date_desc};
pub use page::{BillList, BillsPage};
pub use repository::SqliteBillStore;
pub use store::BillStore;
