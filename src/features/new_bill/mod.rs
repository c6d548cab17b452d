/// 新規請求書機能モジュール
///
/// - 領収書ファイル形式の判定（jpg / jpeg / png）
/// - ファイル選択とフォーム送信のハンドラー
pub mod container;
pub mod file_format;
pub mod models;

pub use container::{NewBill, INVALID_FORMAT_MESSAGE};
pub use file_format::{content_type, is_correct_format};
pub use models::{FileSelection, NewBillForm, RequiredField, SubmitOutcome};
