// 領収書機能モジュール

pub mod models;
pub mod storage;

pub use models::{StoredReceipt, UploadCandidate};
pub use storage::ReceiptStorage;
