/// 共有エラー型とエラーハンドリング
pub mod errors;

/// 共有データベース接続管理
pub mod database;

/// 共有設定管理
pub mod config;

/// 診断メッセージの出力先
pub mod diagnostics;

/// 画面遷移の識別子
pub mod navigation;

/// 接続中ユーザー
pub mod session;

// 便利な再エクスポート
pub use config::{
    get_database_filename, get_environment, initialize_logging_system,
    load_environment_variables, Environment, EnvironmentConfig,
};
pub use database::{create_tables, initialize_database};
pub use diagnostics::{DiagnosticSink, FileDiagnostics, LogDiagnostics};
pub use errors::{AppError, AppResult, ErrorSeverity};
pub use navigation::{Navigator, Route};
pub use session::{UserSession, UserType};
