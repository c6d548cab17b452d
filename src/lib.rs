pub mod features;
pub mod shared;

use features::bills::{BillStore, BillsPage, SqliteBillStore};
use features::new_bill::NewBill;
use features::receipts::ReceiptStorage;
use log::{error, info};
use shared::{
    initialize_database, initialize_logging_system, load_environment_variables, AppResult,
    EnvironmentConfig, LogDiagnostics, Navigator, UserSession,
};

/// 設定・ログ・データベースを初期化してストアを組み立てる
pub fn bootstrap(config: &EnvironmentConfig) -> AppResult<SqliteBillStore> {
    let conn = initialize_database(&config.database_path()).map_err(|e| {
        error!("データベースの初期化に失敗しました: {e}");
        e
    })?;

    Ok(SqliteBillStore::new(
        conn,
        ReceiptStorage::new(config.receipts_dir()),
    ))
}

/// 新規請求書画面を組み立てる（診断メッセージはログへ出す）
pub fn open_new_bill<'a>(
    store: &'a SqliteBillStore,
    navigator: &'a dyn Navigator,
    session: UserSession,
    config: &EnvironmentConfig,
) -> NewBill<'a> {
    NewBill::from_config(store, navigator, &LogDiagnostics, session, config)
}

/// アプリケーションを起動し、請求書一覧を新しい順でログに出す
pub fn run() -> AppResult<()> {
    load_environment_variables();
    let config = EnvironmentConfig::from_env();
    initialize_logging_system(&config);

    info!("アプリケーション初期化を開始します...");
    let store = bootstrap(&config)?;
    info!("アプリケーション初期化が完了しました");

    info!("ファイル選択の診断モード: {:?}", config.file_diagnostics);

    match BillsPage::from_result(store.list(None)) {
        BillsPage::Bills(list) => {
            info!("請求書: {}件", list.rows().len());
            for bill in list.rows() {
                info!(
                    "{} {} {} {}€ ({})",
                    bill.date,
                    bill.bill_type,
                    bill.name,
                    bill.amount,
                    bill.status.as_str()
                );
            }
        }
        BillsPage::Error(message) => error!("{message}"),
    }

    Ok(())
}
