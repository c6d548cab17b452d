// 新規請求書画面のコンテナ

use super::file_format::is_correct_format;
use super::models::{FileSelection, NewBillForm, RequiredField, SubmitOutcome};
use crate::features::bills::store::BillStore;
use crate::features::receipts::models::UploadCandidate;
use crate::shared::config::EnvironmentConfig;
use crate::shared::diagnostics::{DiagnosticSink, FileDiagnostics};
use crate::shared::errors::AppResult;
use crate::shared::navigation::{Navigator, Route};
use crate::shared::session::UserSession;

/// 不正な形式のファイルを選択したときの診断メッセージ
pub const INVALID_FORMAT_MESSAGE: &str = "Format d'image non valide !";

/// 新規請求書画面
pub struct NewBill<'a> {
    store: &'a dyn BillStore,
    navigator: &'a dyn Navigator,
    diagnostics: &'a dyn DiagnosticSink,
    session: UserSession,
    file_diagnostics: FileDiagnostics,
    file: Option<UploadCandidate>,
}

impl<'a> NewBill<'a> {
    pub fn new(
        store: &'a dyn BillStore,
        navigator: &'a dyn Navigator,
        diagnostics: &'a dyn DiagnosticSink,
        session: UserSession,
    ) -> Self {
        Self {
            store,
            navigator,
            diagnostics,
            session,
            file_diagnostics: FileDiagnostics::default(),
            file: None,
        }
    }

    /// 環境設定に従って組み立てる
    pub fn from_config(
        store: &'a dyn BillStore,
        navigator: &'a dyn Navigator,
        diagnostics: &'a dyn DiagnosticSink,
        session: UserSession,
        config: &EnvironmentConfig,
    ) -> Self {
        Self::new(store, navigator, diagnostics, session)
            .with_file_diagnostics(config.file_diagnostics)
    }

    /// 診断メッセージの出し方を変更する
    pub fn with_file_diagnostics(mut self, mode: FileDiagnostics) -> Self {
        self.file_diagnostics = mode;
        self
    }

    /// 保持しているファイル
    pub fn selected_file(&self) -> Option<&UploadCandidate> {
        self.file.as_ref()
    }

    /// ファイル選択イベント
    ///
    /// 受け付けない形式のときは保持中のファイルも破棄し、
    /// 拒否メッセージを一度だけ出す。受け付けたときは何も出さない。
    pub fn handle_change_file(&mut self, file: UploadCandidate) -> FileSelection {
        if is_correct_format(&file.file_name) {
            log::debug!("領収書ファイルを受け付けました: {}", file.file_name);
            self.file = Some(file);
            return FileSelection::Accepted;
        }

        self.file = None;
        if self.file_diagnostics == FileDiagnostics::Legacy {
            self.diagnostics.log(&file.file_name);
        }
        self.diagnostics.log(INVALID_FORMAT_MESSAGE);
        FileSelection::Rejected
    }

    /// フォーム送信イベント
    ///
    /// 必須項目とファイルが揃っていれば領収書を保存して請求書を作成し、
    /// 一覧画面へ遷移する。形式の検証は永続化コラボレーターに任せる。
    pub fn handle_submit(&mut self, form: NewBillForm) -> AppResult<SubmitOutcome> {
        let mut missing = form.missing_fields();
        if self.file.is_none() {
            missing.push(RequiredField::File);
        }

        let file = match self.file.as_ref() {
            Some(file) if missing.is_empty() => file,
            _ => {
                log::debug!("必須項目が未入力のため送信しません: {missing:?}");
                return Ok(SubmitOutcome::Incomplete { missing });
            }
        };

        let receipt = self.store.store_receipt(file)?;
        let payload = form.into_payload(&self.session.email, receipt.clone());
        let bill = match self.store.create(payload) {
            Ok(bill) => bill,
            Err(e) => {
                // 請求書にならなかった領収書は残さない
                if let Err(discard_error) = self.store.discard_receipt(&receipt) {
                    log::warn!(
                        "領収書の削除に失敗しました: key={}, {}",
                        receipt.key,
                        discard_error.details()
                    );
                }
                return Err(e);
            }
        };

        self.file = None;
        self.navigator.navigate(Route::Bills);

        Ok(SubmitOutcome::Submitted(bill))
    }
}
