// 運用者向け診断メッセージの出力先

/// 診断メッセージを受け取るシンク
pub trait DiagnosticSink {
    fn log(&self, message: &str);
}

/// ファイル選択時の診断メッセージの出し方
///
/// - `Minimal`: 不正な形式のときに拒否メッセージだけを出す
/// - `Legacy`: 拒否メッセージの前に選択されたファイル名も出す（合計2件）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FileDiagnostics {
    #[default]
    Minimal,
    Legacy,
}

/// `log` ファサードへ転送する標準のシンク
#[derive(Debug, Default, Clone, Copy)]
pub struct LogDiagnostics;

impl DiagnosticSink for LogDiagnostics {
    fn log(&self, message: &str) {
        log::warn!("{message}");
    }
}
