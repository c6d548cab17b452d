// 領収書ファイル形式の判定

/// 受け付ける拡張子（小文字）
pub const ACCEPTED_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

/// 最後の `.` 以降を拡張子として小文字で取り出す
fn extension_of(file_name: &str) -> Option<String> {
    file_name
        .rsplit_once('.')
        .map(|(_, extension)| extension.to_lowercase())
}

/// ファイル名の拡張子が受け付け対象（jpg / jpeg / png）かどうか
///
/// 大文字小文字は区別しない。`.` を含まない名前は受け付けない。
pub fn is_correct_format(file_name: &str) -> bool {
    extension_of(file_name)
        .map(|extension| ACCEPTED_EXTENSIONS.contains(&extension.as_str()))
        .unwrap_or(false)
}

/// Content-Typeを推定
pub fn content_type(file_name: &str) -> &'static str {
    match extension_of(file_name).as_deref() {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        _ => "application/octet-stream",
    }
}
