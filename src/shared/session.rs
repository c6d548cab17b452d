// 接続中ユーザーの情報

use crate::shared::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// ユーザー種別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserType {
    Employee,
    Admin,
}

/// 接続中ユーザー
///
/// シェル側のストレージに `{"type":"Employee","email":"..."}` 形式で保存されている。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSession {
    #[serde(rename = "type")]
    pub user_type: UserType,
    #[serde(default)]
    pub email: String,
}

impl UserSession {
    /// 従業員セッションを作成
    pub fn employee<S: Into<String>>(email: S) -> Self {
        Self {
            user_type: UserType::Employee,
            email: email.into(),
        }
    }

    /// ストレージに保存されたJSON文字列から読み込む
    ///
    /// # 引数
    /// * `raw` - `user` キーに保存されたJSON文字列
    ///
    /// # 戻り値
    /// ユーザーセッション、または失敗時はエラー
    pub fn from_json(raw: &str) -> AppResult<Self> {
        let session: UserSession = serde_json::from_str(raw)?;
        if session.user_type == UserType::Employee && session.email.trim().is_empty() {
            return Err(AppError::validation("従業員セッションにメールアドレスがありません"));
        }
        Ok(session)
    }
}
