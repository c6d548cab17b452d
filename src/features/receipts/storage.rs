// 領収書ファイルのローカル保存

use super::models::{StoredReceipt, UploadCandidate};
use crate::features::new_bill::file_format::content_type;
use crate::shared::errors::{AppError, AppResult};
use std::path::{Path, PathBuf};

/// 領収書ファイルの保存先
#[derive(Debug, Clone)]
pub struct ReceiptStorage {
    root: PathBuf,
}

impl ReceiptStorage {
    /// 保存先ディレクトリを指定して作成
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// ファイルキーを生成（予測困難にする）
    pub fn generate_file_key(file_name: &str) -> String {
        let timestamp = chrono::Utc::now().timestamp();
        let uuid = uuid::Uuid::new_v4();
        format!("justificatifs/{timestamp}-{uuid}-{file_name}")
    }

    /// 領収書を保存する
    ///
    /// # 引数
    /// * `file` - アップロード候補
    ///
    /// # 戻り値
    /// 保存済み領収書への参照、または失敗時はエラー
    pub fn save(&self, file: &UploadCandidate) -> AppResult<StoredReceipt> {
        // パス区切りを含む名前は最後の要素だけを使う
        let file_name = Path::new(&file.file_name)
            .file_name()
            .and_then(|name| name.to_str())
            .filter(|name| !name.is_empty())
            .ok_or_else(|| AppError::validation("ファイル名が取得できません"))?
            .to_string();

        let key = Self::generate_file_key(&file_name);
        let path = self.root.join(&key);

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, &file.bytes)?;

        let url = format!("file://{}", path.display());
        log::info!(
            "領収書を保存しました: key={key}, size={} bytes",
            file.bytes.len()
        );

        Ok(StoredReceipt {
            key,
            url,
            content_type: content_type(&file_name).to_string(),
            file_name,
            size: file.bytes.len() as u64,
        })
    }

    /// 保存済みの領収書を削除する（既に無い場合は何もしない）
    pub fn remove(&self, receipt: &StoredReceipt) -> AppResult<()> {
        let path = self.root.join(&receipt.key);
        match std::fs::remove_file(&path) {
            Ok(()) => {
                log::info!("領収書を削除しました: key={}", receipt.key);
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
