use super::models::{Bill, BillPayload, BillStatus};
use super::store::BillStore;
use crate::features::receipts::models::{StoredReceipt, UploadCandidate};
use crate::features::receipts::storage::ReceiptStorage;
use crate::shared::errors::{AppError, AppResult};
use chrono::{NaiveDate, Utc};
use chrono_tz::Europe::Paris;
use rusqlite::{params, Connection, Row};
use std::sync::Mutex;

/// 金額の上限（10桁）
const MAX_AMOUNT: f64 = 9_999_999_999.0;

/// 払い戻し率が読めない場合の既定値
const DEFAULT_PCT: u8 = 20;

const SELECT_COLUMNS: &str = "SELECT id, email, type, name, date, amount, vat, pct, commentary, file_url, file_name, status FROM bills";

/// 検証済みの数値フィールド
struct ValidatedFields {
    amount: f64,
    pct: u8,
}

/// ペイロードを検証する
///
/// # 引数
/// * `payload` - 請求書ペイロード
///
/// # 戻り値
/// 検証済みフィールド、または失敗時はバリデーションエラー
fn validate_payload(payload: &BillPayload) -> AppResult<ValidatedFields> {
    if payload.email.trim().is_empty() {
        return Err(AppError::validation("メールアドレスが必要です"));
    }

    NaiveDate::parse_from_str(payload.date.trim(), "%Y-%m-%d").map_err(|_| {
        AppError::validation("日付の形式が正しくありません（YYYY-MM-DD形式で入力してください）")
    })?;

    let amount: f64 = payload
        .amount
        .trim()
        .parse()
        .map_err(|_| AppError::validation("金額は数値で入力してください"))?;
    if !amount.is_finite() || amount <= 0.0 {
        return Err(AppError::validation("金額は正の数値である必要があります"));
    }
    if amount > MAX_AMOUNT {
        return Err(AppError::validation("金額は10桁以内で入力してください"));
    }

    // 数値でなければフォームの既定値を使う
    let pct = match payload.pct.trim().parse::<i64>() {
        Ok(value) if (0..=100).contains(&value) => value as u8,
        Ok(_) => {
            return Err(AppError::validation(
                "払い戻し率は0から100の範囲で入力してください",
            ))
        }
        Err(_) => DEFAULT_PCT,
    };

    Ok(ValidatedFields { amount, pct })
}

fn row_to_bill(row: &Row<'_>) -> rusqlite::Result<(Bill, String)> {
    let status: String = row.get(11)?;
    Ok((
        Bill {
            id: row.get(0)?,
            email: row.get(1)?,
            bill_type: row.get(2)?,
            name: row.get(3)?,
            date: row.get(4)?,
            amount: row.get(5)?,
            vat: row.get(6)?,
            pct: row.get(7)?,
            commentary: row.get(8)?,
            file_url: row.get(9)?,
            file_name: row.get(10)?,
            status: BillStatus::Pending,
        },
        status,
    ))
}

fn with_status((mut bill, status): (Bill, String)) -> AppResult<Bill> {
    bill.status = BillStatus::parse(&status)?;
    Ok(bill)
}

/// 請求書を作成する
///
/// # 引数
/// * `conn` - データベース接続
/// * `payload` - 請求書ペイロード
///
/// # 戻り値
/// 作成された請求書、または失敗時はエラー
pub fn create(conn: &Connection, payload: BillPayload) -> AppResult<Bill> {
    let fields = validate_payload(&payload)?;

    let id = uuid::Uuid::new_v4().to_string();
    let now = Utc::now().with_timezone(&Paris).to_rfc3339();

    conn.execute(
        "INSERT INTO bills (id, email, type, name, date, amount, vat, pct, commentary, file_url, file_name, status, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14)",
        params![
            id,
            payload.email,
            payload.bill_type,
            payload.name,
            payload.date.trim(),
            fields.amount,
            payload.vat,
            fields.pct,
            payload.commentary,
            payload.file_url,
            payload.file_name,
            payload.status.as_str(),
            now,
            now
        ],
    )?;

    log::info!("請求書を作成しました: id={id}, date={}", payload.date.trim());

    find_by_id(conn, &id)
}

/// IDで請求書を取得する
pub fn find_by_id(conn: &Connection, id: &str) -> AppResult<Bill> {
    let row = conn
        .query_row(
            &format!("{SELECT_COLUMNS} WHERE id = ?1"),
            params![id],
            row_to_bill,
        )
        .map_err(|e| match e {
            rusqlite::Error::QueryReturnedNoRows => AppError::not_found("請求書"),
            _ => AppError::from(e),
        })?;

    with_status(row)
}

/// 請求書一覧を取得する（メールアドレスでフィルタリング可能）
///
/// # 引数
/// * `conn` - データベース接続
/// * `email` - 提出者フィルター（オプション）
///
/// # 戻り値
/// 請求書のリスト、または失敗時はエラー
pub fn find_all(conn: &Connection, email: Option<&str>) -> AppResult<Vec<Bill>> {
    let mut query = format!("{SELECT_COLUMNS} WHERE 1=1");
    let mut params: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();

    if let Some(e) = email {
        query.push_str(" AND email = ?");
        params.push(Box::new(e.to_string()));
    }

    query.push_str(" ORDER BY date DESC");

    let mut stmt = conn.prepare(&query)?;
    let param_refs: Vec<&dyn rusqlite::ToSql> = params.iter().map(|p| p.as_ref()).collect();

    let rows = stmt
        .query_map(param_refs.as_slice(), row_to_bill)?
        .collect::<Result<Vec<_>, _>>()?;

    rows.into_iter().map(with_status).collect()
}

/// ステータスを更新する
///
/// # 引数
/// * `conn` - データベース接続
/// * `id` - 請求書ID
/// * `status` - 新しいステータス
///
/// # 戻り値
/// 更新された請求書、または失敗時はエラー
pub fn update_status(conn: &Connection, id: &str, status: BillStatus) -> AppResult<Bill> {
    let now = Utc::now().with_timezone(&Paris).to_rfc3339();

    let affected_rows = conn.execute(
        "UPDATE bills SET status = ?1, updated_at = ?2 WHERE id = ?3",
        params![status.as_str(), now, id],
    )?;

    if affected_rows == 0 {
        return Err(AppError::not_found("請求書"));
    }

    find_by_id(conn, id)
}

/// SQLiteと領収書ディレクトリによるストア
pub struct SqliteBillStore {
    db: Mutex<Connection>,
    receipts: ReceiptStorage,
}

impl SqliteBillStore {
    pub fn new(conn: Connection, receipts: ReceiptStorage) -> Self {
        Self {
            db: Mutex::new(conn),
            receipts,
        }
    }

    fn with_conn<T>(&self, f: impl FnOnce(&Connection) -> AppResult<T>) -> AppResult<T> {
        let db = self
            .db
            .lock()
            .map_err(|e| AppError::concurrency(format!("データベースロック取得失敗: {e}")))?;
        f(&*db)
    }

    pub fn find_by_id(&self, id: &str) -> AppResult<Bill> {
        self.with_conn(|conn| find_by_id(conn, id))
    }
}

impl BillStore for SqliteBillStore {
    fn list(&self, email: Option<&str>) -> AppResult<Vec<Bill>> {
        self.with_conn(|conn| find_all(conn, email))
    }

    fn create(&self, payload: BillPayload) -> AppResult<Bill> {
        self.with_conn(|conn| create(conn, payload))
    }

    fn update_status(&self, id: &str, status: BillStatus) -> AppResult<Bill> {
        self.with_conn(|conn| update_status(conn, id, status))
    }

    fn store_receipt(&self, file: &UploadCandidate) -> AppResult<StoredReceipt> {
        self.receipts.save(file)
    }

    fn discard_receipt(&self, receipt: &StoredReceipt) -> AppResult<()> {
        self.receipts.remove(receipt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::database::create_tables;
    use tempfile::TempDir;

    fn create_test_memory_db() -> Connection {
        let conn = Connection::open_in_memory().expect("インメモリDBの作成に失敗");
        create_tables(&conn).expect("テーブル作成に失敗");
        conn
    }

    fn payload(date: &str, amount: &str, pct: &str) -> BillPayload {
        BillPayload {
            email: "test@test.com".to_string(),
            bill_type: "Transports".to_string(),
            name: "vol Paris Londres".to_string(),
            date: date.to_string(),
            amount: amount.to_string(),
            vat: Some("70".to_string()),
            pct: pct.to_string(),
            commentary: None,
            file_url: Some("file:///tmp/facture-test.png".to_string()),
            file_name: Some("facture-test.png".to_string()),
            status: BillStatus::Pending,
        }
    }

    #[test]
    fn test_create_and_find() {
        let conn = create_test_memory_db();

        let bill = create(&conn, payload("2021-09-03", "99", "19")).unwrap();

        assert_eq!(bill.date, "2021-09-03");
        assert_eq!(bill.amount, 99.0);
        assert_eq!(bill.pct, 19);
        assert_eq!(bill.status, BillStatus::Pending);
        assert_eq!(find_by_id(&conn, &bill.id).unwrap(), bill);
    }

    #[test]
    fn test_create_defaults_unparsable_pct() {
        let conn = create_test_memory_db();

        let bill = create(&conn, payload("2021-09-03", "99", "abc")).unwrap();
        assert_eq!(bill.pct, DEFAULT_PCT);
    }

    #[test]
    fn test_create_validation_errors() {
        let conn = create_test_memory_db();

        let cases = [
            payload("03/09/2021", "99", "19"),
            payload("2021-09-03", "-5", "19"),
            payload("2021-09-03", "cent", "19"),
            payload("2021-09-03", "99999999999", "19"),
            payload("2021-09-03", "99", "101"),
        ];
        for case in cases {
            let result = create(&conn, case);
            assert!(matches!(result, Err(AppError::Validation(_))), "{result:?}");
        }

        let mut anonymous = payload("2021-09-03", "99", "19");
        anonymous.email = " ".to_string();
        assert!(matches!(
            create(&conn, anonymous),
            Err(AppError::Validation(_))
        ));

        assert!(find_all(&conn, None).unwrap().is_empty());
    }

    #[test]
    fn test_find_all_filters_by_email() {
        let conn = create_test_memory_db();
        create(&conn, payload("2001-01-01", "10", "20")).unwrap();
        let mut other = payload("2002-02-02", "10", "20");
        other.email = "other@test.com".to_string();
        create(&conn, other).unwrap();

        assert_eq!(find_all(&conn, None).unwrap().len(), 2);
        let mine = find_all(&conn, Some("test@test.com")).unwrap();
        assert_eq!(mine.len(), 1);
        assert_eq!(mine[0].date, "2001-01-01");
    }

    #[test]
    fn test_update_status() {
        let conn = create_test_memory_db();
        let bill = create(&conn, payload("2021-09-03", "99", "19")).unwrap();

        let updated = update_status(&conn, &bill.id, BillStatus::Accepted).unwrap();
        assert_eq!(updated.status, BillStatus::Accepted);
        assert_eq!(updated.amount, bill.amount);

        let missing = update_status(&conn, "unknown", BillStatus::Refused);
        assert!(matches!(missing, Err(AppError::NotFound(_))));
    }

    #[test]
    fn test_sqlite_store_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let store = SqliteBillStore::new(
            create_test_memory_db(),
            ReceiptStorage::new(temp_dir.path().to_path_buf()),
        );

        let receipt = store
            .store_receipt(&UploadCandidate::new("facture-test.png", b"png".to_vec()))
            .unwrap();
        let mut bill_payload = payload("2021-09-03", "99", "19");
        bill_payload.file_url = Some(receipt.url.clone());

        let bill = store.create(bill_payload).unwrap();

        assert_eq!(store.list(None).unwrap(), vec![bill.clone()]);
        assert_eq!(store.list(Some("test@test.com")).unwrap().len(), 1);
        assert!(store.list(Some("other@test.com")).unwrap().is_empty());
        assert_eq!(store.find_by_id(&bill.id).unwrap().file_url, Some(receipt.url));
    }

    #[test]
    fn test_sqlite_store_discard_receipt() {
        let temp_dir = TempDir::new().unwrap();
        let store = SqliteBillStore::new(
            create_test_memory_db(),
            ReceiptStorage::new(temp_dir.path().to_path_buf()),
        );

        let receipt = store
            .store_receipt(&UploadCandidate::new("facture-test.png", b"png".to_vec()))
            .unwrap();
        store.discard_receipt(&receipt).unwrap();

        assert!(!temp_dir.path().join(&receipt.key).exists());
    }
}
