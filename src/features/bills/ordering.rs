// 請求書一覧の並び替え

use super::models::Bill;

/// 請求書を日付の新しい順に並べた新しいリストを返す
///
/// 日付は固定幅の `YYYY-MM-DD` 文字列として比較する。
/// 同じ日付どうしの順序は保証しない。入力は変更しない。
///
/// # 引数
/// * `bills` - 請求書のリスト
///
/// # 戻り値
/// 新しい順に並んだ請求書のリスト
pub fn order_by_date_desc(bills: &[Bill]) -> Vec<Bill> {
    let mut ordered = bills.to_vec();
    ordered.sort_unstable_by(|a, b| b.date.cmp(&a.date));
    ordered
}

/// 日付のリストが新しい順（非増加）になっているかを判定する
pub fn is_ordered_desc<S: AsRef<str>>(dates: &[S]) -> bool {
    dates
        .windows(2)
        .all(|pair| pair[0].as_ref() >= pair[1].as_ref())
}
