// 請求書一覧画面の表示モデル

use super::models::Bill;
use super::ordering::order_by_date_desc;
use crate::shared::errors::{AppResult, ErrorSeverity};

/// 新しい順に並んだ請求書の行
///
/// `BillList::new` 以外では作れないため、行は常に新しい順になっている。
#[derive(Debug, Clone, PartialEq)]
pub struct BillList(Vec<Bill>);

impl BillList {
    pub fn new(bills: &[Bill]) -> Self {
        Self(order_by_date_desc(bills))
    }

    pub fn rows(&self) -> &[Bill] {
        &self.0
    }

    pub fn dates(&self) -> Vec<&str> {
        self.0.iter().map(|bill| bill.date.as_str()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// 一覧画面の表示モード（いずれか一つ）
#[derive(Debug, Clone, PartialEq)]
pub enum BillsPage {
    Error(String),
    Bills(BillList),
}

impl BillsPage {
    pub fn with_bills(bills: &[Bill]) -> Self {
        BillsPage::Bills(BillList::new(bills))
    }

    pub fn error<S: Into<String>>(message: S) -> Self {
        BillsPage::Error(message.into())
    }

    /// 取得結果から画面を組み立てる（失敗時はエラー画面）
    pub fn from_result(result: AppResult<Vec<Bill>>) -> Self {
        match result {
            Ok(bills) => Self::with_bills(&bills),
            Err(e) => {
                let level = match e.severity() {
                    ErrorSeverity::High => log::Level::Error,
                    ErrorSeverity::Medium | ErrorSeverity::Low => log::Level::Warn,
                };
                log::log!(level, "請求書一覧の取得に失敗しました: {}", e.details());
                Self::error(e.user_message())
            }
        }
    }

    /// 画面の見出し
    pub fn heading(&self) -> &'static str {
        match self {
            BillsPage::Error(_) => "Erreur",
            BillsPage::Bills(_) => "Mes notes de frais",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::bills::models::BillStatus;
    use crate::features::bills::ordering::is_ordered_desc;
    use crate::shared::errors::AppError;

    fn bill_on(id: &str, date: &str) -> Bill {
        Bill {
            id: id.to_string(),
            email: "a@a".to_string(),
            bill_type: "Restaurants et bars".to_string(),
            name: "déjeuner".to_string(),
            date: date.to_string(),
            amount: 42.0,
            vat: Some("8".to_string()),
            pct: 20,
            commentary: None,
            file_url: None,
            file_name: None,
            status: BillStatus::Accepted,
        }
    }

    #[test]
    fn test_bills_mode_is_always_ordered() {
        let page = BillsPage::with_bills(&[
            bill_on("a", "2001-01-01"),
            bill_on("b", "2004-04-04"),
            bill_on("c", "2003-03-03"),
            bill_on("d", "2002-02-02"),
        ]);

        match &page {
            BillsPage::Bills(list) => {
                assert!(is_ordered_desc(&list.dates()));
                assert_eq!(list.rows()[0].id, "b");
            }
            other => panic!("一覧モードではありません: {other:?}"),
        }
        assert_eq!(page.heading(), "Mes notes de frais");
    }

    #[test]
    fn test_error_mode() {
        let page = BillsPage::error("some error message");

        assert_eq!(page.heading(), "Erreur");
        assert_eq!(page, BillsPage::Error("some error message".to_string()));
    }

    #[test]
    fn test_from_result_error_uses_user_message() {
        let page = BillsPage::from_result(Err(AppError::Database("locked".to_string())));

        assert_eq!(
            page,
            BillsPage::Error("データベース操作でエラーが発生しました".to_string())
        );
    }

    #[test]
    fn test_from_result_empty_list() {
        let page = BillsPage::from_result(Ok(vec![]));

        match page {
            BillsPage::Bills(list) => assert!(list.is_empty()),
            other => panic!("一覧モードではありません: {other:?}"),
        }
    }

    #[test]
    fn test_from_result_low_severity_error() {
        let page = BillsPage::from_result(Err(AppError::not_found("請求書")));

        assert_eq!(page, BillsPage::error("請求書が見つかりません"));
        assert_eq!(page.heading(), "Erreur");
    }
}
