// 請求書一覧画面のコンテナ

use super::models::{Bill, ReceiptPreview};
use super::ordering::order_by_date_desc;
use super::page::BillsPage;
use super::store::BillStore;
use crate::shared::errors::AppResult;
use crate::shared::navigation::{Navigator, Route};
use crate::shared::session::{UserSession, UserType};

/// 請求書一覧画面
pub struct Bills<'a> {
    store: &'a dyn BillStore,
    navigator: &'a dyn Navigator,
    session: UserSession,
}

impl<'a> Bills<'a> {
    pub fn new(store: &'a dyn BillStore, navigator: &'a dyn Navigator, session: UserSession) -> Self {
        Self {
            store,
            navigator,
            session,
        }
    }

    /// 「新しいノート・ド・フレ」ボタン
    pub fn handle_click_new_bill(&self) {
        self.navigator.navigate(Route::NewBill);
    }

    /// 目のアイコン：領収書プレビューを開く
    ///
    /// 領収書のない請求書では `None`。
    pub fn handle_click_icon_eye(&self, bill: &Bill) -> Option<ReceiptPreview> {
        let file_url = bill.file_url.as_ref().filter(|url| !url.is_empty())?;
        log::debug!("領収書プレビュー: bill_id={}", bill.id);
        Some(ReceiptPreview {
            file_url: file_url.clone(),
            file_name: bill.file_name.clone(),
        })
    }

    /// 接続中ユーザーの請求書を新しい順で取得する
    ///
    /// 従業員は自分の請求書のみ、管理者はすべての請求書を見る。
    pub fn get_bills(&self) -> AppResult<Vec<Bill>> {
        let email = match self.session.user_type {
            UserType::Employee => Some(self.session.email.as_str()),
            UserType::Admin => None,
        };
        let bills = self.store.list(email)?;
        log::debug!("請求書を取得しました: count={}", bills.len());
        Ok(order_by_date_desc(&bills))
    }

    /// 一覧画面を組み立てる
    pub fn load_page(&self) -> BillsPage {
        BillsPage::from_result(self.get_bills())
    }
}
