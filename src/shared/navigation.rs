// 画面遷移の識別子と遷移先コラボレーター

use serde::{Deserialize, Serialize};

/// 画面のルート
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Route {
    Login,
    Bills,
    NewBill,
    Dashboard,
}

impl Route {
    /// ハッシュ形式のパスを取得
    pub fn path(&self) -> &'static str {
        match self {
            Route::Login => "",
            Route::Bills => "#employee/bills",
            Route::NewBill => "#employee/bill/new",
            Route::Dashboard => "#admin/dashboard",
        }
    }

    /// ハッシュ形式のパスからルートを取得（不明なパスはLogin）
    pub fn from_path(path: &str) -> Self {
        match path {
            "#employee/bills" => Route::Bills,
            "#employee/bill/new" => Route::NewBill,
            "#admin/dashboard" => Route::Dashboard,
            _ => Route::Login,
        }
    }
}

/// 画面を切り替える外部コラボレーター
pub trait Navigator {
    fn navigate(&self, route: Route);
}
