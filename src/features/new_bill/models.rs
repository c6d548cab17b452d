// 新規請求書フォームのデータモデル

use crate::features::bills::models::{Bill, BillPayload, BillStatus};
use crate::features::receipts::models::StoredReceipt;
use serde::Deserialize;

/// フォームに入力された値（すべて入力されたままの文字列）
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewBillForm {
    pub bill_type: String,
    pub name: String,
    pub date: String,
    pub amount: String,
    pub vat: String,
    pub pct: String,
    pub commentary: String,
}

/// 送信に必要な項目
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredField {
    Date,
    Amount,
    Pct,
    File,
}

impl NewBillForm {
    /// 未入力の必須項目（ファイル以外）
    pub fn missing_fields(&self) -> Vec<RequiredField> {
        [
            (RequiredField::Date, &self.date),
            (RequiredField::Amount, &self.amount),
            (RequiredField::Pct, &self.pct),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect()
    }

    /// 永続化コラボレーターへ渡すペイロードに変換する
    pub fn into_payload(self, email: &str, receipt: StoredReceipt) -> BillPayload {
        BillPayload {
            email: email.to_string(),
            bill_type: self.bill_type,
            name: self.name,
            date: self.date,
            amount: self.amount,
            vat: non_empty(self.vat),
            pct: self.pct,
            commentary: non_empty(self.commentary),
            file_url: Some(receipt.url),
            file_name: Some(receipt.file_name),
            status: BillStatus::Pending,
        }
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

/// ファイル選択の結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileSelection {
    Accepted,
    Rejected,
}

/// 送信の結果
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// 作成されて一覧画面へ遷移した
    Submitted(Bill),
    /// 必須項目が足りないためフォームに留まる
    Incomplete { missing: Vec<RequiredField> },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> NewBillForm {
        NewBillForm {
            bill_type: "Transports".to_string(),
            name: "vol".to_string(),
            date: "2021-09-03".to_string(),
            amount: "99".to_string(),
            vat: "".to_string(),
            pct: "19".to_string(),
            commentary: "  ".to_string(),
        }
    }

    #[test]
    fn test_missing_fields_on_empty_form() {
        assert_eq!(
            NewBillForm::default().missing_fields(),
            vec![RequiredField::Date, RequiredField::Amount, RequiredField::Pct]
        );
    }

    #[test]
    fn test_no_missing_fields_when_filled() {
        assert!(filled_form().missing_fields().is_empty());
    }

    #[test]
    fn test_whitespace_counts_as_missing() {
        let mut form = filled_form();
        form.amount = "   ".to_string();
        assert_eq!(form.missing_fields(), vec![RequiredField::Amount]);
    }

    #[test]
    fn test_into_payload() {
        let receipt = StoredReceipt {
            key: "justificatifs/1-x-facture-test.png".to_string(),
            url: "file:///data/justificatifs/1-x-facture-test.png".to_string(),
            file_name: "facture-test.png".to_string(),
            content_type: "image/png".to_string(),
            size: 12,
        };

        let payload = filled_form().into_payload("test@test.com", receipt);

        assert_eq!(payload.email, "test@test.com");
        assert_eq!(payload.status, BillStatus::Pending);
        assert_eq!(payload.vat, None);
        assert_eq!(payload.commentary, None);
        assert_eq!(payload.file_name.as_deref(), Some("facture-test.png"));
    }
}
