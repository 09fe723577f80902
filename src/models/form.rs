use serde::{Deserialize, Serialize};

use super::{BillDraft, BillStatus, ExpenseType, DEFAULT_PCT};
use crate::error::ValidationError;

/// 新账单表单的原始输入值
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewBillForm {
    #[serde(rename = "type", default)]
    pub expense_type: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub amount: String,
    #[serde(default)]
    pub vat: String,
    #[serde(default)]
    pub pct: String,
    #[serde(default)]
    pub commentary: String,
}

/// 校验后的表单
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedForm {
    pub expense_type: ExpenseType,
    pub name: String,
    pub date: String,
    pub amount: i64,
    pub vat: String,
    pub pct: u32,
    pub commentary: String,
}

impl NewBillForm {
    /// 必填: 类型, 日期, 金额. 百分比为空或无法解析时取默认值
    pub fn parse(&self) -> Result<ParsedForm, ValidationError> {
        let type_label = required("type", &self.expense_type)?;
        let expense_type =
            ExpenseType::from_label(type_label).ok_or_else(|| ValidationError::InvalidField {
                field: "type",
                value: type_label.to_string(),
            })?;
        let date = required("date", &self.date)?;
        let amount_raw = required("amount", &self.amount)?;
        let amount = amount_raw
            .parse::<i64>()
            .map_err(|_| ValidationError::InvalidField {
                field: "amount",
                value: amount_raw.to_string(),
            })?;
        let pct = self.pct.trim().parse::<u32>().unwrap_or(DEFAULT_PCT);

        Ok(ParsedForm {
            expense_type,
            name: self.name.trim().to_string(),
            date: date.to_string(),
            amount,
            vat: self.vat.trim().to_string(),
            pct,
            commentary: self.commentary.trim().to_string(),
        })
    }
}

impl ParsedForm {
    pub fn into_draft(self, email: String, file_url: String, file_name: String) -> BillDraft {
        BillDraft {
            email,
            expense_type: self.expense_type,
            name: self.name,
            amount: self.amount,
            date: self.date,
            vat: self.vat,
            pct: self.pct,
            commentary: self.commentary,
            file_url,
            file_name,
            status: BillStatus::Pending,
        }
    }
}

fn required<'a>(field: &'static str, value: &'a str) -> Result<&'a str, ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        Err(ValidationError::MissingField(field))
    } else {
        Ok(value)
    }
}
