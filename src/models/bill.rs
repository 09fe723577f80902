use serde::{Deserialize, Serialize};
use std::fmt;

/// 账单状态
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillStatus {
    #[default]
    Pending,
    Accepted,
    Refused,
}

impl BillStatus {
    pub const ALL: [BillStatus; 3] = [BillStatus::Pending, BillStatus::Accepted, BillStatus::Refused];

    /// 列表页显示文案
    pub fn label(&self) -> &'static str {
        match self {
            BillStatus::Pending => "En attente",
            BillStatus::Accepted => "Accepté",
            BillStatus::Refused => "Refused",
        }
    }

    /// 状态指示样式
    pub fn css_class(&self) -> &'static str {
        match self {
            BillStatus::Pending => "status-pending",
            BillStatus::Accepted => "status-accepted",
            BillStatus::Refused => "status-refused",
        }
    }
}

/// 费用类型 (固定枚举, 序列化为界面上的法语名称)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExpenseType {
    #[serde(rename = "Transports")]
    Transports,
    #[serde(rename = "Restaurants et bars")]
    Restaurants,
    #[serde(rename = "Hôtel et logement")]
    Hotel,
    #[serde(rename = "Services en ligne")]
    OnlineServices,
    #[serde(rename = "IT et électronique")]
    It,
    #[serde(rename = "Equipement et matériel")]
    Equipment,
    #[serde(rename = "Fournitures de bureau")]
    OfficeSupplies,
}

impl ExpenseType {
    pub const ALL: [ExpenseType; 7] = [
        ExpenseType::Transports,
        ExpenseType::Restaurants,
        ExpenseType::Hotel,
        ExpenseType::OnlineServices,
        ExpenseType::It,
        ExpenseType::Equipment,
        ExpenseType::OfficeSupplies,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ExpenseType::Transports => "Transports",
            ExpenseType::Restaurants => "Restaurants et bars",
            ExpenseType::Hotel => "Hôtel et logement",
            ExpenseType::OnlineServices => "Services en ligne",
            ExpenseType::It => "IT et électronique",
            ExpenseType::Equipment => "Equipement et matériel",
            ExpenseType::OfficeSupplies => "Fournitures de bureau",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.label() == label)
    }
}

impl fmt::Display for ExpenseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// 账单 (后端持久化后的记录)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bill {
    pub id: String,
    pub email: String,
    #[serde(rename = "type")]
    pub expense_type: ExpenseType,
    #[serde(default)]
    pub name: String,
    pub amount: i64,
    pub date: String,       // 原始日期字符串, 可能格式错误
    #[serde(default)]
    pub vat: String,
    #[serde(default = "default_pct")]
    pub pct: u32,
    #[serde(default)]
    pub commentary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment_admin: Option<String>,
    pub file_url: String,
    pub file_name: String,
    #[serde(default)]
    pub status: BillStatus,
}

/// 新账单草稿 (提交给后端创建, 尚无ID)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillDraft {
    pub email: String,
    #[serde(rename = "type")]
    pub expense_type: ExpenseType,
    pub name: String,
    pub amount: i64,
    pub date: String,
    pub vat: String,
    pub pct: u32,
    pub commentary: String,
    pub file_url: String,
    pub file_name: String,
    pub status: BillStatus,
}

impl BillDraft {
    /// 后端分配ID后转为账单记录
    pub fn into_bill(self, id: String) -> Bill {
        Bill {
            id,
            email: self.email,
            expense_type: self.expense_type,
            name: self.name,
            amount: self.amount,
            date: self.date,
            vat: self.vat,
            pct: self.pct,
            commentary: self.commentary,
            comment_admin: None,
            file_url: self.file_url,
            file_name: self.file_name,
            status: self.status,
        }
    }
}

/// 未填写时的默认百分比
pub const DEFAULT_PCT: u32 = 20;

fn default_pct() -> u32 {
    DEFAULT_PCT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bill_deserializes_from_camel_case() {
        let json = r#"{
            "id": "47qAXb6fIm2zOKkLzMro",
            "email": "a@a",
            "type": "Hôtel et logement",
            "name": "encore",
            "amount": 400,
            "date": "2004-04-04",
            "vat": "80",
            "commentary": "séminaire billed",
            "commentAdmin": "ok",
            "fileUrl": "https://test.storage.tld/preview.jpg",
            "fileName": "preview.jpg",
            "status": "pending"
        }"#;
        let bill: Bill = serde_json::from_str(json).unwrap();
        assert_eq!(bill.expense_type, ExpenseType::Hotel);
        assert_eq!(bill.pct, DEFAULT_PCT);
        assert_eq!(bill.comment_admin.as_deref(), Some("ok"));
        assert_eq!(bill.status, BillStatus::Pending);
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        let json = r#"{"id":"x","email":"a@a","type":"Transports","amount":1,
            "date":"2001-01-01","fileUrl":"","fileName":"","status":"archived"}"#;
        assert!(serde_json::from_str::<Bill>(json).is_err());
    }

    #[test]
    fn test_expense_type_labels_round_trip() {
        for t in ExpenseType::ALL {
            assert_eq!(ExpenseType::from_label(t.label()), Some(t));
        }
        assert_eq!(ExpenseType::from_label("Voyages"), None);
    }
}
