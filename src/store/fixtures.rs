use crate::models::{Bill, BillStatus, ExpenseType};

/// 预置账单数据
pub fn bills() -> Vec<Bill> {
    vec![
        Bill {
            id: "47qAXb6fIm2zOKkLzMro".to_string(),
            email: "a@a".to_string(),
            expense_type: ExpenseType::Hotel,
            name: "encore".to_string(),
            amount: 400,
            date: "2004-04-04".to_string(),
            vat: "80".to_string(),
            pct: 20,
            commentary: "séminaire billed".to_string(),
            comment_admin: Some("ok".to_string()),
            file_url: "https://test.storage.tld/v0/b/billable-677b6.appspot.com/o/justificatifs%2Fpreview-facture-free-201801-pdf-1.jpg?alt=media&token=c1640e12-a24b-4b11-ae52-529112e9602a".to_string(),
            file_name: "preview-facture-free-201801-pdf-1.jpg".to_string(),
            status: BillStatus::Pending,
        },
        Bill {
            id: "BeKy5Mo4jkmdfPGYpTxZ".to_string(),
            email: "a@a".to_string(),
            expense_type: ExpenseType::Transports,
            name: "test1".to_string(),
            amount: 100,
            date: "2001-01-01".to_string(),
            vat: String::new(),
            pct: 20,
            commentary: "plop".to_string(),
            comment_admin: Some("en fait non".to_string()),
            file_url: "https://firebasestorage.googleapis.com/v0/b/billable-677b6.appspot.com/o/justificatifs%2F1592770761.jpeg?alt=media&token=7685cd61-c112-42bc-9929-8a799bb82d8b".to_string(),
            file_name: "1592770761.jpeg".to_string(),
            status: BillStatus::Refused,
        },
        Bill {
            id: "UIUZtnPQvnbFnB0ozvJh".to_string(),
            email: "a@a".to_string(),
            expense_type: ExpenseType::OnlineServices,
            name: "test3".to_string(),
            amount: 300,
            date: "2003-03-03".to_string(),
            vat: "60".to_string(),
            pct: 20,
            commentary: String::new(),
            comment_admin: Some("bon bah d'accord".to_string()),
            file_url: "https://firebasestorage.googleapis.com/v0/b/billable-677b6.appspot.com/o/justificatifs%2Ffacture-client-php-exportee-dans-document-pdf-enregistre-sur-disque-dur.png?alt=media&token=571d34cb-9c8f-430a-af52-66221cae1da3".to_string(),
            file_name: "facture-client-php-exportee-dans-document-pdf-enregistre-sur-disque-dur.png".to_string(),
            status: BillStatus::Accepted,
        },
        Bill {
            id: "qcCK3SzECmaZAGRrHjaC".to_string(),
            email: "a@a".to_string(),
            expense_type: ExpenseType::Restaurants,
            name: "test2".to_string(),
            amount: 200,
            date: "2002-02-02".to_string(),
            vat: "40".to_string(),
            pct: 20,
            commentary: "test2".to_string(),
            comment_admin: Some("pas la bonne facture".to_string()),
            file_url: "https://firebasestorage.googleapis.com/v0/b/billable-677b6.appspot.com/o/justificatifs%2Fpreview-facture-free-201801-pdf-1.jpg?alt=media&token=4df6ed2c-12c8-42a2-b013-346c1346f732".to_string(),
            file_name: "preview-facture-free-201801-pdf-1.jpg".to_string(),
            status: BillStatus::Refused,
        },
    ]
}
