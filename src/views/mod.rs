pub mod bills;
pub mod dashboard;
pub mod layout;
pub mod login;
pub mod new_bill;
pub mod pages;

pub use bills::{bills_ui, BillsState, ReceiptPreview};
pub use dashboard::dashboard_ui;
pub use layout::{Chrome, NavIcon, NAV_LINKS};
pub use login::login_ui;
pub use new_bill::{new_bill_ui, NewBillState};
pub use pages::{document, error_page, loading_page};
