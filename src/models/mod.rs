pub mod bill;
pub mod file;
pub mod form;
pub mod session;

pub use bill::{Bill, BillDraft, BillStatus, ExpenseType, DEFAULT_PCT};
pub use file::{FileSelection, StoredFile};
pub use form::{NewBillForm, ParsedForm};
pub use session::{Role, SessionRecord};
