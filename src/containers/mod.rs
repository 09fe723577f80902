pub mod bills;
pub mod new_bill;

pub use bills::{BillsContainer, EyeClick};
pub use new_bill::{FormPhase, NewBillContainer, StagedUpload};
