pub mod format;

pub use format::{display_date, format_amount, format_date, sort_by_date_desc};
