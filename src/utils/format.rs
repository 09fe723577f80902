use chrono::{Datelike, NaiveDate};

use crate::error::MalformedDate;
use crate::models::Bill;

/// 法语月份缩写 (取前三个字符)
const MONTHS_FR: [&str; 12] = [
    "Jan", "Fév", "Mar", "Avr", "Mai", "Jui", "Jui", "Aoû", "Sep", "Oct", "Nov", "Déc",
];

/// 将 ISO 日期 (YYYY-MM-DD) 格式化为列表显示格式, 例如 "2004-04-04" -> "4 Avr. 04"
pub fn format_date(raw: &str) -> Result<String, MalformedDate> {
    let date = NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| MalformedDate(raw.to_string()))?;
    let month = MONTHS_FR[date.month0() as usize];
    Ok(format!("{} {}. {:02}", date.day(), month, date.year().rem_euclid(100)))
}

/// 显示用日期: 可解析则格式化, 否则原样返回
pub fn display_date(raw: &str) -> String {
    format_date(raw).unwrap_or_else(|_| raw.to_string())
}

/// 按原始日期字符串降序排列 (字典序, 非日历比较)
pub fn sort_by_date_desc(bills: &mut [Bill]) {
    bills.sort_by(|a, b| b.date.cmp(&a.date));
}

/// 金额显示
pub fn format_amount(amount: i64) -> String {
    format!("{} €", amount)
}
