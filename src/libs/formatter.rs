//! Number formatting for console tables, PDF tables and chart labels.
//!
//! ## Formats
//!
//! - Money: `$` prefix, thousands separators, two decimals (`$1,234.50`)
//! - Counts: thousands separators (`12,345`)
//! - Averages of counts: one decimal (`33.3`)
//!
//! Negative values keep the sign in front of the currency symbol (`-$12.00`).

use crate::libs::report::Metric;
use crate::libs::summary::SummaryStat;

/// Inserts `,` every three digits of an unsigned integer string.
fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Formats `value` with a fixed number of decimals and thousands separators.
pub fn format_number(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (formatted.as_str(), None),
    };

    let sign = if value < 0.0 && formatted.chars().any(|c| c.is_ascii_digit() && c != '0') { "-" } else { "" };
    match frac_part {
        Some(frac) => format!("{}{}.{}", sign, group_thousands(int_part), frac),
        None => format!("{}{}", sign, group_thousands(int_part)),
    }
}

/// `$1,234.56`
pub fn format_money(value: f64) -> String {
    let number = format_number(value, 2);
    match number.strip_prefix('-') {
        Some(abs) => format!("-${}", abs),
        None => format!("${}", number),
    }
}

/// `1,234`
pub fn format_count(value: u64) -> String {
    group_thousands(&value.to_string())
}

/// Short label drawn above a chart bar: rounded, thousands-separated.
pub fn format_bar_label(value: f64) -> String {
    format_number(value, 0)
}

/// Summary table row for `metric`: total, average, max, min, days with data.
pub fn format_summary_row(metric: Metric, stat: &SummaryStat) -> [String; 5] {
    if metric.is_money() {
        [
            format_money(stat.total),
            format_money(stat.average),
            format_money(stat.max),
            format_money(stat.min),
            stat.days_with_data.to_string(),
        ]
    } else {
        [
            format_number(stat.total, 0),
            format!("{:.1}", stat.average),
            format_number(stat.max, 0),
            format_number(stat.min, 0),
            stat.days_with_data.to_string(),
        ]
    }
}
