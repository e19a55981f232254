//! Display formatting for invoice rows (amounts in dollars, short dates).

use chrono::NaiveDate;

/// Format an amount in cents as US dollars, e.g. `123456` -> `"$1,234.56"`.
pub fn format_currency(cents: u64) -> String {
    let dollars = cents / 100;
    let remainder = cents % 100;
    format!("${}.{:02}", group_thousands(dollars), remainder)
}

/// Format a date the way the invoice table shows it, e.g. `"Dec 6, 2022"`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
