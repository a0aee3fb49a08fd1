//! Display formatting for terminal output
//!
//! Plain-text tables for budgets and expenses, and the month header.

pub mod budget;
pub mod expense;

pub use budget::{format_budget_details, format_budget_table};
pub use expense::{format_expense_details, format_expense_list};

use crate::models::Month;

/// Cut `s` to at most `max_len` characters, marking the cut with "..."
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        return s.to_string();
    }
    if max_len <= 3 {
        return ".".repeat(max_len);
    }
    let kept: String = s.chars().take(max_len - 3).collect();
    format!("{}...", kept)
}

/// "< December 2023 | January 2024 | February 2024 >"
pub fn format_month_header(month: Month) -> String {
    format!(
        "< {} | {} | {} >",
        month.prev().friendly(),
        month.friendly(),
        month.next().friendly()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Food", 10), "Food");
        assert_eq!(truncate("Groceries and more", 10), "Groceri...");
        assert_eq!(truncate("Café au lait", 7), "Café...");
        assert_eq!(truncate("abcdef", 2), "..");
    }

    #[test]
    fn test_month_header() {
        let header = format_month_header(Month::parse("2024-01").unwrap());
        assert_eq!(header, "< December 2023 | January 2024 | February 2024 >");
    }
}
