//! Pure aggregation over an expense list.
//!
//! Recomputed in full on every call; lists are per-user and small, so a
//! linear scan keeps first-occurrence ordering without an ordered map.

use crate::expenses::dto::CategoryTotal;
use crate::expenses::repo::Expense;

/// Category value the client uses to signal free-text entry.
pub const CUSTOM_CATEGORY_SENTINEL: &str = "Otra";

/// Sum of all amounts; 0 for an empty list.
pub fn total(expenses: &[Expense]) -> f64 {
    expenses.iter().map(|e| e.amount).sum()
}

/// Per-category sums, ordered by first occurrence of each category.
pub fn category_totals(expenses: &[Expense]) -> Vec<CategoryTotal> {
    let mut totals: Vec<CategoryTotal> = Vec::new();
    for expense in expenses {
        match totals.iter_mut().find(|t| t.category == expense.category) {
            Some(entry) => entry.total += expense.amount,
            None => totals.push(CategoryTotal {
                category: expense.category.clone(),
                total: expense.amount,
            }),
        }
    }
    totals
}

/// Distinct categories in order of first occurrence.
pub fn categories(expenses: &[Expense]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for expense in expenses {
        if !seen.iter().any(|c| c == &expense.category) {
            seen.push(expense.category.clone());
        }
    }
    seen
}

/// Resolve the stored category for a new expense.
///
/// Selecting the sentinel with non-empty free text stores the free text;
/// everything else stores the selected category verbatim.
pub fn resolve_category(category: &str, custom: Option<&str>) -> String {
    match custom {
        Some(text) if category == CUSTOM_CATEGORY_SENTINEL && !text.trim().is_empty() => {
            text.to_string()
        }
        _ => category.to_string(),
    }
}
