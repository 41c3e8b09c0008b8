use chrono::Datelike;
use itertools::Itertools;

use crate::config::Money;
use crate::models::Transaction;

/// Narrow a transaction list to one category code. `None` keeps everything.
pub fn filter_by_category<'a>(
    transactions: &'a [Transaction],
    category: Option<&str>,
) -> Vec<&'a Transaction> {
    transactions
        .iter()
        .filter(|tx| category.map_or(true, |code| tx.category == code))
        .collect()
}

/// All transactions booked in the given calendar month.
pub fn in_month<'a>(transactions: &'a [Transaction], year: i32, month: u32) -> Vec<&'a Transaction> {
    transactions
        .iter()
        .filter(|tx| tx.date.year() == year && tx.date.month() == month)
        .collect()
}

/// Distinct category codes in first-seen order.
pub fn known_categories(transactions: &[Transaction]) -> Vec<&str> {
    transactions
        .iter()
        .map(|tx| tx.category.as_str())
        .unique()
        .collect()
}

/// Sum of the given (already filtered) records.
pub fn spent_total(transactions: &[&Transaction]) -> Money {
    let mut total = Money::default();
    for tx in transactions {
        total += tx.amount;
    }
    total
}
