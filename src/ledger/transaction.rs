use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A recorded movement of money. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: Uuid,
    pub date: NaiveDate,
    pub bank_description: String,
    pub description: String,
    pub category: String,
    /// Positive for credits/income, negative for debits/expenses.
    pub amount: f64,
    pub status: TransactionStatus,
}

impl Transaction {
    pub fn new(
        date: NaiveDate,
        bank_description: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
        amount: f64,
        status: TransactionStatus,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
            bank_description: bank_description.into(),
            description: description.into(),
            category: category.into(),
            amount,
            status,
        }
    }

    pub fn is_credit(&self) -> bool {
        self.amount >= 0.0
    }
}

/// Settlement state of a transaction. Fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Completed,
    Pending,
    Failed,
}

impl TransactionStatus {
    /// Fixed badge text for the presentation layer.
    pub fn label(&self) -> &'static str {
        match self {
            TransactionStatus::Completed => "Completed",
            TransactionStatus::Pending => "Pending",
            TransactionStatus::Failed => "Failed",
        }
    }
}

/// Date-sort direction for the transaction view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Ascending,
    #[default]
    Descending,
}

impl SortOrder {
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }
}

/// Read-only transaction history with an orderable view.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransactionLog {
    transactions: Vec<Transaction>,
}

impl TransactionLog {
    pub fn new(transactions: Vec<Transaction>) -> Self {
        Self { transactions }
    }

    /// The history in recorded order.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Returns the history sorted by date. The sort is stable, so equal
    /// dates keep their recorded relative order.
    pub fn ordered(&self, order: SortOrder) -> Vec<Transaction> {
        let mut view = self.transactions.clone();
        match order {
            SortOrder::Ascending => view.sort_by(|a, b| a.date.cmp(&b.date)),
            SortOrder::Descending => view.sort_by(|a, b| b.date.cmp(&a.date)),
        }
        view
    }

    /// Signed sum over the full history.
    pub fn total(&self) -> f64 {
        self.transactions.iter().map(|txn| txn.amount).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn txn(day: u32, description: &str, amount: f64) -> Transaction {
        Transaction::new(
            date(2025, 12, day),
            "test",
            description,
            "Misc",
            amount,
            TransactionStatus::Completed,
        )
    }

    #[test]
    fn descending_puts_the_newest_first() {
        let log = TransactionLog::new(vec![txn(24, "a", 1.0), txn(28, "b", 1.0), txn(26, "c", 1.0)]);
        let view = log.ordered(SortOrder::Descending);
        assert_eq!(view[0].description, "b");
        assert_eq!(view[2].description, "a");
    }

    #[test]
    fn equal_dates_keep_recorded_order_in_both_directions() {
        let log = TransactionLog::new(vec![txn(26, "first", 1.0), txn(26, "second", 1.0)]);
        for order in [SortOrder::Ascending, SortOrder::Descending] {
            let view = log.ordered(order);
            assert_eq!(view[0].description, "first");
            assert_eq!(view[1].description, "second");
        }
    }

    #[test]
    fn ordering_is_idempotent_and_leaves_the_log_alone() {
        let log = TransactionLog::new(vec![txn(28, "b", 1.0), txn(24, "a", 1.0)]);
        assert_eq!(log.ordered(SortOrder::Ascending), log.ordered(SortOrder::Ascending));
        assert_eq!(log.transactions()[0].description, "b");
    }

    #[test]
    fn total_is_the_signed_sum() {
        let log = TransactionLog::new(vec![txn(24, "in", 100.0), txn(25, "out", -40.5)]);
        assert_eq!(log.total(), 59.5);
    }

    #[test]
    fn credit_detection_follows_the_sign() {
        assert!(txn(24, "salary", 5000.0).is_credit());
        assert!(!txn(24, "netflix", -12.99).is_credit());
    }

    #[test]
    fn status_labels_are_fixed() {
        assert_eq!(TransactionStatus::Completed.label(), "Completed");
        assert_eq!(TransactionStatus::Pending.label(), "Pending");
        assert_eq!(TransactionStatus::Failed.label(), "Failed");
    }

    #[test]
    fn toggling_twice_restores_the_order() {
        let order = SortOrder::Descending;
        assert_eq!(order.toggled(), SortOrder::Ascending);
        assert_eq!(order.toggled().toggled(), order);
    }
}
