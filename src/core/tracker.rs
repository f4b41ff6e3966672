use chrono::NaiveDate;
use tracing::{info, warn};
use uuid::Uuid;

use crate::config::Config;
use crate::errors::InputError;
use crate::ledger::{
    Bill, BillBook, BillPatch, BillStatus, SortOrder, Totals, Transaction, TransactionLog,
};
use crate::utils::{is_blank, parse_amount, parse_date};

use super::seed;

/// Session state container for the tracker UI.
///
/// Owns the current bill snapshot, the transaction history, and the
/// process-local sort preference. Each mutation computes a successor
/// snapshot and publishes it in a single assignment; invalid input degrades
/// to a logged no-op, never an error or panic.
pub struct Tracker {
    book: BillBook,
    log: TransactionLog,
    sort_order: SortOrder,
    config: Config,
}

impl Tracker {
    /// Creates an empty tracker.
    pub fn new(config: Config) -> Self {
        let sort_order = config.default_sort_order;
        Self {
            book: BillBook::new(),
            log: TransactionLog::default(),
            sort_order,
            config,
        }
    }

    /// Creates a tracker primed with the fixed initial data set.
    pub fn seeded(config: Config) -> Self {
        let mut tracker = Self::new(config);
        tracker.book = seed::initial_bills();
        tracker.log = seed::initial_transactions();
        tracker
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Adds a bill from raw field values. A blank field or an unparsable
    /// value leaves the collection unchanged.
    pub fn add_bill(&mut self, name: &str, due_date: &str, budgeted: &str) {
        match Self::build_bill(name, due_date, budgeted) {
            Ok(bill) => {
                info!(name = %bill.name, due_date = %bill.due_date, "bill added");
                self.book = self.book.with_added(bill);
            }
            Err(err) => warn!(%err, "add_bill rejected"),
        }
    }

    fn build_bill(name: &str, due_date: &str, budgeted: &str) -> Result<Bill, InputError> {
        if is_blank(name) {
            return Err(InputError::MissingField("name"));
        }
        if is_blank(due_date) {
            return Err(InputError::MissingField("due_date"));
        }
        if is_blank(budgeted) {
            return Err(InputError::MissingField("budgeted"));
        }
        Ok(Bill::new(name, parse_date(due_date)?, parse_amount(budgeted)?))
    }

    /// Applies field edits to the matching bill; unknown ids change nothing.
    pub fn update_bill(&mut self, id: Uuid, patch: BillPatch) {
        self.book = self.book.with_updated(id, &patch);
    }

    /// Removes the matching bill; unknown ids change nothing.
    pub fn delete_bill(&mut self, id: Uuid) {
        self.book = self.book.without(id);
    }

    /// Records a payment from a raw field value. Empty input clears the
    /// bill back to unpaid; an unparsable amount changes nothing. Negative
    /// values are stored as entered.
    pub fn set_paid(&mut self, id: Uuid, raw: &str) {
        if is_blank(raw) {
            self.book = self.book.with_payment(id, None);
            return;
        }
        match parse_amount(raw) {
            Ok(amount) => self.book = self.book.with_payment(id, Some(amount)),
            Err(err) => warn!(%err, %id, "set_paid rejected"),
        }
    }

    /// Current bill snapshot in display (insertion) order.
    pub fn bills(&self) -> &[Bill] {
        self.book.bills()
    }

    /// Aggregate figures, re-derived from the current snapshot.
    pub fn totals(&self) -> Totals {
        self.book.totals()
    }

    /// Status badge for one bill against a reference date.
    pub fn bill_status(&self, id: Uuid, today: NaiveDate) -> Option<BillStatus> {
        self.book.get(id).map(|bill| bill.status(today))
    }

    /// Transaction history in the current sort order.
    pub fn transactions(&self) -> Vec<Transaction> {
        self.log.ordered(self.sort_order)
    }

    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    /// Flips the date-sort direction and returns the new order.
    pub fn toggle_sort_order(&mut self) -> SortOrder {
        self.sort_order = self.sort_order.toggled();
        info!(order = ?self.sort_order, "transaction sort order changed");
        self.sort_order
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_tracker_starts_with_nothing() {
        let tracker = Tracker::new(Config::default());
        assert!(tracker.bills().is_empty());
        assert!(tracker.transactions().is_empty());
        assert_eq!(tracker.totals().total_budgeted, 0.0);
    }

    #[test]
    fn unparsable_inputs_degrade_to_no_ops() {
        let mut tracker = Tracker::new(Config::default());
        tracker.add_bill("Water", "next tuesday", "45");
        tracker.add_bill("Water", "2026-02-01", "a lot");
        assert!(tracker.bills().is_empty());

        tracker.add_bill("Water", "2026-02-01", "45");
        let id = tracker.bills()[0].id;
        tracker.set_paid(id, "idk");
        assert_eq!(tracker.bills()[0].paid, None);
    }

    #[test]
    fn sort_preference_comes_from_config() {
        let config = Config {
            default_sort_order: SortOrder::Ascending,
            ..Config::default()
        };
        let tracker = Tracker::seeded(config);
        assert_eq!(tracker.sort_order(), SortOrder::Ascending);
    }
}
