use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::bill::{Bill, BillPatch};

/// Insertion-ordered bill collection with functional transitions.
///
/// Every mutation returns a new book so the caller can publish it as one
/// atomic replacement; two rapid edits land in issue order and never
/// interleave at the field level.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BillBook {
    bills: Vec<Bill>,
}

impl BillBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_bills(bills: Vec<Bill>) -> Self {
        Self { bills }
    }

    /// Current bills in display (insertion) order.
    pub fn bills(&self) -> &[Bill] {
        &self.bills
    }

    pub fn len(&self) -> usize {
        self.bills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bills.is_empty()
    }

    pub fn get(&self, id: Uuid) -> Option<&Bill> {
        self.bills.iter().find(|bill| bill.id == id)
    }

    /// Appends a bill; display order is insertion order, no automatic sort.
    pub fn with_added(&self, bill: Bill) -> Self {
        let mut bills = self.bills.clone();
        bills.push(bill);
        Self { bills }
    }

    /// Applies a patch to the matching bill. Unknown ids change nothing.
    pub fn with_updated(&self, id: Uuid, patch: &BillPatch) -> Self {
        let mut bills = self.bills.clone();
        if let Some(bill) = bills.iter_mut().find(|bill| bill.id == id) {
            patch.apply(bill);
        }
        Self { bills }
    }

    /// Removes the matching bill. Unknown ids change nothing.
    pub fn without(&self, id: Uuid) -> Self {
        let bills = self
            .bills
            .iter()
            .filter(|bill| bill.id != id)
            .cloned()
            .collect();
        Self { bills }
    }

    /// Records or clears a payment; `None` returns the bill to unpaid.
    pub fn with_payment(&self, id: Uuid, paid: Option<f64>) -> Self {
        self.with_updated(id, &BillPatch::payment(paid))
    }

    /// Re-derives the aggregate figures from the full collection.
    pub fn totals(&self) -> Totals {
        let total_budgeted: f64 = self.bills.iter().map(|bill| bill.budgeted).sum();
        let total_paid: f64 = self.bills.iter().map(|bill| bill.paid.unwrap_or(0.0)).sum();
        Totals {
            total_budgeted,
            total_paid,
            remaining: total_budgeted - total_paid,
        }
    }
}

/// Aggregate budgeted/paid/remaining figures. Derived, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Totals {
    pub total_budgeted: f64,
    pub total_paid: f64,
    /// Negative when more was paid than budgeted.
    pub remaining: f64,
}
