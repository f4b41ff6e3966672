use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single obligation: what it is, when it is due, what was planned and
/// what has actually been paid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bill {
    pub id: Uuid,
    pub name: String,
    pub due_date: NaiveDate,
    pub budgeted: f64,
    /// `None` until a payment is recorded.
    pub paid: Option<f64>,
}

impl Bill {
    pub fn new(name: impl Into<String>, due_date: NaiveDate, budgeted: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            due_date,
            budgeted,
            paid: None,
        }
    }

    /// Classifies the bill against a reference date.
    ///
    /// Precedence: Paid, then Overdue, then DueToday, then Upcoming. A
    /// recorded payment must be strictly positive to count as paid.
    pub fn status(&self, today: NaiveDate) -> BillStatus {
        if matches!(self.paid, Some(amount) if amount > 0.0) {
            return BillStatus::Paid;
        }
        if self.due_date < today {
            BillStatus::Overdue
        } else if self.due_date == today {
            BillStatus::DueToday
        } else {
            BillStatus::Upcoming
        }
    }
}

/// Derived badge state for a bill. Recomputed on every read, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BillStatus {
    Paid,
    Overdue,
    DueToday,
    Upcoming,
}

impl BillStatus {
    /// Fixed badge text for the presentation layer.
    pub fn label(&self) -> &'static str {
        match self {
            BillStatus::Paid => "Paid",
            BillStatus::Overdue => "Overdue",
            BillStatus::DueToday => "Due Today",
            BillStatus::Upcoming => "Upcoming",
        }
    }
}

/// Field-level edits to apply to one bill. Unset fields stay untouched.
#[derive(Debug, Clone, Default)]
pub struct BillPatch {
    pub name: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub budgeted: Option<f64>,
    /// Outer `None` leaves the payment alone; `Some(None)` clears it back
    /// to unpaid.
    pub paid: Option<Option<f64>>,
}

impl BillPatch {
    pub fn rename(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn reschedule(due_date: NaiveDate) -> Self {
        Self {
            due_date: Some(due_date),
            ..Self::default()
        }
    }

    pub fn budget(budgeted: f64) -> Self {
        Self {
            budgeted: Some(budgeted),
            ..Self::default()
        }
    }

    pub fn payment(paid: Option<f64>) -> Self {
        Self {
            paid: Some(paid),
            ..Self::default()
        }
    }

    pub fn apply(&self, bill: &mut Bill) {
        if let Some(name) = &self.name {
            bill.name = name.clone();
        }
        if let Some(due_date) = self.due_date {
            bill.due_date = due_date;
        }
        if let Some(budgeted) = self.budgeted {
            bill.budgeted = budgeted;
        }
        if let Some(paid) = self.paid {
            bill.paid = paid;
        }
    }
}
