//! The fixed data set a fresh session starts from.

use chrono::NaiveDate;

use crate::ledger::{Bill, BillBook, Transaction, TransactionLog, TransactionStatus};

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("seed dates are valid")
}

fn bill(name: &str, due_date: NaiveDate, budgeted: f64, paid: Option<f64>) -> Bill {
    let mut bill = Bill::new(name, due_date, budgeted);
    bill.paid = paid;
    bill
}

/// Initial bill set.
pub fn initial_bills() -> BillBook {
    BillBook::from_bills(vec![
        bill("Rent", ymd(2026, 1, 1), 1500.0, Some(1500.0)),
        bill("Internet", ymd(2026, 1, 15), 80.0, None),
        bill("Electricity", ymd(2026, 1, 20), 120.0, Some(115.5)),
        bill("Credit Card", ymd(2025, 12, 28), 350.0, None),
    ])
}

/// Initial transaction history, newest entry recorded first.
pub fn initial_transactions() -> TransactionLog {
    TransactionLog::new(vec![
        Transaction::new(
            ymd(2025, 12, 28),
            "DIRECT DEP ACME CORP",
            "Salary Deposit",
            "Income",
            5000.0,
            TransactionStatus::Completed,
        ),
        Transaction::new(
            ymd(2025, 12, 27),
            "NETFLIX.COM",
            "Netflix Subscription",
            "Entertainment",
            -12.99,
            TransactionStatus::Completed,
        ),
        Transaction::new(
            ymd(2025, 12, 26),
            "WHOLEFDS MKT 10230",
            "Grocery Shopping",
            "Food",
            -89.45,
            TransactionStatus::Completed,
        ),
        Transaction::new(
            ymd(2025, 12, 25),
            "ACH TRANSFER IN",
            "Freelance Payment",
            "Income",
            1200.0,
            TransactionStatus::Pending,
        ),
        Transaction::new(
            ymd(2025, 12, 24),
            "CITY POWER & LIGHT",
            "Electricity Bill",
            "Utilities",
            -145.3,
            TransactionStatus::Failed,
        ),
    ])
}
