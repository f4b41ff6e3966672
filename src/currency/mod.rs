//! Two-decimal display formatting for amounts.
//!
//! The tracker is single-currency; these helpers render the display shapes
//! the UI shows verbatim.

/// Formats an amount with the currency symbol, e.g. `$1500.00`.
pub fn format_amount(amount: f64) -> String {
    if amount < 0.0 {
        format!("-${:.2}", -amount)
    } else {
        format!("${:.2}", amount)
    }
}

/// Formats a transaction row amount with an explicit sign,
/// e.g. `+$5000.00` / `-$12.99`.
pub fn format_signed(amount: f64) -> String {
    if amount < 0.0 {
        format!("-${:.2}", -amount)
    } else {
        format!("+${:.2}", amount)
    }
}

/// Formats the remaining total, marking overpayment instead of showing a
/// negative figure.
pub fn format_remaining(remaining: f64) -> String {
    if remaining < 0.0 {
        format!("${:.2} (Overpaid)", -remaining)
    } else {
        format!("${:.2}", remaining)
    }
}
