//! Number formatting for cards and popups.

use num_format::{Locale, ToFormattedString};

/// Format an integer with `,` thousands separators.
pub(crate) fn fmt_int(n: i64) -> String {
    n.to_formatted_string(&Locale::en)
}

/// Format an amount in won, rounded to a whole number.
pub(crate) fn fmt_won(amount: f64) -> String {
    format!("{}원", fmt_int(amount.round() as i64))
}

/// Format a performance index as a ratio, e.g. `2.25×`.
pub(crate) fn fmt_ratio(index: f64) -> String {
    format!("{index:.2}×")
}
