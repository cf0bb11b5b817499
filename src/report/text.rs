//! Plain-text formatting helpers for the smoke report.
//!
//! Arrays and shapes use the numeric-library notation editors already show
//! users: `[1 2 3]` and `(100, 10)` / `(100,)`.

use std::fmt::Display;

use crate::train::EpochStats;

pub const RULE_WIDTH: usize = 50;

pub fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

/// Bracketed, space-separated elements.
pub fn format_array<T: Display>(values: &[T]) -> String {
    let items: Vec<String> = values.iter().map(|v| v.to_string()).collect();
    format!("[{}]", items.join(" "))
}

/// Float array in the numeric library's notation.
///
/// An all-integral array prints like an integer array (`[1 2 3]`). Otherwise
/// each element keeps at most 8 fractional digits with trailing zeros
/// dropped, integral elements keep their dot, and elements are padded so the
/// dots line up: `[1.5 2. ]`, `[10.5   2.25]`.
pub fn format_values(values: &[f64]) -> String {
    if values.iter().all(|v| v.fract() == 0.0) {
        let items: Vec<String> = values.iter().map(|v| format!("{v:.0}")).collect();
        return format!("[{}]", items.join(" "));
    }

    let parts: Vec<(String, String)> = values
        .iter()
        .map(|v| {
            let fixed = format!("{v:.8}");
            let trimmed = fixed.trim_end_matches('0');
            let (int, frac) = trimmed.split_once('.').unwrap_or((trimmed, ""));
            (int.to_owned(), frac.to_owned())
        })
        .collect();
    let int_width = parts.iter().map(|(i, _)| i.len()).max().unwrap_or(0);
    let frac_width = parts.iter().map(|(_, f)| f.len()).max().unwrap_or(0);

    let items: Vec<String> = parts
        .iter()
        .map(|(int, frac)| format!("{int:>int_width$}.{frac:<frac_width$}"))
        .collect();
    format!("[{}]", items.join(" "))
}

/// Tuple notation; a one-element shape keeps its trailing comma.
pub fn format_shape(dims: &[usize]) -> String {
    match dims {
        [n] => format!("({n},)"),
        _ => {
            let items: Vec<String> = dims.iter().map(|d| d.to_string()).collect();
            format!("({})", items.join(", "))
        }
    }
}

/// Shortest round-trip float, always with a fractional part (`3.0`, not `3`).
pub fn format_scalar(x: f64) -> String {
    format!("{x:?}")
}

pub fn format_epoch(stats: &EpochStats) -> String {
    format!(
        "Epoch {}: loss: {:.4}, accuracy: {:.4}",
        stats.epoch, stats.loss, stats.accuracy
    )
}
