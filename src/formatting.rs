//! Plain-text label formatting shared by the chart model and the writers.

/// Currency label: floor to whole units, insert thousands separators.
/// Negative values carry the sign ahead of the symbol: "-$1,234".
pub fn format_currency(value: f64, symbol: &str) -> String {
    let whole = value.floor() as i64;
    let digits = whole.abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if whole < 0 {
        format!("-{symbol}{grouped}")
    } else {
        format!("{symbol}{grouped}")
    }
}

/// Percentage label: "42%".
pub fn format_percent(percentage: i64) -> String {
    format!("{percentage}%")
}
