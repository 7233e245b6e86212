use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

/// Renders a duration as `"{h}h {m}m {s}s"`.
///
/// Every zero-valued component is left out; a zero duration renders as `"0s"`.
pub fn format_duration(total_secs: u64) -> String {
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;

    let parts: Vec<String> = [(hours, "h"), (minutes, "m"), (seconds, "s")]
        .into_iter()
        .filter(|(value, _)| *value > 0)
        .map(|(value, suffix)| format!("{value}{suffix}"))
        .collect();

    if parts.is_empty() {
        "0s".to_string()
    } else {
        parts.join(" ")
    }
}

/// Same as [`format_duration`] for a decimal number of seconds. Fractions are
/// dropped and negative values render as `"0s"`.
pub fn format_duration_decimal(total_secs: Decimal) -> String {
    let whole = total_secs.floor().max(Decimal::ZERO);
    format_duration(whole.to_u64().unwrap_or(0))
}

/// Display form of a goal value: `"{value} {unit}"`, except seconds, which
/// render as `"{m}m {s}s"` from one minute up and `"{s}s"` below.
pub fn format_measurement(value: Decimal, unit: &str) -> String {
    let value = value.normalize();

    if unit != "seconds" {
        return format!("{value} {unit}");
    }

    let minute = Decimal::from(60);
    if value >= minute {
        let minutes = (value / minute).floor();
        let seconds = (value % minute).normalize();
        format!("{minutes}m {seconds}s")
    } else {
        format!("{value}s")
    }
}
