use rust_decimal::Decimal;

/// Direction-aware progress from `start` toward `target`, in percent.
///
/// When `start < target` a higher value is better (1-rep max, reps); otherwise a
/// lower value is better (a run time). The result is clamped to `0..=100` and
/// rounded to two decimals. Missing values or a zero span yield 0. Extreme
/// inputs saturate rather than overflow.
pub fn compute_progress(
    start: Option<Decimal>,
    current: Option<Decimal>,
    target: Option<Decimal>,
) -> Decimal {
    let (Some(start), Some(current), Some(target)) = (start, current, target) else {
        return Decimal::ZERO;
    };

    let (achieved, span) = if start < target {
        (current.saturating_sub(start), target.saturating_sub(start))
    } else {
        (start.saturating_sub(current), start.saturating_sub(target))
    };

    if span <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    // A quotient too large to represent is far past the target.
    let ratio = match achieved.checked_div(span) {
        Some(ratio) => ratio,
        None if achieved.is_sign_positive() => Decimal::ONE,
        None => Decimal::ZERO,
    };

    (ratio.clamp(Decimal::ZERO, Decimal::ONE) * Decimal::ONE_HUNDRED).round_dp(2)
}
