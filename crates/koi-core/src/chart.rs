//! Relative bar heights for the daily sales chart.

/// Height of each bar as a percentage of the series maximum.
///
/// Negative and non-finite values render as zero-height bars. When the
/// maximum is not positive every bar is `0.0`.
#[must_use]
pub fn bar_heights(values: &[f64]) -> Vec<f64> {
    let clamp = |value: f64| if value.is_finite() { value.max(0.0) } else { 0.0 };
    let max = values.iter().copied().map(clamp).fold(0.0_f64, f64::max);
    if max <= 0.0 {
        return vec![0.0; values.len()];
    }
    values
        .iter()
        .map(|value| clamp(*value) / max * 100.0)
        .collect()
}

/// Render a horizontal text bar for a percentage height.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn text_bar(height_pct: f64, width: usize) -> String {
    let pct = if height_pct.is_finite() {
        height_pct.clamp(0.0, 100.0)
    } else {
        0.0
    };
    let filled = ((pct / 100.0) * width as f64).round() as usize;
    "█".repeat(filled.min(width))
}
