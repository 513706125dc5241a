//! Duration formatting helpers shared by display, exports, and sheet rows.

/// Render fractional hours as `"8h 30m"`.
///
/// Both components are floored, never rounded: 8.999h renders as `8h 59m`.
/// Display parity with the hours figure depends on this truncation policy.
pub fn hours_minutes(hours: f64) -> String {
    let total_minutes = (hours * 60.0).floor() as i64;
    format!("{}h {}m", total_minutes / 60, total_minutes % 60)
}

/// Two-decimal hours figure used in summaries, exports, and sheet cells.
pub fn hours_cell(hours: f64) -> String {
    format!("{:.2}", hours)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floors_both_components() {
        assert_eq!(hours_minutes(8.5), "8h 30m");
        assert_eq!(hours_minutes(8.999), "8h 59m");
        assert_eq!(hours_minutes(0.0), "0h 0m");
    }

    #[test]
    fn cell_rendering() {
        assert_eq!(hours_cell(8.5), "8.50");
        assert_eq!(hours_cell(0.0), "0.00");
    }
}
