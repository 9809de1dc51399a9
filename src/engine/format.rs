//! Label formatting

/// Label shown whenever there is nothing (valid) to display
pub const ZERO_LABEL: &str = "00:00:00";

/// Render a number of seconds as `HH:MM:SS`
///
/// Absent or negative input renders as `00:00:00`. Each field is padded to
/// at least two digits; hours are never truncated, so 360000 seconds
/// renders as `100:00:00`.
pub fn format_duration(total_seconds: Option<i64>) -> String {
    let seconds = match total_seconds {
        Some(s) if s >= 0 => s,
        _ => return ZERO_LABEL.to_string(),
    };

    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;

    format!("{:02}:{:02}:{:02}", hours, minutes, secs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_and_negative_render_as_zero() {
        assert_eq!(format_duration(None), "00:00:00");
        assert_eq!(format_duration(Some(-1)), "00:00:00");
        assert_eq!(format_duration(Some(i64::MIN)), "00:00:00");
    }

    #[test]
    fn fields_are_zero_padded() {
        assert_eq!(format_duration(Some(0)), "00:00:00");
        assert_eq!(format_duration(Some(5)), "00:00:05");
        assert_eq!(format_duration(Some(65)), "00:01:05");
        assert_eq!(format_duration(Some(3599)), "00:59:59");
        assert_eq!(format_duration(Some(3600)), "01:00:00");
        assert_eq!(format_duration(Some(86_399)), "23:59:59");
    }

    #[test]
    fn hours_are_never_truncated() {
        assert_eq!(format_duration(Some(360_000)), "100:00:00");
        assert_eq!(format_duration(Some(359_999)), "99:59:59");
        assert_eq!(format_duration(Some(3_600_000 + 61)), "1000:01:01");
    }

    #[test]
    fn decomposition_matches_arithmetic() {
        for s in (0..200_000).step_by(997) {
            let label = format_duration(Some(s));
            let parts: Vec<i64> = label.split(':').map(|p| p.parse().unwrap()).collect();
            assert_eq!(parts, vec![s / 3600, (s % 3600) / 60, s % 60], "for {s}");
            assert!(label.split(':').all(|p| p.len() >= 2));
        }
    }
}
