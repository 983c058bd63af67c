/// Format playback seconds as M:SS with cumulative minutes (no hour rollover).
/// Player elements report time as `f64`; negative or non-finite values (a
/// video element's duration is NaN until metadata loads) clamp to "0:00".
pub fn format_clock(total_secs: f64) -> String {
    let secs = if total_secs.is_finite() {
        total_secs.max(0.0) as u64
    } else {
        0
    };
    let minutes = secs / 60;
    let seconds = secs % 60;
    format!("{minutes}:{seconds:02}")
}

#[cfg(test)]
mod tests {
    use super::format_clock;

    #[test]
    fn formats_zero() {
        assert_eq!(format_clock(0.0), "0:00");
    }

    #[test]
    fn formats_minute_and_seconds() {
        assert_eq!(format_clock(75.0), "1:15");
    }

    #[test]
    fn formats_last_second_before_the_hour() {
        assert_eq!(format_clock(3599.0), "59:59");
    }

    #[test]
    fn minutes_accumulate_past_an_hour() {
        assert_eq!(format_clock(3600.0), "60:00");
    }

    #[test]
    fn truncates_fractional_seconds() {
        assert_eq!(format_clock(75.9), "1:15");
    }

    #[test]
    fn clamps_negative() {
        assert_eq!(format_clock(-5.0), "0:00");
    }

    #[test]
    fn clamps_non_finite() {
        assert_eq!(format_clock(f64::NAN), "0:00");
        assert_eq!(format_clock(f64::INFINITY), "0:00");
    }
}
