use chrono::Local;

pub struct TimeUtils;

impl TimeUtils {
    pub const S_IN_MIN: u64 = 60;
    pub const CLOCK_FORMAT: &str = "%H:%M";
    // const CLOCK_FORMAT: &str = "%H:%M:%S";

    /// Render a stopwatch reading as `MM:SS`.
    /// Minutes are not wrapped into hours, so 3661 seconds prints as `61:01`.
    pub fn format_mm_ss(seconds: u64) -> String {
        let minutes = seconds / Self::S_IN_MIN;
        let secs = seconds % Self::S_IN_MIN;
        format!("{:02}:{:02}", minutes, secs)
    }
}

/// Wall-clock time for the presenter header. Local time, not UTC.
pub fn local_clock_now() -> String {
    Local::now().format(TimeUtils::CLOCK_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_zero() {
        assert_eq!(TimeUtils::format_mm_ss(0), "00:00");
    }

    #[test]
    fn pads_minutes_and_seconds() {
        assert_eq!(TimeUtils::format_mm_ss(65), "01:05");
        assert_eq!(TimeUtils::format_mm_ss(59), "00:59");
        assert_eq!(TimeUtils::format_mm_ss(600), "10:00");
    }

    #[test]
    fn minutes_do_not_roll_over_into_hours() {
        assert_eq!(TimeUtils::format_mm_ss(3661), "61:01");
        assert_eq!(TimeUtils::format_mm_ss(4503), "75:03");
    }

    #[test]
    fn clock_is_hours_and_minutes() {
        let clock = local_clock_now();
        assert_eq!(clock.len(), 5);
        assert_eq!(&clock[2..3], ":");
    }
}
