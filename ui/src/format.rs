// ui/src/format.rs
use chrono::DateTime;
use chrono::Utc;

/// Formats an engagement count the way the feed displays it: "1.2K",
/// "45K", "2.5M". A trailing ".0" is dropped. Below a thousand the
/// number is shown as-is.
pub fn format_count(n: u32) -> String {
    if n >= 1_000_000 {
        scaled(n as f64 / 1_000_000.0, "M")
    } else if n >= 1_000 {
        scaled(n as f64 / 1_000.0, "K")
    } else {
        n.to_string()
    }
}

fn scaled(value: f64, suffix: &str) -> String {
    let s = format!("{value:.1}");
    let s = s.strip_suffix(".0").unwrap_or(&s);
    format!("{s}{suffix}")
}

/// How long ago a post went up, in the feed's shorthand: "now", "5m",
/// "2h", "3d". Clock skew (a timestamp in the future) renders as "now".
pub fn relative_time(posted_at: DateTime<Utc>) -> String {
    let elapsed = Utc::now().signed_duration_since(posted_at);
    let minutes = elapsed.num_minutes();

    if minutes < 1 {
        "now".to_owned()
    } else if minutes < 60 {
        format!("{minutes}m")
    } else if minutes < 60 * 24 {
        format!("{}h", elapsed.num_hours())
    } else {
        format!("{}d", elapsed.num_days())
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeDelta;

    use super::*;

    #[test]
    fn counts_compact_like_the_feed() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1_234), "1.2K");
        assert_eq!(format_count(12_500), "12.5K");
        assert_eq!(format_count(45_000), "45K");
        assert_eq!(format_count(2_500_000), "2.5M");
    }

    #[test]
    fn relative_times_use_feed_shorthand() {
        let now = Utc::now();
        assert_eq!(relative_time(now), "now");
        assert_eq!(relative_time(now - TimeDelta::minutes(5)), "5m");
        assert_eq!(relative_time(now - TimeDelta::hours(2)), "2h");
        assert_eq!(relative_time(now - TimeDelta::days(3)), "3d");
    }

    #[test]
    fn future_timestamps_clamp_to_now() {
        assert_eq!(relative_time(Utc::now() + TimeDelta::hours(1)), "now");
    }
}
