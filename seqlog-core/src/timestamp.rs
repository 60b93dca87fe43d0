use chrono::{Local, Timelike};

/// Current local wall-clock time as `HH:MM:SS.mmm`.
pub fn now_formatted() -> String {
    format_timestamp(&Local::now())
}

/// Formats any time of day as `HH:MM:SS.mmm`, 24-hour, milliseconds truncated.
///
/// chrono encodes a leap second as a nanosecond value of one second or more;
/// it is folded back so the millisecond field stays within `000..=999`.
pub fn format_timestamp<T: Timelike>(time: &T) -> String {
    let millis = (time.nanosecond() % 1_000_000_000) / 1_000_000;
    format!(
        "{:02}:{:02}:{:02}.{:03}",
        time.hour(),
        time.minute(),
        time.second(),
        millis
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;
    use regex::Regex;

    #[test]
    fn test_now_formatted_shape() {
        let pattern = Regex::new(r"^(\d{2}):(\d{2}):(\d{2})\.(\d{3})$").unwrap();
        for _ in 0..100 {
            let now = now_formatted();
            let caps = pattern
                .captures(&now)
                .unwrap_or_else(|| panic!("unexpected timestamp {now:?}"));
            assert!(caps[1].parse::<u32>().unwrap() <= 23);
            assert!(caps[2].parse::<u32>().unwrap() <= 59);
            assert!(caps[3].parse::<u32>().unwrap() <= 59);
            assert!(caps[4].parse::<u32>().unwrap() <= 999);
        }
    }

    #[test]
    fn test_zero_padding() {
        let time = NaiveTime::from_hms_milli_opt(7, 5, 9, 42).unwrap();
        assert_eq!(format_timestamp(&time), "07:05:09.042");
        let midnight = NaiveTime::from_hms_opt(0, 0, 0).unwrap();
        assert_eq!(format_timestamp(&midnight), "00:00:00.000");
    }

    #[test]
    fn test_milliseconds_truncated() {
        let time = NaiveTime::from_hms_nano_opt(23, 59, 59, 999_999_999).unwrap();
        assert_eq!(format_timestamp(&time), "23:59:59.999");
        let time = NaiveTime::from_hms_micro_opt(12, 30, 0, 1_999).unwrap();
        assert_eq!(format_timestamp(&time), "12:30:00.001");
    }

    #[test]
    fn test_leap_second_stays_in_range() {
        let time = NaiveTime::from_hms_nano_opt(23, 59, 59, 1_500_000_000).unwrap();
        assert_eq!(format_timestamp(&time), "23:59:59.500");
    }
}
