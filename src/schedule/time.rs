use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref TIME_FORMAT: Regex = Regex::new(r"^([01][0-9]|2[0-3]):[0-5][0-9]$").unwrap();
}

/// Parse time string in HH:MM format
pub fn parse_time(time_str: &str) -> Option<(u32, u32)> {
    let parts: Vec<&str> = time_str.split(':').collect();
    if parts.len() != 2 {
        return None;
    }
    let hour = parts[0].parse::<u32>().ok()?;
    let minute = parts[1].parse::<u32>().ok()?;
    if hour > 23 || minute > 59 {
        return None;
    }
    Some((hour, minute))
}

/// Convert an HH:MM time string to minutes since midnight
pub fn time_to_minutes(time_str: &str) -> Option<u32> {
    let (hour, minute) = parse_time(time_str)?;
    Some(hour * 60 + minute)
}

/// Check that a field value is a zero-padded 24-hour HH:MM time.
///
/// Form-level check applied before a value enters a schedule; `parse_time`
/// also accepts non-padded input like "9:00", this does not.
pub fn is_valid_time(time_str: &str) -> bool {
    TIME_FORMAT.is_match(time_str)
}
