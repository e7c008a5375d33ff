//! Time Helpers
//!
//! Parsing, 12-hour display, and overlap detection for 24-hour
//! "HH:MM" time-of-day strings.

use crate::models::CourseTime;

/// Minutes since midnight, or None when the string is not a valid "HH:MM"
pub fn parse_minutes(hm: &str) -> Option<u16> {
    let (h, m) = hm.split_once(':')?;
    let h: u16 = h.parse().ok()?;
    let m: u16 = m.parse().ok()?;
    if h > 23 || m > 59 {
        return None;
    }
    Some(h * 60 + m)
}

/// True when `start` parses strictly before `end` within the same day
pub fn is_strictly_before(start: &str, end: &str) -> bool {
    match (parse_minutes(start), parse_minutes(end)) {
        (Some(s), Some(e)) => s < e,
        _ => false,
    }
}

/// Format a stored 24-hour "HH:MM" string as 12-hour for display.
///
/// "13:30" -> "1:30 PM", "00:05" -> "12:05 AM". The stored value is
/// never modified; unparseable input is returned unchanged.
pub fn to_12_hour(hm: &str) -> String {
    let Some(total) = parse_minutes(hm) else {
        return hm.to_string();
    };
    let (h, m) = (total / 60, total % 60);
    let suffix = if h < 12 { "AM" } else { "PM" };
    let hour12 = match h % 12 {
        0 => 12,
        h => h,
    };
    format!("{}:{:02} {}", hour12, m, suffix)
}

/// Index pairs of same-day entries whose time ranges overlap.
///
/// Ranges are half-open: an entry ending at 10:00 does not conflict
/// with one starting at 10:00.
pub fn find_conflicts(times: &[CourseTime]) -> Vec<(usize, usize)> {
    let mut conflicts = Vec::new();
    for i in 0..times.len() {
        for j in (i + 1)..times.len() {
            if times[i].day == times[j].day && ranges_overlap(&times[i], &times[j]) {
                conflicts.push((i, j));
            }
        }
    }
    conflicts
}

fn ranges_overlap(a: &CourseTime, b: &CourseTime) -> bool {
    let parsed = (
        parse_minutes(&a.start),
        parse_minutes(&a.end),
        parse_minutes(&b.start),
        parse_minutes(&b.end),
    );
    match parsed {
        (Some(a0), Some(a1), Some(b0), Some(b1)) => a0 < b1 && b0 < a1,
        _ => false,
    }
}
