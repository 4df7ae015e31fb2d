//! Formatting helpers and tree inspection

use std::path::Path;
use std::time::SystemTime;

use walkdir::WalkDir;

/// Format file size as human-readable string
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.1}G", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.1}M", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1}K", bytes as f64 / KB as f64)
    } else {
        format!("{}B", bytes)
    }
}

/// Format a modification time as `YYYY-MM-DD HH:MM` (UTC).
///
/// Missing or pre-epoch times render as `-`.
pub fn format_mtime(mtime: Option<SystemTime>) -> String {
    let Some(t) = mtime else {
        return String::from("-");
    };
    let Ok(since_epoch) = t.duration_since(SystemTime::UNIX_EPOCH) else {
        return String::from("-");
    };

    let secs = since_epoch.as_secs();
    let (year, month, day) = civil_from_days((secs / 86_400) as i64);
    let rem = secs % 86_400;

    format!(
        "{:04}-{:02}-{:02} {:02}:{:02}",
        year,
        month,
        day,
        rem / 3600,
        (rem % 3600) / 60
    )
}

/// Gregorian date for a day count relative to 1970-01-01, computed over
/// the 400-year era cycle.
fn civil_from_days(days: i64) -> (i64, u32, u32) {
    let z = days + 719_468;
    let era = if z >= 0 { z } else { z - 146_096 } / 146_097;
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let year = yoe + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = (doy - (153 * mp + 2) / 5 + 1) as u32;
    let month = if mp < 10 { mp + 3 } else { mp - 9 } as u32;
    let year = if month <= 2 { year + 1 } else { year };
    (year, month, day)
}

/// Number of entries in a directory tree, not counting the root itself.
pub fn count_entries(path: &Path) -> usize {
    WalkDir::new(path)
        .min_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::time::Duration;

    #[test]
    fn test_format_size_units() {
        assert_eq!(format_size(0), "0B");
        assert_eq!(format_size(512), "512B");
        assert_eq!(format_size(1024), "1.0K");
        assert_eq!(format_size(1536), "1.5K");
        assert_eq!(format_size(5 * 1024 * 1024), "5.0M");
        assert_eq!(format_size(3 * 1024 * 1024 * 1024), "3.0G");
    }

    #[test]
    fn test_format_mtime_epoch() {
        let t = SystemTime::UNIX_EPOCH;
        assert_eq!(format_mtime(Some(t)), "1970-01-01 00:00");
    }

    #[test]
    fn test_format_mtime_known_instant() {
        // 2024-01-02T03:04:00Z
        let t = SystemTime::UNIX_EPOCH + Duration::from_secs(1_704_164_640);
        assert_eq!(format_mtime(Some(t)), "2024-01-02 03:04");
    }

    #[test]
    fn test_format_mtime_leap_day() {
        // 2024-02-29T12:00:00Z
        let t = SystemTime::UNIX_EPOCH + Duration::from_secs(1_709_208_000);
        assert_eq!(format_mtime(Some(t)), "2024-02-29 12:00");
    }

    #[test]
    fn test_format_mtime_missing() {
        assert_eq!(format_mtime(None), "-");
    }

    #[test]
    fn test_count_entries() {
        let dir = std::env::temp_dir().join(format!("diskman-count-{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(dir.join("a/b")).unwrap();
        fs::write(dir.join("a/one.txt"), "1").unwrap();
        fs::write(dir.join("a/b/two.txt"), "2").unwrap();

        // a, a/b, a/one.txt, a/b/two.txt
        assert_eq!(count_entries(&dir), 4);
        assert_eq!(count_entries(&dir.join("a/b")), 1);

        fs::remove_dir_all(&dir).unwrap();
    }
}
