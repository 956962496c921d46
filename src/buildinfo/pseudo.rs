use chrono::{DateTime, Utc};

/// Number of revision characters kept in a pseudo-version.
pub const REVISION_PREFIX_LEN: usize = 12;

/// `yymmddHHMMSS`, 24-hour clock, always 12 digits.
const TIMESTAMP_FORMAT: &str = "%y%m%d%H%M%S";

/// Builds `v0.0.0-<yymmddHHMMSS>-<12-char revision prefix>` from a commit time
/// and revision.
///
/// Returns `None` when `time` is not strict RFC3339 or when `revision` has
/// fewer than [`REVISION_PREFIX_LEN`] characters. The timestamp is normalised
/// to UTC so that versions sort by commit time regardless of the recorded
/// offset.
pub fn pseudo_version(time: &str, revision: &str) -> Option<String> {
    let t = parse_commit_time(time)?;
    let timestamp = t.format(TIMESTAMP_FORMAT).to_string();
    let prefix: String = revision.chars().take(REVISION_PREFIX_LEN).collect();
    if prefix.chars().count() < REVISION_PREFIX_LEN {
        return None;
    }
    Some(format!("v0.0.0-{timestamp}-{prefix}"))
}

/// RFC3339 with an uppercase `T` separator and uppercase `Z` (or a numeric
/// offset). chrono alone also takes a space or lowercase letters.
fn parse_commit_time(time: &str) -> Option<DateTime<Utc>> {
    if time.as_bytes().get(10) != Some(&b'T') || time.ends_with('z') {
        return None;
    }
    DateTime::parse_from_rfc3339(time)
        .ok()
        .map(|t| t.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_utc_timestamp_and_revision_prefix() {
        let v = pseudo_version("2024-01-15T10:30:00Z", "abcdef123456789").unwrap();
        assert_eq!(v, "v0.0.0-240115103000-abcdef123456");
    }

    #[test]
    fn afternoon_hours_use_24_hour_clock() {
        let morning = pseudo_version("2024-01-15T03:04:05Z", "abcdef123456").unwrap();
        let afternoon = pseudo_version("2024-01-15T15:04:05Z", "abcdef123456").unwrap();
        assert_eq!(morning, "v0.0.0-240115030405-abcdef123456");
        assert_eq!(afternoon, "v0.0.0-240115150405-abcdef123456");
        assert!(morning < afternoon);
    }

    #[test]
    fn offsets_are_normalised_to_utc() {
        let v = pseudo_version("2024-01-15T12:30:00+02:00", "abcdef123456").unwrap();
        assert_eq!(v, "v0.0.0-240115103000-abcdef123456");
    }

    #[test]
    fn short_revision_yields_none() {
        assert_eq!(pseudo_version("2024-01-15T10:30:00Z", "abc123"), None);
        assert_eq!(pseudo_version("2024-01-15T10:30:00Z", ""), None);
    }

    #[test]
    fn revision_of_exactly_twelve_chars_is_kept_whole() {
        let v = pseudo_version("2024-01-15T10:30:00Z", "0123456789ab").unwrap();
        assert!(v.ends_with("-0123456789ab"));
    }

    #[test]
    fn multibyte_revision_keeps_twelve_characters() {
        let v = pseudo_version("2024-01-15T10:30:00Z", "ééééééééééééé").unwrap();
        assert_eq!(v, "v0.0.0-240115103000-éééééééééééé");
        assert_eq!(pseudo_version("2024-01-15T10:30:00Z", "aéééééééé"), None);
    }

    #[test]
    fn malformed_time_yields_none() {
        assert_eq!(pseudo_version("", "abcdef123456"), None);
        assert_eq!(pseudo_version("2024-01-15 10:30:00", "abcdef123456"), None);
    }

    #[test]
    fn lenient_separators_are_rejected() {
        assert_eq!(pseudo_version("2024-01-15 10:30:00Z", "abcdef123456"), None);
        assert_eq!(pseudo_version("2024-01-15t10:30:00Z", "abcdef123456"), None);
        assert_eq!(pseudo_version("2024-01-15T10:30:00z", "abcdef123456"), None);
    }
}
