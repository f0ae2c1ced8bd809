//! Deterministic artifact file naming.

use chrono::{DateTime, Utc};

/// Maximum length of the sanitized slug portion of a file name.
const SLUG_MAX_LEN: usize = 50;

/// Derive an artifact file name from a timestamp and a suggested name.
///
/// The suggested name (usually the image prompt) is sanitized into a slug:
/// every non-alphanumeric character becomes `_`, and the slug is truncated
/// to 50 characters. The same timestamp and suggestion always produce the
/// same name.
///
/// # Examples
///
/// ```
/// use billet_storage::artifact_file_name;
/// use chrono::{TimeZone, Utc};
///
/// let at = Utc.with_ymd_and_hms(2026, 8, 7, 14, 30, 0).unwrap();
/// assert_eq!(
///     artifact_file_name(at, "a chef's knife, 8k"),
///     "20260807_143000_a_chef_s_knife__8k.jpg",
/// );
/// ```
pub fn artifact_file_name(at: DateTime<Utc>, suggested: &str) -> String {
    let slug: String = suggested
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '_' })
        .take(SLUG_MAX_LEN)
        .collect();

    format!("{}_{}.jpg", at.format("%Y%m%d_%H%M%S"), slug)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 7, 9, 5, 33).unwrap()
    }

    #[test]
    fn sanitizes_non_alphanumeric_characters() {
        assert_eq!(
            artifact_file_name(at(), "photo: knife & board!"),
            "20260807_090533_photo__knife___board_.jpg"
        );
    }

    #[test]
    fn truncates_long_slugs_to_fifty_characters() {
        let long = "x".repeat(200);
        let name = artifact_file_name(at(), &long);
        assert_eq!(name, format!("20260807_090533_{}.jpg", "x".repeat(50)));
    }

    #[test]
    fn is_deterministic_for_identical_inputs() {
        assert_eq!(
            artifact_file_name(at(), "same prompt"),
            artifact_file_name(at(), "same prompt")
        );
    }
}
