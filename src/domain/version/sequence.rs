// src/domain/version/sequence.rs
//
// Sequence-string helpers. A sequence string is a padded path with a
// trailing frame range, e.g. `name.####.exr 1-10`, the form host
// applications accept for image-sequence inputs.

use regex::Regex;

use crate::domain::pattern::PatternCatalog;

/// Append a frame range to a padded path.
///
/// ex: `("name.####.exr", 1, 10)` -> `"name.####.exr 1-10"`
pub fn format_sequence(padded_path: &str, first: i64, last: i64) -> String {
    format!("{} {}-{}", padded_path, first, last)
}

/// Split a trailing ` first-last` range off a sequence string.
///
/// ex: `"name.####.exr 1-10"` -> `("name.####.exr", Some((1, 10)))`
pub fn strip_sequence(text: &str) -> (String, Option<(i64, i64)>) {
    if let Ok(range_re) = Regex::new(r"\s(\d+)-(\d+)$") {
        if let Some(caps) = range_re.captures(text) {
            let whole = caps.get(0);
            let first = caps.get(1).and_then(|m| m.as_str().parse().ok());
            let last = caps.get(2).and_then(|m| m.as_str().parse().ok());
            if let (Some(whole), Some(first), Some(last)) = (whole, first, last) {
                return (text[..whole.start()].to_string(), Some((first, last)));
            }
        }
    }
    (text.to_string(), None)
}

/// Replace the last padding token in a padded path with a zero-filled
/// frame number.
///
/// ex: `"name.####.exr"` -> `"name.0001.exr"`
/// ex: `"name.%02d.exr"` -> `"name.01.exr"`
pub fn set_frame(padded_path: &str, frame: i64, catalog: &PatternCatalog) -> String {
    for pattern in catalog.padding_patterns() {
        if let Some(m) = pattern.find_all(padded_path).into_iter().last() {
            let filled = format!("{:0width$}", frame, width = m.width);
            return format!(
                "{}{}{}",
                &padded_path[..m.start],
                filled,
                &padded_path[m.end..]
            );
        }
    }
    padded_path.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_and_strip() {
        let sequence = format_sequence("name.####.exr", 1, 10);
        assert_eq!(sequence, "name.####.exr 1-10");
        assert_eq!(
            strip_sequence(&sequence),
            ("name.####.exr".to_string(), Some((1, 10)))
        );
    }

    #[test]
    fn test_strip_without_range() {
        assert_eq!(
            strip_sequence("name.####.exr"),
            ("name.####.exr".to_string(), None)
        );
    }

    #[test]
    fn test_set_frame_hash() {
        let catalog = PatternCatalog::default();
        assert_eq!(set_frame("name.####.exr", 1, &catalog), "name.0001.exr");
    }

    #[test]
    fn test_set_frame_printf() {
        let catalog = PatternCatalog::default();
        assert_eq!(set_frame("name.%02d.exr", 1, &catalog), "name.01.exr");
    }

    #[test]
    fn test_set_frame_replaces_last_token_only() {
        let catalog = PatternCatalog::default();
        assert_eq!(
            set_frame("name.####.other.####.exr", 7, &catalog),
            "name.####.other.0007.exr"
        );
    }

    #[test]
    fn test_set_frame_without_padding() {
        let catalog = PatternCatalog::default();
        assert_eq!(set_frame("name.exr", 1, &catalog), "name.exr");
    }
}
