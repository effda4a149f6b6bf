// src/services/builder.rs
//
// Result Builder
//
// Converts version buckets into ordered `Version` records. The first
// file of each (already sorted) bucket is the representative: the
// padding literal is spliced back over its frame span to recover the
// canonical padded path, and every member contributes the literal
// substring at that span as a frame.

use std::collections::BTreeMap;

use crate::domain::pattern::PaddingMatch;
use crate::domain::version::Version;

pub fn build(
    groups: &BTreeMap<Option<String>, Vec<String>>,
    padding_match: Option<&PaddingMatch>,
) -> Vec<Version> {
    let mut result = Vec::with_capacity(groups.len());

    for (version_key, files) in groups {
        let representative = match files.first() {
            Some(file) => file,
            None => continue,
        };

        match padding_match {
            Some(padding) => {
                // In discovered files the token occupies `width` chars
                // starting at its original offset.
                let start = padding.start;
                let end = start + padding.width;

                let padded_path = match representative.get(start..end) {
                    Some(_) => {
                        let mut path = representative.clone();
                        path.replace_range(start..end, &padding.text);
                        path
                    }
                    None => representative.clone(),
                };

                let frames = files
                    .iter()
                    .filter_map(|file| file.get(start..end).map(str::to_string))
                    .collect();

                result.push(Version::new(padded_path, version_key.clone(), frames));
            }
            None => {
                result.push(Version::new(
                    representative.clone(),
                    version_key.clone(),
                    Vec::new(),
                ));
            }
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn groups_of(entries: &[(Option<&str>, &[&str])]) -> BTreeMap<Option<String>, Vec<String>> {
        entries
            .iter()
            .map(|(key, files)| {
                (
                    key.map(str::to_string),
                    files.iter().map(|f| f.to_string()).collect(),
                )
            })
            .collect()
    }

    #[test]
    fn test_build_without_padding() {
        let groups = groups_of(&[(Some("v01"), &["v01.jpg"][..])]);
        let versions = build(&groups, None);
        assert_eq!(versions.len(), 1);
        assert_eq!(versions[0].padded_path, "v01.jpg");
        assert_eq!(versions[0].version_key.as_deref(), Some("v01"));
        assert!(versions[0].frames.is_empty());
    }

    #[test]
    fn test_build_restores_hash_literal_and_reads_frames() {
        let padding = PaddingMatch {
            start: 3,
            end: 7,
            width: 4,
            text: "####".to_string(),
        };
        let groups = groups_of(&[(Some("v1"), &["v1_0007.jpg", "v1_0010.jpg"][..])]);
        let versions = build(&groups, Some(&padding));
        assert_eq!(versions.len(), 1);
        assert_eq!(versions[0].padded_path, "v1_####.jpg");
        assert_eq!(versions[0].frames, vec!["0007", "0010"]);
    }

    #[test]
    fn test_build_restores_printf_literal_at_expanded_span() {
        // `%03d` occupied 4 chars in the probe; in discovered files the
        // frame occupies 3, starting at the same offset.
        let padding = PaddingMatch {
            start: 3,
            end: 7,
            width: 3,
            text: "%03d".to_string(),
        };
        let groups = groups_of(&[(Some("v1"), &["v1_001.jpg", "v1_010.jpg"][..])]);
        let versions = build(&groups, Some(&padding));
        assert_eq!(versions[0].padded_path, "v1_%03d.jpg");
        assert_eq!(versions[0].frames, vec!["001", "010"]);
    }

    #[test]
    fn test_build_orders_buckets_none_first() {
        let groups = groups_of(&[
            (Some("v02"), &["v02.jpg"][..]),
            (None, &["plain.jpg"][..]),
            (Some("v01"), &["v01.jpg"][..]),
        ]);
        let versions = build(&groups, None);
        let keys: Vec<_> = versions.iter().map(|v| v.version_key.clone()).collect();
        assert_eq!(
            keys,
            vec![None, Some("v01".to_string()), Some("v02".to_string())]
        );
    }

    #[test]
    fn test_build_empty_groups() {
        let groups = BTreeMap::new();
        assert!(build(&groups, None).is_empty());
    }
}
