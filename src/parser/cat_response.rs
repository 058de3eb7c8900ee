use anyhow::{Context, Result};
use regex::Regex;

use crate::models::IndexInfo;

/// Parses a `_cat/indices` JSON-array body into index records, one per
/// top-level object, in input order.
///
/// This is a deliberately naive splitter, not a JSON parser: it handles the
/// flat objects the cat API emits and nothing more. Values containing a
/// literal `},{` or an embedded comma will mis-split. Input that does not
/// start and end with brackets is truncated incorrectly rather than
/// rejected. These limitations are load-bearing for compatibility with the
/// slightly malformed bodies some proxies produce, so keep them.
pub fn parse_indices(raw: &str) -> Result<Vec<IndexInfo>> {
    let body = strip_outer_brackets(raw.trim());
    let object_boundary = Regex::new(r"\},\s*\{")?;

    let mut records = Vec::new();
    for chunk in object_boundary.split(body) {
        records.push(parse_record(chunk)?);
    }
    Ok(records)
}

/// Drops the first and last character by position. No balanced-bracket
/// scanning, matching the documented truncation behavior.
fn strip_outer_brackets(s: &str) -> &str {
    let mut chars = s.chars();
    chars.next();
    chars.next_back();
    chars.as_str()
}

fn parse_record(chunk: &str) -> Result<IndexInfo> {
    let flat = chunk.replace(['{', '}'], "");

    let mut name = String::new();
    let mut size_bytes: i64 = 0;
    let mut shard_count: i32 = 0;

    for fragment in flat.split(',') {
        let mut parts = fragment.splitn(2, ':');
        let (Some(key), Some(value)) = (parts.next(), parts.next()) else {
            // Fragment without a key/value shape, skip silently.
            continue;
        };

        let key = key.trim().replace('"', "");
        let value = value.trim().replace('"', "");

        match key.as_str() {
            "index" => name = value,
            "pri.store.size" => {
                size_bytes = value
                    .parse()
                    .with_context(|| format!("Invalid pri.store.size value: {}", value))?;
            }
            "pri" => {
                shard_count = value
                    .parse()
                    .with_context(|| format!("Invalid pri value: {}", value))?;
            }
            _ => {}
        }
    }

    Ok(IndexInfo::new(name, size_bytes, shard_count))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_record() {
        let raw = r#"[{"index":"a","pri.store.size":"5000000000","pri":"2"}]"#;
        let records = parse_indices(raw).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0], IndexInfo::new("a", 5_000_000_000, 2));
        assert_eq!(records[0].size_gb(), 5.0);
        assert_eq!(records[0].balance_ratio(), 2.5);
        assert_eq!(records[0].recommended_shards(), 1);
    }

    #[test]
    fn test_record_count_and_order_preserved() {
        let raw = r#"[{"index":"one","pri.store.size":"1","pri":"1"},
            {"index":"two","pri.store.size":"2","pri":"1"},
            {"index":"three","pri.store.size":"3","pri":"1"}]"#;
        let records = parse_indices(raw).unwrap();

        let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["one", "two", "three"]);
    }

    #[test]
    fn test_unrecognized_key_ignored() {
        let raw = r#"[{"index":"b","pri.store.size":"1000","pri":"1","foo":"bar"}]"#;
        let records = parse_indices(raw).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0], IndexInfo::new("b", 1000, 1));
    }

    #[test]
    fn test_missing_keys_default() {
        let raw = r#"[{"index":"only-name"}]"#;
        let records = parse_indices(raw).unwrap();

        assert_eq!(records[0], IndexInfo::new("only-name", 0, 0));
    }

    #[test]
    fn test_unquoted_values() {
        // bytes=b responses sometimes come back with bare numbers
        let raw = r#"[{"index": "plain", "pri.store.size": 42, "pri": 3}]"#;
        let records = parse_indices(raw).unwrap();

        assert_eq!(records[0], IndexInfo::new("plain", 42, 3));
    }

    #[test]
    fn test_fragment_without_colon_skipped() {
        let raw = r#"[{"index":"c","pri":"1",garbage}]"#;
        let records = parse_indices(raw).unwrap();

        assert_eq!(records[0], IndexInfo::new("c", 0, 1));
    }

    #[test]
    fn test_malformed_number_fails_whole_parse() {
        let raw = r#"[{"index":"a","pri.store.size":"12kb","pri":"1"}]"#;
        assert!(parse_indices(raw).is_err());
    }

    #[test]
    fn test_surrounding_whitespace_trimmed() {
        let raw = "  \n [{\"index\":\"w\",\"pri.store.size\":\"7\",\"pri\":\"1\"}] \n ";
        let records = parse_indices(raw).unwrap();

        assert_eq!(records[0], IndexInfo::new("w", 7, 1));
    }

    #[test]
    fn test_empty_array_yields_single_default_record() {
        // One empty chunk survives the split, so one all-default record
        // comes out. Known quirk, kept for compatibility.
        let records = parse_indices("[]").unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0], IndexInfo::new("", 0, 0));
    }
}
