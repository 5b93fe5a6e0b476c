//! Cleans raw output-parameter keys emitted by workflow runs.
//!
//! Run history describes outputs with keys such as `outputs.$.body.$.id`. The
//! `$` fragments are artifacts of the run's token paths and carry no shape
//! information, so they are stripped before the key is split into the path
//! segments that drive nesting in the schema tree.

const OUTPUTS_PREFIX: &str = "outputs.$.";
const OUTPUTS_ROOT: &str = "outputs.$";
const BODY_PREFIX: &str = "body.$.";
const BODY_ROOT: &str = "body.$";

/// Strips artifact markers from a raw key.
///
/// Keys without markers are returned unchanged. A key that only names the
/// outputs root (`outputs.$`) normalizes to the empty string.
pub fn normalize_key(raw: &str) -> String {
    let key = if let Some(rest) = raw.strip_prefix(OUTPUTS_PREFIX) {
        rest
    } else if raw == OUTPUTS_ROOT {
        ""
    } else {
        raw
    };

    let key = if let Some(rest) = key.strip_prefix(BODY_PREFIX) {
        format!("body.{}", rest)
    } else if key == BODY_ROOT {
        "body".to_string()
    } else {
        key.to_string()
    };

    key.replace(".$.", ".").replace("$.", "").replace(".$", "")
}

/// Normalizes a raw key and splits it into ordered path segments.
///
/// An empty result addresses the root of the schema tree.
pub fn key_segments(raw: &str) -> Vec<String> {
    let key = normalize_key(raw);
    if key.is_empty() {
        return Vec::new();
    }
    key.split('.').map(str::to_string).collect()
}
