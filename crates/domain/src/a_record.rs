//! Classification of raw A-record values.

/// ASCII status markers, matched case-insensitively.
const PLACEHOLDER_MARKERS: [&str; 5] = ["error", "timeout", "no such record", "nxdomain", "noanswer"];

/// Markers written by older releases into stored history.
const LEGACY_PLACEHOLDER_MARKERS: [&str; 5] = ["错误", "不存在", "超时", "没有 A 记录", "没有A记录"];

/// Annotations appended to addresses for display only.
const ANNOTATION_MARKERS: [&str; 2] = ["(consistent)", "(一致)"];

/// True when the value is a status/error string rather than an answer.
pub fn is_placeholder(value: &str) -> bool {
    let lowered = value.to_ascii_lowercase();
    PLACEHOLDER_MARKERS.iter().any(|m| lowered.contains(m))
        || LEGACY_PLACEHOLDER_MARKERS.iter().any(|m| value.contains(m))
}

/// Removes display annotations (and the whitespace around them) and trims.
pub fn clean_a_record_value(value: &str) -> String {
    let mut cleaned = value.to_string();

    for marker in ANNOTATION_MARKERS {
        while let Some(start) = cleaned.find(marker) {
            let end = start + marker.len();
            let head = cleaned[..start].trim_end();
            let tail = cleaned[end..].trim_start();
            cleaned = format!("{}{}", head, tail);
        }
    }

    cleaned.trim().to_string()
}

/// Dotted-quad shape check: four groups of one to three ASCII digits.
///
/// Only the shape is checked, `999.1.1.1` passes.
pub fn is_likely_ipv4(value: &str) -> bool {
    let mut groups = 0;
    for group in value.split('.') {
        groups += 1;
        if group.is_empty() || group.len() > 3 || !group.bytes().all(|b| b.is_ascii_digit()) {
            return false;
        }
    }
    groups == 4
}
