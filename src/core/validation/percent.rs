use std::sync::OnceLock;

use regex::Regex;

use super::field::{invalid, FieldPath};
use super::range::{range_detail, upper_bound_error};
use super::{regex_error, MessageList};

const PERCENT_FMT: &str = "[0-9]+%";
const PERCENT_ERR_MSG: &str =
    "a valid percent string must be a numeric string followed by an ending '%'";

fn percent_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(&format!("^{}$", PERCENT_FMT)).unwrap())
}

/// An unsigned integer followed by `%`. Values above 100 are accepted.
pub fn is_valid_percent(value: &str) -> MessageList {
    if percent_regex().is_match(value) {
        return Vec::new();
    }
    vec![invalid(
        &FieldPath::root(),
        value,
        &regex_error(PERCENT_ERR_MSG, PERCENT_FMT, &["1%", "93%"]),
    )]
}

/// A percent string whose integer part lies in `[min, max]`.
pub fn is_percent_in_range(value: &str, min: i64, max: i64) -> MessageList {
    let messages = is_valid_percent(value);
    if !messages.is_empty() {
        return messages;
    }

    let digits = value.trim_end_matches('%');
    let detail = match digits.parse::<i64>() {
        Ok(number) => range_detail(number, min, max),
        // Only digits reach here, so a parse failure is an overflow.
        Err(_) => Some(upper_bound_error(max)),
    };

    detail
        .map(|detail| vec![invalid(&FieldPath::root(), value, &detail)])
        .unwrap_or_default()
}
