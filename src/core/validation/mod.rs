//! Grammar checks for identifiers, addresses and numeric values.
//!
//! Every check returns a [`MessageList`]. An empty list means the value is
//! accepted; otherwise each entry describes one violated constraint, in the
//! order the constraints were evaluated. Checks are pure and may be called
//! from any thread.

pub mod field;
pub mod format;
pub mod ip;
pub mod percent;
pub mod range;

pub use field::FieldPath;
pub use format::{
    is_dns1123_label, is_dns1123_subdomain, is_qualified_name, DNS1123_LABEL_MAX_LENGTH,
    DNS1123_SUBDOMAIN_MAX_LENGTH, QUALIFIED_NAME_MAX_LENGTH,
};
pub use ip::{is_valid_ip, is_valid_ipv4_address, is_valid_ipv6_address, parse_ip};
pub use percent::{is_percent_in_range, is_valid_percent};
pub use range::{is_in_range, is_valid_port_num, PORT_MAX, PORT_MIN};

use crate::error::{Error, Result};

/// Ordered violation descriptions. Empty means valid.
pub type MessageList = Vec<String>;

/// Convert a message list into a `Result` for callers that reject with `?`.
pub fn ensure_valid(path: &FieldPath, value: &str, messages: MessageList) -> Result<()> {
    if messages.is_empty() {
        return Ok(());
    }
    let field = (!path.is_root()).then(|| path.to_string());
    Err(Error::validation_failed(field, value, messages))
}

pub(crate) fn max_len_error(length: usize) -> String {
    format!("must be no more than {} characters", length)
}

pub(crate) fn empty_error() -> String {
    "must be non-empty".to_string()
}

/// Describe a failed pattern: `msg (e.g. 'a' or 'b', regex used for validation is 'fmt')`.
pub(crate) fn regex_error(msg: &str, fmt: &str, examples: &[&str]) -> String {
    if examples.is_empty() {
        return format!("{} (regex used for validation is '{}')", msg, fmt);
    }
    let examples = examples
        .iter()
        .map(|example| format!("'{}'", example))
        .collect::<Vec<_>>()
        .join(" or ");
    format!(
        "{} (e.g. {}, regex used for validation is '{}')",
        msg, examples, fmt
    )
}

pub(crate) fn prefix_each(prefix: &str, details: Vec<String>) -> Vec<String> {
    details
        .into_iter()
        .map(|detail| format!("{}{}", prefix, detail))
        .collect()
}
