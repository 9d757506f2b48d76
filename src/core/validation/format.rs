//! DNS-style names and qualified names.

use std::sync::OnceLock;

use regex::Regex;

use super::field::{invalid_each, FieldPath};
use super::{empty_error, max_len_error, prefix_each, regex_error, MessageList};

pub const DNS1123_LABEL_MAX_LENGTH: usize = 63;
pub const DNS1123_SUBDOMAIN_MAX_LENGTH: usize = 253;
pub const QUALIFIED_NAME_MAX_LENGTH: usize = 63;

const DNS1123_LABEL_FMT: &str = "[a-z0-9]([-a-z0-9]*[a-z0-9])?";
const DNS1123_LABEL_ERR_MSG: &str = "a lowercase RFC 1123 label must consist of lower case alphanumeric characters or '-', and must start and end with an alphanumeric character";

const DNS1123_SUBDOMAIN_ERR_MSG: &str = "a lowercase RFC 1123 subdomain must consist of lower case alphanumeric characters, '-' or '.', and must start and end with an alphanumeric character";

const QUALIFIED_NAME_FMT: &str = "[A-Za-z0-9]([-A-Za-z0-9_.]*[A-Za-z0-9])?";
const QUALIFIED_NAME_ERR_MSG: &str =
    "must consist of alphanumeric characters, '-', '_' or '.', and must start and end with an alphanumeric character";

fn dns1123_subdomain_fmt() -> String {
    format!("{0}(\\.{0})*", DNS1123_LABEL_FMT)
}

fn dns1123_label_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(&format!("^{}$", DNS1123_LABEL_FMT)).unwrap())
}

fn dns1123_subdomain_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(&format!("^{}$", dns1123_subdomain_fmt())).unwrap())
}

fn qualified_name_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(&format!("^{}$", QUALIFIED_NAME_FMT)).unwrap())
}

/// A single lowercase RFC 1123 label, e.g. a resource name.
pub fn is_dns1123_label(value: &str) -> MessageList {
    invalid_each(&FieldPath::root(), value, dns1123_label_details(value))
}

/// Lowercase RFC 1123 labels joined by single dots.
pub fn is_dns1123_subdomain(value: &str) -> MessageList {
    invalid_each(&FieldPath::root(), value, dns1123_subdomain_details(value))
}

/// A name segment with an optional DNS subdomain prefix: `example.com/MyName`.
pub fn is_qualified_name(value: &str) -> MessageList {
    invalid_each(&FieldPath::root(), value, qualified_name_details(value))
}

fn dns1123_label_details(value: &str) -> Vec<String> {
    let mut details = Vec::new();
    if value.len() > DNS1123_LABEL_MAX_LENGTH {
        details.push(max_len_error(DNS1123_LABEL_MAX_LENGTH));
    }
    if !dns1123_label_regex().is_match(value) {
        details.push(regex_error(
            DNS1123_LABEL_ERR_MSG,
            DNS1123_LABEL_FMT,
            &["my-name", "123-abc"],
        ));
    }
    details
}

fn dns1123_subdomain_details(value: &str) -> Vec<String> {
    let mut details = Vec::new();
    if value.len() > DNS1123_SUBDOMAIN_MAX_LENGTH {
        details.push(max_len_error(DNS1123_SUBDOMAIN_MAX_LENGTH));
    }
    if !dns1123_subdomain_regex().is_match(value) {
        details.push(regex_error(
            DNS1123_SUBDOMAIN_ERR_MSG,
            &dns1123_subdomain_fmt(),
            &["example.com"],
        ));
    }
    details
}

fn qualified_name_details(value: &str) -> Vec<String> {
    let mut details = Vec::new();
    let mut parts = value.split('/');
    let first = parts.next().unwrap_or_default();

    let name = match (parts.next(), parts.next()) {
        (None, _) => first,
        (Some(name), None) => {
            if first.is_empty() {
                details.push(format!("prefix part {}", empty_error()));
            } else {
                details.extend(prefix_each(
                    "prefix part ",
                    dns1123_subdomain_details(first),
                ));
            }
            name
        }
        (Some(_), Some(_)) => {
            details.push(format!(
                "a qualified name {} with an optional DNS subdomain prefix and '/' (e.g. 'example.com/MyName')",
                regex_error(
                    QUALIFIED_NAME_ERR_MSG,
                    QUALIFIED_NAME_FMT,
                    &["MyName", "my.name", "123-abc"],
                )
            ));
            return details;
        }
    };

    if name.is_empty() {
        details.push(format!("name part {}", empty_error()));
    } else if name.len() > QUALIFIED_NAME_MAX_LENGTH {
        details.push(format!(
            "name part {}",
            max_len_error(QUALIFIED_NAME_MAX_LENGTH)
        ));
    }
    if !qualified_name_regex().is_match(name) {
        details.push(format!(
            "name part {}",
            regex_error(
                QUALIFIED_NAME_ERR_MSG,
                QUALIFIED_NAME_FMT,
                &["MyName", "my.name", "123-abc"],
            )
        ));
    }
    details
}
