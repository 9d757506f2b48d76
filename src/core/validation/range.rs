use super::field::{invalid_int, FieldPath};
use super::MessageList;

pub const PORT_MIN: i64 = 1;
pub const PORT_MAX: i64 = 65535;

/// Check `min <= value <= max`.
///
/// The lower bound is checked first and at most one message is produced.
/// With inverted bounds (`min > max`) no value can satisfy both, so every
/// value is reported: below `min` against the lower bound, anything else
/// against the upper bound.
pub fn is_in_range(value: i64, min: i64, max: i64) -> MessageList {
    match range_detail(value, min, max) {
        Some(detail) => vec![invalid_int(&FieldPath::root(), value, &detail)],
        None => Vec::new(),
    }
}

pub fn is_valid_port_num(port: i64) -> MessageList {
    is_in_range(port, PORT_MIN, PORT_MAX)
}

pub(crate) fn range_detail(value: i64, min: i64, max: i64) -> Option<String> {
    if value < min {
        Some(lower_bound_error(min))
    } else if value > max {
        Some(upper_bound_error(max))
    } else {
        None
    }
}

pub(crate) fn lower_bound_error(min: i64) -> String {
    format!("must be greater than or equal to {}", min)
}

pub(crate) fn upper_bound_error(max: i64) -> String {
    format!("must be less than or equal to {}", max)
}
