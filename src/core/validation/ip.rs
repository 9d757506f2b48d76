//! IP address literals.
//!
//! Only literals are recognised: no brackets, ports, zone identifiers or
//! host names. IPv4 octets may carry leading zeros (`1.1.1.01`).

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use super::field::{invalid, FieldPath};
use super::MessageList;

/// Any IP literal, either family.
pub fn is_valid_ip(value: &str) -> MessageList {
    if parse_ip(value).is_some() {
        return Vec::new();
    }
    vec![invalid(
        &FieldPath::root(),
        value,
        "must be a valid IP address, (e.g. 10.9.8.7 or 2001:db8::ffff)",
    )]
}

pub fn is_valid_ipv4_address(path: &FieldPath, value: &str) -> MessageList {
    if parse_ipv4(value).is_some() {
        return Vec::new();
    }
    vec![invalid(path, value, "must be a valid IPv4 address")]
}

pub fn is_valid_ipv6_address(path: &FieldPath, value: &str) -> MessageList {
    if parse_ipv6(value).is_some() {
        return Vec::new();
    }
    vec![invalid(path, value, "must be a valid IPv6 address")]
}

pub fn parse_ip(value: &str) -> Option<IpAddr> {
    parse_ipv4(value)
        .map(IpAddr::V4)
        .or_else(|| parse_ipv6(value).map(IpAddr::V6))
}

fn parse_ipv4(value: &str) -> Option<Ipv4Addr> {
    let mut octets = [0u8; 4];
    let mut parts = value.split('.');
    for octet in octets.iter_mut() {
        *octet = parse_octet(parts.next()?)?;
    }
    if parts.next().is_some() {
        return None;
    }
    Some(Ipv4Addr::from(octets))
}

fn parse_octet(part: &str) -> Option<u8> {
    // `u8::from_str` alone would also take a leading '+'.
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

fn parse_ipv6(value: &str) -> Option<Ipv6Addr> {
    let mut segments = [0u16; 8];

    match value.split_once("::") {
        None => {
            if parse_hextets(value, &mut segments)? != 8 {
                return None;
            }
        }
        Some((head, tail)) => {
            if tail.contains("::") {
                return None;
            }
            let mut head_groups = [0u16; 8];
            let mut tail_groups = [0u16; 8];
            let head_len = if head.is_empty() {
                0
            } else {
                parse_hextets(head, &mut head_groups)?
            };
            let tail_len = if tail.is_empty() {
                0
            } else {
                parse_hextets(tail, &mut tail_groups)?
            };
            // `::` stands for at least one zero group.
            if head_len + tail_len > 7 {
                return None;
            }
            if head_len > 0 && head_groups_end_in_ipv4(head) {
                return None;
            }
            segments[..head_len].copy_from_slice(&head_groups[..head_len]);
            segments[8 - tail_len..].copy_from_slice(&tail_groups[..tail_len]);
        }
    }

    Some(Ipv6Addr::from(segments))
}

/// Parse colon-separated hextets into `out`, returning how many groups were
/// written. The final group may be a dotted quad, which fills two groups.
fn parse_hextets(text: &str, out: &mut [u16; 8]) -> Option<usize> {
    let mut count = 0;
    let mut parts = text.split(':').peekable();

    while let Some(part) = parts.next() {
        if parts.peek().is_none() && part.contains('.') {
            let [a, b, c, d] = parse_ipv4(part)?.octets();
            if count + 2 > out.len() {
                return None;
            }
            out[count] = u16::from_be_bytes([a, b]);
            out[count + 1] = u16::from_be_bytes([c, d]);
            return Some(count + 2);
        }
        if count == out.len() {
            return None;
        }
        out[count] = parse_hextet(part)?;
        count += 1;
    }

    Some(count)
}

fn parse_hextet(part: &str) -> Option<u16> {
    if part.is_empty() || part.len() > 4 || !part.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u16::from_str_radix(part, 16).ok()
}

fn head_groups_end_in_ipv4(head: &str) -> bool {
    head.rsplit(':').next().is_some_and(|last| last.contains('.'))
}
