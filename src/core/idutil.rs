//! Time-ordered numeric ids, short string ids and random secrets.
//!
//! Numeric ids come from a sonyflake generator: 39 bits of elapsed time
//! (10 ms ticks since the start time), an 8 bit sequence and a 16 bit machine
//! id. Ids from one generator are strictly increasing. Short ids are the
//! reversed hashids encoding of a numeric id.

use std::net::{IpAddr, Ipv4Addr};

use chrono::{DateTime, TimeZone, Utc};
use harsh::Harsh;
use rand::Rng;
use sonyflake::Sonyflake;

use crate::error::{Error, Result};

pub const ALPHABET62: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ1234567890";
pub const ALPHABET36: &str = "abcdefghijklmnopqrstuvwxyz1234567890";

const BIT_LEN_SEQUENCE: u32 = 8;
const BIT_LEN_MACHINE_ID: u32 = 16;
const SEQUENCE_MASK: u64 = (1 << BIT_LEN_SEQUENCE) - 1;
const MACHINE_ID_MASK: u64 = (1 << BIT_LEN_MACHINE_ID) - 1;

const SECRET_ID_LEN: usize = 36;
const SECRET_KEY_LEN: usize = 32;

type MachineIdResult = std::result::Result<u16, Box<dyn std::error::Error + Send + Sync>>;

#[derive(Debug, Clone, Default)]
pub struct IdSettings {
    /// Epoch for the time bits. Defaults to 2014-09-01T00:00:00Z.
    pub start_time: Option<DateTime<Utc>>,
    /// Defaults to the low 16 bits of the host's private IPv4 address, or a
    /// random value when the host has none.
    pub machine_id: Option<u16>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdParts {
    pub elapsed: u64,
    pub sequence: u16,
    pub machine_id: u16,
}

pub struct IdGenerator {
    inner: Sonyflake,
    machine_id: u16,
}

impl IdGenerator {
    pub fn new(settings: IdSettings) -> Result<Self> {
        let start_time = settings.start_time.unwrap_or_else(default_start_time);
        let machine_id = settings.machine_id.unwrap_or_else(default_machine_id);
        let machine_id_source = move || -> MachineIdResult { Ok(machine_id) };

        let inner = Sonyflake::builder()
            .start_time(start_time)
            .machine_id(&machine_id_source)
            .finalize()
            .map_err(generator_error)?;

        Ok(Self { inner, machine_id })
    }

    pub fn machine_id(&self) -> u16 {
        self.machine_id
    }

    /// Waits for the next tick when the sequence for the current one is used up.
    pub fn next_id(&self) -> Result<u64> {
        self.inner.next_id().map_err(generator_error)
    }

    /// Short id over the 62 character alphabet, e.g. `B6BZVN3mOPvx`.
    pub fn get_uuid(&self, prefix: &str) -> Result<String> {
        self.prefixed(prefix, ALPHABET62)
    }

    /// Short id over the lowercase 36 character alphabet, e.g. `300m50zn91nwz5`.
    pub fn get_uuid36(&self, prefix: &str) -> Result<String> {
        self.prefixed(prefix, ALPHABET36)
    }

    fn prefixed(&self, prefix: &str, alphabet: &str) -> Result<String> {
        let encoded = encode(self.next_id()?, alphabet)?;
        Ok(format!("{}{}", prefix, encoded.chars().rev().collect::<String>()))
    }
}

pub fn decompose(id: u64) -> IdParts {
    IdParts {
        elapsed: id >> (BIT_LEN_SEQUENCE + BIT_LEN_MACHINE_ID),
        sequence: ((id >> BIT_LEN_MACHINE_ID) & SEQUENCE_MASK) as u16,
        machine_id: (id & MACHINE_ID_MASK) as u16,
    }
}

/// Hashids encoding of `id` with an empty salt and no minimum length.
pub fn encode(id: u64, alphabet: &str) -> Result<String> {
    Ok(hasher(alphabet)?.encode(&[id]))
}

pub fn decode(text: &str, alphabet: &str) -> Result<u64> {
    if text.is_empty() {
        return Err(Error::id_encode_failed("encoded id is empty"));
    }
    let values = hasher(alphabet)?
        .decode(text)
        .map_err(|err| Error::id_encode_failed(err.to_string()))?;
    match values.as_slice() {
        [id] => Ok(*id),
        _ => Err(Error::id_encode_failed(format!(
            "expected one encoded id, found {}",
            values.len()
        ))),
    }
}

fn hasher(alphabet: &str) -> Result<Harsh> {
    Harsh::builder()
        .alphabet(alphabet)
        .build()
        .map_err(|err| Error::id_encode_failed(err.to_string()))
}

pub fn new_secret_id() -> String {
    random_string(ALPHABET62, SECRET_ID_LEN)
}

/// Also suitable as a generated password.
pub fn new_secret_key() -> String {
    random_string(ALPHABET62, SECRET_KEY_LEN)
}

fn random_string(alphabet: &str, len: usize) -> String {
    let symbols = alphabet.as_bytes();
    let mut rng = rand::thread_rng();
    (0..len)
        .map(|_| symbols[rng.gen_range(0..symbols.len())] as char)
        .collect()
}

fn generator_error(err: sonyflake::Error) -> Error {
    match err {
        sonyflake::Error::OverTimeLimit => Error::id_time_overflow(),
        sonyflake::Error::StartTimeAheadOfCurrentTime(start_time) => {
            Error::validation_invalid_argument(
                "start_time",
                "start time must not be in the future",
                Some(start_time.to_rfc3339()),
            )
        }
        other => Error::id_generator_failed(other.to_string()),
    }
}

fn default_start_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2014, 9, 1, 0, 0, 0)
        .single()
        .unwrap_or(DateTime::UNIX_EPOCH)
}

fn default_machine_id() -> u16 {
    match local_ip_address::local_ip() {
        Ok(IpAddr::V4(ip)) if ip.is_private() => machine_id_from_ip(ip),
        _ => rand::random(),
    }
}

fn machine_id_from_ip(ip: Ipv4Addr) -> u16 {
    let octets = ip.octets();
    u16::from(octets[2]) << 8 | u16::from(octets[3])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    fn generator(machine_id: u16) -> IdGenerator {
        IdGenerator::new(IdSettings {
            machine_id: Some(machine_id),
            ..IdSettings::default()
        })
        .unwrap()
    }

    #[test]
    fn ids_are_strictly_increasing() {
        let gen = generator(7);
        let mut last = 0;
        for _ in 0..1000 {
            let id = gen.next_id().unwrap();
            assert!(id > last);
            last = id;
        }
    }

    #[test]
    fn id_carries_machine_id() {
        let gen = generator(0xbeef);
        let parts = decompose(gen.next_id().unwrap());
        assert_eq!(parts.machine_id, 0xbeef);
        assert!(parts.elapsed > 0);
    }

    #[test]
    fn machine_id_uses_low_octets() {
        assert_eq!(machine_id_from_ip(Ipv4Addr::new(10, 0, 1, 2)), 0x0102);
        assert_eq!(machine_id_from_ip(Ipv4Addr::new(192, 168, 255, 7)), 0xff07);
    }

    #[test]
    fn default_settings_build_a_generator() {
        let gen = IdGenerator::new(IdSettings::default()).unwrap();
        let parts = decompose(gen.next_id().unwrap());
        assert_eq!(parts.machine_id, gen.machine_id());
    }

    #[test]
    fn future_start_time_is_rejected() {
        let err = IdGenerator::new(IdSettings {
            start_time: Some(Utc::now() + chrono::Duration::days(1)),
            machine_id: Some(1),
        })
        .err()
        .unwrap();
        assert_eq!(err.code, ErrorCode::ValidationInvalidArgument);
    }

    #[test]
    fn exhausted_time_space_is_an_error() {
        let gen = IdGenerator::new(IdSettings {
            start_time: Some(Utc.with_ymd_and_hms(1800, 1, 1, 0, 0, 0).unwrap()),
            machine_id: Some(1),
        })
        .unwrap();
        assert_eq!(gen.next_id().unwrap_err().code, ErrorCode::IdTimeOverflow);
    }

    #[test]
    fn encode_decode_inverse() {
        for id in [0u64, 1, 61, 62, 12345678901234, u64::MAX] {
            let encoded = encode(id, ALPHABET62).unwrap();
            assert!(encoded.chars().all(|c| ALPHABET62.contains(c)));
            assert_eq!(decode(&encoded, ALPHABET62).unwrap(), id);

            let encoded = encode(id, ALPHABET36).unwrap();
            assert!(encoded.chars().all(|c| ALPHABET36.contains(c)));
            assert_eq!(decode(&encoded, ALPHABET36).unwrap(), id);
        }
    }

    #[test]
    fn encode_rejects_short_alphabets() {
        assert_eq!(encode(1, "abc").unwrap_err().code, ErrorCode::IdEncodeFailed);
    }

    #[test]
    fn decode_rejects_foreign_input() {
        assert!(decode("ab-c", ALPHABET36).is_err());
        assert!(decode("", ALPHABET36).is_err());
    }

    #[test]
    fn short_ids_use_prefix_and_alphabet() {
        let gen = generator(9);
        let id = gen.get_uuid36("user-").unwrap();
        let body = id.strip_prefix("user-").unwrap();
        assert!(body.chars().all(|c| ALPHABET36.contains(c)));

        let reversed: String = body.chars().rev().collect();
        let parts = decompose(decode(&reversed, ALPHABET36).unwrap());
        assert_eq!(parts.machine_id, 9);
    }

    #[test]
    fn secrets_have_fixed_lengths() {
        let id = new_secret_id();
        let key = new_secret_key();
        assert_eq!(id.len(), 36);
        assert_eq!(key.len(), 32);
        assert!(id.chars().chain(key.chars()).all(|c| ALPHABET62.contains(c)));
        assert_ne!(new_secret_key(), new_secret_key());
    }
}
