//! Generic utility primitives with zero domain knowledge.
//!
//! - `encoding` - Base64 decoding with crate errors

pub mod encoding;
