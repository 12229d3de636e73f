//! UBX message decoding: field specifications, the message registry, and the
//! records emitted for completed frames.

pub mod ids;
mod registry;

pub use registry::*;

use std::collections::HashMap;

use serde::Serialize;

/// A record emitted for one successfully checksummed frame.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub enum Record {
    /// The frame's type was registered and its payload decoded.
    Decoded(DecodedMessage),
    /// No spec is registered for the frame's type; payload passed through.
    Raw(RawMessage),
}

impl Record {
    #[must_use]
    pub fn class(&self) -> u8 {
        match self {
            Record::Decoded(msg) => msg.class,
            Record::Raw(msg) => msg.class,
        }
    }

    #[must_use]
    pub fn msg_id(&self) -> u8 {
        match self {
            Record::Decoded(msg) => msg.msg_id,
            Record::Raw(msg) => msg.msg_id,
        }
    }
}

/// Payload of a known message type decoded into named integer fields.
///
/// Values are widened to `i64`, which represents every field kind exactly.
/// Repeated single-byte fields decode only their first byte.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct DecodedMessage {
    pub class: u8,
    pub msg_id: u8,
    /// Registry name of the message type, e.g. `NAV-CLOCK`.
    pub name: &'static str,
    pub fields: HashMap<&'static str, i64>,
}

/// Fallback record for a frame with no registered message spec.
///
/// The payload is carried verbatim; nothing about it is interpreted.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct RawMessage {
    pub class: u8,
    pub msg_id: u8,
    pub payload: Vec<u8>,
}
