#![doc = include_str!("../README.md")]

mod decode;
mod error;

pub mod framing;
pub mod message;

pub use decode::{read_records, Decoder, RecordIter};
pub use error::{Error, Result};
pub use framing::{Assembler, Checksum, Frame, Stats, SYNC1, SYNC2};
pub use message::{
    DecodedMessage, FieldKind, FieldSpec, MessageSpec, RawMessage, Record, Registry,
};
