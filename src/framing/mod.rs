//! UBX frame structure and reassembly.
//!
//! A frame on the wire is the two-byte sync pair, a class byte, a message id
//! byte, a little-endian `u16` payload length, the payload itself, and two
//! checksum bytes computed over everything after the sync pair.

mod assembler;
mod checksum;

pub use assembler::*;
pub use checksum::*;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// First byte of the frame sync pair.
pub const SYNC1: u8 = 0xb5;
/// Second byte of the frame sync pair.
pub const SYNC2: u8 = 0x62;

/// Length in bytes of the sync pair, class, message id, and length field.
pub const HEADER_LEN: usize = 6;
/// Length in bytes of the checksum trailer.
pub const CHECKSUM_LEN: usize = 2;

/// One complete protocol message: class, message id, and payload.
///
/// The sync pair, length field, and checksum exist only on the wire; the
/// payload length is authoritative and the checksum is recomputed whenever
/// the frame is encoded.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
pub struct Frame {
    pub class: u8,
    pub msg_id: u8,
    pub payload: Vec<u8>,
}

impl Frame {
    /// Maximum payload length representable by the 16-bit length field.
    pub const MAX_PAYLOAD_LEN: usize = u16::MAX as usize;

    #[must_use]
    pub fn new(class: u8, msg_id: u8, payload: Vec<u8>) -> Self {
        Frame {
            class,
            msg_id,
            payload,
        }
    }

    /// Encode into the full wire image, sync pair through checksum.
    ///
    /// # Errors
    /// [`Error::PayloadTooLong`] if the payload exceeds
    /// [`Frame::MAX_PAYLOAD_LEN`].
    pub fn encode(&self) -> Result<Vec<u8>> {
        let Ok(len) = u16::try_from(self.payload.len()) else {
            return Err(Error::PayloadTooLong {
                actual: self.payload.len(),
                max: Self::MAX_PAYLOAD_LEN,
            });
        };

        let mut out = Vec::with_capacity(HEADER_LEN + self.payload.len() + CHECKSUM_LEN);
        out.extend_from_slice(&[SYNC1, SYNC2, self.class, self.msg_id]);
        out.extend_from_slice(&len.to_le_bytes());
        out.extend_from_slice(&self.payload);
        // Checksum covers everything after the sync pair.
        let ck = Checksum::over(&out[2..]);
        out.extend_from_slice(&[ck.a(), ck.b()]);

        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_ack_ack() {
        // ACK-ACK acknowledging CFG-MSG
        let frame = Frame::new(0x05, 0x01, vec![0x06, 0x01]);

        let wire = frame.encode().unwrap();

        assert_eq!(wire, hex::decode("b5620501020006010f38").unwrap());
    }

    #[test]
    fn encode_zero_length_payload() {
        let frame = Frame::new(0x06, 0x24, vec![]);

        let wire = frame.encode().unwrap();

        assert_eq!(wire, hex::decode("b562062400002a84").unwrap());
    }

    #[test]
    fn encode_rejects_oversized_payload() {
        let frame = Frame::new(0x02, 0x10, vec![0u8; Frame::MAX_PAYLOAD_LEN + 1]);

        let zult = frame.encode();

        assert!(matches!(
            zult,
            Err(Error::PayloadTooLong {
                actual: 65536,
                max: 65535
            })
        ));
    }
}
