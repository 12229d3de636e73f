use std::collections::HashMap;

use serde::Serialize;

use super::ids::{CLASS_NAV, MSG_NAV_CLOCK, MSG_NAV_SVIN};
use super::{DecodedMessage, RawMessage, Record};
use crate::framing::Frame;

/// Width and signedness of a payload field, little-endian on the wire.
///
/// Names follow the receiver protocol description: `U` unsigned, `I` signed,
/// suffix is the width in bytes.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    U1,
    I1,
    U2,
    I2,
    U4,
    I4,
}

impl FieldKind {
    /// Width in bytes.
    #[must_use]
    pub fn width(self) -> usize {
        match self {
            FieldKind::U1 | FieldKind::I1 => 1,
            FieldKind::U2 | FieldKind::I2 => 2,
            FieldKind::U4 | FieldKind::I4 => 4,
        }
    }

    #[must_use]
    pub fn is_signed(self) -> bool {
        matches!(self, FieldKind::I1 | FieldKind::I2 | FieldKind::I4)
    }

    fn read(self, payload: &[u8], offset: usize) -> i64 {
        match self {
            FieldKind::U1 => i64::from(payload[offset]),
            FieldKind::I1 => i64::from(payload[offset] as i8),
            FieldKind::U2 => {
                i64::from(u16::from_le_bytes([payload[offset], payload[offset + 1]]))
            }
            FieldKind::I2 => {
                i64::from(i16::from_le_bytes([payload[offset], payload[offset + 1]]))
            }
            FieldKind::U4 => i64::from(u32::from_le_bytes([
                payload[offset],
                payload[offset + 1],
                payload[offset + 2],
                payload[offset + 3],
            ])),
            FieldKind::I4 => i64::from(i32::from_le_bytes([
                payload[offset],
                payload[offset + 1],
                payload[offset + 2],
                payload[offset + 3],
            ])),
        }
    }
}

/// One decodable value within a message payload.
///
/// Offsets are absolute within the payload; fields need not be contiguous or
/// cover every payload byte.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub offset: usize,
    pub kind: FieldKind,
    /// Element count for repeated single-byte fields; 1 for scalars.
    pub count: usize,
}

impl FieldSpec {
    /// A scalar field of the given kind.
    #[must_use]
    pub fn new(offset: usize, kind: FieldKind, name: &'static str) -> Self {
        FieldSpec {
            name,
            offset,
            kind,
            count: 1,
        }
    }

    /// A repeated single-byte field spanning `count` payload bytes.
    ///
    /// Only the first byte is decoded; the remaining bytes reserve payload
    /// space. The receiver tables use such runs for reserved and padding
    /// areas.
    #[must_use]
    pub fn repeated(offset: usize, count: usize, name: &'static str) -> Self {
        FieldSpec {
            name,
            offset,
            kind: FieldKind::U1,
            count,
        }
    }

    fn read(&self, payload: &[u8]) -> i64 {
        self.kind.read(payload, self.offset)
    }
}

/// Named, ordered field layout for one `(class, msg id)` pair.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct MessageSpec {
    pub name: &'static str,
    pub fields: Vec<FieldSpec>,
}

impl MessageSpec {
    #[must_use]
    pub fn new(name: &'static str, fields: Vec<FieldSpec>) -> Self {
        MessageSpec { name, fields }
    }

    /// Decode `payload` into named fields, in table order.
    ///
    /// # Panics
    /// If a field addresses bytes beyond the payload. Field tables are
    /// checked against the message definitions they are written from, not at
    /// decode time; the payload length itself was already validated by the
    /// frame checksum.
    #[must_use]
    pub fn decode(&self, class: u8, msg_id: u8, payload: &[u8]) -> DecodedMessage {
        let mut fields = HashMap::with_capacity(self.fields.len());
        for spec in &self.fields {
            fields.insert(spec.name, spec.read(payload));
        }
        DecodedMessage {
            class,
            msg_id,
            name: self.name,
            fields,
        }
    }
}

/// Message specs keyed by `(class, msg id)`.
#[derive(Debug, Clone)]
pub struct Registry {
    specs: HashMap<(u8, u8), MessageSpec>,
}

impl Default for Registry {
    /// The standard registry, equivalent to [`Registry::standard`].
    fn default() -> Self {
        Self::standard()
    }
}

impl Registry {
    /// An empty registry; every frame will dispatch as [`Record::Raw`].
    #[must_use]
    pub fn new() -> Self {
        Registry {
            specs: HashMap::new(),
        }
    }

    /// The stock registry covering the built-in message tables.
    #[must_use]
    pub fn standard() -> Self {
        let mut reg = Registry::new();
        reg.register(
            CLASS_NAV,
            MSG_NAV_CLOCK,
            MessageSpec::new(
                "NAV-CLOCK",
                vec![
                    FieldSpec::new(0, FieldKind::U4, "iTOW"),
                    FieldSpec::new(4, FieldKind::I4, "clkB"),
                    FieldSpec::new(8, FieldKind::I4, "clkD"),
                    FieldSpec::new(12, FieldKind::U4, "tAcc"),
                    FieldSpec::new(16, FieldKind::U4, "fAcc"),
                ],
            ),
        );
        reg.register(
            CLASS_NAV,
            MSG_NAV_SVIN,
            MessageSpec::new(
                "NAV-SVIN",
                vec![
                    FieldSpec::new(0, FieldKind::U1, "version"),
                    FieldSpec::repeated(1, 3, "reserved1"),
                    FieldSpec::new(4, FieldKind::U4, "iTOW"),
                    FieldSpec::new(8, FieldKind::U4, "dur"),
                    FieldSpec::new(12, FieldKind::I4, "meanX"),
                    FieldSpec::new(16, FieldKind::I4, "meanY"),
                    FieldSpec::new(20, FieldKind::I4, "meanZ"),
                    FieldSpec::new(24, FieldKind::I1, "meanXHP"),
                    FieldSpec::new(25, FieldKind::I1, "meanYHP"),
                    FieldSpec::new(26, FieldKind::I1, "meanZHP"),
                    FieldSpec::new(27, FieldKind::U1, "reserved2"),
                    FieldSpec::new(28, FieldKind::U4, "meanAcc"),
                    FieldSpec::new(32, FieldKind::U4, "obs"),
                    FieldSpec::new(36, FieldKind::U1, "valid"),
                    FieldSpec::new(37, FieldKind::U1, "active"),
                    FieldSpec::repeated(38, 2, "reserved3"),
                ],
            ),
        );
        reg
    }

    /// Register or replace the spec for `(class, msg_id)`.
    pub fn register(&mut self, class: u8, msg_id: u8, spec: MessageSpec) {
        self.specs.insert((class, msg_id), spec);
    }

    /// Look up the spec for `(class, msg_id)`.
    #[must_use]
    pub fn get(&self, class: u8, msg_id: u8) -> Option<&MessageSpec> {
        self.specs.get(&(class, msg_id))
    }

    /// Dispatch a completed frame: decode it if a spec is registered,
    /// otherwise pass the payload through as a raw record.
    #[must_use]
    pub fn decode(&self, frame: Frame) -> Record {
        match self.get(frame.class, frame.msg_id) {
            Some(spec) => {
                Record::Decoded(spec.decode(frame.class, frame.msg_id, &frame.payload))
            }
            None => Record::Raw(RawMessage {
                class: frame.class,
                msg_id: frame.msg_id,
                payload: frame.payload,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(FieldKind::U1, 1, false)]
    #[test_case(FieldKind::I1, 1, true)]
    #[test_case(FieldKind::U2, 2, false)]
    #[test_case(FieldKind::I2, 2, true)]
    #[test_case(FieldKind::U4, 4, false)]
    #[test_case(FieldKind::I4, 4, true)]
    fn kind_width_and_sign(kind: FieldKind, width: usize, signed: bool) {
        assert_eq!(kind.width(), width);
        assert_eq!(kind.is_signed(), signed);
    }

    #[test_case(FieldKind::U1, &[0xff], 255)]
    #[test_case(FieldKind::I1, &[0xff], -1)]
    #[test_case(FieldKind::U2, &[0xfe, 0xff], 65534)]
    #[test_case(FieldKind::I2, &[0xfe, 0xff], -2)]
    #[test_case(FieldKind::U4, &[0xfb, 0xff, 0xff, 0xff], 4_294_967_291)]
    #[test_case(FieldKind::I4, &[0xfb, 0xff, 0xff, 0xff], -5)]
    fn kind_reads_little_endian(kind: FieldKind, payload: &[u8], expected: i64) {
        assert_eq!(kind.read(payload, 0), expected);
    }

    #[test]
    fn fields_read_at_their_offset() {
        let spec = MessageSpec::new(
            "TEST",
            vec![
                FieldSpec::new(0, FieldKind::U1, "first"),
                FieldSpec::new(3, FieldKind::U2, "second"),
            ],
        );

        let msg = spec.decode(0x99, 0x01, &[7, 0xaa, 0xbb, 0x34, 0x12]);

        assert_eq!(msg.fields["first"], 7);
        assert_eq!(msg.fields["second"], 0x1234);
        // bytes 1-2 belong to no field and are ignored
        assert_eq!(msg.fields.len(), 2);
    }

    #[test]
    fn repeated_field_decodes_first_byte_only() {
        let spec = MessageSpec::new(
            "TEST",
            vec![FieldSpec::repeated(0, 3, "reserved")],
        );

        let msg = spec.decode(0x99, 0x01, &[0x11, 0x22, 0x33]);

        assert_eq!(msg.fields["reserved"], 0x11);
    }

    #[test]
    fn lookup_of_unregistered_pair_is_none() {
        let reg = Registry::standard();

        assert!(reg.get(0x99, 0x99).is_none());
    }

    #[test]
    fn unregistered_frame_dispatches_raw() {
        let reg = Registry::standard();

        let record = reg.decode(Frame::new(0x99, 0x99, vec![1, 2, 3]));

        assert_eq!(
            record,
            Record::Raw(RawMessage {
                class: 0x99,
                msg_id: 0x99,
                payload: vec![1, 2, 3],
            })
        );
    }

    #[test]
    fn register_replaces_existing_spec() {
        let mut reg = Registry::new();
        reg.register(
            0x01,
            0x22,
            MessageSpec::new("OLD", vec![FieldSpec::new(0, FieldKind::U1, "x")]),
        );
        reg.register(
            0x01,
            0x22,
            MessageSpec::new("NEW", vec![FieldSpec::new(0, FieldKind::U2, "y")]),
        );

        let spec = reg.get(0x01, 0x22).unwrap();

        assert_eq!(spec.name, "NEW");
    }
}
