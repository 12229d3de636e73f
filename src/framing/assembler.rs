use tracing::debug;

use super::{Checksum, Frame, SYNC1, SYNC2};

/// Reassembly steps, in wire order.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
enum Step {
    #[default]
    Sync1,
    Sync2,
    Class,
    MsgId,
    LenLo,
    LenHi,
    Payload,
    CkA,
    CkB,
}

/// Counters describing what the assembler has seen so far.
///
/// Checksum failures are not surfaced as errors anywhere on the decode path;
/// these counters are the observable trace they leave.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    /// Frames completed with a valid checksum.
    pub frames: u64,
    /// Frames dropped on a checksum mismatch, A or B.
    pub bad_checksums: u64,
}

/// Reassembles frames from a byte stream, one byte at a time.
///
/// The assembler holds the single long-lived parse state for one connection:
/// the current step, the partially accumulated header and payload, and the
/// two running checksum accumulators. It must be fed every byte in arrival
/// order; chunk boundaries in the transport have no effect on the result. A
/// frame split across any number of deliveries still completes.
///
/// After every completed or failed frame the machine resets itself to hunting
/// for the sync pair. There is no failure state that requires constructing a
/// new assembler, and no timeout: a source that stops producing bytes leaves
/// the machine parked mid-frame until more arrive or [`Assembler::reset`] is
/// called.
#[derive(Debug, Default)]
pub struct Assembler {
    step: Step,
    class: u8,
    msg_id: u8,
    len: u16,
    payload: Vec<u8>,
    ck: Checksum,
    /// Counters for completed and discarded frames.
    pub stats: Stats,
}

impl Assembler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the state machine with the next byte from the stream.
    ///
    /// Returns a [`Frame`] when `byte` completes a frame whose checksum
    /// matches. Bytes outside a frame and frames failing their checksum
    /// yield `None`.
    pub fn consume(&mut self, byte: u8) -> Option<Frame> {
        match self.step {
            Step::Sync1 => {
                if byte == SYNC1 {
                    self.step = Step::Sync2;
                }
            }
            Step::Sync2 => {
                // The first sync byte is never retried against the second,
                // but the mismatched byte may itself start the real pair.
                self.step = match byte {
                    SYNC2 => Step::Class,
                    SYNC1 => Step::Sync2,
                    _ => Step::Sync1,
                };
            }
            Step::Class => {
                self.ck.update(byte);
                self.class = byte;
                self.step = Step::MsgId;
            }
            Step::MsgId => {
                self.ck.update(byte);
                self.msg_id = byte;
                self.step = Step::LenLo;
            }
            Step::LenLo => {
                self.ck.update(byte);
                self.len = u16::from(byte);
                self.step = Step::LenHi;
            }
            Step::LenHi => {
                self.ck.update(byte);
                self.len |= u16::from(byte) << 8;
                // A zero-length payload is immediately satisfied.
                if self.len == 0 {
                    self.step = Step::CkA;
                } else {
                    self.payload.reserve(usize::from(self.len));
                    self.step = Step::Payload;
                }
            }
            Step::Payload => {
                self.ck.update(byte);
                self.payload.push(byte);
                if self.payload.len() == usize::from(self.len) {
                    self.step = Step::CkA;
                }
            }
            Step::CkA => {
                if byte == self.ck.a() {
                    self.step = Step::CkB;
                } else {
                    // Fail fast: the next byte is not consumed as checksum B.
                    debug!(expected = self.ck.a(), got = byte, "bad checksum a");
                    self.stats.bad_checksums += 1;
                    self.reset();
                }
            }
            Step::CkB => {
                let frame = if byte == self.ck.b() {
                    self.stats.frames += 1;
                    Some(Frame {
                        class: self.class,
                        msg_id: self.msg_id,
                        payload: std::mem::take(&mut self.payload),
                    })
                } else {
                    debug!(expected = self.ck.b(), got = byte, "bad checksum b");
                    self.stats.bad_checksums += 1;
                    None
                };
                self.reset();
                return frame;
            }
        }
        None
    }

    /// Discard any partially accumulated frame and return to hunting for the
    /// sync pair. Counters are kept.
    pub fn reset(&mut self) {
        self.step = Step::Sync1;
        self.class = 0;
        self.msg_id = 0;
        self.len = 0;
        self.payload.clear();
        self.ck = Checksum::new();
    }
}
