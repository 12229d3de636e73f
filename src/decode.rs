use std::collections::VecDeque;
use std::io::{ErrorKind, Read};

use tracing::trace;
use typed_builder::TypedBuilder;

use crate::framing::{Assembler, Stats};
use crate::message::{Record, Registry};
use crate::{Error, Result};

/// Drives frame reassembly over chunked input and dispatches every completed
/// frame through a [`Registry`].
///
/// The decoder owns the single long-lived parse state for one byte-stream
/// connection. It is fed chunks of any size, in arrival order, by one caller
/// at a time; processing a byte never blocks and never suspends.
///
/// # Examples
/// ```
/// use ubx::{Decoder, Registry};
///
/// let mut decoder = Decoder::builder().registry(Registry::standard()).build();
/// // A lone sync byte completes nothing; state is kept for the next chunk.
/// assert!(decoder.feed(&[0xb5]).is_empty());
/// ```
#[derive(Debug, TypedBuilder)]
pub struct Decoder {
    /// Message specs consulted for every completed frame.
    #[builder(default)]
    registry: Registry,
    #[builder(default, setter(skip))]
    assembler: Assembler,
}

impl Default for Decoder {
    fn default() -> Self {
        Decoder::builder().build()
    }
}

impl Decoder {
    /// Feed a chunk of bytes, returning the records it completed.
    ///
    /// Every successfully checksummed frame produces exactly one record, in
    /// the order frames complete. Chunks may split frames anywhere; an empty
    /// chunk is a no-op.
    pub fn feed(&mut self, chunk: &[u8]) -> Vec<Record> {
        let mut records = Vec::new();
        for &byte in chunk {
            if let Some(frame) = self.assembler.consume(byte) {
                trace!(
                    class = frame.class,
                    msg_id = frame.msg_id,
                    len = frame.payload.len(),
                    "frame"
                );
                records.push(self.registry.decode(frame));
            }
        }
        records
    }

    /// Discard any partially accumulated frame and return to hunting for the
    /// sync pair.
    pub fn reset(&mut self) {
        self.assembler.reset();
    }

    /// Counters for completed and discarded frames.
    #[must_use]
    pub fn stats(&self) -> Stats {
        self.assembler.stats
    }

    /// The registry consulted for completed frames, e.g. to register
    /// additional message specs.
    pub fn registry_mut(&mut self) -> &mut Registry {
        &mut self.registry
    }
}

/// Decode records from `reader` until end of stream.
///
/// Bytes are pulled in arbitrarily sized chunks; frame boundaries need not
/// align with reads. The iterator ends at EOF, dropping any incomplete frame
/// without emission, which is the normal end-of-connection condition and not
/// an error. Other I/O errors are yielded as [`Error::Io`].
pub fn read_records<R>(reader: R, registry: Registry) -> RecordIter<R>
where
    R: Read + Send,
{
    RecordIter {
        reader,
        decoder: Decoder::builder().registry(registry).build(),
        buf: vec![0u8; RecordIter::<R>::CHUNK_LEN].into_boxed_slice(),
        pending: VecDeque::new(),
        done: false,
    }
}

/// Iterator created by [`read_records`].
pub struct RecordIter<R>
where
    R: Read + Send,
{
    reader: R,
    decoder: Decoder,
    buf: Box<[u8]>,
    pending: VecDeque<Record>,
    done: bool,
}

impl<R> RecordIter<R>
where
    R: Read + Send,
{
    const CHUNK_LEN: usize = 8192;

    /// Counters from the underlying decoder.
    #[must_use]
    pub fn stats(&self) -> Stats {
        self.decoder.stats()
    }
}

impl<R> Iterator for RecordIter<R>
where
    R: Read + Send,
{
    type Item = Result<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(record) = self.pending.pop_front() {
                return Some(Ok(record));
            }
            if self.done {
                return None;
            }
            match self.reader.read(&mut self.buf) {
                Ok(0) => self.done = true,
                Ok(n) => {
                    let chunk = &self.buf[..n];
                    self.pending.extend(self.decoder.feed(chunk));
                }
                Err(err) if err.kind() == ErrorKind::Interrupted => {}
                Err(err) => {
                    self.done = true;
                    return Some(Err(Error::Io(err)));
                }
            }
        }
    }
}
