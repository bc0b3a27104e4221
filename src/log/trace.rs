use super::{Stream, TRACE_STREAM};
use crate::reg::RegRaw;

/// Size of a register store record.
pub(crate) const RECORD_SIZE: usize = 13;

#[inline]
pub(crate) fn store<R: RegRaw>(address: usize, raw: R) {
    #[inline(never)]
    fn trace(stream: Stream, width: u32, address: usize, value: u64) {
        stream.write_bytes(&record(width, address, value));
    }
    let stream = Stream::new(TRACE_STREAM);
    if stream.is_enabled() {
        trace(stream, R::WIDTH, address, raw.widen());
    }
}

/// Encodes a store as the access width in bytes, the 32-bit address, and the
/// value, both big-endian.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn record(width: u32, address: usize, value: u64) -> [u8; RECORD_SIZE] {
    let mut record = [0; RECORD_SIZE];
    record[0] = (width / 8) as u8;
    record[1..5].copy_from_slice(&(address as u32).to_be_bytes());
    record[5..].copy_from_slice(&value.to_be_bytes());
    record
}
