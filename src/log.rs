//! Debug probe log streams.
//!
//! The log is a ring buffer of frames, each tagged with a stream number,
//! drained by the debug probe. A write is skipped unless the probe enabled
//! the stream, so logging costs one atomic load when nobody listens.
//!
//! With the `trace` feature, every register store is recorded on
//! [`TRACE_STREAM`] as the access width in bytes, the 32-bit address, and the
//! 64-bit stored value, all big-endian.

mod control;
mod macros;
mod stream;
#[cfg(feature = "trace")]
pub(crate) mod trace;

pub use self::stream::{Stream, StreamWrite};

use self::control::Control;
use core::{fmt, fmt::Write};

/// Maximum number of streams.
pub const STREAMS_COUNT: u8 = 32;

/// Stream number of the standard output.
pub const STDOUT_STREAM: u8 = 0;

/// Stream number of the standard error.
pub const STDERR_STREAM: u8 = 1;

/// Stream number of the register store trace.
pub const TRACE_STREAM: u8 = 31;

#[export_name = "drone_cmsis_log"]
static CONTROL: Control = Control::new();

/// Returns the standard output stream.
#[inline]
pub fn stdout() -> Stream {
    Stream::new(STDOUT_STREAM)
}

/// Returns the standard error stream.
#[inline]
pub fn stderr() -> Stream {
    Stream::new(STDERR_STREAM)
}

/// Writes `string` to the stream number `stream`.
///
/// Whether the probe listens is not checked, so it is recommended to use this
/// function together with [`Stream::is_enabled`].
///
/// ```
/// use drone_cmsis::{log, log::Stream};
///
/// if Stream::new(11).is_enabled() {
///     log::write_str(11, "clock switched\n");
/// }
/// ```
#[inline(never)]
pub fn write_str(stream: u8, string: &str) {
    Stream::new(stream).write_bytes(string.as_bytes());
}

/// Writes `args` to the stream number `stream`.
///
/// Whether the probe listens is not checked, so it is recommended to use this
/// function together with [`Stream::is_enabled`].
#[inline(never)]
pub fn write_fmt(stream: u8, args: fmt::Arguments<'_>) {
    Stream::new(stream).write_fmt(args).unwrap_or(());
}
