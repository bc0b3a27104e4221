use super::{control::Control, CONTROL, STREAMS_COUNT};
use core::{fmt, fmt::Write};

/// Logging stream handle.
#[derive(Clone, Copy)]
pub struct Stream {
    number: u8,
    control: &'static Control,
}

/// Value that can be written to a stream as one atomic frame.
pub trait StreamWrite: Copy {
    /// Writes `value` in big-endian order.
    fn stream_write(stream: Stream, value: Self);
}

impl Stream {
    /// Creates a new stream handle.
    ///
    /// # Panics
    ///
    /// If `stream` is more than or equal to [`STREAMS_COUNT`].
    #[inline]
    pub fn new(stream: u8) -> Self {
        Self::with_control(stream, &CONTROL)
    }

    pub(crate) fn with_control(number: u8, control: &'static Control) -> Self {
        assert!(number < STREAMS_COUNT);
        Self { number, control }
    }

    /// Returns the stream number.
    #[inline]
    pub fn number(self) -> u8 {
        self.number
    }

    /// Returns `true` if the debug probe is listening to the stream.
    #[inline]
    pub fn is_enabled(self) -> bool {
        self.control.is_enabled(self.number)
    }

    /// Writes a sequence of bytes to the stream.
    ///
    /// A sequence of up to 255 bytes is never interleaved with concurrent
    /// writes. Longer sequences are split.
    #[inline]
    pub fn write_bytes(self, bytes: &[u8]) -> Self {
        self.control.write_bytes(self.number, bytes);
        self
    }

    /// Writes an atomic byte sequence to the stream. `T` can be one of `u8`,
    /// `u16`, `u32`, `u64`.
    ///
    /// Bytes are written in big-endian order. It's guaranteed that all bytes of
    /// `value` will not be split.
    #[inline]
    pub fn write<T: StreamWrite>(self, value: T) -> Self {
        T::stream_write(self, value);
        self
    }
}

impl Write for Stream {
    #[inline]
    fn write_str(&mut self, string: &str) -> fmt::Result {
        self.write_bytes(string.as_bytes());
        Ok(())
    }
}

macro_rules! stream_write {
    ($type:ty) => {
        impl StreamWrite for $type {
            #[inline]
            fn stream_write(stream: Stream, value: Self) {
                stream.control.write_frame(stream.number, &value.to_be_bytes());
            }
        }
    };
}

stream_write!(u8);
stream_write!(u16);
stream_write!(u32);
stream_write!(u64);

#[cfg(test)]
mod tests {
    use super::*;

    fn stream(number: u8) -> Stream {
        let control: &'static _ = Box::leak(Box::new(Control::new()));
        Stream::with_control(number, control)
    }

    #[test]
    fn words_are_big_endian() {
        let stream = stream(4);
        stream.write(0x12_u8).write(0x3456_u16).write(0x789A_BCDE_u32);
        assert_eq!(
            stream.control.drain(),
            [4, 1, 0x12, 4, 2, 0x34, 0x56, 4, 4, 0x78, 0x9A, 0xBC, 0xDE]
        );
    }

    #[test]
    fn fmt_write() {
        let mut stream = stream(0);
        write!(stream, "{}-{}", 1, 2).unwrap();
        let bytes = stream.control.drain();
        let mut text = Vec::new();
        let mut frames = &bytes[..];
        while let [number, length, rest @ ..] = frames {
            assert_eq!(*number, 0);
            let (payload, tail) = rest.split_at(usize::from(*length));
            text.extend_from_slice(payload);
            frames = tail;
        }
        assert_eq!(text, b"1-2");
    }

    #[test]
    #[should_panic]
    fn out_of_range() {
        Stream::new(STREAMS_COUNT);
    }
}
