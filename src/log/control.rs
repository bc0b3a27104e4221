use core::{
    cell::UnsafeCell,
    cmp::min,
    hint::spin_loop,
    sync::atomic::{AtomicU32, AtomicUsize, Ordering},
};

/// Size of the log ring buffer in bytes.
pub(crate) const BUFFER_SIZE: usize = 1024;

/// Size of a frame header: stream number and payload length.
pub(crate) const HEADER_SIZE: usize = 2;

/// Maximum payload length of a single frame.
pub(crate) const MAX_PAYLOAD: usize = u8::MAX as usize;

/// Log control block shared with the debug probe.
///
/// The probe sets bits of `state` to enable streams, reads frames between
/// `read_offset` and `write_offset`, and advances `read_offset`. Offsets grow
/// monotonically and wrap around `usize`; the buffer position is the offset
/// modulo [`BUFFER_SIZE`].
///
/// Writers reserve space by advancing `reserve_offset` and count themselves in
/// `writers` while copying. The writer that brings `writers` back to zero
/// publishes everything reserved so far by moving `write_offset`, so the probe
/// never sees a partially copied frame. No writer waits for another one to
/// finish.
#[repr(C)]
pub(crate) struct Control {
    state: AtomicU32,
    write_offset: AtomicUsize,
    read_offset: AtomicUsize,
    reserve_offset: AtomicUsize,
    writers: AtomicUsize,
    buffer: UnsafeCell<[u8; BUFFER_SIZE]>,
}

unsafe impl Sync for Control {}

impl Control {
    pub(crate) const fn new() -> Self {
        Self {
            state: AtomicU32::new(0),
            write_offset: AtomicUsize::new(0),
            read_offset: AtomicUsize::new(0),
            reserve_offset: AtomicUsize::new(0),
            writers: AtomicUsize::new(0),
            buffer: UnsafeCell::new([0; BUFFER_SIZE]),
        }
    }

    pub(crate) fn is_enabled(&self, stream: u8) -> bool {
        self.state.load(Ordering::Relaxed) & 1 << stream != 0
    }

    /// Writes `bytes` split into frames of at most [`MAX_PAYLOAD`] bytes.
    pub(crate) fn write_bytes(&self, stream: u8, bytes: &[u8]) {
        for chunk in bytes.chunks(MAX_PAYLOAD) {
            self.write_frame(stream, chunk);
        }
    }

    /// Writes `payload` as a single frame. Concurrent frames never interleave.
    /// Spins while the probe has not freed enough space.
    #[allow(clippy::cast_possible_truncation)]
    pub(crate) fn write_frame(&self, stream: u8, payload: &[u8]) {
        debug_assert!(payload.len() <= MAX_PAYLOAD);
        let start = self.reserve(HEADER_SIZE + payload.len());
        let offset = self.copy(start, &[stream, payload.len() as u8]);
        self.copy(offset, payload);
        self.commit();
    }

    /// Reserves `length` bytes and returns the offset of the first one. The
    /// caller is counted in `writers` until it calls [`Control::commit`].
    fn reserve(&self, length: usize) -> usize {
        self.writers.fetch_add(1, Ordering::SeqCst);
        loop {
            let reserve_offset = self.reserve_offset.load(Ordering::SeqCst);
            let read_offset = self.read_offset.load(Ordering::SeqCst);
            if BUFFER_SIZE - reserve_offset.wrapping_sub(read_offset) < length {
                // Let the probe drain finished frames while waiting.
                self.commit();
                spin_loop();
                self.writers.fetch_add(1, Ordering::SeqCst);
                continue;
            }
            if self
                .reserve_offset
                .compare_exchange_weak(
                    reserve_offset,
                    reserve_offset.wrapping_add(length),
                    Ordering::SeqCst,
                    Ordering::SeqCst,
                )
                .is_ok()
            {
                break reserve_offset;
            }
        }
    }

    /// Leaves the writers count. The last writer out publishes all reserved
    /// bytes.
    fn commit(&self) {
        if self.writers.fetch_sub(1, Ordering::SeqCst) != 1 {
            return;
        }
        let reserve_offset = self.reserve_offset.load(Ordering::SeqCst);
        if self.writers.load(Ordering::SeqCst) != 0 {
            // The newcomer publishes on its way out.
            return;
        }
        let mut write_offset = self.write_offset.load(Ordering::SeqCst);
        // A concurrent commit may have published further already.
        while (1..=BUFFER_SIZE).contains(&reserve_offset.wrapping_sub(write_offset)) {
            match self.write_offset.compare_exchange_weak(
                write_offset,
                reserve_offset,
                Ordering::SeqCst,
                Ordering::SeqCst,
            ) {
                Ok(_) => break,
                Err(current) => write_offset = current,
            }
        }
    }

    fn copy(&self, mut offset: usize, mut bytes: &[u8]) -> usize {
        while !bytes.is_empty() {
            let start = offset % BUFFER_SIZE;
            let count = min(bytes.len(), BUFFER_SIZE - start);
            let buffer = self.buffer.get().cast::<u8>();
            unsafe { buffer.add(start).copy_from_nonoverlapping(bytes.as_ptr(), count) };
            bytes = &bytes[count..];
            offset = offset.wrapping_add(count);
        }
        offset
    }
}

#[cfg(test)]
impl Control {
    pub(crate) fn enable(&self, stream: u8) {
        self.state.fetch_or(1 << stream, Ordering::Relaxed);
    }

    /// Reads all pending bytes the way the debug probe does.
    pub(crate) fn drain(&self) -> Vec<u8> {
        let mut read_offset = self.read_offset.load(Ordering::Acquire);
        let write_offset = self.write_offset.load(Ordering::Acquire);
        let mut bytes = Vec::new();
        while read_offset != write_offset {
            bytes.push(unsafe { *self.buffer.get().cast::<u8>().add(read_offset % BUFFER_SIZE) });
            read_offset = read_offset.wrapping_add(1);
        }
        self.read_offset.store(read_offset, Ordering::Release);
        bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_by_default() {
        let control = Control::new();
        assert!(!control.is_enabled(0));
        control.enable(3);
        assert!(control.is_enabled(3));
        assert!(!control.is_enabled(0));
    }

    #[test]
    fn frames() {
        let control = Control::new();
        control.write_bytes(2, b"abc");
        control.write_frame(5, &[0xDE, 0xAD]);
        assert_eq!(control.drain(), [2, 3, b'a', b'b', b'c', 5, 2, 0xDE, 0xAD]);
        assert!(control.drain().is_empty());
    }

    #[test]
    fn long_writes_are_split() {
        let control = Control::new();
        let payload = [7; MAX_PAYLOAD + 10];
        control.write_bytes(1, &payload);
        let bytes = control.drain();
        assert_eq!(bytes.len(), payload.len() + 2 * HEADER_SIZE);
        assert_eq!(bytes[..2], [1, u8::MAX]);
        assert_eq!(bytes[HEADER_SIZE + MAX_PAYLOAD..][..2], [1, 10]);
    }

    #[test]
    fn wraps_around() {
        let control = Control::new();
        for _ in 0..10 {
            control.write_frame(0, &[1; 200]);
            assert_eq!(control.drain().len(), 202);
        }
        control.write_frame(0, b"end");
        assert_eq!(control.drain(), [0, 3, b'e', b'n', b'd']);
    }

    #[test]
    fn unfinished_frame_is_not_published() {
        let control = Control::new();
        let start = control.reserve(HEADER_SIZE + 3);
        let offset = control.copy(start, &[3, 3]);
        assert!(control.drain().is_empty());
        control.write_frame(4, b"x");
        assert!(control.drain().is_empty());
        control.copy(offset, b"abc");
        control.commit();
        assert_eq!(control.drain(), [3, 3, b'a', b'b', b'c', 4, 1, b'x']);
    }

    #[test]
    fn concurrent_frames_stay_whole() {
        const FRAMES: usize = 500;
        let control: &'static Control = Box::leak(Box::new(Control::new()));
        let writers = [1_u8, 2]
            .map(|stream| {
                std::thread::spawn(move || {
                    for _ in 0..FRAMES {
                        control.write_frame(stream, &[stream; 9]);
                    }
                })
            });
        let mut bytes = Vec::new();
        let mut frames = 0;
        while frames < 2 * FRAMES {
            bytes.extend(control.drain());
            while let [stream, length, rest @ ..] = &bytes[..] {
                let length = usize::from(*length);
                if rest.len() < length {
                    break;
                }
                assert!([1, 2].contains(stream));
                assert_eq!(rest[..length], [*stream; 9]);
                bytes.drain(..HEADER_SIZE + length);
                frames += 1;
            }
            std::thread::yield_now();
        }
        for writer in writers {
            writer.join().unwrap();
        }
        assert!(bytes.is_empty());
        assert!(control.drain().is_empty());
    }
}
