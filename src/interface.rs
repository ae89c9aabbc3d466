use crate::frame::Header;

/// Which half of the byte transport an operation applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Rx,
    Tx,
}

/// Byte transport the relay is bound to.
///
/// Both I/O calls are non-blocking and may make partial progress; the relay
/// always passes the exact remaining byte range of the current phase, so an
/// adapter never has to track offsets of its own. A return of 0 means "no
/// progress right now, try later" — adapters map their own errors to 0 and
/// wake the relay again through `wr_continue`/`rd_continue` when the stream
/// is ready.
///
/// Methods take `&self`; adapters keep their mutable state behind interior
/// mutability.
pub trait Transport {
    /// Write as much of `buf` as the stream will take. Returns bytes
    /// written, in `[0, buf.len()]`.
    fn tx(&self, buf: &[u8]) -> usize;
    /// Read into `buf`. Returns bytes read, in `[0, buf.len()]`.
    fn rx(&self, buf: &mut [u8]) -> usize;
    /// The relay is done with `bytes` buffered bytes on `side`; `None`
    /// means everything. Adapters that consume bytes as they are read may
    /// treat this as a no-op.
    fn discard(&self, side: Side, bytes: Option<usize>);
    /// Raise or suppress readiness events for one side.
    fn notify(&self, side: Side, enable: bool);
}

/// Checksum engine, parameterised by `(crc_bits, polynomial)`.
pub trait CrcEngine {
    /// CRC over `buf`, as `crc_bits / 8` little-endian bytes. The returned
    /// slice is borrowed from the engine and is only valid until the next
    /// `compute` call.
    fn compute(&mut self, buf: &[u8]) -> &[u8];
    /// Install new parameters. The relay calls this when it enqueues a
    /// CONFIG frame and again when it finishes receiving one.
    fn configure(&mut self, crc_bits: u8, polynomial: &[u8]);
}

/// Application message sink.
pub trait Dispatch {
    /// Handle one validated MSG frame. `payload` is the `size` logical
    /// bytes; any CRC trailer has already been checked and stripped.
    /// Return `true` to take the message, `false` to have the relay keep
    /// the frame parked and retry on the next `rd_continue`.
    fn dispatch(&self, hdr: &Header, payload: &[u8]) -> bool;
}
