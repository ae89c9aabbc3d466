extern crate log;
use crate::frame::{self, ConfigBody, FrameType, Header, FLAG_REQ_ACK, HDR_LEN, MAX_CRC_LEN};
use crate::interface::{CrcEngine, Dispatch, Side, Transport};
use log::{debug, trace, warn};

// Signals between the two state machines of one relay. The _SEND signals
// are asserted by the control-surface entry points; the read machine
// de-asserts them when the peer's answer is observed. The read machine
// asserts _RECVD, and the write machine de-asserts them when the reply has
// been sent.
const SIG_RST_RECVD: u8 = 1;
const SIG_RST_SEND: u8 = 1 << 1;
const SIG_CONFIG_RECVD: u8 = 1 << 2;
const SIG_CONFIG_SEND: u8 = 1 << 3;
const SIG_XOFF_RECVD: u8 = 1 << 4;
const SIG_ACK_RECVD: u8 = 1 << 5;
const SIG_NACK_RECVD: u8 = 1 << 6;

#[derive(Debug, Default, Clone, Copy)]
struct Signals(u8);

impl Signals {
    fn set(&mut self, mask: u8) {
        self.0 |= mask;
    }

    fn clear(&mut self, mask: u8) {
        self.0 &= !mask;
    }

    fn has(&self, mask: u8) -> bool {
        self.0 & mask != 0
    }
}

/// Result of a control-surface call. `Ok(())` means the call was accepted;
/// the frame itself is driven to the wire by later `wr_continue` calls.
pub type Status = Result<(), Error>;

/// Error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The writer is still busy with a prior frame. Retry after the next
    /// `wr_continue` has drained it.
    Inflight,
    /// The peer asserted XOFF; new frames are refused until XON arrives.
    Inhibit,
    /// The arguments cannot describe a legal frame. The caller must fix
    /// the call, retrying will not help.
    BadState,
}

/// Connection parameters shared by both state machines. The session default
/// is no CRC and no forced acknowledgement.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ConnConfig {
    pub crc_bits: u8,
    pub flags: u8,
}

impl ConnConfig {
    pub fn crc_len(&self) -> usize {
        (self.crc_bits >> 3) as usize
    }

    pub fn require_ack(&self) -> bool {
        self.flags & FLAG_REQ_ACK != 0
    }
}

/// Write state machine states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WriteOp {
    None,
    Reset,
    Msg,
    Config,
    Ack,
}

/// Read state machine states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ReadOp {
    None,
    WaitReset,
    WaitMsg,
    WaitConfig,
    WaitDispatch,
}

/// Bookkeeping for the one outgoing frame in flight.
struct WriteSlot<'p> {
    op: WriteOp,
    total: usize,
    done: usize,
    hdr: Header,
    hdr_bytes: [u8; HDR_LEN],
    /// MSG payload, borrowed from the caller until the slot clears.
    payload: &'p [u8],
    /// Staged CONFIG body: flags, crc_bits, polynomial.
    cfg: [u8; 2 + MAX_CRC_LEN],
    /// CRC trailer, staged once at the payload boundary.
    crc_buf: [u8; MAX_CRC_LEN],
    crc_len: usize,
    crc_staged: bool,
}

impl<'p> WriteSlot<'p> {
    fn new() -> Self {
        WriteSlot {
            op: WriteOp::None,
            total: 0,
            done: 0,
            hdr: Header::default(),
            hdr_bytes: [0; HDR_LEN],
            payload: &[],
            cfg: [0; 2 + MAX_CRC_LEN],
            crc_buf: [0; MAX_CRC_LEN],
            crc_len: 0,
            crc_staged: false,
        }
    }

    fn clear(&mut self) {
        self.op = WriteOp::None;
        self.total = 0;
        self.done = 0;
        self.payload = &[];
        self.crc_len = 0;
        self.crc_staged = false;
    }

    /// Populate the slot for one frame. `trailer_len` is the CRC length
    /// pinned for this frame; it does not follow later config changes.
    fn load(&mut self, op: WriteOp, hdr: Header, payload: &'p [u8], trailer_len: usize) {
        self.op = op;
        self.hdr = hdr;
        self.hdr_bytes = hdr.encode();
        self.payload = payload;
        self.done = 0;
        self.crc_len = trailer_len;
        self.crc_staged = false;
        self.total = HDR_LEN + hdr.size as usize + trailer_len;
    }
}

/// Bookkeeping for the one incoming frame in flight.
struct ReadSlot {
    op: ReadOp,
    total: usize,
    done: usize,
    hdr_bytes: [u8; HDR_LEN],
    hdr: Header,
    /// Payload plus CRC trailer of the frame being received.
    buf: Vec<u8>,
    /// CRC length observed when the header arrived, used for the whole
    /// frame even if the connection config changes underneath.
    crc_len: usize,
}

impl ReadSlot {
    fn new() -> Self {
        ReadSlot {
            op: ReadOp::None,
            total: 0,
            done: 0,
            hdr_bytes: [0; HDR_LEN],
            hdr: Header::default(),
            buf: Vec::new(),
            crc_len: 0,
        }
    }

    fn clear(&mut self) {
        self.op = ReadOp::None;
        self.total = 0;
        self.done = 0;
        self.buf.clear();
        self.crc_len = 0;
    }
}

/// Connection-state manager for a single point-to-point TinyXPC session.
///
/// The relay is two parallel state machines — one writer, one reader —
/// sharing one byte-duplex transport and coupled only through a small set
/// of one-bit signals. Frames are atomic: neither machine can be handed a
/// new frame until its slot is back to idle. All I/O is non-blocking and
/// externally driven: the transport wakes the relay by calling
/// [`wr_continue`](Relay::wr_continue) / [`rd_continue`](Relay::rd_continue)
/// when its stream is ready, and each call makes bounded progress and
/// returns.
pub struct Relay<'a, 'b, T, C, D>
where
    T: Transport,
    C: CrcEngine,
    D: Dispatch,
{
    /// Identifier string for debug output.
    pub name: String,
    /// Byte transport this relay is bound to.
    pub hw_if: &'a T,
    app: &'b D,
    crc: C,
    conn_config: ConnConfig,
    signals: Signals,
    wr: WriteSlot<'a>,
    rd: ReadSlot,
    resets_received: u32,
    crc_errors: u32,
    framing_errors: u32,
}

impl<'a, 'b, T, C, D> Relay<'a, 'b, T, C, D>
where
    T: Transport,
    C: CrcEngine,
    D: Dispatch,
{
    /// Construct a relay bound to one transport, one dispatch sink and one
    /// CRC engine. Both slots start idle and the connection parameters
    /// start at the session default (no CRC, no forced acknowledgement).
    /// # Arguments
    /// * `name` - identifier string for debug.
    /// * `hw_if` - Reference of the byte transport.
    /// * `app` - Reference of the application message sink.
    /// * `crc` - CRC engine for this session.
    pub fn new(name: String, hw_if: &'a T, app: &'b D, crc: C) -> Self {
        Relay {
            name,
            hw_if,
            app,
            crc,
            conn_config: ConnConfig::default(),
            signals: Signals::default(),
            wr: WriteSlot::new(),
            rd: ReadSlot::new(),
            resets_received: 0,
            crc_errors: 0,
            framing_errors: 0,
        }
    }

    /// Ask the peer to resynchronise. Should be called once right after
    /// construction, before any messages, and again whenever the byte
    /// stream is suspected to have lost sync.
    pub fn send_reset(&mut self) -> Status {
        if self.wr.op != WriteOp::None {
            return Err(Error::Inflight);
        }
        if self.signals.has(SIG_XOFF_RECVD) {
            return Err(Error::Inhibit);
        }
        self.wr.load(WriteOp::Reset, Header::reset(), &[], 0);
        self.signals.set(SIG_RST_SEND);
        self.hw_if.notify(Side::Tx, true);
        debug!(target: self.name.as_str(), "send RESET");
        Ok(())
    }

    /// Change the channel parameters and announce them to the peer with a
    /// CONFIG frame. `polynomial` must hold exactly `crc_bits / 8` bytes,
    /// little-endian. Because the CRC width may only change while nothing
    /// is in flight, this refuses with `Inflight` while either machine is
    /// busy.
    pub fn send_config(&mut self, crc_bits: u8, polynomial: &[u8], require_ack: bool) -> Status {
        if !frame::valid_crc_bits(crc_bits) || polynomial.len() != (crc_bits >> 3) as usize {
            return Err(Error::BadState);
        }
        if self.wr.op != WriteOp::None || self.rd.op != ReadOp::None {
            return Err(Error::Inflight);
        }
        if self.signals.has(SIG_XOFF_RECVD) {
            return Err(Error::Inhibit);
        }
        let body_len = 2 + polynomial.len();
        let hdr = Header::new(FrameType::Config, body_len as u16, 0, 0);
        self.wr.load(WriteOp::Config, hdr, &[], 0);
        self.conn_config.crc_bits = crc_bits;
        self.conn_config.flags = if require_ack { FLAG_REQ_ACK } else { 0 };
        self.wr.cfg[0] = self.conn_config.flags;
        self.wr.cfg[1] = crc_bits;
        self.wr.cfg[2..body_len].copy_from_slice(polynomial);
        // the writer is the source of truth for outbound frames, so the
        // engine switches over at enqueue time
        self.crc.configure(crc_bits, polynomial);
        self.signals.set(SIG_CONFIG_SEND);
        self.hw_if.notify(Side::Tx, true);
        debug!(target: self.name.as_str(), "send CONFIG: crc_bits={}, require_ack={}", crc_bits, require_ack);
        Ok(())
    }

    /// Send a flow control frame: XON re-opens the peer's writer, XOFF
    /// stops it. Inflight frames on the peer are not cancelled.
    pub fn set_flow(&mut self, xon: bool) -> Status {
        if self.wr.op != WriteOp::None {
            return Err(Error::Inflight);
        }
        if self.signals.has(SIG_XOFF_RECVD) {
            return Err(Error::Inhibit);
        }
        let kind = if xon { FrameType::Xon } else { FrameType::Xoff };
        // flow frames are header-only and ride the same write state as ACK
        self.wr.load(WriteOp::Ack, Header::new(kind, 0, 0, 0), &[], 0);
        self.hw_if.notify(Side::Tx, true);
        debug!(target: self.name.as_str(), "send {}", if xon { "XON" } else { "XOFF" });
        Ok(())
    }

    /// Queue one application message. The payload is borrowed by the relay
    /// until the frame has fully left through `wr_continue`; a CRC trailer
    /// is appended when the connection is configured for one.
    pub fn send_msg(&mut self, to: u8, from: u8, data: &'a [u8]) -> Status {
        if data.len() > u16::MAX as usize {
            return Err(Error::BadState);
        }
        if self.wr.op != WriteOp::None {
            return Err(Error::Inflight);
        }
        if self.signals.has(SIG_XOFF_RECVD) {
            return Err(Error::Inhibit);
        }
        let hdr = Header::new(FrameType::Msg, data.len() as u16, to, from);
        let trailer = self.conn_config.crc_len();
        self.wr.load(WriteOp::Msg, hdr, data, trailer);
        self.hw_if.notify(Side::Tx, true);
        trace!(target: self.name.as_str(), "send MSG: size={}, to={}, from={}", data.len(), to, from);
        Ok(())
    }

    /// Drive the write state machine. Call when the transport is ready for
    /// writing. One pass performs state bookkeeping, then attempts a single
    /// non-blocking write; the loop re-runs while the state changed or the
    /// last write made progress.
    pub fn wr_continue(&mut self) -> Status {
        loop {
            let starting = self.wr.op;
            match self.wr.op {
                WriteOp::None => {
                    if self.signals.has(SIG_XOFF_RECVD) {
                        // inhibit everything until the peer sends XON
                        return Err(Error::Inhibit);
                    }
                    if self.signals.has(SIG_RST_RECVD) {
                        // adopt the reply to the peer's reset
                        trace!(target: self.name.as_str(), "writer adopts reset reply");
                        self.wr.load(WriteOp::Reset, Header::reset(), &[], 0);
                    } else {
                        // nothing to send, stop write notifications
                        self.hw_if.notify(Side::Tx, false);
                    }
                }
                WriteOp::Reset => {
                    if self.wr.done == self.wr.total {
                        if self.signals.has(SIG_RST_RECVD) {
                            // we did not initiate, the reply just went out
                            self.signals.clear(SIG_RST_RECVD);
                            self.hw_if.discard(Side::Rx, None);
                            self.hw_if.discard(Side::Tx, None);
                            debug!(target: self.name.as_str(), "reset reply sent");
                            self.wr.clear();
                        } else if !self.signals.has(SIG_RST_SEND) {
                            // we initiated and the reader already saw the
                            // peer's echo
                            self.wr.clear();
                        }
                        // otherwise the echo is still outstanding, hold
                        // the slot
                    }
                }
                WriteOp::Msg => {
                    if self.wr.done == self.wr.total {
                        self.hw_if.discard(Side::Tx, None);
                        trace!(target: self.name.as_str(), "MSG sent: size={}", self.wr.hdr.size);
                        self.wr.clear();
                    } else if self.wr.crc_len > 0
                        && !self.wr.crc_staged
                        && self.wr.done == HDR_LEN + self.wr.hdr.size as usize
                    {
                        // payload is out, checksum goes next
                        let payload = self.wr.payload;
                        let crc_len = self.wr.crc_len;
                        let digest = self.crc.compute(payload);
                        let len = digest.len().min(crc_len);
                        self.wr.crc_buf[..len].copy_from_slice(&digest[..len]);
                        self.wr.crc_staged = true;
                    }
                }
                WriteOp::Config => {
                    if self.wr.done == self.wr.total {
                        self.hw_if.discard(Side::Tx, None);
                        self.signals.clear(SIG_CONFIG_SEND);
                        debug!(target: self.name.as_str(), "CONFIG sent: crc_bits={}", self.conn_config.crc_bits);
                        self.wr.clear();
                    }
                }
                WriteOp::Ack => {
                    if self.wr.done == self.wr.total {
                        self.wr.clear();
                    }
                }
            }
            let bytes = self.write_attempt();
            self.wr.done += bytes;
            if self.wr.op == starting && bytes == 0 {
                break;
            }
        }
        Ok(())
    }

    // One non-blocking write sized by the current phase of the inflight
    // frame: header, payload, CONFIG body byte, or CRC trailer.
    fn write_attempt(&self) -> usize {
        if self.wr.total == 0 || self.wr.done >= self.wr.total {
            return 0;
        }
        if self.wr.done < HDR_LEN {
            return self.hw_if.tx(&self.wr.hdr_bytes[self.wr.done..]);
        }
        let off = self.wr.done - HDR_LEN;
        match self.wr.op {
            WriteOp::Msg => {
                let size = self.wr.hdr.size as usize;
                if off < size {
                    self.hw_if.tx(&self.wr.payload[off..size])
                } else {
                    self.hw_if.tx(&self.wr.crc_buf[off - size..self.wr.crc_len])
                }
            }
            WriteOp::Config => {
                let body = self.wr.hdr.size as usize;
                match off {
                    0 => self.hw_if.tx(&self.wr.cfg[0..1]),
                    1 => self.hw_if.tx(&self.wr.cfg[1..2]),
                    _ => self.hw_if.tx(&self.wr.cfg[off..body]),
                }
            }
            // RESET, XON/XOFF and ACK are header-only
            _ => 0,
        }
    }

    /// Drive the read state machine. Call when the transport has bytes
    /// ready. One pass attempts a single read sized by the current phase
    /// (header vs. payload plus CRC), then updates state; the loop re-runs
    /// while the state changes.
    pub fn rd_continue(&mut self) -> Status {
        loop {
            let starting = self.rd.op;
            let bytes = self.read_attempt();
            self.rd.done += bytes;
            match self.rd.op {
                ReadOp::None => {
                    if self.rd.done >= HDR_LEN {
                        self.rd.hdr = Header::decode(&self.rd.hdr_bytes);
                        self.begin_frame();
                    }
                }
                ReadOp::WaitReset => {
                    if self.rd.done >= HDR_LEN {
                        // the 5 bytes may have been re-read after a
                        // discard, pick up whatever is there now
                        self.rd.hdr = Header::decode(&self.rd.hdr_bytes);
                        if self.rd.hdr.is_reset_handshake() {
                            if self.signals.has(SIG_RST_SEND) {
                                // the peer answered our reset while we were
                                // already waiting on its own
                                self.signals.clear(SIG_RST_SEND | SIG_RST_RECVD);
                                self.hw_if.discard(Side::Rx, None);
                                self.hw_if.discard(Side::Tx, None);
                            }
                            if !self.signals.has(SIG_RST_RECVD) {
                                self.rd.clear();
                            }
                            // the writer still owes the reply otherwise;
                            // idle here until it clears the signal
                        } else {
                            warn!(target: self.name.as_str(), "malformed reset frame, drop {} bytes.", HDR_LEN);
                            self.framing_errors = self.framing_errors.wrapping_add(1);
                            self.hw_if.discard(Side::Rx, Some(HDR_LEN));
                            self.rd.done = 0;
                        }
                    }
                }
                ReadOp::WaitMsg => {
                    if self.rd.done == self.rd.total {
                        let size = self.rd.hdr.size as usize;
                        if self.rd.crc_len > 0 {
                            let ok = {
                                let crc_len = self.rd.crc_len;
                                let digest = self.crc.compute(&self.rd.buf[..size]);
                                digest == &self.rd.buf[size..size + crc_len]
                            };
                            if ok {
                                self.rd.op = ReadOp::WaitDispatch;
                            } else {
                                // a NACK would go out here in ack mode
                                warn!(target: self.name.as_str(), "crc error, drop this frame.");
                                self.crc_errors = self.crc_errors.wrapping_add(1);
                                self.hw_if.discard(Side::Rx, None);
                                self.rd.clear();
                            }
                        } else {
                            self.rd.op = ReadOp::WaitDispatch;
                        }
                    }
                }
                ReadOp::WaitDispatch => {
                    let size = self.rd.hdr.size as usize;
                    if self.app.dispatch(&self.rd.hdr, &self.rd.buf[..size]) {
                        debug!(target: self.name.as_str(), "MSG dispatched: size={}, to={}, from={}",
                            self.rd.hdr.size, self.rd.hdr.to, self.rd.hdr.from);
                        self.hw_if.discard(Side::Rx, None);
                        let want_ack = self.conn_config.require_ack();
                        self.rd.clear();
                        if want_ack {
                            self.enqueue_ack();
                        }
                        return Ok(());
                    }
                    // the application is not ready; the frame stays parked
                    // and is retried on the next call
                }
                ReadOp::WaitConfig => {
                    if self.rd.done == self.rd.total {
                        match ConfigBody::decode(&self.rd.buf) {
                            Some(body) => {
                                self.conn_config.flags = body.flags;
                                self.conn_config.crc_bits = body.crc_bits;
                                self.crc.configure(body.crc_bits, body.polynomial());
                                debug!(target: self.name.as_str(),
                                    "CONFIG installed: crc_bits={}, flags={:#04x}", body.crc_bits, body.flags);
                            }
                            None => {
                                warn!(target: self.name.as_str(), "malformed config body, drop this frame.");
                                self.framing_errors = self.framing_errors.wrapping_add(1);
                            }
                        }
                        self.signals.clear(SIG_CONFIG_RECVD);
                        self.hw_if.discard(Side::Rx, None);
                        self.rd.clear();
                        return Ok(());
                    }
                }
            }
            if self.rd.op == starting {
                break;
            }
        }
        Ok(())
    }

    // One non-blocking read sized by the current phase.
    fn read_attempt(&mut self) -> usize {
        let hw = self.hw_if;
        if self.rd.done < HDR_LEN {
            let done = self.rd.done;
            return hw.rx(&mut self.rd.hdr_bytes[done..]);
        }
        match self.rd.op {
            ReadOp::WaitMsg | ReadOp::WaitConfig if self.rd.done < self.rd.total => {
                let off = self.rd.done - HDR_LEN;
                let end = self.rd.total - HDR_LEN;
                hw.rx(&mut self.rd.buf[off..end])
            }
            _ => 0,
        }
    }

    // A full header arrived while idle; pick the next read state.
    fn begin_frame(&mut self) {
        match FrameType::from_u8(self.rd.hdr.kind) {
            Some(FrameType::Reset) => {
                self.resets_received = self.resets_received.wrapping_add(1);
                if self.signals.has(SIG_RST_SEND) {
                    // our reset came back; the handshake is complete
                    self.signals.clear(SIG_RST_SEND);
                    self.hw_if.discard(Side::Rx, None);
                    self.hw_if.discard(Side::Tx, None);
                    debug!(target: self.name.as_str(), "reset handshake complete");
                    self.rd.clear();
                } else {
                    // the peer initiated; the writer owes the reply
                    debug!(target: self.name.as_str(), "peer RESET received");
                    self.signals.set(SIG_RST_RECVD);
                    self.rd.op = ReadOp::WaitReset;
                    self.rd.total = HDR_LEN;
                }
            }
            Some(FrameType::Config) => {
                let size = self.rd.hdr.size as usize;
                if size < 2 || size > 2 + MAX_CRC_LEN {
                    warn!(target: self.name.as_str(), "impossible CONFIG size {}, drop.", size);
                    self.framing_errors = self.framing_errors.wrapping_add(1);
                    self.hw_if.discard(Side::Rx, None);
                    self.rd.clear();
                } else {
                    self.signals.set(SIG_CONFIG_RECVD);
                    self.rd.op = ReadOp::WaitConfig;
                    self.rd.total = HDR_LEN + size;
                    self.rd.buf.clear();
                    self.rd.buf.resize(size, 0);
                }
            }
            Some(FrameType::Msg) => {
                let size = self.rd.hdr.size as usize;
                // the CRC width in force right now holds for this whole
                // frame, even if a CONFIG lands while it is in transit
                let crc_len = self.conn_config.crc_len();
                self.rd.crc_len = crc_len;
                self.rd.op = ReadOp::WaitMsg;
                self.rd.total = HDR_LEN + size + crc_len;
                self.rd.buf.clear();
                self.rd.buf.resize(size + crc_len, 0);
            }
            Some(FrameType::Xon) => {
                debug!(target: self.name.as_str(), "flow resumed by peer");
                self.signals.clear(SIG_XOFF_RECVD);
                self.rd.clear();
            }
            Some(FrameType::Xoff) => {
                debug!(target: self.name.as_str(), "flow stopped by peer");
                self.signals.set(SIG_XOFF_RECVD);
                self.rd.clear();
            }
            Some(FrameType::Ack) => {
                self.signals.set(SIG_ACK_RECVD);
                self.rd.clear();
            }
            None => {
                warn!(target: self.name.as_str(), "unknown frame type {}, drop.", self.rd.hdr.kind);
                self.framing_errors = self.framing_errors.wrapping_add(1);
                self.hw_if.discard(Side::Rx, None);
                self.rd.clear();
            }
        }
    }

    // Best effort: the acknowledgement rides only an idle writer.
    fn enqueue_ack(&mut self) {
        if self.wr.op != WriteOp::None || self.signals.has(SIG_XOFF_RECVD) {
            return;
        }
        self.wr
            .load(WriteOp::Ack, Header::new(FrameType::Ack, 0, 0, 0), &[], 0);
        self.hw_if.notify(Side::Tx, true);
        trace!(target: self.name.as_str(), "send ACK");
    }

    /// No outgoing frame is in flight.
    pub fn tx_idle(&self) -> bool {
        self.wr.op == WriteOp::None
    }

    /// No incoming frame is in flight.
    pub fn rx_idle(&self) -> bool {
        self.rd.op == ReadOp::None
    }

    /// Both state machines are idle; the relay may be torn down.
    pub fn is_idle(&self) -> bool {
        self.tx_idle() && self.rx_idle()
    }

    /// The peer has asserted XOFF and new outgoing frames are refused.
    pub fn flow_stopped(&self) -> bool {
        self.signals.has(SIG_XOFF_RECVD)
    }

    /// An ACK frame has been observed from the peer.
    pub fn ack_received(&self) -> bool {
        self.signals.has(SIG_ACK_RECVD)
    }

    /// Reserved for ack-mode operation; no NACK frame exists on the wire
    /// yet, so this never reads true today.
    pub fn nack_received(&self) -> bool {
        self.signals.has(SIG_NACK_RECVD)
    }

    /// Connection parameters currently in force.
    pub fn config(&self) -> ConnConfig {
        self.conn_config
    }

    pub fn get_reset_cnt(&self) -> u32 {
        self.resets_received
    }

    pub fn get_crc_error_cnt(&self) -> u32 {
        self.crc_errors
    }

    pub fn get_framing_error_cnt(&self) -> u32 {
        self.framing_errors
    }
}
