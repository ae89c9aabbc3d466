//! Wire codec for TinyXPC frames.
//!
//! Every frame starts with the same 5 byte header; RESET, XON, XOFF and ACK
//! are header-only, CONFIG carries a small parameter body and MSG carries an
//! application payload with an optional CRC trailer.

/// Length of the frame header on the wire.
pub const HDR_LEN: usize = 5;

/// Largest CRC trailer, in bytes (64 bit CRC).
pub const MAX_CRC_LEN: usize = 8;

/// `flags` bit 0: every MSG must be answered with an ACK.
pub const FLAG_REQ_ACK: u8 = 0x01;

/// `flags` bits 1..7 are reserved and must be zero on the wire.
pub const FLAGS_RESERVED: u8 = 0xfe;

/// Frame types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameType {
    Reset = 1,
    Config = 2,
    Xon = 3,
    Xoff = 4,
    Ack = 5,
    Msg = 6,
}

impl FrameType {
    /// Decode a wire `type` byte. Anything outside the known set is a
    /// protocol error on receive and yields `None`.
    pub fn from_u8(raw: u8) -> Option<FrameType> {
        match raw {
            1 => Some(FrameType::Reset),
            2 => Some(FrameType::Config),
            3 => Some(FrameType::Xon),
            4 => Some(FrameType::Xoff),
            5 => Some(FrameType::Ack),
            6 => Some(FrameType::Msg),
            _ => None,
        }
    }
}

/// Frame header. `size` counts payload bytes only, excluding the header
/// itself and any CRC trailer. `to` and `from` are routing tags the relay
/// carries but never interprets.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub size: u16,
    pub kind: u8,
    pub to: u8,
    pub from: u8,
}

impl Header {
    pub fn new(kind: FrameType, size: u16, to: u8, from: u8) -> Self {
        Header {
            size,
            kind: kind as u8,
            to,
            from,
        }
    }

    /// The canonical reset header: `{size: 0, type: RESET, to: 0, from: 0}`.
    pub fn reset() -> Self {
        Header::new(FrameType::Reset, 0, 0, 0)
    }

    /// Serialize to the exact wire layout: `size` little-endian first, then
    /// `type`, `to`, `from`. No padding.
    pub fn encode(&self) -> [u8; HDR_LEN] {
        let size = self.size.to_le_bytes();
        [size[0], size[1], self.kind, self.to, self.from]
    }

    pub fn decode(raw: &[u8; HDR_LEN]) -> Self {
        Header {
            size: u16::from_le_bytes([raw[0], raw[1]]),
            kind: raw[2],
            to: raw[3],
            from: raw[4],
        }
    }

    /// Whether these 5 bytes form the canonical reset frame. A RESET with a
    /// non-zero size or routing tag is malformed and must not complete a
    /// handshake.
    pub fn is_reset_handshake(&self) -> bool {
        self.kind == FrameType::Reset as u8 && self.size == 0 && self.to == 0 && self.from == 0
    }
}

/// Legal CRC widths. Widths that are not a whole number of bytes are
/// rejected outright instead of being rounded.
pub fn valid_crc_bits(bits: u8) -> bool {
    matches!(bits, 0 | 8 | 16 | 32 | 64)
}

/// Body of a CONFIG frame: `{flags, crc_bits, polynomial[crc_bits / 8]}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigBody {
    pub flags: u8,
    pub crc_bits: u8,
    polynomial: Vec<u8>,
}

impl ConfigBody {
    pub fn new(flags: u8, crc_bits: u8, polynomial: &[u8]) -> Self {
        ConfigBody {
            flags,
            crc_bits,
            polynomial: polynomial.to_vec(),
        }
    }

    /// Polynomial coefficients, little-endian, `crc_bits / 8` bytes.
    pub fn polynomial(&self) -> &[u8] {
        &self.polynomial
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut raw = Vec::with_capacity(2 + self.polynomial.len());
        raw.push(self.flags);
        raw.push(self.crc_bits);
        raw.extend_from_slice(&self.polynomial);
        raw
    }

    /// Decode and validate a CONFIG body. `None` means the body cannot
    /// describe a legal configuration: reserved flag bits set, an illegal
    /// CRC width, or a polynomial length that disagrees with the width.
    pub fn decode(raw: &[u8]) -> Option<ConfigBody> {
        if raw.len() < 2 {
            return None;
        }
        let flags = raw[0];
        let crc_bits = raw[1];
        if flags & FLAGS_RESERVED != 0 {
            return None;
        }
        if !valid_crc_bits(crc_bits) {
            return None;
        }
        if raw.len() != 2 + (crc_bits >> 3) as usize {
            return None;
        }
        Some(ConfigBody::new(flags, crc_bits, &raw[2..]))
    }
}
