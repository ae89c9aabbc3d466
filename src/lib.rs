//! # TinyXPC
//! TinyXPC is a small point-to-point message relay protocol for endpoints
//! that share a raw byte duplex without reliable stream framing of their
//! own (UARTs, SPI links, pipes). Each endpoint runs a [`Relay`]: a writer
//! and a reader state machine on one object, driven by external readiness
//! events, which frame outgoing messages, recognise incoming ones, verify
//! an optional CRC trailer and keep reset/config/data ordering straight
//! through a handful of one-bit signals.
//!
//! The relay owns no I/O and no checksum code; it talks to a [`Transport`],
//! a [`CrcEngine`] and a [`Dispatch`] sink supplied at construction. A
//! session must start with a RESET handshake so both ends agree where
//! frames begin.

//! ## Example
//! ```
//! extern crate tinyxpc as txpc;
//! use std::cell::RefCell;
//! use std::collections::VecDeque;
//!
//! struct Loopback {
//!     wire: RefCell<VecDeque<u8>>,
//! }
//!
//! impl txpc::Transport for Loopback {
//!     fn tx(&self, buf: &[u8]) -> usize {
//!         self.wire.borrow_mut().extend(buf.iter().copied());
//!         buf.len()
//!     }
//!
//!     fn rx(&self, buf: &mut [u8]) -> usize {
//!         let mut wire = self.wire.borrow_mut();
//!         let mut count = 0;
//!         while count < buf.len() {
//!             match wire.pop_front() {
//!                 Some(byte) => {
//!                     buf[count] = byte;
//!                     count += 1;
//!                 }
//!                 None => break,
//!             }
//!         }
//!         count
//!     }
//!
//!     fn discard(&self, _side: txpc::Side, _bytes: Option<usize>) {}
//!
//!     fn notify(&self, _side: txpc::Side, _enable: bool) {}
//! }
//!
//! struct Printer;
//!
//! impl txpc::Dispatch for Printer {
//!     fn dispatch(&self, hdr: &txpc::Header, payload: &[u8]) -> bool {
//!         println!("[{} -> {}] {} bytes", hdr.from, hdr.to, payload.len());
//!         true
//!     }
//! }
//!
//! fn main() {
//!     let wire = Loopback {
//!         wire: RefCell::new(VecDeque::new()),
//!     };
//!     let printer = Printer;
//!     let mut relay = txpc::Relay::new(
//!         String::from("loop"),
//!         &wire,
//!         &printer,
//!         txpc::SoftCrc::new(),
//!     );
//!
//!     // on a loopback the reset comes straight back as its own answer
//!     relay.send_reset().unwrap();
//!     relay.wr_continue().unwrap();
//!     relay.rd_continue().unwrap();
//!     relay.wr_continue().unwrap();
//!     assert!(relay.is_idle());
//!
//!     relay.send_msg(1, 2, b"hello").unwrap();
//!     relay.wr_continue().unwrap();
//!     relay.rd_continue().unwrap();
//!     assert!(relay.is_idle());
//! }
//! ```

mod crc;
mod frame;
mod interface;
mod relay;

pub use crate::crc::SoftCrc;
pub use crate::frame::{
    valid_crc_bits, ConfigBody, FrameType, Header, FLAGS_RESERVED, FLAG_REQ_ACK, HDR_LEN,
    MAX_CRC_LEN,
};
pub use crate::interface::{CrcEngine, Dispatch, Side, Transport};
pub use crate::relay::{ConnConfig, Error, Relay, Status};
