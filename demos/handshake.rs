extern crate tinyxpc as txpc;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use env_logger;
use log::{info, LevelFilter};
use txpc::{Dispatch, Header, Relay, Side, SoftCrc, Transport};

type Wire = Rc<RefCell<VecDeque<u8>>>;

struct PipeEnd {
    tx: Wire,
    rx: Wire,
}

impl Transport for PipeEnd {
    fn tx(&self, buf: &[u8]) -> usize {
        self.tx.borrow_mut().extend(buf.iter().copied());
        buf.len()
    }

    fn rx(&self, buf: &mut [u8]) -> usize {
        let mut wire = self.rx.borrow_mut();
        let mut count = 0;
        while count < buf.len() {
            match wire.pop_front() {
                Some(byte) => {
                    buf[count] = byte;
                    count += 1;
                }
                None => break,
            }
        }
        count
    }

    fn discard(&self, _side: Side, _bytes: Option<usize>) {}

    fn notify(&self, _side: Side, _enable: bool) {}
}

struct Console {
    name: String,
}

impl Dispatch for Console {
    fn dispatch(&self, hdr: &Header, payload: &[u8]) -> bool {
        info!(
            target: self.name.as_str(),
            "[{} -> {}] {}",
            hdr.from,
            hdr.to,
            String::from_utf8_lossy(payload).trim_end()
        );
        true
    }
}

fn main() {
    log::set_max_level(LevelFilter::Debug);
    env_logger::init();

    let a_to_b: Wire = Rc::new(RefCell::new(VecDeque::new()));
    let b_to_a: Wire = Rc::new(RefCell::new(VecDeque::new()));
    let end1 = PipeEnd {
        tx: a_to_b.clone(),
        rx: b_to_a.clone(),
    };
    let end2 = PipeEnd {
        tx: b_to_a,
        rx: a_to_b,
    };
    let app1 = Console {
        name: String::from("app1"),
    };
    let app2 = Console {
        name: String::from("app2"),
    };
    let mut uut1 = Relay::new(String::from("uut1"), &end1, &app1, SoftCrc::new());
    let mut uut2 = Relay::new(String::from("uut2"), &end2, &app2, SoftCrc::new());

    // resynchronise before anything else
    uut1.send_reset().unwrap();
    uut1.wr_continue().unwrap();
    uut2.rd_continue().unwrap();
    uut2.wr_continue().unwrap();
    uut2.rd_continue().unwrap();
    uut1.rd_continue().unwrap();
    uut1.wr_continue().unwrap();
    info!("reset handshake complete");

    // switch the session to a 32 bit CRC
    uut1.send_config(32, &[0x00, 0x08, 0x92, 0xd0], false).unwrap();
    uut1.wr_continue().unwrap();
    uut2.rd_continue().unwrap();
    info!(
        "both sides now at crc_bits={}",
        uut2.config().crc_bits
    );

    // checksummed messages, both directions
    uut1.send_msg(1, 2, b"hello uut2!\n").unwrap();
    uut1.wr_continue().unwrap();
    uut2.rd_continue().unwrap();

    uut2.send_msg(2, 1, b"hello uut1!\n").unwrap();
    uut2.wr_continue().unwrap();
    uut1.rd_continue().unwrap();

    assert!(uut1.is_idle());
    assert!(uut2.is_idle());
    info!("done");
}
