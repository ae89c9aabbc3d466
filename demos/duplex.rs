extern crate tinyxpc as txpc;
use std::cell::Cell;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::thread;
use std::time::Duration;

use env_logger;
use log::{debug, info, LevelFilter};
use txpc::{Dispatch, Header, Relay, Side, SoftCrc, Transport};

struct ChanPort {
    name: String,
    sender: Sender<u8>,
    receiver: Receiver<u8>,
}

impl Transport for ChanPort {
    fn tx(&self, buf: &[u8]) -> usize {
        for &byte in buf {
            match self.sender.send(byte) {
                Ok(_) => {}
                Err(e) => {
                    debug!(target: self.name.as_str(), "{}", e);
                    return 0;
                }
            }
        }
        buf.len()
    }

    fn rx(&self, buf: &mut [u8]) -> usize {
        let mut count = 0;
        while count < buf.len() {
            match self.receiver.try_recv() {
                Ok(byte) => {
                    buf[count] = byte;
                    count += 1;
                }
                Err(_) => break,
            }
        }
        count
    }

    fn discard(&self, _side: Side, _bytes: Option<usize>) {}

    fn notify(&self, _side: Side, _enable: bool) {}
}

struct App {
    name: String,
    received: Cell<u32>,
}

impl App {
    fn new(name: String) -> Self {
        App {
            name,
            received: Cell::new(0),
        }
    }
}

impl Dispatch for App {
    fn dispatch(&self, hdr: &Header, payload: &[u8]) -> bool {
        info!(
            target: self.name.as_str(),
            "[{} -> {}] {}",
            hdr.from,
            hdr.to,
            String::from_utf8_lossy(payload).trim_end()
        );
        self.received.set(self.received.get() + 1);
        true
    }
}

fn main() {
    log::set_max_level(LevelFilter::Debug);
    env_logger::init();

    let (tx1, rx2) = channel();
    let (tx2, rx1) = channel();

    let initiator = thread::Builder::new()
        .name("uut1".into())
        .spawn(move || {
            let port = ChanPort {
                name: String::from("port1"),
                sender: tx1,
                receiver: rx1,
            };
            let app = App::new(String::from("app1"));
            let mut relay = Relay::new(String::from("uut1"), &port, &app, SoftCrc::new());

            relay.send_reset().unwrap();
            let mut sent = false;
            for _ in 0..1000 {
                let _ = relay.wr_continue();
                let _ = relay.rd_continue();
                if !sent && relay.is_idle() {
                    relay.send_msg(2, 1, b"hello uut2!\n").unwrap();
                    sent = true;
                }
                if sent && app.received.get() > 0 && relay.is_idle() {
                    break;
                }
                thread::sleep(Duration::from_millis(5));
            }
        })
        .unwrap();

    let responder = thread::Builder::new()
        .name("uut2".into())
        .spawn(move || {
            let port = ChanPort {
                name: String::from("port2"),
                sender: tx2,
                receiver: rx2,
            };
            let app = App::new(String::from("app2"));
            let mut relay = Relay::new(String::from("uut2"), &port, &app, SoftCrc::new());

            let mut sent = false;
            for _ in 0..1000 {
                let _ = relay.rd_continue();
                let _ = relay.wr_continue();
                if !sent && app.received.get() > 0 && relay.tx_idle() {
                    relay.send_msg(1, 2, b"hello uut1!\n").unwrap();
                    sent = true;
                }
                if sent && relay.is_idle() {
                    break;
                }
                thread::sleep(Duration::from_millis(5));
            }
        })
        .unwrap();

    initiator.join().unwrap();
    responder.join().unwrap();
    info!("duplex exchange finished");
}
