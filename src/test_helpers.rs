//! Mocks shared by the unit tests.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use embedded_hal::digital::{ErrorKind, ErrorType, OutputPin};
use embedded_hal_async::delay::DelayNs;

use crate::config::CellularConfig;
use crate::traits::Modem;

#[derive(Default)]
struct ModemLog {
    sent: Vec<String>,
    replies: Vec<(String, String)>,
    pending: VecDeque<String>,
    unsolicited: VecDeque<String>,
    opened: usize,
    closed: usize,
    short_writes: bool,
    fail_open: bool,
    fail_reads: usize,
    reads_before_failure: usize,
}

/// Modem whose AT sockets answer every command with `OK`, unless a reply
/// was scripted for it.
///
/// Reads return the reply to the last command first, then the scripted
/// unsolicited lines, then zero bytes.
#[derive(Clone, Default)]
pub struct MockModem {
    log: Rc<RefCell<ModemLog>>,
}

impl MockModem {
    pub fn reply(&self, cmd: &str, text: &str) {
        self.log
            .borrow_mut()
            .replies
            .push((cmd.to_string(), text.to_string()));
    }

    pub fn unsolicited(&self, lines: &[&str]) {
        self.log
            .borrow_mut()
            .unsolicited
            .extend(lines.iter().map(|l| l.to_string()));
    }

    pub fn short_writes(&self, enable: bool) {
        self.log.borrow_mut().short_writes = enable;
    }

    pub fn fail_open(&self, enable: bool) {
        self.log.borrow_mut().fail_open = enable;
    }

    pub fn fail_reads(&self, count: usize) {
        self.fail_reads_after(0, count);
    }

    /// Let `ok` reads through, then fail the next `count`.
    pub fn fail_reads_after(&self, ok: usize, count: usize) {
        let mut log = self.log.borrow_mut();
        log.reads_before_failure = ok;
        log.fail_reads = count;
    }

    pub fn sent(&self) -> Vec<String> {
        self.log.borrow().sent.clone()
    }

    pub fn opened(&self) -> usize {
        self.log.borrow().opened
    }

    pub fn closed(&self) -> usize {
        self.log.borrow().closed
    }
}

impl Modem for MockModem {
    type Socket = MockSocket;
    type Error = ();

    fn open_at_socket(&mut self) -> Result<Self::Socket, Self::Error> {
        let mut log = self.log.borrow_mut();
        if log.fail_open {
            return Err(());
        }
        log.opened += 1;
        Ok(MockSocket {
            log: self.log.clone(),
        })
    }
}

pub struct MockSocket {
    log: Rc<RefCell<ModemLog>>,
}

impl embedded_io_async::ErrorType for MockSocket {
    type Error = embedded_io_async::ErrorKind;
}

impl embedded_io_async::Write for MockSocket {
    async fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        let mut log = self.log.borrow_mut();
        let cmd = String::from_utf8_lossy(buf).into_owned();

        let reply = log
            .replies
            .iter()
            .find(|(c, _)| *c == cmd)
            .map(|(_, r)| r.clone())
            .unwrap_or_else(|| "OK\r\n".to_string());
        log.pending.push_back(reply);
        log.sent.push(cmd);

        if log.short_writes {
            Ok(buf.len().saturating_sub(1))
        } else {
            Ok(buf.len())
        }
    }
}

impl embedded_io_async::Read for MockSocket {
    async fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        let mut log = self.log.borrow_mut();
        if log.fail_reads > 0 {
            if log.reads_before_failure > 0 {
                log.reads_before_failure -= 1;
            } else {
                log.fail_reads -= 1;
                return Err(embedded_io_async::ErrorKind::Other);
            }
        }

        let Some(text) = log
            .pending
            .pop_front()
            .or_else(|| log.unsolicited.pop_front())
        else {
            return Ok(0);
        };

        let len = text.len().min(buf.len());
        buf[..len].copy_from_slice(&text.as_bytes()[..len]);
        Ok(len)
    }
}

impl Drop for MockSocket {
    fn drop(&mut self) {
        self.log.borrow_mut().closed += 1;
    }
}

#[derive(Default)]
struct PinLog {
    level: bool,
    writes: usize,
    failing: bool,
}

/// Output pin recording its level. Clones share the same level.
#[derive(Clone, Default)]
pub struct MockPin {
    log: Rc<RefCell<PinLog>>,
}

impl MockPin {
    pub fn failing() -> Self {
        let pin = Self::default();
        pin.log.borrow_mut().failing = true;
        pin
    }

    pub fn level(&self) -> bool {
        self.log.borrow().level
    }

    pub fn writes(&self) -> usize {
        self.log.borrow().writes
    }

    fn set(&mut self, level: bool) -> Result<(), ErrorKind> {
        let mut log = self.log.borrow_mut();
        if log.failing {
            return Err(ErrorKind::Other);
        }
        log.level = level;
        log.writes += 1;
        Ok(())
    }
}

impl ErrorType for MockPin {
    type Error = ErrorKind;
}

impl OutputPin for MockPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.set(false)
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.set(true)
    }
}

/// Delay that returns immediately and records every requested duration.
#[derive(Clone, Default)]
pub struct MockDelay {
    delays_ms: Rc<RefCell<Vec<u32>>>,
}

impl MockDelay {
    pub fn delays_ms(&self) -> Vec<u32> {
        self.delays_ms.borrow().clone()
    }
}

impl DelayNs for MockDelay {
    async fn delay_ns(&mut self, ns: u32) {
        self.delays_ms.borrow_mut().push(ns / 1_000_000);
    }

    async fn delay_us(&mut self, us: u32) {
        self.delays_ms.borrow_mut().push(us / 1_000);
    }

    async fn delay_ms(&mut self, ms: u32) {
        self.delays_ms.borrow_mut().push(ms);
    }
}

/// Board with all four frontend switches populated.
///
/// Registration gives up after 20 polls, so a test script missing its
/// terminal line fails instead of hanging.
#[derive(Clone, Default)]
pub struct MockConfig {
    pub gps_switch: MockPin,
    pub lte_switch: MockPin,
    pub path_switch: MockPin,
    pub gps_amp: MockPin,
}

impl CellularConfig for MockConfig {
    type GpsSwitchPin = MockPin;
    type LteSwitchPin = MockPin;
    type PathSwitchPin = MockPin;
    type GpsAmpPin = MockPin;

    const REGISTRATION_ATTEMPTS: Option<u32> = Some(20);

    fn gps_switch_pin(&mut self) -> Option<&mut Self::GpsSwitchPin> {
        Some(&mut self.gps_switch)
    }

    fn lte_switch_pin(&mut self) -> Option<&mut Self::LteSwitchPin> {
        Some(&mut self.lte_switch)
    }

    fn path_switch_pin(&mut self) -> Option<&mut Self::PathSwitchPin> {
        Some(&mut self.path_switch)
    }

    fn gps_amp_pin(&mut self) -> Option<&mut Self::GpsAmpPin> {
        Some(&mut self.gps_amp)
    }
}
