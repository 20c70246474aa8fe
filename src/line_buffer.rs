//! Line assembly for interactive input.
//!
//! An interrupt handler feeds received bytes through [`LineBuffer::on_byte`],
//! a task picks up complete lines with [`LineBuffer::wait_line`] and forwards
//! them to the modem.

use core::cell::RefCell;
use core::future::poll_fn;
use core::task::Poll;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::waitqueue::WakerRegistration;
use heapless::Vec;

/// Default line capacity, matching the AT response buffer.
pub const LINE_LEN: usize = 128;

const CR: u8 = b'\r';

pub struct LineBuffer<const N: usize = LINE_LEN> {
    inner: Mutex<CriticalSectionRawMutex, RefCell<Inner<N>>>,
}

struct Inner<const N: usize> {
    buf: Vec<u8, N>,
    ready: bool,
    waker: WakerRegistration,
}

impl<const N: usize> Default for LineBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> LineBuffer<N> {
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Inner {
                buf: Vec::new(),
                ready: false,
                waker: WakerRegistration::new(),
            })),
        }
    }

    /// Feed one received byte.
    ///
    /// A carriage return marks the line ready and is not stored. Bytes past
    /// the capacity are dropped.
    pub fn on_byte(&self, c: u8) {
        self.inner.lock(|inner| {
            let inner = &mut *inner.borrow_mut();
            if c == CR {
                inner.ready = true;
                inner.waker.wake();
            } else {
                inner.buf.push(c).ok();
            }
        })
    }

    pub fn is_ready(&self) -> bool {
        self.inner.lock(|inner| inner.borrow().ready)
    }

    /// Number of buffered bytes.
    pub fn len(&self) -> usize {
        self.inner.lock(|inner| inner.borrow().buf.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Take the buffered line if it is ready, leaving the buffer empty.
    pub fn take(&self) -> Option<Vec<u8, N>> {
        self.inner.lock(|inner| {
            let inner = &mut *inner.borrow_mut();
            if !inner.ready {
                return None;
            }
            inner.ready = false;
            Some(core::mem::take(&mut inner.buf))
        })
    }

    /// Wait for a carriage return, then take the buffered line.
    pub async fn wait_line(&self) -> Vec<u8, N> {
        poll_fn(|cx| {
            self.inner.lock(|inner| {
                let inner = &mut *inner.borrow_mut();
                if inner.ready {
                    inner.ready = false;
                    Poll::Ready(core::mem::take(&mut inner.buf))
                } else {
                    inner.waker.register(cx.waker());
                    Poll::Pending
                }
            })
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed<const N: usize>(lb: &LineBuffer<N>, bytes: &[u8]) {
        for &b in bytes {
            lb.on_byte(b);
        }
    }

    #[test]
    fn carriage_return_marks_ready() {
        let lb: LineBuffer = LineBuffer::new();

        feed(&lb, b"AT+CFUN?");
        assert!(!lb.is_ready());
        assert_eq!(lb.len(), 8);

        lb.on_byte(b'\r');
        assert!(lb.is_ready());
        assert_eq!(lb.len(), 8);

        let line = lb.take().unwrap();
        assert_eq!(line.as_slice(), b"AT+CFUN?");
        assert!(!lb.is_ready());
        assert!(lb.is_empty());
        assert_eq!(lb.take(), None);
    }

    #[test]
    fn overflow_is_dropped() {
        let lb = LineBuffer::<4>::new();

        feed(&lb, b"ABCDEFGH");
        assert_eq!(lb.len(), 4);

        lb.on_byte(b'\r');
        assert_eq!(lb.take().unwrap().as_slice(), b"ABCD");
    }

    #[test]
    fn fill_never_exceeds_capacity() {
        let lb = LineBuffer::<16>::new();

        for n in 0..=40usize {
            feed(&lb, &[b'x'; 40][..n]);
            lb.on_byte(b'\r');
            assert_eq!(lb.len(), n.min(16));
            let line = lb.take().unwrap();
            assert_eq!(line.len(), n.min(16));
            assert!(line.iter().all(|&b| b == b'x'));
        }
    }

    #[test]
    fn bare_carriage_return_is_an_empty_line() {
        let lb: LineBuffer = LineBuffer::new();

        lb.on_byte(b'\r');
        assert!(lb.is_ready());
        assert!(lb.take().unwrap().is_empty());
    }

    #[test]
    fn wait_line_returns_ready_line() {
        let lb: LineBuffer = LineBuffer::new();
        feed(&lb, b"AT\r");

        let line = embassy_futures::block_on(lb.wait_line());
        assert_eq!(line.as_slice(), b"AT");
        assert!(!lb.is_ready());
    }
}
