use core::cell::RefCell;
use core::future::poll_fn;
use core::task::{Context, Poll};

use embassy_sync::blocking_mutex::raw::NoopRawMutex;
use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::waitqueue::WakerRegistration;

use crate::antenna::AntennaRoute;
use crate::command::network_service::responses::SignalQuality;

/// Where the modem is in the LTE connect / GNSS enable flow.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OperationState {
    LteIdle,
    ConnectingLte,
    Registered,
    Denied,
    GpsIdle,
    GpsEnabling,
}

pub struct State {
    shared: Mutex<NoopRawMutex, RefCell<Shared>>,
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

impl State {
    pub const fn new() -> Self {
        Self {
            shared: Mutex::new(RefCell::new(Shared {
                operation_state: OperationState::LteIdle,
                route: None,
                signal_quality: None,
                state_waker: WakerRegistration::new(),
            })),
        }
    }
}

pub struct Shared {
    operation_state: OperationState,
    route: Option<AntennaRoute>,
    signal_quality: Option<SignalQuality>,
    state_waker: WakerRegistration,
}

#[derive(Clone)]
pub struct Runner<'d> {
    pub(crate) shared: &'d Mutex<NoopRawMutex, RefCell<Shared>>,
}

impl<'d> Runner<'d> {
    pub fn new(state: &'d mut State) -> Self {
        Self {
            shared: &state.shared,
        }
    }

    pub fn set_operation_state(&self, state: OperationState) {
        self.shared.lock(|s| {
            let s = &mut *s.borrow_mut();
            if s.operation_state != state {
                debug!("Operation state {:?} -> {:?}", s.operation_state, state);
            }
            s.operation_state = state;
            s.state_waker.wake();
        });
    }

    pub fn operation_state(&self, cx: Option<&mut Context>) -> OperationState {
        self.shared.lock(|s| {
            let s = &mut *s.borrow_mut();
            if let Some(cx) = cx {
                s.state_waker.register(cx.waker());
            }
            s.operation_state
        })
    }

    pub fn set_route(&self, route: AntennaRoute) {
        self.shared.lock(|s| {
            let s = &mut *s.borrow_mut();
            s.route = Some(route);
            s.state_waker.wake();
        });
    }

    /// Last route applied to the RF frontend, `None` before the first one.
    pub fn route(&self) -> Option<AntennaRoute> {
        self.shared.lock(|s| s.borrow().route)
    }

    pub fn set_signal_quality(&self, signal_quality: Option<SignalQuality>) {
        self.shared.lock(|s| s.borrow_mut().signal_quality = signal_quality);
    }

    /// Signal quality read on the last successful registration.
    pub fn signal_quality(&self) -> Option<SignalQuality> {
        self.shared.lock(|s| s.borrow().signal_quality)
    }

    pub async fn wait_for_operation_state(&self, ps: OperationState) {
        if self.operation_state(None) == ps {
            return;
        }

        poll_fn(|cx| {
            if self.operation_state(Some(cx)) == ps {
                return Poll::Ready(());
            }
            Poll::Pending
        })
        .await
    }

    pub async fn wait_operation_state_change(&self) -> OperationState {
        let old_state = self.operation_state(None);

        poll_fn(|cx| {
            let current_state = self.operation_state(Some(cx));
            if current_state != old_state {
                return Poll::Ready(current_state);
            }
            Poll::Pending
        })
        .await
    }
}
