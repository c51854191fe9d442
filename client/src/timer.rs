use std::{cell::RefCell, mem};

use gloo_timers::callback::Interval;
use sycamore::prelude::{create_effect, create_signal, use_scope_status, ReadSignal, Scope, Signal};

// effect executed on every tick of the given `timer`
// once `op` returns false the timer is cancelled and never fires again
pub fn create_tick_effect<'a>(
    cx: Scope<'a>,
    timer: &'a ReadSignal<TickTimer<'a>>,
    mut op: impl FnMut() -> bool + 'a,
) {
    create_effect(cx, move || {
        let timer = timer.get();
        if timer.ticks() > 0 && !op() {
            timer.cancel();
        }
    });
}

// a repeating timer that counts its ticks in a signal
pub struct TickTimer<'a>(RefCell<TickTimerInner<'a>>);

struct TickTimerInner<'a> {
    cx: Scope<'a>,

    interval_ms: u32,
    interval: Option<Interval>,
    ticks: &'a Signal<u64>,
}

impl<'a> TickTimer<'a> {
    pub fn new(cx: Scope<'a>, interval_ms: u32) -> Self {
        TickTimer(RefCell::new(TickTimerInner {
            cx,

            interval_ms,
            interval: None,
            ticks: create_signal(cx, 0),
        }))
    }

    // reactive, increments every `interval_ms` while running
    pub fn ticks(&self) -> u64 { *self.0.borrow().ticks.get() }

    pub fn start(&self) {
        self.cancel();

        let scope_alive = use_scope_status(self.0.borrow().cx);
        let ticks = self.0.borrow().ticks;

        // SAFETY: transmuting from 'a to 'static lets this be used in the interval
        // this is safe as we check if the scope is alive before calling the closure
        let ticks = unsafe { mem::transmute::<_, &'static Signal<u64>>(ticks) };

        let interval = Interval::new(self.0.borrow().interval_ms, move || {
            if *scope_alive.get() {
                ticks.set(*ticks.get_untracked() + 1);
            }
        });
        self.0.borrow_mut().interval = Some(interval);
    }

    // returns false if the timer wasn't running
    pub fn cancel(&self) -> bool {
        let interval = self.0.borrow_mut().interval.take();
        interval.map(Interval::cancel).is_some()
    }
}
