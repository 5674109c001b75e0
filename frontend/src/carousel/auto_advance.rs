use gloo_timers::callback::Interval;
use log::{debug, info};

/// Something that can call back on a fixed period until the returned guard
/// is dropped.
pub trait IntervalScheduler {
    type Guard;

    fn every(&self, period_ms: u32, callback: Box<dyn FnMut()>) -> Self::Guard;
}

/// Browser timers via `setInterval`.
#[derive(Clone, Copy, Debug, Default)]
pub struct GlooIntervals;

impl IntervalScheduler for GlooIntervals {
    type Guard = Interval;

    fn every(&self, period_ms: u32, callback: Box<dyn FnMut()>) -> Interval {
        Interval::new(period_ms, callback)
    }
}

/// Handle to a running auto-advance timer. The timer stops on [`stop`] or
/// when the handle is dropped, whichever comes first.
///
/// [`stop`]: AutoAdvance::stop
pub struct AutoAdvance<G> {
    guard: Option<G>,
}

impl<G> AutoAdvance<G> {
    pub fn start<S>(scheduler: &S, period_ms: u32, on_tick: impl FnMut() + 'static) -> Self
    where
        S: IntervalScheduler<Guard = G>,
    {
        let guard = scheduler.every(period_ms, Box::new(on_tick));
        info!("carousel auto-advance every {}ms", period_ms);
        Self { guard: Some(guard) }
    }

    #[cfg(test)]
    pub fn is_running(&self) -> bool {
        self.guard.is_some()
    }

    /// Cancel the timer. Safe to call any number of times.
    pub fn stop(&mut self) {
        if self.guard.take().is_some() {
            debug!("carousel auto-advance stopped");
        }
    }
}

#[cfg(test)]
pub use manual::ManualClock;

#[cfg(test)]
mod manual {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use super::IntervalScheduler;

    struct Timer {
        period_ms: u64,
        next_due: u64,
        callback: Option<Box<dyn FnMut()>>,
        cancelled: Rc<Cell<bool>>,
    }

    #[derive(Default)]
    struct Inner {
        now_ms: u64,
        timers: Vec<Timer>,
    }

    /// Deterministic stand-in for the browser's timers.
    #[derive(Clone, Default)]
    pub struct ManualClock {
        inner: Rc<RefCell<Inner>>,
    }

    pub struct ManualGuard {
        cancelled: Rc<Cell<bool>>,
    }

    impl Drop for ManualGuard {
        fn drop(&mut self) {
            self.cancelled.set(true);
        }
    }

    impl IntervalScheduler for ManualClock {
        type Guard = ManualGuard;

        fn every(&self, period_ms: u32, callback: Box<dyn FnMut()>) -> ManualGuard {
            let cancelled = Rc::new(Cell::new(false));
            let mut inner = self.inner.borrow_mut();
            let period_ms = u64::from(period_ms.max(1));
            let next_due = inner.now_ms + period_ms;
            inner.timers.push(Timer {
                period_ms,
                next_due,
                callback: Some(callback),
                cancelled: Rc::clone(&cancelled),
            });
            ManualGuard { cancelled }
        }
    }

    impl ManualClock {
        pub fn now_ms(&self) -> u64 {
            self.inner.borrow().now_ms
        }

        /// Move time forward, firing every due callback in order.
        pub fn advance(&self, ms: u64) {
            let until = self.now_ms() + ms;
            loop {
                let due = {
                    let mut inner = self.inner.borrow_mut();
                    inner.timers.retain(|t| !t.cancelled.get());
                    inner
                        .timers
                        .iter()
                        .enumerate()
                        .filter(|(_, t)| t.next_due <= until)
                        .min_by_key(|(_, t)| t.next_due)
                        .map(|(i, t)| (i, t.next_due))
                };
                let Some((slot, due_at)) = due else {
                    break;
                };

                // Run the callback without holding the borrow; it may
                // schedule or cancel timers itself.
                let (mut callback, cancelled) = {
                    let mut inner = self.inner.borrow_mut();
                    inner.now_ms = due_at;
                    let timer = &mut inner.timers[slot];
                    timer.next_due += timer.period_ms;
                    (timer.callback.take(), Rc::clone(&timer.cancelled))
                };
                if let Some(cb) = callback.as_mut() {
                    cb();
                }
                if !cancelled.get() {
                    let mut inner = self.inner.borrow_mut();
                    if let Some(timer) = inner
                        .timers
                        .iter_mut()
                        .find(|t| Rc::ptr_eq(&t.cancelled, &cancelled))
                    {
                        timer.callback = callback;
                    }
                }
            }
            self.inner.borrow_mut().now_ms = until;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::manual::ManualGuard;
    use super::*;
    use crate::carousel::{CarouselAction, CarouselState};

    type Mounted = (Rc<RefCell<CarouselState<usize>>>, AutoAdvance<ManualGuard>);

    fn mounted(len: usize, clock: &ManualClock) -> Mounted {
        let state = Rc::new(RefCell::new(CarouselState::new(
            (0..len).collect::<Vec<_>>().into(),
        )));
        let ticking = Rc::clone(&state);
        let timer = AutoAdvance::start(clock, 5000, move || {
            ticking.borrow_mut().apply(CarouselAction::Tick)
        });
        (state, timer)
    }

    #[test]
    fn ticks_once_per_period() {
        let clock = ManualClock::default();
        let (state, _timer) = mounted(6, &clock);

        clock.advance(4999);
        assert_eq!(state.borrow().current_index(), 0);

        clock.advance(1);
        assert_eq!(state.borrow().current_index(), 1);

        // 17s total: three ticks
        clock.advance(12_000);
        assert_eq!(clock.now_ms(), 17_000);
        assert_eq!(state.borrow().current_index(), 3);
    }

    #[test]
    fn ticks_match_elapsed_time() {
        for elapsed in [0u64, 4_999, 5_000, 29_999, 30_000, 61_234] {
            let clock = ManualClock::default();
            let (state, _timer) = mounted(1000, &clock);
            clock.advance(elapsed);
            assert_eq!(state.borrow().current_index() as u64, elapsed / 5000);
        }
    }

    #[test]
    fn stop_halts_ticks_and_is_idempotent() {
        let clock = ManualClock::default();
        let (state, mut timer) = mounted(6, &clock);

        clock.advance(10_000);
        assert_eq!(state.borrow().current_index(), 2);

        timer.stop();
        timer.stop();
        assert!(!timer.is_running());

        clock.advance(60_000);
        assert_eq!(state.borrow().current_index(), 2);
    }

    #[test]
    fn dropping_the_handle_stops_the_timer() {
        let clock = ManualClock::default();
        let (state, timer) = mounted(6, &clock);
        clock.advance(2_000);
        drop(timer);
        clock.advance(60_000);
        assert_eq!(state.borrow().current_index(), 0);
    }

    #[test]
    fn manual_navigation_does_not_reset_the_cadence() {
        let clock = ManualClock::default();
        let (state, _timer) = mounted(6, &clock);

        clock.advance(4_000);
        state.borrow_mut().apply(CarouselAction::Next);
        assert_eq!(state.borrow().current_index(), 1);

        // The tick still lands at 5s, one second after the click.
        clock.advance(1_000);
        assert_eq!(state.borrow().current_index(), 2);
        assert_eq!(state.borrow().direction().sign(), 1);
    }

    #[test]
    fn tick_overrides_a_backward_click() {
        let clock = ManualClock::default();
        let (state, _timer) = mounted(6, &clock);

        state.borrow_mut().apply(CarouselAction::Previous);
        assert_eq!(state.borrow().current_index(), 5);
        clock.advance(5_000);
        assert_eq!(state.borrow().current_index(), 0);
        assert_eq!(state.borrow().direction().sign(), 1);
    }
}
