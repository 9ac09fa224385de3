//! Cooperative interval timers.
//!
//! The UI loop is single threaded: it polls tickers against the simulator
//! clock and runs each due callback to completion before drawing. A cancelled
//! ticker never reports another firing.

use std::time::Duration;

use tracing::debug;

use super::Simulator;

/// Upper bound on intervals replayed after a stall.
///
/// If the loop was suspended for longer, the schedule is re-anchored to now
/// instead of replaying every missed interval.
const MAX_CATCH_UP: u32 = 32;

/// Fixed-interval timer driven by an external clock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticker {
    interval: Duration,
    next_due: Duration,
    cancelled: bool,
}

impl Ticker {
    /// Start a timer at `now`; the first firing is one interval later.
    ///
    /// A zero interval is bumped to one millisecond.
    pub fn start(now: Duration, interval: Duration) -> Self {
        let interval = interval.max(Duration::from_millis(1));
        Self {
            interval,
            next_due: now + interval,
            cancelled: false,
        }
    }

    /// Number of intervals that elapsed since the last poll.
    pub fn poll(&mut self, now: Duration) -> u32 {
        if self.cancelled {
            return 0;
        }
        let mut fired = 0;
        while self.next_due <= now {
            fired += 1;
            self.next_due += self.interval;
            if fired == MAX_CATCH_UP {
                self.next_due = now + self.interval;
                break;
            }
        }
        fired
    }

    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }
}

/// State that evolves on a fixed cadence while it is on screen.
pub trait Section {
    /// Name used in logs and exports.
    fn name(&self) -> &'static str;

    /// Cadence of [`Section::on_tick`].
    fn interval(&self) -> Duration;

    /// One update step.
    fn on_tick(&mut self, sim: &mut Simulator);
}

/// A section together with the timer that drives it.
#[derive(Debug)]
pub struct Mounted<S> {
    section: S,
    ticker: Ticker,
}

impl<S: Section> Mounted<S> {
    /// Mount a section; its timer starts at the simulator's current time.
    pub fn mount(section: S, sim: &Simulator) -> Self {
        let ticker = Ticker::start(sim.now(), section.interval());
        debug!(section = section.name(), interval_ms = ticker.interval().as_millis() as u64, "mounted");
        Self { section, ticker }
    }

    /// Run every due tick. Returns how many ran.
    pub fn advance(&mut self, sim: &mut Simulator) -> u32 {
        let fired = self.ticker.poll(sim.now());
        for _ in 0..fired {
            self.section.on_tick(sim);
        }
        fired
    }

    /// Cancel the timer. The section keeps its last state but never ticks again.
    pub fn unmount(&mut self) {
        if !self.ticker.is_cancelled() {
            debug!(section = self.section.name(), "unmounted");
            self.ticker.cancel();
        }
    }

    pub fn is_mounted(&self) -> bool {
        !self.ticker.is_cancelled()
    }

    pub fn get(&self) -> &S {
        &self.section
    }

    pub fn get_mut(&mut self) -> &mut S {
        &mut self.section
    }
}

impl<S> Drop for Mounted<S> {
    fn drop(&mut self) {
        self.ticker.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{FixedEntropy, ManualClock};

    #[derive(Debug, Default)]
    struct Counter {
        ticks: u32,
    }

    impl Section for Counter {
        fn name(&self) -> &'static str {
            "counter"
        }

        fn interval(&self) -> Duration {
            Duration::from_millis(2000)
        }

        fn on_tick(&mut self, _sim: &mut Simulator) {
            self.ticks += 1;
        }
    }

    fn sim(clock: &ManualClock) -> Simulator {
        Simulator::new(Box::new(clock.clone()), Box::new(FixedEntropy::new(0.5)))
    }

    #[test]
    fn test_ticker_fires_on_schedule() {
        let mut t = Ticker::start(Duration::ZERO, Duration::from_millis(3000));
        assert_eq!(t.poll(Duration::from_millis(2999)), 0);
        assert_eq!(t.poll(Duration::from_millis(3000)), 1);
        assert_eq!(t.poll(Duration::from_millis(3001)), 0);
        assert_eq!(t.poll(Duration::from_millis(9000)), 2);
    }

    #[test]
    fn test_ticker_catch_up_is_capped() {
        let mut t = Ticker::start(Duration::ZERO, Duration::from_millis(10));
        assert_eq!(t.poll(Duration::from_secs(60)), MAX_CATCH_UP);
        assert_eq!(t.poll(Duration::from_secs(60)), 0);
        assert_eq!(t.poll(Duration::from_millis(60_010)), 1);
    }

    #[test]
    fn test_cancelled_ticker_never_fires() {
        let mut t = Ticker::start(Duration::ZERO, Duration::from_millis(100));
        t.cancel();
        assert_eq!(t.poll(Duration::from_secs(10)), 0);
    }

    #[test]
    fn test_unmounted_section_gets_no_callbacks() {
        let clock = ManualClock::new();
        let mut sim = sim(&clock);
        let mut mounted = Mounted::mount(Counter::default(), &sim);

        clock.advance(Duration::from_millis(4000));
        assert_eq!(mounted.advance(&mut sim), 2);
        assert_eq!(mounted.get().ticks, 2);

        mounted.unmount();
        assert!(!mounted.is_mounted());
        clock.advance(Duration::from_millis(10_000));
        assert_eq!(mounted.advance(&mut sim), 0);
        assert_eq!(mounted.get().ticks, 2);
    }

    #[test]
    fn test_mount_mid_run_starts_fresh_schedule() {
        let clock = ManualClock::new();
        clock.advance(Duration::from_millis(1500));
        let mut sim = sim(&clock);
        let mut mounted = Mounted::mount(Counter::default(), &sim);
        clock.advance(Duration::from_millis(1999));
        assert_eq!(mounted.advance(&mut sim), 0);
        clock.advance(Duration::from_millis(1));
        assert_eq!(mounted.advance(&mut sim), 1);
    }
}
