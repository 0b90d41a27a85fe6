/// Periodic spawn triggers.
///
/// The loop registers one `SpawnTimer` per mob kind with a millisecond
/// interval and polls them all during the event-drain step.  Timers are
/// pure values driven by elapsed time handed in from outside, so tests can
/// run simulated clocks.

use std::time::Duration;

/// Fires at `t = interval, 2·interval, 3·interval, …`.  A poll at exactly a
/// due instant reports that fire: a 250 ms timer polled at 1000 ms has
/// fired four times.
#[derive(Clone, Debug)]
pub struct SpawnTimer {
    interval: Duration,
    fired: u32,
}

impl SpawnTimer {
    pub fn new(interval: Duration) -> SpawnTimer {
        SpawnTimer { interval, fired: 0 }
    }

    /// Number of fires that became due since the last poll, given the total
    /// elapsed time.  Catches up: a late poll reports every missed fire at
    /// once.  `elapsed` must not go backwards.
    pub fn poll(&mut self, elapsed: Duration) -> u32 {
        if self.interval.is_zero() {
            return 0;
        }
        let mut count = 0;
        while self.interval * (self.fired + 1) <= elapsed {
            self.fired += 1;
            count += 1;
        }
        count
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }
}
