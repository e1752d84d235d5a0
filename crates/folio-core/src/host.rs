//! Event registration for the interaction controller.
//!
//! A host owns the two asynchronous event sources the controller listens
//! to: the scroll stream and repeating timers. Registrations return handles;
//! events come back tagged with the handle they were registered under, so a
//! stale event from an earlier registration can be told apart.

use std::time::{Duration, Instant};

/// Handle for a registered scroll listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Handle for a registered repeating timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

impl ListenerId {
    /// Wrap a host-assigned raw handle.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn raw(&self) -> u64 {
        self.0
    }
}

impl TimerId {
    /// Wrap a host-assigned raw handle.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn raw(&self) -> u64 {
        self.0
    }
}

/// An event delivered by a host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostEvent {
    /// The viewport scrolled.
    Scroll(ListenerId),
    /// A repeating timer fired.
    Tick(TimerId),
}

/// Listener and timer registration.
pub trait EventHost {
    /// Register a scroll listener.
    fn add_scroll_listener(&mut self) -> ListenerId;

    /// Deregister a scroll listener. Unknown handles are ignored.
    fn remove_scroll_listener(&mut self, id: ListenerId);

    /// Start a repeating timer with the given period.
    fn set_interval(&mut self, period: Duration) -> TimerId;

    /// Cancel a repeating timer. Unknown handles are ignored.
    fn clear_interval(&mut self, id: TimerId);
}

#[derive(Debug, Clone)]
struct Interval {
    id: TimerId,
    period: Duration,
    next_due: Instant,
}

/// Single-threaded host driven by an explicit clock.
///
/// Nothing fires on its own: the owner calls [`IntervalHost::poll`] with the
/// current time and [`IntervalHost::notify_scroll`] after the viewport moves,
/// then forwards the returned events.
#[derive(Debug, Clone)]
pub struct IntervalHost {
    now: Instant,
    next_id: u64,
    listeners: Vec<ListenerId>,
    intervals: Vec<Interval>,
}

impl Default for IntervalHost {
    fn default() -> Self {
        Self::new(Instant::now())
    }
}

impl IntervalHost {
    /// Create a host whose clock starts at `now`.
    pub fn new(now: Instant) -> Self {
        Self {
            now,
            next_id: 1,
            listeners: Vec::new(),
            intervals: Vec::new(),
        }
    }

    fn allocate_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Advance the clock and collect due timer ticks.
    ///
    /// Each timer fires at most once per poll. Periods missed while the
    /// owner was not polling are dropped rather than replayed in a burst.
    pub fn poll(&mut self, now: Instant) -> Vec<HostEvent> {
        if now > self.now {
            self.now = now;
        }

        let mut events = Vec::new();
        for interval in &mut self.intervals {
            if self.now >= interval.next_due {
                events.push(HostEvent::Tick(interval.id));
                interval.next_due += interval.period;
                if self.now >= interval.next_due {
                    interval.next_due = self.now + interval.period;
                }
            }
        }
        events
    }

    /// One scroll event per registered listener.
    pub fn notify_scroll(&self) -> Vec<HostEvent> {
        self.listeners.iter().copied().map(HostEvent::Scroll).collect()
    }

    /// Earliest instant at which a timer is due, if any timer is live.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.intervals.iter().map(|i| i.next_due).min()
    }

    /// The host's current clock reading.
    pub fn now(&self) -> Instant {
        self.now
    }

    /// Number of live scroll listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Number of live timers.
    pub fn timer_count(&self) -> usize {
        self.intervals.len()
    }

    /// Whether the timer is still registered.
    pub fn is_timer_active(&self, id: TimerId) -> bool {
        self.intervals.iter().any(|i| i.id == id)
    }
}

impl EventHost for IntervalHost {
    fn add_scroll_listener(&mut self) -> ListenerId {
        let id = ListenerId(self.allocate_id());
        self.listeners.push(id);
        id
    }

    fn remove_scroll_listener(&mut self, id: ListenerId) {
        self.listeners.retain(|l| *l != id);
    }

    fn set_interval(&mut self, period: Duration) -> TimerId {
        let id = TimerId(self.allocate_id());
        self.intervals.push(Interval {
            id,
            period,
            next_due: self.now + period,
        });
        id
    }

    fn clear_interval(&mut self, id: TimerId) {
        self.intervals.retain(|i| i.id != id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PERIOD: Duration = Duration::from_millis(150);

    #[test]
    fn test_interval_fires_after_period() {
        let start = Instant::now();
        let mut host = IntervalHost::new(start);
        let timer = host.set_interval(PERIOD);

        assert!(host.poll(start + Duration::from_millis(100)).is_empty());
        assert_eq!(host.poll(start + PERIOD), vec![HostEvent::Tick(timer)]);
        // Not due again until the next period
        assert!(host.poll(start + Duration::from_millis(200)).is_empty());
        assert_eq!(host.poll(start + PERIOD * 2), vec![HostEvent::Tick(timer)]);
    }

    #[test]
    fn test_missed_periods_are_not_replayed() {
        let start = Instant::now();
        let mut host = IntervalHost::new(start);
        let timer = host.set_interval(PERIOD);

        // A long stall yields a single tick
        assert_eq!(host.poll(start + PERIOD * 10), vec![HostEvent::Tick(timer)]);
        assert!(host.poll(start + PERIOD * 10).is_empty());
        assert_eq!(host.next_deadline(), Some(start + PERIOD * 11));
    }

    #[test]
    fn test_cleared_interval_stops_firing() {
        let start = Instant::now();
        let mut host = IntervalHost::new(start);
        let timer = host.set_interval(PERIOD);
        host.clear_interval(timer);

        assert!(!host.is_timer_active(timer));
        assert!(host.poll(start + PERIOD * 3).is_empty());
        assert_eq!(host.next_deadline(), None);
    }

    #[test]
    fn test_scroll_listeners() {
        let mut host = IntervalHost::default();
        let a = host.add_scroll_listener();
        let b = host.add_scroll_listener();
        assert_ne!(a, b);
        assert_eq!(
            host.notify_scroll(),
            vec![HostEvent::Scroll(a), HostEvent::Scroll(b)]
        );

        host.remove_scroll_listener(a);
        assert_eq!(host.notify_scroll(), vec![HostEvent::Scroll(b)]);
        assert_eq!(host.listener_count(), 1);
    }

    #[test]
    fn test_clock_never_goes_backwards() {
        let start = Instant::now();
        let mut host = IntervalHost::new(start + PERIOD);
        host.poll(start);
        assert_eq!(host.now(), start + PERIOD);
    }
}
