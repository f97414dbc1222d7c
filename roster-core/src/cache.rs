//! Single-value TTL cache with an injected clock.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// Time source for cache expiry.
pub trait Clock {
    /// Current instant.
    fn now(&self) -> Instant;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[inline]
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// A clock that only moves when told to.
#[derive(Debug)]
pub struct ManualClock {
    base: Instant,
    offset_nanos: AtomicU64,
}

impl ManualClock {
    /// Starts at the current instant.
    pub fn new() -> Self {
        Self {
            base: Instant::now(),
            offset_nanos: AtomicU64::new(0),
        }
    }

    /// Moves the clock forward.
    pub fn advance(&self, by: Duration) {
        let nanos = u64::try_from(by.as_nanos()).unwrap_or(u64::MAX);
        self.offset_nanos.fetch_add(nanos, Ordering::Relaxed);
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.base + Duration::from_nanos(self.offset_nanos.load(Ordering::Relaxed))
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    #[inline]
    fn now(&self) -> Instant {
        (**self).now()
    }
}

/// Holds at most one value, fresh for `ttl` after insertion.
#[derive(Debug)]
pub struct TtlCache<V, C = SystemClock> {
    ttl: Duration,
    clock: C,
    slot: Option<(Instant, V)>,
}

impl<V> TtlCache<V, SystemClock> {
    /// Creates an empty cache on the system clock.
    pub fn new(ttl: Duration) -> Self {
        Self::with_clock(ttl, SystemClock)
    }
}

impl<V, C: Clock> TtlCache<V, C> {
    /// Creates an empty cache on `clock`.
    pub fn with_clock(ttl: Duration, clock: C) -> Self {
        Self {
            ttl,
            clock,
            slot: None,
        }
    }

    /// Entry lifetime.
    #[inline]
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// The injected clock.
    #[inline]
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// `true` when a value is cached and has not expired.
    pub fn is_fresh(&self) -> bool {
        match &self.slot {
            Some((at, _)) => self.clock.now().saturating_duration_since(*at) < self.ttl,
            None => false,
        }
    }

    /// The cached value, if fresh.
    pub fn get(&self) -> Option<&V> {
        if self.is_fresh() {
            self.slot.as_ref().map(|(_, v)| v)
        } else {
            None
        }
    }

    /// Stores `value`, restarting its lifetime.
    pub fn insert(&mut self, value: V) {
        self.slot = Some((self.clock.now(), value));
    }

    /// Drops the cached value.
    pub fn invalidate(&mut self) {
        self.slot = None;
    }

    /// Returns the fresh value, computing and storing a new one when stale.
    pub fn get_or_insert_with(&mut self, compute: impl FnOnce() -> V) -> &V {
        if !self.is_fresh() {
            self.slot = None;
        }
        let now = self.clock.now();
        let (_, value) = self.slot.get_or_insert_with(|| (now, compute()));
        value
    }
}
