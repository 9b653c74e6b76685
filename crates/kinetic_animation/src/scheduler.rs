//! Animation scheduler
//!
//! Owns every animated track and advances them on each frame. Components
//! never hold track state directly: they keep a [`SchedulerHandle`] plus the
//! ids of the tracks they registered, so tearing a component down only
//! removes ids and any late update against a removed id is dropped.
//!
//! The scheduler keeps a virtual clock in milliseconds. [`AnimationScheduler::advance`]
//! moves it explicitly (deterministic, used by tests and headless runs);
//! [`AnimationScheduler::tick`] moves it by the wall-clock time since the
//! previous tick.
//!
//! Deferred starts ([`SchedulerHandle::schedule`]) are plain data: a batch of
//! transitions fired when the clock reaches their deadline. A step that
//! crosses deadlines is split at each of them, so a deferred transition
//! begins exactly at its deadline regardless of frame boundaries.

use crate::spring::{Spring, SpringConfig};
use crate::timing::{Timing, TimingConfig};
use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use std::time::{Duration, Instant};

new_key_type! {
    /// Handle to a registered animated track
    pub struct ValueId;
    /// Handle to a pending deferred start
    pub struct TimerId;
}

/// Default upper bound for a single integration step
pub const DEFAULT_MAX_STEP_MS: f32 = 8.0;

/// A declarative transition: where a value should go and along which curve
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Transition {
    Spring { target: f32, config: SpringConfig },
    Timing { target: f32, config: TimingConfig },
}

impl Transition {
    pub fn spring(target: f32, config: SpringConfig) -> Self {
        Transition::Spring { target, config }
    }

    pub fn timing(target: f32, config: TimingConfig) -> Self {
        Transition::Timing { target, config }
    }

    pub fn target(&self) -> f32 {
        match self {
            Transition::Spring { target, .. } | Transition::Timing { target, .. } => *target,
        }
    }
}

/// Transitions fired together by one deferred start
pub type StartBatch = SmallVec<[(ValueId, Transition); 2]>;

#[derive(Clone, Copy, Debug)]
enum Active {
    Spring(Spring),
    Timing(Timing),
}

#[derive(Clone, Debug)]
struct Track {
    value: f32,
    active: Option<Active>,
    started_at_ms: Option<f64>,
}

impl Track {
    fn new(initial: f32) -> Self {
        Self {
            value: initial,
            active: None,
            started_at_ms: None,
        }
    }

    /// Replace whatever is in flight with `transition`
    fn start(&mut self, transition: Transition, now_ms: f64) {
        let active = match transition {
            Transition::Spring { target, config } => {
                let velocity = match self.active {
                    Some(Active::Spring(spring)) => spring.velocity(),
                    _ => 0.0,
                };
                let mut spring = Spring::new(config, self.value).with_velocity(velocity);
                spring.set_target(target);
                Active::Spring(spring)
            }
            Transition::Timing { target, config } => {
                Active::Timing(Timing::new(self.value, target, config))
            }
        };
        self.active = Some(active);
        self.started_at_ms = Some(now_ms);
    }

    fn step(&mut self, dt_ms: f32) {
        let finished = match &mut self.active {
            Some(Active::Spring(spring)) => {
                spring.step(dt_ms / 1000.0);
                self.value = spring.value();
                spring.is_settled()
            }
            Some(Active::Timing(timing)) => {
                timing.tick(dt_ms);
                self.value = timing.value();
                timing.is_finished()
            }
            None => false,
        };
        if finished {
            self.active = None;
        }
    }

    fn is_animating(&self) -> bool {
        self.active.is_some()
    }
}

#[derive(Clone, Debug)]
struct ScheduledStart {
    deadline_ms: f64,
    seq: u64,
    starts: StartBatch,
}

/// Internal state of the animation scheduler
struct SchedulerInner {
    tracks: SlotMap<ValueId, Track>,
    timers: SlotMap<TimerId, ScheduledStart>,
    clock_ms: f64,
    next_seq: u64,
    max_step_ms: f32,
    last_tick: Option<Instant>,
}

impl SchedulerInner {
    fn next_due(&self, until_ms: f64) -> Option<TimerId> {
        self.timers
            .iter()
            .filter(|(_, timer)| timer.deadline_ms <= until_ms)
            .min_by(|(_, a), (_, b)| {
                a.deadline_ms
                    .total_cmp(&b.deadline_ms)
                    .then(a.seq.cmp(&b.seq))
            })
            .map(|(id, _)| id)
    }

    fn any_animating(&self) -> bool {
        self.tracks.iter().any(|(_, t)| t.is_animating())
    }

    /// Integrate every track up to `until_ms` in bounded sub-steps
    ///
    /// Once nothing is in flight the clock jumps straight to `until_ms`.
    fn step_to(&mut self, until_ms: f64) {
        let mut remaining = until_ms - self.clock_ms;
        let max_step = f64::from(self.max_step_ms.max(0.1));
        while remaining > 0.0 && self.any_animating() {
            let step = remaining.min(max_step);
            for (_, track) in self.tracks.iter_mut() {
                track.step(step as f32);
            }
            remaining -= step;
        }
        self.clock_ms = self.clock_ms.max(until_ms);
    }

    fn fire(&mut self, timer: ScheduledStart) {
        for (id, transition) in timer.starts {
            match self.tracks.get_mut(id) {
                Some(track) => track.start(transition, timer.deadline_ms),
                None => tracing::trace!("deferred start skipped: value {:?} was removed", id),
            }
        }
    }

    fn advance(&mut self, dt_ms: f64) -> bool {
        let end = self.clock_ms + dt_ms.max(0.0);
        while let Some(id) = self.next_due(end) {
            let Some(timer) = self.timers.remove(id) else {
                break;
            };
            self.step_to(timer.deadline_ms);
            self.fire(timer);
        }
        self.step_to(end);
        self.has_active()
    }

    fn has_active(&self) -> bool {
        !self.timers.is_empty() || self.any_animating()
    }
}

fn lock(inner: &Mutex<SchedulerInner>) -> MutexGuard<'_, SchedulerInner> {
    inner.lock().unwrap_or_else(PoisonError::into_inner)
}

/// The animation scheduler that ticks all active animations
///
/// Held by the application runtime; components get a [`SchedulerHandle`].
pub struct AnimationScheduler {
    inner: Arc<Mutex<SchedulerInner>>,
}

impl AnimationScheduler {
    pub fn new() -> Self {
        Self::with_max_step(DEFAULT_MAX_STEP_MS)
    }

    /// Create a scheduler integrating in steps of at most `max_step_ms`
    pub fn with_max_step(max_step_ms: f32) -> Self {
        Self {
            inner: Arc::new(Mutex::new(SchedulerInner {
                tracks: SlotMap::with_key(),
                timers: SlotMap::with_key(),
                clock_ms: 0.0,
                next_seq: 0,
                max_step_ms,
                last_tick: None,
            })),
        }
    }

    /// Get a handle to this scheduler for passing to components
    pub fn handle(&self) -> SchedulerHandle {
        SchedulerHandle {
            inner: Arc::downgrade(&self.inner),
        }
    }

    /// Advance the virtual clock by `dt`
    ///
    /// Returns true if anything is still animating or waiting to start.
    pub fn advance(&self, dt: Duration) -> bool {
        self.advance_ms(dt.as_secs_f64() * 1000.0)
    }

    /// Advance the virtual clock by `dt_ms` milliseconds
    pub fn advance_ms(&self, dt_ms: f64) -> bool {
        lock(&self.inner).advance(dt_ms)
    }

    /// Advance by the wall-clock time elapsed since the previous tick
    ///
    /// The first tick only records the reference instant.
    pub fn tick(&self) -> bool {
        let mut inner = lock(&self.inner);
        let now = Instant::now();
        let dt_ms = inner
            .last_tick
            .map(|last| (now - last).as_secs_f64() * 1000.0)
            .unwrap_or(0.0);
        inner.last_tick = Some(now);
        inner.advance(dt_ms)
    }

    /// Check if any animations are running or pending
    pub fn has_active_animations(&self) -> bool {
        lock(&self.inner).has_active()
    }

    /// Current virtual time in milliseconds
    pub fn now_ms(&self) -> f64 {
        lock(&self.inner).clock_ms
    }

    /// Number of registered tracks
    pub fn value_count(&self) -> usize {
        lock(&self.inner).tracks.len()
    }

    /// Number of deferred starts that have not fired yet
    pub fn pending_count(&self) -> usize {
        lock(&self.inner).timers.len()
    }
}

impl Default for AnimationScheduler {
    fn default() -> Self {
        Self::new()
    }
}

/// A weak handle to the animation scheduler
///
/// Every operation is a silent no-op once the scheduler has been dropped.
#[derive(Clone)]
pub struct SchedulerHandle {
    inner: Weak<Mutex<SchedulerInner>>,
}

impl SchedulerHandle {
    /// A handle that is not attached to any scheduler
    pub fn detached() -> Self {
        Self { inner: Weak::new() }
    }

    fn with<R>(&self, f: impl FnOnce(&mut SchedulerInner) -> R) -> Option<R> {
        self.inner.upgrade().map(|inner| f(&mut lock(&inner)))
    }

    /// Register a track resting at `initial`
    pub fn register(&self, initial: f32) -> Option<ValueId> {
        self.with(|inner| inner.tracks.insert(Track::new(initial)))
    }

    /// Remove a track; pending starts that reference it will skip it
    pub fn remove(&self, id: ValueId) {
        self.with(|inner| inner.tracks.remove(id));
    }

    /// Start `transition` now, superseding anything in flight
    pub fn start(&self, id: ValueId, transition: Transition) {
        self.with(|inner| {
            let now = inner.clock_ms;
            if let Some(track) = inner.tracks.get_mut(id) {
                track.start(transition, now);
            }
        });
    }

    /// Halt the track where it is
    pub fn stop(&self, id: ValueId) {
        self.with(|inner| {
            if let Some(track) = inner.tracks.get_mut(id) {
                track.active = None;
            }
        });
    }

    /// Jump to `value` without animating
    pub fn set_immediate(&self, id: ValueId, value: f32) {
        self.with(|inner| {
            if let Some(track) = inner.tracks.get_mut(id) {
                track.active = None;
                track.value = value;
            }
        });
    }

    /// Current value of a track
    pub fn value(&self, id: ValueId) -> Option<f32> {
        self.with(|inner| inner.tracks.get(id).map(|t| t.value))
            .flatten()
    }

    /// Whether a transition is in flight on the track
    pub fn is_animating(&self, id: ValueId) -> bool {
        self.with(|inner| inner.tracks.get(id).is_some_and(Track::is_animating))
            .unwrap_or(false)
    }

    /// Virtual time at which the track's latest transition began
    pub fn started_at(&self, id: ValueId) -> Option<f64> {
        self.with(|inner| inner.tracks.get(id).and_then(|t| t.started_at_ms))
            .flatten()
    }

    /// Fire `starts` once `delay_ms` has elapsed on the scheduler clock
    ///
    /// Starts sharing a deadline fire in the order they were scheduled.
    pub fn schedule(&self, delay_ms: u32, starts: StartBatch) -> Option<TimerId> {
        self.with(|inner| {
            let seq = inner.next_seq;
            inner.next_seq += 1;
            inner.timers.insert(ScheduledStart {
                deadline_ms: inner.clock_ms + f64::from(delay_ms),
                seq,
                starts,
            })
        })
    }

    /// Cancel a pending start. Returns true if it had not fired yet.
    pub fn cancel(&self, id: TimerId) -> bool {
        self.with(|inner| inner.timers.remove(id).is_some())
            .unwrap_or(false)
    }

    /// Whether a deferred start is still waiting for its deadline
    pub fn is_pending(&self, id: TimerId) -> bool {
        self.with(|inner| inner.timers.contains_key(id))
            .unwrap_or(false)
    }

    /// Current virtual time, if the scheduler is alive
    pub fn now_ms(&self) -> Option<f64> {
        self.with(|inner| inner.clock_ms)
    }

    /// Check if the scheduler is still alive
    pub fn is_alive(&self) -> bool {
        self.inner.strong_count() > 0
    }
}

impl std::fmt::Debug for SchedulerHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SchedulerHandle")
            .field("alive", &self.is_alive())
            .finish()
    }
}
