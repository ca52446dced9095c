//! A cancellable repeating tick for bubbletea-rs.
//!
//! bubbletea has no interval primitive: a `tick` command fires once. A
//! [`Repeater`] re-arms itself every time its own tick is accepted, and keeps
//! exactly one tick in flight. Each repeater has a unique id and a generation
//! tag. Cancelling (or restarting) bumps the tag, so the tick that is still in
//! flight is rejected when it arrives. That makes a cancelled repeater
//! impossible to leak: nothing ever re-arms it.
//!
//! ```rust
//! use bubbletea_pomodoro::repeater::Repeater;
//! use std::time::Duration;
//!
//! let mut repeater = Repeater::new(Duration::from_secs(1));
//! let _cmd = repeater.start();
//! let in_flight = repeater.pending().expect("armed");
//!
//! repeater.cancel();
//! assert!(!repeater.accept(&in_flight));
//! assert!(repeater.pending().is_none());
//! ```

use bubbletea_rs::{tick as bubbletea_tick, Cmd, Msg};
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Duration;

// Internal ID management for repeater instances
static LAST_ID: AtomicI64 = AtomicI64::new(0);

fn next_id() -> i64 {
    LAST_ID.fetch_add(1, Ordering::SeqCst) + 1
}

/// Message delivered when a repeater's interval has elapsed.
///
/// Only the repeater that produced it, in the generation that produced it,
/// accepts the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickMsg {
    /// Id of the repeater that scheduled this tick.
    pub id: i64,
    tag: i64,
}

impl TickMsg {
    /// Generation tag the tick was scheduled under.
    pub fn tag(&self) -> i64 {
        self.tag
    }
}

/// A repeating one-shot tick with cancellation.
///
/// A clone keeps the interval but gets its own id and starts idle, so it never
/// accepts ticks scheduled by the original.
#[derive(Debug)]
pub struct Repeater {
    /// Time between ticks.
    pub interval: Duration,
    id: i64,
    tag: i64,
    active: bool,
}

impl Repeater {
    /// Creates an idle repeater.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            id: next_id(),
            tag: 0,
            active: false,
        }
    }

    /// Returns the unique id of this repeater.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Whether a tick is currently in flight for this repeater.
    pub fn active(&self) -> bool {
        self.active
    }

    /// Arms the repeater and returns the command delivering the first tick.
    ///
    /// Starting an already active repeater opens a new generation; the previous
    /// in-flight tick becomes stale.
    pub fn start(&mut self) -> Cmd {
        self.tag += 1;
        self.active = true;
        self.schedule()
    }

    /// Disarms the repeater. Any in-flight tick will be rejected.
    pub fn cancel(&mut self) {
        if self.active {
            log::trace!("repeater {} cancelled at generation {}", self.id, self.tag);
        }
        self.active = false;
        self.tag += 1;
    }

    /// Returns true when `msg` is the tick this repeater is waiting for.
    pub fn accept(&self, msg: &TickMsg) -> bool {
        if !self.active || msg.id != self.id {
            return false;
        }
        if msg.tag != self.tag {
            log::trace!(
                "repeater {} rejected stale tick (tag {} != {})",
                self.id,
                msg.tag,
                self.tag
            );
            return false;
        }
        true
    }

    /// Schedules the next tick of the current generation.
    ///
    /// Call this once for every accepted tick while the repeater stays active.
    pub fn rearm(&self) -> Cmd {
        self.schedule()
    }

    /// The tick the runtime is currently waiting to deliver, if any.
    ///
    /// Feeding this message back through `update` is equivalent to letting one
    /// interval pass.
    pub fn pending(&self) -> Option<TickMsg> {
        if !self.active {
            return None;
        }
        Some(TickMsg {
            id: self.id,
            tag: self.tag,
        })
    }

    fn schedule(&self) -> Cmd {
        let id = self.id;
        let tag = self.tag;
        bubbletea_tick(self.interval, move |_| Box::new(TickMsg { id, tag }) as Msg)
    }
}

impl Clone for Repeater {
    fn clone(&self) -> Self {
        Self::new(self.interval)
    }
}

impl Default for Repeater {
    fn default() -> Self {
        Self::new(Duration::from_secs(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_idle() {
        let repeater = Repeater::default();
        assert!(!repeater.active());
        assert!(repeater.pending().is_none());
        assert_eq!(repeater.interval, Duration::from_secs(1));
        assert!(repeater.id() > 0);
    }

    #[test]
    fn test_unique_ids() {
        let a = Repeater::default();
        let b = Repeater::default();
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_start_accepts_own_tick() {
        let mut repeater = Repeater::default();
        let _cmd = repeater.start();

        let tick = repeater.pending().expect("armed");
        assert_eq!(tick.id, repeater.id());
        assert!(repeater.accept(&tick));
    }

    #[test]
    fn test_cancel_rejects_in_flight_tick() {
        let mut repeater = Repeater::default();
        let _cmd = repeater.start();
        let tick = repeater.pending().expect("armed");

        repeater.cancel();
        assert!(!repeater.active());
        assert!(!repeater.accept(&tick));
    }

    #[test]
    fn test_restart_opens_new_generation() {
        let mut repeater = Repeater::default();
        let _first = repeater.start();
        let old = repeater.pending().expect("armed");

        let _second = repeater.start();
        let new = repeater.pending().expect("armed");

        assert!(new.tag() > old.tag());
        assert!(!repeater.accept(&old));
        assert!(repeater.accept(&new));
    }

    #[test]
    fn test_rejects_foreign_tick() {
        let mut a = Repeater::default();
        let mut b = Repeater::default();
        let _ = a.start();
        let _ = b.start();

        let from_b = b.pending().expect("armed");
        assert!(!a.accept(&from_b));
    }

    #[test]
    fn test_cancel_on_idle_still_bumps_generation() {
        let mut repeater = Repeater::default();
        let _ = repeater.start();
        let tick = repeater.pending().expect("armed");
        repeater.cancel();
        repeater.cancel();

        let _ = repeater.start();
        assert!(!repeater.accept(&tick));
    }

    #[test]
    fn test_clone_has_own_identity() {
        let mut original = Repeater::new(Duration::from_millis(250));
        let _ = original.start();
        let tick = original.pending().expect("armed");

        let mut copy = original.clone();
        assert_ne!(copy.id(), original.id());
        assert_eq!(copy.interval, original.interval);
        assert!(!copy.active());
        assert!(!copy.accept(&tick));

        let _ = copy.start();
        assert!(!copy.accept(&tick));
        assert!(original.accept(&tick));
    }

    #[tokio::test]
    async fn test_command_delivers_pending_tick() {
        let mut repeater = Repeater::new(Duration::from_millis(5));
        let cmd = repeater.start();
        let expected = repeater.pending().expect("armed");

        let msg = cmd.await.expect("tick command yields a message");
        let tick = msg.downcast_ref::<TickMsg>().expect("a TickMsg");
        assert_eq!(*tick, expected);
    }
}
