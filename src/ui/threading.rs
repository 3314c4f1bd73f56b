/// Delayed-effect scheduling for the egui event loop
///
/// Search debouncing and the comparison pick animation both delay a state
/// change. Each delayed change is scheduled on a named channel; scheduling
/// again on the same channel aborts the pending timer, so only the last
/// request inside the window fires. Fired actions are delivered over an
/// mpsc channel that the UI drains once per frame.

use crate::state::Action;
use std::collections::HashMap;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Independent debounce lanes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TimerChannel {
    /// Search box edits
    Search,
    /// Pending pick of the named record
    Selection(String),
}

/// An action whose delay elapsed.
#[derive(Debug, Clone, PartialEq)]
pub struct FiredEffect {
    pub channel: TimerChannel,
    pub generation: u64,
    pub action: Action,
}

struct PendingTimer {
    generation: u64,
    task: JoinHandle<()>,
}

/// Owns the timers and the sending half of the effect channel.
pub struct EffectScheduler {
    handle: Handle,
    tx: mpsc::UnboundedSender<FiredEffect>,
    pending: HashMap<TimerChannel, PendingTimer>,
    next_generation: u64,
}

impl EffectScheduler {
    /// Create a scheduler spawning its timers on `handle`.
    pub fn new(handle: Handle) -> (Self, mpsc::UnboundedReceiver<FiredEffect>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let scheduler = Self {
            handle,
            tx,
            pending: HashMap::new(),
            next_generation: 0,
        };
        (scheduler, rx)
    }

    /// Fire `action` after `delay`, replacing anything pending on `channel`.
    pub fn schedule(&mut self, channel: TimerChannel, action: Action, delay: Duration) {
        self.cancel(&channel);

        self.next_generation += 1;
        let generation = self.next_generation;
        let effect = FiredEffect {
            channel: channel.clone(),
            generation,
            action,
        };
        let tx = self.tx.clone();

        let task = self.handle.spawn(async move {
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            let _ = tx.send(effect);
        });

        self.pending.insert(channel, PendingTimer { generation, task });
    }

    /// Abort the pending timer on `channel`. Returns whether one existed.
    pub fn cancel(&mut self, channel: &TimerChannel) -> bool {
        match self.pending.remove(channel) {
            Some(timer) => {
                timer.task.abort();
                true
            }
            None => false,
        }
    }

    /// Abort every pending pick.
    pub fn cancel_selections(&mut self) {
        let selections: Vec<TimerChannel> = self
            .pending
            .keys()
            .filter(|c| matches!(c, TimerChannel::Selection(_)))
            .cloned()
            .collect();
        for channel in selections {
            self.cancel(&channel);
        }
    }

    pub fn is_pending(&self, channel: &TimerChannel) -> bool {
        self.pending.contains_key(channel)
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Accept a fired effect if it is still the latest for its channel.
    ///
    /// A timer can fire and enqueue its effect just before being superseded;
    /// such stale effects are dropped here.
    pub fn accept(&mut self, effect: FiredEffect) -> Option<Action> {
        match self.pending.get(&effect.channel) {
            Some(timer) if timer.generation == effect.generation => {
                self.pending.remove(&effect.channel);
                Some(effect.action)
            }
            _ => None,
        }
    }
}

impl Drop for EffectScheduler {
    fn drop(&mut self) {
        for (_, timer) in self.pending.drain() {
            timer.task.abort();
        }
    }
}
