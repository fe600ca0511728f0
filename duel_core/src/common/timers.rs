//! Delayed actions that run once the game clock passes their due time
//!
//! Entries never mutate state directly. They are handed back to the
//! [`GameState`](super::gamestate::GameState), which checks the token an entry
//! carries against the player before applying it.

use serde::{Deserialize, Serialize};

use super::player::Side;

/// Milliseconds on the host clock (`performance.now()` in a browser)
pub type Millis = f64;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deferred {
    /// Give the side its shots back. Only valid for the cooldown `volley` it was scheduled in.
    CooldownReset { side: Side, volley: u32 },
    /// Bring the side back onto the field. Only valid for the `life` that was lost.
    Respawn { side: Side, life: u32 },
}

#[derive(Debug, Clone)]
struct Entry {
    due_at: Millis,
    /// insertion order, breaks ties between equal due times
    seq: u64,
    action: Deferred,
}

#[derive(Debug, Default, Clone)]
pub struct Scheduler {
    entries: Vec<Entry>,
    next_seq: u64,
}

impl Scheduler {
    pub fn schedule(&mut self, due_at: Millis, action: Deferred) {
        self.entries.push(Entry {
            due_at,
            seq: self.next_seq,
            action,
        });
        self.next_seq += 1;
    }

    /// Removes and returns the earliest entry that is due at `now`
    pub fn pop_due(&mut self, now: Millis) -> Option<Deferred> {
        let (index, _) = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.due_at <= now)
            .min_by(|(_, a), (_, b)| a.due_at.total_cmp(&b.due_at).then(a.seq.cmp(&b.seq)))?;

        Some(self.entries.remove(index).action)
    }

    /// Drops every pending action
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
