use super::state::PendingTurn;
use std::time::{Duration, Instant};

/// Work deferred to a later tick. Game events carry the generation they were
/// scheduled under so a reset in between leaves them inert.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Deferred
{
    Resolve(PendingTurn),
    Victory { generation: u64 },
    ClearToast { serial: u64 },
}

struct Scheduled
{
    due: Instant,
    seq: u64,
    event: Deferred,
}

// Entries cannot be cancelled.
#[derive(Default)]
pub struct Timers
{
    queue: Vec<Scheduled>,
    next_seq: u64,
}

impl Timers
{
    pub fn schedule(&mut self, now: Instant, delay: Duration, event: Deferred)
    {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.queue.push(Scheduled {
            due: now + delay,
            seq,
            event,
        });
    }

    pub fn drain_due(&mut self, now: Instant) -> Vec<Deferred>
    {
        let (mut due, pending): (Vec<_>, Vec<_>) = std::mem::take(&mut self.queue)
            .into_iter()
            .partition(|entry| entry.due <= now);
        self.queue = pending;
        due.sort_by_key(|entry| (entry.due, entry.seq));
        due.into_iter().map(|entry| entry.event).collect()
    }

    pub fn next_due(&self) -> Option<Instant>
    {
        self.queue.iter().map(|entry| entry.due).min()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize
    {
        self.queue.len()
    }
}
