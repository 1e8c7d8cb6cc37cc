use super::catalog;
use super::config::PairsConfig;
use super::input::Command;
use super::navigation::{self, COLUMNS};
use super::state::{FlipOutcome, GameState, Notice, Resolution};
use super::timers::{Deferred, Timers};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::time::{Duration, Instant};
use tracing::debug;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control
{
    Continue,
    Quit,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast
{
    pub text: String,
    serial: u64,
}

/// A running game plus everything the front end layers on top of it:
/// focus, the toast line and the deferred-event queue.
pub struct Session
{
    state: GameState,
    rng: ChaCha8Rng,
    seed: u64,
    timers: Timers,
    focus: usize,
    toast: Option<Toast>,
    toast_serial: u64,
    flip_delay: Duration,
    victory_delay: Duration,
    toast_duration: Duration,
}

impl Session
{
    pub fn new(config: &PairsConfig, seed: u64, now: Instant) -> Self
    {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let state = GameState::new(catalog::animals(config.pairs), &mut rng);
        let mut session = Self {
            state,
            rng,
            seed,
            timers: Timers::default(),
            focus: 0,
            toast: None,
            toast_serial: 0,
            flip_delay: config.flip_delay,
            victory_delay: config.victory_delay,
            toast_duration: config.toast_duration,
        };
        let notice = session.state.status();
        session.show_toast(notice, now);
        session
    }

    pub fn apply(&mut self, command: Command, now: Instant) -> Control
    {
        match command {
            Command::Quit => return Control::Quit,
            Command::Reset => {
                let notice = self.state.new_game(&mut self.rng);
                self.focus = 0;
                self.show_toast(notice, now);
            }
            Command::Move(direction) => {
                let len = self.state.cards().len();
                if let Some(target) = navigation::target(self.focus, direction, len, COLUMNS) {
                    self.focus = target;
                }
            }
            Command::Activate => self.activate(now),
        }
        Control::Continue
    }

    fn activate(&mut self, now: Instant)
    {
        match self.state.flip(self.focus) {
            FlipOutcome::Rejected(_) => {}
            FlipOutcome::FirstOfTurn(notice) => self.show_toast(notice, now),
            FlipOutcome::SecondOfTurn { notice, pending } => {
                self.show_toast(notice, now);
                self.timers.schedule(now, self.flip_delay, Deferred::Resolve(pending));
            }
        }
    }

    pub fn tick(&mut self, now: Instant)
    {
        for event in self.timers.drain_due(now) {
            match event {
                Deferred::Resolve(turn) => {
                    let resolution = self.state.resolve(turn);
                    self.finish_turn(resolution, now);
                }
                Deferred::Victory { generation } => {
                    if let Some(notice) = self.state.victory(generation) {
                        self.show_toast(notice, now);
                    }
                }
                Deferred::ClearToast { serial } => {
                    if self.toast.as_ref().is_some_and(|toast| toast.serial == serial) {
                        self.toast = None;
                    }
                }
            }
        }
    }

    fn finish_turn(&mut self, resolution: Resolution, now: Instant)
    {
        match resolution {
            Resolution::Stale | Resolution::Incomplete => {}
            Resolution::Mismatched { notice, pair } => {
                self.focus = pair[0];
                self.show_toast(notice, now);
            }
            Resolution::Matched {
                notice,
                pair,
                finished,
            } => {
                debug!(?pair, finished, "pair cleared from play");
                if self.state.cards()[self.focus].is_matched {
                    if let Some(next) = navigation::next_enabled(self.state.cards(), self.focus) {
                        self.focus = next;
                    }
                }
                self.show_toast(notice, now);
                if finished {
                    let generation = self.state.generation();
                    let victory = Deferred::Victory { generation };
                    self.timers.schedule(now, self.victory_delay, victory);
                }
            }
        }
    }

    fn show_toast(&mut self, notice: Notice, now: Instant)
    {
        self.toast_serial += 1;
        let serial = self.toast_serial;
        debug!(serial, %notice, "toast");
        self.toast = Some(Toast {
            text: notice.to_string(),
            serial,
        });
        self.timers.schedule(now, self.toast_duration, Deferred::ClearToast { serial });
    }

    pub fn state(&self) -> &GameState
    {
        &self.state
    }

    pub fn focus(&self) -> usize
    {
        self.focus
    }

    pub fn toast(&self) -> Option<&str>
    {
        self.toast.as_ref().map(|toast| toast.text.as_str())
    }

    pub fn seed(&self) -> u64
    {
        self.seed
    }

    pub fn next_due(&self) -> Option<Instant>
    {
        self.timers.next_due()
    }
}
