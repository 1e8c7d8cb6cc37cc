use super::board::{self, Card};
use super::catalog::Symbol;
use rand::Rng;
use std::fmt;
use tracing::{debug, info};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnPhase
{
    Idle,
    OneFlipped,
    Resolving,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Notice
{
    NewGame { cards: usize, pairs: usize },
    Revealed { position: usize, symbol: Symbol },
    Match { symbol: Symbol, remaining: usize },
    NoMatch,
    Victory { moves: u32 },
}

impl fmt::Display for Notice
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        match self {
            Notice::NewGame { cards, pairs } => write!(
                f,
                "New game: {cards} cards, {pairs} pairs to find. Flip two cards to start."
            ),
            Notice::Revealed { position, symbol } => {
                write!(f, "Card {position}: {} {}", symbol.emoji, symbol.name)
            }
            Notice::Match { symbol, remaining: 0 } => {
                write!(f, "Pair found: {}! That was the last one.", symbol.name)
            }
            Notice::Match { symbol, remaining: 1 } => {
                write!(f, "Pair found: {}! 1 pair left.", symbol.name)
            }
            Notice::Match { symbol, remaining } => {
                write!(f, "Pair found: {}! {remaining} pairs left.", symbol.name)
            }
            Notice::NoMatch => write!(f, "No match. Try again."),
            Notice::Victory { moves } => {
                write!(f, "Well done! All pairs found in {moves} moves.")
            }
        }
    }
}

/// The two cards of a completed turn, tagged with the game they belong to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PendingTurn
{
    pub generation: u64,
    pub pair: [usize; 2],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rejection
{
    Locked,
    OutOfRange,
    AlreadyFlipped,
    AlreadyMatched,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlipOutcome
{
    Rejected(Rejection),
    FirstOfTurn(Notice),
    SecondOfTurn
    {
        notice: Notice,
        pending: PendingTurn,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution
{
    /// The turn belongs to a game that has since been replaced.
    Stale,
    /// Recorded flips did not line up with the turn; those cards were turned back.
    Incomplete,
    Matched
    {
        notice: Notice,
        pair: [usize; 2],
        finished: bool,
    },
    Mismatched
    {
        notice: Notice,
        pair: [usize; 2],
    },
}

pub struct GameState
{
    catalog: Vec<Symbol>,
    cards: Vec<Card>,
    flipped: Vec<usize>,
    matched_pairs: usize,
    moves: u32,
    locked: bool,
    generation: u64,
    status: Notice,
}

impl GameState
{
    pub fn new(catalog: &[Symbol], rng: &mut impl Rng) -> Self
    {
        let cards = board::deal(catalog, rng);
        Self::from_cards(catalog.to_vec(), cards)
    }

    fn from_cards(catalog: Vec<Symbol>, cards: Vec<Card>) -> Self
    {
        let status = Notice::NewGame {
            cards: cards.len(),
            pairs: catalog.len(),
        };
        info!(cards = cards.len(), pairs = catalog.len(), "new game dealt");
        Self {
            catalog,
            cards,
            flipped: Vec::with_capacity(2),
            matched_pairs: 0,
            moves: 0,
            locked: false,
            generation: 0,
            status,
        }
    }

    #[cfg(test)]
    pub fn from_layout(catalog: &[Symbol], layout: &[Symbol]) -> Self
    {
        Self::from_cards(catalog.to_vec(), board::lay_out(layout.to_vec()))
    }

    /// Replaces the whole board. Pending turns from the previous game are
    /// invalidated by the generation bump.
    pub fn new_game(&mut self, rng: &mut impl Rng) -> Notice
    {
        self.cards = board::deal(&self.catalog, rng);
        self.flipped.clear();
        self.matched_pairs = 0;
        self.moves = 0;
        self.locked = false;
        self.generation = self.generation.wrapping_add(1);
        self.status = Notice::NewGame {
            cards: self.cards.len(),
            pairs: self.catalog.len(),
        };
        info!(
            generation = self.generation,
            cards = self.cards.len(),
            "new game started"
        );
        self.status
    }

    pub fn flip(&mut self, index: usize) -> FlipOutcome
    {
        if let Err(reason) = self.check_flippable(index) {
            debug!(index, ?reason, "flip rejected");
            return FlipOutcome::Rejected(reason);
        }

        let card = &mut self.cards[index];
        card.is_flipped = true;
        let notice = Notice::Revealed {
            position: index + 1,
            symbol: card.symbol,
        };
        self.flipped.push(index);
        self.status = notice;
        debug!(index, symbol = card.symbol.name, "card flipped");

        match self.flipped.as_slice() {
            &[first, second] => {
                self.moves += 1;
                self.locked = true;
                FlipOutcome::SecondOfTurn {
                    notice,
                    pending: PendingTurn {
                        generation: self.generation,
                        pair: [first, second],
                    },
                }
            }
            _ => FlipOutcome::FirstOfTurn(notice),
        }
    }

    fn check_flippable(&self, index: usize) -> Result<(), Rejection>
    {
        if self.locked {
            return Err(Rejection::Locked);
        }
        let card = self.cards.get(index).ok_or(Rejection::OutOfRange)?;
        if card.is_matched {
            return Err(Rejection::AlreadyMatched);
        }
        if card.is_flipped {
            return Err(Rejection::AlreadyFlipped);
        }
        Ok(())
    }

    pub fn resolve(&mut self, turn: PendingTurn) -> Resolution
    {
        if turn.generation != self.generation {
            debug!(
                turn = turn.generation,
                current = self.generation,
                "ignoring stale resolution"
            );
            return Resolution::Stale;
        }
        if self.flipped.as_slice() != turn.pair {
            debug!(flipped = ?self.flipped, pair = ?turn.pair, "incomplete turn, clearing");
            for &index in &self.flipped {
                let card = &mut self.cards[index];
                if !card.is_matched {
                    card.is_flipped = false;
                }
            }
            self.end_turn();
            return Resolution::Incomplete;
        }

        let [first, second] = turn.pair;
        let symbol = self.cards[first].symbol;
        let resolution = if symbol == self.cards[second].symbol {
            self.cards[first].is_matched = true;
            self.cards[second].is_matched = true;
            self.matched_pairs += 1;
            let remaining = self.remaining_pairs();
            info!(symbol = symbol.name, remaining, "pair matched");
            self.status = Notice::Match { symbol, remaining };
            Resolution::Matched {
                notice: Notice::Match { symbol, remaining },
                pair: turn.pair,
                finished: remaining == 0,
            }
        } else {
            self.cards[first].is_flipped = false;
            self.cards[second].is_flipped = false;
            debug!(first, second, "no match");
            self.status = Notice::NoMatch;
            Resolution::Mismatched {
                notice: Notice::NoMatch,
                pair: turn.pair,
            }
        };

        self.end_turn();
        resolution
    }

    pub fn victory(&mut self, generation: u64) -> Option<Notice>
    {
        if generation != self.generation || !self.is_complete() {
            return None;
        }
        let notice = Notice::Victory { moves: self.moves };
        self.status = notice;
        info!(moves = self.moves, "game won");
        Some(notice)
    }

    fn end_turn(&mut self)
    {
        self.flipped.clear();
        self.locked = false;
    }

    pub fn phase(&self) -> TurnPhase
    {
        match self.flipped.len() {
            0 => TurnPhase::Idle,
            1 => TurnPhase::OneFlipped,
            _ => TurnPhase::Resolving,
        }
    }

    pub fn cards(&self) -> &[Card]
    {
        &self.cards
    }

    #[cfg(test)]
    pub fn flipped(&self) -> &[usize]
    {
        &self.flipped
    }

    pub fn moves(&self) -> u32
    {
        self.moves
    }

    pub fn matched_pairs(&self) -> usize
    {
        self.matched_pairs
    }

    pub fn total_pairs(&self) -> usize
    {
        self.catalog.len()
    }

    pub fn remaining_pairs(&self) -> usize
    {
        self.total_pairs() - self.matched_pairs
    }

    #[cfg(test)]
    pub fn is_locked(&self) -> bool
    {
        self.locked
    }

    pub fn is_complete(&self) -> bool
    {
        self.matched_pairs == self.total_pairs()
    }

    pub fn generation(&self) -> u64
    {
        self.generation
    }

    pub fn status(&self) -> Notice
    {
        self.status
    }
}
