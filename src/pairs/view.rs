//! Pure projection of a [`GameState`] into what a front end draws.
//!
//! The board is rebuilt from scratch on every change; nothing here keeps
//! state between frames.

use super::board::Card;
use super::catalog::PLACEHOLDER;
use super::navigation::COLUMNS;
use super::state::{GameState, TurnPhase};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardView
{
    pub index: usize,
    pub face: &'static str,
    pub is_flipped: bool,
    pub is_matched: bool,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewModel
{
    pub cards: Vec<CardView>,
    pub columns: usize,
    pub moves: u32,
    pub matched_pairs: usize,
    pub total_pairs: usize,
    pub status: String,
    pub phase: TurnPhase,
    pub is_complete: bool,
}

impl ViewModel
{
    pub fn rows(&self) -> impl Iterator<Item = &[CardView]>
    {
        self.cards.chunks(self.columns.max(1))
    }
}

pub fn render(state: &GameState) -> ViewModel
{
    ViewModel {
        cards: state.cards().iter().map(card_view).collect(),
        columns: COLUMNS,
        moves: state.moves(),
        matched_pairs: state.matched_pairs(),
        total_pairs: state.total_pairs(),
        status: state.status().to_string(),
        phase: state.phase(),
        is_complete: state.is_complete(),
    }
}

fn card_view(card: &Card) -> CardView
{
    CardView {
        index: card.id,
        face: if card.is_face_up() {
            card.symbol.emoji
        } else {
            PLACEHOLDER
        },
        is_flipped: card.is_flipped,
        is_matched: card.is_matched,
        label: card_label(card),
    }
}

/// Accessible description of a card, read out for the focused card.
pub fn card_label(card: &Card) -> String
{
    if card.is_matched {
        format!("{}, pair found", card.symbol.name)
    } else if card.is_flipped {
        format!("{}, flipped", card.symbol.name)
    } else {
        format!("Card {}, hidden", card.id + 1)
    }
}
