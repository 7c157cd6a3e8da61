//! Two-card turn resolution.
//!
//! A pair flipped by [`Board::attempt_flip`] locks the board and yields a
//! [`TurnMessage::ResolvePair`] to be delivered after the reveal delay.
//! Matching pairs are settled right there; mismatches yield a
//! [`TurnMessage::FlipBack`] for the second delay, after which both cards
//! turn face down and the board unlocks.
//!
//! Messages carry the board generation they were issued for. Anything from a
//! previous deal is dropped.
use std::time::Duration;

use super::board::Board;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnPhase {
    Idle,
    Selecting,
    Pending,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TurnMessage {
    ResolvePair { generation: u64 },
    FlipBack { generation: u64 },
}

impl TurnMessage {
    pub fn generation(self) -> u64 {
        match self {
            TurnMessage::ResolvePair { generation } | TurnMessage::FlipBack { generation } => generation,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScheduledMessage {
    pub delay: Duration,
    pub message: TurnMessage,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Resolution {
    Matched { symbol: String },
    /// Cards stay up until the enclosed flip-back message is delivered.
    Mismatched(ScheduledMessage),
    FlippedBack,
    Stale,
}

impl Board {
    pub fn resolve(&mut self, message: TurnMessage) -> Resolution {
        if message.generation() != self.generation {
            tracing::debug!(
                ?message,
                current = self.generation,
                "dropping message for a previous board"
            );
            return Resolution::Stale;
        }

        match message {
            TurnMessage::ResolvePair { .. } => self.resolve_pair(),
            TurnMessage::FlipBack { .. } => self.flip_back(),
        }
    }

    fn resolve_pair(&mut self) -> Resolution {
        let first = self.selection.first().copied();
        let second = self.selection.get(1).copied();

        let matched_symbol = match (first, second) {
            (Some(a), Some(b)) if a != b => {
                match (self.cards.get(a), self.cards.get(b)) {
                    (Some(x), Some(y)) if x.symbol() == y.symbol() => Some(x.symbol().to_string()),
                    _ => None,
                }
            }
            _ => None,
        };

        let Some(symbol) = matched_symbol else {
            tracing::debug!(selection = ?self.selection, "pair mismatched");
            return Resolution::Mismatched(ScheduledMessage {
                delay: self.config.mismatch_delay(),
                message: TurnMessage::FlipBack {
                    generation: self.generation,
                },
            });
        };

        for index in self.selection.drain(..) {
            if let Some(card) = self.cards.get_mut(index) {
                card.mark_matched();
            }
        }
        self.matched_pairs += 1;
        self.score += 1;
        self.locked = false;

        tracing::debug!(%symbol, score = self.score, "pair matched");
        if self.is_complete() {
            tracing::info!(score = self.score, "board complete");
        }
        Resolution::Matched { symbol }
    }

    fn flip_back(&mut self) -> Resolution {
        for index in self.selection.drain(..) {
            match self.cards.get_mut(index) {
                Some(card) if card.is_face_up() && !card.is_matched() => card.flip(),
                Some(_) => {}
                None => tracing::debug!(index, "skipping missing card"),
            }
        }
        self.locked = false;
        Resolution::FlippedBack
    }
}
