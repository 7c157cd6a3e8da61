//! The board: dealt cards plus everything a single game tracks.
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::GameConfig;
use crate::error::ConfigError;

use super::card::Card;
use super::layout::Layout;
use super::level::Level;
use super::resolver::{ScheduledMessage, TurnMessage, TurnPhase};
use super::shuffle::{deal_pairs, shuffle};

#[derive(Clone, Debug, PartialEq)]
pub enum FlipOutcome {
    /// Board locked, card already showing, or no such card.
    Ignored,
    /// First card of a pair is up.
    Selected,
    /// Second card is up; the board is locked until the message is delivered.
    PairPending(ScheduledMessage),
}

#[derive(Debug)]
pub struct Board {
    pub(super) config: GameConfig,
    pub(super) layout: Layout,
    pub(super) cards: Vec<Card>,
    pub(super) selection: Vec<usize>,
    pub(super) locked: bool,
    pub(super) score: u32,
    pub(super) matched_pairs: u32,
    pub(super) generation: u64,
    rng: StdRng,
}

impl Board {
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        Self::with_rng(config, StdRng::from_os_rng())
    }

    pub fn with_seed(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    pub fn with_rng(config: GameConfig, rng: StdRng) -> Result<Self, ConfigError> {
        config.validate()?;
        let starting_cards = config.starting_cards;
        let layout = Layout::new(Level::Standard, &config);
        let mut board = Self {
            config,
            layout,
            cards: Vec::new(),
            selection: Vec::with_capacity(2),
            locked: false,
            score: 0,
            matched_pairs: 0,
            generation: 0,
            rng,
        };
        board.start_level(starting_cards);
        Ok(board)
    }

    /// Deals a fresh board for `cards` cards. Unsupported counts fall back to
    /// the 16-card level.
    pub fn start_level(&mut self, cards: u32) -> Level {
        let level = match Level::try_from(cards) {
            Ok(level) => level,
            Err(err) => {
                tracing::warn!(error = %err, "falling back to {}", Level::Standard.name());
                Level::Standard
            }
        };
        self.start(level);
        level
    }

    pub fn start(&mut self, level: Level) {
        self.layout = Layout::new(level, &self.config);
        let deck = shuffle(deal_pairs(self.config.symbols_for(level)), &mut self.rng);

        // Deal from the end of the shuffled deck.
        self.cards = self
            .layout
            .cells()
            .zip(deck.into_iter().rev())
            .map(|(cell, symbol)| Card::new(cell, symbol))
            .collect();
        self.selection.clear();
        self.locked = false;
        self.score = 0;
        self.matched_pairs = 0;
        self.generation = self.generation.wrapping_add(1);

        tracing::debug!(
            cards = self.cards.len(),
            generation = self.generation,
            "started {}",
            level.name()
        );
    }

    pub fn restart(&mut self) {
        self.start(self.layout.level);
    }

    pub fn toggle_level(&mut self) -> Level {
        let next = self.layout.level.toggled();
        self.start(next);
        next
    }

    pub fn attempt_flip(&mut self, index: usize) -> FlipOutcome {
        if self.locked || self.selection.len() >= 2 {
            return FlipOutcome::Ignored;
        }
        let Some(card) = self.cards.get_mut(index) else {
            return FlipOutcome::Ignored;
        };
        if !card.is_selectable() {
            return FlipOutcome::Ignored;
        }

        card.flip();
        self.selection.push(index);
        tracing::debug!(index, symbol = card.symbol(), "flipped card");

        if self.selection.len() < 2 {
            return FlipOutcome::Selected;
        }
        self.locked = true;
        FlipOutcome::PairPending(ScheduledMessage {
            delay: self.config.reveal_delay(),
            message: TurnMessage::ResolvePair {
                generation: self.generation,
            },
        })
    }

    pub fn level(&self) -> Level {
        self.layout.level
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn card(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    pub fn card_at_cell(&self, column: u32, row: u32) -> Option<&Card> {
        self.layout.index_of(column, row).and_then(|index| self.cards.get(index))
    }

    pub fn selection(&self) -> &[usize] {
        &self.selection
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn matched_pairs(&self) -> u32 {
        self.matched_pairs
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn phase(&self) -> TurnPhase {
        match self.selection.len() {
            0 => TurnPhase::Idle,
            1 => TurnPhase::Selecting,
            _ => TurnPhase::Pending,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.matched_pairs as usize == self.cards.len() / 2
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use proptest::prelude::*;

    use super::*;

    fn board(seed: u64) -> Board {
        Board::with_seed(GameConfig::default(), seed).unwrap()
    }

    fn symbol_counts(board: &Board) -> HashMap<String, usize> {
        let mut counts = HashMap::new();
        for card in board.cards() {
            *counts.entry(card.symbol().to_string()).or_insert(0) += 1;
        }
        counts
    }

    /// Two indices whose cards carry different symbols.
    fn mismatched_pair(board: &Board) -> (usize, usize) {
        let first = board.card(0).unwrap().symbol();
        let other = board.cards().iter().position(|c| c.symbol() != first).unwrap();
        (0, other)
    }

    #[test]
    fn new_board_uses_starting_level() {
        let board = board(1);
        assert_eq!(board.level(), Level::Standard);
        assert_eq!(board.cards().len(), 16);
        assert_eq!(board.phase(), TurnPhase::Idle);
        assert!(!board.is_locked());
        assert!(!board.is_complete());
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = GameConfig {
            extended_symbols: vec!["x".into()],
            ..GameConfig::default()
        };
        assert!(Board::with_seed(config, 1).is_err());
    }

    #[test]
    fn invalid_level_falls_back_to_standard() {
        let mut board = board(2);
        board.start(Level::Extended);
        assert_eq!(board.start_level(7), Level::Standard);
        assert_eq!(board.cards().len(), 16);
        assert_eq!(symbol_counts(&board).len(), 8);
    }

    #[test]
    fn unsupported_level_warns() {
        let mut board = board(2);
        let logs = crate::logging::capture::logs_of(|| {
            board.start_level(7);
        });
        assert!(logs.contains("WARN"));
        assert!(logs.contains("unsupported card count 7"));
    }

    #[test]
    fn supported_level_does_not_warn() {
        let mut board = board(2);
        let logs = crate::logging::capture::logs_of(|| {
            board.start_level(20);
        });
        assert_eq!(board.level(), Level::Extended);
        assert!(!logs.contains("WARN"));
    }

    #[test]
    fn cards_follow_layout_order() {
        let board = board(3);
        let cells: Vec<_> = board.layout().cells().collect();
        for (card, cell) in board.cards().iter().zip(cells) {
            assert_eq!(card.bounds(), cell);
        }
    }

    #[test]
    fn first_flip_selects() {
        let mut board = board(4);
        assert_eq!(board.attempt_flip(3), FlipOutcome::Selected);
        assert!(board.card(3).unwrap().is_face_up());
        assert_eq!(board.selection(), &[3]);
        assert_eq!(board.phase(), TurnPhase::Selecting);
        assert!(!board.is_locked());
    }

    #[test]
    fn second_flip_locks_and_schedules() {
        let mut board = board(5);
        board.attempt_flip(0);
        let outcome = board.attempt_flip(1);
        let generation = board.generation();
        assert_eq!(
            outcome,
            FlipOutcome::PairPending(ScheduledMessage {
                delay: board.config().reveal_delay(),
                message: TurnMessage::ResolvePair { generation },
            })
        );
        assert!(board.is_locked());
        assert_eq!(board.phase(), TurnPhase::Pending);
    }

    #[test]
    fn flipping_same_card_twice_is_ignored() {
        let mut board = board(6);
        board.attempt_flip(2);
        assert_eq!(board.attempt_flip(2), FlipOutcome::Ignored);
        assert_eq!(board.selection(), &[2]);
    }

    #[test]
    fn out_of_range_flip_is_ignored() {
        let mut board = board(7);
        assert_eq!(board.attempt_flip(99), FlipOutcome::Ignored);
        assert_eq!(board.phase(), TurnPhase::Idle);
    }

    #[test]
    fn restart_resets_everything() {
        let mut board = board(8);
        let (a, b) = mismatched_pair(&board);
        board.attempt_flip(a);
        board.attempt_flip(b);
        let before = board.generation();
        board.restart();
        assert_eq!(board.generation(), before + 1);
        assert_eq!(board.level(), Level::Standard);
        assert!(!board.is_locked());
        assert!(board.selection().is_empty());
        assert!(board.cards().iter().all(|c| !c.is_face_up() && !c.is_matched()));
    }

    #[test]
    fn toggle_switches_level() {
        let mut board = board(9);
        assert_eq!(board.toggle_level(), Level::Extended);
        assert_eq!(board.cards().len(), 20);
        assert_eq!(board.layout().canvas_height, 550.0);
        assert_eq!(board.toggle_level(), Level::Standard);
        assert_eq!(board.cards().len(), 16);
    }

    proptest! {
        #[test]
        fn every_symbol_dealt_twice(seed: u64, extended: bool) {
            let mut board = board(seed);
            let level = if extended { Level::Extended } else { Level::Standard };
            board.start(level);
            let counts = symbol_counts(&board);
            prop_assert_eq!(counts.len(), level.unique_symbols());
            prop_assert!(counts.values().all(|&n| n == 2));
            for symbol in board.config().symbols_for(level) {
                prop_assert_eq!(counts.get(symbol), Some(&2));
            }
            prop_assert!(board.cards().iter().all(|c| !c.is_face_up() && !c.is_matched()));
            prop_assert_eq!(board.score(), 0);
            prop_assert_eq!(board.matched_pairs(), 0);
        }

        #[test]
        fn locked_board_ignores_flips(seed: u64, target in 0usize..16) {
            let mut board = board(seed);
            let (a, b) = mismatched_pair(&board);
            board.attempt_flip(a);
            board.attempt_flip(b);
            let before = board.card(target).cloned();
            prop_assert_eq!(board.attempt_flip(target), FlipOutcome::Ignored);
            prop_assert_eq!(board.card(target).cloned(), before);
            prop_assert_eq!(board.selection().len(), 2);
        }
    }
}
