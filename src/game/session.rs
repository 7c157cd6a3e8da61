//! Session: the single owner of a board and its pending timers.
use std::time::Duration;

use super::board::{Board, FlipOutcome};
use super::input::{PointerOutcome, on_pointer_down};
use super::level::Level;
use super::resolver::{Resolution, ScheduledMessage, TurnMessage};
use super::scheduler::{ManualScheduler, Scheduler};
use super::view::BoardView;

pub struct Session<S: Scheduler> {
    board: Board,
    scheduler: S,
}

impl<S: Scheduler> Session<S> {
    pub fn new(board: Board, scheduler: S) -> Self {
        Self { board, scheduler }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn view(&self) -> BoardView {
        self.board.view()
    }

    pub fn pointer_down(&mut self, x: f64, y: f64) -> PointerOutcome {
        let outcome = on_pointer_down(&mut self.board, x, y);
        if let PointerOutcome::Flipped {
            outcome: FlipOutcome::PairPending(scheduled),
            ..
        } = &outcome
        {
            self.enqueue(*scheduled);
        }
        outcome
    }

    /// Flips by board index, bypassing hit-testing.
    pub fn flip(&mut self, index: usize) -> FlipOutcome {
        let outcome = self.board.attempt_flip(index);
        if let FlipOutcome::PairPending(scheduled) = &outcome {
            self.enqueue(*scheduled);
        }
        outcome
    }

    pub fn deliver(&mut self, message: TurnMessage) -> Resolution {
        let resolution = self.board.resolve(message);
        if let Resolution::Mismatched(scheduled) = &resolution {
            self.enqueue(*scheduled);
        }
        resolution
    }

    pub fn start_level(&mut self, cards: u32) -> Level {
        self.board.start_level(cards)
    }

    pub fn restart(&mut self) {
        self.board.restart();
    }

    pub fn toggle_level(&mut self) -> Level {
        self.board.toggle_level()
    }

    fn enqueue(&mut self, scheduled: ScheduledMessage) {
        self.scheduler.schedule(scheduled.delay, scheduled.message);
    }
}

impl Session<ManualScheduler> {
    /// Runs the virtual clock forward, delivering every message that comes
    /// due, including ones scheduled along the way.
    pub fn advance(&mut self, by: Duration) -> Vec<Resolution> {
        let deadline = self.scheduler.now() + by;
        let mut resolutions = Vec::new();
        while let Some(message) = self.scheduler.pop_due(deadline) {
            resolutions.push(self.deliver(message));
        }
        self.scheduler.set_now(deadline);
        resolutions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;

    fn session() -> Session<ManualScheduler> {
        let board = Board::with_seed(GameConfig::default(), 31).unwrap();
        Session::new(board, ManualScheduler::new())
    }

    #[test]
    fn pair_schedules_one_resolution() {
        let mut session = session();
        session.flip(0);
        assert_eq!(session.scheduler().pending(), 0);
        session.flip(1);
        assert_eq!(session.scheduler().pending(), 1);
        assert_eq!(session.scheduler().next_due(), Some(Duration::from_millis(1000)));
    }

    #[test]
    fn advance_runs_both_mismatch_phases() {
        let mut session = session();
        let first = session.board().card(0).unwrap().symbol().to_string();
        let other = session
            .board()
            .cards()
            .iter()
            .position(|c| c.symbol() != first)
            .unwrap();
        session.flip(0);
        session.flip(other);

        let resolutions = session.advance(Duration::from_millis(999));
        assert!(resolutions.is_empty());

        let resolutions = session.advance(Duration::from_secs(5));
        assert_eq!(resolutions.len(), 2);
        assert!(matches!(resolutions[0], Resolution::Mismatched(_)));
        assert_eq!(resolutions[1], Resolution::FlippedBack);
        assert!(!session.board().is_locked());
        assert_eq!(session.scheduler().pending(), 0);
    }

    #[test]
    fn flip_back_waits_for_second_delay() {
        let mut session = session();
        let first = session.board().card(0).unwrap().symbol().to_string();
        let other = session
            .board()
            .cards()
            .iter()
            .position(|c| c.symbol() != first)
            .unwrap();
        session.flip(0);
        session.flip(other);

        session.advance(Duration::from_millis(1000));
        assert!(session.board().is_locked());
        assert!(session.board().card(other).unwrap().is_face_up());

        session.advance(Duration::from_millis(999));
        assert!(session.board().is_locked());

        session.advance(Duration::from_millis(1));
        assert!(!session.board().is_locked());
        assert!(!session.board().card(other).unwrap().is_face_up());
    }
}
