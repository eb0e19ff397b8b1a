//! Click handling, match detection and the two game timers.
//!
//! The controller never touches widgets directly: every side effect goes
//! through [`SessionHost`], and timer callbacks come back in as
//! [`SessionEvent`]s so the whole transition table lives in [`Session::handle`].

use std::time::Duration;

use chrono::NaiveDateTime;
use tracing::{debug, info};

use super::clock::{ClockStyle, format_elapsed};
use super::state::{Board, Cell, CellStatus};

pub const WIN_MESSAGE: &str = "You matched all the icons!";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    OneRevealed { first: usize },
    /// Two mismatched cells are face-up and the concealment timer is pending.
    Resolving { first: usize, second: usize },
    Won,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    CellClicked(usize),
    ConcealmentElapsed,
    ClockTick,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerKind {
    Concealment,
    Clock,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SoundCue {
    Match,
    Mismatch,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SessionTiming {
    pub concealment_delay: Duration,
    pub clock_interval: Duration,
    pub clock_style: ClockStyle,
}

pub trait SessionHost {
    fn show_cell(&mut self, index: usize, cell: &Cell);
    fn play_sound(&mut self, cue: SoundCue);
    fn start_timer(&mut self, timer: TimerKind, interval: Duration);
    fn stop_timer(&mut self, timer: TimerKind);
    fn show_elapsed(&mut self, text: &str);
    fn announce_win(&mut self, message: &str);
    fn now(&self) -> NaiveDateTime;
}

pub struct Session {
    board: Board,
    phase: Phase,
    started_at: Option<NaiveDateTime>,
    clock_running: bool,
    timing: SessionTiming,
}

impl Session {
    pub fn new(board: Board, timing: SessionTiming) -> Self {
        Session {
            board,
            phase: Phase::Idle,
            started_at: None,
            clock_running: false,
            timing,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn started_at(&self) -> Option<NaiveDateTime> {
        self.started_at
    }

    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Won
    }

    /// Pushes every cell to the host, e.g. after the view was rebuilt.
    pub fn present(&self, host: &mut impl SessionHost) {
        for (index, cell) in self.board.cells().iter().enumerate() {
            host.show_cell(index, cell);
        }
    }

    pub fn handle(&mut self, event: SessionEvent, host: &mut impl SessionHost) {
        match event {
            SessionEvent::CellClicked(index) => self.on_cell_clicked(index, host),
            SessionEvent::ConcealmentElapsed => self.on_concealment_elapsed(host),
            SessionEvent::ClockTick => self.on_clock_tick(host),
        }
    }

    fn on_cell_clicked(&mut self, index: usize, host: &mut impl SessionHost) {
        if matches!(self.phase, Phase::Resolving { .. } | Phase::Won) {
            debug!(index, phase = ?self.phase, "click ignored");
            return;
        }
        let Some(cell) = self.board.cell(index) else {
            return;
        };
        if cell.is_face_up() {
            return;
        }

        self.set_cell(index, CellStatus::Flipped, host);
        if self.started_at.is_none() {
            self.start_clock(host);
        }

        match self.phase {
            Phase::Idle => {
                self.phase = Phase::OneRevealed { first: index };
            }
            Phase::OneRevealed { first } => self.resolve_pair(first, index, host),
            Phase::Resolving { .. } | Phase::Won => {}
        }
    }

    fn resolve_pair(&mut self, first: usize, second: usize, host: &mut impl SessionHost) {
        let is_match = match (self.board.cell(first), self.board.cell(second)) {
            (Some(a), Some(b)) => a.icon == b.icon,
            _ => false,
        };

        if is_match {
            debug!(first, second, "pair matched");
            host.play_sound(SoundCue::Match);
            self.set_cell(first, CellStatus::Matched, host);
            self.set_cell(second, CellStatus::Matched, host);
            self.phase = Phase::Idle;
            self.check_win(host);
        } else {
            debug!(first, second, "pair mismatched");
            host.play_sound(SoundCue::Mismatch);
            host.start_timer(TimerKind::Concealment, self.timing.concealment_delay);
            self.phase = Phase::Resolving { first, second };
        }
    }

    fn on_concealment_elapsed(&mut self, host: &mut impl SessionHost) {
        let Phase::Resolving { first, second } = self.phase else {
            return;
        };
        host.stop_timer(TimerKind::Concealment);
        self.set_cell(first, CellStatus::Hidden, host);
        self.set_cell(second, CellStatus::Hidden, host);
        self.phase = Phase::Idle;
    }

    fn on_clock_tick(&mut self, host: &mut impl SessionHost) {
        if !self.clock_running {
            return;
        }
        if let Some(start) = self.started_at {
            let text = format_elapsed(start, host.now(), self.timing.clock_style);
            host.show_elapsed(&text);
        }
    }

    fn check_win(&mut self, host: &mut impl SessionHost) {
        if !self.board.all_matched() {
            return;
        }
        if self.clock_running {
            if let Some(start) = self.started_at {
                host.show_elapsed(&format_elapsed(start, host.now(), self.timing.clock_style));
            }
            host.stop_timer(TimerKind::Clock);
            self.clock_running = false;
        }
        self.phase = Phase::Won;
        info!("all icons matched");
        host.announce_win(WIN_MESSAGE);
    }

    fn start_clock(&mut self, host: &mut impl SessionHost) {
        let now = host.now();
        self.started_at = Some(now);
        self.clock_running = true;
        host.start_timer(TimerKind::Clock, self.timing.clock_interval);
        host.show_elapsed(&format_elapsed(now, now, self.timing.clock_style));
    }

    fn set_cell(&mut self, index: usize, status: CellStatus, host: &mut impl SessionHost) {
        self.board.set_status(index, status);
        if let Some(cell) = self.board.cell(index) {
            host.show_cell(index, cell);
        }
    }
}
