use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;

use chrono::{Local, NaiveDateTime};
use tracing::{debug, info};

use super::board::render_cell;
use super::dialogs::show_win_dialog;
use super::hud::{start_timer, stop_timer, update_elapsed};
use super::session::{SessionEvent, SessionHost, SoundCue, TimerKind};
use super::state::{AppState, BoardView, Cell};

/// Widgets and timer sources seen through the controller's eyes.
struct GtkHost<'a> {
    view: &'a mut BoardView,
    state: Weak<RefCell<AppState>>,
}

impl SessionHost for GtkHost<'_> {
    fn show_cell(&mut self, index: usize, cell: &Cell) {
        if let Some(button) = self
            .view
            .cell_buttons
            .as_ref()
            .and_then(|buttons| buttons.get(index))
        {
            render_cell(button, cell);
        }
    }

    fn play_sound(&mut self, cue: SoundCue) {
        self.view.sounds.play(cue);
    }

    fn start_timer(&mut self, timer: TimerKind, interval: Duration) {
        start_timer(self.view, self.state.clone(), timer, interval);
    }

    fn stop_timer(&mut self, timer: TimerKind) {
        stop_timer(self.view, timer);
    }

    fn show_elapsed(&mut self, text: &str) {
        update_elapsed(self.view, text);
    }

    fn announce_win(&mut self, message: &str) {
        info!(message, "announcing win");
        show_win_dialog(self.view, self.state.clone());
    }

    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

pub(super) fn dispatch(state: &Rc<RefCell<AppState>>, event: SessionEvent) {
    let mut st = state.borrow_mut();
    let AppState { session, view, .. } = &mut *st;
    debug!(?event, phase = ?session.phase(), "dispatch");
    let mut host = GtkHost {
        view,
        state: Rc::downgrade(state),
    };
    session.handle(event, &mut host);
}

pub(super) fn present_session(state: &Rc<RefCell<AppState>>) {
    let mut st = state.borrow_mut();
    let AppState { session, view, .. } = &mut *st;
    let mut host = GtkHost {
        view,
        state: Rc::downgrade(state),
    };
    session.present(&mut host);
}
