use std::cell::RefCell;
use std::rc::Weak;
use std::time::Duration;

use gtk4::glib;

use super::host::dispatch;
use super::session::{SessionEvent, TimerKind};
use super::state::{AppState, BoardView};

pub(super) fn update_elapsed(view: &BoardView, text: &str) {
    if let Some(title) = &view.title {
        title.set_subtitle(text);
    }
}

pub(super) fn reset_elapsed(view: &BoardView) {
    update_elapsed(view, &gettextrs::gettext("Click a square to start"));
}

fn timer_slot(view: &mut BoardView, timer: TimerKind) -> &mut Option<glib::SourceId> {
    match timer {
        TimerKind::Concealment => &mut view.concealment_handle,
        TimerKind::Clock => &mut view.clock_handle,
    }
}

pub(super) fn stop_timer(view: &mut BoardView, timer: TimerKind) {
    if let Some(handle) = timer_slot(view, timer).take() {
        handle.remove();
    }
}

pub(super) fn stop_all_timers(view: &mut BoardView) {
    stop_timer(view, TimerKind::Concealment);
    stop_timer(view, TimerKind::Clock);
}

pub(super) fn start_timer(
    view: &mut BoardView,
    state: Weak<RefCell<AppState>>,
    timer: TimerKind,
    interval: Duration,
) {
    stop_timer(view, timer);
    let handle = glib::timeout_add_local(interval, move || {
        let Some(state) = state.upgrade() else {
            return glib::ControlFlow::Break;
        };
        match timer {
            TimerKind::Concealment => {
                // The source ends itself here; forget the id so nothing removes it twice.
                state.borrow_mut().view.concealment_handle = None;
                dispatch(&state, SessionEvent::ConcealmentElapsed);
                glib::ControlFlow::Break
            }
            TimerKind::Clock => {
                dispatch(&state, SessionEvent::ClockTick);
                glib::ControlFlow::Continue
            }
        }
    });
    *timer_slot(view, timer) = Some(handle);
}
