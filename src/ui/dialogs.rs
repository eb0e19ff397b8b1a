use std::cell::RefCell;
use std::rc::Weak;

use gettextrs::gettext;
use gtk4 as gtk;
use gtk4::prelude::*;
use libadwaita as adw;

use adw::prelude::*;

use super::app::start_new_game;
use super::state::{AppState, BoardView};

const RESPONSE_AGAIN: &str = "again";
const RESPONSE_QUIT: &str = "quit";

pub fn show_instructions_dialog(app: &adw::Application) -> adw::AlertDialog {
    let dialog = adw::AlertDialog::new(
        Some(&gettext("Instructions")),
        Some(&gettext(
            "Every icon on the board has a twin.\n\
Click two squares to turn them over.\n\
Matching icons stay up; others flip back after a moment.\n\
Match all the icons to win.",
        )),
    );
    dialog.add_response("ok", &gettext("Got it"));
    dialog.set_default_response(Some("ok"));
    dialog.set_close_response("ok");
    dialog.present(app.active_window().as_ref());
    dialog
}

pub fn show_about_dialog(app: &adw::Application) -> adw::AboutDialog {
    let dialog = adw::AboutDialog::builder()
        .application_name(gettext("Matching Game"))
        .application_icon("io.github.MatchingGame")
        .version(env!("CARGO_PKG_VERSION"))
        .comments(gettext("Find every pair of icons as fast as you can."))
        .build();
    dialog.add_legal_section("Matching Game", None, gtk::License::MitX11, None);
    dialog.present(app.active_window().as_ref());
    dialog
}

/// Shown once per session; the board takes no more input behind it.
pub(super) fn show_win_dialog(view: &BoardView, state: Weak<RefCell<AppState>>) {
    let dialog = adw::AlertDialog::new(
        Some(&gettext("Congratulations")),
        Some(&gettext("You matched all the icons!")),
    );
    dialog.add_response(RESPONSE_QUIT, &gettext("Quit"));
    dialog.add_response(RESPONSE_AGAIN, &gettext("Play Again"));
    dialog.set_response_appearance(RESPONSE_AGAIN, adw::ResponseAppearance::Suggested);
    dialog.set_default_response(Some(RESPONSE_AGAIN));
    dialog.set_close_response(RESPONSE_QUIT);
    dialog.connect_response(None, move |_, response| {
        let Some(state) = state.upgrade() else {
            return;
        };
        if response == RESPONSE_AGAIN {
            start_new_game(&state);
        } else {
            let window = state.borrow().view.window.clone();
            if let Some(window) = window {
                window.close();
            }
        }
    });
    dialog.present(view.window.as_ref());
}
