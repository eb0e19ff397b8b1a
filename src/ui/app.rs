use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Once;

use gettextrs::gettext;
use gio::SimpleAction;
use gtk4 as gtk;
use gtk4::glib;
use gtk4::prelude::*;
use libadwaita as adw;
use tracing::info;

use crate::config::Settings;

use super::board::{CONTENT_MARGIN, build_board_grid};
use super::dialogs::{show_about_dialog, show_instructions_dialog};
use super::host::present_session;
use super::hud::{reset_elapsed, stop_all_timers};
use super::state::AppState;

pub const APP_ID: &str = "io.github.MatchingGame";

/// Drops the current session and deals a fresh board into the existing view.
pub(super) fn start_new_game(state: &Rc<RefCell<AppState>>) {
    {
        let mut st = state.borrow_mut();
        stop_all_timers(&mut st.view);
        st.reset_session();
        reset_elapsed(&st.view);
    }
    present_session(state);
    info!("new game dealt");
}

pub fn run(settings: Settings) -> glib::ExitCode {
    glib::set_prgname(Some(APP_ID));
    let app = adw::Application::builder().application_id(APP_ID).build();

    app.connect_activate(move |app| {
        if let Some(window) = app.active_window() {
            window.present();
            return;
        }
        load_css();

        let state = Rc::new(RefCell::new(AppState::new(settings.clone())));

        let instructions_action = SimpleAction::new("instructions", None);
        instructions_action.connect_activate({
            let app = app.clone();
            move |_, _| {
                show_instructions_dialog(&app);
            }
        });
        app.add_action(&instructions_action);

        let about_action = SimpleAction::new("about", None);
        about_action.connect_activate({
            let app = app.clone();
            move |_, _| {
                show_about_dialog(&app);
            }
        });
        app.add_action(&about_action);

        let quit_action = SimpleAction::new("quit", None);
        quit_action.connect_activate({
            let app = app.clone();
            move |_, _| app.quit()
        });
        app.add_action(&quit_action);
        app.set_accels_for_action("app.quit", &["<Control>q"]);

        let title = adw::WindowTitle::new(&gettext("Matching Game"), "");
        title.add_css_class("elapsed-subtitle");

        let header = adw::HeaderBar::builder().title_widget(&title).build();

        let restart_button = gtk::Button::builder()
            .icon_name("view-refresh-symbolic")
            .build();
        restart_button.set_tooltip_text(Some(&gettext("New Game")));
        restart_button.connect_clicked({
            let state = state.clone();
            move |_| {
                start_new_game(&state);
            }
        });
        header.pack_start(&restart_button);

        let menu_model = gio::Menu::new();
        menu_model.append(Some(&gettext("Instructions")), Some("app.instructions"));
        menu_model.append(Some(&gettext("About Matching Game")), Some("app.about"));
        menu_model.append(Some(&gettext("Quit")), Some("app.quit"));
        let menu_button = gtk::MenuButton::builder()
            .icon_name("open-menu-symbolic")
            .menu_model(&menu_model)
            .build();
        header.pack_end(&menu_button);

        let (board_grid, cell_buttons) = build_board_grid(&state);

        let board_frame = gtk::AspectFrame::new(0.5, 0.5, 1.0, false);
        board_frame.set_hexpand(true);
        board_frame.set_vexpand(true);
        board_frame.set_margin_top(CONTENT_MARGIN);
        board_frame.set_margin_bottom(CONTENT_MARGIN);
        board_frame.set_margin_start(CONTENT_MARGIN);
        board_frame.set_margin_end(CONTENT_MARGIN);
        board_frame.set_child(Some(&board_grid));

        let toolbar = adw::ToolbarView::new();
        toolbar.add_top_bar(&header);
        toolbar.set_content(Some(&board_frame));

        let win = adw::ApplicationWindow::builder()
            .application(app)
            .title(gettext("Matching Game"))
            .default_width(520)
            .default_height(600)
            .content(&toolbar)
            .build();
        win.set_size_request(320, 380);

        {
            let mut st = state.borrow_mut();
            st.view.window = Some(win.clone());
            st.view.title = Some(title);
            st.view.cell_buttons = Some(cell_buttons);
            reset_elapsed(&st.view);
        }

        win.connect_close_request({
            let state = state.clone();
            move |_| {
                if let Ok(mut st) = state.try_borrow_mut() {
                    stop_all_timers(&mut st.view);
                }
                glib::Propagation::Proceed
            }
        });

        present_session(&state);
        info!("game window ready");
        win.present();
    });

    app.run()
}

fn load_css() {
    static RESOURCES_INIT: Once = Once::new();
    RESOURCES_INIT.call_once(|| {
        gio::resources_register_include!("matching-game.gresource")
            .expect("failed to register embedded resources");
    });

    let Some(display) = gtk::gdk::Display::default() else {
        return;
    };

    let provider = gtk::CssProvider::new();
    provider.load_from_resource("/io/github/MatchingGame/style.css");
    gtk::style_context_add_provider_for_display(
        &display,
        &provider,
        gtk::STYLE_PROVIDER_PRIORITY_APPLICATION,
    );
}
