use std::cell::RefCell;
use std::rc::Rc;

use gtk4 as gtk;
use gtk4::pango;
use gtk4::prelude::*;

use super::host::dispatch;
use super::session::SessionEvent;
use super::state::{AppState, CELL_COUNT, Cell, CellStatus, GRID_COLS};

pub const CONTENT_MARGIN: i32 = 12;
pub const TILE_GAP: i32 = 6;

const HIDDEN_FACE: &str = "?";

pub(super) fn render_cell(button: &gtk::Button, cell: &Cell) {
    button.remove_css_class("flipped");
    button.remove_css_class("matched");
    match cell.status {
        CellStatus::Hidden => {}
        CellStatus::Flipped => button.add_css_class("flipped"),
        CellStatus::Matched => button.add_css_class("matched"),
    }
    if let Some(child) = button.child() {
        child.queue_draw();
    }
}

fn draw_face(area: &gtk::DrawingArea, cr: &cairo::Context, width: i32, height: i32, cell: &Cell) {
    let face_up = cell.is_face_up();
    let text = if face_up { cell.icon.glyph() } else { HIDDEN_FACE };

    let min_dim = f64::from(width.min(height));
    let font_size = if face_up { min_dim * 0.46 } else { min_dim * 0.34 };

    cr.set_antialias(cairo::Antialias::Best);

    let layout = pangocairo::functions::create_layout(cr);
    let mut font_desc = pango::FontDescription::new();
    if face_up {
        font_desc.set_family("Noto Color Emoji, Apple Color Emoji, Segoe UI Emoji, sans");
    } else {
        font_desc.set_family("Cantarell, Noto Sans, sans");
        font_desc.set_weight(pango::Weight::Bold);
    }
    font_desc.set_size((font_size * f64::from(pango::SCALE)) as i32);
    layout.set_font_description(Some(&font_desc));
    layout.set_text(text);

    let fg = area.style_context().color();
    cr.set_source_rgba(
        f64::from(fg.red()),
        f64::from(fg.green()),
        f64::from(fg.blue()),
        f64::from(fg.alpha()),
    );

    let (text_width, text_height) = layout.pixel_size();
    cr.move_to(
        (f64::from(width) - f64::from(text_width)) / 2.0,
        (f64::from(height) - f64::from(text_height)) / 2.0,
    );
    pangocairo::functions::show_layout(cr, &layout);
}

fn build_cell_button(state: &Rc<RefCell<AppState>>, index: usize) -> gtk::Button {
    let button = gtk::Button::builder()
        .css_classes(vec!["matching-cell"])
        .hexpand(true)
        .vexpand(true)
        .build();

    let drawing_area = gtk::DrawingArea::builder()
        .hexpand(true)
        .vexpand(true)
        .build();

    let state_draw = Rc::downgrade(state);
    drawing_area.set_draw_func(move |area, cr, width, height| {
        let Some(state) = state_draw.upgrade() else {
            return;
        };
        let Ok(st) = state.try_borrow() else {
            return;
        };
        if let Some(cell) = st.session.board().cell(index) {
            draw_face(area, cr, width, height, cell);
        }
    });
    button.set_child(Some(&drawing_area));

    let state_click = Rc::downgrade(state);
    button.connect_clicked(move |_| {
        if let Some(state) = state_click.upgrade() {
            dispatch(&state, SessionEvent::CellClicked(index));
        }
    });

    button
}

/// Lays the 16 cells out 4×4 and hands back the fixed set of cell handles.
pub(super) fn build_board_grid(
    state: &Rc<RefCell<AppState>>,
) -> (gtk::Grid, [gtk::Button; CELL_COUNT]) {
    let grid = gtk::Grid::new();
    grid.add_css_class("matching-board");
    grid.set_row_spacing(TILE_GAP as u32);
    grid.set_column_spacing(TILE_GAP as u32);
    grid.set_row_homogeneous(true);
    grid.set_column_homogeneous(true);
    grid.set_hexpand(true);
    grid.set_vexpand(true);

    let buttons: [gtk::Button; CELL_COUNT] =
        std::array::from_fn(|index| build_cell_button(state, index));

    for (index, button) in buttons.iter().enumerate() {
        let frame = gtk::AspectFrame::builder()
            .ratio(1.0)
            .obey_child(false)
            .hexpand(true)
            .vexpand(true)
            .build();
        frame.set_child(Some(button));
        let col = (index % GRID_COLS) as i32;
        let row = (index / GRID_COLS) as i32;
        grid.attach(&frame, col, row, 1, 1);
    }

    (grid, buttons)
}
