use gtk4 as gtk;
use libadwaita as adw;
use rand::Rng;

use crate::config::Settings;
use crate::error::BoardError;

use super::session::Session;
use super::sound::SoundBank;

pub const CELL_COUNT: usize = 16;
pub const GRID_COLS: usize = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Icon {
    Bee,
    Mushroom,
    Bolt,
    Star,
    Anchor,
    Bell,
    Moon,
    Clover,
}

impl Icon {
    pub const ALL: [Icon; 8] = [
        Icon::Bee,
        Icon::Mushroom,
        Icon::Bolt,
        Icon::Star,
        Icon::Anchor,
        Icon::Bell,
        Icon::Moon,
        Icon::Clover,
    ];

    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Bee => "🐝",
            Icon::Mushroom => "🍄",
            Icon::Bolt => "⚡",
            Icon::Star => "⭐",
            Icon::Anchor => "⚓",
            Icon::Bell => "🔔",
            Icon::Moon => "🌙",
            Icon::Clover => "🍀",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellStatus {
    Hidden,
    Flipped,
    Matched,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    pub icon: Icon,
    pub status: CellStatus,
}

impl Cell {
    fn hidden(icon: Icon) -> Self {
        Cell {
            icon,
            status: CellStatus::Hidden,
        }
    }

    pub fn is_face_up(&self) -> bool {
        self.status != CellStatus::Hidden
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    pub fn shuffled() -> Self {
        Self::assign_icons(&mut rand::rng())
    }

    /// Deals every icon twice: each cell in turn draws a uniformly random
    /// entry from the remaining pool, face-down.
    pub fn assign_icons<R: Rng>(rng: &mut R) -> Self {
        let mut pool: Vec<Icon> = Icon::ALL.iter().flat_map(|&icon| [icon, icon]).collect();
        let cells = std::array::from_fn(|_| {
            let pick = rng.random_range(0..pool.len());
            Cell::hidden(pool.remove(pick))
        });
        debug_assert!(pool.is_empty());
        Board { cells }
    }

    pub fn from_layout(icons: [Icon; CELL_COUNT]) -> Result<Self, BoardError> {
        for icon in Icon::ALL {
            let count = icons.iter().filter(|&&candidate| candidate == icon).count();
            if count != 2 {
                return Err(BoardError::UnpairedIcon { icon, count });
            }
        }
        Ok(Board {
            cells: icons.map(Cell::hidden),
        })
    }

    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    pub fn cell(&self, index: usize) -> Option<&Cell> {
        self.cells.get(index)
    }

    pub(super) fn set_status(&mut self, index: usize, status: CellStatus) {
        if let Some(cell) = self.cells.get_mut(index) {
            cell.status = status;
        }
    }

    pub fn all_matched(&self) -> bool {
        self.cells.iter().all(|cell| cell.status == CellStatus::Matched)
    }
}

#[derive(Default)]
pub struct BoardView {
    pub window: Option<adw::ApplicationWindow>,
    pub title: Option<adw::WindowTitle>,
    pub cell_buttons: Option<[gtk::Button; CELL_COUNT]>,
    pub concealment_handle: Option<glib::SourceId>,
    pub clock_handle: Option<glib::SourceId>,
    pub sounds: SoundBank,
}

pub struct AppState {
    pub settings: Settings,
    pub session: Session,
    pub view: BoardView,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        let session = Session::new(Board::shuffled(), settings.timing());
        let sounds = SoundBank::load(&settings);
        AppState {
            settings,
            session,
            view: BoardView {
                sounds,
                ..BoardView::default()
            },
        }
    }

    pub fn reset_session(&mut self) {
        self.session = Session::new(Board::shuffled(), self.settings.timing());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn icon_counts(board: &Board) -> Vec<usize> {
        Icon::ALL
            .iter()
            .map(|icon| board.cells().iter().filter(|c| c.icon == *icon).count())
            .collect()
    }

    #[test]
    fn assign_icons_deals_every_icon_exactly_twice() {
        for seed in 0..64 {
            let board = Board::assign_icons(&mut StdRng::seed_from_u64(seed));
            assert_eq!(icon_counts(&board), vec![2; Icon::ALL.len()], "seed {seed}");
            assert!(board.cells().iter().all(|c| c.status == CellStatus::Hidden));
        }
    }

    #[test]
    fn assign_icons_is_deterministic_for_a_seed() {
        let a = Board::assign_icons(&mut StdRng::seed_from_u64(7));
        let b = Board::assign_icons(&mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }

    #[test]
    fn assign_icons_varies_layouts() {
        let first = Board::assign_icons(&mut StdRng::seed_from_u64(1));
        let differs = (2..32)
            .map(|seed| Board::assign_icons(&mut StdRng::seed_from_u64(seed)))
            .any(|board| board != first);
        assert!(differs);
    }

    #[test]
    fn from_layout_rejects_unpaired_icons() {
        let mut icons = [Icon::Bee; CELL_COUNT];
        for (idx, icon) in Icon::ALL.iter().enumerate() {
            icons[idx * 2] = *icon;
            icons[idx * 2 + 1] = *icon;
        }
        assert!(Board::from_layout(icons).is_ok());

        icons[1] = Icon::Moon;
        assert_eq!(
            Board::from_layout(icons),
            Err(BoardError::UnpairedIcon {
                icon: Icon::Bee,
                count: 1
            })
        );
    }

    #[test]
    fn glyphs_are_distinct() {
        let mut glyphs: Vec<&str> = Icon::ALL.iter().map(|icon| icon.glyph()).collect();
        glyphs.sort_unstable();
        glyphs.dedup();
        assert_eq!(glyphs.len(), Icon::ALL.len());
    }
}
