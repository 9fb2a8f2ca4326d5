use crossterm::style::{Color, StyledContent, Stylize};

use std::fmt;

/// State of a single cell in the search grid, with its numeric matrix code.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum GridCell {
    /// An open cell the searcher may enter.
    #[default]
    Free = 0,
    /// A temporary obstacle placed by the searcher.
    Blocked = 1,
    /// The cell the search starts from.
    Start = 2,
}

impl GridCell {
    /// The width of each cell when rendered, in character widths.
    pub const CELL_WIDTH: u16 = 2;

    pub fn styled(self) -> StyledContent<&'static str> {
        match self {
            GridCell::Free => "  ".with(Color::Reset),
            GridCell::Blocked => "⬜".with(Color::White),
            GridCell::Start => "🟩".with(Color::Green),
        }
    }
}

/// Glyphs drawn on top of the grid when rendering a found path.
pub fn route_glyph() -> StyledContent<&'static str> {
    "* ".with(Color::Yellow)
}

pub fn goal_glyph() -> StyledContent<&'static str> {
    "🟥".with(Color::Red)
}

impl fmt::Display for GridCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let styled_symbol = self.styled();

        #[cfg(debug_assertions)]
        {
            use unicode_width::UnicodeWidthStr;
            assert_eq!(
                styled_symbol.content().width(),
                GridCell::CELL_WIDTH as usize,
                "Each cell must occupy exactly two character widths."
            );
        }

        write!(f, "{}", styled_symbol)
    }
}
