/// Bar between two cells of a row
pub const VERTICAL: char = '│';

/// Bar drawn along a line between two rows
pub const HORIZONTAL: char = '─';

/// Position for lines inside the table
pub enum Position {
    Top,
    Middle,
    Bottom,
}

impl Position {
    /// Left, inner and right joints of a line at this position
    #[must_use]
    pub fn joints(&self) -> [char; 3] {
        match self {
            Self::Top => ['┌', '┬', '┐'],
            Self::Middle => ['├', '┼', '┤'],
            Self::Bottom => ['└', '┴', '┘'],
        }
    }
}
