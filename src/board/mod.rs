//! Board storage: a fixed set of addressable cells.
//!
//! The board knows nothing about matching or scoring. It owns every cell,
//! answers "what is at (x, y)", and offers the primitive mutations the
//! rules are built from: place, take, swap, gravity, refill and reseed.
//!
//! ## Cells
//!
//! A coordinate inside the bounding rectangle is either *absent* (a hole in
//! an irregular board) or a present [`Cell`], which is `Empty` or
//! `Occupied(token)`. Absent cells behave exactly like empty ones for every
//! rule, except that nothing can ever be placed in them.
//!
//! ## Token ownership
//!
//! A token leaves a cell only through [`Board::take`] (or a bulk operation
//! built on it), and [`Board::place`] refuses an occupied cell. A cell
//! therefore always transitions `Occupied -> Empty -> Occupied`, never
//! overwriting a token in place.

mod gravity;
mod seed;

pub use gravity::CellMove;
pub use seed::SeedReport;

use serde::{Deserialize, Serialize};

use crate::core::{BoardLayout, Coord, Token};

/// Contents of a present cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Occupied(Token),
}

impl Cell {
    /// The token in this cell, if any.
    #[must_use]
    pub const fn token(self) -> Option<Token> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(token) => Some(token),
        }
    }

    /// True if the cell holds no token.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }
}

/// The grid of cells for one session.
///
/// Storage is a dense `width * height` vector where `None` marks an absent
/// cell. Present coordinates are cached in row-major order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    width: u32,
    height: u32,
    slots: Vec<Option<Cell>>,
    coords: Vec<Coord>,
    max_x: i32,
    max_y: i32,
}

impl Board {
    /// Create an empty board with the given layout.
    #[must_use]
    pub fn new(layout: &BoardLayout) -> Self {
        let coords = layout.cells();
        let mut slots = vec![None; layout.width as usize * layout.height as usize];
        for coord in &coords {
            slots[(coord.y as u32 * layout.width + coord.x as u32) as usize] = Some(Cell::Empty);
        }
        let max_x = coords.iter().map(|c| c.x).max().unwrap_or(-1);
        let max_y = coords.iter().map(|c| c.y).max().unwrap_or(-1);

        Self {
            width: layout.width,
            height: layout.height,
            slots,
            coords,
            max_x,
            max_y,
        }
    }

    /// Build a board from text rows, top row first.
    ///
    /// - `A`..`Z`: a cell holding `Token(0)`..`Token(25)`
    /// - `.`: an empty cell
    /// - `#` or space: no cell
    ///
    /// Rows shorter than the longest row are padded with absent cells.
    ///
    /// ```
    /// use rust_match3::board::Board;
    /// use rust_match3::core::{Coord, Token};
    ///
    /// let board = Board::from_rows(&["AB.", "#CA"]);
    /// assert_eq!(board.token(Coord::new(1, 0)), Some(Token::new(1)));
    /// assert!(board.is_empty_cell(Coord::new(2, 0)));
    /// assert!(!board.contains(Coord::new(0, 1)));
    /// ```
    ///
    /// # Panics
    ///
    /// Panics on any other character.
    #[must_use]
    pub fn from_rows(rows: &[&str]) -> Self {
        let height = rows.len() as u32;
        let width = rows.iter().map(|r| r.chars().count()).max().unwrap_or(0) as u32;

        let mut layout = BoardLayout::rect(width, height);
        for (y, row) in rows.iter().enumerate() {
            let chars: Vec<char> = row.chars().collect();
            for x in 0..width as usize {
                if matches!(chars.get(x), None | Some(' ') | Some('#')) {
                    layout = layout.with_hole(Coord::new(x as i32, y as i32));
                }
            }
        }

        let mut board = Self::new(&layout);
        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().enumerate() {
                let coord = Coord::new(x as i32, y as i32);
                match ch {
                    'A'..='Z' => {
                        board.place(coord, Token::new(ch as u8 - b'A'));
                    }
                    '.' | ' ' | '#' => {}
                    other => panic!("unexpected board character {other:?}"),
                }
            }
        }
        board
    }

    /// Width of the bounding rectangle.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height of the bounding rectangle.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Largest `x` of any present cell (`-1` for a board with no cells).
    #[must_use]
    pub fn max_x(&self) -> i32 {
        self.max_x
    }

    /// Largest `y` of any present cell (`-1` for a board with no cells).
    #[must_use]
    pub fn max_y(&self) -> i32 {
        self.max_y
    }

    /// Present coordinates in row-major order.
    #[must_use]
    pub fn coords(&self) -> &[Coord] {
        &self.coords
    }

    /// The layout this board was built with, holes listed row-major.
    #[must_use]
    pub fn layout(&self) -> BoardLayout {
        let mut layout = BoardLayout::rect(self.width, self.height);
        for y in 0..self.height as i32 {
            for x in 0..self.width as i32 {
                let coord = Coord::new(x, y);
                if !self.contains(coord) {
                    layout.holes.push(coord);
                }
            }
        }
        layout
    }

    /// True if this board has exactly the cells `layout` describes.
    #[must_use]
    pub fn fits(&self, layout: &BoardLayout) -> bool {
        self.width == layout.width && self.height == layout.height && self.coords == layout.cells()
    }

    fn index(&self, coord: Coord) -> Option<usize> {
        if coord.x < 0 || coord.y < 0 || coord.x as u32 >= self.width || coord.y as u32 >= self.height {
            return None;
        }
        Some((coord.y as u32 * self.width + coord.x as u32) as usize)
    }

    /// True if a cell exists at `coord`.
    #[must_use]
    pub fn contains(&self, coord: Coord) -> bool {
        self.cell(coord).is_some()
    }

    /// The cell at `coord`, or `None` if absent.
    #[must_use]
    pub fn cell(&self, coord: Coord) -> Option<Cell> {
        self.index(coord).and_then(|i| self.slots[i])
    }

    /// The token at `coord`. `None` for absent and empty cells alike.
    #[must_use]
    pub fn token(&self, coord: Coord) -> Option<Token> {
        self.cell(coord).and_then(Cell::token)
    }

    /// True if a present cell at `coord` holds no token.
    #[must_use]
    pub fn is_empty_cell(&self, coord: Coord) -> bool {
        self.cell(coord) == Some(Cell::Empty)
    }

    /// Put a token into an empty cell.
    ///
    /// Returns false (and changes nothing) if the cell is absent or occupied.
    pub fn place(&mut self, coord: Coord, token: Token) -> bool {
        match self.index(coord) {
            Some(i) if self.slots[i] == Some(Cell::Empty) => {
                self.slots[i] = Some(Cell::Occupied(token));
                true
            }
            _ => false,
        }
    }

    /// Remove and return the token at `coord`, leaving the cell empty.
    pub fn take(&mut self, coord: Coord) -> Option<Token> {
        let i = self.index(coord)?;
        let token = self.slots[i]?.token()?;
        self.slots[i] = Some(Cell::Empty);
        Some(token)
    }

    /// Exchange the contents of two present cells.
    ///
    /// Returns false (and changes nothing) if either cell is absent.
    pub fn swap(&mut self, a: Coord, b: Coord) -> bool {
        match (self.index(a), self.index(b)) {
            (Some(i), Some(j)) if self.slots[i].is_some() && self.slots[j].is_some() => {
                self.slots.swap(i, j);
                true
            }
            _ => false,
        }
    }

    /// Empty every cell, returning the removed tokens in row-major order.
    pub fn clear(&mut self) -> Vec<(Coord, Token)> {
        let coords = self.coords.clone();
        coords
            .into_iter()
            .filter_map(|c| self.take(c).map(|t| (c, t)))
            .collect()
    }

    /// Occupied cells of column `x`, top to bottom.
    #[must_use]
    pub fn occupied_in_column(&self, x: i32) -> Vec<Coord> {
        (0..=self.max_y)
            .map(|y| Coord::new(x, y))
            .filter(|c| self.token(*c).is_some())
            .collect()
    }

    /// Occupied cells of row `y`, left to right.
    #[must_use]
    pub fn occupied_in_row(&self, y: i32) -> Vec<Coord> {
        (0..=self.max_x)
            .map(|x| Coord::new(x, y))
            .filter(|c| self.token(*c).is_some())
            .collect()
    }

    /// Present cells that hold no token.
    #[must_use]
    pub fn empty_cells(&self) -> Vec<Coord> {
        self.coords.iter().copied().filter(|c| self.is_empty_cell(*c)).collect()
    }

    /// Every present cell with its token, in row-major order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<(Coord, Option<Token>)> {
        self.coords.iter().map(|&c| (c, self.token(c))).collect()
    }
}

impl std::fmt::Display for Board {
    /// Renders one line per row using the `from_rows` alphabet.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for y in 0..self.height as i32 {
            for x in 0..self.width as i32 {
                let ch = match self.cell(Coord::new(x, y)) {
                    None => '#',
                    Some(Cell::Empty) => '.',
                    Some(Cell::Occupied(t)) if t.raw() < 26 => (b'A' + t.raw()) as char,
                    Some(Cell::Occupied(_)) => '?',
                };
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(&BoardLayout::rect(3, 2));

        assert_eq!(board.coords().len(), 6);
        assert_eq!(board.max_x(), 2);
        assert_eq!(board.max_y(), 1);
        assert_eq!(board.empty_cells().len(), 6);
    }

    #[test]
    fn test_max_derived_from_present_cells() {
        let layout = BoardLayout::rect(3, 2)
            .with_hole(Coord::new(2, 0))
            .with_hole(Coord::new(2, 1));
        let board = Board::new(&layout);

        assert_eq!(board.max_x(), 1);
        assert_eq!(board.width(), 3);
    }

    #[test]
    fn test_layout_and_fits() {
        let board = Board::from_rows(&["A#B", "#CA"]);
        let layout = board.layout();

        assert_eq!(layout.holes, vec![Coord::new(1, 0), Coord::new(0, 1)]);
        assert!(board.fits(&layout));
        // Hole order does not matter.
        assert!(board.fits(&BoardLayout::rect(3, 2).with_hole(Coord::new(0, 1)).with_hole(Coord::new(1, 0))));
        assert!(!board.fits(&BoardLayout::rect(3, 2)));
        assert!(!board.fits(&BoardLayout::rect(4, 2).with_hole(Coord::new(1, 0)).with_hole(Coord::new(0, 1))));
    }

    #[test]
    fn test_place_refuses_occupied_and_absent() {
        let mut board = Board::from_rows(&["A.#"]);

        assert!(!board.place(Coord::new(0, 0), Token::new(2)));
        assert_eq!(board.token(Coord::new(0, 0)), Some(Token::new(0)));

        assert!(!board.place(Coord::new(2, 0), Token::new(2)));
        assert!(!board.place(Coord::new(-1, 0), Token::new(2)));

        assert!(board.place(Coord::new(1, 0), Token::new(2)));
        assert_eq!(board.token(Coord::new(1, 0)), Some(Token::new(2)));
    }

    #[test]
    fn test_take_then_place() {
        let mut board = Board::from_rows(&["AB"]);

        assert_eq!(board.take(Coord::new(0, 0)), Some(Token::new(0)));
        assert!(board.is_empty_cell(Coord::new(0, 0)));
        assert_eq!(board.take(Coord::new(0, 0)), None);
        assert!(board.place(Coord::new(0, 0), Token::new(1)));
    }

    #[test]
    fn test_swap() {
        let mut board = Board::from_rows(&["AB#"]);

        assert!(board.swap(Coord::new(0, 0), Coord::new(1, 0)));
        assert_eq!(board.to_string(), "BA#\n");

        assert!(!board.swap(Coord::new(1, 0), Coord::new(2, 0)));
        assert_eq!(board.to_string(), "BA#\n");
    }

    #[test]
    fn test_rows_and_columns_skip_empty() {
        let board = Board::from_rows(&["A.C", "DEF"]);

        assert_eq!(board.occupied_in_row(0), vec![Coord::new(0, 0), Coord::new(2, 0)]);
        assert_eq!(board.occupied_in_column(1), vec![Coord::new(1, 1)]);
    }

    #[test]
    fn test_clear() {
        let mut board = Board::from_rows(&["AB", ".C"]);
        let removed = board.clear();

        assert_eq!(removed.len(), 3);
        assert_eq!(removed[0], (Coord::new(0, 0), Token::new(0)));
        assert_eq!(board.empty_cells().len(), 4);
    }

    #[test]
    fn test_display_round_trip() {
        let rows = ["AB#", ".CD"];
        let board = Board::from_rows(&rows);

        assert_eq!(board.to_string(), "AB#\n.CD\n");
    }
}
