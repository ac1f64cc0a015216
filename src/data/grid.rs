use super::cell::{Cell, Status};
use rand::Rng;
use std::fmt;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum GridError {
    #[error("grid dimensions must be non-zero, got {width} x {height}")]
    Empty { width: usize, height: usize },
    #[error("grid of {width} x {height} cells does not fit in memory")]
    TooLarge { width: usize, height: usize },
    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("cell ({i}, {j}) holds {value}; cells must be 0 or 1")]
    InvalidCell { i: usize, j: usize, value: u8 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    /* Addressed by from-zero (i, j) notation, where i is row number, j is column number
     * such that given the following shows coordinates for cells in a 3 x 3 grid:
     *
     * [ (0,0) (0,1) (0,2) ]
     * [ (1,0) (1,1) (1,2) ]
     * [ (2,0) (2,1) (2,2) ]
     *
     * Cells are stored row-major in a single buffer, so (i, j) lives at i * width + j.
     */
    cells: Vec<Cell>,
    width: usize,
    height: usize,
}

impl Grid {
    /// A grid where every cell is independently alive with probability 1/2, drawn
    /// from the thread-local generator.
    pub fn new(width: usize, height: usize) -> Result<Grid, GridError> {
        Grid::random(width, height, &mut rand::thread_rng())
    }

    /// Same as `new`, but draws from the given generator so callers can seed it.
    pub fn random<R: Rng + ?Sized>(
        width: usize,
        height: usize,
        rng: &mut R,
    ) -> Result<Grid, GridError> {
        let area = checked_area(width, height)?;
        let cells = (0..area).map(|_| Cell::from(rng.gen::<bool>())).collect();
        Ok(Grid {
            cells,
            width,
            height,
        })
    }

    pub fn dead(width: usize, height: usize) -> Result<Grid, GridError> {
        Grid::filled(width, height, Cell::DEAD)
    }

    pub fn alive(width: usize, height: usize) -> Result<Grid, GridError> {
        Grid::filled(width, height, Cell::ALIVE)
    }

    fn filled(width: usize, height: usize, cell: Cell) -> Result<Grid, GridError> {
        let area = checked_area(width, height)?;
        Ok(Grid {
            cells: vec![cell; area],
            width,
            height,
        })
    }

    /// Builds a grid from rows of 0/1 values. Every row must have the same length.
    pub fn from_rows(rows: Vec<Vec<u8>>) -> Result<Grid, GridError> {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.len());
        let area = checked_area(width, height)?;
        let mut cells = Vec::with_capacity(area);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != width {
                return Err(GridError::Ragged {
                    row: i,
                    expected: width,
                    found: row.len(),
                });
            }
            for (j, value) in row.into_iter().enumerate() {
                let cell = Cell::from_value(value).ok_or(GridError::InvalidCell { i, j, value })?;
                cells.push(cell);
            }
        }
        Ok(Grid {
            cells,
            width,
            height,
        })
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn area(&self) -> usize {
        self.cells.len()
    }

    pub fn get(&self, i: usize, j: usize) -> Option<&Cell> {
        if i < self.height && j < self.width {
            self.cells.get(i * self.width + j)
        } else {
            None
        }
    }

    // Read only view of the grid, one slice per row
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width)
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.alive()).count()
    }

    /// Number of live cells among the eight toroidal neighbours of (i, j).
    ///
    /// In a dimension of size 1 the previous and next index both wrap to 0, so such
    /// a cell counts itself (and its own column or row) more than once.
    pub fn live_neighbours(&self, i: usize, j: usize) -> Option<u8> {
        if i >= self.height || j >= self.width {
            return None;
        }
        let (up, row, down) = self.neighbour_rows(i);
        let (j_left, j_right) = (wrap_prev(j, self.width), wrap_next(j, self.width));
        Some(neighbour_sum(up, row, down, j_left, j, j_right))
    }

    /// Computes the next generation into a freshly allocated grid, leaving `self`
    /// untouched. The edges wrap, so the grid behaves as a torus.
    pub fn step(&self) -> Grid {
        let width = self.width;
        let mut next = Vec::with_capacity(self.cells.len());
        for i in 0..self.height {
            let (up, row, down) = self.neighbour_rows(i);
            for j in 0..width {
                let j_left = wrap_prev(j, width);
                let j_right = wrap_next(j, width);
                let alives = neighbour_sum(up, row, down, j_left, j, j_right);
                next.push(Cell(row[j].next_status(alives)));
            }
        }
        Grid {
            cells: next,
            width,
            height: self.height,
        }
    }

    // The rows above, at and below row i, wrapping at the edges
    #[inline]
    fn neighbour_rows(&self, i: usize) -> (&[Cell], &[Cell], &[Cell]) {
        let i_up = wrap_prev(i, self.height);
        let i_down = wrap_next(i, self.height);
        (self.row(i_up), self.row(i), self.row(i_down))
    }

    #[inline]
    fn row(&self, i: usize) -> &[Cell] {
        &self.cells[i * self.width..(i + 1) * self.width]
    }
}

/// Free-standing form of `Grid::step`.
pub fn step(grid: &Grid) -> Grid {
    grid.step()
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for cell in row {
                let c = match cell.0 {
                    Status::Alive => '#',
                    Status::Dead => '.',
                };
                write!(f, "{}", c)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[inline]
fn neighbour_sum(up: &[Cell], row: &[Cell], down: &[Cell], j_left: usize, j: usize, j_right: usize) -> u8 {
    up[j_left].value()
        + up[j].value()
        + up[j_right].value()
        + row[j_left].value()
        + row[j_right].value()
        + down[j_left].value()
        + down[j].value()
        + down[j_right].value()
}

#[inline]
fn wrap_prev(idx: usize, len: usize) -> usize {
    match idx {
        0 => len - 1,
        _ => idx - 1,
    }
}

#[inline]
fn wrap_next(idx: usize, len: usize) -> usize {
    match idx {
        _ if idx + 1 == len => 0,
        _ => idx + 1,
    }
}

fn checked_area(width: usize, height: usize) -> Result<usize, GridError> {
    if width == 0 || height == 0 {
        return Err(GridError::Empty { width, height });
    }
    width
        .checked_mul(height)
        .filter(|&area| area <= isize::MAX as usize / std::mem::size_of::<Cell>())
        .ok_or(GridError::TooLarge { width, height })
}
