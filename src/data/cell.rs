/// Liveness of a single cell. The discriminants are the cell's numeric value.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Clone, Copy)]
#[repr(u8)]
pub enum Status {
    Dead = 0,
    Alive = 1,
}

#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub struct Cell(pub Status);

impl Cell {
    pub const DEAD: Cell = Cell(Status::Dead);
    pub const ALIVE: Cell = Cell(Status::Alive);

    /// Wraps status
    pub fn alive(&self) -> bool {
        self.0 == Status::Alive
    }

    /// 0 for dead, 1 for alive
    #[inline]
    pub fn value(&self) -> u8 {
        self.0 as u8
    }

    /// Builds a cell from its numeric value, if that value is 0 or 1.
    pub fn from_value(value: u8) -> Option<Cell> {
        match value {
            0 => Some(Cell::DEAD),
            1 => Some(Cell::ALIVE),
            _ => None,
        }
    }

    // Returns the next status given a number of live neighbours
    // https://en.wikipedia.org/wiki/Conway%27s_Game_of_Life#Rules
    #[inline]
    pub fn next_status(&self, neighbours_cnt: u8) -> Status {
        match (self.0, neighbours_cnt) {
            (_, 3) => Status::Alive,
            (Status::Alive, 2) => Status::Alive,
            _ => Status::Dead,
        }
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Cell {
        if alive {
            Cell::ALIVE
        } else {
            Cell::DEAD
        }
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_next_status_alive() {
        let cell = Cell(Status::Alive);
        assert_eq!(cell.next_status(0), Status::Dead);
        assert_eq!(cell.next_status(1), Status::Dead);
        assert_eq!(cell.next_status(2), Status::Alive);
        assert_eq!(cell.next_status(3), Status::Alive);
        for n in 4..=8 {
            assert_eq!(cell.next_status(n), Status::Dead);
        }
    }

    #[test]
    fn test_next_status_dead() {
        let cell = Cell(Status::Dead);
        for n in 0..=8 {
            let expected = if n == 3 { Status::Alive } else { Status::Dead };
            assert_eq!(cell.next_status(n), expected, "{} neighbours", n);
        }
    }

    #[test]
    fn test_value_round_trips_through_from_value() {
        assert_eq!(Cell::DEAD.value(), 0);
        assert_eq!(Cell::ALIVE.value(), 1);
        assert_eq!(Cell::from_value(1), Some(Cell::ALIVE));
        assert_eq!(Cell::from_value(2), None);
    }
}
