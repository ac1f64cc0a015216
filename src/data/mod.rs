//! Grid model and the single-generation transition.

pub mod cell;
pub mod grid;

pub use self::cell::{Cell, Status};
pub use self::grid::{step, Grid, GridError};
