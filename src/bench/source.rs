use crate::data::{Grid, GridError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Supplies the square grid to benchmark for each size.
pub trait GridSource {
    fn grid(&mut self, size: usize) -> Result<Grid, GridError>;
}

impl<F> GridSource for F
where
    F: FnMut(usize) -> Result<Grid, GridError>,
{
    fn grid(&mut self, size: usize) -> Result<Grid, GridError> {
        self(size)
    }
}

/// Uniform random grids, each cell alive with probability 1/2.
#[derive(Debug)]
pub struct RandomGrids<R> {
    rng: R,
}

impl<R: Rng> RandomGrids<R> {
    pub fn new(rng: R) -> RandomGrids<R> {
        RandomGrids { rng }
    }
}

impl RandomGrids<StdRng> {
    /// Seeded when a seed is given, otherwise drawn from entropy.
    pub fn from_seed(seed: Option<u64>) -> RandomGrids<StdRng> {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        RandomGrids::new(rng)
    }
}

impl<R: Rng> GridSource for RandomGrids<R> {
    fn grid(&mut self, size: usize) -> Result<Grid, GridError> {
        Grid::random(size, size, &mut self.rng)
    }
}
